// Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

/// Browse and manage Auto Analytical Models in the terminal
#[derive(Debug, Parser)]
#[command(name = "aam", about, version)]
pub struct Cli {
    /// Models data file (JSON array of records)
    #[arg(short, long)]
    pub data: Option<PathBuf>,

    /// Configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write the sample dataset to the data file and exit
    #[arg(long)]
    pub init: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags() {
        let cli = Cli::parse_from(["aam", "--data", "models.json", "--init"]);
        assert_eq!(cli.data, Some(PathBuf::from("models.json")));
        assert!(cli.init);
        assert!(cli.config.is_none());
    }
}
