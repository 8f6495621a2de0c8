// Data path utilities.
// Resolves per-user locations for the models file, config, and log.

use std::path::PathBuf;

use directories::ProjectDirs;

/// File name of the models dataset inside the data directory.
pub const MODELS_FILE: &str = "models.json";

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "aam")
}

/// Get the base data directory (~/.local/share/aam on Linux).
pub fn data_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.data_dir().to_path_buf())
}

/// Get the base config directory (~/.config/aam on Linux).
pub fn config_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().to_path_buf())
}

/// Path to the models dataset.
pub fn models_path() -> Option<PathBuf> {
    data_dir().map(|dir| dir.join(MODELS_FILE))
}

/// Path to the configuration file.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.json"))
}

/// Path to the log file.
pub fn log_path() -> Option<PathBuf> {
    data_dir().map(|dir| dir.join("aam.log"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_share_project_dirs() {
        // Headless CI may lack a home directory, in which case all are None.
        let Some(data) = data_dir() else {
            assert!(models_path().is_none());
            return;
        };

        assert!(models_path().unwrap().ends_with(MODELS_FILE));
        assert!(models_path().unwrap().starts_with(&data));
        assert!(log_path().unwrap().ends_with("aam.log"));
        assert!(config_path().unwrap().ends_with("config.json"));
    }
}
