// User configuration.
// Loaded from config.json in the config directory; every field has a default.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{AamError, Result};
use crate::state::MAX_TOAST_SECONDS;
use crate::store::{self, paths};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Models data file; defaults to models.json in the data directory.
    pub data_file: Option<PathBuf>,
    /// How long toast notifications stay visible.
    pub toast_seconds: u64,
    /// Keep selected rows when switching between the New and Archived tabs.
    pub keep_selection_across_tabs: bool,
    /// Enable mouse capture.
    pub mouse: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: None,
            toast_seconds: 4,
            keep_selection_across_tabs: false,
            mouse: true,
        }
    }
}

impl Config {
    /// Load from an explicit path, or the default location. A missing file
    /// yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => match paths::config_path() {
                Some(p) => p,
                None => return Ok(Self::default()),
            },
        };

        let config = store::read_json::<Config>(&path)?.unwrap_or_default();
        config.validate()?;
        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if !(1..=MAX_TOAST_SECONDS).contains(&self.toast_seconds) {
            return Err(AamError::Config(format!(
                "toast_seconds must be between 1 and {}",
                MAX_TOAST_SECONDS
            )));
        }
        Ok(())
    }

    /// Resolve the models data file.
    pub fn data_path(&self) -> Option<PathBuf> {
        self.data_file.clone().or_else(paths::models_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load(Some(&temp_dir.path().join("config.json"))).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        fs::write(&path, r#"{ "keep_selection_across_tabs": true, "data_file": "/tmp/m.json" }"#)
            .unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert!(config.keep_selection_across_tabs);
        assert_eq!(config.toast_seconds, 4);
        assert_eq!(config.data_path(), Some(PathBuf::from("/tmp/m.json")));
    }

    #[test]
    fn test_zero_toast_seconds_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        fs::write(&path, r#"{ "toast_seconds": 0 }"#).unwrap();

        assert!(matches!(Config::load(Some(&path)), Err(AamError::Config(_))));
    }

    #[test]
    fn test_oversized_toast_seconds_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");

        for value in ["3601", "100000000000000000", "18446744073709551615"] {
            fs::write(&path, format!(r#"{{ "toast_seconds": {} }}"#, value)).unwrap();
            assert!(matches!(Config::load(Some(&path)), Err(AamError::Config(_))));
        }

        fs::write(&path, r#"{ "toast_seconds": 3600 }"#).unwrap();
        assert_eq!(Config::load(Some(&path)).unwrap().toast_seconds, 3600);
    }
}
