use std::path::PathBuf;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use super::error::ExposeError;

/// User configuration loaded from `~/.config/goexpose/config.toml`.
///
/// The file is optional; when it is missing the defaults apply. It only
/// serves as the last fallback for the workspace path-list, after the
/// `--gopath` flag and the environment variables.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    /// Workspace path-list used when neither the flag nor the environment
    /// provides one.
    pub gopath: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self, ExposeError> {
        match Self::config_path() {
            Some(path) if path.exists() => {
                let content = std::fs::read_to_string(&path)
                    .map_err(|e| ExposeError::ConfigRead(Box::new(e)))?;
                toml::from_str(&content).map_err(|e| ExposeError::ConfigRead(Box::new(e)))
            }
            _ => Ok(Self::default()),
        }
    }

    pub fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "goexpose").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_gopath_key() {
        let config: Config = toml::from_str("gopath = \"/ws\"").unwrap();
        assert_eq!(config.gopath.as_deref(), Some("/ws"));
    }

    #[test]
    fn empty_file_yields_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.gopath.is_none());
    }
}
