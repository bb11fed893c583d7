//! Simulator configuration.
//!
//! Loaded from `~/.oumi-sim/config.toml` when present. Every key is
//! optional; a missing file means built-in defaults.
//!
//! ```toml
//! endpoint = "http://localhost:3000/api/status"
//! pause-secs = 2
//! timeout-secs = 10
//! ```

use std::path::{Path, PathBuf};
use std::{fs, io};

use serde::Deserialize;

use crate::notify::{self, MAX_TIMEOUT_SECS};

/// Errors that can occur while loading the config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("invalid config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("invalid endpoint in {}: {reason}", path.display())]
    Endpoint { path: PathBuf, reason: String },

    #[error(
        "timeout-secs = {value} in {} is out of range, expected 1 to {max}",
        path.display(),
        max = MAX_TIMEOUT_SECS
    )]
    Timeout { path: PathBuf, value: u64 },
}

/// Simulator configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Config {
    /// Status endpoint to post updates to.
    pub endpoint: Option<String>,

    /// Seconds to pause between phases.
    pub pause_secs: Option<u64>,

    /// Request timeout in seconds, 1 to [`MAX_TIMEOUT_SECS`].
    /// Unset keeps the HTTP client default.
    pub timeout_secs: Option<u64>,
}

impl Config {
    /// Load config from `~/.oumi-sim/config.toml`.
    ///
    /// Falls back to defaults when the home directory or the file is missing.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load config from a specific file. A missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = match fs::read_to_string(path) {
            Ok(s) => s,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let config: Self = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        if let Some(endpoint) = &config.endpoint {
            notify::parse_endpoint(endpoint).map_err(|reason| ConfigError::Endpoint {
                path: path.to_path_buf(),
                reason,
            })?;
        }

        if let Some(value) = config.timeout_secs
            && !(1..=MAX_TIMEOUT_SECS).contains(&value)
        {
            return Err(ConfigError::Timeout {
                path: path.to_path_buf(),
                value,
            });
        }

        Ok(config)
    }

    /// The config file path: `~/.oumi-sim/config.toml`.
    pub fn path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".oumi-sim").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::TempDir;

    fn write_config(contents: &str) -> (TempDir, PathBuf) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, contents).unwrap();
        (dir, path)
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();

        assert_eq!(config, Config::default());
    }

    #[test]
    fn reads_all_keys() {
        let (_dir, path) = write_config(
            "endpoint = \"http://dashboard.local:8080/api/status\"\n\
             pause-secs = 5\n\
             timeout-secs = 3\n",
        );
        let config = Config::load_from(&path).unwrap();

        assert_eq!(
            config.endpoint.as_deref(),
            Some("http://dashboard.local:8080/api/status")
        );
        assert_eq!(config.pause_secs, Some(5));
        assert_eq!(config.timeout_secs, Some(3));
    }

    #[test]
    fn partial_file_leaves_other_keys_unset() {
        let (_dir, path) = write_config("pause-secs = 0\n");
        let config = Config::load_from(&path).unwrap();

        assert_eq!(config.endpoint, None);
        assert_eq!(config.pause_secs, Some(0));
        assert_eq!(config.timeout_secs, None);
    }

    #[test]
    fn invalid_toml_fails() {
        let (_dir, path) = write_config("pause-secs = \"soon\"\n");
        let err = Config::load_from(&path).unwrap_err();

        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn unknown_key_fails() {
        let (_dir, path) = write_config("retries = 3\n");
        let err = Config::load_from(&path).unwrap_err();

        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn out_of_range_timeout_fails() {
        for value in [0, MAX_TIMEOUT_SECS + 1, u64::MAX] {
            let (_dir, path) = write_config(&format!("timeout-secs = {value}\n"));
            let err = Config::load_from(&path).unwrap_err();

            assert!(
                matches!(err, ConfigError::Timeout { value: v, .. } if v == value),
                "accepted timeout-secs = {value}"
            );
        }
    }

    #[test]
    fn invalid_endpoint_fails() {
        let (_dir, path) = write_config("endpoint = \"ftp://localhost/status\"\n");
        let err = Config::load_from(&path).unwrap_err();

        assert!(matches!(err, ConfigError::Endpoint { .. }));
        assert!(err.to_string().contains("ftp"));
    }
}
