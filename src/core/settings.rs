//! suseconnect configuration
//!
//! Reads settings from `/etc/suseconnect.toml` (or the file named by
//! `SUSECONNECT_CONFIG`). A missing file means defaults.
//!
//! Environment variables can override individual settings:
//! - `SUSECONNECT_FS_ROOT` - Operate on an alternate filesystem root

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::defaults::{CONFIG_FILE, CREDENTIALS_DIR, ENV_CONFIG_FILE, ENV_FS_ROOT};
use crate::core::endpoints::RegistrationEndpoints;
use crate::core::zypper::ZypperConfig;
use crate::error::ConfigError;

/// Settings loaded from the configuration file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectConfig {
    /// Registration server; when set it is treated as the canonical endpoint
    pub url: Option<String>,

    /// Alternate filesystem root
    pub fs_root: Option<PathBuf>,

    /// Directory of zypper credential files
    pub credentials_dir: Option<PathBuf>,

    /// Known registration servers
    #[serde(default)]
    pub endpoints: RegistrationEndpoints,
}

impl ConnectConfig {
    /// Default configuration file path, honouring `SUSECONNECT_CONFIG`
    pub fn default_path() -> PathBuf {
        env::var_os(ENV_CONFIG_FILE)
            .filter(|v| !v.is_empty())
            .map_or_else(|| PathBuf::from(CONFIG_FILE), PathBuf::from)
    }

    /// Load the configuration from `path`, or the default path
    ///
    /// Environment overrides are applied on top of the file.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.map_or_else(Self::default_path, Path::to_path_buf);
        let mut config = Self::load_from_path(&path)?;
        config.apply_env(|key| env::var(key).ok());
        Ok(config)
    }

    /// Load the configuration from a specific path
    ///
    /// Returns the default configuration if the file does not exist.
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.display().to_string(),
            error: e.to_string(),
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            error: e.to_string(),
        })
    }

    /// Apply environment overrides using `lookup` to read variables
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(root) = lookup(ENV_FS_ROOT).filter(|v| !v.is_empty()) {
            self.fs_root = Some(PathBuf::from(root));
        }
    }

    /// Endpoints with the configured registration server as canonical one
    pub fn effective_endpoints(&self) -> RegistrationEndpoints {
        let mut endpoints = self.endpoints.clone();
        if let Some(url) = self.url.as_deref().filter(|u| !u.is_empty()) {
            endpoints.canonical = url.to_string();
        }
        endpoints
    }

    /// Adapter configuration; `root` overrides the configured root
    ///
    /// The root ends up verbatim on every zypper command line, so it must
    /// be valid UTF-8.
    pub fn zypper_config(&self, root: Option<PathBuf>) -> Result<ZypperConfig, ConfigError> {
        let root = root.or_else(|| self.fs_root.clone());
        if let Some(path) = root.as_deref().filter(|p| p.to_str().is_none()) {
            return Err(ConfigError::NonUtf8Root {
                path: path.to_path_buf(),
            });
        }

        Ok(ZypperConfig {
            root,
            credentials_dir: self
                .credentials_dir
                .clone()
                .unwrap_or_else(|| PathBuf::from(CREDENTIALS_DIR)),
            endpoints: self.effective_endpoints(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_file_returns_default() {
        let temp_dir = TempDir::new().unwrap();
        let config = ConnectConfig::load_from_path(&temp_dir.path().join("none.toml")).unwrap();
        assert_eq!(config, ConnectConfig::default());
    }

    #[test]
    fn test_load_valid_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("suseconnect.toml");

        let content = r#"
url = "https://rmt.example.com"
fs_root = "/mnt/target"

[endpoints]
legacy = "https://nu.novell.com"
"#;
        fs::write(&config_path, content).unwrap();

        let config = ConnectConfig::load_from_path(&config_path).unwrap();
        assert_eq!(config.url.as_deref(), Some("https://rmt.example.com"));
        assert_eq!(config.fs_root, Some(PathBuf::from("/mnt/target")));
        assert_eq!(config.endpoints.legacy, "https://nu.novell.com");
        assert_eq!(
            config.endpoints.secondary,
            crate::config::urls::SECONDARY_REGISTRATION_SERVER
        );
    }

    #[test]
    fn test_load_invalid_toml_returns_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("suseconnect.toml");
        fs::write(&config_path, "invalid toml [[[").unwrap();

        let result = ConnectConfig::load_from_path(&config_path);
        assert!(matches!(result, Err(ConfigError::ParseError { .. })));
    }

    #[test]
    fn test_env_root_overrides_file() {
        let mut config = ConnectConfig {
            fs_root: Some(PathBuf::from("/from/file")),
            ..ConnectConfig::default()
        };
        config.apply_env(|key| (key == ENV_FS_ROOT).then(|| "/from/env".to_string()));
        assert_eq!(config.fs_root, Some(PathBuf::from("/from/env")));

        config.apply_env(|_| Some(String::new()));
        assert_eq!(config.fs_root, Some(PathBuf::from("/from/env")));
    }

    #[test]
    fn test_explicit_root_wins() {
        let config = ConnectConfig {
            fs_root: Some(PathBuf::from("/from/file")),
            ..ConnectConfig::default()
        };
        let zypper = config.zypper_config(Some(PathBuf::from("/from/cli"))).unwrap();
        assert_eq!(zypper.root, Some(PathBuf::from("/from/cli")));

        let zypper = config.zypper_config(None).unwrap();
        assert_eq!(zypper.root, Some(PathBuf::from("/from/file")));
        assert_eq!(zypper.credentials_dir, PathBuf::from(CREDENTIALS_DIR));
    }

    #[test]
    fn test_non_utf8_root_is_rejected() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let root = PathBuf::from(OsStr::from_bytes(b"/mnt/r\xFFoot"));
        let config = ConnectConfig::default();

        match config.zypper_config(Some(root.clone())) {
            Err(ConfigError::NonUtf8Root { path }) => assert_eq!(path, root),
            other => panic!("Expected NonUtf8Root, got: {other:?}"),
        }

        let config = ConnectConfig {
            fs_root: Some(root),
            ..ConnectConfig::default()
        };
        assert!(config.zypper_config(None).is_err());
        assert!(config.zypper_config(Some(PathBuf::from("/mnt/ok"))).is_ok());
    }

    #[test]
    fn test_configured_url_becomes_canonical_endpoint() {
        let config = ConnectConfig {
            url: Some("https://rmt.example.com".to_string()),
            ..ConnectConfig::default()
        };
        let endpoints = config.effective_endpoints();
        assert_eq!(endpoints.canonical, "https://rmt.example.com");
        assert_eq!(
            endpoints.legacy,
            crate::config::urls::LEGACY_REGISTRATION_SERVER
        );
    }
}
