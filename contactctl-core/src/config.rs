use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ContactError, Result};
use crate::pager::DEFAULT_PAGE_SIZE;
use crate::view::DEFAULT_COMPACT_MAX_WIDTH;

/// Public users endpoint used when nothing else is configured
pub const DEFAULT_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/users";

/// Environment variable that overrides the configured endpoint
pub const ENDPOINT_ENV: &str = "CONTACTCTL_ENDPOINT";

/// Settings for contactctl, read from ~/.contactctl/config.toml
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    /// URL returning a JSON array of contacts
    pub endpoint: String,
    /// Records per page
    pub page_size: usize,
    /// Terminal width (columns) at or below which the card layout is used
    pub compact_max_width: u16,
    /// HTTP request timeout
    pub timeout_secs: u64,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            compact_max_width: DEFAULT_COMPACT_MAX_WIDTH,
            timeout_secs: 30,
        }
    }
}

impl ContactConfig {
    /// Load config from ~/.contactctl/config.toml
    ///
    /// A missing file is not an error; defaults apply.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load config from an explicit path, then apply env overrides
    pub fn load_from(path: &Path) -> Result<Self> {
        let mut config = if path.exists() {
            let content = fs::read_to_string(path)?;
            toml::from_str(&content).map_err(|err| {
                ContactError::config(format!("invalid TOML in {}: {}", path.display(), err))
            })?
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Self::default()
        };

        config.apply_endpoint_override(env::var(ENDPOINT_ENV).ok());
        config.validate()?;
        Ok(config)
    }

    /// Parse TOML; keys that are absent keep their defaults
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|err| ContactError::config(err.to_string()))
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|err| ContactError::config(err.to_string()))
    }

    /// Get config file path: ~/.contactctl/config.toml
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// ~/.contactctl, also home of the browse-mode log file
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".contactctl")
    }

    /// Replace the endpoint when an override is present and non-empty
    pub fn apply_endpoint_override(&mut self, endpoint: Option<String>) {
        if let Some(endpoint) = endpoint.filter(|e| !e.trim().is_empty()) {
            self.endpoint = endpoint;
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.endpoint.trim().is_empty() {
            return Err(ContactError::config("endpoint must not be empty"));
        }
        if self.page_size == 0 {
            return Err(ContactError::config("page_size must be at least 1"));
        }
        if self.timeout_secs == 0 {
            return Err(ContactError::config("timeout_secs must be at least 1"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn defaults_round_trip_through_toml() {
        let config = ContactConfig::default();
        let text = config.to_toml().unwrap();
        assert!(text.contains("page_size = 10"));
        assert_eq!(ContactConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config = ContactConfig::from_toml("page_size = 25\n").unwrap();
        assert_eq!(config.page_size, 25);
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.compact_max_width, DEFAULT_COMPACT_MAX_WIDTH);
    }

    #[test]
    fn invalid_toml_is_config_error() {
        let err = ContactConfig::from_toml("page_size = \"ten\"").unwrap_err();
        assert!(matches!(err, ContactError::Config { .. }));
    }

    #[test]
    fn validate_rejects_zero_page_size() {
        let config = ContactConfig {
            page_size: 0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("page_size"));
    }

    #[test]
    fn validate_rejects_blank_endpoint() {
        let config = ContactConfig {
            endpoint: "  ".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn endpoint_override_ignores_blank_values() {
        let mut config = ContactConfig::default();
        config.apply_endpoint_override(Some(String::new()));
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);

        config.apply_endpoint_override(Some("http://localhost:9000/users".to_string()));
        assert_eq!(config.endpoint, "http://localhost:9000/users");

        config.apply_endpoint_override(None);
        assert_eq!(config.endpoint, "http://localhost:9000/users");
    }

    #[test]
    fn load_from_reads_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "compact_max_width = 80\ntimeout_secs = 5").unwrap();
        file.flush().unwrap();

        let config = ContactConfig::load_from(file.path()).unwrap();
        assert_eq!(config.compact_max_width, 80);
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn load_from_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ContactConfig::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn load_from_rejects_invalid_values() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "page_size = 0").unwrap();
        file.flush().unwrap();

        assert!(ContactConfig::load_from(file.path()).is_err());
    }
}
