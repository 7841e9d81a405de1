//! Source configuration.
//!
//! Settings can come from an optional YAML file and are then overridden by
//! command-line flags or environment variables (see [`crate::cli`]).
//!
//! ```yaml
//! base_url: http://zjj.sz.gov.cn/xxgk/
//! utc_offset_minutes: 0
//! timeout_secs: 30
//! user_agent: zjj_feed/0.1
//! ```

use crate::date::fixed_offset;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{info, instrument};
use url::Url;

/// Listing endpoint of the Shenzhen Housing and Construction Bureau.
pub const DEFAULT_BASE_URL: &str = "http://zjj.sz.gov.cn/xxgk/";

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Settings for fetching and normalizing one agency's listings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Base URL the category paths are joined onto.
    pub base_url: String,
    /// Minutes east of UTC at which listing dates are interpreted.
    pub utc_offset_minutes: i32,
    /// Whole-request timeout handed to the HTTP client.
    pub timeout_secs: u64,
    /// Optional `User-Agent` header value.
    pub user_agent: Option<String>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            utc_offset_minutes: 0,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: None,
        }
    }
}

impl SourceConfig {
    /// Load settings from a YAML file. Missing keys take their defaults.
    #[instrument(level = "info", skip_all, fields(%path))]
    pub async fn from_yaml_file(path: &str) -> Result<Self, ConfigError> {
        let raw = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| ConfigError::Io {
                path: path.to_string(),
                source,
            })?;
        let config = Self::from_yaml_str(&raw)?;
        info!(base_url = %config.base_url, "Loaded source configuration");
        Ok(config)
    }

    /// Parse settings from YAML text. Missing keys take their defaults.
    ///
    /// # Returns
    ///
    /// The parsed settings (not yet validated), or [`ConfigError::Yaml`].
    pub fn from_yaml_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(raw)?)
    }

    /// The parsed base URL, with a trailing slash added so that category
    /// paths are joined beneath it rather than replacing its last segment.
    pub fn base_url(&self) -> Result<Url, ConfigError> {
        let mut raw = self.base_url.trim().to_string();
        if !raw.ends_with('/') {
            raw.push('/');
        }
        Url::parse(&raw).map_err(|source| ConfigError::InvalidBaseUrl {
            url: self.base_url.clone(),
            source,
        })
    }

    /// Whole-request timeout for the HTTP client, as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Check every field that can be wrong before any request is made.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.base_url()?;
        fixed_offset(self.utc_offset_minutes)
            .map_err(|_| ConfigError::InvalidUtcOffset(self.utc_offset_minutes))?;
        if self.timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout(self.timeout_secs));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = SourceConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.utc_offset_minutes, 0);
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = SourceConfig::from_yaml_str("utc_offset_minutes: 480\n").unwrap();
        assert_eq!(config.utc_offset_minutes, 480);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.user_agent, None);
    }

    #[test]
    fn test_invalid_yaml() {
        let err = SourceConfig::from_yaml_str("timeout_secs: [oops").unwrap_err();
        assert!(matches!(err, ConfigError::Yaml(_)));
    }

    #[test]
    fn test_base_url_gets_trailing_slash() {
        let config = SourceConfig {
            base_url: "http://example.org/list".to_string(),
            ..SourceConfig::default()
        };
        let base = config.base_url().unwrap();
        assert_eq!(base.as_str(), "http://example.org/list/");
        assert_eq!(
            base.join("tzgg/").unwrap().as_str(),
            "http://example.org/list/tzgg/"
        );
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let bad_url = SourceConfig {
            base_url: "not a url".to_string(),
            ..SourceConfig::default()
        };
        assert!(matches!(
            bad_url.validate(),
            Err(ConfigError::InvalidBaseUrl { .. })
        ));

        let bad_offset = SourceConfig {
            utc_offset_minutes: 1440,
            ..SourceConfig::default()
        };
        assert!(matches!(
            bad_offset.validate(),
            Err(ConfigError::InvalidUtcOffset(1440))
        ));
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let config = SourceConfig {
            timeout_secs: 0,
            ..SourceConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidTimeout(0))
        ));

        let from_yaml = SourceConfig::from_yaml_str("timeout_secs: 0\n").unwrap();
        assert!(from_yaml.validate().is_err());

        let one_second = SourceConfig {
            timeout_secs: 1,
            ..SourceConfig::default()
        };
        assert!(one_second.validate().is_ok());
    }

    #[tokio::test]
    async fn test_from_yaml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "base_url: http://example.org/xxgk/").unwrap();
        writeln!(file, "timeout_secs: 5").unwrap();
        writeln!(file, "user_agent: test-agent").unwrap();

        let path = file.path().to_str().unwrap().to_string();
        let config = SourceConfig::from_yaml_file(&path).await.unwrap();
        assert_eq!(config.base_url, "http://example.org/xxgk/");
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(config.user_agent.as_deref(), Some("test-agent"));
    }

    #[tokio::test]
    async fn test_from_missing_yaml_file() {
        let err = SourceConfig::from_yaml_file("/nonexistent/zjj_feed.yaml")
            .await
            .unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
