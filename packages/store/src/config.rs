//! # Application configuration: `orayze.toml`
//!
//! Defines the TOML configuration bundled with the web build (filename:
//! [`AppConfig::filename`] = `"orayze.toml"`). It holds the cosmetic delays
//! that stand in for network round-trips and camera analysis, the health
//! score bounds, and the storage keys.
//!
//! ## Structure
//!
//! ```toml
//! [auth]
//! latency_ms = 1000            # simulated round-trip before sign-in / sign-up resolve
//! sign_in_redirect_ms = 1000   # pause before leaving the sign-in page
//! sign_up_redirect_ms = 1500
//! log_out_redirect_ms = 1000
//!
//! [scan]
//! duration_ms = 3000           # "Scanning..." before "Scan Complete!"
//! score_min = 70               # inclusive
//! score_max = 100              # inclusive
//!
//! [notices]
//! form_linger_ms = 5000
//! dashboard_linger_ms = 3000
//!
//! [storage]
//! users_key = "orayze_users"
//! session_key = "orayze_current_user"
//! remember_key = "orayze_remember"
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`AppConfig`] | Top-level config with TOML (de)serialisation and validation. |
//! | [`AuthConfig`] | Simulated latency and redirect delays of the account pages. |
//! | [`ScanConfig`] | Scan duration and the inclusive health score range. |
//! | [`NoticeConfig`] | How long a transient notice stays on screen. |
//! | [`StorageKeys`] | The three `localStorage` keys. |
//!
//! Every field has a default, so a missing or partial file is equivalent to
//! the default configuration.

use std::ops::RangeInclusive;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Errors raised while loading [`AppConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("health score range {min}..={max} is empty")]
    EmptyScoreRange { min: u8, max: u8 },
}

/// Top-level configuration stored in `orayze.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub scan: ScanConfig,
    #[serde(default)]
    pub notices: NoticeConfig,
    #[serde(default)]
    pub storage: StorageKeys,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub latency_ms: u64,
    pub sign_in_redirect_ms: u64,
    pub sign_up_redirect_ms: u64,
    pub log_out_redirect_ms: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            latency_ms: 1000,
            sign_in_redirect_ms: 1000,
            sign_up_redirect_ms: 1500,
            log_out_redirect_ms: 1000,
        }
    }
}

impl AuthConfig {
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }

    pub fn sign_in_redirect(&self) -> Duration {
        Duration::from_millis(self.sign_in_redirect_ms)
    }

    pub fn sign_up_redirect(&self) -> Duration {
        Duration::from_millis(self.sign_up_redirect_ms)
    }

    pub fn log_out_redirect(&self) -> Duration {
        Duration::from_millis(self.log_out_redirect_ms)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    pub duration_ms: u64,
    /// Lowest health score a scan can produce (inclusive).
    pub score_min: u8,
    /// Highest health score a scan can produce (inclusive).
    pub score_max: u8,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            duration_ms: 3000,
            score_min: 70,
            score_max: 100,
        }
    }
}

impl ScanConfig {
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    pub fn score_range(&self) -> RangeInclusive<u8> {
        self.score_min..=self.score_max
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoticeConfig {
    /// Linger time of notices on the sign-in and sign-up forms.
    pub form_linger_ms: u64,
    /// Linger time of notices on the dashboard.
    pub dashboard_linger_ms: u64,
}

impl Default for NoticeConfig {
    fn default() -> Self {
        Self {
            form_linger_ms: 5000,
            dashboard_linger_ms: 3000,
        }
    }
}

impl NoticeConfig {
    pub fn form_linger(&self) -> Duration {
        Duration::from_millis(self.form_linger_ms)
    }

    pub fn dashboard_linger(&self) -> Duration {
        Duration::from_millis(self.dashboard_linger_ms)
    }
}

/// Keys under which the account data is persisted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageKeys {
    pub users_key: String,
    pub session_key: String,
    pub remember_key: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            users_key: "orayze_users".to_string(),
            session_key: "orayze_current_user".to_string(),
            remember_key: "orayze_remember".to_string(),
        }
    }
}

impl AppConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "orayze.toml"
    }

    /// Parse from a TOML string and validate.
    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.scan.score_min > self.scan.score_max {
            return Err(ConfigError::EmptyScoreRange {
                min: self.scan.score_min,
                max: self.scan.score_max,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.auth.latency(), Duration::from_secs(1));
        assert_eq!(config.scan.score_range(), 70..=100);
        assert_eq!(config.storage.users_key, "orayze_users");
        assert_eq!(config.storage.session_key, "orayze_current_user");
        assert_eq!(config.storage.remember_key, "orayze_remember");
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config = AppConfig::from_toml(
            r#"
            [scan]
            duration_ms = 10
            "#,
        )
        .unwrap();
        assert_eq!(config.scan.duration(), Duration::from_millis(10));
        assert_eq!(config.scan.score_min, 70);
        assert_eq!(config.scan.score_max, 100);
        assert_eq!(config.auth, AuthConfig::default());
    }

    #[test]
    fn test_rejects_empty_score_range() {
        let err = AppConfig::from_toml(
            r#"
            [scan]
            score_min = 90
            score_max = 80
            "#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::EmptyScoreRange { min: 90, max: 80 }
        ));
    }

    #[test]
    fn test_rejects_malformed_toml() {
        assert!(matches!(
            AppConfig::from_toml("[scan\nduration_ms = "),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_single_field_override() {
        let mut expected = AppConfig::default();
        expected.notices.dashboard_linger_ms = 1234;
        let parsed = AppConfig::from_toml("[notices]\ndashboard_linger_ms = 1234\n").unwrap();
        assert_eq!(parsed, expected);
    }
}
