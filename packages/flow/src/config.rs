//! # Portal configuration: `portal.toml`
//!
//! Everything the flows need that is not user input: endpoint paths, display
//! timings, the restriction policy, navigation targets, and the identity fallback.
//!
//! ## Structure
//!
//! ```toml
//! [endpoints]
//! login = "/login"
//! fetch_teams = "/api/fetch_teams"
//! generate_token = "/api/generate_token"
//!
//! [timing]
//! success_display_ms = 2000     # success label / flash
//! error_display_ms = 8000       # error banner auto-hide
//! save_reminder_delay_ms = 1000 # copy -> "did you save it?" modal
//!
//! [restriction]
//! denylist = ["administrators", "portfolio managers"]
//! substring = "admin"
//!
//! [navigation]
//! token_page = "/getToken"
//! logout = "/logout"
//!
//! [identity]
//! email_fallback = "not_provided"
//! ```
//!
//! Every field has a default, so a missing or empty file is the default
//! configuration.

use std::time::Duration;

use api::Endpoints;
use serde::{Deserialize, Serialize};

use crate::restriction::RestrictionPolicy;

/// Top-level portal configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PortalConfig {
    #[serde(default)]
    pub endpoints: Endpoints,
    #[serde(default)]
    pub timing: TimingConfig,
    #[serde(default)]
    pub restriction: RestrictionPolicy,
    #[serde(default)]
    pub navigation: NavigationConfig,
    #[serde(default)]
    pub identity: IdentityConfig,
}

/// Display and reminder intervals, in milliseconds.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimingConfig {
    #[serde(default = "default_success_display_ms")]
    pub success_display_ms: u64,
    #[serde(default = "default_error_display_ms")]
    pub error_display_ms: u64,
    #[serde(default = "default_save_reminder_delay_ms")]
    pub save_reminder_delay_ms: u64,
}

fn default_success_display_ms() -> u64 {
    2000
}

fn default_error_display_ms() -> u64 {
    8000
}

fn default_save_reminder_delay_ms() -> u64 {
    1000
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            success_display_ms: default_success_display_ms(),
            error_display_ms: default_error_display_ms(),
            save_reminder_delay_ms: default_save_reminder_delay_ms(),
        }
    }
}

impl TimingConfig {
    pub fn success_display(&self) -> Duration {
        Duration::from_millis(self.success_display_ms)
    }

    pub fn error_display(&self) -> Duration {
        Duration::from_millis(self.error_display_ms)
    }

    pub fn save_reminder_delay(&self) -> Duration {
        Duration::from_millis(self.save_reminder_delay_ms)
    }
}

/// Client-side navigation targets.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NavigationConfig {
    /// Where a successful login lands.
    #[serde(default = "default_token_page")]
    pub token_page: String,
    /// Backend route that clears the session.
    #[serde(default = "default_logout")]
    pub logout: String,
}

fn default_token_page() -> String {
    "/getToken".to_string()
}

fn default_logout() -> String {
    "/logout".to_string()
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            token_page: default_token_page(),
            logout: default_logout(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IdentityConfig {
    /// Sent as `email` when team lookup never resolved one.
    #[serde(default = "default_email_fallback")]
    pub email_fallback: String,
}

fn default_email_fallback() -> String {
    "not_provided".to_string()
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            email_fallback: default_email_fallback(),
        }
    }
}

impl PortalConfig {
    /// The conventional filename for the config file.
    pub fn filename() -> &'static str {
        "portal.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Parse `s`, falling back to defaults (with a warning) when it is invalid.
    pub fn from_toml_or_default(s: &str) -> Self {
        Self::from_toml(s).unwrap_or_else(|e| {
            tracing::warn!("invalid {}, using defaults: {}", Self::filename(), e);
            Self::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        assert_eq!(PortalConfig::from_toml("").unwrap(), PortalConfig::default());
    }

    #[test]
    fn test_default_values() {
        let config = PortalConfig::default();
        assert_eq!(config.timing.success_display(), Duration::from_millis(2000));
        assert_eq!(config.timing.error_display(), Duration::from_millis(8000));
        assert_eq!(config.timing.save_reminder_delay(), Duration::from_millis(1000));
        assert_eq!(config.navigation.token_page, "/getToken");
        assert_eq!(config.identity.email_fallback, "not_provided");
        assert_eq!(config.endpoints.fetch_teams, "/api/fetch_teams");
    }

    #[test]
    fn test_partial_sections() {
        let config = PortalConfig::from_toml(
            r#"
            [timing]
            error_display_ms = 3000

            [restriction]
            denylist = ["ops-root"]
            "#,
        )
        .unwrap();
        assert_eq!(config.timing.error_display_ms, 3000);
        assert_eq!(config.timing.success_display_ms, 2000);
        assert_eq!(config.restriction.denylist, vec!["ops-root"]);
        assert_eq!(config.restriction.substring, "admin");
    }

    #[test]
    fn test_bundled_file_matches_defaults() {
        let text = include_str!("../../web/portal.toml");
        assert_eq!(PortalConfig::from_toml(text).unwrap(), PortalConfig::default());
    }

    #[test]
    fn test_invalid_falls_back() {
        let config = PortalConfig::from_toml_or_default("[timing]\nerror_display_ms = \"soon\"");
        assert_eq!(config, PortalConfig::default());
    }
}
