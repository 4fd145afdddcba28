//! Site configuration.
//!
//! Every field has a default, so an empty or partial YAML document is valid. The frontend
//! embeds `config/site.yaml` and parses it with [`AppConfig::from_yaml_str`].

use anyhow::{Context, Result};
use log::warn;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Storage key holding the serialized signed-in user
    pub session_storage_key: String,
    /// Simulated latency of login/signup
    pub auth_delay_ms: u32,
    /// Simulated latency of a booking submission
    pub booking_delay_ms: u32,
    pub min_password_length: usize,
    /// Fallback session price when a trainer's display price has no digits
    pub default_base_price: u32,
    /// How long the "signed in" banner stays up
    pub welcome_toast_ms: u32,
    /// How long the footer shows "Subscribed" after a signup
    pub newsletter_confirmation_ms: u32,
    pub carousel_autoplay_ms: u32,
    pub swipe_threshold_px: f64,
    /// Seed the notification list with sample entries on sign-in
    pub seed_notifications: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            session_storage_key: "svasthify_user".to_string(),
            auth_delay_ms: 1000,
            booking_delay_ms: 2000,
            min_password_length: 6,
            default_base_price: 1200,
            welcome_toast_ms: 5000,
            newsletter_confirmation_ms: 3000,
            carousel_autoplay_ms: 6000,
            swipe_threshold_px: 50.0,
            seed_notifications: true,
        }
    }
}

impl AppConfig {
    /// Parse a YAML document, filling unspecified fields with defaults
    pub fn from_yaml_str(source: &str) -> Result<Self> {
        if source.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(source).context("Failed to parse site configuration")
    }

    /// Parse a YAML document, falling back to defaults when it is malformed
    pub fn from_yaml_or_default(source: &str) -> Self {
        match Self::from_yaml_str(source) {
            Ok(config) => config,
            Err(e) => {
                warn!("Using default configuration: {:#}", e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.session_storage_key, "svasthify_user");
        assert_eq!(config.auth_delay_ms, 1000);
        assert_eq!(config.booking_delay_ms, 2000);
        assert_eq!(config.min_password_length, 6);
        assert_eq!(config.default_base_price, 1200);
    }

    #[test]
    fn test_partial_yaml_keeps_other_defaults() {
        let config = AppConfig::from_yaml_str("booking_delay_ms: 10\nseed_notifications: false\n").unwrap();
        assert_eq!(config.booking_delay_ms, 10);
        assert!(!config.seed_notifications);
        assert_eq!(config.auth_delay_ms, 1000);
        assert_eq!(config.session_storage_key, "svasthify_user");
    }

    #[test]
    fn test_empty_yaml_is_default() {
        assert_eq!(AppConfig::from_yaml_str("  \n").unwrap(), AppConfig::default());
    }

    #[test]
    fn test_site_yaml_matches_defaults() {
        let config = AppConfig::from_yaml_str(include_str!("../../frontend/config/site.yaml")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_malformed_yaml() {
        assert!(AppConfig::from_yaml_str("auth_delay_ms: [not a number").is_err());
        assert_eq!(AppConfig::from_yaml_or_default("auth_delay_ms: nope"), AppConfig::default());
    }
}
