//! Validation settings.

use mailaddr::ParserConfig;
use serde::{Deserialize, Serialize};

use crate::error::SettingsError;

/// Which parser policy to validate with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Policy {
    /// [`ParserConfig::LIMITED`], for addresses typed in by a user.
    #[default]
    Limited,
    /// [`ParserConfig::RELAXED`], for addresses that are already trusted.
    Relaxed,
    /// An explicit configuration.
    Custom(ParserConfig),
}

/// Settings for validating user-entered addresses.
///
/// Loaded from JSON; missing fields take their defaults:
///
/// ```json
/// { "policy": "limited", "trim_whitespace": true }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationSettings {
    /// Parser policy.
    pub policy: Policy,
    /// Strip surrounding whitespace before parsing.
    pub trim_whitespace: bool,
}

impl Default for ValidationSettings {
    fn default() -> Self {
        Self {
            policy: Policy::Limited,
            trim_whitespace: true,
        }
    }
}

impl ValidationSettings {
    /// Parses settings from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or has invalid values.
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes settings to JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Returns the parser configuration selected by the policy.
    #[must_use]
    pub const fn parser_config(&self) -> ParserConfig {
        match self.policy {
            Policy::Limited => ParserConfig::LIMITED,
            Policy::Relaxed => ParserConfig::RELAXED,
            Policy::Custom(config) => config,
        }
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::redundant_clone,
    clippy::manual_string_new,
    clippy::needless_collect,
    clippy::unreadable_literal,
    clippy::used_underscore_items,
    clippy::similar_names
)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = ValidationSettings::from_json("{}").unwrap();
        assert_eq!(settings, ValidationSettings::default());
        assert_eq!(settings.parser_config(), ParserConfig::LIMITED);
        assert!(settings.trim_whitespace);
    }

    #[test]
    fn test_relaxed_policy() {
        let settings =
            ValidationSettings::from_json(r#"{"policy": "relaxed", "trim_whitespace": false}"#)
                .unwrap();
        assert_eq!(settings.parser_config(), ParserConfig::RELAXED);
        assert!(!settings.trim_whitespace);
    }

    #[test]
    fn test_custom_policy() {
        let json = r#"{
            "policy": {
                "custom": {
                    "check_local_part_length": true,
                    "check_email_address_length": true,
                    "allow_quoted_local_part": true,
                    "allow_local_part_requiring_quoted_string": false,
                    "allow_empty_local_part": false
                }
            }
        }"#;
        let settings = ValidationSettings::from_json(json).unwrap();
        assert_eq!(
            settings.parser_config(),
            ParserConfig::LIMITED.with_quoted_local_part(true)
        );
    }

    #[test]
    fn test_round_trip() {
        let settings = ValidationSettings {
            policy: Policy::Custom(ParserConfig::RELAXED.with_empty_local_part(true)),
            trim_whitespace: false,
        };
        let json = settings.to_json().unwrap();
        assert_eq!(ValidationSettings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_invalid_policy() {
        assert!(ValidationSettings::from_json(r#"{"policy": "strict"}"#).is_err());
    }
}
