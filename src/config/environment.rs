// ABOUTME: Environment configuration for the menu tools
// ABOUTME: Currency, default size, output format and nutrition key strictness
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Train Therapy

//! Environment-based configuration

use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use tracing::{debug, warn};

use menu_core::constants::{env_config, pricing};
use menu_core::errors::{AppError, AppResult};
use menu_core::formatters::OutputFormat;
use menu_core::models::SizeKey;

use crate::catalog::LoadOptions;

/// Output format of the command-line tool
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum DisplayFormat {
    /// Human-readable text
    #[default]
    Text,
    /// JSON documents
    Json,
    /// TOON documents
    Toon,
}

impl DisplayFormat {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "json" => Self::Json,
            "toon" => Self::Toon,
            _ => Self::Text,
        }
    }

    /// Serializer for structured formats, `None` for text
    #[must_use]
    pub const fn structured(&self) -> Option<OutputFormat> {
        match self {
            Self::Text => None,
            Self::Json => Some(OutputFormat::Json),
            Self::Toon => Some(OutputFormat::Toon),
        }
    }
}

impl fmt::Display for DisplayFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
            Self::Toon => write!(f, "toon"),
        }
    }
}

/// Menu configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuConfig {
    /// Currency code appended to prices
    pub currency: String,
    /// Initial size for detail views
    pub default_size: SizeKey,
    /// Output format of the command-line tool
    pub output_format: DisplayFormat,
    /// Reject item nutrition keys that no catalog item reaches
    pub strict_nutrition_keys: bool,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            currency: pricing::DEFAULT_CURRENCY.to_owned(),
            default_size: SizeKey::Regular,
            output_format: DisplayFormat::Text,
            strict_nutrition_keys: false,
        }
    }
}

impl MenuConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` for an empty currency or a malformed boolean
    pub fn from_env() -> AppResult<Self> {
        let size_raw = env_var_or(env_config::DEFAULT_SIZE, SizeKey::Regular.as_str());
        let default_size = size_raw.parse::<SizeKey>().unwrap_or_else(|_| {
            warn!(value = %size_raw, "Unrecognized {}, using regular", env_config::DEFAULT_SIZE);
            SizeKey::Regular
        });

        let config = Self {
            currency: env_var_or(env_config::CURRENCY, pricing::DEFAULT_CURRENCY)
                .trim()
                .to_owned(),
            default_size,
            output_format: DisplayFormat::from_str_or_default(&env_var_or(
                env_config::OUTPUT_FORMAT,
                "text",
            )),
            strict_nutrition_keys: parse_bool(
                env_config::STRICT_NUTRITION_KEYS,
                &env_var_or(env_config::STRICT_NUTRITION_KEYS, "false"),
            )?,
        };

        config.validate()?;
        debug!(summary = %config.summary(), "Menu configuration loaded");
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` for an empty currency code
    pub fn validate(&self) -> AppResult<()> {
        if self.currency.is_empty() {
            return Err(AppError::config(format!(
                "{} must not be empty",
                env_config::CURRENCY
            )));
        }
        Ok(())
    }

    /// Catalog load options implied by this configuration
    #[must_use]
    pub const fn load_options(&self) -> LoadOptions {
        LoadOptions {
            strict_nutrition_keys: self.strict_nutrition_keys,
        }
    }

    /// One-line summary for logs
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "currency={} default_size={} output={} strict_nutrition_keys={}",
            self.currency, self.default_size, self.output_format, self.strict_nutrition_keys
        )
    }
}

fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Parse a boolean environment value (`true/false`, `1/0`, `yes/no`, `on/off`)
///
/// # Errors
///
/// Returns `ConfigInvalid` naming `key` for any other value
pub fn parse_bool(key: &str, value: &str) -> AppResult<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" | "" => Ok(false),
        other => Err(AppError::config(format!("Invalid {key} value '{other}'"))
            .with_resource_id(key)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bool_variants() {
        assert!(parse_bool("K", "TRUE").unwrap());
        assert!(parse_bool("K", " on ").unwrap());
        assert!(!parse_bool("K", "0").unwrap());
        assert!(parse_bool("K", "maybe").is_err());
    }

    #[test]
    fn test_display_format_fallback() {
        assert_eq!(DisplayFormat::from_str_or_default("JSON"), DisplayFormat::Json);
        assert_eq!(DisplayFormat::from_str_or_default("toon"), DisplayFormat::Toon);
        assert_eq!(DisplayFormat::from_str_or_default("xml"), DisplayFormat::Text);
    }
}
