// ABOUTME: Output format abstraction for serializing menu data to multiple formats
// ABOUTME: Supports JSON (default) and TOON (token-efficient, behind the `toon` feature)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Train Therapy

//! Output Format Abstraction Layer
//!
//! Pluggable serialization formats for catalog listings, detail views and
//! audit reports. TOON (Token-Oriented Object Notation) collapses uniform
//! arrays such as section item lists into CSV-like rows.
//!
//! ## Usage
//!
//! ```rust
//! use menu_core::formatters::{format_output, OutputFormat};
//!
//! let labels = vec!["Hot Drinks", "Smoothies"];
//! if let Ok(output) = format_output(&labels, OutputFormat::Json) {
//!     assert_eq!(output.data, r#"["Hot Drinks","Smoothies"]"#);
//! }
//! ```

use serde::Serialize;
use std::fmt;

/// Output serialization format selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// JSON format (default) - universal compatibility
    #[default]
    Json,
    /// TOON format - Token-Oriented Object Notation
    Toon,
}

impl OutputFormat {
    /// Get the format name as a string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Toon => "toon",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Serialized data tagged with the format that produced it
#[derive(Debug, Clone)]
pub struct FormattedOutput {
    /// The serialized data as a string
    pub data: String,
    /// The format used for serialization
    pub format: OutputFormat,
}

/// Error type for formatting operations
#[derive(Debug, Clone)]
pub struct FormatError {
    /// Error message describing what went wrong
    pub message: String,
    /// The format that was being used when the error occurred
    pub format: OutputFormat,
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Format error ({}): {}", self.format, self.message)
    }
}

impl std::error::Error for FormatError {}

impl From<FormatError> for crate::errors::AppError {
    fn from(error: FormatError) -> Self {
        Self::serialization(error.to_string())
    }
}

/// Format serializable data to the specified output format
///
/// # Errors
/// Returns `FormatError` if:
/// - JSON serialization fails (for JSON format)
/// - Converting to JSON value or TOON encoding fails (for TOON format)
/// - TOON output was requested but the `toon` feature is disabled
pub fn format_output<T: Serialize>(
    data: &T,
    format: OutputFormat,
) -> Result<FormattedOutput, FormatError> {
    let data = match format {
        OutputFormat::Json => serde_json::to_string(data).map_err(|e| FormatError {
            message: e.to_string(),
            format,
        })?,
        OutputFormat::Toon => encode_toon(data)?,
    };

    Ok(FormattedOutput { data, format })
}

/// Format serializable data to pretty-printed output (for terminal display)
///
/// # Errors
/// Same conditions as [`format_output`]
pub fn format_output_pretty<T: Serialize>(
    data: &T,
    format: OutputFormat,
) -> Result<FormattedOutput, FormatError> {
    let data = match format {
        OutputFormat::Json => serde_json::to_string_pretty(data).map_err(|e| FormatError {
            message: e.to_string(),
            format,
        })?,
        // TOON is already human-readable
        OutputFormat::Toon => encode_toon(data)?,
    };

    Ok(FormattedOutput { data, format })
}

#[cfg(feature = "toon")]
fn encode_toon<T: Serialize>(data: &T) -> Result<String, FormatError> {
    // Convert to serde_json::Value first, then to TOON
    let value = serde_json::to_value(data).map_err(|e| FormatError {
        message: format!("Failed to convert to JSON value: {e}"),
        format: OutputFormat::Toon,
    })?;
    let options = toon_format::EncodeOptions::default();
    toon_format::encode(&value, &options).map_err(|e| FormatError {
        message: e.to_string(),
        format: OutputFormat::Toon,
    })
}

#[cfg(not(feature = "toon"))]
fn encode_toon<T: Serialize>(_data: &T) -> Result<String, FormatError> {
    Err(FormatError {
        message: "TOON support is not compiled in (enable the `toon` feature)".to_owned(),
        format: OutputFormat::Toon,
    })
}
