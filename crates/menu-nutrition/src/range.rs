// ABOUTME: Splits section-level macro ranges like "180–300 kcal" into size-specific values
// ABOUTME: Regular takes the low bound, large the high bound; other shapes pass through unchanged
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Train Therapy

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

use menu_core::models::SizeKey;

/// En-dash or hyphen with optional surrounding whitespace
/// `None` only if the pattern fails to compile
static RANGE_SEPARATOR: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"\s*(?:\x{2013}|-)\s*").ok());

/// Trailing unit: letters or percent at the very end of the value
static UNIT_SUFFIX: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"[a-zA-Z%]+$").ok());

/// Structured view of a two-part macro range
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MacroRange {
    /// Lower bound text, as written
    pub low: String,
    /// Upper bound text with the unit removed
    pub high: String,
    /// Trailing unit, empty when the value has none
    pub unit: String,
}

impl MacroRange {
    /// Parse a value with exactly one en-dash/hyphen separator
    ///
    /// Returns `None` for plain values (`"5 kcal"`), values with several
    /// dashes, and values where either side is empty (a leading negative
    /// sign such as `"-5 g"`).
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        let separator = RANGE_SEPARATOR.as_ref()?;
        let parts: Vec<&str> = separator.split(value).collect();
        let [first, second] = parts.as_slice() else {
            return None;
        };

        let unit = UNIT_SUFFIX
            .as_ref()
            .and_then(|pattern| pattern.find(value))
            .map_or("", |m| m.as_str());

        let low = first.trim();
        let high = second.replacen(unit, "", 1);
        let high = high.trim();
        if low.is_empty() || high.is_empty() {
            return None;
        }

        Some(Self {
            low: low.to_owned(),
            high: high.to_owned(),
            unit: unit.to_owned(),
        })
    }

    /// Bound text for a size, followed by the unit
    #[must_use]
    pub fn value_for(&self, size: SizeKey) -> String {
        let chosen = match size {
            SizeKey::Regular => &self.low,
            SizeKey::Large => &self.high,
        };
        format!("{chosen} {}", self.unit).trim().to_owned()
    }
}

/// Size-adjusted display value for a section-level macro
///
/// `"180–300 kcal"` becomes `"180 kcal"` (regular) or `"300 kcal"` (large);
/// anything that is not a simple two-part range is returned unchanged.
#[must_use]
pub fn split_for_size(value: &str, size: SizeKey) -> String {
    MacroRange::parse(value).map_or_else(|| value.to_owned(), |range| range.value_for(size))
}
