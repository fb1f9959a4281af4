// ABOUTME: Size variant selector shared by pricing and nutrition
// ABOUTME: Regular maps to the lower bound of a range, large to the upper bound
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Train Therapy

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::sizes;
use crate::errors::AppError;

/// Size variant of an item
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum SizeKey {
    /// Regular size, lower bound of any range
    #[default]
    Regular,
    /// Large size, upper bound of any range
    Large,
}

impl SizeKey {
    /// Both sizes in display order
    pub const ALL: [Self; 2] = [Self::Regular, Self::Large];

    /// Wire key of this size
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Regular => sizes::REGULAR,
            Self::Large => sizes::LARGE,
        }
    }

    /// Button label of this size
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Regular => sizes::REGULAR_LABEL,
            Self::Large => sizes::LARGE_LABEL,
        }
    }

    /// Parse from string with fallback to `Regular`
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }
}

impl FromStr for SizeKey {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "regular" | "r" => Ok(Self::Regular),
            "large" | "l" => Ok(Self::Large),
            other => Err(AppError::invalid_input(format!(
                "unknown size '{other}', expected 'regular' or 'large'"
            ))),
        }
    }
}

impl fmt::Display for SizeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
