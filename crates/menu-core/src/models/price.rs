// ABOUTME: Fixed and ranged item prices with size-aware selection and display formatting
// ABOUTME: Ranges render as "min–max" with two decimals and an en-dash separator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Train Therapy

use serde::{Deserialize, Serialize};
use std::fmt;

use super::SizeKey;
use crate::constants::pricing::{PRICE_DECIMALS, RANGE_SEPARATOR};
use crate::errors::{AppError, AppResult, ErrorCode};

/// Price of a menu item
///
/// Serialized as a bare number for fixed prices and as `{ "min": .., "max": .. }`
/// for size-dependent ranges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Price {
    /// Single price regardless of size
    Fixed(f64),
    /// Size-dependent price, regular at `min` and large at `max`
    Range {
        /// Regular-size price
        min: f64,
        /// Large-size price
        max: f64,
    },
}

impl Price {
    /// Create a validated fixed price
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` for negative or non-finite amounts
    pub fn fixed(amount: f64) -> AppResult<Self> {
        let price = Self::Fixed(amount);
        price.validate()?;
        Ok(price)
    }

    /// Create a validated price range
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` when `min > max` or either bound is negative or non-finite
    pub fn range(min: f64, max: f64) -> AppResult<Self> {
        let price = Self::Range { min, max };
        price.validate()?;
        Ok(price)
    }

    /// Check the amounts are finite, non-negative and ordered
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` describing the first violation found
    pub fn validate(&self) -> AppResult<()> {
        let (min, max) = self.bounds();
        if !min.is_finite() || !max.is_finite() {
            return Err(AppError::new(
                ErrorCode::ValueOutOfRange,
                "price must be a finite amount",
            ));
        }
        if min < 0.0 {
            return Err(AppError::new(
                ErrorCode::ValueOutOfRange,
                format!("price must not be negative, got {min}"),
            ));
        }
        if min > max {
            return Err(AppError::new(
                ErrorCode::ValueOutOfRange,
                format!("range minimum {min} exceeds maximum {max}"),
            ));
        }
        Ok(())
    }

    /// Lower and upper bound; a fixed price is its own range
    #[must_use]
    pub const fn bounds(&self) -> (f64, f64) {
        match *self {
            Self::Fixed(amount) => (amount, amount),
            Self::Range { min, max } => (min, max),
        }
    }

    /// Whether the size toggle applies to this price
    #[must_use]
    pub const fn offers_size_choice(&self) -> bool {
        matches!(self, Self::Range { .. })
    }

    /// Amount charged for a size
    #[must_use]
    pub const fn amount_for(&self, size: SizeKey) -> f64 {
        match (*self, size) {
            (Self::Fixed(amount), _) => amount,
            (Self::Range { min, .. }, SizeKey::Regular) => min,
            (Self::Range { max, .. }, SizeKey::Large) => max,
        }
    }

    /// Display string without currency
    #[must_use]
    pub fn format(&self) -> String {
        match *self {
            Self::Fixed(amount) => format_amount(amount),
            Self::Range { min, max } => format!(
                "{}{RANGE_SEPARATOR}{}",
                format_amount(min),
                format_amount(max)
            ),
        }
    }

    /// Display string followed by a currency code
    #[must_use]
    pub fn format_with_currency(&self, currency: &str) -> String {
        format!("{} {currency}", self.format())
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}

/// Render an amount with exactly two decimal places
#[must_use]
pub fn format_amount(amount: f64) -> String {
    format!("{amount:.prec$}", prec = PRICE_DECIMALS)
}
