// ABOUTME: Nutrition models - section aggregates, exact size-keyed item tables, resolved payloads
// ABOUTME: Macro values are display strings such as "150 kcal" or "5–180 kcal"
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Train Therapy

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::SizeKey;

/// One labelled macro value, e.g. `Calories: 150 kcal`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Macro {
    /// Nutrient label
    pub label: String,
    /// Display value including unit
    pub value: String,
}

impl Macro {
    /// Create a macro entry
    #[must_use]
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Coarse, section-wide nutrition used when no item-specific table exists
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionNutrition {
    /// Benefit statements in display order
    pub benefits: Vec<String>,
    /// Approximate ranges such as `"180–300 kcal"`
    pub macros: Vec<Macro>,
}

/// Exact nutrition for one item, keyed by the item-name slug
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemNutrition {
    /// Benefit statements in display order
    pub benefits: Vec<String>,
    /// Macro list per size
    pub macros: BTreeMap<SizeKey, Vec<Macro>>,
    /// Optional textual reference for the figures
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl ItemNutrition {
    /// Macros for a size; a missing size yields an empty slice
    #[must_use]
    pub fn macros_for(&self, size: SizeKey) -> &[Macro] {
        self.macros.get(&size).map(Vec::as_slice).unwrap_or_default()
    }
}

/// Which table a resolved payload came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NutritionBasis {
    /// Item-level table
    Exact,
    /// Section-level ranges split for the requested size
    Aggregate,
}

/// Display-ready nutrition for one item at one size
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NutritionPayload {
    /// Source table of this payload
    pub basis: NutritionBasis,
    /// Size the macros were selected for
    pub size: SizeKey,
    /// Benefit statements
    pub benefits: Vec<String>,
    /// Size-specific macros
    pub macros: Vec<Macro>,
    /// Citation carried from the exact table
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl NutritionPayload {
    /// Whether the payload came from the item-level table
    #[must_use]
    pub fn is_exact(&self) -> bool {
        self.basis == NutritionBasis::Exact
    }
}
