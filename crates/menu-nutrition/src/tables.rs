// ABOUTME: In-memory nutrition tables keyed by section id and item slug
// ABOUTME: Defines the NutritionSource trait consumed by the resolver
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Train Therapy

use std::collections::HashMap;

use menu_core::models::{ItemNutrition, SectionNutrition};

/// Read-only lookup of nutrition data
///
/// Implementations must be side-effect free: the resolver relies on repeated
/// lookups returning the same entries.
pub trait NutritionSource {
    /// Exact table for an item slug
    fn item_nutrition(&self, slug: &str) -> Option<&ItemNutrition>;

    /// Aggregate ranges for a section id
    fn section_nutrition(&self, section_id: &str) -> Option<&SectionNutrition>;
}

/// Section aggregates plus exact item tables
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NutritionTables {
    sections: HashMap<String, SectionNutrition>,
    items: HashMap<String, ItemNutrition>,
}

impl NutritionTables {
    /// Build tables from already keyed maps
    #[must_use]
    pub fn new(
        sections: HashMap<String, SectionNutrition>,
        items: HashMap<String, ItemNutrition>,
    ) -> Self {
        Self { sections, items }
    }

    /// Add or replace a section aggregate
    #[must_use]
    pub fn with_section(
        mut self,
        section_id: impl Into<String>,
        nutrition: SectionNutrition,
    ) -> Self {
        self.sections.insert(section_id.into(), nutrition);
        self
    }

    /// Add or replace an exact item table
    #[must_use]
    pub fn with_item(mut self, slug: impl Into<String>, nutrition: ItemNutrition) -> Self {
        self.items.insert(slug.into(), nutrition);
        self
    }

    /// Copy of these tables without one exact item entry
    #[must_use]
    pub fn without_item(&self, slug: &str) -> Self {
        let mut tables = self.clone();
        tables.items.remove(slug);
        tables
    }

    /// Drop exact entries whose key fails `keep`, returning the removed keys sorted
    pub fn retain_items(&mut self, mut keep: impl FnMut(&str) -> bool) -> Vec<String> {
        let mut removed = Vec::new();
        self.items.retain(|key, _| {
            let kept = keep(key);
            if !kept {
                removed.push(key.clone());
            }
            kept
        });
        removed.sort();
        removed
    }

    /// Exact entry keys, sorted
    #[must_use]
    pub fn item_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.items.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    /// Section ids with aggregate data, sorted
    #[must_use]
    pub fn section_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.sections.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    /// Number of exact item entries
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Number of section aggregates
    #[must_use]
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }
}

impl NutritionSource for NutritionTables {
    fn item_nutrition(&self, slug: &str) -> Option<&ItemNutrition> {
        self.items.get(slug)
    }

    fn section_nutrition(&self, section_id: &str) -> Option<&SectionNutrition> {
        self.sections.get(section_id)
    }
}
