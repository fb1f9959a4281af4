// ABOUTME: Nutrition coverage report for every catalog item
// ABOUTME: Flags items served by aggregates or nothing, and slugs shared across sections
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Train Therapy

use serde::Serialize;
use std::collections::BTreeMap;

use menu_core::models::NutritionBasis;

use super::Menu;

/// Coverage of one item
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoverageEntry {
    /// Section id
    pub section_id: String,
    /// Item display name
    pub item: String,
    /// Nutrition lookup key
    pub slug: String,
    /// Table that would serve the item, `None` when nothing would
    pub basis: Option<NutritionBasis>,
}

/// Items in different sections that share one slug and therefore one exact entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlugCollision {
    /// Shared slug
    pub slug: String,
    /// `section_id/item name` for every item with this slug
    pub items: Vec<String>,
}

/// Summary of nutrition coverage across the menu
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuditReport {
    /// Number of sections
    pub sections: usize,
    /// Number of items
    pub items: usize,
    /// Items served by an exact table
    pub exact: usize,
    /// Items served by a section aggregate
    pub aggregate: usize,
    /// Items with no nutrition block
    pub missing: usize,
    /// One entry per item, in catalog order
    pub entries: Vec<CoverageEntry>,
    /// Slugs reached from more than one item
    pub collisions: Vec<SlugCollision>,
}

impl AuditReport {
    /// Build the report for a menu
    #[must_use]
    pub fn build(menu: &Menu) -> Self {
        let mut entries = Vec::with_capacity(menu.item_count());
        let mut by_slug: BTreeMap<String, Vec<String>> = BTreeMap::new();

        for section in menu.sections() {
            for item in &section.items {
                let slug = item.slug();
                by_slug
                    .entry(slug.clone())
                    .or_default()
                    .push(format!("{}/{}", section.id, item.name));
                entries.push(CoverageEntry {
                    section_id: section.id.clone(),
                    item: item.name.clone(),
                    basis: menu_nutrition::coverage(menu.nutrition(), item, &section.id),
                    slug,
                });
            }
        }

        let count = |basis: Option<NutritionBasis>| {
            entries.iter().filter(|e| e.basis == basis).count()
        };
        let exact = count(Some(NutritionBasis::Exact));
        let aggregate = count(Some(NutritionBasis::Aggregate));
        let missing = count(None);

        let collisions = by_slug
            .into_iter()
            .filter(|(_, items)| items.len() > 1)
            .map(|(slug, items)| SlugCollision { slug, items })
            .collect();

        Self {
            sections: menu.sections().len(),
            items: entries.len(),
            exact,
            aggregate,
            missing,
            entries,
            collisions,
        }
    }

    /// Whether every item has at least aggregate nutrition
    #[must_use]
    pub const fn is_fully_covered(&self) -> bool {
        self.missing == 0
    }
}
