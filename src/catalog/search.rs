// ABOUTME: Case-insensitive item name search across catalog sections
// ABOUTME: Sections without matches are omitted; section and item order is preserved
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Train Therapy

use serde::Serialize;

use menu_core::models::{Item, Section};

/// Matching items of one section, borrowed from the catalog
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionMatch<'a> {
    /// Section id
    pub id: &'a str,
    /// Section label
    pub label: &'a str,
    /// Matching items in catalog order
    pub items: Vec<&'a Item>,
}

/// Filter sections by item name
///
/// An empty query keeps every item. The query is matched as-is (no trimming),
/// so a lone space only matches multi-word names.
#[must_use]
pub fn filter_sections<'a>(sections: &'a [Section], query: &str) -> Vec<SectionMatch<'a>> {
    let needle = query.to_lowercase();
    sections
        .iter()
        .filter_map(|section| {
            let items: Vec<&Item> = section
                .items
                .iter()
                .filter(|item| needle.is_empty() || item.name_contains(&needle))
                .collect();
            (!items.is_empty()).then(|| SectionMatch {
                id: &section.id,
                label: &section.label,
                items,
            })
        })
        .collect()
}
