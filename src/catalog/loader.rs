// ABOUTME: Parses and validates the compiled-in catalog and nutrition tables
// ABOUTME: Orphan item nutrition keys are pruned with a warning or rejected in strict mode
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Train Therapy

use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use tracing::{debug, info, warn};

use menu_core::errors::CatalogError;
use menu_core::models::{Item, ItemNutrition, Section, SectionNutrition};
use menu_core::slug::is_slug;
use menu_nutrition::NutritionTables;

/// Embedded catalog: `{ "sections": [...] }`
pub const BUILTIN_CATALOG_JSON: &str = include_str!("data/catalog.json");

/// Embedded section aggregates keyed by section id
pub const BUILTIN_SECTION_NUTRITION_JSON: &str = include_str!("data/section_nutrition.json");

/// Embedded exact tables keyed by item slug
pub const BUILTIN_ITEM_NUTRITION_JSON: &str = include_str!("data/item_nutrition.json");

/// How strictly nutrition keys are checked against the catalog
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadOptions {
    /// Reject item nutrition keys that no catalog item slug reaches
    pub strict_nutrition_keys: bool,
}

impl LoadOptions {
    /// Strict key checking
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            strict_nutrition_keys: true,
        }
    }
}

#[derive(Deserialize)]
struct CatalogDocument {
    sections: Vec<Section>,
}

/// Parse the catalog document into sections, without validation
///
/// # Errors
///
/// Returns `CatalogError::Parse` on malformed JSON
pub fn parse_catalog(json: &str) -> Result<Vec<Section>, CatalogError> {
    serde_json::from_str::<CatalogDocument>(json)
        .map(|doc| doc.sections)
        .map_err(|e| CatalogError::Parse {
            table: "catalog",
            reason: e.to_string(),
        })
}

/// Parse both nutrition documents into tables, without validation
///
/// # Errors
///
/// Returns `CatalogError::Parse` on malformed JSON in either document
pub fn parse_nutrition(
    section_json: &str,
    item_json: &str,
) -> Result<NutritionTables, CatalogError> {
    let sections: HashMap<String, SectionNutrition> =
        serde_json::from_str(section_json).map_err(|e| CatalogError::Parse {
            table: "section nutrition",
            reason: e.to_string(),
        })?;
    let items: HashMap<String, ItemNutrition> =
        serde_json::from_str(item_json).map_err(|e| CatalogError::Parse {
            table: "item nutrition",
            reason: e.to_string(),
        })?;
    Ok(NutritionTables::new(sections, items))
}

/// Validate sections against each other and against the nutrition tables
///
/// Returns the tables, pruned of orphan item keys in lenient mode.
///
/// # Errors
///
/// Returns the first violation found:
/// - `EmptySectionField` for an empty section id or label
/// - `DuplicateSection` for a repeated section id
/// - `EmptyItemName` / `DuplicateItem` (names compared case-insensitively)
/// - `InvalidPrice` for negative, non-finite or inverted prices
/// - `UnknownNutritionSection` for aggregates naming no catalog section
/// - `OrphanNutritionKey` for unreachable item keys in strict mode
pub fn validate(
    sections: &[Section],
    mut nutrition: NutritionTables,
    options: LoadOptions,
) -> Result<NutritionTables, CatalogError> {
    let mut section_ids = HashSet::with_capacity(sections.len());
    let mut slugs = HashSet::new();

    for (position, section) in sections.iter().enumerate() {
        validate_section(position, section)?;
        if !section_ids.insert(section.id.as_str()) {
            return Err(CatalogError::DuplicateSection {
                section_id: section.id.clone(),
            });
        }
        slugs.extend(section.items.iter().map(Item::slug));
    }

    if let Some(unknown) = nutrition
        .section_ids()
        .into_iter()
        .find(|id| !section_ids.contains(id))
    {
        return Err(CatalogError::UnknownNutritionSection {
            section_id: unknown.to_owned(),
        });
    }

    if options.strict_nutrition_keys {
        if let Some(orphan) = nutrition
            .item_keys()
            .into_iter()
            .find(|key| !slugs.contains(*key))
        {
            return Err(CatalogError::OrphanNutritionKey {
                key: orphan.to_owned(),
            });
        }
    } else {
        let pruned = nutrition.retain_items(|key| slugs.contains(key));
        for key in &pruned {
            warn!(
                nutrition.key = %key,
                "Pruned item nutrition key not reachable from any catalog item"
            );
        }
    }

    info!(
        sections = sections.len(),
        items = sections.iter().map(|s| s.items.len()).sum::<usize>(),
        exact_entries = nutrition.item_count(),
        section_entries = nutrition.section_count(),
        strict = options.strict_nutrition_keys,
        "Menu catalog loaded"
    );
    Ok(nutrition)
}

fn validate_section(position: usize, section: &Section) -> Result<(), CatalogError> {
    if section.id.trim().is_empty() {
        return Err(CatalogError::EmptySectionField {
            position,
            field: "id",
        });
    }
    if !is_slug(&section.id) {
        return Err(CatalogError::InvalidSectionId {
            section_id: section.id.clone(),
        });
    }
    if section.label.trim().is_empty() {
        return Err(CatalogError::EmptySectionField {
            position,
            field: "label",
        });
    }

    let mut names = HashSet::with_capacity(section.items.len());
    for (item_position, item) in section.items.iter().enumerate() {
        if item.name.trim().is_empty() {
            return Err(CatalogError::EmptyItemName {
                section_id: section.id.clone(),
                position: item_position,
            });
        }
        if !names.insert(item.name.to_lowercase()) {
            return Err(CatalogError::DuplicateItem {
                section_id: section.id.clone(),
                item: item.name.clone(),
            });
        }
        item.price
            .validate()
            .map_err(|e| CatalogError::InvalidPrice {
                item: item.name.clone(),
                reason: e.message,
            })?;
    }

    debug!(section.id = %section.id, items = section.items.len(), "Validated section");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_tables_parse() {
        let sections = parse_catalog(BUILTIN_CATALOG_JSON).unwrap();
        assert_eq!(sections.len(), 9);
        let tables =
            parse_nutrition(BUILTIN_SECTION_NUTRITION_JSON, BUILTIN_ITEM_NUTRITION_JSON).unwrap();
        assert_eq!(tables.section_count(), 9);
    }

    #[test]
    fn test_builtin_tables_satisfy_strict_mode() {
        let sections = parse_catalog(BUILTIN_CATALOG_JSON).unwrap();
        let tables =
            parse_nutrition(BUILTIN_SECTION_NUTRITION_JSON, BUILTIN_ITEM_NUTRITION_JSON).unwrap();
        let before = tables.item_count();
        let validated = validate(&sections, tables, LoadOptions::strict()).unwrap();
        assert_eq!(validated.item_count(), before);
    }

    #[test]
    fn test_parse_error_names_table() {
        let err = parse_catalog("{").unwrap_err();
        assert!(matches!(err, CatalogError::Parse { table: "catalog", .. }));
    }
}
