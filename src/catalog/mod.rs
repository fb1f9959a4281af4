// ABOUTME: Menu catalog - ordered sections with their nutrition tables
// ABOUTME: Built once from compiled-in data and shared read-only for the process lifetime
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Train Therapy

//! # Catalog
//!
//! `Menu` owns the ordered sections and the nutrition tables. The built-in
//! menu is parsed from embedded JSON on first use and never mutated.

/// Coverage report over the catalog
pub mod audit;
/// Embedded tables, parsing and validation
pub mod loader;
/// Case-insensitive name search
pub mod search;

pub use audit::{AuditReport, CoverageEntry, SlugCollision};
pub use loader::LoadOptions;
pub use search::{filter_sections, SectionMatch};

use serde::Serialize;
use std::sync::LazyLock;

use menu_core::errors::{AppError, AppResult, CatalogError};
use menu_core::models::{Item, NutritionPayload, Section, SizeKey};
use menu_nutrition::NutritionTables;

/// Built-in menu, parsed once per process
static BUILTIN_MENU: LazyLock<Result<Menu, CatalogError>> =
    LazyLock::new(|| Menu::load_builtin(LoadOptions::default()));

/// The complete menu: sections in display order plus nutrition tables
#[derive(Debug, Clone)]
pub struct Menu {
    sections: Vec<Section>,
    nutrition: NutritionTables,
}

/// Navigation anchor for one section
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavAnchor<'a> {
    /// Section id used as the anchor
    pub id: &'a str,
    /// Full label
    pub label: &'a str,
    /// Label without parenthesised qualifiers
    pub short_label: String,
    /// Number of items in the section
    pub item_count: usize,
}

impl Menu {
    /// Build and validate a menu
    ///
    /// # Errors
    ///
    /// Returns a `CatalogError` for the first validation failure, see
    /// [`loader::validate`]
    pub fn new(
        sections: Vec<Section>,
        nutrition: NutritionTables,
        options: LoadOptions,
    ) -> Result<Self, CatalogError> {
        let nutrition = loader::validate(&sections, nutrition, options)?;
        Ok(Self {
            sections,
            nutrition,
        })
    }

    /// Shared built-in menu
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded tables fail to parse or validate
    pub fn builtin() -> AppResult<&'static Self> {
        BUILTIN_MENU.as_ref().map_err(|e| AppError::from(e.clone()))
    }

    /// Parse the embedded tables with explicit options, bypassing the shared instance
    ///
    /// # Errors
    ///
    /// Returns a `CatalogError` if the embedded tables fail to parse or validate
    pub fn load_builtin(options: LoadOptions) -> Result<Self, CatalogError> {
        Self::from_json(
            loader::BUILTIN_CATALOG_JSON,
            loader::BUILTIN_SECTION_NUTRITION_JSON,
            loader::BUILTIN_ITEM_NUTRITION_JSON,
            options,
        )
    }

    /// Build a menu from JSON documents
    ///
    /// `catalog` is `{ "sections": [...] }`, `section_nutrition` maps section ids
    /// to aggregates, `item_nutrition` maps item slugs to exact tables.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Parse` for malformed JSON and any validation error
    pub fn from_json(
        catalog: &str,
        section_nutrition: &str,
        item_nutrition: &str,
        options: LoadOptions,
    ) -> Result<Self, CatalogError> {
        let sections = loader::parse_catalog(catalog)?;
        let nutrition = loader::parse_nutrition(section_nutrition, item_nutrition)?;
        Self::new(sections, nutrition, options)
    }

    /// Sections in display order
    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Section by id
    #[must_use]
    pub fn section(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    /// Locate an item by section id and name (or slug)
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` when the section or the item does not exist
    pub fn find_item(&self, section_id: &str, item: &str) -> AppResult<(&Section, &Item)> {
        let section = self
            .section(section_id)
            .ok_or_else(|| AppError::not_found(format!("Section '{section_id}'")))?;
        let found = section.find_item(item).ok_or_else(|| {
            AppError::not_found(format!("Item '{item}' in section '{section_id}'"))
                .with_resource_id(format!("{section_id}/{item}"))
        })?;
        Ok((section, found))
    }

    /// Nutrition tables
    #[must_use]
    pub fn nutrition(&self) -> &NutritionTables {
        &self.nutrition
    }

    /// Copy of this menu without one exact item entry
    ///
    /// Removing entries cannot break catalog invariants, so no revalidation is needed.
    #[must_use]
    pub fn without_item_nutrition(&self, slug: &str) -> Self {
        Self {
            sections: self.sections.clone(),
            nutrition: self.nutrition.without_item(slug),
        }
    }

    /// Resolved nutrition for an item, see [`menu_nutrition::resolve`]
    #[must_use]
    pub fn nutrition_for(
        &self,
        section_id: &str,
        item: &Item,
        size: SizeKey,
    ) -> Option<NutritionPayload> {
        menu_nutrition::resolve(&self.nutrition, item, section_id, size)
    }

    /// Sections and items whose names contain `query`, case-insensitively
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<SectionMatch<'_>> {
        filter_sections(&self.sections, query)
    }

    /// Navigation anchors in display order
    #[must_use]
    pub fn navigation(&self) -> Vec<NavAnchor<'_>> {
        self.sections
            .iter()
            .map(|s| NavAnchor {
                id: &s.id,
                label: &s.label,
                short_label: s.short_label(),
                item_count: s.items.len(),
            })
            .collect()
    }

    /// Nutrition coverage report
    #[must_use]
    pub fn audit(&self) -> AuditReport {
        AuditReport::build(self)
    }

    /// Total number of items across sections
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.sections.iter().map(|s| s.items.len()).sum()
    }
}
