// ABOUTME: Catalog construction errors raised while loading compiled-in menu tables
// ABOUTME: Clone-able so a lazily loaded catalog result can be shared process-wide
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Train Therapy

use super::{AppError, ErrorCode};

/// Errors raised while building or validating the menu catalog.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CatalogError {
    /// One of the embedded tables could not be parsed
    #[error("Failed to parse {table} table: {reason}")]
    Parse {
        /// Table being parsed (catalog, section nutrition, item nutrition)
        table: &'static str,
        /// Parser message
        reason: String,
    },

    /// A section has an empty id or label
    #[error("Section at position {position} has an empty {field}")]
    EmptySectionField {
        /// Zero-based position in the catalog
        position: usize,
        /// Field that was empty
        field: &'static str,
    },

    /// A section id is not in slug form
    #[error("Section id '{section_id}' is not a slug (lowercase a-z, 0-9 and single hyphens)")]
    InvalidSectionId {
        /// Offending id
        section_id: String,
    },

    /// Two sections share the same id
    #[error("Duplicate section id '{section_id}'")]
    DuplicateSection {
        /// Repeated id
        section_id: String,
    },

    /// An item has an empty name
    #[error("Item at position {position} in section '{section_id}' has an empty name")]
    EmptyItemName {
        /// Section containing the item
        section_id: String,
        /// Zero-based position in the section
        position: usize,
    },

    /// Two items in one section share the same name
    #[error("Duplicate item '{item}' in section '{section_id}'")]
    DuplicateItem {
        /// Section containing both items
        section_id: String,
        /// Repeated name
        item: String,
    },

    /// A price is negative, non-finite, or a range with min > max
    #[error("Invalid price for '{item}': {reason}")]
    InvalidPrice {
        /// Item name
        item: String,
        /// What is wrong with the price
        reason: String,
    },

    /// Section nutrition refers to a section that is not in the catalog
    #[error("Section nutrition '{section_id}' does not match any catalog section")]
    UnknownNutritionSection {
        /// Unmatched section id
        section_id: String,
    },

    /// Item nutrition key is not the slug of any catalog item
    #[error("Item nutrition key '{key}' is not reachable from any catalog item name")]
    OrphanNutritionKey {
        /// Unreachable key
        key: String,
    },
}

impl CatalogError {
    /// Error code used when surfacing this error as an [`AppError`]
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::Parse { .. } => ErrorCode::SerializationError,
            Self::InvalidPrice { .. } => ErrorCode::ValueOutOfRange,
            Self::DuplicateSection { .. } | Self::DuplicateItem { .. } => {
                ErrorCode::ResourceAlreadyExists
            }
            Self::EmptySectionField { .. }
            | Self::InvalidSectionId { .. }
            | Self::EmptyItemName { .. }
            | Self::UnknownNutritionSection { .. }
            | Self::OrphanNutritionKey { .. } => ErrorCode::InvalidFormat,
        }
    }
}

impl From<CatalogError> for AppError {
    fn from(error: CatalogError) -> Self {
        Self::new(error.code(), error.to_string()).with_source(error)
    }
}
