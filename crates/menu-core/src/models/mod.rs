// ABOUTME: Core data models for the menu catalog and nutrition tables
// ABOUTME: Re-exports Price, SizeKey, Item, Section and nutrition types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Train Therapy

//! Core data models
//!
//! Every model is built once from compiled-in tables and never mutated
//! afterwards.

/// Catalog entries: items and sections
pub mod catalog;
/// Section aggregates, exact item tables and resolved payloads
pub mod nutrition;
/// Fixed and ranged prices
pub mod price;
/// Regular / large size variants
pub mod size;

pub use catalog::{Item, Section};
pub use nutrition::{ItemNutrition, Macro, NutritionBasis, NutritionPayload, SectionNutrition};
pub use price::{format_amount, Price};
pub use size::SizeKey;
