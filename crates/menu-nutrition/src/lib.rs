// ABOUTME: Nutrition resolution engine for menu items
// ABOUTME: Exact item tables take precedence, section ranges are split per size as fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Train Therapy

#![deny(unsafe_code)]

//! # Menu Nutrition
//!
//! Resolves the nutrition block shown in an item's detail view.
//!
//! - **range**: splits section-level range strings such as `"180–300 kcal"`
//! - **tables**: in-memory nutrition tables behind the `NutritionSource` trait
//! - **resolver**: exact-then-aggregate resolution producing a `NutritionPayload`
//!
//! Everything here is pure and synchronous; resolving the same inputs twice
//! yields identical payloads.

/// Macro range splitting for size-specific values
pub mod range;
/// Exact-then-aggregate nutrition resolution
pub mod resolver;
/// Nutrition lookup tables and the `NutritionSource` seam
pub mod tables;

pub use range::{split_for_size, MacroRange};
pub use resolver::{coverage, resolve};
pub use tables::{NutritionSource, NutritionTables};
