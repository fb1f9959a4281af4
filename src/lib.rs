// ABOUTME: Main library entry point for the Train Therapy menu engine
// ABOUTME: Catalog loading, search, detail views, configuration and logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Train Therapy

#![deny(unsafe_code)]

//! # Train Therapy Menu
//!
//! A static café menu: categorized items with fixed or ranged prices, search
//! filtering, navigation anchors, and an item detail view with nutrition
//! benefits and size-dependent macros.
//!
//! ## Architecture
//!
//! - **menu-core**: errors, models, slugs, output formatters (re-exported here)
//! - **menu-nutrition**: the nutrition resolver and macro range splitter
//! - **catalog**: compiled-in tables, validation, search, audit
//! - **view**: detail view and the transient UI state
//! - **config** / **logging**: environment-driven configuration and tracing setup
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use train_therapy_menu::catalog::Menu;
//! use train_therapy_menu::errors::AppResult;
//! use train_therapy_menu::models::SizeKey;
//!
//! fn main() -> AppResult<()> {
//!     let menu = Menu::builtin()?;
//!     for section in menu.search("latte") {
//!         println!("{}: {} matches", section.label, section.items.len());
//!     }
//!     let (section, item) = menu.find_item("juices", "Melon Juice")?;
//!     let nutrition = menu.nutrition_for(&section.id, item, SizeKey::Large);
//!     println!("{nutrition:?}");
//!     Ok(())
//! }
//! ```

/// Compiled-in catalog, validation, search and audit
pub mod catalog;

/// Environment-based configuration
pub mod config;

/// Structured logging setup
pub mod logging;

/// Item detail view and transient UI state
pub mod view;

pub use menu_core::{constants, errors, formatters, models, slug};

/// Nutrition resolution engine
pub use menu_nutrition as nutrition;
