// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging setup and small hand-built menus
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Train Therapy
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `train_therapy_menu`

use std::sync::Once;

use train_therapy_menu::catalog::{LoadOptions, Menu};
use train_therapy_menu::models::{
    Item, ItemNutrition, Macro, Price, Section, SectionNutrition, SizeKey,
};
use train_therapy_menu::nutrition::NutritionTables;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// The built-in menu
pub fn builtin_menu() -> &'static Menu {
    init_test_logging();
    Menu::builtin().unwrap()
}

/// Section aggregate with the given macros
pub fn section_nutrition(benefits: &[&str], macros: &[(&str, &str)]) -> SectionNutrition {
    SectionNutrition {
        benefits: benefits.iter().map(|b| (*b).to_owned()).collect(),
        macros: macros.iter().map(|(l, v)| Macro::new(*l, *v)).collect(),
    }
}

/// Exact table with the given per-size macros
pub fn item_nutrition(
    benefits: &[&str],
    regular: &[(&str, &str)],
    large: &[(&str, &str)],
) -> ItemNutrition {
    let mut nutrition = ItemNutrition {
        benefits: benefits.iter().map(|b| (*b).to_owned()).collect(),
        ..ItemNutrition::default()
    };
    for (size, macros) in [(SizeKey::Regular, regular), (SizeKey::Large, large)] {
        if !macros.is_empty() {
            nutrition
                .macros
                .insert(size, macros.iter().map(|(l, v)| Macro::new(*l, *v)).collect());
        }
    }
    nutrition
}

/// Two-section menu: `hot` with aggregates only, `juices` with one exact entry
pub fn small_menu() -> Menu {
    init_test_logging();
    let sections = vec![
        Section::new(
            "hot",
            "Hot Drinks (Coffee)",
            vec![
                Item::new("Latte", Price::Fixed(1.5)),
                Item::new("Spanish Latte", Price::Fixed(1.6)),
            ],
        ),
        Section::new(
            "juices",
            "Fresh Juices",
            vec![
                Item::new("Melon Juice", Price::Range { min: 1.7, max: 2.0 }),
                Item::new("Vitamin C", Price::Fixed(2.1)).with_tag("favorite"),
            ],
        ),
    ];
    let tables = NutritionTables::default()
        .with_section(
            "hot",
            section_nutrition(&["Natural caffeine"], &[("Calories", "5–180 kcal")]),
        )
        .with_item(
            "melon-juice",
            item_nutrition(
                &["Hydrating"],
                &[("Calories", "90 kcal")],
                &[("Calories", "130 kcal")],
            ),
        );
    Menu::new(sections, tables, LoadOptions::strict()).unwrap()
}
