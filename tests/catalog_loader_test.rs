// ABOUTME: Integration tests for catalog loading and validation
// ABOUTME: Covers malformed tables, duplicate entries, bad prices and orphan nutrition keys
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Train Therapy

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use train_therapy_menu::catalog::{LoadOptions, Menu};
use train_therapy_menu::errors::{AppError, CatalogError, ErrorCode};

const EMPTY: &str = "{}";

fn load(catalog: &str, sections: &str, items: &str, strict: bool) -> Result<Menu, CatalogError> {
    common::init_test_logging();
    Menu::from_json(
        catalog,
        sections,
        items,
        LoadOptions {
            strict_nutrition_keys: strict,
        },
    )
}

const CATALOG: &str = r#"{
  "sections": [
    { "id": "hot", "label": "Hot Drinks", "items": [
      { "name": "Latte", "price": 1.5 },
      { "name": "Cookies & Cream", "price": { "min": 1.5, "max": 2.0 }, "tag": "favorite" }
    ]}
  ]
}"#;

const ITEMS: &str = r#"{
  "latte": { "benefits": ["Calcium"], "macros": { "regular": [{ "label": "Calories", "value": "150 kcal" }] } },
  "cookies-cream": { "benefits": [], "macros": {} },
  "flat-white": { "benefits": [], "macros": {} }
}"#;

#[test]
fn test_builtin_menu_loads() {
    let menu = common::builtin_menu();
    assert_eq!(menu.sections().len(), 9);
    assert_eq!(menu.item_count(), 53);
    assert_eq!(menu.nutrition().section_count(), 9);
    assert_eq!(menu.nutrition().item_count(), 51);
}

#[test]
fn test_builtin_menu_passes_strict_mode() {
    common::init_test_logging();
    let menu = Menu::load_builtin(LoadOptions::strict()).unwrap();
    assert_eq!(menu.nutrition().item_count(), 51);
}

#[test]
fn test_builtin_is_shared() {
    let a = Menu::builtin().unwrap();
    let b = Menu::builtin().unwrap();
    assert!(std::ptr::eq(a, b));
}

#[test]
fn test_lenient_mode_prunes_orphan_keys() {
    let menu = load(CATALOG, EMPTY, ITEMS, false).unwrap();
    assert_eq!(menu.nutrition().item_keys(), vec!["cookies-cream", "latte"]);
}

#[test]
fn test_strict_mode_rejects_orphan_keys() {
    let err = load(CATALOG, EMPTY, ITEMS, true).unwrap_err();
    assert_eq!(
        err,
        CatalogError::OrphanNutritionKey {
            key: "flat-white".to_owned()
        }
    );
}

#[test]
fn test_parsed_items_keep_tags_and_ranges() {
    let menu = load(CATALOG, EMPTY, EMPTY, true).unwrap();
    let (_, item) = menu.find_item("hot", "cookies-cream").unwrap();
    assert!(item.is_favorite());
    assert!(item.price.offers_size_choice());
}

#[test]
fn test_malformed_json_reports_table() {
    let err = load("not json", EMPTY, EMPTY, false).unwrap_err();
    assert!(matches!(err, CatalogError::Parse { table: "catalog", .. }));

    let err = load(CATALOG, "[", EMPTY, false).unwrap_err();
    assert!(matches!(
        err,
        CatalogError::Parse {
            table: "section nutrition",
            ..
        }
    ));
}

#[test]
fn test_duplicate_section_is_rejected() {
    let catalog = r#"{ "sections": [
        { "id": "hot", "label": "Hot", "items": [] },
        { "id": "hot", "label": "Hot again", "items": [] }
    ]}"#;
    let err = load(catalog, EMPTY, EMPTY, false).unwrap_err();
    assert_eq!(
        err,
        CatalogError::DuplicateSection {
            section_id: "hot".to_owned()
        }
    );
}

#[test]
fn test_non_slug_section_id_is_rejected() {
    for id in ["Hot Drinks!", "Hot", "-hot", "hot--drinks"] {
        let catalog = format!(
            r#"{{ "sections": [ {{ "id": "{id}", "label": "Hot", "items": [
                {{ "name": "Latte", "price": 1.5 }}
            ] }} ]}}"#
        );
        let err = load(&catalog, EMPTY, EMPTY, true).unwrap_err();
        assert_eq!(
            err,
            CatalogError::InvalidSectionId {
                section_id: id.to_owned()
            }
        );
        assert_eq!(err.code(), ErrorCode::InvalidFormat);
    }
}

#[test]
fn test_empty_label_is_rejected() {
    let catalog = r#"{ "sections": [ { "id": "hot", "label": "  ", "items": [] } ]}"#;
    let err = load(catalog, EMPTY, EMPTY, false).unwrap_err();
    assert_eq!(
        err,
        CatalogError::EmptySectionField {
            position: 0,
            field: "label"
        }
    );
}

#[test]
fn test_duplicate_item_names_compare_case_insensitively() {
    let catalog = r#"{ "sections": [ { "id": "hot", "label": "Hot", "items": [
        { "name": "Latte", "price": 1.5 },
        { "name": "LATTE", "price": 1.6 }
    ]}]}"#;
    let err = load(catalog, EMPTY, EMPTY, false).unwrap_err();
    assert!(matches!(err, CatalogError::DuplicateItem { .. }));
}

#[test]
fn test_inverted_price_range_is_rejected() {
    let catalog = r#"{ "sections": [ { "id": "juices", "label": "Juices", "items": [
        { "name": "Mango", "price": { "min": 2.3, "max": 2.1 } }
    ]}]}"#;
    let err = load(catalog, EMPTY, EMPTY, false).unwrap_err();
    assert!(matches!(err, CatalogError::InvalidPrice { ref item, .. } if item == "Mango"));

    let app: AppError = err.into();
    assert_eq!(app.code, ErrorCode::ValueOutOfRange);
}

#[test]
fn test_negative_price_is_rejected() {
    let catalog = r#"{ "sections": [ { "id": "hot", "label": "Hot", "items": [
        { "name": "Latte", "price": -1.0 }
    ]}]}"#;
    assert!(matches!(
        load(catalog, EMPTY, EMPTY, false).unwrap_err(),
        CatalogError::InvalidPrice { .. }
    ));
}

#[test]
fn test_unknown_nutrition_section_is_rejected() {
    let sections = r#"{ "cold": { "benefits": [], "macros": [] } }"#;
    let err = load(CATALOG, sections, EMPTY, false).unwrap_err();
    assert_eq!(
        err,
        CatalogError::UnknownNutritionSection {
            section_id: "cold".to_owned()
        }
    );
}

#[test]
fn test_audit_reports_builtin_collisions() {
    let report = common::builtin_menu().audit();

    assert_eq!(report.items, 53);
    assert_eq!(report.exact, 53);
    assert!(report.is_fully_covered());
    let slugs: Vec<&str> = report.collisions.iter().map(|c| c.slug.as_str()).collect();
    assert_eq!(slugs, vec!["mixed-berries", "salted-caramel"]);
    assert_eq!(
        report.collisions[1].items,
        vec![
            "cold/Salted Caramel".to_owned(),
            "protein/Salted Caramel".to_owned()
        ]
    );
}

#[test]
fn test_audit_counts_fallbacks() {
    let menu = common::small_menu();
    let report = menu.audit();
    assert_eq!(report.exact, 1);
    assert_eq!(report.aggregate, 2);
    assert_eq!(report.missing, 1);
    assert!(!report.is_fully_covered());
}
