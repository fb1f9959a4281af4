// ABOUTME: Integration tests for menu search and navigation over the built-in catalog
// ABOUTME: Validates case-insensitive matching, section omission and ordering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Train Therapy

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

fn names(menu: &train_therapy_menu::catalog::Menu, query: &str) -> Vec<(String, Vec<String>)> {
    menu.search(query)
        .into_iter()
        .map(|s| {
            (
                s.id.to_owned(),
                s.items.iter().map(|i| i.name.clone()).collect(),
            )
        })
        .collect()
}

#[test]
fn test_latte_query_matches_hot_and_cold() {
    let menu = common::builtin_menu();
    let result = names(menu, "latte");

    assert_eq!(
        result,
        vec![
            (
                "hot".to_owned(),
                vec!["Latte".to_owned(), "Spanish Latte".to_owned()]
            ),
            (
                "cold".to_owned(),
                vec!["Iced Latte".to_owned(), "Saffron Latte".to_owned()]
            ),
        ]
    );
}

#[test]
fn test_query_is_case_insensitive() {
    let menu = common::builtin_menu();
    assert_eq!(names(menu, "LATTE"), names(menu, "latte"));
    assert_eq!(names(menu, "LaTtE"), names(menu, "latte"));
}

#[test]
fn test_empty_query_returns_full_menu() {
    let menu = common::builtin_menu();
    let result = menu.search("");

    assert_eq!(result.len(), menu.sections().len());
    let total: usize = result.iter().map(|s| s.items.len()).sum();
    assert_eq!(total, menu.item_count());
    assert_eq!(result[0].id, "hot");
    assert_eq!(result[result.len() - 1].id, "snacks");
}

#[test]
fn test_sections_without_matches_are_omitted() {
    let menu = common::builtin_menu();
    let result = menu.search("mango");

    let ids: Vec<&str> = result.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec!["juices", "smoothies"]);
    assert!(result.iter().all(|s| !s.items.is_empty()));
}

#[test]
fn test_no_matches_returns_nothing() {
    let menu = common::builtin_menu();
    assert!(menu.search("pizza").is_empty());
}

#[test]
fn test_search_matches_names_with_diacritics() {
    let menu = common::builtin_menu();
    let result = names(menu, "AÇAÍ");
    assert_eq!(
        result,
        vec![("signature".to_owned(), vec!["Açaí Protein".to_owned()])]
    );
}

#[test]
fn test_navigation_follows_catalog_order() {
    let menu = common::builtin_menu();
    let anchors = menu.navigation();

    let ids: Vec<&str> = anchors.iter().map(|a| a.id).collect();
    assert_eq!(
        ids,
        vec![
            "hot",
            "cold",
            "juices",
            "smoothies",
            "shots",
            "protein",
            "beef-protein",
            "signature",
            "snacks"
        ]
    );
    assert_eq!(anchors[0].label, "Hot Drinks (Coffee)");
    assert_eq!(anchors[0].short_label, "Hot Drinks");
    assert_eq!(anchors[0].item_count, 9);
    assert_eq!(anchors[8].short_label, "Snacks");
}
