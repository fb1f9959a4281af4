// ABOUTME: Integration tests for the formatters module
// ABOUTME: Tests format selection and JSON/TOON output of menu documents
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Train Therapy

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use train_therapy_menu::config::DisplayFormat;
use train_therapy_menu::formatters::{format_output, format_output_pretty, OutputFormat};

#[test]
fn test_display_format_selects_serializer() {
    assert_eq!(DisplayFormat::Text.structured(), None);
    assert_eq!(DisplayFormat::Json.structured(), Some(OutputFormat::Json));
    assert_eq!(DisplayFormat::Toon.structured(), Some(OutputFormat::Toon));
    assert_eq!(OutputFormat::Toon.to_string(), "toon");
}

#[test]
fn test_format_navigation_as_json() {
    let menu = common::builtin_menu();
    let anchors = menu.navigation();

    let output = format_output(&anchors, OutputFormat::Json).expect("JSON format should succeed");
    assert_eq!(output.format, OutputFormat::Json);
    assert!(output.data.starts_with('['));
    assert!(output.data.contains(r#""short_label":"Hot Drinks""#));

    let parsed: serde_json::Value = serde_json::from_str(&output.data).unwrap();
    assert_eq!(parsed.as_array().unwrap().len(), 9);
}

#[test]
fn test_format_search_results_pretty() {
    let menu = common::builtin_menu();
    let results = menu.search("espresso");

    let output = format_output_pretty(&results, OutputFormat::Json).unwrap();
    assert!(output.data.contains('\n'));
    assert!(output.data.contains("Single Espresso"));
    assert!(output.data.contains("Double Espresso"));
}

#[cfg(feature = "toon")]
#[test]
fn test_format_toon() {
    let menu = common::builtin_menu();
    let report = menu.audit();

    let output = format_output(&report, OutputFormat::Toon).expect("TOON format should succeed");
    assert_eq!(output.format, OutputFormat::Toon);
    assert!(output.data.contains("salted-caramel"));
}
