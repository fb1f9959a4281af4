// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Train Therapy
// ABOUTME: Output helpers for menu-cli
// ABOUTME: Writes structured documents for json/toon or a text rendering for the terminal

use serde::Serialize;
use std::process::ExitCode;

use train_therapy_menu::config::DisplayFormat;
use train_therapy_menu::constants::nutrition_copy::{BENEFITS_HEADING, MACROS_HEADING};
use train_therapy_menu::errors::{AppError, AppResult, ErrorResponse};
use train_therapy_menu::formatters::{format_output, format_output_pretty, OutputFormat};
use train_therapy_menu::models::NutritionPayload;

/// Print `data` in a structured format, or the text produced by `text`
pub fn emit<T, F>(format: DisplayFormat, data: &T, text: F) -> AppResult<()>
where
    T: Serialize,
    F: FnOnce() -> String,
{
    match format.structured() {
        Some(structured) => {
            let output = format_output_pretty(data, structured)?;
            println!("{}", output.data);
        }
        None => print!("{}", text()),
    }
    Ok(())
}

/// Horizontal rule under a heading
pub fn underline(heading: &str) -> String {
    format!("{heading}\n{}\n", "=".repeat(heading.chars().count()))
}

/// Benefits and macros block of a detail sheet
pub fn nutrition_block(nutrition: &NutritionPayload) -> String {
    let mut out = String::new();
    out.push_str(&format!("\n{BENEFITS_HEADING}\n"));
    for benefit in &nutrition.benefits {
        out.push_str(&format!("  • {benefit}\n"));
    }

    out.push_str(&format!("\n{MACROS_HEADING} ({})\n", nutrition.size.label()));
    let width = nutrition
        .macros
        .iter()
        .map(|m| m.label.chars().count())
        .max()
        .unwrap_or(0);
    for entry in &nutrition.macros {
        out.push_str(&format!("  {:<width$}  {}\n", entry.label, entry.value));
    }
    out
}

/// Print an error to stderr and map its code to the process exit status
///
/// A JSON request gets the error envelope on stderr; everything else gets one line.
pub fn report_error(error: AppError, format: Option<DisplayFormat>) -> ExitCode {
    let status = u8::try_from(error.code.exit_code()).unwrap_or(1);
    if format == Some(DisplayFormat::Json) {
        let response = ErrorResponse::from(error);
        match format_output(&response, OutputFormat::Json) {
            Ok(output) => eprintln!("{}", output.data),
            Err(e) => eprintln!("Error: {e}"),
        }
    } else {
        eprintln!("Error: {error}");
    }
    ExitCode::from(status)
}
