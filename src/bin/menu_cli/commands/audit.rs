// ABOUTME: `audit` command for menu-cli
// ABOUTME: Prints nutrition coverage counts, uncovered items and shared slugs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Train Therapy

use std::fmt::Write;
use tracing::warn;

use train_therapy_menu::errors::AppResult;
use train_therapy_menu::models::NutritionBasis;

use crate::helpers::display::{emit, underline};
use crate::Context;

/// Report nutrition coverage
pub fn run(ctx: &Context<'_>) -> AppResult<()> {
    let report = ctx.menu.audit();
    if !report.is_fully_covered() {
        warn!(missing = report.missing, "Items without any nutrition data");
    }

    emit(ctx.format, &report, || {
        let mut out = underline("Nutrition coverage");
        let _ = writeln!(
            out,
            "{} sections, {} items: {} exact, {} aggregate, {} missing",
            report.sections, report.items, report.exact, report.aggregate, report.missing
        );

        let fallback: Vec<_> = report
            .entries
            .iter()
            .filter(|e| e.basis != Some(NutritionBasis::Exact))
            .collect();
        if !fallback.is_empty() {
            out.push_str("\nWithout exact nutrition:\n");
            for entry in fallback {
                let basis = if entry.basis.is_some() { "aggregate" } else { "none" };
                let _ = writeln!(out, "  {}/{} ({basis})", entry.section_id, entry.item);
            }
        }

        if !report.collisions.is_empty() {
            out.push_str("\nShared slugs:\n");
            for collision in &report.collisions {
                let _ = writeln!(out, "  {}: {}", collision.slug, collision.items.join(", "));
            }
        }
        out
    })
}
