// ABOUTME: `sections` command for menu-cli
// ABOUTME: Prints navigation anchors in menu order with item counts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Train Therapy

use std::fmt::Write;

use train_therapy_menu::errors::AppResult;

use crate::helpers::display::emit;
use crate::Context;

/// List sections
pub fn run(ctx: &Context<'_>) -> AppResult<()> {
    let anchors = ctx.menu.navigation();
    emit(ctx.format, &anchors, || {
        let width = anchors.iter().map(|a| a.id.len()).max().unwrap_or(0);
        anchors.iter().fold(String::new(), |mut out, anchor| {
            let _ = writeln!(
                out,
                "{:<width$}  {} ({} items)",
                anchor.id, anchor.short_label, anchor.item_count
            );
            out
        })
    })
}
