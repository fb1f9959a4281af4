// ABOUTME: `show` command for menu-cli
// ABOUTME: Renders an item's detail sheet with size options and nutrition
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Train Therapy

use std::fmt::Write;

use train_therapy_menu::errors::AppResult;
use train_therapy_menu::models::SizeKey;
use train_therapy_menu::view::DetailView;

use crate::helpers::display::{emit, nutrition_block, underline};
use crate::Context;

/// Show one item at a size
pub fn run(
    ctx: &Context<'_>,
    section_id: &str,
    item: &str,
    size: Option<SizeKey>,
) -> AppResult<()> {
    let size = size.unwrap_or(ctx.config.default_size);
    let view = DetailView::build(ctx.menu, section_id, item, size, &ctx.config.currency)?;

    emit(ctx.format, &view, || render(&view))
}

fn render(view: &DetailView) -> String {
    let mut out = underline(&view.item.name);
    let _ = writeln!(out, "Section: {}", view.section_label);
    if view.favorite {
        out.push_str("★ Favorite pick\n");
    }
    let _ = writeln!(out, "Price: {}", view.price_display);

    if view.has_size_choice() {
        out.push_str("Sizes:\n");
        for option in &view.size_options {
            let marker = if option.selected { '●' } else { '○' };
            let _ = writeln!(out, "  {marker} {}", option.label);
        }
    }

    if let Some(nutrition) = &view.nutrition {
        out.push_str(&nutrition_block(nutrition));
    }
    if let Some(disclaimer) = view.disclaimer {
        let _ = writeln!(out, "\n{disclaimer}");
    }
    out
}
