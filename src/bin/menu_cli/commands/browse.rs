// ABOUTME: `browse` command for menu-cli
// ABOUTME: Lists matching items per section with formatted prices
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Train Therapy

use serde::Serialize;
use std::fmt::Write;
use tracing::info;

use train_therapy_menu::errors::AppResult;
use train_therapy_menu::models::Item;

use crate::helpers::display::{emit, underline};
use crate::Context;

#[derive(Serialize)]
struct ListedItem<'a> {
    #[serde(flatten)]
    item: &'a Item,
    slug: String,
    price_display: String,
}

#[derive(Serialize)]
struct ListedSection<'a> {
    id: &'a str,
    label: &'a str,
    items: Vec<ListedItem<'a>>,
}

/// List sections and items whose names contain `query`
pub fn run(ctx: &Context<'_>, query: &str) -> AppResult<()> {
    let matches = ctx.menu.search(query);
    info!(
        query = %query,
        sections = matches.len(),
        items = matches.iter().map(|s| s.items.len()).sum::<usize>(),
        "Menu search"
    );

    let listing: Vec<ListedSection<'_>> = matches
        .iter()
        .map(|section| ListedSection {
            id: section.id,
            label: section.label,
            items: section
                .items
                .iter()
                .map(|item| ListedItem {
                    item,
                    slug: item.slug(),
                    price_display: item.price.format_with_currency(&ctx.config.currency),
                })
                .collect(),
        })
        .collect();

    emit(ctx.format, &listing, || {
        if listing.is_empty() {
            return format!("No items match '{query}'\n");
        }
        let mut out = String::new();
        for section in &listing {
            out.push_str(&underline(section.label));
            for listed in &section.items {
                let badge = if listed.item.is_favorite() { "  ★ Favorite pick" } else { "" };
                let _ = writeln!(out, "  {:<28} {}{badge}", listed.item.name, listed.price_display);
            }
            out.push('\n');
        }
        out
    })
}
