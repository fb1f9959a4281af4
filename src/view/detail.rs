// ABOUTME: Item detail view - active price, size options and resolved nutrition
// ABOUTME: Large requests on fixed-price items fall back to regular since no toggle is offered
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Train Therapy

use serde::Serialize;

use menu_core::constants::nutrition_copy::DISCLAIMER;
use menu_core::errors::AppResult;
use menu_core::models::{format_amount, Item, NutritionPayload, Price, SizeKey};

use crate::catalog::Menu;

/// One button of the size toggle
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SizeOption {
    /// Size this option selects
    pub size: SizeKey,
    /// Button text, e.g. `Regular · 1.70 BHD`
    pub label: String,
    /// Amount charged for this size
    pub price: f64,
    /// Whether this option is the active size
    pub selected: bool,
}

/// Everything shown on an item's detail sheet
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailView {
    /// Section the item was opened from
    pub section_id: String,
    /// Label of that section
    pub section_label: String,
    /// The item itself
    pub item: Item,
    /// Effective size after coercion
    pub size: SizeKey,
    /// Amount for the effective size
    pub price: f64,
    /// Formatted active price with currency
    pub price_display: String,
    /// Full price, range included, with currency
    pub list_price_display: String,
    /// Toggle buttons; empty for fixed prices
    pub size_options: Vec<SizeOption>,
    /// Whether to show the favorite badge
    pub favorite: bool,
    /// Nutrition block, absent when no table covers the item
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nutrition: Option<NutritionPayload>,
    /// Shown whenever nutrition is present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disclaimer: Option<&'static str>,
}

impl DetailView {
    /// Build the view for an item looked up by section id and name or slug
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` when the section or item does not exist
    pub fn build(
        menu: &Menu,
        section_id: &str,
        item: &str,
        requested: SizeKey,
        currency: &str,
    ) -> AppResult<Self> {
        let (section, item) = menu.find_item(section_id, item)?;
        let size = effective_size(&item.price, requested);
        let nutrition = menu.nutrition_for(&section.id, item, size);
        let price = item.price.amount_for(size);

        Ok(Self {
            section_id: section.id.clone(),
            section_label: section.label.clone(),
            price,
            price_display: format!("{} {currency}", format_amount(price)),
            list_price_display: item.price.format_with_currency(currency),
            size_options: size_options(&item.price, size, currency),
            favorite: item.is_favorite(),
            disclaimer: nutrition.is_some().then_some(DISCLAIMER),
            nutrition,
            item: item.clone(),
            size,
        })
    }

    /// Whether the size toggle is shown
    #[must_use]
    pub fn has_size_choice(&self) -> bool {
        !self.size_options.is_empty()
    }
}

/// Size actually used for a request: fixed prices only have a regular size
#[must_use]
pub const fn effective_size(price: &Price, requested: SizeKey) -> SizeKey {
    if price.offers_size_choice() {
        requested
    } else {
        SizeKey::Regular
    }
}

fn size_options(price: &Price, selected: SizeKey, currency: &str) -> Vec<SizeOption> {
    if !price.offers_size_choice() {
        return Vec::new();
    }
    SizeKey::ALL
        .iter()
        .map(|&size| {
            let amount = price.amount_for(size);
            SizeOption {
                size,
                label: format!("{} · {} {currency}", size.label(), format_amount(amount)),
                price: amount,
                selected: size == selected,
            }
        })
        .collect()
}
