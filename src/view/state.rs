// ABOUTME: Transient menu browsing state - search query, open item and size toggle
// ABOUTME: Opening an item always starts at the regular size
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Train Therapy

use tracing::debug;

use menu_core::constants::pricing::DEFAULT_CURRENCY;
use menu_core::errors::AppResult;
use menu_core::models::SizeKey;

use super::detail::{effective_size, DetailView};
use crate::catalog::{Menu, SectionMatch};

/// Item currently open in the detail sheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// Section the item was opened from
    pub section_id: String,
    /// Item display name
    pub item: String,
}

/// Browsing state over a borrowed menu
#[derive(Debug, Clone)]
pub struct MenuState<'m> {
    menu: &'m Menu,
    currency: String,
    query: String,
    selection: Option<Selection>,
    size: SizeKey,
}

impl<'m> MenuState<'m> {
    /// Fresh state: empty query, nothing open, regular size
    #[must_use]
    pub fn new(menu: &'m Menu) -> Self {
        Self::with_currency(menu, DEFAULT_CURRENCY)
    }

    /// Fresh state displaying prices in `currency`
    #[must_use]
    pub fn with_currency(menu: &'m Menu, currency: impl Into<String>) -> Self {
        Self {
            menu,
            currency: currency.into(),
            query: String::new(),
            selection: None,
            size: SizeKey::Regular,
        }
    }

    /// Current search text
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Currently open item
    #[must_use]
    pub const fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    /// Current size toggle
    #[must_use]
    pub const fn size(&self) -> SizeKey {
        self.size
    }

    /// Replace the search text
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Clear the search text
    pub fn clear_query(&mut self) {
        self.query.clear();
    }

    /// Open an item's detail sheet, resetting the size to regular
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown section or item; the previous
    /// selection is kept in that case
    pub fn select(&mut self, section_id: &str, item: &str) -> AppResult<()> {
        let (section, found) = self.menu.find_item(section_id, item)?;
        debug!(section.id = %section.id, item = %found.name, "Opened item detail");
        self.selection = Some(Selection {
            section_id: section.id.clone(),
            item: found.name.clone(),
        });
        self.size = SizeKey::Regular;
        Ok(())
    }

    /// Switch the size toggle
    ///
    /// Only honoured while a ranged-price item is open. Returns whether the
    /// size changed.
    pub fn set_size(&mut self, size: SizeKey) -> bool {
        let Some(selection) = &self.selection else {
            return false;
        };
        let Ok((_, item)) = self.menu.find_item(&selection.section_id, &selection.item) else {
            return false;
        };
        let next = effective_size(&item.price, size);
        if next == self.size {
            return false;
        }
        self.size = next;
        true
    }

    /// Close the detail sheet
    pub fn close(&mut self) {
        self.selection = None;
        self.size = SizeKey::Regular;
    }

    /// Back to the initial state
    pub fn reset(&mut self) {
        self.clear_query();
        self.close();
    }

    /// Sections matching the current query
    #[must_use]
    pub fn visible_sections(&self) -> Vec<SectionMatch<'m>> {
        self.menu.search(&self.query)
    }

    /// Detail view of the open item, if any
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the selection no longer resolves
    pub fn detail(&self) -> AppResult<Option<DetailView>> {
        self.selection
            .as_ref()
            .map(|s| {
                DetailView::build(self.menu, &s.section_id, &s.item, self.size, &self.currency)
            })
            .transpose()
    }
}
