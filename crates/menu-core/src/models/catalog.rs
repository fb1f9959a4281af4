// ABOUTME: Menu catalog entries - items with prices and sections grouping them
// ABOUTME: Provides slug keys, favorite detection and short navigation labels
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Train Therapy

use serde::{Deserialize, Serialize};

use super::Price;
use crate::constants::tags;
use crate::slug::slugify;

/// A single orderable menu item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Display name, unique within its section
    pub name: String,
    /// Fixed or size-dependent price
    pub price: Price,
    /// Free-form marker such as `"favorite"`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    /// Static image path
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Item {
    /// Create an item without tag or image
    #[must_use]
    pub fn new(name: impl Into<String>, price: Price) -> Self {
        Self {
            name: name.into(),
            price,
            tag: None,
            image: None,
        }
    }

    /// Attach a tag
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Attach an image path
    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Lookup key for item-level nutrition
    #[must_use]
    pub fn slug(&self) -> String {
        slugify(&self.name)
    }

    /// Whether the item carries the house-favorite tag
    #[must_use]
    pub fn is_favorite(&self) -> bool {
        self.tag.as_deref() == Some(tags::FAVORITE)
    }

    /// Case-insensitive substring match against the display name
    ///
    /// `needle` must already be lowercased.
    #[must_use]
    pub fn name_contains(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
    }
}

/// A titled group of items, also used as a navigation anchor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Unique anchor id
    pub id: String,
    /// Display label
    pub label: String,
    /// Items in display order
    pub items: Vec<Item>,
}

impl Section {
    /// Create a section
    #[must_use]
    pub fn new(id: impl Into<String>, label: impl Into<String>, items: Vec<Item>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            items,
        }
    }

    /// Label with parenthesised qualifiers removed, for compact navigation chips
    ///
    /// `"Hot Drinks (Coffee)"` becomes `"Hot Drinks"`.
    #[must_use]
    pub fn short_label(&self) -> String {
        let mut out = String::with_capacity(self.label.len());
        let mut rest = self.label.as_str();
        while let Some(open) = rest.find('(') {
            let Some(close) = rest[open..].find(')') else {
                break;
            };
            let before = rest[..open].trim_end();
            let after = rest[open + close + 1..].trim_start();
            out.push_str(before);
            if !before.is_empty() && !after.is_empty() {
                out.push(' ');
            }
            rest = after;
        }
        out.push_str(rest);
        out
    }

    /// Find an item by exact name (case-insensitive) or by slug
    #[must_use]
    pub fn find_item(&self, name_or_slug: &str) -> Option<&Item> {
        let lowered = name_or_slug.trim().to_lowercase();
        self.items
            .iter()
            .find(|item| item.name.to_lowercase() == lowered)
            .or_else(|| {
                let slug = slugify(name_or_slug);
                self.items.iter().find(|item| item.slug() == slug)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(label: &str) -> Section {
        Section::new("s", label, Vec::new())
    }

    #[test]
    fn test_short_label_strips_qualifiers() {
        assert_eq!(section("Hot Drinks (Coffee)").short_label(), "Hot Drinks");
        assert_eq!(section("Snacks (Sugar-Free)").short_label(), "Snacks");
        assert_eq!(section("Smoothies").short_label(), "Smoothies");
        assert_eq!(section("Cold (Iced) Coffee").short_label(), "Cold Coffee");
        assert_eq!(section("Broken (label").short_label(), "Broken (label");
    }

    #[test]
    fn test_find_item_by_name_or_slug() {
        let section = Section::new(
            "hot",
            "Hot Drinks",
            vec![Item::new("Spanish Latte", Price::Fixed(1.6))],
        );
        assert!(section.find_item("spanish latte").is_some());
        assert!(section.find_item("spanish-latte").is_some());
        assert!(section.find_item("flat white").is_none());
    }

    #[test]
    fn test_favorite_tag() {
        let item = Item::new("Açaí Protein", Price::Fixed(2.5)).with_tag("favorite");
        assert!(item.is_favorite());
        assert!(!Item::new("Latte", Price::Fixed(1.5)).is_favorite());
    }
}
