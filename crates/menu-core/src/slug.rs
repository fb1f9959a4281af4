// ABOUTME: Slug normalization that turns display names into nutrition lookup keys
// ABOUTME: Lowercases, collapses runs outside [a-z0-9] to one hyphen, trims edge hyphens
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Train Therapy

/// Canonical lookup key for a display name
///
/// Every maximal run of characters outside `[a-z0-9]` (after lowercasing)
/// becomes a single hyphen, and a leading or trailing hyphen is dropped.
/// Non-ASCII letters fall outside the alphabet, so `"Açaí Protein"` maps to
/// `"a-a-protein"`. Total and idempotent.
#[must_use]
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut in_gap = false;

    for c in name.chars().flat_map(char::to_lowercase) {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if in_gap && !slug.is_empty() {
                slug.push('-');
            }
            slug.push(c);
            in_gap = false;
        } else {
            in_gap = true;
        }
    }

    slug
}

/// Whether a string is already in slug form
#[must_use]
pub fn is_slug(candidate: &str) -> bool {
    !candidate.starts_with('-')
        && !candidate.ends_with('-')
        && !candidate.contains("--")
        && candidate
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_menu_names() {
        assert_eq!(slugify("Latte"), "latte");
        assert_eq!(slugify("Spanish Latte"), "spanish-latte");
        assert_eq!(slugify("Cookies & Cream"), "cookies-cream");
        assert_eq!(slugify("Açaí Protein"), "a-a-protein");
        assert_eq!(slugify("  Vitamin C!  "), "vitamin-c");
        assert_eq!(slugify("---"), "");
    }

    #[test]
    fn test_slug_output_is_a_slug() {
        for name in ["Iced Spanish", "Mass Gainer", "Snacks (Sugar‑Free)", "Go  Green"] {
            let slug = slugify(name);
            assert!(is_slug(&slug), "{slug} should be a slug");
            assert_eq!(slugify(&slug), slug);
        }
    }
}
