// ABOUTME: Resolves the nutrition block of an item detail view for a requested size
// ABOUTME: Exact item tables win; section aggregates are the fallback; neither yields None
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Train Therapy

use tracing::debug;

use menu_core::models::{Item, Macro, NutritionBasis, NutritionPayload, SizeKey};
use menu_core::slug::slugify;

use crate::range::split_for_size;
use crate::tables::NutritionSource;

/// Resolve display-ready nutrition for an item in a section at a size
///
/// The item-name slug is looked up in the exact table first. On a miss the
/// section aggregate is used with every macro range split for `size`. When
/// neither exists the result is `None` and no nutrition block is shown.
#[must_use]
pub fn resolve<S>(
    source: &S,
    item: &Item,
    section_id: &str,
    size: SizeKey,
) -> Option<NutritionPayload>
where
    S: NutritionSource + ?Sized,
{
    let slug = slugify(&item.name);

    if let Some(exact) = source.item_nutrition(&slug) {
        debug!(item.slug = %slug, size = %size, "Resolved exact item nutrition");
        return Some(NutritionPayload {
            basis: NutritionBasis::Exact,
            size,
            benefits: exact.benefits.clone(),
            macros: exact.macros_for(size).to_vec(),
            source: exact.source.clone(),
        });
    }

    let Some(aggregate) = source.section_nutrition(section_id) else {
        debug!(item.slug = %slug, section.id = %section_id, "No nutrition data for item");
        return None;
    };

    debug!(
        item.slug = %slug,
        section.id = %section_id,
        size = %size,
        "Falling back to section nutrition"
    );
    Some(NutritionPayload {
        basis: NutritionBasis::Aggregate,
        size,
        benefits: aggregate.benefits.clone(),
        macros: aggregate
            .macros
            .iter()
            .map(|m| Macro::new(m.label.as_str(), split_for_size(&m.value, size)))
            .collect(),
        source: None,
    })
}

/// Which table would serve an item, without building a payload
#[must_use]
pub fn coverage<S>(source: &S, item: &Item, section_id: &str) -> Option<NutritionBasis>
where
    S: NutritionSource + ?Sized,
{
    if source.item_nutrition(&slugify(&item.name)).is_some() {
        Some(NutritionBasis::Exact)
    } else if source.section_nutrition(section_id).is_some() {
        Some(NutritionBasis::Aggregate)
    } else {
        None
    }
}
