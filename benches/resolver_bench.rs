// ABOUTME: Criterion benchmarks for nutrition resolution and menu search
// ABOUTME: Measures exact lookups, aggregate fallback with range splitting, and name filtering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Train Therapy

//! Criterion benchmarks for the menu hot paths.

#![allow(
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    missing_docs
)]

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use train_therapy_menu::catalog::Menu;
use train_therapy_menu::models::SizeKey;
use train_therapy_menu::nutrition::split_for_size;
use train_therapy_menu::slug::slugify;

fn bench_resolve(c: &mut Criterion) {
    let menu = Menu::builtin().unwrap();
    let aggregate_only = menu.without_item_nutrition("latte");
    let (_, latte) = menu.find_item("hot", "Latte").unwrap();

    let mut group = c.benchmark_group("resolve");
    group.bench_function("exact", |b| {
        b.iter(|| menu.nutrition_for(black_box("hot"), black_box(latte), SizeKey::Large));
    });
    group.bench_function("aggregate", |b| {
        b.iter(|| aggregate_only.nutrition_for(black_box("hot"), black_box(latte), SizeKey::Large));
    });
    group.throughput(Throughput::Elements(menu.item_count() as u64));
    group.bench_function("whole_menu", |b| {
        b.iter(|| {
            for section in menu.sections() {
                for item in &section.items {
                    black_box(menu.nutrition_for(&section.id, item, SizeKey::Regular));
                }
            }
        });
    });
    group.finish();
}

fn bench_split_and_slug(c: &mut Criterion) {
    c.bench_function("split_for_size", |b| {
        b.iter(|| split_for_size(black_box("180–300 kcal"), SizeKey::Large));
    });
    c.bench_function("slugify", |b| {
        b.iter(|| slugify(black_box("Protein Cheese Cake")));
    });
}

fn bench_search(c: &mut Criterion) {
    let menu = Menu::builtin().unwrap();

    let mut group = c.benchmark_group("search");
    for query in ["", "latte", "zzz"] {
        group.bench_function(if query.is_empty() { "empty" } else { query }, |b| {
            b.iter(|| menu.search(black_box(query)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_resolve, bench_split_and_slug, bench_search);
criterion_main!(benches);
