// ABOUTME: Criterion benchmarks for the recipe preference filter
// ABOUTME: Measures plan compilation and filtering over generated corpora of several sizes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the recipe preference filter.
//!
//! Corpora are generated deterministically so runs are comparable.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use nutrimate_server::models::{DietaryFlag, Recipe};
use nutrimate_server::recipes::{filter_recipes, CategoryTable, FilterCriteria, FilterPlan};

const CORPUS_SIZES: [usize; 3] = [100, 1_000, 10_000];

const INGREDIENT_POOL: [&str; 16] = [
    "chicken breast",
    "tofu",
    "mozzarella cheese",
    "olive oil",
    "garlic",
    "brown rice",
    "lentils",
    "butter",
    "spinach",
    "salmon",
    "whole wheat flour",
    "almond milk",
    "chickpeas",
    "tomato",
    "honey",
    "soy sauce",
];

/// Build `count` recipes with rotating ingredients and flags
fn generate_corpus(count: usize) -> Vec<Recipe> {
    (0..count)
        .map(|index| {
            let ingredients: Vec<&str> = (0..5)
                .map(|offset| INGREDIENT_POOL[(index * 7 + offset * 3) % INGREDIENT_POOL.len()])
                .collect();
            let mut recipe = Recipe::new(
                format!("Benchmark Recipe {index}"),
                ingredients.join(", "),
            )
            .with_macros(
                200.0 + (index % 600) as f64,
                5.0 + (index % 40) as f64,
                (index % 30) as f64,
            );
            for (position, flag) in DietaryFlag::ALL.iter().enumerate() {
                if (index + position) % 3 == 0 {
                    recipe = recipe.with_flag(*flag);
                }
            }
            recipe
        })
        .collect()
}

fn typical_criteria() -> FilterCriteria {
    FilterCriteria::new()
        .with_flag(DietaryFlag::Vegetarian)
        .with_allergen("nuts")
        .with_allergen("soy")
        .include_category("vegetables")
        .exclude_category("dairy_products")
}

fn bench_plan_compilation(c: &mut Criterion) {
    let table = CategoryTable::default();
    let criteria = typical_criteria()
        .with_flag(DietaryFlag::Vegan)
        .include_category("legumes")
        .exclude_category("meat_products");

    c.bench_function("filter_plan/compile", |b| {
        b.iter(|| FilterPlan::compile(black_box(&criteria), black_box(&table)));
    });
}

fn bench_filter_by_corpus_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("preference_filter");
    let table = CategoryTable::default();

    let scenarios = [
        ("unconstrained", FilterCriteria::default()),
        ("vegan", FilterCriteria::new().with_flag(DietaryFlag::Vegan)),
        ("typical", typical_criteria()),
    ];

    for size in CORPUS_SIZES {
        let corpus = generate_corpus(size);
        group.throughput(Throughput::Elements(size as u64));
        for (name, criteria) in &scenarios {
            group.bench_with_input(BenchmarkId::new(*name, size), &corpus, |b, corpus| {
                b.iter(|| filter_recipes(black_box(corpus), black_box(criteria), &table));
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_plan_compilation, bench_filter_by_corpus_size);
criterion_main!(benches);
