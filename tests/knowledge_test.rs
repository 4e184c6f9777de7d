// ABOUTME: Integration tests for the FAQ knowledge responder
// ABOUTME: Covers built-in answers, query normalization and JSON override validation
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use nutrimate_server::errors::ErrorCode;
use nutrimate_server::knowledge::{CannedResponder, FaqCategory, KnowledgeResponder};
use std::fs;
use tempfile::TempDir;

const FULL_OVERRIDE: &str = r#"{
    "weight_loss": "Eat more vegetables.",
    "Weight Gain": "Eat more nuts.",
    "fitness": "Eat more protein.",
    "general-health": "Eat a bit of everything."
}"#;

#[test]
fn test_every_category_has_a_built_in_answer() {
    let responder = CannedResponder::default();
    for category in FaqCategory::all() {
        let answer = responder.answer(category);
        assert!(
            answer.as_deref().is_some_and(|a| !a.is_empty()),
            "no answer for {category}"
        );
    }
}

#[test]
fn test_queries_are_matched_loosely() {
    let responder = CannedResponder::default();
    let exact = responder.respond("IMPORTANT INGREDIENTS FOR WEIGHT LOSS");
    let loose = responder.respond("  important ingredients   for weight loss? ");
    assert!(exact.is_some());
    assert_eq!(exact, loose);
    assert_eq!(responder.respond("IMPORTANT INGREDIENTS FOR SLEEP"), None);
}

#[test]
fn test_category_identifiers_round_trip_through_parse() {
    for category in FaqCategory::all() {
        assert_eq!(FaqCategory::parse(category.as_str()), Some(category));
        assert_eq!(FaqCategory::parse(category.label()), Some(category));
    }
}

#[test]
fn test_override_replaces_answers() {
    let responder = CannedResponder::from_json_str(FULL_OVERRIDE).unwrap();
    assert_eq!(
        responder.answer(FaqCategory::WeightGain).as_deref(),
        Some("Eat more nuts.")
    );
    assert_eq!(
        responder.answer(FaqCategory::GeneralHealth).as_deref(),
        Some("Eat a bit of everything.")
    );
}

#[test]
fn test_override_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("faq.json");
    fs::write(&path, FULL_OVERRIDE).unwrap();

    let responder = CannedResponder::from_json_file(&path).unwrap();
    assert_eq!(
        responder.answer(FaqCategory::Fitness).as_deref(),
        Some("Eat more protein.")
    );

    let error = CannedResponder::from_json_file(dir.path().join("missing.json")).unwrap_err();
    assert_eq!(error.code, ErrorCode::StorageError);
}

#[test]
fn test_override_must_cover_every_category() {
    let error = CannedResponder::from_json_str(r#"{"weight_loss": "Eat more vegetables."}"#)
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::ConfigInvalid);
    assert!(error.message.contains("weight_gain"));
}

#[test]
fn test_override_rejects_unknown_categories_and_non_strings() {
    let error = CannedResponder::from_json_str(r#"{"cardio": "Run."}"#).unwrap_err();
    assert_eq!(error.code, ErrorCode::ConfigInvalid);
    assert!(error.message.contains("cardio"));

    let error = CannedResponder::from_json_str(r#"{"fitness": ["protein"]}"#).unwrap_err();
    assert_eq!(error.code, ErrorCode::ConfigInvalid);

    let error = CannedResponder::from_json_str("[]").unwrap_err();
    assert_eq!(error.code, ErrorCode::ConfigInvalid);
}
