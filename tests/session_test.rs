// ABOUTME: Integration tests for the in-memory session store
// ABOUTME: Covers token lookup, expiry, logout, profile updates and LRU eviction
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

mod common;

use chrono::Duration;
use nutrimate_server::errors::ErrorCode;
use nutrimate_server::models::{ActivityLevel, Gender, HealthProfile};
use nutrimate_server::session::SessionManager;
use std::collections::HashSet;

fn manager() -> SessionManager {
    common::init_test_logging();
    SessionManager::new(Duration::hours(1), 100)
}

#[tokio::test]
async fn test_started_session_can_be_looked_up() {
    let sessions = manager();
    let session = sessions.start("alice").await;

    assert_eq!(session.username, "alice");
    assert_eq!(session.expires_at - session.created_at, Duration::hours(1));
    assert!(session.profile.is_none());

    let found = sessions.get(&session.token).await.unwrap();
    assert_eq!(found, session);
}

#[tokio::test]
async fn test_tokens_are_unique_per_login() {
    let sessions = manager();
    let mut tokens = HashSet::new();
    for _ in 0..20 {
        tokens.insert(sessions.start("alice").await.token);
    }
    assert_eq!(tokens.len(), 20);
    assert_eq!(sessions.active_count().await, 20);
}

#[tokio::test]
async fn test_unknown_token_is_invalid() {
    let sessions = manager();
    let error = sessions.get("not-a-token").await.unwrap_err();
    assert_eq!(error.code, ErrorCode::AuthInvalid);
}

#[tokio::test]
async fn test_expired_session_is_rejected_and_removed() {
    common::init_test_logging();
    let sessions = SessionManager::new(Duration::zero(), 10);
    let session = sessions.start("bob").await;

    let error = sessions.get(&session.token).await.unwrap_err();
    assert_eq!(error.code, ErrorCode::AuthExpired);

    // A second lookup no longer finds it at all
    let error = sessions.get(&session.token).await.unwrap_err();
    assert_eq!(error.code, ErrorCode::AuthInvalid);
    assert_eq!(sessions.active_count().await, 0);
}

#[tokio::test]
async fn test_purge_expired_only_drops_expired_sessions() {
    common::init_test_logging();
    let expired = SessionManager::new(Duration::zero(), 10);
    expired.start("a").await;
    expired.start("b").await;
    assert_eq!(expired.purge_expired().await, 2);
    assert_eq!(expired.active_count().await, 0);

    let live = manager();
    live.start("c").await;
    assert_eq!(live.purge_expired().await, 0);
    assert_eq!(live.active_count().await, 1);
}

#[tokio::test]
async fn test_end_invalidates_the_token() {
    let sessions = manager();
    let session = sessions.start("carol").await;

    assert!(sessions.end(&session.token).await);
    assert!(!sessions.end(&session.token).await);
    let error = sessions.get(&session.token).await.unwrap_err();
    assert_eq!(error.code, ErrorCode::AuthInvalid);
}

#[tokio::test]
async fn test_profile_is_attached_to_the_session() {
    let sessions = manager();
    let session = sessions.start("dave").await;
    let profile = HealthProfile {
        age: 41,
        height_cm: 182,
        weight_kg: 88,
        activity_level: ActivityLevel::VeryActive,
        gender: Gender::Male,
    };

    let updated = sessions
        .update_profile(&session.token, profile)
        .await
        .unwrap();
    assert_eq!(updated.profile, Some(profile));
    assert_eq!(
        sessions.get(&session.token).await.unwrap().profile,
        Some(profile)
    );
}

#[tokio::test]
async fn test_profile_update_needs_a_live_session() {
    let sessions = manager();
    let error = sessions
        .update_profile("missing", HealthProfile::default())
        .await
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::AuthInvalid);
}

#[tokio::test]
async fn test_least_recently_used_session_is_evicted_at_capacity() {
    common::init_test_logging();
    let sessions = SessionManager::new(Duration::hours(1), 2);
    let first = sessions.start("first").await;
    let second = sessions.start("second").await;

    // Touch the first session so the second becomes least recently used
    sessions.get(&first.token).await.unwrap();
    let third = sessions.start("third").await;

    assert_eq!(sessions.active_count().await, 2);
    assert!(sessions.get(&first.token).await.is_ok());
    assert!(sessions.get(&third.token).await.is_ok());
    assert_eq!(
        sessions.get(&second.token).await.unwrap_err().code,
        ErrorCode::AuthInvalid
    );
}

#[tokio::test]
async fn test_zero_capacity_falls_back_to_default() {
    common::init_test_logging();
    let sessions = SessionManager::new(Duration::hours(1), 0);
    for _ in 0..5 {
        sessions.start("eve").await;
    }
    assert_eq!(sessions.active_count().await, 5);
    assert_eq!(sessions.ttl(), Duration::hours(1));
}
