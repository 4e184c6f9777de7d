// ABOUTME: In-memory login sessions keyed by opaque bearer tokens
// ABOUTME: Bounded LRU store with per-session expiry and an attached health profile
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Sessions are created at login and removed at logout, on expiry, or when
//! the store is full and the session is the least recently used. Nothing is
//! persisted; a restart logs everyone out.

use crate::constants::error_messages;
use crate::errors::{AppError, AppResult};
use crate::models::HealthProfile;
use chrono::{DateTime, Duration, Utc};
use lru::LruCache;
use serde::Serialize;
use std::num::NonZeroUsize;
use tokio::sync::Mutex;
use tracing::debug;
use uuid::Uuid;

/// One logged-in user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    /// Bearer token (random UUID v4)
    pub token: String,
    /// Account the session belongs to
    pub username: String,
    /// When the session was started
    pub created_at: DateTime<Utc>,
    /// When the session stops being accepted
    pub expires_at: DateTime<Utc>,
    /// Health profile entered during this session
    pub profile: Option<HealthProfile>,
}

impl Session {
    /// Whether the session has expired at `now`
    #[must_use]
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

/// Bounded session store
pub struct SessionManager {
    sessions: Mutex<LruCache<String, Session>>,
    ttl: Duration,
}

impl SessionManager {
    /// Capacity used when zero is requested
    const DEFAULT_CAPACITY: NonZeroUsize = match NonZeroUsize::new(1000) {
        Some(n) => n,
        None => unreachable!(),
    };

    /// Create a store whose sessions live for `ttl` and that holds at most
    /// `capacity` sessions
    #[must_use]
    pub fn new(ttl: Duration, capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(Self::DEFAULT_CAPACITY);
        Self {
            sessions: Mutex::new(LruCache::new(capacity)),
            ttl,
        }
    }

    /// Session lifetime
    #[must_use]
    pub const fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Start a session for an authenticated user
    pub async fn start(&self, username: &str) -> Session {
        let now = Utc::now();
        let session = Session {
            token: Uuid::new_v4().to_string(),
            username: username.to_owned(),
            created_at: now,
            expires_at: now + self.ttl,
            profile: None,
        };

        let evicted = self
            .sessions
            .lock()
            .await
            .push(session.token.clone(), session.clone());
        if let Some((_, old)) = evicted.filter(|(token, _)| *token != session.token) {
            debug!(username = %old.username, "Session evicted at capacity");
        }
        session
    }

    /// Look up a live session
    ///
    /// # Errors
    ///
    /// Returns `AUTH_INVALID` for an unknown token and `AUTH_EXPIRED` for an
    /// expired one, which is removed
    pub async fn get(&self, token: &str) -> AppResult<Session> {
        self.with_live_session(token, |session| session.clone())
            .await
    }

    /// Store a health profile on a live session
    ///
    /// # Errors
    ///
    /// Same as [`SessionManager::get`]
    pub async fn update_profile(&self, token: &str, profile: HealthProfile) -> AppResult<Session> {
        self.with_live_session(token, |session| {
            session.profile = Some(profile);
            session.clone()
        })
        .await
    }

    async fn with_live_session<T>(
        &self,
        token: &str,
        apply: impl FnOnce(&mut Session) -> T,
    ) -> AppResult<T> {
        let mut sessions = self.sessions.lock().await;
        let Some(session) = sessions.get_mut(token) else {
            return Err(AppError::auth_invalid(error_messages::INVALID_SESSION));
        };

        if session.is_expired_at(Utc::now()) {
            let username = session.username.clone();
            sessions.pop(token);
            drop(sessions);
            debug!(username = %username, "Session expired");
            return Err(AppError::auth_expired());
        }
        Ok(apply(session))
    }

    /// End a session; returns whether it existed
    pub async fn end(&self, token: &str) -> bool {
        self.sessions.lock().await.pop(token).is_some()
    }

    /// Drop every expired session; returns how many were removed
    pub async fn purge_expired(&self) -> usize {
        let now = Utc::now();
        let mut sessions = self.sessions.lock().await;
        let expired: Vec<String> = sessions
            .iter()
            .filter(|(_, session)| session.is_expired_at(now))
            .map(|(token, _)| token.clone())
            .collect();
        for token in &expired {
            sessions.pop(token);
        }
        drop(sessions);
        if !expired.is_empty() {
            debug!("Purged {} expired sessions", expired.len());
        }
        expired.len()
    }

    /// Number of sessions currently held, expired or not
    pub async fn active_count(&self) -> usize {
        self.sessions.lock().await.len()
    }
}
