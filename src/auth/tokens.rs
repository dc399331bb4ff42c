//! Access Tokens
//!
//! Opaque bearer tokens issued at login. Each token maps to the account
//! email and an expiry; expired tokens are rejected and dropped lazily.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::error::{AuthError, AuthResult};

/// Default token lifetime in minutes
pub const DEFAULT_TOKEN_TTL_MINUTES: i64 = 30;

/// Longest accepted token lifetime in minutes (one year)
pub const MAX_TOKEN_TTL_MINUTES: i64 = 525_600;

/// A token handed back to a client
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IssuedToken {
    pub access_token: String,
    pub email: String,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
struct TokenRecord {
    email: String,
    expires_at: DateTime<Utc>,
}

/// Table of live access tokens
#[derive(Debug)]
pub struct TokenStore {
    tokens: RwLock<HashMap<String, TokenRecord>>,
    ttl: Duration,
}

impl Default for TokenStore {
    fn default() -> Self {
        Self::new(Duration::minutes(DEFAULT_TOKEN_TTL_MINUTES))
    }
}

impl TokenStore {
    /// Lifetimes outside one minute to [`MAX_TOKEN_TTL_MINUTES`] are clamped
    pub fn new(ttl: Duration) -> Self {
        let ttl = ttl.clamp(Duration::minutes(1), Duration::minutes(MAX_TOKEN_TTL_MINUTES));
        Self {
            tokens: RwLock::new(HashMap::new()),
            ttl,
        }
    }

    pub fn with_ttl_minutes(minutes: i64) -> Self {
        Self::new(Duration::minutes(minutes.clamp(1, MAX_TOKEN_TTL_MINUTES)))
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Issue a fresh token for `email`
    pub async fn issue(&self, email: &str) -> IssuedToken {
        self.issue_at(email, Utc::now()).await
    }

    async fn issue_at(&self, email: &str, now: DateTime<Utc>) -> IssuedToken {
        let access_token = Uuid::new_v4().simple().to_string();
        let expires_at = now
            .checked_add_signed(self.ttl)
            .unwrap_or(DateTime::<Utc>::MAX_UTC);

        self.tokens.write().await.insert(
            access_token.clone(),
            TokenRecord {
                email: email.to_string(),
                expires_at,
            },
        );

        IssuedToken {
            access_token,
            email: email.to_string(),
            expires_at,
        }
    }

    /// Look up a token. Expired tokens are removed and rejected.
    pub async fn validate(&self, token: &str) -> AuthResult<IssuedToken> {
        self.validate_at(token, Utc::now()).await
    }

    async fn validate_at(&self, token: &str, now: DateTime<Utc>) -> AuthResult<IssuedToken> {
        let record = self
            .tokens
            .read()
            .await
            .get(token)
            .cloned()
            .ok_or(AuthError::InvalidToken)?;

        if record.expires_at <= now {
            self.tokens.write().await.remove(token);
            tracing::debug!(email = %record.email, "Rejected expired token");
            return Err(AuthError::InvalidToken);
        }

        Ok(IssuedToken {
            access_token: token.to_string(),
            email: record.email,
            expires_at: record.expires_at,
        })
    }

    /// Revoke a token. Returns whether it existed.
    pub async fn revoke(&self, token: &str) -> bool {
        self.tokens.write().await.remove(token).is_some()
    }

    /// Drop every expired token, returning how many were removed
    pub async fn purge_expired(&self) -> usize {
        let now = Utc::now();
        let mut tokens = self.tokens.write().await;
        let before = tokens.len();
        tokens.retain(|_, record| record.expires_at > now);
        before - tokens.len()
    }

    /// Number of tokens currently held, expired or not
    pub async fn active_count(&self) -> usize {
        self.tokens.read().await.len()
    }
}
