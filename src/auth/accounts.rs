//! Account Directory
//!
//! In-memory email/password accounts for the login endpoint. Passwords are
//! kept only as SHA-256 hex digests. Emails are matched case-insensitively.

use sha2::{Digest, Sha256};
use std::collections::HashMap;
use tokio::sync::RwLock;

use super::error::{AuthError, AuthResult};

/// A registered account
#[derive(Debug, Clone)]
pub struct Account {
    pub email: String,
    password_digest: String,
}

/// SHA-256 hex digest of a password
pub fn hash_password(password: &str) -> String {
    format!("{:x}", Sha256::digest(password.as_bytes()))
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Thread-safe account directory
#[derive(Debug, Default)]
pub struct AccountDirectory {
    accounts: RwLock<HashMap<String, Account>>,
}

impl AccountDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a directory from `(email, password)` pairs, e.g. config seeds.
    /// Later duplicates of the same email are skipped.
    pub fn with_accounts<I, E, P>(seeds: I) -> Self
    where
        I: IntoIterator<Item = (E, P)>,
        E: AsRef<str>,
        P: AsRef<str>,
    {
        let mut accounts = HashMap::new();
        for (email, password) in seeds {
            let key = normalize_email(email.as_ref());
            if key.is_empty() {
                continue;
            }
            accounts.entry(key.clone()).or_insert_with(|| Account {
                email: key,
                password_digest: hash_password(password.as_ref()),
            });
        }

        Self {
            accounts: RwLock::new(accounts),
        }
    }

    /// Register a new account
    pub async fn register(&self, email: &str, password: &str) -> AuthResult<Account> {
        let key = normalize_email(email);
        if key.is_empty() || !key.contains('@') {
            return Err(AuthError::InvalidInput("A valid email is required".to_string()));
        }
        if password.is_empty() {
            return Err(AuthError::InvalidInput("Password must not be empty".to_string()));
        }

        let mut accounts = self.accounts.write().await;
        if accounts.contains_key(&key) {
            return Err(AuthError::EmailTaken);
        }

        let account = Account {
            email: key.clone(),
            password_digest: hash_password(password),
        };
        accounts.insert(key, account.clone());

        tracing::info!(email = %account.email, "Registered account");
        Ok(account)
    }

    /// Check an email/password pair
    pub async fn verify(&self, email: &str, password: &str) -> AuthResult<Account> {
        let accounts = self.accounts.read().await;
        let account = accounts
            .get(&normalize_email(email))
            .ok_or(AuthError::InvalidCredentials)?;

        if account.password_digest != hash_password(password) {
            return Err(AuthError::InvalidCredentials);
        }

        Ok(account.clone())
    }

    pub async fn len(&self) -> usize {
        self.accounts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.accounts.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_password_is_hex_sha256() {
        let digest = hash_password("demo");
        assert_eq!(digest.len(), 64);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(digest, hash_password("demo"));
        assert_ne!(digest, hash_password("Demo"));
    }

    #[tokio::test]
    async fn test_verify_seeded_account() {
        let dir = AccountDirectory::with_accounts([("Demo@MediLabel.ai", "demo")]);

        let account = dir.verify("demo@medilabel.ai", "demo").await.unwrap();
        assert_eq!(account.email, "demo@medilabel.ai");

        assert_eq!(
            dir.verify("demo@medilabel.ai", "wrong").await.unwrap_err(),
            AuthError::InvalidCredentials
        );
        assert_eq!(
            dir.verify("nobody@medilabel.ai", "demo").await.unwrap_err(),
            AuthError::InvalidCredentials
        );
    }

    #[tokio::test]
    async fn test_register_then_login() {
        let dir = AccountDirectory::new();
        assert!(dir.is_empty().await);

        dir.register("pat@example.com", "s3cret").await.unwrap();
        assert_eq!(dir.len().await, 1);
        assert!(dir.verify("PAT@example.com", "s3cret").await.is_ok());
    }

    #[tokio::test]
    async fn test_register_duplicate() {
        let dir = AccountDirectory::with_accounts([("pat@example.com", "a")]);
        assert_eq!(
            dir.register("pat@example.com", "b").await.unwrap_err(),
            AuthError::EmailTaken
        );
    }

    #[tokio::test]
    async fn test_register_rejects_empty_input() {
        let dir = AccountDirectory::new();
        assert!(matches!(
            dir.register("", "x").await,
            Err(AuthError::InvalidInput(_))
        ));
        assert!(matches!(
            dir.register("pat@example.com", "").await,
            Err(AuthError::InvalidInput(_))
        ));
    }
}
