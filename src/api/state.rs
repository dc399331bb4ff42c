//! Application State
//!
//! Shared state accessible by all API handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use std::sync::Arc;
use std::time::Instant;

use crate::auth::{AccountDirectory, TokenStore};
use crate::config::{ApiConfig, Config};
use crate::dashboard::DashboardOptions;
use crate::medical::{StockLedger, SymptomJournal};

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// API configuration
    pub config: Arc<ApiConfig>,
    /// Dashboard content options
    pub dashboard: DashboardOptions,
    /// Upper bound for generated inventory batches
    pub max_inventory_rows: usize,
    /// Registered accounts
    pub accounts: Arc<AccountDirectory>,
    /// Issued access tokens
    pub tokens: Arc<TokenStore>,
    /// Symptom logs per account
    pub symptoms: Arc<SymptomJournal>,
    /// Medication stock per account
    pub stock: Arc<StockLedger>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    /// Create state from the full configuration, seeding accounts
    pub fn new(config: &Config) -> Self {
        let accounts = AccountDirectory::with_accounts(
            config
                .auth
                .accounts
                .iter()
                .map(|a| (a.email.as_str(), a.password.as_str())),
        );

        Self {
            config: Arc::new(config.api.clone()),
            dashboard: config.dashboard.options(),
            max_inventory_rows: config.dashboard.max_inventory_rows,
            accounts: Arc::new(accounts),
            tokens: Arc::new(TokenStore::with_ttl_minutes(config.auth.token_ttl_minutes)),
            symptoms: Arc::new(SymptomJournal::new()),
            stock: Arc::new(StockLedger::new()),
            start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
