//! MediLabel API Server
//!
//! Run with: cargo run --bin medilabel
//!
//! Configuration is read from the first of
//! `~/.config/medilabel/config.toml`, `/etc/medilabel/config.toml` and
//! `./config.toml`, then overridden by `MEDILABEL_*` environment variables.
//! `RUST_LOG` takes precedence over the configured log level.

use medilabel::api::{serve, AppState};
use medilabel::config::{Config, LoggingConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parsed before logging exists; load_default's own messages are dropped
    let config = Config::load_default();
    init_tracing(&config.logging);

    tracing::info!("Starting MediLabel API server v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        accounts = config.auth.accounts.len(),
        token_ttl_minutes = config.auth.token_ttl_minutes,
        inventory_rows = config.dashboard.inventory_rows,
        theme = %config.dashboard.theme,
        "Loaded configuration"
    );

    let state = AppState::new(&config);

    // Expired tokens are otherwise only dropped when presented
    let tokens = state.tokens.clone();
    let purge_handle = tokio::spawn(async move {
        let mut interval = tokio::time::interval(std::time::Duration::from_secs(60));
        loop {
            interval.tick().await;
            let purged = tokens.purge_expired().await;
            if purged > 0 {
                tracing::debug!(purged, "Purged expired tokens");
            }
        }
    });

    serve(state, &config.api).await?;

    purge_handle.abort();
    tracing::info!("MediLabel API server stopped");
    Ok(())
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("medilabel={},tower_http=debug", logging.level))
    });

    let registry = tracing_subscriber::registry().with(filter);

    if logging.format == "json" {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
