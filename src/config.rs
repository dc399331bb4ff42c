//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and `MEDILABEL_*` environment overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::auth::MAX_TOKEN_TTL_MINUTES;
use crate::dashboard::{DashboardOptions, WidgetTheme};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub auth: AuthConfig,

    #[serde(default)]
    pub dashboard: DashboardConfig,

    #[serde(default)]
    pub client: ClientConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// API server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Allowed CORS origins. Omitted keeps the local UI origins; an
    /// explicit empty list allows any origin.
    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<String>,

    /// Requests running longer than this get 408
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8082
}

fn default_cors_origins() -> Vec<String> {
    vec![
        "http://localhost:8084".to_string(),
        "http://127.0.0.1:8084".to_string(),
    ]
}

fn default_request_timeout() -> u64 {
    30
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: default_cors_origins(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl ApiConfig {
    /// Create config with custom host and port
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Default::default()
        }
    }

    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Login endpoint configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    #[serde(default = "default_token_ttl")]
    pub token_ttl_minutes: i64,

    /// Accounts available at startup
    #[serde(default = "default_accounts")]
    pub accounts: Vec<SeedAccount>,
}

/// An account seeded from configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SeedAccount {
    pub email: String,
    pub password: String,
}

fn default_token_ttl() -> i64 {
    crate::auth::DEFAULT_TOKEN_TTL_MINUTES
}

fn default_accounts() -> Vec<SeedAccount> {
    vec![SeedAccount {
        email: "demo@medilabel.ai".to_string(),
        password: "demo".to_string(),
    }]
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_ttl_minutes: default_token_ttl(),
            accounts: default_accounts(),
        }
    }
}

/// Dashboard content configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardConfig {
    /// Mock rows on the inventory card and the default for `/api/inventory`
    #[serde(default = "default_inventory_rows")]
    pub inventory_rows: usize,

    /// Upper bound for `/api/inventory?count=`
    #[serde(default = "default_max_inventory_rows")]
    pub max_inventory_rows: usize,

    /// Chart color scheme: garden or classic
    #[serde(default = "default_theme")]
    pub theme: String,
}

fn default_inventory_rows() -> usize {
    10
}

fn default_max_inventory_rows() -> usize {
    500
}

fn default_theme() -> String {
    "garden".to_string()
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            inventory_rows: default_inventory_rows(),
            max_inventory_rows: default_max_inventory_rows(),
            theme: default_theme(),
        }
    }
}

impl DashboardConfig {
    pub fn options(&self) -> DashboardOptions {
        DashboardOptions {
            inventory_rows: self.inventory_rows.min(self.max_inventory_rows),
            theme: WidgetTheme::parse(&self.theme),
        }
    }
}

/// CLI client configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    #[serde(default = "default_api_url")]
    pub api_url: String,

    #[serde(default = "default_client_timeout")]
    pub timeout_secs: u64,

    /// Session file; defaults to the user's data directory
    pub session_file: Option<String>,
}

fn default_api_url() -> String {
    "http://localhost:8082".to_string()
}

fn default_client_timeout() -> u64 {
    10
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            timeout_secs: default_client_timeout(),
            session_file: None,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config = Self::parse(&content).map_err(|error| ConfigError::Parse {
            path: path.to_path_buf(),
            error,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the server cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_TOKEN_TTL_MINUTES).contains(&self.auth.token_ttl_minutes) {
            return Err(ConfigError::Invalid {
                field: "auth.token_ttl_minutes",
                reason: format!(
                    "must be between 1 and {}, got {}",
                    MAX_TOKEN_TTL_MINUTES, self.auth.token_ttl_minutes
                ),
            });
        }
        if self.api.request_timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                field: "api.request_timeout_secs",
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("medilabel").join("config.toml")),
            Some(PathBuf::from("/etc/medilabel/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path_opt in config_paths.iter().flatten() {
            if path_opt.exists() {
                match Self::load_with_env(path_opt) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path_opt);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path_opt, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        // API overrides
        if let Ok(host) = std::env::var("MEDILABEL_API_HOST") {
            self.api.host = host;
        }
        if let Ok(port) = std::env::var("MEDILABEL_API_PORT") {
            if let Ok(p) = port.parse() {
                self.api.port = p;
            }
        }
        if let Ok(timeout) = std::env::var("MEDILABEL_REQUEST_TIMEOUT_SECS") {
            match timeout.parse::<u64>() {
                Ok(t) if t > 0 => self.api.request_timeout_secs = t,
                _ => tracing::warn!(value = %timeout, "Ignoring MEDILABEL_REQUEST_TIMEOUT_SECS"),
            }
        }

        // Auth overrides
        if let Ok(ttl) = std::env::var("MEDILABEL_TOKEN_TTL_MINUTES") {
            match ttl.parse::<i64>() {
                Ok(t) if (1..=MAX_TOKEN_TTL_MINUTES).contains(&t) => {
                    self.auth.token_ttl_minutes = t;
                }
                _ => tracing::warn!(value = %ttl, "Ignoring MEDILABEL_TOKEN_TTL_MINUTES"),
            }
        }

        // Dashboard overrides
        if let Ok(rows) = std::env::var("MEDILABEL_INVENTORY_ROWS") {
            if let Ok(r) = rows.parse() {
                self.dashboard.inventory_rows = r;
            }
        }
        if let Ok(theme) = std::env::var("MEDILABEL_WIDGET_THEME") {
            self.dashboard.theme = theme;
        }

        // Client overrides
        if let Ok(url) = std::env::var("MEDILABEL_API_URL") {
            self.client.api_url = url;
        }

        // Logging overrides
        if let Ok(level) = std::env::var("MEDILABEL_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("MEDILABEL_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },

    #[error("Invalid value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# MediLabel Configuration
#
# Environment variables override these settings:
# - MEDILABEL_API_HOST
# - MEDILABEL_API_PORT
# - MEDILABEL_REQUEST_TIMEOUT_SECS
# - MEDILABEL_TOKEN_TTL_MINUTES
# - MEDILABEL_INVENTORY_ROWS
# - MEDILABEL_WIDGET_THEME
# - MEDILABEL_API_URL
# - MEDILABEL_LOG_LEVEL
# - MEDILABEL_LOG_FORMAT

[api]
# API server host
host = "0.0.0.0"

# API server port
port = 8082

# Allowed CORS origins (empty = any)
cors_origins = ["http://localhost:8084", "http://127.0.0.1:8084"]

# Requests taking longer than this are answered with 408
request_timeout_secs = 30

[auth]
# Access token lifetime (minutes, 1 to 525600)
token_ttl_minutes = 30

# Accounts available at startup
[[auth.accounts]]
email = "demo@medilabel.ai"
password = "demo"

[dashboard]
# Mock rows on the inventory card
inventory_rows = 10

# Upper bound for /api/inventory?count=
max_inventory_rows = 500

# Chart colors: garden or classic
theme = "garden"

[client]
# API base URL used by medilabel-cli
api_url = "http://localhost:8082"

# Request timeout in seconds
timeout_secs = 10

# Session file (default: ~/.local/share/medilabel/session.json)
# session_file = "/tmp/medilabel-session.json"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
