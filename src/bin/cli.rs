//! MediLabel CLI
//!
//! Command-line client for the MediLabel API:
//! - Log in and out
//! - Show the dashboard and inventory
//! - Check server status
//! - Generate a config file

use anyhow::Context;
use clap::{Parser, Subcommand};
use medilabel::api::dto::InventoryResponse;
use medilabel::auth::{
    check_route, submit_login, FileSessionStore, GuardDecision, HttpAuthApi, LoginOutcome,
    Navigator, SessionStore,
};
use medilabel::config::{generate_default_config, Config};
use medilabel::dashboard::{CardValue, DashboardLayout, Route, Widget};
use medilabel::inventory::MedicationRow;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "medilabel")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Medication tracking dashboard client")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// API server URL (default: from config)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Session file (default: from config, then the user data directory)
    #[arg(long, global = true)]
    pub session_file: Option<PathBuf>,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table", global = true)]
    pub format: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Log in and store the session
    Login {
        #[arg(short, long)]
        email: String,
        #[arg(short, long)]
        password: String,
    },

    /// Forget the stored session and revoke its token
    Logout,

    /// Show who the stored session belongs to
    Whoami,

    /// Show the dashboard cards
    Dashboard,

    /// Show generated inventory rows
    Inventory {
        /// Number of rows
        #[arg(short, long)]
        count: Option<usize>,
    },

    /// Show server status
    Status,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Records where the login flow wants to go
#[derive(Default)]
struct CliNavigator {
    target: Mutex<Option<Route>>,
}

impl Navigator for CliNavigator {
    fn navigate(&self, route: Route) {
        if let Ok(mut target) = self.target.lock() {
            *target = Some(route);
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::load_default();

    let api_url = cli
        .api_url
        .clone()
        .unwrap_or_else(|| config.client.api_url.clone())
        .trim_end_matches('/')
        .to_string();
    let session_path = cli
        .session_file
        .clone()
        .or_else(|| config.client.session_file.as_ref().map(PathBuf::from))
        .unwrap_or_else(FileSessionStore::default_path);
    let store = FileSessionStore::new(session_path);

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.client.timeout_secs))
        .build()?;

    match cli.command {
        Commands::Login { email, password } => {
            let api = HttpAuthApi::new(client, &api_url);
            let navigator = CliNavigator::default();

            match submit_login(&api, &store, &navigator, &email, &password).await {
                LoginOutcome::LoggedIn { .. } => {
                    println!("Logged in as {}", email);
                    println!("Session saved to {:?}", store.path());
                    if let Some(route) = navigator.target.lock().ok().and_then(|t| *t) {
                        println!("Next: {}", route);
                    }
                }
                LoginOutcome::Failed { message } => {
                    eprintln!("{}", message);
                    std::process::exit(1);
                }
            }
        }

        Commands::Logout => {
            if let Some(token) = store.token()? {
                // Best effort; the local session is cleared regardless
                let _ = client
                    .post(format!("{}/api/auth/logout", api_url))
                    .bearer_auth(&token)
                    .send()
                    .await;
            }
            store.clear()?;
            println!("Logged out");
        }

        Commands::Whoami => {
            require_session(&store, Route::Dashboard);
            let Some(token) = store.token()? else {
                println!("Logged in (no token stored)");
                return Ok(());
            };

            let api = HttpAuthApi::new(client, &api_url);
            match api.session(&token).await {
                Ok(session) => {
                    println!("{}", session.email);
                    println!("Expires: {}", session.expires_at.format("%Y-%m-%d %H:%M UTC"));
                }
                Err(e) => {
                    eprintln!("{}", e.display_message());
                    std::process::exit(1);
                }
            }
        }

        Commands::Dashboard => {
            require_session(&store, Route::Dashboard);

            let response = client.get(format!("{}/api/dashboard", api_url)).send().await?;
            if !response.status().is_success() {
                eprintln!("Failed to fetch dashboard: {}", response.status());
                std::process::exit(1);
            }

            let layout: DashboardLayout = response.json().await?;
            match cli.format.as_str() {
                "json" => println!("{}", serde_json::to_string_pretty(&layout)?),
                _ => print_dashboard(&layout),
            }
        }

        Commands::Inventory { count } => {
            require_session(&store, Route::Inventory);

            let mut request = client.get(format!("{}/api/inventory", api_url));
            if let Some(count) = count {
                request = request.query(&[("count", count)]);
            }
            let response = request.send().await?;
            if !response.status().is_success() {
                eprintln!("Failed to fetch inventory: {}", response.status());
                std::process::exit(1);
            }

            let rows = parse_inventory(&response.text().await?)?;

            match cli.format.as_str() {
                "json" => println!("{}", serde_json::to_string_pretty(&rows)?),
                _ => print_inventory(&rows),
            }
        }

        Commands::Status => {
            let response = client.get(format!("{}/health", api_url)).send().await;

            match response {
                Ok(resp) if resp.status().is_success() => {
                    let health: serde_json::Value = resp.json().await?;

                    println!("MediLabel v{}", env!("CARGO_PKG_VERSION"));
                    println!();
                    println!(
                        "API Status: {}",
                        health["status"].as_str().unwrap_or("unknown")
                    );
                    if let Some(accounts) = health["accounts"].as_u64() {
                        println!("Accounts: {}", accounts);
                    }
                    if let Some(sessions) = health["active_sessions"].as_u64() {
                        println!("Active sessions: {}", sessions);
                    }
                    if let Some(uptime) = health["uptime_seconds"].as_u64() {
                        println!("Uptime: {}", format_duration(uptime));
                    }
                }
                Ok(resp) => {
                    eprintln!("API returned error: {}", resp.status());
                    std::process::exit(1);
                }
                Err(e) => {
                    eprintln!("Cannot connect to MediLabel API at {}", api_url);
                    eprintln!("Error: {}", e);
                    eprintln!();
                    eprintln!("Make sure the MediLabel API server is running:");
                    eprintln!("  cargo run --bin medilabel");
                    std::process::exit(1);
                }
            }
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)?;
                    println!("Config written to {:?}", path);
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}

/// Exit with a hint when the guard would redirect to the login page
fn require_session(store: &dyn SessionStore, route: Route) {
    if let GuardDecision::Redirect(target) = check_route(store, route) {
        eprintln!("Not logged in (redirect to {}).", target);
        eprintln!("Run: medilabel-cli login --email <email> --password <password>");
        std::process::exit(1);
    }
}

fn print_dashboard(layout: &DashboardLayout) {
    let mut current_row = None;

    for placed in &layout.cards {
        if current_row != Some(placed.row) {
            if current_row.is_some() {
                println!();
            }
            println!("── Row {} {}", placed.row + 1, "─".repeat(40));
            current_row = Some(placed.row);
        }

        let card = &placed.card;
        println!(
            "[{:>2}/{} cols] {} ({})",
            placed.column_span,
            layout.columns,
            card.title,
            card.size.as_str()
        );
        println!("    {}", summarize_value(&card.value));
        if let Some(caption) = card.caption() {
            println!("    {}", caption);
        }
        if let Some(href) = &card.href {
            println!("    -> {}", href);
        }
    }
}

fn summarize_value(value: &CardValue) -> String {
    match value {
        CardValue::Text(text) => text.clone(),
        CardValue::Widget(Widget::Completion(data)) => {
            format!("{}% completed", data.completed_percent())
        }
        CardValue::Widget(Widget::WeeklyDoses(week)) => week
            .series
            .iter()
            .map(|s| format!("{}: {}", s.label, s.data.iter().sum::<u32>()))
            .collect::<Vec<_>>()
            .join(", "),
        CardValue::Widget(Widget::Refills(refills)) => format!(
            "{} refills: {}",
            refills.len(),
            refills
                .iter()
                .map(|r| format!("{} ({} left)", r.name, r.doses_left))
                .collect::<Vec<_>>()
                .join(", ")
        ),
        CardValue::Widget(Widget::Symptoms(symptoms)) => format!(
            "{} symptoms: {}",
            symptoms.len(),
            symptoms
                .iter()
                .map(|s| s.name.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        ),
        CardValue::Widget(Widget::Inventory(rows)) => format!("{} medications", rows.len()),
    }
}

/// Decode an `/api/inventory` body; a mismatched shape is an error
fn parse_inventory(body: &str) -> anyhow::Result<Vec<MedicationRow>> {
    let inventory: InventoryResponse =
        serde_json::from_str(body).context("Unexpected inventory response")?;
    Ok(inventory.rows)
}

fn print_inventory(rows: &[MedicationRow]) {
    if rows.is_empty() {
        println!("No medications.");
        return;
    }

    println!("{:<4} {:<36} {:<8} {}", "ID", "Medication Name", "Dosage", "Expiration Date");
    println!("{}", "-".repeat(66));
    for row in rows {
        println!(
            "{:<4} {:<36} {:<8} {}",
            row.id,
            row.medication_name,
            row.dosage,
            row.expiration_date.format("%Y-%m-%d")
        );
    }
}

/// Format duration in human-readable form
fn format_duration(seconds: u64) -> String {
    let days = seconds / 86400;
    let hours = (seconds % 86400) / 3600;
    let minutes = (seconds % 3600) / 60;

    if days > 0 {
        format!("{}d {}h {}m", days, hours, minutes)
    } else if hours > 0 {
        format!("{}h {}m", hours, minutes)
    } else {
        format!("{}m", minutes)
    }
}
