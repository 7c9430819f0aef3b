//! # RocketShoes Storefront Library
//!
//! Cart store, configuration, notifications, and the command-line front end.
//!
//! ## Module Organization
//! ```text
//! rocketshoes_storefront/
//! ├── lib.rs          ◄─── You are here (wiring & run)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── cart.rs     ◄─── CartStore, StockPolicy
//! │   └── config.rs   ◄─── StoreConfig
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   └── cart.rs     ◄─── show / add / remove / update
//! ├── notify.rs       ◄─── Notification, Notifier
//! └── error.rs        ◄─── CartError → Notification
//! ```

pub mod commands;
pub mod error;
pub mod notify;
pub mod state;

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use rocketshoes_api::ApiClient;
use rocketshoes_storage::{CartRepository, FileStore};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use commands::{CartCommand, CartView};
use notify::{ConsoleNotifier, Notifier};
use state::{CartStore, ConfigError, StoreConfig};

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "rocketshoes", version, about = "RocketShoes shopping cart")]
pub struct Cli {
    /// Print the cart as JSON instead of a table
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: CartCommand,
}

/// Runs one CLI invocation.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Invocation                                        │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, written to stderr             │
/// │                                                                         │
/// │  2. Load Configuration ───────────────────────────────────────────────► │
/// │     • ROCKETSHOES_* over defaults; invalid values exit with failure     │
/// │                                                                         │
/// │  3. Build CartStore ──────────────────────────────────────────────────► │
/// │     • ApiClient as catalog and stock checker                            │
/// │     • FileStore slot in the data directory (hydrated here)              │
/// │     • ConsoleNotifier for shopper-facing messages                       │
/// │                                                                         │
/// │  4. Execute the subcommand and print the cart ────────────────────────► │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub async fn run(cli: Cli) -> ExitCode {
    init_tracing();

    info!("Starting RocketShoes storefront");

    let config = match StoreConfig::from_env() {
        Ok(config) => config,
        Err(e) => return config_failure(e),
    };

    let store = match build_store(&config, Arc::new(ConsoleNotifier)) {
        Ok(store) => store,
        Err(e) => return config_failure(e),
    };

    let cart = commands::execute(&store, cli.command).await;

    let view = match CartView::from_cart(&cart) {
        Ok(view) => view,
        Err(e) => {
            error!(error = %e, "Could not total the cart");
            return ExitCode::FAILURE;
        }
    };

    if cli.json {
        match serde_json::to_string_pretty(&view) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                error!(error = %e, "Could not serialize the cart");
                return ExitCode::FAILURE;
            }
        }
    } else {
        print!("{}", commands::render(&view, &config));
    }

    ExitCode::SUCCESS
}

/// Builds a cart store from configuration.
///
/// The `ApiClient` serves as both catalog and stock checker; the cart slot
/// lives in a `FileStore` under the configured data directory.
pub fn build_store(
    config: &StoreConfig,
    notifier: Arc<dyn Notifier>,
) -> Result<CartStore, ConfigError> {
    let api = Arc::new(ApiClient::new(&config.api_config()?)?);
    info!(base_url = %api.base_url(), "API client ready");

    let data_dir = config.resolve_data_dir()?;
    info!(data_dir = %data_dir.display(), "Cart data directory determined");

    let repository = CartRepository::new(
        Arc::new(FileStore::new(data_dir)),
        config.storage_key.clone(),
    );

    Ok(CartStore::new(api.clone(), api, repository, notifier)
        .with_stock_policy(config.stock_policy))
}

fn config_failure(err: ConfigError) -> ExitCode {
    error!(error = %err, "Invalid configuration");
    eprintln!("rocketshoes: {}", err);
    ExitCode::FAILURE
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=rocketshoes=trace` - Show trace for rocketshoes crates only
/// - Default: INFO, DEBUG for rocketshoes crates
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,rocketshoes=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
