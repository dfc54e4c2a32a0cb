//! # checkout-store: Store Application Shell
//!
//! Wires configuration and logging around `checkout-core`.
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. Initialize Logging                                                  │
//! │     • tracing-subscriber with env filter                                │
//! │     • Default: INFO, can be overridden with RUST_LOG                    │
//! │                                                                         │
//! │  2. Load Configuration                                                  │
//! │     • CHECKOUT_STORE_NAME, CHECKOUT_PROMOTIONS                          │
//! │                                                                         │
//! │  3. Greet                                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod store;

use tracing::info;
use tracing_subscriber::EnvFilter;

pub use config::{ConfigError, StoreConfig};
pub use store::Store;

/// Runs the store application.
pub fn run() -> Result<(), ConfigError> {
    init_tracing();

    let config = StoreConfig::from_env()?;
    let store = Store::new();

    info!(
        store_name = %config.store_name,
        version = store.version,
        multi_buy = config.promotions.multi_buy_names().count(),
        coupons = config.promotions.coupons().count(),
        "Starting checkout store"
    );

    let register = config.register();
    info!(
        receipt_id = %register.current().id(),
        "Register ready"
    );

    info!(greeting = store.hello_world(), "Store ready");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=checkout_core=trace` - Show pricing passes
/// - Default: INFO, DEBUG for the checkout crates
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,checkout_core=debug,checkout_store=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .init();
}
