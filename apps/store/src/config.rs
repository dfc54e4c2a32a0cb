//! # Store Configuration
//!
//! Configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`CHECKOUT_*`)
//! 2. Defaults (this file)
//!
//! ## Environment Variables
//! - `CHECKOUT_STORE_NAME`: Store name shown in logs
//! - `CHECKOUT_PROMOTIONS`: Standing promotions as JSON, e.g.
//!   `{"multi_buy": ["Apple"], "coupons": {"Milk": 2}}`

use serde::{Deserialize, Serialize};

use checkout_core::{PromotionRules, Register};

use crate::store::STORE_VERSION;

pub const ENV_STORE_NAME: &str = "CHECKOUT_STORE_NAME";
pub const ENV_PROMOTIONS: &str = "CHECKOUT_PROMOTIONS";

/// Store configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreConfig {
    /// Store name (for logs)
    pub store_name: String,

    /// Store software version
    pub version: String,

    /// Promotions every register starts with
    pub promotions: PromotionRules,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            store_name: "Checkout Dev Store".to_string(),
            version: STORE_VERSION.to_string(),
            promotions: PromotionRules::default(),
        }
    }
}

impl StoreConfig {
    /// Loads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through `lookup`, falling back to defaults for
    /// unset variables.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = StoreConfig::default();

        if let Some(store_name) = lookup(ENV_STORE_NAME) {
            let store_name = store_name.trim();
            if store_name.is_empty() {
                return Err(ConfigError::InvalidValue(ENV_STORE_NAME.to_string()));
            }
            config.store_name = store_name.to_string();
        }

        if let Some(raw) = lookup(ENV_PROMOTIONS) {
            if !raw.trim().is_empty() {
                config.promotions = serde_json::from_str(&raw)
                    .map_err(|source| ConfigError::InvalidPromotions { source })?;
            }
        }

        Ok(config)
    }

    /// Builds a register seeded with the configured promotions.
    pub fn register(&self) -> Register {
        Register::with_rules(self.promotions.clone())
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Invalid promotions in CHECKOUT_PROMOTIONS: {source}")]
    InvalidPromotions {
        #[source]
        source: serde_json::Error,
    },
}
