//! # Promotion Rules
//!
//! Store-wide promotion configuration owned by a register.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  PromotionRules                                                         │
//! │                                                                         │
//! │  multi_buy: { "Apple", "Soda" }      every 3rd unit of these is free   │
//! │  coupons:   { "Milk": 2 }            15% off up to 2 units of Milk     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Rules are standing policy: close-out never resets them, and pricing
//! consumes coupons from a local copy so the stored counts never deplete.
//!
//! Rules can be loaded from JSON; both fields are optional:
//! ```rust
//! use checkout_core::PromotionRules;
//!
//! let rules: PromotionRules =
//!     serde_json::from_str(r#"{"multi_buy": ["Apple"], "coupons": {"Milk": 2}}"#).unwrap();
//! assert!(rules.has_multi_buy("Apple"));
//! assert_eq!(rules.coupon_count("Milk"), 2);
//! ```

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// Multi-buy and coupon configuration keyed by product name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromotionRules {
    multi_buy: BTreeSet<String>,
    coupons: BTreeMap<String, u32>,
}

impl PromotionRules {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every 3rd unit of `name` free.
    ///
    /// Returns `false` if the rule was already enabled.
    pub fn enable_multi_buy(&mut self, name: impl Into<String>) -> bool {
        self.multi_buy.insert(name.into())
    }

    /// Adds one coupon for `name` and returns the new count.
    pub fn add_coupon(&mut self, name: impl Into<String>) -> u32 {
        let count = self.coupons.entry(name.into()).or_insert(0);
        *count = count.saturating_add(1);
        *count
    }

    pub fn has_multi_buy(&self, name: &str) -> bool {
        self.multi_buy.contains(name)
    }

    /// Number of coupons available for `name` (0 if none).
    pub fn coupon_count(&self, name: &str) -> u32 {
        self.coupons.get(name).copied().unwrap_or(0)
    }

    /// Names with the multi-buy rule, in sorted order.
    pub fn multi_buy_names(&self) -> impl Iterator<Item = &str> {
        self.multi_buy.iter().map(String::as_str)
    }

    /// Names with at least one coupon and their counts, in sorted order.
    pub fn coupons(&self) -> impl Iterator<Item = (&str, u32)> {
        self.coupons
            .iter()
            .filter(|(_, count)| **count > 0)
            .map(|(name, count)| (name.as_str(), *count))
    }

    pub fn is_empty(&self) -> bool {
        self.multi_buy.is_empty() && self.coupons().next().is_none()
    }
}
