//! # Register
//!
//! Scanning front-end. Owns the standing promotion rules and the receipt
//! currently being scanned.
//!
//! ## Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  scan(item) ───────────────► receipt.add(snapshot)                      │
//! │  enable_two_for_one(name) ─► rules.multi_buy += name                    │
//! │  apply_coupon(name) ───────► rules.coupons[name] += 1                   │
//! │  subtotal() ───────────────► push rules, receipt.total()                │
//! │  total() ──────────────────► push rules, hand back receipt, start fresh │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Close-out never resets the rules. Coupon counts are standing policy and
//! apply again in full to the next receipt.

use chrono::Utc;
use tracing::{debug, info};

use crate::item::{Item, Sku};
use crate::money::Money;
use crate::promotions::PromotionRules;
use crate::receipt::Receipt;

#[derive(Debug, Default)]
pub struct Register {
    rules: PromotionRules,
    receipt: Receipt,
}

impl Register {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a register with promotions already in place.
    pub fn with_rules(rules: PromotionRules) -> Self {
        Register {
            rules,
            receipt: Receipt::new(),
        }
    }

    /// Adds a snapshot of `sku` to the in-progress receipt.
    pub fn scan<S: Sku + ?Sized>(&mut self, sku: &S) {
        debug!(name = sku.name(), price = %sku.price(), "scan");
        self.receipt.add(Item::from_sku(sku));
    }

    /// Enables "every 3rd unit free" for `name`.
    pub fn enable_two_for_one(&mut self, name: impl Into<String>) {
        let name = name.into();
        if self.rules.enable_multi_buy(name.clone()) {
            debug!(%name, "multi-buy enabled");
        }
    }

    /// Makes one more 15%-off coupon available for `name`.
    pub fn apply_coupon(&mut self, name: impl Into<String>) {
        let name = name.into();
        let count = self.rules.add_coupon(name.clone());
        debug!(%name, count, "coupon applied");
    }

    /// Current total of the in-progress receipt. Does not close it.
    pub fn subtotal(&mut self) -> Money {
        self.receipt.apply_rules(self.rules.clone());
        self.receipt.total()
    }

    /// Closes out the in-progress receipt and starts an empty one.
    pub fn total(&mut self) -> Receipt {
        self.receipt.apply_rules(self.rules.clone());

        let mut finished = std::mem::take(&mut self.receipt);
        finished.finish(Utc::now());

        info!(
            receipt_id = %finished.id(),
            items = finished.len(),
            total = %finished.total(),
            "receipt closed"
        );

        finished
    }

    pub fn rules(&self) -> &PromotionRules {
        &self.rules
    }

    /// The receipt being scanned.
    ///
    /// Its rules are only refreshed by `subtotal` and `total`.
    pub fn current(&self) -> &Receipt {
        &self.receipt
    }
}
