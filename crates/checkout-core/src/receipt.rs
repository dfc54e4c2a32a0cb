//! # Receipt
//!
//! The scanned items of one transaction plus the promotion rules pushed in
//! by the register.
//!
//! ## Lifecycle
//! ```text
//! ┌──────────┐   add()    ┌──────────┐   Register::total()   ┌──────────┐
//! │  Empty   │──────────► │ Scanning │ ────────────────────► │ Finished │
//! └──────────┘            └──────────┘   (closed_at stamped) └──────────┘
//! ```
//!
//! ## Output Format
//! ```text
//! Receipt:
//! Milk: $2.97
//! Apple: $0.50
//! ------------------
//! TOTAL: $3.47
//! ```
//! Lines use adjusted prices, in scan order, joined with `\n` and no
//! trailing newline.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::item::{Item, Sku};
use crate::money::Money;
use crate::pricing::{price_items, total_of, PricedLine};
use crate::promotions::PromotionRules;

pub const RECEIPT_HEADER: &str = "Receipt:";
pub const RECEIPT_SEPARATOR: &str = "------------------";

/// Scanned items and the rules to price them with.
///
/// Only a [`Register`](crate::Register) fills and prices a receipt. Once
/// closed out it is sealed: further items or rules are ignored.
#[derive(Debug, Clone)]
pub struct Receipt {
    id: Uuid,
    items: Vec<Item>,
    rules: PromotionRules,
    closed_at: Option<DateTime<Utc>>,
}

impl Receipt {
    pub fn new() -> Self {
        Receipt {
            id: Uuid::new_v4(),
            items: Vec::new(),
            rules: PromotionRules::default(),
            closed_at: None,
        }
    }

    /// Appends an item; scan order is kept.
    pub(crate) fn add(&mut self, item: Item) {
        if self.is_finished() {
            debug!(receipt_id = %self.id, name = item.name(), "receipt closed, item ignored");
            return;
        }
        self.items.push(item);
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Replaces the rules used by `total`, `output` and `priced_lines`.
    pub(crate) fn apply_rules(&mut self, rules: PromotionRules) {
        if self.is_finished() {
            debug!(receipt_id = %self.id, "receipt closed, rules ignored");
            return;
        }
        self.rules = rules;
    }

    pub fn rules(&self) -> &PromotionRules {
        &self.rules
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// When the register closed this receipt out, `None` while scanning.
    pub fn closed_at(&self) -> Option<DateTime<Utc>> {
        self.closed_at
    }

    pub fn is_finished(&self) -> bool {
        self.closed_at.is_some()
    }

    pub(crate) fn finish(&mut self, at: DateTime<Utc>) {
        self.closed_at = Some(at);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Adjusted price of every item, in scan order.
    pub fn priced_lines(&self) -> Vec<PricedLine> {
        price_items(&self.items, &self.rules)
    }

    /// Sum of the adjusted prices.
    pub fn total(&self) -> Money {
        total_of(&self.priced_lines())
    }

    /// Renders the receipt text.
    ///
    /// ```rust
    /// use checkout_core::{Item, Money, Register};
    ///
    /// let mut register = Register::new();
    /// register.scan(&Item::new("Milk", Money::from_cents(1050)));
    /// register.scan(&Item::new("Gum", Money::from_cents(5)));
    ///
    /// let receipt = register.total();
    /// assert_eq!(
    ///     receipt.output(),
    ///     "Receipt:\nMilk: $10.50\nGum: $0.05\n------------------\nTOTAL: $10.55"
    /// );
    /// ```
    pub fn output(&self) -> String {
        let lines = self.priced_lines();
        let total = total_of(&lines);

        let mut out = Vec::with_capacity(lines.len() + 3);
        out.push(RECEIPT_HEADER.to_string());
        out.extend(
            lines
                .iter()
                .map(|line| format!("{}: {}", line.name, line.adjusted_price)),
        );
        out.push(RECEIPT_SEPARATOR.to_string());
        out.push(format!("TOTAL: {}", total));

        out.join("\n")
    }

    /// Serializable view for logs and integrations.
    pub fn summary(&self) -> ReceiptSummary {
        ReceiptSummary::from(self)
    }
}

impl Default for Receipt {
    fn default() -> Self {
        Self::new()
    }
}

/// One line of a [`ReceiptSummary`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptLineSummary {
    pub name: String,
    pub unit_price_cents: i64,
    pub adjusted_price_cents: i64,
}

/// Receipt totals summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptSummary {
    pub id: Uuid,
    pub lines: Vec<ReceiptLineSummary>,
    pub total_cents: i64,
    pub closed_at: Option<DateTime<Utc>>,
}

impl From<&Receipt> for ReceiptSummary {
    fn from(receipt: &Receipt) -> Self {
        let lines = receipt.priced_lines();
        ReceiptSummary {
            id: receipt.id,
            total_cents: total_of(&lines).cents(),
            lines: lines
                .into_iter()
                .map(|line| ReceiptLineSummary {
                    name: line.name,
                    unit_price_cents: line.unit_price.cents(),
                    adjusted_price_cents: line.adjusted_price.cents(),
                })
                .collect(),
            closed_at: receipt.closed_at,
        }
    }
}
