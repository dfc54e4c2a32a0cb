//! # Pricing
//!
//! Turns scanned items plus promotion rules into adjusted per-line prices.
//!
//! ## Pass Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  scanned: [Apple, Milk, Apple, Apple, Milk]                             │
//! │                                                                         │
//! │  1. group by name (scan order kept)                                     │
//! │       Apple → [0, 2, 3]     Milk → [1, 4]                               │
//! │                                                                         │
//! │  2. multi-buy: 3rd, 6th, 9th… unit of an eligible name → $0.00          │
//! │       Apple index 3 is free                                             │
//! │                                                                         │
//! │  3. coupons: first N units of a name, in scan order, get 15% off        │
//! │       runs on the prices left by step 2                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A coupon that lands on a unit already zeroed by multi-buy is still used
//! up; 15% of zero is zero. Every call recomputes from scratch.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::item::{Item, Sku};
use crate::money::Money;
use crate::promotions::PromotionRules;
use crate::{COUPON_DISCOUNT, MULTI_BUY_GROUP_SIZE};

/// A promotion that changed the price of one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Adjustment {
    /// The unit was made free by the multi-buy rule.
    MultiBuyFree,
    /// A coupon was consumed on the unit; `amount` is what it took off.
    Coupon { amount: Money },
}

/// One scanned item with its promotional price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricedLine {
    pub name: String,
    pub unit_price: Money,
    pub adjusted_price: Money,
    pub adjustments: Vec<Adjustment>,
}

impl PricedLine {
    fn from_item(item: &Item) -> Self {
        PricedLine {
            name: item.name().to_string(),
            unit_price: item.price(),
            adjusted_price: item.price(),
            adjustments: Vec::new(),
        }
    }

    fn make_free(&mut self) {
        self.adjusted_price = Money::zero();
        self.adjustments.push(Adjustment::MultiBuyFree);
    }

    fn apply_coupon(&mut self) {
        let amount = self.adjusted_price.discount_amount(COUPON_DISCOUNT);
        self.adjusted_price = self.adjusted_price.apply_discount(COUPON_DISCOUNT);
        self.adjustments.push(Adjustment::Coupon { amount });
    }

    /// Total taken off the unit price by promotions.
    pub fn savings(&self) -> Money {
        self.unit_price - self.adjusted_price
    }

    pub fn is_free(&self) -> bool {
        self.adjustments.contains(&Adjustment::MultiBuyFree)
    }
}

/// Prices `items` under `rules`.
///
/// The result has one line per item, in the same order.
///
/// ```rust
/// use checkout_core::pricing::price_items;
/// use checkout_core::{Item, Money, PromotionRules};
///
/// let apple = Item::new("Apple", Money::from_cents(50));
/// let mut rules = PromotionRules::new();
/// rules.enable_multi_buy("Apple");
///
/// let lines = price_items(&[apple.clone(), apple.clone(), apple], &rules);
/// let prices: Vec<i64> = lines.iter().map(|l| l.adjusted_price.cents()).collect();
/// assert_eq!(prices, vec![50, 50, 0]);
/// ```
pub fn price_items(items: &[Item], rules: &PromotionRules) -> Vec<PricedLine> {
    let mut lines: Vec<PricedLine> = items.iter().map(PricedLine::from_item).collect();
    let groups = group_by_name(items);

    for (&name, indices) in &groups {
        if !rules.has_multi_buy(name) {
            continue;
        }

        let free_count = indices.len() / MULTI_BUY_GROUP_SIZE;
        trace!(name, units = indices.len(), free_count, "multi-buy pass");

        for &index in indices
            .iter()
            .skip(MULTI_BUY_GROUP_SIZE - 1)
            .step_by(MULTI_BUY_GROUP_SIZE)
            .take(free_count)
        {
            lines[index].make_free();
        }
    }

    for (&name, indices) in &groups {
        let available = rules.coupon_count(name) as usize;
        if available == 0 {
            continue;
        }

        trace!(name, units = indices.len(), available, "coupon pass");

        for &index in indices.iter().take(available) {
            lines[index].apply_coupon();
        }
    }

    lines
}

/// Sums the adjusted prices of `lines`.
pub fn total_of(lines: &[PricedLine]) -> Money {
    lines.iter().map(|line| line.adjusted_price).sum()
}

/// Item indices per name, each list in scan order.
fn group_by_name(items: &[Item]) -> BTreeMap<&str, Vec<usize>> {
    let mut groups: BTreeMap<&str, Vec<usize>> = BTreeMap::new();
    for (index, item) in items.iter().enumerate() {
        groups.entry(item.name()).or_default().push(index);
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, cents: i64) -> Item {
        Item::new(name, Money::from_cents(cents))
    }

    fn prices(lines: &[PricedLine]) -> Vec<i64> {
        lines.iter().map(|l| l.adjusted_price.cents()).collect()
    }

    #[test]
    fn test_no_rules_keeps_unit_prices() {
        let items = vec![item("A", 100), item("B", 250), item("A", 100)];
        let lines = price_items(&items, &PromotionRules::new());

        assert_eq!(prices(&lines), vec![100, 250, 100]);
        assert_eq!(total_of(&lines).cents(), 450);
        assert!(lines.iter().all(|l| l.adjustments.is_empty()));
    }

    #[test]
    fn test_multi_buy_frees_every_third_unit() {
        let mut rules = PromotionRules::new();
        rules.enable_multi_buy("A");

        let two = vec![item("A", 100); 2];
        assert_eq!(prices(&price_items(&two, &rules)), vec![100, 100]);

        let three = vec![item("A", 100); 3];
        assert_eq!(prices(&price_items(&three, &rules)), vec![100, 100, 0]);

        let seven = vec![item("A", 100); 7];
        assert_eq!(
            prices(&price_items(&seven, &rules)),
            vec![100, 100, 0, 100, 100, 0, 100]
        );
    }

    #[test]
    fn test_multi_buy_picks_third_scanned_not_cheapest() {
        let mut rules = PromotionRules::new();
        rules.enable_multi_buy("A");

        let items = vec![item("A", 100), item("A", 50), item("A", 300)];
        let lines = price_items(&items, &rules);

        assert_eq!(prices(&lines), vec![100, 50, 0]);
        assert!(lines[2].is_free());
        assert_eq!(lines[2].savings().cents(), 300);
    }

    #[test]
    fn test_multi_buy_counts_only_units_of_same_name() {
        let mut rules = PromotionRules::new();
        rules.enable_multi_buy("A");

        let items = vec![
            item("A", 100),
            item("B", 70),
            item("A", 100),
            item("B", 70),
            item("A", 100),
            item("B", 70),
        ];
        assert_eq!(
            prices(&price_items(&items, &rules)),
            vec![100, 70, 100, 70, 0, 70]
        );
    }

    #[test]
    fn test_coupon_takes_fifteen_percent() {
        let mut rules = PromotionRules::new();
        rules.add_coupon("A");

        let lines = price_items(&[item("A", 1000)], &rules);
        assert_eq!(prices(&lines), vec![850]);
        assert_eq!(
            lines[0].adjustments,
            vec![Adjustment::Coupon {
                amount: Money::from_cents(150)
            }]
        );
    }

    #[test]
    fn test_coupons_apply_to_first_units_in_scan_order() {
        let mut rules = PromotionRules::new();
        rules.add_coupon("A");
        rules.add_coupon("A");

        let items = vec![item("A", 1000), item("B", 1000), item("A", 2000), item("A", 100)];
        assert_eq!(
            prices(&price_items(&items, &rules)),
            vec![850, 1000, 1700, 100]
        );
    }

    #[test]
    fn test_more_coupons_than_units() {
        let mut rules = PromotionRules::new();
        for _ in 0..5 {
            rules.add_coupon("A");
        }

        let items = vec![item("A", 200); 2];
        assert_eq!(prices(&price_items(&items, &rules)), vec![170, 170]);
    }

    #[test]
    fn test_coupon_after_multi_buy_starts_at_first_unit() {
        let mut rules = PromotionRules::new();
        rules.enable_multi_buy("A");
        rules.add_coupon("A");

        let items = vec![item("A", 1000); 3];
        let lines = price_items(&items, &rules);

        assert_eq!(prices(&lines), vec![850, 1000, 0]);
        assert_eq!(total_of(&lines).cents(), 1850);
    }

    #[test]
    fn test_coupon_consumed_on_free_unit() {
        let mut rules = PromotionRules::new();
        rules.enable_multi_buy("A");
        for _ in 0..3 {
            rules.add_coupon("A");
        }

        let items = vec![item("A", 1000); 4];
        let lines = price_items(&items, &rules);

        // Third coupon lands on the free unit and is wasted; the 4th unit pays full price.
        assert_eq!(prices(&lines), vec![850, 850, 0, 1000]);
        assert_eq!(
            lines[2].adjustments,
            vec![
                Adjustment::MultiBuyFree,
                Adjustment::Coupon {
                    amount: Money::zero()
                }
            ]
        );
    }

    #[test]
    fn test_rules_for_unscanned_names_are_no_ops() {
        let mut rules = PromotionRules::new();
        rules.enable_multi_buy("Ghost");
        rules.add_coupon("Ghost");

        let items = vec![item("A", 100)];
        assert_eq!(prices(&price_items(&items, &rules)), vec![100]);
    }

    #[test]
    fn test_pricing_does_not_touch_rules() {
        let mut rules = PromotionRules::new();
        rules.add_coupon("A");
        let before = rules.clone();

        let items = vec![item("A", 100); 2];
        let first = price_items(&items, &rules);
        let second = price_items(&items, &rules);

        assert_eq!(rules, before);
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_basket() {
        let lines = price_items(&[], &PromotionRules::new());
        assert!(lines.is_empty());
        assert!(total_of(&lines).is_zero());
    }
}
