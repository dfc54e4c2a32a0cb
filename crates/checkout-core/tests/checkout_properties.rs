use proptest::prelude::*;

use checkout_core::{Item, Money, PromotionRules, Register, Sku};

const NAMES: [&str; 4] = ["Apple", "Milk", "Bread", "Soda"];

fn basket() -> impl Strategy<Value = Vec<Item>> {
    prop::collection::vec((0..NAMES.len(), 0i64..5_000), 0..30).prop_map(|picks| {
        picks
            .into_iter()
            .map(|(name, cents)| Item::new(NAMES[name], Money::from_cents(cents)))
            .collect()
    })
}

fn rules() -> impl Strategy<Value = PromotionRules> {
    (
        prop::collection::vec(0..NAMES.len(), 0..4),
        prop::collection::vec(0..NAMES.len(), 0..8),
    )
        .prop_map(|(multi_buy, coupons)| {
            let mut rules = PromotionRules::new();
            for name in multi_buy {
                rules.enable_multi_buy(NAMES[name]);
            }
            for name in coupons {
                rules.add_coupon(NAMES[name]);
            }
            rules
        })
}

fn register_with(items: &[Item], rules: PromotionRules) -> Register {
    let mut register = Register::with_rules(rules);
    for item in items {
        register.scan(item);
    }
    register
}

proptest! {
    #[test]
    fn test_total_without_rules_is_plain_sum(items in basket()) {
        let mut register = register_with(&items, PromotionRules::new());
        let expected: Money = items.iter().map(|i| i.price()).sum();

        prop_assert_eq!(register.subtotal(), expected);

        let receipt = register.total();
        let output = receipt.output();
        let body: Vec<&str> = output.lines().skip(1).take(items.len()).collect();
        let expected_lines: Vec<String> = items
            .iter()
            .map(|i| format!("{}: {}", i.name(), i.price()))
            .collect();
        prop_assert_eq!(body, expected_lines);
    }

    #[test]
    fn test_lines_keep_scan_order_and_stay_in_bounds(items in basket(), rules in rules()) {
        let mut register = register_with(&items, rules);
        register.subtotal();
        let lines = register.current().priced_lines();

        prop_assert_eq!(lines.len(), items.len());
        for (line, item) in lines.iter().zip(&items) {
            prop_assert_eq!(line.name.as_str(), item.name());
            prop_assert_eq!(line.unit_price, item.price());
            prop_assert!(line.adjusted_price >= Money::zero());
            prop_assert!(line.adjusted_price <= line.unit_price);
        }
    }

    #[test]
    fn test_multi_buy_frees_one_per_three(items in basket()) {
        let mut rules = PromotionRules::new();
        for name in NAMES {
            rules.enable_multi_buy(name);
        }
        let mut register = register_with(&items, rules);
        register.subtotal();
        let lines = register.current().priced_lines();

        for name in NAMES {
            let units = items.iter().filter(|i| i.name() == name).count();
            let free = lines.iter().filter(|l| l.name == name && l.is_free()).count();
            prop_assert_eq!(free, units / 3);
        }
    }

    #[test]
    fn test_subtotal_is_idempotent(items in basket(), rules in rules()) {
        let mut register = register_with(&items, rules);
        let first = register.subtotal();
        prop_assert_eq!(register.subtotal(), first);
        prop_assert_eq!(register.total().total(), first);
    }

    #[test]
    fn test_rules_survive_close_out(items in basket(), rules in rules()) {
        let mut register = register_with(&items, rules.clone());
        let first = register.total();

        for item in &items {
            register.scan(item);
        }
        let second = register.total();

        prop_assert_eq!(register.rules(), &rules);
        prop_assert_eq!(first.total(), second.total());
        prop_assert_eq!(first.output(), second.output());
    }
}

#[test]
fn test_three_units_with_one_coupon_discounts_first_unit() {
    let apple = Item::new("Apple", Money::from_cents(1000));
    let mut register = Register::new();
    register.enable_two_for_one("Apple");
    register.apply_coupon("Apple");
    for _ in 0..3 {
        register.scan(&apple);
    }

    let receipt = register.total();
    assert_eq!(
        receipt.output(),
        "Receipt:\nApple: $8.50\nApple: $10.00\nApple: $0.00\n------------------\nTOTAL: $18.50"
    );
}
