//! # Items
//!
//! The "has a name and a price" capability ([`Sku`]) and the concrete
//! [`Item`] the register stores.
//!
//! ## Identity
//! Items are matched to promotions by name, not by instance: scanning the
//! same product three times puts three equal `Item`s on the receipt.

use serde::{Deserialize, Serialize};

use crate::error::CoreResult;
use crate::money::Money;
use crate::validation::{validate_item_name, validate_price_cents};

/// Anything that can be scanned into a register.
pub trait Sku {
    /// Product name, used for promotion matching and receipt lines.
    fn name(&self) -> &str;

    /// Unit price. Constant for a given value.
    fn price(&self) -> Money;
}

/// An immutable priced item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    name: String,
    price: Money,
}

impl Item {
    /// Creates an item without checks.
    ///
    /// ```rust
    /// use checkout_core::{Item, Money, Sku};
    ///
    /// let milk = Item::new("Milk", Money::from_cents(349));
    /// assert_eq!(milk.name(), "Milk");
    /// assert_eq!(milk.price().cents(), 349);
    /// ```
    pub fn new(name: impl Into<String>, price: Money) -> Self {
        Item {
            name: name.into(),
            price,
        }
    }

    /// Creates an item after validating the name and price.
    ///
    /// ```rust
    /// use checkout_core::Item;
    ///
    /// assert!(Item::try_new("Bread", 299).is_ok());
    /// assert!(Item::try_new("", 299).is_err());
    /// assert!(Item::try_new("Bread", -1).is_err());
    /// ```
    pub fn try_new(name: impl Into<String>, price_cents: i64) -> CoreResult<Self> {
        let name = name.into();
        validate_item_name(&name)?;
        validate_price_cents(price_cents)?;
        Ok(Item::new(name, Money::from_cents(price_cents)))
    }

    /// Freezes a snapshot of any [`Sku`].
    ///
    /// The receipt keeps the name and price as they were at scan time.
    pub fn from_sku<S: Sku + ?Sized>(sku: &S) -> Self {
        Item::new(sku.name(), sku.price())
    }
}

impl Sku for Item {
    fn name(&self) -> &str {
        &self.name
    }

    fn price(&self) -> Money {
        self.price
    }
}
