//! # Money Module
//!
//! Provides the `Money` type for prices and totals, and `DiscountRate` for
//! percentage promotions.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Every price on a receipt is an integer count of cents.                │
//! │                                                                         │
//! │    15% off $10.00  →  1000 * 1500 bps / 10000 = 150 cents              │
//! │    15% off $0.99   →  (99 * 1500 + 5000) / 10000 = 15 cents            │
//! │                                                                         │
//! │  No floats anywhere in the pricing path.                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use checkout_core::money::{DiscountRate, Money};
//!
//! let price = Money::from_cents(1000); // $10.00
//! let off = price.discount_amount(DiscountRate::from_bps(1500));
//! assert_eq!(off.cents(), 150);
//! assert_eq!(price.to_string(), "$10.00");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub, SubAssign};

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in minor currency units (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: Subtraction stays well-defined; pricing clamps at zero
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Saturating arithmetic**: `+`, `-` and `sum` stop at the i64 bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ```rust
    /// use checkout_core::money::Money;
    ///
    /// let price = Money::from_cents(1050);
    /// assert_eq!(price.cents(), 1050);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the whole-dollar portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the cents portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Returns the rounded discount for this amount at `rate`.
    ///
    /// ## Rounding
    /// Integer math: `(amount * bps + 5000) / 10000`. The +5000 rounds half
    /// away from zero for non-negative amounts, so 15% of 10 cents (1.5)
    /// becomes 2 cents.
    ///
    /// ```rust
    /// use checkout_core::money::{DiscountRate, Money};
    ///
    /// let rate = DiscountRate::from_bps(1500);
    /// assert_eq!(Money::from_cents(1000).discount_amount(rate).cents(), 150);
    /// assert_eq!(Money::from_cents(10).discount_amount(rate).cents(), 2);
    /// assert_eq!(Money::zero().discount_amount(rate).cents(), 0);
    /// ```
    pub fn discount_amount(&self, rate: DiscountRate) -> Money {
        // i128 keeps large amounts from overflowing the intermediate product
        let off = (self.0 as i128 * rate.bps() as i128 + 5000) / 10000;
        Money::from_cents(off as i64)
    }

    /// Applies `rate` and returns the discounted amount, never below zero.
    pub fn apply_discount(&self, rate: DiscountRate) -> Money {
        (*self - self.discount_amount(rate)).clamp_non_negative()
    }

    /// Returns zero for negative amounts, the amount otherwise.
    #[inline]
    pub const fn clamp_non_negative(self) -> Self {
        if self.0 < 0 {
            Money(0)
        } else {
            self
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Receipt money format: `$<dollars>.<cents>`, cents zero-padded to 2 digits.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_sub(other.0);
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Discount Rate
// =============================================================================

/// Percentage discount in basis points.
///
/// 1 basis point = 0.01%, so 1500 bps = 15%.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscountRate(u32);

impl DiscountRate {
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        DiscountRate(bps)
    }

    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }
}
