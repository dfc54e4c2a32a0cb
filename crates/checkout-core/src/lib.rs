//! # checkout-core: Pure Pricing Logic for the Checkout Register
//!
//! Items are scanned into a register, which produces a receipt priced with
//! the store's standing promotions (multi-buy and coupons).
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    apps/store (config, logging)                         │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ checkout-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐  ┌────────────┐  ┌──────────┐  ┌───────────┐    │   │
//! │  │   │  money   │  │ promotions │  │ pricing  │  │ register  │    │   │
//! │  │   │  Money   │  │  multi-buy │  │  passes  │  │  Register │    │   │
//! │  │   │ Discount │  │  coupons   │  │  lines   │  │  Receipt  │    │   │
//! │  │   └──────────┘  └────────────┘  └──────────┘  └───────────┘    │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer arithmetic and discount rounding
//! - [`item`] - The `Sku` capability and the concrete `Item`
//! - [`promotions`] - Store-wide multi-buy and coupon configuration
//! - [`pricing`] - The multi-buy and coupon passes
//! - [`receipt`] - Receipt totals and text rendering
//! - [`register`] - Scanning front-end and close-out
//! - [`error`] / [`validation`] - Typed errors for validated input
//!
//! ## Example Usage
//!
//! ```rust
//! use checkout_core::{Item, Money, Register};
//!
//! let apple = Item::new("Apple", Money::from_cents(50));
//! let milk = Item::new("Milk", Money::from_cents(1000));
//!
//! let mut register = Register::new();
//! register.enable_two_for_one("Apple");
//! register.apply_coupon("Milk");
//!
//! register.scan(&milk);
//! for _ in 0..3 {
//!     register.scan(&apple);
//! }
//! assert_eq!(register.subtotal().cents(), 850 + 100);
//!
//! let receipt = register.total();
//! assert!(receipt.output().ends_with("TOTAL: $9.50"));
//! ```

pub mod error;
pub mod item;
pub mod money;
pub mod pricing;
pub mod promotions;
pub mod receipt;
pub mod register;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use item::{Item, Sku};
pub use money::{DiscountRate, Money};
pub use pricing::{Adjustment, PricedLine};
pub use promotions::PromotionRules;
pub use receipt::{Receipt, ReceiptSummary};
pub use register::Register;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Discount each coupon takes off one unit: 15%.
pub const COUPON_DISCOUNT: DiscountRate = DiscountRate::from_bps(1500);

/// Multi-buy groups: one free unit per complete group of this many.
pub const MULTI_BUY_GROUP_SIZE: usize = 3;

/// Longest item name accepted by [`Item::try_new`].
pub const MAX_ITEM_NAME_LEN: usize = 200;
