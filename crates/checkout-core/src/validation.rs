//! # Validation Module
//!
//! Input checks for items entering the register.
//!
//! The register itself accepts any item; these checks back the validated
//! constructor [`Item::try_new`](crate::item::Item::try_new) for callers that
//! build items from untrusted input (config files, scanners, imports).
//!
//! ## Usage
//! ```rust
//! use checkout_core::validation::{validate_item_name, validate_price_cents};
//!
//! assert!(validate_item_name("Milk").is_ok());
//! assert!(validate_price_cents(-1).is_err());
//! ```

use crate::error::ValidationError;
use crate::MAX_ITEM_NAME_LEN;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates an item name.
///
/// ## Rules
/// - Must not be empty or whitespace only
/// - At most [`MAX_ITEM_NAME_LEN`] characters
pub fn validate_item_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_ITEM_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_ITEM_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates a unit price in cents.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
///
/// ```rust
/// use checkout_core::validation::validate_price_cents;
///
/// assert!(validate_price_cents(1099).is_ok());
/// assert!(validate_price_cents(0).is_ok());
/// assert!(validate_price_cents(-100).is_err());
/// ```
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}
