//! # Validation Module
//!
//! Input validation for the product registration form.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Form surface                                                 │
//! │  ├── Input type hints (number fields, min=0)                           │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE (before the create request)                      │
//! │  ├── Required / length checks                                          │
//! │  └── Numeric cells must be real, non-negative numbers                  │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Store API                                                    │
//! │  └── Server-side constraints (authoritative)                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The sale draft is deliberately NOT validated here: the sale form
//! tolerates invalid numeric cells (they surface as invalid derived
//! fields), and the quantity lower bound is a UI hint only.

use crate::amount::Amount;
use crate::error::{ValidationError, ValidationResult};

/// Maximum length accepted for a product name.
pub const MAX_PRODUCT_NAME_LEN: usize = 200;

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - Must be at most 200 characters
///
/// ## Example
/// ```rust
/// use bodega_core::validation::validate_product_name;
///
/// assert!(validate_product_name("Milk 1L").is_ok());
/// assert!(validate_product_name("   ").is_err());
/// ```
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required { field: "name" });
    }

    if name.chars().count() > MAX_PRODUCT_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name",
            max: MAX_PRODUCT_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates a numeric form cell: it must hold a real, non-negative number.
pub fn validate_cell(field: &'static str, cell: Amount) -> ValidationResult<()> {
    match cell.value() {
        None => Err(ValidationError::NotANumber { field }),
        Some(v) if v < 0 => Err(ValidationError::Negative { field }),
        Some(_) => Ok(()),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_required() {
        assert!(validate_product_name("Coffee 250g").is_ok());
        assert!(matches!(
            validate_product_name(""),
            Err(ValidationError::Required { field: "name" })
        ));
        assert!(validate_product_name("  \t ").is_err());
    }

    #[test]
    fn test_name_too_long() {
        let long = "x".repeat(MAX_PRODUCT_NAME_LEN + 1);
        assert!(matches!(
            validate_product_name(&long),
            Err(ValidationError::TooLong { .. })
        ));

        let exactly = "x".repeat(MAX_PRODUCT_NAME_LEN);
        assert!(validate_product_name(&exactly).is_ok());
    }

    #[test]
    fn test_cell_rules() {
        assert!(validate_cell("quantity", Amount::from(0)).is_ok());
        assert!(validate_cell("quantity", Amount::from(12)).is_ok());
        assert!(matches!(
            validate_cell("quantity", Amount::from(-1)),
            Err(ValidationError::Negative { field: "quantity" })
        ));
        assert!(matches!(
            validate_cell("quantity", Amount::parse("12x")),
            Err(ValidationError::NotANumber { field: "quantity" })
        ));
    }
}
