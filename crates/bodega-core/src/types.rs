//! # Domain Types
//!
//! Core domain types shared with the Store API and the browser shell.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │  ProductOption  │   │  ProductDraft   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  productId      │──►│  label (=name)  │   │  name           │       │
//! │  │  name           │   │  value (=id)    │   │  salePrice      │       │
//! │  │  salePrice      │   │  isDisabled     │   │  buyPrice       │       │
//! │  │  buyPrice       │   │  (=!isActive)   │   │  quantity       │       │
//! │  │  quantity       │   └─────────────────┘   └─────────────────┘       │
//! │  │  isActive       │      derived, never       posted to               │
//! │  └─────────────────┘      persisted            POST /Product           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The sale-side types (`SaleDraft`, `SaleLine`) live in [`crate::draft`].

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::amount::Amount;
use crate::error::ValidationResult;
use crate::validation::{validate_cell, validate_product_name};

// =============================================================================
// Product
// =============================================================================

/// A product in the store catalog, as served by `GET /Product`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Product {
    /// Unique identifier assigned by the Store API (0 is reserved for
    /// "no product chosen" on a sale line).
    pub product_id: i64,

    /// Display name, doubles as the select-option label.
    pub name: String,

    /// Price the store sells at; snapshotted onto a sale line on selection.
    pub sale_price: i64,

    /// Price the store bought at (margin reporting, not used by the editor).
    pub buy_price: i64,

    /// Units on hand.
    pub quantity: i64,

    /// Whether the product may be chosen for NEW sale lines. Inactive
    /// products stay visible so historical sales still resolve.
    pub is_active: bool,
}

// =============================================================================
// Product Option
// =============================================================================

/// A catalog entry decorated for a select control.
///
/// Derived from [`Product`] on every catalog (re)load; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ProductOption {
    /// Option label shown in the dropdown (= product name).
    pub label: String,

    /// Option value submitted on selection (= product id).
    pub value: i64,

    /// Greys the option out for new lines (= NOT isActive).
    pub is_disabled: bool,

    /// The underlying catalog record.
    pub product: Product,
}

impl From<Product> for ProductOption {
    fn from(product: Product) -> Self {
        ProductOption {
            label: product.name.clone(),
            value: product.product_id,
            is_disabled: !product.is_active,
            product,
        }
    }
}

// =============================================================================
// Product Draft
// =============================================================================

/// The in-memory state of the product registration form.
///
/// Numeric fields are [`Amount`] cells so garbage typed into an input is
/// carried (and rejected at save time) instead of being coerced or lost.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ProductDraft {
    pub name: String,

    #[ts(as = "Option<i64>")]
    pub sale_price: Amount,

    #[ts(as = "Option<i64>")]
    pub buy_price: Amount,

    #[ts(as = "Option<i64>")]
    pub quantity: Amount,
}

impl Default for ProductDraft {
    /// A freshly opened registration form: empty name, everything at 0.
    fn default() -> Self {
        ProductDraft {
            name: String::new(),
            sale_price: Amount::ZERO,
            buy_price: Amount::ZERO,
            quantity: Amount::ZERO,
        }
    }
}

impl ProductDraft {
    /// Validates the draft before it is posted to the Store API.
    ///
    /// ## Rules
    /// - name: required, at most 200 characters
    /// - salePrice / buyPrice / quantity: must be real, non-negative numbers
    pub fn validate(&self) -> ValidationResult<()> {
        validate_product_name(&self.name)?;
        validate_cell("salePrice", self.sale_price)?;
        validate_cell("buyPrice", self.buy_price)?;
        validate_cell("quantity", self.quantity)?;
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog_product(id: i64, name: &str, active: bool) -> Product {
        Product {
            product_id: id,
            name: name.to_string(),
            sale_price: 10,
            buy_price: 7,
            quantity: 25,
            is_active: active,
        }
    }

    #[test]
    fn test_option_from_active_product() {
        let option = ProductOption::from(catalog_product(5, "Milk 1L", true));
        assert_eq!(option.label, "Milk 1L");
        assert_eq!(option.value, 5);
        assert!(!option.is_disabled);
    }

    #[test]
    fn test_option_from_inactive_product_is_disabled() {
        let option = ProductOption::from(catalog_product(9, "Old stock", false));
        assert!(option.is_disabled);
        // Still visible: the record itself is carried along.
        assert_eq!(option.product.product_id, 9);
    }

    #[test]
    fn test_product_wire_format_is_camel_case() {
        let json = serde_json::to_value(catalog_product(1, "Bread", true)).unwrap();
        assert!(json.get("productId").is_some());
        assert!(json.get("salePrice").is_some());
        assert!(json.get("isActive").is_some());
        assert!(json.get("product_id").is_none());
    }

    #[test]
    fn test_product_draft_validate() {
        let mut draft = ProductDraft {
            name: "Rice 1kg".to_string(),
            sale_price: Amount::from(30),
            buy_price: Amount::from(22),
            quantity: Amount::from(40),
        };
        assert!(draft.validate().is_ok());

        draft.sale_price = Amount::parse("3o");
        assert!(draft.validate().is_err());
    }
}
