//! # Sale Draft
//!
//! The in-memory, not-yet-persisted representation of a sale, and the
//! derived-totals reducer that keeps `total` and `change` honest.
//!
//! ## Derived-Field Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Derived-Totals Engine                               │
//! │                                                                         │
//! │  Line mutation                    Payment edit                          │
//! │  (add/remove/select/quantity)     (set_payment)                         │
//! │        │                                │                               │
//! │        ▼                                │                               │
//! │  recompute()                            │                               │
//! │  total = Σ price·quantity               │                               │
//! │        │                                │                               │
//! │        └────────────► refresh_change() ◄┘                               │
//! │                       change = payment - total                          │
//! │                                                                         │
//! │  INVARIANTS (hold after every mutation, never left stale):              │
//! │  • total  == Σ line.price.unwrap_or(0) * line.quantity                  │
//! │  • change == payment - total                                            │
//! │                                                                         │
//! │  Loading an existing sale replaces the draft wholesale WITHOUT          │
//! │  recomputing: the server-provided total stands until a local edit.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Mutations here are unguarded; mode rules (create vs edit) live in
//! [`crate::editor::SaleEditor`], which owns the draft.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::amount::Amount;
use crate::error::{EditorError, EditorResult};
use crate::types::Product;
use crate::{DEFAULT_LINE_QUANTITY, UNSET_PRODUCT_ID};

// =============================================================================
// Sale Line
// =============================================================================

/// One product+quantity+price entry within a sale.
///
/// ## Design Notes
/// - `price` is a snapshot of the product's sale price at selection time,
///   absent until a product is chosen. A later catalog price change does
///   not move lines already on the draft.
/// - Lines are addressed positionally (insertion order = row order); there
///   is no per-line id on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SaleLine {
    /// Catalog reference; [`UNSET_PRODUCT_ID`] until a product is chosen.
    pub product_id: i64,

    /// Units sold. An Amount cell: the quantity input can hold garbage
    /// without breaking the editor.
    #[serde(default)]
    #[ts(as = "Option<i64>")]
    pub quantity: Amount,

    /// Unit price snapshot; contributes 0 to the total while unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<i64>,
}

impl Default for SaleLine {
    /// A freshly added row: no product, quantity 1, no price.
    fn default() -> Self {
        SaleLine {
            product_id: UNSET_PRODUCT_ID,
            quantity: Amount::from(DEFAULT_LINE_QUANTITY),
            price: None,
        }
    }
}

impl SaleLine {
    /// The line's contribution to the sale total (`price * quantity`,
    /// with an unset price treated as 0).
    #[inline]
    pub fn line_total(&self) -> Amount {
        Amount::from(self.price.unwrap_or(0)) * self.quantity
    }
}

// =============================================================================
// Sale Draft
// =============================================================================

/// The draft of a sale being created or edited.
///
/// Matches the Store API's `Sale` record shape, so the same struct is the
/// `GET /Sale/{id}` response, the `POST /Sale` body (where `saleId` is
/// absent and therefore omitted from the payload), and the `PUT /Sale/{id}`
/// body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SaleDraft {
    /// Present only when editing an existing sale; read-only once set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sale_id: Option<i64>,

    /// Server-assigned; never edited client-side.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(as = "Option<String>")]
    pub date: Option<DateTime<Utc>>,

    /// Derived: Σ price·quantity over the lines.
    #[serde(default)]
    #[ts(as = "Option<i64>")]
    pub total: Amount,

    /// Loan sales defer payment; settled later through the edit screen.
    #[serde(default)]
    pub is_loan: bool,

    /// Relevant only when `is_loan` is set.
    #[serde(default)]
    pub apartment_number: String,

    /// Amount tendered by the customer.
    #[serde(default)]
    #[ts(as = "Option<i64>")]
    pub payment: Amount,

    /// Derived: payment - total.
    #[serde(default)]
    #[ts(as = "Option<i64>")]
    pub change: Amount,

    /// Ordered line items; insertion order is row order and the index
    /// used for addressing edits.
    pub product_sales: Vec<SaleLine>,
}

impl Default for SaleDraft {
    fn default() -> Self {
        SaleDraft::new()
    }
}

impl SaleDraft {
    /// A fresh draft for the create screen: one default line, payment 0,
    /// total 0.
    pub fn new() -> Self {
        SaleDraft {
            sale_id: None,
            date: None,
            total: Amount::ZERO,
            is_loan: false,
            apartment_number: String::new(),
            payment: Amount::ZERO,
            change: Amount::ZERO,
            product_sales: vec![SaleLine::default()],
        }
    }

    // =========================================================================
    // Derived-Totals Reducer
    // =========================================================================

    /// Recomputes `total` from the lines, then `change` from the fresh
    /// total. Every line mutation funnels through here, so the invariants
    /// are enforced in one place instead of at each call site.
    pub fn recompute(&mut self) {
        self.total = self
            .product_sales
            .iter()
            .fold(Amount::ZERO, |sum, line| sum + line.line_total());
        self.refresh_change();
    }

    /// Recomputes `change = payment - total` from the values currently
    /// stored on the draft.
    fn refresh_change(&mut self) {
        self.change = self.payment - self.total;
    }

    // =========================================================================
    // Line Mutations (mode rules enforced by the editor)
    // =========================================================================

    /// Appends a new default line. The unset price contributes 0, so the
    /// total is unchanged by construction.
    pub fn add_line(&mut self) {
        self.product_sales.push(SaleLine::default());
        self.recompute();
    }

    /// Removes the line at `index`; subsequent lines shift down one slot.
    pub fn remove_line(&mut self, index: usize) -> EditorResult<()> {
        self.check_index(index)?;
        self.product_sales.remove(index);
        self.recompute();
        Ok(())
    }

    /// Applies a product selection to the line at `index`.
    ///
    /// `None` models clearing the select: the line reverts to "no product"
    /// and contributes 0. Either way the quantity snaps back to 1.
    pub fn select_product(&mut self, index: usize, selection: Option<&Product>) -> EditorResult<()> {
        self.check_index(index)?;
        let line = &mut self.product_sales[index];
        match selection {
            Some(product) => {
                line.product_id = product.product_id;
                line.price = Some(product.sale_price);
            }
            None => {
                line.product_id = UNSET_PRODUCT_ID;
                line.price = None;
            }
        }
        line.quantity = Amount::from(DEFAULT_LINE_QUANTITY);
        self.recompute();
        Ok(())
    }

    /// Sets the quantity of the line at `index`.
    ///
    /// The cell is stored as typed: the input surface hints `min=1` but
    /// zero, negative, and unparseable values are all representable and
    /// flow into the total without clamping.
    pub fn set_quantity(&mut self, index: usize, quantity: Amount) -> EditorResult<()> {
        self.check_index(index)?;
        self.product_sales[index].quantity = quantity;
        self.recompute();
        Ok(())
    }

    // =========================================================================
    // Scalar Mutations
    // =========================================================================

    /// Sets the payment and refreshes `change` from the freshly stored
    /// value (never from a stale event-time copy).
    pub fn set_payment(&mut self, amount: Amount) {
        self.payment = amount;
        self.refresh_change();
    }

    fn check_index(&self, index: usize) -> EditorResult<()> {
        let len = self.product_sales.len();
        if index >= len {
            return Err(EditorError::LineOutOfRange { index, len });
        }
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
