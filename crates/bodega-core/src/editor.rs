//! # Sale Editor State Machine
//!
//! Owns the sale draft and the product catalog for one screen visit, and
//! enforces the create-vs-edit mode rules on every mutation.
//!
//! ## States & Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Sale Editor State Machine                            │
//! │                                                                         │
//! │  Route id absent ──► Mode::Create          Route id present ──► Edit   │
//! │  (mode is fixed for the lifetime of the screen)                         │
//! │                                                                         │
//! │  Operation            │ Create │ Edit  │                                │
//! │  ─────────────────────┼────────┼───────┤                                │
//! │  add_line             │   ✓    │  ✗    │                                │
//! │  remove_line          │   ✓    │  ✗    │                                │
//! │  select_product       │   ✓    │  ✗    │                                │
//! │  set_quantity         │   ✓    │  ✗    │                                │
//! │  set_is_loan          │   ✓    │  ✗    │                                │
//! │  set_apartment_number │ ✓ when loan │ ✗ │                               │
//! │  set_payment          │   ✓    │  ✓    │  (loan settlement)             │
//! │                                                                         │
//! │  A rejected operation returns EditorError and leaves the draft          │
//! │  byte-for-byte untouched.                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Network entry actions (catalog fetch, sale fetch) and save/cancel live
//! in `bodega-editor`; this type only receives their results.

use serde::{Deserialize, Serialize};

use crate::amount::Amount;
use crate::draft::SaleDraft;
use crate::error::{EditorError, EditorResult};
use crate::types::{Product, ProductOption};

// =============================================================================
// Mode
// =============================================================================

/// Screen mode, determined once from the route parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Registering a new sale; no id exists yet.
    Create,
    /// Modifying the existing sale addressed by the route id.
    Edit { sale_id: i64 },
}

impl Mode {
    /// Builds the mode from the optional route id.
    pub fn from_route(id: Option<i64>) -> Self {
        match id {
            Some(sale_id) => Mode::Edit { sale_id },
            None => Mode::Create,
        }
    }

    /// True when an existing sale is being modified.
    #[inline]
    pub const fn is_edit(&self) -> bool {
        matches!(self, Mode::Edit { .. })
    }
}

// =============================================================================
// Visibility
// =============================================================================

/// Which form controls the current (mode, loan flag) combination shows
/// and unlocks. Derived on demand; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Visibility {
    /// Sale id field: only meaningful (and shown, read-only) in edit mode.
    pub sale_id: bool,

    /// Payment and change inputs. Hidden for an in-progress loan, but
    /// always shown in edit mode so a loan's settlement can be recorded.
    pub payment_and_change: bool,

    /// Apartment number input: loans only.
    pub apartment_number: bool,

    /// Whether line items may be added/removed/modified.
    pub lines_editable: bool,

    /// Whether the loan flag (and apartment number) may be changed.
    pub loan_editable: bool,
}

// =============================================================================
// Sale Editor
// =============================================================================

/// The sale editor: one instance per screen visit.
#[derive(Debug, Clone)]
pub struct SaleEditor {
    mode: Mode,
    catalog: Vec<ProductOption>,
    draft: SaleDraft,
}

impl SaleEditor {
    /// Creates the editor for the given route id: `None` enters create
    /// mode with a fresh draft, `Some(id)` enters edit mode (the draft is
    /// replaced once the sale arrives via [`SaleEditor::load_sale`]).
    pub fn new(route_id: Option<i64>) -> Self {
        SaleEditor {
            mode: Mode::from_route(route_id),
            catalog: Vec::new(),
            draft: SaleDraft::new(),
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[inline]
    pub fn is_edit(&self) -> bool {
        self.mode.is_edit()
    }

    /// The select options derived from the last catalog load.
    pub fn catalog(&self) -> &[ProductOption] {
        &self.catalog
    }

    /// The current draft (read-only; mutate through the operations).
    pub fn draft(&self) -> &SaleDraft {
        &self.draft
    }

    /// Looks up the option currently selected on a line, if any.
    pub fn option_for(&self, product_id: i64) -> Option<&ProductOption> {
        self.catalog.iter().find(|o| o.value == product_id)
    }

    // =========================================================================
    // Load Results (entry actions land here)
    // =========================================================================

    /// Replaces the catalog with freshly fetched products, recomputing
    /// the select options (label=name, value=id, disabled=!active).
    pub fn load_catalog(&mut self, products: Vec<Product>) {
        self.catalog = products.into_iter().map(ProductOption::from).collect();
    }

    /// Replaces the draft wholesale with a fetched sale record.
    ///
    /// No recomputation happens here: the server-provided total and
    /// change stand as-is (and in edit mode no line edit can disturb
    /// them).
    pub fn load_sale(&mut self, sale: SaleDraft) {
        self.draft = sale;
    }

    // =========================================================================
    // Line Operations (create mode only)
    // =========================================================================

    /// Appends a new empty line.
    pub fn add_line(&mut self) -> EditorResult<()> {
        self.editable("add_line")?;
        self.draft.add_line();
        Ok(())
    }

    /// Removes the line at `index`.
    pub fn remove_line(&mut self, index: usize) -> EditorResult<()> {
        self.editable("remove_line")?;
        self.draft.remove_line(index)
    }

    /// Applies a product selection (or a cleared select) to a line.
    pub fn select_product(&mut self, index: usize, selection: Option<&Product>) -> EditorResult<()> {
        self.editable("select_product")?;
        self.draft.select_product(index, selection)
    }

    /// Sets the quantity cell of a line.
    pub fn set_quantity(&mut self, index: usize, quantity: Amount) -> EditorResult<()> {
        self.editable("set_quantity")?;
        self.draft.set_quantity(index, quantity)
    }

    // =========================================================================
    // Scalar Operations
    // =========================================================================

    /// Toggles the loan flag.
    pub fn set_is_loan(&mut self, is_loan: bool) -> EditorResult<()> {
        self.editable("set_is_loan")?;
        self.draft.is_loan = is_loan;
        Ok(())
    }

    /// Sets the payment; allowed in both modes (a loan's settlement is
    /// recorded through the edit screen).
    pub fn set_payment(&mut self, amount: Amount) {
        self.draft.set_payment(amount);
    }

    /// Sets the apartment number; loans only, create mode only.
    pub fn set_apartment_number(&mut self, text: impl Into<String>) -> EditorResult<()> {
        self.editable("set_apartment_number")?;
        if !self.draft.is_loan {
            return Err(EditorError::NotALoan);
        }
        self.draft.apartment_number = text.into();
        Ok(())
    }

    // =========================================================================
    // Derived View State
    // =========================================================================

    /// Computes which controls are shown/unlocked right now.
    pub fn visibility(&self) -> Visibility {
        let edit = self.is_edit();
        Visibility {
            sale_id: edit,
            payment_and_change: !self.draft.is_loan || edit,
            apartment_number: self.draft.is_loan,
            lines_editable: !edit,
            loan_editable: !edit,
        }
    }

    fn editable(&self, operation: &'static str) -> EditorResult<()> {
        if self.is_edit() {
            return Err(EditorError::ReadOnly { operation });
        }
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: i64, sale_price: i64, active: bool) -> Product {
        Product {
            product_id: id,
            name: format!("Product {}", id),
            sale_price,
            buy_price: sale_price - 1,
            quantity: 10,
            is_active: active,
        }
    }

    fn loaded_sale() -> SaleDraft {
        serde_json::from_value(serde_json::json!({
            "saleId": 42,
            "total": 14,
            "isLoan": false,
            "apartmentNumber": "",
            "payment": 20,
            "change": 6,
            "productSales": [{ "productId": 1, "quantity": 2, "price": 7 }]
        }))
        .unwrap()
    }

    #[test]
    fn test_mode_from_route() {
        assert_eq!(Mode::from_route(None), Mode::Create);
        assert_eq!(Mode::from_route(Some(9)), Mode::Edit { sale_id: 9 });
        assert!(Mode::Edit { sale_id: 9 }.is_edit());
        assert!(!Mode::Create.is_edit());
    }

    #[test]
    fn test_catalog_load_builds_options() {
        let mut editor = SaleEditor::new(None);
        editor.load_catalog(vec![product(1, 10, true), product(2, 5, false)]);

        assert_eq!(editor.catalog().len(), 2);
        assert!(!editor.catalog()[0].is_disabled);
        assert!(editor.catalog()[1].is_disabled);
        assert_eq!(editor.option_for(2).unwrap().label, "Product 2");
        assert!(editor.option_for(99).is_none());
    }

    #[test]
    fn test_create_mode_mutations_flow_through() {
        let mut editor = SaleEditor::new(None);
        let p = product(5, 12, true);

        editor.select_product(0, Some(&p)).unwrap();
        editor.set_quantity(0, Amount::from(3)).unwrap();
        editor.set_payment(Amount::from(40));

        assert_eq!(editor.draft().total, Amount::from(36));
        assert_eq!(editor.draft().change, Amount::from(4));
    }

    /// In edit mode the line/loan operations do nothing.
    #[test]
    fn test_edit_mode_freezes_lines_and_loan() {
        let mut editor = SaleEditor::new(Some(42));
        editor.load_sale(loaded_sale());
        let before = editor.draft().clone();

        assert!(editor.add_line().is_err());
        assert!(editor.remove_line(0).is_err());
        assert!(editor
            .select_product(0, Some(&product(9, 99, true)))
            .is_err());
        assert!(editor.set_quantity(0, Amount::from(9)).is_err());
        assert!(editor.set_is_loan(true).is_err());
        assert!(editor.set_apartment_number("12A").is_err());

        assert_eq!(editor.draft(), &before);
    }

    /// The server total stands; only a payment edit moves the derived
    /// change.
    #[test]
    fn test_edit_mode_keeps_server_total() {
        let mut editor = SaleEditor::new(Some(42));
        editor.load_sale(loaded_sale());

        assert_eq!(editor.draft().total, Amount::from(14));
        assert_eq!(editor.draft().change, Amount::from(6));

        editor.set_payment(Amount::from(15));
        assert_eq!(editor.draft().total, Amount::from(14));
        assert_eq!(editor.draft().change, Amount::from(1));
    }

    #[test]
    fn test_apartment_number_needs_loan() {
        let mut editor = SaleEditor::new(None);
        assert_eq!(
            editor.set_apartment_number("3C"),
            Err(EditorError::NotALoan)
        );

        editor.set_is_loan(true).unwrap();
        editor.set_apartment_number("3C").unwrap();
        assert_eq!(editor.draft().apartment_number, "3C");
    }

    /// Full visibility table across mode and loan flag.
    #[test]
    fn test_visibility_table() {
        // isLoan=false, create
        let mut editor = SaleEditor::new(None);
        let v = editor.visibility();
        assert!(v.payment_and_change);
        assert!(!v.apartment_number);
        assert!(!v.sale_id);
        assert!(v.lines_editable);

        // isLoan=true, create
        editor.set_is_loan(true).unwrap();
        let v = editor.visibility();
        assert!(!v.payment_and_change);
        assert!(v.apartment_number);

        // toggling back reverses it
        editor.set_is_loan(false).unwrap();
        assert!(editor.visibility().payment_and_change);

        // isLoan=true, edit: payment shown for loan settlement
        let mut editor = SaleEditor::new(Some(7));
        let mut sale = loaded_sale();
        sale.is_loan = true;
        editor.load_sale(sale);
        let v = editor.visibility();
        assert!(v.payment_and_change);
        assert!(v.apartment_number);
        assert!(v.sale_id);
        assert!(!v.lines_editable);
        assert!(!v.loan_editable);
    }

    /// The total stays the sum of line totals across arbitrary op
    /// sequences.
    #[test]
    fn test_total_invariant_over_operation_sequence() {
        let mut editor = SaleEditor::new(None);
        let a = product(1, 10, true);
        let b = product(2, 5, true);
        let c = product(3, 8, true);

        editor.add_line().unwrap();
        editor.add_line().unwrap();
        editor.select_product(0, Some(&a)).unwrap();
        editor.select_product(1, Some(&b)).unwrap();
        editor.select_product(2, Some(&c)).unwrap();
        editor.set_quantity(1, Amount::from(4)).unwrap();
        editor.remove_line(0).unwrap();
        editor.set_quantity(1, Amount::from(2)).unwrap();

        let expected = editor
            .draft()
            .product_sales
            .iter()
            .fold(Amount::ZERO, |s, l| s + l.line_total());
        assert_eq!(editor.draft().total, expected);
        assert_eq!(editor.draft().total, Amount::from(36)); // 5*4 + 8*2
        assert_eq!(
            editor.draft().change,
            editor.draft().payment - editor.draft().total
        );
    }
}
