//! # Sale Screen
//!
//! Controller for the sale form: one instance per visit, created from the
//! route, driving a [`SaleEditor`] and talking to the Store API through
//! the [`StoreApi`] port.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Sale Screen Lifecycle                            │
//! │                                                                         │
//! │  new(route id) ──► mount() ──► [user edits draft] ──► save() ──► Sales │
//! │                      │                                  │               │
//! │                      │  GET /Product (always)           │  POST /Sale   │
//! │                      │  GET /Sale/{id} (edit mode)      │  or PUT /Sale │
//! │                      ▼                                  ▼               │
//! │               fetch failed?                      save failed?           │
//! │               log + record, screen stays up      log + record,          │
//! │               with empty catalog / fresh draft   draft kept, NO exit    │
//! │                                                                         │
//! │  cancel() ──► Sales (no API call, draft discarded)                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! No remote failure ever crashes the screen or loses the operator's
//! typed-in draft.

use tracing::{error, info, warn};

use bodega_api::ApiError;
use bodega_core::{Amount, EditorResult, Mode, SaleDraft, SaleEditor, Visibility};

use crate::ports::{Navigator, Route, StoreApi};

// =============================================================================
// Sale Screen
// =============================================================================

/// The sale form controller.
pub struct SaleScreen<S: StoreApi, N: Navigator> {
    editor: SaleEditor,
    api: S,
    nav: N,
    last_error: Option<ApiError>,
}

impl<S: StoreApi, N: Navigator> SaleScreen<S, N> {
    /// Creates the screen for a route: `None` is the new-sale form,
    /// `Some(id)` edits the existing sale.
    pub fn new(api: S, nav: N, route_id: Option<i64>) -> Self {
        SaleScreen {
            editor: SaleEditor::new(route_id),
            api,
            nav,
            last_error: None,
        }
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Entry actions: fetch the catalog, and in edit mode the sale record.
    ///
    /// Failures are logged and recorded in [`SaleScreen::last_error`]; the
    /// screen carries on with an empty select / a fresh draft.
    pub async fn mount(&mut self) {
        match self.api.list_products().await {
            Ok(products) => self.editor.load_catalog(products),
            Err(e) => {
                warn!(error = %e, "Catalog fetch failed; product select stays empty");
                self.last_error = Some(e);
            }
        }

        if let Mode::Edit { sale_id } = self.editor.mode() {
            match self.api.get_sale(sale_id).await {
                Ok(sale) => self.editor.load_sale(sale),
                Err(e) => {
                    warn!(sale_id, error = %e, "Sale fetch failed; draft stays blank");
                    self.last_error = Some(e);
                }
            }
        }
    }

    /// Submits the draft: `POST /Sale` in create mode, `PUT /Sale/{id}`
    /// (addressed by the route id) in edit mode. On success the screen
    /// exits to the sales list; on failure the draft is kept for retry.
    pub async fn save(&mut self) {
        let result = match self.editor.mode() {
            Mode::Create => self.api.create_sale(self.editor.draft()).await,
            Mode::Edit { sale_id } => self.api.update_sale(sale_id, self.editor.draft()).await,
        };

        match result {
            Ok(saved) => {
                info!(sale_id = ?saved.sale_id, "Sale saved");
                self.nav.replace(Route::Sales);
            }
            Err(e) => {
                error!(error = %e, "Sale save failed; draft kept for retry");
                self.last_error = Some(e);
            }
        }
    }

    /// Leaves for the sales list without saving. The draft is discarded
    /// with no API call.
    pub fn cancel(&self) {
        self.nav.replace(Route::Sales);
    }

    // =========================================================================
    // Form Input
    // =========================================================================

    /// Appends a new empty line.
    pub fn add_line(&mut self) -> EditorResult<()> {
        self.editor.add_line()
    }

    /// Removes the line at `index`.
    pub fn remove_line(&mut self, index: usize) -> EditorResult<()> {
        self.editor.remove_line(index)
    }

    /// Applies a dropdown selection to a line. `None`, or an id the
    /// catalog does not know, clears the line back to "no product".
    pub fn select_product(&mut self, index: usize, product_id: Option<i64>) -> EditorResult<()> {
        let product = product_id
            .and_then(|id| self.editor.option_for(id))
            .map(|option| option.product.clone());
        self.editor.select_product(index, product.as_ref())
    }

    /// Applies raw quantity input text to a line. Garbage parses to an
    /// invalid cell rather than being rejected; the operator sees the
    /// poisoned totals and retypes.
    pub fn set_quantity_input(&mut self, index: usize, text: &str) -> EditorResult<()> {
        self.editor.set_quantity(index, Amount::parse(text))
    }

    /// Applies raw payment input text; change is rederived immediately.
    pub fn set_payment_input(&mut self, text: &str) {
        self.editor.set_payment(Amount::parse(text));
    }

    /// Toggles the loan flag.
    pub fn set_is_loan(&mut self, is_loan: bool) -> EditorResult<()> {
        self.editor.set_is_loan(is_loan)
    }

    /// Sets the apartment number (loans only).
    pub fn set_apartment_number(&mut self, text: &str) -> EditorResult<()> {
        self.editor.set_apartment_number(text)
    }

    // =========================================================================
    // View State
    // =========================================================================

    /// The underlying editor, for rendering catalog options and mode.
    pub fn editor(&self) -> &SaleEditor {
        &self.editor
    }

    /// The current draft.
    pub fn draft(&self) -> &SaleDraft {
        self.editor.draft()
    }

    /// Which controls are shown/unlocked right now.
    pub fn visibility(&self) -> Visibility {
        self.editor.visibility()
    }

    /// The last swallowed remote failure, if any (for a status banner).
    pub fn last_error(&self) -> Option<&ApiError> {
        self.last_error.as_ref()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{catalog_product, init_tracing, FakeStore, RecordingNav};

    use bodega_core::Amount;

    fn screen(
        store: &FakeStore,
        nav: &RecordingNav,
        route_id: Option<i64>,
    ) -> SaleScreen<FakeStore, RecordingNav> {
        SaleScreen::new(store.clone(), nav.clone(), route_id)
    }

    fn seeded_store() -> FakeStore {
        let store = FakeStore::default();
        store.state.borrow_mut().products = vec![
            catalog_product(1, "Milk 1L", 10, true),
            catalog_product(2, "Old stock", 5, false),
        ];
        store
    }

    #[tokio::test]
    async fn test_mount_loads_catalog() {
        init_tracing();
        let store = seeded_store();
        let nav = RecordingNav::default();
        let mut screen = screen(&store, &nav, None);

        screen.mount().await;

        assert_eq!(screen.editor().catalog().len(), 2);
        assert!(screen.last_error().is_none());
        // One untouched line waiting for input.
        assert_eq!(screen.draft().product_sales.len(), 1);
    }

    #[tokio::test]
    async fn test_mount_edit_mode_loads_sale() {
        init_tracing();
        let store = seeded_store();
        store.state.borrow_mut().sale = Some(
            serde_json::from_value(serde_json::json!({
                "saleId": 42,
                "total": 14,
                "isLoan": false,
                "apartmentNumber": "",
                "payment": 20,
                "change": 6,
                "productSales": [{ "productId": 1, "quantity": 2, "price": 7 }]
            }))
            .unwrap(),
        );
        let nav = RecordingNav::default();
        let mut screen = screen(&store, &nav, Some(42));

        screen.mount().await;

        // The server totals stand as fetched.
        assert_eq!(screen.draft().sale_id, Some(42));
        assert_eq!(screen.draft().total, Amount::from(14));
        assert_eq!(screen.draft().change, Amount::from(6));
    }

    #[tokio::test]
    async fn test_mount_swallows_catalog_failure() {
        init_tracing();
        let store = FakeStore::default();
        store.state.borrow_mut().fail_reads = true;
        let nav = RecordingNav::default();
        let mut screen = screen(&store, &nav, None);

        screen.mount().await;

        // Screen is up with an empty select; the failure is recorded.
        assert!(screen.editor().catalog().is_empty());
        assert!(screen.last_error().is_some());

        // The draft is still editable.
        screen.set_payment_input("10");
        assert_eq!(screen.draft().payment, Amount::from(10));
    }

    #[tokio::test]
    async fn test_mount_swallows_missing_sale() {
        init_tracing();
        let store = seeded_store(); // no sale seeded: GET /Sale/{id} is a 404
        let nav = RecordingNav::default();
        let mut screen = screen(&store, &nav, Some(99));

        screen.mount().await;

        assert!(screen.last_error().is_some());
        // Catalog still arrived; the draft stays fresh.
        assert_eq!(screen.editor().catalog().len(), 2);
        assert_eq!(screen.draft().sale_id, None);
    }

    #[tokio::test]
    async fn test_text_input_drives_totals() {
        init_tracing();
        let store = seeded_store();
        let nav = RecordingNav::default();
        let mut screen = screen(&store, &nav, None);
        screen.mount().await;

        screen.select_product(0, Some(1)).unwrap();
        screen.set_quantity_input(0, "3").unwrap();
        screen.set_payment_input("35");

        assert_eq!(screen.draft().total, Amount::from(30));
        assert_eq!(screen.draft().change, Amount::from(5));

        // Garbage quantity poisons the totals; retyping recovers them.
        screen.set_quantity_input(0, "3x").unwrap();
        assert_eq!(screen.draft().total, Amount::Invalid);
        assert_eq!(screen.draft().change, Amount::Invalid);

        screen.set_quantity_input(0, "2").unwrap();
        assert_eq!(screen.draft().total, Amount::from(20));
        assert_eq!(screen.draft().change, Amount::from(15));
    }

    #[tokio::test]
    async fn test_unknown_selection_clears_line() {
        init_tracing();
        let store = seeded_store();
        let nav = RecordingNav::default();
        let mut screen = screen(&store, &nav, None);
        screen.mount().await;

        screen.select_product(0, Some(1)).unwrap();
        assert_eq!(screen.draft().total, Amount::from(10));

        screen.select_product(0, None).unwrap();
        assert_eq!(screen.draft().product_sales[0].price, None);
        assert_eq!(screen.draft().total, Amount::ZERO);
    }

    #[tokio::test]
    async fn test_create_save_posts_and_exits() {
        init_tracing();
        let store = seeded_store();
        let nav = RecordingNav::default();
        let mut screen = screen(&store, &nav, None);
        screen.mount().await;

        screen.select_product(0, Some(1)).unwrap();
        screen.set_quantity_input(0, "2").unwrap();
        screen.set_payment_input("25");
        screen.save().await;

        let created = store.state.borrow().created_sales.clone();
        assert_eq!(created.len(), 1);
        // A new sale carries no id; the server assigns one.
        assert_eq!(created[0].sale_id, None);
        assert_eq!(created[0].total, Amount::from(20));

        assert_eq!(nav.routes.borrow().as_slice(), &[Route::Sales]);
        assert!(screen.last_error().is_none());
    }

    #[tokio::test]
    async fn test_edit_save_puts_to_route_id() {
        init_tracing();
        let store = seeded_store();
        store.state.borrow_mut().sale = Some(
            serde_json::from_value(serde_json::json!({
                "saleId": 42,
                "total": 14,
                "isLoan": true,
                "apartmentNumber": "3C",
                "payment": 0,
                "change": -14,
                "productSales": [{ "productId": 1, "quantity": 2, "price": 7 }]
            }))
            .unwrap(),
        );
        let nav = RecordingNav::default();
        let mut screen = screen(&store, &nav, Some(42));
        screen.mount().await;

        // Settle the loan and save.
        screen.set_payment_input("14");
        screen.save().await;

        let updated = store.state.borrow().updated_sales.clone();
        assert_eq!(updated.len(), 1);
        assert_eq!(updated[0].0, 42);
        assert_eq!(updated[0].1.payment, Amount::from(14));
        assert_eq!(updated[0].1.change, Amount::ZERO);
        assert_eq!(updated[0].1.total, Amount::from(14));

        assert_eq!(nav.routes.borrow().as_slice(), &[Route::Sales]);
    }

    #[tokio::test]
    async fn test_failed_save_keeps_draft_and_screen() {
        init_tracing();
        let store = seeded_store();
        store.state.borrow_mut().fail_writes = true;
        let nav = RecordingNav::default();
        let mut screen = screen(&store, &nav, None);
        screen.mount().await;

        screen.select_product(0, Some(1)).unwrap();
        screen.set_payment_input("15");
        let before = screen.draft().clone();

        screen.save().await;

        // No exit, draft intact, failure recorded.
        assert!(nav.routes.borrow().is_empty());
        assert_eq!(screen.draft(), &before);
        assert!(screen.last_error().is_some());

        // The network comes back; the same draft saves on retry.
        store.state.borrow_mut().fail_writes = false;
        screen.save().await;
        assert_eq!(store.state.borrow().created_sales.len(), 1);
        assert_eq!(nav.routes.borrow().as_slice(), &[Route::Sales]);
    }

    #[tokio::test]
    async fn test_cancel_exits_without_saving() {
        init_tracing();
        let store = seeded_store();
        let nav = RecordingNav::default();
        let mut screen = screen(&store, &nav, None);
        screen.mount().await;

        screen.set_payment_input("99");
        screen.cancel();

        assert_eq!(nav.routes.borrow().as_slice(), &[Route::Sales]);
        assert!(store.state.borrow().created_sales.is_empty());
    }

    #[tokio::test]
    async fn test_edit_mode_rejects_line_edits() {
        init_tracing();
        let store = seeded_store();
        store.state.borrow_mut().sale = Some(
            serde_json::from_value(serde_json::json!({
                "saleId": 7,
                "total": 14,
                "isLoan": false,
                "apartmentNumber": "",
                "payment": 20,
                "change": 6,
                "productSales": [{ "productId": 1, "quantity": 2, "price": 7 }]
            }))
            .unwrap(),
        );
        let nav = RecordingNav::default();
        let mut screen = screen(&store, &nav, Some(7));
        screen.mount().await;

        assert!(screen.add_line().is_err());
        assert!(screen.select_product(0, Some(1)).is_err());
        assert!(screen.set_quantity_input(0, "9").is_err());
        assert!(screen.set_is_loan(true).is_err());
        assert_eq!(screen.draft().total, Amount::from(14));
    }
}
