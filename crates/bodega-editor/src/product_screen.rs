//! # Product Screen
//!
//! Controller for the product registration form. Unlike the sale form,
//! this one validates before submitting: a bad name or a garbage numeric
//! cell blocks the save locally, with no API call.

use tracing::{error, info, warn};

use bodega_api::ApiError;
use bodega_core::{Amount, ProductDraft, ValidationError};

use crate::ports::{Navigator, Route, StoreApi};

// =============================================================================
// Product Screen
// =============================================================================

/// The product registration form controller.
pub struct ProductScreen<S: StoreApi, N: Navigator> {
    draft: ProductDraft,
    api: S,
    nav: N,
    last_error: Option<ApiError>,
    last_validation: Option<ValidationError>,
}

impl<S: StoreApi, N: Navigator> ProductScreen<S, N> {
    /// Opens a blank registration form.
    pub fn new(api: S, nav: N) -> Self {
        ProductScreen {
            draft: ProductDraft::default(),
            api,
            nav,
            last_error: None,
            last_validation: None,
        }
    }

    // =========================================================================
    // Form Input
    // =========================================================================

    pub fn set_name(&mut self, text: &str) {
        self.draft.name = text.to_string();
    }

    pub fn set_sale_price_input(&mut self, text: &str) {
        self.draft.sale_price = Amount::parse(text);
    }

    pub fn set_buy_price_input(&mut self, text: &str) {
        self.draft.buy_price = Amount::parse(text);
    }

    pub fn set_quantity_input(&mut self, text: &str) {
        self.draft.quantity = Amount::parse(text);
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Validates and submits the draft. A validation failure never reaches
    /// the network; a remote failure keeps the draft for retry. Only a
    /// successful `POST /Product` exits to the product list.
    pub async fn save(&mut self) {
        if let Err(v) = self.draft.validate() {
            warn!(error = %v, "Product draft rejected");
            self.last_validation = Some(v);
            return;
        }
        self.last_validation = None;

        match self.api.create_product(&self.draft).await {
            Ok(product) => {
                info!(product_id = product.product_id, "Product registered");
                self.nav.replace(Route::Products);
            }
            Err(e) => {
                error!(error = %e, "Product save failed; draft kept for retry");
                self.last_error = Some(e);
            }
        }
    }

    /// Leaves for the product list without saving.
    pub fn cancel(&self) {
        self.nav.replace(Route::Products);
    }

    // =========================================================================
    // View State
    // =========================================================================

    pub fn draft(&self) -> &ProductDraft {
        &self.draft
    }

    /// The last swallowed remote failure, if any.
    pub fn last_error(&self) -> Option<&ApiError> {
        self.last_error.as_ref()
    }

    /// The validation failure blocking the last save attempt, if any.
    pub fn last_validation(&self) -> Option<&ValidationError> {
        self.last_validation.as_ref()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
