//! # Screen Ports
//!
//! The two seams a screen needs from its host: the Store API and the
//! router. Both are traits so the screens can be driven in tests by
//! in-memory fakes, and in the app by [`StoreClient`] plus whatever
//! router the shell uses.

use bodega_api::{ApiResult, StoreClient};
use bodega_core::{Product, ProductDraft, SaleDraft};

// =============================================================================
// Navigation
// =============================================================================

/// Destinations a screen can leave to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// The sales list.
    Sales,
    /// The product list.
    Products,
}

/// Router seam. One operation is enough: every exit replaces the current
/// history entry, so Back never returns to a submitted form.
pub trait Navigator {
    fn replace(&self, route: Route);
}

// =============================================================================
// Store API
// =============================================================================

/// Remote Store API seam, mirroring [`StoreClient`] call-for-call.
#[allow(async_fn_in_trait)]
pub trait StoreApi {
    async fn list_products(&self) -> ApiResult<Vec<Product>>;

    async fn get_sale(&self, id: i64) -> ApiResult<SaleDraft>;

    async fn create_sale(&self, draft: &SaleDraft) -> ApiResult<SaleDraft>;

    async fn update_sale(&self, id: i64, draft: &SaleDraft) -> ApiResult<SaleDraft>;

    async fn create_product(&self, draft: &ProductDraft) -> ApiResult<Product>;
}

impl StoreApi for StoreClient {
    async fn list_products(&self) -> ApiResult<Vec<Product>> {
        StoreClient::list_products(self).await
    }

    async fn get_sale(&self, id: i64) -> ApiResult<SaleDraft> {
        StoreClient::get_sale(self, id).await
    }

    async fn create_sale(&self, draft: &SaleDraft) -> ApiResult<SaleDraft> {
        StoreClient::create_sale(self, draft).await
    }

    async fn update_sale(&self, id: i64, draft: &SaleDraft) -> ApiResult<SaleDraft> {
        StoreClient::update_sale(self, id, draft).await
    }

    async fn create_product(&self, draft: &ProductDraft) -> ApiResult<Product> {
        StoreClient::create_product(self, draft).await
    }
}
