//! # Store API Client
//!
//! The reqwest-backed client for the remote Store API.
//!
//! ## Call Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      StoreClient Endpoints                              │
//! │                                                                         │
//! │  Screen action            Method             Store API                  │
//! │  ─────────────            ──────             ─────────                  │
//! │  mount (always) ────────► list_products() ─► GET  /Product             │
//! │  mount (edit mode) ─────► get_sale(id) ────► GET  /Sale/{id}           │
//! │  save (create mode) ────► create_sale() ───► POST /Sale                │
//! │  save (edit mode) ──────► update_sale(id) ─► PUT  /Sale/{id}           │
//! │  product save ──────────► create_product()─► POST /Product             │
//! │                                                                         │
//! │  Each call is fire-and-forget from the screen's perspective: no        │
//! │  retry here, no cancellation, no request deduplication.                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use bodega_core::{Product, ProductDraft, SaleDraft};

use crate::config::ApiConfig;
use crate::error::{ApiError, ApiResult};

// =============================================================================
// Store Client
// =============================================================================

/// HTTP client for the Store API.
///
/// Cheap to clone: the inner `reqwest::Client` is an `Arc` around a
/// connection pool.
#[derive(Debug, Clone)]
pub struct StoreClient {
    http: reqwest::Client,
    base_url: String,
}

impl StoreClient {
    /// Builds a client from a validated configuration.
    pub fn new(config: &ApiConfig) -> ApiResult<Self> {
        config.validate()?;

        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(StoreClient {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    // =========================================================================
    // Catalog
    // =========================================================================

    /// `GET /Product` - the full catalog, active and inactive.
    pub async fn list_products(&self) -> ApiResult<Vec<Product>> {
        let path = "/Product".to_string();
        debug!(path = %path, "Fetching product catalog");
        let response = self.http.get(self.url(&path)).send().await?;
        Self::read_json("GET", path, response).await
    }

    /// `POST /Product` - register a new product.
    pub async fn create_product(&self, draft: &ProductDraft) -> ApiResult<Product> {
        let path = "/Product".to_string();
        debug!(path = %path, name = %draft.name, "Creating product");
        let response = self.post_json(&path, draft).await?;
        Self::read_json("POST", path, response).await
    }

    // =========================================================================
    // Sales
    // =========================================================================

    /// `GET /Sale/{id}` - one sale record for the edit screen.
    pub async fn get_sale(&self, id: i64) -> ApiResult<SaleDraft> {
        let path = format!("/Sale/{}", id);
        debug!(path = %path, "Fetching sale");
        let response = self.http.get(self.url(&path)).send().await?;
        Self::read_json("GET", path, response).await
    }

    /// `POST /Sale` - create a sale. The draft carries no `saleId`, so the
    /// payload has no such key.
    pub async fn create_sale(&self, draft: &SaleDraft) -> ApiResult<SaleDraft> {
        let path = "/Sale".to_string();
        debug!(path = %path, lines = draft.product_sales.len(), "Creating sale");
        let response = self.post_json(&path, draft).await?;
        Self::read_json("POST", path, response).await
    }

    /// `PUT /Sale/{id}` - update the sale addressed by the route id with
    /// the full current draft.
    pub async fn update_sale(&self, id: i64, draft: &SaleDraft) -> ApiResult<SaleDraft> {
        let path = format!("/Sale/{}", id);
        debug!(path = %path, "Updating sale");
        let response = self
            .http
            .put(self.url(&path))
            .json(draft)
            .send()
            .await?;
        Self::read_json("PUT", path, response).await
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn post_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<reqwest::Response> {
        Ok(self.http.post(self.url(path)).json(body).send().await?)
    }

    /// Maps a non-2xx status to [`ApiError::Status`], otherwise decodes
    /// the JSON body.
    async fn read_json<T: DeserializeOwned>(
        method: &'static str,
        path: String,
        response: reqwest::Response,
    ) -> ApiResult<T> {
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                method,
                path,
            });
        }
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

// =============================================================================
// Unit Tests (against a local axum stand-in for the Store API)
// =============================================================================
