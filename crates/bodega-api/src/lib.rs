//! # Bodega API
//!
//! HTTP client for the Store API used by the Bodega POS screens.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          bodega-api                                     │
//! │                                                                         │
//! │  ┌──────────────┐      ┌──────────────┐      ┌───────────────────────┐ │
//! │  │  ApiConfig   │─────►│  StoreClient │─────►│  Remote Store API     │ │
//! │  │  (config.rs) │      │  (client.rs) │ HTTP │  /Product, /Sale      │ │
//! │  └──────────────┘      └──────────────┘      └───────────────────────┘ │
//! │         │                     │                                        │
//! │         └──────────┬──────────┘                                        │
//! │                    ▼                                                   │
//! │            ┌──────────────┐                                            │
//! │            │   ApiError   │  config / transport / status / decode      │
//! │            │  (error.rs)  │                                            │
//! │            └──────────────┘                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Wire types ([`bodega_core::Product`], [`bodega_core::SaleDraft`]) live in
//! `bodega-core`; this crate only moves them over HTTP.

pub mod client;
pub mod config;
pub mod error;

pub use client::StoreClient;
pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
