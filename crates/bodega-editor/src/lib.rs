//! # Bodega Editor
//!
//! The screen controllers of the Bodega POS front end: sale entry/edit
//! and product registration.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         bodega-editor                                   │
//! │                                                                         │
//! │   ┌──────────────┐        ┌───────────────┐                             │
//! │   │  SaleScreen  │        │ ProductScreen │      screen controllers     │
//! │   └──────┬───────┘        └───────┬───────┘                             │
//! │          │    both drive the two ports                                  │
//! │          ▼                        ▼                                     │
//! │   ┌──────────────┐        ┌───────────────┐                             │
//! │   │   StoreApi   │        │   Navigator   │      seams (ports.rs)       │
//! │   └──────┬───────┘        └───────┬───────┘                             │
//! │          │ prod: StoreClient      │ prod: the shell's router            │
//! │          │ test: FakeStore        │ test: RecordingNav                  │
//! │          ▼                        ▼                                     │
//! │     bodega-api                 browser shell                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The pure draft/totals logic lives in `bodega-core`; the screens here
//! add lifecycle, remote I/O, and the swallow-and-log failure policy.

pub mod ports;
pub mod product_screen;
pub mod sale_screen;

pub use ports::{Navigator, Route, StoreApi};
pub use product_screen::ProductScreen;
pub use sale_screen::SaleScreen;

// =============================================================================
// Test Support
// =============================================================================
