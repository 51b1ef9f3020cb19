//! # bodega-core: Pure Business Logic for Bodega POS
//!
//! This crate is the **heart** of the sale and product entry screens. It
//! contains the draft state, the derived-totals engine, and the mode rules
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Bodega POS Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     UI Shell (browser form)                     │   │
//! │  │    Product select ──► Quantity input ──► Payment ──► Save      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ events                                 │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  bodega-editor (screens)                        │   │
//! │  │    SaleScreen, ProductScreen, Navigator port                   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ bodega-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │  amount   │  │   draft   │  │  editor   │  │   │
//! │  │   │  Product  │  │  Amount   │  │ SaleDraft │  │ SaleEditor│  │   │
//! │  │   │  Option   │  │  parsing  │  │ SaleLine  │  │ Visibility│  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS                         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                   bodega-api (Store API client)                 │   │
//! │  │          GET /Product, GET/POST/PUT /Sale, POST /Product        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, ProductOption, ProductDraft)
//! - [`amount`] - Not-a-number-tolerant integer cell for parsed form input
//! - [`draft`] - Sale draft, line items, derived-totals reducer
//! - [`editor`] - Sale editor state machine (mode rules, visibility)
//! - [`error`] - Domain error types
//! - [`validation`] - Product form validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Network, file system access is FORBIDDEN here
//! 3. **Tolerant Input**: garbage typed into a numeric field never panics;
//!    it flows through totals as an invalid cell
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use bodega_core::{Amount, SaleEditor};
//!
//! let mut editor = SaleEditor::new(None); // no route id = create mode
//! editor.set_payment(Amount::from(40));
//!
//! // change = payment - total, recomputed immediately
//! assert_eq!(editor.draft().change, Amount::from(40));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod amount;
pub mod draft;
pub mod editor;
pub mod error;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use bodega_core::Amount` instead of
// `use bodega_core::amount::Amount`

pub use amount::Amount;
pub use draft::{SaleDraft, SaleLine};
pub use editor::{Mode, SaleEditor, Visibility};
pub use error::{EditorError, EditorResult, ValidationError, ValidationResult};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Product id used for a line that has no product chosen yet.
///
/// ## Why a constant?
/// The Store API uses positive integer ids; the form's empty select is
/// represented as id 0 on the wire, so a freshly added line is
/// serializable without an Option in the line payload.
pub const UNSET_PRODUCT_ID: i64 = 0;

/// Quantity a line starts with, and the quantity a line snaps back to
/// whenever a different product is selected for it.
pub const DEFAULT_LINE_QUANTITY: i64 = 1;
