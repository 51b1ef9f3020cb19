//! # Error Types
//!
//! Domain-specific error types for bodega-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  bodega-core errors (this file)                                        │
//! │  ├── EditorError      - Rejected draft mutations (mode rules, bounds)  │
//! │  └── ValidationError  - Product form validation failures               │
//! │                                                                         │
//! │  bodega-api errors (separate crate)                                    │
//! │  └── ApiError         - Transport / status / decode failures           │
//! │                                                                         │
//! │  Flow: EditorError stops a mutation, draft untouched                   │
//! │        ValidationError stops a save before any request is issued       │
//! │        ApiError is recorded on the screen, draft kept for retry        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field, index, etc.)
//! 3. Errors are enum variants, never String
//! 4. A rejected operation leaves the draft exactly as it was

use thiserror::Error;

// =============================================================================
// Editor Error
// =============================================================================

/// Rejected sale-editor operations.
///
/// These are not fatal: the screen surfaces should have disabled the
/// offending control, so hitting one of these means the draft is simply
/// left as-is.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EditorError {
    /// The operation only exists in create mode.
    ///
    /// ## When This Occurs
    /// In edit mode the line items and the loan fields are frozen; only
    /// payment (and the derived change) stay live.
    #[error("{operation} is not available while editing an existing sale")]
    ReadOnly { operation: &'static str },

    /// A line operation addressed a row that does not exist.
    #[error("line index {index} out of range (draft has {len} lines)")]
    LineOutOfRange { index: usize, len: usize },

    /// The apartment number field is only shown for loan sales.
    #[error("apartment number is only editable for loan sales")]
    NotALoan,
}

// =============================================================================
// Validation Error
// =============================================================================

/// Product registration input errors.
///
/// Used for early validation before the create request is issued.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: &'static str },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },

    /// A numeric field holds unparseable text.
    #[error("{field} is not a number")]
    NotANumber { field: &'static str },

    /// A numeric field holds a negative value.
    #[error("{field} must not be negative")]
    Negative { field: &'static str },
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Convenience type alias for Results with EditorError.
pub type EditorResult<T> = Result<T, EditorError>;

/// Convenience type alias for Results with ValidationError.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================
