//! # API Error Types
//!
//! Error types for Store API operations.
//!
//! ## Error Taxonomy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       API Error Categories                              │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐ │
//! │  │  Configuration  │  │   Transport     │  │     Response            │ │
//! │  │                 │  │                 │  │                         │ │
//! │  │  InvalidConfig  │  │  Transport      │  │  Status (non-2xx)       │ │
//! │  │  InvalidUrl     │  │  (DNS, refused, │  │  Decode (bad JSON)      │ │
//! │  │  ConfigLoad/Save│  │   timeout, TLS) │  │                         │ │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────────────┘ │
//! │                                                                         │
//! │  The screens never crash over any of these: each failure is logged,    │
//! │  recorded for diagnostics, and the draft is left editable for retry.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Result type alias for Store API operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Store API error type.
///
/// ## Design Principles
/// - Each variant includes enough context for debugging
/// - Errors are categorized for different handling strategies
/// - All errors are `Send + Sync` for async compatibility
#[derive(Debug, Error)]
pub enum ApiError {
    // =========================================================================
    // Configuration Errors
    // =========================================================================
    /// Invalid API configuration.
    #[error("Invalid API configuration: {0}")]
    InvalidConfig(String),

    /// Invalid base URL.
    #[error("Invalid base URL: {0}")]
    InvalidUrl(String),

    /// Failed to load config file.
    #[error("Failed to load config: {0}")]
    ConfigLoadFailed(String),

    /// Failed to save config file.
    #[error("Failed to save config: {0}")]
    ConfigSaveFailed(String),

    // =========================================================================
    // Transport Errors
    // =========================================================================
    /// The request never produced a response (DNS, refused connection,
    /// timeout, TLS).
    #[error("Request failed: {0}")]
    Transport(String),

    // =========================================================================
    // Response Errors
    // =========================================================================
    /// The server answered with a non-2xx status.
    #[error("Store API returned {status} for {method} {path}")]
    Status {
        status: u16,
        method: &'static str,
        path: String,
    },

    /// The response body was not the expected JSON shape.
    #[error("Failed to decode response: {0}")]
    Decode(String),
}

// =============================================================================
// Error Conversions
// =============================================================================

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else if err.is_builder() {
            ApiError::InvalidConfig(err.to_string())
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}

impl From<std::io::Error> for ApiError {
    fn from(err: std::io::Error) -> Self {
        ApiError::ConfigLoadFailed(err.to_string())
    }
}

impl From<toml::de::Error> for ApiError {
    fn from(err: toml::de::Error) -> Self {
        ApiError::ConfigLoadFailed(err.to_string())
    }
}

impl From<toml::ser::Error> for ApiError {
    fn from(err: toml::ser::Error) -> Self {
        ApiError::ConfigSaveFailed(err.to_string())
    }
}

// =============================================================================
// Error Categorization
// =============================================================================

impl ApiError {
    /// Returns true if retrying the same request could plausibly succeed.
    ///
    /// ## Retryable
    /// - Transport failures (network blips)
    /// - 5xx server statuses
    ///
    /// ## Non-Retryable
    /// - Configuration errors
    /// - 4xx statuses (the request itself is wrong)
    /// - Decode failures (contract mismatch)
    pub fn is_retryable(&self) -> bool {
        match self {
            ApiError::Transport(_) => true,
            ApiError::Status { status, .. } => (500..=599).contains(status),
            _ => false,
        }
    }

    /// Returns true if this error indicates a configuration problem.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            ApiError::InvalidConfig(_)
                | ApiError::InvalidUrl(_)
                | ApiError::ConfigLoadFailed(_)
                | ApiError::ConfigSaveFailed(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_errors() {
        assert!(ApiError::Transport("connection refused".into()).is_retryable());
        assert!(ApiError::Status {
            status: 503,
            method: "GET",
            path: "/Product".into()
        }
        .is_retryable());

        assert!(!ApiError::Status {
            status: 404,
            method: "GET",
            path: "/Sale/9".into()
        }
        .is_retryable());
        assert!(!ApiError::InvalidUrl("ftp://nope".into()).is_retryable());
        assert!(!ApiError::Decode("missing field".into()).is_retryable());
    }

    #[test]
    fn test_error_display() {
        let err = ApiError::Status {
            status: 404,
            method: "GET",
            path: "/Sale/9".into(),
        };
        assert_eq!(err.to_string(), "Store API returned 404 for GET /Sale/9");
    }

    #[test]
    fn test_config_category() {
        assert!(ApiError::InvalidConfig("bad".into()).is_config_error());
        assert!(!ApiError::Transport("bad".into()).is_config_error());
    }
}
