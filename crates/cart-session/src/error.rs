//! # API Error Type
//!
//! Unified error type for the command layer.
//!
//! ## Error Handling Strategy
//! Commands return `Result<CartView, ApiError>`. The `ApiError` is what the
//! UI receives when a command fails: a machine-readable `code` for
//! programmatic handling plus a human-readable `message` for display.
//!
//! ```json
//! {
//!   "code": "INVALID_QUANTITY",
//!   "message": "Invalid quantity: 0. Quantity must be positive."
//! }
//! ```
//!
//! Core errors map 1:1 onto codes so the UI can highlight the offending
//! form field without parsing message text.

use serde::Serialize;

use cart_core::CartError;

use crate::state::SnapshotError;

/// API error returned from command functions.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Requested item is not in the cart
    NotFound,

    /// Input failed a surface check (missing form field)
    ValidationError,

    /// Negative unit price
    InvalidPrice,

    /// Non-positive quantity
    InvalidQuantity,

    /// Discount parameters out of range
    InvalidDiscount,

    /// Unexpected failure (snapshot encoding, etc.)
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(
            ErrorCode::NotFound,
            format!("{} not found: {}", resource, id),
        )
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts core errors to API errors.
impl From<CartError> for ApiError {
    fn from(err: CartError) -> Self {
        let code = match err {
            CartError::InvalidPrice { .. } => ErrorCode::InvalidPrice,
            CartError::InvalidQuantity { .. } => ErrorCode::InvalidQuantity,
            CartError::InvalidDiscount { .. } => ErrorCode::InvalidDiscount,
        };

        ApiError::new(code, err.to_string())
    }
}

/// Converts snapshot errors to API errors.
impl From<SnapshotError> for ApiError {
    fn from(err: SnapshotError) -> Self {
        // Log the underlying serde error; the UI gets a generic message
        tracing::error!("Session snapshot failed: {}", err);
        ApiError::internal("Session snapshot failed")
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
