//! # Error Types
//!
//! Domain-specific error types for cart-core.
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (the rejected value)
//! 3. Errors are enum variants, never bare strings
//! 4. Each error variant maps to a user-facing message
//!
//! All of these are construction-time rejections: a failed call never
//! mutates existing state, so callers can surface the message and retry
//! with corrected input.

use thiserror::Error;

use crate::money::Money;

// =============================================================================
// Cart Error
// =============================================================================

/// Cart domain errors.
///
/// Raised synchronously at the point of invalid construction or mutation.
/// `Cart::remove_item` on a missing key is deliberately NOT an error; it
/// returns a boolean no-op signal instead.
#[derive(Debug, Clone, Error)]
pub enum CartError {
    /// Unit price is negative.
    #[error("Invalid price: {price}. Price must be non-negative.")]
    InvalidPrice { price: Money },

    /// Quantity is zero or negative.
    ///
    /// Raised both at item construction and at quantity update.
    #[error("Invalid quantity: {quantity}. Quantity must be positive.")]
    InvalidQuantity { quantity: i64 },

    /// Discount parameters are out of range: a percentage outside 0..=100,
    /// or non-positive buy/free quantities.
    #[error("Invalid discount: {reason}")]
    InvalidDiscount { reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CartError.
pub type CartResult<T> = Result<T, CartError>;

// =============================================================================
// Unit Tests
// =============================================================================
