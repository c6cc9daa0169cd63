//! # cart-session: Session State and Command Layer
//!
//! The thin layer between the web UI and `cart-core`:
//!
//! - [`state`] - per-session cart state ([`CartState`]) and opaque JSON
//!   snapshots for session persistence
//! - [`commands`] - one function per form action, returning view models
//! - [`error`] - the serializable [`ApiError`] envelope the UI consumes
//!
//! The HTTP routing and HTML rendering that drive this layer live outside
//! this repository; everything here is plain synchronous Rust.
//!
//! ## Example Usage
//!
//! ```rust
//! use cart_session::{add_to_cart, apply_discount, AddItemRequest, CartState, DiscountRequest};
//!
//! let state = CartState::new();
//!
//! add_to_cart(&state, AddItemRequest {
//!     product_id: "apple".to_string(),
//!     unit_price_cents: 1000,
//!     quantity: 3,
//! }).unwrap();
//!
//! let view = apply_discount(&state, DiscountRequest::BuyXGetYFree {
//!     buy_quantity: 2,
//!     free_quantity: 1,
//! }).unwrap();
//!
//! assert_eq!(view.totals.total_cents, 2000);
//!
//! // Persist between requests, restore on the next one
//! let snapshot = state.snapshot().unwrap();
//! let next_request_state = CartState::new();
//! next_request_state.restore(&snapshot).unwrap();
//! ```

use tracing_subscriber::EnvFilter;

// =============================================================================
// Module Declarations
// =============================================================================

pub mod commands;
pub mod error;
pub mod state;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use commands::{
    add_to_cart, apply_discount, clear_cart, get_cart, remove_from_cart, update_cart_item,
    AddItemRequest, CartItemView, CartTotals, CartView, DiscountRequest,
};
pub use error::{ApiError, ErrorCode};
pub use state::{CartSnapshot, CartState, SnapshotError};

/// Initializes the tracing subscriber for structured logging.
///
/// Call once at process startup, before the first command runs.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - show debug messages
/// - `RUST_LOG=cart=trace` - trace for cart crates only
/// - Default: INFO level, DEBUG for cart crates
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,cart=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
