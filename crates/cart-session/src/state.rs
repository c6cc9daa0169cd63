//! # Cart State
//!
//! Manages one session's shopping cart state.
//!
//! ## Thread Safety
//! The cart is wrapped in `Arc<Mutex<T>>` because:
//! 1. Multiple commands may access/modify the cart
//! 2. Only one command should modify the cart at a time
//! 3. The embedding environment may dispatch requests from worker threads
//!
//! Each session still owns exactly one cart; the mutex serializes access,
//! it does not merge carts across sessions.
//!
//! ## Session Persistence
//! Between requests the embedding environment stores the cart as an opaque
//! JSON snapshot. Round-tripping a snapshot preserves items (ids, prices,
//! quantities, display order) and the active discount strategy exactly.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use cart_core::Cart;

// =============================================================================
// Snapshot
// =============================================================================

/// A serialized-cart envelope stored in the session.
///
/// The payload is the full `Cart`; `saved_at` records when the snapshot was
/// taken so stale sessions can be aged out by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartSnapshot {
    /// When the snapshot was taken
    pub saved_at: DateTime<Utc>,

    /// The complete cart state
    pub cart: Cart,
}

/// Errors from snapshot encoding/decoding.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// Cart state could not be serialized.
    #[error("Snapshot serialization failed: {0}")]
    Serialize(#[source] serde_json::Error),

    /// Stored snapshot could not be parsed back into a cart.
    #[error("Snapshot deserialization failed: {0}")]
    Deserialize(#[source] serde_json::Error),
}

// =============================================================================
// Cart State
// =============================================================================

/// Session-managed cart state.
///
/// ## Thread Safety
/// Uses `Arc<Mutex<Cart>>`:
/// - `Arc`: allows shared ownership across threads
/// - `Mutex`: ensures only one thread modifies the cart at a time
///
/// ## Why Not RwLock?
/// Cart operations are quick, and most operations modify state. A RwLock
/// would add complexity with minimal benefit.
#[derive(Debug, Clone)]
pub struct CartState {
    cart: Arc<Mutex<Cart>>,
}

impl CartState {
    /// Creates a new empty cart state.
    pub fn new() -> Self {
        CartState {
            cart: Arc::new(Mutex::new(Cart::new())),
        }
    }

    /// Executes a function with read access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let totals = cart_state.with_cart(|cart| CartTotals::from(cart));
    /// ```
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        let cart = self.cart.lock().expect("Cart mutex poisoned");
        f(&cart)
    }

    /// Executes a function with write access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// cart_state.with_cart_mut(|cart| cart.add_item(item));
    /// ```
    pub fn with_cart_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Cart) -> R,
    {
        let mut cart = self.cart.lock().expect("Cart mutex poisoned");
        f(&mut cart)
    }

    /// Serializes the current cart into an opaque session snapshot.
    pub fn snapshot(&self) -> Result<String, SnapshotError> {
        let snapshot = self.with_cart(|cart| CartSnapshot {
            saved_at: Utc::now(),
            cart: cart.clone(),
        });

        serde_json::to_string(&snapshot).map_err(SnapshotError::Serialize)
    }

    /// Replaces the held cart from a session snapshot.
    ///
    /// ## Returns
    /// The snapshot's `saved_at` timestamp.
    pub fn restore(&self, snapshot: &str) -> Result<DateTime<Utc>, SnapshotError> {
        let snapshot: CartSnapshot =
            serde_json::from_str(snapshot).map_err(SnapshotError::Deserialize)?;

        self.with_cart_mut(|cart| *cart = snapshot.cart);
        Ok(snapshot.saved_at)
    }
}

impl Default for CartState {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use cart_core::{CartItem, DiscountStrategy, Money};

    fn seeded_state() -> CartState {
        let state = CartState::new();
        state.with_cart_mut(|cart| {
            cart.add_item(CartItem::new("banana", Money::from_cents(150), 4).unwrap());
            cart.add_item(CartItem::new("apple", Money::from_cents(299), 2).unwrap());
            cart.set_discount_strategy(Some(DiscountStrategy::percentage(20.0).unwrap()));
        });
        state
    }

    #[test]
    fn test_with_cart_accessors() {
        let state = seeded_state();

        let subtotal = state.with_cart(|cart| cart.subtotal());
        assert_eq!(subtotal.cents(), 1198);

        state.with_cart_mut(|cart| {
            cart.remove_item("apple");
        });
        assert_eq!(state.with_cart(|cart| cart.line_count()), 1);
    }

    #[test]
    fn test_clones_share_the_same_cart() {
        let state = seeded_state();
        let handle = state.clone();

        handle.with_cart_mut(|cart| {
            cart.clear();
        });

        assert!(state.with_cart(|cart| cart.is_empty()));
    }

    #[test]
    fn test_snapshot_round_trip_preserves_everything() {
        let state = seeded_state();
        let json = state.snapshot().unwrap();

        let restored = CartState::new();
        restored.restore(&json).unwrap();

        let original = state.with_cart(|cart| cart.clone());
        let recovered = restored.with_cart(|cart| cart.clone());
        assert_eq!(recovered, original);

        // display order survives the round trip
        let ids: Vec<String> = restored.with_cart(|cart| {
            cart.items().map(|i| i.product_id().to_string()).collect()
        });
        assert_eq!(ids, vec!["banana", "apple"]);

        // and so does the strategy
        assert!(restored.with_cart(|cart| cart.discount_strategy().is_some()));
    }

    #[test]
    fn test_restore_rejects_garbage() {
        let state = CartState::new();
        let err = state.restore("not json at all").unwrap_err();
        assert!(matches!(err, SnapshotError::Deserialize(_)));
    }
}
