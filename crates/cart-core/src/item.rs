//! # Cart Item
//!
//! A priced, quantified line entry in the cart.
//!
//! ## Price Freezing
//! The unit price is captured when the item is built. Merging the same
//! product into the cart again only accumulates quantity; the price of the
//! original entry persists.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CartResult;
use crate::money::Money;
use crate::validation::{validate_quantity, validate_unit_price};

/// An item in the shopping cart.
///
/// Fields are private: `quantity` is the only mutable part and changes only
/// through validated replacement, so an instance can never hold a negative
/// price or a non-positive quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CartItem {
    /// Product identifier (unique key within a cart)
    product_id: String,

    /// Price per unit, frozen at construction
    unit_price: Money,

    /// Quantity in cart, always >= 1
    quantity: i64,
}

impl CartItem {
    /// Creates a new cart item.
    ///
    /// ## Errors
    /// - [`CartError::InvalidPrice`] when `unit_price` is negative
    /// - [`CartError::InvalidQuantity`] when `quantity` is not positive
    ///
    /// ## Example
    /// ```rust
    /// use cart_core::{CartItem, Money};
    ///
    /// let item = CartItem::new("apple", Money::from_cents(150), 4).unwrap();
    /// assert_eq!(item.line_total().cents(), 600);
    ///
    /// assert!(CartItem::new("apple", Money::from_cents(-1), 4).is_err());
    /// ```
    ///
    /// [`CartError::InvalidPrice`]: crate::error::CartError::InvalidPrice
    /// [`CartError::InvalidQuantity`]: crate::error::CartError::InvalidQuantity
    pub fn new(
        product_id: impl Into<String>,
        unit_price: Money,
        quantity: i64,
    ) -> CartResult<Self> {
        validate_unit_price(unit_price)?;
        validate_quantity(quantity)?;

        Ok(CartItem {
            product_id: product_id.into(),
            unit_price,
            quantity,
        })
    }

    /// Returns the product identifier.
    #[inline]
    pub fn product_id(&self) -> &str {
        &self.product_id
    }

    /// Returns the frozen unit price.
    #[inline]
    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    /// Returns the current quantity.
    #[inline]
    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Replaces the stored quantity.
    ///
    /// ## Errors
    /// [`CartError::InvalidQuantity`] when `quantity` is not positive; the
    /// stored quantity is left unchanged in that case.
    ///
    /// [`CartError::InvalidQuantity`]: crate::error::CartError::InvalidQuantity
    pub fn set_quantity(&mut self, quantity: i64) -> CartResult<()> {
        validate_quantity(quantity)?;
        self.quantity = quantity;
        Ok(())
    }

    /// Accumulates quantity when the cart merges a duplicate product id.
    /// `additional` comes from an already-validated item, so it is >= 1.
    pub(crate) fn increase_quantity(&mut self, additional: i64) {
        self.quantity += additional;
    }

    /// Calculates the line total (unit price × quantity). Pure.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.unit_price * self.quantity
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
