//! # Discount Strategies
//!
//! Pluggable discount computation over cart contents.
//!
//! ## Strategy Dispatch
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Discount Evaluation                            │
//! │                                                                     │
//! │  Cart::discount_amount()                                            │
//! │       │                                                             │
//! │       ├── no strategy, or empty cart ──► Money::zero()              │
//! │       │                                                             │
//! │       └── DiscountStrategy::apply(&cart)                            │
//! │               │                                                     │
//! │               ├── Percentage ──► subtotal × rate                    │
//! │               │                                                     │
//! │               └── BuyXGetYFree ──► Σ per-item free units × price    │
//! │                                                                     │
//! │  Strategies READ cart contents, never mutate them.                  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Variants are immutable value objects: validated at construction, stateless
//! afterwards, holding no reference back to any cart.

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::cart::Cart;
use crate::error::CartResult;
use crate::money::Money;
use crate::validation::{validate_percentage, validate_rate_bps, validate_set_quantities};

// =============================================================================
// Percentage Discount
// =============================================================================

/// Applies a percentage discount to the entire cart subtotal.
///
/// The rate is stored in basis points (2000 = 20%), never as a float.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PercentageDiscount {
    rate_bps: u32,
}

impl PercentageDiscount {
    /// Creates a percentage discount from a percentage value.
    ///
    /// ## Errors
    /// [`CartError::InvalidDiscount`] unless `percentage` is within
    /// `0..=100` (NaN is rejected).
    ///
    /// ## Example
    /// ```rust
    /// use cart_core::PercentageDiscount;
    ///
    /// let discount = PercentageDiscount::new(20.0).unwrap();
    /// assert_eq!(discount.rate_bps(), 2000);
    ///
    /// assert!(PercentageDiscount::new(100.5).is_err());
    /// ```
    ///
    /// [`CartError::InvalidDiscount`]: crate::error::CartError::InvalidDiscount
    pub fn new(percentage: f64) -> CartResult<Self> {
        Ok(PercentageDiscount {
            rate_bps: validate_percentage(percentage)?,
        })
    }

    /// Creates a percentage discount from a rate already in basis points.
    ///
    /// ## Errors
    /// [`CartError::InvalidDiscount`] when `rate_bps` exceeds 10000 (100%).
    ///
    /// [`CartError::InvalidDiscount`]: crate::error::CartError::InvalidDiscount
    pub fn from_bps(rate_bps: u32) -> CartResult<Self> {
        Ok(PercentageDiscount {
            rate_bps: validate_rate_bps(rate_bps)?,
        })
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn rate_bps(&self) -> u32 {
        self.rate_bps
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.rate_bps as f64 / 100.0
    }

    /// Computes the discount amount: `subtotal × rate`.
    ///
    /// Zero on an empty cart, because the subtotal is zero.
    pub fn apply(&self, cart: &Cart) -> Money {
        cart.subtotal().percentage_of(self.rate_bps)
    }
}

// =============================================================================
// Buy X Get Y Free
// =============================================================================

/// "Buy X items, get Y items free", evaluated per product independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BuyXGetYFree {
    buy_quantity: i64,
    free_quantity: i64,
}

impl BuyXGetYFree {
    /// Creates a buy-X-get-Y-free discount.
    ///
    /// ## Errors
    /// [`CartError::InvalidDiscount`] when either quantity is not positive.
    ///
    /// [`CartError::InvalidDiscount`]: crate::error::CartError::InvalidDiscount
    pub fn new(buy_quantity: i64, free_quantity: i64) -> CartResult<Self> {
        validate_set_quantities(buy_quantity, free_quantity)?;

        Ok(BuyXGetYFree {
            buy_quantity,
            free_quantity,
        })
    }

    /// Returns the number of items that must be bought to qualify.
    #[inline]
    pub const fn buy_quantity(&self) -> i64 {
        self.buy_quantity
    }

    /// Returns the number of free items per qualifying set.
    #[inline]
    pub const fn free_quantity(&self) -> i64 {
        self.free_quantity
    }

    /// Computes the discount amount, per item independently, summed.
    ///
    /// For an item with quantity `q` and unit price `p`, with
    /// `set_size = buy + free`:
    ///
    /// ```text
    /// sets       = q / set_size              (complete sets)
    /// remainder  = q % set_size
    /// additional = min(free, remainder - buy)  if remainder >= buy, else 0
    /// discount   = (sets × free + additional) × p
    /// ```
    ///
    /// Remainder items that reach `buy` but lack a full `free` worth of
    /// surplus only unlock the surplus actually available, never more. A
    /// remainder of exactly `buy` yields zero additional free units.
    pub fn apply(&self, cart: &Cart) -> Money {
        let set_size = self.buy_quantity + self.free_quantity;

        cart.items()
            .map(|item| {
                let quantity = item.quantity();
                let sets = quantity / set_size;
                let remainder = quantity % set_size;

                let additional_free = if remainder >= self.buy_quantity {
                    self.free_quantity.min(remainder - self.buy_quantity)
                } else {
                    0
                };

                let free_units = sets * self.free_quantity + additional_free;
                item.unit_price() * free_units
            })
            .sum()
    }
}

// =============================================================================
// Strategy Dispatch
// =============================================================================

/// A pluggable discount rule.
///
/// Enum-with-payload instead of trait objects: the variant set is closed,
/// dispatch is a `match`, and serde/TS derives come for free. The "no
/// discount" case is `Option::<DiscountStrategy>::None` on the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum DiscountStrategy {
    /// Percentage off the entire subtotal.
    Percentage(PercentageDiscount),
    /// Per-product free units for qualifying quantities.
    BuyXGetYFree(BuyXGetYFree),
}

impl DiscountStrategy {
    /// Shorthand for a validated percentage strategy.
    pub fn percentage(percentage: f64) -> CartResult<Self> {
        Ok(DiscountStrategy::Percentage(PercentageDiscount::new(
            percentage,
        )?))
    }

    /// Shorthand for a validated buy-X-get-Y-free strategy.
    pub fn buy_x_get_y_free(buy_quantity: i64, free_quantity: i64) -> CartResult<Self> {
        Ok(DiscountStrategy::BuyXGetYFree(BuyXGetYFree::new(
            buy_quantity,
            free_quantity,
        )?))
    }

    /// Computes the discount amount for the given cart contents.
    pub fn apply(&self, cart: &Cart) -> Money {
        match self {
            DiscountStrategy::Percentage(discount) => discount.apply(cart),
            DiscountStrategy::BuyXGetYFree(discount) => discount.apply(cart),
        }
    }
}

impl From<PercentageDiscount> for DiscountStrategy {
    fn from(discount: PercentageDiscount) -> Self {
        DiscountStrategy::Percentage(discount)
    }
}

impl From<BuyXGetYFree> for DiscountStrategy {
    fn from(discount: BuyXGetYFree) -> Self {
        DiscountStrategy::BuyXGetYFree(discount)
    }
}

/// Human-readable descriptor for display next to the cart summary.
impl fmt::Display for DiscountStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiscountStrategy::Percentage(discount) => {
                write!(f, "{}% off", discount.percentage())
            }
            DiscountStrategy::BuyXGetYFree(discount) => {
                write!(
                    f,
                    "Buy {} Get {} Free",
                    discount.buy_quantity(),
                    discount.free_quantity()
                )
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CartError;
    use crate::item::CartItem;

    fn cart_with(entries: &[(&str, i64, i64)]) -> Cart {
        let mut cart = Cart::new();
        for &(id, price_cents, quantity) in entries {
            cart.add_item(CartItem::new(id, Money::from_cents(price_cents), quantity).unwrap());
        }
        cart
    }

    #[test]
    fn test_percentage_creation() {
        let discount = PercentageDiscount::new(20.0).unwrap();
        assert_eq!(discount.rate_bps(), 2000);
        assert!((discount.percentage() - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_percentage_bounds_rejected() {
        assert!(matches!(
            PercentageDiscount::new(-1.0).unwrap_err(),
            CartError::InvalidDiscount { .. }
        ));
        assert!(matches!(
            PercentageDiscount::new(100.5).unwrap_err(),
            CartError::InvalidDiscount { .. }
        ));
        assert!(PercentageDiscount::from_bps(10_001).is_err());
    }

    #[test]
    fn test_percentage_apply() {
        // $200.00 subtotal at 20% = $40.00
        let cart = cart_with(&[("product-1", 10000, 2)]);
        let discount = PercentageDiscount::new(20.0).unwrap();
        assert_eq!(discount.apply(&cart).cents(), 4000);
    }

    #[test]
    fn test_percentage_apply_empty_cart() {
        let cart = Cart::new();
        let discount = PercentageDiscount::new(50.0).unwrap();
        assert!(discount.apply(&cart).is_zero());
    }

    #[test]
    fn test_buy_x_get_y_creation() {
        let discount = BuyXGetYFree::new(2, 1).unwrap();
        assert_eq!(discount.buy_quantity(), 2);
        assert_eq!(discount.free_quantity(), 1);
    }

    #[test]
    fn test_buy_x_get_y_invalid_quantities_rejected() {
        assert!(matches!(
            BuyXGetYFree::new(0, 1).unwrap_err(),
            CartError::InvalidDiscount { .. }
        ));
        assert!(matches!(
            BuyXGetYFree::new(2, 0).unwrap_err(),
            CartError::InvalidDiscount { .. }
        ));
        assert!(BuyXGetYFree::new(-2, 1).is_err());
    }

    #[test]
    fn test_simple_buy_2_get_1_free() {
        // 3 items @ $10: buy 2, get 1 free = $10.00 discount
        let cart = cart_with(&[("product-1", 1000, 3)]);
        let discount = BuyXGetYFree::new(2, 1).unwrap();
        assert_eq!(discount.apply(&cart).cents(), 1000);
    }

    #[test]
    fn test_multiple_complete_sets() {
        // 9 items @ $10: 3 complete sets of (2+1) = 3 free = $30.00
        let cart = cart_with(&[("product-1", 1000, 9)]);
        let discount = BuyXGetYFree::new(2, 1).unwrap();
        assert_eq!(discount.apply(&cart).cents(), 3000);
    }

    #[test]
    fn test_partial_set_without_surplus() {
        // 4 items @ $10: 1 complete set + remainder 1 (< buy 2) = $10.00
        let cart = cart_with(&[("product-1", 1000, 4)]);
        let discount = BuyXGetYFree::new(2, 1).unwrap();
        assert_eq!(discount.apply(&cart).cents(), 1000);
    }

    #[test]
    fn test_quantity_below_buy_threshold() {
        // 1 item @ $10: nothing qualifies
        let cart = cart_with(&[("product-1", 1000, 1)]);
        let discount = BuyXGetYFree::new(2, 1).unwrap();
        assert!(discount.apply(&cart).is_zero());
    }

    #[test]
    fn test_remainder_exactly_buy_quantity_yields_nothing() {
        // Buy 3 get 2, 8 items @ $10: one set of 5 → 2 free; remainder 3
        // equals the buy quantity, surplus 0, so no additional free units.
        let cart = cart_with(&[("product-1", 1000, 8)]);
        let discount = BuyXGetYFree::new(3, 2).unwrap();
        assert_eq!(discount.apply(&cart).cents(), 2000);
    }

    #[test]
    fn test_remainder_surplus_partially_unlocked() {
        // Buy 3 get 2, 9 items @ $10: one set of 5 → 2 free; remainder 4
        // has surplus 1 over the buy quantity → min(2, 1) = 1 more free.
        let cart = cart_with(&[("product-1", 1000, 9)]);
        let discount = BuyXGetYFree::new(3, 2).unwrap();
        assert_eq!(discount.apply(&cart).cents(), 3000);
    }

    #[test]
    fn test_applies_per_product_independently() {
        // product-1: 3 @ $10 → 1 free = $10; product-2: 3 @ $20 → 1 free = $20
        let cart = cart_with(&[("product-1", 1000, 3), ("product-2", 2000, 3)]);
        let discount = BuyXGetYFree::new(2, 1).unwrap();
        assert_eq!(discount.apply(&cart).cents(), 3000);
    }

    #[test]
    fn test_strategy_dispatch() {
        let cart = cart_with(&[("product-1", 1000, 3)]);

        let percentage = DiscountStrategy::percentage(10.0).unwrap();
        assert_eq!(percentage.apply(&cart).cents(), 300);

        let bxgy = DiscountStrategy::buy_x_get_y_free(2, 1).unwrap();
        assert_eq!(bxgy.apply(&cart).cents(), 1000);
    }

    #[test]
    fn test_display_descriptors() {
        let percentage = DiscountStrategy::percentage(20.0).unwrap();
        assert_eq!(percentage.to_string(), "20% off");

        let fractional = DiscountStrategy::percentage(8.25).unwrap();
        assert_eq!(fractional.to_string(), "8.25% off");

        let bxgy = DiscountStrategy::buy_x_get_y_free(2, 1).unwrap();
        assert_eq!(bxgy.to_string(), "Buy 2 Get 1 Free");
    }
}
