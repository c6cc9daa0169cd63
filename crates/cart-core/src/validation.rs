//! # Validation Module
//!
//! Fail-fast input validation used by the constructors in this crate.
//!
//! Every validator runs before any state is created or replaced, so a
//! rejected value leaves items, carts, and strategies untouched. The UI
//! layer performs its own surface checks (required form fields); these are
//! the business rules.

use crate::error::{CartError, CartResult};
use crate::money::Money;

/// Basis points in 100% (rates are stored as bps, 1 bps = 0.01%).
pub const MAX_RATE_BPS: u32 = 10_000;

// =============================================================================
// Item Validators
// =============================================================================

/// Validates a unit price.
///
/// ## Rules
/// - Must be non-negative
/// - Zero is allowed (free items)
///
/// ## Example
/// ```rust
/// use cart_core::money::Money;
/// use cart_core::validation::validate_unit_price;
///
/// assert!(validate_unit_price(Money::from_cents(1099)).is_ok());
/// assert!(validate_unit_price(Money::zero()).is_ok());
/// assert!(validate_unit_price(Money::from_cents(-100)).is_err());
/// ```
pub fn validate_unit_price(price: Money) -> CartResult<()> {
    if price.is_negative() {
        return Err(CartError::InvalidPrice { price });
    }

    Ok(())
}

/// Validates a quantity value.
///
/// ## Rules
/// - Must be positive (> 0)
pub fn validate_quantity(quantity: i64) -> CartResult<()> {
    if quantity <= 0 {
        return Err(CartError::InvalidQuantity { quantity });
    }

    Ok(())
}

// =============================================================================
// Discount Validators
// =============================================================================

/// Validates a percentage and converts it to basis points.
///
/// ## Rules
/// - Must be between 0 and 100 inclusive (NaN is rejected by the range
///   check)
///
/// ## Returns
/// The rate in basis points (20.0% → 2000).
pub fn validate_percentage(percentage: f64) -> CartResult<u32> {
    if !(0.0..=100.0).contains(&percentage) {
        return Err(CartError::InvalidDiscount {
            reason: format!("percentage {} must be between 0 and 100", percentage),
        });
    }

    Ok((percentage * 100.0).round() as u32)
}

/// Validates a rate already expressed in basis points.
///
/// ## Rules
/// - Must not exceed [`MAX_RATE_BPS`] (100%)
pub fn validate_rate_bps(rate_bps: u32) -> CartResult<u32> {
    if rate_bps > MAX_RATE_BPS {
        return Err(CartError::InvalidDiscount {
            reason: format!("rate {} bps must not exceed {}", rate_bps, MAX_RATE_BPS),
        });
    }

    Ok(rate_bps)
}

/// Validates the buy/free quantities of a "buy X get Y free" offer.
///
/// ## Rules
/// - Both must be positive (> 0)
pub fn validate_set_quantities(buy_quantity: i64, free_quantity: i64) -> CartResult<()> {
    if buy_quantity <= 0 {
        return Err(CartError::InvalidDiscount {
            reason: format!("buy quantity {} must be positive", buy_quantity),
        });
    }

    if free_quantity <= 0 {
        return Err(CartError::InvalidDiscount {
            reason: format!("free quantity {} must be positive", free_quantity),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_unit_price() {
        assert!(validate_unit_price(Money::from_cents(0)).is_ok());
        assert!(validate_unit_price(Money::from_cents(1099)).is_ok());
        assert!(validate_unit_price(Money::from_cents(-1)).is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(999).is_ok());

        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-1).is_err());
    }

    #[test]
    fn test_validate_percentage_bounds() {
        assert_eq!(validate_percentage(0.0).unwrap(), 0);
        assert_eq!(validate_percentage(20.0).unwrap(), 2000);
        assert_eq!(validate_percentage(8.25).unwrap(), 825);
        assert_eq!(validate_percentage(100.0).unwrap(), 10_000);

        assert!(validate_percentage(-0.01).is_err());
        assert!(validate_percentage(100.01).is_err());
        assert!(validate_percentage(f64::NAN).is_err());
    }

    #[test]
    fn test_validate_rate_bps() {
        assert_eq!(validate_rate_bps(0).unwrap(), 0);
        assert_eq!(validate_rate_bps(10_000).unwrap(), 10_000);
        assert!(validate_rate_bps(10_001).is_err());
    }

    #[test]
    fn test_validate_set_quantities() {
        assert!(validate_set_quantities(2, 1).is_ok());
        assert!(validate_set_quantities(3, 2).is_ok());

        assert!(validate_set_quantities(0, 1).is_err());
        assert!(validate_set_quantities(2, 0).is_err());
        assert!(validate_set_quantities(-2, -1).is_err());
    }
}
