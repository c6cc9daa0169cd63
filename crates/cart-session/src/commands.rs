//! # Cart Commands
//!
//! The command surface the HTTP layer calls, one function per form action.
//!
//! ## Request Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Request Lifecycle                             │
//! │                                                                     │
//! │  POST action=add_item ───► add_to_cart() ───► CartView              │
//! │  POST action=remove_item ► remove_from_cart()                       │
//! │  POST action=clear_cart ─► clear_cart()                             │
//! │  POST action=apply_discount ► apply_discount()                      │
//! │  GET  (render) ──────────► get_cart()                               │
//! │                                                                     │
//! │  Every command returns the full CartView so the page re-renders     │
//! │  from a single response. Failures return ApiError instead.          │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use cart_core::{Cart, CartItem, DiscountStrategy, Money};

use crate::error::ApiError;
use crate::state::CartState;

// =============================================================================
// Requests
// =============================================================================

/// Form fields of the "add item" action.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddItemRequest {
    /// Product identifier entered by the user
    pub product_id: String,

    /// Unit price in cents
    pub unit_price_cents: i64,

    /// Quantity to add
    pub quantity: i64,
}

/// Form fields of the "apply discount" action.
///
/// Mirrors the discount picker: one variant per `discount_type` choice.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiscountRequest {
    /// Remove any active discount.
    None,
    /// Percentage off the subtotal.
    Percentage { percentage: f64 },
    /// Buy X get Y free, per product.
    BuyXGetYFree {
        buy_quantity: i64,
        free_quantity: i64,
    },
}

// =============================================================================
// Views
// =============================================================================

/// One cart line as rendered by the UI.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItemView {
    pub product_id: String,
    pub unit_price_cents: i64,
    pub quantity: i64,
    pub line_total_cents: i64,
}

impl From<&CartItem> for CartItemView {
    fn from(item: &CartItem) -> Self {
        CartItemView {
            product_id: item.product_id().to_string(),
            unit_price_cents: item.unit_price().cents(),
            quantity: item.quantity(),
            line_total_cents: item.line_total().cents(),
        }
    }
}

/// Cart totals summary for API responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    pub line_count: usize,
    pub total_quantity: i64,
    pub subtotal_cents: i64,
    pub discount_cents: i64,
    pub total_cents: i64,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals {
            line_count: cart.line_count(),
            total_quantity: cart.total_quantity(),
            subtotal_cents: cart.subtotal().cents(),
            discount_cents: cart.discount_amount().cents(),
            total_cents: cart.total().cents(),
        }
    }
}

/// Cart response including items, totals, and the discount descriptor.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub totals: CartTotals,
    /// Human-readable descriptor of the active discount, e.g. "20% off"
    pub discount: String,
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        let discount = match cart.discount_strategy() {
            Some(strategy) => strategy.to_string(),
            None => "No discount".to_string(),
        };

        CartView {
            items: cart.items().map(CartItemView::from).collect(),
            totals: CartTotals::from(cart),
            discount,
        }
    }
}

// =============================================================================
// Commands
// =============================================================================

/// Gets the current cart contents.
pub fn get_cart(state: &CartState) -> CartView {
    debug!("get_cart command");
    state.with_cart(|cart| CartView::from(cart))
}

/// Adds a product to the cart.
///
/// ## Behavior
/// - Product already in cart: quantity increases, original price persists
/// - Product not in cart: added as a new line
///
/// The product id is trimmed and must be non-empty; price and quantity are
/// validated by the core before any state changes.
pub fn add_to_cart(state: &CartState, request: AddItemRequest) -> Result<CartView, ApiError> {
    let product_id = request.product_id.trim();
    debug!(
        product_id = %product_id,
        quantity = request.quantity,
        "add_to_cart command"
    );

    if product_id.is_empty() {
        return Err(ApiError::validation("Product ID is required"));
    }

    let item = CartItem::new(
        product_id,
        Money::from_cents(request.unit_price_cents),
        request.quantity,
    )?;

    Ok(state.with_cart_mut(|cart| {
        cart.add_item(item);
        CartView::from(&*cart)
    }))
}

/// Updates the quantity of an item in the cart.
///
/// ## Behavior
/// - Quantity 0: removes the item
/// - Item missing: `NOT_FOUND`
/// - Negative quantity: `INVALID_QUANTITY`, state unchanged
pub fn update_cart_item(
    state: &CartState,
    product_id: &str,
    quantity: i64,
) -> Result<CartView, ApiError> {
    debug!(product_id = %product_id, quantity = quantity, "update_cart_item command");

    if quantity == 0 {
        return remove_from_cart(state, product_id);
    }

    state.with_cart_mut(|cart| match cart.item_mut(product_id) {
        Some(item) => {
            item.set_quantity(quantity)?;
            Ok(CartView::from(&*cart))
        }
        None => Err(ApiError::not_found("Item", product_id)),
    })
}

/// Removes an item from the cart.
pub fn remove_from_cart(state: &CartState, product_id: &str) -> Result<CartView, ApiError> {
    debug!(product_id = %product_id, "remove_from_cart command");

    state.with_cart_mut(|cart| {
        if cart.remove_item(product_id) {
            Ok(CartView::from(&*cart))
        } else {
            Err(ApiError::not_found("Item", product_id))
        }
    })
}

/// Clears all items from the cart.
///
/// The active discount strategy stays in place for whatever is added next.
pub fn clear_cart(state: &CartState) -> CartView {
    debug!("clear_cart command");

    state.with_cart_mut(|cart| {
        cart.clear();
        CartView::from(&*cart)
    })
}

/// Replaces the active discount strategy.
///
/// Invalid parameters are rejected before the cart is touched, so the
/// previous strategy survives a failed apply.
pub fn apply_discount(state: &CartState, request: DiscountRequest) -> Result<CartView, ApiError> {
    debug!(?request, "apply_discount command");

    let strategy = match request {
        DiscountRequest::None => None,
        DiscountRequest::Percentage { percentage } => {
            Some(DiscountStrategy::percentage(percentage)?)
        }
        DiscountRequest::BuyXGetYFree {
            buy_quantity,
            free_quantity,
        } => Some(DiscountStrategy::buy_x_get_y_free(
            buy_quantity,
            free_quantity,
        )?),
    };

    Ok(state.with_cart_mut(|cart| {
        cart.set_discount_strategy(strategy);
        CartView::from(&*cart)
    }))
}

// =============================================================================
// Unit Tests
// =============================================================================
