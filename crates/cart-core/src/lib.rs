//! # cart-core: Pure Business Logic for the Shopping Cart
//!
//! This crate is the **heart** of the cart system. It contains all business
//! logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Cart Architecture                              │
//! │                                                                     │
//! │  ┌─────────────────────────────────────────────────────────────┐   │
//! │  │              Web UI (external to this repo)                 │   │
//! │  │       Add Form ──► Cart Table ──► Discount Picker           │   │
//! │  └─────────────────────────────┬───────────────────────────────┘   │
//! │                                │                                    │
//! │  ┌─────────────────────────────▼───────────────────────────────┐   │
//! │  │                     cart-session                            │   │
//! │  │     per-session state, commands, snapshots, logging         │   │
//! │  └─────────────────────────────┬───────────────────────────────┘   │
//! │                                │                                    │
//! │  ┌─────────────────────────────▼───────────────────────────────┐   │
//! │  │               ★ cart-core (THIS CRATE) ★                    │   │
//! │  │                                                             │   │
//! │  │   ┌─────────┐  ┌─────────┐  ┌──────────┐  ┌────────────┐   │   │
//! │  │   │  money  │  │  cart   │  │ discount │  │ validation │   │   │
//! │  │   │  Money  │  │  Cart   │  │ Strategy │  │   rules    │   │   │
//! │  │   └─────────┘  │CartItem │  │ variants │  └────────────┘   │   │
//! │  │                └─────────┘  └──────────┘                   │   │
//! │  │                                                             │   │
//! │  │   NO I/O • NO LOCKING • NO ASYNC • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types
//! - [`item`] - The priced, quantified line entry
//! - [`cart`] - The cart aggregate
//! - [`discount`] - Pluggable discount strategies
//! - [`validation`] - Fail-fast input validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: every computation is deterministic
//! 2. **No I/O**: session storage, rendering, and logging live upstream
//! 3. **Integer Money**: all monetary values are cents (i64), rates are
//!    basis points (u32)
//! 4. **Explicit Errors**: all errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use cart_core::{Cart, CartItem, DiscountStrategy, Money};
//!
//! let mut cart = Cart::new();
//! cart.add_item(CartItem::new("apple", Money::from_cents(1000), 3).unwrap());
//!
//! // Buy 2 get 1 free: one of the three apples costs nothing
//! cart.set_discount_strategy(Some(DiscountStrategy::buy_x_get_y_free(2, 1).unwrap()));
//!
//! assert_eq!(cart.subtotal().cents(), 3000);
//! assert_eq!(cart.discount_amount().cents(), 1000);
//! assert_eq!(cart.total().cents(), 2000);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod discount;
pub mod error;
pub mod item;
pub mod money;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use cart_core::Money` instead of
// `use cart_core::money::Money`

pub use cart::Cart;
pub use discount::{BuyXGetYFree, DiscountStrategy, PercentageDiscount};
pub use error::{CartError, CartResult};
pub use item::CartItem;
pub use money::Money;
