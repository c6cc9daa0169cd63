//! # Cart Aggregate
//!
//! The shopping cart: priced line items keyed by product identity, plus an
//! optional discount strategy.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                        Cart Operations                              │
//! │                                                                     │
//! │  Caller Action            Cart Method             State Change      │
//! │  ─────────────            ───────────             ────────────      │
//! │                                                                     │
//! │  Add product ───────────► add_item() ───────────► merge or insert   │
//! │                                                                     │
//! │  Remove product ────────► remove_item() ────────► drop entry        │
//! │                                                                     │
//! │  Empty the cart ────────► clear() ──────────────► items gone,       │
//! │                                                   strategy kept     │
//! │                                                                     │
//! │  Choose discount ───────► set_discount_strategy()                   │
//! │                                                                     │
//! │  Read totals ───────────► subtotal() / discount_amount() / total()  │
//! │                           (pure, computed on every call)            │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Keyed but Ordered
//! Items live in a map keyed by product id (uniqueness, O(1) lookup) next
//! to an insertion-ordered list of ids (stable display order). The two are
//! kept in sync on every insert and remove.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::discount::DiscountStrategy;
use crate::item::CartItem;
use crate::money::Money;

/// The shopping cart.
///
/// ## Invariants
/// - Items are unique by product id; adding the same product merges by
///   summing quantities into the existing entry
/// - The order list contains exactly the keys of the item map, in insertion
///   order
/// - Totals are recomputed on demand; nothing is cached, so discount
///   evaluation can never go stale
///
/// One cart belongs to one session. The type itself has no locking; the
/// calling environment provides exclusive, sequential access.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Cart {
    /// Items keyed by product id
    items: HashMap<String, CartItem>,

    /// Product ids in insertion order, for stable display
    order: Vec<String>,

    /// Active discount strategy, if any
    discount: Option<DiscountStrategy>,
}

impl Cart {
    /// Creates a new empty cart with no discount strategy.
    pub fn new() -> Self {
        Cart::default()
    }

    // =========================================================================
    // Mutators
    // =========================================================================

    /// Adds an item to the cart, merging with an existing entry.
    ///
    /// ## Behavior
    /// - Product already in cart: quantities are summed; the existing
    ///   entry's price and identity persist, the incoming price is ignored
    /// - Product not in cart: appended as a new entry
    ///
    /// There are no error paths; `item` was validated at construction.
    pub fn add_item(&mut self, item: CartItem) {
        match self.items.get_mut(item.product_id()) {
            Some(existing) => existing.increase_quantity(item.quantity()),
            None => {
                self.order.push(item.product_id().to_string());
                self.items.insert(item.product_id().to_string(), item);
            }
        }
    }

    /// Removes an item by product id.
    ///
    /// ## Returns
    /// `true` if an entry existed. Removing a missing id is a no-op signal,
    /// not an error.
    pub fn remove_item(&mut self, product_id: &str) -> bool {
        if self.items.remove(product_id).is_some() {
            self.order.retain(|id| id != product_id);
            true
        } else {
            false
        }
    }

    /// Clears all items from the cart.
    ///
    /// The discount strategy is NOT reset; it applies to whatever is added
    /// next.
    pub fn clear(&mut self) {
        self.items.clear();
        self.order.clear();
    }

    /// Replaces the active discount strategy; `None` clears it.
    pub fn set_discount_strategy(&mut self, strategy: Option<DiscountStrategy>) {
        self.discount = strategy;
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Looks up an item by product id.
    pub fn item(&self, product_id: &str) -> Option<&CartItem> {
        self.items.get(product_id)
    }

    /// Looks up an item by product id for mutation.
    ///
    /// The returned reference only permits validated changes
    /// ([`CartItem::set_quantity`]); price and identity stay frozen.
    pub fn item_mut(&mut self, product_id: &str) -> Option<&mut CartItem> {
        self.items.get_mut(product_id)
    }

    /// Iterates items in insertion order.
    pub fn items(&self) -> impl Iterator<Item = &CartItem> {
        self.order.iter().filter_map(|id| self.items.get(id))
    }

    /// Checks if the cart holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of distinct line entries.
    pub fn line_count(&self) -> usize {
        self.items.len()
    }

    /// Returns the total quantity across all items.
    pub fn total_quantity(&self) -> i64 {
        self.items.values().map(CartItem::quantity).sum()
    }

    /// Calculates the subtotal (before discount). Zero on an empty cart.
    pub fn subtotal(&self) -> Money {
        self.items.values().map(CartItem::line_total).sum()
    }

    /// Returns the active discount strategy, if any.
    pub fn discount_strategy(&self) -> Option<&DiscountStrategy> {
        self.discount.as_ref()
    }

    /// Calculates the discount amount.
    ///
    /// Zero when the cart is empty OR no strategy is set; otherwise the
    /// active strategy evaluates the current contents.
    pub fn discount_amount(&self) -> Money {
        match &self.discount {
            Some(strategy) if !self.is_empty() => strategy.apply(self),
            _ => Money::zero(),
        }
    }

    /// Calculates the final total: `subtotal - discount`, floored at zero
    /// even if a strategy were to exceed the subtotal.
    pub fn total(&self) -> Money {
        (self.subtotal() - self.discount_amount()).max(Money::zero())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
