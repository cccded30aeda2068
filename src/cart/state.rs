//! Shopping Cart State Management
//!
//! This module manages the application state for shopping carts: an
//! in-memory registry keyed by cart id.

use super::{
    error::CartError,
    models::{Cart, DEFAULT_MAX_SIZE},
};
use dashmap::{mapref::entry::Entry, DashMap};
use std::{collections::HashMap, num::NonZeroUsize, sync::Arc};

// =============================================================================
// Application State
// =============================================================================

/// Shared application state that can be safely passed between threads
pub type SharedState = Arc<AppState>;

/// Core application state containing the carts
pub struct AppState {
    /// In-memory storage for carts, keyed by cart_id.
    /// DashMap allows concurrent access without external Mutexes.
    pub carts: DashMap<String, Cart>,

    /// Capacity given to newly created carts
    max_cart_size: NonZeroUsize,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Creates an empty AppState whose carts use the default capacity
    pub fn new() -> Self {
        Self::with_max_cart_size(DEFAULT_MAX_SIZE)
    }

    pub fn with_max_cart_size(max_cart_size: NonZeroUsize) -> Self {
        tracing::debug!(max_cart_size = max_cart_size.get(), "initializing cart store");
        Self {
            carts: DashMap::new(),
            max_cart_size,
        }
    }

    pub fn max_cart_size(&self) -> usize {
        self.max_cart_size.get()
    }

    /// Appends `items` to the cart stored under `cart_id`, creating it if needed.
    ///
    /// Either every item fits and all are appended, or the stored cart is
    /// left exactly as it was and `CapacityExceeded` is returned. A new cart
    /// is only stored once it holds at least one item.
    pub fn add_items(&self, cart_id: &str, items: Vec<String>) -> Result<Cart, CartError> {
        match self.carts.entry(cart_id.to_string()) {
            Entry::Occupied(mut entry) => {
                let mut updated = entry.get().clone();
                append_all(&mut updated, items)?;
                entry.insert(updated.clone());
                Ok(updated)
            }
            Entry::Vacant(entry) => {
                let mut cart = Cart::with_max_size(self.max_cart_size);
                append_all(&mut cart, items)?;
                if !cart.is_empty() {
                    entry.insert(cart.clone());
                }
                Ok(cart)
            }
        }
    }

    /// Returns a copy of the cart stored under `cart_id`, or an empty cart
    /// when none exists yet.
    pub fn get_cart(&self, cart_id: &str) -> Cart {
        self.carts
            .get(cart_id)
            .map(|cart| cart.clone())
            .unwrap_or_else(|| Cart::with_max_size(self.max_cart_size))
    }

    /// Prices the cart stored under `cart_id`; unknown carts total zero.
    pub fn total_price(
        &self,
        cart_id: &str,
        prices: &HashMap<String, f64>,
    ) -> Result<f64, CartError> {
        match self.carts.get(cart_id) {
            Some(cart) => cart.total_price(prices),
            None => Ok(0.0),
        }
    }

    /// Removes the cart stored under `cart_id`, returning it if it existed
    pub fn checkout(&self, cart_id: &str) -> Option<Cart> {
        self.carts.remove(cart_id).map(|(_, cart)| cart)
    }
}

fn append_all(cart: &mut Cart, items: Vec<String>) -> Result<(), CartError> {
    items.into_iter().try_for_each(|item| cart.add(item))
}
