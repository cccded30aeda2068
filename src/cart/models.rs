//! Shopping Cart Domain Models
//!
//! This module contains the bounded `Cart` type and the request/response
//! structures exchanged with the REST and MCP surfaces.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::num::NonZeroUsize;

use super::error::CartError;

// =============================================================================
// Cart Domain Models
// =============================================================================

/// Default number of items a cart may hold
pub const MAX_CART_SIZE: usize = 5;

/// [`MAX_CART_SIZE`] as a capacity value
pub const DEFAULT_MAX_SIZE: NonZeroUsize = NonZeroUsize::new(MAX_CART_SIZE).unwrap();

/// An ordered, capacity-bounded list of item identifiers.
///
/// Items keep their insertion order and duplicates are allowed. The only
/// way to grow the list is [`Cart::add`], which refuses to go past
/// `max_size`, so `size() <= max_size()` always holds.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    items: Vec<String>,
    max_size: usize,
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

impl Cart {
    /// Creates an empty cart holding at most [`MAX_CART_SIZE`] items
    pub fn new() -> Self {
        Self::with_max_size(DEFAULT_MAX_SIZE)
    }

    /// Creates an empty cart with a custom capacity
    pub fn with_max_size(max_size: NonZeroUsize) -> Self {
        Self {
            items: Vec::with_capacity(max_size.get()),
            max_size: max_size.get(),
        }
    }

    /// Appends `item` to the end of the cart.
    ///
    /// Fails with [`CartError::CapacityExceeded`] when the cart already
    /// holds `max_size` items, leaving the cart untouched.
    pub fn add(&mut self, item: impl Into<String>) -> Result<(), CartError> {
        if self.is_full() {
            return Err(CartError::CapacityExceeded {
                max_size: self.max_size,
            });
        }
        self.items.push(item.into());
        Ok(())
    }

    pub fn size(&self) -> usize {
        self.items.len()
    }

    /// Items in insertion order
    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.max_size
    }

    /// Number of free slots left before the cart is full
    pub fn remaining(&self) -> usize {
        self.max_size - self.items.len()
    }

    /// Sums the price of every item in the cart.
    ///
    /// Every item must have an entry in `prices`; the first item without
    /// one aborts the sum with [`CartError::KeyNotFound`].
    pub fn total_price(&self, prices: &HashMap<String, f64>) -> Result<f64, CartError> {
        self.items.iter().try_fold(0.0, |total, item| {
            prices
                .get(item)
                .map(|price| total + price)
                .ok_or_else(|| CartError::KeyNotFound { item: item.clone() })
        })
    }
}

// =============================================================================
// Request / Response Models
// =============================================================================

/// Input for the add_to_cart tool
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartInput {
    /// Items to append, in order
    pub items: Vec<String>,

    /// Optional cart identifier
    pub cart_id: Option<String>,
}

/// Input for the REST add_item endpoint
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddItemInput {
    pub item: String,

    /// Optional cart identifier
    pub cart_id: Option<String>,
}

/// Input for looking up a single cart
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetCartInput {
    pub cart_id: String,
}

/// Input for total price computation
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalPriceInput {
    pub cart_id: String,

    /// Price per item identifier
    pub prices: HashMap<String, f64>,
}

/// Input for the checkout tool
#[derive(Debug, Deserialize)]
pub struct CheckoutInput {
    /// Cart to check out
    #[serde(rename = "cartId")]
    pub cart_id: String,
}

/// Snapshot of a stored cart
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartView {
    pub cart_id: String,
    pub items: Vec<String>,
    pub size: usize,
    pub max_size: usize,
}

impl CartView {
    pub fn new(cart_id: impl Into<String>, cart: &Cart) -> Self {
        Self {
            cart_id: cart_id.into(),
            items: cart.items().to_vec(),
            size: cart.size(),
            max_size: cart.max_size(),
        }
    }
}

/// Response for the add_item endpoint
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddItemResponse {
    pub status: String,
    pub cart_id: String,
    pub items: Vec<String>,
    pub size: usize,
}

/// Response for total price computation
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalPriceResponse {
    pub cart_id: String,
    pub total_price: f64,
}

/// Response for checkout operations
#[derive(Serialize)]
pub struct CheckoutResponse {
    /// Status of the operation
    pub status: String,

    /// Cart identifier
    #[serde(rename = "cartId")]
    pub cart_id: String,
}
