//! Cart domain errors

use thiserror::Error;

/// Failures raised by [`Cart`](super::models::Cart) operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartError {
    #[error("Cart is full - cannot add more (max {max_size} items)")]
    CapacityExceeded { max_size: usize },

    #[error("No price found for item '{item}'")]
    KeyNotFound { item: String },
}
