//! Shopping Cart Domain Module
//!
//! This module contains all shopping cart business logic, including:
//! - The bounded `Cart` type and its errors
//! - Business logic helpers (cart ids, formatting)
//! - Application state management
//! - REST API handlers

pub mod error;
pub mod handlers;
pub mod helpers;
pub mod models;
pub mod state;

// Re-export commonly used types for convenience
pub use error::CartError;
pub use handlers::routes;
pub use models::{Cart, MAX_CART_SIZE};
pub use state::{AppState, SharedState};
