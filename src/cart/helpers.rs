//! Shopping Cart Business Logic Helpers
//!
//! This module contains helper functions for cart identifiers and formatting.

use uuid::Uuid;

/// Returns the provided `cart_id` or creates a new UUID string when `None`.
///
/// This guarantees that every cart operation works with a non-empty identifier.
pub fn get_or_create_cart_id(cart_id: Option<String>) -> String {
    cart_id
        .filter(|id| !id.is_empty())
        .unwrap_or_else(|| Uuid::new_v4().simple().to_string())
}

/// Produces a human-readable one-line summary for a list of cart items.
///
/// Example output: `"water, coffee, milk"`.
pub fn format_item_summary(items: &[String]) -> String {
    items.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_given_cart_id() {
        assert_eq!(get_or_create_cart_id(Some("cart-1".into())), "cart-1");
    }

    #[test]
    fn test_generates_cart_id() {
        let a = get_or_create_cart_id(None);
        let b = get_or_create_cart_id(Some(String::new()));
        assert_eq!(a.len(), 32);
        assert_eq!(b.len(), 32);
        assert_ne!(a, b);
    }

    #[test]
    fn test_format_item_summary() {
        let items = vec!["water".to_string(), "coffee".to_string()];
        assert_eq!(format_item_summary(&items), "water, coffee");
        assert_eq!(format_item_summary(&[]), "");
    }
}
