//! REST API handlers for shopping cart operations
//!
//! This module implements HTTP endpoints for adding items, inspecting and
//! pricing carts, and checking out.

use super::{helpers::*, models::*, state::SharedState};
use crate::error::AppError;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    routing::{get, post},
    Json, Router,
};

/// Creates routes for cart-related operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/add_item", post(add_item))
        .route("/carts/:cart_id", get(get_cart))
        .route("/total_price", post(total_price))
        .route("/checkout", post(checkout))
}

/// Endpoint: POST /add_item
/// Appends a single item to the cart, creating the cart on first use.
async fn add_item(
    State(state): State<SharedState>,
    payload: Result<Json<AddItemInput>, JsonRejection>,
) -> Result<Json<AddItemResponse>, AppError> {
    let Json(payload) = payload?;
    let cart_id = get_or_create_cart_id(payload.cart_id);

    let cart = state.add_items(&cart_id, vec![payload.item])?;
    tracing::debug!(%cart_id, size = cart.size(), "item added");

    Ok(Json(AddItemResponse {
        status: "added".to_string(),
        cart_id,
        items: cart.items().to_vec(),
        size: cart.size(),
    }))
}

/// Endpoint: GET /carts/:cart_id
async fn get_cart(
    State(state): State<SharedState>,
    Path(cart_id): Path<String>,
) -> Json<CartView> {
    let cart = state.get_cart(&cart_id);
    Json(CartView::new(cart_id, &cart))
}

/// Endpoint: POST /total_price
/// Sums the cart using the caller's price lookup.
async fn total_price(
    State(state): State<SharedState>,
    payload: Result<Json<TotalPriceInput>, JsonRejection>,
) -> Result<Json<TotalPriceResponse>, AppError> {
    let Json(payload) = payload?;
    let total_price = state.total_price(&payload.cart_id, &payload.prices)?;

    Ok(Json(TotalPriceResponse {
        cart_id: payload.cart_id,
        total_price,
    }))
}

/// Endpoint: POST /checkout
/// Processes checkout from the cart
async fn checkout(
    State(state): State<SharedState>,
    payload: Result<Json<CheckoutInput>, JsonRejection>,
) -> Result<Json<CheckoutResponse>, AppError> {
    let Json(CheckoutInput { cart_id }) = payload?;

    if let Some(cart) = state.checkout(&cart_id) {
        let item_summary = format_item_summary(cart.items());
        tracing::info!("REST API CHECKOUT: Cart {} - {}", cart_id, item_summary);
    }

    Ok(Json(CheckoutResponse {
        status: "checked_out".to_string(),
        cart_id,
    }))
}
