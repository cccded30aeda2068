//! MCP (Model Context Protocol) route handlers
//!
//! This module implements the Model Context Protocol handlers for the shopping cart application.
//! It exports `handle_tool_call` publicly to make it accessible for tests.

use super::{helpers::*, models::*};
use crate::cart::{helpers::*, models::*, state::*};
use crate::error::AppError;
use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::post, Json, Router};
use serde_json::{json, Value};

/// Creates routes for MCP-related operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/", post(handle_mcp).get(handle_mcp_sse))
        .route("/mcp", post(handle_mcp).get(handle_mcp_sse)) // Standard endpoint
        .route("/mcp/", post(handle_mcp).get(handle_mcp_sse)) // Trailing slash safety
}

/// Handle SSE (Server-Sent Events) handshake for GET requests
async fn handle_mcp_sse() -> impl IntoResponse {
    (
        [("content-type", "text/event-stream")],
        "event: endpoint\ndata: /mcp\n\n",
    )
}

/// Endpoint: POST /mcp
/// Handles the Model Context Protocol communication for POST requests.
async fn handle_mcp(
    State(state): State<SharedState>,
    body: Result<Json<JsonRpcRequest>, axum::extract::rejection::JsonRejection>,
) -> impl IntoResponse {
    let req = match body {
        Ok(Json(r)) => r,
        Err(e) => {
            tracing::warn!("JSON Parse Error: {}", e.body_text());
            return (
                StatusCode::BAD_REQUEST,
                Json(rpc_error(Value::Null, -32700, "Parse error")),
            )
                .into_response();
        }
    };

    let id = req.id.unwrap_or(Value::Null);
    let method_name = req.method.as_str();
    let params = req.params.unwrap_or(Value::Null);

    tracing::info!("MCP Call: {} (id: {})", method_name, id);

    let response_body = match method_name {
        "initialize" => rpc_success(id, handle_initialize()),
        "notifications/initialized" => rpc_success(id, json!({})),
        "tools/list" => rpc_success(id, handle_tools_list()),
        "tools/call" => {
            let tool_name = params.get("name").and_then(|n| n.as_str()).unwrap_or("");
            let args = params.get("arguments").cloned().unwrap_or(Value::Null);

            match handle_tool_call(&state, tool_name, args) {
                Ok(result) => rpc_success(id, result),
                Err(err) => {
                    tracing::debug!(tool = tool_name, "tool call failed: {}", err);
                    rpc_error(id, err.rpc_code(), err.to_string())
                }
            }
        }
        "ping" => rpc_success(id, json!({})),
        _ => {
            tracing::warn!("Unknown method: {}", method_name);
            rpc_error(id, -32601, "Method not found")
        }
    };

    Json(response_body).into_response()
}

// =============================================================================
// MCP Method Handlers
// =============================================================================

/// Handles `initialize` request (Handshake).
fn handle_initialize() -> Value {
    json!({
        "protocolVersion": PROTOCOL_VERSION,
        "capabilities": {
            "tools": { "listChanged": true }
        },
        "serverInfo": {
            "name": SERVER_NAME,
            "version": env!("CARGO_PKG_VERSION")
        }
    })
}

/// Handles `tools/list` request.
fn handle_tools_list() -> Value {
    json!({
        "tools": [
            {
                "name": ADD_TO_CART_TOOL_NAME,
                "title": "Add items to cart",
                "description": "Appends the provided items to the cart and returns its state. \
                                Fails without changing the cart if they do not all fit.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "items": {
                            "type": "array",
                            "items": { "type": "string" }
                        },
                        "cartId": { "type": "string" }
                    },
                    "required": ["items"],
                    "additionalProperties": false
                }
            },
            {
                "name": GET_CART_TOOL_NAME,
                "title": "Show cart",
                "description": "Returns the items in the cart in the order they were added.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "cartId": { "type": "string" }
                    },
                    "required": ["cartId"],
                    "additionalProperties": false
                }
            },
            {
                "name": TOTAL_PRICE_TOOL_NAME,
                "title": "Total price",
                "description": "Sums the cart using the given price per item. \
                                Every item needs a price.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "cartId": { "type": "string" },
                        "prices": {
                            "type": "object",
                            "additionalProperties": { "type": "number" }
                        }
                    },
                    "required": ["cartId", "prices"],
                    "additionalProperties": false
                }
            },
            {
                "name": CHECKOUT_TOOL_NAME,
                "title": "Checkout",
                "description": "Checks out the current cart, clearing it and returning a receipt.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "cartId": { "type": "string" }
                    },
                    "required": ["cartId"],
                    "additionalProperties": false
                }
            }
        ]
    })
}

/// Handles `tools/call` request (Business Logic).
pub fn handle_tool_call(state: &AppState, name: &str, args: Value) -> Result<Value, AppError> {
    match name {
        ADD_TO_CART_TOOL_NAME => handle_add_to_cart_tool(state, args),
        GET_CART_TOOL_NAME => handle_get_cart_tool(state, args),
        TOTAL_PRICE_TOOL_NAME => handle_total_price_tool(state, args),
        CHECKOUT_TOOL_NAME => handle_checkout_tool(state, args),
        _ => Err(AppError::UnknownTool(name.to_string())),
    }
}

/// Handles the add_to_cart tool functionality
fn handle_add_to_cart_tool(state: &AppState, args: Value) -> Result<Value, AppError> {
    let input: AddToCartInput = serde_json::from_value(args)?;

    let cart_id = get_or_create_cart_id(input.cart_id);
    let cart = state.add_items(&cart_id, input.items)?;

    let message = format!("Cart {} now has {} item(s).", cart_id, cart.size());

    Ok(tool_result(message, json!(CartView::new(cart_id, &cart))))
}

/// Handles the get_cart tool functionality
fn handle_get_cart_tool(state: &AppState, args: Value) -> Result<Value, AppError> {
    let input: GetCartInput = serde_json::from_value(args)?;

    let cart = state.get_cart(&input.cart_id);
    let message = if cart.is_empty() {
        "Cart is empty.".to_string()
    } else {
        format!("Cart contains: {}", format_item_summary(cart.items()))
    };

    Ok(tool_result(message, json!(CartView::new(input.cart_id, &cart))))
}

/// Handles the get_total_price tool functionality
fn handle_total_price_tool(state: &AppState, args: Value) -> Result<Value, AppError> {
    let input: TotalPriceInput = serde_json::from_value(args)?;

    let total_price = state.total_price(&input.cart_id, &input.prices)?;
    let message = format!("Cart {} totals {}.", input.cart_id, total_price);

    let response = TotalPriceResponse {
        cart_id: input.cart_id,
        total_price,
    };

    Ok(tool_result(message, json!(response)))
}

/// Handles the checkout tool functionality
fn handle_checkout_tool(state: &AppState, args: Value) -> Result<Value, AppError> {
    let CheckoutInput { cart_id } = serde_json::from_value(args)?;

    let message = match state.checkout(&cart_id) {
        Some(cart) if !cart.is_empty() => {
            let message = format!("Checked out now: {}", format_item_summary(cart.items()));
            tracing::info!("BACKEND CHECKOUT: {}", message);
            message
        }
        _ => "Cart is empty.".to_string(),
    };

    Ok(tool_result(
        message,
        json!({
            "cartId": cart_id,
            "items": [],
            "checkout": true
        }),
    ))
}
