//! MCP Protocol Models and Constants
//!
//! This module contains all data structures and constants related to the
//! Model Context Protocol (MCP) specification.

use serde::Deserialize;
use serde_json::Value;

// =============================================================================
// MCP Constants
// =============================================================================

/// Name of the tool for adding items to a cart
pub const ADD_TO_CART_TOOL_NAME: &str = "add_to_cart";
/// Name of the tool returning a cart's contents
pub const GET_CART_TOOL_NAME: &str = "get_cart";
/// Name of the tool pricing a cart
pub const TOTAL_PRICE_TOOL_NAME: &str = "get_total_price";
/// Name of the checkout tool
pub const CHECKOUT_TOOL_NAME: &str = "checkout";
/// Server identifier
pub const SERVER_NAME: &str = "shopping-cart";
/// Protocol version for MCP
pub const PROTOCOL_VERSION: &str = "2024-11-05";

// =============================================================================
// MCP Protocol Models
// =============================================================================

/// Standard JSON-RPC 2.0 Request envelope
#[derive(Debug, Deserialize)]
pub struct JsonRpcRequest {
    /// Protocol version (should be "2.0")
    #[allow(dead_code)]
    pub jsonrpc: Option<String>,

    /// Method name to invoke
    pub method: String,

    /// Parameters for the method
    pub params: Option<Value>,

    /// Request identifier
    pub id: Option<Value>,
}
