//! Application error type shared by the REST and MCP surfaces
//!
//! `CartError` covers the cart's own failures; `AppError` adds the request
//! level failures and knows how to turn itself into an HTTP response or a
//! JSON-RPC error code.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::cart::error::CartError;

/// JSON-RPC error code for domain failures (server-defined range)
pub const CART_ERROR_CODE: i32 = -32000;
/// JSON-RPC error code for invalid params
pub const INVALID_PARAMS_CODE: i32 = -32602;

/// Application layer errors - used by HTTP and MCP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Cart(#[from] CartError),

    #[error("Invalid arguments: {0}")]
    BadRequest(String),

    #[error("Unknown tool: {0}")]
    UnknownTool(String),
}

impl AppError {
    /// JSON-RPC error code reported for this error on the MCP endpoint
    pub fn rpc_code(&self) -> i32 {
        match self {
            AppError::Cart(_) => CART_ERROR_CODE,
            AppError::BadRequest(_) | AppError::UnknownTool(_) => INVALID_PARAMS_CODE,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// Error response body for JSON responses
#[derive(Serialize)]
struct ErrorResponse {
    error: &'static str,
    details: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match &self {
            AppError::Cart(CartError::CapacityExceeded { .. }) => {
                (StatusCode::CONFLICT, "Cart full")
            }
            AppError::Cart(CartError::KeyNotFound { .. }) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "Price not found")
            }
            AppError::BadRequest(_) | AppError::UnknownTool(_) => {
                (StatusCode::BAD_REQUEST, "Bad request")
            }
        };

        tracing::debug!(%status, "request failed: {}", self);

        (
            status,
            Json(ErrorResponse {
                error,
                details: self.to_string(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_exceeded_maps_to_conflict() {
        let response = AppError::from(CartError::CapacityExceeded { max_size: 5 }).into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_key_not_found_maps_to_unprocessable() {
        let err = AppError::from(CartError::KeyNotFound {
            item: "milk".into(),
        });
        assert_eq!(err.rpc_code(), CART_ERROR_CODE);
        assert_eq!(err.to_string(), "No price found for item 'milk'");
        assert_eq!(
            err.into_response().status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[test]
    fn test_bad_request_uses_invalid_params_code() {
        let err = AppError::BadRequest("missing field `items`".into());
        assert_eq!(err.rpc_code(), INVALID_PARAMS_CODE);
        assert!(err.to_string().starts_with("Invalid arguments"));
    }
}
