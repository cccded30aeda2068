//! Shopping Cart Library
//!
//! This library provides a capacity-bounded shopping cart together with a
//! small HTTP service exposing it over REST and MCP (Model Context Protocol).

// Domain modules
pub mod cart;
pub mod mcp;

// Infrastructure
pub mod config;
pub mod error;
pub mod router;
