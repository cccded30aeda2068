//! Server configuration, read from the command line with environment fallbacks

use clap::Parser;
use std::net::{IpAddr, SocketAddr};
use std::num::NonZeroUsize;

use crate::cart::models::DEFAULT_MAX_SIZE;

#[derive(Debug, Clone, Parser)]
#[command(name = "shopping-cart")]
#[command(about = "In-memory shopping cart server with REST and MCP endpoints.")]
pub struct Config {
    /// Address to bind
    #[arg(long, env = "CART_HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(long, env = "CART_PORT", default_value_t = 8000)]
    pub port: u16,

    /// Maximum number of items per cart
    #[arg(long, env = "CART_MAX_SIZE", default_value_t = DEFAULT_MAX_SIZE)]
    pub max_cart_size: NonZeroUsize,
}

impl Config {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
