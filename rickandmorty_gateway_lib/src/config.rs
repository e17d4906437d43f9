//! Runtime configuration, resolved once by the binary and passed in.

use std::net::{Ipv4Addr, SocketAddr};
use std::time::Duration;

use rickandmorty_api::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    /// Port to listen on. Also determines the allowed CORS origin.
    pub port: u16,
    /// Root of the upstream API.
    pub upstream_base_url: String,
    /// Timeout for each upstream request.
    pub upstream_timeout: Duration,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            upstream_base_url: DEFAULT_BASE_URL.to_string(),
            upstream_timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl GatewayConfig {
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }

    /// The single origin browsers may call from.
    pub fn cors_origin(&self) -> String {
        format!("http://localhost:{}", self.port)
    }
}
