//! Server configuration from flags and environment.
//!
//! ```bash
//! PORTFOLIO_ADDR=0.0.0.0:8080        # listen address
//! PORT=3000                          # overrides the port of PORTFOLIO_ADDR
//! PORTFOLIO_DATA_FILE=projects.json  # persist projects; in-memory when unset
//! RUST_LOG=projects_server=debug     # takes precedence over --log-level
//! ```

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use thiserror::Error;

#[derive(Debug, Clone, Parser)]
#[command(name = "projects-server")]
#[command(about = "Portfolio projects store")]
pub struct ServerConfig {
    /// Listen address
    #[arg(long, env = "PORTFOLIO_ADDR", default_value = "127.0.0.1:3000")]
    pub addr: String,

    /// Port override for the listen address
    #[arg(long, env = "PORT")]
    pub port: Option<u16>,

    /// JSON file the projects are persisted to
    #[arg(long, env = "PORTFOLIO_DATA_FILE")]
    pub data_file: Option<PathBuf>,

    /// Default log level when RUST_LOG is not set
    #[arg(long, env = "PORTFOLIO_LOG", default_value = "info")]
    pub log_level: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid listen address {addr:?}: {source}")]
    InvalidAddr {
        addr: String,
        #[source]
        source: std::net::AddrParseError,
    },
}

impl ServerConfig {
    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        let mut addr: SocketAddr = self.addr.parse().map_err(|source| ConfigError::InvalidAddr {
            addr: self.addr.clone(),
            source,
        })?;
        if let Some(port) = self.port {
            addr.set_port(port);
        }
        Ok(addr)
    }
}
