//! Server configuration
//!
//! All settings come from `TAXONOMY_*` environment variables, with defaults
//! suited to local development next to a frontend on port 3000.

use axum::http::HeaderValue;
use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};
use taxonomy_core::{TaxonomyError, TaxonomySeed};
use thiserror::Error;
use tracing::Level;

pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:3000";

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{var} is invalid: {reason}")]
    InvalidVar { var: &'static str, reason: String },

    #[error("Failed to read seed file {path}: {source}")]
    SeedRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse seed file {path}: {source}")]
    SeedParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Seed file {path} is invalid: {source}")]
    SeedInvalid {
        path: PathBuf,
        source: TaxonomyError,
    },
}

/// Taxonomy server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind
    pub host: IpAddr,
    /// Port to bind
    pub port: u16,
    /// Single origin allowed to call the API from a browser
    pub allowed_origin: HeaderValue,
    /// JSON seed for the registry; `None` starts empty
    pub seed_path: Option<PathBuf>,
    /// Maximum tracing level
    pub log_level: Level,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: DEFAULT_PORT,
            allowed_origin: HeaderValue::from_static(DEFAULT_ALLOWED_ORIGIN),
            seed_path: None,
            log_level: Level::INFO,
        }
    }
}

impl ServerConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(host) = lookup("TAXONOMY_HOST") {
            config.host = host.parse().map_err(|e: std::net::AddrParseError| {
                ConfigError::InvalidVar {
                    var: "TAXONOMY_HOST",
                    reason: e.to_string(),
                }
            })?;
        }

        if let Some(port) = lookup("TAXONOMY_PORT") {
            config.port = port.parse().map_err(|e: std::num::ParseIntError| {
                ConfigError::InvalidVar {
                    var: "TAXONOMY_PORT",
                    reason: e.to_string(),
                }
            })?;
        }

        if let Some(origin) = lookup("TAXONOMY_ALLOWED_ORIGIN") {
            config.allowed_origin =
                HeaderValue::from_str(&origin).map_err(|e| ConfigError::InvalidVar {
                    var: "TAXONOMY_ALLOWED_ORIGIN",
                    reason: e.to_string(),
                })?;
        }

        config.seed_path = lookup("TAXONOMY_SEED_PATH")
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);

        // An unparseable level falls back to INFO
        config.log_level = lookup("TAXONOMY_LOG_LEVEL")
            .and_then(|level| level.parse().ok())
            .unwrap_or(Level::INFO);

        Ok(config)
    }

    /// Socket address the server binds to
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Load the configured seed, or an empty one when no path is set
    pub fn load_seed(&self) -> Result<TaxonomySeed, ConfigError> {
        match &self.seed_path {
            Some(path) => load_seed(path),
            None => Ok(TaxonomySeed::default()),
        }
    }
}

/// Read and validate a JSON seed file
pub fn load_seed(path: &Path) -> Result<TaxonomySeed, ConfigError> {
    let json = std::fs::read_to_string(path).map_err(|source| ConfigError::SeedRead {
        path: path.to_path_buf(),
        source,
    })?;

    let seed = TaxonomySeed::from_json(&json).map_err(|source| ConfigError::SeedParse {
        path: path.to_path_buf(),
        source,
    })?;

    seed.validate().map_err(|source| ConfigError::SeedInvalid {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(seed)
}
