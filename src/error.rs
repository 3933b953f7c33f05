//! Error types for ethlogfilter

use std::path::PathBuf;

use alloy::transports::TransportError;
use thiserror::Error;

/// Main error type for the library
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration errors
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// RPC-related errors
    #[error("RPC error: {0}")]
    Rpc(#[from] RpcError),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not determine the user home directory")]
    HomeDirUnavailable,

    #[error("failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("missing required field: {0}")]
    MissingField(&'static str),
}

/// RPC-specific errors
#[derive(Error, Debug)]
pub enum RpcError {
    #[error("failed to connect to node {url}: {source}")]
    Dial {
        url: String,
        source: TransportError,
    },

    #[error("eth_getLogs failed: {0}")]
    GetLogs(#[from] TransportError),
}

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;
