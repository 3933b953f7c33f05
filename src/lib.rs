//! ethlogfilter - Fetch and filter EVM event logs
//!
//! A small CLI and library for pulling event logs from an Ethereum-compatible
//! node with a single `eth_getLogs` query, narrowing the result by
//! transaction hash, and emitting the logs as JSON.
//!
//! # Example
//!
//! ```rust,no_run
//! use ethlogfilter::{query, Config, LogFetcher};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config {
//!         node_url: Some("https://eth.llamarpc.com".to_string()),
//!         from_block: 18_000_000,
//!         to_block: 18_001_000,
//!         ..Config::default()
//!     };
//!
//!     let fetcher = LogFetcher::connect(&config).await?;
//!     let logs = fetcher.fetch(&query::build(&config)).await?;
//!
//!     println!("Fetched {} logs", logs.len());
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod fetcher;
pub mod output;
pub mod query;

// Re-exports for convenience
pub use config::Config;
pub use error::{ConfigError, Error, Result, RpcError};
pub use fetcher::LogFetcher;
pub use output::{emit, filter_by_tx_hashes};
