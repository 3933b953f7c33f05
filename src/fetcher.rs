//! Log fetching over a node connection

use alloy::providers::{DynProvider, Provider, ProviderBuilder};
use alloy::rpc::types::{Filter, Log};

use crate::config::Config;
use crate::error::{ConfigError, Result, RpcError};

/// Fetches logs from a single node
pub struct LogFetcher {
    /// Type-erased provider, HTTP or WS depending on the URL scheme
    provider: DynProvider,
}

impl LogFetcher {
    /// Connect to the node named by the config
    ///
    /// The transport follows the URL scheme: `http`/`https` or `ws`/`wss`.
    pub async fn connect(config: &Config) -> Result<Self> {
        let url = config
            .node_url()
            .ok_or(ConfigError::MissingField("node_url"))?;

        let provider = ProviderBuilder::new()
            .connect(url)
            .await
            .map_err(|source| RpcError::Dial {
                url: url.to_string(),
                source,
            })?;
        tracing::debug!(url, "connected to node");

        Ok(Self {
            provider: provider.erased(),
        })
    }

    /// Run a single eth_getLogs call
    pub async fn fetch(&self, filter: &Filter) -> Result<Vec<Log>> {
        let logs = self
            .provider
            .get_logs(filter)
            .await
            .map_err(RpcError::GetLogs)?;
        tracing::debug!(count = logs.len(), "eth_getLogs returned");
        Ok(logs)
    }
}
