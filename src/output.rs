//! Post-filtering and JSON output

use std::io::Write;
use std::path::Path;

use alloy::primitives::B256;
use alloy::rpc::types::Log;

use crate::error::Result;

/// Keep only logs emitted by one of the given transactions
///
/// An empty hash list keeps everything. With a nonempty list, logs that
/// carry no transaction hash (pending logs) are dropped.
pub fn filter_by_tx_hashes(logs: Vec<Log>, tx_hashes: &[B256]) -> Vec<Log> {
    if tx_hashes.is_empty() {
        return logs;
    }

    logs.into_iter()
        .filter(|log| {
            log.transaction_hash
                .is_some_and(|hash| tx_hashes.contains(&hash))
        })
        .collect()
}

/// Serialize logs as a single JSON array
///
/// The array goes to `writer` first, newline terminated. With `mirror` set,
/// the same bytes are also written to that path; a failure there is only
/// warned about since the primary output already succeeded.
pub fn emit<W: Write>(writer: &mut W, logs: &[Log], mirror: Option<&Path>) -> Result<()> {
    let mut json = serde_json::to_vec(logs)?;
    json.push(b'\n');

    writer.write_all(&json)?;
    writer.flush()?;

    if let Some(path) = mirror {
        if let Err(e) = std::fs::write(path, &json) {
            tracing::warn!("failed to write output file {}: {}", path.display(), e);
        }
    }

    Ok(())
}
