//! eth_getLogs query construction

use alloy::rpc::types::Filter;

use crate::config::Config;

/// Build the `eth_getLogs` filter for a resolved config.
///
/// Zero block numbers and empty lists stay absent from the query so the node
/// applies its own defaults. A nonzero `log_block` pins both range bounds to
/// that block. Topics match at topic position 0 only. `tx_hashes` never
/// reaches the node; the hash filter runs client side after the fetch.
pub fn build(config: &Config) -> Filter {
    let mut filter = Filter::new();

    let (from_block, to_block) = if config.log_block != 0 {
        (config.log_block, config.log_block)
    } else {
        (config.from_block, config.to_block)
    };

    if from_block != 0 {
        filter = filter.from_block(from_block);
    }
    if to_block != 0 {
        filter = filter.to_block(to_block);
    }
    if !config.addresses.is_empty() {
        filter = filter.address(config.addresses.clone());
    }
    if !config.topics.is_empty() {
        filter = filter.event_signature(config.topics.clone());
    }

    filter
}
