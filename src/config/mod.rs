//! Config schema and overlay rules
//!
//! One struct carries the whole schema: clap derives the CLI surface from it
//! and serde derives the YAML decoding, so both input paths resolve identical
//! keys to identical fields. CLI-only fields are `#[serde(skip)]` and never
//! decode from a file.

mod file;

use std::path::PathBuf;

use alloy::primitives::{Address, B256};
use clap::Parser;
use serde::Deserialize;

/// Runtime configuration, built once from the config file and once from the
/// CLI, then merged with [`Config::overlay`].
#[derive(Debug, Clone, Default, PartialEq, Parser, Deserialize)]
#[command(name = "ethlogfilter", version, about = "Fetch and filter EVM event logs from a node")]
#[command(after_help = r#"EXAMPLES:
    # All logs from a contract over a block range
    ethlogfilter -n https://eth.llamarpc.com \
                 -a 0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48 \
                 -f 18000000 -t 18001000

    # Transfer events in a single block, mirrored to a file
    ethlogfilter -n wss://eth.example.org -b 18000500 \
                 --topics 0xddf252ad1be2c89b69c2b068fc378daa952ba7f163c4a11628f55a4df523b3ef \
                 -o transfers.json

CONFIG FILE:
    Default: ~/.config/ethlogfilter/config.yaml
"#)]
#[serde(default)]
pub struct Config {
    /// Config file to read
    #[arg(short, long = "config", value_name = "FILE")]
    #[serde(skip)]
    pub config_file: Option<PathBuf>,

    /// Verbose output (CLI only; a config file entry is ignored)
    #[arg(short, long)]
    #[serde(skip)]
    pub verbose: bool,

    /// Write the JSON output to this file as well as stdout
    #[arg(short, long = "outfile", value_name = "FILE")]
    #[serde(skip)]
    pub output_file: Option<PathBuf>,

    /// HTTP or WS URL of the node
    #[arg(short, long, value_name = "NODE_URL")]
    pub node_url: Option<String>,

    /// Contract addresses emitting the logs
    #[arg(short, long, num_args = 1.., value_name = "ADDR")]
    pub addresses: Vec<Address>,

    /// Log topics to match at topic position 0
    #[arg(long, num_args = 1.., value_name = "TOPIC")]
    pub topics: Vec<B256>,

    /// Keep only logs emitted by these transactions
    #[arg(short = 'x', long = "tx-hashes", num_args = 1.., value_name = "HASH")]
    pub tx_hashes: Vec<B256>,

    /// Filter from this block (0 leaves the lower bound open)
    #[arg(short, long, value_name = "FROM_BLOCK", default_value = "0")]
    pub from_block: u64,

    /// Filter to this block (0 leaves the upper bound open)
    #[arg(short, long, value_name = "TO_BLOCK", default_value = "0")]
    pub to_block: u64,

    /// Filter logs from exactly this block (overrides --from-block and --to-block)
    #[arg(short = 'b', long = "block", value_name = "LOG_BLOCK", default_value = "0")]
    #[serde(rename = "block")]
    pub log_block: u64,
}

impl Config {
    /// Merge a file-derived config with a CLI-derived one.
    ///
    /// The CLI side wins per field whenever it carries a value: nonempty for
    /// strings and lists, nonzero for block numbers. Lists are replaced
    /// whole, never element-merged. `config_file`, `verbose` and
    /// `output_file` are CLI-only and taken from the CLI side unconditionally.
    pub fn overlay(file: Self, cli: Self) -> Self {
        Self {
            config_file: cli.config_file,
            verbose: cli.verbose,
            output_file: cli.output_file,
            node_url: cli.node_url.filter(|u| !u.is_empty()).or(file.node_url),
            addresses: if cli.addresses.is_empty() {
                file.addresses
            } else {
                cli.addresses
            },
            topics: if cli.topics.is_empty() {
                file.topics
            } else {
                cli.topics
            },
            tx_hashes: if cli.tx_hashes.is_empty() {
                file.tx_hashes
            } else {
                cli.tx_hashes
            },
            from_block: if cli.from_block != 0 {
                cli.from_block
            } else {
                file.from_block
            },
            to_block: if cli.to_block != 0 {
                cli.to_block
            } else {
                file.to_block
            },
            log_block: if cli.log_block != 0 {
                cli.log_block
            } else {
                file.log_block
            },
        }
    }

    /// Effective node URL, if one was provided anywhere.
    pub fn node_url(&self) -> Option<&str> {
        self.node_url.as_deref().filter(|u| !u.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(byte: u8) -> Address {
        Address::repeat_byte(byte)
    }

    fn hash(byte: u8) -> B256 {
        B256::repeat_byte(byte)
    }

    #[test]
    fn test_cli_overrides_file() {
        let file = Config {
            node_url: Some("http://file:8545".to_string()),
            addresses: vec![addr(0x01)],
            topics: vec![hash(0x02)],
            tx_hashes: vec![hash(0x03)],
            from_block: 1,
            to_block: 2,
            log_block: 3,
            ..Config::default()
        };
        let cli = Config {
            node_url: Some("http://cli:8545".to_string()),
            addresses: vec![addr(0x11)],
            topics: vec![hash(0x12)],
            tx_hashes: vec![hash(0x13)],
            from_block: 11,
            to_block: 12,
            log_block: 13,
            ..Config::default()
        };

        let merged = Config::overlay(file, cli.clone());
        assert_eq!(merged, cli);
    }

    #[test]
    fn test_file_fills_cli_gaps() {
        let file = Config {
            node_url: Some("http://file:8545".to_string()),
            addresses: vec![addr(0x01), addr(0x02)],
            topics: vec![hash(0x03)],
            tx_hashes: vec![hash(0x04)],
            from_block: 100,
            to_block: 200,
            log_block: 150,
            ..Config::default()
        };

        let merged = Config::overlay(file.clone(), Config::default());
        assert_eq!(merged, file);
    }

    #[test]
    fn test_node_url_cli_wins_file_keeps_rest() {
        // File supplies the block range, CLI only swaps the node.
        let file = Config {
            node_url: Some("http://f:8545".to_string()),
            from_block: 10,
            ..Config::default()
        };
        let cli = Config {
            node_url: Some("http://c:8545".to_string()),
            ..Config::default()
        };

        let merged = Config::overlay(file, cli);
        assert_eq!(merged.node_url.as_deref(), Some("http://c:8545"));
        assert_eq!(merged.from_block, 10);
    }

    #[test]
    fn test_empty_cli_node_url_falls_back_to_file() {
        let file = Config {
            node_url: Some("http://f:8545".to_string()),
            ..Config::default()
        };
        let cli = Config {
            node_url: Some(String::new()),
            ..Config::default()
        };

        let merged = Config::overlay(file, cli);
        assert_eq!(merged.node_url.as_deref(), Some("http://f:8545"));
    }

    #[test]
    fn test_verbose_is_cli_only() {
        let cli = Config {
            verbose: true,
            ..Config::default()
        };
        assert!(Config::overlay(Config::default(), cli).verbose);

        // Nothing a file config carries can switch verbose on.
        let file = Config {
            verbose: true,
            ..Config::default()
        };
        assert!(!Config::overlay(file, Config::default()).verbose);
    }

    #[test]
    fn test_output_file_is_cli_only() {
        let file = Config {
            output_file: Some(PathBuf::from("/tmp/from-file.json")),
            ..Config::default()
        };
        let merged = Config::overlay(file, Config::default());
        assert_eq!(merged.output_file, None);

        let cli = Config {
            output_file: Some(PathBuf::from("/tmp/out.json")),
            ..Config::default()
        };
        let merged = Config::overlay(Config::default(), cli);
        assert_eq!(merged.output_file, Some(PathBuf::from("/tmp/out.json")));
    }

    #[test]
    fn test_lists_replace_whole() {
        let file = Config {
            addresses: vec![addr(0x01), addr(0x02)],
            ..Config::default()
        };
        let cli = Config {
            addresses: vec![addr(0x03)],
            ..Config::default()
        };

        let merged = Config::overlay(file, cli);
        assert_eq!(merged.addresses, vec![addr(0x03)]);
    }

    #[test]
    fn test_both_sides_empty_yield_default() {
        let merged = Config::overlay(Config::default(), Config::default());
        assert_eq!(merged, Config::default());
        assert_eq!(merged.node_url(), None);
    }

    #[test]
    fn test_parse_basic_flags() {
        let cfg = Config::try_parse_from([
            "ethlogfilter",
            "--node-url",
            "http://n:8545",
            "--from-block",
            "100",
            "--to-block",
            "200",
            "-a",
            "0x1111111111111111111111111111111111111111",
        ])
        .unwrap();

        assert_eq!(cfg.node_url.as_deref(), Some("http://n:8545"));
        assert_eq!(cfg.from_block, 100);
        assert_eq!(cfg.to_block, 200);
        assert_eq!(cfg.addresses, vec![addr(0x11)]);
        assert!(cfg.topics.is_empty());
        assert!(!cfg.verbose);
    }

    #[test]
    fn test_parse_multi_value_lists() {
        let cfg = Config::try_parse_from([
            "ethlogfilter",
            "-a",
            "0x1111111111111111111111111111111111111111",
            "0x2222222222222222222222222222222222222222",
            "-x",
            "0x3333333333333333333333333333333333333333333333333333333333333333",
        ])
        .unwrap();

        assert_eq!(cfg.addresses, vec![addr(0x11), addr(0x22)]);
        assert_eq!(cfg.tx_hashes, vec![hash(0x33)]);
    }

    #[test]
    fn test_parse_rejects_malformed_hex() {
        assert!(Config::try_parse_from(["ethlogfilter", "-a", "0x1234"]).is_err());
        assert!(Config::try_parse_from(["ethlogfilter", "--topics", "nothex"]).is_err());
    }

    #[test]
    fn test_unset_flags_leave_zero_values() {
        let cfg = Config::try_parse_from(["ethlogfilter"]).unwrap();
        assert_eq!(cfg, Config::default());
    }
}
