//! Log output for the `flowts` binary.
//!
//! Nothing is installed unless `FLOWTS_LOG` (or `RUST_LOG`) holds a filter.
//! `FLOWTS_LOG_FORMAT` picks `text` (the default), `tree` or `json`. Output
//! goes to stderr.
//!
//! Events by target:
//!
//! - `flowts_cli`
//!   - `translating` (info): once per run, with the file count
//!   - `translation failed` (debug): an input stopped with an error
//!   - `using config` (debug): `flowts.json` was found in the working directory
//! - `flowts_convert`, inside one `convert_program` info span per file
//!   - `rewrite` (debug): the rewriter hands a node to the converter
//!   - `replaced` (debug): the TypeScript kind and line of a replacement
//!   - `convert` (trace): every dispatch, noisy on large inputs
//!   - `removed @flow pragma` and `translated program` (debug) close the span
//! - `flowts_common`
//!   - `lossy translation` (debug): a limitation warning was recorded
//!
//! With `FLOWTS_LOG_FORMAT=tree`, replacements nest under the file span that
//! produced them.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

/// Tracing output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Standard flat text lines (default).
    Text,
    /// Hierarchical indented tree via `tracing-tree`.
    Tree,
    /// Newline-delimited JSON objects.
    Json,
}

impl LogFormat {
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "tree" => Self::Tree,
            "json" => Self::Json,
            _ => Self::Text,
        }
    }

    fn from_env() -> Self {
        Self::parse(&std::env::var("FLOWTS_LOG_FORMAT").unwrap_or_default())
    }
}

/// Build an `EnvFilter` from `FLOWTS_LOG`, falling back to `RUST_LOG`.
fn build_filter() -> EnvFilter {
    if let Ok(val) = std::env::var("FLOWTS_LOG") {
        EnvFilter::builder().parse_lossy(val)
    } else {
        EnvFilter::from_default_env()
    }
}

/// Initialise the global tracing subscriber.
///
/// Does nothing when neither `FLOWTS_LOG` nor `RUST_LOG` is set. All output
/// goes to stderr so it never mixes with the JSON report on stdout.
pub fn init_tracing() {
    let has_flowts_log = std::env::var("FLOWTS_LOG").is_ok();
    let has_rust_log = std::env::var("RUST_LOG").is_ok();
    if !has_flowts_log && !has_rust_log {
        return;
    }

    let filter = build_filter();
    match LogFormat::from_env() {
        LogFormat::Tree => {
            let tree_layer = tracing_tree::HierarchicalLayer::default()
                .with_indent_amount(2)
                .with_indent_lines(true)
                .with_deferred_spans(true)
                .with_span_retrace(true)
                .with_targets(true);

            Registry::default().with(filter).with(tree_layer).init();
        }
        LogFormat::Json => {
            let json_layer = fmt::layer().json().with_writer(std::io::stderr);

            Registry::default().with(filter).with(json_layer).init();
        }
        LogFormat::Text => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_format_parsing() {
        assert_eq!(LogFormat::parse("tree"), LogFormat::Tree);
        assert_eq!(LogFormat::parse(" JSON "), LogFormat::Json);
        assert_eq!(LogFormat::parse(""), LogFormat::Text);
        assert_eq!(LogFormat::parse("fancy"), LogFormat::Text);
    }
}
