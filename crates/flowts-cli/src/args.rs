use clap::{Parser, ValueEnum};
use serde::Deserialize;
use std::path::PathBuf;

/// CLI arguments for the flowts binary.
#[derive(Parser, Debug)]
#[command(
    name = "flowts",
    version,
    about = "Translate Flow-annotated Babel ASTs into TypeScript ASTs"
)]
pub struct CliArgs {
    /// Babel AST JSON files, or directories to search for them.
    #[arg(value_name = "PATH", required = true)]
    pub inputs: Vec<PathBuf>,

    /// Write translated files here instead of next to their inputs.
    #[arg(short = 'o', long = "out-dir", alias = "outDir")]
    pub out_dir: Option<PathBuf>,

    /// Path to a flowts.json config file.
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Keep the `// @flow` pragma comment.
    #[arg(long = "no-strip-pragma")]
    pub no_strip_pragma: bool,

    /// Exit with status 2 when any translation was lossy.
    #[arg(long = "deny-warnings")]
    pub deny_warnings: bool,

    /// Pretty-print the output JSON.
    #[arg(long)]
    pub pretty: bool,

    /// How warnings and errors are reported.
    #[arg(long = "diagnostics-format", value_enum, ignore_case = true)]
    pub diagnostics_format: Option<DiagnosticsFormat>,

    /// Disable colored output.
    #[arg(long = "no-color")]
    pub no_color: bool,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticsFormat {
    /// One line per warning on stderr
    #[default]
    Text,
    /// A JSON report on stdout
    Json,
}

#[cfg(test)]
#[path = "../tests/args.rs"]
mod tests;
