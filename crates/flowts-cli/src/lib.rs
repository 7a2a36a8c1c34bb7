//! The `flowts` command-line driver.
//!
//! Reads Babel AST JSON produced by a Flow-aware parser, translates each file
//! with `flowts_convert::convert_program`, and writes the TypeScript AST JSON
//! for a printer to consume.

pub mod args;
pub mod config;
pub mod driver;
pub mod reporter;
pub mod tracing_config;
