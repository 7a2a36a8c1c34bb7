//! Flow to TypeScript translation.
//!
//! `convert_program` takes a Flow-annotated program tree and returns the
//! TypeScript-annotated tree plus the warnings collected on the way:
//!
//! 1. `Converter::convert` translates every top-level statement.
//! 2. `TreeRewriter` walks the result and translates the Flow syntax the
//!    first pass could not reach.
//! 3. The `@flow` pragma is removed (unless disabled).
//!
//! Lossy translations are warnings. Constructs with no translation are a
//! `ConvertError` and no tree is returned.

pub mod converter;
pub use converter::{Converter, TypePosition};

mod declarations;
mod types;

pub mod error;
pub use error::ConvertError;

pub mod fidelity;

pub mod pragma;
pub use pragma::strip_flow_pragma;

pub mod rewrite;
pub use rewrite::{TreeRewriter, is_convertible};

use flowts_ast::Node;
use flowts_common::{Diagnostic, Warnings};

/// Options for `convert_program`.
#[derive(Clone, Debug)]
pub struct ConvertOptions {
    /// Remove the `// @flow` pragma from the output
    pub strip_flow_pragma: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        ConvertOptions {
            strip_flow_pragma: true,
        }
    }
}

/// A translated program.
#[derive(Clone, Debug)]
pub struct Conversion {
    pub ast: Node,
    /// Lossy translations, in detection order
    pub warnings: Vec<Diagnostic>,
}

/// Translate a whole program (a `File` or `Program` node).
pub fn convert_program(
    program: Node,
    options: &ConvertOptions,
) -> Result<Conversion, ConvertError> {
    let span = tracing::info_span!("convert_program", root = program.kind_name());
    let _enter = span.enter();

    let mut warnings = Warnings::new();
    let mut converter = Converter::new(&mut warnings);
    let mut ast = converter.convert(program)?;
    let replaced = TreeRewriter::new(&mut converter).rewrite(&mut ast)?;

    if options.strip_flow_pragma && strip_flow_pragma(&mut ast) {
        tracing::debug!("removed @flow pragma");
    }
    tracing::debug!(replaced, warnings = warnings.len(), "translated program");

    Ok(Conversion {
        ast,
        warnings: warnings.into_vec(),
    })
}

#[cfg(test)]
#[path = "../tests/support.rs"]
mod test_support;

#[cfg(test)]
#[path = "../tests/convert_program.rs"]
mod tests;
