//! Syntax tree for the flowts translator.
//!
//! One tree type covers both the Flow input and the TypeScript output:
//! - Node and kind definitions with their Babel JSON shape (`node`)
//! - Child enumeration and pre-order walks (`visit`)
//! - Constructors for the TypeScript nodes the translator emits (`builders`)
//! - JSON reading and writing (`json`)

pub mod node;
pub use node::{
    Algebra, ExportKind, Extra, Function, GenericField, GenericNode, ImportKind, MethodKind, Node,
    NodeKind, NodeMeta, PropertyKind, SourceType, TypeOperator, VarianceKind,
};

pub mod visit;
pub use visit::{Children, ChildrenMut};

pub mod builders;

pub mod json;
pub use json::{from_json_str, share_file_comments, to_json_string};

#[cfg(test)]
#[path = "../tests/node.rs"]
mod tests;
