//! Second pass: a full pre-order walk that translates whatever Flow syntax
//! the top-level pass could not reach.
//!
//! The top-level pass only looks at statements. Flow syntax nested in
//! value-level code (a cast in a call argument, an annotated arrow in an
//! object literal, the declaration inside `export type`) is found here.
//!
//! Both passes decide what to translate with the same predicate,
//! `is_convertible`. A node that is already TypeScript never matches it, so
//! nothing is translated twice.

use flowts_ast::{Algebra, ExportKind, Function, ImportKind, Node, NodeKind};
use flowts_common::At;
use flowts_common::limits::MAX_TRAVERSAL_DEPTH;

use crate::converter::{Converter, grow_stack};
use crate::error::{ConvertError, Result};

/// Whether `node` still holds Flow syntax the converter must replace.
///
/// - every Flow-only kind
/// - functions and methods whose signature carries Flow annotations
/// - imports with a `type` modifier on the declaration or a specifier
/// - `export type`
/// - class properties with a variance sigil
pub fn is_convertible(node: &Node) -> bool {
    match &node.kind {
        NodeKind::FunctionDeclaration(function)
        | NodeKind::FunctionExpression(function)
        | NodeKind::ArrowFunctionExpression(function)
        | NodeKind::ClassMethod(function)
        | NodeKind::ClassPrivateMethod(function)
        | NodeKind::ObjectMethod(function) => has_flow_signature(function),
        NodeKind::ImportDeclaration {
            specifiers,
            import_kind,
            ..
        } => *import_kind == Some(ImportKind::Type) || specifiers.iter().any(is_type_specifier),
        NodeKind::ExportNamedDeclaration { export_kind, .. } => {
            *export_kind == Some(ExportKind::Type)
        }
        NodeKind::ClassProperty { variance, .. } => variance.is_some(),
        _ => node.algebra() == Algebra::Source,
    }
}

fn is_flow(child: Option<&Node>) -> bool {
    child.is_some_and(|child| child.algebra() == Algebra::Source)
}

fn has_flow_signature(function: &Function) -> bool {
    is_flow(function.type_parameters.as_deref())
        || is_flow(function.return_type.as_deref())
        || function.params.iter().any(|param| match &param.kind {
            NodeKind::Identifier {
                type_annotation, ..
            } => is_flow(type_annotation.as_deref()),
            _ => false,
        })
}

fn is_type_specifier(specifier: &Node) -> bool {
    matches!(
        specifier.kind,
        NodeKind::ImportSpecifier {
            import_kind: Some(ImportKind::Type),
            ..
        }
    )
}

/// Walks a tree, replacing every convertible node in place.
pub struct TreeRewriter<'c, 'w> {
    converter: &'c mut Converter<'w>,
    replaced: usize,
}

impl<'c, 'w> TreeRewriter<'c, 'w> {
    pub fn new(converter: &'c mut Converter<'w>) -> Self {
        TreeRewriter {
            converter,
            replaced: 0,
        }
    }

    /// Rewrite `root` and everything below it. Returns the number of nodes
    /// replaced.
    ///
    /// Traversal continues into each replacement, so value-level children
    /// of a translated node (the expression of a cast, the body of a
    /// function) are visited too.
    pub fn rewrite(mut self, root: &mut Node) -> Result<usize> {
        self.visit(root, 0)?;
        Ok(self.replaced)
    }

    fn visit(&mut self, node: &mut Node, depth: u32) -> Result<()> {
        if depth >= MAX_TRAVERSAL_DEPTH {
            return Err(ConvertError::NestingTooDeep {
                limit: MAX_TRAVERSAL_DEPTH,
                at: At::from(node.loc()),
            });
        }

        if is_convertible(node) {
            tracing::debug!(kind = node.kind_name(), depth, "rewrite");
            let original = node.take();
            *node = self.converter.convert(original)?;
            self.replaced += 1;
        }

        grow_stack(|| {
            for child in node.children_mut() {
                self.visit(child, depth + 1)?;
            }
            Ok(())
        })
    }
}

#[cfg(test)]
#[path = "../tests/rewrite.rs"]
mod tests;
