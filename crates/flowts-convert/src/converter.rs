//! Converter - the Flow to TypeScript translator
//!
//! `Converter` maps one Flow node to its TypeScript counterpart. It is split
//! across three files:
//!
//! - this file: the entry point, statement-level dispatch, and the shared
//!   recursion guard
//! - `types.rs`: type expressions (`?T`, object types, function types, ...)
//! - `declarations.rs`: declarations and the value-level nodes that carry
//!   types (type aliases, interfaces, functions, imports, casts, ...)
//!
//! Every replacement carries the metadata of the node it replaces (see
//! `fidelity`). Nodes that are already TypeScript, or that carry no Flow
//! syntax, are returned as they are.
//!
//! # Two passes
//!
//! `convert` recurses from `File`/`Program` into each top-level statement.
//! Flow syntax below value-level code (a cast inside a call, the
//! declaration inside `export type`) is only reachable by a full traversal;
//! `TreeRewriter` does that walk and calls back into `convert`.

use flowts_ast::{Node, NodeKind, NodeMeta};
use flowts_common::limits::{MAX_TRAVERSAL_DEPTH, STACK_RED_ZONE, STACK_SEGMENT_SIZE};
use flowts_common::{At, NameSet, Warnings};

use crate::error::{ConvertError, Result};
use crate::fidelity;
use crate::rewrite::is_convertible;

/// Where a type expression sits.
///
/// Only `void` cares: it stays `void` as a function's return type and
/// becomes `undefined` everywhere else.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TypePosition {
    #[default]
    Value,
    FunctionReturn,
}

/// Translates Flow nodes, reporting lossy constructs to a shared collector.
pub struct Converter<'w> {
    pub(crate) warnings: &'w mut Warnings,
    /// Current recursion depth for stack overflow protection
    depth: u32,
}

impl<'w> Converter<'w> {
    pub fn new(warnings: &'w mut Warnings) -> Self {
        Converter { warnings, depth: 0 }
    }

    pub fn warnings(&self) -> &Warnings {
        &*self.warnings
    }

    /// Translate a file, a program, a statement, a declaration or a type.
    ///
    /// Files and programs are rebuilt around their translated statements.
    /// Anything `is_convertible` rejects is returned unchanged.
    pub fn convert(&mut self, node: Node) -> Result<Node> {
        let Node { meta, kind } = node;
        match kind {
            NodeKind::File {
                program,
                comments,
                extra,
            } => {
                let program = Box::new(self.convert(*program)?);
                Ok(Node {
                    meta,
                    kind: NodeKind::File {
                        program,
                        comments,
                        extra,
                    },
                })
            }
            NodeKind::Program {
                body,
                directives,
                source_type,
                extra,
            } => {
                let body = body
                    .into_iter()
                    .map(|statement| self.convert(statement))
                    .collect::<Result<Vec<_>>>()?;
                Ok(Node {
                    meta,
                    kind: NodeKind::Program {
                        body,
                        directives,
                        source_type,
                        extra,
                    },
                })
            }
            kind => {
                let node = Node { meta, kind };
                if !is_convertible(&node) {
                    return Ok(node);
                }
                let at = At::from(node.loc());
                self.nested(at, |this| this.convert_node(node))
            }
        }
    }

    /// Dispatch a convertible node on its kind.
    fn convert_node(&mut self, node: Node) -> Result<Node> {
        tracing::trace!(kind = node.kind_name(), "convert");
        let Node { meta, kind } = node;
        let loc = meta.loc;
        let replacement = match kind {
            NodeKind::TypeAlias {
                id,
                type_parameters,
                right,
            } => self.type_alias(id, type_parameters, *right)?,
            NodeKind::OpaqueType {
                id,
                type_parameters,
                impltype,
                ..
            } => self.opaque_type(loc.as_ref(), id, type_parameters, *impltype)?,
            NodeKind::InterfaceDeclaration {
                id,
                type_parameters,
                extends,
                body,
            } => self.interface(id, type_parameters, extends, *body)?,
            NodeKind::InterfaceExtends {
                id,
                type_parameters,
            } => self.heritage(*id, type_parameters)?,
            NodeKind::TypeParameterDeclaration { params } => {
                self.type_parameter_declaration(params)?
            }
            NodeKind::TypeParameter {
                name,
                bound,
                variance,
                default,
            } => self.type_parameter(loc.as_ref(), name, bound, variance, default)?,
            NodeKind::TypeParameterInstantiation { params } => {
                self.type_arguments(params, TypePosition::Value)?
            }
            NodeKind::TypeAnnotation { type_annotation } => Node::ts_type_annotation(
                self.convert_type(*type_annotation, TypePosition::Value)?,
            ),
            NodeKind::ObjectTypeProperty {
                key,
                value,
                optional,
                variance,
                kind,
                ..
            } => self.property_signature(loc.as_ref(), key, *value, optional, variance, kind)?,
            NodeKind::ObjectTypeIndexer {
                id,
                key,
                value,
                variance,
            } => self.index_signature(
                loc.as_ref(),
                id,
                *key,
                *value,
                variance,
                &mut NameSet::new(),
            )?,
            NodeKind::TypeCastExpression {
                expression,
                type_annotation,
            } => self.type_cast(expression, *type_annotation)?,
            NodeKind::FunctionDeclaration(function) => {
                Node::new(NodeKind::FunctionDeclaration(self.function_like(function)?))
            }
            NodeKind::FunctionExpression(function) => {
                Node::new(NodeKind::FunctionExpression(self.function_like(function)?))
            }
            NodeKind::ArrowFunctionExpression(function) => {
                Node::new(NodeKind::ArrowFunctionExpression(self.function_like(function)?))
            }
            NodeKind::ClassMethod(function) => {
                Node::new(NodeKind::ClassMethod(self.function_like(function)?))
            }
            NodeKind::ClassPrivateMethod(function) => {
                Node::new(NodeKind::ClassPrivateMethod(self.function_like(function)?))
            }
            NodeKind::ObjectMethod(function) => {
                Node::new(NodeKind::ObjectMethod(self.function_like(function)?))
            }
            NodeKind::ImportDeclaration {
                specifiers,
                source,
                import_kind,
                extra,
            } => Self::import_declaration(specifiers, source, import_kind, extra),
            NodeKind::ExportNamedDeclaration {
                declaration,
                specifiers,
                source,
                export_kind,
                extra,
            } => Self::export_declaration(declaration, specifiers, source, export_kind, extra),
            NodeKind::ClassProperty {
                key,
                value,
                type_annotation,
                variance,
                computed,
                is_static,
                readonly,
                extra,
            } => self.class_property(
                loc.as_ref(),
                key,
                value,
                type_annotation,
                variance,
                computed,
                is_static,
                readonly,
                extra,
            )?,
            kind @ (NodeKind::ObjectTypeCallProperty { .. }
            | NodeKind::ObjectTypeSpreadProperty { .. }
            | NodeKind::FunctionTypeParam { .. }
            | NodeKind::Variance { .. }
            | NodeKind::ClassImplements { .. }
            | NodeKind::DeclareClass { .. }
            | NodeKind::DeclareFunction { .. }
            | NodeKind::DeclareInterface { .. }
            | NodeKind::DeclareModule { .. }
            | NodeKind::DeclareTypeAlias { .. }
            | NodeKind::DeclareVariable { .. }) => {
                return Err(unsupported(&kind, &meta));
            }
            // Everything else that is convertible is a type expression.
            kind => return self.convert_type(Node { meta, kind }, TypePosition::Value),
        };
        tracing::debug!(
            kind = replacement.kind_name(),
            line = loc.map(|loc| loc.start.line),
            "replaced"
        );
        Ok(fidelity::carry(meta, replacement))
    }

    /// Run `f` one level deeper, failing once the nesting limit is reached.
    pub(crate) fn nested<T>(&mut self, at: At, f: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        if self.depth >= MAX_TRAVERSAL_DEPTH {
            return Err(ConvertError::NestingTooDeep {
                limit: MAX_TRAVERSAL_DEPTH,
                at,
            });
        }
        self.depth += 1;
        let result = grow_stack(|| f(self));
        self.depth -= 1;
        result
    }
}

/// Run `f`, continuing on a new stack segment when the current one is
/// nearly used up.
pub(crate) fn grow_stack<T>(f: impl FnOnce() -> T) -> T {
    stacker::maybe_grow(STACK_RED_ZONE, STACK_SEGMENT_SIZE, f)
}

/// Fatal error for a Flow construct with no translation.
pub(crate) fn unsupported(kind: &NodeKind, meta: &NodeMeta) -> ConvertError {
    ConvertError::Unsupported {
        kind: kind.kind_name().to_string(),
        at: At::from(meta.loc.as_ref()),
    }
}

/// Fatal error for a node that does not belong where it was found.
pub(crate) fn unexpected(kind: &NodeKind, meta: &NodeMeta) -> ConvertError {
    ConvertError::UnexpectedNode {
        kind: kind.kind_name().to_string(),
        at: At::from(meta.loc.as_ref()),
    }
}

#[cfg(test)]
#[path = "../tests/converter.rs"]
mod tests;
