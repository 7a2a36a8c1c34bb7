//! Declarations and the value-level nodes that carry types.
//!
//! These add the structure TypeScript needs around a translated type: alias
//! and interface declarations, type parameter lists, annotated function
//! signatures, `as` casts, and `import`/`export` with the `type` modifier
//! removed.

use flowts_ast::{ExportKind, Extra, Function, ImportKind, Node, NodeKind};
use flowts_common::{At, Limitation, SourceLocation};

use crate::converter::{Converter, TypePosition, unexpected, unsupported};
use crate::error::{ConvertError, Result};
use crate::fidelity;

impl Converter<'_> {
    // =========================================================================
    // Type aliases and interfaces
    // =========================================================================

    /// `type A<T> = R` as `type A<T> = R'`
    pub(crate) fn type_alias(
        &mut self,
        id: Box<Node>,
        type_parameters: Option<Box<Node>>,
        right: Node,
    ) -> Result<Node> {
        let type_parameters = self.convert_optional(type_parameters)?;
        let type_annotation = self.convert_type(right, TypePosition::Value)?;
        Ok(Node::new(NodeKind::TSTypeAliasDeclaration {
            id,
            type_parameters,
            type_annotation: Box::new(type_annotation),
            declare: false,
        }))
    }

    /// `opaque type A: S = R` as the transparent alias `type A = R'`.
    ///
    /// The supertype is dropped along with the opacity.
    pub(crate) fn opaque_type(
        &mut self,
        loc: Option<&SourceLocation>,
        id: Box<Node>,
        type_parameters: Option<Box<Node>>,
        impltype: Node,
    ) -> Result<Node> {
        self.warnings.report(Limitation::OpaqueType, loc);
        self.type_alias(id, type_parameters, impltype)
    }

    /// `interface A<T> extends B<T> { ... }`
    ///
    /// Spreads have no interface counterpart and are fatal.
    pub(crate) fn interface(
        &mut self,
        id: Box<Node>,
        type_parameters: Option<Box<Node>>,
        extends: Vec<Node>,
        body: Node,
    ) -> Result<Node> {
        let Node {
            meta: body_meta,
            kind: body_kind,
        } = body;
        let (properties, indexers) = match body_kind {
            NodeKind::ObjectTypeAnnotation {
                properties,
                indexers,
                call_properties,
                internal_slots,
                ..
            } => {
                if let Some(member) = call_properties.first().or(internal_slots.first()) {
                    return Err(unsupported(&member.kind, &member.meta));
                }
                if let Some(spread) = properties
                    .iter()
                    .find(|property| matches!(property.kind, NodeKind::ObjectTypeSpreadProperty { .. }))
                {
                    return Err(ConvertError::SpreadInInterface {
                        at: At::from(spread.loc()),
                    });
                }
                (properties, indexers)
            }
            kind => return Err(unexpected(&kind, &body_meta)),
        };

        let type_parameters = self.convert_optional(type_parameters)?;
        let extends = extends
            .into_iter()
            .map(|heritage| self.convert(heritage))
            .collect::<Result<Vec<_>>>()?;
        let (members, _) = self.object_members(properties, indexers)?;
        let body = fidelity::carry(body_meta, Node::new(NodeKind::TSInterfaceBody { body: members }));

        Ok(Node::new(NodeKind::TSInterfaceDeclaration {
            id,
            type_parameters,
            extends,
            body: Box::new(body),
        }))
    }

    /// One `extends` entry of an interface.
    pub(crate) fn heritage(
        &mut self,
        id: Node,
        type_parameters: Option<Box<Node>>,
    ) -> Result<Node> {
        let expression = self.type_name(id)?;
        let type_parameters = self.convert_optional(type_parameters)?;
        Ok(Node::new(NodeKind::TSExpressionWithTypeArguments {
            expression: Box::new(expression),
            type_parameters,
        }))
    }

    // =========================================================================
    // Type parameters
    // =========================================================================

    /// Translate an optional child: a `<...>` list or a `: T` annotation.
    pub(crate) fn convert_optional(
        &mut self,
        child: Option<Box<Node>>,
    ) -> Result<Option<Box<Node>>> {
        child
            .map(|child| self.convert(*child).map(Box::new))
            .transpose()
    }

    pub(crate) fn type_parameter_declaration(&mut self, params: Vec<Node>) -> Result<Node> {
        let params = params
            .into_iter()
            .map(|param| self.convert(param))
            .collect::<Result<Vec<_>>>()?;
        Ok(Node::new(NodeKind::TSTypeParameterDeclaration { params }))
    }

    /// `+T: Bound = Default`. The bound becomes a constraint; variance is
    /// dropped with a warning.
    pub(crate) fn type_parameter(
        &mut self,
        loc: Option<&SourceLocation>,
        name: Option<String>,
        bound: Option<Box<Node>>,
        variance: Option<Box<Node>>,
        default: Option<Box<Node>>,
    ) -> Result<Node> {
        let Some(name) = name else {
            return Err(ConvertError::MissingTypeParameterName {
                at: At::from(loc),
            });
        };
        if variance.is_some() {
            self.warnings.report(Limitation::TypeParameterVariance, loc);
        }
        let constraint = bound
            .map(|bound| self.convert_type(*bound, TypePosition::Value).map(Box::new))
            .transpose()?;
        let default = default
            .map(|default| self.convert_type(*default, TypePosition::Value).map(Box::new))
            .transpose()?;
        Ok(Node::new(NodeKind::TSTypeParameter {
            name,
            constraint,
            default,
        }))
    }

    // =========================================================================
    // Value-level nodes
    // =========================================================================

    /// `(expr: T)` as `expr as T'`. The expression is left for the rewriter.
    pub(crate) fn type_cast(&mut self, expression: Box<Node>, type_annotation: Node) -> Result<Node> {
        let type_annotation = self.convert_type(type_annotation, TypePosition::Value)?;
        Ok(Node::new(NodeKind::TSAsExpression {
            expression,
            type_annotation: Box::new(type_annotation),
        }))
    }

    /// Annotations of a function, arrow or method.
    ///
    /// The return type is translated in return position. Plain identifier
    /// parameters get their annotations translated; destructuring, default
    /// and rest parameters are kept as they are and their annotations are
    /// reached by the rewriter. The body is untouched.
    pub(crate) fn function_like(&mut self, mut function: Function) -> Result<Function> {
        function.type_parameters = self.convert_optional(function.type_parameters.take())?;
        for param in &mut function.params {
            if let NodeKind::Identifier {
                type_annotation, ..
            } = &mut param.kind
            {
                *type_annotation = self.convert_optional(type_annotation.take())?;
            }
        }
        if let Some(return_type) = function.return_type.take() {
            function.return_type = Some(Box::new(self.return_annotation(*return_type)?));
        }
        Ok(function)
    }

    /// `: T` after a parameter list, with `T` in return position.
    fn return_annotation(&mut self, annotation: Node) -> Result<Node> {
        let Node { meta, kind } = annotation;
        match kind {
            NodeKind::TypeAnnotation { type_annotation } => {
                let ty = self.convert_type(*type_annotation, TypePosition::FunctionReturn)?;
                Ok(fidelity::carry(meta, Node::ts_type_annotation(ty)))
            }
            kind => self.convert(Node { meta, kind }),
        }
    }

    /// `class { +a: T }` and `class { -a: T }`.
    pub(crate) fn class_property(
        &mut self,
        loc: Option<&SourceLocation>,
        key: Box<Node>,
        value: Option<Box<Node>>,
        type_annotation: Option<Box<Node>>,
        variance: Option<Box<Node>>,
        computed: bool,
        is_static: bool,
        readonly: bool,
        extra: Extra,
    ) -> Result<Node> {
        let readonly = self.readonly_from_variance(loc, variance.as_deref()) || readonly;
        let type_annotation = self.convert_optional(type_annotation)?;
        Ok(Node::new(NodeKind::ClassProperty {
            key,
            value,
            type_annotation,
            variance: None,
            computed,
            is_static,
            readonly,
            extra,
        }))
    }

    /// `import type {A} from 'a'` and `import {type A} from 'a'` as plain
    /// imports. `import typeof` has no TypeScript form and is kept.
    pub(crate) fn import_declaration(
        specifiers: Vec<Node>,
        source: Box<Node>,
        import_kind: Option<ImportKind>,
        extra: Extra,
    ) -> Node {
        let import_kind = match import_kind {
            Some(ImportKind::Type) => Some(ImportKind::Value),
            other => other,
        };
        let specifiers = specifiers.into_iter().map(strip_specifier_type).collect();
        Node::new(NodeKind::ImportDeclaration {
            specifiers,
            source,
            import_kind,
            extra,
        })
    }

    /// `export type {A}` / `export type A = ...` without the modifier.
    ///
    /// A declaration inside is not translated here; the rewriter reaches it.
    pub(crate) fn export_declaration(
        declaration: Option<Box<Node>>,
        specifiers: Vec<Node>,
        source: Option<Box<Node>>,
        export_kind: Option<ExportKind>,
        extra: Extra,
    ) -> Node {
        let export_kind = match export_kind {
            Some(ExportKind::Type) => Some(ExportKind::Value),
            other => other,
        };
        Node::new(NodeKind::ExportNamedDeclaration {
            declaration,
            specifiers,
            source,
            export_kind,
            extra,
        })
    }
}

/// Drop a `type` modifier from one import specifier.
fn strip_specifier_type(specifier: Node) -> Node {
    let Node { meta, kind } = specifier;
    let kind = match kind {
        NodeKind::ImportSpecifier {
            imported,
            local,
            import_kind: Some(ImportKind::Type),
            extra,
        } => NodeKind::ImportSpecifier {
            imported,
            local,
            import_kind: None,
            extra,
        },
        kind => kind,
    };
    Node { meta, kind }
}

#[cfg(test)]
#[path = "../tests/declarations.rs"]
mod tests;
