//! Type expressions.
//!
//! `convert_type` is the recursive core: it maps one Flow type expression to
//! the closest TypeScript type, recursing into every nested type. Lossy
//! mappings (exact objects, `$Exact`, `+` properties) report a warning and
//! still produce a type.

use flowts_ast::{
    Algebra, Extra, MethodKind, Node, NodeKind, PropertyKind, TypeOperator, VarianceKind,
};
use flowts_common::limits::{INDEXER_NAME_BASE, PARAM_NAME_BASE};
use flowts_common::{At, Limitation, NameSet, SourceLocation};

use crate::converter::{Converter, TypePosition, unexpected, unsupported};
use crate::error::{ConvertError, Result};
use crate::fidelity;

impl Converter<'_> {
    /// Translate a type expression.
    ///
    /// TypeScript types come back unchanged. A `: T` annotation wrapper is
    /// dissolved into the translation of `T`.
    pub fn convert_type(&mut self, node: Node, position: TypePosition) -> Result<Node> {
        let at = At::from(node.loc());
        self.nested(at, |this| this.convert_type_inner(node, position))
    }

    fn convert_type_inner(&mut self, node: Node, position: TypePosition) -> Result<Node> {
        if node.algebra() == Algebra::Target {
            return Ok(node);
        }
        let Node { meta, kind } = node;
        let loc = meta.loc;
        let ty = match kind {
            NodeKind::TypeAnnotation { type_annotation } => {
                let mut inner = self.convert_type(*type_annotation, position)?;
                fidelity::absorb(meta, &mut inner);
                return Ok(inner);
            }

            NodeKind::AnyTypeAnnotation | NodeKind::ExistsTypeAnnotation => {
                Node::new(NodeKind::TSAnyKeyword)
            }
            NodeKind::MixedTypeAnnotation => Node::new(NodeKind::TSUnknownKeyword),
            NodeKind::EmptyTypeAnnotation => Node::new(NodeKind::TSNeverKeyword),
            NodeKind::BooleanTypeAnnotation => Node::new(NodeKind::TSBooleanKeyword),
            NodeKind::NumberTypeAnnotation => Node::new(NodeKind::TSNumberKeyword),
            NodeKind::StringTypeAnnotation => Node::new(NodeKind::TSStringKeyword),
            NodeKind::SymbolTypeAnnotation => Node::new(NodeKind::TSSymbolKeyword),
            NodeKind::BigIntTypeAnnotation => Node::new(NodeKind::TSBigIntKeyword),
            NodeKind::NullLiteralTypeAnnotation => Node::new(NodeKind::TSNullKeyword),
            NodeKind::ThisTypeAnnotation => Node::new(NodeKind::TSThisType),
            NodeKind::VoidTypeAnnotation => match position {
                TypePosition::FunctionReturn => Node::new(NodeKind::TSVoidKeyword),
                TypePosition::Value => Node::new(NodeKind::TSUndefinedKeyword),
            },

            NodeKind::BooleanLiteralTypeAnnotation { value } => {
                Node::ts_literal(Node::new(NodeKind::BooleanLiteral { value }))
            }
            NodeKind::NumberLiteralTypeAnnotation { value } => {
                Node::ts_literal(Node::new(NodeKind::NumericLiteral { value }))
            }
            NodeKind::StringLiteralTypeAnnotation { value } => {
                Node::ts_literal(Node::string_literal(value))
            }

            NodeKind::ArrayTypeAnnotation { element_type } => Node::ts_array(
                self.convert_type(*element_type, TypePosition::Value)?
                    .paren_if_function(),
            ),
            NodeKind::TupleTypeAnnotation { types } => Node::new(NodeKind::TSTupleType {
                element_types: self.convert_types(types, TypePosition::Value)?,
            }),
            NodeKind::NullableTypeAnnotation { type_annotation } => Node::ts_union(vec![
                self.convert_type(*type_annotation, TypePosition::Value)?
                    .paren_if_function(),
                Node::new(NodeKind::TSNullKeyword),
                Node::new(NodeKind::TSUndefinedKeyword),
            ]),
            NodeKind::UnionTypeAnnotation { types } => {
                Node::ts_union(self.grouped_types(types, position)?)
            }
            NodeKind::IntersectionTypeAnnotation { types } => {
                Node::ts_intersection(self.grouped_types(types, TypePosition::Value)?)
            }

            NodeKind::GenericTypeAnnotation {
                id,
                type_parameters,
            } => self.generic_type(loc.as_ref(), *id, type_parameters, position)?,
            NodeKind::QualifiedTypeIdentifier { qualification, id } => {
                Node::new(NodeKind::TSQualifiedName {
                    left: Box::new(self.type_name(*qualification)?),
                    right: id,
                })
            }
            NodeKind::TypeofTypeAnnotation { argument } => Node::new(NodeKind::TSTypeQuery {
                expr_name: Box::new(self.type_query_target(*argument)?),
            }),

            NodeKind::ObjectTypeAnnotation {
                properties,
                indexers,
                call_properties,
                internal_slots,
                exact,
                ..
            } => self.object_type(
                loc.as_ref(),
                properties,
                indexers,
                call_properties,
                internal_slots,
                exact,
            )?,
            NodeKind::FunctionTypeAnnotation {
                type_parameters,
                this,
                params,
                rest,
                return_type,
            } => self.function_type(type_parameters, this, params, rest, *return_type)?,

            kind @ (NodeKind::ObjectTypeCallProperty { .. }
            | NodeKind::ClassImplements { .. }
            | NodeKind::DeclareClass { .. }
            | NodeKind::DeclareFunction { .. }
            | NodeKind::DeclareInterface { .. }
            | NodeKind::DeclareModule { .. }
            | NodeKind::DeclareTypeAlias { .. }
            | NodeKind::DeclareVariable { .. }) => return Err(unsupported(&kind, &meta)),
            NodeKind::Other(generic) if generic.algebra() == Algebra::Source => {
                return Err(unsupported(&NodeKind::Other(generic), &meta));
            }
            kind => return Err(unexpected(&kind, &meta)),
        };
        Ok(fidelity::carry(meta, ty))
    }

    /// Translate each type, keeping order.
    pub(crate) fn convert_types(
        &mut self,
        types: Vec<Node>,
        position: TypePosition,
    ) -> Result<Vec<Node>> {
        types
            .into_iter()
            .map(|ty| self.convert_type(ty, position))
            .collect()
    }

    /// Translate union or intersection members. Function types are
    /// parenthesized so they do not swallow the following members.
    fn grouped_types(&mut self, types: Vec<Node>, position: TypePosition) -> Result<Vec<Node>> {
        types
            .into_iter()
            .map(|ty| Ok(self.convert_type(ty, position)?.paren_if_function()))
            .collect()
    }

    // =========================================================================
    // Names and references
    // =========================================================================

    /// `A` or `A.B.C` as a TypeScript entity name.
    pub(crate) fn type_name(&mut self, node: Node) -> Result<Node> {
        let Node { meta, kind } = node;
        match kind {
            kind @ (NodeKind::Identifier { .. } | NodeKind::TSQualifiedName { .. }) => {
                Ok(Node { meta, kind })
            }
            NodeKind::QualifiedTypeIdentifier { qualification, id } => {
                let left = self.type_name(*qualification)?;
                Ok(fidelity::carry(
                    meta,
                    Node::new(NodeKind::TSQualifiedName {
                        left: Box::new(left),
                        right: id,
                    }),
                ))
            }
            kind => Err(unexpected(&kind, &meta)),
        }
    }

    /// The entity a `typeof` query names.
    fn type_query_target(&mut self, argument: Node) -> Result<Node> {
        match argument.kind {
            NodeKind::Identifier { .. } | NodeKind::QualifiedTypeIdentifier { .. } => {
                self.type_name(argument)
            }
            NodeKind::GenericTypeAnnotation { id, .. } => self.type_name(*id),
            kind => Err(ConvertError::TypeofWithoutIdentifier {
                kind: kind.kind_name().to_string(),
                at: At::from(argument.meta.loc.as_ref()),
            }),
        }
    }

    /// `Name<Args>`, including the `$Exact`, `$Keys` and `$ReadOnly` utilities.
    fn generic_type(
        &mut self,
        loc: Option<&SourceLocation>,
        mut id: Node,
        mut type_parameters: Option<Box<Node>>,
        position: TypePosition,
    ) -> Result<Node> {
        let mut rename_readonly = false;
        match id.identifier_name() {
            Some("$Exact") => {
                if let Some(argument) = first_type_argument(&mut type_parameters) {
                    self.warnings.report(Limitation::ExactUtility, loc);
                    return self.convert_type(argument, TypePosition::Value);
                }
            }
            Some("$Keys") => {
                if let Some(argument) = first_type_argument(&mut type_parameters) {
                    let operand = self.convert_type(argument, TypePosition::Value)?;
                    return Ok(Node::ts_type_operator(TypeOperator::Keyof, operand));
                }
            }
            Some("$ReadOnly") => rename_readonly = true,
            _ => {}
        }
        if rename_readonly {
            if let NodeKind::Identifier { name, .. } = &mut id.kind {
                *name = "Readonly".to_string();
            }
        }

        let type_name = self.type_name(id)?;
        let type_arguments = match type_parameters {
            Some(arguments) => self.optional_type_arguments(*arguments, position)?,
            None => None,
        };
        Ok(Node::ts_type_reference(type_name, type_arguments))
    }

    /// `<A, B>` after a type name. An empty list is dropped.
    fn optional_type_arguments(
        &mut self,
        arguments: Node,
        position: TypePosition,
    ) -> Result<Option<Node>> {
        let Node { meta, kind } = arguments;
        match kind {
            NodeKind::TypeParameterInstantiation { params } if params.is_empty() => Ok(None),
            NodeKind::TypeParameterInstantiation { params } => Ok(Some(fidelity::carry(
                meta,
                self.type_arguments(params, position)?,
            ))),
            kind @ NodeKind::TSTypeParameterInstantiation { .. } => Ok(Some(Node { meta, kind })),
            kind => Err(unexpected(&kind, &meta)),
        }
    }

    /// Translate type arguments into a `TSTypeParameterInstantiation`.
    ///
    /// `position` flows into the arguments, so `Promise<void>` keeps its
    /// `void` as a return type.
    pub(crate) fn type_arguments(
        &mut self,
        params: Vec<Node>,
        position: TypePosition,
    ) -> Result<Node> {
        Ok(Node::new(NodeKind::TSTypeParameterInstantiation {
            params: self.convert_types(params, position)?,
        }))
    }

    // =========================================================================
    // Object types
    // =========================================================================

    /// `{ a: T, [K]: V, ...S }`
    ///
    /// Without spreads this is a type literal. With spreads it becomes the
    /// intersection of the literal (when it has members) and each spread.
    /// Call properties and internal slots have no translation.
    fn object_type(
        &mut self,
        loc: Option<&SourceLocation>,
        properties: Vec<Node>,
        indexers: Vec<Node>,
        call_properties: Vec<Node>,
        internal_slots: Vec<Node>,
        exact: bool,
    ) -> Result<Node> {
        if let Some(member) = call_properties.first().or(internal_slots.first()) {
            return Err(unsupported(&member.kind, &member.meta));
        }
        if exact {
            self.warnings.report(Limitation::ExactObject, loc);
        }

        let (members, spreads) = self.object_members(properties, indexers)?;
        if spreads.is_empty() {
            return Ok(Node::ts_type_literal(members));
        }
        let mut types = Vec::with_capacity(spreads.len() + 1);
        if !members.is_empty() {
            types.push(Node::ts_type_literal(members));
        }
        types.extend(spreads);
        Ok(Node::ts_intersection(types))
    }

    /// Translate an object type's members.
    ///
    /// Returns the signatures (properties first, then indexers) and the
    /// translated spread arguments separately. Unnamed indexers get names
    /// that collide with no property or named indexer of the same object.
    pub(crate) fn object_members(
        &mut self,
        properties: Vec<Node>,
        indexers: Vec<Node>,
    ) -> Result<(Vec<Node>, Vec<Node>)> {
        let mut names = NameSet::from_names(
            properties
                .iter()
                .filter_map(property_name)
                .chain(indexers.iter().filter_map(indexer_name)),
        );

        let mut members = Vec::with_capacity(properties.len() + indexers.len());
        let mut spreads = Vec::new();
        for property in properties {
            let Node { meta, kind } = property;
            match kind {
                NodeKind::ObjectTypeSpreadProperty { argument } => {
                    let mut spread = self
                        .convert_type(*argument, TypePosition::Value)?
                        .paren_if_function();
                    fidelity::absorb(meta, &mut spread);
                    spreads.push(spread);
                }
                kind => members.push(self.convert(Node { meta, kind })?),
            }
        }
        for indexer in indexers {
            let Node { meta, kind } = indexer;
            match kind {
                NodeKind::ObjectTypeIndexer {
                    id,
                    key,
                    value,
                    variance,
                } => {
                    let signature = self.index_signature(
                        meta.loc.as_ref(),
                        id,
                        *key,
                        *value,
                        variance,
                        &mut names,
                    )?;
                    members.push(fidelity::carry(meta, signature));
                }
                kind => members.push(self.convert(Node { meta, kind })?),
            }
        }
        Ok((members, spreads))
    }

    /// `+a: T` warns, `-a: T` is readonly. Getters and setters become
    /// accessor signatures.
    pub(crate) fn property_signature(
        &mut self,
        loc: Option<&SourceLocation>,
        key: Box<Node>,
        value: Node,
        optional: bool,
        variance: Option<Box<Node>>,
        kind: PropertyKind,
    ) -> Result<Node> {
        let accessor = match kind {
            PropertyKind::Init => None,
            PropertyKind::Get => Some(MethodKind::Get),
            PropertyKind::Set => Some(MethodKind::Set),
        };
        if let Some(accessor) = accessor {
            if let Some(variance) = variance {
                return Err(unexpected(&variance.kind, &variance.meta));
            }
            return self.accessor_signature(key, accessor, optional, value);
        }

        let readonly = self.readonly_from_variance(loc, variance.as_deref());
        let value = self.convert_type(value, TypePosition::Value)?;
        Ok(Node::new(NodeKind::TSPropertySignature {
            key,
            type_annotation: Some(Box::new(Node::ts_type_annotation(value))),
            optional,
            readonly,
            computed: false,
        }))
    }

    /// `get a(): T` / `set a(value: T): void`.
    ///
    /// A setter's return type is dropped: TypeScript does not allow one.
    fn accessor_signature(
        &mut self,
        key: Box<Node>,
        kind: MethodKind,
        optional: bool,
        value: Node,
    ) -> Result<Node> {
        let Node {
            meta,
            kind: value_kind,
        } = value;
        let (type_parameters, this, params, rest, return_type) = match value_kind {
            NodeKind::FunctionTypeAnnotation {
                type_parameters,
                this,
                params,
                rest,
                return_type,
            } => (type_parameters, this, params, rest, return_type),
            other => return Err(unexpected(&other, &meta)),
        };

        let type_parameters = self.convert_optional(type_parameters)?;
        let parameters = self.function_type_parameters(this, params, rest)?;
        let type_annotation = match kind {
            MethodKind::Set => None,
            MethodKind::Get | MethodKind::Method => {
                let ty = self.convert_type(*return_type, TypePosition::FunctionReturn)?;
                Some(Box::new(Node::ts_type_annotation(ty)))
            }
        };
        Ok(Node::new(NodeKind::TSMethodSignature {
            key,
            kind,
            type_parameters,
            parameters,
            type_annotation,
            computed: false,
            optional,
        }))
    }

    /// `[name: K]: V`, naming the key from `names` when Flow left it out.
    pub(crate) fn index_signature(
        &mut self,
        loc: Option<&SourceLocation>,
        id: Option<Box<Node>>,
        key: Node,
        value: Node,
        variance: Option<Box<Node>>,
        names: &mut NameSet,
    ) -> Result<Node> {
        let readonly = self.readonly_from_variance(loc, variance.as_deref());
        let key = self.convert_type(key, TypePosition::Value)?;
        let parameter = match id {
            Some(id) => {
                let Node { meta, kind } = *id;
                let name = match kind {
                    NodeKind::Identifier { name, .. } => name,
                    kind => return Err(unexpected(&kind, &meta)),
                };
                fidelity::carry(meta, Node::typed_identifier(name, key))
            }
            None => Node::typed_identifier(names.fresh(INDEXER_NAME_BASE), key),
        };
        let value = self.convert_type(value, TypePosition::Value)?;
        Ok(Node::new(NodeKind::TSIndexSignature {
            parameters: vec![parameter],
            type_annotation: Some(Box::new(Node::ts_type_annotation(value))),
            readonly,
        }))
    }

    /// Map a member's variance sigil to `readonly`, warning on `+`.
    pub(crate) fn readonly_from_variance(
        &mut self,
        loc: Option<&SourceLocation>,
        variance: Option<&Node>,
    ) -> bool {
        match variance.map(|node| &node.kind) {
            Some(NodeKind::Variance {
                kind: VarianceKind::Plus,
            }) => {
                self.warnings.report(Limitation::Contravariance, loc);
                false
            }
            Some(NodeKind::Variance {
                kind: VarianceKind::Minus,
            }) => true,
            _ => false,
        }
    }

    // =========================================================================
    // Function types
    // =========================================================================

    /// `<T>(this: C, a: A, B, ...rest: R) => Ret`
    fn function_type(
        &mut self,
        type_parameters: Option<Box<Node>>,
        this: Option<Box<Node>>,
        params: Vec<Node>,
        rest: Option<Box<Node>>,
        return_type: Node,
    ) -> Result<Node> {
        let type_parameters = self.convert_optional(type_parameters)?;
        let parameters = self.function_type_parameters(this, params, rest)?;
        let return_type = self.convert_type(return_type, TypePosition::FunctionReturn)?;
        Ok(Node::new(NodeKind::TSFunctionType {
            type_parameters,
            parameters,
            type_annotation: Some(Box::new(Node::ts_type_annotation(return_type))),
        }))
    }

    /// `this` first, then the positional parameters, then the rest
    /// parameter.
    ///
    /// Unnamed parameters get fresh names that collide with no named
    /// parameter of the same function type.
    fn function_type_parameters(
        &mut self,
        this: Option<Box<Node>>,
        params: Vec<Node>,
        rest: Option<Box<Node>>,
    ) -> Result<Vec<Node>> {
        let mut names = NameSet::from_names(params.iter().filter_map(param_name));
        let mut parameters =
            Vec::with_capacity(params.len() + usize::from(this.is_some()) + usize::from(rest.is_some()));
        if let Some(this) = this {
            parameters.push(self.this_param(*this)?);
        }
        for param in params {
            parameters.push(self.function_type_param(param, &mut names)?);
        }
        if let Some(rest) = rest {
            parameters.push(self.rest_param(*rest)?);
        }
        Ok(parameters)
    }

    /// Flow's `this: T` as TypeScript's leading `this` parameter.
    fn this_param(&mut self, this: Node) -> Result<Node> {
        let Node { meta, kind } = this;
        match kind {
            NodeKind::FunctionTypeParam {
                type_annotation, ..
            } => {
                let ty = self.convert_type(*type_annotation, TypePosition::Value)?;
                Ok(fidelity::carry(meta, Node::typed_identifier("this", ty)))
            }
            kind => Err(unexpected(&kind, &meta)),
        }
    }

    fn function_type_param(&mut self, param: Node, names: &mut NameSet) -> Result<Node> {
        let Node { meta, kind } = param;
        match kind {
            NodeKind::FunctionTypeParam {
                name,
                type_annotation,
                optional,
            } => {
                let name = match name.as_deref().and_then(Node::identifier_name) {
                    Some(name) => name.to_string(),
                    None => names.fresh(PARAM_NAME_BASE),
                };
                let ty = self.convert_type(*type_annotation, TypePosition::Value)?;
                Ok(fidelity::carry(
                    meta,
                    Node::new(NodeKind::Identifier {
                        name,
                        optional,
                        type_annotation: Some(Box::new(Node::ts_type_annotation(ty))),
                        extra: Extra::new(),
                    }),
                ))
            }
            kind => self.convert(Node { meta, kind }),
        }
    }

    /// `...rest: R` as a rest element. Flow allows the name to be omitted;
    /// TypeScript does not.
    fn rest_param(&mut self, rest: Node) -> Result<Node> {
        let Node { meta, kind } = rest;
        match kind {
            NodeKind::FunctionTypeParam {
                name: Some(name),
                type_annotation,
                ..
            } => {
                let ty = self.convert_type(*type_annotation, TypePosition::Value)?;
                Ok(fidelity::carry(
                    meta,
                    Node::new(NodeKind::RestElement {
                        argument: name,
                        type_annotation: Some(Box::new(Node::ts_type_annotation(ty))),
                        extra: Extra::new(),
                    }),
                ))
            }
            NodeKind::FunctionTypeParam { name: None, .. } => {
                Err(ConvertError::MissingRestParameterName {
                    at: At::from(meta.loc.as_ref()),
                })
            }
            kind => self.convert(Node { meta, kind }),
        }
    }
}

/// Move out the first argument of `Name<A, ...>`, if there is one.
fn first_type_argument(type_parameters: &mut Option<Box<Node>>) -> Option<Node> {
    match &mut type_parameters.as_deref_mut()?.kind {
        NodeKind::TypeParameterInstantiation { params } if !params.is_empty() => {
            Some(params.remove(0))
        }
        _ => None,
    }
}

/// Name of an object type property with a plain or string key.
fn property_name(property: &Node) -> Option<&str> {
    match &property.kind {
        NodeKind::ObjectTypeProperty { key, .. } => match &key.kind {
            NodeKind::Identifier { name, .. } => Some(name),
            NodeKind::StringLiteral { value } => Some(value),
            _ => None,
        },
        _ => None,
    }
}

fn indexer_name(indexer: &Node) -> Option<&str> {
    match &indexer.kind {
        NodeKind::ObjectTypeIndexer { id: Some(id), .. } => id.identifier_name(),
        _ => None,
    }
}

fn param_name(param: &Node) -> Option<&str> {
    match &param.kind {
        NodeKind::FunctionTypeParam { name: Some(name), .. } => name.identifier_name(),
        _ => None,
    }
}

#[cfg(test)]
#[path = "../tests/types.rs"]
mod tests;
