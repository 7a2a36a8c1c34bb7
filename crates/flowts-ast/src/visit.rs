//! Child enumeration and pre-order walks.
//!
//! `children` and `children_mut` list a node's direct children in source
//! order. Both are generated from one field table so they cannot drift apart.

use smallvec::SmallVec;

use crate::node::{Extra, Function, GenericField, GenericNode, Node, NodeKind};

/// Direct children of a node. Most nodes have at most four.
pub type Children<'a> = SmallVec<[&'a Node; 4]>;

/// Mutable direct children of a node.
pub type ChildrenMut<'a> = SmallVec<[&'a mut Node; 4]>;

/// Anything that can contribute child nodes: a boxed child, an optional
/// child, a list, or a map of unmodeled fields. Implemented for shared and
/// mutable references alike, so one field table serves both walks.
trait PushChildren<T> {
    fn push_children(self, out: &mut SmallVec<[T; 4]>);
}

impl<'a> PushChildren<&'a Node> for &'a Box<Node> {
    fn push_children(self, out: &mut SmallVec<[&'a Node; 4]>) {
        out.push(&**self);
    }
}

impl<'a> PushChildren<&'a mut Node> for &'a mut Box<Node> {
    fn push_children(self, out: &mut SmallVec<[&'a mut Node; 4]>) {
        out.push(&mut **self);
    }
}

impl<'a> PushChildren<&'a Node> for &'a Option<Box<Node>> {
    fn push_children(self, out: &mut SmallVec<[&'a Node; 4]>) {
        if let Some(child) = self {
            out.push(&**child);
        }
    }
}

impl<'a> PushChildren<&'a mut Node> for &'a mut Option<Box<Node>> {
    fn push_children(self, out: &mut SmallVec<[&'a mut Node; 4]>) {
        if let Some(child) = self {
            out.push(&mut **child);
        }
    }
}

impl<'a> PushChildren<&'a Node> for &'a Vec<Node> {
    fn push_children(self, out: &mut SmallVec<[&'a Node; 4]>) {
        out.extend(self.iter());
    }
}

impl<'a> PushChildren<&'a mut Node> for &'a mut Vec<Node> {
    fn push_children(self, out: &mut SmallVec<[&'a mut Node; 4]>) {
        out.extend(self.iter_mut());
    }
}

impl<'a> PushChildren<&'a Node> for &'a Extra {
    fn push_children(self, out: &mut SmallVec<[&'a Node; 4]>) {
        for field in self.values() {
            match field {
                GenericField::Node(child) => out.push(&**child),
                GenericField::List(children) => out.extend(children.iter().flatten()),
                GenericField::Value(_) => {}
            }
        }
    }
}

impl<'a> PushChildren<&'a mut Node> for &'a mut Extra {
    fn push_children(self, out: &mut SmallVec<[&'a mut Node; 4]>) {
        for field in self.values_mut() {
            match field {
                GenericField::Node(child) => out.push(&mut **child),
                GenericField::List(children) => out.extend(children.iter_mut().flatten()),
                GenericField::Value(_) => {}
            }
        }
    }
}

/// Push the children of the node kind behind `$kind` into `$out`.
macro_rules! collect_children {
    ($kind:expr, $out:ident) => {{
        match $kind {
            NodeKind::Noop
            | NodeKind::StringLiteral { .. }
            | NodeKind::NumericLiteral { .. }
            | NodeKind::BooleanLiteral { .. }
            | NodeKind::NullLiteral
            | NodeKind::AnyTypeAnnotation
            | NodeKind::MixedTypeAnnotation
            | NodeKind::EmptyTypeAnnotation
            | NodeKind::ExistsTypeAnnotation
            | NodeKind::BooleanTypeAnnotation
            | NodeKind::NumberTypeAnnotation
            | NodeKind::StringTypeAnnotation
            | NodeKind::SymbolTypeAnnotation
            | NodeKind::BigIntTypeAnnotation
            | NodeKind::VoidTypeAnnotation
            | NodeKind::NullLiteralTypeAnnotation
            | NodeKind::ThisTypeAnnotation
            | NodeKind::BooleanLiteralTypeAnnotation { .. }
            | NodeKind::NumberLiteralTypeAnnotation { .. }
            | NodeKind::StringLiteralTypeAnnotation { .. }
            | NodeKind::Variance { .. }
            | NodeKind::TSAnyKeyword
            | NodeKind::TSUnknownKeyword
            | NodeKind::TSNeverKeyword
            | NodeKind::TSBooleanKeyword
            | NodeKind::TSNumberKeyword
            | NodeKind::TSStringKeyword
            | NodeKind::TSSymbolKeyword
            | NodeKind::TSBigIntKeyword
            | NodeKind::TSNullKeyword
            | NodeKind::TSUndefinedKeyword
            | NodeKind::TSVoidKeyword
            | NodeKind::TSThisType => {}

            NodeKind::File { program, extra, .. } => {
                program.push_children(&mut $out);
                extra.push_children(&mut $out);
            }
            NodeKind::Program {
                body,
                directives,
                extra,
                ..
            } => {
                extra.push_children(&mut $out);
                directives.push_children(&mut $out);
                body.push_children(&mut $out);
            }
            NodeKind::Identifier {
                type_annotation,
                extra,
                ..
            } => {
                extra.push_children(&mut $out);
                type_annotation.push_children(&mut $out);
            }
            NodeKind::ImportDeclaration {
                specifiers,
                source,
                extra,
                ..
            } => {
                specifiers.push_children(&mut $out);
                source.push_children(&mut $out);
                extra.push_children(&mut $out);
            }
            NodeKind::ImportSpecifier {
                imported,
                local,
                extra,
                ..
            } => {
                imported.push_children(&mut $out);
                local.push_children(&mut $out);
                extra.push_children(&mut $out);
            }
            NodeKind::ImportDefaultSpecifier { local, extra }
            | NodeKind::ImportNamespaceSpecifier { local, extra } => {
                local.push_children(&mut $out);
                extra.push_children(&mut $out);
            }
            NodeKind::ExportNamedDeclaration {
                declaration,
                specifiers,
                source,
                extra,
                ..
            } => {
                declaration.push_children(&mut $out);
                specifiers.push_children(&mut $out);
                source.push_children(&mut $out);
                extra.push_children(&mut $out);
            }
            NodeKind::ExportSpecifier {
                local,
                exported,
                extra,
            } => {
                local.push_children(&mut $out);
                exported.push_children(&mut $out);
                extra.push_children(&mut $out);
            }
            NodeKind::FunctionDeclaration(function)
            | NodeKind::FunctionExpression(function)
            | NodeKind::ArrowFunctionExpression(function)
            | NodeKind::ClassMethod(function)
            | NodeKind::ClassPrivateMethod(function)
            | NodeKind::ObjectMethod(function) => {
                let Function {
                    id,
                    params,
                    body,
                    return_type,
                    type_parameters,
                    predicate,
                    extra,
                } = function;
                // Decorators and method keys live in `extra`.
                extra.push_children(&mut $out);
                id.push_children(&mut $out);
                type_parameters.push_children(&mut $out);
                params.push_children(&mut $out);
                return_type.push_children(&mut $out);
                predicate.push_children(&mut $out);
                body.push_children(&mut $out);
            }
            NodeKind::RestElement {
                argument,
                type_annotation,
                extra,
            } => {
                extra.push_children(&mut $out);
                argument.push_children(&mut $out);
                type_annotation.push_children(&mut $out);
            }
            NodeKind::ClassProperty {
                key,
                value,
                type_annotation,
                variance,
                extra,
                ..
            } => {
                extra.push_children(&mut $out);
                variance.push_children(&mut $out);
                key.push_children(&mut $out);
                type_annotation.push_children(&mut $out);
                value.push_children(&mut $out);
            }

            NodeKind::ArrayTypeAnnotation { element_type }
            | NodeKind::TSArrayType { element_type } => element_type.push_children(&mut $out),
            NodeKind::NullableTypeAnnotation { type_annotation }
            | NodeKind::TypeAnnotation { type_annotation }
            | NodeKind::TSParenthesizedType { type_annotation }
            | NodeKind::TSTypeOperator {
                type_annotation, ..
            }
            | NodeKind::TSTypeAnnotation { type_annotation } => type_annotation.push_children(&mut $out),
            NodeKind::TupleTypeAnnotation { types }
            | NodeKind::UnionTypeAnnotation { types }
            | NodeKind::IntersectionTypeAnnotation { types }
            | NodeKind::TSUnionType { types }
            | NodeKind::TSIntersectionType { types } => types.push_children(&mut $out),
            NodeKind::TypeofTypeAnnotation { argument }
            | NodeKind::ObjectTypeSpreadProperty { argument } => argument.push_children(&mut $out),
            NodeKind::GenericTypeAnnotation {
                id,
                type_parameters,
            }
            | NodeKind::InterfaceExtends {
                id,
                type_parameters,
            }
            | NodeKind::ClassImplements {
                id,
                type_parameters,
            } => {
                id.push_children(&mut $out);
                type_parameters.push_children(&mut $out);
            }
            NodeKind::QualifiedTypeIdentifier { qualification, id } => {
                qualification.push_children(&mut $out);
                id.push_children(&mut $out);
            }
            NodeKind::FunctionTypeAnnotation {
                type_parameters,
                this,
                params,
                rest,
                return_type,
            } => {
                type_parameters.push_children(&mut $out);
                this.push_children(&mut $out);
                params.push_children(&mut $out);
                rest.push_children(&mut $out);
                return_type.push_children(&mut $out);
            }
            NodeKind::FunctionTypeParam {
                name,
                type_annotation,
                ..
            } => {
                name.push_children(&mut $out);
                type_annotation.push_children(&mut $out);
            }
            NodeKind::ObjectTypeAnnotation {
                properties,
                indexers,
                call_properties,
                internal_slots,
                ..
            } => {
                properties.push_children(&mut $out);
                indexers.push_children(&mut $out);
                call_properties.push_children(&mut $out);
                internal_slots.push_children(&mut $out);
            }
            NodeKind::ObjectTypeProperty {
                key,
                value,
                variance,
                ..
            } => {
                variance.push_children(&mut $out);
                key.push_children(&mut $out);
                value.push_children(&mut $out);
            }
            NodeKind::ObjectTypeIndexer {
                id,
                key,
                value,
                variance,
            } => {
                variance.push_children(&mut $out);
                id.push_children(&mut $out);
                key.push_children(&mut $out);
                value.push_children(&mut $out);
            }
            NodeKind::ObjectTypeCallProperty { value, .. } => value.push_children(&mut $out),
            NodeKind::TypeParameterDeclaration { params }
            | NodeKind::TypeParameterInstantiation { params }
            | NodeKind::TSTypeParameterDeclaration { params }
            | NodeKind::TSTypeParameterInstantiation { params } => params.push_children(&mut $out),
            NodeKind::TypeParameter {
                bound,
                variance,
                default,
                ..
            } => {
                variance.push_children(&mut $out);
                bound.push_children(&mut $out);
                default.push_children(&mut $out);
            }
            NodeKind::TypeAlias {
                id,
                type_parameters,
                right,
            } => {
                id.push_children(&mut $out);
                type_parameters.push_children(&mut $out);
                right.push_children(&mut $out);
            }
            NodeKind::OpaqueType {
                id,
                type_parameters,
                supertype,
                impltype,
            } => {
                id.push_children(&mut $out);
                type_parameters.push_children(&mut $out);
                supertype.push_children(&mut $out);
                impltype.push_children(&mut $out);
            }
            NodeKind::InterfaceDeclaration {
                id,
                type_parameters,
                extends,
                body,
            }
            | NodeKind::TSInterfaceDeclaration {
                id,
                type_parameters,
                extends,
                body,
            } => {
                id.push_children(&mut $out);
                type_parameters.push_children(&mut $out);
                extends.push_children(&mut $out);
                body.push_children(&mut $out);
            }
            NodeKind::TypeCastExpression {
                expression,
                type_annotation,
            }
            | NodeKind::TSAsExpression {
                expression,
                type_annotation,
            } => {
                expression.push_children(&mut $out);
                type_annotation.push_children(&mut $out);
            }
            NodeKind::DeclareClass { id }
            | NodeKind::DeclareFunction { id }
            | NodeKind::DeclareInterface { id }
            | NodeKind::DeclareModule { id }
            | NodeKind::DeclareTypeAlias { id }
            | NodeKind::DeclareVariable { id } => id.push_children(&mut $out),

            NodeKind::TSLiteralType { literal } => literal.push_children(&mut $out),
            NodeKind::TSTupleType { element_types } => element_types.push_children(&mut $out),
            NodeKind::TSTypeQuery { expr_name } => expr_name.push_children(&mut $out),
            NodeKind::TSTypeReference {
                type_name,
                type_parameters,
            } => {
                type_name.push_children(&mut $out);
                type_parameters.push_children(&mut $out);
            }
            NodeKind::TSQualifiedName { left, right } => {
                left.push_children(&mut $out);
                right.push_children(&mut $out);
            }
            NodeKind::TSFunctionType {
                type_parameters,
                parameters,
                type_annotation,
            } => {
                type_parameters.push_children(&mut $out);
                parameters.push_children(&mut $out);
                type_annotation.push_children(&mut $out);
            }
            NodeKind::TSTypeLiteral { members } => members.push_children(&mut $out),
            NodeKind::TSInterfaceBody { body } => body.push_children(&mut $out),
            NodeKind::TSPropertySignature {
                key,
                type_annotation,
                ..
            } => {
                key.push_children(&mut $out);
                type_annotation.push_children(&mut $out);
            }
            NodeKind::TSMethodSignature {
                key,
                type_parameters,
                parameters,
                type_annotation,
                ..
            } => {
                key.push_children(&mut $out);
                type_parameters.push_children(&mut $out);
                parameters.push_children(&mut $out);
                type_annotation.push_children(&mut $out);
            }
            NodeKind::TSIndexSignature {
                parameters,
                type_annotation,
                ..
            } => {
                parameters.push_children(&mut $out);
                type_annotation.push_children(&mut $out);
            }
            NodeKind::TSTypeParameter {
                constraint,
                default,
                ..
            } => {
                constraint.push_children(&mut $out);
                default.push_children(&mut $out);
            }
            NodeKind::TSTypeAliasDeclaration {
                id,
                type_parameters,
                type_annotation,
                ..
            } => {
                id.push_children(&mut $out);
                type_parameters.push_children(&mut $out);
                type_annotation.push_children(&mut $out);
            }
            NodeKind::TSExpressionWithTypeArguments {
                expression,
                type_parameters,
            } => {
                expression.push_children(&mut $out);
                type_parameters.push_children(&mut $out);
            }

            NodeKind::Other(GenericNode { fields, .. }) => fields.push_children(&mut $out),
        }
    }};
}

impl Node {
    /// Direct children, in source order.
    pub fn children(&self) -> Children<'_> {
        let mut out = Children::new();
        collect_children!(&self.kind, out);
        out
    }

    /// Direct children, mutably, in source order.
    pub fn children_mut(&mut self) -> ChildrenMut<'_> {
        let mut out = ChildrenMut::new();
        collect_children!(&mut self.kind, out);
        out
    }

    /// Visit this node and every descendant, parents before children.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Node)) {
        visit(self);
        for child in self.children() {
            child.walk(visit);
        }
    }

    /// True if this node or any descendant satisfies `pred`.
    pub fn any_node(&self, pred: &impl Fn(&Node) -> bool) -> bool {
        pred(self) || self.children().into_iter().any(|child| child.any_node(pred))
    }

    /// Number of nodes in this subtree.
    pub fn subtree_len(&self) -> usize {
        let mut count = 0;
        self.walk(&mut |_| count += 1);
        count
    }
}
