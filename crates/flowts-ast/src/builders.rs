//! Constructors for the nodes the translator emits.
//!
//! Built nodes carry no metadata; the translator copies position and
//! comments onto them from the node they replace.

use crate::node::{Extra, Node, NodeKind, TypeOperator};

// =========================================================================
// Builder helpers for tree construction
// =========================================================================

impl Node {
    /// Create an identifier
    pub fn identifier(name: impl Into<String>) -> Self {
        Node::new(NodeKind::Identifier {
            name: name.into(),
            optional: false,
            type_annotation: None,
            extra: Extra::new(),
        })
    }

    /// Create an identifier annotated with `: ty`
    pub fn typed_identifier(name: impl Into<String>, ty: Node) -> Self {
        Node::new(NodeKind::Identifier {
            name: name.into(),
            optional: false,
            type_annotation: Some(Box::new(Node::ts_type_annotation(ty))),
            extra: Extra::new(),
        })
    }

    pub fn string_literal(value: impl Into<String>) -> Self {
        Node::new(NodeKind::StringLiteral {
            value: value.into(),
        })
    }

    /// `: ty` in TypeScript position
    pub fn ts_type_annotation(ty: Node) -> Self {
        Node::new(NodeKind::TSTypeAnnotation {
            type_annotation: Box::new(ty),
        })
    }

    pub fn ts_union(types: Vec<Node>) -> Self {
        Node::new(NodeKind::TSUnionType { types })
    }

    pub fn ts_intersection(types: Vec<Node>) -> Self {
        Node::new(NodeKind::TSIntersectionType { types })
    }

    pub fn ts_array(element: Node) -> Self {
        Node::new(NodeKind::TSArrayType {
            element_type: Box::new(element),
        })
    }

    /// A literal type wrapping a value literal node
    pub fn ts_literal(literal: Node) -> Self {
        Node::new(NodeKind::TSLiteralType {
            literal: Box::new(literal),
        })
    }

    pub fn ts_type_operator(operator: TypeOperator, ty: Node) -> Self {
        Node::new(NodeKind::TSTypeOperator {
            operator,
            type_annotation: Box::new(ty),
        })
    }

    /// Create a type reference such as `Name` or `Name<Args>`
    pub fn ts_type_reference(type_name: Node, type_parameters: Option<Node>) -> Self {
        Node::new(NodeKind::TSTypeReference {
            type_name: Box::new(type_name),
            type_parameters: type_parameters.map(Box::new),
        })
    }

    pub fn ts_type_literal(members: Vec<Node>) -> Self {
        Node::new(NodeKind::TSTypeLiteral { members })
    }

    /// Wrap in parentheses
    #[must_use]
    pub fn ts_paren(self) -> Self {
        Node::new(NodeKind::TSParenthesizedType {
            type_annotation: Box::new(self),
        })
    }

    /// True for kinds that need parentheses inside unions, intersections
    /// and array element position.
    pub fn is_ts_function_type(&self) -> bool {
        matches!(self.kind, NodeKind::TSFunctionType { .. })
    }

    /// Parenthesize a function type; leave anything else alone.
    #[must_use]
    pub fn paren_if_function(self) -> Self {
        if self.is_ts_function_type() {
            self.ts_paren()
        } else {
            self
        }
    }
}
