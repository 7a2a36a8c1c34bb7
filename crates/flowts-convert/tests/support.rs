//! Builders for Flow input trees used across the translator tests.

use flowts_ast::{ExportKind, Extra, Function, ImportKind, Node, NodeKind, PropertyKind, VarianceKind};
use flowts_common::{Comment, SourceLocation};
use std::sync::Arc;

pub fn flow(kind: NodeKind) -> Node {
    Node::new(kind)
}

pub fn at(node: Node, line: u32, column: u32) -> Node {
    node.at(SourceLocation::on_line(line, column, column + 1))
}

pub fn ident(name: &str) -> Node {
    Node::identifier(name)
}

pub fn string() -> Node {
    flow(NodeKind::StringTypeAnnotation)
}

pub fn number() -> Node {
    flow(NodeKind::NumberTypeAnnotation)
}

pub fn void() -> Node {
    flow(NodeKind::VoidTypeAnnotation)
}

pub fn annotation(ty: Node) -> Node {
    flow(NodeKind::TypeAnnotation {
        type_annotation: Box::new(ty),
    })
}

pub fn generic(name: &str, args: Vec<Node>) -> Node {
    let type_parameters = if args.is_empty() {
        None
    } else {
        Some(Box::new(flow(NodeKind::TypeParameterInstantiation {
            params: args,
        })))
    };
    flow(NodeKind::GenericTypeAnnotation {
        id: Box::new(ident(name)),
        type_parameters,
    })
}

pub fn nullable(ty: Node) -> Node {
    flow(NodeKind::NullableTypeAnnotation {
        type_annotation: Box::new(ty),
    })
}

pub fn union(types: Vec<Node>) -> Node {
    flow(NodeKind::UnionTypeAnnotation { types })
}

pub fn property(name: &str, value: Node) -> Node {
    flow(NodeKind::ObjectTypeProperty {
        key: Box::new(ident(name)),
        value: Box::new(value),
        optional: false,
        variance: None,
        method: false,
        kind: PropertyKind::Init,
    })
}

pub fn variant_property(name: &str, value: Node, kind: VarianceKind) -> Node {
    flow(NodeKind::ObjectTypeProperty {
        key: Box::new(ident(name)),
        value: Box::new(value),
        optional: false,
        variance: Some(Box::new(flow(NodeKind::Variance { kind }))),
        method: false,
        kind: PropertyKind::Init,
    })
}

/// `get name(): T` or `set name(value: T): void`, by `kind`.
pub fn accessor(name: &str, kind: PropertyKind, value: Node) -> Node {
    flow(NodeKind::ObjectTypeProperty {
        key: Box::new(ident(name)),
        value: Box::new(value),
        optional: false,
        variance: None,
        method: true,
        kind,
    })
}

pub fn spread(argument: Node) -> Node {
    flow(NodeKind::ObjectTypeSpreadProperty {
        argument: Box::new(argument),
    })
}

pub fn indexer(name: Option<&str>, key: Node, value: Node) -> Node {
    flow(NodeKind::ObjectTypeIndexer {
        id: name.map(|name| Box::new(ident(name))),
        key: Box::new(key),
        value: Box::new(value),
        variance: None,
    })
}

pub fn call_property(value: Node) -> Node {
    flow(NodeKind::ObjectTypeCallProperty {
        value: Box::new(value),
        is_static: false,
    })
}

pub fn object(properties: Vec<Node>) -> Node {
    object_with(properties, Vec::new(), false)
}

pub fn object_with(properties: Vec<Node>, indexers: Vec<Node>, exact: bool) -> Node {
    flow(NodeKind::ObjectTypeAnnotation {
        properties,
        indexers,
        call_properties: Vec::new(),
        internal_slots: Vec::new(),
        exact,
        inexact: false,
    })
}

pub fn param(name: Option<&str>, ty: Node) -> Node {
    flow(NodeKind::FunctionTypeParam {
        name: name.map(|name| Box::new(ident(name))),
        type_annotation: Box::new(ty),
        optional: false,
    })
}

pub fn function_type(params: Vec<Node>, rest: Option<Node>, return_type: Node) -> Node {
    flow(NodeKind::FunctionTypeAnnotation {
        type_parameters: None,
        this: None,
        params,
        rest: rest.map(Box::new),
        return_type: Box::new(return_type),
    })
}

pub fn type_parameter(name: &str) -> Node {
    flow(NodeKind::TypeParameter {
        name: Some(name.to_string()),
        bound: None,
        variance: None,
        default: None,
    })
}

pub fn type_alias(name: &str, right: Node) -> Node {
    flow(NodeKind::TypeAlias {
        id: Box::new(ident(name)),
        type_parameters: None,
        right: Box::new(right),
    })
}

pub fn interface(name: &str, body: Node) -> Node {
    flow(NodeKind::InterfaceDeclaration {
        id: Box::new(ident(name)),
        type_parameters: None,
        extends: Vec::new(),
        body: Box::new(body),
    })
}

pub fn export_type(declaration: Node) -> Node {
    flow(NodeKind::ExportNamedDeclaration {
        declaration: Some(Box::new(declaration)),
        specifiers: Vec::new(),
        source: None,
        export_kind: Some(ExportKind::Type),
        extra: Extra::new(),
    })
}

pub fn import(kind: ImportKind, specifiers: Vec<Node>) -> Node {
    flow(NodeKind::ImportDeclaration {
        specifiers,
        source: Box::new(Node::string_literal("./types")),
        import_kind: Some(kind),
        extra: Extra::new(),
    })
}

pub fn import_specifier(name: &str, kind: Option<ImportKind>) -> Node {
    flow(NodeKind::ImportSpecifier {
        imported: Box::new(ident(name)),
        local: Box::new(ident(name)),
        import_kind: kind,
        extra: Extra::new(),
    })
}

pub fn function_declaration(name: &str, params: Vec<Node>, return_type: Option<Node>) -> Node {
    flow(NodeKind::FunctionDeclaration(Function {
        id: Some(Box::new(ident(name))),
        params,
        body: Box::new(flow(NodeKind::Other(flowts_ast::GenericNode::new(
            "BlockStatement",
        )))),
        return_type: return_type.map(|ty| Box::new(annotation(ty))),
        ..Function::default()
    }))
}

pub fn typed_param(name: &str, ty: Node) -> Node {
    flow(NodeKind::Identifier {
        name: name.to_string(),
        optional: false,
        type_annotation: Some(Box::new(annotation(ty))),
        extra: Extra::new(),
    })
}

pub fn program(body: Vec<Node>) -> Node {
    flow(NodeKind::Program {
        body,
        directives: Vec::new(),
        source_type: flowts_ast::SourceType::Module,
        extra: Extra::new(),
    })
}

/// A `File` whose first statement and file-level list share the comments.
pub fn file(body: Vec<Node>, comments: Vec<Arc<Comment>>) -> Node {
    flow(NodeKind::File {
        program: Box::new(program(body)),
        comments,
        extra: Extra::new(),
    })
}

pub fn with_leading(mut node: Node, comments: &[Arc<Comment>]) -> Node {
    node.meta.leading_comments.extend(comments.iter().cloned());
    node
}

/// Statements of a translated `File` or `Program`.
pub fn statements(root: &Node) -> &[Node] {
    match &root.kind {
        NodeKind::File { program, .. } => statements(program),
        NodeKind::Program { body, .. } => body,
        other => panic!("expected File or Program, got {}", other.kind_name()),
    }
}

pub fn kinds(nodes: &[Node]) -> Vec<&str> {
    nodes.iter().map(Node::kind_name).collect()
}

/// True when no Flow-only node is left anywhere in `node`.
pub fn is_fully_translated(node: &Node) -> bool {
    !node.any_node(&|node| node.algebra() == flowts_ast::Algebra::Source)
}
