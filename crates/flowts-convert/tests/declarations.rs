use super::*;
use crate::test_support::*;
use flowts_ast::VarianceKind;
use flowts_common::Warnings;

fn convert(node: Node) -> (Node, Warnings) {
    let mut warnings = Warnings::new();
    let converted = Converter::new(&mut warnings).convert(node).unwrap();
    (converted, warnings)
}

fn variance(kind: VarianceKind) -> Option<Box<Node>> {
    Some(Box::new(flow(NodeKind::Variance { kind })))
}

fn annotated_type(annotation: &Option<Box<Node>>) -> &Node {
    match annotation.as_deref().map(|node| &node.kind) {
        Some(NodeKind::TSTypeAnnotation { type_annotation }) => type_annotation,
        _ => panic!("expected TSTypeAnnotation"),
    }
}

// =============================================================================
// Type aliases and interfaces
// =============================================================================

#[test]
fn type_alias_keeps_name_and_parameters() {
    let alias = flow(NodeKind::TypeAlias {
        id: Box::new(ident("Box")),
        type_parameters: Some(Box::new(flow(NodeKind::TypeParameterDeclaration {
            params: vec![type_parameter("T")],
        }))),
        right: Box::new(generic("Array", vec![generic("T", Vec::new())])),
    });
    let (converted, warnings) = convert(alias);
    let NodeKind::TSTypeAliasDeclaration {
        id,
        type_parameters,
        type_annotation,
        declare,
    } = &converted.kind
    else {
        panic!("expected TSTypeAliasDeclaration, got {}", converted.kind_name());
    };
    assert_eq!(id.identifier_name(), Some("Box"));
    assert!(!declare);
    assert!(matches!(
        type_parameters.as_deref().map(|node| &node.kind),
        Some(NodeKind::TSTypeParameterDeclaration { params }) if kinds(params) == ["TSTypeParameter"]
    ));
    assert_eq!(type_annotation.kind_name(), "TSTypeReference");
    assert!(warnings.is_empty());
}

#[test]
fn opaque_type_becomes_transparent_alias_with_warning() {
    let opaque = at(
        flow(NodeKind::OpaqueType {
            id: Box::new(ident("UserId")),
            type_parameters: None,
            supertype: Some(Box::new(string())),
            impltype: Box::new(string()),
        }),
        2,
        0,
    );
    let (converted, warnings) = convert(opaque);
    assert!(matches!(
        &converted.kind,
        NodeKind::TSTypeAliasDeclaration { type_annotation, .. }
            if type_annotation.kind_name() == "TSStringKeyword"
    ));
    assert_eq!(warnings.len(), 1);
    let warning = &warnings.as_slice()[0];
    assert_eq!(warning.limitation, Limitation::OpaqueType);
    assert_eq!((warning.line, warning.column), (2, 1));
}

#[test]
fn interface_extends_become_heritage_clauses() {
    let mut declaration = interface("Child", object(vec![property("name", string())]));
    if let NodeKind::InterfaceDeclaration { extends, .. } = &mut declaration.kind {
        extends.push(flow(NodeKind::InterfaceExtends {
            id: Box::new(ident("Parent")),
            type_parameters: Some(Box::new(flow(NodeKind::TypeParameterInstantiation {
                params: vec![string()],
            }))),
        }));
    }

    let (converted, _) = convert(declaration);
    let NodeKind::TSInterfaceDeclaration { extends, body, .. } = &converted.kind else {
        panic!("expected TSInterfaceDeclaration");
    };
    assert_eq!(kinds(extends), vec!["TSExpressionWithTypeArguments"]);
    let NodeKind::TSExpressionWithTypeArguments {
        expression,
        type_parameters,
    } = &extends[0].kind
    else {
        unreachable!();
    };
    assert_eq!(expression.identifier_name(), Some("Parent"));
    assert!(matches!(
        type_parameters.as_deref().map(|node| &node.kind),
        Some(NodeKind::TSTypeParameterInstantiation { params }) if kinds(params) == ["TSStringKeyword"]
    ));
    assert!(matches!(
        &body.kind,
        NodeKind::TSInterfaceBody { body } if kinds(body) == ["TSPropertySignature"]
    ));
}

#[test]
fn interface_indexers_are_named() {
    let (converted, _) = convert(interface(
        "Dict",
        object_with(Vec::new(), vec![indexer(None, string(), number())], false),
    ));
    let NodeKind::TSInterfaceDeclaration { body, .. } = &converted.kind else {
        panic!("expected TSInterfaceDeclaration");
    };
    let NodeKind::TSInterfaceBody { body } = &body.kind else {
        panic!("expected TSInterfaceBody");
    };
    let NodeKind::TSIndexSignature { parameters, .. } = &body[0].kind else {
        panic!("expected TSIndexSignature");
    };
    assert_eq!(parameters[0].identifier_name(), Some("key"));
}

// =============================================================================
// Type parameters
// =============================================================================

#[test]
fn type_parameter_bound_becomes_constraint() {
    let parameter = flow(NodeKind::TypeParameter {
        name: Some("T".to_string()),
        bound: Some(Box::new(annotation(generic("Base", Vec::new())))),
        variance: None,
        default: Some(Box::new(generic("Base", Vec::new()))),
    });
    let (converted, warnings) = convert(parameter);
    let NodeKind::TSTypeParameter {
        name,
        constraint,
        default,
    } = &converted.kind
    else {
        panic!("expected TSTypeParameter");
    };
    assert_eq!(name, "T");
    assert_eq!(constraint.as_deref().map(Node::kind_name), Some("TSTypeReference"));
    assert_eq!(default.as_deref().map(Node::kind_name), Some("TSTypeReference"));
    assert!(warnings.is_empty());
}

#[test]
fn type_parameter_variance_warns() {
    let parameter = at(
        flow(NodeKind::TypeParameter {
            name: Some("T".to_string()),
            bound: None,
            variance: variance(VarianceKind::Plus),
            default: None,
        }),
        5,
        11,
    );
    let (converted, warnings) = convert(parameter);
    assert!(matches!(&converted.kind, NodeKind::TSTypeParameter { name, .. } if name == "T"));
    assert_eq!(warnings.count_of(Limitation::TypeParameterVariance), 1);
    assert_eq!(warnings.as_slice()[0].column, 12);
}

#[test]
fn unnamed_type_parameter_is_fatal() {
    let mut warnings = Warnings::new();
    let err = Converter::new(&mut warnings)
        .convert(at(
            flow(NodeKind::TypeParameter {
                name: None,
                bound: None,
                variance: None,
                default: None,
            }),
            4,
            6,
        ))
        .unwrap_err();
    assert_eq!(
        err,
        ConvertError::MissingTypeParameterName {
            at: At::from(Some(&SourceLocation::on_line(4, 6, 7))),
        }
    );
}

// =============================================================================
// Value-level nodes
// =============================================================================

#[test]
fn type_cast_becomes_as_expression() {
    let cast = flow(NodeKind::TypeCastExpression {
        expression: Box::new(ident("value")),
        type_annotation: Box::new(annotation(generic("Props", Vec::new()))),
    });
    let (converted, _) = convert(cast);
    let NodeKind::TSAsExpression {
        expression,
        type_annotation,
    } = &converted.kind
    else {
        panic!("expected TSAsExpression");
    };
    assert_eq!(expression.identifier_name(), Some("value"));
    assert_eq!(type_annotation.kind_name(), "TSTypeReference");
}

#[test]
fn function_declaration_returns_void_and_translates_parameters() {
    let declaration = function_declaration(
        "save",
        vec![typed_param("record", nullable(string())), ident("plain")],
        Some(void()),
    );
    let (converted, _) = convert(declaration);
    let NodeKind::FunctionDeclaration(function) = &converted.kind else {
        panic!("expected FunctionDeclaration");
    };

    assert_eq!(annotated_type(&function.return_type).kind_name(), "TSVoidKeyword");
    let NodeKind::Identifier {
        type_annotation, ..
    } = &function.params[0].kind
    else {
        panic!("expected Identifier");
    };
    assert_eq!(annotated_type(type_annotation).kind_name(), "TSUnionType");
    assert_eq!(function.params[1], ident("plain"));
    assert_eq!(function.body.kind_name(), "BlockStatement");
}

#[test]
fn void_argument_of_returned_promise_stays_void() {
    let declaration = function_declaration(
        "load",
        Vec::new(),
        Some(generic("Promise", vec![void()])),
    );
    let (converted, _) = convert(declaration);
    let NodeKind::FunctionDeclaration(function) = &converted.kind else {
        panic!("expected FunctionDeclaration");
    };
    let NodeKind::TSTypeReference {
        type_parameters, ..
    } = &annotated_type(&function.return_type).kind
    else {
        panic!("expected TSTypeReference");
    };
    assert!(matches!(
        type_parameters.as_deref().map(|node| &node.kind),
        Some(NodeKind::TSTypeParameterInstantiation { params }) if kinds(params) == ["TSVoidKeyword"]
    ));
}

#[test]
fn class_property_variance() {
    let property = |kind| {
        flow(NodeKind::ClassProperty {
            key: Box::new(ident("id")),
            value: None,
            type_annotation: Some(Box::new(annotation(string()))),
            variance: variance(kind),
            computed: false,
            is_static: false,
            readonly: false,
            extra: Extra::new(),
        })
    };

    let (covariant, warnings) = convert(property(VarianceKind::Plus));
    assert!(matches!(
        &covariant.kind,
        NodeKind::ClassProperty { variance: None, readonly: false, type_annotation: Some(annotation), .. }
            if annotation.kind_name() == "TSTypeAnnotation"
    ));
    assert_eq!(warnings.count_of(Limitation::Contravariance), 1);

    let (read_only, warnings) = convert(property(VarianceKind::Minus));
    assert!(matches!(
        read_only.kind,
        NodeKind::ClassProperty { variance: None, readonly: true, .. }
    ));
    assert!(warnings.is_empty());
}

// =============================================================================
// Imports and exports
// =============================================================================

#[test]
fn import_type_becomes_plain_import() {
    let (converted, _) = convert(import(
        ImportKind::Type,
        vec![import_specifier("User", None)],
    ));
    assert!(matches!(
        converted.kind,
        NodeKind::ImportDeclaration {
            import_kind: Some(ImportKind::Value),
            ..
        }
    ));
}

#[test]
fn type_specifiers_lose_their_modifier() {
    let (converted, _) = convert(import(
        ImportKind::Value,
        vec![
            import_specifier("User", Some(ImportKind::Type)),
            import_specifier("load", None),
        ],
    ));
    let NodeKind::ImportDeclaration { specifiers, .. } = &converted.kind else {
        panic!("expected ImportDeclaration");
    };
    for specifier in specifiers {
        assert!(matches!(
            specifier.kind,
            NodeKind::ImportSpecifier {
                import_kind: None,
                ..
            }
        ));
    }
}

#[test]
fn import_typeof_is_kept() {
    let declaration = import(ImportKind::Typeof, vec![import_specifier("config", None)]);
    let (converted, _) = convert(declaration.clone());
    assert_eq!(converted, declaration);
}

#[test]
fn export_type_drops_modifier_and_defers_declaration() {
    let (converted, _) = convert(export_type(type_alias("Id", string())));
    let NodeKind::ExportNamedDeclaration {
        declaration,
        export_kind,
        ..
    } = &converted.kind
    else {
        panic!("expected ExportNamedDeclaration");
    };
    assert_eq!(*export_kind, Some(ExportKind::Value));
    assert_eq!(declaration.as_deref().map(Node::kind_name), Some("TypeAlias"));
}
