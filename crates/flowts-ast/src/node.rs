//! Node types for Flow-annotated and TypeScript-annotated programs.
//!
//! A program is a tree of `Node`s. Each node is a `NodeKind` (the closed set
//! of kinds the translator understands, plus a generic fallback for
//! value-level JavaScript it never needs to inspect) and a `NodeMeta` holding
//! the position and comments the parser attached.
//!
//! Kinds fall into three algebras:
//! - **Source**: Flow type syntax (`NullableTypeAnnotation`, `TypeAlias`, ...)
//! - **Target**: TypeScript type syntax (`TSUnionType`, `TSTypeAliasDeclaration`, ...)
//! - **Shared**: JavaScript that both share (`Program`, `Identifier`, ...)
//!
//! The JSON form is the Babel AST shape: a `"type"` discriminant, camelCase
//! fields, and `start`/`end`/`loc`/`*Comments` metadata on every node.

use flowts_common::{Comment, SourceLocation};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

// =============================================================================
// Node
// =============================================================================

/// A node in the program tree.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Node {
    #[serde(flatten)]
    pub meta: NodeMeta,
    #[serde(flatten)]
    pub kind: NodeKind,
}

impl Node {
    pub fn new(kind: NodeKind) -> Self {
        Node {
            meta: NodeMeta::default(),
            kind,
        }
    }

    /// Builder-style: attach metadata.
    #[must_use]
    pub fn with_meta(mut self, meta: NodeMeta) -> Self {
        self.meta = meta;
        self
    }

    /// Builder-style: attach a location.
    #[must_use]
    pub fn at(mut self, loc: SourceLocation) -> Self {
        self.meta.loc = Some(loc);
        self
    }

    pub fn loc(&self) -> Option<&SourceLocation> {
        self.meta.loc.as_ref()
    }

    pub fn kind_name(&self) -> &str {
        self.kind.kind_name()
    }

    pub fn algebra(&self) -> Algebra {
        self.kind.algebra()
    }

    /// Name of an `Identifier` node.
    pub fn identifier_name(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Identifier { name, .. } => Some(name),
            _ => None,
        }
    }

    /// Take this node out, leaving a `Noop` in its place.
    pub fn take(&mut self) -> Node {
        std::mem::take(self)
    }
}

/// Position and comments attached to a node.
///
/// Comment lists hold shared `Arc`s: copying metadata onto a replacement
/// node shares the comment objects with the original.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loc: Option<SourceLocation>,
    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub leading_comments: Vec<Arc<Comment>>,
    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub trailing_comments: Vec<Arc<Comment>>,
    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub inner_comments: Vec<Arc<Comment>>,
}

/// Parsers write `null` for absent comment lists; read it as empty.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

// =============================================================================
// Algebra
// =============================================================================

/// Which type system a node kind belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algebra {
    /// Flow syntax, to be translated
    Source,
    /// TypeScript syntax, already translated
    Target,
    /// JavaScript common to both
    Shared,
}

// =============================================================================
// Modifiers
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    #[default]
    Module,
    Script,
}

/// `import type` / `import typeof` / plain `import`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImportKind {
    Value,
    Type,
    Typeof,
}

/// `export type` / plain `export`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportKind {
    Value,
    Type,
}

/// Flow variance sigil: `+` is `Plus`, `-` is `Minus`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VarianceKind {
    Plus,
    Minus,
}

/// `init` for plain properties, `get`/`set` for accessors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyKind {
    #[default]
    Init,
    Get,
    Set,
}

/// Kind of a `TSMethodSignature`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MethodKind {
    #[default]
    Method,
    Get,
    Set,
}

/// Operator of a `TSTypeOperator` (`keyof T`, `unique symbol`, `readonly T[]`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeOperator {
    Keyof,
    Unique,
    Readonly,
}

// =============================================================================
// Functions
// =============================================================================

/// Fields shared by functions, arrows and methods.
///
/// Only the signature is modeled. Everything else (`async`, `generator`, a
/// method's `key`, `kind` and decorators, ...) is kept in `extra`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Function {
    #[serde(default)]
    pub id: Option<Box<Node>>,
    #[serde(default)]
    pub params: Vec<Node>,
    pub body: Box<Node>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_type: Option<Box<Node>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_parameters: Option<Box<Node>>,
    /// Flow `%checks` predicate
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub predicate: Option<Box<Node>>,
    #[serde(flatten)]
    pub extra: Extra,
}

// =============================================================================
// Generic nodes
// =============================================================================

/// A node kind the translator does not model field by field.
///
/// Child nodes inside it are still reachable by traversal.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GenericNode {
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(flatten)]
    pub fields: Extra,
}

/// Fields of a node that the translator carries through without reading.
pub type Extra = BTreeMap<String, GenericField>;

/// A field of a `GenericNode`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GenericField {
    Node(Box<Node>),
    List(Vec<Option<Node>>),
    Value(serde_json::Value),
}

impl GenericNode {
    pub fn new(type_name: impl Into<String>) -> Self {
        GenericNode {
            type_name: type_name.into(),
            fields: Extra::new(),
        }
    }

    #[must_use]
    pub fn with_child(mut self, field: impl Into<String>, child: Node) -> Self {
        self.fields
            .insert(field.into(), GenericField::Node(Box::new(child)));
        self
    }

    #[must_use]
    pub fn with_children(mut self, field: impl Into<String>, children: Vec<Node>) -> Self {
        self.fields.insert(
            field.into(),
            GenericField::List(children.into_iter().map(Some).collect()),
        );
        self
    }

    #[must_use]
    pub fn with_value(mut self, field: impl Into<String>, value: serde_json::Value) -> Self {
        self.fields.insert(field.into(), GenericField::Value(value));
        self
    }

    /// Classify an unmodeled kind by its name.
    ///
    /// Flow-only syntax the translator has no mapping for (indexed access
    /// types, `declare export`, `%checks` predicates, Flow enums, ...) lands
    /// here and must be reported, not passed through.
    pub fn algebra(&self) -> Algebra {
        let name = self.type_name.as_str();
        if name.starts_with("TS") {
            return Algebra::Target;
        }
        let flow_only = name.ends_with("TypeAnnotation")
            || name.starts_with("Declare")
            || name.starts_with("ObjectType")
            || name.starts_with("Enum")
            || matches!(
                name,
                "IndexedAccessType"
                    | "OptionalIndexedAccessType"
                    | "InferredPredicate"
                    | "DeclaredPredicate"
                    | "InterfaceTypeAnnotation"
                    | "TypeParameter"
                    | "TypeParameterDeclaration"
                    | "TypeParameterInstantiation"
                    | "OpaqueType"
                    | "TypeAlias"
                    | "InterfaceDeclaration"
                    | "InterfaceExtends"
                    | "ClassImplements"
                    | "TypeCastExpression"
                    | "QualifiedTypeIdentifier"
                    | "FunctionTypeParam"
                    | "Variance"
            );
        if flow_only {
            Algebra::Source
        } else {
            Algebra::Shared
        }
    }
}

// =============================================================================
// NodeKind
// =============================================================================

/// Every node kind, tagged by its Babel `type` name.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all_fields = "camelCase")]
pub enum NodeKind {
    // =========================================================================
    // Shared JavaScript
    // =========================================================================
    /// Placeholder left behind by `Node::take`
    #[default]
    Noop,

    File {
        program: Box<Node>,
        #[serde(default, deserialize_with = "null_as_empty")]
        comments: Vec<Arc<Comment>>,
        #[serde(flatten)]
        extra: Extra,
    },

    Program {
        body: Vec<Node>,
        #[serde(default)]
        directives: Vec<Node>,
        #[serde(default)]
        source_type: SourceType,
        /// `interpreter` (the `#!` line) and anything newer
        #[serde(flatten)]
        extra: Extra,
    },

    Identifier {
        name: String,
        #[serde(default)]
        optional: bool,
        #[serde(default)]
        type_annotation: Option<Box<Node>>,
        #[serde(flatten)]
        extra: Extra,
    },

    StringLiteral {
        value: String,
    },

    NumericLiteral {
        value: f64,
    },

    BooleanLiteral {
        value: bool,
    },

    NullLiteral,

    ImportDeclaration {
        #[serde(default)]
        specifiers: Vec<Node>,
        source: Box<Node>,
        #[serde(default)]
        import_kind: Option<ImportKind>,
        /// Import attributes, `phase`, ...
        #[serde(flatten)]
        extra: Extra,
    },

    ImportSpecifier {
        imported: Box<Node>,
        local: Box<Node>,
        #[serde(default)]
        import_kind: Option<ImportKind>,
        #[serde(flatten)]
        extra: Extra,
    },

    ImportDefaultSpecifier {
        local: Box<Node>,
        #[serde(flatten)]
        extra: Extra,
    },

    ImportNamespaceSpecifier {
        local: Box<Node>,
        #[serde(flatten)]
        extra: Extra,
    },

    ExportNamedDeclaration {
        #[serde(default)]
        declaration: Option<Box<Node>>,
        #[serde(default)]
        specifiers: Vec<Node>,
        #[serde(default)]
        source: Option<Box<Node>>,
        #[serde(default)]
        export_kind: Option<ExportKind>,
        #[serde(flatten)]
        extra: Extra,
    },

    ExportSpecifier {
        local: Box<Node>,
        exported: Box<Node>,
        #[serde(flatten)]
        extra: Extra,
    },

    FunctionDeclaration(Function),

    FunctionExpression(Function),

    ArrowFunctionExpression(Function),

    ClassMethod(Function),

    ClassPrivateMethod(Function),

    ObjectMethod(Function),

    RestElement {
        argument: Box<Node>,
        #[serde(default)]
        type_annotation: Option<Box<Node>>,
        #[serde(flatten)]
        extra: Extra,
    },

    ClassProperty {
        key: Box<Node>,
        #[serde(default)]
        value: Option<Box<Node>>,
        #[serde(default)]
        type_annotation: Option<Box<Node>>,
        #[serde(default)]
        variance: Option<Box<Node>>,
        #[serde(default)]
        computed: bool,
        #[serde(rename = "static", default)]
        is_static: bool,
        #[serde(default)]
        readonly: bool,
        /// `declare`, decorators, ...
        #[serde(flatten)]
        extra: Extra,
    },

    // =========================================================================
    // Flow (source) types
    // =========================================================================
    AnyTypeAnnotation,
    MixedTypeAnnotation,
    EmptyTypeAnnotation,
    /// `*`
    ExistsTypeAnnotation,
    BooleanTypeAnnotation,
    NumberTypeAnnotation,
    StringTypeAnnotation,
    SymbolTypeAnnotation,
    BigIntTypeAnnotation,
    VoidTypeAnnotation,
    NullLiteralTypeAnnotation,
    ThisTypeAnnotation,

    BooleanLiteralTypeAnnotation {
        value: bool,
    },

    NumberLiteralTypeAnnotation {
        value: f64,
    },

    StringLiteralTypeAnnotation {
        value: String,
    },

    ArrayTypeAnnotation {
        element_type: Box<Node>,
    },

    /// `?T`
    NullableTypeAnnotation {
        type_annotation: Box<Node>,
    },

    TupleTypeAnnotation {
        types: Vec<Node>,
    },

    UnionTypeAnnotation {
        types: Vec<Node>,
    },

    IntersectionTypeAnnotation {
        types: Vec<Node>,
    },

    TypeofTypeAnnotation {
        argument: Box<Node>,
    },

    /// `Name` or `Name<Args>`
    GenericTypeAnnotation {
        id: Box<Node>,
        #[serde(default)]
        type_parameters: Option<Box<Node>>,
    },

    /// `A.B`
    QualifiedTypeIdentifier {
        qualification: Box<Node>,
        id: Box<Node>,
    },

    FunctionTypeAnnotation {
        #[serde(default)]
        type_parameters: Option<Box<Node>>,
        /// `this: T` parameter
        #[serde(default)]
        this: Option<Box<Node>>,
        params: Vec<Node>,
        #[serde(default)]
        rest: Option<Box<Node>>,
        return_type: Box<Node>,
    },

    FunctionTypeParam {
        #[serde(default)]
        name: Option<Box<Node>>,
        type_annotation: Box<Node>,
        #[serde(default)]
        optional: bool,
    },

    ObjectTypeAnnotation {
        #[serde(default)]
        properties: Vec<Node>,
        #[serde(default, deserialize_with = "null_as_empty")]
        indexers: Vec<Node>,
        #[serde(default, deserialize_with = "null_as_empty")]
        call_properties: Vec<Node>,
        /// `[[slot]]: T`
        #[serde(default, deserialize_with = "null_as_empty")]
        internal_slots: Vec<Node>,
        #[serde(default)]
        exact: bool,
        #[serde(default)]
        inexact: bool,
    },

    ObjectTypeProperty {
        key: Box<Node>,
        value: Box<Node>,
        #[serde(default)]
        optional: bool,
        #[serde(default)]
        variance: Option<Box<Node>>,
        #[serde(default)]
        method: bool,
        #[serde(default)]
        kind: PropertyKind,
    },

    /// `...T` inside an object type
    ObjectTypeSpreadProperty {
        argument: Box<Node>,
    },

    /// `[K]: V` or `[name: K]: V`
    ObjectTypeIndexer {
        #[serde(default)]
        id: Option<Box<Node>>,
        key: Box<Node>,
        value: Box<Node>,
        #[serde(default)]
        variance: Option<Box<Node>>,
    },

    /// `(): T` inside an object type
    ObjectTypeCallProperty {
        value: Box<Node>,
        #[serde(rename = "static", default)]
        is_static: bool,
    },

    Variance {
        kind: VarianceKind,
    },

    /// `: T`
    TypeAnnotation {
        type_annotation: Box<Node>,
    },

    TypeParameterDeclaration {
        params: Vec<Node>,
    },

    TypeParameter {
        #[serde(default)]
        name: Option<String>,
        #[serde(default)]
        bound: Option<Box<Node>>,
        #[serde(default)]
        variance: Option<Box<Node>>,
        #[serde(default)]
        default: Option<Box<Node>>,
    },

    TypeParameterInstantiation {
        params: Vec<Node>,
    },

    /// `type A = T`
    TypeAlias {
        id: Box<Node>,
        #[serde(default)]
        type_parameters: Option<Box<Node>>,
        right: Box<Node>,
    },

    /// `opaque type A: Super = T`
    OpaqueType {
        id: Box<Node>,
        #[serde(default)]
        type_parameters: Option<Box<Node>>,
        #[serde(default)]
        supertype: Option<Box<Node>>,
        impltype: Box<Node>,
    },

    InterfaceDeclaration {
        id: Box<Node>,
        #[serde(default)]
        type_parameters: Option<Box<Node>>,
        #[serde(default, deserialize_with = "null_as_empty")]
        extends: Vec<Node>,
        body: Box<Node>,
    },

    InterfaceExtends {
        id: Box<Node>,
        #[serde(default)]
        type_parameters: Option<Box<Node>>,
    },

    ClassImplements {
        id: Box<Node>,
        #[serde(default)]
        type_parameters: Option<Box<Node>>,
    },

    /// `(expr: T)`
    TypeCastExpression {
        expression: Box<Node>,
        type_annotation: Box<Node>,
    },

    DeclareClass {
        id: Box<Node>,
    },

    DeclareFunction {
        id: Box<Node>,
    },

    DeclareInterface {
        id: Box<Node>,
    },

    DeclareModule {
        id: Box<Node>,
    },

    DeclareTypeAlias {
        id: Box<Node>,
    },

    DeclareVariable {
        id: Box<Node>,
    },

    // =========================================================================
    // TypeScript (target) types
    // =========================================================================
    TSAnyKeyword,
    TSUnknownKeyword,
    TSNeverKeyword,
    TSBooleanKeyword,
    TSNumberKeyword,
    TSStringKeyword,
    TSSymbolKeyword,
    TSBigIntKeyword,
    TSNullKeyword,
    TSUndefinedKeyword,
    TSVoidKeyword,
    TSThisType,

    TSLiteralType {
        literal: Box<Node>,
    },

    TSArrayType {
        element_type: Box<Node>,
    },

    TSTupleType {
        element_types: Vec<Node>,
    },

    TSUnionType {
        types: Vec<Node>,
    },

    TSIntersectionType {
        types: Vec<Node>,
    },

    TSParenthesizedType {
        type_annotation: Box<Node>,
    },

    TSTypeOperator {
        operator: TypeOperator,
        type_annotation: Box<Node>,
    },

    TSTypeQuery {
        expr_name: Box<Node>,
    },

    TSTypeReference {
        type_name: Box<Node>,
        #[serde(default)]
        type_parameters: Option<Box<Node>>,
    },

    TSQualifiedName {
        left: Box<Node>,
        right: Box<Node>,
    },

    TSFunctionType {
        #[serde(default)]
        type_parameters: Option<Box<Node>>,
        parameters: Vec<Node>,
        #[serde(default)]
        type_annotation: Option<Box<Node>>,
    },

    TSTypeLiteral {
        members: Vec<Node>,
    },

    TSPropertySignature {
        key: Box<Node>,
        #[serde(default)]
        type_annotation: Option<Box<Node>>,
        #[serde(default)]
        optional: bool,
        #[serde(default)]
        readonly: bool,
        #[serde(default)]
        computed: bool,
    },

    /// `get a(): T` / `set a(v: T)` in a type literal or interface
    TSMethodSignature {
        key: Box<Node>,
        kind: MethodKind,
        #[serde(default)]
        type_parameters: Option<Box<Node>>,
        parameters: Vec<Node>,
        #[serde(default)]
        type_annotation: Option<Box<Node>>,
        #[serde(default)]
        computed: bool,
        #[serde(default)]
        optional: bool,
    },

    TSIndexSignature {
        parameters: Vec<Node>,
        #[serde(default)]
        type_annotation: Option<Box<Node>>,
        #[serde(default)]
        readonly: bool,
    },

    TSTypeAnnotation {
        type_annotation: Box<Node>,
    },

    TSTypeParameterDeclaration {
        params: Vec<Node>,
    },

    TSTypeParameter {
        name: String,
        #[serde(default)]
        constraint: Option<Box<Node>>,
        #[serde(default)]
        default: Option<Box<Node>>,
    },

    TSTypeParameterInstantiation {
        params: Vec<Node>,
    },

    TSTypeAliasDeclaration {
        id: Box<Node>,
        #[serde(default)]
        type_parameters: Option<Box<Node>>,
        type_annotation: Box<Node>,
        #[serde(default)]
        declare: bool,
    },

    TSInterfaceDeclaration {
        id: Box<Node>,
        #[serde(default)]
        type_parameters: Option<Box<Node>>,
        #[serde(default)]
        extends: Vec<Node>,
        body: Box<Node>,
    },

    TSInterfaceBody {
        body: Vec<Node>,
    },

    TSExpressionWithTypeArguments {
        expression: Box<Node>,
        #[serde(default)]
        type_parameters: Option<Box<Node>>,
    },

    TSAsExpression {
        expression: Box<Node>,
        type_annotation: Box<Node>,
    },

    // =========================================================================
    // Everything else
    // =========================================================================
    #[serde(untagged)]
    Other(GenericNode),
}

impl NodeKind {
    /// The Babel `type` name of this kind.
    pub fn kind_name(&self) -> &str {
        match self {
            NodeKind::Noop => "Noop",
            NodeKind::File { .. } => "File",
            NodeKind::Program { .. } => "Program",
            NodeKind::Identifier { .. } => "Identifier",
            NodeKind::StringLiteral { .. } => "StringLiteral",
            NodeKind::NumericLiteral { .. } => "NumericLiteral",
            NodeKind::BooleanLiteral { .. } => "BooleanLiteral",
            NodeKind::NullLiteral => "NullLiteral",
            NodeKind::ImportDeclaration { .. } => "ImportDeclaration",
            NodeKind::ImportSpecifier { .. } => "ImportSpecifier",
            NodeKind::ImportDefaultSpecifier { .. } => "ImportDefaultSpecifier",
            NodeKind::ImportNamespaceSpecifier { .. } => "ImportNamespaceSpecifier",
            NodeKind::ExportNamedDeclaration { .. } => "ExportNamedDeclaration",
            NodeKind::ExportSpecifier { .. } => "ExportSpecifier",
            NodeKind::FunctionDeclaration(_) => "FunctionDeclaration",
            NodeKind::FunctionExpression(_) => "FunctionExpression",
            NodeKind::ArrowFunctionExpression(_) => "ArrowFunctionExpression",
            NodeKind::ClassMethod(_) => "ClassMethod",
            NodeKind::ClassPrivateMethod(_) => "ClassPrivateMethod",
            NodeKind::ObjectMethod(_) => "ObjectMethod",
            NodeKind::RestElement { .. } => "RestElement",
            NodeKind::ClassProperty { .. } => "ClassProperty",

            NodeKind::AnyTypeAnnotation => "AnyTypeAnnotation",
            NodeKind::MixedTypeAnnotation => "MixedTypeAnnotation",
            NodeKind::EmptyTypeAnnotation => "EmptyTypeAnnotation",
            NodeKind::ExistsTypeAnnotation => "ExistsTypeAnnotation",
            NodeKind::BooleanTypeAnnotation => "BooleanTypeAnnotation",
            NodeKind::NumberTypeAnnotation => "NumberTypeAnnotation",
            NodeKind::StringTypeAnnotation => "StringTypeAnnotation",
            NodeKind::SymbolTypeAnnotation => "SymbolTypeAnnotation",
            NodeKind::BigIntTypeAnnotation => "BigIntTypeAnnotation",
            NodeKind::VoidTypeAnnotation => "VoidTypeAnnotation",
            NodeKind::NullLiteralTypeAnnotation => "NullLiteralTypeAnnotation",
            NodeKind::ThisTypeAnnotation => "ThisTypeAnnotation",
            NodeKind::BooleanLiteralTypeAnnotation { .. } => "BooleanLiteralTypeAnnotation",
            NodeKind::NumberLiteralTypeAnnotation { .. } => "NumberLiteralTypeAnnotation",
            NodeKind::StringLiteralTypeAnnotation { .. } => "StringLiteralTypeAnnotation",
            NodeKind::ArrayTypeAnnotation { .. } => "ArrayTypeAnnotation",
            NodeKind::NullableTypeAnnotation { .. } => "NullableTypeAnnotation",
            NodeKind::TupleTypeAnnotation { .. } => "TupleTypeAnnotation",
            NodeKind::UnionTypeAnnotation { .. } => "UnionTypeAnnotation",
            NodeKind::IntersectionTypeAnnotation { .. } => "IntersectionTypeAnnotation",
            NodeKind::TypeofTypeAnnotation { .. } => "TypeofTypeAnnotation",
            NodeKind::GenericTypeAnnotation { .. } => "GenericTypeAnnotation",
            NodeKind::QualifiedTypeIdentifier { .. } => "QualifiedTypeIdentifier",
            NodeKind::FunctionTypeAnnotation { .. } => "FunctionTypeAnnotation",
            NodeKind::FunctionTypeParam { .. } => "FunctionTypeParam",
            NodeKind::ObjectTypeAnnotation { .. } => "ObjectTypeAnnotation",
            NodeKind::ObjectTypeProperty { .. } => "ObjectTypeProperty",
            NodeKind::ObjectTypeSpreadProperty { .. } => "ObjectTypeSpreadProperty",
            NodeKind::ObjectTypeIndexer { .. } => "ObjectTypeIndexer",
            NodeKind::ObjectTypeCallProperty { .. } => "ObjectTypeCallProperty",
            NodeKind::Variance { .. } => "Variance",
            NodeKind::TypeAnnotation { .. } => "TypeAnnotation",
            NodeKind::TypeParameterDeclaration { .. } => "TypeParameterDeclaration",
            NodeKind::TypeParameter { .. } => "TypeParameter",
            NodeKind::TypeParameterInstantiation { .. } => "TypeParameterInstantiation",
            NodeKind::TypeAlias { .. } => "TypeAlias",
            NodeKind::OpaqueType { .. } => "OpaqueType",
            NodeKind::InterfaceDeclaration { .. } => "InterfaceDeclaration",
            NodeKind::InterfaceExtends { .. } => "InterfaceExtends",
            NodeKind::ClassImplements { .. } => "ClassImplements",
            NodeKind::TypeCastExpression { .. } => "TypeCastExpression",
            NodeKind::DeclareClass { .. } => "DeclareClass",
            NodeKind::DeclareFunction { .. } => "DeclareFunction",
            NodeKind::DeclareInterface { .. } => "DeclareInterface",
            NodeKind::DeclareModule { .. } => "DeclareModule",
            NodeKind::DeclareTypeAlias { .. } => "DeclareTypeAlias",
            NodeKind::DeclareVariable { .. } => "DeclareVariable",

            NodeKind::TSAnyKeyword => "TSAnyKeyword",
            NodeKind::TSUnknownKeyword => "TSUnknownKeyword",
            NodeKind::TSNeverKeyword => "TSNeverKeyword",
            NodeKind::TSBooleanKeyword => "TSBooleanKeyword",
            NodeKind::TSNumberKeyword => "TSNumberKeyword",
            NodeKind::TSStringKeyword => "TSStringKeyword",
            NodeKind::TSSymbolKeyword => "TSSymbolKeyword",
            NodeKind::TSBigIntKeyword => "TSBigIntKeyword",
            NodeKind::TSNullKeyword => "TSNullKeyword",
            NodeKind::TSUndefinedKeyword => "TSUndefinedKeyword",
            NodeKind::TSVoidKeyword => "TSVoidKeyword",
            NodeKind::TSThisType => "TSThisType",
            NodeKind::TSLiteralType { .. } => "TSLiteralType",
            NodeKind::TSArrayType { .. } => "TSArrayType",
            NodeKind::TSTupleType { .. } => "TSTupleType",
            NodeKind::TSUnionType { .. } => "TSUnionType",
            NodeKind::TSIntersectionType { .. } => "TSIntersectionType",
            NodeKind::TSParenthesizedType { .. } => "TSParenthesizedType",
            NodeKind::TSTypeOperator { .. } => "TSTypeOperator",
            NodeKind::TSTypeQuery { .. } => "TSTypeQuery",
            NodeKind::TSTypeReference { .. } => "TSTypeReference",
            NodeKind::TSQualifiedName { .. } => "TSQualifiedName",
            NodeKind::TSFunctionType { .. } => "TSFunctionType",
            NodeKind::TSTypeLiteral { .. } => "TSTypeLiteral",
            NodeKind::TSPropertySignature { .. } => "TSPropertySignature",
            NodeKind::TSMethodSignature { .. } => "TSMethodSignature",
            NodeKind::TSIndexSignature { .. } => "TSIndexSignature",
            NodeKind::TSTypeAnnotation { .. } => "TSTypeAnnotation",
            NodeKind::TSTypeParameterDeclaration { .. } => "TSTypeParameterDeclaration",
            NodeKind::TSTypeParameter { .. } => "TSTypeParameter",
            NodeKind::TSTypeParameterInstantiation { .. } => "TSTypeParameterInstantiation",
            NodeKind::TSTypeAliasDeclaration { .. } => "TSTypeAliasDeclaration",
            NodeKind::TSInterfaceDeclaration { .. } => "TSInterfaceDeclaration",
            NodeKind::TSInterfaceBody { .. } => "TSInterfaceBody",
            NodeKind::TSExpressionWithTypeArguments { .. } => "TSExpressionWithTypeArguments",
            NodeKind::TSAsExpression { .. } => "TSAsExpression",

            NodeKind::Other(generic) => &generic.type_name,
        }
    }

    /// Which type system this kind belongs to.
    pub fn algebra(&self) -> Algebra {
        match self {
            NodeKind::Noop
            | NodeKind::File { .. }
            | NodeKind::Program { .. }
            | NodeKind::Identifier { .. }
            | NodeKind::StringLiteral { .. }
            | NodeKind::NumericLiteral { .. }
            | NodeKind::BooleanLiteral { .. }
            | NodeKind::NullLiteral
            | NodeKind::ImportDeclaration { .. }
            | NodeKind::ImportSpecifier { .. }
            | NodeKind::ImportDefaultSpecifier { .. }
            | NodeKind::ImportNamespaceSpecifier { .. }
            | NodeKind::ExportNamedDeclaration { .. }
            | NodeKind::ExportSpecifier { .. }
            | NodeKind::FunctionDeclaration(_)
            | NodeKind::FunctionExpression(_)
            | NodeKind::ArrowFunctionExpression(_)
            | NodeKind::ClassMethod(_)
            | NodeKind::ClassPrivateMethod(_)
            | NodeKind::ObjectMethod(_)
            | NodeKind::RestElement { .. }
            | NodeKind::ClassProperty { .. } => Algebra::Shared,

            NodeKind::AnyTypeAnnotation
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
            | NodeKind::ArrayTypeAnnotation { .. }
            | NodeKind::NullableTypeAnnotation { .. }
            | NodeKind::TupleTypeAnnotation { .. }
            | NodeKind::UnionTypeAnnotation { .. }
            | NodeKind::IntersectionTypeAnnotation { .. }
            | NodeKind::TypeofTypeAnnotation { .. }
            | NodeKind::GenericTypeAnnotation { .. }
            | NodeKind::QualifiedTypeIdentifier { .. }
            | NodeKind::FunctionTypeAnnotation { .. }
            | NodeKind::FunctionTypeParam { .. }
            | NodeKind::ObjectTypeAnnotation { .. }
            | NodeKind::ObjectTypeProperty { .. }
            | NodeKind::ObjectTypeSpreadProperty { .. }
            | NodeKind::ObjectTypeIndexer { .. }
            | NodeKind::ObjectTypeCallProperty { .. }
            | NodeKind::Variance { .. }
            | NodeKind::TypeAnnotation { .. }
            | NodeKind::TypeParameterDeclaration { .. }
            | NodeKind::TypeParameter { .. }
            | NodeKind::TypeParameterInstantiation { .. }
            | NodeKind::TypeAlias { .. }
            | NodeKind::OpaqueType { .. }
            | NodeKind::InterfaceDeclaration { .. }
            | NodeKind::InterfaceExtends { .. }
            | NodeKind::ClassImplements { .. }
            | NodeKind::TypeCastExpression { .. }
            | NodeKind::DeclareClass { .. }
            | NodeKind::DeclareFunction { .. }
            | NodeKind::DeclareInterface { .. }
            | NodeKind::DeclareModule { .. }
            | NodeKind::DeclareTypeAlias { .. }
            | NodeKind::DeclareVariable { .. } => Algebra::Source,

            NodeKind::TSAnyKeyword
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
            | NodeKind::TSThisType
            | NodeKind::TSLiteralType { .. }
            | NodeKind::TSArrayType { .. }
            | NodeKind::TSTupleType { .. }
            | NodeKind::TSUnionType { .. }
            | NodeKind::TSIntersectionType { .. }
            | NodeKind::TSParenthesizedType { .. }
            | NodeKind::TSTypeOperator { .. }
            | NodeKind::TSTypeQuery { .. }
            | NodeKind::TSTypeReference { .. }
            | NodeKind::TSQualifiedName { .. }
            | NodeKind::TSFunctionType { .. }
            | NodeKind::TSTypeLiteral { .. }
            | NodeKind::TSPropertySignature { .. }
            | NodeKind::TSMethodSignature { .. }
            | NodeKind::TSIndexSignature { .. }
            | NodeKind::TSTypeAnnotation { .. }
            | NodeKind::TSTypeParameterDeclaration { .. }
            | NodeKind::TSTypeParameter { .. }
            | NodeKind::TSTypeParameterInstantiation { .. }
            | NodeKind::TSTypeAliasDeclaration { .. }
            | NodeKind::TSInterfaceDeclaration { .. }
            | NodeKind::TSInterfaceBody { .. }
            | NodeKind::TSExpressionWithTypeArguments { .. }
            | NodeKind::TSAsExpression { .. } => Algebra::Target,

            NodeKind::Other(generic) => generic.algebra(),
        }
    }
}
