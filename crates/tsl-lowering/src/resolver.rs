//! Name-resolution oracle consumed by the lowering stage.
//!
//! The checker owns every answer. Lowering only ever asks about parse-tree
//! nodes; synthesized nodes are mapped back through their `original` chain
//! before a query is made.

use bitflags::bitflags;
use tsl_ast::NodeIndex;

bitflags! {
    /// Per-node facts recorded by the checker.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct NodeCheckFlags: u32 {
        /// The class body refers to the class's own constructor binding.
        const CLASS_WITH_CONSTRUCTOR_REFERENCE = 1 << 0;
        /// This identifier refers to the constructor of an enclosing class.
        const CONSTRUCTOR_REFERENCE_IN_CLASS = 1 << 1;
    }
}

/// Compile-time value of an enum member or a constant member access.
#[derive(Debug, Clone, PartialEq)]
pub enum ConstantValue {
    Number(f64),
    String(String),
}

/// How a type reference serializes into runtime metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TypeReferenceSerializationKind {
    /// The name could not be resolved to a type or value.
    #[default]
    Unknown,
    /// A class-like type whose name is also a value.
    TypeWithConstructSignatureAndValue,
    VoidNullableOrNeverType,
    NumberLikeType,
    BigIntLikeType,
    StringLikeType,
    BooleanType,
    ArrayLikeType,
    ESSymbolType,
    Promise,
    TypeWithCallSignature,
    ObjectType,
}

/// Queries the lowering stage makes of the checker.
pub trait EmitResolver {
    /// Constant value of an enum member, or of a property/element access
    /// that reads a constant enum member.
    fn constant_value(&self, node: NodeIndex) -> Option<ConstantValue>;

    /// An import alias whose binding is referenced somewhere in the file.
    fn is_referenced_alias_declaration(&self, node: NodeIndex) -> bool;

    /// An alias (import, export specifier, `export =`) that denotes a value.
    fn is_value_alias_declaration(&self, node: NodeIndex) -> bool;

    fn is_top_level_value_import_equals_with_entity_name(&self, node: NodeIndex) -> bool;

    /// Namespace, enum or source file whose export `identifier` resolves to.
    fn referenced_export_container(&self, identifier: NodeIndex) -> Option<NodeIndex>;

    /// Declaration that `identifier` resolves to as a value.
    fn referenced_value_declaration(&self, identifier: NodeIndex) -> Option<NodeIndex>;

    fn node_check_flags(&self, node: NodeIndex) -> NodeCheckFlags;

    /// Classify `type_name` as seen from `location`.
    fn type_reference_serialization_kind(
        &self,
        type_name: NodeIndex,
        location: NodeIndex,
    ) -> TypeReferenceSerializationKind;
}
