//! Test fixtures: a table-backed checker and small tree builders.
//!
//! Trees are built bottom-up directly in a `NodeArena`, the way a parser
//! would leave them. Everything allocated before lowering counts as parse
//! tree, so the indices returned by the builders are the ones the resolver
//! tables are keyed by.

use rustc_hash::{FxHashMap, FxHashSet};
use tsl_ast::{
    ClassData, HeritageToken, ModifierKind, Modifiers, Node, NodeArena, NodeData, NodeFlags,
    NodeIndex, NodeList, Printer, TypeKeyword, VarKind,
};
use tsl_common::options::LoweringOptions;

use crate::resolver::{ConstantValue, EmitResolver, NodeCheckFlags, TypeReferenceSerializationKind};
use crate::substitution::{SubstitutionRegistry, collect_substitutions};
use crate::{LoweringOutput, lower_source_file};

/// Checker answers looked up by parse-tree node.
#[derive(Debug, Default)]
pub(crate) struct TableResolver {
    pub constants: FxHashMap<NodeIndex, ConstantValue>,
    pub referenced_aliases: FxHashSet<NodeIndex>,
    pub value_aliases: FxHashSet<NodeIndex>,
    pub top_level_import_equals: FxHashSet<NodeIndex>,
    pub export_containers: FxHashMap<NodeIndex, NodeIndex>,
    pub value_declarations: FxHashMap<NodeIndex, NodeIndex>,
    pub check_flags: FxHashMap<NodeIndex, NodeCheckFlags>,
    pub serialization_kinds: FxHashMap<NodeIndex, TypeReferenceSerializationKind>,
}

impl EmitResolver for TableResolver {
    fn constant_value(&self, node: NodeIndex) -> Option<ConstantValue> {
        self.constants.get(&node).cloned()
    }

    fn is_referenced_alias_declaration(&self, node: NodeIndex) -> bool {
        self.referenced_aliases.contains(&node)
    }

    fn is_value_alias_declaration(&self, node: NodeIndex) -> bool {
        self.value_aliases.contains(&node)
    }

    fn is_top_level_value_import_equals_with_entity_name(&self, node: NodeIndex) -> bool {
        self.top_level_import_equals.contains(&node)
    }

    fn referenced_export_container(&self, identifier: NodeIndex) -> Option<NodeIndex> {
        self.export_containers.get(&identifier).copied()
    }

    fn referenced_value_declaration(&self, identifier: NodeIndex) -> Option<NodeIndex> {
        self.value_declarations.get(&identifier).copied()
    }

    fn node_check_flags(&self, node: NodeIndex) -> NodeCheckFlags {
        self.check_flags.get(&node).copied().unwrap_or_default()
    }

    fn type_reference_serialization_kind(
        &self,
        type_name: NodeIndex,
        _location: NodeIndex,
    ) -> TypeReferenceSerializationKind {
        self.serialization_kinds
            .get(&type_name)
            .copied()
            .unwrap_or_default()
    }
}

/// A lowered unit together with its printed form.
pub(crate) struct Lowered {
    pub arena: NodeArena,
    pub output: LoweringOutput,
    pub text: String,
}

/// Lower `root`, collect substitutions and print the result.
pub(crate) fn lower(
    mut arena: NodeArena,
    root: NodeIndex,
    resolver: &TableResolver,
    options: &LoweringOptions,
) -> Lowered {
    tsl_common::tracing_config::init_tracing();
    let registry = SubstitutionRegistry::new();
    let output = lower_source_file(&mut arena, root, resolver, options, &registry)
        .expect("lowering should succeed");
    let table = collect_substitutions(&mut arena, &output, resolver, options, &registry)
        .expect("substitution walk should succeed");
    let text = Printer::new(&arena)
        .with_substitutions(&table)
        .print(output.source_file);
    Lowered {
        arena,
        output,
        text,
    }
}

/// Lower with default options and an empty checker.
pub(crate) fn lower_plain(arena: NodeArena, root: NodeIndex) -> Lowered {
    lower(arena, root, &TableResolver::default(), &LoweringOptions::default())
}

pub(crate) fn print(arena: &NodeArena, node: NodeIndex) -> String {
    Printer::new(arena).print(node)
}

// =============================================================================
// Builders
// =============================================================================

pub(crate) fn script(arena: &mut NodeArena, statements: Vec<NodeIndex>) -> NodeIndex {
    source_file(arena, statements, false)
}

pub(crate) fn module(arena: &mut NodeArena, statements: Vec<NodeIndex>) -> NodeIndex {
    source_file(arena, statements, true)
}

fn source_file(
    arena: &mut NodeArena,
    statements: Vec<NodeIndex>,
    is_external_module: bool,
) -> NodeIndex {
    arena.alloc(NodeData::SourceFile {
        file_name: "test.ts".into(),
        statements: statements.into(),
        is_external_module,
        is_declaration_file: false,
    })
}

pub(crate) fn mods(kinds: &[ModifierKind]) -> Modifiers {
    Modifiers::from_kinds(kinds)
}

pub(crate) fn keyword(arena: &mut NodeArena, keyword: TypeKeyword) -> NodeIndex {
    arena.alloc(NodeData::KeywordType(keyword))
}

pub(crate) fn type_ref(arena: &mut NodeArena, name: &str) -> NodeIndex {
    let type_name = arena.create_identifier(name);
    arena.alloc(NodeData::TypeReference {
        type_name,
        type_arguments: NodeList::new(),
    })
}

pub(crate) fn decorator(arena: &mut NodeArena, name: &str) -> NodeIndex {
    let expression = arena.create_identifier(name);
    arena.alloc(NodeData::Decorator { expression })
}

/// `let name: type_node = initializer;` with optional pieces.
pub(crate) fn variable(
    arena: &mut NodeArena,
    modifiers: Modifiers,
    kind: VarKind,
    name: &str,
    type_node: NodeIndex,
    initializer: NodeIndex,
) -> NodeIndex {
    let name = arena.create_identifier(name);
    let declaration = arena.alloc(NodeData::VariableDeclaration {
        name,
        exclamation: false,
        type_node,
        initializer,
    });
    let declaration_list = arena.create_variable_declaration_list(kind, vec![declaration]);
    arena.alloc(NodeData::VariableStatement {
        modifiers,
        declaration_list,
    })
}

pub(crate) fn expression_statement(arena: &mut NodeArena, name: &str) -> (NodeIndex, NodeIndex) {
    let identifier = arena.create_identifier(name);
    (identifier, arena.create_expression_statement(identifier))
}

pub(crate) fn parameter(
    arena: &mut NodeArena,
    decorators: Vec<NodeIndex>,
    modifiers: Modifiers,
    name: &str,
    type_node: NodeIndex,
) -> NodeIndex {
    let name = arena.create_identifier(name);
    arena.alloc(NodeData::Parameter {
        decorators: decorators.into(),
        modifiers,
        dot_dot_dot: false,
        name,
        question: false,
        type_node,
        initializer: NodeIndex::NONE,
    })
}

pub(crate) fn block(arena: &mut NodeArena, statements: Vec<NodeIndex>) -> NodeIndex {
    arena.alloc(NodeData::Block {
        statements: statements.into(),
        multi_line: true,
    })
}

pub(crate) fn constructor(
    arena: &mut NodeArena,
    parameters: Vec<NodeIndex>,
    statements: Vec<NodeIndex>,
) -> NodeIndex {
    let body = block(arena, statements);
    arena.alloc(NodeData::Constructor {
        modifiers: Modifiers::none(),
        parameters: parameters.into(),
        body,
    })
}

pub(crate) fn property(
    arena: &mut NodeArena,
    decorators: Vec<NodeIndex>,
    modifiers: Modifiers,
    name: NodeIndex,
    type_node: NodeIndex,
    initializer: NodeIndex,
) -> NodeIndex {
    arena.alloc(NodeData::PropertyDeclaration {
        decorators: decorators.into(),
        modifiers,
        name,
        question: false,
        exclamation: false,
        type_node,
        initializer,
    })
}

pub(crate) fn method(
    arena: &mut NodeArena,
    decorators: Vec<NodeIndex>,
    modifiers: Modifiers,
    name: NodeIndex,
    parameters: Vec<NodeIndex>,
    return_type: NodeIndex,
) -> NodeIndex {
    let body = block(arena, Vec::new());
    arena.alloc(NodeData::MethodDeclaration {
        decorators: decorators.into(),
        modifiers,
        asterisk: false,
        name,
        question: false,
        type_parameters: NodeList::new(),
        parameters: parameters.into(),
        return_type,
        body,
    })
}

pub(crate) fn class_data(
    decorators: Vec<NodeIndex>,
    modifiers: Modifiers,
    name: NodeIndex,
    members: Vec<NodeIndex>,
) -> ClassData {
    ClassData {
        decorators: decorators.into(),
        modifiers,
        name,
        type_parameters: NodeList::new(),
        heritage_clauses: NodeList::new(),
        members: members.into(),
    }
}

pub(crate) fn class_declaration(arena: &mut NodeArena, class: ClassData) -> NodeIndex {
    arena.alloc(NodeData::ClassDeclaration(class))
}

pub(crate) fn heritage(arena: &mut NodeArena, token: HeritageToken, name: &str) -> NodeIndex {
    let expression = arena.create_identifier(name);
    let base = arena.alloc(NodeData::ExpressionWithTypeArguments {
        expression,
        type_arguments: NodeList::new(),
    });
    arena.alloc(NodeData::HeritageClause {
        token,
        types: NodeList::from(vec![base]),
    })
}

/// `namespace name { statements }`.
pub(crate) fn namespace(
    arena: &mut NodeArena,
    modifiers: Modifiers,
    name: &str,
    statements: Vec<NodeIndex>,
) -> NodeIndex {
    let body = arena.alloc(NodeData::ModuleBlock {
        statements: statements.into(),
    });
    namespace_with_body(arena, modifiers, name, body, NodeFlags::NAMESPACE)
}

pub(crate) fn namespace_with_body(
    arena: &mut NodeArena,
    modifiers: Modifiers,
    name: &str,
    body: NodeIndex,
    flags: NodeFlags,
) -> NodeIndex {
    let name = arena.create_identifier(name);
    let mut node = Node::new(NodeData::ModuleDeclaration {
        modifiers,
        name,
        body,
    });
    node.flags = flags;
    arena.alloc_node(node)
}

pub(crate) fn enum_member(arena: &mut NodeArena, name: &str, initializer: NodeIndex) -> NodeIndex {
    let name = arena.create_identifier(name);
    arena.alloc(NodeData::EnumMember { name, initializer })
}

pub(crate) fn enum_declaration(
    arena: &mut NodeArena,
    modifiers: Modifiers,
    name: &str,
    members: Vec<NodeIndex>,
) -> NodeIndex {
    let name = arena.create_identifier(name);
    arena.alloc(NodeData::EnumDeclaration {
        modifiers,
        name,
        members: members.into(),
    })
}

/// `interface name {}`.
pub(crate) fn interface(arena: &mut NodeArena, name: &str) -> NodeIndex {
    let name = arena.create_identifier(name);
    arena.alloc(NodeData::InterfaceDeclaration {
        modifiers: Modifiers::none(),
        name,
        type_parameters: NodeList::new(),
        heritage_clauses: NodeList::new(),
        members: NodeList::new(),
    })
}
