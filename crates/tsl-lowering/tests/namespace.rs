use super::*;
use crate::test_utils::*;
use tsl_ast::{ModifierKind, Modifiers, NodeArena, NodeData, NodeFlags, NodeIndex, NodeList, VarKind};
use tsl_common::options::LoweringOptions;

/// `export var x = 1;` followed by a bare `x;` reference.
fn exported_x(arena: &mut NodeArena) -> (NodeIndex, Vec<NodeIndex>) {
    let one = arena.create_numeric_literal("1");
    let declaration = variable(
        arena,
        mods(&[ModifierKind::Export]),
        VarKind::Var,
        "x",
        NodeIndex::NONE,
        one,
    );
    let (reference, statement) = expression_statement(arena, "x");
    (reference, vec![declaration, statement])
}

#[test]
fn test_namespace_becomes_closure_over_container() {
    let mut arena = NodeArena::new();
    let (reference, statements) = exported_x(&mut arena);
    let ns = namespace(&mut arena, Modifiers::none(), "N", statements);
    let file = script(&mut arena, vec![ns]);
    let mut resolver = TableResolver::default();
    resolver.export_containers.insert(reference, ns);

    let lowered = lower(arena, file, &resolver, &LoweringOptions::default());
    assert_eq!(
        lowered.text,
        "var N;\n(function (N) {\n    N.x = 1;\n    N.x;\n})(N || (N = {}));\n"
    );
    assert_eq!(lowered.output.container_names.get(&ns).map(String::as_str), Some("N"));
    assert!(
        lowered
            .output
            .enabled_substitutions
            .contains(SubstitutionFlags::NAMESPACE_EXPORTS)
    );
}

#[test]
fn test_type_only_namespace_is_elided() {
    let mut arena = NodeArena::new();
    let i = interface(&mut arena, "I");
    let ns = namespace(&mut arena, Modifiers::none(), "T", vec![i]);
    let file = script(&mut arena, vec![ns]);

    let lowered = lower_plain(arena, file);
    assert_eq!(lowered.text, "");
}

#[test]
fn test_merged_namespace_declares_var_once() {
    let mut arena = NodeArena::new();
    let (_, first_body) = exported_x(&mut arena);
    let first = namespace(&mut arena, Modifiers::none(), "N", first_body);
    let (_, second_body) = exported_x(&mut arena);
    let second = namespace(&mut arena, Modifiers::none(), "N", second_body);
    let file = script(&mut arena, vec![first, second]);

    let lowered = lower_plain(arena, file);
    assert_eq!(lowered.text.matches("var N;").count(), 1);
    assert_eq!(lowered.text.matches("(function (N) {").count(), 2);
}

#[test]
fn test_exported_namespace_in_commonjs_binds_exports() {
    let mut arena = NodeArena::new();
    let (_, statements) = exported_x(&mut arena);
    let ns = namespace(&mut arena, mods(&[ModifierKind::Export]), "N", statements);
    let file = module(&mut arena, vec![ns]);

    let lowered = lower_plain(arena, file);
    assert!(lowered.text.contains("var N;\n"));
    assert!(lowered.text.contains("})(N = exports.N || (exports.N = {}));"));
    assert!(!lowered.text.contains("export var N"));
}

#[test]
fn test_member_named_like_namespace_renames_parameter() {
    let mut arena = NodeArena::new();
    let one = arena.create_numeric_literal("1");
    let inner = variable(
        &mut arena,
        mods(&[ModifierKind::Export]),
        VarKind::Var,
        "N",
        NodeIndex::NONE,
        one,
    );
    let ns = namespace(&mut arena, Modifiers::none(), "N", vec![inner]);
    let file = script(&mut arena, vec![ns]);

    let lowered = lower_plain(arena, file);
    assert!(lowered.text.contains("(function (N_1) {"));
    assert!(lowered.text.contains("N_1.N = 1;"));
    assert!(lowered.text.contains("})(N || (N = {}));"));
    assert_eq!(lowered.output.container_names.get(&ns).map(String::as_str), Some("N_1"));
}

#[test]
fn test_dotted_namespace_nests_closures() {
    let mut arena = NodeArena::new();
    let (_, statements) = exported_x(&mut arena);
    let body = arena.alloc(tsl_ast::NodeData::ModuleBlock {
        statements: statements.into(),
    });
    let inner = namespace_with_body(
        &mut arena,
        mods(&[ModifierKind::Export]),
        "B",
        body,
        NodeFlags::NAMESPACE | NodeFlags::NESTED_NAMESPACE,
    );
    let outer = namespace_with_body(&mut arena, Modifiers::none(), "A", inner, NodeFlags::NAMESPACE);
    let file = script(&mut arena, vec![outer]);

    let lowered = lower_plain(arena, file);
    assert!(lowered.text.starts_with("var A;\n(function (A) {\n    let B;\n"));
    assert!(lowered.text.contains("})(B = A.B || (A.B = {}));"));
    assert!(lowered.text.ends_with("})(A || (A = {}));\n"));
}

#[test]
fn test_uninitialized_export_is_elided() {
    let mut arena = NodeArena::new();
    let bare = variable(
        &mut arena,
        mods(&[ModifierKind::Export]),
        VarKind::Var,
        "y",
        NodeIndex::NONE,
        NodeIndex::NONE,
    );
    let (_, mut statements) = exported_x(&mut arena);
    statements.insert(0, bare);
    let ns = namespace(&mut arena, Modifiers::none(), "N", statements);
    let file = script(&mut arena, vec![ns]);

    let lowered = lower_plain(arena, file);
    assert!(!lowered.text.contains("y"));
    assert!(lowered.text.contains("N.x = 1;"));
}

#[test]
fn test_ambient_namespace_is_elided() {
    let mut arena = NodeArena::new();
    let (_, statements) = exported_x(&mut arena);
    let ns = namespace(&mut arena, mods(&[ModifierKind::Declare]), "N", statements);
    let file = script(&mut arena, vec![ns]);

    let lowered = lower_plain(arena, file);
    assert_eq!(lowered.text, "");
}

/// `export { <name> }` or `export { <name> } from "<module>"`.
fn export_declaration(arena: &mut NodeArena, name: &str, module: Option<&str>) -> NodeIndex {
    let name = arena.create_identifier(name);
    let specifier = arena.alloc(NodeData::ExportSpecifier {
        is_type_only: false,
        property_name: NodeIndex::NONE,
        name,
    });
    let export_clause = arena.alloc(NodeData::NamedExports {
        elements: NodeList::from(vec![specifier]),
    });
    let module_specifier = match module {
        Some(module) => arena.create_string_literal(module),
        None => NodeIndex::NONE,
    };
    arena.alloc(NodeData::ExportDeclaration {
        modifiers: Modifiers::none(),
        is_type_only: false,
        export_clause,
        module_specifier,
    })
}

#[test]
fn test_export_declarations_in_namespace_body_are_elided() {
    let mut arena = NodeArena::new();
    let (_, mut statements) = exported_x(&mut arena);
    let local = export_declaration(&mut arena, "x", None);
    let reexport = export_declaration(&mut arena, "y", Some("m"));
    statements.push(local);
    statements.push(reexport);
    let ns = namespace(&mut arena, Modifiers::none(), "N", statements);
    let file = script(&mut arena, vec![ns]);

    let lowered = lower_plain(arena, file);
    assert!(lowered.text.contains("    N.x = 1;\n"), "{}", lowered.text);
    assert!(!lowered.text.contains("export"), "{}", lowered.text);
    assert!(!lowered.text.contains("\"m\""), "{}", lowered.text);
}
