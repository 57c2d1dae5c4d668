use super::*;
use tsl_ast::VarKind;

#[test]
fn test_unique_name_skips_taken_suffixes() {
    let mut names = NameGenerator::new();
    names.reserve("C_1");
    assert_eq!(names.unique_name("C"), "C_2");
    assert_eq!(names.unique_name("C"), "C_3");
    assert!(names.is_used("C_2"));
}

#[test]
fn test_temp_names_skip_i_and_n() {
    let mut names = NameGenerator::new();
    let temps: Vec<String> = (0..14).map(|_| names.temp_name()).collect();
    assert_eq!(temps[0], "_a");
    assert_eq!(temps[7], "_h");
    assert_eq!(temps[8], "_j");
    assert!(!temps.iter().any(|t| t == "_i" || t == "_n"));
    assert_eq!(temps[12], "_o");
}

#[test]
fn test_temp_names_avoid_identifiers_in_tree() {
    let mut arena = NodeArena::new();
    let name = arena.create_identifier("_a");
    let one = arena.create_numeric_literal("1");
    let statement = arena.create_simple_variable_statement(VarKind::Var, name, one);
    let file = arena.alloc(NodeData::SourceFile {
        file_name: "a.ts".into(),
        statements: vec![statement].into(),
        is_external_module: false,
        is_declaration_file: false,
    });

    let mut names = NameGenerator::from_tree(&arena, file);
    assert_eq!(names.temp_name(), "_b");
}

#[test]
fn test_declares_name_finds_nested_bindings() {
    let mut arena = NodeArena::new();
    let inner_name = arena.create_identifier("N");
    let zero = arena.create_numeric_literal("0");
    let inner = arena.create_simple_variable_statement(VarKind::Let, inner_name, zero);
    let block = arena.create_block(vec![inner], true);
    let reference = arena.create_identifier("M");
    let use_m = arena.create_expression_statement(reference);
    let body = arena.alloc(NodeData::ModuleBlock {
        statements: vec![block, use_m].into(),
    });

    assert!(declares_name(&arena, body, "N"));
    assert!(!declares_name(&arena, body, "M"));
}
