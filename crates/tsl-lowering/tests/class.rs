use super::*;
use crate::lower_source_file;
use crate::substitution::SubstitutionRegistry;
use crate::test_utils::*;
use tsl_ast::{NodeArena, TypeKeyword};
use tsl_common::options::{LoweringOptions, ModuleKind};

fn es2017() -> LoweringOptions {
    LoweringOptions {
        target: ScriptTarget::ES2017,
        ..LoweringOptions::default()
    }
}

/// `class C { constructor(public x) { ...statements } }` plus any extra
/// heritage clause.
fn class_with_parameter_property(
    arena: &mut NodeArena,
    heritage_clauses: Vec<NodeIndex>,
    statements: Vec<NodeIndex>,
) -> NodeIndex {
    let x = parameter(arena, Vec::new(), mods(&[ModifierKind::Public]), "x", NodeIndex::NONE);
    let constructor = constructor(arena, vec![x], statements);
    let name = arena.create_identifier("C");
    let mut class = class_data(Vec::new(), Modifiers::none(), name, vec![constructor]);
    class.heritage_clauses = NodeList::from(heritage_clauses);
    class_declaration(arena, class)
}

#[test]
fn test_plain_class_is_left_alone() {
    let mut arena = NodeArena::new();
    let name = arena.create_identifier("C");
    let m = arena.create_identifier("m");
    let method = method(&mut arena, Vec::new(), Modifiers::none(), m, Vec::new(), NodeIndex::NONE);
    let class = class_declaration(&mut arena, class_data(Vec::new(), Modifiers::none(), name, vec![method]));
    let file = script(&mut arena, vec![class]);

    let lowered = lower_plain(arena, file);
    assert_eq!(lowered.output.source_file, file);
    assert!(lowered.arena.is_parse_tree_node(file));
    assert_eq!(lowered.text, "class C {\n    m() {\n    }\n}\n");
}

#[test]
fn test_implements_and_member_types_are_removed() {
    let mut arena = NodeArena::new();
    let name = arena.create_identifier("C");
    let implements = heritage(&mut arena, HeritageToken::Implements, "I");
    let x = arena.create_identifier("x");
    let string = keyword(&mut arena, TypeKeyword::String);
    let field = property(&mut arena, Vec::new(), Modifiers::none(), x, string, NodeIndex::NONE);
    let mut class = class_data(Vec::new(), Modifiers::none(), name, vec![field]);
    class.heritage_clauses = NodeList::from(vec![implements]);
    let class = class_declaration(&mut arena, class);
    let file = script(&mut arena, vec![class]);

    let lowered = lower_plain(arena, file);
    assert_eq!(lowered.text, "class C {\n    x;\n}\n");
}

#[test]
fn test_parameter_property_becomes_field_and_assignment() {
    let mut arena = NodeArena::new();
    let class = class_with_parameter_property(&mut arena, Vec::new(), Vec::new());
    let file = script(&mut arena, vec![class]);

    let lowered = lower_plain(arena, file);
    assert_eq!(
        lowered.text,
        "class C {\n    x;\n    constructor(x) {\n        this.x = x;\n    }\n}\n"
    );
}

#[test]
fn test_parameter_property_assignment_follows_super_call() {
    let mut arena = NodeArena::new();
    let callee = arena.create_super();
    let call = arena.create_call(callee, Vec::new());
    let super_call = arena.create_expression_statement(call);
    let (_, after) = expression_statement(&mut arena, "log");
    let extends = heritage(&mut arena, HeritageToken::Extends, "B");
    let class = class_with_parameter_property(&mut arena, vec![extends], vec![super_call, after]);
    let file = script(&mut arena, vec![class]);

    let lowered = lower_plain(arena, file);
    assert!(lowered.text.starts_with("class C extends B {\n"));
    assert!(
        lowered
            .text
            .contains("        super();\n        this.x = x;\n        log;\n")
    );
}

#[test]
fn test_parameter_property_assignment_keeps_prologue_and_leading_statements() {
    let mut arena = NodeArena::new();
    let directive = arena.create_string_literal("use strict");
    let directive = arena.create_expression_statement(directive);
    let (_, before) = expression_statement(&mut arena, "before");
    let callee = arena.create_super();
    let call = arena.create_call(callee, Vec::new());
    let super_call = arena.create_expression_statement(call);
    let (_, after) = expression_statement(&mut arena, "log");
    let extends = heritage(&mut arena, HeritageToken::Extends, "B");
    let class = class_with_parameter_property(
        &mut arena,
        vec![extends],
        vec![directive, before, super_call, after],
    );
    let file = script(&mut arena, vec![class]);

    let lowered = lower_plain(arena, file);
    assert!(
        lowered.text.contains(
            "        \"use strict\";\n        before;\n        super();\n        this.x = x;\n        log;\n"
        ),
        "constructor body order: {}",
        lowered.text
    );
}

#[test]
fn test_static_initializer_below_es2015_is_wrapped() {
    let mut arena = NodeArena::new();
    let name = arena.create_identifier("C");
    let x = arena.create_identifier("x");
    let one = arena.create_numeric_literal("1");
    let number = keyword(&mut arena, TypeKeyword::Number);
    let field = property(&mut arena, Vec::new(), mods(&[ModifierKind::Static]), x, number, one);
    let class = class_declaration(&mut arena, class_data(Vec::new(), Modifiers::none(), name, vec![field]));
    let file = script(&mut arena, vec![class]);

    let lowered = lower_plain(arena, file);
    assert_eq!(
        lowered.text,
        "let C = (() => {\n    class C {\n        static x = 1;\n    }\n    return C;\n})();\n"
    );
}

#[test]
fn test_decorated_class_with_self_reference_uses_alias() {
    let mut arena = NodeArena::new();
    let name = arena.create_identifier("C");
    let dec = decorator(&mut arena, "dec");
    let s = arena.create_identifier("s");
    let self_ref = arena.create_identifier("C");
    let field = property(&mut arena, Vec::new(), mods(&[ModifierKind::Static]), s, NodeIndex::NONE, self_ref);
    let class = class_declaration(&mut arena, class_data(vec![dec], Modifiers::none(), name, vec![field]));
    let file = script(&mut arena, vec![class]);

    let mut resolver = TableResolver::default();
    resolver
        .check_flags
        .insert(class, NodeCheckFlags::CLASS_WITH_CONSTRUCTOR_REFERENCE);
    resolver
        .check_flags
        .insert(self_ref, NodeCheckFlags::CONSTRUCTOR_REFERENCE_IN_CLASS);
    resolver.value_declarations.insert(self_ref, class);

    let lowered = lower(arena, file, &resolver, &es2017());
    assert!(lowered.text.contains("var C_1;"));
    assert!(lowered.text.contains("let C = C_1 = class C {"));
    assert!(lowered.text.contains("static s = C_1;"));
    assert!(lowered.text.contains("C = C_1 = __decorate([\n    dec\n], C);"));
    assert_eq!(lowered.output.class_aliases.get(&class).map(String::as_str), Some("C_1"));
    assert!(lowered.output.helpers.decorate);
    assert!(
        lowered
            .output
            .enabled_substitutions
            .contains(SubstitutionFlags::CLASS_ALIASES)
    );
}

#[test]
fn test_decorated_export_is_reexported_in_es_module() {
    let mut arena = NodeArena::new();
    let name = arena.create_identifier("C");
    let dec = decorator(&mut arena, "dec");
    let class = class_declaration(
        &mut arena,
        class_data(vec![dec], mods(&[ModifierKind::Export]), name, Vec::new()),
    );
    let file = module(&mut arena, vec![class]);
    let options = LoweringOptions {
        module: ModuleKind::ESNext,
        ..es2017()
    };

    let lowered = lower(arena, file, &TableResolver::default(), &options);
    assert!(lowered.text.starts_with("let C = class C {\n};\n"));
    assert!(lowered.text.contains("C = __decorate([\n    dec\n], C);"));
    assert!(lowered.text.ends_with("export { C };\n"));
}

#[test]
fn test_anonymous_default_export_gets_generated_name() {
    let mut arena = NodeArena::new();
    let dec = decorator(&mut arena, "dec");
    let m = arena.create_identifier("m");
    let method = method(&mut arena, vec![dec], Modifiers::none(), m, Vec::new(), NodeIndex::NONE);
    let class = class_declaration(
        &mut arena,
        class_data(
            Vec::new(),
            mods(&[ModifierKind::Export, ModifierKind::Default]),
            NodeIndex::NONE,
            vec![method],
        ),
    );
    let file = module(&mut arena, vec![class]);

    let lowered = lower(arena, file, &TableResolver::default(), &es2017());
    assert!(lowered.text.contains("export default class default_1 {"));
    assert!(lowered.text.contains("], default_1.prototype, \"m\", null);"));
}

#[test]
fn test_anonymous_decorated_class_is_an_internal_error() {
    let mut arena = NodeArena::new();
    let dec = decorator(&mut arena, "dec");
    let class = class_declaration(
        &mut arena,
        class_data(vec![dec], Modifiers::none(), NodeIndex::NONE, Vec::new()),
    );
    let file = script(&mut arena, vec![class]);
    let registry = SubstitutionRegistry::new();

    let result = lower_source_file(
        &mut arena,
        file,
        &TableResolver::default(),
        &es2017(),
        &registry,
    );
    assert!(matches!(result, Err(LoweringError::MissingClassName)));
}

#[test]
fn test_class_exported_from_namespace_is_assigned() {
    let mut arena = NodeArena::new();
    let name = arena.create_identifier("C");
    let class = class_declaration(
        &mut arena,
        class_data(Vec::new(), mods(&[ModifierKind::Export]), name, Vec::new()),
    );
    let ns = namespace(&mut arena, Modifiers::none(), "N", vec![class]);
    let file = script(&mut arena, vec![ns]);

    let lowered = lower_plain(arena, file);
    assert!(lowered.text.contains("    class C {\n    }\n    N.C = C;\n"));
}

#[test]
fn test_computed_field_name_is_captured_with_parameter_properties() {
    let mut arena = NodeArena::new();
    let key = arena.create_identifier("key");
    let call = arena.create_call(key, Vec::new());
    let computed = arena.create_computed_property_name(call);
    let one = arena.create_numeric_literal("1");
    let field = property(&mut arena, Vec::new(), Modifiers::none(), computed, NodeIndex::NONE, one);
    let x = parameter(&mut arena, Vec::new(), mods(&[ModifierKind::Readonly]), "x", NodeIndex::NONE);
    let constructor = constructor(&mut arena, vec![x], Vec::new());
    let name = arena.create_identifier("C");
    let class = class_declaration(
        &mut arena,
        class_data(Vec::new(), Modifiers::none(), name, vec![field, constructor]),
    );
    let file = script(&mut arena, vec![class]);

    let lowered = lower_plain(arena, file);
    assert!(lowered.text.contains("var _a;"));
    assert!(lowered.text.contains("    [_a = key()] = 1;\n"));
    assert!(lowered.text.contains("this.x = x;"));
}
