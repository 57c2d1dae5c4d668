use super::*;
use crate::test_utils::*;
use crate::lower_source_file;
use crate::resolver::ConstantValue;
use tsl_ast::{ModifierKind, Modifiers, VarKind};

/// `E.A;` with `E.A` known to be the constant 0.
fn constant_access(arena: &mut NodeArena, resolver: &mut TableResolver) -> (NodeIndex, NodeIndex) {
    let e = arena.create_identifier("E");
    let access = arena.create_property_access(e, "A");
    resolver.constants.insert(access, ConstantValue::Number(0.0));
    let statement = arena.create_expression_statement(access);
    (script(arena, vec![statement]), access)
}

#[test]
fn test_constant_access_is_inlined_with_comment() {
    let mut arena = NodeArena::new();
    let mut resolver = TableResolver::default();
    let (file, _) = constant_access(&mut arena, &mut resolver);

    let lowered = lower(arena, file, &resolver, &LoweringOptions::default());
    assert_eq!(lowered.text, "0 /* A */;\n");
}

#[test]
fn test_constant_comment_dropped_with_remove_comments() {
    let mut arena = NodeArena::new();
    let mut resolver = TableResolver::default();
    let (file, _) = constant_access(&mut arena, &mut resolver);
    let options = LoweringOptions {
        remove_comments: true,
        ..LoweringOptions::default()
    };

    let lowered = lower(arena, file, &resolver, &options);
    assert_eq!(lowered.text, "0;\n");
}

#[test]
fn test_isolated_modules_keeps_member_access() {
    let mut arena = NodeArena::new();
    let mut resolver = TableResolver::default();
    let (file, _) = constant_access(&mut arena, &mut resolver);
    let options = LoweringOptions {
        isolated_modules: true,
        ..LoweringOptions::default()
    };

    let lowered = lower(arena, file, &resolver, &options);
    assert_eq!(lowered.text, "E.A;\n");
}

#[test]
fn test_element_access_comment_quotes_key() {
    let mut arena = NodeArena::new();
    let mut resolver = TableResolver::default();
    let e = arena.create_identifier("E");
    let key = arena.create_string_literal("A");
    let access = arena.create_element_access(e, key);
    resolver.constants.insert(access, ConstantValue::String("a".into()));
    let statement = arena.create_expression_statement(access);
    let file = script(&mut arena, vec![statement]);

    let lowered = lower(arena, file, &resolver, &LoweringOptions::default());
    assert_eq!(lowered.text, "\"a\" /* \"A\" */;\n");
}

#[test]
fn test_shorthand_property_is_expanded_inside_namespace() {
    let mut arena = NodeArena::new();
    let one = arena.create_numeric_literal("1");
    let declaration = variable(
        &mut arena,
        mods(&[ModifierKind::Export]),
        VarKind::Var,
        "x",
        NodeIndex::NONE,
        one,
    );
    let name = arena.create_identifier("x");
    let shorthand = arena.alloc(NodeData::ShorthandPropertyAssignment {
        name,
        object_assignment_initializer: NodeIndex::NONE,
    });
    let object = arena.create_object_literal(vec![shorthand], false);
    let statement = arena.create_expression_statement(object);
    let ns = namespace(&mut arena, Modifiers::none(), "N", vec![declaration, statement]);
    let file = script(&mut arena, vec![ns]);
    let mut resolver = TableResolver::default();
    resolver.export_containers.insert(name, ns);

    let lowered = lower(arena, file, &resolver, &LoweringOptions::default());
    assert!(lowered.text.contains("({ x: N.x });"));
}

#[test]
fn test_export_reference_outside_closure_is_untouched() {
    let mut arena = NodeArena::new();
    let one = arena.create_numeric_literal("1");
    let declaration = variable(
        &mut arena,
        mods(&[ModifierKind::Export]),
        VarKind::Var,
        "x",
        NodeIndex::NONE,
        one,
    );
    let ns = namespace(&mut arena, Modifiers::none(), "N", vec![declaration]);
    let (outside, statement) = expression_statement(&mut arena, "x");
    let file = script(&mut arena, vec![ns, statement]);
    let mut resolver = TableResolver::default();
    resolver.export_containers.insert(outside, ns);

    let lowered = lower(arena, file, &resolver, &LoweringOptions::default());
    assert!(lowered.text.ends_with("})(N || (N = {}));\nx;\n"));
}

#[test]
fn test_collect_records_replacements() {
    let mut arena = NodeArena::new();
    let mut resolver = TableResolver::default();
    let (file, access) = constant_access(&mut arena, &mut resolver);
    let options = LoweringOptions::default();
    let registry = SubstitutionRegistry::new();

    let output = lower_source_file(&mut arena, file, &resolver, &options, &registry)
        .expect("lowering should succeed");
    let table = collect_substitutions(&mut arena, &output, &resolver, &options, &registry)
        .expect("substitution walk should succeed");
    assert_eq!(table.len(), 1);
    assert!(!table.is_empty());
    assert!(table.get(access).is_some());
}

#[test]
fn test_registry_accumulates_flags() {
    let registry = SubstitutionRegistry::new();
    assert!(registry.enabled().is_empty());
    registry.enable(SubstitutionFlags::NAMESPACE_EXPORTS);
    registry.enable(SubstitutionFlags::CLASS_ALIASES);
    assert!(registry.enabled().contains(
        SubstitutionFlags::NAMESPACE_EXPORTS | SubstitutionFlags::CLASS_ALIASES
    ));
    assert!(
        !registry
            .enabled()
            .contains(SubstitutionFlags::NON_QUALIFIED_ENUM_MEMBERS)
    );
}
