use super::*;
use crate::test_utils::*;
use tsl_ast::{ModifierKind, Modifiers, NodeArena, VarKind};

fn element(arena: &mut NodeArena, property_name: NodeIndex, name: NodeIndex, initializer: NodeIndex) -> NodeIndex {
    arena.alloc(NodeData::BindingElement {
        dot_dot_dot: false,
        property_name,
        name,
        initializer,
    })
}

fn simple(arena: &mut NodeArena, name: &str) -> NodeIndex {
    let name = arena.create_identifier(name);
    element(arena, NodeIndex::NONE, name, NodeIndex::NONE)
}

fn rest(arena: &mut NodeArena, name: &str) -> NodeIndex {
    let name = arena.create_identifier(name);
    arena.alloc(NodeData::BindingElement {
        dot_dot_dot: true,
        property_name: NodeIndex::NONE,
        name,
        initializer: NodeIndex::NONE,
    })
}

fn object_pattern(arena: &mut NodeArena, elements: Vec<NodeIndex>) -> NodeIndex {
    arena.alloc(NodeData::ObjectBindingPattern {
        elements: NodeList::from(elements),
    })
}

fn array_pattern(arena: &mut NodeArena, elements: Vec<NodeIndex>) -> NodeIndex {
    arena.alloc(NodeData::ArrayBindingPattern {
        elements: NodeList::from(elements),
    })
}

/// `namespace N { export const <pattern> = <initializer>; }`, printed.
fn lower_exported(mut arena: NodeArena, pattern: NodeIndex, initializer: NodeIndex) -> Lowered {
    let declaration = arena.alloc(NodeData::VariableDeclaration {
        name: pattern,
        exclamation: false,
        type_node: NodeIndex::NONE,
        initializer,
    });
    let declaration_list = arena.create_variable_declaration_list(VarKind::Const, vec![declaration]);
    let statement = arena.alloc(NodeData::VariableStatement {
        modifiers: mods(&[ModifierKind::Export]),
        declaration_list,
    });
    let ns = namespace(&mut arena, Modifiers::none(), "N", vec![statement]);
    let file = script(&mut arena, vec![ns]);
    lower_plain(arena, file)
}

#[test]
fn test_nested_patterns_read_through_identifier() {
    let mut arena = NodeArena::new();
    let a = simple(&mut arena, "a");
    let c = simple(&mut arena, "c");
    let inner = array_pattern(&mut arena, vec![c]);
    let b = arena.create_identifier("b");
    let b = element(&mut arena, b, inner, NodeIndex::NONE);
    let pattern = object_pattern(&mut arena, vec![a, b]);
    let obj = arena.create_identifier("obj");

    let lowered = lower_exported(arena, pattern, obj);
    assert!(lowered.text.contains("    N.a = obj.a, N.c = obj.b[0];\n"));
    assert!(!lowered.text.contains("const"));
}

#[test]
fn test_non_identifier_source_is_captured() {
    let mut arena = NodeArena::new();
    let a = simple(&mut arena, "a");
    let b = simple(&mut arena, "b");
    let pattern = object_pattern(&mut arena, vec![a, b]);
    let f = arena.create_identifier("f");
    let call = arena.create_call(f, Vec::new());

    let lowered = lower_exported(arena, pattern, call);
    assert!(lowered.text.contains("(function (N) {\n    var _a;\n"));
    assert!(lowered.text.contains("    _a = f(), N.a = _a.a, N.b = _a.b;\n"));
}

#[test]
fn test_default_value_is_applied() {
    let mut arena = NodeArena::new();
    let a = arena.create_identifier("a");
    let one = arena.create_numeric_literal("1");
    let a = element(&mut arena, NodeIndex::NONE, a, one);
    let pattern = object_pattern(&mut arena, vec![a]);
    let obj = arena.create_identifier("obj");

    let lowered = lower_exported(arena, pattern, obj);
    assert!(lowered.text.contains("_a = obj.a, N.a = _a === void 0 ? 1 : _a;"));
}

#[test]
fn test_object_rest_uses_helper() {
    let mut arena = NodeArena::new();
    let a = simple(&mut arena, "a");
    let others = rest(&mut arena, "others");
    let pattern = object_pattern(&mut arena, vec![a, others]);
    let obj = arena.create_identifier("obj");

    let lowered = lower_exported(arena, pattern, obj);
    assert!(lowered.text.contains("N.a = obj.a, N.others = __rest(obj, [\"a\"]);"));
    assert!(lowered.output.helpers.rest);
}

#[test]
fn test_computed_key_is_excluded_from_rest() {
    let mut arena = NodeArena::new();
    let k = arena.create_identifier("k");
    let key = arena.create_computed_property_name(k);
    let x = arena.create_identifier("x");
    let keyed = element(&mut arena, key, x, NodeIndex::NONE);
    let others = rest(&mut arena, "others");
    let pattern = object_pattern(&mut arena, vec![keyed, others]);
    let obj = arena.create_identifier("obj");

    let lowered = lower_exported(arena, pattern, obj);
    assert!(lowered.text.contains(
        "_a = k, N.x = obj[_a], N.others = __rest(obj, [typeof _a === \"symbol\" ? _a : _a + \"\"]);"
    ));
}

#[test]
fn test_array_pattern_with_hole_and_rest() {
    let mut arena = NodeArena::new();
    let hole = arena.create_omitted_expression();
    let b = simple(&mut arena, "b");
    let tail = rest(&mut arena, "tail");
    let pattern = array_pattern(&mut arena, vec![hole, b, tail]);
    let arr = arena.create_identifier("arr");

    let lowered = lower_exported(arena, pattern, arr);
    assert!(lowered.text.contains("    N.b = arr[1], N.tail = arr.slice(2);\n"));
    assert!(!lowered.output.helpers.rest);
}
