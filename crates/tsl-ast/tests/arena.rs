use super::*;
use crate::node::{BinaryOperator, VarKind};

#[test]
fn test_update_returns_same_index_when_unchanged() {
    let mut arena = NodeArena::new();
    let x = arena.create_identifier("x");
    let one = arena.create_numeric_literal("1");
    let assign = arena.create_assignment(x, one);
    arena.seal_parse_tree();

    let same = arena.data(assign).cloned().expect("node exists");
    let len_before = arena.len();
    assert_eq!(arena.update(assign, same), assign);
    assert_eq!(arena.len(), len_before, "no node should be allocated");
}

#[test]
fn test_update_links_original() {
    let mut arena = NodeArena::new();
    let x = arena.create_identifier("x");
    let one = arena.create_numeric_literal("1");
    let assign = arena.create_assignment(x, one);
    arena.seal_parse_tree();

    let two = arena.create_numeric_literal("2");
    let updated = arena.update(
        assign,
        NodeData::Binary {
            left: x,
            operator: BinaryOperator::Assign,
            right: two,
        },
    );
    assert_ne!(updated, assign);
    assert_eq!(arena.original(updated), assign);
    assert_eq!(arena.parse_tree_node(updated), assign);
    assert!(!arena.is_parse_tree_node(updated));
    assert!(arena.is_parse_tree_node(assign));
}

#[test]
fn test_parse_tree_node_follows_chain() {
    let mut arena = NodeArena::new();
    let name = arena.create_identifier("C");
    arena.seal_parse_tree();

    let first = arena.clone_node(name);
    let second = arena.clone_node(first);
    assert_eq!(arena.parse_tree_node(second), name);
    assert_eq!(arena.original_root(second), name);

    let fresh = arena.create_identifier("fresh");
    assert!(arena.parse_tree_node(fresh).is_none());
}

#[test]
fn test_sealed_parse_nodes_are_immutable() {
    let mut arena = NodeArena::new();
    let statement = arena.create_simple_variable_statement(
        VarKind::Var,
        NodeIndex::NONE,
        NodeIndex::NONE,
    );
    arena.seal_parse_tree();
    assert!(arena.get_mut(statement).is_none());
    arena.add_emit_flags(statement, EmitFlags::NO_COMMENTS);
    assert!(arena.emit_flags(statement).is_empty());
}

#[test]
fn test_not_emitted_statement_keeps_comments() {
    let mut arena = NodeArena::new();
    let name = arena.create_identifier("x");
    let declaration = arena.create_simple_variable_statement(VarKind::Var, name, NodeIndex::NONE);
    arena.add_leading_comment(declaration, SyntheticComment::multi_line("* doc "));
    arena.seal_parse_tree();

    let placeholder = arena.create_not_emitted_statement(declaration);
    let node = arena.get(placeholder).expect("placeholder exists");
    assert_eq!(node.original, declaration);
    assert_eq!(node.comments.leading.len(), 1);
}

#[test]
fn test_children_in_source_order() {
    let mut arena = NodeArena::new();
    let callee = arena.create_identifier("f");
    let a = arena.create_identifier("a");
    let b = arena.create_identifier("b");
    let call = arena.create_call(callee, vec![a, b]);
    let children = arena.data(call).map(NodeData::children).unwrap_or_default();
    assert_eq!(children, vec![callee, a, b]);
}
