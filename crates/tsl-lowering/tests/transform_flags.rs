use super::*;
use tsl_ast::{ClassData, Modifiers, NodeList, TypeKeyword, VarKind};

fn source_file(arena: &mut NodeArena, statements: Vec<NodeIndex>) -> NodeIndex {
    arena.alloc(NodeData::SourceFile {
        file_name: "test.ts".into(),
        statements: statements.into(),
        is_external_module: false,
        is_declaration_file: false,
    })
}

#[test]
fn test_plain_javascript_has_no_typescript() {
    let mut arena = NodeArena::new();
    let name = arena.create_identifier("x");
    let one = arena.create_numeric_literal("1");
    let statement = arena.create_simple_variable_statement(VarKind::Let, name, one);
    let file = source_file(&mut arena, vec![statement]);

    let table = TransformFlagsTable::compute(&arena, file);
    assert!(!table.contains_typescript(file));
    assert!(!table.contains_typescript(statement));
}

#[test]
fn test_type_annotation_marks_ancestors() {
    let mut arena = NodeArena::new();
    let name = arena.create_identifier("x");
    let number = arena.alloc(NodeData::KeywordType(TypeKeyword::Number));
    let declaration = arena.alloc(NodeData::VariableDeclaration {
        name,
        exclamation: false,
        type_node: number,
        initializer: NodeIndex::NONE,
    });
    let list = arena.create_variable_declaration_list(VarKind::Let, vec![declaration]);
    let statement = arena.alloc(NodeData::VariableStatement {
        modifiers: Modifiers::none(),
        declaration_list: list,
    });
    let file = source_file(&mut arena, vec![statement]);

    let table = TransformFlagsTable::compute(&arena, file);
    assert!(table.contains_typescript(file));
    assert!(table.contains_typescript(declaration));
    assert!(!table.contains_typescript(name));
}

#[test]
fn test_static_initializer_marks_class_but_not_file_class_syntax() {
    let mut arena = NodeArena::new();
    let prop_name = arena.create_identifier("x");
    let one = arena.create_numeric_literal("1");
    let property = arena.alloc(NodeData::PropertyDeclaration {
        decorators: NodeList::new(),
        modifiers: Modifiers::from_kinds(&[ModifierKind::Static]),
        name: prop_name,
        question: false,
        exclamation: false,
        type_node: NodeIndex::NONE,
        initializer: one,
    });
    let class_name = arena.create_identifier("C");
    let class = arena.alloc(NodeData::ClassDeclaration(ClassData {
        decorators: NodeList::new(),
        modifiers: Modifiers::none(),
        name: class_name,
        type_parameters: NodeList::new(),
        heritage_clauses: NodeList::new(),
        members: vec![property].into(),
    }));
    let file = source_file(&mut arena, vec![class]);

    let table = TransformFlagsTable::compute(&arena, file);
    assert!(table.contains_class_syntax(property));
    assert!(table.contains_typescript(class));
    assert!(!table.contains_class_syntax(class));
    assert!(!table.contains_class_syntax(file));
    assert!(table.contains_typescript(file));
}

#[test]
fn test_unknown_nodes_report_everything() {
    let table = TransformFlagsTable::default();
    assert_eq!(table.get(NodeIndex(42)), TransformFlags::all());
}
