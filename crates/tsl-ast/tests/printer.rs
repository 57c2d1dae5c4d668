use super::*;
use crate::flags::ModifierKind;
use crate::node::{PrefixOperator, SyntheticComment, VarKind};
use rustc_hash::FxHashMap;

fn print(arena: &NodeArena, node: NodeIndex) -> String {
    Printer::new(arena).print(node)
}

#[test]
fn test_namespace_closure_shape() {
    let mut arena = NodeArena::new();
    let param_name = arena.create_identifier("N");
    let param = arena.create_parameter(param_name);
    let body = arena.create_block(vec![], true);
    let function = arena.create_function_expression(NodeIndex::NONE, vec![param], body);
    let n1 = arena.create_identifier("N");
    let n2 = arena.create_identifier("N");
    let empty = arena.create_object_literal(vec![], false);
    let assign = arena.create_assignment(n2, empty);
    let arg = arena.create_logical_or(n1, assign);
    let call = arena.create_call(function, vec![arg]);
    let statement = arena.create_expression_statement(call);

    let output = print(&arena, statement);
    assert_eq!(output, "(function (N) {\n})(N || (N = {}));\n");
}

#[test]
fn test_arrow_callee_is_parenthesized() {
    let mut arena = NodeArena::new();
    let c = arena.create_identifier("C");
    let ret = arena.create_return(c);
    let body = arena.create_block(vec![ret], true);
    let arrow = arena.create_arrow_function(vec![], body);
    let call = arena.create_call(arrow, vec![]);
    let name = arena.create_identifier("C");
    let statement = arena.create_simple_variable_statement(VarKind::Let, name, call);

    let output = print(&arena, statement);
    assert!(
        output.contains("let C = (() => {\n    return C;\n})();"),
        "arrow callee should be wrapped: {output}"
    );
}

#[test]
fn test_precedence_parentheses() {
    let mut arena = NodeArena::new();
    let a = arena.create_identifier("_a");
    let x = arena.create_identifier("X");
    let typeof_x = arena.create_typeof(x);
    let undefined = arena.create_string_literal("undefined");
    let check = arena.create_strict_inequality(typeof_x, undefined);
    let x2 = arena.create_identifier("X");
    let guarded = arena.create_logical_and(check, x2);
    let temp_assign = arena.create_assignment(a, guarded);
    let typeof_temp = arena.create_typeof(temp_assign);
    let function = arena.create_string_literal("function");
    let condition = arena.create_strict_equality(typeof_temp, function);
    let a2 = arena.create_identifier("_a");
    let object = arena.create_identifier("Object");
    let conditional = arena.create_conditional(condition, a2, object);

    let output = print(&arena, conditional);
    assert_eq!(
        output,
        "typeof (_a = typeof X !== \"undefined\" && X) === \"function\" ? _a : Object\n"
    );
}

#[test]
fn test_enum_member_assignment_shape() {
    let mut arena = NodeArena::new();
    let e1 = arena.create_identifier("E");
    let e2 = arena.create_identifier("E");
    let key = arena.create_string_literal("A");
    let inner_target = arena.create_element_access(e2, key);
    let zero = arena.create_numeric_literal("0");
    let inner = arena.create_assignment(inner_target, zero);
    let outer_target = arena.create_element_access(e1, inner);
    let name = arena.create_string_literal("A");
    let outer = arena.create_assignment(outer_target, name);
    let statement = arena.create_expression_statement(outer);

    assert_eq!(print(&arena, statement), "E[E[\"A\"] = 0] = \"A\";\n");
}

#[test]
fn test_negative_number_as_unary_minus() {
    let mut arena = NodeArena::new();
    let one = arena.create_numeric_literal("1");
    let minus = arena.create_prefix(PrefixOperator::Minus, one);
    let inner = arena.create_prefix(PrefixOperator::Minus, minus);
    assert_eq!(print(&arena, inner), "- -1\n");
}

#[test]
fn test_substitution_lookup_replaces_nodes() {
    struct Table(FxHashMap<NodeIndex, NodeIndex>);
    impl SubstitutionLookup for Table {
        fn lookup(&self, node: NodeIndex) -> Option<NodeIndex> {
            self.0.get(&node).copied()
        }
    }

    let mut arena = NodeArena::new();
    let x = arena.create_identifier("x");
    let statement = arena.create_expression_statement(x);
    let container = arena.create_generated_identifier("N");
    let qualified = arena.create_property_access(container, "x");

    let mut table = FxHashMap::default();
    table.insert(x, qualified);
    let table = Table(table);
    let output = Printer::new(&arena).with_substitutions(&table).print(statement);
    assert_eq!(output, "N.x;\n");
}

#[test]
fn test_comments_respect_remove_comments() {
    let mut arena = NodeArena::new();
    let one = arena.create_numeric_literal("1");
    arena.add_synthetic_trailing_block_comment(one, " A ");
    let statement = arena.create_expression_statement(one);
    arena.add_leading_comment(statement, SyntheticComment::multi_line("* doc "));

    let output = print(&arena, statement);
    assert_eq!(output, "/** doc */\n1 /* A */;\n");

    let stripped = Printer::new(&arena)
        .with_options(PrinterOptions {
            remove_comments: true,
        })
        .print(statement);
    assert_eq!(stripped, "1;\n");
}

#[test]
fn test_markers_print_nothing() {
    let mut arena = NodeArena::new();
    let x = arena.create_identifier("x");
    let statement = arena.create_expression_statement(x);
    let marker = arena.create_end_of_declaration_marker(statement);
    let merge = arena.create_merge_declaration_marker(statement);
    let file = arena.alloc(NodeData::SourceFile {
        file_name: "a.ts".to_string(),
        statements: NodeList::from(vec![statement, merge, marker]),
        is_external_module: false,
        is_declaration_file: false,
    });
    assert_eq!(print(&arena, file), "x;\n");
}

#[test]
fn test_class_with_members() {
    let mut arena = NodeArena::new();
    let name = arena.create_identifier("C");
    let prop_name = arena.create_identifier("x");
    let prop = arena.create_property_declaration(
        Modifiers::from_kinds(&[ModifierKind::Static]),
        prop_name,
    );
    let class = arena.alloc(NodeData::ClassDeclaration(ClassData {
        decorators: NodeList::new(),
        modifiers: Modifiers::from_kinds(&[ModifierKind::Export]),
        name,
        type_parameters: NodeList::new(),
        heritage_clauses: NodeList::new(),
        members: NodeList::from(vec![prop]),
    }));
    assert_eq!(print(&arena, class), "export class C {\n    static x;\n}\n");
}
