use super::*;
use crate::substitution::SubstitutionRegistry;
use crate::test_utils::*;
use tsl_ast::TypeKeyword;

fn function(
    arena: &mut NodeArena,
    name: &str,
    parameters: Vec<NodeIndex>,
    return_type: NodeIndex,
    with_body: bool,
) -> NodeIndex {
    let name = arena.create_identifier(name);
    let body = if with_body {
        arena.create_block(Vec::new(), false)
    } else {
        NodeIndex::NONE
    };
    arena.alloc(NodeData::FunctionDeclaration {
        modifiers: Modifiers::none(),
        asterisk: false,
        name,
        type_parameters: NodeList::new(),
        parameters: NodeList::from(parameters),
        return_type,
        body,
    })
}

#[test]
fn test_type_annotation_and_assertion_are_removed() {
    let mut arena = NodeArena::new();
    let y = arena.create_identifier("y");
    let any = keyword(&mut arena, TypeKeyword::Any);
    let assertion = arena.alloc(NodeData::TypeAssertion {
        type_node: any,
        expression: y,
    });
    let number = keyword(&mut arena, TypeKeyword::Number);
    let statement = variable(&mut arena, Modifiers::none(), VarKind::Let, "x", number, assertion);
    let z = arena.create_identifier("z");
    let string = keyword(&mut arena, TypeKeyword::String);
    let as_expression = arena.alloc(NodeData::As {
        expression: z,
        type_node: string,
    });
    let as_statement = arena.create_expression_statement(as_expression);
    let file = script(&mut arena, vec![statement, as_statement]);

    let lowered = lower_plain(arena, file);
    assert_eq!(lowered.text, "let x = y;\nz;\n");
}

#[test]
fn test_declarations_without_runtime_value_are_removed() {
    let mut arena = NodeArena::new();
    let string = keyword(&mut arena, TypeKeyword::String);
    let ambient = variable(
        &mut arena,
        mods(&[ModifierKind::Declare]),
        VarKind::Let,
        "z",
        string,
        NodeIndex::NONE,
    );
    let i = interface(&mut arena, "I");
    let alias_name = arena.create_identifier("T");
    let number = keyword(&mut arena, TypeKeyword::Number);
    let alias = arena.alloc(NodeData::TypeAliasDeclaration {
        modifiers: Modifiers::none(),
        name: alias_name,
        type_parameters: NodeList::new(),
        type_node: number,
    });
    let file = script(&mut arena, vec![ambient, i, alias]);

    let lowered = lower_plain(arena, file);
    assert_eq!(lowered.text, "");
}

#[test]
fn test_overloads_are_dropped_and_signature_stripped() {
    let mut arena = NodeArena::new();
    let string = keyword(&mut arena, TypeKeyword::String);
    let overload_parameter = parameter(&mut arena, Vec::new(), Modifiers::none(), "a", string);
    let void = keyword(&mut arena, TypeKeyword::Void);
    let overload = function(&mut arena, "f", vec![overload_parameter], void, false);
    let a = parameter(&mut arena, Vec::new(), Modifiers::none(), "a", NodeIndex::NONE);
    let implementation = function(&mut arena, "f", vec![a], NodeIndex::NONE, true);
    let foo = type_ref(&mut arena, "Foo");
    let this = parameter(&mut arena, Vec::new(), Modifiers::none(), "this", foo);
    let b = parameter(&mut arena, Vec::new(), Modifiers::none(), "b", NodeIndex::NONE);
    let boolean = keyword(&mut arena, TypeKeyword::Boolean);
    let with_this = function(&mut arena, "g", vec![this, b], boolean, true);
    let file = script(&mut arena, vec![overload, implementation, with_this]);

    let lowered = lower_plain(arena, file);
    assert_eq!(lowered.text, "function f(a) { }\nfunction g(b) { }\n");
}

#[test]
fn test_always_strict_adds_prologue_to_scripts() {
    let mut arena = NodeArena::new();
    let (_, statement) = expression_statement(&mut arena, "x");
    let file = script(&mut arena, vec![statement]);
    let options = LoweringOptions {
        always_strict: true,
        ..LoweringOptions::default()
    };

    let lowered = lower(arena, file, &TableResolver::default(), &options);
    assert_eq!(lowered.text, "\"use strict\";\nx;\n");
}

#[test]
fn test_declaration_file_is_returned_unchanged() {
    let mut arena = NodeArena::new();
    let i = interface(&mut arena, "I");
    let file = arena.alloc(NodeData::SourceFile {
        file_name: "types.d.ts".into(),
        statements: NodeList::from(vec![i]),
        is_external_module: false,
        is_declaration_file: true,
    });

    let lowered = lower_plain(arena, file);
    assert_eq!(lowered.output.source_file, file);
}

#[test]
fn test_deep_nesting_reports_depth_error() {
    // Each nested block costs several frames; give the walk room to reach
    // the limit.
    let handle = std::thread::Builder::new()
        .stack_size(256 * 1024 * 1024)
        .spawn(|| {
            let mut arena = NodeArena::new();
            let number = keyword(&mut arena, TypeKeyword::Number);
            let one = arena.create_numeric_literal("1");
            let mut statement =
                variable(&mut arena, Modifiers::none(), VarKind::Let, "x", number, one);
            for _ in 0..(MAX_LOWERING_DEPTH + 10) {
                statement = block(&mut arena, vec![statement]);
            }
            let file = script(&mut arena, vec![statement]);
            let registry = SubstitutionRegistry::new();
            crate::lower_source_file(
                &mut arena,
                file,
                &TableResolver::default(),
                &LoweringOptions::default(),
                &registry,
            )
            .map(|_| ())
        })
        .expect("spawn test thread");
    let result = handle.join().expect("test thread panicked");
    assert_eq!(
        result,
        Err(LoweringError::DepthExceeded {
            limit: MAX_LOWERING_DEPTH
        })
    );
}
