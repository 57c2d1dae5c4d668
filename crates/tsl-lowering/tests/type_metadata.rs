use super::*;
use crate::test_utils::*;
use tsl_ast::{Modifiers, NodeArena};
use tsl_common::options::{LoweringOptions, ScriptTarget};

fn metadata_options() -> LoweringOptions {
    LoweringOptions {
        target: ScriptTarget::ES2017,
        emit_decorator_metadata: true,
        ..LoweringOptions::default()
    }
}

/// `class C { @dec x: <type_node>; }`
fn decorated_field(arena: &mut NodeArena, type_node: NodeIndex) -> NodeIndex {
    let dec = decorator(arena, "dec");
    let x = arena.create_identifier("x");
    let field = property(arena, vec![dec], Modifiers::none(), x, type_node, NodeIndex::NONE);
    let name = arena.create_identifier("C");
    let class = class_declaration(arena, class_data(Vec::new(), Modifiers::none(), name, vec![field]));
    script(arena, vec![class])
}

fn lower_field(build: impl FnOnce(&mut NodeArena) -> NodeIndex, options: &LoweringOptions) -> String {
    let mut arena = NodeArena::new();
    let type_node = build(&mut arena);
    let file = decorated_field(&mut arena, type_node);
    lower(arena, file, &TableResolver::default(), options).text
}

fn union(arena: &mut NodeArena, types: Vec<NodeIndex>) -> NodeIndex {
    arena.alloc(NodeData::UnionType {
        types: NodeList::from(types),
    })
}

fn null_type(arena: &mut NodeArena) -> NodeIndex {
    let literal = arena.create_null();
    arena.alloc(NodeData::LiteralType { literal })
}

#[test]
fn test_property_type_is_serialized() {
    let text = lower_field(|arena| keyword(arena, TypeKeyword::String), &metadata_options());
    assert!(text.contains(
        "__decorate([\n    dec,\n    __metadata(\"design:type\", String)\n], C.prototype, \"x\", void 0);"
    ));
}

#[test]
fn test_no_metadata_when_disabled() {
    let options = LoweringOptions {
        emit_decorator_metadata: false,
        ..metadata_options()
    };
    let text = lower_field(|arena| keyword(arena, TypeKeyword::String), &options);
    assert!(!text.contains("__metadata"));
}

#[test]
fn test_method_metadata() {
    let mut arena = NodeArena::new();
    let dec = decorator(&mut arena, "dec");
    let number = keyword(&mut arena, TypeKeyword::Number);
    let a = parameter(&mut arena, Vec::new(), Modifiers::none(), "a", number);
    let foo_name = arena.create_identifier("Foo");
    let foo = arena.alloc(NodeData::TypeReference {
        type_name: foo_name,
        type_arguments: NodeList::new(),
    });
    let b = parameter(&mut arena, Vec::new(), Modifiers::none(), "b", foo);
    let boolean = keyword(&mut arena, TypeKeyword::Boolean);
    let m = arena.create_identifier("m");
    let method = method(&mut arena, vec![dec], Modifiers::none(), m, vec![a, b], boolean);
    let name = arena.create_identifier("C");
    let class = class_declaration(&mut arena, class_data(Vec::new(), Modifiers::none(), name, vec![method]));
    let file = script(&mut arena, vec![class]);
    let mut resolver = TableResolver::default();
    resolver.serialization_kinds.insert(
        foo_name,
        TypeReferenceSerializationKind::TypeWithConstructSignatureAndValue,
    );

    let lowered = lower(arena, file, &resolver, &metadata_options());
    assert!(lowered.text.contains("    __metadata(\"design:type\", Function),\n"));
    assert!(lowered.text.contains("    __metadata(\"design:paramtypes\", [Number, Foo]),\n"));
    assert!(lowered.text.contains("    __metadata(\"design:returntype\", Boolean)\n"));
    assert!(lowered.output.helpers.metadata);
}

#[test]
fn test_method_without_return_type() {
    let mut arena = NodeArena::new();
    let dec = decorator(&mut arena, "dec");
    let m = arena.create_identifier("m");
    let plain = method(&mut arena, vec![dec], Modifiers::none(), m, Vec::new(), NodeIndex::NONE);
    let dec = decorator(&mut arena, "dec");
    let n = arena.create_identifier("n");
    let asynchronous = method(&mut arena, vec![dec], mods(&[ModifierKind::Async]), n, Vec::new(), NodeIndex::NONE);
    let name = arena.create_identifier("C");
    let class = class_declaration(
        &mut arena,
        class_data(Vec::new(), Modifiers::none(), name, vec![plain, asynchronous]),
    );
    let file = script(&mut arena, vec![class]);

    let lowered = lower(arena, file, &TableResolver::default(), &metadata_options());
    assert!(lowered.text.contains("__metadata(\"design:paramtypes\", [])"));
    assert!(lowered.text.contains("__metadata(\"design:returntype\", void 0)"));
    assert!(lowered.text.contains("__metadata(\"design:returntype\", Promise)"));
}

#[test]
fn test_unresolved_reference_is_guarded() {
    let mut arena = NodeArena::new();
    let bar = type_ref(&mut arena, "Bar");
    let file = decorated_field(&mut arena, bar);

    let lowered = lower(arena, file, &TableResolver::default(), &metadata_options());
    assert!(lowered.text.contains(
        "__metadata(\"design:type\", typeof (_a = typeof Bar !== \"undefined\" && Bar) === \"function\" ? _a : Object)"
    ));
    assert!(lowered.text.starts_with("var _a;\n"));
}

#[test]
fn test_unions() {
    let text = lower_field(
        |arena| {
            let string = keyword(arena, TypeKeyword::String);
            let null = null_type(arena);
            union(arena, vec![string, null])
        },
        &metadata_options(),
    );
    assert!(text.contains("__metadata(\"design:type\", String)"));

    let strict = LoweringOptions {
        strict_null_checks: true,
        ..metadata_options()
    };
    let text = lower_field(
        |arena| {
            let string = keyword(arena, TypeKeyword::String);
            let null = null_type(arena);
            union(arena, vec![string, null])
        },
        &strict,
    );
    assert!(text.contains("__metadata(\"design:type\", Object)"));

    let text = lower_field(
        |arena| {
            let string = keyword(arena, TypeKeyword::String);
            let number = keyword(arena, TypeKeyword::Number);
            union(arena, vec![string, number])
        },
        &metadata_options(),
    );
    assert!(text.contains("__metadata(\"design:type\", Object)"));
}

#[test]
fn test_null_literal_is_void() {
    let text = lower_field(null_type, &metadata_options());
    assert!(text.contains("__metadata(\"design:type\", void 0)"));
}

#[test]
fn test_missing_annotation_is_void() {
    let text = lower_field(|_| NodeIndex::NONE, &metadata_options());
    assert!(
        text.contains("__metadata(\"design:type\", void 0)"),
        "untyped property: {text}"
    );
    assert!(!text.contains("Object"), "untyped property: {text}");

    let mut arena = NodeArena::new();
    let dec = decorator(&mut arena, "dec");
    let a = parameter(&mut arena, Vec::new(), Modifiers::none(), "a", NodeIndex::NONE);
    let m = arena.create_identifier("m");
    let method = method(&mut arena, vec![dec], Modifiers::none(), m, vec![a], NodeIndex::NONE);
    let name = arena.create_identifier("C");
    let class = class_declaration(&mut arena, class_data(Vec::new(), Modifiers::none(), name, vec![method]));
    let file = script(&mut arena, vec![class]);

    let lowered = lower(arena, file, &TableResolver::default(), &metadata_options());
    assert!(lowered.text.contains("__metadata(\"design:paramtypes\", [void 0])"));
}

#[test]
fn test_bigint_falls_back_below_es2020() {
    let text = lower_field(|arena| keyword(arena, TypeKeyword::BigInt), &metadata_options());
    assert!(text.contains(
        "__metadata(\"design:type\", typeof BigInt === \"function\" ? BigInt : Object)"
    ));

    let options = LoweringOptions {
        target: ScriptTarget::ES2020,
        ..metadata_options()
    };
    let text = lower_field(|arena| keyword(arena, TypeKeyword::BigInt), &options);
    assert!(text.contains("__metadata(\"design:type\", BigInt)"));
}

#[test]
fn test_array_and_function_types() {
    let text = lower_field(
        |arena| {
            let element_type = keyword(arena, TypeKeyword::Number);
            arena.alloc(NodeData::ArrayType { element_type })
        },
        &metadata_options(),
    );
    assert!(text.contains("__metadata(\"design:type\", Array)"));
}

#[test]
fn test_constructor_parameter_types_on_class() {
    let mut arena = NodeArena::new();
    let dec = decorator(&mut arena, "dec");
    let string = keyword(&mut arena, TypeKeyword::String);
    let a = parameter(&mut arena, Vec::new(), Modifiers::none(), "a", string);
    let constructor = constructor(&mut arena, vec![a], Vec::new());
    let name = arena.create_identifier("C");
    let class = class_declaration(&mut arena, class_data(vec![dec], Modifiers::none(), name, vec![constructor]));
    let file = script(&mut arena, vec![class]);

    let lowered = lower(arena, file, &TableResolver::default(), &metadata_options());
    assert!(lowered.text.contains(
        "C = __decorate([\n    dec,\n    __metadata(\"design:paramtypes\", [String])\n], C);"
    ));
    assert!(!lowered.text.contains("design:type\""));
}
