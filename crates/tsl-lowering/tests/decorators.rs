use super::*;
use crate::test_utils::*;
use tsl_ast::{Modifiers, NodeData};
use tsl_common::options::LoweringOptions;

fn options(target: ScriptTarget) -> LoweringOptions {
    LoweringOptions {
        target,
        ..LoweringOptions::default()
    }
}

fn named_class(arena: &mut NodeArena, decorators: Vec<NodeIndex>, members: Vec<NodeIndex>) -> NodeIndex {
    let name = arena.create_identifier("C");
    class_declaration(arena, class_data(decorators, Modifiers::none(), name, members))
}

/// `@a @b m(@c x) {}`
fn decorated_method(arena: &mut NodeArena, leading_this: bool) -> NodeIndex {
    let a = decorator(arena, "a");
    let b = decorator(arena, "b");
    let c = decorator(arena, "c");
    let mut parameters = Vec::new();
    if leading_this {
        let foo = type_ref(arena, "Foo");
        parameters.push(parameter(arena, Vec::new(), Modifiers::none(), "this", foo));
    }
    parameters.push(parameter(arena, vec![c], Modifiers::none(), "x", NodeIndex::NONE));
    let name = arena.create_identifier("m");
    method(arena, vec![a, b], Modifiers::none(), name, parameters, NodeIndex::NONE)
}

#[test]
fn test_method_decorators_and_parameter_decorators() {
    let mut arena = NodeArena::new();
    let m = decorated_method(&mut arena, false);
    let class = named_class(&mut arena, Vec::new(), vec![m]);
    let file = script(&mut arena, vec![class]);

    let lowered = lower(arena, file, &TableResolver::default(), &options(ScriptTarget::ES2017));
    assert!(lowered.text.starts_with("class C {\n    m(x) {\n    }\n}\n"));
    assert!(lowered.text.contains(
        "__decorate([\n    a,\n    b,\n    __param(0, c)\n], C.prototype, \"m\", null);"
    ));
    assert!(lowered.output.helpers.decorate);
    assert!(lowered.output.helpers.param);
    assert!(!lowered.output.helpers.metadata);
}

#[test]
fn test_this_parameter_is_not_counted() {
    let mut arena = NodeArena::new();
    let m = decorated_method(&mut arena, true);
    let class = named_class(&mut arena, Vec::new(), vec![m]);
    let file = script(&mut arena, vec![class]);

    let lowered = lower(arena, file, &TableResolver::default(), &options(ScriptTarget::ES2017));
    assert!(lowered.text.contains("    __param(0, c)\n"));
    assert!(lowered.text.contains("    m(x) {\n"));
}

#[test]
fn test_instance_members_are_decorated_before_static() {
    let mut arena = NodeArena::new();
    let d = decorator(&mut arena, "d");
    let p = arena.create_identifier("p");
    let field = property(&mut arena, vec![d], mods(&[ModifierKind::Static]), p, NodeIndex::NONE, NodeIndex::NONE);
    let m = decorated_method(&mut arena, false);
    let class = named_class(&mut arena, Vec::new(), vec![field, m]);
    let file = script(&mut arena, vec![class]);

    let lowered = lower(arena, file, &TableResolver::default(), &options(ScriptTarget::ES2017));
    let instance = lowered.text.find("C.prototype, \"m\", null);");
    let statics = lowered.text.find("__decorate([\n    d\n], C, \"p\", void 0);");
    assert!(instance.is_some() && statics.is_some());
    assert!(instance < statics);
}

#[test]
fn test_class_decorator_is_applied_after_member_decorators() {
    let mut arena = NodeArena::new();
    let cls = decorator(&mut arena, "cls");
    let d = decorator(&mut arena, "d");
    let y = arena.create_identifier("y");
    let field = property(&mut arena, vec![d], mods(&[ModifierKind::Static]), y, NodeIndex::NONE, NodeIndex::NONE);
    let m = decorated_method(&mut arena, false);
    let class = named_class(&mut arena, vec![cls], vec![field, m]);
    let file = script(&mut arena, vec![class]);

    let lowered = lower(arena, file, &TableResolver::default(), &options(ScriptTarget::ES2017));
    let text = &lowered.text;
    let binding = text.find("let C = class C {");
    let instance = text.find("], C.prototype, \"m\", null);");
    let statics = text.find("__decorate([\n    d\n], C, \"y\", void 0);");
    let class_call = text.find("C = __decorate([\n    cls\n], C);");
    assert!(
        binding.is_some() && instance.is_some() && statics.is_some() && class_call.is_some(),
        "missing decoration: {text}"
    );
    assert!(binding < instance, "binding before members: {text}");
    assert!(instance < statics, "instance before static: {text}");
    assert!(statics < class_call, "class decorator last: {text}");
}

#[test]
fn test_accessor_pair_is_decorated_once() {
    let mut arena = NodeArena::new();
    let d = decorator(&mut arena, "d");
    let get_name = arena.create_identifier("x");
    let get_body = block(&mut arena, Vec::new());
    let getter = arena.alloc(NodeData::GetAccessor {
        decorators: NodeList::from(vec![d]),
        modifiers: Modifiers::none(),
        name: get_name,
        parameters: NodeList::new(),
        return_type: NodeIndex::NONE,
        body: get_body,
    });
    let set_name = arena.create_identifier("x");
    let v = parameter(&mut arena, Vec::new(), Modifiers::none(), "v", NodeIndex::NONE);
    let set_body = block(&mut arena, Vec::new());
    let setter = arena.alloc(NodeData::SetAccessor {
        decorators: NodeList::new(),
        modifiers: Modifiers::none(),
        name: set_name,
        parameters: NodeList::from(vec![v]),
        body: set_body,
    });
    let class = named_class(&mut arena, Vec::new(), vec![getter, setter]);
    let file = script(&mut arena, vec![class]);

    let lowered = lower(arena, file, &TableResolver::default(), &options(ScriptTarget::ES2017));
    assert_eq!(lowered.text.matches("__decorate(").count(), 1);
    assert!(lowered.text.contains("], C.prototype, \"x\", null);"));
}

#[test]
fn test_es3_omits_descriptor() {
    let mut arena = NodeArena::new();
    let m = decorated_method(&mut arena, false);
    let class = named_class(&mut arena, Vec::new(), vec![m]);
    let file = script(&mut arena, vec![class]);

    let lowered = lower(arena, file, &TableResolver::default(), &options(ScriptTarget::ES3));
    assert!(lowered.text.starts_with("let C = (() => {\n"));
    assert!(lowered.text.contains("], C.prototype, \"m\");"));
    assert!(!lowered.text.contains("null"));
}

#[test]
fn test_constructor_parameter_decorator_decorates_class() {
    let mut arena = NodeArena::new();
    let inject = decorator(&mut arena, "inject");
    let x = parameter(&mut arena, vec![inject], Modifiers::none(), "x", NodeIndex::NONE);
    let constructor = constructor(&mut arena, vec![x], Vec::new());
    let class = named_class(&mut arena, Vec::new(), vec![constructor]);
    let file = script(&mut arena, vec![class]);

    let lowered = lower(arena, file, &TableResolver::default(), &options(ScriptTarget::ES2017));
    assert!(lowered.text.starts_with("let C = class C {\n"));
    assert!(lowered.text.contains("C = __decorate([\n    __param(0, inject)\n], C);"));
    assert!(lowered.output.helpers.param);
}

#[test]
fn test_accessor_lookup_pairs_by_name_and_staticness() {
    let mut arena = NodeArena::new();
    let get_name = arena.create_identifier("x");
    let body = block(&mut arena, Vec::new());
    let getter = arena.alloc(NodeData::GetAccessor {
        decorators: NodeList::new(),
        modifiers: Modifiers::none(),
        name: get_name,
        parameters: NodeList::new(),
        return_type: NodeIndex::NONE,
        body,
    });
    let set_name = arena.create_identifier("x");
    let body = block(&mut arena, Vec::new());
    let static_setter = arena.alloc(NodeData::SetAccessor {
        decorators: NodeList::new(),
        modifiers: mods(&[ModifierKind::Static]),
        name: set_name,
        parameters: NodeList::new(),
        body,
    });
    let members = NodeList::from(vec![getter, static_setter]);

    let pair = all_accessor_declarations(&arena, &members, getter);
    assert_eq!(pair.first, getter);
    assert_eq!(pair.get, getter);
    assert!(pair.second.is_none());
    assert!(pair.set.is_none());
}
