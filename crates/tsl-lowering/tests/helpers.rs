use super::*;
use crate::test_utils::*;
use tsl_ast::{Modifiers, NodeArena, NodeIndex};
use tsl_common::options::{LoweringOptions, ScriptTarget};

#[test]
fn test_prelude_defines_only_requested_helpers() {
    assert!(!HelpersNeeded::default().any());
    assert_eq!(HelpersNeeded::default().prelude(), "");

    let decorate = HelpersNeeded {
        decorate: true,
        ..HelpersNeeded::default()
    };
    assert!(decorate.any());
    let prelude = decorate.prelude();
    assert!(prelude.starts_with("var __decorate = "));
    assert!(!prelude.contains("var __param"));
    assert!(!prelude.contains("var __metadata"));
    assert!(!prelude.contains("var __rest"));

    let rest = HelpersNeeded {
        rest: true,
        ..HelpersNeeded::default()
    };
    let prelude = rest.prelude();
    assert!(prelude.starts_with("var __rest = "));
    assert!(!prelude.contains("var __decorate"));
}

#[test]
fn test_prelude_follows_lowered_unit() {
    let mut arena = NodeArena::new();
    let dec = decorator(&mut arena, "dec");
    let inject = decorator(&mut arena, "inject");
    let x = parameter(&mut arena, vec![inject], Modifiers::none(), "x", NodeIndex::NONE);
    let m = arena.create_identifier("m");
    let method = method(&mut arena, vec![dec], Modifiers::none(), m, vec![x], NodeIndex::NONE);
    let name = arena.create_identifier("C");
    let class = class_declaration(&mut arena, class_data(Vec::new(), Modifiers::none(), name, vec![method]));
    let file = script(&mut arena, vec![class]);
    let options = LoweringOptions {
        target: ScriptTarget::ES2017,
        ..LoweringOptions::default()
    };

    let lowered = lower(arena, file, &TableResolver::default(), &options);
    let prelude = lowered.output.helpers.prelude();
    assert!(lowered.text.contains("__decorate(") && prelude.contains("var __decorate = "));
    assert!(lowered.text.contains("__param(0, inject)") && prelude.contains("var __param = "));
    assert!(!prelude.contains("var __metadata"), "no metadata requested: {prelude}");
    assert!(!prelude.contains("var __rest"), "no rest requested: {prelude}");
}
