//! Whether a namespace produces any runtime value.

use tsl_ast::{ModifierKind, NodeArena, NodeData, NodeIndex};
use tsl_common::limits::MAX_LOWERING_DEPTH;

use crate::resolver::EmitResolver;
use crate::visitor::TypeScriptLowering;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleInstanceState {
    /// Only types and non-exported aliases.
    NonInstantiated,
    Instantiated,
    /// Values come from `const enum` declarations alone.
    ConstEnumOnly,
}

impl ModuleInstanceState {
    /// Combine two sibling states: any value wins, then const enums.
    fn combine(self, other: ModuleInstanceState) -> ModuleInstanceState {
        use ModuleInstanceState::*;
        match (self, other) {
            (Instantiated, _) | (_, Instantiated) => Instantiated,
            (ConstEnumOnly, _) | (_, ConstEnumOnly) => ConstEnumOnly,
            _ => NonInstantiated,
        }
    }
}

impl TypeScriptLowering<'_> {
    /// State of a parse-tree namespace declaration.
    pub(crate) fn module_instance_state(&self, node: NodeIndex) -> ModuleInstanceState {
        module_instance_state(self.arena, self.resolver, node)
    }
}

/// Classify `node` (a namespace declaration or one of its statements).
/// Trees nested past the depth limit are assumed to carry values.
pub fn module_instance_state(
    arena: &NodeArena,
    resolver: &dyn EmitResolver,
    node: NodeIndex,
) -> ModuleInstanceState {
    state_at(arena, resolver, node, 0)
}

fn state_at(
    arena: &NodeArena,
    resolver: &dyn EmitResolver,
    node: NodeIndex,
    depth: u32,
) -> ModuleInstanceState {
    if depth >= MAX_LOWERING_DEPTH {
        return ModuleInstanceState::Instantiated;
    }
    let Some(data) = arena.data(node) else {
        return ModuleInstanceState::Instantiated;
    };
    match data {
        NodeData::InterfaceDeclaration { .. } | NodeData::TypeAliasDeclaration { .. } => {
            ModuleInstanceState::NonInstantiated
        }
        NodeData::EnumDeclaration { modifiers, .. } if modifiers.has(ModifierKind::Const) => {
            ModuleInstanceState::ConstEnumOnly
        }
        NodeData::ImportDeclaration { .. } => ModuleInstanceState::NonInstantiated,
        NodeData::ImportEquals { modifiers, .. } if !modifiers.has(ModifierKind::Export) => {
            ModuleInstanceState::NonInstantiated
        }
        NodeData::ExportDeclaration {
            export_clause,
            module_specifier,
            ..
        } if module_specifier.is_none() => match arena.data(*export_clause) {
            Some(NodeData::NamedExports { elements }) => elements
                .iter()
                .map(|specifier| {
                    if resolver.is_value_alias_declaration(specifier) {
                        ModuleInstanceState::Instantiated
                    } else {
                        ModuleInstanceState::NonInstantiated
                    }
                })
                .fold(ModuleInstanceState::NonInstantiated, ModuleInstanceState::combine),
            _ => ModuleInstanceState::Instantiated,
        },
        NodeData::ModuleBlock { statements } => {
            let mut state = ModuleInstanceState::NonInstantiated;
            for statement in statements.iter() {
                state = state.combine(state_at(arena, resolver, statement, depth + 1));
                if state == ModuleInstanceState::Instantiated {
                    break;
                }
            }
            state
        }
        NodeData::ModuleDeclaration { body, .. } => {
            if body.is_none() {
                ModuleInstanceState::Instantiated
            } else {
                state_at(arena, resolver, *body, depth + 1)
            }
        }
        _ => ModuleInstanceState::Instantiated,
    }
}

#[cfg(test)]
#[path = "../tests/instance_state.rs"]
mod tests;
