//! Per-node subtree facts that drive the visitor's fast path.
//!
//! Computed once per unit, bottom-up, over the input tree. A subtree
//! without `CONTAINS_TYPESCRIPT` is returned unchanged by the visitor.

use bitflags::bitflags;
use rustc_hash::FxHashMap;
use tsl_ast::{HeritageToken, ModifierFlags, ModifierKind, Node, NodeArena, NodeData, NodeFlags, NodeIndex};

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct TransformFlags: u8 {
        /// Syntax that has to be removed or rewritten.
        const CONTAINS_TYPESCRIPT = 1 << 0;
        /// Class syntax that changes the shape of the class: decorators,
        /// parameter properties, static initializers, computed field names.
        /// Does not propagate past the enclosing class.
        const CONTAINS_TYPESCRIPT_CLASS_SYNTAX = 1 << 1;
    }
}

#[derive(Debug, Default)]
pub struct TransformFlagsTable {
    subtree: FxHashMap<NodeIndex, TransformFlags>,
}

impl TransformFlagsTable {
    pub fn compute(arena: &NodeArena, root: NodeIndex) -> TransformFlagsTable {
        let mut subtree: FxHashMap<NodeIndex, TransformFlags> = FxHashMap::default();
        let mut stack = vec![(root, false)];
        while let Some((index, expanded)) = stack.pop() {
            let Some(node) = arena.get(index) else {
                continue;
            };
            if !expanded {
                stack.push((index, true));
                node.data.for_each_child(|child| stack.push((child, false)));
                continue;
            }
            let mut children = TransformFlags::empty();
            node.data.for_each_child(|child| {
                children |= subtree.get(&child).copied().unwrap_or_default();
            });
            let mut flags = own_flags(arena, node, children) | children;
            if node.data.class_data().is_some() {
                flags.remove(TransformFlags::CONTAINS_TYPESCRIPT_CLASS_SYNTAX);
            }
            subtree.insert(index, flags);
        }
        tracing::trace!(nodes = subtree.len(), "computed transform flags");
        TransformFlagsTable { subtree }
    }

    /// Flags of the subtree at `node`. Nodes the table has never seen
    /// (synthesized during lowering) report everything so they are visited.
    pub fn get(&self, node: NodeIndex) -> TransformFlags {
        self.subtree
            .get(&node)
            .copied()
            .unwrap_or(TransformFlags::all())
    }

    #[inline]
    pub fn contains_typescript(&self, node: NodeIndex) -> bool {
        self.get(node).contains(TransformFlags::CONTAINS_TYPESCRIPT)
    }

    #[inline]
    pub fn contains_class_syntax(&self, node: NodeIndex) -> bool {
        self.get(node)
            .contains(TransformFlags::CONTAINS_TYPESCRIPT_CLASS_SYNTAX)
    }
}

fn own_flags(arena: &NodeArena, node: &Node, children: TransformFlags) -> TransformFlags {
    use NodeData::*;
    let ts = TransformFlags::CONTAINS_TYPESCRIPT;
    let class_syntax = TransformFlags::CONTAINS_TYPESCRIPT_CLASS_SYNTAX;
    let data = &node.data;

    if data.is_type_node() || node.flags.contains(NodeFlags::AMBIENT) {
        return ts;
    }

    let mut flags = TransformFlags::empty();
    if data
        .modifiers()
        .is_some_and(|modifiers| modifiers.iter().any(ModifierKind::is_typescript_only))
    {
        flags |= ts;
    }
    if data.decorators().is_some_and(|decorators| !decorators.is_empty()) {
        flags |= ts | class_syntax;
    }

    match data {
        TypeParameter { .. }
        | InterfaceDeclaration { .. }
        | TypeAliasDeclaration { .. }
        | EnumDeclaration { .. }
        | ModuleDeclaration { .. }
        | ImportEquals { .. }
        | As { .. }
        | Satisfies { .. }
        | TypeAssertion { .. }
        | NonNull { .. }
        | IndexSignature { .. }
        | PropertySignature { .. }
        | MethodSignature { .. }
        | Decorator { .. } => flags |= ts,
        HeritageClause {
            token: HeritageToken::Implements,
            ..
        } => flags |= ts,
        ExpressionWithTypeArguments { type_arguments, .. }
        | Call { type_arguments, .. }
        | New { type_arguments, .. }
        | TaggedTemplate { type_arguments, .. } => {
            if !type_arguments.is_empty() {
                flags |= ts;
            }
        }
        FunctionDeclaration {
            type_parameters,
            return_type,
            body,
            ..
        } => {
            if !type_parameters.is_empty() || return_type.is_some() || body.is_none() {
                flags |= ts;
            }
        }
        FunctionExpression {
            type_parameters,
            return_type,
            ..
        }
        | ArrowFunction {
            type_parameters,
            return_type,
            ..
        } => {
            if !type_parameters.is_empty() || return_type.is_some() {
                flags |= ts;
            }
        }
        MethodDeclaration {
            question,
            type_parameters,
            return_type,
            body,
            ..
        } => {
            if *question || !type_parameters.is_empty() || return_type.is_some() || body.is_none() {
                flags |= ts;
            }
        }
        GetAccessor {
            return_type, body, ..
        } => {
            if return_type.is_some() || body.is_none() {
                flags |= ts;
            }
        }
        SetAccessor { body, .. } | Constructor { body, .. } => {
            if body.is_none() {
                flags |= ts;
            }
        }
        Parameter {
            modifiers,
            name,
            question,
            type_node,
            ..
        } => {
            if *question
                || type_node.is_some()
                || !modifiers.is_empty()
                || arena.identifier_text(*name) == Some("this")
            {
                flags |= ts;
            }
            if modifiers.intersects(ModifierFlags::PARAMETER_PROPERTY) {
                flags |= ts | class_syntax;
            }
        }
        PropertyDeclaration {
            modifiers,
            name,
            question,
            exclamation,
            type_node,
            initializer,
            ..
        } => {
            if *question || *exclamation || type_node.is_some() {
                flags |= ts;
            }
            let computed = matches!(arena.data(*name), Some(ComputedPropertyName { .. }));
            if computed || (modifiers.has(ModifierKind::Static) && initializer.is_some()) {
                flags |= class_syntax;
            }
        }
        VariableDeclaration {
            exclamation,
            type_node,
            ..
        } => {
            if *exclamation || type_node.is_some() {
                flags |= ts;
            }
        }
        ImportClause { is_type_only, .. }
        | ImportSpecifier { is_type_only, .. }
        | ExportSpecifier { is_type_only, .. }
        | ExportDeclaration { is_type_only, .. } => {
            if *is_type_only {
                flags |= ts;
            }
        }
        ClassDeclaration(class) | ClassExpression(class) => {
            if !class.type_parameters.is_empty() || children.contains(class_syntax) {
                flags |= ts;
            }
        }
        _ => {}
    }
    flags
}

#[cfg(test)]
#[path = "../tests/transform_flags.rs"]
mod tests;
