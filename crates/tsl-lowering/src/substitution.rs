//! Print-time identifier and constant substitution.
//!
//! Lowering moves declarations into closures (`N.x = 1` inside a namespace
//! IIFE) and rebinds decorated classes (`C_1`). References to those names
//! elsewhere in the tree still read `x` and `C`; they are rewritten here,
//! after lowering, by walking the lowered tree in print order and recording
//! a replacement for every node that needs one.
//!
//! Which rewrites may happen at all is decided per compilation by the
//! [`SubstitutionRegistry`]; which apply at a given point of the walk is
//! decided by the advised closure the walk is currently inside.

use std::sync::atomic::{AtomicU8, Ordering};

use bitflags::bitflags;
use rustc_hash::FxHashMap;
use tracing::{debug, trace};
use tsl_ast::printer::quote_string;
use tsl_ast::{EmitFlags, NodeArena, NodeData, NodeIndex, SubstitutionLookup};
use tsl_common::limits::MAX_LOWERING_DEPTH;
use tsl_common::options::LoweringOptions;

use crate::enums::constant_literal;
use crate::error::{LoweringError, Result};
use crate::resolver::{EmitResolver, NodeCheckFlags};
use crate::LoweringOutput;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct SubstitutionFlags: u8 {
        /// References to a decorated class from inside its body use the alias.
        const CLASS_ALIASES = 1 << 0;
        /// References to namespace exports are qualified (`x` -> `N.x`).
        const NAMESPACE_EXPORTS = 1 << 1;
        /// References to enum members inside the enum body are qualified.
        const NON_QUALIFIED_ENUM_MEMBERS = 1 << 2;
    }
}

/// Substitution kinds enabled by any unit of a compilation.
///
/// Units may be lowered on different threads; enabling only ever adds
/// flags, and the set is read once lowering of every unit has finished.
#[derive(Debug, Default)]
pub struct SubstitutionRegistry {
    enabled: AtomicU8,
}

impl SubstitutionRegistry {
    pub fn new() -> SubstitutionRegistry {
        SubstitutionRegistry::default()
    }

    pub fn enable(&self, flags: SubstitutionFlags) {
        if !flags.is_empty() {
            self.enabled.fetch_or(flags.bits(), Ordering::Relaxed);
        }
    }

    pub fn enabled(&self) -> SubstitutionFlags {
        SubstitutionFlags::from_bits_truncate(self.enabled.load(Ordering::Relaxed))
    }
}

/// Node -> replacement, consumed by the printer.
#[derive(Debug, Default)]
pub struct SubstitutionTable {
    replacements: FxHashMap<NodeIndex, NodeIndex>,
}

impl SubstitutionTable {
    pub fn get(&self, node: NodeIndex) -> Option<NodeIndex> {
        self.replacements.get(&node).copied()
    }

    pub fn len(&self) -> usize {
        self.replacements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.replacements.is_empty()
    }
}

impl SubstitutionLookup for SubstitutionTable {
    fn lookup(&self, node: NodeIndex) -> Option<NodeIndex> {
        self.get(node)
    }
}

/// Position a node is printed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmitHint {
    Expression,
    Unspecified,
}

/// The two printer hooks, evaluated against one lowered unit.
pub struct SubstitutionHooks<'a> {
    arena: &'a mut NodeArena,
    resolver: &'a dyn EmitResolver,
    options: &'a LoweringOptions,
    class_aliases: &'a FxHashMap<NodeIndex, String>,
    container_names: &'a FxHashMap<NodeIndex, String>,
    enabled: SubstitutionFlags,
    applicable: SubstitutionFlags,
}

impl<'a> SubstitutionHooks<'a> {
    pub fn new(
        arena: &'a mut NodeArena,
        output: &'a LoweringOutput,
        resolver: &'a dyn EmitResolver,
        options: &'a LoweringOptions,
        registry: &SubstitutionRegistry,
    ) -> SubstitutionHooks<'a> {
        SubstitutionHooks {
            arena,
            resolver,
            options,
            class_aliases: &output.class_aliases,
            container_names: &output.container_names,
            enabled: registry.enabled(),
            applicable: SubstitutionFlags::empty(),
        }
    }

    /// Run `emit` with the substitutions that apply inside `node`: a
    /// namespace closure turns on export qualification, an enum closure
    /// turns on member qualification. The previous set is restored after.
    pub fn on_emit_node<T>(&mut self, node: NodeIndex, emit: impl FnOnce(&mut Self) -> T) -> T {
        let saved = self.applicable;
        let original = self.arena.original_root(node);
        match self.arena.data(original) {
            Some(NodeData::ModuleDeclaration { .. })
                if self.enabled.contains(SubstitutionFlags::NAMESPACE_EXPORTS) =>
            {
                self.applicable |= SubstitutionFlags::NAMESPACE_EXPORTS;
            }
            Some(NodeData::EnumDeclaration { .. })
                if self
                    .enabled
                    .contains(SubstitutionFlags::NON_QUALIFIED_ENUM_MEMBERS) =>
            {
                self.applicable |= SubstitutionFlags::NON_QUALIFIED_ENUM_MEMBERS;
            }
            _ => {}
        }
        let result = emit(self);
        self.applicable = saved;
        result
    }

    /// Replacement for `node`, or `node` itself.
    pub fn on_substitute_node(&mut self, hint: EmitHint, node: NodeIndex) -> NodeIndex {
        if self.arena.emit_flags(node).contains(EmitFlags::NO_SUBSTITUTION) {
            return node;
        }
        if hint == EmitHint::Expression {
            match self.arena.data(node) {
                Some(NodeData::Identifier { .. }) => self.substitute_expression_identifier(node),
                Some(NodeData::PropertyAccess { .. } | NodeData::ElementAccess { .. }) => {
                    self.substitute_constant_value(node)
                }
                _ => node,
            }
        } else if matches!(
            self.arena.data(node),
            Some(NodeData::ShorthandPropertyAssignment { .. })
        ) {
            self.substitute_shorthand_property_assignment(node)
        } else {
            node
        }
    }

    fn substitute_expression_identifier(&mut self, node: NodeIndex) -> NodeIndex {
        if let Some(alias) = self.substitute_class_alias(node) {
            return alias;
        }
        self.substitute_exported_name(node).unwrap_or(node)
    }

    /// `C` inside a decorated class body -> `C_1`.
    fn substitute_class_alias(&mut self, node: NodeIndex) -> Option<NodeIndex> {
        if !self.enabled.contains(SubstitutionFlags::CLASS_ALIASES) {
            return None;
        }
        let parse_node = self.arena.parse_tree_node(node);
        if parse_node.is_none()
            || !self
                .resolver
                .node_check_flags(parse_node)
                .contains(NodeCheckFlags::CONSTRUCTOR_REFERENCE_IN_CLASS)
        {
            return None;
        }
        let declaration = self.resolver.referenced_value_declaration(parse_node)?;
        let alias = self.class_aliases.get(&declaration)?;
        trace!(alias = %alias, "class alias substitution");
        let replacement = self.arena.create_generated_identifier(alias);
        self.arena.set_original(replacement, node);
        self.arena.clear_comments(replacement);
        Some(replacement)
    }

    /// `x` -> `N.x` when `x` is an export of an enclosing namespace or enum.
    fn substitute_exported_name(&mut self, node: NodeIndex) -> Option<NodeIndex> {
        if !self.enabled.intersects(self.applicable) {
            return None;
        }
        let generated = matches!(
            self.arena.data(node),
            Some(NodeData::Identifier { generated: true, .. })
        );
        if generated || self.arena.emit_flags(node).contains(EmitFlags::LOCAL_NAME) {
            return None;
        }
        let parse_node = self.arena.parse_tree_node(node);
        if parse_node.is_none() {
            return None;
        }
        let container = self.resolver.referenced_export_container(parse_node)?;
        let (required, name) = match self.arena.data(container)? {
            NodeData::ModuleDeclaration { name, .. } => (SubstitutionFlags::NAMESPACE_EXPORTS, *name),
            NodeData::EnumDeclaration { name, .. } => {
                (SubstitutionFlags::NON_QUALIFIED_ENUM_MEMBERS, *name)
            }
            _ => return None,
        };
        if !self.applicable.contains(required) {
            return None;
        }
        let qualifier = match self.container_names.get(&container) {
            Some(local) => local.clone(),
            None => self.arena.identifier_text(name)?.to_string(),
        };
        let text = self.arena.identifier_text(node)?.to_string();
        trace!(name = %text, container = %qualifier, "qualify exported name");
        let left = self.arena.create_generated_identifier(&qualifier);
        let right = self.arena.create_identifier(&text);
        self.arena.set_original(right, node);
        self.arena.clear_comments(right);
        let access = self.arena.create_property_access_with_name(left, right);
        self.arena.set_original(access, node);
        Some(access)
    }

    /// `{ x }` -> `{ x: N.x }` for a namespace export.
    fn substitute_shorthand_property_assignment(&mut self, node: NodeIndex) -> NodeIndex {
        if !self.enabled.contains(SubstitutionFlags::NAMESPACE_EXPORTS) {
            return node;
        }
        let Some(NodeData::ShorthandPropertyAssignment {
            name,
            object_assignment_initializer,
        }) = self.arena.data(node).cloned()
        else {
            return node;
        };
        let Some(exported) = self.substitute_exported_name(name) else {
            return node;
        };
        let value = if object_assignment_initializer.is_some() {
            self.arena
                .create_assignment(exported, object_assignment_initializer)
        } else {
            exported
        };
        let property_name = self.arena.clone_node(name);
        self.arena.clear_comments(property_name);
        let assignment = self.arena.create_property_assignment(property_name, value);
        self.arena.set_original(assignment, node);
        assignment
    }

    /// `E.A` / `E["A"]` on a constant enum member -> `0 /* A */`.
    fn substitute_constant_value(&mut self, node: NodeIndex) -> NodeIndex {
        if self.options.isolated_modules {
            return node;
        }
        let parse_node = self.arena.parse_tree_node(node);
        if parse_node.is_none() {
            return node;
        }
        let Some(value) = self.resolver.constant_value(parse_node) else {
            return node;
        };
        let replacement = constant_literal(self.arena, &value);
        if !self.options.remove_comments {
            if let Some(name) = self.accessed_member_text(node) {
                let comment = format!(" {} ", safe_multi_line_comment(&name));
                self.arena
                    .add_synthetic_trailing_block_comment(replacement, &comment);
            }
        }
        debug!(?value, "inlined constant enum member");
        replacement
    }

    fn accessed_member_text(&self, node: NodeIndex) -> Option<String> {
        match self.arena.data(node)? {
            NodeData::PropertyAccess { name, .. } => self.arena.text(*name).map(str::to_string),
            NodeData::ElementAccess { argument, .. } => match self.arena.data(*argument)? {
                NodeData::StringLiteral { text } => Some(quote_string(text)),
                NodeData::NumericLiteral { text } => Some(text.clone()),
                _ => None,
            },
            _ => None,
        }
    }
}

/// `*/` cannot appear inside a block comment.
fn safe_multi_line_comment(text: &str) -> String {
    text.replace("*/", "*_/")
}

/// Walk the lowered unit in print order and record every substitution the
/// printer would make.
pub fn collect_substitutions(
    arena: &mut NodeArena,
    output: &LoweringOutput,
    resolver: &dyn EmitResolver,
    options: &LoweringOptions,
    registry: &SubstitutionRegistry,
) -> Result<SubstitutionTable> {
    let mut hooks = SubstitutionHooks::new(arena, output, resolver, options, registry);
    let mut table = SubstitutionTable::default();
    if hooks.enabled.is_empty() && options.isolated_modules {
        return Ok(table);
    }
    walk(&mut hooks, &mut table, output.source_file, EmitHint::Unspecified, 0)?;
    debug!(replacements = table.len(), "collected substitutions");
    Ok(table)
}

fn walk(
    hooks: &mut SubstitutionHooks<'_>,
    table: &mut SubstitutionTable,
    node: NodeIndex,
    hint: EmitHint,
    depth: u32,
) -> Result<()> {
    if node.is_none() {
        return Ok(());
    }
    if depth >= MAX_LOWERING_DEPTH * 2 {
        return Err(LoweringError::DepthExceeded {
            limit: MAX_LOWERING_DEPTH * 2,
        }
        .report());
    }
    if hooks
        .arena
        .emit_flags(node)
        .contains(EmitFlags::ADVISE_ON_EMIT_NODE)
    {
        return hooks.on_emit_node(node, |hooks| walk_substituted(hooks, table, node, hint, depth));
    }
    walk_substituted(hooks, table, node, hint, depth)
}

fn walk_substituted(
    hooks: &mut SubstitutionHooks<'_>,
    table: &mut SubstitutionTable,
    node: NodeIndex,
    hint: EmitHint,
    depth: u32,
) -> Result<()> {
    let replacement = hooks.on_substitute_node(hint, node);
    if replacement != node {
        table.replacements.insert(node, replacement);
    }
    let Some(data) = hooks.arena.data(replacement).cloned() else {
        return Ok(());
    };
    let name = data.name();
    let property_name = data.property_name();
    for child in data.children() {
        let child_hint = match hooks.arena.data(child) {
            Some(child_data)
                if child_data.is_expression() && child != name && child != property_name =>
            {
                EmitHint::Expression
            }
            _ => EmitHint::Unspecified,
        };
        walk(hooks, table, child, child_hint, depth + 1)?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../tests/substitution.rs"]
mod tests;
