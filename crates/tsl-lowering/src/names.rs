//! Generated names: unique `x_1` suffixes and `_a`, `_b`, ... temporaries.
//!
//! Uniqueness is file-wide. Every identifier text in the input tree is
//! reserved up front, so a generated name never captures a user binding.

use rustc_hash::FxHashSet;
use tsl_ast::{NodeArena, NodeData, NodeIndex};
use tsl_common::limits::MAX_UNIQUE_NAME_ATTEMPTS;

#[derive(Debug, Default)]
pub struct NameGenerator {
    used: FxHashSet<String>,
    temp_count: u32,
    fallback_count: u32,
}

impl NameGenerator {
    pub fn new() -> NameGenerator {
        NameGenerator::default()
    }

    /// Reserve every identifier text reachable from `root`.
    pub fn from_tree(arena: &NodeArena, root: NodeIndex) -> NameGenerator {
        let mut names = NameGenerator::new();
        let mut stack = vec![root];
        while let Some(index) = stack.pop() {
            let Some(data) = arena.data(index) else {
                continue;
            };
            if let NodeData::Identifier { text, .. } | NodeData::PrivateIdentifier { text } = data {
                names.used.insert(text.clone());
            }
            data.for_each_child(|child| stack.push(child));
        }
        names
    }

    pub fn reserve(&mut self, name: &str) {
        self.used.insert(name.to_string());
    }

    pub fn is_used(&self, name: &str) -> bool {
        self.used.contains(name)
    }

    /// `base_1`, `base_2`, ... whichever is free first.
    pub fn unique_name(&mut self, base: &str) -> String {
        for suffix in 1..=MAX_UNIQUE_NAME_ATTEMPTS {
            let candidate = format!("{base}_{suffix}");
            if self.used.insert(candidate.clone()) {
                return candidate;
            }
        }
        loop {
            self.fallback_count += 1;
            let candidate = format!("_{}", self.fallback_count);
            if self.used.insert(candidate.clone()) {
                return candidate;
            }
        }
    }

    /// Next free temporary: `_a` to `_z` (skipping `_i` and `_n`), then
    /// `_0`, `_1`, ...
    pub fn temp_name(&mut self) -> String {
        loop {
            let count = self.temp_count;
            self.temp_count += 1;
            if count == 8 || count == 13 {
                continue;
            }
            let candidate = if count < 26 {
                format!("_{}", char::from(b'a' + count as u8))
            } else {
                format!("_{}", count - 26)
            };
            if self.used.insert(candidate.clone()) {
                return candidate;
            }
        }
    }
}

/// `true` when anything under `root` declares a binding called `name`.
///
/// Used to decide whether a namespace closure parameter has to be renamed
/// so it does not shadow a member of the same name.
pub fn declares_name(arena: &NodeArena, root: NodeIndex, name: &str) -> bool {
    let mut stack = vec![root];
    while let Some(index) = stack.pop() {
        let Some(data) = arena.data(index) else {
            continue;
        };
        if is_binding_declaration(data) && arena.identifier_text(data.name()) == Some(name) {
            return true;
        }
        data.for_each_child(|child| stack.push(child));
    }
    false
}

/// `true` when one of `members` (enum members) is called `name`.
pub fn enum_declares_member(arena: &NodeArena, members: &tsl_ast::NodeList, name: &str) -> bool {
    members.iter().any(|member| {
        arena
            .data(member)
            .map(NodeData::name)
            .and_then(|member_name| arena.text(member_name))
            == Some(name)
    })
}

fn is_binding_declaration(data: &NodeData) -> bool {
    matches!(
        data,
        NodeData::VariableDeclaration { .. }
            | NodeData::BindingElement { .. }
            | NodeData::Parameter { .. }
            | NodeData::FunctionDeclaration { .. }
            | NodeData::ClassDeclaration(_)
            | NodeData::EnumDeclaration { .. }
            | NodeData::ModuleDeclaration { .. }
            | NodeData::InterfaceDeclaration { .. }
            | NodeData::TypeAliasDeclaration { .. }
            | NodeData::ImportEquals { .. }
            | NodeData::ImportClause { .. }
            | NodeData::NamespaceImport { .. }
            | NodeData::ImportSpecifier { .. }
    )
}

#[cfg(test)]
#[path = "../tests/names.rs"]
mod tests;
