//! Lexical scope frames and the first-declaration merge map.
//!
//! A frame is pushed for every source file, block, case block and module
//! block the visitor enters. Class, function, namespace and enum
//! declarations record their name in the innermost frame; only the first
//! declaration of a name emits the leading `var`, later ones merge into it.

use indexmap::IndexMap;
use tsl_ast::NodeIndex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeKind {
    SourceFile,
    Block,
    CaseBlock,
    ModuleBlock,
}

#[derive(Debug)]
pub struct ScopeFrame {
    pub kind: ScopeKind,
    pub node: NodeIndex,
    /// Nearest enclosing class declaration within this frame.
    pub name_scope: Option<NodeIndex>,
    first_declarations: IndexMap<String, NodeIndex>,
}

impl ScopeFrame {
    fn new(kind: ScopeKind, node: NodeIndex) -> ScopeFrame {
        ScopeFrame {
            kind,
            node,
            name_scope: None,
            first_declarations: IndexMap::new(),
        }
    }

    /// Names recorded in this frame, in declaration order.
    pub fn declared_names(&self) -> impl Iterator<Item = &str> {
        self.first_declarations.keys().map(String::as_str)
    }
}

#[derive(Debug, Default)]
pub struct ScopeTracker {
    frames: Vec<ScopeFrame>,
}

impl ScopeTracker {
    pub fn new() -> ScopeTracker {
        ScopeTracker::default()
    }

    pub fn enter(&mut self, kind: ScopeKind, node: NodeIndex) {
        tracing::trace!(?kind, node = node.0, depth = self.frames.len(), "enter scope");
        self.frames.push(ScopeFrame::new(kind, node));
    }

    pub fn exit(&mut self) -> Option<ScopeFrame> {
        let frame = self.frames.pop();
        if let Some(frame) = &frame {
            tracing::trace!(kind = ?frame.kind, node = frame.node.0, "exit scope");
        }
        frame
    }

    pub fn current(&self) -> Option<&ScopeFrame> {
        self.frames.last()
    }

    pub fn current_kind(&self) -> Option<ScopeKind> {
        self.current().map(|frame| frame.kind)
    }

    /// Node that opened the innermost frame.
    pub fn current_node(&self) -> NodeIndex {
        self.current().map_or(NodeIndex::NONE, |frame| frame.node)
    }

    pub fn is_source_file_scope(&self) -> bool {
        self.current_kind() == Some(ScopeKind::SourceFile)
    }

    pub fn name_scope(&self) -> Option<NodeIndex> {
        self.current().and_then(|frame| frame.name_scope)
    }

    pub fn set_name_scope(&mut self, name_scope: Option<NodeIndex>) {
        if let Some(frame) = self.frames.last_mut() {
            frame.name_scope = name_scope;
        }
    }

    /// Remember `declaration` as the first declaration of `name` unless an
    /// earlier one exists. Returns `true` when this call inserted it.
    pub fn record_declaration(&mut self, name: &str, declaration: NodeIndex) -> bool {
        let Some(frame) = self.frames.last_mut() else {
            return true;
        };
        if frame.first_declarations.contains_key(name) {
            return false;
        }
        frame
            .first_declarations
            .insert(name.to_string(), declaration);
        true
    }

    /// `true` when `declaration` is the first declaration of `name` in the
    /// innermost frame. Outside any frame every declaration is first.
    pub fn is_first_declaration(&self, name: &str, declaration: NodeIndex) -> bool {
        match self.current() {
            Some(frame) => frame.first_declarations.get(name) == Some(&declaration),
            None => true,
        }
    }
}

#[cfg(test)]
#[path = "../tests/scope.rs"]
mod tests;
