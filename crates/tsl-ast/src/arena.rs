//! Append-only node storage.
//!
//! Parse-tree nodes are the ones allocated before [`NodeArena::seal_parse_tree`]
//! is called. Everything allocated afterwards is synthesized by a transform and
//! answers oracle queries through its `original` chain.

use crate::base::{NodeIndex, NodeList};
use crate::flags::EmitFlags;
use crate::node::{Node, NodeData, SyntheticComment};

#[derive(Clone, Debug, Default)]
pub struct NodeArena {
    nodes: Vec<Node>,
    /// Number of parse-tree nodes; `None` while the tree is still being built.
    parse_tree_len: Option<u32>,
}

impl NodeArena {
    pub fn new() -> NodeArena {
        NodeArena::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Allocate a node with default header fields.
    pub fn alloc(&mut self, data: NodeData) -> NodeIndex {
        self.alloc_node(Node::new(data))
    }

    pub fn alloc_node(&mut self, node: Node) -> NodeIndex {
        let index = NodeIndex(self.nodes.len() as u32);
        self.nodes.push(node);
        index
    }

    /// Mark every node allocated so far as part of the parse tree.
    ///
    /// Only the first call has an effect, so lowering the same arena twice
    /// keeps the original boundary.
    pub fn seal_parse_tree(&mut self) {
        if self.parse_tree_len.is_none() {
            self.parse_tree_len = Some(self.nodes.len() as u32);
        }
    }

    /// `true` for nodes produced by the parser (or the test builder).
    pub fn is_parse_tree_node(&self, index: NodeIndex) -> bool {
        if index.is_none() {
            return false;
        }
        match self.parse_tree_len {
            Some(len) => index.0 < len,
            None => (index.0 as usize) < self.nodes.len(),
        }
    }

    #[inline]
    pub fn get(&self, index: NodeIndex) -> Option<&Node> {
        if index.is_none() {
            None
        } else {
            self.nodes.get(index.0 as usize)
        }
    }

    #[inline]
    pub fn data(&self, index: NodeIndex) -> Option<&NodeData> {
        self.get(index).map(|node| &node.data)
    }

    /// Header access for freshly synthesized nodes. Parse-tree nodes are
    /// never mutated once sealed.
    #[inline]
    pub fn get_mut(&mut self, index: NodeIndex) -> Option<&mut Node> {
        if index.is_none() || self.is_sealed_parse_node(index) {
            None
        } else {
            self.nodes.get_mut(index.0 as usize)
        }
    }

    fn is_sealed_parse_node(&self, index: NodeIndex) -> bool {
        self.parse_tree_len.is_some_and(|len| index.0 < len)
    }

    /// Produce a node with `data` in place of `index`.
    ///
    /// Returns `index` itself when nothing changed; otherwise a new node whose
    /// `original` is `index` and which inherits its range and comments.
    pub fn update(&mut self, index: NodeIndex, data: NodeData) -> NodeIndex {
        let Some(old) = self.get(index) else {
            return self.alloc(data);
        };
        if old.data == data {
            return index;
        }
        let node = Node {
            data,
            flags: old.flags,
            emit_flags: old.emit_flags,
            original: index,
            pos: old.pos,
            end: old.end,
            comments: old.comments.clone(),
        };
        self.alloc_node(node)
    }

    /// Shallow copy of `index` (same children) linked back to it.
    pub fn clone_node(&mut self, index: NodeIndex) -> NodeIndex {
        let Some(old) = self.get(index) else {
            return NodeIndex::NONE;
        };
        let mut node = old.clone();
        node.original = index;
        self.alloc_node(node)
    }

    /// Link `index` to the node it was produced from, copying the range and
    /// leading comments when the new node has none.
    pub fn set_original(&mut self, index: NodeIndex, original: NodeIndex) {
        let (pos, end, comments) = match self.get(original) {
            Some(source) => (source.pos, source.end, source.comments.clone()),
            None => return,
        };
        if let Some(node) = self.get_mut(index) {
            node.original = original;
            if node.pos == 0 && node.end == 0 {
                node.pos = pos;
                node.end = end;
            }
            if node.comments.is_empty() {
                node.comments = comments;
            }
        }
    }

    #[inline]
    pub fn original(&self, index: NodeIndex) -> NodeIndex {
        self.get(index).map_or(NodeIndex::NONE, |node| node.original)
    }

    /// Follow `original` links to the first parse-tree node.
    pub fn parse_tree_node(&self, index: NodeIndex) -> NodeIndex {
        let mut current = index;
        while current.is_some() {
            if self.is_parse_tree_node(current) {
                return current;
            }
            current = self.original(current);
        }
        NodeIndex::NONE
    }

    /// Follow `original` links to the end of the chain.
    pub fn original_root(&self, index: NodeIndex) -> NodeIndex {
        let mut current = index;
        loop {
            let next = self.original(current);
            if next.is_none() {
                return current;
            }
            current = next;
        }
    }

    pub fn emit_flags(&self, index: NodeIndex) -> EmitFlags {
        self.get(index).map_or(EmitFlags::empty(), |node| node.emit_flags)
    }

    pub fn add_emit_flags(&mut self, index: NodeIndex, flags: EmitFlags) -> NodeIndex {
        if let Some(node) = self.get_mut(index) {
            node.emit_flags |= flags;
        }
        index
    }

    pub fn add_leading_comment(&mut self, index: NodeIndex, comment: SyntheticComment) {
        if let Some(node) = self.get_mut(index) {
            node.comments.leading.push(comment);
        }
    }

    pub fn add_trailing_comment(&mut self, index: NodeIndex, comment: SyntheticComment) {
        if let Some(node) = self.get_mut(index) {
            node.comments.trailing.push(comment);
        }
    }

    /// Drop comments copied onto a synthesized node.
    pub fn clear_comments(&mut self, index: NodeIndex) {
        if let Some(node) = self.get_mut(index) {
            node.comments.leading.clear();
            node.comments.trailing.clear();
        }
    }

    /// Text of an identifier, private identifier or string-like literal.
    pub fn text(&self, index: NodeIndex) -> Option<&str> {
        self.data(index).and_then(NodeData::text)
    }

    /// Text of an identifier node only.
    pub fn identifier_text(&self, index: NodeIndex) -> Option<&str> {
        match self.data(index)? {
            NodeData::Identifier { text, .. } => Some(text),
            _ => None,
        }
    }

    pub fn is_identifier(&self, index: NodeIndex) -> bool {
        matches!(self.data(index), Some(NodeData::Identifier { .. }))
    }

    pub fn kind_name(&self, index: NodeIndex) -> &'static str {
        self.data(index).map_or("<none>", NodeData::kind_name)
    }

    /// Statements of a source file, block or module block.
    pub fn statements(&self, index: NodeIndex) -> Option<&NodeList> {
        match self.data(index)? {
            NodeData::SourceFile { statements, .. }
            | NodeData::Block { statements, .. }
            | NodeData::ModuleBlock { statements }
            | NodeData::CaseClause { statements, .. }
            | NodeData::DefaultClause { statements } => Some(statements),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "../tests/arena.rs"]
mod tests;
