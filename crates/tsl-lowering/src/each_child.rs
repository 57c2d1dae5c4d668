//! Structural recursion: rebuild a node from its visited children.

use tsl_ast::{ChildMut, NodeData, NodeIndex};

use crate::error::{LoweringError, Result};
use crate::visitor::{TypeScriptLowering, VisitorKind};

impl TypeScriptLowering<'_> {
    /// Visit every child slot of `node` and return the updated node, or
    /// `node` itself when no child changed.
    pub(crate) fn visit_each_child(&mut self, node: NodeIndex) -> Result<NodeIndex> {
        let data = self.node_data(node)?;
        self.visit_each_child_of(node, data)
    }

    /// Like [`visit_each_child`](Self::visit_each_child), starting from a
    /// caller-adjusted copy of the node's data.
    pub(crate) fn visit_each_child_of(
        &mut self,
        node: NodeIndex,
        mut data: NodeData,
    ) -> Result<NodeIndex> {
        let embeds_statements = embeds_statements(&data);
        let mut failure: Option<LoweringError> = None;
        data.for_each_child_slot_mut(|slot| {
            if failure.is_some() {
                return;
            }
            let outcome = match slot {
                ChildMut::Node(child) => self
                    .visit_child_slot(*child, embeds_statements)
                    .map(|visited| *child = visited),
                ChildMut::List(list) => self
                    .visit_list(list, VisitorKind::General)
                    .map(|visited| *list = visited),
                ChildMut::Modifiers(modifiers) => {
                    *modifiers = self.visit_modifiers(modifiers);
                    Ok(())
                }
            };
            if let Err(error) = outcome {
                failure = Some(error);
            }
        });
        if let Some(error) = failure {
            return Err(error);
        }
        Ok(self.arena.update(node, data))
    }

    /// A removed embedded statement becomes `;`; several statements are
    /// lifted into a block.
    fn visit_child_slot(&mut self, child: NodeIndex, embeds_statements: bool) -> Result<NodeIndex> {
        if child.is_none() {
            return Ok(child);
        }
        let results = self.visit(child)?;
        match results.as_slice() {
            [single] => Ok(*single),
            [] if embeds_statements && !self.is_expression_node(child) => {
                Ok(self.arena.alloc(NodeData::Empty))
            }
            [] => Ok(NodeIndex::NONE),
            many => {
                let statements = many.to_vec();
                Ok(self.arena.create_block(statements, true))
            }
        }
    }

    fn is_expression_node(&self, node: NodeIndex) -> bool {
        self.arena.data(node).is_some_and(NodeData::is_expression)
    }
}

/// Nodes with a single embedded statement slot.
fn embeds_statements(data: &NodeData) -> bool {
    matches!(
        data,
        NodeData::If { .. }
            | NodeData::Do { .. }
            | NodeData::While { .. }
            | NodeData::For { .. }
            | NodeData::ForIn { .. }
            | NodeData::ForOf { .. }
            | NodeData::Labeled { .. }
    )
}
