//! Flattening of exported binding patterns inside a namespace.
//!
//! `export const { a, b: [c] } = obj;` has no `var` left once `a` and `c`
//! become `N.a` and `N.c`, so the pattern is rewritten into a sequence of
//! plain assignments:
//!
//! ```text
//! _a = obj, N.a = _a.a, N.c = _a.b[0];
//! ```

use tracing::trace;
use tsl_ast::{BinaryOperator, NodeData, NodeIndex, NodeList, PrefixOperator};
use tsl_common::limits::MAX_BINDING_PATTERN_DEPTH;

use crate::error::{LoweringError, Result};
use crate::visitor::TypeScriptLowering;

/// Key a computed property was read with, remembered for a later `...rest`.
enum ExcludedKey {
    Literal(String),
    Computed(String),
}

impl TypeScriptLowering<'_> {
    /// Comma chain of assignments equivalent to binding `pattern` to
    /// `initializer` with every bound name written through the namespace.
    pub(crate) fn flatten_exported_binding(
        &mut self,
        pattern: NodeIndex,
        initializer: NodeIndex,
    ) -> Result<NodeIndex> {
        let value = self.visit_node(initializer)?;
        let mut expressions = Vec::new();
        self.flatten_binding(pattern, value, &mut expressions, 0)?;
        trace!(assignments = expressions.len(), "flattened exported binding");
        let chain = self.arena.create_comma_chain(&expressions);
        self.arena.set_original(chain, pattern);
        Ok(chain)
    }

    fn flatten_binding(
        &mut self,
        target: NodeIndex,
        value: NodeIndex,
        out: &mut Vec<NodeIndex>,
        depth: u32,
    ) -> Result<()> {
        if depth >= MAX_BINDING_PATTERN_DEPTH {
            return Err(LoweringError::DepthExceeded {
                limit: MAX_BINDING_PATTERN_DEPTH,
            }
            .report());
        }
        match self.node_data(target)? {
            NodeData::Identifier { .. } => {
                let name = self.namespace_member_name(target)?;
                let assignment = self.arena.create_assignment(name, value);
                out.push(assignment);
                Ok(())
            }
            NodeData::ObjectBindingPattern { elements } => {
                self.flatten_object_pattern(&elements, value, out, depth)
            }
            NodeData::ArrayBindingPattern { elements } => {
                self.flatten_array_pattern(&elements, value, out, depth)
            }
            _ => Err(self.unexpected(target, "binding pattern")),
        }
    }

    fn flatten_object_pattern(
        &mut self,
        elements: &NodeList,
        value: NodeIndex,
        out: &mut Vec<NodeIndex>,
        depth: u32,
    ) -> Result<()> {
        let value = if elements.len() == 1 {
            value
        } else {
            self.ensure_identifier(value, !elements.is_empty(), out)
        };
        let mut excluded = Vec::new();
        let last = elements.len().saturating_sub(1);
        for (position, element) in elements.iter().enumerate() {
            let NodeData::BindingElement {
                dot_dot_dot,
                property_name,
                name,
                initializer,
            } = self.node_data(element)?
            else {
                return Err(self.unexpected(element, "object binding pattern"));
            };
            if dot_dot_dot {
                if position != last {
                    return Err(self.unexpected(element, "non-final rest element"));
                }
                let rest = self.create_rest_call(value, &excluded);
                self.flatten_binding_element(name, initializer, rest, out, depth)?;
                continue;
            }
            let key = if property_name.is_some() { property_name } else { name };
            let source = self.clone_for_reuse(value);
            let access = match self.node_data(key)? {
                NodeData::Identifier { text, .. } => {
                    excluded.push(ExcludedKey::Literal(text.clone()));
                    self.arena.create_property_access(source, &text)
                }
                NodeData::StringLiteral { text } | NodeData::NumericLiteral { text } => {
                    excluded.push(ExcludedKey::Literal(text.clone()));
                    let argument = self.clone_for_reuse(key);
                    self.arena.create_element_access(source, argument)
                }
                NodeData::ComputedPropertyName { expression } => {
                    let expression = self.visit_node(expression)?;
                    let temp = self.ensure_identifier(expression, false, out);
                    if let Some(text) = self.arena.identifier_text(temp) {
                        excluded.push(ExcludedKey::Computed(text.to_string()));
                    }
                    self.arena.create_element_access(source, temp)
                }
                _ => return Err(self.unexpected(key, "binding element name")),
            };
            self.flatten_binding_element(name, initializer, access, out, depth)?;
        }
        Ok(())
    }

    fn flatten_array_pattern(
        &mut self,
        elements: &NodeList,
        value: NodeIndex,
        out: &mut Vec<NodeIndex>,
        depth: u32,
    ) -> Result<()> {
        let all_omitted = elements
            .iter()
            .all(|element| matches!(self.arena.data(element), Some(NodeData::OmittedExpression)));
        let value = if elements.len() != 1 || all_omitted {
            self.ensure_identifier(value, !elements.is_empty(), out)
        } else {
            value
        };
        let last = elements.len().saturating_sub(1);
        for (position, element) in elements.iter().enumerate() {
            let data = self.node_data(element)?;
            let NodeData::BindingElement {
                dot_dot_dot,
                name,
                initializer,
                ..
            } = data
            else {
                if matches!(data, NodeData::OmittedExpression) {
                    continue;
                }
                return Err(self.unexpected(element, "array binding pattern"));
            };
            let source = self.clone_for_reuse(value);
            let access = if dot_dot_dot {
                if position != last {
                    return Err(self.unexpected(element, "non-final rest element"));
                }
                let slice = self.arena.create_property_access(source, "slice");
                let start = self.arena.create_numeric_literal(&position.to_string());
                self.arena.create_call(slice, vec![start])
            } else {
                let index = self.arena.create_numeric_literal(&position.to_string());
                self.arena.create_element_access(source, index)
            };
            self.flatten_binding_element(name, initializer, access, out, depth)?;
        }
        Ok(())
    }

    /// Bind one element, applying its default value first.
    fn flatten_binding_element(
        &mut self,
        name: NodeIndex,
        initializer: NodeIndex,
        value: NodeIndex,
        out: &mut Vec<NodeIndex>,
        depth: u32,
    ) -> Result<()> {
        let value = if initializer.is_some() {
            // `v === void 0 ? default : v`
            let value = self.ensure_identifier(value, true, out);
            let checked = self.clone_for_reuse(value);
            let void_zero = self.arena.create_void_zero();
            let condition = self.arena.create_strict_equality(checked, void_zero);
            let default = self.visit_node(initializer)?;
            let fallback = self.clone_for_reuse(value);
            self.arena.create_conditional(condition, default, fallback)
        } else {
            value
        };
        self.flatten_binding(name, value, out, depth + 1)
    }

    /// `value` itself when it is already a plain identifier and may be read
    /// twice; otherwise a hoisted temporary assigned from it.
    fn ensure_identifier(
        &mut self,
        value: NodeIndex,
        reuse_identifier: bool,
        out: &mut Vec<NodeIndex>,
    ) -> NodeIndex {
        if reuse_identifier && self.arena.is_identifier(value) {
            return value;
        }
        let temp = self.ctx.create_temp_variable();
        let target = self.arena.create_generated_identifier(&temp);
        out.push(self.arena.create_assignment(target, value));
        self.arena.create_generated_identifier(&temp)
    }

    /// `__rest(value, ["a", typeof _b === "symbol" ? _b : _b + ""])`
    fn create_rest_call(&mut self, value: NodeIndex, excluded: &[ExcludedKey]) -> NodeIndex {
        self.ctx.helpers.rest = true;
        let mut keys = Vec::with_capacity(excluded.len());
        for key in excluded {
            let key = match key {
                ExcludedKey::Literal(text) => self.arena.create_string_literal(text),
                ExcludedKey::Computed(temp) => {
                    let checked = self.arena.create_generated_identifier(temp);
                    let type_of = self.arena.create_prefix(PrefixOperator::TypeOf, checked);
                    let symbol = self.arena.create_string_literal("symbol");
                    let condition = self.arena.create_strict_equality(type_of, symbol);
                    let as_is = self.arena.create_generated_identifier(temp);
                    let coerced = self.arena.create_generated_identifier(temp);
                    let empty = self.arena.create_string_literal("");
                    let as_string = self.arena.create_binary(coerced, BinaryOperator::Add, empty);
                    self.arena.create_conditional(condition, as_is, as_string)
                }
            };
            keys.push(key);
        }
        let helper = self.arena.create_helper_name("__rest");
        let source = self.clone_for_reuse(value);
        let keys = self.arena.create_array_literal(keys, false);
        self.arena.create_call(helper, vec![source, keys])
    }
}

#[cfg(test)]
#[path = "../tests/destructuring.rs"]
mod tests;
