//! `enum E { A, B = "b" }` -> a closure that fills `E`.
//!
//! ```text
//! var E;
//! (function (E) {
//!     E[E["A"] = 0] = "A";
//!     E["B"] = "b";
//! })(E || (E = {}));
//! ```

use smallvec::{SmallVec, smallvec};
use tracing::{debug, trace};
use tsl_ast::{ModifierKind, NodeArena, NodeData, NodeIndex, NodeList, PrefixOperator};

use crate::context::{ContainerBinding, ContainerKind};
use crate::error::Result;
use crate::names::enum_declares_member;
use crate::resolver::ConstantValue;
use crate::substitution::SubstitutionFlags;
use crate::visitor::{TypeScriptLowering, VisitResult};

impl TypeScriptLowering<'_> {
    pub(crate) fn visit_enum_declaration(&mut self, node: NodeIndex) -> Result<VisitResult> {
        let NodeData::EnumDeclaration {
            modifiers, members, ..
        } = self.node_data(node)?
        else {
            return Err(self.unexpected(node, "enum declaration"));
        };
        if modifiers.has(ModifierKind::Const) && !self.options.should_preserve_const_enums() {
            trace!(index = node.0, "const enum elided");
            return Ok(smallvec![self.arena.create_not_emitted_statement(node)]);
        }

        let mut statements: VisitResult = SmallVec::new();
        let var_added = self.add_var_for_container_declaration(&mut statements, node)?;
        let text = self.declaration_name_text(node)?;
        let parameter_name = if enum_declares_member(self.arena, &members, &text) {
            self.ctx.names.unique_name(&text)
        } else {
            text
        };
        let argument = self.container_argument(node)?;
        debug!(name = %parameter_name, members = members.len(), "lower enum");

        self.ctx.push_container(ContainerBinding {
            kind: ContainerKind::Enum,
            declaration: node,
            local_name: parameter_name.clone(),
        });
        self.ctx.start_lexical_environment();
        let body = self.transform_enum_members(&members, &parameter_name);
        let hoisted = self.ctx.end_lexical_environment();
        self.ctx.pop_container();
        let body = self.merge_hoisted(body?, hoisted);
        let body = self.arena.create_block(body, true);

        let closure =
            self.container_closure_statement(node, &parameter_name, body, argument, var_added);
        statements.push(closure);
        statements.push(self.arena.create_end_of_declaration_marker(node));
        Ok(statements)
    }

    fn transform_enum_members(&mut self, members: &NodeList, container: &str) -> Result<Vec<NodeIndex>> {
        let mut statements = Vec::with_capacity(members.len());
        for member in members.iter() {
            statements.push(self.transform_enum_member(member, container)?);
        }
        Ok(statements)
    }

    /// `E[E["A"] = 0] = "A";`, or `E["A"] = "a";` for string values,
    /// which get no reverse mapping.
    fn transform_enum_member(&mut self, member: NodeIndex, container: &str) -> Result<NodeIndex> {
        let NodeData::EnumMember { name, initializer } = self.node_data(member)? else {
            return Err(self.unexpected(member, "enum member"));
        };
        let value = self.enum_member_value(member, initializer)?;
        let is_string = matches!(self.arena.data(value), Some(NodeData::StringLiteral { .. }));

        let key = self.enum_member_key(name)?;
        let target_object = self.arena.create_generated_identifier(container);
        let target = self.arena.create_element_access(target_object, key);
        let inner = self.arena.create_assignment(target, value);
        let expression = if is_string {
            inner
        } else {
            let reverse_object = self.arena.create_generated_identifier(container);
            let reverse = self.arena.create_element_access(reverse_object, inner);
            let reverse_key = self.enum_member_key(name)?;
            self.arena.create_assignment(reverse, reverse_key)
        };
        let statement = self.arena.create_expression_statement(expression);
        self.arena.set_original(statement, member);
        Ok(statement)
    }

    /// Member name as a property key expression (`"A"` for `A`).
    fn enum_member_key(&mut self, name: NodeIndex) -> Result<NodeIndex> {
        match self.node_data(name)? {
            NodeData::Identifier { text, .. } => Ok(self.arena.create_string_literal(&text)),
            NodeData::ComputedPropertyName { expression } => Ok(self.clone_for_reuse(expression)),
            NodeData::StringLiteral { .. } | NodeData::NumericLiteral { .. } => {
                Ok(self.clone_for_reuse(name))
            }
            _ => Err(self.unexpected(name, "enum member name")),
        }
    }

    fn enum_member_value(&mut self, member: NodeIndex, initializer: NodeIndex) -> Result<NodeIndex> {
        match self.constant_value(member) {
            Some(value) => Ok(constant_literal(self.arena, &value)),
            None => {
                self.ctx
                    .enable_substitution(SubstitutionFlags::NON_QUALIFIED_ENUM_MEMBERS);
                if initializer.is_some() {
                    let visited = self.visit_node(initializer)?;
                    if visited.is_some() {
                        return Ok(visited);
                    }
                }
                Ok(self.arena.create_void_zero())
            }
        }
    }
}

/// Literal for a checker-computed constant; negative numbers become `-n`.
pub(crate) fn constant_literal(arena: &mut NodeArena, value: &ConstantValue) -> NodeIndex {
    match value {
        ConstantValue::String(text) => arena.create_string_literal(text),
        ConstantValue::Number(number) if *number < 0.0 => {
            let literal = arena.create_numeric_literal(&format_number(-number));
            arena.create_prefix(PrefixOperator::Minus, literal)
        }
        ConstantValue::Number(number) => arena.create_numeric_literal(&format_number(*number)),
    }
}

/// Source text of a non-negative number as JavaScript's `Number#toString`
/// prints it: shortest round-trip digits, plain notation for decimal
/// exponents in `-7..21`, `1e+21` / `1e-7` style outside that range.
pub(crate) fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return "Infinity".to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    // `{:e}` yields the shortest digits, e.g. `1.2345e3` or `5e-7`.
    let scientific = format!("{value:e}");
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return scientific;
    };
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    let k = digits.len() as i32;
    // Position of the decimal point relative to the first digit.
    let n = exponent + 1;

    if k <= n && n <= 21 {
        format!("{digits}{}", "0".repeat((n - k) as usize))
    } else if 0 < n && n <= 21 {
        let (whole, fraction) = digits.split_at(n as usize);
        format!("{whole}.{fraction}")
    } else if -6 < n && n <= 0 {
        format!("0.{}{digits}", "0".repeat((-n) as usize))
    } else {
        let sign = if n - 1 < 0 { '-' } else { '+' };
        let (first, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{first}e{sign}{}", (n - 1).abs())
        } else {
            format!("{first}.{rest}e{sign}{}", (n - 1).abs())
        }
    }
}

#[cfg(test)]
#[path = "../tests/enums.rs"]
mod tests;
