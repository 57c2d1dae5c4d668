//! Legacy decorator calls.
//!
//! Decorators are applied after the class head in three groups: instance
//! members, static members, then the class itself.
//!
//! ```text
//! __decorate([dec, __param(0, inject), __metadata("design:type", Function)],
//!     C.prototype, "method", null);
//! ```

use tracing::trace;
use tsl_ast::{ClassData, EmitFlags, ModifierKind, NodeArena, NodeData, NodeIndex, NodeList};
use tsl_common::options::ScriptTarget;

use crate::class::is_simple_inlineable_expression;
use crate::error::Result;
use crate::visitor::TypeScriptLowering;

/// Decorators that apply to one declaration: its own, and those of its
/// parameters by parameter position (a leading `this` parameter does not
/// count).
#[derive(Debug, Default)]
pub(crate) struct AllDecorators {
    pub decorators: Vec<NodeIndex>,
    pub parameters: Vec<Vec<NodeIndex>>,
}

impl AllDecorators {
    fn is_empty(&self) -> bool {
        self.decorators.is_empty() && self.parameters.iter().all(Vec::is_empty)
    }
}

/// Getter and setter sharing one property name and static-ness.
#[derive(Debug, Clone, Copy)]
pub(crate) struct AccessorPair {
    pub first: NodeIndex,
    pub second: NodeIndex,
    pub get: NodeIndex,
    pub set: NodeIndex,
}

impl TypeScriptLowering<'_> {
    /// Push one `__decorate(...)` statement per decorated member of the
    /// requested static-ness.
    pub(crate) fn add_class_element_decoration_statements(
        &mut self,
        statements: &mut Vec<NodeIndex>,
        node: NodeIndex,
        class: &ClassData,
        is_static: bool,
    ) -> Result<()> {
        for member in class.members.iter() {
            if member_is_static(self.arena, member) != is_static
                || !self.member_or_parameter_is_decorated(member)
            {
                continue;
            }
            if let Some(expression) = self.class_element_decoration_expression(node, class, member)?
            {
                statements.push(self.arena.create_expression_statement(expression));
            }
        }
        Ok(())
    }

    fn class_element_decoration_expression(
        &mut self,
        node: NodeIndex,
        class: &ClassData,
        member: NodeIndex,
    ) -> Result<Option<NodeIndex>> {
        let Some(all) = self.all_decorators_of_class_element(class, member) else {
            return Ok(None);
        };
        let expressions = self.transform_all_decorators(member, class, &all)?;
        trace!(member = member.0, count = expressions.len(), "decorate member");

        let is_static = member_is_static(self.arena, member);
        let local = self.local_name(node)?;
        let target = if is_static {
            local
        } else {
            self.arena.create_property_access(local, "prototype")
        };
        let member_name = self.member_name_expression(member)?;
        let descriptor = if self.options.target.supports_property_descriptors() {
            let is_field = matches!(
                self.arena.data(member),
                Some(NodeData::PropertyDeclaration { modifiers, .. })
                    if !modifiers.has(ModifierKind::Accessor)
            );
            Some(if is_field {
                self.arena.create_void_zero()
            } else {
                self.arena.create_null()
            })
        } else {
            None
        };
        let call = self.create_decorate_call(expressions, target, Some(member_name), descriptor);
        Ok(Some(self.arena.add_emit_flags(call, EmitFlags::NO_COMMENTS)))
    }

    /// `C = [C_1 =] __decorate([...], C);`
    pub(crate) fn add_constructor_decoration_statement(
        &mut self,
        statements: &mut Vec<NodeIndex>,
        node: NodeIndex,
        class: &ClassData,
    ) -> Result<()> {
        let all = AllDecorators {
            decorators: decorator_nodes(&class.decorators),
            parameters: first_constructor_with_body(self.arena, &class.members)
                .map(|constructor| decorators_of_parameters(self.arena, constructor))
                .unwrap_or_default(),
        };
        if all.is_empty() {
            return Ok(());
        }
        let expressions = self.transform_all_decorators(node, class, &all)?;
        let alias_key = match self.parse_node(node) {
            parse_node if parse_node.is_some() => parse_node,
            _ => node,
        };
        let alias = self.ctx.class_aliases.get(&alias_key).cloned();
        let (target, assigned) = if self.options.target <= ScriptTarget::ES2015 {
            (self.internal_name(node)?, self.internal_name(node)?)
        } else {
            (self.local_name(node)?, self.local_name(node)?)
        };

        let decorate = self.create_decorate_call(expressions, target, None, None);
        let value = match alias {
            Some(alias) => {
                let alias = self.arena.create_generated_identifier(&alias);
                self.arena.create_assignment(alias, decorate)
            }
            None => decorate,
        };
        let expression = self.arena.create_assignment(assigned, value);
        self.arena
            .add_emit_flags(expression, EmitFlags::NO_COMMENTS);
        let statement = self.arena.create_expression_statement(expression);
        self.arena.set_original(statement, node);
        self.arena.clear_comments(statement);
        statements.push(statement);
        Ok(())
    }

    fn all_decorators_of_class_element(
        &self,
        class: &ClassData,
        member: NodeIndex,
    ) -> Option<AllDecorators> {
        let all = match self.arena.data(member)? {
            NodeData::GetAccessor { .. } | NodeData::SetAccessor { .. } => {
                return self.all_decorators_of_accessors(class, member);
            }
            NodeData::MethodDeclaration {
                decorators, body, ..
            } => {
                if body.is_none() {
                    return None;
                }
                AllDecorators {
                    decorators: decorator_nodes(decorators),
                    parameters: decorators_of_parameters(self.arena, member),
                }
            }
            NodeData::PropertyDeclaration { decorators, .. } => AllDecorators {
                decorators: decorator_nodes(decorators),
                parameters: Vec::new(),
            },
            _ => return None,
        };
        (!all.is_empty()).then_some(all)
    }

    /// Decorators of an accessor pair are applied once, through whichever
    /// accessor comes first among those carrying decorators.
    fn all_decorators_of_accessors(
        &self,
        class: &ClassData,
        accessor: NodeIndex,
    ) -> Option<AllDecorators> {
        if self.arena.data(accessor)?.body().is_none() {
            return None;
        }
        let pair = all_accessor_declarations(self.arena, &class.members, accessor);
        let has_decorators = |node: NodeIndex| {
            self.arena
                .data(node)
                .and_then(NodeData::decorators)
                .is_some_and(|decorators| !decorators.is_empty())
        };
        let first_with_decorators = if has_decorators(pair.first) {
            pair.first
        } else if pair.second.is_some() && has_decorators(pair.second) {
            pair.second
        } else {
            return None;
        };
        if first_with_decorators != accessor {
            return None;
        }
        let decorators = self
            .arena
            .data(first_with_decorators)
            .and_then(NodeData::decorators)
            .map(decorator_nodes)
            .unwrap_or_default();
        let parameters = if pair.set.is_some() {
            decorators_of_parameters(self.arena, pair.set)
        } else {
            Vec::new()
        };
        let all = AllDecorators {
            decorators,
            parameters,
        };
        (!all.is_empty()).then_some(all)
    }

    /// Visited decorator expressions, `__param` wrappers, then metadata.
    fn transform_all_decorators(
        &mut self,
        declaration: NodeIndex,
        class: &ClassData,
        all: &AllDecorators,
    ) -> Result<Vec<NodeIndex>> {
        let mut expressions = Vec::new();
        for &decorator in &all.decorators {
            let expression = match self.node_data(decorator)? {
                NodeData::Decorator { expression } => expression,
                _ => return Err(self.unexpected(decorator, "decorator list")),
            };
            expressions.push(self.visit_node(expression)?);
        }
        for (position, decorators) in all.parameters.iter().enumerate() {
            for &decorator in decorators {
                let NodeData::Decorator { expression } = self.node_data(decorator)? else {
                    return Err(self.unexpected(decorator, "parameter decorator list"));
                };
                let expression = self.visit_node(expression)?;
                expressions.push(self.create_param_call(position, expression));
            }
        }
        self.add_type_metadata(declaration, class, &mut expressions)?;
        Ok(expressions)
    }

    /// `__param(index, decorator)`
    fn create_param_call(&mut self, position: usize, decorator: NodeIndex) -> NodeIndex {
        self.ctx.helpers.param = true;
        let helper = self.arena.create_helper_name("__param");
        let index = self.arena.create_numeric_literal(&position.to_string());
        let call = self.arena.create_call(helper, vec![index, decorator]);
        self.arena.add_emit_flags(call, EmitFlags::NO_COMMENTS)
    }

    /// `__decorate([decorators], target[, key[, descriptor]])`
    fn create_decorate_call(
        &mut self,
        decorators: Vec<NodeIndex>,
        target: NodeIndex,
        member_name: Option<NodeIndex>,
        descriptor: Option<NodeIndex>,
    ) -> NodeIndex {
        self.ctx.helpers.decorate = true;
        let helper = self.arena.create_helper_name("__decorate");
        let decorators = self.arena.create_array_literal(decorators, true);
        let mut arguments = vec![decorators, target];
        if let Some(member_name) = member_name {
            arguments.push(member_name);
            if let Some(descriptor) = descriptor {
                arguments.push(descriptor);
            }
        }
        self.arena.create_call(helper, arguments)
    }

    /// Property key passed to `__decorate`. Computed keys reuse the
    /// temporary the member's name was captured into.
    fn member_name_expression(&mut self, member: NodeIndex) -> Result<NodeIndex> {
        let name = self.node_data(member)?.name();
        match self.node_data(name)? {
            NodeData::PrivateIdentifier { .. } => Ok(self.arena.create_string_literal("")),
            NodeData::Identifier { text, .. } => Ok(self.arena.create_string_literal(&text)),
            NodeData::ComputedPropertyName { expression } => {
                if let Some(temp) = self.ctx.generated_names.get(&name).cloned() {
                    return Ok(self.arena.create_generated_identifier(&temp));
                }
                if is_simple_inlineable_expression(self.arena.data(expression)) {
                    return Ok(self.clone_for_reuse(expression));
                }
                self.visit_node(expression)
            }
            _ => Ok(self.clone_for_reuse(name)),
        }
    }
}

fn decorator_nodes(list: &NodeList) -> Vec<NodeIndex> {
    list.iter().collect()
}

/// Parameter decorators by position, empty when no parameter has any.
pub(crate) fn decorators_of_parameters(arena: &NodeArena, function: NodeIndex) -> Vec<Vec<NodeIndex>> {
    let Some(parameters) = arena.data(function).and_then(NodeData::parameters) else {
        return Vec::new();
    };
    let skip = usize::from(
        parameters
            .first()
            .is_some_and(|first| is_this_parameter(arena, first)),
    );
    let decorators: Vec<Vec<NodeIndex>> = parameters
        .iter()
        .skip(skip)
        .map(|parameter| {
            arena
                .data(parameter)
                .and_then(NodeData::decorators)
                .map(decorator_nodes)
                .unwrap_or_default()
        })
        .collect();
    if decorators.iter().all(Vec::is_empty) {
        Vec::new()
    } else {
        decorators
    }
}

pub(crate) fn is_this_parameter(arena: &NodeArena, parameter: NodeIndex) -> bool {
    matches!(
        arena.data(parameter),
        Some(NodeData::Parameter { name, .. }) if arena.identifier_text(*name) == Some("this")
    )
}

pub(crate) fn first_constructor_with_body(arena: &NodeArena, members: &NodeList) -> Option<NodeIndex> {
    members.iter().find(|&member| {
        matches!(
            arena.data(member),
            Some(NodeData::Constructor { body, .. }) if body.is_some()
        )
    })
}

pub(crate) fn member_is_static(arena: &NodeArena, member: NodeIndex) -> bool {
    arena
        .data(member)
        .and_then(NodeData::modifiers)
        .is_some_and(|modifiers| modifiers.has(ModifierKind::Static))
}

/// Comparable key of a property name; `None` for computed names that are
/// not literals.
fn property_name_key(arena: &NodeArena, name: NodeIndex) -> Option<String> {
    match arena.data(name)? {
        NodeData::Identifier { text, .. }
        | NodeData::StringLiteral { text }
        | NodeData::NumericLiteral { text } => Some(text.clone()),
        NodeData::PrivateIdentifier { text } => Some(format!("#{text}")),
        NodeData::ComputedPropertyName { expression } => match arena.data(*expression)? {
            NodeData::StringLiteral { text } | NodeData::NumericLiteral { text } => {
                Some(text.clone())
            }
            _ => None,
        },
        _ => None,
    }
}

/// The accessor pair `accessor` belongs to, in member order.
pub(crate) fn all_accessor_declarations(
    arena: &NodeArena,
    members: &NodeList,
    accessor: NodeIndex,
) -> AccessorPair {
    let mut pair = AccessorPair {
        first: NodeIndex::NONE,
        second: NodeIndex::NONE,
        get: NodeIndex::NONE,
        set: NodeIndex::NONE,
    };
    let key = arena
        .data(accessor)
        .and_then(|data| property_name_key(arena, data.name()));
    let is_static = member_is_static(arena, accessor);

    let candidates: Vec<NodeIndex> = match key {
        Some(key) => members
            .iter()
            .filter(|&member| {
                matches!(
                    arena.data(member),
                    Some(NodeData::GetAccessor { .. } | NodeData::SetAccessor { .. })
                ) && member_is_static(arena, member) == is_static
                    && arena
                        .data(member)
                        .and_then(|data| property_name_key(arena, data.name()))
                        .as_deref()
                        == Some(key.as_str())
            })
            .collect(),
        None => vec![accessor],
    };
    for member in candidates {
        if pair.first.is_none() {
            pair.first = member;
        } else if pair.second.is_none() {
            pair.second = member;
        }
        match arena.data(member) {
            Some(NodeData::GetAccessor { .. }) if pair.get.is_none() => pair.get = member,
            Some(NodeData::SetAccessor { .. }) if pair.set.is_none() => pair.set = member,
            _ => {}
        }
    }
    pair
}

#[cfg(test)]
#[path = "../tests/decorators.rs"]
mod tests;
