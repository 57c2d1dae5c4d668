//! `namespace N { ... }` -> an immediately invoked closure over `N`.
//!
//! ```text
//! var N;
//! (function (N) {
//!     N.x = 1;
//! })(N || (N = {}));
//! ```
//!
//! Exported members are written through the closure parameter; references
//! to them are qualified later by the substitution pass. Enums share the
//! leading `var` and the closure call shape with namespaces.

use smallvec::{SmallVec, smallvec};
use tracing::{debug, trace};
use tsl_ast::{EmitFlags, ModifierKind, Modifiers, NodeData, NodeIndex, VarKind};
use tsl_common::limits::MAX_QUALIFIED_NAME_DEPTH;
use tsl_common::options::ModuleKind;

use crate::context::{ContainerBinding, ContainerKind};
use crate::error::{LoweringError, Result};
use crate::instance_state::ModuleInstanceState;
use crate::names::declares_name;
use crate::scope::ScopeKind;
use crate::substitution::SubstitutionFlags;
use crate::visitor::{TypeScriptLowering, VisitResult, VisitorKind};

impl TypeScriptLowering<'_> {
    pub(crate) fn visit_module_declaration(&mut self, node: NodeIndex) -> Result<VisitResult> {
        self.visit_module_declaration_at(node, 0)
    }

    /// `dotted_depth` counts the enclosing segments of `namespace A.B.C`.
    fn visit_module_declaration_at(
        &mut self,
        node: NodeIndex,
        dotted_depth: u32,
    ) -> Result<VisitResult> {
        let NodeData::ModuleDeclaration { name, body, .. } = self.node_data(node)? else {
            return Err(self.unexpected(node, "namespace declaration"));
        };
        if !self.should_emit_module_declaration(node) {
            debug!(index = node.0, "namespace without runtime value elided");
            return Ok(smallvec![self.arena.create_not_emitted_statement(node)]);
        }
        let Some(text) = self.arena.identifier_text(name).map(str::to_string) else {
            return Err(LoweringError::NonIdentifierNamespaceName {
                kind: self.arena.kind_name(name),
            }
            .report());
        };
        if dotted_depth >= MAX_QUALIFIED_NAME_DEPTH {
            return Err(LoweringError::DepthExceeded {
                limit: MAX_QUALIFIED_NAME_DEPTH,
            }
            .report());
        }
        self.ctx.enable_substitution(SubstitutionFlags::NAMESPACE_EXPORTS);

        let mut statements: VisitResult = SmallVec::new();
        let var_added = self.add_var_for_container_declaration(&mut statements, node)?;
        let parameter_name = if declares_name(self.arena, body, &text) {
            self.ctx.names.unique_name(&text)
        } else {
            text
        };
        let argument = self.container_argument(node)?;
        debug!(name = %parameter_name, var_added, "lower namespace");

        self.ctx.push_container(ContainerBinding {
            kind: ContainerKind::Namespace,
            declaration: node,
            local_name: parameter_name.clone(),
        });
        let body = self.transform_module_body(node, body, dotted_depth);
        self.ctx.pop_container();
        let body = body?;

        let closure =
            self.container_closure_statement(node, &parameter_name, body, argument, var_added);
        statements.push(closure);
        statements.push(self.arena.create_end_of_declaration_marker(node));
        Ok(statements)
    }

    fn transform_module_body(
        &mut self,
        node: NodeIndex,
        body: NodeIndex,
        dotted_depth: u32,
    ) -> Result<NodeIndex> {
        self.ctx.start_lexical_environment();
        let visited = match self.arena.data(body).cloned() {
            Some(NodeData::ModuleBlock { statements }) => {
                self.ctx.scopes.enter(ScopeKind::ModuleBlock, body);
                let visited = self.visit_list(&statements, VisitorKind::NamespaceElement);
                self.ctx.scopes.exit();
                visited.map(|list| (list.nodes, false))
            }
            Some(NodeData::ModuleDeclaration { .. }) => {
                // `namespace A.B {}`: B is declared inside A's closure.
                self.ctx.scopes.enter(ScopeKind::ModuleBlock, node);
                let visited = self.visit_module_declaration_at(body, dotted_depth + 1);
                self.ctx.scopes.exit();
                visited.map(|statements| (statements.into_vec(), true))
            }
            _ => Ok((Vec::new(), false)),
        };
        let hoisted = self.ctx.end_lexical_environment();
        let (statements, dotted) = visited?;
        let statements = self.merge_hoisted(statements, hoisted);
        let block = self.arena.create_block(statements, true);
        if dotted {
            // Comments belong to the innermost closure only.
            self.arena.add_emit_flags(block, EmitFlags::NO_COMMENTS);
        } else if body.is_some() {
            self.arena.set_original(block, body);
        }
        Ok(block)
    }

    fn should_emit_module_declaration(&self, node: NodeIndex) -> bool {
        let parse_node = self.parse_node(node);
        if parse_node.is_none() {
            return true;
        }
        match self.module_instance_state(parse_node) {
            ModuleInstanceState::Instantiated => true,
            ModuleInstanceState::ConstEnumOnly => self.options.should_preserve_const_enums(),
            ModuleInstanceState::NonInstantiated => false,
        }
    }

    // =========================================================================
    // Shared with enums
    // =========================================================================

    /// Push `var N;` for the first declaration of `N` in the current scope,
    /// or a merge marker for a later one. Returns whether the `var` was
    /// added.
    pub(crate) fn add_var_for_container_declaration(
        &mut self,
        statements: &mut VisitResult,
        node: NodeIndex,
    ) -> Result<bool> {
        let modifiers = self
            .node_data(node)?
            .modifiers()
            .cloned()
            .unwrap_or_else(Modifiers::none);
        let mut modifiers = self.visit_modifiers(&modifiers);
        if self.is_external_module_export(node) && self.options.module.uses_exports_object() {
            modifiers = modifiers
                .filtered(|kind| !matches!(kind, ModifierKind::Export | ModifierKind::Default));
        }
        let kind = if self.ctx.scopes.is_source_file_scope() {
            VarKind::Var
        } else {
            VarKind::Let
        };
        let name = self.local_name(node)?;
        let declaration = self.arena.create_variable_declaration(name, NodeIndex::NONE);
        let statement = self
            .arena
            .create_variable_statement(modifiers, kind, vec![declaration]);
        self.arena.set_original(statement, node);

        let text = self.declaration_name_text(node)?;
        self.ctx.scopes.record_declaration(&text, node);
        if self.ctx.scopes.is_first_declaration(&text, node) {
            self.arena.add_emit_flags(
                statement,
                EmitFlags::NO_TRAILING_COMMENTS | EmitFlags::HAS_END_OF_DECLARATION_MARKER,
            );
            statements.push(statement);
            Ok(true)
        } else {
            trace!(name = %text, "merged into an earlier declaration");
            statements.push(self.arena.create_merge_declaration_marker(statement));
            Ok(false)
        }
    }

    /// `N || (N = {})`, qualified as `P.N` / `exports.N` when exported and
    /// prefixed with `N = ` when the local binding must be updated too.
    pub(crate) fn container_argument(&mut self, node: NodeIndex) -> Result<NodeIndex> {
        let left = self.container_export_name(node)?;
        let target = self.container_export_name(node)?;
        let empty = self.arena.create_object_literal(Vec::new(), false);
        let initialize = self.arena.create_assignment(target, empty);
        let argument = self.arena.create_logical_or(left, initialize);
        let qualified_export = self.is_export_of_namespace(node)
            || (self.is_external_module_export(node)
                && !self.options.module.is_es_module()
                && self.options.module != ModuleKind::System);
        if qualified_export {
            let local = self.local_name(node)?;
            return Ok(self.arena.create_assignment(local, argument));
        }
        Ok(argument)
    }

    fn container_export_name(&mut self, node: NodeIndex) -> Result<NodeIndex> {
        if self.is_export_of_namespace(node) {
            let name = self.node_data(node)?.name();
            return self.namespace_member_name(name);
        }
        if self.is_external_module_export(node) && self.options.module.uses_exports_object() {
            let text = self.declaration_name_text(node)?;
            let exports = self.arena.create_generated_identifier("exports");
            return Ok(self.arena.create_property_access(exports, &text));
        }
        self.local_name(node)
    }

    /// `(function (N) { body })(argument);`
    pub(crate) fn container_closure_statement(
        &mut self,
        node: NodeIndex,
        parameter_name: &str,
        body: NodeIndex,
        argument: NodeIndex,
        var_added: bool,
    ) -> NodeIndex {
        let parameter_name = self.arena.create_generated_identifier(parameter_name);
        let parameter = self.arena.create_parameter(parameter_name);
        let function = self
            .arena
            .create_function_expression(NodeIndex::NONE, vec![parameter], body);
        let call = self.arena.create_call(function, vec![argument]);
        let statement = self.arena.create_expression_statement(call);
        self.arena.set_original(statement, node);
        let mut flags = EmitFlags::ADVISE_ON_EMIT_NODE;
        if var_added {
            // The leading `var` already carries the declaration's comments.
            self.arena.clear_comments(statement);
            flags |= EmitFlags::NO_LEADING_COMMENTS;
        }
        self.arena.add_emit_flags(statement, flags)
    }

    // =========================================================================
    // Exported variables
    // =========================================================================

    /// `export let a = 1, b;` inside a namespace -> `N.a = 1;`.
    /// Declarations without an initializer produce nothing.
    pub(crate) fn visit_exported_variable_statement(
        &mut self,
        node: NodeIndex,
    ) -> Result<VisitResult> {
        let NodeData::VariableStatement {
            declaration_list, ..
        } = self.node_data(node)?
        else {
            return Err(self.unexpected(node, "variable statement"));
        };
        let NodeData::VariableDeclarationList { declarations, .. } =
            self.node_data(declaration_list)?
        else {
            return Err(self.unexpected(declaration_list, "variable statement"));
        };

        let mut expressions = Vec::new();
        for declaration in declarations.iter() {
            let NodeData::VariableDeclaration {
                name, initializer, ..
            } = self.node_data(declaration)?
            else {
                return Err(self.unexpected(declaration, "variable declaration list"));
            };
            if initializer.is_none() {
                continue;
            }
            if self.arena.is_identifier(name) {
                let target = self.namespace_member_name(name)?;
                let value = self.visit_node(initializer)?;
                let assignment = self.arena.create_assignment(target, value);
                self.arena.set_original(assignment, declaration);
                self.arena.clear_comments(assignment);
                expressions.push(assignment);
            } else {
                expressions.push(self.flatten_exported_binding(name, initializer)?);
            }
        }
        if expressions.is_empty() {
            trace!(index = node.0, "uninitialized namespace export elided");
            return Ok(SmallVec::new());
        }
        let expression = self.arena.create_comma_chain(&expressions);
        let statement = self.arena.create_expression_statement(expression);
        self.arena.set_original(statement, node);
        Ok(smallvec![statement])
    }
}

#[cfg(test)]
#[path = "../tests/namespace.rs"]
mod tests;
