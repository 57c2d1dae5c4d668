//! Tree visitor: dispatch, scope bookkeeping and the general lowering rules.
//!
//! `TypeScriptLowering` walks the input tree once and builds the lowered
//! tree next to it in the same arena. The walk is split across modules:
//!
//! - `visitor` (this file) - entry point, state save/restore, dispatch for
//!   the four visitor variants, functions, parameters, variables and
//!   type-only expressions
//! - `each_child` - structural recursion into child slots
//! - `class` / `decorators` / `type_metadata` - classes
//! - `namespace` / `enums` / `instance_state` / `destructuring` - namespaces
//!   and enums
//! - `imports` - import/export elision
//!
//! Every visit returns zero or more replacement nodes. Oracle queries are
//! always made with the parse-tree node behind whatever is being visited.

use smallvec::{SmallVec, smallvec};
use tracing::{debug, trace};
use tsl_ast::{
    EmitFlags, ModifierKind, Modifiers, NodeArena, NodeData, NodeFlags, NodeIndex, NodeList,
    VarKind,
};
use tsl_common::limits::MAX_LOWERING_DEPTH;
use tsl_common::options::LoweringOptions;

use crate::context::LoweringContext;
use crate::error::{LoweringError, Result};
use crate::names::NameGenerator;
use crate::resolver::{
    ConstantValue, EmitResolver, NodeCheckFlags, TypeReferenceSerializationKind,
};
use crate::scope::ScopeKind;
use crate::transform_flags::TransformFlagsTable;

/// Replacement nodes for one visited node; usually exactly one.
pub(crate) type VisitResult = SmallVec<[NodeIndex; 1]>;

/// Restricted visitor variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum VisitorKind {
    General,
    SourceElement,
    NamespaceElement,
    ClassElement,
}

pub(crate) struct TypeScriptLowering<'a> {
    pub(crate) arena: &'a mut NodeArena,
    pub(crate) resolver: &'a dyn EmitResolver,
    pub(crate) options: &'a LoweringOptions,
    pub(crate) flags: TransformFlagsTable,
    pub(crate) ctx: LoweringContext,
    pub(crate) is_external_module: bool,
}

impl<'a> TypeScriptLowering<'a> {
    pub(crate) fn new(
        arena: &'a mut NodeArena,
        resolver: &'a dyn EmitResolver,
        options: &'a LoweringOptions,
        source_file: NodeIndex,
    ) -> TypeScriptLowering<'a> {
        arena.seal_parse_tree();
        let flags = TransformFlagsTable::compute(arena, source_file);
        let names = NameGenerator::from_tree(arena, source_file);
        let is_external_module = matches!(
            arena.data(source_file),
            Some(NodeData::SourceFile {
                is_external_module: true,
                ..
            })
        );
        TypeScriptLowering {
            arena,
            resolver,
            options,
            flags,
            ctx: LoweringContext::new(names),
            is_external_module,
        }
    }

    // =========================================================================
    // Source file
    // =========================================================================

    pub(crate) fn visit_source_file(&mut self, node: NodeIndex) -> Result<NodeIndex> {
        let NodeData::SourceFile {
            file_name,
            statements,
            is_external_module,
            is_declaration_file,
        } = self.node_data(node)?
        else {
            return Err(self.unexpected(node, "source file position"));
        };
        if is_declaration_file {
            debug!(file = %file_name, "declaration file left as is");
            return Ok(node);
        }

        self.ctx.scopes.enter(ScopeKind::SourceFile, node);
        self.ctx.start_lexical_environment();
        let visited = self.visit_list(&statements, VisitorKind::SourceElement);
        let hoisted = self.ctx.end_lexical_environment();
        self.ctx.scopes.exit();
        let mut statements = visited?.nodes;

        if self.options.always_strict && !(is_external_module && self.options.module.is_es_module())
        {
            self.ensure_use_strict(&mut statements);
        }
        let statements = self.merge_hoisted(statements, hoisted);

        Ok(self.arena.update(
            node,
            NodeData::SourceFile {
                file_name,
                statements: NodeList::from(statements),
                is_external_module,
                is_declaration_file,
            },
        ))
    }

    fn ensure_use_strict(&mut self, statements: &mut Vec<NodeIndex>) {
        let prologue_len = self.prologue_len(statements);
        let present = statements[..prologue_len].iter().any(|&statement| {
            matches!(
                self.arena.data(statement),
                Some(NodeData::ExpressionStatement { expression })
                    if self.arena.text(*expression) == Some("use strict")
            )
        });
        if !present {
            let prologue = self.arena.create_use_strict_prologue();
            statements.insert(0, prologue);
        }
    }

    /// Number of leading directive statements (`"use strict";` and the like).
    pub(crate) fn prologue_len(&self, statements: &[NodeIndex]) -> usize {
        statements
            .iter()
            .take_while(|&&statement| match self.arena.data(statement) {
                Some(NodeData::ExpressionStatement { expression }) => {
                    matches!(self.arena.data(*expression), Some(NodeData::StringLiteral { .. }))
                }
                _ => false,
            })
            .count()
    }

    /// Insert `var a, b;` for the hoisted names after the prologue.
    pub(crate) fn merge_hoisted(
        &mut self,
        mut statements: Vec<NodeIndex>,
        hoisted: Vec<String>,
    ) -> Vec<NodeIndex> {
        if hoisted.is_empty() {
            return statements;
        }
        let declarations = hoisted
            .iter()
            .map(|name| {
                let name = self.arena.create_generated_identifier(name);
                self.arena.create_variable_declaration(name, NodeIndex::NONE)
            })
            .collect();
        let statement =
            self.arena
                .create_variable_statement(Modifiers::none(), VarKind::Var, declarations);
        let at = self.prologue_len(&statements);
        statements.insert(at, statement);
        statements
    }

    // =========================================================================
    // Visit with state save/restore
    // =========================================================================

    /// Visit `node` with the given visitor variant.
    ///
    /// Scope frame, name scope and the parameter-property flag are restored
    /// before returning, whether the visit succeeded or not.
    pub(crate) fn visit_with(&mut self, kind: VisitorKind, node: NodeIndex) -> Result<VisitResult> {
        if node.is_none() {
            return Ok(SmallVec::new());
        }
        if self.ctx.depth >= MAX_LOWERING_DEPTH {
            return Err(LoweringError::DepthExceeded {
                limit: MAX_LOWERING_DEPTH,
            }
            .report());
        }
        self.ctx.depth += 1;
        let saved_parameter_properties = self.ctx.has_parameter_properties;
        let saved_name_scope = self.ctx.scopes.name_scope();
        let entered = self.on_before_visit_node(node);

        let result = match kind {
            VisitorKind::General => self.visitor_worker(node),
            VisitorKind::SourceElement => self.source_element_worker(node),
            VisitorKind::NamespaceElement => self.namespace_element_worker(node),
            VisitorKind::ClassElement => self.class_element_worker(node),
        };

        if entered {
            self.ctx.scopes.exit();
        }
        self.ctx.scopes.set_name_scope(saved_name_scope);
        self.ctx.has_parameter_properties = saved_parameter_properties;
        self.ctx.depth -= 1;
        result
    }

    #[inline]
    pub(crate) fn visit(&mut self, node: NodeIndex) -> Result<VisitResult> {
        self.visit_with(VisitorKind::General, node)
    }

    /// Visit a single-node slot. More than one result is an internal failure
    /// here; statement slots that may expand go through `visit_child_node`.
    pub(crate) fn visit_node(&mut self, node: NodeIndex) -> Result<NodeIndex> {
        let results = self.visit(node)?;
        match results.as_slice() {
            [] => Ok(NodeIndex::NONE),
            [single] => Ok(*single),
            _ => Err(self.unexpected(node, "single node slot")),
        }
    }

    /// Visit every node of `list` and flatten the results.
    pub(crate) fn visit_list(&mut self, list: &NodeList, kind: VisitorKind) -> Result<NodeList> {
        let mut out = Vec::with_capacity(list.len());
        for node in list.iter() {
            out.extend(self.visit_with(kind, node)?);
        }
        Ok(NodeList::from(out))
    }

    /// Open a scope frame for scope-introducing nodes and record class and
    /// function declarations in the current one. Returns whether a frame was
    /// pushed.
    fn on_before_visit_node(&mut self, node: NodeIndex) -> bool {
        let Some(data) = self.arena.data(node) else {
            return false;
        };
        let scope = match data {
            NodeData::SourceFile { .. } => Some(ScopeKind::SourceFile),
            NodeData::Block { .. } => Some(ScopeKind::Block),
            NodeData::CaseBlock { .. } => Some(ScopeKind::CaseBlock),
            NodeData::ModuleBlock { .. } => Some(ScopeKind::ModuleBlock),
            NodeData::ClassDeclaration(_) | NodeData::FunctionDeclaration { .. } => {
                let is_class = data.class_data().is_some();
                let ambient = data
                    .modifiers()
                    .is_some_and(|modifiers| modifiers.has(ModifierKind::Declare));
                if !ambient {
                    if let Some(name) = self.arena.identifier_text(data.name()).map(str::to_string)
                    {
                        self.ctx.scopes.record_declaration(&name, node);
                    }
                }
                if is_class {
                    self.ctx.scopes.set_name_scope(Some(node));
                }
                None
            }
            _ => None,
        };
        match scope {
            Some(kind) => {
                self.ctx.scopes.enter(kind, node);
                true
            }
            None => false,
        }
    }

    // =========================================================================
    // Visitor variants
    // =========================================================================

    fn visitor_worker(&mut self, node: NodeIndex) -> Result<VisitResult> {
        if self.flags.contains_typescript(node) {
            self.visit_typescript(node)
        } else {
            Ok(smallvec![node])
        }
    }

    fn source_element_worker(&mut self, node: NodeIndex) -> Result<VisitResult> {
        match self.arena.data(node) {
            Some(
                NodeData::ImportDeclaration { .. }
                | NodeData::ImportEquals { .. }
                | NodeData::ExportAssignment { .. }
                | NodeData::ExportDeclaration { .. },
            ) => self.visit_elidable_statement(node),
            _ => self.visitor_worker(node),
        }
    }

    fn namespace_element_worker(&mut self, node: NodeIndex) -> Result<VisitResult> {
        let data = self.node_data(node)?;
        let module_relative = match &data {
            NodeData::ImportDeclaration { .. }
            | NodeData::ExportAssignment { .. }
            | NodeData::ExportDeclaration { .. } => true,
            NodeData::ImportEquals {
                module_reference, ..
            } => matches!(
                self.arena.data(*module_reference),
                Some(NodeData::ExternalModuleReference { .. })
            ),
            _ => false,
        };
        if module_relative {
            trace!(kind = data.kind_name(), "module-relative form elided in namespace");
            return Ok(SmallVec::new());
        }
        let exported = data
            .modifiers()
            .is_some_and(|modifiers| modifiers.has(ModifierKind::Export));
        if self.flags.contains_typescript(node) || exported {
            self.visit_typescript(node)
        } else {
            Ok(smallvec![node])
        }
    }

    fn class_element_worker(&mut self, node: NodeIndex) -> Result<VisitResult> {
        let data = self.node_data(node)?;
        match data {
            NodeData::Constructor { .. } => self.visit_constructor(node),
            NodeData::PropertyDeclaration { .. } => self.visit_property_declaration(node),
            NodeData::MethodDeclaration { .. }
            | NodeData::GetAccessor { .. }
            | NodeData::SetAccessor { .. }
            | NodeData::ClassStaticBlock { .. }
            | NodeData::IndexSignature { .. } => self.visitor_worker(node),
            NodeData::SemicolonClassElement => Ok(smallvec![node]),
            other => Err(LoweringError::UnexpectedClassMember {
                kind: other.kind_name(),
            }
            .report()),
        }
    }

    /// Modifier-list variant: drops TypeScript-only modifiers, and `export`
    /// / `default` inside a namespace body.
    pub(crate) fn visit_modifiers(&self, modifiers: &Modifiers) -> Modifiers {
        let in_namespace = self.ctx.current_namespace().is_some();
        modifiers.filtered(|kind| {
            !kind.is_typescript_only()
                && !(in_namespace && matches!(kind, ModifierKind::Export | ModifierKind::Default))
        })
    }

    // =========================================================================
    // Dispatch
    // =========================================================================

    fn visit_typescript(&mut self, node: NodeIndex) -> Result<VisitResult> {
        let data = self.node_data(node)?;
        trace!(kind = data.kind_name(), index = node.0, "visit");

        if is_statement(&data)
            && (data
                .modifiers()
                .is_some_and(|modifiers| modifiers.has(ModifierKind::Declare))
                || self.node_flags(node).contains(NodeFlags::AMBIENT))
        {
            return Ok(smallvec![self.arena.create_not_emitted_statement(node)]);
        }

        if data.is_type_node() {
            return Ok(SmallVec::new());
        }

        match data {
            NodeData::TypeParameter { .. }
            | NodeData::IndexSignature { .. }
            | NodeData::PropertySignature { .. }
            | NodeData::MethodSignature { .. }
            | NodeData::Decorator { .. } => Ok(SmallVec::new()),

            NodeData::InterfaceDeclaration { .. } | NodeData::TypeAliasDeclaration { .. } => {
                Ok(smallvec![self.arena.create_not_emitted_statement(node)])
            }

            NodeData::HeritageClause { token, .. } => match token {
                tsl_ast::HeritageToken::Implements => Ok(SmallVec::new()),
                tsl_ast::HeritageToken::Extends => self.visit_each_child_one(node),
            },

            NodeData::ClassDeclaration(_) => self.visit_class_declaration(node),
            NodeData::ClassExpression(_) => self.visit_class_expression(node),
            NodeData::Constructor { .. } => self.visit_constructor(node),
            NodeData::PropertyDeclaration { .. } => self.visit_property_declaration(node),
            NodeData::MethodDeclaration { .. } => self.visit_method_declaration(node),
            NodeData::GetAccessor { .. } | NodeData::SetAccessor { .. } => {
                self.visit_accessor(node)
            }

            NodeData::FunctionDeclaration { .. } => self.visit_function_declaration(node),
            NodeData::FunctionExpression { .. } => self.visit_function_expression(node),
            NodeData::ArrowFunction { .. } => self.visit_arrow_function(node),
            NodeData::Parameter { .. } => self.visit_parameter(node),

            NodeData::Parenthesized { .. } => self.visit_parenthesized(node),
            NodeData::As { expression, .. }
            | NodeData::Satisfies { expression, .. }
            | NodeData::TypeAssertion { expression, .. }
            | NodeData::NonNull { expression } => {
                let expression = self.visit_node(expression)?;
                Ok(smallvec![self.arena.create_partially_emitted(expression, node)])
            }

            NodeData::EnumDeclaration { .. } => self.visit_enum_declaration(node),
            NodeData::ModuleDeclaration { .. } => self.visit_module_declaration(node),
            NodeData::VariableStatement { .. } => self.visit_variable_statement(node),
            NodeData::VariableDeclaration { .. } => self.visit_variable_declaration(node),
            NodeData::ImportEquals { .. } => self.visit_import_equals(node),

            _ => self.visit_each_child_one(node),
        }
    }

    pub(crate) fn visit_each_child_one(&mut self, node: NodeIndex) -> Result<VisitResult> {
        Ok(smallvec![self.visit_each_child(node)?])
    }

    // =========================================================================
    // Functions and parameters
    // =========================================================================

    fn visit_function_declaration(&mut self, node: NodeIndex) -> Result<VisitResult> {
        let NodeData::FunctionDeclaration {
            modifiers,
            asterisk,
            name,
            parameters,
            body,
            ..
        } = self.node_data(node)?
        else {
            return Err(self.unexpected(node, "function declaration"));
        };
        if body.is_none() {
            trace!(index = node.0, "overload signature elided");
            return Ok(smallvec![self.arena.create_not_emitted_statement(node)]);
        }
        let modifiers = self.visit_modifiers(&modifiers);
        let (parameters, body) = self.visit_function_parts(&parameters, body)?;
        let updated = self.arena.update(
            node,
            NodeData::FunctionDeclaration {
                modifiers,
                asterisk,
                name,
                type_parameters: NodeList::new(),
                parameters,
                return_type: NodeIndex::NONE,
                body,
            },
        );
        let mut statements: VisitResult = smallvec![updated];
        if self.is_export_of_namespace(node) {
            statements.push(self.export_member_assignment(node)?);
        }
        Ok(statements)
    }

    fn visit_function_expression(&mut self, node: NodeIndex) -> Result<VisitResult> {
        let NodeData::FunctionExpression {
            modifiers,
            asterisk,
            name,
            parameters,
            body,
            ..
        } = self.node_data(node)?
        else {
            return Err(self.unexpected(node, "function expression"));
        };
        if body.is_none() {
            return Ok(smallvec![self.arena.create_omitted_expression()]);
        }
        let modifiers = self.visit_modifiers(&modifiers);
        let (parameters, body) = self.visit_function_parts(&parameters, body)?;
        Ok(smallvec![self.arena.update(
            node,
            NodeData::FunctionExpression {
                modifiers,
                asterisk,
                name,
                type_parameters: NodeList::new(),
                parameters,
                return_type: NodeIndex::NONE,
                body,
            },
        )])
    }

    fn visit_arrow_function(&mut self, node: NodeIndex) -> Result<VisitResult> {
        let NodeData::ArrowFunction {
            modifiers,
            parameters,
            body,
            ..
        } = self.node_data(node)?
        else {
            return Err(self.unexpected(node, "arrow function"));
        };
        let modifiers = self.visit_modifiers(&modifiers);
        let (parameters, body) = self.visit_function_parts(&parameters, body)?;
        Ok(smallvec![self.arena.update(
            node,
            NodeData::ArrowFunction {
                modifiers,
                type_parameters: NodeList::new(),
                parameters,
                return_type: NodeIndex::NONE,
                body,
            },
        )])
    }

    /// Visit parameters and body inside a fresh lexical environment and put
    /// hoisted variables at the top of the body.
    pub(crate) fn visit_function_parts(
        &mut self,
        parameters: &NodeList,
        body: NodeIndex,
    ) -> Result<(NodeList, NodeIndex)> {
        self.ctx.start_lexical_environment();
        let visited = self
            .visit_list(parameters, VisitorKind::General)
            .and_then(|parameters| Ok((parameters, self.visit_node(body)?)));
        let hoisted = self.ctx.end_lexical_environment();
        let (parameters, body) = visited?;
        let body = self.add_hoisted_to_body(body, hoisted)?;
        Ok((parameters, body))
    }

    fn add_hoisted_to_body(&mut self, body: NodeIndex, hoisted: Vec<String>) -> Result<NodeIndex> {
        if hoisted.is_empty() || body.is_none() {
            return Ok(body);
        }
        match self.node_data(body)? {
            NodeData::Block { statements, .. } => {
                let statements = self.merge_hoisted(statements.nodes, hoisted);
                Ok(self.arena.update(
                    body,
                    NodeData::Block {
                        statements: NodeList::from(statements),
                        multi_line: true,
                    },
                ))
            }
            _ => {
                // Concise arrow body: `{ var _a; return expr; }`.
                let ret = self.arena.create_return(body);
                let statements = self.merge_hoisted(vec![ret], hoisted);
                Ok(self.arena.create_block(statements, true))
            }
        }
    }

    fn visit_parameter(&mut self, node: NodeIndex) -> Result<VisitResult> {
        let NodeData::Parameter {
            dot_dot_dot,
            name,
            initializer,
            ..
        } = self.node_data(node)?
        else {
            return Err(self.unexpected(node, "parameter"));
        };
        if self.arena.identifier_text(name) == Some("this") {
            return Ok(SmallVec::new());
        }
        let name = self.visit_node(name)?;
        let initializer = self.visit_node(initializer)?;
        Ok(smallvec![self.arena.update(
            node,
            NodeData::Parameter {
                decorators: NodeList::new(),
                modifiers: Modifiers::none(),
                dot_dot_dot,
                name,
                question: false,
                type_node: NodeIndex::NONE,
                initializer,
            },
        )])
    }

    // =========================================================================
    // Expressions
    // =========================================================================

    /// `(<T>x)` and `(x as T)` lose their parentheses along with the
    /// assertion; other parenthesized expressions recurse structurally.
    fn visit_parenthesized(&mut self, node: NodeIndex) -> Result<VisitResult> {
        let NodeData::Parenthesized { expression } = self.node_data(node)? else {
            return Err(self.unexpected(node, "parenthesized expression"));
        };
        let mut inner = expression;
        while let Some(NodeData::Parenthesized { expression } | NodeData::PartiallyEmitted { expression }) =
            self.arena.data(inner)
        {
            inner = *expression;
        }
        if matches!(
            self.arena.data(inner),
            Some(NodeData::As { .. } | NodeData::TypeAssertion { .. } | NodeData::Satisfies { .. })
        ) {
            let expression = self.visit_node(expression)?;
            return Ok(smallvec![self.arena.create_partially_emitted(expression, node)]);
        }
        self.visit_each_child_one(node)
    }

    // =========================================================================
    // Variables
    // =========================================================================

    fn visit_variable_statement(&mut self, node: NodeIndex) -> Result<VisitResult> {
        if self.is_export_of_namespace(node) {
            return self.visit_exported_variable_statement(node);
        }
        self.visit_each_child_one(node)
    }

    fn visit_variable_declaration(&mut self, node: NodeIndex) -> Result<VisitResult> {
        let NodeData::VariableDeclaration {
            name, initializer, ..
        } = self.node_data(node)?
        else {
            return Err(self.unexpected(node, "variable declaration"));
        };
        let name = self.visit_node(name)?;
        let initializer = self.visit_node(initializer)?;
        Ok(smallvec![self.arena.update(
            node,
            NodeData::VariableDeclaration {
                name,
                exclamation: false,
                type_node: NodeIndex::NONE,
                initializer,
            },
        )])
    }

    // =========================================================================
    // Names
    // =========================================================================

    /// Text a declaration is bound to. Unnamed declarations get a memoized
    /// generated name (`default_1` for an anonymous default-exported class).
    pub(crate) fn declaration_name_text(&mut self, declaration: NodeIndex) -> Result<String> {
        let name = self.node_data(declaration)?.name();
        if let Some(text) = self.arena.identifier_text(name) {
            return Ok(text.to_string());
        }
        if let Some(existing) = self.ctx.generated_names.get(&declaration) {
            return Ok(existing.clone());
        }
        let generated = self.ctx.names.unique_name("default");
        self.ctx
            .generated_names
            .insert(declaration, generated.clone());
        Ok(generated)
    }

    /// Fresh identifier naming `declaration`, flagged with `flags`.
    pub(crate) fn declaration_name(
        &mut self,
        declaration: NodeIndex,
        flags: EmitFlags,
    ) -> Result<NodeIndex> {
        let name = self.node_data(declaration)?.name();
        let text = self.declaration_name_text(declaration)?;
        let identifier = if self.arena.is_identifier(name) {
            let identifier = self.arena.create_identifier(&text);
            self.arena.set_original(identifier, name);
            identifier
        } else {
            self.arena.create_generated_identifier(&text)
        };
        Ok(self
            .arena
            .add_emit_flags(identifier, flags | EmitFlags::NO_COMMENTS))
    }

    /// Local binding of a declaration; never qualified by substitution.
    pub(crate) fn local_name(&mut self, declaration: NodeIndex) -> Result<NodeIndex> {
        self.declaration_name(declaration, EmitFlags::LOCAL_NAME)
    }

    /// Name used inside a class wrapper.
    pub(crate) fn internal_name(&mut self, declaration: NodeIndex) -> Result<NodeIndex> {
        self.declaration_name(declaration, EmitFlags::LOCAL_NAME | EmitFlags::INTERNAL_NAME)
    }

    /// `Container.name` for the innermost open container.
    pub(crate) fn namespace_member_name(&mut self, name: NodeIndex) -> Result<NodeIndex> {
        let Some(container) = self.ctx.current_container_name().map(str::to_string) else {
            return Err(self.unexpected(name, "namespace member outside a namespace"));
        };
        let text = match self.arena.identifier_text(name) {
            Some(text) => text.to_string(),
            None => return Err(self.unexpected(name, "namespace member name")),
        };
        let container = self.arena.create_generated_identifier(&container);
        let member = self.arena.create_identifier(&text);
        self.arena.set_original(member, name);
        self.arena.add_emit_flags(member, EmitFlags::NO_COMMENTS);
        let access = self.arena.create_property_access_with_name(container, member);
        Ok(self.arena.add_emit_flags(access, EmitFlags::NO_COMMENTS))
    }

    /// `Container.name = name;` after an exported declaration inside a
    /// namespace.
    pub(crate) fn export_member_assignment(&mut self, declaration: NodeIndex) -> Result<NodeIndex> {
        let name = self.node_data(declaration)?.name();
        let target = self.namespace_member_name(name)?;
        let local = self.local_name(declaration)?;
        let assignment = self.arena.create_assignment(target, local);
        let statement = self.arena.create_expression_statement(assignment);
        Ok(self.arena.add_emit_flags(statement, EmitFlags::NO_COMMENTS))
    }

    /// Shallow copy of an identifier or expression for a second position.
    pub(crate) fn clone_for_reuse(&mut self, node: NodeIndex) -> NodeIndex {
        let copy = self.arena.clone_node(node);
        self.arena.clear_comments(copy);
        copy
    }

    // =========================================================================
    // Export shape
    // =========================================================================

    fn has_syntactic_export(&self, node: NodeIndex) -> bool {
        self.node_flags(node).contains(NodeFlags::NESTED_NAMESPACE)
            || self.has_modifier(node, ModifierKind::Export)
    }

    /// Exported declaration directly inside a namespace body.
    pub(crate) fn is_export_of_namespace(&self, node: NodeIndex) -> bool {
        self.ctx.current_namespace().is_some() && self.has_syntactic_export(node)
    }

    pub(crate) fn is_external_module_export(&self, node: NodeIndex) -> bool {
        self.ctx.current_namespace().is_none() && self.has_modifier(node, ModifierKind::Export)
    }

    pub(crate) fn is_named_external_module_export(&self, node: NodeIndex) -> bool {
        self.is_external_module_export(node) && !self.has_modifier(node, ModifierKind::Default)
    }

    pub(crate) fn is_default_external_module_export(&self, node: NodeIndex) -> bool {
        self.is_external_module_export(node) && self.has_modifier(node, ModifierKind::Default)
    }

    // =========================================================================
    // Node access
    // =========================================================================

    pub(crate) fn node_data(&self, node: NodeIndex) -> Result<NodeData> {
        self.arena
            .data(node)
            .cloned()
            .ok_or_else(|| LoweringError::InvalidNode { index: node.0 }.report())
    }

    pub(crate) fn node_flags(&self, node: NodeIndex) -> NodeFlags {
        self.arena
            .get(node)
            .map_or(NodeFlags::empty(), |node| node.flags)
    }

    pub(crate) fn has_modifier(&self, node: NodeIndex, kind: ModifierKind) -> bool {
        self.arena
            .data(node)
            .and_then(NodeData::modifiers)
            .is_some_and(|modifiers| modifiers.has(kind))
    }

    pub(crate) fn unexpected(&self, node: NodeIndex, context: &'static str) -> LoweringError {
        LoweringError::UnexpectedNode {
            kind: self.arena.kind_name(node),
            context,
        }
        .report()
    }

    // =========================================================================
    // Oracle
    // =========================================================================

    pub(crate) fn parse_node(&self, node: NodeIndex) -> NodeIndex {
        self.arena.parse_tree_node(node)
    }

    pub(crate) fn is_referenced_alias(&self, node: NodeIndex) -> bool {
        let node = self.parse_node(node);
        node.is_some() && self.resolver.is_referenced_alias_declaration(node)
    }

    pub(crate) fn is_value_alias(&self, node: NodeIndex) -> bool {
        let node = self.parse_node(node);
        node.is_some() && self.resolver.is_value_alias_declaration(node)
    }

    pub(crate) fn is_top_level_value_import_equals(&self, node: NodeIndex) -> bool {
        let node = self.parse_node(node);
        node.is_some() && self.resolver.is_top_level_value_import_equals_with_entity_name(node)
    }

    pub(crate) fn check_flags(&self, node: NodeIndex) -> NodeCheckFlags {
        let node = self.parse_node(node);
        if node.is_none() {
            return NodeCheckFlags::empty();
        }
        self.resolver.node_check_flags(node)
    }

    pub(crate) fn constant_value(&self, node: NodeIndex) -> Option<ConstantValue> {
        let node = self.parse_node(node);
        if node.is_none() {
            return None;
        }
        self.resolver.constant_value(node)
    }

    pub(crate) fn serialization_kind(
        &self,
        type_name: NodeIndex,
        location: NodeIndex,
    ) -> TypeReferenceSerializationKind {
        let type_name = self.parse_node(type_name);
        if type_name.is_none() {
            return TypeReferenceSerializationKind::Unknown;
        }
        self.resolver
            .type_reference_serialization_kind(type_name, self.parse_node(location))
    }
}

/// Statement and declaration kinds that a `declare` modifier removes.
fn is_statement(data: &NodeData) -> bool {
    matches!(
        data,
        NodeData::VariableStatement { .. }
            | NodeData::FunctionDeclaration { .. }
            | NodeData::ClassDeclaration(_)
            | NodeData::InterfaceDeclaration { .. }
            | NodeData::TypeAliasDeclaration { .. }
            | NodeData::EnumDeclaration { .. }
            | NodeData::ModuleDeclaration { .. }
            | NodeData::ImportEquals { .. }
            | NodeData::ImportDeclaration { .. }
            | NodeData::ExportDeclaration { .. }
            | NodeData::ExportAssignment { .. }
    )
}

#[cfg(test)]
#[path = "../tests/visitor.rs"]
mod tests;
