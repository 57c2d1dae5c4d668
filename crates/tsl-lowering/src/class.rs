//! Class lowering: decorators, parameter properties and the class wrapper.
//!
//! A class with TypeScript-only class syntax is rebuilt as a statement
//! group:
//!
//! ```text
//! let C = C_1 = class C { ... };            // or `class C { ... }`
//! __decorate([...], C.prototype, "m", null);
//! __decorate([...], C, "s", void 0);
//! C = C_1 = __decorate([...], C);
//! ```
//!
//! Below ES2015 the group is wrapped in `let C = (() => { ...; return C; })();`
//! when the class has decorators or static initializers.

use bitflags::bitflags;
use smallvec::{SmallVec, smallvec};
use tracing::{debug, trace};
use tsl_ast::{
    ClassData, EmitFlags, HeritageToken, ModifierFlags, ModifierKind, Modifiers, NodeData,
    NodeFlags, NodeIndex, NodeList, VarKind,
};
use tsl_common::options::ScriptTarget;

use crate::decorators::first_constructor_with_body;
use crate::error::{LoweringError, Result};
use crate::resolver::NodeCheckFlags;
use crate::scope::ScopeKind;
use crate::substitution::SubstitutionFlags;
use crate::visitor::{TypeScriptLowering, VisitResult, VisitorKind};

bitflags! {
    /// Facts about one class, computed once before it is lowered.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub(crate) struct ClassFacts: u16 {
        const HAS_STATIC_INITIALIZED_PROPERTIES = 1 << 0;
        const HAS_CONSTRUCTOR_DECORATORS = 1 << 1;
        const HAS_MEMBER_DECORATORS = 1 << 2;
        const IS_EXPORT_OF_NAMESPACE = 1 << 3;
        const IS_NAMED_EXTERNAL_EXPORT = 1 << 4;
        const IS_DEFAULT_EXTERNAL_EXPORT = 1 << 5;
        const IS_DERIVED_CLASS = 1 << 6;
        const USE_IMMEDIATELY_INVOKED_FUNCTION_EXPRESSION = 1 << 7;

        const HAS_ANY_DECORATORS = Self::HAS_CONSTRUCTOR_DECORATORS.bits()
            | Self::HAS_MEMBER_DECORATORS.bits();
        const NEEDS_NAME = Self::HAS_STATIC_INITIALIZED_PROPERTIES.bits()
            | Self::HAS_MEMBER_DECORATORS.bits();
        const MAY_NEED_IMMEDIATELY_INVOKED_FUNCTION_EXPRESSION = Self::HAS_ANY_DECORATORS.bits()
            | Self::HAS_STATIC_INITIALIZED_PROPERTIES.bits();
        const IS_EXPORTED = Self::IS_EXPORT_OF_NAMESPACE.bits()
            | Self::IS_NAMED_EXTERNAL_EXPORT.bits()
            | Self::IS_DEFAULT_EXTERNAL_EXPORT.bits();
    }
}

impl TypeScriptLowering<'_> {
    pub(crate) fn visit_class_declaration(&mut self, node: NodeIndex) -> Result<VisitResult> {
        let data = self.node_data(node)?;
        let Some(class) = data.class_data().cloned() else {
            return Err(self.unexpected(node, "class declaration"));
        };
        if !self.has_typescript_class_syntax(&class) && !self.is_export_of_namespace(node) {
            return self.visit_each_child_one(node);
        }

        let facts = self.class_facts(node, &class);
        debug!(index = node.0, ?facts, "lower class");
        let use_wrapper =
            facts.contains(ClassFacts::USE_IMMEDIATELY_INVOKED_FUNCTION_EXPRESSION);

        if use_wrapper {
            self.ctx.start_lexical_environment();
        }
        let built = self.build_class_statements(node, &class, facts);
        let mut statements = if use_wrapper {
            let hoisted = self.ctx.end_lexical_environment();
            let statements = built?;
            vec![self.wrap_class_statements(node, statements, hoisted)?]
        } else {
            built?
        };

        if facts.contains(ClassFacts::IS_EXPORT_OF_NAMESPACE) {
            statements.push(self.export_member_assignment(node)?);
        } else if use_wrapper || facts.contains(ClassFacts::HAS_CONSTRUCTOR_DECORATORS) {
            // The head lost its `export` modifiers; re-export the binding.
            if facts.contains(ClassFacts::IS_DEFAULT_EXTERNAL_EXPORT) {
                let local = self.local_name(node)?;
                statements.push(self.arena.create_export_default(local));
            } else if facts.contains(ClassFacts::IS_NAMED_EXTERNAL_EXPORT) {
                let local = self.local_name(node)?;
                statements.push(self.arena.create_external_module_export(local));
            }
        }

        if statements.len() > 1 {
            self.arena
                .add_emit_flags(statements[0], EmitFlags::HAS_END_OF_DECLARATION_MARKER);
            statements.push(self.arena.create_end_of_declaration_marker(node));
        }
        Ok(SmallVec::from_vec(statements))
    }

    /// Class head followed by the member and constructor decorations.
    fn build_class_statements(
        &mut self,
        node: NodeIndex,
        class: &ClassData,
        facts: ClassFacts,
    ) -> Result<Vec<NodeIndex>> {
        let name = self.class_name_for_head(node, class, facts)?;
        let use_wrapper =
            facts.contains(ClassFacts::USE_IMMEDIATELY_INVOKED_FUNCTION_EXPRESSION);
        let rebinds = facts.contains(ClassFacts::HAS_CONSTRUCTOR_DECORATORS)
            || (use_wrapper
                && self
                    .check_flags(node)
                    .contains(NodeCheckFlags::CLASS_WITH_CONSTRUCTOR_REFERENCE));

        let head = if rebinds {
            self.class_head_with_alias(node, class, name)?
        } else {
            self.class_head(node, class, name, use_wrapper)?
        };

        let mut statements = vec![head];
        self.add_class_element_decoration_statements(&mut statements, node, class, false)?;
        self.add_class_element_decoration_statements(&mut statements, node, class, true)?;
        self.add_constructor_decoration_statement(&mut statements, node, class)?;
        Ok(statements)
    }

    /// `class C extends B { ... }` with modifiers kept unless the class is
    /// wrapped.
    fn class_head(
        &mut self,
        node: NodeIndex,
        class: &ClassData,
        name: NodeIndex,
        use_wrapper: bool,
    ) -> Result<NodeIndex> {
        let modifiers = if use_wrapper {
            Modifiers::none()
        } else {
            self.visit_modifiers(&class.modifiers)
        };
        let heritage_clauses = self.visit_list(&class.heritage_clauses, VisitorKind::General)?;
        let members = self.transform_class_members(class)?;
        let declaration = self.arena.alloc(NodeData::ClassDeclaration(ClassData {
            decorators: NodeList::new(),
            modifiers,
            name,
            type_parameters: NodeList::new(),
            heritage_clauses,
            members,
        }));
        self.arena.set_original(declaration, node);
        Ok(declaration)
    }

    /// `let C = [C_1 =] class C { ... };` for classes whose binding is
    /// reassigned by the constructor decoration or read through an alias.
    fn class_head_with_alias(
        &mut self,
        node: NodeIndex,
        class: &ClassData,
        name: NodeIndex,
    ) -> Result<NodeIndex> {
        let alias = self.class_alias_if_needed(node, class)?;
        let declaration_name = if self.options.target <= ScriptTarget::ES2015 {
            self.internal_name(node)?
        } else {
            self.local_name(node)?
        };
        let heritage_clauses = self.visit_list(&class.heritage_clauses, VisitorKind::General)?;
        let members = self.transform_class_members(class)?;
        let expression = self.arena.create_class_expression(ClassData {
            decorators: NodeList::new(),
            modifiers: Modifiers::none(),
            name,
            type_parameters: NodeList::new(),
            heritage_clauses,
            members,
        });
        self.arena.set_original(expression, node);
        self.arena.clear_comments(expression);

        let initializer = match alias {
            Some(alias) => {
                let alias = self.arena.create_generated_identifier(&alias);
                self.arena.create_assignment(alias, expression)
            }
            None => expression,
        };
        let declaration = self
            .arena
            .create_variable_declaration(declaration_name, initializer);
        let statement =
            self.arena
                .create_variable_statement(Modifiers::none(), VarKind::Let, vec![declaration]);
        self.arena.set_original(statement, node);
        Ok(statement)
    }

    /// Hoisted `C_1` recorded for the substitution pass when the class body
    /// refers to its own constructor.
    fn class_alias_if_needed(
        &mut self,
        node: NodeIndex,
        class: &ClassData,
    ) -> Result<Option<String>> {
        if !self
            .check_flags(node)
            .contains(NodeCheckFlags::CLASS_WITH_CONSTRUCTOR_REFERENCE)
        {
            return Ok(None);
        }
        self.ctx.enable_substitution(SubstitutionFlags::CLASS_ALIASES);
        let base = match self.arena.data(class.name) {
            Some(NodeData::Identifier {
                text,
                generated: false,
            }) => text.clone(),
            _ => "default".to_string(),
        };
        let alias = self.ctx.names.unique_name(&base);
        let key = match self.parse_node(node) {
            parse_node if parse_node.is_some() => parse_node,
            _ => node,
        };
        trace!(alias = %alias, "class alias");
        self.ctx.class_aliases.insert(key, alias.clone());
        self.ctx.hoist_variable(&alias);
        Ok(Some(alias))
    }

    /// The declared name, a generated `default_1` for an anonymous default
    /// export that needs one, or `NONE`.
    fn class_name_for_head(
        &mut self,
        node: NodeIndex,
        class: &ClassData,
        facts: ClassFacts,
    ) -> Result<NodeIndex> {
        if class.name.is_some() {
            return Ok(class.name);
        }
        let needs_name = facts.intersects(
            ClassFacts::NEEDS_NAME
                | ClassFacts::HAS_CONSTRUCTOR_DECORATORS
                | ClassFacts::USE_IMMEDIATELY_INVOKED_FUNCTION_EXPRESSION,
        );
        if !needs_name {
            return Ok(NodeIndex::NONE);
        }
        if !class.modifiers.has(ModifierKind::Default) {
            return Err(LoweringError::MissingClassName.report());
        }
        if !facts.intersects(ClassFacts::NEEDS_NAME) {
            return Ok(NodeIndex::NONE);
        }
        let text = self.declaration_name_text(node)?;
        Ok(self.arena.create_generated_identifier(&text))
    }

    /// `let C = (() => { ...statements; return C; })();`
    fn wrap_class_statements(
        &mut self,
        node: NodeIndex,
        mut statements: Vec<NodeIndex>,
        hoisted: Vec<String>,
    ) -> Result<NodeIndex> {
        let inner = self.internal_name(node)?;
        let outer = self.arena.create_partially_emitted(inner, NodeIndex::NONE);
        self.arena.add_emit_flags(outer, EmitFlags::NO_COMMENTS);
        let return_statement = self.arena.create_return(outer);
        self.arena
            .add_emit_flags(return_statement, EmitFlags::NO_COMMENTS);
        statements.push(return_statement);
        let statements = self.merge_hoisted(statements, hoisted);

        let body = self.arena.create_block(statements, true);
        let arrow = self.arena.create_arrow_function(Vec::new(), body);
        let call = self.arena.create_call(arrow, Vec::new());
        self.arena
            .add_emit_flags(call, EmitFlags::TYPESCRIPT_CLASS_WRAPPER);

        let local = self.local_name(node)?;
        let declaration = self.arena.create_variable_declaration(local, call);
        let statement =
            self.arena
                .create_variable_statement(Modifiers::none(), VarKind::Let, vec![declaration]);
        self.arena.set_original(statement, node);
        Ok(statement)
    }

    fn class_facts(&self, node: NodeIndex, class: &ClassData) -> ClassFacts {
        let mut facts = ClassFacts::empty();
        if class
            .members
            .iter()
            .any(|member| self.is_static_initialized_property(member))
        {
            facts |= ClassFacts::HAS_STATIC_INITIALIZED_PROPERTIES;
        }
        if self.extends_non_null_base(class) {
            facts |= ClassFacts::IS_DERIVED_CLASS;
        }
        if self.class_or_constructor_parameter_is_decorated(class) {
            facts |= ClassFacts::HAS_CONSTRUCTOR_DECORATORS;
        }
        if class
            .members
            .iter()
            .any(|member| self.member_or_parameter_is_decorated(member))
        {
            facts |= ClassFacts::HAS_MEMBER_DECORATORS;
        }
        if self.is_export_of_namespace(node) {
            facts |= ClassFacts::IS_EXPORT_OF_NAMESPACE;
        } else if self.is_default_external_module_export(node) {
            facts |= ClassFacts::IS_DEFAULT_EXTERNAL_EXPORT;
        } else if self.is_named_external_module_export(node) {
            facts |= ClassFacts::IS_NAMED_EXTERNAL_EXPORT;
        }
        if self.options.target.needs_class_wrapper()
            && facts.intersects(ClassFacts::MAY_NEED_IMMEDIATELY_INVOKED_FUNCTION_EXPRESSION)
        {
            facts |= ClassFacts::USE_IMMEDIATELY_INVOKED_FUNCTION_EXPRESSION;
        }
        facts
    }

    /// Decorators, type parameters, `implements` or member syntax that has
    /// to be rewritten.
    fn has_typescript_class_syntax(&self, class: &ClassData) -> bool {
        !class.decorators.is_empty()
            || !class.type_parameters.is_empty()
            || class.heritage_clauses.iter().any(|clause| {
                matches!(
                    self.arena.data(clause),
                    Some(NodeData::HeritageClause {
                        token: HeritageToken::Implements,
                        ..
                    })
                )
            })
            || class
                .members
                .iter()
                .any(|member| self.flags.contains_class_syntax(member))
    }

    fn is_static_initialized_property(&self, member: NodeIndex) -> bool {
        matches!(
            self.arena.data(member),
            Some(NodeData::PropertyDeclaration { modifiers, initializer, .. })
                if modifiers.has(ModifierKind::Static) && initializer.is_some()
        )
    }

    fn extends_non_null_base(&self, class: &ClassData) -> bool {
        class.heritage_clauses.iter().any(|clause| {
            let Some(NodeData::HeritageClause {
                token: HeritageToken::Extends,
                types,
            }) = self.arena.data(clause)
            else {
                return false;
            };
            types.first().is_some_and(|base| {
                let mut expression = match self.arena.data(base) {
                    Some(NodeData::ExpressionWithTypeArguments { expression, .. }) => *expression,
                    _ => base,
                };
                while let Some(NodeData::Parenthesized { expression: inner }) =
                    self.arena.data(expression)
                {
                    expression = *inner;
                }
                !matches!(self.arena.data(expression), Some(NodeData::Null))
            })
        })
    }

    fn class_or_constructor_parameter_is_decorated(&self, class: &ClassData) -> bool {
        !class.decorators.is_empty()
            || first_constructor_with_body(self.arena, &class.members)
                .is_some_and(|constructor| self.some_parameter_is_decorated(constructor))
    }

    /// Decorated class element, or a method or setter with decorated
    /// parameters. Bodyless members cannot be decorated.
    pub(crate) fn member_or_parameter_is_decorated(&self, member: NodeIndex) -> bool {
        let Some(data) = self.arena.data(member) else {
            return false;
        };
        match data {
            NodeData::PropertyDeclaration { decorators, .. } => !decorators.is_empty(),
            NodeData::MethodDeclaration {
                decorators, body, ..
            }
            | NodeData::GetAccessor {
                decorators, body, ..
            }
            | NodeData::SetAccessor {
                decorators, body, ..
            } => {
                body.is_some()
                    && (!decorators.is_empty()
                        || (!matches!(data, NodeData::GetAccessor { .. })
                            && self.some_parameter_is_decorated(member)))
            }
            _ => false,
        }
    }

    fn some_parameter_is_decorated(&self, function: NodeIndex) -> bool {
        self.arena
            .data(function)
            .and_then(NodeData::parameters)
            .is_some_and(|parameters| {
                parameters.iter().any(|parameter| {
                    self.arena
                        .data(parameter)
                        .and_then(NodeData::decorators)
                        .is_some_and(|decorators| !decorators.is_empty())
                })
            })
    }

    // =========================================================================
    // Class expressions
    // =========================================================================

    pub(crate) fn visit_class_expression(&mut self, node: NodeIndex) -> Result<VisitResult> {
        let data = self.node_data(node)?;
        let Some(class) = data.class_data().cloned() else {
            return Err(self.unexpected(node, "class expression"));
        };
        if !self.has_typescript_class_syntax(&class) {
            return self.visit_each_child_one(node);
        }
        let heritage_clauses = self.visit_list(&class.heritage_clauses, VisitorKind::General)?;
        let members = self.transform_class_members(&class)?;
        let expression = self.arena.create_class_expression(ClassData {
            decorators: NodeList::new(),
            modifiers: Modifiers::none(),
            name: class.name,
            type_parameters: NodeList::new(),
            heritage_clauses,
            members,
        });
        self.arena.set_original(expression, node);
        Ok(smallvec![expression])
    }

    // =========================================================================
    // Members
    // =========================================================================

    /// Field declarations for parameter properties, then the visited
    /// members.
    fn transform_class_members(&mut self, class: &ClassData) -> Result<NodeList> {
        let parameter_properties = first_constructor_with_body(self.arena, &class.members)
            .map(|constructor| self.parameter_properties(constructor))
            .unwrap_or_default();
        self.ctx.has_parameter_properties = !parameter_properties.is_empty();

        let mut members = Vec::with_capacity(class.members.len() + parameter_properties.len());
        for parameter in parameter_properties {
            let name = self.node_data(parameter)?.name();
            if !self.arena.is_identifier(name) {
                continue;
            }
            let name = self.clone_for_reuse(name);
            let property = self
                .arena
                .create_property_declaration(Modifiers::none(), name);
            self.arena.set_original(property, parameter);
            self.arena.clear_comments(property);
            members.push(property);
        }
        members.extend(self.visit_list(&class.members, VisitorKind::ClassElement)?.nodes);
        Ok(NodeList::from(members))
    }

    fn parameter_properties(&self, constructor: NodeIndex) -> Vec<NodeIndex> {
        self.arena
            .data(constructor)
            .and_then(NodeData::parameters)
            .map(|parameters| {
                parameters
                    .iter()
                    .filter(|&parameter| {
                        self.arena
                            .data(parameter)
                            .and_then(NodeData::modifiers)
                            .is_some_and(|modifiers| {
                                modifiers.intersects(ModifierFlags::PARAMETER_PROPERTY)
                            })
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    pub(crate) fn visit_constructor(&mut self, node: NodeIndex) -> Result<VisitResult> {
        let NodeData::Constructor {
            modifiers,
            parameters,
            body,
        } = self.node_data(node)?
        else {
            return Err(self.unexpected(node, "constructor"));
        };
        if body.is_none() {
            trace!(index = node.0, "constructor overload elided");
            return Ok(SmallVec::new());
        }
        let modifiers = self.visit_modifiers(&modifiers);
        let parameter_properties = self.parameter_properties(node);
        let (parameters, body) = if parameter_properties.is_empty() {
            self.visit_function_parts(&parameters, body)?
        } else {
            self.ctx.start_lexical_environment();
            let visited = self
                .visit_list(&parameters, VisitorKind::General)
                .and_then(|parameters| {
                    let statements =
                        self.transform_constructor_body(body, &parameter_properties)?;
                    Ok((parameters, statements))
                });
            let hoisted = self.ctx.end_lexical_environment();
            let (parameters, statements) = visited?;
            let statements = self.merge_hoisted(statements, hoisted);
            let block = self.arena.create_block(statements, true);
            self.arena.set_original(block, body);
            (parameters, block)
        };
        Ok(smallvec![self.arena.update(
            node,
            NodeData::Constructor {
                modifiers,
                parameters,
                body,
            },
        )])
    }

    /// Prologue, statements up to the first `super(...)` call, the
    /// `this.x = x;` assignments, then the rest of the body.
    fn transform_constructor_body(
        &mut self,
        body: NodeIndex,
        parameter_properties: &[NodeIndex],
    ) -> Result<Vec<NodeIndex>> {
        let NodeData::Block { statements, .. } = self.node_data(body)? else {
            return Err(self.unexpected(body, "constructor body"));
        };
        let statements = statements.nodes;
        let prologue = self.prologue_len(&statements);
        let super_index = statements[prologue..]
            .iter()
            .position(|&statement| self.is_super_call_statement(statement))
            .map(|offset| prologue + offset);

        self.ctx.scopes.enter(ScopeKind::Block, body);
        let result =
            self.visit_constructor_statements(&statements, prologue, super_index, parameter_properties);
        self.ctx.scopes.exit();
        result
    }

    fn visit_constructor_statements(
        &mut self,
        statements: &[NodeIndex],
        prologue: usize,
        super_index: Option<usize>,
        parameter_properties: &[NodeIndex],
    ) -> Result<Vec<NodeIndex>> {
        let mut out: Vec<NodeIndex> = statements[..prologue].to_vec();
        let rest_start = match super_index {
            Some(index) => {
                for &statement in &statements[prologue..=index] {
                    out.extend(self.visit(statement)?);
                }
                index + 1
            }
            None => prologue,
        };
        for &parameter in parameter_properties {
            if let Some(assignment) = self.parameter_property_assignment(parameter)? {
                out.push(assignment);
            }
        }
        for &statement in &statements[rest_start..] {
            out.extend(self.visit(statement)?);
        }
        Ok(out)
    }

    fn is_super_call_statement(&self, statement: NodeIndex) -> bool {
        let Some(NodeData::ExpressionStatement { mut expression }) =
            self.arena.data(statement).cloned()
        else {
            return false;
        };
        while let Some(NodeData::Parenthesized { expression: inner }) =
            self.arena.data(expression)
        {
            expression = *inner;
        }
        matches!(
            self.arena.data(expression),
            Some(NodeData::Call { expression: callee, .. })
                if matches!(self.arena.data(*callee), Some(NodeData::Super))
        )
    }

    /// `this.x = x;` for an identifier-named parameter property.
    fn parameter_property_assignment(&mut self, parameter: NodeIndex) -> Result<Option<NodeIndex>> {
        let name = self.node_data(parameter)?.name();
        let Some(text) = self.arena.identifier_text(name).map(str::to_string) else {
            return Ok(None);
        };
        let property_name = self.arena.create_identifier(&text);
        self.arena
            .add_emit_flags(property_name, EmitFlags::NO_COMMENTS);
        let this = self.arena.create_this();
        let target = self
            .arena
            .create_property_access_with_name(this, property_name);
        let local = self.clone_for_reuse(name);
        self.arena.add_emit_flags(local, EmitFlags::NO_COMMENTS);
        let assignment = self.arena.create_assignment(target, local);
        let statement = self.arena.create_expression_statement(assignment);
        self.arena.set_original(statement, parameter);
        self.arena.clear_comments(statement);
        Ok(Some(statement))
    }

    pub(crate) fn visit_property_declaration(&mut self, node: NodeIndex) -> Result<VisitResult> {
        let NodeData::PropertyDeclaration {
            decorators,
            modifiers,
            name,
            initializer,
            ..
        } = self.node_data(node)?
        else {
            return Err(self.unexpected(node, "property declaration"));
        };
        if modifiers.has(ModifierKind::Declare)
            || modifiers.has(ModifierKind::Abstract)
            || self.node_flags(node).contains(NodeFlags::AMBIENT)
        {
            trace!(index = node.0, "ambient or abstract property elided");
            return Ok(SmallVec::new());
        }
        let is_static = modifiers.has(ModifierKind::Static);
        let name =
            self.visit_property_name_of_class_element(name, is_static, !decorators.is_empty())?;
        let modifiers = self.visit_modifiers(&modifiers);
        let initializer = self.visit_node(initializer)?;
        Ok(smallvec![self.arena.update(
            node,
            NodeData::PropertyDeclaration {
                decorators: NodeList::new(),
                modifiers,
                name,
                question: false,
                exclamation: false,
                type_node: NodeIndex::NONE,
                initializer,
            },
        )])
    }

    pub(crate) fn visit_method_declaration(&mut self, node: NodeIndex) -> Result<VisitResult> {
        let NodeData::MethodDeclaration {
            modifiers,
            asterisk,
            name,
            parameters,
            body,
            ..
        } = self.node_data(node)?
        else {
            return Err(self.unexpected(node, "method declaration"));
        };
        if body.is_none() {
            return Ok(SmallVec::new());
        }
        let is_static = modifiers.has(ModifierKind::Static);
        let decorated = self.member_or_parameter_is_decorated(node);
        let name = self.visit_property_name_of_class_element(name, is_static, decorated)?;
        let modifiers = self.visit_modifiers(&modifiers);
        let (parameters, body) = self.visit_function_parts(&parameters, body)?;
        Ok(smallvec![self.arena.update(
            node,
            NodeData::MethodDeclaration {
                decorators: NodeList::new(),
                modifiers,
                asterisk,
                name,
                question: false,
                type_parameters: NodeList::new(),
                parameters,
                return_type: NodeIndex::NONE,
                body,
            },
        )])
    }

    /// Abstract bodyless accessors are dropped; any other bodyless accessor
    /// gets an empty body.
    pub(crate) fn visit_accessor(&mut self, node: NodeIndex) -> Result<VisitResult> {
        let data = self.node_data(node)?;
        let (decorators, modifiers, name, parameters, body) = match &data {
            NodeData::GetAccessor {
                decorators,
                modifiers,
                name,
                parameters,
                body,
                ..
            }
            | NodeData::SetAccessor {
                decorators,
                modifiers,
                name,
                parameters,
                body,
            } => (decorators, modifiers, *name, parameters, *body),
            _ => return Err(self.unexpected(node, "accessor")),
        };
        if body.is_none() && modifiers.has(ModifierKind::Abstract) {
            return Ok(SmallVec::new());
        }
        let is_static = modifiers.has(ModifierKind::Static);
        let decorated = !decorators.is_empty() || self.member_or_parameter_is_decorated(node);
        let name = self.visit_property_name_of_class_element(name, is_static, decorated)?;
        let modifiers = self.visit_modifiers(modifiers);
        let (parameters, mut body) = self.visit_function_parts(parameters, body)?;
        if body.is_none() {
            body = self.arena.create_block(Vec::new(), false);
        }
        let updated = match data {
            NodeData::GetAccessor { .. } => NodeData::GetAccessor {
                decorators: NodeList::new(),
                modifiers,
                name,
                parameters,
                return_type: NodeIndex::NONE,
                body,
            },
            _ => NodeData::SetAccessor {
                decorators: NodeList::new(),
                modifiers,
                name,
                parameters,
                body,
            },
        };
        Ok(smallvec![self.arena.update(node, updated)])
    }

    /// Computed names that must be evaluated once, before the decorate
    /// call reads them, are captured: `[_a = key()]`.
    fn visit_property_name_of_class_element(
        &mut self,
        name: NodeIndex,
        is_static: bool,
        decorated: bool,
    ) -> Result<NodeIndex> {
        let Some(NodeData::ComputedPropertyName { expression }) = self.arena.data(name).cloned()
        else {
            return self.visit_node(name);
        };
        if !((!is_static && self.ctx.has_parameter_properties) || decorated) {
            return self.visit_node(name);
        }
        let expression = self.visit_node(expression)?;
        let mut inner = expression;
        while let Some(NodeData::PartiallyEmitted { expression }) = self.arena.data(inner) {
            inner = *expression;
        }
        if is_simple_inlineable_expression(self.arena.data(inner)) {
            return Ok(self
                .arena
                .update(name, NodeData::ComputedPropertyName { expression }));
        }
        let temp = match self.ctx.generated_names.get(&name) {
            Some(existing) => existing.clone(),
            None => {
                let temp = self.ctx.create_temp_variable();
                self.ctx.generated_names.insert(name, temp.clone());
                temp
            }
        };
        let target = self.arena.create_generated_identifier(&temp);
        let assignment = self.arena.create_assignment(target, expression);
        Ok(self.arena.update(
            name,
            NodeData::ComputedPropertyName {
                expression: assignment,
            },
        ))
    }
}

/// Literals and keywords: safe to evaluate twice with the same result.
pub(crate) fn is_simple_inlineable_expression(data: Option<&NodeData>) -> bool {
    matches!(
        data,
        Some(
            NodeData::StringLiteral { .. }
                | NodeData::NumericLiteral { .. }
                | NodeData::BigIntLiteral { .. }
                | NodeData::NoSubstitutionTemplateLiteral { .. }
                | NodeData::True
                | NodeData::False
                | NodeData::Null
                | NodeData::This
                | NodeData::Super
        )
    )
}

#[cfg(test)]
#[path = "../tests/class.rs"]
mod tests;
