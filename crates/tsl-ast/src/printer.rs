//! Reference printer.
//!
//! Prints a tree as source text with four-space indentation. It exists so
//! lowered trees can be inspected and tested; it is not a production emitter
//! (no source maps, no original formatting). Parentheses are inserted from
//! operator precedence, so trees built by transforms never need explicit
//! `Parenthesized` nodes.
//!
//! Substitutions computed after lowering are applied through
//! [`SubstitutionLookup`]: before any node is printed, the lookup may replace
//! it with another node.

use crate::base::{NodeIndex, NodeList};
use crate::flags::{EmitFlags, Modifiers, NodeFlags};
use crate::node::{
    BinaryOperator, ClassData, CommentKind, HeritageToken, NodeData, PostfixOperator, Precedence,
    TypeOperatorKind,
};
use crate::NodeArena;

/// Print-time node replacement.
pub trait SubstitutionLookup {
    fn lookup(&self, node: NodeIndex) -> Option<NodeIndex>;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct PrinterOptions {
    pub remove_comments: bool,
}

pub struct Printer<'a> {
    arena: &'a NodeArena,
    substitutions: Option<&'a dyn SubstitutionLookup>,
    options: PrinterOptions,
    out: String,
    indent: usize,
    line_start: bool,
}

impl<'a> Printer<'a> {
    pub fn new(arena: &'a NodeArena) -> Printer<'a> {
        Printer {
            arena,
            substitutions: None,
            options: PrinterOptions::default(),
            out: String::new(),
            indent: 0,
            line_start: true,
        }
    }

    pub fn with_substitutions(mut self, lookup: &'a dyn SubstitutionLookup) -> Printer<'a> {
        self.substitutions = Some(lookup);
        self
    }

    pub fn with_options(mut self, options: PrinterOptions) -> Printer<'a> {
        self.options = options;
        self
    }

    /// Print a source file, statement, class member or expression.
    pub fn print(mut self, node: NodeIndex) -> String {
        let node = self.resolve(node);
        match self.arena.data(node) {
            Some(data) if data.is_expression() => self.emit_expression(node, Precedence::Comma),
            Some(data) if data.is_type_node() => self.emit_type(node),
            Some(data) if data.is_class_element() => self.emit_class_member(node),
            Some(_) => self.emit_statement(node),
            None => {}
        }
        if !self.line_start {
            self.newline();
        }
        self.out
    }

    // =========================================================================
    // Output helpers
    // =========================================================================

    fn write(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if self.line_start {
            for _ in 0..self.indent {
                self.out.push_str("    ");
            }
            self.line_start = false;
        }
        self.out.push_str(text);
    }

    fn newline(&mut self) {
        self.out.push('\n');
        self.line_start = true;
    }

    fn resolve(&self, node: NodeIndex) -> NodeIndex {
        if self.arena.emit_flags(node).contains(EmitFlags::NO_SUBSTITUTION) {
            return node;
        }
        self.substitutions
            .and_then(|lookup| lookup.lookup(node))
            .unwrap_or(node)
    }

    fn data(&self, node: NodeIndex) -> Option<&'a NodeData> {
        self.arena.data(node)
    }

    fn comments_enabled(&self, node: NodeIndex, flag: EmitFlags) -> bool {
        !self.options.remove_comments && !self.arena.emit_flags(node).intersects(flag)
    }

    fn emit_leading_comments_on_lines(&mut self, node: NodeIndex) {
        if !self.comments_enabled(node, EmitFlags::NO_LEADING_COMMENTS) {
            return;
        }
        let Some(header) = self.arena.get(node) else {
            return;
        };
        for comment in &header.comments.leading {
            match comment.kind {
                CommentKind::MultiLine => self.write(&format!("/*{}*/", comment.text)),
                CommentKind::SingleLine => self.write(&format!("//{}", comment.text)),
            }
            self.newline();
        }
    }

    fn emit_leading_comments_inline(&mut self, node: NodeIndex) {
        if !self.comments_enabled(node, EmitFlags::NO_LEADING_COMMENTS) {
            return;
        }
        let Some(header) = self.arena.get(node) else {
            return;
        };
        for comment in &header.comments.leading {
            if comment.kind == CommentKind::MultiLine {
                self.write(&format!("/*{}*/ ", comment.text));
            }
        }
    }

    fn emit_trailing_comments(&mut self, node: NodeIndex) {
        if !self.comments_enabled(node, EmitFlags::NO_TRAILING_COMMENTS) {
            return;
        }
        let Some(header) = self.arena.get(node) else {
            return;
        };
        for comment in &header.comments.trailing {
            match comment.kind {
                CommentKind::MultiLine => self.write(&format!(" /*{}*/", comment.text)),
                CommentKind::SingleLine => self.write(&format!(" //{}", comment.text)),
            }
        }
    }

    fn emit_modifiers(&mut self, modifiers: &Modifiers) {
        for kind in modifiers.iter() {
            self.write(kind.text());
            self.write(" ");
        }
    }

    fn emit_decorators(&mut self, decorators: &NodeList, on_own_line: bool) {
        for decorator in decorators.iter() {
            if let Some(NodeData::Decorator { expression }) = self.data(decorator) {
                self.write("@");
                self.emit_expression(*expression, Precedence::LeftHandSide);
                if on_own_line {
                    self.newline();
                } else {
                    self.write(" ");
                }
            }
        }
    }

    fn emit_comma_separated(&mut self, list: &NodeList, precedence: Precedence) {
        for (i, item) in list.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            self.emit_expression(item, precedence);
        }
    }

    // =========================================================================
    // Statements
    // =========================================================================

    fn emit_statements(&mut self, statements: &NodeList) {
        for statement in statements.iter() {
            self.emit_statement(statement);
        }
    }

    fn emit_statement(&mut self, node: NodeIndex) {
        let node = self.resolve(node);
        let Some(data) = self.data(node) else {
            return;
        };
        self.emit_leading_comments_on_lines(node);
        match data {
            NodeData::SourceFile { statements, .. } => {
                self.emit_statements(statements);
                return;
            }
            NodeData::NotEmittedStatement
            | NodeData::EndOfDeclarationMarker
            | NodeData::MergeDeclarationMarker => return,
            NodeData::VariableStatement {
                modifiers,
                declaration_list,
            } => {
                self.emit_modifiers(modifiers);
                self.emit_variable_declaration_list(*declaration_list);
                self.write(";");
            }
            NodeData::ExpressionStatement { expression } => {
                self.emit_expression_statement(*expression);
                self.write(";");
            }
            NodeData::Block {
                statements,
                multi_line,
            } => self.emit_block(statements, *multi_line),
            NodeData::Empty => self.write(";"),
            NodeData::Debugger => self.write("debugger;"),
            NodeData::If {
                expression,
                then_statement,
                else_statement,
            } => {
                self.write("if (");
                self.emit_expression(*expression, Precedence::Comma);
                self.write(") ");
                self.emit_embedded_statement(*then_statement);
                if else_statement.is_some() {
                    self.write(" else ");
                    self.emit_embedded_statement(*else_statement);
                }
            }
            NodeData::Do {
                statement,
                expression,
            } => {
                self.write("do ");
                self.emit_embedded_statement(*statement);
                self.write(" while (");
                self.emit_expression(*expression, Precedence::Comma);
                self.write(");");
            }
            NodeData::While {
                expression,
                statement,
            } => {
                self.write("while (");
                self.emit_expression(*expression, Precedence::Comma);
                self.write(") ");
                self.emit_embedded_statement(*statement);
            }
            NodeData::For {
                initializer,
                condition,
                incrementor,
                statement,
            } => {
                self.write("for (");
                self.emit_for_initializer(*initializer);
                self.write(";");
                if condition.is_some() {
                    self.write(" ");
                    self.emit_expression(*condition, Precedence::Comma);
                }
                self.write(";");
                if incrementor.is_some() {
                    self.write(" ");
                    self.emit_expression(*incrementor, Precedence::Comma);
                }
                self.write(") ");
                self.emit_embedded_statement(*statement);
            }
            NodeData::ForIn {
                initializer,
                expression,
                statement,
            } => {
                self.write("for (");
                self.emit_for_initializer(*initializer);
                self.write(" in ");
                self.emit_expression(*expression, Precedence::Comma);
                self.write(") ");
                self.emit_embedded_statement(*statement);
            }
            NodeData::ForOf {
                is_await,
                initializer,
                expression,
                statement,
            } => {
                self.write(if *is_await { "for await (" } else { "for (" });
                self.emit_for_initializer(*initializer);
                self.write(" of ");
                self.emit_expression(*expression, Precedence::Assignment);
                self.write(") ");
                self.emit_embedded_statement(*statement);
            }
            NodeData::Continue { label } | NodeData::Break { label } => {
                let keyword = if matches!(data, NodeData::Continue { .. }) {
                    "continue"
                } else {
                    "break"
                };
                self.write(keyword);
                if label.is_some() {
                    self.write(" ");
                    self.emit_name(*label);
                }
                self.write(";");
            }
            NodeData::Return { expression } => {
                self.write("return");
                if expression.is_some() {
                    self.write(" ");
                    self.emit_expression(*expression, Precedence::Comma);
                }
                self.write(";");
            }
            NodeData::Throw { expression } => {
                self.write("throw ");
                self.emit_expression(*expression, Precedence::Comma);
                self.write(";");
            }
            NodeData::Labeled { label, statement } => {
                self.emit_name(*label);
                self.write(": ");
                self.emit_embedded_statement(*statement);
            }
            NodeData::Switch {
                expression,
                case_block,
            } => {
                self.write("switch (");
                self.emit_expression(*expression, Precedence::Comma);
                self.write(") {");
                self.newline();
                if let Some(NodeData::CaseBlock { clauses }) = self.data(*case_block) {
                    self.indent += 1;
                    for clause in clauses.iter() {
                        self.emit_case_clause(clause);
                    }
                    self.indent -= 1;
                }
                self.write("}");
            }
            NodeData::Try {
                try_block,
                catch_clause,
                finally_block,
            } => {
                self.write("try ");
                self.emit_embedded_statement(*try_block);
                if let Some(NodeData::CatchClause {
                    variable_declaration,
                    block,
                }) = self.data(*catch_clause)
                {
                    self.write(" catch ");
                    if variable_declaration.is_some() {
                        self.write("(");
                        self.emit_variable_declaration(*variable_declaration);
                        self.write(") ");
                    }
                    self.emit_embedded_statement(*block);
                }
                if finally_block.is_some() {
                    self.write(" finally ");
                    self.emit_embedded_statement(*finally_block);
                }
            }
            NodeData::FunctionDeclaration {
                modifiers,
                asterisk,
                name,
                type_parameters,
                parameters,
                return_type,
                body,
            } => {
                self.emit_modifiers(modifiers);
                self.write(if *asterisk { "function* " } else { "function " });
                self.emit_name(*name);
                self.emit_signature(type_parameters, parameters, *return_type);
                self.emit_function_body(*body);
            }
            NodeData::ClassDeclaration(class) => self.emit_class(class, true),
            NodeData::InterfaceDeclaration {
                modifiers,
                name,
                type_parameters,
                heritage_clauses,
                members,
            } => {
                self.emit_modifiers(modifiers);
                self.write("interface ");
                self.emit_name(*name);
                self.emit_type_parameters(type_parameters);
                self.emit_heritage_clauses(heritage_clauses);
                self.write(" ");
                self.emit_type_members(members);
            }
            NodeData::TypeAliasDeclaration {
                modifiers,
                name,
                type_parameters,
                type_node,
            } => {
                self.emit_modifiers(modifiers);
                self.write("type ");
                self.emit_name(*name);
                self.emit_type_parameters(type_parameters);
                self.write(" = ");
                self.emit_type(*type_node);
                self.write(";");
            }
            NodeData::EnumDeclaration {
                modifiers,
                name,
                members,
            } => {
                self.emit_modifiers(modifiers);
                self.write("enum ");
                self.emit_name(*name);
                self.write(" {");
                self.newline();
                self.indent += 1;
                for (i, member) in members.iter().enumerate() {
                    if let Some(NodeData::EnumMember { name, initializer }) = self.data(member) {
                        self.emit_name(*name);
                        if initializer.is_some() {
                            self.write(" = ");
                            self.emit_expression(*initializer, Precedence::Assignment);
                        }
                        if i + 1 < members.len() {
                            self.write(",");
                        }
                        self.newline();
                    }
                }
                self.indent -= 1;
                self.write("}");
            }
            NodeData::ModuleDeclaration {
                modifiers, name, ..
            } => {
                self.emit_modifiers(modifiers);
                let flags = self.arena.get(node).map(|n| n.flags).unwrap_or_default();
                if !flags.contains(NodeFlags::GLOBAL_AUGMENTATION) {
                    self.write(if flags.contains(NodeFlags::NAMESPACE) {
                        "namespace "
                    } else {
                        "module "
                    });
                }
                self.emit_name(*name);
                let mut body = data.body();
                while let Some(NodeData::ModuleDeclaration { name, body: inner, .. }) =
                    self.data(body)
                {
                    self.write(".");
                    self.emit_name(*name);
                    body = *inner;
                }
                match self.data(body) {
                    Some(NodeData::ModuleBlock { statements }) => {
                        self.write(" ");
                        self.emit_block(statements, true);
                    }
                    _ => self.write(";"),
                }
            }
            NodeData::ImportEquals {
                modifiers,
                is_type_only,
                name,
                module_reference,
            } => {
                self.emit_modifiers(modifiers);
                self.write("import ");
                if *is_type_only {
                    self.write("type ");
                }
                self.emit_name(*name);
                self.write(" = ");
                match self.data(*module_reference) {
                    Some(NodeData::ExternalModuleReference { expression }) => {
                        self.write("require(");
                        self.emit_expression(*expression, Precedence::Assignment);
                        self.write(")");
                    }
                    _ => self.emit_entity_name(*module_reference),
                }
                self.write(";");
            }
            NodeData::ImportDeclaration {
                modifiers,
                import_clause,
                module_specifier,
            } => {
                self.emit_modifiers(modifiers);
                self.write("import ");
                if import_clause.is_some() {
                    self.emit_import_clause(*import_clause);
                    self.write(" from ");
                }
                self.emit_expression(*module_specifier, Precedence::Primary);
                self.write(";");
            }
            NodeData::ExportAssignment {
                modifiers,
                is_export_equals,
                expression,
            } => {
                self.emit_modifiers(modifiers);
                self.write(if *is_export_equals {
                    "export = "
                } else {
                    "export default "
                });
                self.emit_expression(*expression, Precedence::Assignment);
                self.write(";");
            }
            NodeData::ExportDeclaration {
                modifiers,
                is_type_only,
                export_clause,
                module_specifier,
            } => {
                self.emit_modifiers(modifiers);
                self.write("export ");
                if *is_type_only {
                    self.write("type ");
                }
                match self.data(*export_clause) {
                    Some(NodeData::NamedExports { elements }) => {
                        self.emit_named_bindings(elements)
                    }
                    Some(NodeData::NamespaceExport { name }) => {
                        self.write("* as ");
                        self.emit_name(*name);
                    }
                    _ => self.write("*"),
                }
                if module_specifier.is_some() {
                    self.write(" from ");
                    self.emit_expression(*module_specifier, Precedence::Primary);
                }
                self.write(";");
            }
            _ if data.is_expression() => {
                self.emit_expression(node, Precedence::Comma);
                self.write(";");
            }
            _ => self.write(&format!("/* {} */", data.kind_name())),
        }
        self.emit_trailing_comments(node);
        self.newline();
    }

    /// Statement nested inside another statement (`if`, loops, `try`).
    fn emit_embedded_statement(&mut self, node: NodeIndex) {
        let node = self.resolve(node);
        match self.data(node) {
            Some(NodeData::Block {
                statements,
                multi_line,
            }) => self.emit_block(statements, *multi_line),
            _ => {
                self.emit_statement(node);
                // the nested statement already ended the line
                if self.out.ends_with('\n') {
                    self.out.pop();
                    self.line_start = false;
                }
            }
        }
    }

    fn emit_block(&mut self, statements: &NodeList, multi_line: bool) {
        let has_output = statements.iter().any(|s| {
            !matches!(
                self.data(self.resolve(s)),
                Some(NodeData::EndOfDeclarationMarker | NodeData::MergeDeclarationMarker)
            )
        });
        if !has_output && !multi_line {
            self.write("{ }");
            return;
        }
        self.write("{");
        self.newline();
        self.indent += 1;
        self.emit_statements(statements);
        self.indent -= 1;
        self.write("}");
    }

    fn emit_function_body(&mut self, body: NodeIndex) {
        match self.data(body) {
            Some(NodeData::Block {
                statements,
                multi_line,
            }) => {
                self.write(" ");
                self.emit_block(statements, *multi_line);
            }
            _ => self.write(";"),
        }
    }

    fn emit_case_clause(&mut self, clause: NodeIndex) {
        let statements = match self.data(clause) {
            Some(NodeData::CaseClause {
                expression,
                statements,
            }) => {
                self.write("case ");
                self.emit_expression(*expression, Precedence::Comma);
                self.write(":");
                statements
            }
            Some(NodeData::DefaultClause { statements }) => {
                self.write("default:");
                statements
            }
            _ => return,
        };
        self.newline();
        self.indent += 1;
        self.emit_statements(statements);
        self.indent -= 1;
    }

    fn emit_for_initializer(&mut self, initializer: NodeIndex) {
        match self.data(initializer) {
            Some(NodeData::VariableDeclarationList { .. }) => {
                self.emit_variable_declaration_list(initializer)
            }
            Some(_) => self.emit_expression(initializer, Precedence::Comma),
            None => {}
        }
    }

    fn emit_expression_statement(&mut self, expression: NodeIndex) {
        let expression = self.resolve(expression);
        let emitted = self.skip_partially_emitted(expression);
        if let Some(NodeData::Call {
            expression: callee,
            arguments,
            ..
        }) = self.data(emitted)
        {
            let callee_kind = self.data(self.skip_partially_emitted(*callee));
            if matches!(
                callee_kind,
                Some(NodeData::FunctionExpression { .. } | NodeData::ArrowFunction { .. })
            ) {
                self.write("(");
                self.emit_expression(*callee, Precedence::Comma);
                self.write(")(");
                self.emit_comma_separated(arguments, Precedence::Assignment);
                self.write(")");
                self.emit_trailing_comments(emitted);
                return;
            }
        }
        let leftmost = self.leftmost_expression(emitted);
        if matches!(
            self.data(leftmost),
            Some(
                NodeData::ObjectLiteral { .. }
                    | NodeData::FunctionExpression { .. }
                    | NodeData::ClassExpression(_)
            )
        ) {
            self.write("(");
            self.emit_expression(expression, Precedence::Comma);
            self.write(")");
            return;
        }
        self.emit_expression(expression, Precedence::Comma);
    }

    fn skip_partially_emitted(&self, mut node: NodeIndex) -> NodeIndex {
        while let Some(NodeData::PartiallyEmitted { expression }) = self.data(node) {
            node = self.resolve(*expression);
        }
        node
    }

    fn leftmost_expression(&self, mut node: NodeIndex) -> NodeIndex {
        loop {
            let next = match self.data(node) {
                Some(
                    NodeData::Binary { left: next, .. }
                    | NodeData::Call {
                        expression: next, ..
                    }
                    | NodeData::PropertyAccess {
                        expression: next, ..
                    }
                    | NodeData::ElementAccess {
                        expression: next, ..
                    }
                    | NodeData::PostfixUnary { operand: next, .. }
                    | NodeData::Conditional {
                        condition: next, ..
                    }
                    | NodeData::TaggedTemplate { tag: next, .. }
                    | NodeData::PartiallyEmitted { expression: next }
                    | NodeData::NonNull { expression: next }
                    | NodeData::As {
                        expression: next, ..
                    }
                    | NodeData::Satisfies {
                        expression: next, ..
                    },
                ) => *next,
                Some(NodeData::CommaList { elements }) => match elements.first() {
                    Some(first) => first,
                    None => return node,
                },
                _ => return node,
            };
            node = self.resolve(next);
        }
    }

    fn emit_variable_declaration_list(&mut self, list: NodeIndex) {
        let Some(NodeData::VariableDeclarationList { kind, declarations }) = self.data(list) else {
            return;
        };
        self.write(kind.text());
        self.write(" ");
        for (i, declaration) in declarations.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            self.emit_variable_declaration(declaration);
        }
    }

    fn emit_variable_declaration(&mut self, declaration: NodeIndex) {
        match self.data(declaration) {
            Some(NodeData::VariableDeclaration {
                name,
                exclamation,
                type_node,
                initializer,
            }) => {
                self.emit_binding_name(*name);
                if *exclamation {
                    self.write("!");
                }
                self.emit_type_annotation(*type_node);
                if initializer.is_some() {
                    self.write(" = ");
                    self.emit_expression(*initializer, Precedence::Assignment);
                }
            }
            _ => self.emit_binding_name(declaration),
        }
    }

    fn emit_import_clause(&mut self, clause: NodeIndex) {
        let Some(NodeData::ImportClause {
            is_type_only,
            name,
            named_bindings,
        }) = self.data(clause)
        else {
            return;
        };
        if *is_type_only {
            self.write("type ");
        }
        if name.is_some() {
            self.emit_name(*name);
            if named_bindings.is_some() {
                self.write(", ");
            }
        }
        match self.data(*named_bindings) {
            Some(NodeData::NamespaceImport { name }) => {
                self.write("* as ");
                self.emit_name(*name);
            }
            Some(NodeData::NamedImports { elements }) => self.emit_named_bindings(elements),
            _ => {}
        }
    }

    fn emit_named_bindings(&mut self, elements: &NodeList) {
        if elements.is_empty() {
            self.write("{}");
            return;
        }
        self.write("{ ");
        for (i, element) in elements.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            if let Some(
                NodeData::ImportSpecifier {
                    is_type_only,
                    property_name,
                    name,
                }
                | NodeData::ExportSpecifier {
                    is_type_only,
                    property_name,
                    name,
                },
            ) = self.data(element)
            {
                if *is_type_only {
                    self.write("type ");
                }
                if property_name.is_some() {
                    self.emit_name(*property_name);
                    self.write(" as ");
                }
                self.emit_name(*name);
            }
        }
        self.write(" }");
    }

    // =========================================================================
    // Classes and functions
    // =========================================================================

    fn emit_class(&mut self, class: &ClassData, is_declaration: bool) {
        self.emit_decorators(&class.decorators, is_declaration);
        self.emit_modifiers(&class.modifiers);
        self.write("class");
        if class.name.is_some() {
            self.write(" ");
            self.emit_name(class.name);
        }
        self.emit_type_parameters(&class.type_parameters);
        self.emit_heritage_clauses(&class.heritage_clauses);
        self.write(" {");
        self.newline();
        self.indent += 1;
        for member in class.members.iter() {
            self.emit_class_member(member);
        }
        self.indent -= 1;
        self.write("}");
    }

    fn emit_heritage_clauses(&mut self, clauses: &NodeList) {
        for clause in clauses.iter() {
            if let Some(NodeData::HeritageClause { token, types }) = self.data(clause) {
                self.write(match token {
                    HeritageToken::Extends => " extends ",
                    HeritageToken::Implements => " implements ",
                });
                for (i, ty) in types.iter().enumerate() {
                    if i > 0 {
                        self.write(", ");
                    }
                    match self.data(ty) {
                        Some(NodeData::ExpressionWithTypeArguments {
                            expression,
                            type_arguments,
                        }) => {
                            self.emit_expression(*expression, Precedence::LeftHandSide);
                            self.emit_type_arguments(type_arguments);
                        }
                        _ => self.emit_expression(ty, Precedence::LeftHandSide),
                    }
                }
            }
        }
    }

    fn emit_class_member(&mut self, member: NodeIndex) {
        let member = self.resolve(member);
        let Some(data) = self.data(member) else {
            return;
        };
        self.emit_leading_comments_on_lines(member);
        match data {
            NodeData::Constructor {
                modifiers,
                parameters,
                body,
            } => {
                self.emit_modifiers(modifiers);
                self.write("constructor");
                self.emit_parameters(parameters);
                self.emit_function_body(*body);
            }
            NodeData::PropertyDeclaration {
                decorators,
                modifiers,
                name,
                question,
                exclamation,
                type_node,
                initializer,
            } => {
                self.emit_decorators(decorators, true);
                self.emit_modifiers(modifiers);
                self.emit_property_name(*name);
                if *question {
                    self.write("?");
                }
                if *exclamation {
                    self.write("!");
                }
                self.emit_type_annotation(*type_node);
                if initializer.is_some() {
                    self.write(" = ");
                    self.emit_expression(*initializer, Precedence::Assignment);
                }
                self.write(";");
            }
            NodeData::MethodDeclaration {
                decorators,
                modifiers,
                asterisk,
                name,
                question,
                type_parameters,
                parameters,
                return_type,
                body,
            } => {
                self.emit_decorators(decorators, true);
                self.emit_modifiers(modifiers);
                if *asterisk {
                    self.write("*");
                }
                self.emit_property_name(*name);
                if *question {
                    self.write("?");
                }
                self.emit_signature(type_parameters, parameters, *return_type);
                self.emit_function_body(*body);
            }
            NodeData::GetAccessor {
                decorators,
                modifiers,
                name,
                parameters,
                return_type,
                body,
            } => {
                self.emit_decorators(decorators, true);
                self.emit_modifiers(modifiers);
                self.write("get ");
                self.emit_property_name(*name);
                self.emit_signature(&NodeList::new(), parameters, *return_type);
                self.emit_function_body(*body);
            }
            NodeData::SetAccessor {
                decorators,
                modifiers,
                name,
                parameters,
                body,
            } => {
                self.emit_decorators(decorators, true);
                self.emit_modifiers(modifiers);
                self.write("set ");
                self.emit_property_name(*name);
                self.emit_parameters(parameters);
                self.emit_function_body(*body);
            }
            NodeData::IndexSignature {
                modifiers,
                parameters,
                type_node,
            } => {
                self.emit_modifiers(modifiers);
                self.write("[");
                for (i, parameter) in parameters.iter().enumerate() {
                    if i > 0 {
                        self.write(", ");
                    }
                    self.emit_parameter(parameter);
                }
                self.write("]");
                self.emit_type_annotation(*type_node);
                self.write(";");
            }
            NodeData::ClassStaticBlock { body } => {
                self.write("static");
                self.emit_function_body(*body);
            }
            NodeData::SemicolonClassElement => self.write(";"),
            _ => {
                // a statement in member position; print it as such
                self.emit_statement(member);
                return;
            }
        }
        self.emit_trailing_comments(member);
        self.newline();
    }

    fn emit_signature(
        &mut self,
        type_parameters: &NodeList,
        parameters: &NodeList,
        return_type: NodeIndex,
    ) {
        self.emit_type_parameters(type_parameters);
        self.emit_parameters(parameters);
        self.emit_type_annotation(return_type);
    }

    fn emit_parameters(&mut self, parameters: &NodeList) {
        self.write("(");
        for (i, parameter) in parameters.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            self.emit_parameter(parameter);
        }
        self.write(")");
    }

    fn emit_parameter(&mut self, parameter: NodeIndex) {
        match self.data(parameter) {
            Some(NodeData::Parameter {
                decorators,
                modifiers,
                dot_dot_dot,
                name,
                question,
                type_node,
                initializer,
            }) => {
                self.emit_decorators(decorators, false);
                self.emit_modifiers(modifiers);
                if *dot_dot_dot {
                    self.write("...");
                }
                self.emit_binding_name(*name);
                if *question {
                    self.write("?");
                }
                self.emit_type_annotation(*type_node);
                if initializer.is_some() {
                    self.write(" = ");
                    self.emit_expression(*initializer, Precedence::Assignment);
                }
            }
            _ => self.emit_binding_name(parameter),
        }
    }

    fn emit_binding_name(&mut self, name: NodeIndex) {
        match self.data(name) {
            Some(NodeData::ObjectBindingPattern { elements }) => {
                if elements.is_empty() {
                    self.write("{}");
                    return;
                }
                self.write("{ ");
                self.emit_binding_elements(elements);
                self.write(" }");
            }
            Some(NodeData::ArrayBindingPattern { elements }) => {
                self.write("[");
                self.emit_binding_elements(elements);
                self.write("]");
            }
            _ => self.emit_name(name),
        }
    }

    fn emit_binding_elements(&mut self, elements: &NodeList) {
        for (i, element) in elements.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            if let Some(NodeData::BindingElement {
                dot_dot_dot,
                property_name,
                name,
                initializer,
            }) = self.data(element)
            {
                if *dot_dot_dot {
                    self.write("...");
                }
                if property_name.is_some() {
                    self.emit_property_name(*property_name);
                    self.write(": ");
                }
                self.emit_binding_name(*name);
                if initializer.is_some() {
                    self.write(" = ");
                    self.emit_expression(*initializer, Precedence::Assignment);
                }
            }
        }
    }

    /// Declaration names, labels and specifier names. Never substituted.
    fn emit_name(&mut self, name: NodeIndex) {
        match self.data(name) {
            Some(NodeData::Identifier { text, .. } | NodeData::PrivateIdentifier { text }) => {
                self.write(text)
            }
            Some(NodeData::StringLiteral { .. }) => self.emit_expression(name, Precedence::Primary),
            Some(NodeData::QualifiedName { .. }) => self.emit_entity_name(name),
            Some(_) => self.emit_property_name(name),
            None => {}
        }
    }

    fn emit_entity_name(&mut self, name: NodeIndex) {
        match self.data(name) {
            Some(NodeData::QualifiedName { left, right }) => {
                self.emit_entity_name(*left);
                self.write(".");
                self.emit_name(*right);
            }
            _ => self.emit_expression(name, Precedence::Member),
        }
    }

    fn emit_property_name(&mut self, name: NodeIndex) {
        match self.data(name) {
            Some(NodeData::ComputedPropertyName { expression }) => {
                self.write("[");
                self.emit_expression(*expression, Precedence::Assignment);
                self.write("]");
            }
            Some(NodeData::Identifier { text, .. } | NodeData::PrivateIdentifier { text }) => {
                self.write(text)
            }
            Some(_) => self.emit_expression(name, Precedence::Primary),
            None => {}
        }
    }

    // =========================================================================
    // Expressions
    // =========================================================================

    fn precedence_of(&self, node: NodeIndex) -> Precedence {
        let Some(data) = self.data(node) else {
            return Precedence::Primary;
        };
        match data {
            NodeData::Binary { operator, .. } => operator.precedence(),
            NodeData::CommaList { .. } => Precedence::Comma,
            NodeData::Yield { .. } => Precedence::Yield,
            NodeData::ArrowFunction { .. } => Precedence::Assignment,
            NodeData::Conditional { .. } => Precedence::Conditional,
            NodeData::As { .. } | NodeData::Satisfies { .. } => Precedence::Relational,
            NodeData::PrefixUnary { .. } | NodeData::Await { .. } | NodeData::TypeAssertion { .. } => {
                Precedence::Unary
            }
            NodeData::PostfixUnary { .. } => Precedence::Update,
            NodeData::New { .. }
            | NodeData::Call { .. }
            | NodeData::TaggedTemplate { .. }
            | NodeData::PropertyAccess { .. }
            | NodeData::ElementAccess { .. }
            | NodeData::NonNull { .. } => Precedence::Member,
            NodeData::PartiallyEmitted { expression } => self.precedence_of(self.resolve(*expression)),
            _ => Precedence::Primary,
        }
    }

    fn emit_expression(&mut self, node: NodeIndex, min: Precedence) {
        let node = self.resolve(node);
        if node.is_none() {
            return;
        }
        let needs_parens = self.precedence_of(node) < min;
        if needs_parens {
            self.write("(");
        }
        self.emit_leading_comments_inline(node);
        self.emit_expression_worker(node);
        self.emit_trailing_comments(node);
        if needs_parens {
            self.write(")");
        }
    }

    fn emit_expression_worker(&mut self, node: NodeIndex) {
        let Some(data) = self.data(node) else {
            return;
        };
        match data {
            NodeData::Identifier { text, .. } | NodeData::PrivateIdentifier { text } => {
                self.write(text)
            }
            NodeData::StringLiteral { text } => self.write(&quote_string(text)),
            NodeData::NumericLiteral { text }
            | NodeData::BigIntLiteral { text }
            | NodeData::RegularExpressionLiteral { text } => self.write(text),
            NodeData::NoSubstitutionTemplateLiteral { text } => {
                self.write("`");
                self.write(text);
                self.write("`");
            }
            NodeData::TemplateExpression { head, spans } => {
                self.write("`");
                self.write(head);
                for span in spans.iter() {
                    if let Some(NodeData::TemplateSpan {
                        expression,
                        literal,
                        ..
                    }) = self.data(span)
                    {
                        self.write("${");
                        self.emit_expression(*expression, Precedence::Comma);
                        self.write("}");
                        self.write(literal);
                    }
                }
                self.write("`");
            }
            NodeData::True => self.write("true"),
            NodeData::False => self.write("false"),
            NodeData::Null => self.write("null"),
            NodeData::This => self.write("this"),
            NodeData::Super => self.write("super"),
            NodeData::ArrayLiteral {
                elements,
                multi_line,
            } => {
                if *multi_line && !elements.is_empty() {
                    self.write("[");
                    self.newline();
                    self.indent += 1;
                    for (i, element) in elements.iter().enumerate() {
                        self.emit_expression(element, Precedence::Assignment);
                        if i + 1 < elements.len() {
                            self.write(",");
                        }
                        self.newline();
                    }
                    self.indent -= 1;
                    self.write("]");
                } else {
                    self.write("[");
                    self.emit_comma_separated(elements, Precedence::Assignment);
                    self.write("]");
                }
            }
            NodeData::ObjectLiteral {
                properties,
                multi_line,
            } => {
                if properties.is_empty() {
                    self.write("{}");
                } else if *multi_line {
                    self.write("{");
                    self.newline();
                    self.indent += 1;
                    for (i, property) in properties.iter().enumerate() {
                        self.emit_object_element(property);
                        if i + 1 < properties.len() {
                            self.write(",");
                        }
                        self.newline();
                    }
                    self.indent -= 1;
                    self.write("}");
                } else {
                    self.write("{ ");
                    for (i, property) in properties.iter().enumerate() {
                        if i > 0 {
                            self.write(", ");
                        }
                        self.emit_object_element(property);
                    }
                    self.write(" }");
                }
            }
            NodeData::PropertyAccess {
                expression,
                name,
                question_dot,
            } => {
                self.emit_expression(*expression, Precedence::Member);
                self.write(if *question_dot { "?." } else { "." });
                self.emit_name(*name);
            }
            NodeData::ElementAccess {
                expression,
                argument,
                question_dot,
            } => {
                self.emit_expression(*expression, Precedence::Member);
                self.write(if *question_dot { "?.[" } else { "[" });
                self.emit_expression(*argument, Precedence::Comma);
                self.write("]");
            }
            NodeData::Call {
                expression,
                type_arguments,
                arguments,
                question_dot,
            } => {
                self.emit_expression(*expression, Precedence::Member);
                if *question_dot {
                    self.write("?.");
                }
                self.emit_type_arguments(type_arguments);
                self.write("(");
                self.emit_comma_separated(arguments, Precedence::Assignment);
                self.write(")");
            }
            NodeData::New {
                expression,
                type_arguments,
                arguments,
            } => {
                self.write("new ");
                self.emit_expression(*expression, Precedence::Member);
                self.emit_type_arguments(type_arguments);
                self.write("(");
                self.emit_comma_separated(arguments, Precedence::Assignment);
                self.write(")");
            }
            NodeData::TaggedTemplate {
                tag,
                type_arguments,
                template,
            } => {
                self.emit_expression(*tag, Precedence::Member);
                self.emit_type_arguments(type_arguments);
                self.emit_expression(*template, Precedence::Primary);
            }
            NodeData::Parenthesized { expression } => {
                self.write("(");
                self.emit_expression(*expression, Precedence::Comma);
                self.write(")");
            }
            NodeData::FunctionExpression {
                modifiers,
                asterisk,
                name,
                type_parameters,
                parameters,
                return_type,
                body,
            } => {
                self.emit_modifiers(modifiers);
                self.write(if *asterisk { "function*" } else { "function" });
                if name.is_some() {
                    self.write(" ");
                    self.emit_name(*name);
                } else {
                    self.write(" ");
                }
                self.emit_signature(type_parameters, parameters, *return_type);
                self.emit_function_body(*body);
            }
            NodeData::ArrowFunction {
                modifiers,
                type_parameters,
                parameters,
                return_type,
                body,
            } => {
                self.emit_modifiers(modifiers);
                self.emit_signature(type_parameters, parameters, *return_type);
                self.write(" =>");
                match self.data(*body) {
                    Some(NodeData::Block { .. }) => self.emit_function_body(*body),
                    _ => {
                        self.write(" ");
                        let concise = self.skip_partially_emitted(self.resolve(*body));
                        if matches!(self.data(concise), Some(NodeData::ObjectLiteral { .. })) {
                            self.write("(");
                            self.emit_expression(*body, Precedence::Comma);
                            self.write(")");
                        } else {
                            self.emit_expression(*body, Precedence::Assignment);
                        }
                    }
                }
            }
            NodeData::PrefixUnary { operator, operand } => {
                self.write(operator.text());
                if operator.is_keyword() {
                    self.write(" ");
                } else if let Some(NodeData::PrefixUnary { operator: inner, .. }) =
                    self.data(self.resolve(*operand))
                {
                    // avoid `- -x` collapsing into `--x`
                    if inner.text().starts_with(operator.text()) {
                        self.write(" ");
                    }
                }
                self.emit_expression(*operand, Precedence::Unary);
            }
            NodeData::PostfixUnary { operand, operator } => {
                self.emit_expression(*operand, Precedence::LeftHandSide);
                self.write(match operator {
                    PostfixOperator::Increment => "++",
                    PostfixOperator::Decrement => "--",
                });
            }
            NodeData::Await { expression } => {
                self.write("await ");
                self.emit_expression(*expression, Precedence::Unary);
            }
            NodeData::Yield {
                asterisk,
                expression,
            } => {
                self.write(if *asterisk { "yield*" } else { "yield" });
                if expression.is_some() {
                    self.write(" ");
                    self.emit_expression(*expression, Precedence::Assignment);
                }
            }
            NodeData::Binary {
                left,
                operator,
                right,
            } => {
                let precedence = operator.precedence();
                let (left_min, right_min) = if operator.is_right_associative() {
                    (next_precedence(precedence), precedence)
                } else {
                    (precedence, next_precedence(precedence))
                };
                let left_min = if operator.is_assignment() {
                    Precedence::LeftHandSide
                } else {
                    left_min
                };
                self.emit_expression(*left, left_min);
                if *operator == BinaryOperator::Comma {
                    self.write(", ");
                } else {
                    self.write(" ");
                    self.write(operator.text());
                    self.write(" ");
                }
                self.emit_expression(*right, right_min);
            }
            NodeData::Conditional {
                condition,
                when_true,
                when_false,
            } => {
                self.emit_expression(*condition, Precedence::LogicalOr);
                self.write(" ? ");
                self.emit_expression(*when_true, Precedence::Assignment);
                self.write(" : ");
                self.emit_expression(*when_false, Precedence::Assignment);
            }
            NodeData::ClassExpression(class) => self.emit_class(class, false),
            NodeData::As {
                expression,
                type_node,
            } => {
                self.emit_expression(*expression, Precedence::Relational);
                self.write(" as ");
                self.emit_type(*type_node);
            }
            NodeData::Satisfies {
                expression,
                type_node,
            } => {
                self.emit_expression(*expression, Precedence::Relational);
                self.write(" satisfies ");
                self.emit_type(*type_node);
            }
            NodeData::TypeAssertion {
                type_node,
                expression,
            } => {
                self.write("<");
                self.emit_type(*type_node);
                self.write(">");
                self.emit_expression(*expression, Precedence::Unary);
            }
            NodeData::NonNull { expression } => {
                self.emit_expression(*expression, Precedence::Member);
                self.write("!");
            }
            NodeData::SpreadElement { expression } | NodeData::SpreadAssignment { expression } => {
                self.write("...");
                self.emit_expression(*expression, Precedence::Assignment);
            }
            NodeData::OmittedExpression => {}
            NodeData::ExpressionWithTypeArguments {
                expression,
                type_arguments,
            } => {
                self.emit_expression(*expression, Precedence::LeftHandSide);
                self.emit_type_arguments(type_arguments);
            }
            NodeData::PartiallyEmitted { expression } => {
                // parentheses were decided from the operand's precedence
                self.emit_expression(*expression, Precedence::Comma);
            }
            NodeData::CommaList { elements } => {
                self.emit_comma_separated(elements, Precedence::Assignment)
            }
            _ => self.write(&format!("/* {} */", data.kind_name())),
        }
    }

    fn emit_object_element(&mut self, element: NodeIndex) {
        let element = self.resolve(element);
        self.emit_leading_comments_inline(element);
        match self.data(element) {
            Some(NodeData::PropertyAssignment {
                name, initializer, ..
            }) => {
                self.emit_property_name(*name);
                self.write(": ");
                self.emit_expression(*initializer, Precedence::Assignment);
            }
            Some(NodeData::ShorthandPropertyAssignment {
                name,
                object_assignment_initializer,
            }) => {
                self.emit_name(*name);
                if object_assignment_initializer.is_some() {
                    self.write(" = ");
                    self.emit_expression(*object_assignment_initializer, Precedence::Assignment);
                }
            }
            Some(NodeData::SpreadAssignment { expression }) => {
                self.write("...");
                self.emit_expression(*expression, Precedence::Assignment);
            }
            Some(data) if data.is_class_element() => {
                // methods and accessors print like class members without the newline
                self.emit_object_method(element);
            }
            _ => self.emit_expression(element, Precedence::Assignment),
        }
    }

    fn emit_object_method(&mut self, element: NodeIndex) {
        match self.data(element) {
            Some(NodeData::MethodDeclaration {
                asterisk,
                name,
                parameters,
                body,
                modifiers,
                ..
            }) => {
                self.emit_modifiers(modifiers);
                if *asterisk {
                    self.write("*");
                }
                self.emit_property_name(*name);
                self.emit_parameters(parameters);
                self.emit_function_body(*body);
            }
            Some(NodeData::GetAccessor {
                name,
                parameters,
                body,
                ..
            }) => {
                self.write("get ");
                self.emit_property_name(*name);
                self.emit_parameters(parameters);
                self.emit_function_body(*body);
            }
            Some(NodeData::SetAccessor {
                name,
                parameters,
                body,
                ..
            }) => {
                self.write("set ");
                self.emit_property_name(*name);
                self.emit_parameters(parameters);
                self.emit_function_body(*body);
            }
            _ => {}
        }
    }

    // =========================================================================
    // Types
    // =========================================================================

    fn emit_type_annotation(&mut self, type_node: NodeIndex) {
        if type_node.is_some() {
            self.write(": ");
            self.emit_type(type_node);
        }
    }

    fn emit_type_parameters(&mut self, type_parameters: &NodeList) {
        if type_parameters.is_empty() {
            return;
        }
        self.write("<");
        for (i, parameter) in type_parameters.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            if let Some(NodeData::TypeParameter {
                name,
                constraint,
                default,
            }) = self.data(parameter)
            {
                self.emit_name(*name);
                if constraint.is_some() {
                    self.write(" extends ");
                    self.emit_type(*constraint);
                }
                if default.is_some() {
                    self.write(" = ");
                    self.emit_type(*default);
                }
            }
        }
        self.write(">");
    }

    fn emit_type_arguments(&mut self, type_arguments: &NodeList) {
        if type_arguments.is_empty() {
            return;
        }
        self.write("<");
        self.emit_type_list(type_arguments, ", ");
        self.write(">");
    }

    fn emit_type_list(&mut self, types: &NodeList, separator: &str) {
        for (i, ty) in types.iter().enumerate() {
            if i > 0 {
                self.write(separator);
            }
            self.emit_type(ty);
        }
    }

    fn emit_type_members(&mut self, members: &NodeList) {
        if members.is_empty() {
            self.write("{ }");
            return;
        }
        self.write("{");
        self.newline();
        self.indent += 1;
        for member in members.iter() {
            match self.data(member) {
                Some(NodeData::PropertySignature {
                    modifiers,
                    name,
                    question,
                    type_node,
                }) => {
                    self.emit_modifiers(modifiers);
                    self.emit_property_name(*name);
                    if *question {
                        self.write("?");
                    }
                    self.emit_type_annotation(*type_node);
                }
                Some(NodeData::MethodSignature {
                    name,
                    question,
                    type_parameters,
                    parameters,
                    return_type,
                }) => {
                    self.emit_property_name(*name);
                    if *question {
                        self.write("?");
                    }
                    self.emit_signature(type_parameters, parameters, *return_type);
                }
                Some(NodeData::IndexSignature { .. }) => {
                    self.emit_class_member(member);
                    continue;
                }
                _ => {}
            }
            self.write(";");
            self.newline();
        }
        self.indent -= 1;
        self.write("}");
    }

    fn emit_type(&mut self, type_node: NodeIndex) {
        let Some(data) = self.data(type_node) else {
            return;
        };
        match data {
            NodeData::KeywordType(keyword) => self.write(keyword.text()),
            NodeData::TypeReference {
                type_name,
                type_arguments,
            } => {
                self.emit_entity_name(*type_name);
                self.emit_type_arguments(type_arguments);
            }
            NodeData::ArrayType { element_type } => {
                self.emit_type(*element_type);
                self.write("[]");
            }
            NodeData::TupleType { elements } => {
                self.write("[");
                self.emit_type_list(elements, ", ");
                self.write("]");
            }
            NodeData::UnionType { types } => self.emit_type_list(types, " | "),
            NodeData::IntersectionType { types } => self.emit_type_list(types, " & "),
            NodeData::FunctionType {
                type_parameters,
                parameters,
                return_type,
            }
            | NodeData::ConstructorType {
                type_parameters,
                parameters,
                return_type,
            } => {
                if matches!(data, NodeData::ConstructorType { .. }) {
                    self.write("new ");
                }
                self.emit_type_parameters(type_parameters);
                self.emit_parameters(parameters);
                self.write(" => ");
                self.emit_type(*return_type);
            }
            NodeData::ParenthesizedType { type_node } => {
                self.write("(");
                self.emit_type(*type_node);
                self.write(")");
            }
            NodeData::LiteralType { literal } => self.emit_expression(*literal, Precedence::Unary),
            NodeData::TypeLiteral { members } => self.emit_type_members(members),
            NodeData::TypeQuery { expr_name } => {
                self.write("typeof ");
                self.emit_entity_name(*expr_name);
            }
            NodeData::TypeOperator {
                operator,
                type_node,
            } => {
                self.write(match operator {
                    TypeOperatorKind::KeyOf => "keyof ",
                    TypeOperatorKind::Unique => "unique ",
                    TypeOperatorKind::Readonly => "readonly ",
                });
                self.emit_type(*type_node);
            }
            NodeData::IndexedAccessType {
                object_type,
                index_type,
            } => {
                self.emit_type(*object_type);
                self.write("[");
                self.emit_type(*index_type);
                self.write("]");
            }
            NodeData::ConditionalType {
                check_type,
                extends_type,
                true_type,
                false_type,
            } => {
                self.emit_type(*check_type);
                self.write(" extends ");
                self.emit_type(*extends_type);
                self.write(" ? ");
                self.emit_type(*true_type);
                self.write(" : ");
                self.emit_type(*false_type);
            }
            NodeData::TypePredicate {
                asserts,
                parameter_name,
                type_node,
            } => {
                if *asserts {
                    self.write("asserts ");
                }
                self.emit_name(*parameter_name);
                if type_node.is_some() {
                    self.write(" is ");
                    self.emit_type(*type_node);
                }
            }
            NodeData::ThisType => self.write("this"),
            NodeData::RestType { type_node } => {
                self.write("...");
                self.emit_type(*type_node);
            }
            NodeData::OptionalType { type_node } => {
                self.emit_type(*type_node);
                self.write("?");
            }
            NodeData::NamedTupleMember {
                dot_dot_dot,
                name,
                question,
                type_node,
            } => {
                if *dot_dot_dot {
                    self.write("...");
                }
                self.emit_name(*name);
                if *question {
                    self.write("?");
                }
                self.write(": ");
                self.emit_type(*type_node);
            }
            NodeData::ImportType {
                argument,
                qualifier,
                type_arguments,
            } => {
                self.write("import(");
                self.emit_type(*argument);
                self.write(")");
                if qualifier.is_some() {
                    self.write(".");
                    self.emit_entity_name(*qualifier);
                }
                self.emit_type_arguments(type_arguments);
            }
            _ => self.emit_expression(type_node, Precedence::Primary),
        }
    }
}

fn next_precedence(precedence: Precedence) -> Precedence {
    use Precedence::*;
    match precedence {
        Comma => Spread,
        Spread => Yield,
        Yield => Assignment,
        Assignment => Conditional,
        Conditional => LogicalOr,
        LogicalOr => LogicalAnd,
        LogicalAnd => BitwiseOr,
        BitwiseOr => BitwiseXor,
        BitwiseXor => BitwiseAnd,
        BitwiseAnd => Equality,
        Equality => Relational,
        Relational => Shift,
        Shift => Additive,
        Additive => Multiplicative,
        Multiplicative => Exponentiation,
        Exponentiation => Unary,
        Unary => Update,
        Update => LeftHandSide,
        LeftHandSide => Member,
        Member | Primary => Primary,
    }
}

/// Double-quoted string literal text.
pub fn quote_string(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for ch in text.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            _ => out.push(ch),
        }
    }
    out.push('"');
    out
}

#[cfg(test)]
#[path = "../tests/printer.rs"]
mod tests;
