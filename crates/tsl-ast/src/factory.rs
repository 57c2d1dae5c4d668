//! Node factory (`create_*` methods).
//!
//! Builders return the index of the new node. They do not parenthesize;
//! the printer inserts parentheses from operator precedence.

use crate::base::{NodeIndex, NodeList};
use crate::flags::{EmitFlags, Modifiers};
use crate::node::{
    BinaryOperator, ClassData, NodeData, PrefixOperator, SyntheticComment, VarKind,
};
use crate::NodeArena;

impl NodeArena {
    // =========================================================================
    // Names and literals
    // =========================================================================

    pub fn create_identifier(&mut self, text: &str) -> NodeIndex {
        self.alloc(NodeData::Identifier {
            text: text.to_string(),
            generated: false,
        })
    }

    /// Identifier invented by a transform. Generated names are never
    /// substituted.
    pub fn create_generated_identifier(&mut self, text: &str) -> NodeIndex {
        self.alloc(NodeData::Identifier {
            text: text.to_string(),
            generated: true,
        })
    }

    /// Reference to a runtime helper (`__decorate`, `__param`, ...).
    pub fn create_helper_name(&mut self, text: &str) -> NodeIndex {
        let name = self.create_generated_identifier(text);
        self.add_emit_flags(name, EmitFlags::HELPER_NAME)
    }

    pub fn create_private_identifier(&mut self, text: &str) -> NodeIndex {
        self.alloc(NodeData::PrivateIdentifier {
            text: text.to_string(),
        })
    }

    pub fn create_qualified_name(&mut self, left: NodeIndex, right: &str) -> NodeIndex {
        let right = self.create_identifier(right);
        self.alloc(NodeData::QualifiedName { left, right })
    }

    pub fn create_computed_property_name(&mut self, expression: NodeIndex) -> NodeIndex {
        self.alloc(NodeData::ComputedPropertyName { expression })
    }

    pub fn create_string_literal(&mut self, text: &str) -> NodeIndex {
        self.alloc(NodeData::StringLiteral {
            text: text.to_string(),
        })
    }

    pub fn create_numeric_literal(&mut self, text: &str) -> NodeIndex {
        self.alloc(NodeData::NumericLiteral {
            text: text.to_string(),
        })
    }

    pub fn create_true(&mut self) -> NodeIndex {
        self.alloc(NodeData::True)
    }

    pub fn create_false(&mut self) -> NodeIndex {
        self.alloc(NodeData::False)
    }

    pub fn create_null(&mut self) -> NodeIndex {
        self.alloc(NodeData::Null)
    }

    pub fn create_this(&mut self) -> NodeIndex {
        self.alloc(NodeData::This)
    }

    pub fn create_super(&mut self) -> NodeIndex {
        self.alloc(NodeData::Super)
    }

    /// `void 0`
    pub fn create_void_zero(&mut self) -> NodeIndex {
        let zero = self.create_numeric_literal("0");
        self.create_prefix(PrefixOperator::Void, zero)
    }

    // =========================================================================
    // Expressions
    // =========================================================================

    pub fn create_prefix(&mut self, operator: PrefixOperator, operand: NodeIndex) -> NodeIndex {
        self.alloc(NodeData::PrefixUnary { operator, operand })
    }

    pub fn create_typeof(&mut self, operand: NodeIndex) -> NodeIndex {
        self.create_prefix(PrefixOperator::TypeOf, operand)
    }

    pub fn create_binary(
        &mut self,
        left: NodeIndex,
        operator: BinaryOperator,
        right: NodeIndex,
    ) -> NodeIndex {
        self.alloc(NodeData::Binary {
            left,
            operator,
            right,
        })
    }

    pub fn create_assignment(&mut self, left: NodeIndex, right: NodeIndex) -> NodeIndex {
        self.create_binary(left, BinaryOperator::Assign, right)
    }

    pub fn create_logical_or(&mut self, left: NodeIndex, right: NodeIndex) -> NodeIndex {
        self.create_binary(left, BinaryOperator::Or, right)
    }

    pub fn create_logical_and(&mut self, left: NodeIndex, right: NodeIndex) -> NodeIndex {
        self.create_binary(left, BinaryOperator::And, right)
    }

    pub fn create_strict_equality(&mut self, left: NodeIndex, right: NodeIndex) -> NodeIndex {
        self.create_binary(left, BinaryOperator::StrictEq, right)
    }

    pub fn create_strict_inequality(&mut self, left: NodeIndex, right: NodeIndex) -> NodeIndex {
        self.create_binary(left, BinaryOperator::StrictNotEq, right)
    }

    /// Left-folded comma expression; a single element is returned as is.
    pub fn create_comma_chain(&mut self, expressions: &[NodeIndex]) -> NodeIndex {
        let mut iter = expressions.iter().copied();
        let Some(first) = iter.next() else {
            return NodeIndex::NONE;
        };
        iter.fold(first, |acc, next| {
            self.create_binary(acc, BinaryOperator::Comma, next)
        })
    }

    pub fn create_comma_list(&mut self, elements: Vec<NodeIndex>) -> NodeIndex {
        self.alloc(NodeData::CommaList {
            elements: NodeList::from(elements),
        })
    }

    pub fn create_conditional(
        &mut self,
        condition: NodeIndex,
        when_true: NodeIndex,
        when_false: NodeIndex,
    ) -> NodeIndex {
        self.alloc(NodeData::Conditional {
            condition,
            when_true,
            when_false,
        })
    }

    pub fn create_property_access(&mut self, expression: NodeIndex, name: &str) -> NodeIndex {
        let name = self.create_identifier(name);
        self.create_property_access_with_name(expression, name)
    }

    pub fn create_property_access_with_name(
        &mut self,
        expression: NodeIndex,
        name: NodeIndex,
    ) -> NodeIndex {
        self.alloc(NodeData::PropertyAccess {
            expression,
            name,
            question_dot: false,
        })
    }

    pub fn create_element_access(&mut self, expression: NodeIndex, argument: NodeIndex) -> NodeIndex {
        self.alloc(NodeData::ElementAccess {
            expression,
            argument,
            question_dot: false,
        })
    }

    pub fn create_call(&mut self, callee: NodeIndex, arguments: Vec<NodeIndex>) -> NodeIndex {
        self.alloc(NodeData::Call {
            expression: callee,
            type_arguments: NodeList::new(),
            arguments: NodeList::from(arguments),
            question_dot: false,
        })
    }

    pub fn create_new(&mut self, callee: NodeIndex, arguments: Vec<NodeIndex>) -> NodeIndex {
        self.alloc(NodeData::New {
            expression: callee,
            type_arguments: NodeList::new(),
            arguments: NodeList::from(arguments),
        })
    }

    pub fn create_parenthesized(&mut self, expression: NodeIndex) -> NodeIndex {
        self.alloc(NodeData::Parenthesized { expression })
    }

    pub fn create_array_literal(&mut self, elements: Vec<NodeIndex>, multi_line: bool) -> NodeIndex {
        self.alloc(NodeData::ArrayLiteral {
            elements: NodeList::from(elements),
            multi_line,
        })
    }

    pub fn create_object_literal(
        &mut self,
        properties: Vec<NodeIndex>,
        multi_line: bool,
    ) -> NodeIndex {
        self.alloc(NodeData::ObjectLiteral {
            properties: NodeList::from(properties),
            multi_line,
        })
    }

    pub fn create_property_assignment(&mut self, name: NodeIndex, initializer: NodeIndex) -> NodeIndex {
        self.alloc(NodeData::PropertyAssignment {
            name,
            question: false,
            initializer,
        })
    }

    pub fn create_spread_element(&mut self, expression: NodeIndex) -> NodeIndex {
        self.alloc(NodeData::SpreadElement { expression })
    }

    pub fn create_omitted_expression(&mut self) -> NodeIndex {
        self.alloc(NodeData::OmittedExpression)
    }

    pub fn create_partially_emitted(&mut self, expression: NodeIndex, original: NodeIndex) -> NodeIndex {
        let node = self.alloc(NodeData::PartiallyEmitted { expression });
        self.set_original(node, original);
        node
    }

    pub fn create_function_expression(
        &mut self,
        name: NodeIndex,
        parameters: Vec<NodeIndex>,
        body: NodeIndex,
    ) -> NodeIndex {
        self.alloc(NodeData::FunctionExpression {
            modifiers: Modifiers::none(),
            asterisk: false,
            name,
            type_parameters: NodeList::new(),
            parameters: NodeList::from(parameters),
            return_type: NodeIndex::NONE,
            body,
        })
    }

    pub fn create_arrow_function(&mut self, parameters: Vec<NodeIndex>, body: NodeIndex) -> NodeIndex {
        self.alloc(NodeData::ArrowFunction {
            modifiers: Modifiers::none(),
            type_parameters: NodeList::new(),
            parameters: NodeList::from(parameters),
            return_type: NodeIndex::NONE,
            body,
        })
    }

    pub fn create_class_expression(&mut self, class: ClassData) -> NodeIndex {
        self.alloc(NodeData::ClassExpression(class))
    }

    // =========================================================================
    // Statements
    // =========================================================================

    pub fn create_expression_statement(&mut self, expression: NodeIndex) -> NodeIndex {
        self.alloc(NodeData::ExpressionStatement { expression })
    }

    pub fn create_block(&mut self, statements: Vec<NodeIndex>, multi_line: bool) -> NodeIndex {
        self.alloc(NodeData::Block {
            statements: NodeList::from(statements),
            multi_line,
        })
    }

    pub fn create_return(&mut self, expression: NodeIndex) -> NodeIndex {
        self.alloc(NodeData::Return { expression })
    }

    pub fn create_variable_declaration(&mut self, name: NodeIndex, initializer: NodeIndex) -> NodeIndex {
        self.alloc(NodeData::VariableDeclaration {
            name,
            exclamation: false,
            type_node: NodeIndex::NONE,
            initializer,
        })
    }

    pub fn create_variable_declaration_list(
        &mut self,
        kind: VarKind,
        declarations: Vec<NodeIndex>,
    ) -> NodeIndex {
        self.alloc(NodeData::VariableDeclarationList {
            kind,
            declarations: NodeList::from(declarations),
        })
    }

    pub fn create_variable_statement(
        &mut self,
        modifiers: Modifiers,
        kind: VarKind,
        declarations: Vec<NodeIndex>,
    ) -> NodeIndex {
        let declaration_list = self.create_variable_declaration_list(kind, declarations);
        self.alloc(NodeData::VariableStatement {
            modifiers,
            declaration_list,
        })
    }

    /// `<kind> name = initializer;`
    pub fn create_simple_variable_statement(
        &mut self,
        kind: VarKind,
        name: NodeIndex,
        initializer: NodeIndex,
    ) -> NodeIndex {
        let declaration = self.create_variable_declaration(name, initializer);
        self.create_variable_statement(Modifiers::none(), kind, vec![declaration])
    }

    pub fn create_parameter(&mut self, name: NodeIndex) -> NodeIndex {
        self.alloc(NodeData::Parameter {
            decorators: NodeList::new(),
            modifiers: Modifiers::none(),
            dot_dot_dot: false,
            name,
            question: false,
            type_node: NodeIndex::NONE,
            initializer: NodeIndex::NONE,
        })
    }

    pub fn create_property_declaration(&mut self, modifiers: Modifiers, name: NodeIndex) -> NodeIndex {
        self.alloc(NodeData::PropertyDeclaration {
            decorators: NodeList::new(),
            modifiers,
            name,
            question: false,
            exclamation: false,
            type_node: NodeIndex::NONE,
            initializer: NodeIndex::NONE,
        })
    }

    /// `import "specifier";`
    pub fn create_side_effect_import(&mut self, module_specifier: NodeIndex) -> NodeIndex {
        self.alloc(NodeData::ImportDeclaration {
            modifiers: Modifiers::none(),
            import_clause: NodeIndex::NONE,
            module_specifier,
        })
    }

    /// `export default expression;`
    pub fn create_export_default(&mut self, expression: NodeIndex) -> NodeIndex {
        self.alloc(NodeData::ExportAssignment {
            modifiers: Modifiers::none(),
            is_export_equals: false,
            expression,
        })
    }

    /// `export { name };`
    pub fn create_external_module_export(&mut self, name: NodeIndex) -> NodeIndex {
        let specifier = self.alloc(NodeData::ExportSpecifier {
            is_type_only: false,
            property_name: NodeIndex::NONE,
            name,
        });
        let export_clause = self.alloc(NodeData::NamedExports {
            elements: NodeList::from(vec![specifier]),
        });
        self.alloc(NodeData::ExportDeclaration {
            modifiers: Modifiers::none(),
            is_type_only: false,
            export_clause,
            module_specifier: NodeIndex::NONE,
        })
    }

    /// `"use strict";`
    pub fn create_use_strict_prologue(&mut self) -> NodeIndex {
        let literal = self.create_string_literal("use strict");
        let statement = self.create_expression_statement(literal);
        self.add_emit_flags(statement, EmitFlags::CUSTOM_PROLOGUE)
    }

    // =========================================================================
    // Synthetic markers
    // =========================================================================

    /// Placeholder that keeps the comments of a removed statement.
    pub fn create_not_emitted_statement(&mut self, original: NodeIndex) -> NodeIndex {
        let node = self.alloc(NodeData::NotEmittedStatement);
        self.set_original(node, original);
        node
    }

    pub fn create_end_of_declaration_marker(&mut self, original: NodeIndex) -> NodeIndex {
        let node = self.alloc(NodeData::EndOfDeclarationMarker);
        self.set_original(node, original);
        self.clear_comments(node);
        node
    }

    /// Marker left where a merged declaration's leading `var` would go.
    pub fn create_merge_declaration_marker(&mut self, original: NodeIndex) -> NodeIndex {
        let node = self.alloc(NodeData::MergeDeclarationMarker);
        self.set_original(node, original);
        self.clear_comments(node);
        self.add_emit_flags(
            node,
            EmitFlags::NO_COMMENTS | EmitFlags::HAS_END_OF_DECLARATION_MARKER,
        )
    }

    /// Attach `/* text */` after `node`.
    pub fn add_synthetic_trailing_block_comment(&mut self, node: NodeIndex, text: &str) {
        self.add_trailing_comment(node, SyntheticComment::multi_line(text));
    }
}
