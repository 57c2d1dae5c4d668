//! Ordered child access.
//!
//! One field table drives both the read-only walk ([`NodeData::for_each_child`])
//! and the rewriting walk ([`NodeData::for_each_child_slot_mut`]) used by
//! transforms to rebuild a node from visited children.

use crate::base::{NodeIndex, NodeList};
use crate::flags::Modifiers;
use crate::node::{ClassData, NodeData};

/// A child field, borrowed.
pub enum Child<'a> {
    Node(&'a NodeIndex),
    List(&'a NodeList),
    Modifiers(&'a Modifiers),
}

/// A child field, mutably borrowed.
pub enum ChildMut<'a> {
    Node(&'a mut NodeIndex),
    List(&'a mut NodeList),
    Modifiers(&'a mut Modifiers),
}

/// Field table. Matching through `&` or `&mut` selects the borrow kind;
/// `$slot` is `Child` or `ChildMut`.
macro_rules! visit_child_slots {
    ($data:expr, $slot:ident, $f:ident) => {{
        use NodeData::*;
        match $data {
            SourceFile { statements, .. } => $f($slot::List(statements)),
            QualifiedName { left, right } => {
                $f($slot::Node(left));
                $f($slot::Node(right));
            }
            ComputedPropertyName { expression }
            | Parenthesized { expression }
            | Await { expression }
            | Yield { expression, .. }
            | NonNull { expression }
            | SpreadElement { expression }
            | SpreadAssignment { expression }
            | PartiallyEmitted { expression }
            | ExpressionStatement { expression }
            | Return { expression }
            | Throw { expression }
            | ExternalModuleReference { expression }
            | Decorator { expression }
            | TemplateSpan { expression, .. } => $f($slot::Node(expression)),
            TemplateExpression { spans, .. } => $f($slot::List(spans)),
            ArrayLiteral { elements, .. }
            | CommaList { elements }
            | NamedImports { elements }
            | NamedExports { elements }
            | ObjectBindingPattern { elements }
            | ArrayBindingPattern { elements }
            | TupleType { elements } => $f($slot::List(elements)),
            ObjectLiteral { properties, .. } => $f($slot::List(properties)),
            PropertyAssignment {
                name, initializer, ..
            } => {
                $f($slot::Node(name));
                $f($slot::Node(initializer));
            }
            ShorthandPropertyAssignment {
                name,
                object_assignment_initializer,
            } => {
                $f($slot::Node(name));
                $f($slot::Node(object_assignment_initializer));
            }
            PropertyAccess {
                expression, name, ..
            } => {
                $f($slot::Node(expression));
                $f($slot::Node(name));
            }
            ElementAccess {
                expression,
                argument,
                ..
            } => {
                $f($slot::Node(expression));
                $f($slot::Node(argument));
            }
            Call {
                expression,
                type_arguments,
                arguments,
                ..
            }
            | New {
                expression,
                type_arguments,
                arguments,
            } => {
                $f($slot::Node(expression));
                $f($slot::List(type_arguments));
                $f($slot::List(arguments));
            }
            TaggedTemplate {
                tag,
                type_arguments,
                template,
            } => {
                $f($slot::Node(tag));
                $f($slot::List(type_arguments));
                $f($slot::Node(template));
            }
            FunctionExpression {
                modifiers,
                name,
                type_parameters,
                parameters,
                return_type,
                body,
                ..
            }
            | FunctionDeclaration {
                modifiers,
                name,
                type_parameters,
                parameters,
                return_type,
                body,
                ..
            } => {
                $f($slot::Modifiers(modifiers));
                $f($slot::Node(name));
                $f($slot::List(type_parameters));
                $f($slot::List(parameters));
                $f($slot::Node(return_type));
                $f($slot::Node(body));
            }
            ArrowFunction {
                modifiers,
                type_parameters,
                parameters,
                return_type,
                body,
            } => {
                $f($slot::Modifiers(modifiers));
                $f($slot::List(type_parameters));
                $f($slot::List(parameters));
                $f($slot::Node(return_type));
                $f($slot::Node(body));
            }
            PrefixUnary { operand, .. } | PostfixUnary { operand, .. } => {
                $f($slot::Node(operand))
            }
            Binary { left, right, .. } => {
                $f($slot::Node(left));
                $f($slot::Node(right));
            }
            Conditional {
                condition,
                when_true,
                when_false,
            } => {
                $f($slot::Node(condition));
                $f($slot::Node(when_true));
                $f($slot::Node(when_false));
            }
            ClassExpression(ClassData {
                decorators,
                modifiers,
                name,
                type_parameters,
                heritage_clauses,
                members,
            })
            | ClassDeclaration(ClassData {
                decorators,
                modifiers,
                name,
                type_parameters,
                heritage_clauses,
                members,
            }) => {
                $f($slot::List(decorators));
                $f($slot::Modifiers(modifiers));
                $f($slot::Node(name));
                $f($slot::List(type_parameters));
                $f($slot::List(heritage_clauses));
                $f($slot::List(members));
            }
            As {
                expression,
                type_node,
            }
            | Satisfies {
                expression,
                type_node,
            } => {
                $f($slot::Node(expression));
                $f($slot::Node(type_node));
            }
            TypeAssertion {
                type_node,
                expression,
            } => {
                $f($slot::Node(type_node));
                $f($slot::Node(expression));
            }
            ExpressionWithTypeArguments {
                expression,
                type_arguments,
            } => {
                $f($slot::Node(expression));
                $f($slot::List(type_arguments));
            }
            VariableStatement {
                modifiers,
                declaration_list,
            } => {
                $f($slot::Modifiers(modifiers));
                $f($slot::Node(declaration_list));
            }
            VariableDeclarationList { declarations, .. } => $f($slot::List(declarations)),
            VariableDeclaration {
                name,
                type_node,
                initializer,
                ..
            } => {
                $f($slot::Node(name));
                $f($slot::Node(type_node));
                $f($slot::Node(initializer));
            }
            Block { statements, .. }
            | ModuleBlock { statements }
            | DefaultClause { statements } => $f($slot::List(statements)),
            If {
                expression,
                then_statement,
                else_statement,
            } => {
                $f($slot::Node(expression));
                $f($slot::Node(then_statement));
                $f($slot::Node(else_statement));
            }
            Do {
                statement,
                expression,
            } => {
                $f($slot::Node(statement));
                $f($slot::Node(expression));
            }
            While {
                expression,
                statement,
            } => {
                $f($slot::Node(expression));
                $f($slot::Node(statement));
            }
            For {
                initializer,
                condition,
                incrementor,
                statement,
            } => {
                $f($slot::Node(initializer));
                $f($slot::Node(condition));
                $f($slot::Node(incrementor));
                $f($slot::Node(statement));
            }
            ForIn {
                initializer,
                expression,
                statement,
            }
            | ForOf {
                initializer,
                expression,
                statement,
                ..
            } => {
                $f($slot::Node(initializer));
                $f($slot::Node(expression));
                $f($slot::Node(statement));
            }
            Continue { label } | Break { label } => $f($slot::Node(label)),
            Switch {
                expression,
                case_block,
            } => {
                $f($slot::Node(expression));
                $f($slot::Node(case_block));
            }
            CaseBlock { clauses } => $f($slot::List(clauses)),
            CaseClause {
                expression,
                statements,
            } => {
                $f($slot::Node(expression));
                $f($slot::List(statements));
            }
            Labeled { label, statement } => {
                $f($slot::Node(label));
                $f($slot::Node(statement));
            }
            Try {
                try_block,
                catch_clause,
                finally_block,
            } => {
                $f($slot::Node(try_block));
                $f($slot::Node(catch_clause));
                $f($slot::Node(finally_block));
            }
            CatchClause {
                variable_declaration,
                block,
            } => {
                $f($slot::Node(variable_declaration));
                $f($slot::Node(block));
            }
            InterfaceDeclaration {
                modifiers,
                name,
                type_parameters,
                heritage_clauses,
                members,
            } => {
                $f($slot::Modifiers(modifiers));
                $f($slot::Node(name));
                $f($slot::List(type_parameters));
                $f($slot::List(heritage_clauses));
                $f($slot::List(members));
            }
            TypeAliasDeclaration {
                modifiers,
                name,
                type_parameters,
                type_node,
            } => {
                $f($slot::Modifiers(modifiers));
                $f($slot::Node(name));
                $f($slot::List(type_parameters));
                $f($slot::Node(type_node));
            }
            EnumDeclaration {
                modifiers,
                name,
                members,
            } => {
                $f($slot::Modifiers(modifiers));
                $f($slot::Node(name));
                $f($slot::List(members));
            }
            EnumMember { name, initializer } => {
                $f($slot::Node(name));
                $f($slot::Node(initializer));
            }
            ModuleDeclaration {
                modifiers,
                name,
                body,
            } => {
                $f($slot::Modifiers(modifiers));
                $f($slot::Node(name));
                $f($slot::Node(body));
            }
            ImportEquals {
                modifiers,
                name,
                module_reference,
                ..
            } => {
                $f($slot::Modifiers(modifiers));
                $f($slot::Node(name));
                $f($slot::Node(module_reference));
            }
            ImportDeclaration {
                modifiers,
                import_clause,
                module_specifier,
            } => {
                $f($slot::Modifiers(modifiers));
                $f($slot::Node(import_clause));
                $f($slot::Node(module_specifier));
            }
            ImportClause {
                name,
                named_bindings,
                ..
            } => {
                $f($slot::Node(name));
                $f($slot::Node(named_bindings));
            }
            NamespaceImport { name } | NamespaceExport { name } => $f($slot::Node(name)),
            ImportSpecifier {
                property_name,
                name,
                ..
            }
            | ExportSpecifier {
                property_name,
                name,
                ..
            } => {
                $f($slot::Node(property_name));
                $f($slot::Node(name));
            }
            ExportAssignment {
                modifiers,
                expression,
                ..
            } => {
                $f($slot::Modifiers(modifiers));
                $f($slot::Node(expression));
            }
            ExportDeclaration {
                modifiers,
                export_clause,
                module_specifier,
                ..
            } => {
                $f($slot::Modifiers(modifiers));
                $f($slot::Node(export_clause));
                $f($slot::Node(module_specifier));
            }
            Constructor {
                modifiers,
                parameters,
                body,
            } => {
                $f($slot::Modifiers(modifiers));
                $f($slot::List(parameters));
                $f($slot::Node(body));
            }
            PropertyDeclaration {
                decorators,
                modifiers,
                name,
                type_node,
                initializer,
                ..
            } => {
                $f($slot::List(decorators));
                $f($slot::Modifiers(modifiers));
                $f($slot::Node(name));
                $f($slot::Node(type_node));
                $f($slot::Node(initializer));
            }
            MethodDeclaration {
                decorators,
                modifiers,
                name,
                type_parameters,
                parameters,
                return_type,
                body,
                ..
            } => {
                $f($slot::List(decorators));
                $f($slot::Modifiers(modifiers));
                $f($slot::Node(name));
                $f($slot::List(type_parameters));
                $f($slot::List(parameters));
                $f($slot::Node(return_type));
                $f($slot::Node(body));
            }
            GetAccessor {
                decorators,
                modifiers,
                name,
                parameters,
                return_type,
                body,
            } => {
                $f($slot::List(decorators));
                $f($slot::Modifiers(modifiers));
                $f($slot::Node(name));
                $f($slot::List(parameters));
                $f($slot::Node(return_type));
                $f($slot::Node(body));
            }
            SetAccessor {
                decorators,
                modifiers,
                name,
                parameters,
                body,
            } => {
                $f($slot::List(decorators));
                $f($slot::Modifiers(modifiers));
                $f($slot::Node(name));
                $f($slot::List(parameters));
                $f($slot::Node(body));
            }
            IndexSignature {
                modifiers,
                parameters,
                type_node,
            } => {
                $f($slot::Modifiers(modifiers));
                $f($slot::List(parameters));
                $f($slot::Node(type_node));
            }
            ClassStaticBlock { body } => $f($slot::Node(body)),
            PropertySignature {
                modifiers,
                name,
                type_node,
                ..
            } => {
                $f($slot::Modifiers(modifiers));
                $f($slot::Node(name));
                $f($slot::Node(type_node));
            }
            MethodSignature {
                name,
                type_parameters,
                parameters,
                return_type,
                ..
            } => {
                $f($slot::Node(name));
                $f($slot::List(type_parameters));
                $f($slot::List(parameters));
                $f($slot::Node(return_type));
            }
            Parameter {
                decorators,
                modifiers,
                name,
                type_node,
                initializer,
                ..
            } => {
                $f($slot::List(decorators));
                $f($slot::Modifiers(modifiers));
                $f($slot::Node(name));
                $f($slot::Node(type_node));
                $f($slot::Node(initializer));
            }
            HeritageClause { types, .. } => $f($slot::List(types)),
            TypeParameter {
                name,
                constraint,
                default,
            } => {
                $f($slot::Node(name));
                $f($slot::Node(constraint));
                $f($slot::Node(default));
            }
            BindingElement {
                property_name,
                name,
                initializer,
                ..
            } => {
                $f($slot::Node(property_name));
                $f($slot::Node(name));
                $f($slot::Node(initializer));
            }
            TypeReference {
                type_name,
                type_arguments,
            } => {
                $f($slot::Node(type_name));
                $f($slot::List(type_arguments));
            }
            ArrayType { element_type } => $f($slot::Node(element_type)),
            UnionType { types } | IntersectionType { types } => $f($slot::List(types)),
            FunctionType {
                type_parameters,
                parameters,
                return_type,
            }
            | ConstructorType {
                type_parameters,
                parameters,
                return_type,
            } => {
                $f($slot::List(type_parameters));
                $f($slot::List(parameters));
                $f($slot::Node(return_type));
            }
            ParenthesizedType { type_node }
            | RestType { type_node }
            | OptionalType { type_node }
            | TypeOperator { type_node, .. } => $f($slot::Node(type_node)),
            LiteralType { literal } => $f($slot::Node(literal)),
            TypeLiteral { members } => $f($slot::List(members)),
            TypeQuery { expr_name } => $f($slot::Node(expr_name)),
            IndexedAccessType {
                object_type,
                index_type,
            } => {
                $f($slot::Node(object_type));
                $f($slot::Node(index_type));
            }
            ConditionalType {
                check_type,
                extends_type,
                true_type,
                false_type,
            } => {
                $f($slot::Node(check_type));
                $f($slot::Node(extends_type));
                $f($slot::Node(true_type));
                $f($slot::Node(false_type));
            }
            TypePredicate {
                parameter_name,
                type_node,
                ..
            } => {
                $f($slot::Node(parameter_name));
                $f($slot::Node(type_node));
            }
            NamedTupleMember {
                name, type_node, ..
            } => {
                $f($slot::Node(name));
                $f($slot::Node(type_node));
            }
            ImportType {
                argument,
                qualifier,
                type_arguments,
            } => {
                $f($slot::Node(argument));
                $f($slot::Node(qualifier));
                $f($slot::List(type_arguments));
            }
            Identifier { .. }
            | PrivateIdentifier { .. }
            | StringLiteral { .. }
            | NumericLiteral { .. }
            | BigIntLiteral { .. }
            | RegularExpressionLiteral { .. }
            | NoSubstitutionTemplateLiteral { .. }
            | True
            | False
            | Null
            | This
            | Super
            | OmittedExpression
            | Empty
            | Debugger
            | SemicolonClassElement
            | KeywordType(_)
            | ThisType
            | NotEmittedStatement
            | EndOfDeclarationMarker
            | MergeDeclarationMarker => {}
        }
    }};
}

impl NodeData {
    /// Visit every child field in source order, including absent ones.
    pub fn for_each_child_slot<'a>(&'a self, mut f: impl FnMut(Child<'a>)) {
        visit_child_slots!(self, Child, f)
    }

    /// Mutable counterpart of [`NodeData::for_each_child_slot`].
    pub fn for_each_child_slot_mut<'a>(&'a mut self, mut f: impl FnMut(ChildMut<'a>)) {
        visit_child_slots!(self, ChildMut, f)
    }

    /// Visit present child nodes in source order.
    pub fn for_each_child(&self, mut f: impl FnMut(NodeIndex)) {
        self.for_each_child_slot(|slot| match slot {
            Child::Node(index) => {
                if index.is_some() {
                    f(*index);
                }
            }
            Child::List(list) => list.iter().for_each(&mut f),
            Child::Modifiers(_) => {}
        });
    }

    /// Present child nodes in source order.
    pub fn children(&self) -> Vec<NodeIndex> {
        let mut out = Vec::new();
        self.for_each_child(|child| out.push(child));
        out
    }
}
