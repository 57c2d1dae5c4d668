//! Node storage and the closed set of syntax kinds.
//!
//! Every node is a [`Node`] header (flags, `original` link, source range,
//! synthetic comments) around a [`NodeData`] payload. Children are referenced
//! by [`NodeIndex`]; optional children use `NodeIndex::NONE` and absent lists
//! are empty.

use crate::base::{NodeIndex, NodeList};
use crate::flags::{EmitFlags, Modifiers, NodeFlags};

/// Comment text attached to a node outside of any source range.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SyntheticComment {
    pub kind: CommentKind,
    /// Text between the delimiters (`//` or `/*` and `*/`).
    pub text: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommentKind {
    SingleLine,
    MultiLine,
}

impl SyntheticComment {
    pub fn multi_line(text: impl Into<String>) -> SyntheticComment {
        SyntheticComment {
            kind: CommentKind::MultiLine,
            text: text.into(),
        }
    }

    pub fn single_line(text: impl Into<String>) -> SyntheticComment {
        SyntheticComment {
            kind: CommentKind::SingleLine,
            text: text.into(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct NodeComments {
    pub leading: Vec<SyntheticComment>,
    pub trailing: Vec<SyntheticComment>,
}

impl NodeComments {
    pub fn is_empty(&self) -> bool {
        self.leading.is_empty() && self.trailing.is_empty()
    }
}

/// A node in the arena.
#[derive(Clone, Debug)]
pub struct Node {
    pub data: NodeData,
    pub flags: NodeFlags,
    pub emit_flags: EmitFlags,
    /// Node this one was produced from, or `NONE` for parse-tree nodes.
    pub original: NodeIndex,
    pub pos: u32,
    pub end: u32,
    pub comments: NodeComments,
}

impl Node {
    pub fn new(data: NodeData) -> Node {
        Node {
            data,
            flags: NodeFlags::empty(),
            emit_flags: EmitFlags::empty(),
            original: NodeIndex::NONE,
            pos: 0,
            end: 0,
            comments: NodeComments::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VarKind {
    Var,
    Let,
    Const,
}

impl VarKind {
    pub fn text(self) -> &'static str {
        match self {
            VarKind::Var => "var",
            VarKind::Let => "let",
            VarKind::Const => "const",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HeritageToken {
    Extends,
    Implements,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TypeKeyword {
    Any,
    Unknown,
    Number,
    BigInt,
    String,
    Boolean,
    Symbol,
    Object,
    Void,
    Undefined,
    Never,
}

impl TypeKeyword {
    pub fn text(self) -> &'static str {
        match self {
            TypeKeyword::Any => "any",
            TypeKeyword::Unknown => "unknown",
            TypeKeyword::Number => "number",
            TypeKeyword::BigInt => "bigint",
            TypeKeyword::String => "string",
            TypeKeyword::Boolean => "boolean",
            TypeKeyword::Symbol => "symbol",
            TypeKeyword::Object => "object",
            TypeKeyword::Void => "void",
            TypeKeyword::Undefined => "undefined",
            TypeKeyword::Never => "never",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TypeOperatorKind {
    KeyOf,
    Unique,
    Readonly,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PrefixOperator {
    Plus,
    Minus,
    Tilde,
    Not,
    Increment,
    Decrement,
    TypeOf,
    Void,
    Delete,
}

impl PrefixOperator {
    pub fn text(self) -> &'static str {
        match self {
            PrefixOperator::Plus => "+",
            PrefixOperator::Minus => "-",
            PrefixOperator::Tilde => "~",
            PrefixOperator::Not => "!",
            PrefixOperator::Increment => "++",
            PrefixOperator::Decrement => "--",
            PrefixOperator::TypeOf => "typeof",
            PrefixOperator::Void => "void",
            PrefixOperator::Delete => "delete",
        }
    }

    /// Keyword operators are separated from their operand by a space.
    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            PrefixOperator::TypeOf | PrefixOperator::Void | PrefixOperator::Delete
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PostfixOperator {
    Increment,
    Decrement,
}

/// Operator precedence, lowest first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Precedence {
    Comma,
    Spread,
    Yield,
    Assignment,
    Conditional,
    LogicalOr,
    LogicalAnd,
    BitwiseOr,
    BitwiseXor,
    BitwiseAnd,
    Equality,
    Relational,
    Shift,
    Additive,
    Multiplicative,
    Exponentiation,
    Unary,
    Update,
    LeftHandSide,
    Member,
    Primary,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Comma,
    Assign,
    AddAssign,
    SubAssign,
    MulAssign,
    DivAssign,
    ModAssign,
    ExpAssign,
    ShlAssign,
    ShrAssign,
    UShrAssign,
    BitAndAssign,
    BitOrAssign,
    BitXorAssign,
    AndAssign,
    OrAssign,
    NullishAssign,
    Or,
    And,
    Nullish,
    BitOr,
    BitXor,
    BitAnd,
    Eq,
    NotEq,
    StrictEq,
    StrictNotEq,
    Lt,
    Gt,
    LtEq,
    GtEq,
    InstanceOf,
    In,
    Shl,
    Shr,
    UShr,
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Exp,
}

impl BinaryOperator {
    pub fn text(self) -> &'static str {
        use BinaryOperator::*;
        match self {
            Comma => ",",
            Assign => "=",
            AddAssign => "+=",
            SubAssign => "-=",
            MulAssign => "*=",
            DivAssign => "/=",
            ModAssign => "%=",
            ExpAssign => "**=",
            ShlAssign => "<<=",
            ShrAssign => ">>=",
            UShrAssign => ">>>=",
            BitAndAssign => "&=",
            BitOrAssign => "|=",
            BitXorAssign => "^=",
            AndAssign => "&&=",
            OrAssign => "||=",
            NullishAssign => "??=",
            Or => "||",
            And => "&&",
            Nullish => "??",
            BitOr => "|",
            BitXor => "^",
            BitAnd => "&",
            Eq => "==",
            NotEq => "!=",
            StrictEq => "===",
            StrictNotEq => "!==",
            Lt => "<",
            Gt => ">",
            LtEq => "<=",
            GtEq => ">=",
            InstanceOf => "instanceof",
            In => "in",
            Shl => "<<",
            Shr => ">>",
            UShr => ">>>",
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Mod => "%",
            Exp => "**",
        }
    }

    pub fn is_assignment(self) -> bool {
        use BinaryOperator::*;
        matches!(
            self,
            Assign
                | AddAssign
                | SubAssign
                | MulAssign
                | DivAssign
                | ModAssign
                | ExpAssign
                | ShlAssign
                | ShrAssign
                | UShrAssign
                | BitAndAssign
                | BitOrAssign
                | BitXorAssign
                | AndAssign
                | OrAssign
                | NullishAssign
        )
    }

    pub fn precedence(self) -> Precedence {
        use BinaryOperator::*;
        match self {
            Comma => Precedence::Comma,
            _ if self.is_assignment() => Precedence::Assignment,
            Or | Nullish => Precedence::LogicalOr,
            And => Precedence::LogicalAnd,
            BitOr => Precedence::BitwiseOr,
            BitXor => Precedence::BitwiseXor,
            BitAnd => Precedence::BitwiseAnd,
            Eq | NotEq | StrictEq | StrictNotEq => Precedence::Equality,
            Lt | Gt | LtEq | GtEq | InstanceOf | In => Precedence::Relational,
            Shl | Shr | UShr => Precedence::Shift,
            Add | Sub => Precedence::Additive,
            Mul | Div | Mod => Precedence::Multiplicative,
            Exp => Precedence::Exponentiation,
            _ => Precedence::Assignment,
        }
    }

    pub fn is_right_associative(self) -> bool {
        self.is_assignment() || self == BinaryOperator::Exp
    }
}

/// Shared payload of class declarations and class expressions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassData {
    pub decorators: NodeList,
    pub modifiers: Modifiers,
    pub name: NodeIndex,
    pub type_parameters: NodeList,
    pub heritage_clauses: NodeList,
    pub members: NodeList,
}

/// Payload of every node kind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NodeData {
    // =========================================================================
    // Source file and names
    // =========================================================================
    SourceFile {
        file_name: String,
        statements: NodeList,
        is_external_module: bool,
        is_declaration_file: bool,
    },
    Identifier {
        text: String,
        /// Name made up during lowering; never substituted.
        generated: bool,
    },
    PrivateIdentifier {
        text: String,
    },
    QualifiedName {
        left: NodeIndex,
        right: NodeIndex,
    },
    ComputedPropertyName {
        expression: NodeIndex,
    },

    // =========================================================================
    // Literals and keywords
    // =========================================================================
    StringLiteral {
        text: String,
    },
    NumericLiteral {
        text: String,
    },
    BigIntLiteral {
        text: String,
    },
    RegularExpressionLiteral {
        text: String,
    },
    NoSubstitutionTemplateLiteral {
        text: String,
    },
    TemplateExpression {
        head: String,
        spans: NodeList,
    },
    TemplateSpan {
        expression: NodeIndex,
        literal: String,
        is_tail: bool,
    },
    True,
    False,
    Null,
    This,
    Super,

    // =========================================================================
    // Expressions
    // =========================================================================
    ArrayLiteral {
        elements: NodeList,
        multi_line: bool,
    },
    ObjectLiteral {
        properties: NodeList,
        multi_line: bool,
    },
    PropertyAssignment {
        name: NodeIndex,
        question: bool,
        initializer: NodeIndex,
    },
    ShorthandPropertyAssignment {
        name: NodeIndex,
        object_assignment_initializer: NodeIndex,
    },
    SpreadAssignment {
        expression: NodeIndex,
    },
    PropertyAccess {
        expression: NodeIndex,
        name: NodeIndex,
        question_dot: bool,
    },
    ElementAccess {
        expression: NodeIndex,
        argument: NodeIndex,
        question_dot: bool,
    },
    Call {
        expression: NodeIndex,
        type_arguments: NodeList,
        arguments: NodeList,
        question_dot: bool,
    },
    New {
        expression: NodeIndex,
        type_arguments: NodeList,
        arguments: NodeList,
    },
    TaggedTemplate {
        tag: NodeIndex,
        type_arguments: NodeList,
        template: NodeIndex,
    },
    Parenthesized {
        expression: NodeIndex,
    },
    FunctionExpression {
        modifiers: Modifiers,
        asterisk: bool,
        name: NodeIndex,
        type_parameters: NodeList,
        parameters: NodeList,
        return_type: NodeIndex,
        body: NodeIndex,
    },
    ArrowFunction {
        modifiers: Modifiers,
        type_parameters: NodeList,
        parameters: NodeList,
        return_type: NodeIndex,
        /// A `Block` or a concise expression body.
        body: NodeIndex,
    },
    PrefixUnary {
        operator: PrefixOperator,
        operand: NodeIndex,
    },
    PostfixUnary {
        operand: NodeIndex,
        operator: PostfixOperator,
    },
    Await {
        expression: NodeIndex,
    },
    Yield {
        asterisk: bool,
        expression: NodeIndex,
    },
    Binary {
        left: NodeIndex,
        operator: BinaryOperator,
        right: NodeIndex,
    },
    Conditional {
        condition: NodeIndex,
        when_true: NodeIndex,
        when_false: NodeIndex,
    },
    ClassExpression(ClassData),
    As {
        expression: NodeIndex,
        type_node: NodeIndex,
    },
    Satisfies {
        expression: NodeIndex,
        type_node: NodeIndex,
    },
    TypeAssertion {
        type_node: NodeIndex,
        expression: NodeIndex,
    },
    NonNull {
        expression: NodeIndex,
    },
    SpreadElement {
        expression: NodeIndex,
    },
    OmittedExpression,
    ExpressionWithTypeArguments {
        expression: NodeIndex,
        type_arguments: NodeList,
    },
    /// Expression whose surrounding syntax was removed; prints its operand.
    PartiallyEmitted {
        expression: NodeIndex,
    },
    /// Comma-joined expressions printed without parentheses.
    CommaList {
        elements: NodeList,
    },

    // =========================================================================
    // Statements
    // =========================================================================
    VariableStatement {
        modifiers: Modifiers,
        declaration_list: NodeIndex,
    },
    VariableDeclarationList {
        kind: VarKind,
        declarations: NodeList,
    },
    VariableDeclaration {
        name: NodeIndex,
        exclamation: bool,
        type_node: NodeIndex,
        initializer: NodeIndex,
    },
    ExpressionStatement {
        expression: NodeIndex,
    },
    Block {
        statements: NodeList,
        multi_line: bool,
    },
    Empty,
    If {
        expression: NodeIndex,
        then_statement: NodeIndex,
        else_statement: NodeIndex,
    },
    Do {
        statement: NodeIndex,
        expression: NodeIndex,
    },
    While {
        expression: NodeIndex,
        statement: NodeIndex,
    },
    For {
        initializer: NodeIndex,
        condition: NodeIndex,
        incrementor: NodeIndex,
        statement: NodeIndex,
    },
    ForIn {
        initializer: NodeIndex,
        expression: NodeIndex,
        statement: NodeIndex,
    },
    ForOf {
        is_await: bool,
        initializer: NodeIndex,
        expression: NodeIndex,
        statement: NodeIndex,
    },
    Continue {
        label: NodeIndex,
    },
    Break {
        label: NodeIndex,
    },
    Return {
        expression: NodeIndex,
    },
    Switch {
        expression: NodeIndex,
        case_block: NodeIndex,
    },
    CaseBlock {
        clauses: NodeList,
    },
    CaseClause {
        expression: NodeIndex,
        statements: NodeList,
    },
    DefaultClause {
        statements: NodeList,
    },
    Labeled {
        label: NodeIndex,
        statement: NodeIndex,
    },
    Throw {
        expression: NodeIndex,
    },
    Try {
        try_block: NodeIndex,
        catch_clause: NodeIndex,
        finally_block: NodeIndex,
    },
    CatchClause {
        variable_declaration: NodeIndex,
        block: NodeIndex,
    },
    Debugger,

    // =========================================================================
    // Declarations
    // =========================================================================
    FunctionDeclaration {
        modifiers: Modifiers,
        asterisk: bool,
        name: NodeIndex,
        type_parameters: NodeList,
        parameters: NodeList,
        return_type: NodeIndex,
        /// `NONE` for overload signatures and ambient declarations.
        body: NodeIndex,
    },
    ClassDeclaration(ClassData),
    InterfaceDeclaration {
        modifiers: Modifiers,
        name: NodeIndex,
        type_parameters: NodeList,
        heritage_clauses: NodeList,
        members: NodeList,
    },
    TypeAliasDeclaration {
        modifiers: Modifiers,
        name: NodeIndex,
        type_parameters: NodeList,
        type_node: NodeIndex,
    },
    EnumDeclaration {
        modifiers: Modifiers,
        name: NodeIndex,
        members: NodeList,
    },
    EnumMember {
        name: NodeIndex,
        initializer: NodeIndex,
    },
    ModuleDeclaration {
        modifiers: Modifiers,
        name: NodeIndex,
        /// `ModuleBlock`, a nested `ModuleDeclaration` for dotted names, or `NONE`.
        body: NodeIndex,
    },
    ModuleBlock {
        statements: NodeList,
    },
    ImportEquals {
        modifiers: Modifiers,
        is_type_only: bool,
        name: NodeIndex,
        module_reference: NodeIndex,
    },
    ExternalModuleReference {
        expression: NodeIndex,
    },
    ImportDeclaration {
        modifiers: Modifiers,
        import_clause: NodeIndex,
        module_specifier: NodeIndex,
    },
    ImportClause {
        is_type_only: bool,
        name: NodeIndex,
        named_bindings: NodeIndex,
    },
    NamespaceImport {
        name: NodeIndex,
    },
    NamedImports {
        elements: NodeList,
    },
    ImportSpecifier {
        is_type_only: bool,
        property_name: NodeIndex,
        name: NodeIndex,
    },
    ExportAssignment {
        modifiers: Modifiers,
        /// `export =` rather than `export default`.
        is_export_equals: bool,
        expression: NodeIndex,
    },
    ExportDeclaration {
        modifiers: Modifiers,
        is_type_only: bool,
        export_clause: NodeIndex,
        module_specifier: NodeIndex,
    },
    NamedExports {
        elements: NodeList,
    },
    NamespaceExport {
        name: NodeIndex,
    },
    ExportSpecifier {
        is_type_only: bool,
        property_name: NodeIndex,
        name: NodeIndex,
    },

    // =========================================================================
    // Class members and signatures
    // =========================================================================
    Constructor {
        modifiers: Modifiers,
        parameters: NodeList,
        body: NodeIndex,
    },
    PropertyDeclaration {
        decorators: NodeList,
        modifiers: Modifiers,
        name: NodeIndex,
        question: bool,
        exclamation: bool,
        type_node: NodeIndex,
        initializer: NodeIndex,
    },
    MethodDeclaration {
        decorators: NodeList,
        modifiers: Modifiers,
        asterisk: bool,
        name: NodeIndex,
        question: bool,
        type_parameters: NodeList,
        parameters: NodeList,
        return_type: NodeIndex,
        body: NodeIndex,
    },
    GetAccessor {
        decorators: NodeList,
        modifiers: Modifiers,
        name: NodeIndex,
        parameters: NodeList,
        return_type: NodeIndex,
        body: NodeIndex,
    },
    SetAccessor {
        decorators: NodeList,
        modifiers: Modifiers,
        name: NodeIndex,
        parameters: NodeList,
        body: NodeIndex,
    },
    IndexSignature {
        modifiers: Modifiers,
        parameters: NodeList,
        type_node: NodeIndex,
    },
    ClassStaticBlock {
        body: NodeIndex,
    },
    SemicolonClassElement,
    PropertySignature {
        modifiers: Modifiers,
        name: NodeIndex,
        question: bool,
        type_node: NodeIndex,
    },
    MethodSignature {
        name: NodeIndex,
        question: bool,
        type_parameters: NodeList,
        parameters: NodeList,
        return_type: NodeIndex,
    },
    Parameter {
        decorators: NodeList,
        modifiers: Modifiers,
        dot_dot_dot: bool,
        name: NodeIndex,
        question: bool,
        type_node: NodeIndex,
        initializer: NodeIndex,
    },
    Decorator {
        expression: NodeIndex,
    },
    HeritageClause {
        token: HeritageToken,
        types: NodeList,
    },
    TypeParameter {
        name: NodeIndex,
        constraint: NodeIndex,
        default: NodeIndex,
    },
    ObjectBindingPattern {
        elements: NodeList,
    },
    ArrayBindingPattern {
        elements: NodeList,
    },
    BindingElement {
        dot_dot_dot: bool,
        property_name: NodeIndex,
        name: NodeIndex,
        initializer: NodeIndex,
    },

    // =========================================================================
    // Type nodes
    // =========================================================================
    KeywordType(TypeKeyword),
    TypeReference {
        type_name: NodeIndex,
        type_arguments: NodeList,
    },
    ArrayType {
        element_type: NodeIndex,
    },
    TupleType {
        elements: NodeList,
    },
    UnionType {
        types: NodeList,
    },
    IntersectionType {
        types: NodeList,
    },
    FunctionType {
        type_parameters: NodeList,
        parameters: NodeList,
        return_type: NodeIndex,
    },
    ConstructorType {
        type_parameters: NodeList,
        parameters: NodeList,
        return_type: NodeIndex,
    },
    ParenthesizedType {
        type_node: NodeIndex,
    },
    /// `literal` is a string/numeric/bigint literal, `true`, `false`, `null`
    /// or a prefix-minus numeric literal.
    LiteralType {
        literal: NodeIndex,
    },
    TypeLiteral {
        members: NodeList,
    },
    TypeQuery {
        expr_name: NodeIndex,
    },
    TypeOperator {
        operator: TypeOperatorKind,
        type_node: NodeIndex,
    },
    IndexedAccessType {
        object_type: NodeIndex,
        index_type: NodeIndex,
    },
    ConditionalType {
        check_type: NodeIndex,
        extends_type: NodeIndex,
        true_type: NodeIndex,
        false_type: NodeIndex,
    },
    TypePredicate {
        asserts: bool,
        parameter_name: NodeIndex,
        type_node: NodeIndex,
    },
    ThisType,
    RestType {
        type_node: NodeIndex,
    },
    OptionalType {
        type_node: NodeIndex,
    },
    NamedTupleMember {
        dot_dot_dot: bool,
        name: NodeIndex,
        question: bool,
        type_node: NodeIndex,
    },
    ImportType {
        argument: NodeIndex,
        qualifier: NodeIndex,
        type_arguments: NodeList,
    },

    // =========================================================================
    // Synthetic nodes
    // =========================================================================
    /// Placeholder for a removed statement; prints only its comments.
    NotEmittedStatement,
    /// Closes the statement group produced for one declaration.
    EndOfDeclarationMarker,
    /// Stands in for the leading `var` of a declaration merged into an
    /// earlier one; `original` is the suppressed statement.
    MergeDeclarationMarker,
}

impl NodeData {
    /// Kind name used in logs and internal error messages.
    pub fn kind_name(&self) -> &'static str {
        use NodeData::*;
        match self {
            SourceFile { .. } => "SourceFile",
            Identifier { .. } => "Identifier",
            PrivateIdentifier { .. } => "PrivateIdentifier",
            QualifiedName { .. } => "QualifiedName",
            ComputedPropertyName { .. } => "ComputedPropertyName",
            StringLiteral { .. } => "StringLiteral",
            NumericLiteral { .. } => "NumericLiteral",
            BigIntLiteral { .. } => "BigIntLiteral",
            RegularExpressionLiteral { .. } => "RegularExpressionLiteral",
            NoSubstitutionTemplateLiteral { .. } => "NoSubstitutionTemplateLiteral",
            TemplateExpression { .. } => "TemplateExpression",
            TemplateSpan { .. } => "TemplateSpan",
            True => "TrueKeyword",
            False => "FalseKeyword",
            Null => "NullKeyword",
            This => "ThisKeyword",
            Super => "SuperKeyword",
            ArrayLiteral { .. } => "ArrayLiteralExpression",
            ObjectLiteral { .. } => "ObjectLiteralExpression",
            PropertyAssignment { .. } => "PropertyAssignment",
            ShorthandPropertyAssignment { .. } => "ShorthandPropertyAssignment",
            SpreadAssignment { .. } => "SpreadAssignment",
            PropertyAccess { .. } => "PropertyAccessExpression",
            ElementAccess { .. } => "ElementAccessExpression",
            Call { .. } => "CallExpression",
            New { .. } => "NewExpression",
            TaggedTemplate { .. } => "TaggedTemplateExpression",
            Parenthesized { .. } => "ParenthesizedExpression",
            FunctionExpression { .. } => "FunctionExpression",
            ArrowFunction { .. } => "ArrowFunction",
            PrefixUnary { .. } => "PrefixUnaryExpression",
            PostfixUnary { .. } => "PostfixUnaryExpression",
            Await { .. } => "AwaitExpression",
            Yield { .. } => "YieldExpression",
            Binary { .. } => "BinaryExpression",
            Conditional { .. } => "ConditionalExpression",
            ClassExpression(_) => "ClassExpression",
            As { .. } => "AsExpression",
            Satisfies { .. } => "SatisfiesExpression",
            TypeAssertion { .. } => "TypeAssertionExpression",
            NonNull { .. } => "NonNullExpression",
            SpreadElement { .. } => "SpreadElement",
            OmittedExpression => "OmittedExpression",
            ExpressionWithTypeArguments { .. } => "ExpressionWithTypeArguments",
            PartiallyEmitted { .. } => "PartiallyEmittedExpression",
            CommaList { .. } => "CommaListExpression",
            VariableStatement { .. } => "VariableStatement",
            VariableDeclarationList { .. } => "VariableDeclarationList",
            VariableDeclaration { .. } => "VariableDeclaration",
            ExpressionStatement { .. } => "ExpressionStatement",
            Block { .. } => "Block",
            Empty => "EmptyStatement",
            If { .. } => "IfStatement",
            Do { .. } => "DoStatement",
            While { .. } => "WhileStatement",
            For { .. } => "ForStatement",
            ForIn { .. } => "ForInStatement",
            ForOf { .. } => "ForOfStatement",
            Continue { .. } => "ContinueStatement",
            Break { .. } => "BreakStatement",
            Return { .. } => "ReturnStatement",
            Switch { .. } => "SwitchStatement",
            CaseBlock { .. } => "CaseBlock",
            CaseClause { .. } => "CaseClause",
            DefaultClause { .. } => "DefaultClause",
            Labeled { .. } => "LabeledStatement",
            Throw { .. } => "ThrowStatement",
            Try { .. } => "TryStatement",
            CatchClause { .. } => "CatchClause",
            Debugger => "DebuggerStatement",
            FunctionDeclaration { .. } => "FunctionDeclaration",
            ClassDeclaration(_) => "ClassDeclaration",
            InterfaceDeclaration { .. } => "InterfaceDeclaration",
            TypeAliasDeclaration { .. } => "TypeAliasDeclaration",
            EnumDeclaration { .. } => "EnumDeclaration",
            EnumMember { .. } => "EnumMember",
            ModuleDeclaration { .. } => "ModuleDeclaration",
            ModuleBlock { .. } => "ModuleBlock",
            ImportEquals { .. } => "ImportEqualsDeclaration",
            ExternalModuleReference { .. } => "ExternalModuleReference",
            ImportDeclaration { .. } => "ImportDeclaration",
            ImportClause { .. } => "ImportClause",
            NamespaceImport { .. } => "NamespaceImport",
            NamedImports { .. } => "NamedImports",
            ImportSpecifier { .. } => "ImportSpecifier",
            ExportAssignment { .. } => "ExportAssignment",
            ExportDeclaration { .. } => "ExportDeclaration",
            NamedExports { .. } => "NamedExports",
            NamespaceExport { .. } => "NamespaceExport",
            ExportSpecifier { .. } => "ExportSpecifier",
            Constructor { .. } => "Constructor",
            PropertyDeclaration { .. } => "PropertyDeclaration",
            MethodDeclaration { .. } => "MethodDeclaration",
            GetAccessor { .. } => "GetAccessor",
            SetAccessor { .. } => "SetAccessor",
            IndexSignature { .. } => "IndexSignature",
            ClassStaticBlock { .. } => "ClassStaticBlockDeclaration",
            SemicolonClassElement => "SemicolonClassElement",
            PropertySignature { .. } => "PropertySignature",
            MethodSignature { .. } => "MethodSignature",
            Parameter { .. } => "Parameter",
            Decorator { .. } => "Decorator",
            HeritageClause { .. } => "HeritageClause",
            TypeParameter { .. } => "TypeParameter",
            ObjectBindingPattern { .. } => "ObjectBindingPattern",
            ArrayBindingPattern { .. } => "ArrayBindingPattern",
            BindingElement { .. } => "BindingElement",
            KeywordType(_) => "KeywordType",
            TypeReference { .. } => "TypeReference",
            ArrayType { .. } => "ArrayType",
            TupleType { .. } => "TupleType",
            UnionType { .. } => "UnionType",
            IntersectionType { .. } => "IntersectionType",
            FunctionType { .. } => "FunctionType",
            ConstructorType { .. } => "ConstructorType",
            ParenthesizedType { .. } => "ParenthesizedType",
            LiteralType { .. } => "LiteralType",
            TypeLiteral { .. } => "TypeLiteral",
            TypeQuery { .. } => "TypeQuery",
            TypeOperator { .. } => "TypeOperator",
            IndexedAccessType { .. } => "IndexedAccessType",
            ConditionalType { .. } => "ConditionalType",
            TypePredicate { .. } => "TypePredicate",
            ThisType => "ThisType",
            RestType { .. } => "RestType",
            OptionalType { .. } => "OptionalType",
            NamedTupleMember { .. } => "NamedTupleMember",
            ImportType { .. } => "ImportType",
            NotEmittedStatement => "NotEmittedStatement",
            EndOfDeclarationMarker => "EndOfDeclarationMarker",
            MergeDeclarationMarker => "MergeDeclarationMarker",
        }
    }

    /// Type annotation syntax; never survives lowering.
    pub fn is_type_node(&self) -> bool {
        use NodeData::*;
        matches!(
            self,
            KeywordType(_)
                | TypeReference { .. }
                | ArrayType { .. }
                | TupleType { .. }
                | UnionType { .. }
                | IntersectionType { .. }
                | FunctionType { .. }
                | ConstructorType { .. }
                | ParenthesizedType { .. }
                | LiteralType { .. }
                | TypeLiteral { .. }
                | TypeQuery { .. }
                | TypeOperator { .. }
                | IndexedAccessType { .. }
                | ConditionalType { .. }
                | TypePredicate { .. }
                | ThisType
                | RestType { .. }
                | OptionalType { .. }
                | NamedTupleMember { .. }
                | ImportType { .. }
        )
    }

    /// Nodes that are printed in expression position.
    pub fn is_expression(&self) -> bool {
        use NodeData::*;
        matches!(
            self,
            Identifier { .. }
                | PrivateIdentifier { .. }
                | StringLiteral { .. }
                | NumericLiteral { .. }
                | BigIntLiteral { .. }
                | RegularExpressionLiteral { .. }
                | NoSubstitutionTemplateLiteral { .. }
                | TemplateExpression { .. }
                | True
                | False
                | Null
                | This
                | Super
                | ArrayLiteral { .. }
                | ObjectLiteral { .. }
                | PropertyAccess { .. }
                | ElementAccess { .. }
                | Call { .. }
                | New { .. }
                | TaggedTemplate { .. }
                | Parenthesized { .. }
                | FunctionExpression { .. }
                | ArrowFunction { .. }
                | PrefixUnary { .. }
                | PostfixUnary { .. }
                | Await { .. }
                | Yield { .. }
                | Binary { .. }
                | Conditional { .. }
                | ClassExpression(_)
                | As { .. }
                | Satisfies { .. }
                | TypeAssertion { .. }
                | NonNull { .. }
                | SpreadElement { .. }
                | OmittedExpression
                | ExpressionWithTypeArguments { .. }
                | PartiallyEmitted { .. }
                | CommaList { .. }
        )
    }

    /// Declared name of a declaration, or the label of a labeled jump.
    pub fn name(&self) -> NodeIndex {
        use NodeData::*;
        match self {
            PropertyAssignment { name, .. }
            | ShorthandPropertyAssignment { name, .. }
            | PropertyAccess { name, .. }
            | FunctionExpression { name, .. }
            | VariableDeclaration { name, .. }
            | FunctionDeclaration { name, .. }
            | InterfaceDeclaration { name, .. }
            | TypeAliasDeclaration { name, .. }
            | EnumDeclaration { name, .. }
            | EnumMember { name, .. }
            | ModuleDeclaration { name, .. }
            | ImportEquals { name, .. }
            | ImportClause { name, .. }
            | NamespaceImport { name, .. }
            | ImportSpecifier { name, .. }
            | NamespaceExport { name, .. }
            | ExportSpecifier { name, .. }
            | PropertyDeclaration { name, .. }
            | MethodDeclaration { name, .. }
            | GetAccessor { name, .. }
            | SetAccessor { name, .. }
            | PropertySignature { name, .. }
            | MethodSignature { name, .. }
            | Parameter { name, .. }
            | TypeParameter { name, .. }
            | BindingElement { name, .. }
            | NamedTupleMember { name, .. } => *name,
            ClassDeclaration(class) | ClassExpression(class) => class.name,
            Continue { label } | Break { label } | Labeled { label, .. } => *label,
            _ => NodeIndex::NONE,
        }
    }

    /// `property_name` of import/export specifiers and binding elements.
    pub fn property_name(&self) -> NodeIndex {
        match self {
            NodeData::ImportSpecifier { property_name, .. }
            | NodeData::ExportSpecifier { property_name, .. }
            | NodeData::BindingElement { property_name, .. } => *property_name,
            _ => NodeIndex::NONE,
        }
    }

    pub fn modifiers(&self) -> Option<&Modifiers> {
        use NodeData::*;
        match self {
            FunctionExpression { modifiers, .. }
            | ArrowFunction { modifiers, .. }
            | VariableStatement { modifiers, .. }
            | FunctionDeclaration { modifiers, .. }
            | InterfaceDeclaration { modifiers, .. }
            | TypeAliasDeclaration { modifiers, .. }
            | EnumDeclaration { modifiers, .. }
            | ModuleDeclaration { modifiers, .. }
            | ImportEquals { modifiers, .. }
            | ImportDeclaration { modifiers, .. }
            | ExportAssignment { modifiers, .. }
            | ExportDeclaration { modifiers, .. }
            | Constructor { modifiers, .. }
            | PropertyDeclaration { modifiers, .. }
            | MethodDeclaration { modifiers, .. }
            | GetAccessor { modifiers, .. }
            | SetAccessor { modifiers, .. }
            | IndexSignature { modifiers, .. }
            | PropertySignature { modifiers, .. }
            | Parameter { modifiers, .. } => Some(modifiers),
            ClassDeclaration(class) | ClassExpression(class) => Some(&class.modifiers),
            _ => None,
        }
    }

    pub fn decorators(&self) -> Option<&NodeList> {
        use NodeData::*;
        match self {
            PropertyDeclaration { decorators, .. }
            | MethodDeclaration { decorators, .. }
            | GetAccessor { decorators, .. }
            | SetAccessor { decorators, .. }
            | Parameter { decorators, .. } => Some(decorators),
            ClassDeclaration(class) | ClassExpression(class) => Some(&class.decorators),
            _ => None,
        }
    }

    /// Parameters of function-like nodes.
    pub fn parameters(&self) -> Option<&NodeList> {
        use NodeData::*;
        match self {
            FunctionExpression { parameters, .. }
            | ArrowFunction { parameters, .. }
            | FunctionDeclaration { parameters, .. }
            | Constructor { parameters, .. }
            | MethodDeclaration { parameters, .. }
            | GetAccessor { parameters, .. }
            | SetAccessor { parameters, .. }
            | MethodSignature { parameters, .. }
            | FunctionType { parameters, .. }
            | ConstructorType { parameters, .. }
            | IndexSignature { parameters, .. } => Some(parameters),
            _ => None,
        }
    }

    /// Body of function-like nodes (`NONE` when bodyless).
    pub fn body(&self) -> NodeIndex {
        use NodeData::*;
        match self {
            FunctionExpression { body, .. }
            | ArrowFunction { body, .. }
            | FunctionDeclaration { body, .. }
            | Constructor { body, .. }
            | MethodDeclaration { body, .. }
            | GetAccessor { body, .. }
            | SetAccessor { body, .. }
            | ClassStaticBlock { body }
            | ModuleDeclaration { body, .. } => *body,
            _ => NodeIndex::NONE,
        }
    }

    pub fn class_data(&self) -> Option<&ClassData> {
        match self {
            NodeData::ClassDeclaration(class) | NodeData::ClassExpression(class) => Some(class),
            _ => None,
        }
    }

    /// Class members that may carry decorators.
    pub fn is_class_element(&self) -> bool {
        use NodeData::*;
        matches!(
            self,
            Constructor { .. }
                | PropertyDeclaration { .. }
                | MethodDeclaration { .. }
                | GetAccessor { .. }
                | SetAccessor { .. }
                | IndexSignature { .. }
                | ClassStaticBlock { .. }
                | SemicolonClassElement
        )
    }

    pub fn is_function_like(&self) -> bool {
        use NodeData::*;
        matches!(
            self,
            FunctionExpression { .. }
                | ArrowFunction { .. }
                | FunctionDeclaration { .. }
                | Constructor { .. }
                | MethodDeclaration { .. }
                | GetAccessor { .. }
                | SetAccessor { .. }
        )
    }

    /// Literal text of identifiers and string/numeric-like literals.
    pub fn text(&self) -> Option<&str> {
        use NodeData::*;
        match self {
            Identifier { text, .. }
            | PrivateIdentifier { text }
            | StringLiteral { text }
            | NumericLiteral { text }
            | BigIntLiteral { text }
            | NoSubstitutionTemplateLiteral { text } => Some(text),
            _ => None,
        }
    }
}
