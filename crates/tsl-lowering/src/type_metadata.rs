//! Runtime type metadata for `emitDecoratorMetadata`.
//!
//! Types are serialized to the runtime constructor that best describes
//! them (`String`, `Number`, a class reference, ...), falling back to
//! `Object` whenever the answer is not a single constructor.

use tracing::trace;
use tsl_ast::{
    ClassData, ModifierKind, NodeData, NodeIndex, NodeList, PrefixOperator, TypeKeyword,
    TypeOperatorKind,
};

use crate::decorators::{all_accessor_declarations, first_constructor_with_body, is_this_parameter};
use crate::error::{LoweringError, Result};
use crate::resolver::TypeReferenceSerializationKind;
use crate::visitor::TypeScriptLowering;

impl TypeScriptLowering<'_> {
    /// Append `design:type`, `design:paramtypes` and `design:returntype`
    /// entries for `declaration` when metadata emission is on.
    pub(crate) fn add_type_metadata(
        &mut self,
        declaration: NodeIndex,
        class: &ClassData,
        expressions: &mut Vec<NodeIndex>,
    ) -> Result<()> {
        if !self.options.emit_decorator_metadata {
            return Ok(());
        }
        let data = self.node_data(declaration)?;
        let is_member = matches!(
            data,
            NodeData::MethodDeclaration { .. }
                | NodeData::GetAccessor { .. }
                | NodeData::SetAccessor { .. }
        );
        if is_member || matches!(data, NodeData::PropertyDeclaration { .. }) {
            let value = self.serialize_type_of_node(declaration, &class.members)?;
            expressions.push(self.create_metadata_call("design:type", value));
        }
        let is_class_with_constructor = data.class_data().is_some()
            && first_constructor_with_body(self.arena, &class.members).is_some();
        if is_class_with_constructor || is_member {
            let value = self.serialize_parameter_types_of_node(declaration, &class.members)?;
            expressions.push(self.create_metadata_call("design:paramtypes", value));
        }
        if matches!(data, NodeData::MethodDeclaration { .. }) {
            let value = self.serialize_return_type_of_node(declaration)?;
            expressions.push(self.create_metadata_call("design:returntype", value));
        }
        Ok(())
    }

    /// `__metadata("design:type", value)`
    fn create_metadata_call(&mut self, key: &str, value: NodeIndex) -> NodeIndex {
        self.ctx.helpers.metadata = true;
        let helper = self.arena.create_helper_name("__metadata");
        let key = self.arena.create_string_literal(key);
        self.arena.create_call(helper, vec![key, value])
    }

    // =========================================================================
    // Declarations
    // =========================================================================

    pub(crate) fn serialize_type_of_node(
        &mut self,
        node: NodeIndex,
        members: &NodeList,
    ) -> Result<NodeIndex> {
        match self.node_data(node)? {
            NodeData::PropertyDeclaration { type_node, .. }
            | NodeData::Parameter { type_node, .. } => self.serialize_type_node(type_node),
            NodeData::GetAccessor { .. } | NodeData::SetAccessor { .. } => {
                let type_node = self.accessor_type_node(node, members);
                self.serialize_type_node(type_node)
            }
            NodeData::ClassDeclaration(_)
            | NodeData::ClassExpression(_)
            | NodeData::MethodDeclaration { .. } => Ok(self.arena.create_identifier("Function")),
            _ => Ok(self.arena.create_void_zero()),
        }
    }

    /// Setter value-parameter type, else the getter's return type.
    fn accessor_type_node(&self, accessor: NodeIndex, members: &NodeList) -> NodeIndex {
        let pair = all_accessor_declarations(self.arena, members, accessor);
        if let Some(parameter) = self.setter_value_parameter(pair.set) {
            if let Some(NodeData::Parameter { type_node, .. }) = self.arena.data(parameter) {
                if type_node.is_some() {
                    return *type_node;
                }
            }
        }
        match self.arena.data(pair.get) {
            Some(NodeData::GetAccessor { return_type, .. }) => *return_type,
            _ => NodeIndex::NONE,
        }
    }

    fn setter_value_parameter(&self, setter: NodeIndex) -> Option<NodeIndex> {
        let parameters = self.arena.data(setter)?.parameters()?;
        let has_this = parameters.len() == 2
            && parameters
                .first()
                .is_some_and(|first| is_this_parameter(self.arena, first));
        parameters.get(usize::from(has_this))
    }

    /// Array literal of the serialized parameter types. A class answers for
    /// its first constructor with a body; a getter for its setter.
    pub(crate) fn serialize_parameter_types_of_node(
        &mut self,
        node: NodeIndex,
        members: &NodeList,
    ) -> Result<NodeIndex> {
        let data = self.node_data(node)?;
        let function = if data.class_data().is_some() {
            first_constructor_with_body(self.arena, members)
        } else if data.is_function_like() && data.body().is_some() {
            Some(node)
        } else {
            None
        };

        let mut types = Vec::new();
        if let Some(function) = function {
            let source = match self.arena.data(function) {
                Some(NodeData::GetAccessor { .. }) => {
                    let pair = all_accessor_declarations(self.arena, members, function);
                    if pair.set.is_some() { pair.set } else { function }
                }
                _ => function,
            };
            let parameters = self
                .arena
                .data(source)
                .and_then(NodeData::parameters)
                .cloned()
                .unwrap_or_default();
            for (position, parameter) in parameters.iter().enumerate() {
                if position == 0 && is_this_parameter(self.arena, parameter) {
                    continue;
                }
                let NodeData::Parameter {
                    dot_dot_dot,
                    type_node,
                    ..
                } = self.node_data(parameter)?
                else {
                    return Err(self.unexpected(parameter, "parameter list"));
                };
                let serialized = if dot_dot_dot {
                    let element = self.rest_element_type(type_node);
                    self.serialize_type_node(element)?
                } else {
                    self.serialize_type_of_node(parameter, members)?
                };
                types.push(serialized);
            }
        }
        Ok(self.arena.create_array_literal(types, false))
    }

    /// `T` of a `...rest: T[]` or `...rest: Array<T>` parameter.
    fn rest_element_type(&self, type_node: NodeIndex) -> NodeIndex {
        match self.arena.data(type_node) {
            Some(NodeData::ArrayType { element_type }) => *element_type,
            Some(NodeData::TypeReference { type_arguments, .. }) if type_arguments.len() == 1 => {
                type_arguments.first().unwrap_or(NodeIndex::NONE)
            }
            _ => NodeIndex::NONE,
        }
    }

    pub(crate) fn serialize_return_type_of_node(&mut self, node: NodeIndex) -> Result<NodeIndex> {
        let data = self.node_data(node)?;
        let return_type = match &data {
            NodeData::MethodDeclaration { return_type, .. }
            | NodeData::GetAccessor { return_type, .. }
            | NodeData::FunctionDeclaration { return_type, .. }
            | NodeData::FunctionExpression { return_type, .. }
            | NodeData::ArrowFunction { return_type, .. } => *return_type,
            _ => NodeIndex::NONE,
        };
        if data.is_function_like() && return_type.is_some() {
            return self.serialize_type_node(return_type);
        }
        if data
            .modifiers()
            .is_some_and(|modifiers| modifiers.has(ModifierKind::Async))
        {
            return Ok(self.arena.create_identifier("Promise"));
        }
        Ok(self.arena.create_void_zero())
    }

    // =========================================================================
    // Type nodes
    // =========================================================================

    pub(crate) fn serialize_type_node(&mut self, node: NodeIndex) -> Result<NodeIndex> {
        self.serialize_type_node_in(node, false)
    }

    /// `in_conditional` is set inside the branches of a conditional type,
    /// where unresolved names serialize to `Object` without a runtime check.
    fn serialize_type_node_in(&mut self, node: NodeIndex, in_conditional: bool) -> Result<NodeIndex> {
        if node.is_none() {
            return Ok(self.arena.create_void_zero());
        }
        let name = match self.node_data(node)? {
            NodeData::KeywordType(keyword) => match keyword {
                TypeKeyword::Void | TypeKeyword::Undefined | TypeKeyword::Never => {
                    return Ok(self.arena.create_void_zero());
                }
                TypeKeyword::Boolean => "Boolean",
                TypeKeyword::String => "String",
                TypeKeyword::Number => "Number",
                TypeKeyword::BigInt => return Ok(self.global_bigint()),
                TypeKeyword::Symbol => return Ok(self.global_symbol()),
                TypeKeyword::Object | TypeKeyword::Any | TypeKeyword::Unknown => "Object",
            },
            NodeData::ParenthesizedType { type_node } => {
                return self.serialize_type_node_in(type_node, in_conditional);
            }
            NodeData::FunctionType { .. } | NodeData::ConstructorType { .. } => "Function",
            NodeData::ArrayType { .. } | NodeData::TupleType { .. } => "Array",
            NodeData::TypePredicate { .. } => "Boolean",
            NodeData::LiteralType { literal } => match self.node_data(literal)? {
                NodeData::StringLiteral { .. } | NodeData::NoSubstitutionTemplateLiteral { .. } => {
                    "String"
                }
                NodeData::NumericLiteral { .. }
                | NodeData::PrefixUnary {
                    operator: PrefixOperator::Minus,
                    ..
                } => "Number",
                NodeData::BigIntLiteral { .. } => return Ok(self.global_bigint()),
                NodeData::True | NodeData::False => "Boolean",
                NodeData::Null => return Ok(self.arena.create_void_zero()),
                other => {
                    return Err(LoweringError::UnexpectedLiteralType {
                        kind: other.kind_name(),
                    }
                    .report());
                }
            },
            NodeData::TypeReference { type_name, .. } => {
                return self.serialize_type_reference(type_name, in_conditional);
            }
            NodeData::UnionType { types } | NodeData::IntersectionType { types } => {
                return self.serialize_type_list(types.iter().collect(), in_conditional);
            }
            NodeData::ConditionalType {
                true_type,
                false_type,
                ..
            } => return self.serialize_type_list(vec![true_type, false_type], true),
            NodeData::TypeOperator {
                operator: TypeOperatorKind::Readonly,
                type_node,
            } => return self.serialize_type_node_in(type_node, in_conditional),
            _ => "Object",
        };
        Ok(self.arena.create_identifier(name))
    }

    /// One constructor shared by every constituent, `void 0` when none
    /// remain, `Object` otherwise.
    fn serialize_type_list(
        &mut self,
        types: Vec<NodeIndex>,
        in_conditional: bool,
    ) -> Result<NodeIndex> {
        let mut serialized_union: Option<NodeIndex> = None;
        for mut type_node in types {
            while let Some(NodeData::ParenthesizedType { type_node: inner }) =
                self.arena.data(type_node)
            {
                type_node = *inner;
            }
            match self.arena.data(type_node) {
                Some(NodeData::KeywordType(TypeKeyword::Never)) => continue,
                Some(NodeData::KeywordType(TypeKeyword::Undefined))
                    if !self.options.strict_null_checks =>
                {
                    continue;
                }
                Some(NodeData::LiteralType { literal })
                    if !self.options.strict_null_checks
                        && matches!(self.arena.data(*literal), Some(NodeData::Null)) =>
                {
                    continue;
                }
                _ => {}
            }
            let serialized = self.serialize_type_node_in(type_node, in_conditional)?;
            let serialized_text = self.arena.identifier_text(serialized).map(str::to_string);
            if serialized_text.as_deref() == Some("Object") {
                return Ok(serialized);
            }
            match serialized_union {
                Some(existing) => {
                    let existing_text = self.arena.identifier_text(existing);
                    if existing_text.is_none()
                        || serialized_text.is_none()
                        || existing_text != serialized_text.as_deref()
                    {
                        trace!("mixed union serialized as Object");
                        return Ok(self.arena.create_identifier("Object"));
                    }
                }
                None => serialized_union = Some(serialized),
            }
        }
        match serialized_union {
            Some(serialized) => Ok(serialized),
            None => Ok(self.arena.create_void_zero()),
        }
    }

    fn serialize_type_reference(
        &mut self,
        type_name: NodeIndex,
        in_conditional: bool,
    ) -> Result<NodeIndex> {
        let location = self
            .ctx
            .scopes
            .name_scope()
            .unwrap_or_else(|| self.ctx.scopes.current_node());
        let kind = self.serialization_kind(type_name, location);
        trace!(?kind, "serialize type reference");
        let name = match kind {
            TypeReferenceSerializationKind::Unknown => {
                if in_conditional {
                    return Ok(self.arena.create_identifier("Object"));
                }
                // typeof (_a = typeof A !== "undefined" && A) === "function" ? _a : Object
                let (check, value) = self.serialize_entity_name_fallback(type_name)?;
                let checked = self.arena.create_logical_and(check, value);
                let temp = self.ctx.create_temp_variable();
                let target = self.arena.create_generated_identifier(&temp);
                let assignment = self.arena.create_assignment(target, checked);
                let condition = self.create_type_check(assignment, "function");
                let when_true = self.arena.create_generated_identifier(&temp);
                let when_false = self.arena.create_identifier("Object");
                return Ok(self
                    .arena
                    .create_conditional(condition, when_true, when_false));
            }
            TypeReferenceSerializationKind::TypeWithConstructSignatureAndValue => {
                return self.serialize_entity_name(type_name);
            }
            TypeReferenceSerializationKind::VoidNullableOrNeverType => {
                return Ok(self.arena.create_void_zero());
            }
            TypeReferenceSerializationKind::BigIntLikeType => return Ok(self.global_bigint()),
            TypeReferenceSerializationKind::ESSymbolType => return Ok(self.global_symbol()),
            TypeReferenceSerializationKind::BooleanType => "Boolean",
            TypeReferenceSerializationKind::NumberLikeType => "Number",
            TypeReferenceSerializationKind::StringLikeType => "String",
            TypeReferenceSerializationKind::ArrayLikeType => "Array",
            TypeReferenceSerializationKind::TypeWithCallSignature => "Function",
            TypeReferenceSerializationKind::Promise => "Promise",
            TypeReferenceSerializationKind::ObjectType => "Object",
        };
        Ok(self.arena.create_identifier(name))
    }

    /// Entity name as an expression built from fresh identifiers.
    fn serialize_entity_name(&mut self, name: NodeIndex) -> Result<NodeIndex> {
        match self.node_data(name)? {
            NodeData::Identifier { text, .. } => Ok(self.arena.create_identifier(&text)),
            NodeData::QualifiedName { left, right } => {
                let left = self.serialize_entity_name(left)?;
                let Some(right) = self.arena.identifier_text(right).map(str::to_string) else {
                    return Err(self.unexpected(right, "qualified name"));
                };
                Ok(self.arena.create_property_access(left, &right))
            }
            _ => Err(self.unexpected(name, "type reference name")),
        }
    }

    /// Guarded read of a possibly undefined entity name, as
    /// `(check, value)` to be joined with `&&`:
    ///
    /// - `A` -> `typeof A !== "undefined"`, `A`
    /// - `A.B` -> `typeof A !== "undefined"`, `A.B`
    /// - `A.B.C` -> `typeof A !== "undefined" && (_a = A.B) !== void 0`, `_a.C`
    fn serialize_entity_name_fallback(
        &mut self,
        name: NodeIndex,
    ) -> Result<(NodeIndex, NodeIndex)> {
        match self.node_data(name)? {
            NodeData::Identifier { .. } => {
                let checked = self.serialize_entity_name(name)?;
                let value = self.serialize_entity_name(name)?;
                Ok((self.create_defined_check(checked), value))
            }
            NodeData::QualifiedName { left, right } => {
                if self.arena.is_identifier(left) {
                    let checked = self.serialize_entity_name(left)?;
                    let value = self.serialize_entity_name(name)?;
                    return Ok((self.create_defined_check(checked), value));
                }
                let (left_check, left_value) = self.serialize_entity_name_fallback(left)?;
                let temp = self.ctx.create_temp_variable();
                let target = self.arena.create_generated_identifier(&temp);
                let assignment = self.arena.create_assignment(target, left_value);
                let void_zero = self.arena.create_void_zero();
                let defined = self.arena.create_strict_inequality(assignment, void_zero);
                let check = self.arena.create_logical_and(left_check, defined);
                let Some(right) = self.arena.identifier_text(right).map(str::to_string) else {
                    return Err(self.unexpected(right, "qualified name"));
                };
                let object = self.arena.create_generated_identifier(&temp);
                let value = self.arena.create_property_access(object, &right);
                Ok((check, value))
            }
            _ => Err(self.unexpected(name, "type reference name")),
        }
    }

    /// `typeof value !== "undefined"`
    fn create_defined_check(&mut self, value: NodeIndex) -> NodeIndex {
        let type_of = self.arena.create_typeof(value);
        let undefined = self.arena.create_string_literal("undefined");
        self.arena.create_strict_inequality(type_of, undefined)
    }

    /// `typeof value === "tag"`
    fn create_type_check(&mut self, value: NodeIndex, tag: &str) -> NodeIndex {
        let type_of = self.arena.create_typeof(value);
        let tag = self.arena.create_string_literal(tag);
        self.arena.create_strict_equality(type_of, tag)
    }

    fn global_bigint(&mut self) -> NodeIndex {
        if self.options.target.needs_bigint_fallback() {
            self.global_with_fallback("BigInt")
        } else {
            self.arena.create_identifier("BigInt")
        }
    }

    fn global_symbol(&mut self) -> NodeIndex {
        if self.options.target.needs_symbol_fallback() {
            self.global_with_fallback("Symbol")
        } else {
            self.arena.create_identifier("Symbol")
        }
    }

    /// `typeof G === "function" ? G : Object`
    fn global_with_fallback(&mut self, global: &str) -> NodeIndex {
        let checked = self.arena.create_identifier(global);
        let condition = self.create_type_check(checked, "function");
        let when_true = self.arena.create_identifier(global);
        let when_false = self.arena.create_identifier("Object");
        self.arena
            .create_conditional(condition, when_true, when_false)
    }
}

#[cfg(test)]
#[path = "../tests/type_metadata.rs"]
mod tests;
