//! Import and export elision.
//!
//! An import survives only for the bindings the checker saw used as
//! values; `export` forms survive only for value aliases. Bare
//! `import "m";` statements are always kept.

use smallvec::{SmallVec, smallvec};
use tracing::trace;
use tsl_ast::{EmitFlags, Modifiers, NodeData, NodeIndex, NodeList, VarKind};
use tsl_common::options::ImportsNotUsedAsValues;

use crate::error::Result;
use crate::visitor::{TypeScriptLowering, VisitResult};

impl TypeScriptLowering<'_> {
    /// Source-file level `import`, `import =`, `export =`/`export default`
    /// and `export { }` statements.
    pub(crate) fn visit_elidable_statement(&mut self, node: NodeIndex) -> Result<VisitResult> {
        if !self.arena.is_parse_tree_node(node) {
            // Synthesized by an earlier rewrite; nothing to ask the checker.
            return if self.flags.contains_typescript(node) {
                self.visit_each_child_one(node)
            } else {
                Ok(smallvec![node])
            };
        }
        match self.node_data(node)? {
            NodeData::ImportDeclaration { .. } => self.visit_import_declaration(node),
            NodeData::ImportEquals { .. } => self.visit_import_equals(node),
            NodeData::ExportAssignment { .. } => self.visit_export_assignment(node),
            NodeData::ExportDeclaration { .. } => self.visit_export_declaration(node),
            _ => Err(self.unexpected(node, "import or export statement")),
        }
    }

    fn should_emit_alias_declaration(&self, node: NodeIndex) -> bool {
        if self.options.preserve_value_imports {
            self.is_value_alias(node)
        } else {
            self.is_referenced_alias(node)
        }
    }

    // =========================================================================
    // import ... from "m"
    // =========================================================================

    fn visit_import_declaration(&mut self, node: NodeIndex) -> Result<VisitResult> {
        let NodeData::ImportDeclaration {
            import_clause,
            module_specifier,
            ..
        } = self.node_data(node)?
        else {
            return Err(self.unexpected(node, "import declaration"));
        };
        if import_clause.is_none() {
            return Ok(smallvec![node]);
        }
        if matches!(
            self.arena.data(import_clause),
            Some(NodeData::ImportClause {
                is_type_only: true,
                ..
            })
        ) {
            trace!(index = node.0, "type-only import elided");
            return Ok(SmallVec::new());
        }

        let import_clause = self.visit_import_clause(import_clause)?;
        if import_clause.is_none()
            && !self.options.imports_not_used_as_values.keeps_unreferenced()
        {
            trace!(index = node.0, "unreferenced import elided");
            return Ok(SmallVec::new());
        }
        Ok(smallvec![self.arena.update(
            node,
            NodeData::ImportDeclaration {
                modifiers: Modifiers::none(),
                import_clause,
                module_specifier,
            },
        )])
    }

    /// `NONE` when neither the default binding nor any named binding
    /// survives.
    fn visit_import_clause(&mut self, clause: NodeIndex) -> Result<NodeIndex> {
        let NodeData::ImportClause {
            name,
            named_bindings,
            ..
        } = self.node_data(clause)?
        else {
            return Err(self.unexpected(clause, "import declaration"));
        };
        let name = if name.is_some() && self.should_emit_alias_declaration(clause) {
            name
        } else {
            NodeIndex::NONE
        };
        let named_bindings = self.visit_named_import_bindings(named_bindings)?;
        if name.is_none() && named_bindings.is_none() {
            return Ok(NodeIndex::NONE);
        }
        Ok(self.arena.update(
            clause,
            NodeData::ImportClause {
                is_type_only: false,
                name,
                named_bindings,
            },
        ))
    }

    fn visit_named_import_bindings(&mut self, bindings: NodeIndex) -> Result<NodeIndex> {
        if bindings.is_none() {
            return Ok(NodeIndex::NONE);
        }
        match self.node_data(bindings)? {
            NodeData::NamespaceImport { .. } => {
                if self.should_emit_alias_declaration(bindings) {
                    Ok(bindings)
                } else {
                    Ok(NodeIndex::NONE)
                }
            }
            NodeData::NamedImports { elements } => {
                let allow_empty = self.options.preserve_value_imports
                    && self
                        .options
                        .imports_not_used_as_values
                        .keeps_unreferenced();
                let kept: Vec<NodeIndex> = elements
                    .iter()
                    .filter(|&specifier| {
                        !matches!(
                            self.arena.data(specifier),
                            Some(NodeData::ImportSpecifier {
                                is_type_only: true,
                                ..
                            })
                        ) && self.should_emit_alias_declaration(specifier)
                    })
                    .collect();
                if kept.is_empty() && !allow_empty {
                    return Ok(NodeIndex::NONE);
                }
                Ok(self.arena.update(
                    bindings,
                    NodeData::NamedImports {
                        elements: NodeList::from(kept),
                    },
                ))
            }
            _ => Err(self.unexpected(bindings, "import clause")),
        }
    }

    // =========================================================================
    // export = x / export default x / export { ... }
    // =========================================================================

    fn visit_export_assignment(&mut self, node: NodeIndex) -> Result<VisitResult> {
        if self.is_value_alias(node) {
            self.visit_each_child_one(node)
        } else {
            trace!(index = node.0, "export assignment of a type elided");
            Ok(SmallVec::new())
        }
    }

    fn visit_export_declaration(&mut self, node: NodeIndex) -> Result<VisitResult> {
        let NodeData::ExportDeclaration {
            modifiers,
            is_type_only,
            export_clause,
            module_specifier,
        } = self.node_data(node)?
        else {
            return Err(self.unexpected(node, "export declaration"));
        };
        if is_type_only {
            return Ok(SmallVec::new());
        }
        let Some(NodeData::NamedExports { elements }) = self.arena.data(export_clause).cloned()
        else {
            // `export * from "m"` and `export * as ns from "m"`.
            return Ok(smallvec![node]);
        };

        let allow_empty = module_specifier.is_some()
            && self
                .options
                .imports_not_used_as_values
                .keeps_unreferenced();
        let kept: Vec<NodeIndex> = elements
            .iter()
            .filter(|&specifier| {
                !matches!(
                    self.arena.data(specifier),
                    Some(NodeData::ExportSpecifier {
                        is_type_only: true,
                        ..
                    })
                ) && self.is_value_alias(specifier)
            })
            .collect();
        if kept.is_empty() && !allow_empty {
            trace!(index = node.0, "export list without values elided");
            return Ok(SmallVec::new());
        }
        let export_clause = self.arena.update(
            export_clause,
            NodeData::NamedExports {
                elements: NodeList::from(kept),
            },
        );
        Ok(smallvec![self.arena.update(
            node,
            NodeData::ExportDeclaration {
                modifiers,
                is_type_only,
                export_clause,
                module_specifier,
            },
        )])
    }

    // =========================================================================
    // import x = ...
    // =========================================================================

    pub(crate) fn visit_import_equals(&mut self, node: NodeIndex) -> Result<VisitResult> {
        let NodeData::ImportEquals {
            modifiers,
            is_type_only,
            name,
            module_reference,
        } = self.node_data(node)?
        else {
            return Err(self.unexpected(node, "import equals declaration"));
        };
        if is_type_only {
            return Ok(SmallVec::new());
        }

        if let Some(NodeData::ExternalModuleReference { expression }) =
            self.arena.data(module_reference).cloned()
        {
            let referenced = self.should_emit_alias_declaration(node);
            if referenced {
                return self.visit_each_child_one(node);
            }
            if self.options.imports_not_used_as_values == ImportsNotUsedAsValues::Preserve {
                let import = self.arena.create_side_effect_import(expression);
                self.arena.set_original(import, node);
                return Ok(smallvec![import]);
            }
            trace!(index = node.0, "unreferenced require import elided");
            return Ok(SmallVec::new());
        }

        let emit = self.should_emit_alias_declaration(node)
            || (!self.is_external_module && self.is_top_level_value_import_equals(node));
        if !emit {
            return Ok(SmallVec::new());
        }
        let reference = self.entity_name_to_expression(module_reference)?;
        self.arena.add_emit_flags(reference, EmitFlags::NO_COMMENTS);

        if self.is_named_external_module_export(node) || !self.is_export_of_namespace(node) {
            let modifiers = self.visit_modifiers(&modifiers);
            let declaration = self.arena.create_variable_declaration(name, reference);
            self.arena.set_original(declaration, node);
            let statement =
                self.arena
                    .create_variable_statement(modifiers, VarKind::Var, vec![declaration]);
            self.arena.set_original(statement, node);
            Ok(smallvec![statement])
        } else {
            let target = self.namespace_member_name(name)?;
            let assignment = self.arena.create_assignment(target, reference);
            let statement = self.arena.create_expression_statement(assignment);
            self.arena.set_original(statement, node);
            Ok(smallvec![statement])
        }
    }

    /// `A.B.C` as a qualified name -> the same chain as property accesses.
    pub(crate) fn entity_name_to_expression(&mut self, name: NodeIndex) -> Result<NodeIndex> {
        match self.node_data(name)? {
            NodeData::Identifier { .. } => Ok(self.clone_for_reuse(name)),
            NodeData::QualifiedName { left, right } => {
                let left = self.entity_name_to_expression(left)?;
                let right = self.clone_for_reuse(right);
                let access = self.arena.create_property_access_with_name(left, right);
                self.arena.set_original(access, name);
                Ok(access)
            }
            NodeData::PropertyAccess { .. } => Ok(self.clone_for_reuse(name)),
            _ => Err(self.unexpected(name, "entity name")),
        }
    }
}

#[cfg(test)]
#[path = "../tests/imports.rs"]
mod tests;
