//! TypeScript syntax lowering for the tsl compiler.
//!
//! Rewrites one checked source file so that no TypeScript-only syntax
//! remains:
//! - Type annotations, interfaces, type aliases and ambient declarations
//!   are removed
//! - Classes lose `implements`, parameter properties and decorators
//!   (replaced by `__decorate` calls, wrapped in a closure below ES2015)
//! - Namespaces and enums become closures over a shared object
//! - Imports and exports that only carry types are elided
//!
//! Lowering consults the checker through [`EmitResolver`] and never
//! mutates the parse tree. Identifier and constant rewrites that depend on
//! where a node ends up are computed afterwards by
//! [`collect_substitutions`].

use rustc_hash::FxHashMap;
use tracing::debug_span;
use tsl_ast::{NodeArena, NodeIndex};
use tsl_common::options::LoweringOptions;

// Internal failures
pub mod error;
pub use error::{LoweringError, Result};

// Checker oracle
pub mod resolver;
pub use resolver::{ConstantValue, EmitResolver, NodeCheckFlags, TypeReferenceSerializationKind};

// Per-unit state
pub mod scope;
pub mod names;
pub mod helpers;
pub use helpers::HelpersNeeded;
pub mod transform_flags;
pub mod context;

// Tree walk
mod visitor;
mod each_child;

// Classes
mod class;
mod decorators;
mod type_metadata;

// Namespaces and enums
mod namespace;
mod enums;
pub mod instance_state;
pub use instance_state::{ModuleInstanceState, module_instance_state};
mod destructuring;

// Import/export elision
mod imports;

// Print-time substitution
pub mod substitution;
pub use substitution::{
    EmitHint, SubstitutionFlags, SubstitutionHooks, SubstitutionRegistry, SubstitutionTable,
    collect_substitutions,
};

#[cfg(test)]
pub(crate) mod test_utils;

/// Result of lowering one source file.
#[derive(Debug)]
pub struct LoweringOutput {
    /// Lowered source file; the input file itself when nothing changed.
    pub source_file: NodeIndex,
    pub helpers: HelpersNeeded,
    /// Class declaration -> alias bound for constructor references.
    pub class_aliases: FxHashMap<NodeIndex, String>,
    /// Namespace or enum declaration -> closure parameter name.
    pub container_names: FxHashMap<NodeIndex, String>,
    /// Substitution kinds this unit turned on.
    pub enabled_substitutions: SubstitutionFlags,
}

/// Lower the source file `root`.
///
/// Lowered nodes are appended to `arena`; the parse tree is sealed first
/// and stays unchanged. Substitution kinds the file needs are recorded in
/// `registry`, which may be shared by every unit of a compilation.
pub fn lower_source_file(
    arena: &mut NodeArena,
    root: NodeIndex,
    resolver: &dyn EmitResolver,
    options: &LoweringOptions,
    registry: &SubstitutionRegistry,
) -> Result<LoweringOutput> {
    let _span = debug_span!("lower_source_file", root = root.0).entered();
    let mut lowering = visitor::TypeScriptLowering::new(arena, resolver, options, root);
    let source_file = lowering.visit_source_file(root)?;
    let ctx = lowering.ctx;
    registry.enable(ctx.substitutions);
    Ok(LoweringOutput {
        source_file,
        helpers: ctx.helpers,
        class_aliases: ctx.class_aliases,
        container_names: ctx.container_names,
        enabled_substitutions: ctx.substitutions,
    })
}
