//! Per-unit lowering state.
//!
//! One [`LoweringContext`] is owned by a single `lower_source_file` call and
//! dropped with it. Nothing in here is shared between units; the only
//! cross-unit state is the [`SubstitutionRegistry`](crate::SubstitutionRegistry).

use rustc_hash::FxHashMap;
use tsl_ast::NodeIndex;

use crate::helpers::HelpersNeeded;
use crate::names::NameGenerator;
use crate::scope::ScopeTracker;
use crate::substitution::SubstitutionFlags;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerKind {
    Namespace,
    Enum,
}

/// An open namespace or enum closure.
#[derive(Debug, Clone)]
pub struct ContainerBinding {
    pub kind: ContainerKind,
    /// Parse-tree declaration the closure was produced for.
    pub declaration: NodeIndex,
    /// Closure parameter name (`N`, or `N_1` when `N` is shadowed).
    pub local_name: String,
}

/// Variables hoisted into one function-like scope.
#[derive(Debug, Default)]
struct LexicalEnvironment {
    hoisted: Vec<String>,
}

#[derive(Debug)]
pub struct LoweringContext {
    pub scopes: ScopeTracker,
    containers: Vec<ContainerBinding>,
    environments: Vec<LexicalEnvironment>,
    pub names: NameGenerator,
    /// Class declaration -> alias used for constructor references inside it.
    pub class_aliases: FxHashMap<NodeIndex, String>,
    /// Namespace or enum declaration -> closure parameter name.
    pub container_names: FxHashMap<NodeIndex, String>,
    /// Memoized names generated for a node (unnamed classes, hoisted
    /// computed property names).
    pub generated_names: FxHashMap<NodeIndex, String>,
    pub has_parameter_properties: bool,
    pub helpers: HelpersNeeded,
    pub substitutions: SubstitutionFlags,
    pub depth: u32,
}

impl LoweringContext {
    pub fn new(names: NameGenerator) -> LoweringContext {
        LoweringContext {
            scopes: ScopeTracker::new(),
            containers: Vec::new(),
            environments: Vec::new(),
            names,
            class_aliases: FxHashMap::default(),
            container_names: FxHashMap::default(),
            generated_names: FxHashMap::default(),
            has_parameter_properties: false,
            helpers: HelpersNeeded::default(),
            substitutions: SubstitutionFlags::empty(),
            depth: 0,
        }
    }

    // =========================================================================
    // Lexical environments
    // =========================================================================

    pub fn start_lexical_environment(&mut self) {
        self.environments.push(LexicalEnvironment::default());
    }

    /// Declare `name` with `var` at the top of the innermost environment.
    pub fn hoist_variable(&mut self, name: &str) {
        if self.environments.is_empty() {
            self.environments.push(LexicalEnvironment::default());
        }
        if let Some(environment) = self.environments.last_mut() {
            if !environment.hoisted.iter().any(|existing| existing == name) {
                environment.hoisted.push(name.to_string());
            }
        }
    }

    /// Close the innermost environment and return its hoisted names.
    pub fn end_lexical_environment(&mut self) -> Vec<String> {
        self.environments
            .pop()
            .map(|environment| environment.hoisted)
            .unwrap_or_default()
    }

    /// Generate a temporary and hoist it.
    pub fn create_temp_variable(&mut self) -> String {
        let name = self.names.temp_name();
        self.hoist_variable(&name);
        name
    }

    // =========================================================================
    // Namespace / enum containers
    // =========================================================================

    pub fn push_container(&mut self, binding: ContainerBinding) {
        tracing::trace!(
            kind = ?binding.kind,
            name = %binding.local_name,
            depth = self.containers.len(),
            "enter container"
        );
        self.container_names
            .insert(binding.declaration, binding.local_name.clone());
        self.containers.push(binding);
    }

    pub fn pop_container(&mut self) -> Option<ContainerBinding> {
        self.containers.pop()
    }

    /// Innermost namespace whose body is being lowered.
    pub fn current_namespace(&self) -> Option<&ContainerBinding> {
        self.containers
            .iter()
            .rev()
            .find(|binding| binding.kind == ContainerKind::Namespace)
    }

    /// Name member assignments are qualified with (`N` in `N.x = 1`).
    pub fn current_container_name(&self) -> Option<&str> {
        self.containers
            .last()
            .map(|binding| binding.local_name.as_str())
    }

    pub fn enable_substitution(&mut self, flags: SubstitutionFlags) {
        self.substitutions |= flags;
    }
}
