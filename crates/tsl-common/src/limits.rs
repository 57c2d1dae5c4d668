//! Centralized limits for the lowering stage.
//!
//! Tree rewriting is recursive. These limits turn a pathological input into
//! an internal error instead of a stack overflow.

/// Maximum nesting depth the tree visitor will follow.
///
/// Every `visit` call that descends into a child increments the depth. When
/// the depth reaches this value the lowering aborts with
/// `LoweringError::DepthExceeded`.
pub const MAX_LOWERING_DEPTH: u32 = 500;

/// Maximum depth for qualified names (`A.B.C.D`) and dotted namespace
/// declarations (`namespace A.B.C.D {}`).
pub const MAX_QUALIFIED_NAME_DEPTH: u32 = 100;

/// Maximum depth for flattening nested binding patterns
/// (`export const { a: { b: { c } } } = obj` inside a namespace).
pub const MAX_BINDING_PATTERN_DEPTH: u32 = 100;

/// Upper bound on `_1`, `_2`, ... suffixes tried when generating a unique
/// name before falling back to a counter-only name.
pub const MAX_UNIQUE_NAME_ATTEMPTS: u32 = 10_000;
