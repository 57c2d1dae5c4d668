//! Common types and utilities for the tsl lowering crates.
//!
//! This crate provides the pieces every other tsl crate reads but never
//! mutates:
//! - Compiler options consumed by the lowering stage (`LoweringOptions`,
//!   `ScriptTarget`, `ModuleKind`, `ImportsNotUsedAsValues`)
//! - Centralized recursion limits
//! - Tracing subscriber setup for debugging

// Compiler options (read-only after construction)
pub mod options;
pub use options::{ImportsNotUsedAsValues, LoweringOptions, ModuleKind, OptionsError, ScriptTarget};

// Centralized limits and thresholds
pub mod limits;

// Tracing subscriber setup driven by TSL_LOG / RUST_LOG
pub mod tracing_config;
