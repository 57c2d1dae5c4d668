//! Syntax tree for the tsl lowering stage.
//!
//! Nodes live in a [`NodeArena`] and refer to each other through
//! [`NodeIndex`] handles. The arena is append-only: rewriting a tree never
//! mutates an existing node, it allocates a new one whose `original` link
//! points back at the node it replaces.
//!
//! - `base` - `NodeIndex` / `NodeList`
//! - `flags` - node, emit and modifier flag sets
//! - `node` - the `NodeData` sum type and operator enums
//! - `arena` - allocation, lookup and `update`
//! - `factory` - `create_*` builders used by tests and by the lowering stage
//! - `children` - ordered child walking and structural child mapping
//! - `printer` - a small reference printer used to observe lowered trees

pub mod base;
pub use base::{NodeIndex, NodeList};

pub mod flags;
pub use flags::{EmitFlags, ModifierFlags, ModifierKind, Modifiers, NodeFlags};

pub mod node;
pub use node::*;

pub mod arena;
pub use arena::NodeArena;

pub mod factory;

pub mod children;
pub use children::{Child, ChildMut};

pub mod printer;
pub use printer::{Printer, PrinterOptions, SubstitutionLookup};
