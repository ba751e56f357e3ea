//! Core data types produced by extraction and consumed by emission.
//!
//! ## Module Structure
//!
//! - `component`: Property and component definitions (from `...Props` interfaces)
//! - `module_ref`: Module references (from export declarations)

pub mod component;
pub mod module_ref;

pub use component::{ComponentDefinition, PropertyDefinition};
pub use module_ref::ModuleReference;
