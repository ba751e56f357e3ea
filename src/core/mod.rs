//! Core generation engine.
//!
//! ## Module Structure
//!
//! - `parsers`: swc-based TypeScript declaration parser
//! - `data`: Extracted records (ModuleReference, PropertyDefinition, ComponentDefinition)
//! - `extract`: AST visitors collecting exports and `...Props` properties
//! - `emit`: ReScript source rendering
//! - `generate`: Per-file pipeline tying the phases together

pub mod data;
pub mod emit;
pub mod extract;
pub mod generate;
pub mod parsers;

pub use data::{ComponentDefinition, ModuleReference, PropertyDefinition};
pub use generate::{GeneratedFile, generate_component, generate_index};
