//! Emission - renders extracted records as ReScript binding source.
//!
//! - `index`: aggregate module aliasing every re-exported component
//! - `component`: one `external make` declaration per component

pub mod component;
pub mod index;

pub use component::{component_file_name, emit_component, render_parameter};
pub use index::{emit_index, index_file_name};

/// File extension of generated bindings.
pub const OUTPUT_EXTENSION: &str = "res";
