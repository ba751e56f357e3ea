//! Per-file generation: parse, extract, emit.
//!
//! These functions do no filesystem I/O; the caller reads the source and
//! writes the returned [`GeneratedFile`].

use std::sync::Arc;

use anyhow::Result;
use swc_common::SourceMap;

use crate::config::Config;
use crate::core::data::ComponentDefinition;
use crate::core::emit::{component_file_name, emit_component, emit_index, index_file_name};
use crate::core::extract::{collect_module_references, collect_properties};
use crate::core::parsers::dts::parse_dts_source;
use crate::utils::{file_stem, normalize_name};

/// Rendered binding source and the file name it belongs under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub file_name: String,
    pub source: String,
}

/// Generate the aggregate module from an `index.d.ts`.
pub fn generate_index(code: String, file_path: &str, config: &Config) -> Result<GeneratedFile> {
    let parsed = parse_dts_source(code, file_path, Arc::new(SourceMap::default()))?;
    let modules = collect_module_references(&parsed.module);

    Ok(GeneratedFile {
        file_name: index_file_name(config),
        source: emit_index(&modules, config),
    })
}

/// Generate the binding of one component declaration file.
///
/// The component is named after `file_name` up to its first `.`, normalized.
pub fn generate_component(
    code: String,
    file_path: &str,
    file_name: &str,
    config: &Config,
) -> Result<GeneratedFile> {
    let parsed = parse_dts_source(code, file_path, Arc::new(SourceMap::default()))?;
    let component = ComponentDefinition {
        name: normalize_name(file_stem(file_name)),
        properties: collect_properties(&parsed.module),
    };

    Ok(GeneratedFile {
        file_name: component_file_name(&component, config),
        source: emit_component(&component, config),
    })
}
