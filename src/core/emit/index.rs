use super::OUTPUT_EXTENSION;
use crate::config::Config;
use crate::core::data::ModuleReference;
use crate::utils::normalize_name;

/// Name of the aggregate output, e.g. `Taro__Components.res`.
pub fn index_file_name(config: &Config) -> String {
    format!("{}.{}", config.qualified_name("Components"), OUTPUT_EXTENSION)
}

/// Render one `module X = Taro__X` alias per reference, in input order.
///
/// References are neither deduplicated nor checked for emptiness.
pub fn emit_index(modules: &[ModuleReference], config: &Config) -> String {
    modules
        .iter()
        .map(|module| {
            let name = normalize_name(module.as_str());
            format!("module {} = {}", name, config.qualified_name(&name))
        })
        .collect::<Vec<_>>()
        .join("\n")
}
