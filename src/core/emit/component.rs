use super::OUTPUT_EXTENSION;
use crate::config::Config;
use crate::core::data::{ComponentDefinition, PropertyDefinition};

/// Placeholder for a property name or type the extractor could not read.
pub const UNKNOWN: &str = "undefined";

/// Suffix attached to the parameter of a required property.
pub const REQUIRED_SUFFIX: &str = "=?";

/// Name of a component's output, e.g. `Taro__ScrollView.res`.
pub fn component_file_name(component: &ComponentDefinition, config: &Config) -> String {
    format!(
        "{}.{}",
        config.qualified_name(&component.name),
        OUTPUT_EXTENSION
    )
}

/// Render a labelled argument: `~name: type`, plus `=?` when `required`.
pub fn render_parameter(prop: &PropertyDefinition) -> String {
    format!(
        "~{}: {}{}",
        prop.name.as_deref().unwrap_or(UNKNOWN),
        prop.ty.as_deref().unwrap_or(UNKNOWN),
        if prop.required { REQUIRED_SUFFIX } else { "" }
    )
}

/// Render the `external make` binding of one component.
///
/// Every binding points at the configured `external_name` (`"Text"` by
/// default), whichever component it is generated for.
pub fn emit_component(component: &ComponentDefinition, config: &Config) -> String {
    let params = component
        .properties
        .iter()
        .map(render_parameter)
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "@module(\"{}\") @react.component\nexternal make: ({}) => React.element = \"{}\"",
        config.module_name, params, config.external_name
    )
}
