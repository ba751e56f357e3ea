/// One property signature captured from a `...Props` interface.
///
/// `name` is only set for plain identifier keys and `ty` only for
/// `string`/`number` keywords or identifier type references; anything else
/// is left unset and rendered as `undefined` by the emitter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyDefinition {
    pub name: Option<String>,
    pub ty: Option<String>,
    pub required: bool,
}

impl Default for PropertyDefinition {
    fn default() -> Self {
        Self {
            name: None,
            ty: None,
            required: true,
        }
    }
}

impl PropertyDefinition {
    pub fn new(name: &str, ty: &str, required: bool) -> Self {
        Self {
            name: Some(name.to_string()),
            ty: Some(ty.to_string()),
            required,
        }
    }
}

/// Properties of one component, plus the normalized name its binding is
/// written under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentDefinition {
    pub name: String,
    pub properties: Vec<PropertyDefinition>,
}
