use swc_ecma_ast::{
    Expr, Module, TsEntityName, TsInterfaceDecl, TsKeywordTypeKind, TsPropertySignature, TsType,
    TsTypeElement,
};
use swc_ecma_visit::{Visit, VisitWith};

use crate::core::data::PropertyDefinition;

/// Interfaces whose name ends with this suffix are captured (case-sensitive).
pub const PROPS_SUFFIX: &str = "Props";

/// Collects property signatures of `...Props` interfaces.
///
/// `capturing` is a single flag for the whole traversal: every interface
/// overwrites it with its own suffix check, and it keeps that value until the
/// next interface is visited. Only direct members of a capturing interface
/// are recorded; signatures inside nested type literals are not.
#[derive(Debug, Default)]
pub struct PropsCollector {
    capturing: bool,
    pub properties: Vec<PropertyDefinition>,
}

impl PropsCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the most recently visited interface is a `...Props` interface.
    pub fn is_capturing(&self) -> bool {
        self.capturing
    }
}

impl Visit for PropsCollector {
    fn visit_ts_interface_decl(&mut self, node: &TsInterfaceDecl) {
        self.capturing = node.id.sym.ends_with(PROPS_SUFFIX);

        for member in &node.body.body {
            if self.capturing
                && let TsTypeElement::TsPropertySignature(signature) = member
            {
                self.properties.push(property_definition(signature));
            }
        }

        node.visit_children_with(self);
    }
}

/// Build a definition from one property signature.
fn property_definition(signature: &TsPropertySignature) -> PropertyDefinition {
    let mut prop = PropertyDefinition::default();

    if !signature.computed
        && let Expr::Ident(ident) = &*signature.key
    {
        prop.name = Some(ident.sym.to_string());
    }

    if signature.optional {
        prop.required = false;
    }

    if let Some(type_ann) = &signature.type_ann {
        prop.ty = property_type(&type_ann.type_ann);
    }

    prop
}

/// `string`/`number` keywords keep their keyword text; a type reference keeps
/// its outer identifier and drops any type arguments.
fn property_type(ts_type: &TsType) -> Option<String> {
    match ts_type {
        TsType::TsKeywordType(keyword) => match keyword.kind {
            TsKeywordTypeKind::TsStringKeyword => Some("string".to_string()),
            TsKeywordTypeKind::TsNumberKeyword => Some("number".to_string()),
            _ => None,
        },
        TsType::TsTypeRef(type_ref) => match &type_ref.type_name {
            TsEntityName::Ident(ident) => Some(ident.sym.to_string()),
            _ => None,
        },
        _ => None,
    }
}

/// Collect the properties of every `...Props` interface in declaration order.
pub fn collect_properties(module: &Module) -> Vec<PropertyDefinition> {
    let mut collector = PropsCollector::new();
    module.visit_with(&mut collector);
    collector.properties
}
