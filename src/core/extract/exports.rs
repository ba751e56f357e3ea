use swc_ecma_ast::{ExportAll, Module, NamedExport, Str};
use swc_ecma_visit::{Visit, VisitWith};

use crate::core::data::ModuleReference;

/// Collects the module source of every export declaration, in preorder.
///
/// Covers `export * from "x"`, `export * as ns from "x"` and
/// `export { a } from "x"`; a bare `export { a }` has no source and adds
/// nothing. Only the declaration's own source literal is read, never string
/// specifiers inside the braces.
#[derive(Debug, Default)]
pub struct ExportCollector {
    pub modules: Vec<ModuleReference>,
}

impl ExportCollector {
    pub fn new() -> Self {
        Self::default()
    }

    fn push_source(&mut self, src: &Str) {
        let reference = match src.raw.as_deref() {
            Some(raw) => ModuleReference::from_literal(raw),
            None => ModuleReference::from_literal(&src.value.to_string_lossy()),
        };
        self.modules.push(reference);
    }
}

impl Visit for ExportCollector {
    fn visit_export_all(&mut self, node: &ExportAll) {
        self.push_source(&node.src);
    }

    fn visit_named_export(&mut self, node: &NamedExport) {
        if let Some(src) = &node.src {
            self.push_source(src);
        }
    }
}

/// Collect re-exported module references from an aggregate declaration file.
pub fn collect_module_references(module: &Module) -> Vec<ModuleReference> {
    let mut collector = ExportCollector::new();
    module.visit_with(&mut collector);
    collector.modules
}
