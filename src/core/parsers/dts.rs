use anyhow::{Result, anyhow};
use std::sync::Arc;
use swc_common::{FileName, Globals, SourceMap};
use swc_ecma_ast::Module;
use swc_ecma_parser::{Parser, StringInput, Syntax, TsSyntax};

/// Extension that switches the parser into ambient declaration mode.
pub const DTS_EXTENSION: &str = ".d.ts";

pub struct ParsedDts {
    pub module: Module,
}

/// Parse TypeScript declaration source into an AST.
///
/// Files ending in `.d.ts` are parsed in `dts` mode; anything else is parsed
/// as a regular TypeScript module. Only fatal errors are reported; the parser
/// recovers from everything else, so a partially malformed declaration still
/// yields a navigable tree.
pub fn parse_dts_source(
    code: String,
    file_path: &str,
    source_map: Arc<SourceMap>,
) -> Result<ParsedDts> {
    use swc_common::GLOBALS;

    GLOBALS.set(&Globals::new(), || {
        let source_file = source_map.new_source_file(FileName::Real(file_path.into()).into(), code);

        let syntax = Syntax::Typescript(TsSyntax {
            dts: file_path.ends_with(DTS_EXTENSION),
            ..Default::default()
        });

        let mut parser = Parser::new(syntax, StringInput::from(&*source_file), None);

        let module = parser
            .parse_module()
            .map_err(|e| anyhow!("Failed to parse declaration file {}: {:?}", file_path, e))?;

        Ok(ParsedDts { module })
    })
}
