//! Source parsers.
//!
//! - `dts`: TypeScript declaration parser (uses swc for AST generation)

pub mod dts;
