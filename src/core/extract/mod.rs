//! Extraction - walks a parsed declaration file and collects raw records.
//!
//! - `exports`: module references re-exported by an aggregate `index.d.ts`
//! - `props`: property signatures of `...Props` interfaces
//!
//! Each entry point builds a fresh collector, so repeated calls over the same
//! tree return identical results.

pub mod exports;
pub mod props;


pub use exports::{ExportCollector, collect_module_references};
pub use props::{PROPS_SUFFIX, PropsCollector, collect_properties};
