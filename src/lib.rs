//! taro-bindgen - ReScript bindings for Taro components
//!
//! Reads the TypeScript declaration files of a component library and writes
//! ReScript bindings: an aggregate module aliasing every re-exported
//! component, and one `external make` declaration per component built from
//! its `...Props` interface.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments and directory driver)
//! - `config`: Configuration file loading and parsing
//! - `core`: Generation engine (parse, extract, emit)
//! - `utils`: Shared utility functions (name normalization)

pub mod cli;
pub mod config;
pub mod core;
pub mod utils;
