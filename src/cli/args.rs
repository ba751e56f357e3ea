//! CLI argument definitions using clap.
//!
//! The interface is a single positional list of declaration directories;
//! everything else comes from the optional config file.

use std::path::PathBuf;

use clap::{CommandFactory, Parser};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Directories containing component declaration files (`*.d.ts`)
    pub dirs: Vec<PathBuf>,
}

impl Arguments {
    /// Check if any directory was provided, otherwise print help and return None.
    pub fn with_dirs_or_help(self) -> Option<Self> {
        if self.dirs.is_empty() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }
}
