//! Command-line layer: argument parsing and the directory driver.

use std::io;

use anyhow::{Context, Result};

mod args;
mod exit_status;
mod run;

pub use args::Arguments;
pub use exit_status::ExitStatus;
pub use run::{generate_dir, run};

use crate::config::load_config;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let Some(args) = args.with_dirs_or_help() else {
        return Ok(ExitStatus::Success);
    };

    let cwd = std::env::current_dir().context("Failed to resolve current directory")?;
    let loaded = load_config(&cwd)?;

    run(&args.dirs, &loaded, &mut io::stdout().lock())?;

    Ok(ExitStatus::Success)
}
