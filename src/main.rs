use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use taro_bindgen::cli::{Arguments, ExitStatus};

fn main() -> ExitCode {
    let args = Arguments::parse();

    match taro_bindgen::cli::run_cli(args) {
        Ok(status) => status.into(),
        Err(err) => {
            eprintln!("{} {:#}", "Error:".bold().red(), err);
            ExitStatus::Error.into()
        }
    }
}
