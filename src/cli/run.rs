//! Directory driver.
//!
//! Each input directory is listed in file-name order and every entry is
//! dispatched by name:
//!
//! - contains the index marker (`index.d.ts`): aggregate module, written to a
//!   single fixed file (a later index overwrites an earlier one)
//! - contains an excluded substring (`common.d.ts`, `event.d.ts`): skipped
//! - anything else: one component binding, with its path logged to `out`
//!
//! The first parse or I/O error stops the whole run.

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use walkdir::WalkDir;

use crate::config::{Config, ConfigLoadResult};
use crate::core::{GeneratedFile, generate_component, generate_index};

/// Process every directory in order, writing bindings under the configured
/// output directory.
pub fn run<W: Write>(
    dirs: &[PathBuf],
    loaded: &ConfigLoadResult,
    out: &mut W,
) -> Result<()> {
    let output_dir = loaded.output_dir();

    for dir in dirs {
        generate_dir(dir, &loaded.config, &output_dir, out)?;
    }

    Ok(())
}

/// Process the entries of one directory.
pub fn generate_dir<W: Write>(
    dir: &Path,
    config: &Config,
    output_dir: &Path,
    out: &mut W,
) -> Result<()> {
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry =
            entry.with_context(|| format!("Failed to list directory: {}", dir.display()))?;
        if entry.file_type().is_dir() {
            continue;
        }

        let file_name = entry.file_name().to_string_lossy().to_string();
        let path = entry.path();

        if config.is_index_file(&file_name) {
            let code = read_source(path)?;
            let generated = generate_index(code, &path.to_string_lossy(), config)?;
            write_output(output_dir, &generated)?;
        } else if !config.is_excluded(&file_name) {
            writeln!(out, "{}", path.display())?;
            let code = read_source(path)?;
            let generated =
                generate_component(code, &path.to_string_lossy(), &file_name, config)?;
            write_output(output_dir, &generated)?;
        }
    }

    Ok(())
}

fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path.display()))
}

fn write_output(output_dir: &Path, generated: &GeneratedFile) -> Result<()> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create directory: {}", output_dir.display()))?;

    let path = output_dir.join(&generated.file_name);
    fs::write(&path, &generated.source)
        .with_context(|| format!("Failed to write file: {}", path.display()))
}
