use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use serde::Deserialize;

pub const CONFIG_FILE_NAME: &str = ".taro-bindgenrc.json";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Namespace prefix of every generated module, e.g. `Taro` in `Taro__View`.
    #[serde(default = "default_prefix")]
    pub prefix: String,
    #[serde(default = "default_prefix_join")]
    pub prefix_join: String,
    /// JS module the generated externals are imported from.
    #[serde(default = "default_module_name")]
    pub module_name: String,
    /// Export name every component binding points at.
    #[serde(default = "default_external_name")]
    pub external_name: String,
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    /// Entries whose name contains this are treated as aggregate index files.
    #[serde(default = "default_index_marker")]
    pub index_marker: String,
    /// Entries whose name contains any of these are skipped.
    #[serde(default = "default_excludes")]
    pub excludes: Vec<String>,
}

fn default_prefix() -> String {
    "Taro".to_string()
}

fn default_prefix_join() -> String {
    "__".to_string()
}

fn default_module_name() -> String {
    "@tarojs/components".to_string()
}

fn default_external_name() -> String {
    "Text".to_string()
}

fn default_output_dir() -> String {
    "src/components".to_string()
}

fn default_index_marker() -> String {
    "index.d.ts".to_string()
}

fn default_excludes() -> Vec<String> {
    ["common.d.ts", "event.d.ts"].map(String::from).to_vec()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prefix: default_prefix(),
            prefix_join: default_prefix_join(),
            module_name: default_module_name(),
            external_name: default_external_name(),
            output_dir: default_output_dir(),
            index_marker: default_index_marker(),
            excludes: default_excludes(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// An empty `indexMarker` would match every entry, and an empty
    /// `excludes` item would skip every entry.
    pub fn validate(&self) -> Result<()> {
        if self.prefix.is_empty() {
            bail!("'prefix' must not be empty");
        }
        if self.output_dir.is_empty() {
            bail!("'outputDir' must not be empty");
        }
        if self.index_marker.is_empty() {
            bail!("'indexMarker' must not be empty");
        }
        if self.excludes.iter().any(|e| e.is_empty()) {
            bail!("'excludes' must not contain empty entries");
        }

        Ok(())
    }

    /// `<prefix><join><name>`, the module name a binding is published under.
    pub fn qualified_name(&self, name: &str) -> String {
        format!("{}{}{}", self.prefix, self.prefix_join, name)
    }

    pub fn is_index_file(&self, file_name: &str) -> bool {
        file_name.contains(&self.index_marker)
    }

    pub fn is_excluded(&self, file_name: &str) -> bool {
        self.excludes.iter().any(|e| file_name.contains(e.as_str()))
    }
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Directory relative paths in the config resolve against: the config
    /// file's directory, or the start directory when using defaults.
    pub root: PathBuf,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

impl ConfigLoadResult {
    pub fn output_dir(&self) -> PathBuf {
        self.root.join(&self.config.output_dir)
    }
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config
                .validate()
                .with_context(|| format!("Invalid config file: {:?}", path))?;
            let root = path
                .parent()
                .map_or_else(|| start_dir.to_path_buf(), Path::to_path_buf);
            Ok(ConfigLoadResult {
                config,
                root,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            root: start_dir.to_path_buf(),
            from_file: false,
        }),
    }
}
