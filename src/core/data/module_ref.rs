use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

// First run of ASCII word characters, e.g. `"./scroll-view"` -> `scroll`.
static WORD_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9A-Za-z_]+").unwrap());

/// A sub-module re-exported by an aggregate declaration file.
///
/// Holds the leading word run of the export's source literal. Quotes, path
/// separators and scope markers are dropped by construction; a literal with
/// no word characters yields an empty reference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ModuleReference(String);

impl ModuleReference {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Build a reference from the raw source text of a string literal
    /// (quotes included).
    pub fn from_literal(raw: &str) -> Self {
        let name = WORD_REGEX.find(raw).map_or("", |m| m.as_str());
        Self(name.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ModuleReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
