//! Formats by name
//!
//! The CLI resolves `--format` and `--list-formats` through a [FormatRegistry]; tests and
//! embedders can register formats of their own next to the built-in ones.

use crate::error::FormatError;
use crate::formats::format::{unsupported, Format};
use crate::formats::{JsonFormat, TreevizFormat, YamletFormat};
use crate::tree::Node;
use std::collections::HashMap;

/// Formats keyed by [Format::name]
///
/// ```ignore
/// let registry = FormatRegistry::with_defaults();
/// let root = registry.parse("name: hero\n", "yamlet")?;
/// let json = registry.serialize(&root, "json")?;
/// ```
pub struct FormatRegistry {
    formats: HashMap<String, Box<dyn Format>>,
}

impl FormatRegistry {
    pub fn new() -> Self {
        FormatRegistry {
            formats: HashMap::new(),
        }
    }

    /// Add `format`, replacing any format registered under the same name.
    pub fn register<F: Format + 'static>(&mut self, format: F) {
        self.formats
            .insert(format.name().to_string(), Box::new(format));
    }

    pub fn get(&self, name: &str) -> Result<&dyn Format, FormatError> {
        self.formats
            .get(name)
            .map(|f| f.as_ref())
            .ok_or_else(|| FormatError::FormatNotFound(name.to_string()))
    }

    pub fn has(&self, name: &str) -> bool {
        self.formats.contains_key(name)
    }

    /// Registered names, sorted
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formats.keys().cloned().collect();
        names.sort();
        names
    }

    /// Decode `source` with the format called `format`.
    pub fn parse(&self, source: &str, format: &str) -> Result<Node, FormatError> {
        let target = self.get(format)?;
        if !target.supports_parsing() {
            return Err(unsupported(format, "parsing"));
        }
        target.parse(source)
    }

    /// Write `root` with the format called `format`.
    pub fn serialize(&self, root: &Node, format: &str) -> Result<String, FormatError> {
        let target = self.get(format)?;
        if !target.supports_serialization() {
            return Err(unsupported(format, "serialization"));
        }
        target.serialize(root)
    }

    /// yamlet, json (pretty) and treeviz (default options)
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(YamletFormat);
        registry.register(JsonFormat::default());
        registry.register(TreevizFormat::default());

        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
