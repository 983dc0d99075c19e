//! Document loading utilities
//!
//! `DocumentLoader` reads yamlet source from a file or a string and decodes it. It is what
//! the CLI and the test harness use, and the entry point for anything that stores documents
//! on disk.
//!
//! # Example
//!
//! ```rust,ignore
//! use yamlet_parser::loader::{save_to_path, DocumentLoader};
//!
//! let root = DocumentLoader::from_path("hero.yamlet")?.parse();
//! save_to_path(&root, "hero.copy.yamlet")?;
//! ```

use crate::codec::{decode_str, encode};
use crate::error::LoaderError;
use crate::tree::Node;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Source text plus where it came from
#[derive(Debug, Clone)]
pub struct DocumentLoader {
    source: String,
    origin: Option<PathBuf>,
}

impl DocumentLoader {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LoaderError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| LoaderError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), bytes = source.len(), "loaded document source");
        Ok(Self {
            source,
            origin: Some(path.to_path_buf()),
        })
    }

    pub fn from_string(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            origin: None,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn path(&self) -> Option<&Path> {
        self.origin.as_deref()
    }

    pub fn parse(&self) -> Node {
        decode_str(&self.source)
    }
}

/// Encode `root` and write it to `path`, replacing any existing file.
pub fn save_to_path(root: &Node, path: impl AsRef<Path>) -> Result<(), LoaderError> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| LoaderError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    encode(root, BufWriter::new(file))?;
    debug!(path = %path.display(), "saved document");
    Ok(())
}
