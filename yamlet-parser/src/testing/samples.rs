//! Verified sample documents
//!
//! Samples live in `samples/<name>.yamlet` at the crate root. Every sample is checked by the
//! integration tests to decode without surprises, so tests can rely on their shape.

use crate::codec::decode_str;
use crate::tree::Node;
use std::fs;
use std::path::PathBuf;

const SAMPLE_EXTENSION: &str = "yamlet";

pub struct Samples;

impl Samples {
    pub fn dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("samples")
    }

    pub fn path(name: &str) -> PathBuf {
        Self::dir().join(format!("{}.{}", name, SAMPLE_EXTENSION))
    }

    /// Raw text of a sample. Panics if it does not exist.
    pub fn source(name: &str) -> String {
        let path = Self::path(name);
        fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("Failed to read sample {}: {}", path.display(), e))
    }

    pub fn decode(name: &str) -> Node {
        decode_str(&Self::source(name))
    }

    /// Names of all samples, sorted
    pub fn list() -> Vec<String> {
        let dir = Self::dir();
        let entries = fs::read_dir(&dir)
            .unwrap_or_else(|e| panic!("Failed to list samples in {}: {}", dir.display(), e));
        let mut names: Vec<String> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.extension().is_some_and(|ext| ext == SAMPLE_EXTENSION))
            .filter_map(|path| path.file_stem().map(|s| s.to_string_lossy().into_owned()))
            .collect();
        names.sort();
        names
    }
}
