//! Error types
//!
//! Decoding never rejects a line, so the only failures the codec reports come from the
//! stream it reads or writes. Format and loader errors wrap those for the layers above.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading or writing a stream
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Errors raised by the format registry
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("Format '{0}' not found")]
    FormatNotFound(String),

    #[error("{0}")]
    NotSupported(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error(transparent)]
    Codec(#[from] CodecError),
}

/// Errors raised when loading or saving documents on disk
#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("could not read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("could not write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error(transparent)]
    Codec(#[from] CodecError),
}
