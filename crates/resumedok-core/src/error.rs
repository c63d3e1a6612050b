//! Error types for resumedok-core

use std::io;
use thiserror::Error;

use resumedok_ooxml::OoxmlError;

/// Result type alias for resume operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or saving a resume
#[derive(Error, Debug)]
pub enum Error {
    /// Error from the document layer (serialization, package, style values)
    #[error("Document error: {0}")]
    Ooxml(#[from] OoxmlError),

    /// IO error while reading settings
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Malformed settings file
    #[error("Invalid configuration: {0}")]
    Config(#[from] toml::de::Error),
}
