//! Error types for reading and writing font sources.

use std::{io, path::PathBuf, result};

use norad::error::{DesignSpaceLoadError, FontLoadError, FontWriteError, NamingError};
use quick_xml::events::attributes::AttrError;

/// Errors that can occur while reading or writing designspace sources.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to load designspace '{path}': {source}")]
    LoadDesignspace {
        path: PathBuf,
        source: DesignSpaceLoadError,
    },

    #[error("failed to parse designspace XML: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("failed to parse designspace XML attribute: {0}")]
    XmlAttribute(#[from] AttrError),

    #[error("failed to load source '{path}': {source}")]
    LoadSource { path: PathBuf, source: FontLoadError },

    #[error("failed to save source '{path}': {source}")]
    SaveSource { path: PathBuf, source: FontWriteError },

    #[error("glyph '{glyph}' not found in '{path}'")]
    MissingGlyph { glyph: String, path: PathBuf },

    #[error("invalid glyph name '{name}': {source}")]
    InvalidName { name: String, source: NamingError },

    #[error("glyph '{0}' has contours; only compound glyphs can be written")]
    UnsupportedOutline(String),

    #[error("I/O error on '{path}': {source}")]
    Io { path: PathBuf, source: io::Error },
}

pub type Result<T> = result::Result<T, Error>;
