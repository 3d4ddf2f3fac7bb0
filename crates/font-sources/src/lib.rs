//! norad-backed storage for optical size label generation.
//!
//! [`DesignspaceFile`] and [`UfoGlyphStore`] implement the storage traits of
//! `opsz-core` over designspace documents and UFO sources on disk.

pub mod designspace;
pub mod error;
mod rules_xml;
pub mod ufo;

pub use designspace::DesignspaceFile;
pub use error::{Error, Result};
pub use ufo::UfoGlyphStore;
