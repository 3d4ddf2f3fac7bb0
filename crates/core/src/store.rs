//! Storage seams the generator works against.
//!
//! The generator never touches files directly: a [`DesignDocument`] enumerates
//! sources and owns the rule list, and each source exposes a [`GlyphStore`].

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::{glyph::Glyph, rules::OpszRule};

/// The glyph set of one font source.
pub trait GlyphStore {
    /// Location of the source on disk.
    fn path(&self) -> &Path;

    /// Load a glyph. Fails if `name` is not in the glyph set.
    fn read_glyph(&self, name: &str) -> Result<Glyph>;

    /// Add a glyph, replacing any existing glyph of the same name.
    fn write_glyph(&mut self, glyph: Glyph) -> Result<()>;

    /// Persist written glyphs together with the glyph and layer contents indexes.
    fn commit(&mut self) -> Result<()>;
}

/// A designspace document: a set of sources plus substitution rules.
pub trait DesignDocument {
    type Store: GlyphStore;

    /// Location of the document on disk.
    fn path(&self) -> &Path;

    /// Resolved paths of every source, in document order.
    fn source_paths(&self) -> Vec<PathBuf>;

    /// Open the glyph set of the source at `path`.
    fn open_source(&self, path: &Path) -> Result<Self::Store>;

    /// Discard the current rules and install `rules` in their place.
    fn replace_rules(&mut self, rules: &[OpszRule]) -> Result<()>;

    /// Write the document back to [`DesignDocument::path`].
    fn save(&self) -> Result<()>;
}
