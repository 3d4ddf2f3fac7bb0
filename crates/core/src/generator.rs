//! Per-source label glyph generation.

use std::path::PathBuf;

use anyhow::{Context, Result};
use log::info;

use crate::{
    config::GenerationConfig,
    layout::{ComponentAdvances, compose},
    naming::{label_components, opsz_glyph_name},
    store::GlyphStore,
};

/// Outcome of generating labels into one source.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceReport {
    pub path: PathBuf,
    /// Number of label glyphs written.
    pub glyphs: usize,
}

/// Write every label glyph into `store` and commit it.
///
/// Base advances are read before anything is written, so a source missing a
/// digit or the separator is left untouched.
pub fn generate_source_glyphs<S: GlyphStore>(
    store: &mut S,
    config: &GenerationConfig,
) -> Result<SourceReport> {
    let advances = ComponentAdvances::read(&*store)?;

    let mut glyphs = 0;
    for (int_part, frac_part) in config.pairs() {
        let name = opsz_glyph_name(int_part, frac_part);
        let components = label_components(int_part, frac_part);
        let glyph = compose(&name, &components, &advances)?;

        println!("writeGlyph {name} with: {}", components.join(" "));
        store
            .write_glyph(glyph)
            .with_context(|| format!("Failed to write {name} to {}", store.path().display()))?;
        glyphs += 1;
    }

    store
        .commit()
        .with_context(|| format!("Failed to commit {}", store.path().display()))?;
    info!("{}: committed {glyphs} glyphs", store.path().display());

    Ok(SourceReport { path: store.path().to_path_buf(), glyphs })
}
