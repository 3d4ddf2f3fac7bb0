//! Full generation run over a designspace document.

use anyhow::{Context, Result};
use log::info;

use crate::{
    config::GenerationConfig,
    generator::{SourceReport, generate_source_glyphs},
    rules::generate_rules,
    store::DesignDocument,
};

/// Outcome of a full run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    pub sources: Vec<SourceReport>,
    /// Number of rules written to the document.
    pub rules: usize,
}

impl RunReport {
    pub fn glyphs(&self) -> usize {
        self.sources.iter().map(|s| s.glyphs).sum()
    }
}

/// Generate labels into every source, then replace the document's rules and save it.
///
/// Sources are committed one after another; a failure leaves earlier sources
/// committed and the document untouched.
pub fn run<D: DesignDocument>(document: &mut D, config: &GenerationConfig) -> Result<RunReport> {
    let mut sources = Vec::new();
    for path in document.source_paths() {
        println!("Source {}:", path.display());
        let mut store = document
            .open_source(&path)
            .with_context(|| format!("Failed to open source {}", path.display()))?;
        sources.push(generate_source_glyphs(&mut store, config)?);
    }

    let rules = generate_rules(config);
    document.replace_rules(&rules)?;
    document
        .save()
        .with_context(|| format!("Failed to save {}", document.path().display()))?;
    info!("{}: wrote {} rules", document.path().display(), rules.len());

    Ok(RunReport { sources, rules: rules.len() })
}
