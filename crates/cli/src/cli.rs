//! CLI definitions and entry point.

use std::{
    path::{Path, PathBuf},
    process::ExitCode,
};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use opsz_core::{GenerationConfig, RunReport, run};
use opsz_font_sources::DesignspaceFile;

const BIN_NAME: &str = "opsz-glyphs";

#[derive(Parser)]
#[command(name = BIN_NAME)]
#[command(about = "Generate optical size label glyphs and substitution rules for a designspace")]
pub struct Cli {
    /// Designspace document whose sources and rules are rewritten
    #[arg(value_name = "DESIGNSPACE")]
    pub designspace: Option<PathBuf>,
}

impl Cli {
    pub fn run(self) -> Result<ExitCode> {
        let Some(designspace) = self.designspace else {
            print!("{}", usage());
            return Ok(ExitCode::FAILURE);
        };

        let report = generate(&designspace)?;
        println!(
            "Wrote {} glyphs to {} sources and {} rules to {}",
            report.glyphs(),
            report.sources.len(),
            report.rules,
            designspace.display()
        );
        Ok(ExitCode::SUCCESS)
    }
}

/// Generate label glyphs into every source of `designspace` and rewrite its rules.
pub fn generate(designspace: &Path) -> Result<RunReport> {
    let mut document = DesignspaceFile::load(designspace)
        .with_context(|| format!("Failed to read {}", designspace.display()))?;
    let config = GenerationConfig::default();
    info!(
        "{}: {} labels per source ({}..={}) on axis '{}'",
        designspace.display(),
        config.label_count(),
        config.int_parts.start(),
        config.int_parts.end(),
        config.axis
    );
    run(&mut document, &config)
}

/// Message printed when no designspace is given.
pub fn usage() -> String {
    format!(
        "Please provide .designspace file location.\nUsage:\n    {BIN_NAME} some/path/to/my.designspace\n"
    )
}
