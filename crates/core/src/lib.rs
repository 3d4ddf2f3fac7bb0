//! Optical size label glyphs and the designspace rules that select them.
//!
//! Labels such as `opsz.12_5` are compound glyphs built from the digit and
//! `period` glyphs of each source. One rule per label substitutes the
//! placeholder glyph while the `opsz` axis sits in the label's interval.

pub mod config;
pub mod generator;
pub mod glyph;
pub mod layout;
pub mod naming;
pub mod pipeline;
pub mod rules;
pub mod store;

#[cfg(test)]
mod memory;

pub use config::GenerationConfig;
pub use generator::{SourceReport, generate_source_glyphs};
pub use glyph::{Glyph, Outline, PlacedComponent};
pub use layout::{ComponentAdvances, compose};
pub use naming::{digit_glyph_names, opsz_glyph_name, opsz_rule_name};
pub use pipeline::{RunReport, run};
pub use rules::{OpszRule, generate_rules};
pub use store::{DesignDocument, GlyphStore};
