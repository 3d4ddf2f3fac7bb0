//! Configuration constants for optical size label generation.

use std::ops::RangeInclusive;

/// Name of the optical size axis the generated rules are conditioned on.
pub const OPSZ_AXIS: &str = "opsz";

/// Glyph that every generated rule substitutes.
pub const PLACEHOLDER_GLYPH: &str = "underscore";

/// Glyph placed between the integer and fractional digits.
pub const SEPARATOR_GLYPH: &str = "period";

/// Prefix shared by generated glyph names (`opsz.8_0`) and rule names (`opsz8_0`).
pub const OPSZ_PREFIX: &str = "opsz";

/// Smallest integer part of a generated label.
pub const FIRST_INT_PART: u32 = 8;

/// Largest integer part of a generated label.
pub const LAST_INT_PART: u32 = 144;

/// Number of fractional digits per integer part (a single decimal digit).
pub const FRAC_PARTS: u32 = 10;

/// Width of the half-open axis interval each rule is active in.
pub const RULE_INTERVAL_WIDTH: f64 = 0.099;

/// Parameters of a generation run.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationConfig {
    /// Integer parts to generate labels for.
    pub int_parts: RangeInclusive<u32>,
    /// Axis name written into rule conditions.
    pub axis: String,
    /// Glyph substituted by every rule.
    pub placeholder: String,
    /// Width of each rule's axis interval.
    pub interval_width: f64,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            int_parts: FIRST_INT_PART..=LAST_INT_PART,
            axis: OPSZ_AXIS.to_string(),
            placeholder: PLACEHOLDER_GLYPH.to_string(),
            interval_width: RULE_INTERVAL_WIDTH,
        }
    }
}

impl GenerationConfig {
    /// Every `(int_part, frac_part)` pair, in generation order.
    pub fn pairs(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.int_parts
            .clone()
            .flat_map(|int_part| (0..FRAC_PARTS).map(move |frac_part| (int_part, frac_part)))
    }

    /// Number of labels generated per source.
    pub fn label_count(&self) -> usize {
        self.int_parts.clone().count() * FRAC_PARTS as usize
    }
}
