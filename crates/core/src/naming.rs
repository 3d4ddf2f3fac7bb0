//! Glyph and rule naming for optical size labels.

use crate::config::{OPSZ_PREFIX, SEPARATOR_GLYPH};

/// Base glyph names indexed by the digit they draw.
pub const DIGIT_GLYPH_NAMES: [&str; 10] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

/// Glyph names for the decimal digits of `number`, most significant first.
///
/// `23` maps to `["two", "three"]`.
pub fn digit_glyph_names(number: u32) -> Vec<&'static str> {
    number
        .to_string()
        .bytes()
        .map(|digit| DIGIT_GLYPH_NAMES[usize::from(digit - b'0')])
        .collect()
}

/// All glyphs a label can be built from: the separator and the ten digits.
pub fn base_glyph_names() -> impl Iterator<Item = &'static str> {
    std::iter::once(SEPARATOR_GLYPH).chain(DIGIT_GLYPH_NAMES)
}

/// Components of the label for `int_part.frac_part`, left to right.
pub fn label_components(int_part: u32, frac_part: u32) -> Vec<&'static str> {
    let mut components = digit_glyph_names(int_part);
    components.push(SEPARATOR_GLYPH);
    components.extend(digit_glyph_names(frac_part));
    components
}

/// Canonical name of a generated label glyph, e.g. `opsz.8_0`.
pub fn opsz_glyph_name(int_part: u32, frac_part: u32) -> String {
    format!("{OPSZ_PREFIX}.{int_part}_{frac_part}")
}

/// Name of the substitution rule selecting a label glyph, e.g. `opsz8_0`.
pub fn opsz_rule_name(int_part: u32, frac_part: u32) -> String {
    format!("{OPSZ_PREFIX}{int_part}_{frac_part}")
}
