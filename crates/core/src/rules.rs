//! Substitution rules selecting label glyphs along the optical size axis.

use crate::{
    config::GenerationConfig,
    naming::{opsz_glyph_name, opsz_rule_name},
};

/// A rule substituting the placeholder with one label glyph while the axis
/// value lies in `[minimum, maximum]`.
#[derive(Debug, Clone, PartialEq)]
pub struct OpszRule {
    pub name: String,
    /// Axis the condition applies to.
    pub axis: String,
    pub minimum: f64,
    pub maximum: f64,
    /// Glyph being replaced.
    pub substitute: String,
    /// Glyph replacing it.
    pub with: String,
}

impl OpszRule {
    pub fn new(config: &GenerationConfig, int_part: u32, frac_part: u32) -> Self {
        let minimum = f64::from(int_part) + f64::from(frac_part) / 10.0;
        Self {
            name: opsz_rule_name(int_part, frac_part),
            axis: config.axis.clone(),
            minimum,
            maximum: minimum + config.interval_width,
            substitute: config.placeholder.clone(),
            with: opsz_glyph_name(int_part, frac_part),
        }
    }
}

/// One rule per label, in generation order.
pub fn generate_rules(config: &GenerationConfig) -> Vec<OpszRule> {
    config
        .pairs()
        .map(|(int_part, frac_part)| OpszRule::new(config, int_part, frac_part))
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_rule_count() {
        let rules = generate_rules(&GenerationConfig::default());
        assert_eq!(rules.len(), 1370);

        let names: HashSet<_> = rules.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names.len(), 1370);
    }

    #[test]
    fn test_rule_intervals() {
        let config = GenerationConfig::default();
        for (rule, (int_part, frac_part)) in generate_rules(&config).iter().zip(config.pairs()) {
            let expected = f64::from(int_part) + f64::from(frac_part) / 10.0;
            assert!((rule.minimum - expected).abs() < 1e-9, "{}", rule.name);
            assert!((rule.maximum - rule.minimum - 0.099).abs() < 1e-9, "{}", rule.name);
        }
    }

    #[test]
    fn test_rule_fields() {
        let rule = OpszRule::new(&GenerationConfig::default(), 12, 3);
        assert_eq!(rule.name, "opsz12_3");
        assert_eq!(rule.axis, "opsz");
        assert_eq!(rule.substitute, "underscore");
        assert_eq!(rule.with, "opsz.12_3");
    }
}
