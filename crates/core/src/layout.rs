//! Horizontal layout of compound label glyphs.

use anyhow::{Context, Result};
use indexmap::IndexMap;
use log::debug;

use crate::{
    glyph::{Glyph, PlacedComponent},
    naming::base_glyph_names,
    store::GlyphStore,
};

/// Advance widths of the glyphs labels are composed from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComponentAdvances {
    advances: IndexMap<String, f64>,
}

impl ComponentAdvances {
    /// Read the separator and digit advances from a glyph store.
    ///
    /// Fails on the first base glyph missing from the store.
    pub fn read(store: &impl GlyphStore) -> Result<Self> {
        let mut advances = Self::default();
        for name in base_glyph_names() {
            let glyph = store.read_glyph(name).with_context(|| {
                format!("Missing base glyph '{name}' in {}", store.path().display())
            })?;
            advances.insert(name, glyph.advance);
        }
        debug!("{}: base advances {:?}", store.path().display(), advances.advances);
        Ok(advances)
    }

    pub fn insert(&mut self, name: impl Into<String>, advance: f64) {
        self.advances.insert(name.into(), advance);
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.advances.get(name).copied()
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for ComponentAdvances {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        Self {
            advances: iter.into_iter().map(|(name, advance)| (name.into(), advance)).collect(),
        }
    }
}

/// Lay `components` out left to right and return the resulting compound glyph.
///
/// Each component sits at the summed advance of the ones before it, on the
/// baseline. The glyph's advance is the sum of all component advances.
pub fn compose(name: &str, components: &[&str], advances: &ComponentAdvances) -> Result<Glyph> {
    let mut advance = 0.0;
    let mut placed = Vec::with_capacity(components.len());
    for &component in components {
        let width = advances
            .get(component)
            .with_context(|| format!("No advance width for component '{component}' of {name}"))?;
        placed.push(PlacedComponent::translated(component, advance));
        advance += width;
    }
    Ok(Glyph::compound(name, advance, placed))
}
