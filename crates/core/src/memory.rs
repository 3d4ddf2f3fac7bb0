//! In-memory glyph stores and documents for exercising the generator.

use std::{
    cell::{Cell, RefCell},
    collections::BTreeMap,
    path::{Path, PathBuf},
    rc::Rc,
};

use anyhow::{Context, Result};

use crate::{
    config::SEPARATOR_GLYPH,
    glyph::{Glyph, Outline},
    naming::DIGIT_GLYPH_NAMES,
    rules::OpszRule,
    store::{DesignDocument, GlyphStore},
};

#[derive(Debug, Default)]
struct GlyphSet {
    glyphs: BTreeMap<String, Glyph>,
    commits: usize,
}

/// A glyph store whose clones share the same glyph set.
#[derive(Debug, Clone)]
pub struct MemoryGlyphStore {
    path: PathBuf,
    set: Rc<RefCell<GlyphSet>>,
}

impl MemoryGlyphStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), set: Rc::default() }
    }

    /// A store holding the ten digits and the separator as contour glyphs.
    pub fn with_digits(
        path: impl Into<PathBuf>,
        digit_advance: f64,
        separator_advance: f64,
    ) -> Self {
        let mut store = Self::new(path);
        let base = DIGIT_GLYPH_NAMES
            .into_iter()
            .map(|name| (name, digit_advance))
            .chain([(SEPARATOR_GLYPH, separator_advance)]);
        for (name, advance) in base {
            store.insert(Glyph { name: name.into(), advance, outline: Outline::Contours(1) });
        }
        store
    }

    pub fn insert(&mut self, glyph: Glyph) {
        self.set.borrow_mut().glyphs.insert(glyph.name.clone(), glyph);
    }

    pub fn remove(&mut self, name: &str) {
        self.set.borrow_mut().glyphs.remove(name);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.set.borrow().glyphs.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.set.borrow().glyphs.len()
    }

    pub fn commits(&self) -> usize {
        self.set.borrow().commits
    }
}

impl GlyphStore for MemoryGlyphStore {
    fn path(&self) -> &Path {
        &self.path
    }

    fn read_glyph(&self, name: &str) -> Result<Glyph> {
        self.set
            .borrow()
            .glyphs
            .get(name)
            .cloned()
            .with_context(|| format!("Glyph '{name}' not found in {}", self.path.display()))
    }

    fn write_glyph(&mut self, glyph: Glyph) -> Result<()> {
        self.insert(glyph);
        Ok(())
    }

    fn commit(&mut self) -> Result<()> {
        self.set.borrow_mut().commits += 1;
        Ok(())
    }
}

/// A document over in-memory sources.
#[derive(Debug)]
pub struct MemoryDocument {
    path: PathBuf,
    sources: Vec<MemoryGlyphStore>,
    rules: Vec<OpszRule>,
    saves: Cell<usize>,
}

impl MemoryDocument {
    pub fn new(path: impl Into<PathBuf>, sources: Vec<MemoryGlyphStore>) -> Self {
        Self { path: path.into(), sources, rules: Vec::new(), saves: Cell::new(0) }
    }

    pub fn source(&self, path: impl AsRef<Path>) -> Option<MemoryGlyphStore> {
        self.sources.iter().find(|s| s.path.as_path() == path.as_ref()).cloned()
    }

    /// Add a hand-authored rule unrelated to the generated labels.
    pub fn push_rule_name(&mut self, name: &str) {
        self.rules.push(OpszRule {
            name: name.into(),
            axis: "wght".into(),
            minimum: 400.0,
            maximum: 700.0,
            substitute: "a".into(),
            with: "a.alt".into(),
        });
    }

    pub fn rules(&self) -> &[OpszRule] {
        &self.rules
    }

    pub fn saves(&self) -> usize {
        self.saves.get()
    }
}

impl DesignDocument for MemoryDocument {
    type Store = MemoryGlyphStore;

    fn path(&self) -> &Path {
        &self.path
    }

    fn source_paths(&self) -> Vec<PathBuf> {
        self.sources.iter().map(|s| s.path.clone()).collect()
    }

    fn open_source(&self, path: &Path) -> Result<MemoryGlyphStore> {
        self.source(path).with_context(|| format!("No source at {}", path.display()))
    }

    fn replace_rules(&mut self, rules: &[OpszRule]) -> Result<()> {
        self.rules = rules.to_vec();
        Ok(())
    }

    fn save(&self) -> Result<()> {
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }
}
