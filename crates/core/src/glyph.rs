//! Glyph model shared by the generator and the glyph store adapters.

use kurbo::Affine;

/// A reference to another glyph, placed with an affine transform.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedComponent {
    /// Name of the referenced glyph.
    pub base: String,
    pub transform: Affine,
}

impl PlacedComponent {
    pub fn new(base: impl Into<String>, transform: Affine) -> Self {
        Self { base: base.into(), transform }
    }

    /// Component shifted horizontally by `x`, without scaling or rotation.
    pub fn translated(base: impl Into<String>, x: f64) -> Self {
        Self::new(base, Affine::translate((x, 0.0)))
    }

    /// Horizontal placement of the component.
    pub fn x_offset(&self) -> f64 {
        self.transform.translation().x
    }

    /// Vertical placement of the component.
    pub fn y_offset(&self) -> f64 {
        self.transform.translation().y
    }
}

/// How a glyph's shape is described.
#[derive(Debug, Clone, PartialEq)]
pub enum Outline {
    /// Drawn directly with contours; only the contour count is carried.
    Contours(usize),
    /// Composed entirely from other glyphs.
    Components(Vec<PlacedComponent>),
}

impl Outline {
    pub fn components(&self) -> &[PlacedComponent] {
        match self {
            Outline::Contours(_) => &[],
            Outline::Components(components) => components,
        }
    }
}

/// A glyph as read from or written to a glyph store.
#[derive(Debug, Clone, PartialEq)]
pub struct Glyph {
    pub name: String,
    /// Advance width in font units.
    pub advance: f64,
    pub outline: Outline,
}

impl Glyph {
    /// A glyph built only from components.
    pub fn compound(
        name: impl Into<String>,
        advance: f64,
        components: Vec<PlacedComponent>,
    ) -> Self {
        Self { name: name.into(), advance, outline: Outline::Components(components) }
    }

    /// Names of the referenced glyphs, in placement order.
    pub fn component_names(&self) -> impl Iterator<Item = &str> {
        self.outline.components().iter().map(|c| c.base.as_str())
    }
}
