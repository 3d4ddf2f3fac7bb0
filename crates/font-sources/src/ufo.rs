//! UFO glyph sets backed by norad.

use std::{
    fs::{self, remove_dir_all, rename},
    path::{Path, PathBuf},
};

use kurbo::Affine;
use log::{debug, warn};
use norad::{AffineTransform, Font};
use opsz_core::{Glyph, GlyphStore, Outline, PlacedComponent};

use crate::error::{Error, Result};

/// The default layer of a UFO source.
///
/// Written glyphs are held in memory until [`GlyphStore::commit`], which
/// serializes the whole UFO next to the original and swaps it into place.
/// Files norad does not model (notes, tool caches) are carried over from the
/// original before the swap.
#[derive(Debug)]
pub struct UfoGlyphStore {
    path: PathBuf,
    font: Font,
}

impl UfoGlyphStore {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let font =
            Font::load(&path).map_err(|source| Error::LoadSource { path: path.clone(), source })?;
        debug!("{}: {} glyphs in default layer", path.display(), font.default_layer().len());
        Ok(Self { path, font })
    }

    fn glyph(&self, name: &str) -> Result<Glyph> {
        let glyph = self.font.default_layer().get_glyph(name).ok_or_else(|| Error::MissingGlyph {
            glyph: name.to_string(),
            path: self.path.clone(),
        })?;
        Ok(from_norad_glyph(glyph))
    }

    fn insert(&mut self, glyph: Glyph) -> Result<()> {
        let glyph = to_norad_glyph(glyph)?;
        self.font.default_layer_mut().insert_glyph(glyph);
        Ok(())
    }

    fn save(&self) -> Result<()> {
        let staging = sibling(&self.path, "staging");
        let backup = sibling(&self.path, "backup");
        for leftover in [&staging, &backup] {
            if leftover.exists() {
                remove_dir_all(leftover).map_err(|source| io_error(leftover, source))?;
            }
        }

        debug!("{}: writing to {}", self.path.display(), staging.display());
        self.font
            .save(&staging)
            .map_err(|source| Error::SaveSource { path: self.path.clone(), source })?;
        copy_missing(&self.path, &staging)?;

        rename(&self.path, &backup).map_err(|source| io_error(&self.path, source))?;
        if let Err(source) = rename(&staging, &self.path) {
            if let Err(restore) = rename(&backup, &self.path) {
                warn!("{}: original left at {}: {restore}", self.path.display(), backup.display());
            }
            return Err(io_error(&staging, source));
        }
        remove_dir_all(&backup).map_err(|source| io_error(&backup, source))
    }
}

impl GlyphStore for UfoGlyphStore {
    fn path(&self) -> &Path {
        &self.path
    }

    fn read_glyph(&self, name: &str) -> anyhow::Result<Glyph> {
        Ok(self.glyph(name)?)
    }

    fn write_glyph(&mut self, glyph: Glyph) -> anyhow::Result<()> {
        Ok(self.insert(glyph)?)
    }

    fn commit(&mut self) -> anyhow::Result<()> {
        Ok(self.save()?)
    }
}

/// `Foo.ufo` -> `.Foo.ufo.opsz-<suffix>` in the same directory.
fn sibling(path: &Path, suffix: &str) -> PathBuf {
    let file_name = path.file_name().unwrap_or_default().to_string_lossy();
    path.with_file_name(format!(".{file_name}.opsz-{suffix}"))
}

/// Copy every file under `from` that has no counterpart under `to`.
///
/// Glyph files are skipped; `contents.plist` decides which of them exist.
fn copy_missing(from: &Path, to: &Path) -> Result<()> {
    for entry in fs::read_dir(from).map_err(|source| io_error(from, source))? {
        let entry = entry.map_err(|source| io_error(from, source))?;
        let source = entry.path();
        let target = to.join(entry.file_name());
        let file_type = entry.file_type().map_err(|err| io_error(&source, err))?;

        if file_type.is_dir() {
            fs::create_dir_all(&target).map_err(|err| io_error(&target, err))?;
            copy_missing(&source, &target)?;
        } else if !target.exists() && source.extension().is_none_or(|ext| ext != "glif") {
            debug!("carrying over {}", source.display());
            fs::copy(&source, &target).map_err(|err| io_error(&source, err))?;
        }
    }
    Ok(())
}

fn io_error(path: &Path, source: std::io::Error) -> Error {
    Error::Io { path: path.to_path_buf(), source }
}

fn from_norad_glyph(glyph: &norad::Glyph) -> Glyph {
    // Mixed glyphs are described by their components.
    let outline = if glyph.components.is_empty() {
        Outline::Contours(glyph.contours.len())
    } else {
        Outline::Components(glyph.components.iter().map(from_norad_component).collect())
    };
    Glyph { name: glyph.name().to_string(), advance: glyph.width, outline }
}

fn from_norad_component(component: &norad::Component) -> PlacedComponent {
    let t = &component.transform;
    PlacedComponent::new(
        component.base.to_string(),
        Affine::new([t.x_scale, t.xy_scale, t.yx_scale, t.y_scale, t.x_offset, t.y_offset]),
    )
}

fn to_norad_glyph(glyph: Glyph) -> Result<norad::Glyph> {
    let components = match glyph.outline {
        Outline::Components(components) => components,
        Outline::Contours(_) => return Err(Error::UnsupportedOutline(glyph.name)),
    };

    let mut norad_glyph = norad::Glyph::new(&glyph.name);
    norad_glyph.width = glyph.advance;
    norad_glyph.components =
        components.iter().map(to_norad_component).collect::<Result<Vec<_>>>()?;
    Ok(norad_glyph)
}

fn to_norad_component(component: &PlacedComponent) -> Result<norad::Component> {
    let base: norad::Name = component
        .base
        .parse()
        .map_err(|source| Error::InvalidName { name: component.base.clone(), source })?;
    let [x_scale, xy_scale, yx_scale, y_scale, x_offset, y_offset] =
        component.transform.as_coeffs();
    let transform = AffineTransform { x_scale, xy_scale, yx_scale, y_scale, x_offset, y_offset };
    Ok(norad::Component::new(base, transform, None))
}
