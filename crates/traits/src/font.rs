//! FontMetricsProvider trait for looking up vertical font metrics.
//!
//! Glyph shaping and font databases live outside the layout core; the core only needs to
//! know how far a font's baseline sits below the top of its line box.

use folio_style::{Font, FontStyle, FontWeight};
use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::RwLock;
use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum FontError {
    #[error("Font data for '{family}' could not be parsed: {message}")]
    InvalidData { family: String, message: String },

    #[error("Font store lock poisoned")]
    LockPoisoned,
}

/// Metrics of a face in font design units, independent of size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceMetrics {
    pub units_per_em: u16,
    pub ascender: i16,
    pub descender: i16,
    pub average_advance: Option<u16>,
}

impl FaceMetrics {
    /// Scales the design metrics to `size` points.
    pub fn at_size(&self, size: f32) -> FontMetrics {
        let em = f32::from(self.units_per_em.max(1));
        let scale = |units: f32| units * size / em;
        FontMetrics {
            ascent: scale(f32::from(self.ascender)),
            descent: scale(f32::from(self.descender)),
            average_char_width: self.average_advance.map(|a| scale(f32::from(a))),
        }
    }
}

/// Metrics for a font at a specific size, in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontMetrics {
    /// Distance from the top of the line box to the baseline.
    pub ascent: f32,
    /// Distance from the baseline to the bottom of the line box (usually negative).
    pub descent: f32,
    pub average_char_width: Option<f32>,
}

/// A read-only source of font metrics, shared across concurrent layouts.
pub trait FontMetricsProvider: Send + Sync + Debug {
    /// Returns the metrics for `font`, or `None` if the font is unknown.
    fn metrics(&self, font: &Font) -> Option<FontMetrics>;

    /// Returns a human-readable name for this provider (for logging/debugging).
    fn name(&self) -> &'static str;
}

#[derive(Debug, Clone, Hash, PartialEq, Eq)]
struct FaceKey {
    family: String,
    weight: u16,
    style: FontStyle,
}

impl FaceKey {
    fn new(family: &str, weight: FontWeight, style: FontStyle) -> Self {
        Self {
            family: family.to_lowercase(),
            weight: weight.to_number(),
            style,
        }
    }
}

/// An in-memory metrics store.
///
/// Lookups try the exact family/weight/style first, then any face of the same family.
#[derive(Debug, Default)]
pub struct InMemoryFontMetrics {
    faces: RwLock<HashMap<FaceKey, FaceMetrics>>,
}

impl InMemoryFontMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(
        &self,
        family: &str,
        weight: FontWeight,
        style: FontStyle,
        metrics: FaceMetrics,
    ) -> Result<(), FontError> {
        let mut faces = self.faces.write().map_err(|_| FontError::LockPoisoned)?;
        faces.insert(FaceKey::new(family, weight, style), metrics);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.faces.read().map(|f| f.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn face(&self, font: &Font) -> Option<FaceMetrics> {
        let faces = self.faces.read().ok()?;
        let exact = FaceKey::new(&font.family, font.weight, font.style);
        if let Some(face) = faces.get(&exact) {
            return Some(*face);
        }
        faces
            .iter()
            .filter(|(key, _)| key.family == exact.family)
            .min_by_key(|(key, _)| key.weight.abs_diff(exact.weight))
            .map(|(_, face)| *face)
    }
}

impl FontMetricsProvider for InMemoryFontMetrics {
    fn metrics(&self, font: &Font) -> Option<FontMetrics> {
        self.face(font).map(|face| face.at_size(font.size))
    }

    fn name(&self) -> &'static str {
        "in-memory"
    }
}

/// A provider that knows no fonts. Layout falls back to heuristics for every font.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoFontMetrics;

impl FontMetricsProvider for NoFontMetrics {
    fn metrics(&self, _font: &Font) -> Option<FontMetrics> {
        None
    }

    fn name(&self) -> &'static str {
        "none"
    }
}
