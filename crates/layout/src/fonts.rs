//! Font library backed by font binaries.
//!
//! `FontLibrary` reads the vertical metrics of TrueType/OpenType faces with `ttf-parser`
//! and serves them through [`FontMetricsProvider`]. Only the numbers layout needs are
//! kept; the font data itself is not retained.

use folio_style::{Font, FontStyle, FontWeight};
use folio_traits::{FaceMetrics, FontError, FontMetrics, FontMetricsProvider, InMemoryFontMetrics};

/// Characters sampled to estimate an average advance width.
const ADVANCE_SAMPLE: &str = "abcdefghijklmnopqrstuvwxyz ";

#[derive(Debug, Default)]
pub struct FontLibrary {
    metrics: InMemoryFontMetrics,
}

impl FontLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a face under its own family name, weight and style.
    ///
    /// Returns the family name read from the font.
    pub fn add_font_data(&self, data: &[u8]) -> Result<String, FontError> {
        let face = parse_face("<unnamed>", data)?;
        let family = face
            .names()
            .into_iter()
            .filter(|name| name.name_id == ttf_parser::name_id::FAMILY)
            .find_map(|name| name.to_string())
            .ok_or_else(|| FontError::InvalidData {
                family: "<unnamed>".to_string(),
                message: "font has no family name".to_string(),
            })?;

        let weight = FontWeight(face.weight().to_number());
        let style = if face.is_italic() {
            FontStyle::Italic
        } else if face.is_oblique() {
            FontStyle::Oblique
        } else {
            FontStyle::Normal
        };

        self.metrics
            .add(&family, weight, style, face_metrics(&face))?;
        log::debug!("Registered font '{}' ({:?}, {:?})", family, weight, style);
        Ok(family)
    }

    /// Registers a face under an explicit family, weight and style.
    pub fn add_font_as(
        &self,
        family: &str,
        weight: FontWeight,
        style: FontStyle,
        data: &[u8],
    ) -> Result<(), FontError> {
        let face = parse_face(family, data)?;
        self.metrics.add(family, weight, style, face_metrics(&face))
    }

    /// Registers metrics directly, for fonts whose binaries are not available.
    pub fn add_metrics(
        &self,
        family: &str,
        weight: FontWeight,
        style: FontStyle,
        metrics: FaceMetrics,
    ) -> Result<(), FontError> {
        self.metrics.add(family, weight, style, metrics)
    }

    pub fn len(&self) -> usize {
        self.metrics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty()
    }
}

impl FontMetricsProvider for FontLibrary {
    fn metrics(&self, font: &Font) -> Option<FontMetrics> {
        self.metrics.metrics(font)
    }

    fn name(&self) -> &'static str {
        "font-library"
    }
}

fn parse_face<'a>(family: &str, data: &'a [u8]) -> Result<ttf_parser::Face<'a>, FontError> {
    ttf_parser::Face::parse(data, 0).map_err(|e| FontError::InvalidData {
        family: family.to_string(),
        message: e.to_string(),
    })
}

fn face_metrics(face: &ttf_parser::Face<'_>) -> FaceMetrics {
    let advances: Vec<u16> = ADVANCE_SAMPLE
        .chars()
        .filter_map(|c| face.glyph_index(c))
        .filter_map(|glyph| face.glyph_hor_advance(glyph))
        .collect();
    let average_advance = (!advances.is_empty()).then(|| {
        let total: u32 = advances.iter().map(|a| u32::from(*a)).sum();
        (total / advances.len() as u32) as u16
    });

    FaceMetrics {
        units_per_em: face.units_per_em(),
        ascender: face.ascender(),
        descender: face.descender(),
        average_advance,
    }
}
