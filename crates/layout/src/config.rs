use folio_style::font::{DEFAULT_FONT_FAMILY, DEFAULT_FONT_SIZE};
use folio_style::{StyleKey, StyleLayer, StyleValue};
use folio_types::Size;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutConfig {
    /// Page size used when a page component declares no width or height.
    ///
    /// Defaults to A4 (595 x 842 pt).
    pub page_size: Size,
    /// Fraction of the font size used as the ascent when a font has no metrics.
    pub baseline_ratio: f32,
    /// Line height as a multiple of the font size when none is declared.
    pub line_height_ratio: f32,
    /// Average character width, in em, when a font has no metrics.
    pub average_char_width: f32,
    pub default_font_family: String,
    pub default_font_size: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            page_size: Size::new(595.0, 842.0),
            baseline_ratio: 0.8,
            line_height_ratio: 1.2,
            average_char_width: 0.5,
            default_font_family: DEFAULT_FONT_FAMILY.to_string(),
            default_font_size: DEFAULT_FONT_SIZE,
        }
    }
}

impl LayoutConfig {
    /// The layer every document's cascade starts from. All values are defaults, so any
    /// declaration in the document overrides them.
    pub fn base_layer(&self) -> Arc<StyleLayer> {
        StyleLayer::builder()
            .set_default(
                StyleKey::FontFamily,
                StyleValue::Text(self.default_font_family.as_str().into()),
            )
            .set_default(StyleKey::FontSize, StyleValue::Length(self.default_font_size))
            .build()
    }
}
