use folio_style::{EffectiveStyle, PositionMode, StyleKey};
use folio_types::Rect;

/// The box a component asks for, read from its effective style.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PositionOptions {
    pub x: Option<f32>,
    pub y: Option<f32>,
    pub width: Option<f32>,
    pub height: Option<f32>,
    pub viewport: Option<Rect>,
    pub mode: PositionMode,
}

impl PositionOptions {
    pub fn from_style(style: &EffectiveStyle) -> Self {
        Self {
            x: style.length(StyleKey::X),
            y: style.length(StyleKey::Y),
            width: style.length(StyleKey::Width),
            height: style.length(StyleKey::Height),
            viewport: style.viewport(),
            mode: style.position_mode(),
        }
    }

    /// A copy whose box is exactly `rect`.
    pub fn with_box(&self, rect: Rect) -> Self {
        Self {
            x: Some(rect.x),
            y: Some(rect.y),
            width: Some(rect.width),
            height: Some(rect.height),
            ..*self
        }
    }
}
