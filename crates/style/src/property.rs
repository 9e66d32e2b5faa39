//! Style property keys and the values they carry.

use crate::font::{FontStyle, FontWeight};
use crate::position::PositionMode;
use crate::text::TextAlign;
use folio_types::{AspectRatio, Color, Rect};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StyleKey {
    // Font & text
    FontFamily,
    FontSize,
    FontWeight,
    FontStyle,
    LineHeight,
    TextAlign,
    Color,
    DrawTextFromTop,

    // Positioning
    PositionMode,
    X,
    Y,
    Width,
    Height,
    ViewPort,
    AspectRatio,

    // Box
    BackgroundColor,
}

impl StyleKey {
    pub const ALL: [StyleKey; 16] = [
        StyleKey::FontFamily,
        StyleKey::FontSize,
        StyleKey::FontWeight,
        StyleKey::FontStyle,
        StyleKey::LineHeight,
        StyleKey::TextAlign,
        StyleKey::Color,
        StyleKey::DrawTextFromTop,
        StyleKey::PositionMode,
        StyleKey::X,
        StyleKey::Y,
        StyleKey::Width,
        StyleKey::Height,
        StyleKey::ViewPort,
        StyleKey::AspectRatio,
        StyleKey::BackgroundColor,
    ];

    /// Whether descendants pick this property up from their ancestors by default.
    pub fn is_inherited(self) -> bool {
        matches!(
            self,
            StyleKey::FontFamily
                | StyleKey::FontSize
                | StyleKey::FontWeight
                | StyleKey::FontStyle
                | StyleKey::LineHeight
                | StyleKey::TextAlign
                | StyleKey::Color
                | StyleKey::DrawTextFromTop
        )
    }

    pub fn name(self) -> &'static str {
        match self {
            StyleKey::FontFamily => "font-family",
            StyleKey::FontSize => "font-size",
            StyleKey::FontWeight => "font-weight",
            StyleKey::FontStyle => "font-style",
            StyleKey::LineHeight => "line-height",
            StyleKey::TextAlign => "text-align",
            StyleKey::Color => "color",
            StyleKey::DrawTextFromTop => "draw-text-from-top",
            StyleKey::PositionMode => "position",
            StyleKey::X => "x",
            StyleKey::Y => "y",
            StyleKey::Width => "width",
            StyleKey::Height => "height",
            StyleKey::ViewPort => "viewbox",
            StyleKey::AspectRatio => "preserve-aspect-ratio",
            StyleKey::BackgroundColor => "background-color",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim().to_ascii_lowercase();
        match name.as_str() {
            "left" => return Some(StyleKey::X),
            "top" => return Some(StyleKey::Y),
            _ => {}
        }
        StyleKey::ALL.into_iter().find(|k| k.name() == name)
    }
}

/// A reference to a style variable, resolved while flattening.
#[derive(Debug, Clone, PartialEq)]
pub struct VarRef {
    pub name: Arc<str>,
    pub fallback: Option<Box<StyleValue>>,
}

impl VarRef {
    pub fn new(name: &str, fallback: Option<StyleValue>) -> Self {
        Self {
            name: name.trim_start_matches("--").into(),
            fallback: fallback.map(Box::new),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum StyleValue {
    /// A length in points.
    Length(f32),
    /// A length relative to the resolved font size.
    Em(f32),
    Number(f32),
    Bool(bool),
    Text(Arc<str>),
    Color(Color),
    Rect(Rect),
    Position(PositionMode),
    Aspect(AspectRatio),
    Weight(FontWeight),
    FontStyle(FontStyle),
    Align(TextAlign),
    Var(VarRef),
}

impl StyleValue {
    pub fn var(name: &str) -> Self {
        StyleValue::Var(VarRef::new(name, None))
    }

    pub fn var_or(name: &str, fallback: StyleValue) -> Self {
        StyleValue::Var(VarRef::new(name, Some(fallback)))
    }

    pub fn as_length(&self) -> Option<f32> {
        match self {
            StyleValue::Length(v) | StyleValue::Number(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            StyleValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_rect(&self) -> Option<Rect> {
        match self {
            StyleValue::Rect(r) => Some(*r),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            StyleValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<f32> for StyleValue {
    fn from(v: f32) -> Self {
        StyleValue::Length(v)
    }
}

impl From<bool> for StyleValue {
    fn from(v: bool) -> Self {
        StyleValue::Bool(v)
    }
}

impl From<&str> for StyleValue {
    fn from(v: &str) -> Self {
        StyleValue::Text(v.into())
    }
}

impl From<Color> for StyleValue {
    fn from(v: Color) -> Self {
        StyleValue::Color(v)
    }
}

impl From<Rect> for StyleValue {
    fn from(v: Rect) -> Self {
        StyleValue::Rect(v)
    }
}

impl From<PositionMode> for StyleValue {
    fn from(v: PositionMode) -> Self {
        StyleValue::Position(v)
    }
}

impl From<AspectRatio> for StyleValue {
    fn from(v: AspectRatio) -> Self {
        StyleValue::Aspect(v)
    }
}

impl From<FontWeight> for StyleValue {
    fn from(v: FontWeight) -> Self {
        StyleValue::Weight(v)
    }
}

impl From<FontStyle> for StyleValue {
    fn from(v: FontStyle) -> Self {
        StyleValue::FontStyle(v)
    }
}

impl From<TextAlign> for StyleValue {
    fn from(v: TextAlign) -> Self {
        StyleValue::Align(v)
    }
}

/// Tie-break weight used when two layers set the same property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Priority(pub u8);

impl Priority {
    /// Values carried down from ancestors, and defaults.
    pub const INHERITED: Priority = Priority(0);
    pub const EXPLICIT: Priority = Priority(1);
    pub const IMPORTANT: Priority = Priority(2);
}

/// A value as stored in a layer: the value plus its cascade metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleEntry {
    pub value: StyleValue,
    pub priority: Priority,
    pub inherited: bool,
}

impl StyleEntry {
    pub fn new(key: StyleKey, value: StyleValue, priority: Priority) -> Self {
        Self {
            value,
            priority,
            inherited: key.is_inherited(),
        }
    }
}
