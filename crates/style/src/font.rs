//! Font selection values resolved from a style.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Font size used when no layer in the cascade declares one.
pub const DEFAULT_FONT_SIZE: f32 = 12.0;

pub const DEFAULT_FONT_FAMILY: &str = "Helvetica";

/// A font weight on the 1-1000 scale, 400 being regular.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FontWeight(pub u16);

impl FontWeight {
    pub const THIN: FontWeight = FontWeight(100);
    pub const LIGHT: FontWeight = FontWeight(300);
    pub const REGULAR: FontWeight = FontWeight(400);
    pub const MEDIUM: FontWeight = FontWeight(500);
    pub const BOLD: FontWeight = FontWeight(700);
    pub const BLACK: FontWeight = FontWeight(900);

    pub fn to_number(self) -> u16 {
        self.0
    }

    /// Accepts a keyword (`bold`, `normal`, ...) or a number from 1 to 1000.
    pub fn parse(s: &str) -> Option<Self> {
        let weight = match s.trim().to_ascii_lowercase().as_str() {
            "thin" => Self::THIN,
            "light" => Self::LIGHT,
            "regular" | "normal" => Self::REGULAR,
            "medium" => Self::MEDIUM,
            "bold" => Self::BOLD,
            "black" => Self::BLACK,
            other => FontWeight(other.parse::<u16>().ok()?),
        };
        (1..=1000).contains(&weight.0).then_some(weight)
    }
}

impl Default for FontWeight {
    fn default() -> Self {
        Self::REGULAR
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
    Oblique,
}

/// A resolved font selection, as handed to the font metrics service.
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    pub family: Arc<str>,
    pub size: f32,
    pub weight: FontWeight,
    pub style: FontStyle,
}

impl Default for Font {
    fn default() -> Self {
        Self {
            family: DEFAULT_FONT_FAMILY.into(),
            size: DEFAULT_FONT_SIZE,
            weight: FontWeight::REGULAR,
            style: FontStyle::Normal,
        }
    }
}
