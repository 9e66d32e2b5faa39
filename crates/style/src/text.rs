use serde::{Deserialize, Serialize};

/// Horizontal alignment of text within its line. `left`/`right` map onto start/end.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    #[default]
    Start,
    Center,
    End,
    Justify,
}

/// Text placement options resolved from an effective style.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextOptions {
    /// When false, a text box's Y names its baseline rather than its top edge.
    pub draw_from_top: bool,
    pub align: TextAlign,
    pub line_height: Option<f32>,
}

impl Default for TextOptions {
    fn default() -> Self {
        Self {
            draw_from_top: true,
            align: TextAlign::default(),
            line_height: None,
        }
    }
}
