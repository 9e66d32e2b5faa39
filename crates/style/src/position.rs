use serde::{Deserialize, Serialize};

/// How a component is placed relative to the flow it appears in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum PositionMode {
    /// In-flow, stacked in document order.
    #[default]
    Static,
    /// Offset from where it would sit in the flow.
    Relative,
    /// Offset from the containing region.
    Absolute,
    /// Offset from the page.
    Fixed,
}

impl PositionMode {
    pub fn is_out_of_flow(self) -> bool {
        self != PositionMode::Static
    }
}
