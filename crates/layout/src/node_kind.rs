use serde::Deserialize;

/// Represents the specific type of a component, used to pick its layout node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Page,
    Panel,
    /// A panel that may establish its own coordinate space through a viewport.
    Canvas,
    Text,
}

impl NodeKind {
    /// Returns a string representation, primarily for debugging or error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Page => "Page",
            NodeKind::Panel => "Panel",
            NodeKind::Canvas => "Canvas",
            NodeKind::Text => "Text",
        }
    }
}
