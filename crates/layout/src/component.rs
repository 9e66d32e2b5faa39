//! The already-classified component tree handed to the layout engine.

use crate::node_kind::NodeKind;
use folio_style::StyleLayer;
use folio_types::ComponentId;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct Component {
    pub id: ComponentId,
    pub kind: NodeKind,
    /// The style layer matched for this component.
    pub style: Arc<StyleLayer>,
    pub text: Option<Arc<str>>,
    pub children: Vec<Component>,
}

impl Component {
    pub fn new(kind: NodeKind, id: impl Into<ComponentId>, style: Arc<StyleLayer>) -> Self {
        Self {
            id: id.into(),
            kind,
            style,
            text: None,
            children: Vec::new(),
        }
    }

    pub fn page(id: impl Into<ComponentId>, style: Arc<StyleLayer>) -> Self {
        Self::new(NodeKind::Page, id, style)
    }

    pub fn panel(id: impl Into<ComponentId>, style: Arc<StyleLayer>) -> Self {
        Self::new(NodeKind::Panel, id, style)
    }

    pub fn canvas(id: impl Into<ComponentId>, style: Arc<StyleLayer>) -> Self {
        Self::new(NodeKind::Canvas, id, style)
    }

    pub fn text(id: impl Into<ComponentId>, style: Arc<StyleLayer>, text: &str) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::new(NodeKind::Text, id, style)
        }
    }

    pub fn with_child(mut self, child: Component) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = Component>) -> Self {
        self.children.extend(children);
        self
    }
}

/// A document: a root style layer shared by every page, and the pages in order.
#[derive(Debug, Clone)]
pub struct Document {
    pub style: Arc<StyleLayer>,
    pub pages: Vec<Component>,
}

impl Document {
    pub fn new(style: Arc<StyleLayer>) -> Self {
        Self {
            style,
            pages: Vec::new(),
        }
    }

    pub fn with_page(mut self, page: Component) -> Self {
        self.pages.push(page);
        self
    }
}
