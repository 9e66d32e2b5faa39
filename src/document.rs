//! A JSON description of an already-classified component tree.
//!
//! ```json
//! {
//!   "style": { "font-size": "11pt", "--accent": "#336699" },
//!   "pages": [{
//!     "type": "page",
//!     "children": [
//!       { "type": "canvas", "id": "chart",
//!         "style": { "width": "200pt", "height": "100pt", "viewbox": "0 0 100 50" },
//!         "children": [{ "type": "text", "text": "Q3", "style": { "draw-text-from-top": "false" } }] }
//!     ]
//!   }]
//! }
//! ```
//!
//! Style values use the same textual syntax as [`StyleLayerBuilder::parse`]. Components
//! without an `id`, or with a blank one, are named after their position in the tree.

use crate::ComposeError;
use folio_layout::{Component, Document, NodeKind};
use folio_style::{StyleLayer, StyleParseError};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::sync::Arc;

#[cfg(doc)]
use folio_style::StyleLayerBuilder;

type Declarations = BTreeMap<String, String>;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentSource {
    #[serde(default)]
    pub style: Declarations,
    pub pages: Vec<ComponentSource>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentSource {
    #[serde(rename = "type")]
    pub kind: NodeKind,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub style: Declarations,
    #[serde(default)]
    pub states: BTreeMap<String, Declarations>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub children: Vec<ComponentSource>,
}

pub fn from_json(json: &str) -> Result<Document, ComposeError> {
    let source: DocumentSource = serde_json::from_str(json)?;
    Ok(source.into_document()?)
}

impl DocumentSource {
    pub fn into_document(self) -> Result<Document, StyleParseError> {
        let pages = self
            .pages
            .into_iter()
            .enumerate()
            .map(|(index, page)| page.into_component(format!("page{}", index)))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Document {
            style: build_layer(&self.style, &BTreeMap::new())?,
            pages,
        })
    }
}

impl ComponentSource {
    fn into_component(self, path: String) -> Result<Component, StyleParseError> {
        let id = self
            .id
            .filter(|id| !id.trim().is_empty())
            .unwrap_or_else(|| path.clone());
        let style = build_layer(&self.style, &self.states)?;
        let children = self
            .children
            .into_iter()
            .enumerate()
            .map(|(index, child)| child.into_component(format!("{}/{}", path, index)))
            .collect::<Result<Vec<_>, _>>()?;

        let mut component = Component::new(self.kind, id, style).with_children(children);
        component.text = self.text.map(Arc::from);
        Ok(component)
    }
}

fn build_layer(
    declarations: &Declarations,
    states: &BTreeMap<String, Declarations>,
) -> Result<Arc<StyleLayer>, StyleParseError> {
    let mut builder = StyleLayer::builder();
    for (name, value) in declarations {
        builder = builder.parse(name, value)?;
    }
    for (name, values) in states {
        builder = builder.parse_state(
            name,
            values.iter().map(|(k, v)| (k.as_str(), v.as_str())),
        )?;
    }
    Ok(builder.build())
}
