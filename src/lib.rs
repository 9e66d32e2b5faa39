//! Style cascade and page layout core for paginated document composition.
//!
//! `folio` resolves the style of every component from a stack of matched style layers and
//! places the components onto pages as blocks, lines and positioned regions. Components
//! that declare a viewport become reusable content with their own transform, registered
//! once per document for the serializer.

pub mod document;

pub use folio_layout::{
    Component, ContentHandle, Document, DocumentLayout, LayoutConfig, LayoutEngine, LayoutError,
    NodeKind, Page,
};
pub use folio_style::{EffectiveStyle, StyleKey, StyleLayer, StyleStack, StyleValue};
pub use folio_traits::{FontMetricsProvider, ResourceTable};
pub use folio_types::{AspectRatio, ComponentId, OutputName, Rect, Size, Transform};

#[cfg(feature = "system-fonts")]
pub use folio_layout::FontLibrary;

use folio_style::StyleParseError;
use folio_traits::{FontError, NoFontMetrics, SequentialIds};
use std::sync::Arc;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ComposeError {
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Style error: {0}")]
    Style(#[from] StyleParseError),

    #[error("Font error: {0}")]
    Font(#[from] FontError),

    #[error("Layout error: {0}")]
    Layout(#[from] LayoutError),
}

/// Entry point tying configuration, font metrics and the layout engine together.
#[derive(Debug, Clone)]
pub struct Composer {
    engine: LayoutEngine,
}

impl Composer {
    /// A composer without font metrics; baselines and text widths use the configured ratios.
    pub fn new(config: LayoutConfig) -> Self {
        Self::with_fonts(Arc::new(NoFontMetrics), config)
    }

    pub fn with_fonts(fonts: Arc<dyn FontMetricsProvider>, config: LayoutConfig) -> Self {
        Self {
            engine: LayoutEngine::new(fonts, Arc::new(SequentialIds::new()), config),
        }
    }

    /// A composer whose font metrics are read from the given font binaries.
    #[cfg(feature = "system-fonts")]
    pub fn with_font_data<'a>(
        fonts: impl IntoIterator<Item = &'a [u8]>,
        config: LayoutConfig,
    ) -> Result<Self, ComposeError> {
        let library = FontLibrary::new();
        for data in fonts {
            library.add_font_data(data)?;
        }
        Ok(Self::with_fonts(Arc::new(library), config))
    }

    /// Builds a composer from a JSON [`LayoutConfig`]. Missing fields take their defaults.
    pub fn from_config_json(json: &str) -> Result<Self, ComposeError> {
        let config: LayoutConfig = serde_json::from_str(json)?;
        log::debug!("Loaded layout config: {:?}", config);
        Ok(Self::new(config))
    }

    pub fn engine(&self) -> &LayoutEngine {
        &self.engine
    }

    pub fn config(&self) -> &LayoutConfig {
        self.engine.config()
    }

    pub fn compose(&self, document: &Document) -> Result<DocumentLayout, ComposeError> {
        log::info!("Composing document with {} pages", document.pages.len());
        Ok(self.engine.layout_document(document)?)
    }

    /// Parses a JSON document description (see [`document`]) and lays it out.
    pub fn compose_json(&self, json: &str) -> Result<DocumentLayout, ComposeError> {
        let document = document::from_json(json)?;
        self.compose(&document)
    }
}

impl Default for Composer {
    fn default() -> Self {
        Self::new(LayoutConfig::default())
    }
}
