use crate::LayoutError;
use crate::component::{Component, Document};
use crate::config::LayoutConfig;
use crate::content::ContentHandle;
use crate::interface::{LayoutContext, LayoutEnvironment};
use crate::page::{DocumentLayout, Page};
use folio_style::{StyleKey, StyleLayer, StyleStack};
use folio_traits::{FontMetricsProvider, IdGenerator, NoFontMetrics, ResourceTable, SequentialIds};
use folio_types::Size;
use std::sync::Arc;

/// Lays out documents page by page.
///
/// The engine holds only shared, read-only services, so one engine can lay out several
/// documents at once from different threads.
#[derive(Debug, Clone)]
pub struct LayoutEngine {
    fonts: Arc<dyn FontMetricsProvider>,
    ids: Arc<dyn IdGenerator>,
    config: LayoutConfig,
}

impl LayoutEngine {
    pub fn new(
        fonts: Arc<dyn FontMetricsProvider>,
        ids: Arc<dyn IdGenerator>,
        config: LayoutConfig,
    ) -> Self {
        Self { fonts, ids, config }
    }

    /// An engine without font metrics, numbering output names from 1.
    pub fn with_config(config: LayoutConfig) -> Self {
        Self::new(Arc::new(NoFontMetrics), Arc::new(SequentialIds::new()), config)
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn fonts(&self) -> &Arc<dyn FontMetricsProvider> {
        &self.fonts
    }

    fn environment(&self) -> LayoutEnvironment<'_> {
        LayoutEnvironment {
            fonts: self.fonts.as_ref(),
            ids: self.ids.as_ref(),
            config: &self.config,
        }
    }

    /// The style stack every page starts from: the configured defaults, then the
    /// document's root layer.
    fn root_stack(&self, document_style: &Arc<StyleLayer>) -> StyleStack {
        let mut stack = StyleStack::new(self.config.base_layer());
        stack.push(document_style.clone());
        stack
    }

    pub fn layout_document(&self, document: &Document) -> Result<DocumentLayout, LayoutError> {
        let mut layout = DocumentLayout::default();
        for (index, page) in document.pages.iter().enumerate() {
            let styles = self.root_stack(&document.style);
            let page = self.layout_page(index, page, styles, &mut layout.resources)?;
            layout.pages.push(page);
        }
        log::debug!(
            "Laid out {} pages with {} shared resources",
            layout.pages.len(),
            layout.resources.len()
        );
        Ok(layout)
    }

    /// Lays out one page component starting from `styles`, which must be returned to the
    /// same depth by the time the page is done.
    pub fn layout_page(
        &self,
        index: usize,
        component: &Component,
        styles: StyleStack,
        resources: &mut dyn ResourceTable<ContentHandle>,
    ) -> Result<Page, LayoutError> {
        let depth = styles.len();
        let size = self.page_size(&styles, component);
        let mut page = Page::new(index, size);

        {
            let mut ctx = LayoutContext::new(self.environment(), styles, &mut page, resources);
            ctx.layout_component(component, None)?;

            if ctx.styles.len() != depth {
                return Err(LayoutError::StyleDepth {
                    expected: depth,
                    found: ctx.styles.len(),
                });
            }
            if ctx.region_depth() != 0 {
                return Err(LayoutError::UnbalancedRegion(ctx.current_region()?));
            }
            ctx.page.check_balanced()?;
        }

        page.close()?;
        Ok(page)
    }

    fn page_size(&self, styles: &StyleStack, component: &Component) -> Size {
        let mut styles = styles.clone();
        styles.push(component.style.clone());
        let style = styles.build();
        let default = self.config.page_size;
        Size::new(
            style.length(StyleKey::Width).unwrap_or(default.width),
            style.length(StyleKey::Height).unwrap_or(default.height),
        )
    }
}
