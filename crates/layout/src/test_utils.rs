use crate::LayoutError;
use crate::arena::{Region, Run, TextRun};
use crate::component::{Component, Document};
use crate::config::LayoutConfig;
use crate::engine::LayoutEngine;
use crate::page::{DocumentLayout, Page};
use folio_style::{FontStyle, FontWeight, StyleLayer};
use folio_traits::{FaceMetrics, InMemoryFontMetrics, NoFontMetrics, SequentialIds};
use std::sync::Arc;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// An engine whose only known font is Helvetica with an 800/1000 ascender.
pub fn create_test_engine() -> LayoutEngine {
    let fonts = InMemoryFontMetrics::new();
    fonts
        .add(
            "Helvetica",
            FontWeight::REGULAR,
            FontStyle::Normal,
            FaceMetrics {
                units_per_em: 1000,
                ascender: 800,
                descender: -200,
                average_advance: Some(500),
            },
        )
        .expect("fresh font store");
    LayoutEngine::new(
        Arc::new(fonts),
        Arc::new(SequentialIds::new()),
        LayoutConfig::default(),
    )
}

/// An engine that knows no fonts, so every metric comes from the config ratios.
pub fn create_engine_without_metrics() -> LayoutEngine {
    LayoutEngine::new(
        Arc::new(NoFontMetrics),
        Arc::new(SequentialIds::new()),
        LayoutConfig::default(),
    )
}

pub fn layout_pages(
    engine: &LayoutEngine,
    pages: Vec<Component>,
) -> Result<DocumentLayout, LayoutError> {
    init_logging();
    let document = Document {
        style: StyleLayer::empty(),
        pages,
    };
    engine.layout_document(&document)
}

pub fn region_owned_by<'a>(page: &'a Page, id: &str) -> Option<&'a Region> {
    page.arena
        .regions()
        .map(|(_, r)| r)
        .find(|r| r.owner.as_ref().is_some_and(|o| o.as_str() == id))
}

/// Text runs with the top of the line they sit on, in layout order.
pub fn text_runs(page: &Page) -> Vec<(f32, &TextRun)> {
    page.arena
        .lines()
        .flat_map(|(_, line)| {
            line.runs.iter().filter_map(move |run| match run {
                Run::Text(text) => Some((line.top, text)),
                _ => None,
            })
        })
        .collect()
}
