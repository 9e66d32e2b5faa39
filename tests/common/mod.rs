#![allow(dead_code)]

use folio::{Composer, DocumentLayout, LayoutConfig, Page};
use folio_layout::arena::Region;
use folio_layout::{Run, TextRun};

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn compose(json: &str) -> DocumentLayout {
    compose_with(LayoutConfig::default(), json)
}

pub fn compose_with(config: LayoutConfig, json: &str) -> DocumentLayout {
    init_logging();
    Composer::new(config)
        .compose_json(json)
        .expect("document should lay out")
}

pub fn region_owned_by<'a>(page: &'a Page, id: &str) -> Option<&'a Region> {
    page.arena
        .regions()
        .map(|(_, r)| r)
        .find(|r| r.owner.as_ref().is_some_and(|o| o.as_str() == id))
}

pub fn text_runs(page: &Page) -> Vec<&TextRun> {
    page.arena
        .lines()
        .flat_map(|(_, line)| line.runs.iter())
        .filter_map(|run| match run {
            Run::Text(text) => Some(text),
            _ => None,
        })
        .collect()
}
