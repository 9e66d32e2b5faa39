mod common;

use common::*;
use folio::{Composer, ComposeError, LayoutConfig, Rect, ResourceTable, Size};
use folio_style::PositionMode;

#[test]
fn test_document_style_is_inherited_by_text() {
    let layout = compose(
        r#"{
            "style": { "font-size": "10pt" },
            "pages": [{ "type": "page", "children": [
                { "type": "text", "text": "hello" }
            ] }]
        }"#,
    );

    let runs = text_runs(&layout.pages[0]);
    assert_eq!(runs.len(), 1);
    assert_eq!(runs[0].font.size, 10.0);
    assert_eq!(runs[0].width, 25.0);
    assert!((runs[0].height - 12.0).abs() < 0.001);
}

#[test]
fn test_variables_resolve_in_viewport_sizing() {
    let layout = compose(
        r#"{
            "style": { "--side": "40pt" },
            "pages": [{ "type": "page", "children": [
                { "type": "canvas", "id": "chart",
                  "style": { "width": "var(--side)", "height": "var(--side)", "viewbox": "0 0 20 20" } }
            ] }]
        }"#,
    );

    let handle = layout.resources.get("XObject", "chart").expect("registered");
    assert_eq!(handle.size, Size::new(40.0, 40.0));
    assert_eq!((handle.matrix.a, handle.matrix.d), (2.0, 2.0));
    assert_eq!(handle.clip, Rect::new(0.0, 0.0, 40.0, 40.0));
}

#[test]
fn test_canvas_children_are_placed_in_viewport_space() {
    let layout = compose(
        r#"{ "pages": [{ "type": "page", "children": [
            { "type": "canvas", "id": "chart",
              "style": { "width": "100pt", "height": "100pt", "viewbox": "10 10 50 50" },
              "children": [
                { "type": "panel", "id": "flowing" },
                { "type": "panel", "id": "pinned",
                  "style": { "position": "absolute", "x": "5pt", "y": "6pt" } }
              ] }
        ] }] }"#,
    );

    let page = &layout.pages[0];
    let viewport = region_owned_by(page, "chart").expect("viewport region");
    assert_eq!(viewport.bounds, Rect::new(10.0, 10.0, 50.0, 50.0));

    let flowing = region_owned_by(page, "flowing").expect("flowing region");
    assert_eq!(flowing.mode, PositionMode::Relative);

    let pinned = region_owned_by(page, "pinned").expect("pinned region");
    assert_eq!(pinned.mode, PositionMode::Absolute);
    assert_eq!((pinned.bounds.x, pinned.bounds.y), (15.0, 16.0));
}

#[test]
fn test_baseline_ratio_from_config() {
    let composer = Composer::from_config_json(
        r#"{ "pageSize": { "width": 300, "height": 300 }, "baselineRatio": 0.75 }"#,
    )
    .expect("valid config");
    assert_eq!(composer.config().page_size, Size::new(300.0, 300.0));
    assert_eq!(composer.config().line_height_ratio, 1.2);

    let layout = compose_with(
        composer.config().clone(),
        r#"{ "pages": [{ "type": "page", "children": [
            { "type": "canvas", "style": { "width": "100pt", "viewbox": "0 0 100 100" },
              "children": [
                { "type": "text", "id": "label", "text": "Total",
                  "style": { "font-size": "20pt", "draw-text-from-top": "false" } }
              ] }
        ] }] }"#,
    );

    assert_eq!(layout.pages[0].size, Size::new(300.0, 300.0));
    let label = region_owned_by(&layout.pages[0], "label").expect("label region");
    assert_eq!(label.bounds.y, -15.0);
}

#[test]
fn test_hover_state_is_carried_to_the_component() {
    let document = folio::document::from_json(
        r#"{ "pages": [{ "type": "page", "children": [
            { "type": "panel", "id": "button",
              "style": { "width": "10pt" },
              "states": { "hover": { "width": "12pt" } } }
        ] }] }"#,
    )
    .expect("valid document");

    let button = &document.pages[0].children[0];
    let mut stack = folio::StyleStack::new(document.style.clone());
    stack.push(button.style.clone());
    let style = stack.build();

    let hover = style.resolve_state("hover").expect("declared state");
    assert_eq!(style.length(folio::StyleKey::Width), Some(10.0));
    assert_eq!(hover.length(folio::StyleKey::Width), Some(12.0));
    assert!(style.resolve_state("focus").is_none());
}

#[test]
fn test_invalid_documents_are_rejected() {
    init_logging();
    let composer = Composer::new(LayoutConfig::default());
    assert!(matches!(
        composer.compose_json("{ not json"),
        Err(ComposeError::Json(_))
    ));
    assert!(matches!(
        composer.compose_json(
            r#"{ "pages": [{ "type": "page", "style": { "width": "wide" } }] }"#
        ),
        Err(ComposeError::Style(_))
    ));
}

#[test]
fn test_canvas_with_blank_id_is_registered_under_its_path() {
    let layout = compose(
        r#"{ "pages": [{ "type": "page", "children": [
            { "type": "canvas", "id": "",
              "style": { "width": "20pt", "height": "20pt", "viewbox": "0 0 10 10" } }
        ] }] }"#,
    );

    assert_eq!(layout.resources.len(), 1);
    let handle = layout.resources.get("XObject", "page0/0").expect("registered");
    assert_eq!(handle.component.as_str(), "page0/0");
}
