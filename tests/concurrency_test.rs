mod common;

use common::init_logging;
use folio::{Composer, ResourceTable};
use std::collections::HashSet;

fn chart_document(index: usize) -> String {
    format!(
        r#"{{ "pages": [{{ "type": "page", "children": [
            {{ "type": "canvas", "id": "chart{index}",
               "style": {{ "width": "{width}pt", "height": "{width}pt", "viewbox": "0 0 10 10" }},
               "children": [{{ "type": "text", "text": "series {index}" }}] }}
        ] }}] }}"#,
        index = index,
        width = 20 + index * 10,
    )
}

#[test]
fn test_one_composer_lays_out_documents_in_parallel() {
    init_logging();
    let composer = &Composer::default();
    let documents: Vec<String> = (0..8).map(chart_document).collect();

    let layouts = std::thread::scope(|scope| {
        let workers: Vec<_> = documents
            .iter()
            .map(|json| scope.spawn(move || composer.compose_json(json)))
            .collect();
        workers
            .into_iter()
            .map(|worker| worker.join().expect("worker panicked"))
            .collect::<Result<Vec<_>, _>>()
    })
    .expect("every document lays out");

    let mut names = HashSet::new();
    for (index, layout) in layouts.iter().enumerate() {
        let key = format!("chart{}", index);
        let handle = layout.resources.get("XObject", &key).expect("registered");
        assert_eq!(handle.size.width, (20 + index * 10) as f32);
        assert_eq!(handle.matrix.a, handle.size.width / 10.0);
        names.insert(handle.name.clone());
    }
    // Output names come from the shared generator and never repeat.
    assert_eq!(names.len(), documents.len());
}
