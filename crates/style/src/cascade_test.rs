use crate::layer::StyleLayer;
use crate::position::PositionMode;
use crate::property::{Priority, StyleKey, StyleValue};
use crate::stack::{StyleError, StyleStack};
use folio_types::{Color, Rect};
use std::sync::Arc;

fn root_layer() -> Arc<StyleLayer> {
    StyleLayer::builder()
        .set(StyleKey::FontFamily, "Helvetica")
        .length(StyleKey::FontSize, 12.0)
        .build()
}

#[test]
fn test_ancestor_inherited_and_own_values_combine() {
    let mut stack = StyleStack::new(
        StyleLayer::builder()
            .set(StyleKey::Color, Color::rgb(255, 0, 0))
            .build(),
    );
    stack.push(
        StyleLayer::builder()
            .length(StyleKey::Width, 80.0)
            .build(),
    );

    let style = stack.build();

    assert_eq!(style.get(StyleKey::Color), Some(&StyleValue::Color(Color::rgb(255, 0, 0))));
    assert_eq!(style.length(StyleKey::Width), Some(80.0));
}

#[test]
fn test_descendant_value_overrides_ancestor() {
    let mut stack = StyleStack::new(root_layer());
    stack.push(
        StyleLayer::builder()
            .length(StyleKey::FontSize, 30.0)
            .build(),
    );

    assert_eq!(stack.build().font().size, 30.0);
}

#[test]
fn test_descendant_default_still_overrides_ancestor() {
    let mut stack = StyleStack::new(root_layer());
    stack.push(
        StyleLayer::builder()
            .set_default(StyleKey::FontSize, StyleValue::Length(9.0))
            .build(),
    );

    assert_eq!(stack.build().font().size, 9.0);
}

#[test]
fn test_nearest_ancestor_wins() {
    let mut stack = StyleStack::new(root_layer());
    stack.push(
        StyleLayer::builder()
            .length(StyleKey::FontSize, 18.0)
            .build(),
    );
    stack.push(StyleLayer::empty());

    let style = stack.build();
    assert_eq!(style.font().size, 18.0);
    let entry = style.declared(StyleKey::FontSize).expect("inherited value");
    assert_eq!(entry.priority, Priority::INHERITED);
}

#[test]
fn test_ancestor_box_properties_not_inherited() {
    let mut stack = StyleStack::new(root_layer());
    stack.push(
        StyleLayer::builder()
            .length(StyleKey::Width, 200.0)
            .set(StyleKey::ViewPort, Rect::new(0.0, 0.0, 10.0, 10.0))
            .set(StyleKey::PositionMode, PositionMode::Absolute)
            .build(),
    );
    stack.push(StyleLayer::empty());

    let style = stack.build();
    assert_eq!(style.length(StyleKey::Width), None);
    assert_eq!(style.viewport(), None);
    assert_eq!(style.position_mode(), PositionMode::Static);
}

#[test]
fn test_variables_accumulate_nearest_last() {
    let mut stack = StyleStack::new(
        StyleLayer::builder()
            .variable("gap", StyleValue::Length(2.0))
            .variable("ink", StyleValue::Color(Color::rgb(0, 0, 255)))
            .build(),
    );
    stack.push(
        StyleLayer::builder()
            .variable("gap", StyleValue::Length(6.0))
            .set(StyleKey::X, StyleValue::var("gap"))
            .set(StyleKey::Color, StyleValue::var("ink"))
            .build(),
    );

    let style = stack.build();
    assert_eq!(style.length(StyleKey::X), Some(6.0));
    assert_eq!(style.get(StyleKey::Color), Some(&StyleValue::Color(Color::rgb(0, 0, 255))));
    assert_eq!(style.variables().map(|v| v.len()), Some(2));
}

#[test]
fn test_no_variables_means_none() {
    let stack = StyleStack::new(root_layer());
    assert!(stack.build().variables().is_none());
}

#[test]
fn test_states_only_from_top_layer() {
    let mut stack = StyleStack::new(
        StyleLayer::builder()
            .state("hover", [(StyleKey::Color, StyleValue::Color(Color::rgb(1, 1, 1)))])
            .build(),
    );
    assert_eq!(stack.build().states().len(), 1);

    stack.push(StyleLayer::empty());
    assert!(stack.build().states().is_empty());
}

#[test]
fn test_build_does_not_mutate_layers() {
    let root = root_layer();
    let before = root.values().clone();
    let mut stack = StyleStack::new(root.clone());
    stack.push(
        StyleLayer::builder()
            .length(StyleKey::FontSize, 40.0)
            .build(),
    );

    let first = stack.build();
    let second = stack.build();

    assert_eq!(first, second);
    assert_eq!(root.values(), &before);
}

#[test]
fn test_pop_below_root_is_unbalanced() {
    let mut stack = StyleStack::new(root_layer());
    stack.push(StyleLayer::empty());
    stack.push(StyleLayer::empty());

    assert!(stack.pop().is_ok());
    assert!(stack.pop().is_ok());
    assert_eq!(stack.len(), 1);
    assert_eq!(stack.pop(), Err(StyleError::UnbalancedStack(1)));
    assert_eq!(stack.len(), 1);
}

#[test]
fn test_push_pop_restores_current() {
    let root = root_layer();
    let mut stack = StyleStack::new(root.clone());
    let child = StyleLayer::empty();

    stack.push(child.clone());
    assert!(Arc::ptr_eq(stack.current(), &child));

    let popped = stack.pop().expect("balanced");
    assert!(Arc::ptr_eq(&popped, &child));
    assert!(Arc::ptr_eq(stack.current(), &root));
}

#[test]
fn test_clone_is_isolated_but_shares_layers() {
    let root = root_layer();
    let mut original = StyleStack::new(root.clone());
    original.push(StyleLayer::empty());

    let mut clone = original.clone();
    clone.push(
        StyleLayer::builder()
            .length(StyleKey::FontSize, 99.0)
            .build(),
    );

    assert_eq!(original.len(), 2);
    assert_eq!(clone.len(), 3);
    assert!(!Arc::ptr_eq(original.current(), clone.current()));
    assert_eq!(original.build().font().size, 12.0);

    clone.pop().expect("balanced");
    assert!(Arc::ptr_eq(original.current(), clone.current()));
}

#[test]
fn test_relative_font_size_uses_inherited_size() {
    let mut stack = StyleStack::new(root_layer());
    stack.push(
        StyleLayer::builder()
            .length(StyleKey::FontSize, 20.0)
            .build(),
    );
    stack.push(
        StyleLayer::builder()
            .set(StyleKey::FontSize, StyleValue::Em(2.0))
            .set(StyleKey::Width, StyleValue::Em(1.5))
            .build(),
    );

    let style = stack.build();
    assert_eq!(style.font().size, 40.0);
    assert_eq!(style.length(StyleKey::Width), Some(60.0));
}

#[test]
fn test_relative_font_sizes_compound_down_the_tree() {
    let mut stack = StyleStack::new(
        StyleLayer::builder()
            .set_default(StyleKey::FontSize, StyleValue::Length(10.0))
            .build(),
    );
    stack.push(
        StyleLayer::builder()
            .set(StyleKey::FontSize, StyleValue::Em(1.5))
            .build(),
    );
    stack.push(StyleLayer::empty());

    // The inherited size is already concrete, so it is not scaled a second time.
    assert_eq!(stack.build().font().size, 15.0);

    stack.push(
        StyleLayer::builder()
            .set(StyleKey::FontSize, StyleValue::Em(2.0))
            .build(),
    );
    let style = stack.build();
    assert_eq!(style.font().size, 30.0);

    // Corrections keep the same base.
    let corrected = style.with_value(StyleKey::X, StyleValue::Length(1.0));
    assert_eq!(corrected.font().size, 30.0);
}
