//! Style layers: the matched property values for one component.
//!
//! A layer is assembled with [`StyleLayerBuilder`] and is immutable afterwards. Layers are
//! shared through `Arc` between the style stack, its clones and any concurrent layouts.

use crate::parsers::{parse_property, StyleParseError};
use crate::property::{Priority, StyleEntry, StyleKey, StyleValue};
use crate::variables::VariableSet;
use std::collections::HashMap;
use std::sync::Arc;

/// Property entries keyed by [`StyleKey`], with priority-aware replacement.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleMap {
    entries: HashMap<StyleKey, StyleEntry>,
}

impl StyleMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `entry` under `key`.
    ///
    /// An existing entry is kept unless `replace` is set and the new entry's priority is at
    /// least as high. Returns whether the entry was stored.
    pub fn set(&mut self, key: StyleKey, entry: StyleEntry, replace: bool) -> bool {
        match self.entries.get(&key) {
            Some(existing) if !replace || entry.priority < existing.priority => false,
            _ => {
                self.entries.insert(key, entry);
                true
            }
        }
    }

    pub fn get(&self, key: StyleKey) -> Option<&StyleEntry> {
        self.entries.get(&key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (StyleKey, &StyleEntry)> {
        self.entries.iter().map(|(k, e)| (*k, e))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// An alternate set of values selected by a runtime condition (e.g. `hover`).
#[derive(Debug, Clone, PartialEq)]
pub struct StyleState {
    pub name: Arc<str>,
    pub values: StyleMap,
}

#[derive(Debug, Default, PartialEq)]
pub struct StyleLayer {
    values: StyleMap,
    variables: Option<VariableSet>,
    states: Vec<StyleState>,
}

impl StyleLayer {
    pub fn builder() -> StyleLayerBuilder {
        StyleLayerBuilder::default()
    }

    pub fn empty() -> Arc<StyleLayer> {
        Arc::new(StyleLayer::default())
    }

    pub fn get(&self, key: StyleKey) -> Option<&StyleEntry> {
        self.values.get(key)
    }

    pub fn values(&self) -> &StyleMap {
        &self.values
    }

    pub fn variables(&self) -> Option<&VariableSet> {
        self.variables.as_ref()
    }

    pub fn has_variables(&self) -> bool {
        self.variables.as_ref().is_some_and(|v| !v.is_empty())
    }

    pub fn states(&self) -> &[StyleState] {
        &self.states
    }

    pub fn has_states(&self) -> bool {
        !self.states.is_empty()
    }

    /// Merges only the inheritable entries into `target`, re-weighted to `priority`.
    pub fn merge_inherited_into(&self, target: &mut StyleMap, replace: bool, priority: Priority) {
        for (key, entry) in self.values.iter().filter(|(_, e)| e.inherited) {
            let carried = StyleEntry {
                value: entry.value.clone(),
                priority,
                inherited: entry.inherited,
            };
            target.set(key, carried, replace);
        }
    }

    /// Merges every entry into `target`, each with its own priority.
    pub fn merge_into(&self, target: &mut StyleMap) {
        for (key, entry) in self.values.iter() {
            target.set(key, entry.clone(), true);
        }
    }
}

#[derive(Debug, Default)]
pub struct StyleLayerBuilder {
    values: StyleMap,
    variables: VariableSet,
    states: Vec<StyleState>,
}

impl StyleLayerBuilder {
    /// Sets an explicit value.
    pub fn set(self, key: StyleKey, value: impl Into<StyleValue>) -> Self {
        self.set_with_priority(key, value, Priority::EXPLICIT)
    }

    /// Sets an explicit length in points.
    pub fn length(self, key: StyleKey, points: f32) -> Self {
        self.set(key, StyleValue::Length(points))
    }

    /// Sets a default value that any explicit value in a later merge overrides.
    pub fn set_default(self, key: StyleKey, value: impl Into<StyleValue>) -> Self {
        self.set_with_priority(key, value, Priority::INHERITED)
    }

    pub fn set_with_priority(
        mut self,
        key: StyleKey,
        value: impl Into<StyleValue>,
        priority: Priority,
    ) -> Self {
        self.values
            .set(key, StyleEntry::new(key, value.into(), priority), true);
        self
    }

    /// Overrides whether an already-set property is passed down to descendants.
    pub fn inherit(mut self, key: StyleKey, inherited: bool) -> Self {
        if let Some(entry) = self.values.get(key).cloned() {
            let entry = StyleEntry { inherited, ..entry };
            self.values.set(key, entry, true);
        }
        self
    }

    /// Parses a textual declaration such as `("font-size", "12pt")`.
    ///
    /// Names starting with `--` declare variables.
    pub fn parse(mut self, name: &str, value: &str) -> Result<Self, StyleParseError> {
        let name = name.trim();
        if name.starts_with("--") {
            let parsed = crate::parsers::parse_variable_value(value)?;
            self.variables.set(name, parsed);
            return Ok(self);
        }
        let key =
            StyleKey::from_name(name).ok_or_else(|| StyleParseError::UnknownProperty(name.into()))?;
        let parsed = parse_property(key, value)?;
        Ok(self.set(key, parsed))
    }

    pub fn variable(mut self, name: &str, value: impl Into<StyleValue>) -> Self {
        self.variables.set(name, value.into());
        self
    }

    pub fn state(
        mut self,
        name: &str,
        values: impl IntoIterator<Item = (StyleKey, StyleValue)>,
    ) -> Self {
        let mut map = StyleMap::new();
        for (key, value) in values {
            map.set(key, StyleEntry::new(key, value, Priority::EXPLICIT), true);
        }
        self.states.push(StyleState {
            name: name.into(),
            values: map,
        });
        self
    }

    /// Parses textual declarations into a named state.
    pub fn parse_state<'a>(
        self,
        name: &str,
        declarations: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Result<Self, StyleParseError> {
        let values = declarations
            .into_iter()
            .map(|(property, value)| {
                let key = StyleKey::from_name(property)
                    .ok_or_else(|| StyleParseError::UnknownProperty(property.into()))?;
                Ok((key, parse_property(key, value)?))
            })
            .collect::<Result<Vec<_>, StyleParseError>>()?;
        Ok(self.state(name, values))
    }

    pub fn build(self) -> Arc<StyleLayer> {
        let variables = (!self.variables.is_empty()).then_some(self.variables);
        Arc::new(StyleLayer {
            values: self.values,
            variables,
            states: self.states,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_types::Rect;

    #[test]
    fn test_map_respects_priority() {
        let mut map = StyleMap::new();
        let key = StyleKey::Width;
        assert!(map.set(key, StyleEntry::new(key, StyleValue::Length(10.0), Priority::IMPORTANT), true));
        assert!(!map.set(key, StyleEntry::new(key, StyleValue::Length(20.0), Priority::EXPLICIT), true));
        assert!(map.set(key, StyleEntry::new(key, StyleValue::Length(30.0), Priority::IMPORTANT), true));
        assert!(!map.set(key, StyleEntry::new(key, StyleValue::Length(40.0), Priority::IMPORTANT), false));
        assert_eq!(map.get(key).map(|e| e.value.clone()), Some(StyleValue::Length(30.0)));
    }

    #[test]
    fn test_merge_inherited_skips_box_properties() {
        let layer = StyleLayer::builder()
            .length(StyleKey::FontSize, 14.0)
            .set(StyleKey::ViewPort, Rect::new(0.0, 0.0, 10.0, 10.0))
            .build();

        let mut target = StyleMap::new();
        layer.merge_inherited_into(&mut target, true, Priority::INHERITED);

        assert_eq!(target.len(), 1);
        let entry = target.get(StyleKey::FontSize).expect("font size carried");
        assert_eq!(entry.priority, Priority::INHERITED);
    }

    #[test]
    fn test_inherit_flag_override() {
        let layer = StyleLayer::builder()
            .length(StyleKey::Width, 50.0)
            .inherit(StyleKey::Width, true)
            .set(StyleKey::Color, folio_types::Color::rgb(1, 2, 3))
            .inherit(StyleKey::Color, false)
            .build();

        let mut target = StyleMap::new();
        layer.merge_inherited_into(&mut target, true, Priority::INHERITED);
        assert!(target.get(StyleKey::Width).is_some());
        assert!(target.get(StyleKey::Color).is_none());
    }

    #[test]
    fn test_builder_parse_declarations() {
        let layer = StyleLayer::builder()
            .parse("font-size", "1in")
            .and_then(|b| b.parse("--accent", "#ff0000"))
            .expect("valid declarations");

        let layer = layer.build();
        assert_eq!(
            layer.get(StyleKey::FontSize).map(|e| e.value.clone()),
            Some(StyleValue::Length(72.0))
        );
        assert!(layer.has_variables());
        assert!(StyleLayer::builder().parse("margin", "4pt").is_err());
    }

    #[test]
    fn test_empty_variables_are_dropped() {
        let layer = StyleLayer::builder().length(StyleKey::X, 1.0).build();
        assert!(layer.variables().is_none());
        assert!(!layer.has_states());
    }

    #[test]
    fn test_builder_parse_state() {
        let layer = StyleLayer::builder()
            .parse_state("hover", [("width", "12pt"), ("color", "#00ff00")])
            .expect("valid state")
            .build();

        assert_eq!(layer.states().len(), 1);
        assert_eq!(
            layer.states()[0].values.get(StyleKey::Width).map(|e| e.value.clone()),
            Some(StyleValue::Length(12.0))
        );
        assert!(StyleLayer::builder().parse_state("hover", [("gap", "1pt")]).is_err());
    }
}
