//! The flattened, fully resolved style used to lay out one component.

use crate::font::{Font, DEFAULT_FONT_SIZE};
use crate::layer::{StyleMap, StyleState};
use crate::position::PositionMode;
use crate::property::{Priority, StyleEntry, StyleKey, StyleValue};
use crate::text::TextOptions;
use crate::variables::VariableSet;
use folio_types::{AspectRatio, Rect, Scaling};
use std::collections::HashMap;

/// Guards against variables that refer to each other in a cycle.
const MAX_VAR_DEPTH: usize = 16;

/// A resolved style. Immutable: corrections go through [`EffectiveStyle::with_value`],
/// which produces a new, re-flattened style.
#[derive(Debug, Clone, PartialEq)]
pub struct EffectiveStyle {
    declared: StyleMap,
    resolved: HashMap<StyleKey, StyleValue>,
    variables: Option<VariableSet>,
    states: Vec<StyleState>,
    /// The inherited font size an `em` font size is relative to.
    em_base: f32,
}

impl Default for EffectiveStyle {
    fn default() -> Self {
        Self::flatten(StyleMap::new(), None, Vec::new(), DEFAULT_FONT_SIZE)
    }
}

impl EffectiveStyle {
    /// Resolves variables and relative lengths in `declared`. An `em` font size is taken
    /// relative to `em_base`, every other `em` length to the resolved font size.
    pub fn flatten(
        declared: StyleMap,
        variables: Option<VariableSet>,
        states: Vec<StyleState>,
        em_base: f32,
    ) -> Self {
        let resolved = resolve_all(&declared, variables.as_ref(), em_base);
        Self {
            declared,
            resolved,
            variables,
            states,
            em_base,
        }
    }

    pub fn get(&self, key: StyleKey) -> Option<&StyleValue> {
        self.resolved.get(&key)
    }

    /// The merged entry before flattening.
    pub fn declared(&self, key: StyleKey) -> Option<&StyleEntry> {
        self.declared.get(key)
    }

    pub fn length(&self, key: StyleKey) -> Option<f32> {
        self.get(key).and_then(StyleValue::as_length)
    }

    pub fn len(&self) -> usize {
        self.resolved.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resolved.is_empty()
    }

    pub fn variables(&self) -> Option<&VariableSet> {
        self.variables.as_ref()
    }

    pub fn states(&self) -> &[StyleState] {
        &self.states
    }

    /// Returns a copy with `key` explicitly set to `value`, flattened again.
    pub fn with_value(&self, key: StyleKey, value: impl Into<StyleValue>) -> Self {
        let mut declared = self.declared.clone();
        let entry = StyleEntry::new(key, value.into(), Priority::IMPORTANT);
        declared.set(key, entry, true);
        Self::flatten(
            declared,
            self.variables.clone(),
            self.states.clone(),
            self.em_base,
        )
    }

    /// Like [`EffectiveStyle::with_value`] for several keys, flattening once.
    pub fn with_values<I>(&self, values: I) -> Self
    where
        I: IntoIterator<Item = (StyleKey, StyleValue)>,
    {
        let mut declared = self.declared.clone();
        for (key, value) in values {
            declared.set(key, StyleEntry::new(key, value, Priority::IMPORTANT), true);
        }
        Self::flatten(
            declared,
            self.variables.clone(),
            self.states.clone(),
            self.em_base,
        )
    }

    /// Applies the named state's values on top of this style.
    ///
    /// Returns `None` when no state with that name was declared.
    pub fn resolve_state(&self, name: &str) -> Option<Self> {
        let state = self.states.iter().find(|s| &*s.name == name)?;
        let mut declared = self.declared.clone();
        for (key, entry) in state.values.iter() {
            declared.set(key, entry.clone(), true);
        }
        Some(Self::flatten(
            declared,
            self.variables.clone(),
            self.states.clone(),
            self.em_base,
        ))
    }

    pub fn position_mode(&self) -> PositionMode {
        match self.get(StyleKey::PositionMode) {
            Some(StyleValue::Position(mode)) => *mode,
            _ => PositionMode::Static,
        }
    }

    pub fn viewport(&self) -> Option<Rect> {
        self.get(StyleKey::ViewPort).and_then(StyleValue::as_rect)
    }

    /// The scaling policy for a viewport.
    ///
    /// An absent aspect ratio means `xMidYMid meet`; one that cannot be understood means
    /// no scaling at all.
    pub fn scaling(&self) -> Scaling {
        match self.get(StyleKey::AspectRatio) {
            None => AspectRatio::default().scaling(),
            Some(StyleValue::Aspect(ratio)) => ratio.scaling(),
            Some(StyleValue::Text(text)) => AspectRatio::parse(text)
                .map(|r| r.scaling())
                .unwrap_or(Scaling::Identity),
            Some(_) => Scaling::Identity,
        }
    }

    pub fn font(&self) -> Font {
        let mut font = Font::default();
        if let Some(family) = self.get(StyleKey::FontFamily).and_then(StyleValue::as_text) {
            font.family = family.into();
        }
        if let Some(size) = self.length(StyleKey::FontSize) {
            font.size = size;
        }
        if let Some(StyleValue::Weight(weight)) = self.get(StyleKey::FontWeight) {
            font.weight = *weight;
        }
        if let Some(StyleValue::FontStyle(style)) = self.get(StyleKey::FontStyle) {
            font.style = *style;
        }
        font
    }

    pub fn text_options(&self) -> TextOptions {
        let mut options = TextOptions::default();
        if let Some(from_top) = self.get(StyleKey::DrawTextFromTop).and_then(StyleValue::as_bool) {
            options.draw_from_top = from_top;
        }
        if let Some(StyleValue::Align(align)) = self.get(StyleKey::TextAlign) {
            options.align = *align;
        }
        options.line_height = self.length(StyleKey::LineHeight);
        options
    }
}

/// Resolves a font size declaration to points, `em` being relative to `base`.
pub(crate) fn resolve_font_size(
    value: &StyleValue,
    base: f32,
    variables: Option<&VariableSet>,
) -> Option<f32> {
    match resolve_value(StyleKey::FontSize, value, variables, 0)? {
        StyleValue::Em(em) => Some(em * base),
        other => other.as_length(),
    }
}

fn resolve_all(
    declared: &StyleMap,
    variables: Option<&VariableSet>,
    em_base: f32,
) -> HashMap<StyleKey, StyleValue> {
    // Font size first: `em` values everywhere else are relative to it.
    let font_size = declared
        .get(StyleKey::FontSize)
        .and_then(|e| resolve_font_size(&e.value, em_base, variables))
        .unwrap_or(em_base);

    let mut resolved = HashMap::with_capacity(declared.len());
    for (key, entry) in declared.iter() {
        let Some(value) = resolve_value(key, &entry.value, variables, 0) else {
            continue;
        };
        let value = match value {
            StyleValue::Em(_) if key == StyleKey::FontSize => StyleValue::Length(font_size),
            StyleValue::Em(em) => StyleValue::Length(em * font_size),
            other => other,
        };
        resolved.insert(key, value);
    }
    resolved
}

fn resolve_value(
    key: StyleKey,
    value: &StyleValue,
    variables: Option<&VariableSet>,
    depth: usize,
) -> Option<StyleValue> {
    let StyleValue::Var(var) = value else {
        return Some(value.clone());
    };
    if depth >= MAX_VAR_DEPTH {
        log::warn!(
            "Variable '{}' for '{}' nests too deeply; treating as unset",
            var.name,
            key.name()
        );
        return None;
    }
    let found = variables
        .and_then(|vars| vars.get(&var.name))
        .and_then(|v| resolve_value(key, v, variables, depth + 1));
    match (found, &var.fallback) {
        (Some(v), _) => Some(v),
        (None, Some(fallback)) => resolve_value(key, fallback, variables, depth + 1),
        (None, None) => {
            log::debug!(
                "Variable '{}' for '{}' is not defined; treating as unset",
                var.name,
                key.name()
            );
            None
        }
    }
}
