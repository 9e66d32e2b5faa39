//! The style stack: the layers from the document root down to the component being laid out.

use crate::effective::{EffectiveStyle, resolve_font_size};
use crate::font::DEFAULT_FONT_SIZE;
use crate::layer::{StyleLayer, StyleMap, StyleState};
use crate::property::{Priority, StyleEntry, StyleKey, StyleValue};
use crate::variables::VariableSet;
use std::sync::Arc;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum StyleError {
    #[error("The style stack has become unbalanced: cannot pop below the root layer (depth {0}).")]
    UnbalancedStack(usize),
}

/// A root-first sequence of style layers. Never empty.
///
/// Cloning shares the layer instances but not the sequence, so pushes and pops on a clone
/// leave the original untouched.
#[derive(Debug, Clone)]
pub struct StyleStack {
    layers: Vec<Arc<StyleLayer>>,
}

impl StyleStack {
    pub fn new(root: Arc<StyleLayer>) -> Self {
        Self { layers: vec![root] }
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// The top of the stack: the layer of the component currently being resolved.
    pub fn current(&self) -> &Arc<StyleLayer> {
        // `layers` always holds at least the root.
        &self.layers[self.layers.len() - 1]
    }

    pub fn push(&mut self, layer: Arc<StyleLayer>) {
        self.layers.push(layer);
    }

    /// Removes the top layer. Popping the root is an engine bug and fails.
    pub fn pop(&mut self) -> Result<Arc<StyleLayer>, StyleError> {
        if self.layers.len() <= 1 {
            return Err(StyleError::UnbalancedStack(self.layers.len()));
        }
        self.layers
            .pop()
            .ok_or(StyleError::UnbalancedStack(0))
    }

    /// Builds the effective style for the component whose layer is on top.
    ///
    /// Ancestors contribute only their inheritable values, at inherited priority, so any
    /// value the top layer declares wins over them. Variables accumulate root-first and
    /// named states come from the top layer only.
    pub fn build(&self) -> EffectiveStyle {
        let mut declared = StyleMap::new();
        let mut variables: Option<VariableSet> = None;

        let (top, ancestors) = match self.layers.split_last() {
            Some(split) => split,
            None => return EffectiveStyle::default(),
        };

        // Font sizes are resolved down the ancestor chain so a relative size in the top
        // layer has a concrete base.
        let mut inherited_size = DEFAULT_FONT_SIZE;
        for layer in ancestors {
            layer.merge_inherited_into(&mut declared, true, Priority::INHERITED);
            collect_variables(layer, &mut variables);
            if let Some(size) = layer
                .get(StyleKey::FontSize)
                .filter(|entry| entry.inherited)
                .and_then(|entry| resolve_font_size(&entry.value, inherited_size, variables.as_ref()))
            {
                inherited_size = size;
            }
        }
        if declared.get(StyleKey::FontSize).is_some() {
            let key = StyleKey::FontSize;
            let entry = StyleEntry::new(key, StyleValue::Length(inherited_size), Priority::INHERITED);
            declared.set(key, entry, true);
        }

        top.merge_into(&mut declared);
        collect_variables(top, &mut variables);

        let states: Vec<StyleState> = if top.has_states() {
            top.states().to_vec()
        } else {
            Vec::new()
        };

        log::trace!(
            "Built style from {} layers: {} values, {} variables",
            self.layers.len(),
            declared.len(),
            variables.as_ref().map_or(0, VariableSet::len)
        );

        EffectiveStyle::flatten(declared, variables, states, inherited_size)
    }
}

fn collect_variables(layer: &StyleLayer, into: &mut Option<VariableSet>) {
    if let Some(vars) = layer.variables().filter(|v| !v.is_empty()) {
        vars.merge_into(into.get_or_insert_with(VariableSet::new));
    }
}
