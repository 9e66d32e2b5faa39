//! Named style variables, used by `var(--name)` values.

use crate::property::StyleValue;
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct VariableSet {
    values: HashMap<Arc<str>, StyleValue>,
}

impl VariableSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a variable. A leading `--` on the name is ignored.
    pub fn set(&mut self, name: &str, value: StyleValue) {
        self.values.insert(name.trim_start_matches("--").into(), value);
    }

    pub fn get(&self, name: &str) -> Option<&StyleValue> {
        self.values.get(name.trim_start_matches("--"))
    }

    /// Copies every variable into `target`, replacing any with the same name.
    pub fn merge_into(&self, target: &mut VariableSet) {
        for (name, value) in &self.values {
            target.values.insert(name.clone(), value.clone());
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
