//! Output name allocation for objects created during layout.

use folio_types::OutputName;
use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::Mutex;

/// The kinds of object that receive their own output names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    CanvasXObject,
    FormXObject,
    Image,
    Font,
    Pattern,
}

impl ObjectKind {
    pub fn prefix(self) -> &'static str {
        match self {
            ObjectKind::CanvasXObject => "CX",
            ObjectKind::FormXObject => "FX",
            ObjectKind::Image => "Img",
            ObjectKind::Font => "F",
            ObjectKind::Pattern => "P",
        }
    }
}

/// Hands out names that are unique per [`ObjectKind`].
pub trait IdGenerator: Send + Sync + Debug {
    fn next_id(&self, kind: ObjectKind) -> OutputName;
}

/// Sequential names per kind: `CX1`, `CX2`, ...
#[derive(Debug, Default)]
pub struct SequentialIds {
    counters: Mutex<HashMap<ObjectKind, u64>>,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&self, kind: ObjectKind) -> OutputName {
        // A poisoned counter map is still a valid map; keep counting from it.
        let mut counters = self
            .counters
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let counter = counters.entry(kind).or_insert(0);
        *counter += 1;
        OutputName::from(format!("{}{}", kind.prefix(), counter))
    }
}
