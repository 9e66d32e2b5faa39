//! Newtype wrappers for semantic identifiers
//!
//! These keep component identities and output names from being mixed up with each
//! other or with arbitrary strings.

use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

/// The stable identity of a component in the source tree.
///
/// Resources created for a component (such as a canvas viewport) are keyed by it.
#[derive(Debug, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct ComponentId(Arc<str>);

impl ComponentId {
    pub fn new(id: impl Into<Arc<str>>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for ComponentId {
    fn from(s: String) -> Self {
        Self(s.into())
    }
}

impl From<&str> for ComponentId {
    fn from(s: &str) -> Self {
        Self(s.into())
    }
}

impl AsRef<str> for ComponentId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The name an object is written under in the output (e.g. `CX1` for a canvas XObject).
#[derive(Debug, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct OutputName(Arc<str>);

impl OutputName {
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for OutputName {
    fn from(s: String) -> Self {
        Self(s.into())
    }
}

impl From<&str> for OutputName {
    fn from(s: &str) -> Self {
        Self(s.into())
    }
}

impl fmt::Display for OutputName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
