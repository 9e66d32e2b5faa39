//! ResourceTable trait for the document-level resource dictionary.
//!
//! Layout registers every reusable piece of content it creates here, keyed by resource type
//! and a stable key of the owning component. The serializer later walks the table to emit
//! each resource once.

use std::collections::HashMap;
use std::fmt::Debug;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ResourceError {
    #[error("Resource not found: {resource_type}/{key}")]
    NotFound { resource_type: String, key: String },

    #[error("Resource key must not be empty (type '{0}')")]
    EmptyKey(String),
}

/// The outcome of [`ResourceTable::ensure_resource`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upsert {
    Inserted,
    Replaced,
}

/// A table of resources keyed by `(resource_type, key)`.
///
/// `ensure_resource` is an upsert: registering the same key twice keeps one entry holding
/// the later value.
pub trait ResourceTable<R>: Debug {
    fn ensure_resource(
        &mut self,
        resource_type: &str,
        key: &str,
        value: R,
    ) -> Result<Upsert, ResourceError>;

    fn get(&self, resource_type: &str, key: &str) -> Option<&R>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

type ResourceKey = (String, String);

/// A [`ResourceTable`] that remembers first-registration order.
#[derive(Debug, Clone)]
pub struct InMemoryResourceTable<R> {
    entries: HashMap<ResourceKey, R>,
    order: Vec<ResourceKey>,
}

impl<R> Default for InMemoryResourceTable<R> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
            order: Vec::new(),
        }
    }
}

impl<R> InMemoryResourceTable<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a resource, failing if it was never registered.
    pub fn require(&self, resource_type: &str, key: &str) -> Result<&R, ResourceError> {
        self.entries
            .get(&(resource_type.to_string(), key.to_string()))
            .ok_or_else(|| ResourceError::NotFound {
                resource_type: resource_type.to_string(),
                key: key.to_string(),
            })
    }

    /// Iterates `(resource_type, key, value)` in first-registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str, &R)> {
        self.order.iter().filter_map(move |k| {
            self.entries
                .get(k)
                .map(|v| (k.0.as_str(), k.1.as_str(), v))
        })
    }

    pub fn of_type<'a>(&'a self, resource_type: &'a str) -> impl Iterator<Item = (&'a str, &'a R)> {
        self.iter()
            .filter(move |(t, _, _)| *t == resource_type)
            .map(|(_, k, v)| (k, v))
    }
}

impl<R: Debug> ResourceTable<R> for InMemoryResourceTable<R> {
    fn ensure_resource(
        &mut self,
        resource_type: &str,
        key: &str,
        value: R,
    ) -> Result<Upsert, ResourceError> {
        if key.is_empty() {
            return Err(ResourceError::EmptyKey(resource_type.to_string()));
        }
        let k = (resource_type.to_string(), key.to_string());
        match self.entries.insert(k.clone(), value) {
            Some(_) => Ok(Upsert::Replaced),
            None => {
                self.order.push(k);
                Ok(Upsert::Inserted)
            }
        }
    }

    fn get(&self, resource_type: &str, key: &str) -> Option<&R> {
        self.entries
            .get(&(resource_type.to_string(), key.to_string()))
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_resource_is_upsert() {
        let mut table = InMemoryResourceTable::new();
        assert_eq!(table.ensure_resource("XObject", "c1", 1), Ok(Upsert::Inserted));
        assert_eq!(table.ensure_resource("XObject", "c1", 2), Ok(Upsert::Replaced));

        assert_eq!(table.len(), 1);
        assert_eq!(table.get("XObject", "c1"), Some(&2));
    }

    #[test]
    fn test_keys_are_scoped_by_type() {
        let mut table = InMemoryResourceTable::new();
        table.ensure_resource("XObject", "a", "x").expect("insert");
        table.ensure_resource("Font", "a", "f").expect("insert");
        table.ensure_resource("XObject", "b", "y").expect("insert");

        assert_eq!(table.len(), 3);
        let xobjects: Vec<_> = table.of_type("XObject").map(|(k, _)| k).collect();
        assert_eq!(xobjects, vec!["a", "b"]);
    }

    #[test]
    fn test_missing_and_empty_keys() {
        let mut table: InMemoryResourceTable<u8> = InMemoryResourceTable::new();
        assert!(table.require("XObject", "nope").is_err());
        assert_eq!(
            table.ensure_resource("XObject", "", 0),
            Err(ResourceError::EmptyKey("XObject".into()))
        );
        assert!(table.is_empty());
    }
}
