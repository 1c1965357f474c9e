use std::collections::{hash_map, HashMap};

use crate::{AssetError, AssetKind, CollisionPolicy};

/// Immutable map from logical name to a decoded asset.
#[derive(Debug, Clone)]
pub struct Registry<T> {
    entries: HashMap<String, T>,
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<T> Registry<T> {
    /// Returns the asset registered under `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&T> {
        self.entries.get(name)
    }

    /// Returns `true` if `name` is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Number of registered assets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates the logical names in arbitrary order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterates `(name, asset)` pairs in arbitrary order.
    pub fn iter(&self) -> hash_map::Iter<'_, String, T> {
        self.entries.iter()
    }

    /// Consumes the registry, returning the underlying map.
    #[must_use]
    pub fn into_inner(self) -> HashMap<String, T> {
        self.entries
    }
}

impl<'a, T> IntoIterator for &'a Registry<T> {
    type Item = (&'a String, &'a T);
    type IntoIter = hash_map::Iter<'a, String, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Accumulates entries during a walk and applies the collision policy.
pub(crate) struct RegistryBuilder<T> {
    kind: AssetKind,
    policy: CollisionPolicy,
    entries: HashMap<String, T>,
}

impl<T> RegistryBuilder<T> {
    pub(crate) fn new(kind: AssetKind, policy: CollisionPolicy) -> Self {
        Self {
            kind,
            policy,
            entries: HashMap::with_capacity(16),
        }
    }

    pub(crate) fn insert(&mut self, name: &str, path: &str, value: T) -> Result<(), AssetError> {
        match self.entries.entry(name.to_owned()) {
            hash_map::Entry::Vacant(slot) => {
                slot.insert(value);
            }
            hash_map::Entry::Occupied(mut slot) => match self.policy {
                CollisionPolicy::LastWins => {
                    log::warn!("{} '{name}' from '{path}' replaces an earlier entry", self.kind);
                    slot.insert(value);
                }
                CollisionPolicy::Reject => {
                    return Err(AssetError::DuplicateName {
                        kind: self.kind,
                        name: name.to_owned(),
                        path: path.to_owned(),
                    });
                }
            },
        }
        Ok(())
    }

    pub(crate) fn finish(self) -> Registry<T> {
        Registry {
            entries: self.entries,
        }
    }
}
