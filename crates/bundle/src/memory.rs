//! Owned, in-memory asset bundles.

use std::{borrow::Cow, collections::BTreeMap};

use crate::{
    tree::{children, collapse_separators, normalize_path},
    AssetEntry, AssetTree, BundleError,
};

/// Asset tree backed by owned buffers, for assets fetched at runtime.
#[derive(Debug, Clone, Default)]
pub struct MemoryBundle {
    files: BTreeMap<String, Vec<u8>>,
}

impl MemoryBundle {
    /// Creates an empty bundle.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the file at `path`. Repeated separators are
    /// collapsed.
    pub fn insert(&mut self, path: impl AsRef<str>, bytes: impl Into<Vec<u8>>) {
        self.files
            .insert(collapse_separators(normalize_path(path.as_ref())), bytes.into());
    }

    /// Builder-style variant of [`MemoryBundle::insert`].
    #[must_use]
    pub fn with(mut self, path: impl AsRef<str>, bytes: impl Into<Vec<u8>>) -> Self {
        self.insert(path, bytes);
        self
    }

    /// Number of files in the bundle.
    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Returns `true` when the bundle holds no files.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl<P, B> FromIterator<(P, B)> for MemoryBundle
where
    P: AsRef<str>,
    B: Into<Vec<u8>>,
{
    fn from_iter<I: IntoIterator<Item = (P, B)>>(iter: I) -> Self {
        let mut bundle = Self::new();
        for (path, bytes) in iter {
            bundle.insert(path, bytes);
        }
        bundle
    }
}

impl AssetTree for MemoryBundle {
    fn list(&self, dir: &str) -> Result<Vec<AssetEntry>, BundleError> {
        children(self.files.keys().map(String::as_str), dir)
    }

    fn load(&self, path: &str) -> Result<Cow<'_, [u8]>, BundleError> {
        let path = collapse_separators(normalize_path(path));
        self.files
            .get(&path)
            .map(|bytes| Cow::Borrowed(bytes.as_slice()))
            .ok_or(BundleError::NotFound(path))
    }
}
