//! Bundles compiled into the binary with `include_bytes!`.

use std::borrow::Cow;

use crate::{
    tree::{children, normalize_path},
    AssetEntry, AssetTree, BundleError,
};

/// Metadata describing an embedded asset file.
#[derive(Debug, Clone, Copy)]
pub struct AssetSpec {
    /// Logical path that the asset should be exposed under at runtime.
    pub logical_path: &'static str,
    /// Raw embedded bytes for the asset.
    pub bytes: &'static [u8],
}

impl AssetSpec {
    /// Creates a new specification for an embedded asset.
    pub const fn new(logical_path: &'static str, bytes: &'static [u8]) -> Self {
        Self {
            logical_path,
            bytes,
        }
    }

    /// Returns the logical path used when looking the asset up.
    #[must_use]
    pub const fn logical_path(self) -> &'static str {
        self.logical_path
    }

    /// Returns the embedded bytes for the asset.
    #[must_use]
    pub const fn bytes(self) -> &'static [u8] {
        self.bytes
    }
}

/// Asset tree over a static table of [`AssetSpec`]s, usually generated by
/// [`crate::manifest::emit_manifest`].
#[derive(Debug, Clone, Copy)]
pub struct EmbeddedBundle {
    specs: &'static [AssetSpec],
}

impl EmbeddedBundle {
    /// Wraps a static asset table.
    #[must_use]
    pub const fn new(specs: &'static [AssetSpec]) -> Self {
        Self { specs }
    }

    /// Returns the embedded asset table.
    #[must_use]
    pub const fn specs(self) -> &'static [AssetSpec] {
        self.specs
    }

    /// Looks up the embedded bytes for `path`.
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&'static [u8]> {
        let path = normalize_path(path);
        self.specs
            .iter()
            .find(|spec| normalize_path(spec.logical_path) == path)
            .map(|spec| spec.bytes)
    }
}

impl AssetTree for EmbeddedBundle {
    fn list(&self, dir: &str) -> Result<Vec<AssetEntry>, BundleError> {
        children(
            self.specs.iter().map(|spec| normalize_path(spec.logical_path)),
            dir,
        )
    }

    fn load(&self, path: &str) -> Result<Cow<'_, [u8]>, BundleError> {
        self.get(path)
            .map(Cow::Borrowed)
            .ok_or_else(|| BundleError::NotFound(normalize_path(path).to_owned()))
    }
}
