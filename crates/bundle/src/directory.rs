//! Bundles read straight from a directory on disk.

use std::{
    borrow::Cow,
    fs,
    path::{Component, Path, PathBuf},
};

use crate::{tree::normalize_path, AssetEntry, AssetTree, BundleError, EntryKind};

/// Asset tree rooted at a filesystem directory.
///
/// Useful during development, where rebuilding to re-embed assets is slow.
#[derive(Debug, Clone)]
pub struct DirBundle {
    root: PathBuf,
}

impl DirBundle {
    /// Creates a bundle rooted at `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Returns the root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, path: &str) -> Result<PathBuf, BundleError> {
        let relative = Path::new(path);
        if relative
            .components()
            .any(|component| !matches!(component, Component::Normal(_)))
        {
            return Err(BundleError::InvalidPath(path.to_owned()));
        }
        Ok(self.root.join(relative))
    }
}

impl AssetTree for DirBundle {
    fn list(&self, dir: &str) -> Result<Vec<AssetEntry>, BundleError> {
        let dir = normalize_path(dir);
        let full = self.resolve(dir)?;
        let mut entries = Vec::new();

        for entry in fs::read_dir(&full).map_err(|err| BundleError::io(dir, err))? {
            let entry = entry.map_err(|err| BundleError::io(dir, err))?;
            let Some(name) = entry.file_name().to_str().map(str::to_owned) else {
                log::trace!("skipping non utf-8 entry {:?}", entry.path());
                continue;
            };
            let mut asset = AssetEntry::new(dir, name, EntryKind::File);
            // Follows symlinks so linked asset folders behave like real ones.
            let metadata =
                fs::metadata(entry.path()).map_err(|err| BundleError::io(&asset.path, err))?;
            if metadata.is_dir() {
                asset.kind = EntryKind::Dir;
            }
            entries.push(asset);
        }

        Ok(entries)
    }

    fn load(&self, path: &str) -> Result<Cow<'_, [u8]>, BundleError> {
        let path = normalize_path(path);
        let full = self.resolve(path)?;
        fs::read(full)
            .map(Cow::Owned)
            .map_err(|err| BundleError::io(path, err))
    }
}
