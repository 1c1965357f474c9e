//! The read-only file tree abstraction shared by every bundle flavour.

use std::{borrow::Cow, collections::BTreeMap};

use crate::BundleError;

/// Whether an [`AssetEntry`] is a file or a directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    /// A regular file whose bytes can be loaded.
    File,
    /// A directory that can be listed.
    Dir,
}

/// A single child returned by [`AssetTree::list`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetEntry {
    /// Bundle-relative path using `/` separators, e.g. `fonts/Inter_400.ttf`.
    pub path: String,
    /// Final path segment, e.g. `Inter_400.ttf`.
    pub name: String,
    /// File or directory.
    pub kind: EntryKind,
}

impl AssetEntry {
    /// Creates an entry for `name` inside the directory `parent`.
    pub fn new(parent: &str, name: impl Into<String>, kind: EntryKind) -> Self {
        let name = name.into();
        let path = if parent.is_empty() {
            name.clone()
        } else {
            format!("{parent}/{name}")
        };
        Self { path, name, kind }
    }

    /// Returns `true` for file entries.
    #[must_use]
    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }

    /// Returns the text after the final `.` of the name, if any.
    #[must_use]
    pub fn extension(&self) -> Option<&str> {
        match self.name.rsplit_once('.') {
            Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => Some(ext),
            _ => None,
        }
    }

    /// Returns the name without its final extension.
    #[must_use]
    pub fn stem(&self) -> &str {
        match self.name.rsplit_once('.') {
            Some((stem, _)) if !stem.is_empty() => stem,
            _ => &self.name,
        }
    }
}

/// A read-only, hierarchical file tree supplied by the host application.
///
/// Paths are relative to the root and use `/` separators. The empty string
/// names the root directory.
pub trait AssetTree {
    /// Lists the immediate children of `dir`, in no particular order.
    fn list(&self, dir: &str) -> Result<Vec<AssetEntry>, BundleError>;

    /// Reads the full contents of the file at `path`.
    fn load(&self, path: &str) -> Result<Cow<'_, [u8]>, BundleError>;
}

impl<T: AssetTree + ?Sized> AssetTree for &T {
    fn list(&self, dir: &str) -> Result<Vec<AssetEntry>, BundleError> {
        (**self).list(dir)
    }

    fn load(&self, path: &str) -> Result<Cow<'_, [u8]>, BundleError> {
        (**self).load(path)
    }
}

/// Strips leading `./` and `/` and trailing `/` from a bundle path.
#[must_use]
pub fn normalize_path(path: &str) -> &str {
    let mut path = path.trim_end_matches('/');
    loop {
        if let Some(rest) = path.strip_prefix("./") {
            path = rest;
        } else if let Some(rest) = path.strip_prefix('/') {
            path = rest;
        } else {
            break;
        }
    }
    if path == "." {
        ""
    } else {
        path
    }
}

/// Collapses runs of `/` so `icons//close.svg` becomes `icons/close.svg`.
pub(crate) fn collapse_separators(path: &str) -> String {
    path.split('/')
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join("/")
}

/// Returns `true` if `path` is `dir` itself or lies below it.
#[cfg_attr(not(feature = "gpui"), allow(dead_code))]
pub(crate) fn is_under(path: &str, dir: &str) -> bool {
    dir.is_empty()
        || path
            .strip_prefix(dir)
            .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
}

/// Derives the immediate children of `dir` from a flat list of file paths.
///
/// Returns `NotFound` when `dir` is not the root and no path lives below it,
/// and `InvalidPath` for paths with an empty segment below `dir`.
pub(crate) fn children<'a, I>(paths: I, dir: &str) -> Result<Vec<AssetEntry>, BundleError>
where
    I: IntoIterator<Item = &'a str>,
{
    let dir = normalize_path(dir);
    let mut found: BTreeMap<&str, EntryKind> = BTreeMap::new();

    for path in paths {
        let rest = if dir.is_empty() {
            Some(path)
        } else {
            path.strip_prefix(dir).and_then(|rest| rest.strip_prefix('/'))
        };
        let Some(rest) = rest.filter(|rest| !rest.is_empty()) else {
            continue;
        };
        if rest.split('/').any(str::is_empty) {
            return Err(BundleError::InvalidPath(path.to_owned()));
        }
        match rest.split_once('/') {
            Some((child, _)) => {
                found.insert(child, EntryKind::Dir);
            }
            None => {
                found.entry(rest).or_insert(EntryKind::File);
            }
        }
    }

    if found.is_empty() && !dir.is_empty() {
        return Err(BundleError::NotFound(dir.to_owned()));
    }

    Ok(found
        .into_iter()
        .map(|(name, kind)| AssetEntry::new(dir, name, kind))
        .collect())
}
