//! Deterministic, fail-fast traversal of an [`AssetTree`].

use crate::{AssetEntry, AssetTree, BundleError, EntryKind};

/// Visits every file under the root whose extension matches `extension`.
///
/// `extension` is given without the dot and compared ASCII
/// case-insensitively. Children of each directory are visited in
/// lexicographic order of their names; a directory is descended into at its
/// sorted position. The first error returned by the tree or by `visit` stops
/// the walk and is returned unchanged.
pub fn walk<T, F, E>(tree: &T, extension: &str, mut visit: F) -> Result<(), E>
where
    T: AssetTree + ?Sized,
    F: FnMut(&AssetEntry) -> Result<(), E>,
    E: From<BundleError>,
{
    walk_dir(tree, "", &mut |entry: &AssetEntry| {
        let matches = entry
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case(extension));
        if matches {
            visit(entry)
        } else {
            log::trace!("skipping {} (not .{extension})", entry.path);
            Ok(())
        }
    })
}

/// Visits every file in the tree, in the same order as [`walk`].
pub fn walk_files<T, F, E>(tree: &T, mut visit: F) -> Result<(), E>
where
    T: AssetTree + ?Sized,
    F: FnMut(&AssetEntry) -> Result<(), E>,
    E: From<BundleError>,
{
    walk_dir(tree, "", &mut visit)
}

fn walk_dir<T, E>(
    tree: &T,
    dir: &str,
    visit: &mut dyn FnMut(&AssetEntry) -> Result<(), E>,
) -> Result<(), E>
where
    T: AssetTree + ?Sized,
    E: From<BundleError>,
{
    let mut entries = tree.list(dir)?;
    entries.sort_by(|a, b| a.name.cmp(&b.name));

    for entry in &entries {
        match entry.kind {
            EntryKind::Dir => walk_dir(tree, &entry.path, visit)?,
            EntryKind::File => visit(entry)?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AssetSpec, EmbeddedBundle, MemoryBundle};

    fn bundle() -> MemoryBundle {
        [
            ("b.svg", ""),
            ("a/z.svg", ""),
            ("a/nested/y.SVG", ""),
            ("a.svg", ""),
            ("notes.txt", ""),
            ("c/image.png", ""),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn visits_matching_files_in_sorted_order() {
        let mut seen = Vec::new();
        walk(&bundle(), "svg", |entry| {
            seen.push(entry.path.clone());
            Ok::<_, BundleError>(())
        })
        .unwrap();
        assert_eq!(seen, ["a/nested/y.SVG", "a/z.svg", "a.svg", "b.svg"]);
    }

    #[test]
    fn stops_at_first_visitor_error() {
        let mut visited = 0;
        let result = walk(&bundle(), "svg", |entry| {
            visited += 1;
            if entry.name == "z.svg" {
                return Err(BundleError::InvalidPath(entry.path.clone()));
            }
            Ok(())
        });
        assert!(matches!(result, Err(BundleError::InvalidPath(path)) if path == "a/z.svg"));
        assert_eq!(visited, 2);
    }

    #[test]
    fn walk_files_sees_everything() {
        let mut count = 0;
        walk_files(&bundle(), |_| {
            count += 1;
            Ok::<_, BundleError>(())
        })
        .unwrap();
        assert_eq!(count, 6);
    }

    #[test]
    fn doubled_separators_do_not_recurse_forever() {
        let bundle = MemoryBundle::new().with("icons//close.svg", "<svg/>");
        let mut seen = Vec::new();
        walk(&bundle, "svg", |entry| {
            seen.push(entry.path.clone());
            Ok::<_, BundleError>(())
        })
        .unwrap();
        assert_eq!(seen, ["icons/close.svg"]);

        static SPECS: &[AssetSpec] = &[AssetSpec::new("icons//close.svg", b"<svg/>")];
        let result = walk(&EmbeddedBundle::new(SPECS), "svg", |_| Ok::<_, BundleError>(()));
        assert!(matches!(result, Err(BundleError::InvalidPath(_))));
    }

    #[test]
    fn empty_tree_is_not_an_error() {
        let result = walk(&MemoryBundle::new(), "ttf", |_| Ok::<_, BundleError>(()));
        assert!(result.is_ok());
    }
}
