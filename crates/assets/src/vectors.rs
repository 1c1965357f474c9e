//! SVG icons parsed into render-ready trees.

use std::fmt;

use bundle::{walk, AssetTree};
use resvg::{
    tiny_skia::{Pixmap, Transform},
    usvg::{self, Options, Tree},
};

use crate::{
    name::logical_name, registry::RegistryBuilder, AssetError, AssetKind, Registry, VectorOptions,
};

/// Vector icons keyed by logical name.
pub type VectorRegistry = Registry<VectorIcon>;

/// A parsed SVG document.
pub struct VectorIcon {
    tree: Tree,
}

impl VectorIcon {
    /// Parses SVG bytes.
    pub fn parse(bytes: &[u8]) -> Result<Self, usvg::Error> {
        let tree = Tree::from_data(bytes, &Options::default())?;
        Ok(Self { tree })
    }

    /// Intrinsic width in CSS pixels.
    #[must_use]
    pub fn width(&self) -> f32 {
        self.tree.size().width()
    }

    /// Intrinsic height in CSS pixels.
    #[must_use]
    pub fn height(&self) -> f32 {
        self.tree.size().height()
    }

    /// The parsed render tree.
    #[must_use]
    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    /// Renders the icon stretched to `width` x `height` pixels.
    ///
    /// Returns `None` for a zero-sized target.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn rasterize(&self, width: u32, height: u32) -> Option<Pixmap> {
        let mut pixmap = Pixmap::new(width, height)?;
        let transform = Transform::from_scale(
            width as f32 / self.width(),
            height as f32 / self.height(),
        );
        resvg::render(&self.tree, transform, &mut pixmap.as_mut());
        Some(pixmap)
    }
}

impl fmt::Debug for VectorIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VectorIcon")
            .field("width", &self.width())
            .field("height", &self.height())
            .finish_non_exhaustive()
    }
}

/// Loads every `.svg` in `tree`, keyed by file name without extension.
pub fn load<T>(tree: &T, options: &VectorOptions) -> Result<VectorRegistry, AssetError>
where
    T: AssetTree + ?Sized,
{
    let mut registry = RegistryBuilder::new(AssetKind::Vector, options.collisions);

    walk(tree, AssetKind::Vector.extension(), |entry| {
        let bytes = tree.load(&entry.path)?;
        let icon = VectorIcon::parse(&bytes)
            .map_err(|err| AssetError::decode(AssetKind::Vector, &entry.path, err))?;
        log::debug!("loaded vector {}", entry.path);
        registry.insert(logical_name(&entry.name), &entry.path, icon)
    })?;

    Ok(registry.finish())
}

/// Like [`load`], but panics on error.
#[must_use]
pub fn load_or_panic<T>(tree: &T, options: &VectorOptions) -> VectorRegistry
where
    T: AssetTree + ?Sized,
{
    load(tree, options).unwrap_or_else(|err| panic!("failed to load vectors: {err}"))
}
