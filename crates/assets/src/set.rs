use bundle::AssetTree;

use crate::{
    images, vectors, AssetConfig, AssetError, FontCollection, ImageRegistry, VectorRegistry,
};

/// Fonts, images and icons loaded from one bundle.
#[derive(Debug, Default)]
pub struct AssetSet {
    /// `.ttf` faces.
    pub fonts: FontCollection,
    /// `.webp` images.
    pub images: ImageRegistry,
    /// `.svg` icons.
    pub vectors: VectorRegistry,
}

impl AssetSet {
    /// Builds all three registries, fonts first, stopping at the first error.
    pub fn load<T>(tree: &T, config: &AssetConfig) -> Result<Self, AssetError>
    where
        T: AssetTree + ?Sized,
    {
        let fonts = FontCollection::load(tree, &config.fonts)?;
        let images = images::load(tree, &config.images)?;
        let vectors = vectors::load(tree, &config.vectors)?;
        log::info!(
            "loaded {} fonts, {} images, {} vectors",
            fonts.len(),
            images.len(),
            vectors.len()
        );
        Ok(Self {
            fonts,
            images,
            vectors,
        })
    }

    /// Like [`AssetSet::load`], but panics on error.
    #[must_use]
    pub fn load_or_panic<T>(tree: &T, config: &AssetConfig) -> Self
    where
        T: AssetTree + ?Sized,
    {
        Self::load(tree, config).unwrap_or_else(|err| panic!("failed to load assets: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use bundle::{AssetSpec, EmbeddedBundle, MemoryBundle};

    use super::*;
    use crate::{fixtures, FontWeight};

    #[test]
    fn loads_every_kind_from_one_bundle() {
        let bundle = MemoryBundle::new()
            .with("fonts/Inter_700.ttf", fixtures::font(2048))
            .with("fonts/Inter_300.ttf", fixtures::font(2048))
            .with("images/hero.webp", fixtures::webp_rgb(3, 3, [1, 2, 3]))
            .with("icons/menu.svg", fixtures::svg(16, 16))
            .with("LICENSE.txt", "MIT");

        let config = AssetConfig::from_json(br#"{"fonts": {"default_weight": 700}}"#).unwrap();
        let set = AssetSet::load(&bundle, &config).unwrap();

        assert_eq!(set.fonts.len(), 2);
        assert_eq!(set.fonts.faces()[0].descriptor().weight(), FontWeight::BOLD);
        assert_eq!(set.fonts.faces()[0].units_per_em(), 2048);
        assert!(set.images.contains("hero"));
        assert!(set.vectors.contains("menu"));
    }

    #[test]
    fn one_bad_asset_fails_everything() {
        let bundle = MemoryBundle::new()
            .with("fonts/Inter_700.ttf", fixtures::font(1000))
            .with("icons/broken.svg", "<not svg>");
        assert!(AssetSet::load(&bundle, &AssetConfig::default()).is_err());
    }

    #[test]
    fn works_with_embedded_tables() {
        static SVG: &[u8] = br#"<svg xmlns="http://www.w3.org/2000/svg" width="4" height="4"/>"#;
        static SPECS: &[AssetSpec] = &[AssetSpec::new("icons/dot.svg", SVG)];

        let set = AssetSet::load(&EmbeddedBundle::new(SPECS), &AssetConfig::default()).unwrap();
        assert!(set.fonts.is_empty());
        assert!(set.vectors.contains("dot"));
    }

    #[test]
    #[should_panic(expected = "failed to load assets")]
    fn load_or_panic_panics() {
        let bundle = MemoryBundle::new().with("logo.webp", "junk");
        let _ = AssetSet::load_or_panic(&bundle, &AssetConfig::default());
    }
}
