//! WebP images decoded into RGBA8 buffers.

use std::fmt;

use bundle::{walk, AssetTree};
use image::{ImageError, ImageFormat, RgbaImage};

use crate::{
    name::logical_name, registry::RegistryBuilder, AlphaPolicy, AssetError, AssetKind,
    ImageOptions, Registry,
};

/// Raster images keyed by logical name.
pub type ImageRegistry = Registry<RasterImage>;

/// Whether colour channels are already multiplied by alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlphaMode {
    /// Colour channels are independent of alpha.
    Straight,
    /// Colour channels are multiplied by alpha.
    Premultiplied,
}

/// A decoded RGBA8 image.
#[derive(Clone)]
pub struct RasterImage {
    pixels: RgbaImage,
    alpha: AlphaMode,
}

impl RasterImage {
    /// Decodes WebP bytes and applies `policy` to the alpha channel.
    pub fn decode_webp(bytes: &[u8], policy: AlphaPolicy) -> Result<Self, ImageError> {
        let decoded = image::load_from_memory_with_format(bytes, ImageFormat::WebP)?;
        let has_alpha = decoded.color().has_alpha();
        // No copy when the decoder already produced RGBA8.
        let mut pixels = decoded.into_rgba8();

        let alpha = match policy {
            AlphaPolicy::Keep => AlphaMode::Straight,
            AlphaPolicy::Reinterpret => AlphaMode::Premultiplied,
            AlphaPolicy::Premultiply => {
                if has_alpha {
                    premultiply(&mut pixels);
                }
                AlphaMode::Premultiplied
            }
        };

        Ok(Self { pixels, alpha })
    }

    /// Width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    /// Height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Alpha layout of [`RasterImage::pixels`].
    #[must_use]
    pub fn alpha(&self) -> AlphaMode {
        self.alpha
    }

    /// The RGBA8 buffer.
    #[must_use]
    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    /// Consumes the image, returning the RGBA8 buffer.
    #[must_use]
    pub fn into_pixels(self) -> RgbaImage {
        self.pixels
    }
}

impl fmt::Debug for RasterImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RasterImage")
            .field("width", &self.width())
            .field("height", &self.height())
            .field("alpha", &self.alpha)
            .finish()
    }
}

#[allow(clippy::cast_possible_truncation)]
fn premultiply(pixels: &mut RgbaImage) {
    for pixel in pixels.pixels_mut() {
        let alpha = u16::from(pixel[3]);
        if alpha == 255 {
            continue;
        }
        for channel in &mut pixel.0[..3] {
            *channel = ((u16::from(*channel) * alpha + 127) / 255) as u8;
        }
    }
}

/// Loads every `.webp` in `tree`, keyed by file name without extension.
///
/// The first undecodable image aborts the load. Duplicate names are handled
/// by [`ImageOptions::collisions`].
pub fn load<T>(tree: &T, options: &ImageOptions) -> Result<ImageRegistry, AssetError>
where
    T: AssetTree + ?Sized,
{
    let mut registry = RegistryBuilder::new(AssetKind::Raster, options.collisions);

    walk(tree, AssetKind::Raster.extension(), |entry| {
        let bytes = tree.load(&entry.path)?;
        let image = RasterImage::decode_webp(&bytes, options.alpha)
            .map_err(|err| AssetError::decode(AssetKind::Raster, &entry.path, err))?;
        log::debug!("loaded image {} ({}x{})", entry.path, image.width(), image.height());
        registry.insert(logical_name(&entry.name), &entry.path, image)
    })?;

    Ok(registry.finish())
}

/// Like [`load`], but panics on error.
#[must_use]
pub fn load_or_panic<T>(tree: &T, options: &ImageOptions) -> ImageRegistry
where
    T: AssetTree + ?Sized,
{
    load(tree, options).unwrap_or_else(|err| panic!("failed to load images: {err}"))
}
