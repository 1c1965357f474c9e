//! Loader options, deserializable from JSON shipped alongside the assets.

use bundle::AssetTree;
use serde::{Deserialize, Serialize};

use crate::{AssetError, FontWeight};

/// What to do when two files map to the same logical name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CollisionPolicy {
    /// The file visited later in walk order replaces the earlier one.
    #[default]
    LastWins,
    /// Abort with [`AssetError::DuplicateName`].
    Reject,
}

/// How decoded straight-alpha pixels are turned into premultiplied ones.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlphaPolicy {
    /// Multiply colour by alpha in place; opaque images are only relabelled.
    #[default]
    Premultiply,
    /// Relabel the buffer as premultiplied without touching any byte. Only
    /// correct for opaque images, but free.
    Reinterpret,
    /// Leave the pixels as straight alpha.
    Keep,
}

/// Options for [`crate::FontCollection::load`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontOptions {
    /// When set, the first face with this weight is moved to the front of the
    /// collection so consumers pick it as their implicit default.
    pub default_weight: Option<FontWeight>,
}

/// Options for [`crate::images::load`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageOptions {
    /// Alpha handling for decoded pixels.
    pub alpha: AlphaPolicy,
    /// Behaviour on duplicate logical names.
    pub collisions: CollisionPolicy,
}

/// Options for [`crate::vectors::load`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VectorOptions {
    /// Behaviour on duplicate logical names.
    pub collisions: CollisionPolicy,
}

/// Options for every registry built by [`crate::AssetSet::load`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    /// Font collection options.
    pub fonts: FontOptions,
    /// Raster image options.
    pub images: ImageOptions,
    /// Vector icon options.
    pub vectors: VectorOptions,
}

impl AssetConfig {
    /// Parses a JSON document; missing fields take their defaults.
    pub fn from_json(bytes: &[u8]) -> Result<Self, AssetError> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Reads and parses the JSON document at `path` inside `tree`.
    pub fn from_tree<T>(tree: &T, path: &str) -> Result<Self, AssetError>
    where
        T: AssetTree + ?Sized,
    {
        let bytes = tree.load(path)?;
        Self::from_json(&bytes)
    }
}
