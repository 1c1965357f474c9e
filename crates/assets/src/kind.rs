use std::fmt;

use serde::{Deserialize, Serialize};

/// The resource kinds a registry can be built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AssetKind {
    /// TrueType fonts (`.ttf`).
    Font,
    /// WebP raster images (`.webp`).
    Raster,
    /// SVG vector icons (`.svg`).
    Vector,
}

impl AssetKind {
    /// File extension, without the dot, that selects this kind.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            AssetKind::Font => "ttf",
            AssetKind::Raster => "webp",
            AssetKind::Vector => "svg",
        }
    }

    /// Human readable name used in messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            AssetKind::Font => "font",
            AssetKind::Raster => "image",
            AssetKind::Vector => "vector",
        }
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
