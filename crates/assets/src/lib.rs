#![doc = include_str!("../README.md")]
#![warn(clippy::pedantic, missing_docs, unreachable_pub)]

mod config;
mod error;
pub mod fonts;
#[cfg(feature = "gpui")]
mod gpui_bridge;
pub mod images;
mod kind;
pub mod name;
mod registry;
mod set;
pub mod vectors;

#[cfg(test)]
mod fixtures;

pub use bundle::{AssetTree, DirBundle, EmbeddedBundle, MemoryBundle};
pub use config::{
    AlphaPolicy, AssetConfig, CollisionPolicy, FontOptions, ImageOptions, VectorOptions,
};
pub use error::{AssetError, NameError};
pub use fonts::{FontCollection, FontFace};
pub use images::{AlphaMode, ImageRegistry, RasterImage};
pub use kind::AssetKind;
pub use name::{FontDescriptor, FontStyle, FontWeight};
pub use registry::Registry;
pub use set::AssetSet;
pub use vectors::{VectorIcon, VectorRegistry};
