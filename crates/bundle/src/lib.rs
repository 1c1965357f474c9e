#![doc = include_str!("../README.md")]
#![warn(clippy::pedantic, missing_docs, unreachable_pub)]

mod directory;
mod embedded;
mod error;
#[cfg(feature = "gpui")]
mod gpui_source;
pub mod manifest;
mod memory;
mod tree;
mod walk;

pub use directory::DirBundle;
pub use embedded::{AssetSpec, EmbeddedBundle};
pub use error::BundleError;
pub use memory::MemoryBundle;
pub use tree::{normalize_path, AssetEntry, AssetTree, EntryKind};
pub use walk::{walk, walk_files};
