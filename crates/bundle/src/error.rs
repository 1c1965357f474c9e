use std::io;

use thiserror::Error;

/// Errors raised while listing or reading an asset bundle.
#[derive(Debug, Error)]
pub enum BundleError {
    /// The requested file or directory does not exist in the bundle.
    #[error("asset '{0}' not found")]
    NotFound(String),
    /// The path escapes the bundle root or is otherwise malformed.
    #[error("invalid asset path '{0}'")]
    InvalidPath(String),
    /// Wraps IO errors from bundles backed by the filesystem.
    #[error("io error at '{path}': {source}")]
    Io {
        /// Bundle-relative path that failed.
        path: String,
        /// Underlying IO error.
        #[source]
        source: io::Error,
    },
}

impl BundleError {
    pub(crate) fn io(path: impl Into<String>, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            return Self::NotFound(path.into());
        }
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
