use bundle::BundleError;
use thiserror::Error;

use crate::AssetKind;

/// Why a font file name failed to parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    /// Nothing precedes the first separator.
    #[error("the family segment is empty")]
    EmptyFamily,
    /// The name has no `_weight` segment.
    #[error("expected `Family_Weight[_Style]`, e.g. Montserrat-700-Italic.ttf")]
    MissingWeight,
    /// The weight is neither a known tier name nor an integer.
    #[error("unknown weight '{0}'")]
    InvalidWeight(String),
    /// The numeric weight lies outside 1..=1000.
    #[error("weight {0} is outside 1..=1000")]
    WeightOutOfRange(u32),
}

/// Errors raised while building asset registries.
///
/// Every variant aborts the registry under construction.
#[derive(Debug, Error)]
pub enum AssetError {
    /// The file name does not follow the naming convention for its kind.
    #[error("invalid asset name '{name}': {reason}")]
    InvalidAssetName {
        /// Offending file name.
        name: String,
        /// What was wrong with it.
        reason: NameError,
    },
    /// The bundle could not list or read an entry.
    #[error(transparent)]
    Io(#[from] BundleError),
    /// The decoder rejected the payload.
    #[error("failed to decode {kind} '{path}': {source}")]
    Decode {
        /// Kind of asset being decoded.
        kind: AssetKind,
        /// Bundle path of the asset.
        path: String,
        /// Error reported by the decoder.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// Two assets map to the same logical name under
    /// [`crate::CollisionPolicy::Reject`].
    #[error("duplicate {kind} name '{name}' at '{path}'")]
    DuplicateName {
        /// Kind of the colliding assets.
        kind: AssetKind,
        /// Shared logical name.
        name: String,
        /// Path of the second asset.
        path: String,
    },
    /// The configuration JSON could not be parsed.
    #[error("invalid asset configuration: {0}")]
    Config(#[from] serde_json::Error),
}

impl AssetError {
    pub(crate) fn invalid_name(name: &str, reason: NameError) -> Self {
        Self::InvalidAssetName {
            name: name.to_owned(),
            reason,
        }
    }

    pub(crate) fn decode<E>(kind: AssetKind, path: &str, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Decode {
            kind,
            path: path.to_owned(),
            source: Box::new(source),
        }
    }
}
