//! File name grammar for bundled assets.
//!
//! Fonts encode their descriptor as `Family_Weight[_Style].ttf`, where `-` is
//! accepted in place of `_`. Images and vectors only carry a logical name,
//! which is the file name minus its extension.

use std::{collections::HashMap, fmt};

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::{AssetError, NameError};

/// Font weight on the 1–1000 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct FontWeight(u16);

impl FontWeight {
    /// Thin / Hairline (100).
    pub const THIN: Self = Self(100);
    /// Extra light / Ultra light (200).
    pub const EXTRA_LIGHT: Self = Self(200);
    /// Light (300).
    pub const LIGHT: Self = Self(300);
    /// Normal / Regular (400).
    pub const NORMAL: Self = Self(400);
    /// Medium (500).
    pub const MEDIUM: Self = Self(500);
    /// Semi bold / Demi bold (600).
    pub const SEMI_BOLD: Self = Self(600);
    /// Bold (700).
    pub const BOLD: Self = Self(700);
    /// Extra bold / Ultra bold (800).
    pub const EXTRA_BOLD: Self = Self(800);
    /// Black / Heavy (900).
    pub const BLACK: Self = Self(900);
    /// Extra black / Ultra black (950).
    pub const EXTRA_BLACK: Self = Self(950);

    /// Smallest accepted numeric weight.
    pub const MIN: u16 = 1;
    /// Largest accepted numeric weight.
    pub const MAX: u16 = 1000;

    /// Creates a weight, returning `None` outside 1..=1000.
    #[must_use]
    pub const fn new(value: u16) -> Option<Self> {
        if value >= Self::MIN && value <= Self::MAX {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Numeric value of the weight.
    #[must_use]
    pub const fn value(self) -> u16 {
        self.0
    }

    /// Looks up a tier name such as `Bold` or `UltraLight`, ignoring case.
    #[must_use]
    pub fn named(token: &str) -> Option<Self> {
        WEIGHT_NAMES.get(token.to_ascii_lowercase().as_str()).copied()
    }

    /// Resolves a weight token: a tier name first, then a base-10 integer.
    pub fn from_token(token: &str) -> Result<Self, NameError> {
        if let Some(weight) = Self::named(token) {
            return Ok(weight);
        }
        let value: u32 = token
            .parse()
            .map_err(|_| NameError::InvalidWeight(token.to_owned()))?;
        u16::try_from(value)
            .ok()
            .and_then(Self::new)
            .ok_or(NameError::WeightOutOfRange(value))
    }
}

impl Default for FontWeight {
    fn default() -> Self {
        Self::NORMAL
    }
}

impl TryFrom<u16> for FontWeight {
    type Error = NameError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(NameError::WeightOutOfRange(u32::from(value)))
    }
}

impl From<FontWeight> for u16 {
    fn from(weight: FontWeight) -> Self {
        weight.0
    }
}

impl fmt::Display for FontWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

const WEIGHT_TABLE: &[(&str, FontWeight)] = &[
    ("thin", FontWeight::THIN),
    ("hairline", FontWeight::THIN),
    ("extralight", FontWeight::EXTRA_LIGHT),
    ("ultralight", FontWeight::EXTRA_LIGHT),
    ("light", FontWeight::LIGHT),
    ("normal", FontWeight::NORMAL),
    ("regular", FontWeight::NORMAL),
    ("medium", FontWeight::MEDIUM),
    ("semibold", FontWeight::SEMI_BOLD),
    ("demibold", FontWeight::SEMI_BOLD),
    ("bold", FontWeight::BOLD),
    ("extrabold", FontWeight::EXTRA_BOLD),
    ("ultrabold", FontWeight::EXTRA_BOLD),
    ("black", FontWeight::BLACK),
    ("heavy", FontWeight::BLACK),
    ("extrablack", FontWeight::EXTRA_BLACK),
    ("ultrablack", FontWeight::EXTRA_BLACK),
];

static WEIGHT_NAMES: Lazy<HashMap<&'static str, FontWeight>> =
    Lazy::new(|| WEIGHT_TABLE.iter().copied().collect());

/// Upright or italic face.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FontStyle {
    /// Upright.
    #[default]
    Regular,
    /// Italic.
    Italic,
}

impl FontStyle {
    /// `italic` in any case maps to [`FontStyle::Italic`]; anything else is
    /// regular.
    #[must_use]
    pub fn from_token(token: &str) -> Self {
        if token.eq_ignore_ascii_case("italic") {
            FontStyle::Italic
        } else {
            FontStyle::Regular
        }
    }
}

/// Family, weight and style parsed from a font file name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FontDescriptor {
    family: String,
    weight: FontWeight,
    style: FontStyle,
}

impl FontDescriptor {
    /// Creates a descriptor; the family must not be empty.
    pub fn new(
        family: impl Into<String>,
        weight: FontWeight,
        style: FontStyle,
    ) -> Result<Self, NameError> {
        let family = family.into();
        if family.is_empty() {
            return Err(NameError::EmptyFamily);
        }
        Ok(Self {
            family,
            weight,
            style,
        })
    }

    /// Typeface family, e.g. `Montserrat`.
    #[must_use]
    pub fn family(&self) -> &str {
        &self.family
    }

    /// Weight of the face.
    #[must_use]
    pub fn weight(&self) -> FontWeight {
        self.weight
    }

    /// Style of the face.
    #[must_use]
    pub fn style(&self) -> FontStyle {
        self.style
    }
}

impl fmt::Display for FontDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.family, self.weight)?;
        if self.style == FontStyle::Italic {
            f.write_str(" italic")?;
        }
        Ok(())
    }
}

/// Strips the final extension from a file name.
///
/// `logo.webp` becomes `logo`, `icon.min.svg` becomes `icon.min`. Names
/// without an extension are returned unchanged.
#[must_use]
pub fn logical_name(file_name: &str) -> &str {
    match file_name.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => file_name,
    }
}

/// Parses `Family_Weight[_Style].ext` into a [`FontDescriptor`].
pub fn parse_font_name(file_name: &str) -> Result<FontDescriptor, AssetError> {
    let fail = |reason| AssetError::invalid_name(file_name, reason);

    let stem = logical_name(file_name).replace('-', "_");
    let mut segments = stem.split('_');

    let family = segments.next().unwrap_or_default();
    if family.is_empty() {
        return Err(fail(NameError::EmptyFamily));
    }
    let weight = segments.next().ok_or(NameError::MissingWeight).map_err(fail)?;
    let weight = FontWeight::from_token(weight).map_err(fail)?;
    let style = segments.next().map(FontStyle::from_token).unwrap_or_default();

    FontDescriptor::new(family, weight, style).map_err(fail)
}
