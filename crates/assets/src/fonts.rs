//! Font collections built from `Family_Weight[_Style].ttf` files.
//!
//! Faces keep their raw bytes and hand out a `read_fonts::FontRef` on demand,
//! so the collection can be given to any text system that accepts font data.

use std::{borrow::Cow, fmt, sync::Arc};

use bundle::{walk, AssetTree};
use read_fonts::{FontRef, ReadError, TableProvider};

use crate::{
    name::parse_font_name, AssetError, AssetKind, FontDescriptor, FontOptions, FontStyle,
    FontWeight,
};

/// A parsed font face together with the descriptor taken from its file name.
#[derive(Clone)]
pub struct FontFace {
    descriptor: FontDescriptor,
    data: Arc<[u8]>,
    units_per_em: u16,
    glyph_count: Option<u16>,
}

impl FontFace {
    /// Parses `data` as an OpenType font; a readable `head` table is required.
    pub fn from_data(
        descriptor: FontDescriptor,
        data: impl Into<Arc<[u8]>>,
    ) -> Result<Self, ReadError> {
        let data = data.into();
        let font = FontRef::new(&data)?;
        let units_per_em = font.head()?.units_per_em();
        let glyph_count = font.maxp().ok().map(|maxp| maxp.num_glyphs());

        Ok(Self {
            descriptor,
            data,
            units_per_em,
            glyph_count,
        })
    }

    /// Family, weight and style of the face.
    #[must_use]
    pub fn descriptor(&self) -> &FontDescriptor {
        &self.descriptor
    }

    /// Raw font file bytes.
    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Design units per em from the `head` table.
    #[must_use]
    pub fn units_per_em(&self) -> u16 {
        self.units_per_em
    }

    /// Glyph count from `maxp`, when the font has one.
    #[must_use]
    pub fn glyph_count(&self) -> Option<u16> {
        self.glyph_count
    }

    /// Re-parses the table directory for table access.
    #[must_use]
    pub fn font_ref(&self) -> Option<FontRef<'_>> {
        FontRef::new(&self.data).ok()
    }
}

impl fmt::Debug for FontFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FontFace")
            .field("descriptor", &self.descriptor)
            .field("bytes", &self.data.len())
            .field("units_per_em", &self.units_per_em)
            .field("glyph_count", &self.glyph_count)
            .finish()
    }
}

/// Ordered list of font faces. The first face is the implicit default.
#[derive(Debug, Clone, Default)]
pub struct FontCollection {
    faces: Vec<FontFace>,
}

impl FontCollection {
    /// Loads every `.ttf` in `tree`.
    ///
    /// Faces keep walk order, except that [`FontOptions::default_weight`]
    /// swaps the first face of that weight into position 0. The first
    /// malformed name or font aborts the load.
    pub fn load<T>(tree: &T, options: &FontOptions) -> Result<Self, AssetError>
    where
        T: AssetTree + ?Sized,
    {
        let mut faces = Vec::with_capacity(16);

        walk(tree, AssetKind::Font.extension(), |entry| {
            let descriptor = parse_font_name(&entry.name)?;
            let data = tree.load(&entry.path)?;
            let face = FontFace::from_data(descriptor, &*data)
                .map_err(|err| AssetError::decode(AssetKind::Font, &entry.path, err))?;
            log::debug!("loaded font {} as {}", entry.path, face.descriptor());
            faces.push(face);
            Ok::<_, AssetError>(())
        })?;

        let mut collection = Self { faces };
        if let Some(weight) = options.default_weight {
            if !collection.promote_weight(weight) {
                log::debug!("no font with default weight {weight}");
            }
        }
        Ok(collection)
    }

    /// Like [`FontCollection::load`], but panics on error. For hosts that
    /// treat a broken asset bundle as a packaging bug.
    #[must_use]
    pub fn load_or_panic<T>(tree: &T, options: &FontOptions) -> Self
    where
        T: AssetTree + ?Sized,
    {
        Self::load(tree, options).unwrap_or_else(|err| panic!("failed to load fonts: {err}"))
    }

    fn promote_weight(&mut self, weight: FontWeight) -> bool {
        let Some(index) = self
            .faces
            .iter()
            .position(|face| face.descriptor.weight() == weight)
        else {
            return false;
        };
        self.faces.swap(0, index);
        true
    }

    /// All faces in order.
    #[must_use]
    pub fn faces(&self) -> &[FontFace] {
        &self.faces
    }

    /// Number of faces.
    #[must_use]
    pub fn len(&self) -> usize {
        self.faces.len()
    }

    /// Returns `true` when no fonts were found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// The face consumers fall back to.
    #[must_use]
    pub fn default_face(&self) -> Option<&FontFace> {
        self.faces.first()
    }

    /// Distinct family names, in order of first appearance.
    #[must_use]
    pub fn families(&self) -> Vec<&str> {
        let mut families: Vec<&str> = Vec::new();
        for face in &self.faces {
            let family = face.descriptor.family();
            if !families.contains(&family) {
                families.push(family);
            }
        }
        families
    }

    /// Finds the closest face of `family` (ASCII case-insensitive).
    ///
    /// A matching style is preferred over a closer weight.
    #[must_use]
    pub fn find(&self, family: &str, weight: FontWeight, style: FontStyle) -> Option<&FontFace> {
        self.faces
            .iter()
            .filter(|face| face.descriptor.family().eq_ignore_ascii_case(family))
            .min_by_key(|face| {
                let descriptor = face.descriptor();
                (
                    descriptor.style() != style,
                    descriptor.weight().value().abs_diff(weight.value()),
                )
            })
    }

    /// Font bytes in collection order, as text systems usually take them.
    ///
    /// Each call copies every face's bytes into a fresh owned buffer; use
    /// [`FontCollection::shared_data`] to hand out the shared buffers instead.
    #[must_use]
    pub fn font_data(&self) -> Vec<Cow<'static, [u8]>> {
        self.faces
            .iter()
            .map(|face| Cow::Owned(face.data.to_vec()))
            .collect()
    }

    /// The faces' shared byte buffers in collection order, without copying.
    #[must_use]
    pub fn shared_data(&self) -> Vec<Arc<[u8]>> {
        self.faces.iter().map(|face| Arc::clone(&face.data)).collect()
    }

    /// Iterates the faces in order.
    pub fn iter(&self) -> std::slice::Iter<'_, FontFace> {
        self.faces.iter()
    }

    /// Consumes the collection, returning its faces.
    #[must_use]
    pub fn into_faces(self) -> Vec<FontFace> {
        self.faces
    }
}

impl<'a> IntoIterator for &'a FontCollection {
    type Item = &'a FontFace;
    type IntoIter = std::slice::Iter<'a, FontFace>;

    fn into_iter(self) -> Self::IntoIter {
        self.faces.iter()
    }
}

#[cfg(test)]
mod tests {
    use bundle::MemoryBundle;

    use super::*;
    use crate::{fixtures, NameError};

    fn bundle(names: &[&str]) -> MemoryBundle {
        names
            .iter()
            .map(|name| (*name, fixtures::font(1000)))
            .collect()
    }

    #[test]
    fn loads_faces_in_walk_order() {
        let bundle = bundle(&[
            "fonts/Inter-700-Italic.ttf",
            "fonts/Inter_400.ttf",
            "Lora_Bold.ttf",
        ]);
        let fonts = FontCollection::load(&bundle, &FontOptions::default()).unwrap();

        let descriptors: Vec<String> = fonts.iter().map(|f| f.descriptor().to_string()).collect();
        // Byte order: `Lora_Bold.ttf` sorts before `fonts`, `-` before `_`.
        assert_eq!(descriptors, ["Lora 700", "Inter 700 italic", "Inter 400"]);
        assert_eq!(fonts.families(), ["Lora", "Inter"]);
        assert_eq!(fonts.default_face().unwrap().units_per_em(), 1000);
        assert_eq!(fonts.default_face().unwrap().glyph_count(), None);
    }

    #[test]
    fn default_weight_moves_face_to_front() {
        let bundle = bundle(&["Inter_Bold.ttf", "Inter_Light.ttf", "Inter_Regular.ttf"]);
        let options = FontOptions {
            default_weight: Some(FontWeight::LIGHT),
        };
        let fonts = FontCollection::load(&bundle, &options).unwrap();
        let weights: Vec<u16> = fonts.iter().map(|f| f.descriptor().weight().value()).collect();
        assert_eq!(weights, [300, 700, 400]);

        let unchanged = FontCollection::load(
            &bundle,
            &FontOptions {
                default_weight: Some(FontWeight::BLACK),
            },
        )
        .unwrap();
        assert_eq!(unchanged.faces()[0].descriptor().weight(), FontWeight::BOLD);
    }

    #[test]
    fn malformed_name_fails_whole_collection() {
        let bundle = bundle(&["A_400.ttf", "B_garbage.ttf"]);
        let err = FontCollection::load(&bundle, &FontOptions::default()).unwrap_err();
        let AssetError::InvalidAssetName { name, reason } = err else {
            panic!("expected a naming error");
        };
        assert_eq!(name, "B_garbage.ttf");
        assert_eq!(reason, NameError::InvalidWeight("garbage".into()));
    }

    #[test]
    fn malformed_font_data_is_a_decode_error() {
        let bundle = bundle(&["A_400.ttf"]).with("B_400.ttf", "not a font");
        let err = FontCollection::load(&bundle, &FontOptions::default()).unwrap_err();
        assert!(matches!(
            err,
            AssetError::Decode { kind: AssetKind::Font, ref path, .. } if path == "B_400.ttf"
        ));
    }

    #[test]
    fn ignores_other_extensions() {
        let bundle = bundle(&["Inter_400.ttf"])
            .with("Inter_400.otf", "skip")
            .with("notes.txt", "skip")
            .with("logo.png", "skip");
        let fonts = FontCollection::load(&bundle, &FontOptions::default()).unwrap();
        assert_eq!(fonts.len(), 1);
    }

    #[test]
    fn find_prefers_style_then_nearest_weight() {
        let bundle = bundle(&["Inter_300.ttf", "Inter_700.ttf", "Inter_400_Italic.ttf"]);
        let fonts = FontCollection::load(&bundle, &FontOptions::default()).unwrap();

        let bold = fonts.find("inter", FontWeight::SEMI_BOLD, FontStyle::Regular).unwrap();
        assert_eq!(bold.descriptor().weight(), FontWeight::BOLD);

        let italic = fonts.find("Inter", FontWeight::BOLD, FontStyle::Italic).unwrap();
        assert_eq!(italic.descriptor().style(), FontStyle::Italic);

        assert!(fonts.find("Lora", FontWeight::NORMAL, FontStyle::Regular).is_none());
    }

    #[test]
    fn font_data_keeps_order() {
        let bundle = bundle(&["A_400.ttf", "B_400.ttf"]);
        let fonts = FontCollection::load(&bundle, &FontOptions::default()).unwrap();
        let data = fonts.font_data();
        assert_eq!(data.len(), 2);
        assert_eq!(&*data[0], fonts.faces()[0].data());
        assert!(fonts.faces()[1].font_ref().is_some());

        let shared = fonts.shared_data();
        assert_eq!(shared.len(), 2);
        assert!(Arc::ptr_eq(&shared[0], &fonts.faces()[0].data));
        assert_eq!(&*shared[1], &*data[1]);
    }

    #[test]
    #[should_panic(expected = "failed to load fonts")]
    fn load_or_panic_panics() {
        let bundle = bundle(&["Broken.ttf"]);
        let _ = FontCollection::load_or_panic(&bundle, &FontOptions::default());
    }
}
