//! Exposes embedded bundles to gpui's asset pipeline.

use std::borrow::Cow;

use gpui::{AssetSource, Result, SharedString};

use crate::{
    tree::{is_under, normalize_path},
    EmbeddedBundle,
};

impl AssetSource for EmbeddedBundle {
    fn load(&self, path: &str) -> Result<Option<Cow<'static, [u8]>>> {
        if path.is_empty() {
            return Ok(None);
        }
        Ok(self.get(path).map(Cow::Borrowed))
    }

    fn list(&self, path: &str) -> Result<Vec<SharedString>> {
        let prefix = normalize_path(path);
        Ok(self
            .specs()
            .iter()
            .map(|spec| normalize_path(spec.logical_path))
            .filter(|logical| is_under(logical, prefix))
            .map(SharedString::from)
            .collect())
    }
}
