//! Hand-off points into gpui's text system and image pipeline.

use std::sync::Arc;

use gpui::{App, RenderImage};
use image::Frame;
use smallvec::smallvec;

use crate::{FontCollection, RasterImage};

impl FontCollection {
    /// Adds every face to the application's text system, in order.
    pub fn register(&self, cx: &App) -> gpui::Result<()> {
        cx.text_system().add_fonts(self.font_data())
    }
}

impl RasterImage {
    /// Converts the pixels to the BGRA layout gpui renders from.
    #[must_use]
    pub fn to_render_image(&self) -> Arc<RenderImage> {
        let mut bgra = self.pixels().clone();
        for pixel in bgra.pixels_mut() {
            pixel.0.swap(0, 2);
        }
        Arc::new(RenderImage::new(smallvec![Frame::new(bgra)]))
    }
}
