//! Asset payloads generated in code for tests.

use std::io::Cursor;

use image::{DynamicImage, ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};

/// A single-table sfnt: just enough for `read-fonts` to parse a `head`.
pub(crate) fn font(units_per_em: u16) -> Vec<u8> {
    let mut head = Vec::with_capacity(54);
    head.extend_from_slice(&0x0001_0000u32.to_be_bytes()); // version
    head.extend_from_slice(&0x0001_0000u32.to_be_bytes()); // fontRevision
    head.extend_from_slice(&0u32.to_be_bytes()); // checksumAdjustment
    head.extend_from_slice(&0x5F0F_3CF5u32.to_be_bytes()); // magicNumber
    head.extend_from_slice(&0u16.to_be_bytes()); // flags
    head.extend_from_slice(&units_per_em.to_be_bytes());
    head.extend_from_slice(&[0; 16]); // created, modified
    head.extend_from_slice(&[0; 8]); // xMin, yMin, xMax, yMax
    head.extend_from_slice(&[0; 4]); // macStyle, lowestRecPPEM
    head.extend_from_slice(&2i16.to_be_bytes()); // fontDirectionHint
    head.extend_from_slice(&[0; 4]); // indexToLocFormat, glyphDataFormat
    assert_eq!(head.len(), 54);

    let offset: u32 = 12 + 16;
    let mut font = Vec::with_capacity(offset as usize + head.len());
    font.extend_from_slice(&0x0001_0000u32.to_be_bytes()); // sfntVersion
    font.extend_from_slice(&1u16.to_be_bytes()); // numTables
    font.extend_from_slice(&16u16.to_be_bytes()); // searchRange
    font.extend_from_slice(&0u16.to_be_bytes()); // entrySelector
    font.extend_from_slice(&0u16.to_be_bytes()); // rangeShift
    font.extend_from_slice(b"head");
    font.extend_from_slice(&0u32.to_be_bytes()); // checksum
    font.extend_from_slice(&offset.to_be_bytes());
    font.extend_from_slice(&54u32.to_be_bytes());
    font.extend_from_slice(&head);
    font
}

fn encode(image: DynamicImage) -> Vec<u8> {
    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::WebP)
        .unwrap();
    bytes
}

/// Lossless WebP filled with one translucent colour.
pub(crate) fn webp_rgba(width: u32, height: u32, pixel: [u8; 4]) -> Vec<u8> {
    encode(DynamicImage::ImageRgba8(RgbaImage::from_pixel(
        width,
        height,
        Rgba(pixel),
    )))
}

/// Lossless WebP without an alpha channel.
pub(crate) fn webp_rgb(width: u32, height: u32, pixel: [u8; 3]) -> Vec<u8> {
    encode(DynamicImage::ImageRgb8(RgbImage::from_pixel(
        width,
        height,
        Rgb(pixel),
    )))
}

pub(crate) fn svg(width: u32, height: u32) -> String {
    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}"><rect width="{width}" height="{height}" fill="#ff0000"/></svg>"##
    )
}
