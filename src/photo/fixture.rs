/// Test images shared by the unit tests

use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use std::io::Cursor;

use crate::photo::loader::decode_image;
use crate::state::data::SelectedImage;

/// PNG bytes of a `width` x `height` solid image
pub fn encode_png(width: u32, height: u32) -> Vec<u8> {
    let pixels = RgbaImage::from_pixel(width, height, Rgba([200, 40, 40, 255]));
    let mut bytes = Vec::new();
    DynamicImage::ImageRgba8(pixels)
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .unwrap();
    bytes
}

/// A small 4x3 PNG
pub fn sample_png() -> Vec<u8> {
    encode_png(4, 3)
}

pub fn sample_image(file_name: &str) -> SelectedImage {
    decode_image(file_name.to_string(), sample_png()).unwrap()
}
