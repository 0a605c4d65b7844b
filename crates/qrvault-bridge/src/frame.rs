use std::io::Cursor;

use image::{DynamicImage, GrayImage, ImageFormat};

use crate::error::BridgeError;

/// An 8-bit grayscale raster, row-major, one byte per pixel.
///
/// Camera frames and decoded still images both end up in this form before
/// detection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrayFrame {
    pub(crate) width: u32,
    pub(crate) height: u32,
    pub(crate) pixels: Vec<u8>,
}

impl GrayFrame {
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, BridgeError> {
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(BridgeError::FrameSize {
                width,
                height,
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// A uniformly filled frame.
    pub fn filled(width: u32, height: u32, luma: u8) -> Self {
        Self {
            width,
            height,
            pixels: vec![luma; width as usize * height as usize],
        }
    }

    pub fn from_image(image: &DynamicImage) -> Self {
        let luma = image.to_luma8();
        Self {
            width: luma.width(),
            height: luma.height(),
            pixels: luma.into_raw(),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn luma(&self, x: usize, y: usize) -> u8 {
        self.pixels[y * self.width as usize + x]
    }

    /// Encode the frame as PNG.
    pub fn to_png(&self) -> Result<Vec<u8>, BridgeError> {
        let expected = self.pixels.len();
        let image = GrayImage::from_raw(self.width, self.height, self.pixels.clone()).ok_or(
            BridgeError::FrameSize {
                width: self.width,
                height: self.height,
                expected,
                actual: expected,
            },
        )?;
        let mut out = Vec::new();
        DynamicImage::ImageLuma8(image).write_to(&mut Cursor::new(&mut out), ImageFormat::Png)?;
        Ok(out)
    }
}
