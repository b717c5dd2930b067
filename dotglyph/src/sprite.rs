// Copyright 2026 the Dotglyph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Decoded sprite sheet pixels.

use alloc::vec::Vec;

use crate::error::Error;

/// An 8-bit interleaved image, rows top-down, that an [`Atlas`](crate::Atlas) is built from.
///
/// Row 0 carries one pure-black marker dot per glyph; the remaining rows hold the
/// glyph shapes. Only the first three channels (RGB) are inspected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpriteSheet {
    width: u32,
    height: u32,
    channels: u8,
    pixels: Vec<u8>,
}

impl SpriteSheet {
    /// Wraps decoded pixel data.
    ///
    /// Fails with [`ErrorKind::Configuration`](crate::ErrorKind::Configuration) unless
    /// the image has at least one column, a marker row plus one glyph row, three or more
    /// channels, and exactly `width * height * channels` bytes.
    pub fn new(width: u32, height: u32, channels: u8, pixels: Vec<u8>) -> Result<Self, Error> {
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(usize::from(channels)));
        if width == 0 || height < 2 || channels < 3 || expected != Some(pixels.len()) {
            return Err(Error::image_shape(width, height, channels, pixels.len()));
        }
        Ok(Self {
            width,
            height,
            channels,
            pixels,
        })
    }

    /// Decodes a PNG sprite sheet.
    ///
    /// Palette and low bit depth images are expanded and 16-bit images stripped to
    /// 8 bits per channel. Grayscale images are rejected since they cannot carry the
    /// red and blue ink colors.
    #[cfg(feature = "png")]
    pub fn from_png(bytes: &[u8]) -> Result<Self, Error> {
        let mut decoder = png::Decoder::new(bytes);
        decoder.set_transformations(png::Transformations::normalize_to_color8());
        let mut reader = decoder.read_info().map_err(Error::decode)?;
        let mut pixels = alloc::vec![0; reader.output_buffer_size()];
        let info = reader.next_frame(&mut pixels).map_err(Error::decode)?;
        pixels.truncate(info.buffer_size());
        let channels = match info.color_type {
            png::ColorType::Grayscale | png::ColorType::Indexed => 1,
            png::ColorType::GrayscaleAlpha => 2,
            png::ColorType::Rgb => 3,
            png::ColorType::Rgba => 4,
        };
        log::debug!(
            "decoded {}x{} sprite sheet ({:?})",
            info.width,
            info.height,
            info.color_type
        );
        Self::new(info.width, info.height, channels, pixels)
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels, including the marker row.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Bytes per pixel.
    pub fn channels(&self) -> u8 {
        self.channels
    }

    /// The raw interleaved pixel data.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Pixels of row `y`, each `channels` bytes long.
    pub(crate) fn row(&self, y: u32) -> impl Iterator<Item = &[u8]> {
        let stride = self.width as usize * usize::from(self.channels);
        let start = y as usize * stride;
        self.pixels[start..start + stride].chunks_exact(usize::from(self.channels))
    }
}

/// Whether a pixel is a pure-black marker dot.
pub(crate) fn is_marker(px: &[u8]) -> bool {
    px[..3] == [0, 0, 0]
}

/// Whether a pixel is glyph ink: pure red or pure blue with no green.
pub(crate) fn is_ink(px: &[u8]) -> bool {
    (px[0] == 255 || px[2] == 255) && px[1] == 0
}
