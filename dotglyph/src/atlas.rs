// Copyright 2026 the Dotglyph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Glyph atlas built from a self-describing sprite sheet.
//!
//! The sprite sheet packs every glyph side by side. Its first row is not part of
//! any glyph: a single pure-black dot marks the first column of each glyph, so the
//! distance between two dots is the width of the glyph that starts at the first one.
//! The last glyph extends to the right edge of the image.

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use crate::error::Error;
use crate::glyph::{GLYPH_COUNT, GlyphMetrics, glyph_index};
use crate::sprite::{SpriteSheet, is_ink, is_marker};

/// Bitmap value of an ink pixel.
pub const INK: u8 = 0;

/// Bitmap value of a background pixel, including row padding.
pub const BACKGROUND: u8 = 255;

/// Glyph metrics plus a single-channel bitmap ready for upload as an `R8` texture.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Atlas {
    metrics: [GlyphMetrics; GLYPH_COUNT],
    /// Rows bottom-up, `padded_width` bytes each.
    bitmap: Vec<u8>,
    width: u32,
    padded_width: u32,
    height: u32,
}

impl Atlas {
    /// Parses a sprite sheet into an atlas.
    ///
    /// Fails with [`ErrorKind::Configuration`](crate::ErrorKind::Configuration) if the
    /// marker row does not contain exactly [`GLYPH_COUNT`] dots.
    pub fn build(sheet: &SpriteSheet) -> Result<Self, Error> {
        let markers = sheet.row(0).filter(|px| is_marker(px)).count();
        if markers != GLYPH_COUNT {
            return Err(Error::marker_count(GLYPH_COUNT, markers));
        }

        let metrics = measure_glyphs(sheet);
        let width = sheet.width();
        let padded_width = width.next_multiple_of(4);
        let height = sheet.height() - 1;
        let bitmap = normalize_bitmap(sheet, padded_width);

        log::debug!(
            "built glyph atlas: {width}x{height} ({padded_width} padded) from {} channel sprite sheet",
            sheet.channels()
        );

        Ok(Self {
            metrics,
            bitmap,
            width,
            padded_width,
            height,
        })
    }

    /// Decodes a PNG sprite sheet and builds an atlas from it.
    #[cfg(feature = "png")]
    pub fn from_png(bytes: &[u8]) -> Result<Self, Error> {
        Self::build(&SpriteSheet::from_png(bytes)?)
    }

    /// Metrics of every glyph, indexed by [`glyph_index`].
    pub fn metrics(&self) -> &[GlyphMetrics; GLYPH_COUNT] {
        &self.metrics
    }

    /// Metrics of the glyph for `ch`, if the atlas has one.
    pub fn glyph(&self, ch: char) -> Option<GlyphMetrics> {
        glyph_index(ch).map(|index| self.metrics[index as usize])
    }

    /// Width of the sprite sheet in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Row stride of [`Self::bitmap`]: the width rounded up to a multiple of four.
    pub fn padded_width(&self) -> u32 {
        self.padded_width
    }

    /// Font height in pixels: the sprite sheet height minus the marker row.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The glyph bitmap, bottom row first, one byte per pixel.
    ///
    /// Ink pixels are [`INK`], everything else [`BACKGROUND`].
    pub fn bitmap(&self) -> &[u8] {
        &self.bitmap
    }

    /// Per-glyph lookup data for the renderer's metadata texture.
    ///
    /// Each texel is `(offset, 0, width, 1)` with the horizontal components normalized
    /// by [`Self::padded_width`].
    pub fn metadata_texels(&self) -> Vec<[f32; 4]> {
        let stride = self.padded_width as f32;
        self.metrics
            .iter()
            .map(|m| [m.offset as f32 / stride, 0.0, m.width as f32 / stride, 1.0])
            .collect()
    }

    /// Draws a single line of text as ASCII art, top row first, for debugging.
    ///
    /// Ink pixels become `'O'` and background pixels a space.
    pub fn render_ascii(&self, text: &str) -> Result<String, Error> {
        let glyphs = text
            .chars()
            .enumerate()
            .map(|(index, ch)| self.glyph(ch).ok_or_else(|| Error::unsupported(index, ch)))
            .collect::<Result<Vec<_>, _>>()?;

        let stride = self.padded_width as usize;
        let mut out = String::new();
        for row in self.bitmap.chunks_exact(stride).rev() {
            for glyph in &glyphs {
                let start = glyph.offset as usize;
                for &texel in &row[start..start + glyph.width as usize] {
                    out.push(if texel == INK { 'O' } else { ' ' });
                }
            }
            out.push('\n');
        }
        Ok(out)
    }
}

/// Derives offsets and widths from the marker row.
///
/// The caller has already checked that there are exactly [`GLYPH_COUNT`] markers.
fn measure_glyphs(sheet: &SpriteSheet) -> [GlyphMetrics; GLYPH_COUNT] {
    let mut metrics = [GlyphMetrics::default(); GLYPH_COUNT];
    let mut current: Option<usize> = None;
    for (x, px) in (0..).zip(sheet.row(0)) {
        if !is_marker(px) {
            continue;
        }
        // A marker closes the previous glyph, if there is one.
        if let Some(prev) = current {
            metrics[prev].width = x - metrics[prev].offset;
        }
        let next = current.map_or(0, |prev| prev + 1);
        metrics[next].offset = x;
        current = Some(next);
    }
    if let Some(last) = current {
        metrics[last].width = sheet.width() - metrics[last].offset;
    }
    metrics
}

/// Strips the marker row, flips to bottom-up and pads rows to `padded_width`.
fn normalize_bitmap(sheet: &SpriteSheet, padded_width: u32) -> Vec<u8> {
    let stride = padded_width as usize;
    let rows = (sheet.height() - 1) as usize;
    let mut bitmap = vec![BACKGROUND; stride * rows];
    // Destination rows are bottom-up, so the last one receives source row 1.
    for (y, dst) in (1..).zip(bitmap.chunks_exact_mut(stride).rev()) {
        for (texel, px) in dst.iter_mut().zip(sheet.row(y)) {
            if is_ink(px) {
                *texel = INK;
            }
        }
    }
    bitmap
}
