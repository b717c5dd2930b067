// Copyright 2026 the Dotglyph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Glyph metrics and the per-instance draw record handed to the renderer.

/// Code point of the first glyph in the atlas (`' '`).
pub const FIRST_CODE: u32 = 32;

/// Number of glyphs in an atlas: code points 32 through 127 inclusive.
pub const GLYPH_COUNT: usize = 96;

/// Corners of the unit quad every instance is stretched over, as two triangles.
///
/// The vertex shader scales it by the glyph's width and the font height.
pub const GLYPH_QUAD: [[f32; 2]; 6] = [
    [0.0, 0.0],
    [1.0, 0.0],
    [0.0, 1.0],
    [0.0, 1.0],
    [1.0, 0.0],
    [1.0, 1.0],
];

/// Returns the atlas index of `ch`, or `None` if the atlas has no glyph for it.
pub fn glyph_index(ch: char) -> Option<u32> {
    u32::from(ch)
        .checked_sub(FIRST_CODE)
        .filter(|&index| (index as usize) < GLYPH_COUNT)
}

/// Location and size of one glyph inside the atlas bitmap.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GlyphMetrics {
    /// Advance and bitmap width, in pixels.
    pub width: u32,
    /// Horizontal offset of the glyph's first column in the atlas, in pixels.
    pub offset: u32,
}

/// One positioned, glyph-indexed, colored draw record.
///
/// The layout is fixed so a slice of instances can be uploaded as-is into an
/// instanced vertex buffer.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GlyphInstance {
    /// Pen position of the glyph's left edge, in pixels.
    pub x: f32,
    /// Pen position of the line, in pixels. Lines grow towards negative y.
    pub y: f32,
    /// Index into the atlas metrics (code point minus [`FIRST_CODE`]).
    pub glyph_index: u32,
    /// Palette slot, see [`ColorClass`](crate::ColorClass).
    pub color_class: u32,
}
