// Copyright 2026 the Dotglyph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! # Dotglyph Dev
//!
//! This crate provides fixtures and samples for developing Dotglyph.
//!
//! The fixture font is generated procedurally by [`fixture_sheet`]. The same image is
//! checked in as a PNG under `assets/sprites`, so decoding it must produce exactly the
//! atlas the raw pixels produce.

use std::path::{Path, PathBuf};

/// Number of glyphs in the fixture font, code points 32 through 127.
pub const FIXTURE_GLYPHS: usize = 96;

/// Font height of the fixture font. The sprite sheet is one row taller.
pub const FIXTURE_HEIGHT: u32 = 12;

/// Advance width of every fixture glyph, indexed by code point minus 32.
pub const FIXTURE_WIDTHS: [u32; FIXTURE_GLYPHS] = fixture_widths();

/// The PNG encoding of [`fixture_sheet`].
pub const FIXTURE_PNG: &[u8] = include_bytes!("../assets/sprites/fixture.png");

const MARK: [u8; 3] = [0, 0, 0];
const PAPER: [u8; 3] = [255, 255, 255];
const RED: [u8; 3] = [255, 0, 0];
const BLUE: [u8; 3] = [0, 0, 255];
// Not ink: green is set.
const YELLOW: [u8; 3] = [255, 255, 0];

#[expect(clippy::cast_possible_truncation, reason = "glyph codes are below 128")]
const fn fixture_widths() -> [u32; FIXTURE_GLYPHS] {
    let mut widths = [6; FIXTURE_GLYPHS];
    let mut i = 0;
    while i < FIXTURE_GLYPHS {
        widths[i] = match (i + 32) as u8 {
            b' ' => 4,
            b'!' | b'\'' | b',' | b'.' | b':' | b';' | b'i' | b'l' | b'|' => 3,
            b'@' | b'M' | b'W' | b'm' | b'w' => 8,
            _ => 6,
        };
        i += 1;
    }
    widths
}

/// The directory that contains the sprite sheet images.
pub fn sprite_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/sprites")
}

/// Uncompressed RGB pixels of a sprite sheet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawSheet {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels, including the marker row.
    pub height: u32,
    /// Row-major RGB pixels, top row first.
    pub pixels: Vec<u8>,
}

impl RawSheet {
    /// Byte offset of the pixel at `(x, y)`.
    pub fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 3
    }

    /// Overwrites the pixel at `(x, y)`.
    pub fn set(&mut self, x: u32, y: u32, rgb: [u8; 3]) {
        let offset = self.offset(x, y);
        self.pixels[offset..offset + 3].copy_from_slice(&rgb);
    }
}

/// Offset of each fixture glyph from the left edge of the sheet.
pub fn fixture_offsets() -> impl Iterator<Item = u32> {
    FIXTURE_WIDTHS.iter().scan(0, |x, &w| {
        let offset = *x;
        *x += w;
        Some(offset)
    })
}

/// The fixture sprite sheet.
///
/// Every glyph other than space is a vertical stem in its second column with a bar
/// along its top row, alternately red and blue. Every fifth glyph carries a yellow
/// pixel in its bottom-right corner that must not be taken for ink.
pub fn fixture_sheet() -> RawSheet {
    let width: u32 = FIXTURE_WIDTHS.iter().sum();
    let height = FIXTURE_HEIGHT + 1;
    let mut sheet = RawSheet {
        width,
        height,
        pixels: PAPER.repeat((width * height) as usize),
    };
    for (i, (offset, w)) in fixture_offsets().zip(FIXTURE_WIDTHS).enumerate() {
        sheet.set(offset, 0, MARK);
        if i == 0 {
            continue;
        }
        let ink = if i % 2 == 0 { RED } else { BLUE };
        for x in offset + 1..offset + w - 1 {
            sheet.set(x, 2, ink);
        }
        for y in 2..=10 {
            sheet.set(offset + 1, y, ink);
        }
        if i % 5 == 0 {
            sheet.set(offset + w - 1, FIXTURE_HEIGHT, YELLOW);
        }
    }
    sheet
}

/// A sample to be used for development.
#[derive(Debug)]
pub struct Sample {
    /// The name of the sample.
    pub name: &'static str,
    /// The text of the sample.
    pub text: &'static str,
}

/// A collection of text samples.
///
/// All samples are printable ASCII with newlines, so they lay out with the default
/// configuration.
#[derive(Debug)]
pub struct TextSamples {
    /// A GLSL fragment shader.
    pub fragment: Sample,
    /// A GLSL vertex shader.
    pub vertex: Sample,
    /// English prose.
    pub prose: Sample,
}

impl TextSamples {
    /// Creates a new collection of text samples.
    pub const fn new() -> Self {
        Self {
            fragment: Sample {
                name: "fragment",
                text: include_str!("../assets/text_samples/fragment.glsl"),
            },
            vertex: Sample {
                name: "vertex",
                text: include_str!("../assets/text_samples/vertex.glsl"),
            },
            prose: Sample {
                name: "prose",
                text: include_str!("../assets/text_samples/prose.txt"),
            },
        }
    }

    /// All samples.
    pub fn all(&self) -> [&Sample; 3] {
        [&self.fragment, &self.vertex, &self.prose]
    }
}

impl Default for TextSamples {
    fn default() -> Self {
        Self::new()
    }
}
