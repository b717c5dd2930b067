// Copyright 2026 the Dotglyph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sprite sheet builders for unit tests.

use alloc::vec;
use alloc::vec::Vec;

use crate::{Atlas, GLYPH_COUNT, SpriteSheet, glyph_index};

pub(crate) const MARK: [u8; 3] = [0, 0, 0];
pub(crate) const RED: [u8; 3] = [255, 0, 0];
pub(crate) const BLUE: [u8; 3] = [0, 0, 255];
const PAPER: [u8; 3] = [255, 255, 255];

/// Font height of [`test_atlas`].
pub(crate) const TEST_HEIGHT: u32 = 10;

/// Builds an RGB sprite sheet with a marker for each glyph width.
pub(crate) struct SheetBuilder {
    widths: Vec<u32>,
    height: u32,
    leading: u32,
    markers: bool,
    ink: Vec<(u32, u32, [u8; 3])>,
}

impl SheetBuilder {
    /// `height` includes the marker row.
    pub(crate) fn new(widths: &[u32], height: u32) -> Self {
        Self {
            widths: widths.to_vec(),
            height,
            leading: 0,
            markers: true,
            ink: Vec::new(),
        }
    }

    /// Blank columns before the first marker.
    pub(crate) fn leading_columns(mut self, leading: u32) -> Self {
        self.leading = leading;
        self
    }

    pub(crate) fn without_markers(mut self) -> Self {
        self.markers = false;
        self
    }

    pub(crate) fn ink(mut self, x: u32, y: u32, color: [u8; 3]) -> Self {
        self.ink.push((x, y, color));
        self
    }

    pub(crate) fn build(&self) -> SpriteSheet {
        let width = self.leading + self.widths.iter().sum::<u32>();
        let mut pixels = vec![PAPER; (width * self.height) as usize];
        if self.markers {
            let mut x = self.leading;
            for w in &self.widths {
                pixels[x as usize] = MARK;
                x += w;
            }
        }
        for &(x, y, color) in &self.ink {
            pixels[(y * width + x) as usize] = color;
        }
        SpriteSheet::new(width, self.height, 3, pixels.concat()).unwrap()
    }

    pub(crate) fn build_atlas(&self) -> Atlas {
        Atlas::build(&self.build()).unwrap()
    }
}

/// Width of `ch` in [`test_atlas`]: between 3 and 6 pixels.
pub(crate) fn test_width(ch: char) -> u32 {
    3 + glyph_index(ch).unwrap() % 4
}

/// A 96 glyph atlas with uneven widths and a font height of [`TEST_HEIGHT`].
pub(crate) fn test_atlas() -> Atlas {
    let widths: Vec<u32> = (0..GLYPH_COUNT as u32).map(|i| 3 + i % 4).collect();
    SheetBuilder::new(&widths, TEST_HEIGHT + 1)
        .ink(0, 1, BLUE)
        .build_atlas()
}
