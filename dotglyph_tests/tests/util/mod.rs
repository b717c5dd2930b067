// Copyright 2026 the Dotglyph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Utility functions and types shared across tests.

mod asserts;
pub(crate) mod samples;

pub(crate) use asserts::{assert_lines_start_at_zero, assert_pen_advances};

use dotglyph::{Atlas, SpriteSheet, TextContext};
use dotglyph_dev::{FIXTURE_WIDTHS, RawSheet};

/// Wraps raw fixture pixels in a sprite sheet.
pub(crate) fn sheet_from_raw(raw: RawSheet) -> SpriteSheet {
    SpriteSheet::new(raw.width, raw.height, 3, raw.pixels).unwrap()
}

/// The atlas built from the procedurally generated fixture sheet.
pub(crate) fn fixture_atlas() -> Atlas {
    Atlas::build(&sheet_from_raw(dotglyph_dev::fixture_sheet())).unwrap()
}

/// A context over [`fixture_atlas`] with default settings.
pub(crate) fn fixture_context() -> TextContext {
    TextContext::new(fixture_atlas())
}

/// Fixture width of `ch`, which must be in the atlas alphabet.
pub(crate) fn width_of(ch: char) -> u32 {
    FIXTURE_WIDTHS[dotglyph::glyph_index(ch).unwrap() as usize]
}

/// Summed fixture width of a single line of text.
pub(crate) fn line_width(line: &str) -> u32 {
    line.chars().map(width_of).sum()
}
