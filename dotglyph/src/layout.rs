// Copyright 2026 the Dotglyph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Positioning of glyph instances.
//!
//! Layout is a single pass with a pen starting at the origin. Every character
//! advances the pen by its glyph width; a newline returns it to `x = 0` and moves it
//! down by the font height, which in instance coordinates means towards negative `y`.
//! There is no wrapping, kerning or shaping.

use alloc::vec::Vec;

use crate::atlas::Atlas;
use crate::config::{Config, Limit, UnknownGlyph};
use crate::error::Error;
use crate::glyph::{GlyphInstance, GlyphMetrics, glyph_index};
use crate::lex::ColorClass;

/// Extent of a block of text, in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TextDimensions {
    /// Width of the widest line.
    pub width: u32,
    /// Number of lines times the font height.
    pub height: u32,
}

/// Lays out `text` and returns one instance per non-newline character.
///
/// `colors`, when present, must have exactly one entry per `char` of `text`. Without
/// it every instance is [`ColorClass::Foreground`].
pub fn layout(
    text: &str,
    colors: Option<&[ColorClass]>,
    atlas: &Atlas,
    config: &Config,
) -> Result<Vec<GlyphInstance>, Error> {
    let mut out = Vec::new();
    layout_into(text, colors, atlas, config, &mut out)?;
    Ok(out)
}

/// Like [`layout`], but writes into `out`, reusing its allocation.
///
/// `out` is cleared first. On success the number of instances is returned; on
/// failure `out` is left empty.
pub fn layout_into(
    text: &str,
    colors: Option<&[ColorClass]>,
    atlas: &Atlas,
    config: &Config,
    out: &mut Vec<GlyphInstance>,
) -> Result<usize, Error> {
    out.clear();
    let result = emit_instances(text, colors, atlas, config, out);
    if result.is_err() {
        out.clear();
    }
    result.map(|()| out.len())
}

fn emit_instances(
    text: &str,
    colors: Option<&[ColorClass]>,
    atlas: &Atlas,
    config: &Config,
    out: &mut Vec<GlyphInstance>,
) -> Result<(), Error> {
    if let Some(colors) = colors {
        let len = text.chars().count();
        if colors.len() != len {
            return Err(Error::color_length(len, colors.len()));
        }
    }

    let line_height = atlas.height() as f32;
    let (mut x, mut y) = (0.0_f32, 0.0_f32);
    for (index, ch) in text.chars().enumerate() {
        if ch == '\n' {
            x = 0.0;
            y -= line_height;
            continue;
        }
        let (glyph_index, metrics) = resolve_glyph(atlas, config.unknown_glyph, index, ch)?;
        config.limits.check(Limit::Instances, out.len() + 1)?;
        let color = colors.map_or(ColorClass::Foreground, |colors| colors[index]);
        out.push(GlyphInstance {
            x,
            y,
            glyph_index,
            color_class: color.index(),
        });
        x += metrics.width as f32;
    }
    Ok(())
}

/// Measures `text` without producing instances.
///
/// A trailing newline does not start another line, so `"a\n"` is one line tall and
/// empty text measures zero by zero. Unsupported characters are handled as in
/// [`layout`].
pub fn string_dimensions(text: &str, atlas: &Atlas, config: &Config) -> Result<TextDimensions, Error> {
    let mut index = 0;
    let mut lines = 0_u32;
    let mut width = 0_u32;
    for line in text.split_terminator('\n') {
        let mut line_width = 0_u32;
        for ch in line.chars() {
            let (_, metrics) = resolve_glyph(atlas, config.unknown_glyph, index, ch)?;
            line_width = line_width.saturating_add(metrics.width);
            index += 1;
        }
        // The newline itself.
        index += 1;
        lines += 1;
        width = width.max(line_width);
    }
    Ok(TextDimensions {
        width,
        height: lines.saturating_mul(atlas.height()),
    })
}

/// Finds the glyph drawn for `ch`, the character at `index`.
fn resolve_glyph(
    atlas: &Atlas,
    policy: UnknownGlyph,
    index: usize,
    ch: char,
) -> Result<(u32, GlyphMetrics), Error> {
    let drawn = match (glyph_index(ch), policy) {
        (Some(_), _) | (None, UnknownGlyph::Reject) => ch,
        (None, UnknownGlyph::Substitute(substitute)) => substitute,
    };
    glyph_index(drawn)
        .map(|glyph| (glyph, atlas.metrics()[glyph as usize]))
        .ok_or_else(|| Error::unsupported(index, ch))
}
