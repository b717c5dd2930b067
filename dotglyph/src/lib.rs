// Copyright 2026 the Dotglyph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dotglyph turns plain text into syntax-colored, instanced glyph draws over a bitmap font atlas.
//!
//! The crate covers the data side of the pipeline only:
//!
//! - [`Atlas`] parses a self-describing sprite sheet (a row of marker dots above the glyphs)
//!   into per-glyph metrics and a normalized single-channel bitmap.
//! - [`Tokenizer`] classifies every character of a text buffer into a [`ColorClass`].
//! - [`layout`] positions one [`GlyphInstance`] per character, honoring variable glyph
//!   widths and newlines.
//! - [`InstanceBuffer`] holds the last successful layout for the renderer to upload.
//!
//! [`TextContext`] bundles these into one owned value for the common case.
//! Window management, shaders and GPU uploads are left to the host application.
//!
//! ## Features
//!
//! - `std` (enabled by default): Enables `std` support in the logging facade.
//! - `png`: Decode sprite sheets from PNG bytes with [`SpriteSheet::from_png`].

// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod atlas;
mod buffer;
mod config;
mod context;
mod error;
mod glyph;
mod impl_bytemuck;
mod layout;
mod palette;
mod sprite;

pub mod lex;

#[cfg(test)]
mod testing;

pub use atlas::{Atlas, BACKGROUND, INK};
pub use buffer::InstanceBuffer;
pub use config::{Config, DEFAULT_CAPACITY, Limit, Limits, UnknownGlyph};
pub use context::{Highlight, TextContext};
pub use error::{Error, ErrorKind};
pub use glyph::{FIRST_CODE, GLYPH_COUNT, GLYPH_QUAD, GlyphInstance, GlyphMetrics, glyph_index};
pub use layout::{TextDimensions, layout, layout_into, string_dimensions};
pub use lex::{ColorClass, Lexicon, Token, TokenClass, Tokenizer, tokenize};
pub use palette::{PALETTE_LEN, Palette};
pub use sprite::SpriteSheet;
