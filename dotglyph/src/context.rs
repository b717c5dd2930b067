// Copyright 2026 the Dotglyph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use crate::atlas::Atlas;
use crate::buffer::InstanceBuffer;
use crate::config::Config;
use crate::error::Error;
use crate::glyph::GlyphInstance;
use crate::layout::{TextDimensions, layout, string_dimensions};
use crate::lex::{ColorClass, Lexicon, Tokenizer};
use crate::palette::Palette;

/// Whether [`TextContext::prepare`] colors text by syntax.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Highlight {
    /// Tokenize and color every character by its syntax class.
    #[default]
    Syntax,
    /// Draw everything in the foreground color.
    Plain,
}

/// Everything needed to turn text into glyph instances: the atlas, a tokenizer,
/// configuration and colors.
///
/// A context is built once and reused for every text block. Each block that is drawn
/// independently should have its own [`InstanceBuffer`].
#[derive(Clone, Debug)]
pub struct TextContext {
    atlas: Atlas,
    tokenizer: Tokenizer,
    config: Config,
    palette: Palette,
}

impl TextContext {
    /// Creates a context with the GLSL lexicon, default configuration and the
    /// default palette.
    pub fn new(atlas: Atlas) -> Self {
        Self {
            atlas,
            tokenizer: Tokenizer::default(),
            config: Config::default(),
            palette: Palette::default(),
        }
    }

    /// Decodes a PNG sprite sheet and creates a context for it.
    #[cfg(feature = "png")]
    pub fn from_png(bytes: &[u8]) -> Result<Self, Error> {
        Ok(Self::new(Atlas::from_png(bytes)?))
    }

    /// Replaces the configuration, including the tokenizer limits.
    pub fn with_config(mut self, config: Config) -> Self {
        self.tokenizer.set_limits(config.limits);
        self.config = config;
        self
    }

    /// Replaces the lexicon used for highlighting.
    pub fn with_lexicon(mut self, lexicon: Lexicon) -> Self {
        self.tokenizer.set_lexicon(lexicon);
        self
    }

    /// Replaces the palette.
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// The glyph atlas.
    pub fn atlas(&self) -> &Atlas {
        &self.atlas
    }

    /// The layout and tokenizer configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The colors renderers should use.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// The lexicon used for highlighting.
    pub fn lexicon(&self) -> &Lexicon {
        self.tokenizer.lexicon()
    }

    /// Classifies every character of `text`.
    pub fn tokenize(&mut self, text: &str) -> Result<Vec<ColorClass>, Error> {
        self.tokenizer.tokenize(text)
    }

    /// Lays out `text` against this context's atlas.
    pub fn layout(
        &self,
        text: &str,
        colors: Option<&[ColorClass]>,
    ) -> Result<Vec<GlyphInstance>, Error> {
        layout(text, colors, &self.atlas, &self.config)
    }

    /// Measures `text` against this context's atlas.
    pub fn string_dimensions(&self, text: &str) -> Result<TextDimensions, Error> {
        string_dimensions(text, &self.atlas, &self.config)
    }

    /// Tokenizes `text` if requested and lays it out into `buffer`.
    ///
    /// On failure `buffer` keeps its previous contents.
    pub fn prepare(
        &mut self,
        text: &str,
        highlight: Highlight,
        buffer: &mut InstanceBuffer,
    ) -> Result<usize, Error> {
        let colors = match highlight {
            Highlight::Syntax => Some(self.tokenizer.tokenize(text)?),
            Highlight::Plain => None,
        };
        buffer.update(text, colors.as_deref(), &self.atlas, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::{Highlight, TextContext};
    use crate::testing::test_atlas;
    use crate::{
        ColorClass, Config, ErrorKind, InstanceBuffer, Lexicon, Limits, Palette, UnknownGlyph,
    };

    #[test]
    fn prepare_highlights_by_default() {
        let mut context = TextContext::new(test_atlas());
        let mut buffer = InstanceBuffer::new();
        let count = context
            .prepare("vec2 uv; // c", Highlight::default(), &mut buffer)
            .unwrap();
        assert_eq!(count, 13);
        let classes: alloc::vec::Vec<u32> =
            buffer.instances().iter().map(|i| i.color_class).collect();
        assert_eq!(classes[0], ColorClass::Type.index());
        assert_eq!(classes[5], ColorClass::Foreground.index());
        assert_eq!(classes[12], ColorClass::Comment.index());

        context.prepare("vec2", Highlight::Plain, &mut buffer).unwrap();
        assert!(
            buffer
                .instances()
                .iter()
                .all(|i| i.color_class == ColorClass::Foreground.index())
        );
    }

    #[test]
    fn config_limits_reach_the_tokenizer() {
        let limits = Limits {
            max_tokens: 1,
            ..Limits::default()
        };
        let mut context = TextContext::new(test_atlas()).with_config(Config::default().with_limits(limits));
        let mut buffer = InstanceBuffer::new();
        context.prepare("a", Highlight::Syntax, &mut buffer).unwrap();

        let err = context.prepare("a b", Highlight::Syntax, &mut buffer).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::CapacityExceeded);
        assert_eq!(buffer.len(), 1);
        assert_eq!(buffer.generation(), 1);

        context.prepare("a b", Highlight::Plain, &mut buffer).unwrap();
        assert_eq!(buffer.len(), 3);
    }

    #[test]
    fn lexicon_and_palette_are_replaceable() {
        let mut context = TextContext::new(test_atlas())
            .with_lexicon(Lexicon::new(["let"], [""; 0]))
            .with_palette(Palette::default().with_clear([0.0; 3]));
        assert_eq!(context.tokenize("let in").unwrap()[..3], [ColorClass::Keyword; 3]);
        assert_eq!(context.tokenize("let in").unwrap()[4], ColorClass::Foreground);
        assert_eq!(context.palette().clear(), [0.0; 3]);
        assert!(context.lexicon().is_keyword("let"));
    }

    #[test]
    fn measures_and_lays_out_with_its_config() {
        let context = TextContext::new(test_atlas())
            .with_config(Config::default().with_unknown_glyph(UnknownGlyph::Substitute(' ')));
        let dims = context.string_dimensions("a\tb\n").unwrap();
        assert_eq!(dims.height, context.atlas().height());
        assert_eq!(context.layout("a\tb", None).unwrap().len(), 3);
        assert_eq!(context.config().unknown_glyph, UnknownGlyph::Substitute(' '));
    }
}
