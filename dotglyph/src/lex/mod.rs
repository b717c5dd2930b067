// Copyright 2026 the Dotglyph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lexical classification of source text into syntax color classes.
//!
//! Tokenizing happens in two passes over the whole buffer. The [`Scanner`] splits
//! the text into comments, one-character operators and words; words are then
//! resolved against the following character and the [`Lexicon`]. The resulting
//! tokens are projected onto one [`ColorClass`] per character, which is what the
//! layout engine consumes. Nothing is carried over between calls.

mod lexicon;
mod scanner;

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use core::ops::Range;

use crate::config::{Limit, Limits};
use crate::error::Error;

pub use lexicon::Lexicon;
pub use scanner::{
    DELIMITERS, OPERATORS, ScanState, Scanner, Step, is_delimiter, is_operator,
};

/// Syntax class of a token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenClass {
    /// A single operator character.
    Operator,
    /// A floating-point or integer literal.
    Numeric,
    /// A word immediately followed by `(`.
    Function,
    /// A word from the lexicon's keyword table.
    Keyword,
    /// A line or block comment.
    Comment,
    /// A word from the lexicon's type table.
    Type,
    /// Any other word.
    Other,
    /// A word that has not been resolved yet.
    Unset,
}

impl TokenClass {
    /// The color class characters covered by a token of this class receive.
    pub fn color_class(self) -> ColorClass {
        match self {
            Self::Operator => ColorClass::Operator,
            Self::Numeric => ColorClass::Numeric,
            Self::Function => ColorClass::Function,
            Self::Keyword => ColorClass::Keyword,
            Self::Comment => ColorClass::Comment,
            Self::Type => ColorClass::Type,
            Self::Other | Self::Unset => ColorClass::Foreground,
        }
    }
}

/// A classified, half-open range of character indices.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token {
    /// Index of the first character.
    pub start: usize,
    /// Index one past the last character.
    pub stop: usize,
    /// Syntax class.
    pub class: TokenClass,
}

impl Token {
    /// The covered character indices.
    pub fn range(&self) -> Range<usize> {
        self.start..self.stop
    }
}

/// Per-character color, used as an index into the [`Palette`](crate::Palette).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ColorClass {
    /// Plain text and delimiters.
    #[default]
    Foreground = 0,
    /// Operators.
    Operator = 1,
    /// Numeric literals.
    Numeric = 2,
    /// Function names.
    Function = 3,
    /// Keywords.
    Keyword = 4,
    /// Comments.
    Comment = 5,
    /// Type names.
    Type = 6,
}

impl ColorClass {
    /// All color classes, in palette order.
    pub const ALL: [Self; 7] = [
        Self::Foreground,
        Self::Operator,
        Self::Numeric,
        Self::Function,
        Self::Keyword,
        Self::Comment,
        Self::Type,
    ];

    /// Palette slot of this class.
    pub fn index(self) -> u32 {
        u32::from(self as u8)
    }
}

/// Reusable tokenizer.
///
/// Scratch storage is kept between calls to avoid reallocating, but every call
/// rescans its whole input.
#[derive(Clone, Debug, Default)]
pub struct Tokenizer {
    lexicon: Lexicon,
    limits: Limits,
    chars: Vec<char>,
    tokens: Vec<Token>,
    word: String,
}

impl Tokenizer {
    /// Creates a tokenizer with the given lexicon and limits.
    pub fn new(lexicon: Lexicon, limits: Limits) -> Self {
        Self {
            lexicon,
            limits,
            ..Self::default()
        }
    }

    /// The lexicon words are resolved against.
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Replaces the lexicon.
    pub fn set_lexicon(&mut self, lexicon: Lexicon) {
        self.lexicon = lexicon;
    }

    /// The limits enforced on each call.
    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    /// Replaces the limits.
    pub fn set_limits(&mut self, limits: Limits) {
        self.limits = limits;
    }

    /// Classifies every character of `text`.
    ///
    /// The returned array has one entry per `char` of `text`. Characters not covered by
    /// any token (delimiters) are [`ColorClass::Foreground`].
    pub fn tokenize(&mut self, text: &str) -> Result<Vec<ColorClass>, Error> {
        self.scan(text)?;
        Ok(project(self.chars.len(), &self.tokens))
    }

    /// Splits `text` into resolved tokens, in text order.
    ///
    /// Token ranges are character indices, not byte offsets.
    pub fn scan(&mut self, text: &str) -> Result<&[Token], Error> {
        self.chars.clear();
        self.tokens.clear();
        self.chars.extend(text.chars());

        for line in self.chars.split(|&ch| ch == '\n') {
            self.limits.check(Limit::LineLength, line.len())?;
        }

        for token in Scanner::new(&self.chars) {
            if let Err(err) = self.limits.check(Limit::Tokens, self.tokens.len() + 1) {
                self.tokens.clear();
                return Err(err);
            }
            self.tokens.push(token);
        }

        for token in &mut self.tokens {
            if token.class == TokenClass::Unset {
                token.class = resolve(&self.chars, token.range(), &self.lexicon, &mut self.word);
            }
        }
        Ok(&self.tokens)
    }
}

/// Classifies `text` with the GLSL lexicon and default limits.
pub fn tokenize(text: &str) -> Result<Vec<ColorClass>, Error> {
    Tokenizer::default().tokenize(text)
}

/// Resolves the class of the word at `range`.
fn resolve(chars: &[char], range: Range<usize>, lexicon: &Lexicon, word: &mut String) -> TokenClass {
    if chars.get(range.end) == Some(&'(') {
        return TokenClass::Function;
    }
    word.clear();
    word.extend(&chars[range]);
    if is_numeric(word) {
        TokenClass::Numeric
    } else if lexicon.is_keyword(word) {
        TokenClass::Keyword
    } else if lexicon.is_type(word) {
        TokenClass::Type
    } else {
        TokenClass::Other
    }
}

/// Whether `word` is entirely a floating-point literal such as `1`, `1.5`, `.5` or `2e3`.
///
/// Words must start with a digit or `.`, which keeps `inf` and `NaN` identifiers.
fn is_numeric(word: &str) -> bool {
    word.starts_with(|ch: char| ch.is_ascii_digit() || ch == '.') && word.parse::<f64>().is_ok()
}

/// Stamps each token's color class onto the characters it covers.
fn project(len: usize, tokens: &[Token]) -> Vec<ColorClass> {
    let mut colors = vec![ColorClass::Foreground; len];
    for token in tokens {
        colors[token.range()].fill(token.class.color_class());
    }
    colors
}
