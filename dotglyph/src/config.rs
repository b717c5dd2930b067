// Copyright 2026 the Dotglyph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Limits and policies shared by the tokenizer and the layout engine.

use crate::error::Error;

/// Default value for every entry of [`Limits`].
///
/// Large enough for a full screen of source text; most calls use a small fraction of it.
pub const DEFAULT_CAPACITY: usize = 40_000;

/// Upper bounds enforced on every call.
///
/// Exceeding any of them fails the call with
/// [`ErrorKind::CapacityExceeded`](crate::ErrorKind::CapacityExceeded).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Limits {
    /// Maximum number of tokens produced by one tokenize call.
    pub max_tokens: usize,
    /// Maximum number of characters on a single line of tokenized text.
    pub max_line_len: usize,
    /// Maximum number of glyph instances produced by one layout call.
    pub max_instances: usize,
}

impl Limits {
    /// Fails if `required` items would not fit under the given limit.
    pub(crate) fn check(&self, limit: Limit, required: usize) -> Result<(), Error> {
        let max = match limit {
            Limit::Tokens => self.max_tokens,
            Limit::LineLength => self.max_line_len,
            Limit::Instances => self.max_instances,
        };
        if required > max {
            log::warn!("{limit} of {required} rejected, maximum is {max}");
            return Err(Error::capacity_exceeded(limit, max));
        }
        Ok(())
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_tokens: DEFAULT_CAPACITY,
            max_line_len: DEFAULT_CAPACITY,
            max_instances: DEFAULT_CAPACITY,
        }
    }
}

/// Identifies which of the [`Limits`] was exceeded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Limit {
    /// [`Limits::max_tokens`].
    Tokens,
    /// [`Limits::max_line_len`].
    LineLength,
    /// [`Limits::max_instances`].
    Instances,
}

impl core::fmt::Display for Limit {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            Self::Tokens => "token count",
            Self::LineLength => "line length",
            Self::Instances => "glyph instance count",
        })
    }
}

/// What layout does with a character the atlas has no glyph for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UnknownGlyph {
    /// Fail with [`ErrorKind::MalformedInput`](crate::ErrorKind::MalformedInput).
    #[default]
    Reject,
    /// Draw this glyph instead. It must itself be in the atlas alphabet.
    Substitute(char),
}

/// Configuration for tokenizing and layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Config {
    /// Capacity limits.
    pub limits: Limits,
    /// Handling of characters outside the atlas alphabet.
    pub unknown_glyph: UnknownGlyph,
}

impl Config {
    /// Replaces the capacity limits.
    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Replaces only the instance limit.
    pub fn with_max_instances(mut self, max_instances: usize) -> Self {
        self.limits.max_instances = max_instances;
        self
    }

    /// Replaces the unknown glyph policy.
    pub fn with_unknown_glyph(mut self, unknown_glyph: UnknownGlyph) -> Self {
        self.unknown_glyph = unknown_glyph;
        self
    }
}
