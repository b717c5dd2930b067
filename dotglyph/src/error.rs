// Copyright 2026 the Dotglyph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(feature = "png")]
use alloc::string::String;

use crate::config::Limit;

/// Error type for atlas building, tokenizing and layout.
///
/// Carries a non-exhaustive [`ErrorKind`] plus whatever context is known about
/// the failure: the limit that was hit, or the character index of the offending
/// input.
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    /// The non-exhaustive category describing this error.
    kind: ErrorKind,

    /// What exactly went wrong.
    detail: Detail,
}

#[derive(Debug, Clone, PartialEq)]
enum Detail {
    MarkerCount {
        expected: usize,
        found: usize,
    },
    ImageShape {
        width: u32,
        height: u32,
        channels: u8,
        len: usize,
    },
    #[cfg(feature = "png")]
    Decode(String),
    Capacity {
        limit: Limit,
        max: usize,
    },
    UnsupportedChar {
        index: usize,
        ch: char,
    },
    ColorLength {
        expected: usize,
        found: usize,
    },
    InvalidInstance {
        index: usize,
    },
}

impl Error {
    /// The machine-readable category for this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The limit that was exceeded, for [`ErrorKind::CapacityExceeded`] errors.
    pub fn limit(&self) -> Option<Limit> {
        match self.detail {
            Detail::Capacity { limit, .. } => Some(limit),
            _ => None,
        }
    }

    /// The configured maximum that was exceeded, for [`ErrorKind::CapacityExceeded`] errors.
    pub fn capacity(&self) -> Option<usize> {
        match self.detail {
            Detail::Capacity { max, .. } => Some(max),
            _ => None,
        }
    }

    /// The character index (not byte index) of the unsupported character, if any.
    pub fn index(&self) -> Option<usize> {
        match self.detail {
            Detail::UnsupportedChar { index, .. } => Some(index),
            _ => None,
        }
    }

    /// The unsupported character, if any.
    pub fn unsupported_char(&self) -> Option<char> {
        match self.detail {
            Detail::UnsupportedChar { ch, .. } => Some(ch),
            _ => None,
        }
    }

    /// Position of a rejected glyph instance, for errors from
    /// [`InstanceBuffer::publish`](crate::InstanceBuffer::publish).
    pub fn instance(&self) -> Option<usize> {
        match self.detail {
            Detail::InvalidInstance { index } => Some(index),
            _ => None,
        }
    }

    pub(crate) fn marker_count(expected: usize, found: usize) -> Self {
        Self {
            kind: ErrorKind::Configuration,
            detail: Detail::MarkerCount { expected, found },
        }
    }

    pub(crate) fn image_shape(width: u32, height: u32, channels: u8, len: usize) -> Self {
        Self {
            kind: ErrorKind::Configuration,
            detail: Detail::ImageShape {
                width,
                height,
                channels,
                len,
            },
        }
    }

    #[cfg(feature = "png")]
    pub(crate) fn decode(err: png::DecodingError) -> Self {
        use alloc::string::ToString;

        Self {
            kind: ErrorKind::Configuration,
            detail: Detail::Decode(err.to_string()),
        }
    }

    pub(crate) fn capacity_exceeded(limit: Limit, max: usize) -> Self {
        Self {
            kind: ErrorKind::CapacityExceeded,
            detail: Detail::Capacity { limit, max },
        }
    }

    pub(crate) fn unsupported(index: usize, ch: char) -> Self {
        Self {
            kind: ErrorKind::MalformedInput,
            detail: Detail::UnsupportedChar { index, ch },
        }
    }

    pub(crate) fn color_length(expected: usize, found: usize) -> Self {
        Self {
            kind: ErrorKind::MalformedInput,
            detail: Detail::ColorLength { expected, found },
        }
    }

    pub(crate) fn invalid_instance(index: usize) -> Self {
        Self {
            kind: ErrorKind::MalformedInput,
            detail: Detail::InvalidInstance { index },
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match &self.detail {
            Detail::MarkerCount { expected, found } => write!(
                f,
                "sprite sheet has {found} marker dots in its first row, expected {expected}"
            ),
            Detail::ImageShape {
                width,
                height,
                channels,
                len,
            } => write!(
                f,
                "unusable sprite sheet: {width}x{height} with {channels} channels and {len} bytes of pixel data"
            ),
            #[cfg(feature = "png")]
            Detail::Decode(message) => write!(f, "failed to decode sprite sheet: {message}"),
            Detail::Capacity { limit, max } => write!(f, "{limit} exceeds the maximum of {max}"),
            Detail::UnsupportedChar { index, ch } => write!(
                f,
                "character {ch:?} at index {index} has no glyph in the atlas"
            ),
            Detail::ColorLength { expected, found } => write!(
                f,
                "color class array has {found} entries but the text has {expected} characters"
            ),
            Detail::InvalidInstance { index } => write!(
                f,
                "glyph instance {index} has a glyph index or color class out of range"
            ),
        }
    }
}

impl core::error::Error for Error {}

/// The non-exhaustive category of an error.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The sprite sheet cannot produce a valid atlas.
    ///
    /// This is not recoverable: no metrics table exists to lay text out with.
    Configuration,

    /// A configured maximum (tokens, line length or instances) was exceeded.
    ///
    /// Nothing was produced for the offending call; callers may truncate and retry.
    CapacityExceeded,

    /// The input contains a character outside the atlas alphabet, the color
    /// classes do not match the text, or a published instance is out of range.
    MalformedInput,
}
