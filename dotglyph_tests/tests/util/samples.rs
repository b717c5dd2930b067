// Copyright 2026 the Dotglyph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// A small shader function touching every color class.
pub(crate) const SHADER: &str = "/* tint */\nvec4 shade(float t) {\n  return vec4(t * 0.5); // half\n}\n";

/// Several lines of ASCII with a blank line in the middle.
pub(crate) const MULTILINE: &str = "first line\n\nthird, longer line\nlast";
