// Copyright 2026 the Dotglyph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;

use hashbrown::HashSet;

/// GLSL storage qualifiers, control flow and other reserved words.
const GLSL_KEYWORDS: &[&str] = &[
    "attribute", "buffer", "break", "case", "centroid", "coherent", "const", "continue",
    "default", "discard", "do", "else", "false", "flat", "for", "highp", "if", "in", "inout",
    "invariant", "layout", "lowp", "mediump", "noperspective", "out", "patch", "precise",
    "precision", "readonly", "restrict", "return", "sample", "shared", "smooth", "struct",
    "subroutine", "switch", "true", "uniform", "varying", "volatile", "while", "writeonly",
];

/// GLSL scalar, vector, matrix and opaque types.
const GLSL_TYPES: &[&str] = &[
    "void", "bool", "int", "uint", "float", "double",
    "vec2", "vec3", "vec4", "dvec2", "dvec3", "dvec4",
    "bvec2", "bvec3", "bvec4", "ivec2", "ivec3", "ivec4", "uvec2", "uvec3", "uvec4",
    "mat2", "mat3", "mat4", "mat2x2", "mat2x3", "mat2x4", "mat3x2", "mat3x3", "mat3x4",
    "mat4x2", "mat4x3", "mat4x4", "dmat2", "dmat3", "dmat4",
    "sampler1D", "sampler2D", "sampler3D", "samplerCube", "sampler2DRect", "samplerBuffer",
    "sampler1DArray", "sampler2DArray", "samplerCubeArray", "sampler1DShadow",
    "sampler2DShadow", "sampler2DMS", "isampler2D", "usampler2D", "image2D", "atomic_uint",
];

/// The keyword and type-name tables words are matched against.
///
/// Matching is exact and case-sensitive. The default lexicon is GLSL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lexicon {
    keywords: HashSet<Box<str>>,
    types: HashSet<Box<str>>,
}

impl Lexicon {
    /// Creates a lexicon from explicit tables.
    pub fn new(
        keywords: impl IntoIterator<Item = impl AsRef<str>>,
        types: impl IntoIterator<Item = impl AsRef<str>>,
    ) -> Self {
        Self {
            keywords: keywords.into_iter().map(|k| k.as_ref().into()).collect(),
            types: types.into_iter().map(|t| t.as_ref().into()).collect(),
        }
    }

    /// A lexicon that recognizes no keywords and no types.
    pub fn empty() -> Self {
        Self {
            keywords: HashSet::new(),
            types: HashSet::new(),
        }
    }

    /// The OpenGL Shading Language lexicon.
    pub fn glsl() -> Self {
        Self::new(GLSL_KEYWORDS, GLSL_TYPES)
    }

    /// Adds a keyword.
    pub fn add_keyword(&mut self, keyword: &str) {
        self.keywords.insert(keyword.into());
    }

    /// Adds a type name.
    pub fn add_type(&mut self, name: &str) {
        self.types.insert(name.into());
    }

    /// Whether `word` is a keyword.
    pub fn is_keyword(&self, word: &str) -> bool {
        self.keywords.contains(word)
    }

    /// Whether `word` is a type name.
    pub fn is_type(&self, word: &str) -> bool {
        self.types.contains(word)
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::glsl()
    }
}
