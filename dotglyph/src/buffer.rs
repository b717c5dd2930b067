// Copyright 2026 the Dotglyph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use core::mem;

use crate::atlas::Atlas;
use crate::config::{Config, Limit};
use crate::error::Error;
use crate::glyph::{GLYPH_COUNT, GlyphInstance};
use crate::layout::layout_into;
use crate::lex::ColorClass;

/// The glyph instances of the last successful layout, ready for upload.
///
/// Layout runs into a back buffer that is only swapped in once it has succeeded, so a
/// failed update leaves the published instances and [`generation`](Self::generation)
/// exactly as they were. Renderers compare the generation with the one they last
/// uploaded to decide whether to upload again.
#[derive(Clone, Debug, Default)]
pub struct InstanceBuffer {
    front: Vec<GlyphInstance>,
    back: Vec<GlyphInstance>,
    generation: u64,
}

impl InstanceBuffer {
    /// Creates an empty buffer at generation zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Lays out `text` and publishes the result.
    ///
    /// Returns the number of published instances. See [`layout`](crate::layout) for the
    /// meaning of the arguments.
    pub fn update(
        &mut self,
        text: &str,
        colors: Option<&[ColorClass]>,
        atlas: &Atlas,
        config: &Config,
    ) -> Result<usize, Error> {
        layout_into(text, colors, atlas, config, &mut self.back)?;
        self.swap();
        Ok(self.front.len())
    }

    /// Publishes instances produced elsewhere.
    ///
    /// The instances are checked against the instance limit of `config`, and every
    /// glyph index and color class must be in range. On failure nothing is published.
    /// The previous allocation is kept for reuse by the next [`update`](Self::update).
    pub fn publish(
        &mut self,
        instances: Vec<GlyphInstance>,
        config: &Config,
    ) -> Result<usize, Error> {
        config.limits.check(Limit::Instances, instances.len())?;
        if let Some(index) = instances.iter().position(|i| !in_range(i)) {
            log::warn!("rejected glyph instance {index} for publication");
            return Err(Error::invalid_instance(index));
        }
        self.back = instances;
        self.swap();
        Ok(self.front.len())
    }

    /// Publishes an empty instance sequence.
    pub fn clear(&mut self) {
        self.back.clear();
        self.swap();
    }

    /// The published instances.
    pub fn instances(&self) -> &[GlyphInstance] {
        &self.front
    }

    /// Number of published instances.
    pub fn len(&self) -> usize {
        self.front.len()
    }

    /// Whether no instances are published.
    pub fn is_empty(&self) -> bool {
        self.front.is_empty()
    }

    /// The published instances as raw bytes, in native endianness.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.front)
    }

    /// Incremented on every successful publication.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    fn swap(&mut self) {
        mem::swap(&mut self.front, &mut self.back);
        self.back.clear();
        self.generation = self.generation.wrapping_add(1);
        log::trace!(
            "published {} glyph instances, generation {}",
            self.front.len(),
            self.generation
        );
    }
}

/// Whether the renderer can look up the glyph and color of `instance`.
fn in_range(instance: &GlyphInstance) -> bool {
    (instance.glyph_index as usize) < GLYPH_COUNT
        && usize::try_from(instance.color_class).is_ok_and(|class| class < ColorClass::ALL.len())
}
