// Copyright 2026 the Dotglyph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::lex::ColorClass;

/// Number of colors in a [`Palette`].
pub const PALETTE_LEN: usize = 9;

const BACKGROUND_SLOT: usize = 7;
const CLEAR_SLOT: usize = 8;

const fn rgb8(r: u8, g: u8, b: u8) -> [f32; 3] {
    [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0]
}

/// Linear RGB colors indexed by palette slot.
///
/// Slots 0 through 6 are the [`ColorClass`] colors, slot 7 the panel background
/// and slot 8 the clear color. The layout is that of a `vec3[9]` uniform array.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    colors: [[f32; 3]; PALETTE_LEN],
}

impl Palette {
    /// A dark theme in the style of Monokai.
    pub const MONOKAI: Self = Self {
        colors: [
            rgb8(248, 248, 242),
            rgb8(249, 38, 114),
            rgb8(174, 129, 255),
            rgb8(102, 217, 239),
            rgb8(249, 38, 114),
            rgb8(117, 113, 94),
            rgb8(102, 217, 239),
            rgb8(73, 72, 62),
            rgb8(39, 40, 34),
        ],
    };

    /// Color of a syntax class.
    pub fn color(&self, class: ColorClass) -> [f32; 3] {
        self.colors[class as usize]
    }

    /// Color behind a text panel.
    pub fn background(&self) -> [f32; 3] {
        self.colors[BACKGROUND_SLOT]
    }

    /// Color the frame is cleared to.
    pub fn clear(&self) -> [f32; 3] {
        self.colors[CLEAR_SLOT]
    }

    /// Replaces the color of a syntax class.
    pub fn with_color(mut self, class: ColorClass, color: [f32; 3]) -> Self {
        self.colors[class as usize] = color;
        self
    }

    /// Replaces the panel background color.
    pub fn with_background(mut self, color: [f32; 3]) -> Self {
        self.colors[BACKGROUND_SLOT] = color;
        self
    }

    /// Replaces the clear color.
    pub fn with_clear(mut self, color: [f32; 3]) -> Self {
        self.colors[CLEAR_SLOT] = color;
        self
    }

    /// All colors, by slot.
    pub fn as_slice(&self) -> &[[f32; 3]; PALETTE_LEN] {
        &self.colors
    }

    /// All colors as a flat array of components, for uniform upload.
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.colors)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::MONOKAI
    }
}

#[cfg(test)]
mod tests {
    use super::{PALETTE_LEN, Palette};
    use crate::ColorClass;

    #[test]
    fn slots_follow_color_class_indices() {
        let palette = Palette::default();
        for class in ColorClass::ALL {
            assert_eq!(palette.color(class), palette.as_slice()[class.index() as usize]);
        }
        assert_eq!(palette.color(ColorClass::Foreground), [248.0 / 255.0, 248.0 / 255.0, 242.0 / 255.0]);
        assert_eq!(palette.clear(), [39.0 / 255.0, 40.0 / 255.0, 34.0 / 255.0]);
    }

    #[test]
    fn overrides_touch_only_their_slot() {
        let red = [1.0, 0.0, 0.0];
        let palette = Palette::default()
            .with_color(ColorClass::Comment, red)
            .with_background(red);
        assert_eq!(palette.color(ColorClass::Comment), red);
        assert_eq!(palette.background(), red);
        assert_eq!(palette.clear(), Palette::MONOKAI.clear());
        assert_eq!(palette.color(ColorClass::Type), Palette::MONOKAI.color(ColorClass::Type));
    }

    #[test]
    fn floats_are_packed_by_slot() {
        let palette = Palette::default().with_clear([0.25, 0.5, 0.75]);
        let floats = palette.as_floats();
        assert_eq!(floats.len(), 3 * PALETTE_LEN);
        assert_eq!(&floats[24..], &[0.25, 0.5, 0.75]);
    }
}
