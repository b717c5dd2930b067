// Copyright 2026 the Dotglyph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use dotglyph::{Atlas, GlyphInstance};

/// Asserts that consecutive instances on one line are exactly one glyph width apart.
pub(crate) fn assert_pen_advances(instances: &[GlyphInstance], atlas: &Atlas) {
    for pair in instances.windows(2) {
        let [prev, next] = pair else { unreachable!() };
        if prev.y != next.y {
            continue;
        }
        let width = atlas.metrics()[prev.glyph_index as usize].width as f32;
        assert_eq!(
            next.x - prev.x,
            width,
            "instance at {:?} should follow {:?} by its width",
            next,
            prev
        );
    }
}

/// Asserts that every line starts at `x = 0` and lines are one font height apart.
pub(crate) fn assert_lines_start_at_zero(instances: &[GlyphInstance], atlas: &Atlas) {
    let height = atlas.height() as f32;
    let mut prev_y = None;
    for instance in instances {
        if prev_y != Some(instance.y) {
            assert_eq!(instance.x, 0.0, "{instance:?} should start its line");
            assert_eq!(instance.y % height, 0.0, "{instance:?} should sit on a line");
            if let Some(prev_y) = prev_y {
                assert!(instance.y < prev_y, "lines should grow downwards");
            }
            prev_y = Some(instance.y);
        }
    }
}
