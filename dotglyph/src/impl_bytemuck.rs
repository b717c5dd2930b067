// Copyright 2026 the Dotglyph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `bytemuck` trait impls for the types handed to the GPU.

#![allow(
    unsafe_code,
    reason = "The `bytemuck` marker traits are `unsafe` and require `unsafe impl`."
)]

use bytemuck::{Contiguous, NoUninit, Pod, Zeroable, checked::CheckedBitPattern};

use crate::{ColorClass, GlyphInstance};

// Safety: The struct is `repr(C)` with four 4-byte fields, so it has no padding,
// and every bit pattern is a valid `f32` or `u32`.
unsafe impl Zeroable for GlyphInstance {}

// Safety: See the `Zeroable` impl.
unsafe impl Pod for GlyphInstance {}

// Safety: The enum is `repr(u8)` and has only fieldless variants.
unsafe impl NoUninit for ColorClass {}

// Safety: The enum is `repr(u8)` and `0` is `Foreground`.
unsafe impl Zeroable for ColorClass {}

// Safety: The enum is `repr(u8)`.
unsafe impl CheckedBitPattern for ColorClass {
    type Bits = u8;

    fn is_valid_bit_pattern(bits: &u8) -> bool {
        *bits <= Self::MAX_VALUE
    }
}

// Safety: The enum is `repr(u8)` with consecutive discriminants from
// `Foreground` to `Type`.
unsafe impl Contiguous for ColorClass {
    type Int = u8;
    const MIN_VALUE: u8 = Self::Foreground as u8;
    const MAX_VALUE: u8 = Self::Type as u8;
}
