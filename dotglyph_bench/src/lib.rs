// Copyright 2026 the Dotglyph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! # Dotglyph Bench
//!
//! This crate provides benchmarks for the Dotglyph library.

use std::cell::RefCell;
use std::sync::OnceLock;

use dotglyph::{Atlas, InstanceBuffer, SpriteSheet, TextContext};

pub mod benches;

std::thread_local! {
    static TEXT_CX_TL: RefCell<TextContext> = RefCell::new(TextContext::new(fixture_atlas()));
    static BUFFER_TL: RefCell<InstanceBuffer> = RefCell::new(InstanceBuffer::new());
}

/// Runs the provided closure with mutable access to the thread-local text context and
/// instance buffer.
pub fn with_context<R>(f: impl FnOnce(&mut TextContext, &mut InstanceBuffer) -> R) -> R {
    TEXT_CX_TL.with(|cx_cell| {
        BUFFER_TL.with(|buffer_cell| {
            let mut cx = cx_cell.borrow_mut();
            let mut buffer = buffer_cell.borrow_mut();
            f(&mut cx, &mut buffer)
        })
    })
}

/// The fixture sprite sheet from `dotglyph_dev`.
pub fn fixture_sheet() -> SpriteSheet {
    let raw = dotglyph_dev::fixture_sheet();
    SpriteSheet::new(raw.width, raw.height, 3, raw.pixels).unwrap()
}

/// The atlas built from [`fixture_sheet`].
pub fn fixture_atlas() -> Atlas {
    Atlas::build(&fixture_sheet()).unwrap()
}

/// A sample to be used for benchmarking.
#[derive(Debug)]
pub struct Sample {
    /// The name of the sample.
    pub name: &'static str,
    /// The modification of the sample.
    pub modification: &'static str,
    /// The text of the sample.
    pub text: String,
}

static SAMPLES: OnceLock<Vec<Sample>> = OnceLock::new();

/// Returns a list of samples to be used for benchmarking.
pub fn get_samples() -> &'static [Sample] {
    let samples = dotglyph_dev::TextSamples::new();

    SAMPLES.get_or_init(|| {
        let mut out = Vec::new();
        for sample in [&samples.fragment, &samples.prose] {
            out.push(Sample {
                name: sample.name,
                modification: "1 line",
                text: sample.text.lines().next().unwrap().to_string(),
            });
            out.push(Sample {
                name: sample.name,
                modification: "full",
                text: sample.text.to_string(),
            });
        }
        out.push(Sample {
            name: samples.vertex.name,
            modification: "x20",
            text: samples.vertex.text.repeat(20),
        });
        out
    })
}
