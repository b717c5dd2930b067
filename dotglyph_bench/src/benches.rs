// Copyright 2026 the Dotglyph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! # Benchmarks
//!
//! This module provides benchmarks for atlas building, tokenizing and layout.

use crate::{fixture_atlas, fixture_sheet, get_samples, with_context};
use dotglyph::{Atlas, Config, Highlight, Tokenizer};
use std::hint::black_box;
use tango_bench::{Benchmark, benchmark_fn};

/// Benchmark for building the fixture atlas.
pub fn atlas() -> Vec<Benchmark> {
    let sheet = fixture_sheet();
    vec![benchmark_fn("Atlas - fixture", move |b| {
        let sheet = sheet.clone();
        b.iter(move || black_box(Atlas::build(&sheet).unwrap()))
    })]
}

/// Benchmark for tokenizing without layout.
pub fn tokenize() -> Vec<Benchmark> {
    get_samples()
        .iter()
        .map(|sample| {
            benchmark_fn(
                format!("Tokenize - {} {}", sample.name, sample.modification),
                move |b| {
                    let mut tokenizer = Tokenizer::default();
                    b.iter(move || black_box(tokenizer.tokenize(&sample.text).unwrap()))
                },
            )
        })
        .collect()
}

/// Benchmark for uncolored layout.
pub fn layout() -> Vec<Benchmark> {
    get_samples()
        .iter()
        .map(|sample| {
            benchmark_fn(
                format!("Layout - {} {}", sample.name, sample.modification),
                move |b| {
                    let atlas = fixture_atlas();
                    let config = Config::default();
                    b.iter(move || {
                        black_box(dotglyph::layout(&sample.text, None, &atlas, &config).unwrap())
                    })
                },
            )
        })
        .collect()
}

/// Benchmark for tokenizing and layout into a reused instance buffer.
pub fn prepare() -> Vec<Benchmark> {
    get_samples()
        .iter()
        .map(|sample| {
            benchmark_fn(
                format!("Prepare - {} {}", sample.name, sample.modification),
                move |b| {
                    b.iter(|| {
                        with_context(|cx, buffer| {
                            black_box(cx.prepare(&sample.text, Highlight::Syntax, buffer).unwrap());
                        });
                    })
                },
            )
        })
        .collect()
}
