// Copyright 2026 the Dotglyph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! This crate contains the integration test suite for `dotglyph`.
//!
//! - The `util` module contains shared utility functions that are needed by different
//!   test methods, most importantly the fixture atlas from `dotglyph_dev`.
//! - We do not use the default Rust test harness, but instead use this `mod.rs` file as the
//!   entry point to run all other tests, so that the utilities are compiled once.
//! - If you want to add new tests, put them into the module for their topic (atlas, lex,
//!   layout, buffer or context), or create a new one in case it doesn't exist yet.
//! - For test naming, try to put the "topic" of the test at the start of the name instead of
//!   the end. For example, `layout_newline_resets_pen` is better than `newline_layout`.

#![allow(missing_docs, reason = "we don't need docs for testing")]
#![allow(clippy::cast_possible_truncation, reason = "not critical for testing")]

mod util;
