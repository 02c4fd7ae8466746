// Copyright 2025 the Letterswap Authors
// SPDX-License-Identifier: Apache-2.0

//! UI components for Letterswap

pub mod letter_canvas;

pub use letter_canvas::{CanvasSummary, letter_canvas};
