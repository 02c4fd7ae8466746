// Copyright 2025 the Letterswap Authors
// SPDX-License-Identifier: Apache-2.0

//! Stable identifiers for glyphs on the canvas.
//!
//! A `GlyphId` is the index of the character in the text it was created
//! from. IDs are only stable until the text is applied again, at which
//! point the whole collection is replaced and numbering restarts at zero.

use std::fmt;

/// Identifier of a glyph within one applied text
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GlyphId(usize);

impl GlyphId {
    /// Create an ID for the glyph at `index` in the applied text
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Position of the glyph in the collection
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for GlyphId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
