// Copyright 2025 the Letterswap Authors
// SPDX-License-Identifier: Apache-2.0

//! A single positioned, selectable character on the canvas.

use super::GlyphId;
use kurbo::{Point, Rect, Size};

/// One character of the applied text, positioned on the canvas
///
/// `H` is the renderer's handle for the visual that draws this glyph.
#[derive(Debug, Clone)]
pub struct Glyph<H> {
    /// Index of the character in the applied text
    pub id: GlyphId,

    /// The character itself
    pub ch: char,

    /// Top-left corner in canvas coordinates
    pub origin: Point,

    /// Whether the glyph is part of the current selection
    pub selected: bool,

    /// Origin snapshotted when the last drag started
    pub anchor: Point,

    pub(crate) handle: H,
}

impl<H> Glyph<H> {
    pub(crate) fn new(id: GlyphId, ch: char, origin: Point, handle: H) -> Self {
        Self {
            id,
            ch,
            origin,
            selected: false,
            anchor: origin,
            handle,
        }
    }

    /// Renderer handle for this glyph's visual
    pub fn handle(&self) -> &H {
        &self.handle
    }

    /// Bounding box for a glyph of the given measured size
    pub fn bounds(&self, size: Size) -> Rect {
        Rect::from_origin_size(self.origin, size)
    }
}
