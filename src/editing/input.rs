// Copyright 2025 the Letterswap Authors
// SPDX-License-Identifier: Apache-2.0

//! Pointer input as seen by the interaction controller.

use crate::model::GlyphId;
use kurbo::Point;

/// A pointer event in canvas coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerInput {
    /// Button pressed, optionally over a glyph
    Down {
        pos: Point,
        /// The select modifier (ctrl by default) is held
        modifier: bool,
        target: Option<GlyphId>,
    },
    /// Pointer moved, button state unchanged
    Move { pos: Point },
    /// Button released
    Up { pos: Point },
    /// The gesture was interrupted (pointer capture lost)
    Cancel,
}

impl PointerInput {
    pub fn down_on(target: GlyphId, pos: impl Into<Point>) -> Self {
        PointerInput::Down {
            pos: pos.into(),
            modifier: false,
            target: Some(target),
        }
    }

    pub fn modified_down_on(target: GlyphId, pos: impl Into<Point>) -> Self {
        PointerInput::Down {
            pos: pos.into(),
            modifier: true,
            target: Some(target),
        }
    }

    pub fn down_on_background(pos: impl Into<Point>) -> Self {
        PointerInput::Down {
            pos: pos.into(),
            modifier: false,
            target: None,
        }
    }

    pub fn move_to(pos: impl Into<Point>) -> Self {
        PointerInput::Move { pos: pos.into() }
    }

    pub fn up_at(pos: impl Into<Point>) -> Self {
        PointerInput::Up { pos: pos.into() }
    }
}
