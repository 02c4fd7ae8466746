// Copyright 2025 the Letterswap Authors
// SPDX-License-Identifier: Apache-2.0

//! Renderer with fixed metrics and no output, for tests and scripted
//! sessions.

use super::{GlyphRenderer, VisualId, VisualStore};
use kurbo::{Point, Rect, Size};
use std::collections::HashMap;

/// Advance used for characters without an explicit width
const DEFAULT_ADVANCE: f64 = 10.0;

/// Line height shared by every headless glyph
const DEFAULT_HEIGHT: f64 = 20.0;

/// State of one visual as last set by the controller
#[derive(Debug, Clone, PartialEq)]
pub struct HeadlessGlyph {
    pub ch: char,
    pub origin: Point,
    pub selected: bool,
    pub size: Size,
}

/// A [`GlyphRenderer`] that only records what it was told
#[derive(Debug, Clone, Default)]
pub struct HeadlessRenderer {
    visuals: VisualStore<HeadlessGlyph>,
    advances: HashMap<char, f64>,
    selection_rect: Option<Rect>,
    created: usize,
    removed: usize,
}

impl HeadlessRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the width reported for `ch`
    pub fn with_advance(mut self, ch: char, width: f64) -> Self {
        self.advances.insert(ch, width);
        self
    }

    /// Width reported for `ch`
    pub fn advance(&self, ch: char) -> f64 {
        self.advances.get(&ch).copied().unwrap_or(DEFAULT_ADVANCE)
    }

    pub fn visual(&self, handle: &VisualId) -> Option<&HeadlessGlyph> {
        self.visuals.get(handle)
    }

    /// Live visuals in creation order
    pub fn visuals(&self) -> impl Iterator<Item = &HeadlessGlyph> {
        self.visuals.iter()
    }

    /// The rubber-band rectangle, if currently shown
    pub fn selection_rect(&self) -> Option<Rect> {
        self.selection_rect
    }

    /// Number of visuals created so far
    pub fn created(&self) -> usize {
        self.created
    }

    /// Number of visuals removed so far
    pub fn removed(&self) -> usize {
        self.removed
    }
}

impl GlyphRenderer for HeadlessRenderer {
    type Handle = VisualId;

    fn create_glyph(&mut self, ch: char) -> VisualId {
        let size = Size::new(self.advance(ch), DEFAULT_HEIGHT);
        self.created += 1;
        self.visuals.insert(HeadlessGlyph {
            ch,
            origin: Point::ZERO,
            selected: false,
            size,
        })
    }

    fn set_position(&mut self, handle: &VisualId, origin: Point) {
        if let Some(visual) = self.visuals.get_mut(handle) {
            visual.origin = origin;
        }
    }

    fn set_selected_style(&mut self, handle: &VisualId, selected: bool) {
        if let Some(visual) = self.visuals.get_mut(handle) {
            visual.selected = selected;
        }
    }

    fn measure(&self, handle: &VisualId) -> Size {
        self.visuals
            .get(handle)
            .map(|visual| visual.size)
            .unwrap_or(Size::ZERO)
    }

    fn remove(&mut self, handle: VisualId) {
        if self.visuals.remove(handle).is_some() {
            self.removed += 1;
        }
    }

    fn show_selection_rect(&mut self, rect: Rect) {
        self.selection_rect = Some(rect);
    }

    fn hide_selection_rect(&mut self) {
        self.selection_rect = None;
    }
}
