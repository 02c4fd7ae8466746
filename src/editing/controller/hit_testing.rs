// Copyright 2025 the Letterswap Authors
// SPDX-License-Identifier: Apache-2.0

//! Hit testing against glyph bounding boxes

use super::InteractionController;
use crate::model::GlyphId;
use crate::render::GlyphRenderer;
use kurbo::{Point, Rect};

/// Whether `point` lies inside `bounds`, edges included
pub fn contains_point(bounds: Rect, point: Point) -> bool {
    point.x >= bounds.x0 && point.x <= bounds.x1 && point.y >= bounds.y0 && point.y <= bounds.y1
}

/// Whether two rectangles share interior area
///
/// Touching edges do not count, so a zero-size rectangle only hits a box
/// it lies strictly inside.
pub fn overlaps(a: Rect, b: Rect) -> bool {
    a.x1 > b.x0 && a.x0 < b.x1 && a.y1 > b.y0 && a.y0 < b.y1
}

impl<R: GlyphRenderer> InteractionController<R> {
    /// Current bounding box of a glyph in canvas coordinates
    pub fn bounding_box(&self, id: GlyphId) -> Option<Rect> {
        self.glyphs
            .get(id.index())
            .map(|glyph| glyph.bounds(self.renderer.measure(&glyph.handle)))
    }

    /// The topmost glyph under `point`
    ///
    /// Later glyphs are painted over earlier ones, so the search runs
    /// back to front.
    pub fn glyph_at(&self, point: Point) -> Option<GlyphId> {
        self.glyphs
            .iter()
            .rev()
            .find(|glyph| {
                contains_point(glyph.bounds(self.renderer.measure(&glyph.handle)), point)
            })
            .map(|glyph| glyph.id)
    }

    /// First glyph in collection order, other than `dragged`, whose box
    /// contains `point`
    pub(super) fn swap_target(&self, dragged: GlyphId, point: Point) -> Option<GlyphId> {
        self.glyphs
            .iter()
            .filter(|glyph| glyph.id != dragged)
            .find(|glyph| {
                contains_point(glyph.bounds(self.renderer.measure(&glyph.handle)), point)
            })
            .map(|glyph| glyph.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_includes_edges() {
        let bounds = Rect::new(10.0, 50.0, 20.0, 70.0);
        assert!(contains_point(bounds, Point::new(10.0, 50.0)));
        assert!(contains_point(bounds, Point::new(20.0, 70.0)));
        assert!(contains_point(bounds, Point::new(15.0, 60.0)));
        assert!(!contains_point(bounds, Point::new(20.1, 60.0)));
        assert!(!contains_point(bounds, Point::new(15.0, 49.9)));
    }

    #[test]
    fn overlap_excludes_touching_edges() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(overlaps(a, Rect::new(5.0, 5.0, 15.0, 15.0)));
        assert!(!overlaps(a, Rect::new(10.0, 0.0, 20.0, 10.0)));
        assert!(!overlaps(a, Rect::new(0.0, 10.0, 10.0, 20.0)));
        assert!(!overlaps(a, Rect::new(30.0, 30.0, 40.0, 40.0)));
    }

    #[test]
    fn zero_size_rect_inside_box_overlaps() {
        let glyph = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(overlaps(glyph, Rect::new(5.0, 5.0, 5.0, 5.0)));
        assert!(!overlaps(glyph, Rect::new(10.0, 5.0, 10.0, 5.0)));
    }

    #[test]
    fn rect_containing_glyph_overlaps() {
        let glyph = Rect::new(10.0, 50.0, 20.0, 70.0);
        assert!(overlaps(glyph, Rect::new(0.0, 0.0, 100.0, 100.0)));
    }
}
