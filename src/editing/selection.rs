// Copyright 2025 the Letterswap Authors
// SPDX-License-Identifier: Apache-2.0

//! Rubber-band selection rectangle.
//!
//! The rectangle lives only while the pointer is held down on empty
//! canvas. Its bounds are always normalized, so dragging up or to the left
//! of the origin still yields a non-negative width and height.

use kurbo::{Point, Rect};

/// A rubber-band rectangle anchored where the pointer went down
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionRect {
    origin: Point,
    bounds: Rect,
}

impl SelectionRect {
    /// Start a zero-size rectangle at `origin`
    pub fn new(origin: Point) -> Self {
        Self {
            origin,
            bounds: Rect::from_points(origin, origin),
        }
    }

    /// Stretch the rectangle from its origin to `pointer`
    pub fn update(&mut self, pointer: Point) {
        self.bounds = Rect::from_points(self.origin, pointer);
    }

    /// Where the pointer went down
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Normalized bounds
    pub fn bounds(&self) -> Rect {
        self.bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rect_is_empty_at_origin() {
        let rect = SelectionRect::new(Point::new(5.0, 7.0));
        assert_eq!(rect.bounds(), Rect::new(5.0, 7.0, 5.0, 7.0));
        assert_eq!(rect.bounds().area(), 0.0);
    }

    #[test]
    fn dragging_down_right() {
        let mut rect = SelectionRect::new(Point::new(10.0, 10.0));
        rect.update(Point::new(30.0, 25.0));
        assert_eq!(rect.bounds(), Rect::new(10.0, 10.0, 30.0, 25.0));
    }

    #[test]
    fn dragging_up_left_is_normalized() {
        let mut rect = SelectionRect::new(Point::new(30.0, 25.0));
        rect.update(Point::new(10.0, 10.0));

        let bounds = rect.bounds();
        assert_eq!(bounds, Rect::new(10.0, 10.0, 30.0, 25.0));
        assert!(bounds.width() >= 0.0);
        assert!(bounds.height() >= 0.0);
        assert_eq!(rect.origin(), Point::new(30.0, 25.0));
    }

    #[test]
    fn update_uses_origin_not_previous_bounds() {
        let mut rect = SelectionRect::new(Point::new(0.0, 0.0));
        rect.update(Point::new(50.0, 50.0));
        rect.update(Point::new(-5.0, 5.0));
        assert_eq!(rect.bounds(), Rect::new(-5.0, 0.0, 0.0, 5.0));
    }
}
