// Copyright 2025 the Letterswap Authors
// SPDX-License-Identifier: Apache-2.0

//! Drag session: which glyphs move with the pointer, and how far each one
//! sits from it.

use crate::model::GlyphId;
use kurbo::{Point, Vec2};
use std::collections::HashMap;

/// Glyphs being moved by the current pointer gesture
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DragSession {
    /// Members in collection order
    members: Vec<GlyphId>,

    /// Pointer position minus glyph origin, recorded at drag start
    offsets: HashMap<GlyphId, Vec2>,

    /// More than one glyph is moving; swap-on-drop is disabled
    group: bool,
}

impl DragSession {
    /// Begin dragging `glyphs` (id and current origin) from `pointer`
    pub fn begin(pointer: Point, glyphs: impl IntoIterator<Item = (GlyphId, Point)>) -> Self {
        let mut members = Vec::new();
        let mut offsets = HashMap::new();
        for (id, origin) in glyphs {
            members.push(id);
            offsets.insert(id, pointer - origin);
        }
        let group = members.len() > 1;
        Self {
            members,
            offsets,
            group,
        }
    }

    /// Members and their offsets, in collection order
    pub fn members(&self) -> impl Iterator<Item = (GlyphId, Vec2)> + '_ {
        self.members
            .iter()
            .filter_map(|id| self.offsets.get(id).map(|offset| (*id, *offset)))
    }

    /// Where each member should sit for the given pointer position, in
    /// collection order
    pub fn origins_at(&self, pointer: Point) -> impl Iterator<Item = (GlyphId, Point)> + '_ {
        self.members().map(move |(id, offset)| (id, pointer - offset))
    }

    pub fn is_group(&self) -> bool {
        self.group
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// The dragged glyph, if this is a single-glyph drag eligible for
    /// swap-on-drop
    pub fn single(&self) -> Option<GlyphId> {
        match self.members.as_slice() {
            [only] if !self.group => Some(*only),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_are_pointer_minus_origin() {
        let drag = DragSession::begin(
            Point::new(15.0, 55.0),
            [(GlyphId::new(0), Point::new(10.0, 50.0))],
        );
        let members: Vec<_> = drag.members().collect();
        assert_eq!(members, vec![(GlyphId::new(0), Vec2::new(5.0, 5.0))]);
    }

    #[test]
    fn origins_follow_pointer() {
        let drag = DragSession::begin(
            Point::new(15.0, 55.0),
            [
                (GlyphId::new(3), Point::new(10.0, 50.0)),
                (GlyphId::new(1), Point::new(40.0, 50.0)),
            ],
        );
        let origins: Vec<_> = drag.origins_at(Point::new(100.0, 100.0)).collect();
        assert_eq!(
            origins,
            vec![
                (GlyphId::new(3), Point::new(95.0, 95.0)),
                (GlyphId::new(1), Point::new(125.0, 95.0)),
            ]
        );
    }

    #[test]
    fn single_member_is_swap_eligible() {
        let id = GlyphId::new(1);
        let drag = DragSession::begin(Point::ZERO, [(id, Point::ZERO)]);
        assert!(!drag.is_group());
        assert_eq!(drag.single(), Some(id));
    }

    #[test]
    fn group_is_not_swap_eligible() {
        let drag = DragSession::begin(
            Point::ZERO,
            [
                (GlyphId::new(0), Point::new(10.0, 0.0)),
                (GlyphId::new(1), Point::new(20.0, 0.0)),
            ],
        );
        assert!(drag.is_group());
        assert_eq!(drag.len(), 2);
        assert_eq!(drag.single(), None);
    }

    #[test]
    fn empty_session() {
        let drag = DragSession::begin(Point::ZERO, []);
        assert!(drag.is_empty());
        assert!(!drag.is_group());
        assert_eq!(drag.single(), None);
    }

    #[test]
    fn members_keep_collection_order() {
        let ids = [GlyphId::new(4), GlyphId::new(1), GlyphId::new(7)];
        let drag = DragSession::begin(Point::ZERO, ids.iter().map(|id| (*id, Point::ZERO)));
        let order: Vec<_> = drag.members().map(|(id, _)| id).collect();
        assert_eq!(order, ids.to_vec());
    }
}
