// Copyright 2025 the Letterswap Authors
// SPDX-License-Identifier: Apache-2.0

//! Rendering seam between the interaction controller and whatever draws
//! the letters.
//!
//! The controller never touches pixels. It asks a [`GlyphRenderer`] to
//! create a visual per character, move it, restyle it, and report its
//! measured size, which doubles as the geometry used for hit testing.

mod headless;

pub use headless::{HeadlessGlyph, HeadlessRenderer};

use kurbo::{Point, Rect, Size};

/// Creates, positions, styles and measures glyph visuals
pub trait GlyphRenderer {
    /// Opaque reference to one glyph visual
    type Handle;

    /// Create a visual sized to the rendered dimensions of `ch`
    fn create_glyph(&mut self, ch: char) -> Self::Handle;

    /// Move a visual so its top-left corner sits at `origin`
    fn set_position(&mut self, handle: &Self::Handle, origin: Point);

    /// Switch a visual between selected and unselected styling
    fn set_selected_style(&mut self, handle: &Self::Handle, selected: bool);

    /// Rendered size of a visual
    fn measure(&self, handle: &Self::Handle) -> Size;

    /// Destroy a visual
    fn remove(&mut self, handle: Self::Handle);

    /// Show (or move) the rubber-band rectangle
    fn show_selection_rect(&mut self, rect: Rect);

    /// Remove the rubber-band rectangle
    fn hide_selection_rect(&mut self);
}

/// Handle type shared by the renderers in this crate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VisualId(usize);

/// Slot storage for visuals, addressed by [`VisualId`]
///
/// Removed slots are not reused, so a stale handle can never alias a
/// newer visual.
#[derive(Debug, Clone)]
pub struct VisualStore<T> {
    slots: Vec<Option<T>>,
}

impl<T> VisualStore<T> {
    pub fn new() -> Self {
        Self { slots: Vec::new() }
    }

    pub fn insert(&mut self, visual: T) -> VisualId {
        self.slots.push(Some(visual));
        VisualId(self.slots.len() - 1)
    }

    pub fn get(&self, id: &VisualId) -> Option<&T> {
        self.slots.get(id.0).and_then(Option::as_ref)
    }

    pub fn get_mut(&mut self, id: &VisualId) -> Option<&mut T> {
        self.slots.get_mut(id.0).and_then(Option::as_mut)
    }

    pub fn remove(&mut self, id: VisualId) -> Option<T> {
        self.slots.get_mut(id.0).and_then(Option::take)
    }

    /// Live visuals in creation order
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.slots.iter().flatten()
    }

    /// Number of live visuals
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> Default for VisualStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removed_slots_are_not_reused() {
        let mut store = VisualStore::new();
        let a = store.insert('a');
        store.remove(a);
        let b = store.insert('b');

        assert_ne!(a, b);
        assert!(store.get(&a).is_none());
        assert_eq!(store.get(&b), Some(&'b'));
    }

    #[test]
    fn len_counts_live_visuals_only() {
        let mut store = VisualStore::new();
        let a = store.insert(1);
        store.insert(2);
        store.remove(a);

        assert_eq!(store.len(), 1);
        assert_eq!(store.iter().copied().collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn removing_twice_is_noop() {
        let mut store = VisualStore::new();
        let a = store.insert(1);
        assert_eq!(store.remove(a), Some(1));
        assert_eq!(store.remove(a), None);
        assert!(store.is_empty());
    }
}
