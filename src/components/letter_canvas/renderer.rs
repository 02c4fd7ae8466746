// Copyright 2025 the Letterswap Authors
// SPDX-License-Identifier: Apache-2.0

//! Parley-backed glyph renderer for the letter canvas

use crate::render::{GlyphRenderer, VisualId, VisualStore};
use kurbo::{Point, Rect, Size};
use masonry::core::{BrushIndex, StyleProperty};
use parley::{FontContext, FontFamily, FontStack, GenericFamily, Layout, LayoutContext};
use std::cell::RefCell;

thread_local! {
    static FONT_CX: RefCell<FontContext> = RefCell::new(FontContext::default());
    static LAYOUT_CX: RefCell<LayoutContext<BrushIndex>> = RefCell::new(LayoutContext::new());
}

/// A laid-out letter and where to draw it
pub(super) struct LetterVisual {
    pub layout: Layout<BrushIndex>,
    pub origin: Point,
    pub selected: bool,
    pub size: Size,
}

/// Keeps one parley layout per letter; painted by `LetterCanvasWidget`
pub struct CanvasRenderer {
    font_size: f32,
    visuals: VisualStore<LetterVisual>,
    selection_rect: Option<Rect>,
}

impl CanvasRenderer {
    pub fn new(font_size: f32) -> Self {
        Self {
            font_size,
            visuals: VisualStore::new(),
            selection_rect: None,
        }
    }

    /// Visuals in creation order, which is also paint order
    pub(super) fn visuals(&self) -> impl Iterator<Item = &LetterVisual> {
        self.visuals.iter()
    }

    pub(super) fn selection_rect(&self) -> Option<Rect> {
        self.selection_rect
    }

    fn layout_char(&self, ch: char) -> Layout<BrushIndex> {
        let text = ch.to_string();
        FONT_CX.with_borrow_mut(|font_cx| {
            LAYOUT_CX.with_borrow_mut(|layout_cx| {
                let mut builder = layout_cx.ranged_builder(font_cx, &text, 1.0, false);
                builder.push_default(StyleProperty::FontSize(self.font_size));
                builder.push_default(StyleProperty::FontStack(FontStack::Single(
                    FontFamily::Generic(GenericFamily::SansSerif),
                )));
                builder.push_default(StyleProperty::Brush(BrushIndex(0)));
                let mut layout = builder.build(&text);
                layout.break_all_lines(None);
                layout
            })
        })
    }
}

impl GlyphRenderer for CanvasRenderer {
    type Handle = VisualId;

    fn create_glyph(&mut self, ch: char) -> VisualId {
        let layout = self.layout_char(ch);
        // `width` drops trailing whitespace, which would make a space zero wide
        let size = Size::new(layout.full_width() as f64, layout.height() as f64);
        self.visuals.insert(LetterVisual {
            layout,
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
        self.visuals.remove(handle);
    }

    fn show_selection_rect(&mut self, rect: Rect) {
        self.selection_rect = Some(rect);
    }

    fn hide_selection_rect(&mut self) {
        self.selection_rect = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editing::InteractionController;
    use crate::model::GlyphId;

    #[test]
    fn letters_measure_non_zero() {
        let mut renderer = CanvasRenderer::new(32.0);
        let a = renderer.create_glyph('a');
        let size = renderer.measure(&a);
        assert!(size.width > 0.0);
        assert!(size.height > 0.0);
    }

    #[test]
    fn space_measures_non_zero_width() {
        let mut renderer = CanvasRenderer::new(32.0);
        let space = renderer.create_glyph(' ');
        assert!(renderer.measure(&space).width > 0.0);
    }

    #[test]
    fn removed_visual_measures_zero() {
        let mut renderer = CanvasRenderer::new(32.0);
        let a = renderer.create_glyph('a');
        renderer.remove(a);
        assert_eq!(renderer.measure(&a), Size::ZERO);
        assert_eq!(renderer.visuals().count(), 0);
    }

    #[test]
    fn applied_text_advances_by_measured_width() {
        let mut controller = InteractionController::with_text_origin(
            CanvasRenderer::new(32.0),
            Point::new(10.0, 50.0),
        );
        controller.apply_text("a b");

        let glyphs = controller.glyphs();
        assert_eq!(glyphs.len(), 3);
        assert_eq!(glyphs[0].origin, Point::new(10.0, 50.0));
        for pair in glyphs.windows(2) {
            let width = controller.renderer().measure(pair[0].handle()).width;
            assert!(pair[1].origin.x > pair[0].origin.x);
            assert_eq!(pair[1].origin.x, pair[0].origin.x + width);
            assert_eq!(pair[1].origin.y, 50.0);
        }

        // The space is a real, clickable box
        let space = controller.bounding_box(GlyphId::new(1)).unwrap();
        assert!(space.width() > 0.0);
        let center = space.center();
        assert_eq!(controller.glyph_at(center), Some(GlyphId::new(1)));
    }

    #[test]
    fn selection_rect_is_shown_and_hidden() {
        let mut renderer = CanvasRenderer::new(32.0);
        let rect = Rect::new(0.0, 0.0, 20.0, 10.0);
        renderer.show_selection_rect(rect);
        assert_eq!(renderer.selection_rect(), Some(rect));
        renderer.hide_selection_rect();
        assert_eq!(renderer.selection_rect(), None);
    }
}
