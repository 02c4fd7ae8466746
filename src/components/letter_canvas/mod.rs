// Copyright 2025 the Letterswap Authors
// SPDX-License-Identifier: Apache-2.0

//! Letter canvas widget - draws the applied text as loose letters and
//! forwards pointer gestures to the interaction controller

mod paint;
mod pointer;
mod renderer;
mod view;

pub use renderer::CanvasRenderer;
pub use view::letter_canvas;

use crate::editing::InteractionController;
use crate::settings::{SelectModifier, Settings};
use masonry::accesskit::{Node, Role};
use masonry::core::{
    AccessCtx, BoxConstraints, ChildrenIds, EventCtx, LayoutCtx, PaintCtx, PointerButton,
    PointerButtonEvent, PointerEvent, PointerUpdate, PropertiesMut, PropertiesRef, RegisterCtx,
    TextEvent, Update, UpdateCtx, Widget,
};
use masonry::kurbo::Size;
use masonry::vello::Scene;

/// Letter and selection counts, emitted whenever a gesture changes them
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CanvasSummary {
    pub glyph_count: usize,
    pub selected_count: usize,
}

/// The canvas that holds the letters
pub struct LetterCanvasWidget {
    controller: InteractionController<CanvasRenderer>,

    /// Key that toggles instead of replacing the selection
    modifier: SelectModifier,
}

impl LetterCanvasWidget {
    pub fn new(settings: &Settings) -> Self {
        Self {
            controller: InteractionController::with_text_origin(
                CanvasRenderer::new(settings.font_size),
                settings.text_origin(),
            ),
            modifier: settings.modifier,
        }
    }

    /// Replace the letters on the canvas
    pub fn apply_text(&mut self, text: &str) {
        self.controller.apply_text(text);
    }

    fn summary(&self) -> CanvasSummary {
        CanvasSummary {
            glyph_count: self.controller.glyphs().len(),
            selected_count: self.controller.selected_ids().len(),
        }
    }
}

impl Widget for LetterCanvasWidget {
    type Action = CanvasSummary;

    fn register_children(&mut self, _ctx: &mut RegisterCtx<'_>) {
        // Leaf widget - no children
    }

    fn update(
        &mut self,
        _ctx: &mut UpdateCtx<'_>,
        _props: &mut PropertiesMut<'_>,
        _event: &Update,
    ) {
    }

    fn layout(
        &mut self,
        _ctx: &mut LayoutCtx<'_>,
        _props: &mut PropertiesMut<'_>,
        bc: &BoxConstraints,
    ) -> Size {
        // Use all available space (expand to fill the window)
        bc.max()
    }

    fn paint(&mut self, ctx: &mut PaintCtx<'_>, _props: &PropertiesRef<'_>, scene: &mut Scene) {
        self.paint_background(scene, ctx.size());
        self.paint_letters(scene);
        self.paint_selection_rect(scene);
    }

    fn on_pointer_event(
        &mut self,
        ctx: &mut EventCtx<'_>,
        _props: &mut PropertiesMut<'_>,
        event: &PointerEvent,
    ) {
        match event {
            PointerEvent::Down(PointerButtonEvent {
                button: Some(PointerButton::Primary),
                state,
                ..
            }) => {
                self.handle_pointer_down(ctx, state);
            }

            PointerEvent::Move(PointerUpdate { current, .. }) => {
                self.handle_pointer_move(ctx, current);
            }

            PointerEvent::Up(PointerButtonEvent {
                button: Some(PointerButton::Primary),
                state,
                ..
            }) => {
                self.handle_pointer_up(ctx, state);
            }

            PointerEvent::Cancel(_) => {
                self.handle_pointer_cancel(ctx);
            }

            _ => {}
        }
    }

    fn on_text_event(
        &mut self,
        _ctx: &mut EventCtx<'_>,
        _props: &mut PropertiesMut<'_>,
        _event: &TextEvent,
    ) {
    }

    fn accessibility_role(&self) -> Role {
        Role::Canvas
    }

    fn accessibility(
        &mut self,
        _ctx: &mut AccessCtx<'_>,
        _props: &PropertiesRef<'_>,
        node: &mut Node,
    ) {
        let text: String = self.controller.glyphs().iter().map(|glyph| glyph.ch).collect();
        node.set_label(format!("Letters: {}", text));
    }

    fn children_ids(&self) -> ChildrenIds {
        ChildrenIds::new()
    }
}
