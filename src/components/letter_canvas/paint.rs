// Copyright 2025 the Letterswap Authors
// SPDX-License-Identifier: Apache-2.0

//! Paint helper methods for LetterCanvasWidget

use super::LetterCanvasWidget;
use crate::theme;
use kurbo::{Affine, Rect, RoundedRect, Stroke};
use masonry::core::render_text;
use masonry::kurbo::Size;
use masonry::util::fill_color;
use masonry::vello::Scene;
use masonry::vello::peniko::{Brush, Fill};

impl LetterCanvasWidget {
    pub(super) fn paint_background(&self, scene: &mut Scene, canvas_size: Size) {
        let bg_rect = canvas_size.to_rect();
        fill_color(scene, &bg_rect, theme::canvas::BACKGROUND);
    }

    /// Letters in collection order, so later letters sit on top
    pub(super) fn paint_letters(&self, scene: &mut Scene) {
        let normal = vec![Brush::Solid(theme::letter::TEXT)];
        let selected = vec![Brush::Solid(theme::letter::SELECTED_TEXT)];

        for visual in self.controller.renderer().visuals() {
            if visual.selected {
                let highlight = RoundedRect::from_rect(
                    Rect::from_origin_size(visual.origin, visual.size),
                    theme::size::LETTER_SELECTED_RADIUS,
                );
                scene.fill(
                    Fill::NonZero,
                    Affine::IDENTITY,
                    &Brush::Solid(theme::letter::SELECTED_BACKGROUND),
                    None,
                    &highlight,
                );
            }

            let brushes = if visual.selected { &selected } else { &normal };
            render_text(
                scene,
                Affine::translate((visual.origin.x, visual.origin.y)),
                &visual.layout,
                brushes,
                false,
            );
        }
    }

    pub(super) fn paint_selection_rect(&self, scene: &mut Scene) {
        let Some(rect) = self.controller.renderer().selection_rect() else {
            return;
        };

        scene.fill(
            Fill::NonZero,
            Affine::IDENTITY,
            &Brush::Solid(theme::selection::RECT_FILL),
            None,
            &rect,
        );
        scene.stroke(
            &Stroke::new(theme::size::SELECTION_RECT_STROKE_WIDTH),
            Affine::IDENTITY,
            &Brush::Solid(theme::selection::RECT_STROKE),
            None,
            &rect,
        );
    }
}
