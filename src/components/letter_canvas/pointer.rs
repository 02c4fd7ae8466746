// Copyright 2025 the Letterswap Authors
// SPDX-License-Identifier: Apache-2.0

//! Pointer event handlers for LetterCanvasWidget

use super::{CanvasSummary, LetterCanvasWidget};
use crate::editing::{InteractionKind, PointerInput};
use crate::settings::SelectModifier;
use masonry::core::{EventCtx, PointerState};

impl LetterCanvasWidget {
    // ============================================================================
    // POINTER EVENT HANDLERS
    // ============================================================================

    /// Handle pointer down event
    pub(super) fn handle_pointer_down(&mut self, ctx: &mut EventCtx<'_>, state: &PointerState) {
        ctx.capture_pointer();

        let pos = ctx.local_position(state.position);
        let modifier = modifier_held(self.modifier, state);
        let target = self.controller.glyph_at(pos);

        tracing::debug!(
            "[LetterCanvasWidget] Down at {:?}, target: {:?}, modifier: {}",
            pos,
            target,
            modifier
        );

        self.controller.dispatch(PointerInput::Down {
            pos,
            modifier,
            target,
        });
        self.emit_summary(ctx);
        ctx.request_render();
    }

    /// Handle pointer move event
    pub(super) fn handle_pointer_move(&mut self, ctx: &mut EventCtx<'_>, current: &PointerState) {
        if self.controller.state() == InteractionKind::Idle {
            return;
        }

        let pos = ctx.local_position(current.position);
        self.controller.dispatch(PointerInput::Move { pos });
        ctx.request_render();
    }

    /// Handle pointer up event
    pub(super) fn handle_pointer_up(&mut self, ctx: &mut EventCtx<'_>, state: &PointerState) {
        let pos = ctx.local_position(state.position);
        if let Some(outcome) = self.controller.dispatch(PointerInput::Up { pos }) {
            tracing::debug!("[LetterCanvasWidget] Drop outcome: {:?}", outcome);
            self.emit_summary(ctx);
        }

        ctx.release_pointer();
        ctx.request_render();
    }

    /// Handle pointer cancel event
    pub(super) fn handle_pointer_cancel(&mut self, ctx: &mut EventCtx<'_>) {
        self.controller.dispatch(PointerInput::Cancel);
        self.emit_summary(ctx);
        ctx.request_render();
    }

    fn emit_summary(&self, ctx: &mut EventCtx<'_>) {
        ctx.submit_action::<CanvasSummary>(self.summary());
    }
}

/// Whether the configured select modifier is held
fn modifier_held(modifier: SelectModifier, state: &PointerState) -> bool {
    match modifier {
        SelectModifier::Ctrl => state.modifiers.ctrl(),
        SelectModifier::Meta => state.modifiers.meta(),
        SelectModifier::Alt => state.modifiers.alt(),
        SelectModifier::Shift => state.modifiers.shift(),
    }
}
