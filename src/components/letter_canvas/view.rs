// Copyright 2025 the Letterswap Authors
// SPDX-License-Identifier: Apache-2.0

//! Xilem view wrapper for LetterCanvasWidget

use super::{CanvasSummary, LetterCanvasWidget};
use crate::settings::Settings;
use std::marker::PhantomData;
use std::sync::Arc;
use xilem::core::{MessageContext, MessageResult, Mut, View, ViewMarker};
use xilem::{Pod, ViewCtx};

/// Create a letter canvas showing `text`
///
/// The text is laid out again only when `revision` changes, so rebuilds
/// triggered by selection updates leave dragged letters where they are.
/// The callback receives the letter and selection counts after each
/// gesture.
pub fn letter_canvas<State, F>(
    text: Arc<str>,
    revision: u64,
    settings: Settings,
    on_change: F,
) -> LetterCanvasView<State, F>
where
    F: Fn(&mut State, CanvasSummary),
{
    LetterCanvasView {
        text,
        revision,
        settings,
        on_change,
        phantom: PhantomData,
    }
}

/// The Xilem View for LetterCanvasWidget
#[must_use = "View values do nothing unless provided to Xilem."]
pub struct LetterCanvasView<State, F> {
    text: Arc<str>,
    revision: u64,
    settings: Settings,
    on_change: F,
    phantom: PhantomData<fn() -> State>,
}

impl<State, F> ViewMarker for LetterCanvasView<State, F> {}

impl<State: 'static, F: Fn(&mut State, CanvasSummary) + 'static> View<State, (), ViewCtx>
    for LetterCanvasView<State, F>
{
    type Element = Pod<LetterCanvasWidget>;
    type ViewState = ();

    fn build(&self, ctx: &mut ViewCtx, _app_state: &mut State) -> (Self::Element, Self::ViewState) {
        let mut widget = LetterCanvasWidget::new(&self.settings);
        widget.apply_text(&self.text);
        let pod = ctx.create_pod(widget);
        ctx.record_action(pod.new_widget.id());
        (pod, ())
    }

    fn rebuild(
        &self,
        prev: &Self,
        _view_state: &mut Self::ViewState,
        _ctx: &mut ViewCtx,
        mut element: Mut<'_, Self::Element>,
        _app_state: &mut State,
    ) {
        if self.revision != prev.revision {
            tracing::debug!(
                "[LetterCanvasView::rebuild] Applying text revision {}",
                self.revision
            );
            let mut widget = element.downcast::<LetterCanvasWidget>();
            widget.widget.apply_text(&self.text);
            widget.ctx.request_render();
        }
    }

    fn teardown(
        &self,
        _view_state: &mut Self::ViewState,
        _ctx: &mut ViewCtx,
        _element: Mut<'_, Self::Element>,
    ) {
    }

    fn message(
        &self,
        _view_state: &mut Self::ViewState,
        message: &mut MessageContext,
        _element: Mut<'_, Self::Element>,
        app_state: &mut State,
    ) -> MessageResult<()> {
        match message.take_message::<CanvasSummary>() {
            Some(summary) => {
                (self.on_change)(app_state, *summary);
                MessageResult::Action(())
            }
            None => MessageResult::Stale,
        }
    }
}
