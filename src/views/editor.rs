// Copyright 2025 the Letterswap Authors
// SPDX-License-Identifier: Apache-2.0

//! Editor view - letter canvas with a floating text entry panel

use masonry::properties::types::{AsUnit, UnitPoint};
use xilem::WidgetView;
use xilem::style::Style;
use xilem::view::{
    ChildAlignment, CrossAxisAlignment, ZStackExt, button, flex_row, label, sized_box,
    text_input, transformed, zstack,
};

use crate::components::letter_canvas;
use crate::data::AppState;
use crate::theme;

const MARGIN: f64 = 16.0;
const INPUT_WIDTH: f64 = 320.0;

/// Canvas filling the window, text entry panel in the bottom-left
pub fn editor_view(state: &mut AppState) -> impl WidgetView<AppState> + use<> {
    zstack((
        letter_canvas(
            state.applied_text.clone(),
            state.revision,
            state.settings.clone(),
            |state: &mut AppState, summary| {
                state.update_summary(summary);
            },
        ),
        transformed(text_entry_panel(state))
            .translate((MARGIN, -MARGIN))
            .alignment(ChildAlignment::SelfAligned(UnitPoint::BOTTOM_LEFT)),
    ))
}

/// Text field, Apply button and status line
fn text_entry_panel(state: &AppState) -> impl WidgetView<AppState> + use<> {
    sized_box(
        flex_row((
            sized_box(
                text_input(state.input.clone(), |state: &mut AppState, value| {
                    state.input = value;
                })
                .placeholder("Type some text"),
            )
            .width(INPUT_WIDTH.px()),
            button(
                label("Apply").text_size(14.0).color(theme::text::PRIMARY),
                |state: &mut AppState| {
                    state.apply_input();
                },
            ),
            label(state.status_line())
                .text_size(14.0)
                .color(theme::text::SECONDARY),
        ))
        .gap(8.px())
        .cross_axis_alignment(CrossAxisAlignment::Center),
    )
    .padding(12.0)
    .background_color(theme::panel::BACKGROUND)
    .border_color(theme::panel::OUTLINE)
    .border_width(1.5)
    .corner_radius(theme::size::PANEL_RADIUS)
}
