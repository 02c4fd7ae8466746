// Copyright 2025 the Letterswap Authors
// SPDX-License-Identifier: Apache-2.0

//! Interaction controller - owns the letters and turns pointer gestures
//! into selection, drag and swap edits

mod hit_testing;

pub use hit_testing::{contains_point, overlaps};

use super::drag::DragSession;
use super::input::PointerInput;
use super::selection::SelectionRect;
use crate::model::{Glyph, GlyphId};
use crate::render::GlyphRenderer;
use crate::settings;
use kurbo::Point;

/// What the pointer is currently doing
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Interaction {
    /// No button held
    #[default]
    Idle,
    /// Moving one or more glyphs
    Dragging(DragSession),
    /// Drawing a rubber-band rectangle over empty canvas
    RubberBanding(SelectionRect),
}

/// Discriminant of [`Interaction`], for callers that only need the state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionKind {
    Idle,
    Dragging,
    RubberBanding,
}

/// Result of releasing the pointer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// A single dragged glyph was dropped onto `target` and they traded
    /// places
    Swapped { dragged: GlyphId, target: GlyphId },
    /// A single glyph was dropped on free space
    Moved(GlyphId),
    /// Several glyphs were moved together
    GroupMoved(usize),
    /// A rubber band finished; `added` glyphs became newly selected
    Selected { added: usize },
    /// Nothing was in progress, or the drag set was empty
    Nothing,
}

/// Tracks the glyph collection and mediates pointer gestures against it
pub struct InteractionController<R: GlyphRenderer> {
    renderer: R,

    /// All glyphs in collection order; `glyphs[i].id.index() == i`
    glyphs: Vec<Glyph<R::Handle>>,

    interaction: Interaction,

    /// Top-left corner of the first glyph when text is applied
    text_origin: Point,
}

impl<R: GlyphRenderer> InteractionController<R> {
    /// Create a controller that lays text out from the default margin
    pub fn new(renderer: R) -> Self {
        Self::with_text_origin(
            renderer,
            Point::new(settings::layout::LEFT_MARGIN, settings::layout::TOP),
        )
    }

    /// Create a controller that lays text out from `text_origin`
    pub fn with_text_origin(renderer: R, text_origin: Point) -> Self {
        Self {
            renderer,
            glyphs: Vec::new(),
            interaction: Interaction::Idle,
            text_origin,
        }
    }

    // ============================================================================
    // TEXT APPLICATION
    // ============================================================================

    /// Replace every glyph with one per character of `text`
    ///
    /// Characters are laid out left to right on a single line, each one
    /// advanced by the measured width of the one before it.
    pub fn apply_text(&mut self, text: &str) {
        self.cancel();

        for glyph in self.glyphs.drain(..) {
            self.renderer.remove(glyph.handle);
        }

        let mut x = self.text_origin.x;
        for (index, ch) in text.chars().enumerate() {
            let handle = self.renderer.create_glyph(ch);
            let origin = Point::new(x, self.text_origin.y);
            self.renderer.set_position(&handle, origin);
            self.renderer.set_selected_style(&handle, false);
            x += self.renderer.measure(&handle).width;
            self.glyphs
                .push(Glyph::new(GlyphId::new(index), ch, origin, handle));
        }

        tracing::info!("Applied text with {} glyphs", self.glyphs.len());
    }

    // ============================================================================
    // EVENT DISPATCH
    // ============================================================================

    /// Route one pointer event
    ///
    /// Returns the drop outcome for `Up` events that ended a gesture.
    pub fn dispatch(&mut self, input: PointerInput) -> Option<DropOutcome> {
        match input {
            PointerInput::Down {
                pos,
                modifier,
                target: Some(id),
            } => {
                self.pointer_down_on_glyph(id, pos, modifier);
                None
            }
            PointerInput::Down {
                pos, target: None, ..
            } => {
                self.pointer_down_on_background(pos);
                None
            }
            PointerInput::Move { pos } => {
                self.pointer_move(pos);
                None
            }
            PointerInput::Up { pos } => match self.interaction {
                Interaction::Idle => None,
                _ => Some(self.pointer_up(pos)),
            },
            PointerInput::Cancel => {
                self.cancel();
                None
            }
        }
    }

    /// Consume an ordered queue of pointer events
    pub fn process(&mut self, inputs: impl IntoIterator<Item = PointerInput>) -> Vec<DropOutcome> {
        inputs
            .into_iter()
            .filter_map(|input| self.dispatch(input))
            .collect()
    }

    // ============================================================================
    // POINTER HANDLERS
    // ============================================================================

    /// Press on a glyph: update the selection and start dragging it
    ///
    /// With the modifier held the target's selection is toggled. Without
    /// it, an unselected target becomes the only selection, while an
    /// already selected target leaves the selection alone so an existing
    /// multi-selection can be dragged as a group.
    pub fn pointer_down_on_glyph(&mut self, id: GlyphId, pos: Point, modifier: bool) {
        if id.index() >= self.glyphs.len() {
            tracing::debug!("Pointer down on unknown glyph {}, treating as background", id);
            self.pointer_down_on_background(pos);
            return;
        }
        self.cancel();

        if modifier {
            let glyph = &mut self.glyphs[id.index()];
            glyph.selected = !glyph.selected;
        } else if !self.glyphs[id.index()].selected {
            for glyph in &mut self.glyphs {
                glyph.selected = glyph.id == id;
            }
        }

        for glyph in &mut self.glyphs {
            if glyph.selected {
                glyph.anchor = glyph.origin;
            }
        }
        let drag = DragSession::begin(
            pos,
            self.glyphs
                .iter()
                .filter(|glyph| glyph.selected)
                .map(|glyph| (glyph.id, glyph.origin)),
        );

        tracing::debug!(
            "Drag started on {} with {} glyphs (group: {})",
            id,
            drag.len(),
            drag.is_group()
        );

        self.interaction = Interaction::Dragging(drag);
        self.refresh_styles();
    }

    /// Press on empty canvas: clear the selection and start a rubber band
    pub fn pointer_down_on_background(&mut self, pos: Point) {
        self.cancel();

        for glyph in &mut self.glyphs {
            glyph.selected = false;
        }
        self.refresh_styles();

        let rect = SelectionRect::new(pos);
        self.renderer.show_selection_rect(rect.bounds());
        self.interaction = Interaction::RubberBanding(rect);
    }

    /// Pointer moved while a button may be held
    pub fn pointer_move(&mut self, pos: Point) {
        match &mut self.interaction {
            Interaction::Idle => {}
            Interaction::Dragging(drag) => {
                for (id, origin) in drag.origins_at(pos) {
                    let glyph = &mut self.glyphs[id.index()];
                    glyph.origin = origin;
                    self.renderer.set_position(&glyph.handle, glyph.origin);
                }
            }
            Interaction::RubberBanding(rect) => {
                rect.update(pos);
                self.renderer.show_selection_rect(rect.bounds());
            }
        }
    }

    /// Release: resolve a drop or finish a rubber band
    pub fn pointer_up(&mut self, pos: Point) -> DropOutcome {
        let outcome = match std::mem::take(&mut self.interaction) {
            Interaction::Idle => DropOutcome::Nothing,
            Interaction::Dragging(drag) => self.resolve_drop(&drag, pos),
            Interaction::RubberBanding(mut rect) => {
                rect.update(pos);
                let added = self.select_in_rect(&rect);
                self.renderer.hide_selection_rect();
                DropOutcome::Selected { added }
            }
        };
        self.refresh_styles();
        tracing::debug!("Pointer up at {:?}: {:?}", pos, outcome);
        outcome
    }

    /// Abandon the current gesture without committing it
    ///
    /// Dragged glyphs stay where they are and nothing is swapped; a rubber
    /// band is discarded without selecting anything.
    pub fn cancel(&mut self) {
        match std::mem::take(&mut self.interaction) {
            Interaction::Idle => {}
            Interaction::Dragging(drag) => {
                tracing::debug!("Drag of {} glyphs cancelled", drag.len());
            }
            Interaction::RubberBanding(_) => {
                self.renderer.hide_selection_rect();
                tracing::debug!("Rubber band cancelled");
            }
        }
    }

    // ============================================================================
    // QUERIES
    // ============================================================================

    /// All glyphs in collection order
    pub fn glyphs(&self) -> &[Glyph<R::Handle>] {
        &self.glyphs
    }

    pub fn glyph(&self, id: GlyphId) -> Option<&Glyph<R::Handle>> {
        self.glyphs.get(id.index())
    }

    /// IDs of selected glyphs in collection order
    pub fn selected_ids(&self) -> Vec<GlyphId> {
        self.glyphs
            .iter()
            .filter(|glyph| glyph.selected)
            .map(|glyph| glyph.id)
            .collect()
    }

    pub fn interaction(&self) -> &Interaction {
        &self.interaction
    }

    pub fn state(&self) -> InteractionKind {
        match self.interaction {
            Interaction::Idle => InteractionKind::Idle,
            Interaction::Dragging(_) => InteractionKind::Dragging,
            Interaction::RubberBanding(_) => InteractionKind::RubberBanding,
        }
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    // ===== PRIVATE HELPERS =====

    /// Finish a drag; a lone glyph dropped onto another trades places
    /// with it
    fn resolve_drop(&mut self, drag: &DragSession, pos: Point) -> DropOutcome {
        if drag.is_group() {
            return DropOutcome::GroupMoved(drag.len());
        }
        let Some(dragged) = drag.single() else {
            return DropOutcome::Nothing;
        };
        let Some(target) = self.swap_target(dragged, pos) else {
            return DropOutcome::Moved(dragged);
        };

        // The target takes the dragged glyph's starting spot; the dragged
        // glyph takes wherever the target sits now.
        let target_origin = self.glyphs[target.index()].origin;
        let dragged_anchor = self.glyphs[dragged.index()].anchor;

        let target_glyph = &mut self.glyphs[target.index()];
        target_glyph.origin = dragged_anchor;
        self.renderer
            .set_position(&target_glyph.handle, target_glyph.origin);

        let dragged_glyph = &mut self.glyphs[dragged.index()];
        dragged_glyph.origin = target_origin;
        self.renderer
            .set_position(&dragged_glyph.handle, dragged_glyph.origin);

        tracing::info!("Swapped glyph {} with {}", dragged, target);
        DropOutcome::Swapped { dragged, target }
    }

    /// Add every glyph overlapping the rectangle to the selection
    fn select_in_rect(&mut self, rect: &SelectionRect) -> usize {
        let bounds = rect.bounds();
        let mut added = 0;
        for glyph in &mut self.glyphs {
            let size = self.renderer.measure(&glyph.handle);
            if overlaps(glyph.bounds(size), bounds) && !glyph.selected {
                glyph.selected = true;
                added += 1;
            }
        }
        added
    }

    fn refresh_styles(&mut self) {
        for glyph in &self.glyphs {
            self.renderer
                .set_selected_style(&glyph.handle, glyph.selected);
        }
    }
}
