// Copyright 2025 the Letterswap Authors
// SPDX-License-Identifier: Apache-2.0

//! Application state and data structures

use crate::components::CanvasSummary;
use crate::settings::Settings;
use std::sync::Arc;
use xilem::WindowId;

/// Main application state
pub struct AppState {
    /// Contents of the text field
    pub input: String,

    /// Text currently laid out on the canvas
    pub applied_text: Arc<str>,

    /// Bumped on every apply so the canvas knows to lay out again
    pub revision: u64,

    /// Settings loaded at startup
    pub settings: Settings,

    /// Letter and selection counts reported by the canvas
    pub summary: CanvasSummary,

    /// Whether the app should keep running
    pub running: bool,

    /// Main window ID (stable across rebuilds to prevent window
    /// recreation)
    pub main_window_id: WindowId,
}

impl AppState {
    /// Create a new application state with nothing applied
    pub fn new(settings: Settings) -> Self {
        Self {
            input: String::new(),
            applied_text: Arc::from(""),
            revision: 0,
            settings,
            summary: CanvasSummary::default(),
            running: true,
            main_window_id: WindowId::next(),
        }
    }

    /// Lay the text field contents out on the canvas, replacing
    /// whatever letters were there
    pub fn apply_input(&mut self) {
        self.applied_text = Arc::from(self.input.as_str());
        self.revision += 1;
        self.summary = CanvasSummary {
            glyph_count: self.applied_text.chars().count(),
            selected_count: 0,
        };
        tracing::info!(
            "Applied {:?} ({} letters, revision {})",
            self.applied_text,
            self.summary.glyph_count,
            self.revision
        );
    }

    /// Apply `text` as if it had been typed and submitted
    pub fn apply_text(&mut self, text: &str) {
        self.input = text.to_string();
        self.apply_input();
    }

    /// Record counts reported by the canvas
    pub fn update_summary(&mut self, summary: CanvasSummary) {
        self.summary = summary;
    }

    /// One-line status shown next to the Apply button
    pub fn status_line(&self) -> String {
        let letters = match self.summary.glyph_count {
            1 => "1 letter".to_string(),
            n => format!("{} letters", n),
        };
        format!("{}, {} selected", letters, self.summary.selected_count)
    }
}

/// Implement the Xilem AppState trait
impl xilem::AppState for AppState {
    fn keep_running(&self) -> bool {
        self.running
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_has_nothing_applied() {
        let state = AppState::new(Settings::default());
        assert_eq!(&*state.applied_text, "");
        assert_eq!(state.revision, 0);
        assert!(state.running);
        assert_eq!(state.status_line(), "0 letters, 0 selected");
    }

    #[test]
    fn apply_input_bumps_revision_and_resets_selection() {
        let mut state = AppState::new(Settings::default());
        state.summary.selected_count = 2;
        state.input = "héllo".to_string();
        state.apply_input();

        assert_eq!(&*state.applied_text, "héllo");
        assert_eq!(state.revision, 1);
        assert_eq!(state.summary.glyph_count, 5);
        assert_eq!(state.summary.selected_count, 0);
    }

    #[test]
    fn reapplying_same_text_still_bumps_revision() {
        let mut state = AppState::new(Settings::default());
        state.apply_text("ab");
        state.apply_text("ab");
        assert_eq!(state.revision, 2);
        assert_eq!(state.input, "ab");
    }

    #[test]
    fn closing_the_window_stops_the_app() {
        use xilem::AppState as _;

        let mut state = AppState::new(Settings::default());
        assert!(state.keep_running());
        state.running = false;
        assert!(!state.keep_running());
    }

    #[test]
    fn status_line_reflects_canvas_summary() {
        let mut state = AppState::new(Settings::default());
        state.update_summary(CanvasSummary {
            glyph_count: 1,
            selected_count: 1,
        });
        assert_eq!(state.status_line(), "1 letter, 1 selected");

        state.update_summary(CanvasSummary {
            glyph_count: 4,
            selected_count: 3,
        });
        assert_eq!(state.status_line(), "4 letters, 3 selected");
    }
}
