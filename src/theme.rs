// Copyright 2025 the Letterswap Authors
// SPDX-License-Identifier: Apache-2.0

//! Theme colors and constants
//!
//! All colors use hexadecimal format: Color::from_rgb8(0xRR, 0xGG, 0xBB)

use masonry::vello::peniko::Color;

// ============================================================================
// BASE COLORS -- Generic colors for UI, a dark to light gradient by default
// ============================================================================
const BASE_B: Color = Color::from_rgb8(0x20, 0x20, 0x20);
const BASE_C: Color = Color::from_rgb8(0x30, 0x30, 0x30);
const BASE_F: Color = Color::from_rgb8(0x60, 0x60, 0x60);
const BASE_G: Color = Color::from_rgb8(0x70, 0x70, 0x70);
const BASE_I: Color = Color::from_rgb8(0x90, 0x90, 0x90);
const BASE_L: Color = Color::from_rgb8(0xc0, 0xc0, 0xc0);

// ============================================================================
// GLOBAL BACKGROUNDS
// ============================================================================
const APP_BACKGROUND: Color = BASE_B;

// ============================================================================
// UI TEXT AND LABELS
// ============================================================================
const PRIMARY_UI_TEXT: Color = BASE_I;
const SECONDARY_UI_TEXT: Color = BASE_G;

// ============================================================================
// UI PANELS (Toolbar row above the canvas)
// ============================================================================
const PANEL_BACKGROUND: Color = BASE_C;
const PANEL_OUTLINE: Color = BASE_F;

// ============================================================================
// LETTERS
// ============================================================================
const LETTER_TEXT: Color = BASE_L;
const LETTER_SELECTED_TEXT: Color = Color::from_rgb8(0x90, 0xee, 0x90);
const LETTER_SELECTED_BACKGROUND: Color = Color::from_rgb8(0x14, 0x64, 0x14);

// ============================================================================
// SELECTION RECTANGLE (Marquee)
// ============================================================================
const SELECTION_RECT_FILL: Color = Color::from_rgba8(0xff, 0xaa, 0x33, 0x20);
const SELECTION_RECT_STROKE: Color = Color::from_rgb8(0xff, 0xaa, 0x33);

// ============================================================================
// SIZES
// ============================================================================
const PANEL_RADIUS: f64 = 8.0;
const SELECTION_RECT_STROKE_WIDTH: f64 = 1.5;
const LETTER_SELECTED_RADIUS: f64 = 3.0;

// ============================================================================
// PUBLIC API - Don't edit below this line unless you know what you're doing
// ============================================================================

/// Canvas colors
pub mod canvas {
    use super::Color;
    pub const BACKGROUND: Color = super::APP_BACKGROUND;
}

/// UI text colors
pub mod text {
    use super::Color;
    pub const PRIMARY: Color = super::PRIMARY_UI_TEXT;
    pub const SECONDARY: Color = super::SECONDARY_UI_TEXT;
}

/// Panel colors
pub mod panel {
    use super::Color;
    pub const BACKGROUND: Color = super::PANEL_BACKGROUND;
    pub const OUTLINE: Color = super::PANEL_OUTLINE;
}

/// Letter colors
pub mod letter {
    use super::Color;
    pub const TEXT: Color = super::LETTER_TEXT;
    pub const SELECTED_TEXT: Color = super::LETTER_SELECTED_TEXT;
    pub const SELECTED_BACKGROUND: Color = super::LETTER_SELECTED_BACKGROUND;
}

/// Colors for selection rectangle (marquee)
pub mod selection {
    use super::Color;
    pub const RECT_FILL: Color = super::SELECTION_RECT_FILL;
    pub const RECT_STROKE: Color = super::SELECTION_RECT_STROKE;
}

/// Sizes and radii
pub mod size {
    pub const PANEL_RADIUS: f64 = super::PANEL_RADIUS;
    pub const SELECTION_RECT_STROKE_WIDTH: f64 = super::SELECTION_RECT_STROKE_WIDTH;
    pub const LETTER_SELECTED_RADIUS: f64 = super::LETTER_SELECTED_RADIUS;
}
