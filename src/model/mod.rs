// Copyright 2025 the Letterswap Authors
// SPDX-License-Identifier: Apache-2.0

//! Letter data model

pub mod glyph;
pub mod glyph_id;

pub use glyph::Glyph;
pub use glyph_id::GlyphId;
