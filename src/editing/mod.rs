// Copyright 2025 the Letterswap Authors
// SPDX-License-Identifier: Apache-2.0

//! Selection, drag and swap interaction

pub mod controller;
pub mod drag;
pub mod input;
pub mod selection;

pub use controller::{DropOutcome, Interaction, InteractionController, InteractionKind};
pub use drag::DragSession;
pub use input::PointerInput;
pub use selection::SelectionRect;
