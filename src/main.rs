// Copyright 2025 the Letterswap Authors
// SPDX-License-Identifier: Apache-2.0

//! Letterswap: type some text, then select, drag and swap its letters

use xilem::{EventLoop, winit::error::EventLoopError};

fn main() -> Result<(), EventLoopError> {
    letterswap::run(EventLoop::with_user_event())
}
