/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! duocall-ui library root.
//!
//! Re-exports public modules so that integration tests (under `tests/`) can
//! import components. The binary entry-point lives in `main.rs`.
//!
//! The component modules only exist on wasm32; the session model and
//! constants are portable so their unit tests run off-browser.

#[cfg(target_arch = "wasm32")]
pub mod components;
pub mod constants;
pub mod model;
