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
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

//! Browser-side client for a one-to-one video chat session.
//!
//! This crate wraps the hosted communication platform's SDK (loaded globally
//! by the page) behind a small Rust surface: joining a session, publishing
//! the local microphone and camera, subscribing to the single remote
//! participant, and managing the replaceable virtual-background processor on
//! the outgoing video track.  The media pipeline itself -- capture, encode,
//! transport, decode, render, segmentation -- belongs to the platform; this
//! crate only sequences calls into it.
//!
//! The crate makes no assumptions about the UI beyond the DOM ids of the two
//! viewport elements (local and remote) handed in through
//! [`SessionClientOptions`].
//!
//! # Outline of usage
//!
//! ```ignore
//! let options = SessionClientOptions {...}; // ids, credentials, callbacks
//! let client = SessionClient::new(options);
//!
//! client.join();                       // async; on_joined / on_join_failed fire
//! client.set_microphone_enabled(false);
//! client.set_camera_enabled(false);
//! client.apply_background(BackgroundEffect::Blur);
//! ```
//!
//! Platform notifications (remote publish/unpublish) arrive through the
//! callbacks in the options and are also mirrored on the global
//! [event bus](event_bus::subscribe_session_events) for framework-agnostic
//! consumers.

pub mod constants;
pub mod effects;
pub mod event_bus;
pub mod events;

#[cfg(target_arch = "wasm32")]
pub mod media_devices;
#[cfg(target_arch = "wasm32")]
pub mod rtc;
#[cfg(target_arch = "wasm32")]
pub mod session;

pub use duocall_types::{BackgroundEffect, BackgroundRequest, JoinError, MediaKind};
pub use effects::{BackgroundEffectManager, EffectBackend, EffectProcessor};
pub use event_bus::{emit_session_event, subscribe_session_events};
pub use events::SessionEvent;

#[cfg(target_arch = "wasm32")]
pub use media_devices::MediaDeviceAccess;
#[cfg(target_arch = "wasm32")]
pub use session::{SessionClient, SessionClientOptions};
