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

//! Framework-agnostic event types for the session client.
//!
//! These events are emitted via the event bus and can be subscribed to by any
//! frontend framework in addition to the callbacks on
//! [`SessionClientOptions`](crate::session::SessionClientOptions).

use duocall_types::{BackgroundEffect, JoinError, MediaKind};

/// Events emitted by the session client.
#[derive(Clone, Debug)]
pub enum SessionEvent {
    // === Membership events ===
    /// The local participant joined the session; carries the uid the platform
    /// assigned.
    Joined(String),

    /// A join attempt failed; membership stays false.
    JoinFailed(JoinError),

    // === Remote participant events ===
    /// The remote participant started publishing the given media kind.
    RemotePublished {
        participant: String,
        kind: MediaKind,
    },

    /// The remote participant stopped publishing; the remote reference is
    /// cleared.
    RemoteUnpublished(String),

    // === Device events ===
    /// Microphone/camera permission was granted.
    PermissionGranted,

    /// Microphone/camera permission was denied.
    PermissionDenied(String),

    // === Background effect events ===
    /// A background effect finished applying and its processor is attached
    /// (or, for `BackgroundEffect::None`, detached).
    BackgroundApplied(BackgroundEffect),

    /// Applying a background effect failed; the pipeline reverted to raw
    /// video.
    BackgroundFailed(String),
}
