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

use duocall_types::{JoinError, MediaKind};

pub enum Msg {
    // UI actions
    Join,
    ToggleMicrophone,
    ToggleCamera,
    ToggleBlur,
    SelectColor(String),
    ImageUploaded(String),

    // Client outcomes
    Joined(String),
    JoinFailed(JoinError),
    PermissionDenied(String),

    // Platform notifications
    RemotePublished((String, MediaKind)),
    RemoteUnpublished(String),
}
