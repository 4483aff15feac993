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

use serde::{Deserialize, Serialize};

/// Why a join attempt failed.  Surfaced to the UI so a failed join never
/// leaves the widget claiming success.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum JoinError {
    /// The platform rejected the join request.
    Session(String),
    /// Microphone/camera acquisition failed or was denied.
    DeviceAcquisition(String),
    /// The local tracks could not be announced to the session.
    Publish(String),
}

impl std::fmt::Display for JoinError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            JoinError::Session(reason) => write!(f, "failed to join the session: {reason}"),
            JoinError::DeviceAcquisition(reason) => {
                write!(f, "failed to acquire microphone and camera: {reason}")
            }
            JoinError::Publish(reason) => write!(f, "failed to publish local tracks: {reason}"),
        }
    }
}

impl std::error::Error for JoinError {}
