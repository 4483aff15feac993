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

//! UI-visible session state with controlled mutation entry points.
//!
//! The component delegates every state change to this model and acts on what
//! the entry point returns (e.g. a background mutation returns the effect to
//! hand to the pipeline, but only while the session is joined -- the reactive
//! trigger for re-applies).  Keeping the state transitions here, free of any
//! DOM or SDK types, is what makes the join/publish/unpublish and
//! effect-request scenarios testable off-browser.

use duocall_types::{BackgroundEffect, BackgroundRequest, JoinError, MediaKind};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JoinState {
    NotJoined,
    Joining,
    Joined,
}

pub struct SessionModel {
    join_state: JoinState,
    local_uid: Option<String>,
    last_error: Option<JoinError>,
    permission_error: Option<String>,
    audio_muted: bool,
    video_off: bool,
    background: BackgroundRequest,
    remote: Option<String>,
}

impl SessionModel {
    pub fn new() -> Self {
        Self {
            join_state: JoinState::NotJoined,
            local_uid: None,
            last_error: None,
            permission_error: None,
            audio_muted: false,
            video_off: false,
            background: BackgroundRequest::new(),
            remote: None,
        }
    }

    // === Membership ===

    /// Returns `false` when a join is already in flight or complete.
    pub fn begin_join(&mut self) -> bool {
        if self.join_state != JoinState::NotJoined {
            return false;
        }
        self.join_state = JoinState::Joining;
        self.last_error = None;
        true
    }

    /// Records a successful join.  Returns the background effect to apply if
    /// the user selected one before the join completed.
    pub fn join_succeeded(&mut self, uid: String) -> Option<BackgroundEffect> {
        self.join_state = JoinState::Joined;
        self.local_uid = Some(uid);
        let effect = self.background.effect();
        (!effect.is_none()).then_some(effect)
    }

    /// A failed join never leaves the UI claiming success.
    pub fn join_failed(&mut self, error: JoinError) {
        self.join_state = JoinState::NotJoined;
        self.last_error = Some(error);
    }

    pub fn join_state(&self) -> JoinState {
        self.join_state
    }

    pub fn is_joined(&self) -> bool {
        self.join_state == JoinState::Joined
    }

    pub fn local_uid(&self) -> Option<&str> {
        self.local_uid.as_deref()
    }

    pub fn last_error(&self) -> Option<&JoinError> {
        self.last_error.as_ref()
    }

    /// Records a denied microphone/camera permission from the preflight
    /// request.  Joining is still allowed; the platform will fail device
    /// acquisition and report through [`join_failed`](Self::join_failed).
    pub fn permission_denied(&mut self, reason: String) {
        self.permission_error = Some(reason);
    }

    pub fn permission_error(&self) -> Option<&str> {
        self.permission_error.as_deref()
    }

    // === Toggles ===

    /// Flips the muted flag and returns the new value; the caller applies
    /// the inverse as the audio track's enabled state.
    pub fn toggle_audio_muted(&mut self) -> bool {
        self.audio_muted = !self.audio_muted;
        self.audio_muted
    }

    /// Flips the camera-off flag and returns the new value.  Does not touch
    /// the background request; the effect pipeline only reacts to
    /// effect-request changes.
    pub fn toggle_video_off(&mut self) -> bool {
        self.video_off = !self.video_off;
        self.video_off
    }

    pub fn is_audio_muted(&self) -> bool {
        self.audio_muted
    }

    pub fn is_video_off(&self) -> bool {
        self.video_off
    }

    // === Remote participant ===

    pub fn remote_published(&mut self, uid: String, kind: MediaKind) {
        if kind == MediaKind::Video {
            self.remote = Some(uid);
        }
    }

    /// Clears the remote reference unconditionally; idempotent.
    pub fn remote_unpublished(&mut self) {
        self.remote = None;
    }

    pub fn remote_participant(&self) -> Option<&str> {
        self.remote.as_deref()
    }

    // === Background request ===
    //
    // Each mutation returns the resolved effect to hand to the pipeline,
    // but only while the session is joined.

    pub fn select_color(&mut self, color: &str) -> Option<BackgroundEffect> {
        self.background.select_color(color);
        self.reactive_effect()
    }

    pub fn select_image(&mut self, data_url: String) -> Option<BackgroundEffect> {
        self.background.select_image(data_url);
        self.reactive_effect()
    }

    pub fn toggle_blur(&mut self) -> Option<BackgroundEffect> {
        self.background.toggle_blur();
        self.reactive_effect()
    }

    pub fn background(&self) -> &BackgroundRequest {
        &self.background
    }

    fn reactive_effect(&self) -> Option<BackgroundEffect> {
        self.is_joined().then(|| self.background.effect())
    }
}

impl Default for SessionModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn joined_model() -> SessionModel {
        let mut model = SessionModel::new();
        assert!(model.begin_join());
        assert_eq!(model.join_succeeded("7".into()), None);
        model
    }

    #[test]
    fn join_publish_unpublish_scenario() {
        let mut model = SessionModel::new();
        assert_eq!(model.join_state(), JoinState::NotJoined);
        assert_eq!(model.remote_participant(), None);

        assert!(model.begin_join());
        assert_eq!(model.join_state(), JoinState::Joining);
        // A second click while joining is rejected.
        assert!(!model.begin_join());

        model.join_succeeded("7".into());
        assert!(model.is_joined());
        assert_eq!(model.local_uid(), Some("7"));
        assert_eq!(model.remote_participant(), None);

        model.remote_published("userX".into(), MediaKind::Video);
        assert_eq!(model.remote_participant(), Some("userX"));

        model.remote_unpublished();
        assert_eq!(model.remote_participant(), None);
        // Idempotent: a second unpublish notification changes nothing.
        model.remote_unpublished();
        assert_eq!(model.remote_participant(), None);
    }

    #[test]
    fn audio_only_publish_does_not_set_the_remote_reference() {
        let mut model = joined_model();
        model.remote_published("userX".into(), MediaKind::Audio);
        assert_eq!(model.remote_participant(), None);
    }

    #[test]
    fn failed_join_returns_to_not_joined_with_the_reason() {
        let mut model = SessionModel::new();
        assert!(model.begin_join());
        model.join_failed(JoinError::DeviceAcquisition("denied".into()));

        assert_eq!(model.join_state(), JoinState::NotJoined);
        assert!(model.last_error().is_some());

        // The user can try again, which clears the stale error.
        assert!(model.begin_join());
        assert_eq!(model.last_error(), None);
    }

    #[test]
    fn double_toggles_return_to_the_original_state() {
        let mut model = joined_model();
        assert!(model.toggle_audio_muted());
        assert!(!model.toggle_audio_muted());
        assert!(model.toggle_video_off());
        assert!(!model.toggle_video_off());
        assert!(!model.is_audio_muted());
        assert!(!model.is_video_off());
    }

    #[test]
    fn background_changes_only_react_while_joined() {
        let mut model = SessionModel::new();
        assert_eq!(model.select_color("#ff0000"), None);
        assert!(model.begin_join());
        assert_eq!(model.toggle_blur(), None);

        // The pending selection is applied once the join lands.
        assert_eq!(model.join_succeeded("7".into()), Some(BackgroundEffect::Blur));
        assert_eq!(
            model.select_color("#ff0000"),
            Some(BackgroundEffect::Color("#ff0000".into()))
        );
    }

    #[test]
    fn color_then_image_scenario_clears_the_color() {
        let mut model = joined_model();
        assert_eq!(
            model.select_color("#ff0000"),
            Some(BackgroundEffect::Color("#ff0000".into()))
        );
        assert_eq!(
            model.select_image("data:image/png;base64,AAAA".into()),
            Some(BackgroundEffect::Image("data:image/png;base64,AAAA".into()))
        );
        assert_eq!(model.background().color(), None);
    }

    #[test]
    fn camera_toggle_does_not_touch_the_effect_request() {
        let mut model = joined_model();
        model.toggle_blur();
        let before = model.background().clone();

        model.toggle_video_off();
        assert_eq!(model.background(), &before);
        model.toggle_video_off();
        assert_eq!(model.background(), &before);
    }

    #[test]
    fn denied_permission_is_surfaced_without_blocking_join() {
        let mut model = SessionModel::new();
        model.permission_denied("NotAllowedError".into());
        assert_eq!(model.permission_error(), Some("NotAllowedError"));
        assert!(model.begin_join());
    }

    #[test]
    fn clearing_blur_resolves_to_none_while_joined() {
        let mut model = joined_model();
        assert_eq!(model.toggle_blur(), Some(BackgroundEffect::Blur));
        assert_eq!(model.toggle_blur(), Some(BackgroundEffect::None));
    }
}
