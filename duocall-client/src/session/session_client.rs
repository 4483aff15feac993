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

use crate::effects::virtual_background::VirtualBackgroundBackend;
use crate::effects::{run_effect_worker, EffectHandle};
use crate::event_bus::emit_session_event;
use crate::events::SessionEvent;
use crate::rtc::{
    self, CameraVideoTrack, MicrophoneAudioTrack, RemoteParticipant, RtcClient,
};
use duocall_types::{BackgroundEffect, JoinError, MediaKind};
use js_sys::Array;
use log::{debug, error, warn};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use yew::prelude::Callback;

/// Options struct for constructing a client via [SessionClient::new(options)][SessionClient::new]
#[derive(Clone, Debug, PartialEq)]
pub struct SessionClientOptions {
    /// Application id registered with the platform.  See
    /// [`constants::APP_ID`](crate::constants::APP_ID) for the placeholder
    /// default.
    pub app_id: String,

    /// Name of the session channel both participants join.
    pub channel: String,

    /// Session token, or `None` to join unauthenticated (placeholder setup
    /// only).
    pub token: Option<String>,

    /// DOM id of the element the local camera renders into.
    pub local_container_id: String,

    /// DOM id of the element the remote participant's video renders into.
    pub remote_container_id: String,

    /// Callback will be called as `callback(uid)` once the local participant
    /// has joined and published.
    pub on_joined: Callback<String>,

    /// Callback will be called as `callback(error)` if any step of the join
    /// sequence fails.  Membership stays false.
    pub on_join_failed: Callback<JoinError>,

    /// Callback will be called as `callback((participant_uid, kind))` when
    /// the remote participant starts publishing.
    pub on_remote_published: Callback<(String, MediaKind)>,

    /// Callback will be called as `callback(participant_uid)` when the
    /// remote participant stops publishing.
    pub on_remote_unpublished: Callback<String>,
}

struct Inner {
    client: RtcClient,
    local_audio: Option<MicrophoneAudioTrack>,
    local_video: Option<CameraVideoTrack>,
    remote: Option<RemoteParticipant>,
    effects: Option<EffectHandle>,
    joined: bool,
}

/// The client struct for a one-to-one video session.
///
/// Construct with [new(options)][Self::new], then call [join()][Self::join]
/// when the user asks to enter the call.  Once joined, the local microphone
/// and camera are published and the remote participant's video is rendered
/// as soon as the platform announces it.
#[derive(Clone)]
pub struct SessionClient {
    options: SessionClientOptions,
    inner: Rc<RefCell<Inner>>,
}

impl PartialEq for SessionClient {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner) && self.options == other.options
    }
}

impl SessionClient {
    /// Constructor for the client struct.  Registers the platform's
    /// publish/unpublish notification handlers immediately; they stay
    /// registered for the lifetime of the page.
    pub fn new(options: SessionClientOptions) -> Self {
        let inner = Rc::new(RefCell::new(Inner {
            client: rtc::create_rtc_client(),
            local_audio: None,
            local_video: None,
            remote: None,
            effects: None,
            joined: false,
        }));
        let client = Self { options, inner };
        client.register_notifications();
        client
    }

    /// Join the session and publish local capture.
    ///
    /// Returns immediately; the async sequence runs on the event loop and
    /// reports through [`on_joined`](SessionClientOptions::on_joined) /
    /// [`on_join_failed`](SessionClientOptions::on_join_failed).  Ignored if
    /// already joined.  There is no retry and no rollback of a
    /// half-completed join.
    pub fn join(&self) {
        if self.is_joined() {
            debug!("join ignored: already joined");
            return;
        }
        let inner = Rc::clone(&self.inner);
        let options = self.options.clone();
        spawn_local(async move {
            match join_session(&inner, &options).await {
                Ok(uid) => {
                    emit_session_event(SessionEvent::Joined(uid.clone()));
                    options.on_joined.emit(uid);
                }
                Err(e) => {
                    error!("{e}");
                    emit_session_event(SessionEvent::JoinFailed(e.clone()));
                    options.on_join_failed.emit(e);
                }
            }
        });
    }

    /// Returns `true` once the join sequence has completed.
    pub fn is_joined(&self) -> bool {
        match self.inner.try_borrow() {
            Ok(inner) => inner.joined,
            Err(_) => false,
        }
    }

    /// Uid of the remote participant currently publishing video, if any.
    pub fn remote_participant(&self) -> Option<String> {
        match self.inner.try_borrow() {
            Ok(inner) => inner.remote.as_ref().map(participant_uid),
            Err(_) => None,
        }
    }

    /// Enable/disable the local microphone.  No-op before the audio track
    /// exists.
    pub fn set_microphone_enabled(&self, enabled: bool) {
        let track = match self.inner.try_borrow() {
            Ok(inner) => inner.local_audio.clone(),
            Err(_) => None,
        };
        let Some(track) = track else { return };
        spawn_local(async move {
            if let Err(e) = JsFuture::from(track.set_enabled(enabled)).await {
                error!("failed to set microphone enabled={enabled}: {e:?}");
            }
        });
    }

    /// Enable/disable the local camera.  No-op before the video track
    /// exists; may suspend briefly while the capture device reconfigures.
    pub fn set_camera_enabled(&self, enabled: bool) {
        let track = match self.inner.try_borrow() {
            Ok(inner) => inner.local_video.clone(),
            Err(_) => None,
        };
        let Some(track) = track else { return };
        spawn_local(async move {
            if let Err(e) = JsFuture::from(track.set_enabled(enabled)).await {
                error!("failed to set camera enabled={enabled}: {e:?}");
            }
        });
    }

    /// Hand the resolved background request to the effect worker.  Requests
    /// made before the session is joined are dropped; the UI re-applies the
    /// current request on join.
    pub fn apply_background(&self, effect: BackgroundEffect) {
        let handle = match self.inner.try_borrow() {
            Ok(inner) => inner.effects.clone(),
            Err(_) => None,
        };
        match handle {
            Some(handle) => handle.request(effect),
            None => debug!("background request before join; ignoring"),
        }
    }

    fn register_notifications(&self) {
        let client = self.inner.borrow().client.clone();

        let on_published = Closure::wrap(Box::new({
            let inner = Rc::clone(&self.inner);
            let options = self.options.clone();
            move |participant: JsValue, media_kind: JsValue| {
                let participant = participant.unchecked_into::<RemoteParticipant>();
                let kind = media_kind
                    .as_string()
                    .and_then(|k| k.parse::<MediaKind>().ok());
                let Some(kind) = kind else {
                    warn!("publish notification with unrecognized media kind {media_kind:?}");
                    return;
                };
                handle_remote_published(
                    Rc::clone(&inner),
                    options.clone(),
                    participant,
                    kind,
                );
            }
        }) as Box<dyn FnMut(JsValue, JsValue)>);
        client.on("user-published", on_published.as_ref().unchecked_ref());
        on_published.forget();

        let on_unpublished = Closure::wrap(Box::new({
            let inner = Rc::clone(&self.inner);
            let options = self.options.clone();
            move |participant: JsValue| {
                let participant = participant.unchecked_into::<RemoteParticipant>();
                let uid = participant_uid(&participant);
                // Cleared unconditionally: the one-to-one scope guarantees at
                // most one remote participant.
                if let Ok(mut inner) = inner.try_borrow_mut() {
                    inner.remote = None;
                }
                emit_session_event(SessionEvent::RemoteUnpublished(uid.clone()));
                options.on_remote_unpublished.emit(uid);
            }
        }) as Box<dyn FnMut(JsValue)>);
        client.on("user-unpublished", on_unpublished.as_ref().unchecked_ref());
        on_unpublished.forget();
    }
}

/// The join sequence: membership, capture, local preview, publish, effect
/// worker.  Each step maps its platform error into the [`JoinError`] arm the
/// UI surfaces.
async fn join_session(
    inner: &Rc<RefCell<Inner>>,
    options: &SessionClientOptions,
) -> Result<String, JoinError> {
    let client = inner.borrow().client.clone();

    let uid = JsFuture::from(client.join(
        &options.app_id,
        &options.channel,
        options.token.as_deref(),
        &JsValue::NULL,
    ))
    .await
    .map_err(|e| JoinError::Session(format!("{e:?}")))?;

    let tracks = JsFuture::from(rtc::create_microphone_and_camera_tracks())
        .await
        .map_err(|e| JoinError::DeviceAcquisition(format!("{e:?}")))?;
    let tracks = Array::from(&tracks);
    let audio = tracks.get(0).unchecked_into::<MicrophoneAudioTrack>();
    let video = tracks.get(1).unchecked_into::<CameraVideoTrack>();

    match element_by_id(&options.local_container_id) {
        Ok(element) => video.play(&element),
        Err(e) => warn!("local viewport not in the DOM yet: {e:?}"),
    }

    JsFuture::from(client.publish(&Array::of2(audio.as_ref(), video.as_ref())))
        .await
        .map_err(|e| JoinError::Publish(format!("{e:?}")))?;

    let (effects, requests) = EffectHandle::channel();
    spawn_local(run_effect_worker(
        VirtualBackgroundBackend::new(video.clone()),
        requests,
    ));

    let mut inner = inner.borrow_mut();
    inner.local_audio = Some(audio);
    inner.local_video = Some(video);
    inner.effects = Some(effects);
    inner.joined = true;
    Ok(uid_to_string(&uid))
}

fn handle_remote_published(
    inner: Rc<RefCell<Inner>>,
    options: SessionClientOptions,
    participant: RemoteParticipant,
    kind: MediaKind,
) {
    spawn_local(async move {
        let client = match inner.try_borrow() {
            Ok(inner) => inner.client.clone(),
            Err(_) => {
                error!("unable to borrow inner -- dropping publish notification");
                return;
            }
        };
        if let Err(e) = JsFuture::from(client.subscribe(&participant, &kind.to_string())).await {
            error!("failed to subscribe to remote {kind}: {e:?}");
            return;
        }
        if kind != MediaKind::Video {
            return;
        }

        let uid = participant_uid(&participant);
        match element_by_id(&options.remote_container_id) {
            Ok(element) => match participant.video_track() {
                Some(track) => track.play(&element),
                None => warn!("remote participant {uid} has no video track after subscribe"),
            },
            Err(e) => error!("remote viewport missing: {e:?}"),
        }
        if let Ok(mut inner) = inner.try_borrow_mut() {
            inner.remote = Some(participant);
        }
        emit_session_event(SessionEvent::RemotePublished {
            participant: uid.clone(),
            kind,
        });
        options.on_remote_published.emit((uid, kind));
    });
}

fn participant_uid(participant: &RemoteParticipant) -> String {
    uid_to_string(&participant.uid())
}

fn uid_to_string(uid: &JsValue) -> String {
    if let Some(s) = uid.as_string() {
        s
    } else if let Some(n) = uid.as_f64() {
        // The platform assigns numeric uids when none is supplied on join.
        format!("{n}")
    } else {
        "unknown".to_string()
    }
}

fn element_by_id(id: &str) -> Result<web_sys::Element, JsValue> {
    gloo_utils::document()
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("no element with id {id}")))
}
