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

//! Bindings to the hosted communication platform's SDK and its
//! virtual-background extension.
//!
//! The page loads both as classic scripts (the `AgoraRTC` global and the
//! `VirtualBackgroundExtension` constructor); everything here is an opaque
//! handle into them.  Promise-returning calls are awaited through `JsFuture`
//! by the callers.

use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// Client handle for one session: join, publish, subscribe, and the
    /// participant publish/unpublish notification stream.
    pub type RtcClient;

    #[wasm_bindgen(js_namespace = AgoraRTC, js_name = createClient)]
    pub fn create_client(config: &JsValue) -> RtcClient;

    /// Resolves to a two-element array `[audioTrack, videoTrack]`.
    #[wasm_bindgen(js_namespace = AgoraRTC, js_name = createMicrophoneAndCameraTracks)]
    pub fn create_microphone_and_camera_tracks() -> js_sys::Promise;

    #[wasm_bindgen(js_namespace = AgoraRTC, js_name = registerExtensions)]
    pub fn register_extensions(extensions: &js_sys::Array);

    /// Resolves to the uid the platform assigned to the local participant.
    #[wasm_bindgen(method)]
    pub fn join(
        this: &RtcClient,
        app_id: &str,
        channel: &str,
        token: Option<&str>,
        uid: &JsValue,
    ) -> js_sys::Promise;

    #[wasm_bindgen(method)]
    pub fn publish(this: &RtcClient, tracks: &js_sys::Array) -> js_sys::Promise;

    #[wasm_bindgen(method)]
    pub fn subscribe(
        this: &RtcClient,
        participant: &RemoteParticipant,
        media_kind: &str,
    ) -> js_sys::Promise;

    #[wasm_bindgen(method)]
    pub fn on(this: &RtcClient, event: &str, handler: &js_sys::Function);

    /// A remote participant as carried by publish/unpublish notifications.
    pub type RemoteParticipant;

    #[wasm_bindgen(method, getter)]
    pub fn uid(this: &RemoteParticipant) -> JsValue;

    /// Present once the participant's video has been subscribed to.
    #[wasm_bindgen(method, getter, js_name = videoTrack)]
    pub fn video_track(this: &RemoteParticipant) -> Option<RemoteVideoTrack>;

    pub type RemoteVideoTrack;

    #[wasm_bindgen(method)]
    pub fn play(this: &RemoteVideoTrack, element: &web_sys::Element);

    /// Local microphone capture handle.
    pub type MicrophoneAudioTrack;

    #[wasm_bindgen(method, js_name = setEnabled)]
    pub fn set_enabled(this: &MicrophoneAudioTrack, enabled: bool) -> js_sys::Promise;

    /// Local camera capture handle; also the head of the outgoing processing
    /// chain.
    pub type CameraVideoTrack;

    #[wasm_bindgen(method)]
    pub fn play(this: &CameraVideoTrack, element: &web_sys::Element);

    /// Suspends briefly while the capture device reconfigures.
    #[wasm_bindgen(method, js_name = setEnabled)]
    pub fn set_enabled(this: &CameraVideoTrack, enabled: bool) -> js_sys::Promise;

    /// Splice a stage after raw capture.  Returns the stage so the chain can
    /// be continued onto [`processor_destination`](Self::processor_destination).
    #[wasm_bindgen(method)]
    pub fn pipe(this: &CameraVideoTrack, stage: &JsValue) -> JsValue;

    /// Unsplice whatever is piped after raw capture.
    #[wasm_bindgen(method)]
    pub fn unpipe(this: &CameraVideoTrack);

    /// Tail of the chain: the track's outgoing encode stage.
    #[wasm_bindgen(method, getter, js_name = processorDestination)]
    pub fn processor_destination(this: &CameraVideoTrack) -> JsValue;

    /// The virtual-background extension (segmentation model + compositor).
    pub type VirtualBackgroundExtension;

    #[wasm_bindgen(constructor)]
    pub fn new() -> VirtualBackgroundExtension;

    #[wasm_bindgen(method, js_name = createProcessor)]
    pub fn create_processor(this: &VirtualBackgroundExtension) -> BackgroundProcessor;

    /// One background-replacement stage, created per applied effect.
    pub type BackgroundProcessor;

    #[wasm_bindgen(method)]
    pub fn init(this: &BackgroundProcessor) -> js_sys::Promise;

    #[wasm_bindgen(method, js_name = setOptions)]
    pub fn set_options(this: &BackgroundProcessor, options: &JsValue);

    #[wasm_bindgen(method)]
    pub fn enable(this: &BackgroundProcessor) -> js_sys::Promise;

    #[wasm_bindgen(method)]
    pub fn disable(this: &BackgroundProcessor) -> js_sys::Promise;

    #[wasm_bindgen(method)]
    pub fn pipe(this: &BackgroundProcessor, stage: &JsValue) -> JsValue;

    #[wasm_bindgen(method)]
    pub fn unpipe(this: &BackgroundProcessor);
}

/// Configuration for [`create_client`]; one-to-one calls use plain `rtc` mode
/// with the vp8 codec.
#[derive(Serialize)]
pub struct ClientConfig<'a> {
    pub mode: &'a str,
    pub codec: &'a str,
}

impl ClientConfig<'_> {
    pub fn rtc_vp8() -> Self {
        Self {
            mode: "rtc",
            codec: "vp8",
        }
    }
}

/// Create a session client in rtc/vp8 mode.
pub fn create_rtc_client() -> RtcClient {
    let config = serde_wasm_bindgen::to_value(&ClientConfig::rtc_vp8())
        .expect("client config serializes to a plain object");
    create_client(&config)
}
