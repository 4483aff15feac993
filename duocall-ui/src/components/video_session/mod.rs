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

//! The one-to-one video session widget.
//!
//! Owns a [`SessionClient`] and a [`SessionModel`]; every UI action and
//! platform notification becomes a [`Msg`], the model records the state
//! change, and the component relays the resulting side effect (join, track
//! toggle, background re-apply) to the client.

mod msg;

use msg::Msg;

use crate::components::background_picker::BackgroundPicker;
use crate::components::session_controls::{BlurButton, CameraButton, MicButton};
use crate::constants::{LOCAL_VIDEO_CONTAINER_ID, REMOTE_VIDEO_CONTAINER_ID};
use crate::model::{JoinState, SessionModel};
use duocall_client::constants::{APP_ID, AUTH_TOKEN, CHANNEL};
use duocall_client::{
    BackgroundEffect, MediaDeviceAccess, SessionClient, SessionClientOptions,
};
use wasm_bindgen::JsValue;
use yew::prelude::*;

pub struct VideoSession {
    model: SessionModel,
    client: SessionClient,
    media_access: MediaDeviceAccess,
}

impl Component for VideoSession {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link();
        let client = SessionClient::new(SessionClientOptions {
            app_id: APP_ID.to_string(),
            channel: CHANNEL.to_string(),
            token: AUTH_TOKEN.map(str::to_string),
            local_container_id: LOCAL_VIDEO_CONTAINER_ID.to_string(),
            remote_container_id: REMOTE_VIDEO_CONTAINER_ID.to_string(),
            on_joined: link.callback(Msg::Joined),
            on_join_failed: link.callback(Msg::JoinFailed),
            on_remote_published: link.callback(Msg::RemotePublished),
            on_remote_unpublished: link.callback(Msg::RemoteUnpublished),
        });
        let mut media_access = MediaDeviceAccess::new();
        media_access.on_denied =
            link.callback(|e: JsValue| Msg::PermissionDenied(format!("{e:?}")));
        Self {
            model: SessionModel::new(),
            client,
            media_access,
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, first_render: bool) {
        if first_render {
            self.media_access.request();
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Join => {
                if self.model.begin_join() {
                    self.client.join();
                }
                true
            }
            Msg::Joined(uid) => {
                if let Some(effect) = self.model.join_succeeded(uid) {
                    self.client.apply_background(effect);
                }
                true
            }
            Msg::JoinFailed(error) => {
                self.model.join_failed(error);
                true
            }
            Msg::PermissionDenied(reason) => {
                self.model.permission_denied(reason);
                true
            }
            Msg::ToggleMicrophone => {
                let muted = self.model.toggle_audio_muted();
                self.client.set_microphone_enabled(!muted);
                true
            }
            Msg::ToggleCamera => {
                let off = self.model.toggle_video_off();
                self.client.set_camera_enabled(!off);
                true
            }
            Msg::ToggleBlur => {
                self.apply_background(self.model.toggle_blur());
                true
            }
            Msg::SelectColor(color) => {
                let effect = self.model.select_color(&color);
                self.apply_background(effect);
                true
            }
            Msg::ImageUploaded(data_url) => {
                let effect = self.model.select_image(data_url);
                self.apply_background(effect);
                true
            }
            Msg::RemotePublished((uid, kind)) => {
                self.model.remote_published(uid, kind);
                true
            }
            Msg::RemoteUnpublished(_uid) => {
                self.model.remote_unpublished();
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let joined = self.model.is_joined();
        let local_viewport_class = classes!(
            "video-container",
            self.model.is_video_off().then_some("video-off")
        );

        html! {
            <div class="video-session">
                <h1>{"One-to-One Video Chat"}</h1>
                <div class="viewports">
                    <div class="viewport">
                        <h3>{"Your Video"}</h3>
                        <div id={LOCAL_VIDEO_CONTAINER_ID} class={local_viewport_class}></div>
                        if joined {
                            <>
                                if !self.model.is_video_off() {
                                    <BackgroundPicker
                                        selected_color={self.model.background().color().map(str::to_string)}
                                        on_color={ctx.link().callback(Msg::SelectColor)}
                                        on_image={ctx.link().callback(Msg::ImageUploaded)}
                                    />
                                }
                                <div class="controls">
                                    <MicButton
                                        enabled={!self.model.is_audio_muted()}
                                        onclick={ctx.link().callback(|_| Msg::ToggleMicrophone)}
                                    />
                                    <CameraButton
                                        enabled={!self.model.is_video_off()}
                                        onclick={ctx.link().callback(|_| Msg::ToggleCamera)}
                                    />
                                    <BlurButton
                                        active={self.model.background().is_blurred()}
                                        onclick={ctx.link().callback(|_| Msg::ToggleBlur)}
                                    />
                                </div>
                            </>
                        }
                    </div>
                    <div class="viewport">
                        <h3>{"Remote User's Video"}</h3>
                        <div id={REMOTE_VIDEO_CONTAINER_ID} class="video-container"></div>
                        if self.model.remote_participant().is_none() {
                            <p class="waiting">{"Waiting for remote user..."}</p>
                        }
                    </div>
                </div>
                if let Some(reason) = self.model.permission_error() {
                    <p class="permission-error">
                        { format!("Microphone/camera access was denied: {reason}") }
                    </p>
                }
                if let Some(error) = self.model.last_error() {
                    <p class="join-error">{ error.to_string() }</p>
                }
                if !joined {
                    <button
                        class="join-button"
                        disabled={self.model.join_state() == JoinState::Joining}
                        onclick={ctx.link().callback(|_| Msg::Join)}
                    >
                        {"Join Now"}
                    </button>
                }
            </div>
        }
    }
}

impl VideoSession {
    fn apply_background(&self, effect: Option<BackgroundEffect>) {
        if let Some(effect) = effect {
            self.client.apply_background(effect);
        }
    }
}
