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

//! [`EffectBackend`] implementation on top of the platform's
//! virtual-background extension.

use super::{EffectBackend, EffectProcessor};
use crate::constants::BLUR_DEGREE;
use crate::rtc::{
    register_extensions, BackgroundProcessor, CameraVideoTrack, VirtualBackgroundExtension,
};
use anyhow::anyhow;
use duocall_types::BackgroundEffect;
use js_sys::{Array, Object, Reflect};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlImageElement;

#[derive(Serialize)]
struct ColorOptions<'a> {
    r#type: &'a str,
    color: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BlurOptions<'a> {
    r#type: &'a str,
    blur_degree: u32,
}

/// Creates one [`VirtualBackgroundProcessor`] per applied effect, all piped
/// into the same local camera track.
pub struct VirtualBackgroundBackend {
    extension: VirtualBackgroundExtension,
    track: CameraVideoTrack,
}

impl VirtualBackgroundBackend {
    pub fn new(track: CameraVideoTrack) -> Self {
        let extension = VirtualBackgroundExtension::new();
        register_extensions(&Array::of1(&extension));
        Self { extension, track }
    }
}

impl EffectBackend for VirtualBackgroundBackend {
    type Processor = VirtualBackgroundProcessor;

    async fn create_processor(&self) -> anyhow::Result<VirtualBackgroundProcessor> {
        Ok(VirtualBackgroundProcessor {
            processor: self.extension.create_processor(),
            track: self.track.clone(),
        })
    }
}

pub struct VirtualBackgroundProcessor {
    processor: BackgroundProcessor,
    track: CameraVideoTrack,
}

impl VirtualBackgroundProcessor {
    async fn configure_image(&self, data_url: &str) -> anyhow::Result<()> {
        let image = HtmlImageElement::new().map_err(js_error("create image element"))?;
        image.set_src(data_url);
        await_image_load(&image)
            .await
            .map_err(js_error("decode background image"))?;

        // The source is a live DOM element, so the options object is built by
        // hand rather than through serde.
        let options = Object::new();
        Reflect::set(&options, &"type".into(), &"img".into())
            .map_err(js_error("set options type"))?;
        Reflect::set(&options, &"source".into(), &image)
            .map_err(js_error("set options source"))?;
        self.processor.set_options(&options);
        Ok(())
    }
}

impl EffectProcessor for VirtualBackgroundProcessor {
    async fn init(&mut self) -> anyhow::Result<()> {
        JsFuture::from(self.processor.init())
            .await
            .map_err(js_error("init background processor"))?;
        Ok(())
    }

    async fn configure(&mut self, effect: &BackgroundEffect) -> anyhow::Result<()> {
        match effect {
            BackgroundEffect::Color(color) => {
                let options = serde_wasm_bindgen::to_value(&ColorOptions {
                    r#type: "color",
                    color,
                })
                .map_err(|e| anyhow!("serialize color options: {e}"))?;
                self.processor.set_options(&options);
                Ok(())
            }
            BackgroundEffect::Image(data_url) => self.configure_image(data_url).await,
            BackgroundEffect::Blur => {
                let options = serde_wasm_bindgen::to_value(&BlurOptions {
                    r#type: "blur",
                    blur_degree: BLUR_DEGREE,
                })
                .map_err(|e| anyhow!("serialize blur options: {e}"))?;
                self.processor.set_options(&options);
                Ok(())
            }
            BackgroundEffect::None => Ok(()),
        }
    }

    async fn enable(&mut self) -> anyhow::Result<()> {
        JsFuture::from(self.processor.enable())
            .await
            .map_err(js_error("enable background processor"))?;
        Ok(())
    }

    async fn disable(&mut self) -> anyhow::Result<()> {
        JsFuture::from(self.processor.disable())
            .await
            .map_err(js_error("disable background processor"))?;
        Ok(())
    }

    fn attach(&mut self) -> anyhow::Result<()> {
        // capture -> processor -> encode destination
        self.track.pipe(self.processor.as_ref());
        self.processor.pipe(&self.track.processor_destination());
        Ok(())
    }

    fn detach(&mut self) -> anyhow::Result<()> {
        self.track.unpipe();
        self.processor.unpipe();
        Ok(())
    }
}

async fn await_image_load(image: &HtmlImageElement) -> Result<(), JsValue> {
    let promise = js_sys::Promise::new(&mut |resolve, reject| {
        image.set_onload(Some(&resolve));
        image.set_onerror(Some(&reject));
    });
    JsFuture::from(promise).await?;
    Ok(())
}

fn js_error(context: &'static str) -> impl Fn(JsValue) -> anyhow::Error {
    move |e| anyhow!("{context}: {e:?}")
}
