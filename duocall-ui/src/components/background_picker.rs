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

//! Background selector: a fixed color palette and an image upload.
//!
//! The uploaded file never leaves the browser; it is read into a data URL
//! with `FileReader` and handed to the effect pipeline for decoding.

use crate::constants::BACKGROUND_COLORS;
use log::error;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Event, FileReader, HtmlInputElement, HtmlSelectElement, ProgressEvent};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct BackgroundPickerProps {
    /// Currently selected palette color, if the active request is a color.
    #[prop_or_default]
    pub selected_color: Option<String>,

    /// Callback fired with the chosen CSS color value.
    pub on_color: Callback<String>,

    /// Callback fired with the uploaded image as a data URL.
    pub on_image: Callback<String>,
}

#[function_component(BackgroundPicker)]
pub fn background_picker(props: &BackgroundPickerProps) -> Html {
    let on_color_change = {
        let on_color = props.on_color.clone();
        Callback::from(move |event: Event| {
            let select: HtmlSelectElement = event.target_unchecked_into();
            let value = select.value();
            if !value.is_empty() {
                on_color.emit(value);
            }
        })
    };

    let on_file_change = {
        let on_image = props.on_image.clone();
        Callback::from(move |event: Event| {
            let input: HtmlInputElement = event.target_unchecked_into();
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            read_file_as_data_url(file, on_image.clone());
        })
    };

    let selected = props.selected_color.clone().unwrap_or_default();

    html! {
        <div class="background-picker">
            <label for="bg-color">{"Change Background Color: "}</label>
            <select id="bg-color" value={selected} onchange={on_color_change}>
                <option value="" selected={props.selected_color.is_none()}>{"Select a color"}</option>
                {
                    BACKGROUND_COLORS.iter().map(|(label, value)| html! {
                        <option value={*value} selected={props.selected_color.as_deref() == Some(*value)}>
                            { *label }
                        </option>
                    }).collect::<Html>()
                }
            </select>

            <label for="bg-image">{"Upload Background Image: "}</label>
            <input type="file" id="bg-image" accept="image/*" onchange={on_file_change} />
        </div>
    }
}

fn read_file_as_data_url(file: web_sys::File, on_image: Callback<String>) {
    let reader = match FileReader::new() {
        Ok(reader) => reader,
        Err(e) => {
            error!("failed to create file reader: {e:?}");
            return;
        }
    };

    let onload = Closure::wrap(Box::new({
        let reader = reader.clone();
        move |_: ProgressEvent| match reader.result() {
            Ok(result) => {
                if let Some(data_url) = result.as_string() {
                    on_image.emit(data_url);
                }
            }
            Err(e) => error!("failed to read background image: {e:?}"),
        }
    }) as Box<dyn FnMut(ProgressEvent)>);
    reader.set_onload(Some(onload.as_ref().unchecked_ref()));
    onload.forget();

    if let Err(e) = reader.read_as_data_url(&file) {
        error!("failed to start reading background image: {e:?}");
    }
}
