// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0
//
// Component tests for the background picker: the fixed color palette and the
// image upload input.

#![cfg(all(target_arch = "wasm32", not(target_os = "wasi")))]

mod support;

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use support::{cleanup, create_mount_point};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use yew::platform::time::sleep;
use yew::prelude::*;

use duocall_ui::components::background_picker::BackgroundPicker;
use duocall_ui::constants::BACKGROUND_COLORS;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

#[derive(Properties, PartialEq)]
struct WrapperProps {
    #[prop_or_default]
    selected_color: Option<String>,
    on_color: Callback<String>,
}

#[function_component(Wrapper)]
fn wrapper(props: &WrapperProps) -> Html {
    html! {
        <BackgroundPicker
            selected_color={props.selected_color.clone()}
            on_color={props.on_color.clone()}
            on_image={Callback::noop()}
        />
    }
}

#[wasm_bindgen_test]
async fn picker_renders_the_four_palette_colors() {
    let mount = create_mount_point();
    yew::Renderer::<Wrapper>::with_props_and_root(
        WrapperProps {
            selected_color: None,
            on_color: Callback::noop(),
        },
        mount.clone(),
    )
    .render();
    sleep(Duration::ZERO).await;

    let select = mount
        .query_selector("select#bg-color")
        .unwrap()
        .expect("color selector should render")
        .dyn_into::<web_sys::HtmlSelectElement>()
        .unwrap();

    // Placeholder option plus the fixed palette.
    assert_eq!(select.options().length(), 1 + BACKGROUND_COLORS.len() as u32);

    let values: Vec<String> = (1..select.options().length())
        .map(|i| {
            select
                .options()
                .item(i)
                .unwrap()
                .dyn_into::<web_sys::HtmlOptionElement>()
                .unwrap()
                .value()
        })
        .collect();
    assert_eq!(values, vec!["#fff", "#000", "#ff0000", "#0000ff"]);

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn choosing_a_color_fires_the_callback_with_its_css_value() {
    let chosen: Rc<RefCell<Option<String>>> = Rc::new(RefCell::new(None));

    let mount = create_mount_point();
    let on_color = {
        let chosen = chosen.clone();
        Callback::from(move |color: String| {
            *chosen.borrow_mut() = Some(color);
        })
    };
    yew::Renderer::<Wrapper>::with_props_and_root(
        WrapperProps {
            selected_color: None,
            on_color,
        },
        mount.clone(),
    )
    .render();
    sleep(Duration::ZERO).await;

    let select = mount
        .query_selector("select#bg-color")
        .unwrap()
        .unwrap()
        .dyn_into::<web_sys::HtmlSelectElement>()
        .unwrap();
    select.set_value("#ff0000");
    let event = web_sys::Event::new("change").unwrap();
    select.dispatch_event(&event).unwrap();
    sleep(Duration::ZERO).await;

    assert_eq!(chosen.borrow().as_deref(), Some("#ff0000"));

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn picker_renders_the_image_upload_input() {
    let mount = create_mount_point();
    yew::Renderer::<Wrapper>::with_props_and_root(
        WrapperProps {
            selected_color: None,
            on_color: Callback::noop(),
        },
        mount.clone(),
    )
    .render();
    sleep(Duration::ZERO).await;

    let input = mount
        .query_selector("input#bg-image")
        .unwrap()
        .expect("image upload input should render")
        .dyn_into::<web_sys::HtmlInputElement>()
        .unwrap();
    assert_eq!(input.type_(), "file");
    assert_eq!(input.accept(), "image/*");

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn selected_color_is_reflected_in_the_select() {
    let mount = create_mount_point();
    yew::Renderer::<Wrapper>::with_props_and_root(
        WrapperProps {
            selected_color: Some("#000".to_string()),
            on_color: Callback::noop(),
        },
        mount.clone(),
    )
    .render();
    sleep(Duration::ZERO).await;

    let select = mount
        .query_selector("select#bg-color")
        .unwrap()
        .unwrap()
        .dyn_into::<web_sys::HtmlSelectElement>()
        .unwrap();
    assert_eq!(select.value(), "#000");

    cleanup(&mount);
}
