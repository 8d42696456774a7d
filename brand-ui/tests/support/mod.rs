// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0
//
// Shared test harness for brand-ui component tests.
//
// Provides mount/cleanup helpers and runtime config injection so that
// individual test files stay focused on assertions rather than boilerplate.
//
// Each test file that does `mod support;` compiles its own copy, so not every
// function is used in every compilation unit.
#![allow(dead_code)]

use std::time::Duration;

use yew::platform::time::sleep;

// ---------------------------------------------------------------------------
// DOM helpers
// ---------------------------------------------------------------------------

/// Create a fresh `<div>`, attach it to `<body>`, and return it.
pub fn create_mount_point() -> web_sys::Element {
    let document = gloo_utils::document();
    let div = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&div).unwrap();
    div
}

/// Remove the mount-point from `<body>` so subsequent tests start clean.
pub fn cleanup(mount: &web_sys::Element) {
    gloo_utils::document()
        .body()
        .unwrap()
        .remove_child(mount)
        .ok();
}

/// Yield to the Yew scheduler so pending renders and effects run.
pub async fn flush() {
    sleep(Duration::ZERO).await;
}

/// The single `<img>` rendered under `mount`.
pub fn rendered_img(mount: &web_sys::Element) -> web_sys::Element {
    let images = mount.query_selector_all("img").unwrap();
    assert_eq!(images.length(), 1, "expected exactly one <img>");
    mount.query_selector("img").unwrap().unwrap()
}

/// Count elements under `mount` matching `selector`.
pub fn count(mount: &web_sys::Element, selector: &str) -> u32 {
    mount.query_selector_all(selector).unwrap().length()
}

// ---------------------------------------------------------------------------
// Runtime config injection
// ---------------------------------------------------------------------------

/// Inject a `window.__APP_CONFIG` object with the given JSON-compatible
/// key/value pairs.
pub fn inject_app_config(entries: &[(&str, wasm_bindgen::JsValue)]) {
    let config = js_sys::Object::new();
    for (key, val) in entries {
        js_sys::Reflect::set(&config, &(*key).into(), val).unwrap();
    }
    let frozen = js_sys::Object::freeze(&config);
    let window = gloo_utils::window();
    js_sys::Reflect::set(&window, &"__APP_CONFIG".into(), &frozen).unwrap();
}

/// Remove `window.__APP_CONFIG` so tests don't leak state.
pub fn remove_app_config() {
    let window = gloo_utils::window();
    let _ = js_sys::Reflect::delete_property(&window.into(), &"__APP_CONFIG".into());
}
