//! Browser tests
//!
//! Mount the page against a DOM fixture and click through the controls.
//! Run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use serde_json::json;
use song_page_wasm::api::{default_toggle_state, render_controls_js, render_lyrics_js, toggle_track};
use song_page_wasm::dom::{self, PageDom};
use song_page_wasm::PageConfig;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{HtmlButtonElement, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

const FIXTURE: &str = r#"
    <button class="btn-toggle" data-toggle="punjabi">Punjabi</button>
    <button class="btn-toggle" data-toggle="romanization">Romanization</button>
    <button class="btn-toggle" data-toggle="translation"><span class="icon"></span> Translation</button>
    <div id="lyrics-container"></div>
"#;

/// Install the fixture and `window.SONG_PAGE_DATA`, returning the payload object
fn setup(payload: &str) -> JsValue {
    let window = web_sys::window().unwrap();
    let document = window.document().unwrap();
    document.body().unwrap().set_inner_html(FIXTURE);
    document
        .document_element()
        .unwrap()
        .remove_attribute("data-song-page-mounted")
        .unwrap();
    let data = js_sys::JSON::parse(payload).unwrap();
    js_sys::Reflect::set(&window, &JsValue::from_str("SONG_PAGE_DATA"), &data).unwrap();
    data
}

fn noop_function() -> JsValue {
    js_sys::Function::new_no_args("").into()
}

fn parse(json: &str) -> JsValue {
    js_sys::JSON::parse(json).unwrap()
}

fn to_json(value: JsValue) -> serde_json::Value {
    serde_wasm_bindgen::from_value(value).unwrap()
}

fn container_text() -> String {
    web_sys::window()
        .unwrap()
        .document()
        .unwrap()
        .get_element_by_id("lyrics-container")
        .unwrap()
        .text_content()
        .unwrap_or_default()
}

fn button(key: &str) -> HtmlButtonElement {
    web_sys::window()
        .unwrap()
        .document()
        .unwrap()
        .query_selector(&format!("[data-toggle=\"{}\"]", key))
        .unwrap()
        .unwrap()
        .dyn_into::<HtmlButtonElement>()
        .unwrap()
}

#[wasm_bindgen_test]
fn test_mount_renders_initial_state() {
    setup(r#"{"lyrics":[{"no":1,"original":"ਸਤ","romanized":"sat","translation":"truth"}]}"#);
    dom::mount(PageConfig::default()).unwrap();

    let text = container_text();
    assert!(text.contains("ਸਤ"));
    assert!(text.contains("sat"));
    assert!(!text.contains("truth"));
    assert!(button("punjabi").class_list().contains("active"));
    assert!(!button("translation").class_list().contains("active"));
}

#[wasm_bindgen_test]
fn test_click_toggles_and_locks_last_track() {
    setup(r#"{"selected":{"punjabi":true,"romanization":false,"translation":false},
              "lyrics":[{"no":1,"original":"ਸਤ","romanized":"sat","translation":"truth"}]}"#);
    dom::mount(PageConfig::default()).unwrap();

    assert!(button("punjabi").disabled());
    button("punjabi").click();
    assert!(container_text().contains("ਸਤ"));

    button("translation").click();
    assert!(container_text().contains("truth"));
    assert!(!button("punjabi").disabled());
}

#[wasm_bindgen_test]
fn test_missing_container_is_not_fatal() {
    setup(r#"{"lyrics":[]}"#);
    let document = web_sys::window().unwrap().document().unwrap();
    document.get_element_by_id("lyrics-container").unwrap().remove();

    let dom = PageDom::from_window(PageConfig::default()).unwrap();
    let controls: Vec<HtmlElement> = dom.controls().unwrap();
    assert_eq!(controls.len(), 3);
    assert!(dom::mount(PageConfig::default()).is_ok());
}

#[wasm_bindgen_test]
fn test_empty_lyrics_placeholder() {
    setup(r#"{"lyrics":"nope"}"#);
    dom::mount(PageConfig::default()).unwrap();
    assert_eq!(container_text(), "No lyrics available yet.");
}

#[wasm_bindgen_test]
fn test_template_labels_survive_mount_and_click() {
    setup(r#"{"lyrics":[{"no":1,"original":"ਸਤ","romanized":"sat","translation":"truth"}]}"#);
    dom::mount(PageConfig::default()).unwrap();
    assert_eq!(button("punjabi").text_content().unwrap(), "Punjabi");

    button("translation").click();
    assert_eq!(button("punjabi").text_content().unwrap(), "Punjabi");
    assert!(button("translation").query_selector(".icon").unwrap().is_some());
    assert!(button("translation").class_list().contains("active"));
}

#[wasm_bindgen_test]
fn test_host_label_overrides_template_text() {
    setup(r#"{"labels":{"punjabi":"ਪੰਜਾਬੀ"},"lyrics":[]}"#);
    dom::mount(PageConfig::default()).unwrap();
    assert_eq!(button("punjabi").text_content().unwrap(), "ਪੰਜਾਬੀ");
    assert_eq!(button("romanization").text_content().unwrap(), "Romanization");
}

#[wasm_bindgen_test]
fn test_function_field_does_not_drop_lyrics() {
    let data = setup(
        r#"{"selected":{"punjabi":false,"romanization":true,"translation":true},
            "lyrics":[{"no":1,"original":"ਸਤ","romanized":"sat","translation":"truth"}]}"#,
    );
    js_sys::Reflect::set(&data, &JsValue::from_str("onReady"), &noop_function()).unwrap();
    dom::mount(PageConfig::default()).unwrap();

    let text = container_text();
    assert!(text.contains("sat"));
    assert!(text.contains("truth"));
    assert!(!text.contains("ਸਤ"));
}

#[wasm_bindgen_test]
fn test_render_lyrics_skips_unconvertible_parts() {
    let lyrics = parse(r#"[{"no":1,"original":"A","romanized":"a","translation":"α"}]"#);
    let record = js_sys::Reflect::get(&lyrics, &JsValue::from_f64(0.0)).unwrap();
    js_sys::Reflect::set(&record, &JsValue::from_str("format"), &noop_function()).unwrap();

    let view = to_json(render_lyrics_js(lyrics, JsValue::UNDEFINED).unwrap());
    assert_eq!(view["kind"], "blocks");
    assert_eq!(view["blocks"][0]["tracks"][0]["lines"], json!(["A"]));

    let view = to_json(render_lyrics_js(noop_function(), JsValue::NULL).unwrap());
    assert_eq!(view, json!({ "kind": "placeholder", "text": "No lyrics available yet." }));
}

#[wasm_bindgen_test]
fn test_default_toggle_state_export() {
    let state = to_json(default_toggle_state().unwrap());
    assert_eq!(state, json!({ "original": true, "romanization": true, "translation": false }));
}

#[wasm_bindgen_test]
fn test_toggle_track_export_reports_change() {
    let result = to_json(toggle_track(parse(r#"{"punjabi":true}"#), "translation").unwrap());
    assert_eq!(result["changed"], true);
    assert_eq!(result["state"], json!({ "original": true, "romanization": false, "translation": true }));

    let result = to_json(toggle_track(parse(r#"{"punjabi":true}"#), "punjabi").unwrap());
    assert_eq!(result["changed"], false);
    assert_eq!(result["state"]["original"], true);

    assert!(toggle_track(JsValue::UNDEFINED, "hindi").is_err());
}

#[wasm_bindgen_test]
fn test_render_controls_export() {
    let state = parse(r#"{"romanized":true}"#);
    let views = to_json(render_controls_js(state, parse(r#"["translation","bogus","romanization"]"#)).unwrap());
    assert_eq!(
        views,
        json!([
            { "key": "translation", "label": "Translation", "active": false, "disabled": false },
            { "key": "romanization", "label": "Romanization", "active": true, "disabled": true }
        ])
    );

    let views = to_json(render_controls_js(JsValue::UNDEFINED, JsValue::UNDEFINED).unwrap());
    let keys: Vec<_> = views.as_array().unwrap().iter().map(|v| v["key"].clone()).collect();
    assert_eq!(keys, vec![json!("original"), json!("romanization"), json!("translation")]);
}
