//! Pure rendering API
//!
//! Stateless entry points for pages that keep the toggle state in
//! JavaScript and render the display list themselves.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use super::helpers::serialize;
use crate::config::PageConfig;
use crate::interop::to_json_lossy;
use crate::models::{LyricsDocument, ToggleOutcome, ToggleState, TrackKey};
use crate::renderers::{render_controls, render_lyrics};
use crate::{wasm_info, wasm_warn};

/// Result of `toggleTrack`
#[derive(Serialize)]
pub struct ToggleResult {
    pub state: ToggleState,
    pub changed: bool,
}

/// Default visible tracks: original and romanization
#[wasm_bindgen(js_name = defaultToggleState)]
pub fn default_toggle_state() -> Result<JsValue, JsValue> {
    serialize(&ToggleState::default(), "Failed to serialize toggle state")
}

/// Render the lyrics display list
///
/// # Parameters
/// - `lyrics_js`: array of line or verse records (anything else renders the placeholder)
/// - `state_js`: selected tracks, defaults apply when absent
///
/// # Returns
/// `{ kind: "placeholder", text }` or `{ kind: "blocks", blocks: [...] }`
#[wasm_bindgen(js_name = renderLyrics)]
pub fn render_lyrics_js(lyrics_js: JsValue, state_js: JsValue) -> Result<JsValue, JsValue> {
    let lyrics = LyricsDocument::from_host_value(&to_json_lossy(&lyrics_js, "lyrics"));
    let state = ToggleState::from_host_value(&to_json_lossy(&state_js, "state"));

    let view = render_lyrics(&lyrics, &state, &PageConfig::default());
    serialize(&view, "Failed to serialize lyrics view")
}

/// Render the control bar
///
/// # Parameters
/// - `state_js`: selected tracks
/// - `keys_js`: track keys of the controls in page order, all tracks when absent
#[wasm_bindgen(js_name = renderControls)]
pub fn render_controls_js(state_js: JsValue, keys_js: JsValue) -> Result<JsValue, JsValue> {
    let state = ToggleState::from_host_value(&to_json_lossy(&state_js, "state"));
    let keys = match to_json_lossy(&keys_js, "keys") {
        serde_json::Value::Array(raw) => raw
            .iter()
            .filter_map(|raw| {
                let key = raw.as_str()?.parse::<TrackKey>();
                if let Err(e) = &key {
                    wasm_warn!("renderControls: {}", e);
                }
                key.ok()
            })
            .collect(),
        _ => TrackKey::ALL.to_vec(),
    };

    let views = render_controls(&state, &keys, |key| key.default_label().to_string());
    serialize(&views, "Failed to serialize controls")
}

/// Toggle one track
///
/// # Returns
/// `{ state, changed }`; `changed` is false when the track was the last visible one
#[wasm_bindgen(js_name = toggleTrack)]
pub fn toggle_track(state_js: JsValue, key: &str) -> Result<JsValue, JsValue> {
    let mut state = ToggleState::from_host_value(&to_json_lossy(&state_js, "state"));
    let key = key
        .parse::<TrackKey>()
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    let changed = match state.toggle(key) {
        ToggleOutcome::Flipped { active } => {
            wasm_info!("toggleTrack: {} -> {}", key, active);
            true
        }
        ToggleOutcome::Rejected => {
            wasm_info!("toggleTrack: {} is the last visible track", key);
            false
        }
    };

    serialize(&ToggleResult { state, changed }, "Failed to serialize toggle result")
}
