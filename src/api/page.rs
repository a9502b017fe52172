//! Song page mounting

use wasm_bindgen::prelude::*;

use crate::config::PageConfig;
use crate::interop::to_json_lossy;
use crate::dom;
use crate::{wasm_error, wasm_info, wasm_warn};

/// Mount the song page with an optional partial configuration
///
/// The start hook already mounts with the defaults; call this instead when
/// the template uses different element ids or a different global.
#[wasm_bindgen(js_name = mountSongPage)]
pub fn mount_song_page(config_js: JsValue) -> Result<(), JsValue> {
    let config = match to_json_lossy(&config_js, "config") {
        serde_json::Value::Null => PageConfig::default(),
        value => serde_json::from_value(value).unwrap_or_else(|e| {
            wasm_warn!("Invalid page config, using defaults: {}", e);
            PageConfig::default()
        }),
    };

    wasm_info!("mountSongPage: #{} / {}", config.container_id, config.control_selector);
    dom::mount(config).map_err(|e| {
        wasm_error!("mountSongPage failed: {}", e);
        JsValue::from_str(&e.to_string())
    })
}
