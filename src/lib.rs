//! Song Page Lyrics WASM Module
//!
//! Renders the lyrics of a song page and lets the reader toggle the
//! original, romanization and translation tracks, keeping at least one
//! track visible.

pub mod models;
pub mod renderers;
pub mod controller;
pub mod config;
pub mod errors;
pub mod interop;
pub mod dom;
pub mod api;

// Re-export commonly used types
pub use models::*;
pub use controller::{Frame, SongPage};
pub use config::PageConfig;

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    if console_log::init_with_level(log::Level::Debug).is_err() {
        wasm_warn!("logger already initialized");
    }

    log::info!("Song page WASM module initialized");

    #[cfg(feature = "auto-mount")]
    if let Err(e) = dom::mount(PageConfig::default()) {
        log::error!("song page mount failed: {}", e);
    }
}
