//! Song Page WASM API
//!
//! This module provides the JavaScript-facing API of the song page.
//!
//! # Module Structure
//!
//! - `helpers`: console logging macros and serde conversion
//! - `render`: stateless projections (`renderLyrics`, `renderControls`, `toggleTrack`)
//! - `page`: `mountSongPage`, which wires the page up itself

pub mod helpers;
pub mod render;
pub mod page;

pub use render::{default_toggle_state, render_controls_js, render_lyrics_js, toggle_track};
pub use page::mount_song_page;
