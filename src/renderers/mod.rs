//! Renderers module for the song page
//!
//! Pure projections from page state into display lists. Nothing in here
//! touches the DOM.

pub mod display_list;
pub mod lyrics;
pub mod controls;

// Re-export commonly used types
pub use display_list::{ControlView, LyricsView, TrackBlock, VerseBlock};
pub use lyrics::{render_lyrics, track_order};
pub use controls::render_controls;
