//! Models module for the song page
//!
//! This module contains the lyric data, the track keys and the track
//! visibility state, plus the parsing of the host page payload into them.

pub mod track;
pub mod toggle_state;
pub mod verse;
pub mod host_data;

// Re-export commonly used types
pub use track::{TrackError, TrackKey};
pub use toggle_state::{ToggleOutcome, ToggleState};
pub use verse::{LyricsDocument, SourceShape, Verse};
pub use host_data::HostData;
