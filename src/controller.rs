//! Song page controller
//!
//! Owns the page state and turns control activations into frames. It knows
//! nothing about the DOM: the `dom` adapter reads the keys of the controls,
//! feeds clicks in, and applies the frames that come back.

use std::collections::BTreeMap;

use crate::config::PageConfig;
use crate::models::host_data::label_for;
use crate::models::{HostData, LyricsDocument, ToggleOutcome, ToggleState, TrackKey};
use crate::renderers::{render_controls, render_lyrics, ControlView, LyricsView};

/// Everything the page shows after an event
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    pub controls: Vec<ControlView>,
    pub lyrics: LyricsView,
}

pub struct SongPage {
    state: ToggleState,
    lyrics: LyricsDocument,
    labels: BTreeMap<TrackKey, String>,
    keys: Vec<TrackKey>,
    config: PageConfig,
}

impl SongPage {
    /// Build the page from the host payload
    ///
    /// `keys` are the tracks of the controls found on the page, in page
    /// order. Duplicates are dropped; an empty list means all tracks.
    pub fn new(data: HostData, keys: Vec<TrackKey>, config: PageConfig) -> Self {
        let mut unique = Vec::with_capacity(keys.len());
        for key in keys {
            if !unique.contains(&key) {
                unique.push(key);
            }
        }
        if unique.is_empty() {
            unique = TrackKey::ALL.to_vec();
        }

        log::info!(
            "song page ready: {} lyric blocks, {} of {} tracks visible",
            data.lyrics.verses.len(),
            data.selected.active_count(),
            TrackKey::ALL.len()
        );

        Self {
            state: data.selected,
            lyrics: data.lyrics,
            labels: data.labels,
            keys: unique,
            config,
        }
    }

    pub fn state(&self) -> &ToggleState {
        &self.state
    }

    pub fn keys(&self) -> &[TrackKey] {
        &self.keys
    }

    /// Frame for the first paint
    pub fn initial_frame(&self) -> Frame {
        self.frame()
    }

    /// Apply a control activation and re-render
    ///
    /// The frame is rebuilt even when the toggle is rejected.
    pub fn handle_toggle(&mut self, key: TrackKey) -> Frame {
        match self.state.toggle(key) {
            ToggleOutcome::Flipped { active } => {
                log::debug!("track {} is now {}", key, if active { "shown" } else { "hidden" });
            }
            ToggleOutcome::Rejected => {
                log::debug!("track {} is the last visible track, keeping it", key);
            }
        }
        self.frame()
    }

    /// Same as [`handle_toggle`](Self::handle_toggle) for a key read from the page
    pub fn handle_toggle_raw(&mut self, raw: &str) -> Frame {
        match raw.parse::<TrackKey>() {
            Ok(key) => self.handle_toggle(key),
            Err(e) => {
                log::warn!("ignoring control activation: {}", e);
                self.frame()
            }
        }
    }

    fn frame(&self) -> Frame {
        Frame {
            controls: render_controls(&self.state, &self.keys, |key| label_for(&self.labels, key)),
            lyrics: render_lyrics(&self.lyrics, &self.state, &self.config),
        }
    }
}
