//! Page configuration
//!
//! Names of the DOM hooks and global payload the module binds to. JavaScript
//! may pass a partial object to `mountSongPage`; omitted fields keep their
//! defaults.

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct PageConfig {
    /// Global (on `window`) holding the host payload
    pub global_name: String,

    /// Id of the element whose content is replaced with the lyrics
    pub container_id: String,

    /// Selector matching every toggle control
    pub control_selector: String,

    /// Dataset key naming the track of a control (`data-toggle`)
    pub toggle_attribute: String,

    /// Class set on controls whose track is visible
    pub active_class: String,

    /// Message shown when the song has no lyrics
    pub placeholder: String,

    /// Render a "Line N" / "Verse N" marker above each block
    pub show_labels: bool,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            global_name: "SONG_PAGE_DATA".to_string(),
            container_id: "lyrics-container".to_string(),
            control_selector: ".btn-toggle".to_string(),
            toggle_attribute: "toggle".to_string(),
            active_class: "active".to_string(),
            placeholder: "No lyrics available yet.".to_string(),
            show_labels: true,
        }
    }
}
