//! Display List for the song page
//!
//! This module defines the output of the renderers. A display list says which
//! text goes where and which track it belongs to; turning it into DOM nodes
//! and picking CSS classes is left to the `dom` adapter (or to JavaScript,
//! when it is serialized through the API).

use serde::{Deserialize, Serialize};

use crate::models::{SourceShape, TrackKey};

/// Desired content of the lyrics container
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum LyricsView {
    /// The song has no lyrics
    Placeholder { text: String },

    /// One block per line or verse
    Blocks { blocks: Vec<VerseBlock> },
}

impl LyricsView {
    pub fn blocks(&self) -> &[VerseBlock] {
        match self {
            LyricsView::Placeholder { .. } => &[],
            LyricsView::Blocks { blocks } => blocks,
        }
    }

    /// Every rendered text line, in display order
    pub fn texts(&self) -> Vec<&str> {
        match self {
            LyricsView::Placeholder { text } => vec![text.as_str()],
            LyricsView::Blocks { blocks } => blocks
                .iter()
                .flat_map(|block| block.tracks.iter())
                .flat_map(|track| track.lines.iter().map(String::as_str))
                .collect(),
        }
    }
}

/// A single line or verse
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VerseBlock {
    /// Display index
    pub no: u32,

    /// Element id used for `#L{no}` links
    pub anchor: String,

    /// Optional marker ("Line 3")
    pub label: Option<String>,

    /// Source shape, selects block spacing
    pub shape: SourceShape,

    /// Visible tracks with text, in presentation order
    pub tracks: Vec<TrackBlock>,
}

/// The lines of one track inside a block
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TrackBlock {
    /// Style tag for the presentation layer
    pub track: TrackKey,

    pub lines: Vec<String>,
}

/// Visual state of one toggle control
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ControlView {
    pub key: TrackKey,
    pub label: String,
    pub active: bool,
    pub disabled: bool,
}
