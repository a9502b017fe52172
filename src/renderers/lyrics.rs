//! Lyrics rendering
//!
//! Projects a lyric document and the current track visibility into a
//! [`LyricsView`]. Track order inside a block is fixed per source shape:
//!
//! - line data: original, romanization, translation
//! - verse data: romanization, original, translation
//!
//! A track appears in a block only when it is visible and has non-blank text.

use crate::config::PageConfig;
use crate::models::{LyricsDocument, SourceShape, ToggleState, TrackKey, Verse};

use super::display_list::{LyricsView, TrackBlock, VerseBlock};

/// Presentation order of tracks for a source shape
pub fn track_order(shape: SourceShape) -> [TrackKey; 3] {
    match shape {
        SourceShape::Lines => [
            TrackKey::Original,
            TrackKey::Romanization,
            TrackKey::Translation,
        ],
        SourceShape::Verses => [
            TrackKey::Romanization,
            TrackKey::Original,
            TrackKey::Translation,
        ],
    }
}

pub fn render_lyrics(doc: &LyricsDocument, state: &ToggleState, config: &PageConfig) -> LyricsView {
    if doc.is_empty() {
        return LyricsView::Placeholder {
            text: config.placeholder.clone(),
        };
    }

    let order = track_order(doc.shape);
    let blocks = doc
        .verses
        .iter()
        .map(|verse| render_verse(verse, doc.shape, &order, state, config.show_labels))
        .collect();

    LyricsView::Blocks { blocks }
}

fn render_verse(
    verse: &Verse,
    shape: SourceShape,
    order: &[TrackKey],
    state: &ToggleState,
    show_labels: bool,
) -> VerseBlock {
    let tracks = order
        .iter()
        .filter(|track| state.is_active(**track))
        .filter_map(|track| {
            let lines: Vec<String> = verse.text(*track).map(str::to_string).collect();
            (!lines.is_empty()).then(|| TrackBlock {
                track: *track,
                lines,
            })
        })
        .collect();

    let label = show_labels.then(|| match shape {
        SourceShape::Lines => format!("Line {}", verse.no),
        SourceShape::Verses => format!("Verse {}", verse.no),
    });

    VerseBlock {
        no: verse.no,
        anchor: format!("L{}", verse.no),
        label,
        shape,
        tracks,
    }
}
