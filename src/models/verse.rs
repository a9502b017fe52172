//! Lyric data model
//!
//! Song pages have supplied lyrics in two shapes:
//!
//! - line records: `{ no, original, romanized, translation }` with one string per track
//! - verse records: `{ no, punjabi: [..], romanization: [..], translation: [..] }`
//!
//! Both are normalized here into [`Verse`], which holds an ordered list of
//! lines per track. A line record becomes a verse with one line per track.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::track::TrackKey;

/// Host field names per track, first match wins
const ORIGINAL_FIELDS: [&str; 2] = ["punjabi", "original"];
const ROMANIZATION_FIELDS: [&str; 2] = ["romanization", "romanized"];
const TRANSLATION_FIELDS: [&str; 2] = ["translation", "translation_en"];

/// Which host contract the lyric data was written in
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum SourceShape {
    #[default]
    Lines,
    Verses,
}

/// A unit of lyric content with up to three parallel tracks
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
pub struct Verse {
    /// Display index ("Line 3", anchor `#L3`)
    pub no: u32,
    pub original: Vec<String>,
    pub romanization: Vec<String>,
    pub translation: Vec<String>,
}

impl Verse {
    /// Line-shaped constructor
    pub fn line(no: u32, original: &str, romanized: &str, translation: &str) -> Self {
        Self {
            no,
            original: vec![original.to_string()],
            romanization: vec![romanized.to_string()],
            translation: vec![translation.to_string()],
        }
    }

    /// Raw entries for a track, blanks included
    pub fn entries(&self, track: TrackKey) -> &[String] {
        match track {
            TrackKey::Original => &self.original,
            TrackKey::Romanization => &self.romanization,
            TrackKey::Translation => &self.translation,
        }
    }

    /// Renderable lines of a track (blank entries dropped)
    pub fn text(&self, track: TrackKey) -> impl Iterator<Item = &str> {
        self.entries(track)
            .iter()
            .map(String::as_str)
            .filter(|line| !line.trim().is_empty())
    }
}

/// The whole lyric collection of a song page
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
pub struct LyricsDocument {
    pub shape: SourceShape,
    pub verses: Vec<Verse>,
}

impl LyricsDocument {
    pub fn new(shape: SourceShape, verses: Vec<Verse>) -> Self {
        Self { shape, verses }
    }

    pub fn is_empty(&self) -> bool {
        self.verses.is_empty()
    }

    /// Normalize the host `lyrics` value
    ///
    /// Anything but an array is an empty document. Entries that are not
    /// objects are skipped. The document is verse-shaped if any record is.
    pub fn from_host_value(value: &Value) -> Self {
        let Some(records) = value.as_array() else {
            if !value.is_null() {
                log::warn!("lyrics is not an array, rendering as empty");
            }
            return Self::default();
        };

        let mut shape = SourceShape::Lines;
        let mut verses = Vec::with_capacity(records.len());

        for (index, record) in records.iter().enumerate() {
            let Some(map) = record.as_object() else {
                log::warn!("skipping lyric record {}: not an object", index);
                continue;
            };
            if is_verse_shaped(map) {
                shape = SourceShape::Verses;
            }
            verses.push(parse_record(index, map));
        }

        log::debug!("normalized {} lyric records as {:?}", verses.len(), shape);
        Self { shape, verses }
    }
}

fn is_verse_shaped(map: &Map<String, Value>) -> bool {
    map.contains_key("punjabi")
        || map.contains_key("romanization")
        || map.values().any(Value::is_array)
}

fn parse_record(index: usize, map: &Map<String, Value>) -> Verse {
    let fallback_no = u32::try_from(index + 1).unwrap_or(u32::MAX);
    Verse {
        no: map.get("no").and_then(parse_no).unwrap_or(fallback_no),
        original: track_entries(map, &ORIGINAL_FIELDS),
        romanization: track_entries(map, &ROMANIZATION_FIELDS),
        translation: track_entries(map, &TRANSLATION_FIELDS),
    }
}

fn parse_no(value: &Value) -> Option<u32> {
    match value {
        Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn track_entries(map: &Map<String, Value>, fields: &[&str]) -> Vec<String> {
    fields
        .iter()
        .filter_map(|field| map.get(*field))
        .find(|value| !value.is_null())
        .map(text_entries)
        .unwrap_or_default()
}

fn text_entries(value: &Value) -> Vec<String> {
    match value {
        Value::String(s) => vec![s.clone()],
        Value::Array(items) => items
            .iter()
            .filter_map(|item| item.as_str().map(str::to_string))
            .collect(),
        _ => Vec::new(),
    }
}
