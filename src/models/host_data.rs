//! Host page payload
//!
//! The page template embeds a global object before loading the module:
//!
//! ```js
//! window.SONG_PAGE_DATA = {
//!     selected: { punjabi: true, romanization: true, translation: false },
//!     lyrics: [{ no: 1, original: "...", romanized: "...", translation: "..." }],
//!     labels: { translation: "English" },
//! };
//! ```
//!
//! Every field is optional. Parsing never fails: missing or malformed parts
//! fall back to their defaults.

use serde_json::Value;
use std::collections::BTreeMap;

use super::toggle_state::ToggleState;
use super::track::TrackKey;
use super::verse::LyricsDocument;

#[derive(Clone, Debug, PartialEq, Default)]
pub struct HostData {
    pub selected: ToggleState,
    pub lyrics: LyricsDocument,
    /// Control label overrides
    pub labels: BTreeMap<TrackKey, String>,
}

impl HostData {
    pub fn from_value(value: &Value) -> Self {
        if !value.is_object() {
            if !value.is_null() {
                log::warn!("song page data is not an object, using defaults");
            }
            return Self::default();
        }

        Self {
            selected: ToggleState::from_host_value(&value["selected"]),
            lyrics: LyricsDocument::from_host_value(&value["lyrics"]),
            labels: parse_labels(&value["labels"]),
        }
    }

    /// Fill in labels the host did not set from the controls' own text
    ///
    /// Host labels win; for a track named by several controls the first
    /// non-blank text wins.
    pub fn with_template_labels<I>(mut self, template: I) -> Self
    where
        I: IntoIterator<Item = (TrackKey, String)>,
    {
        for (key, text) in template {
            let text = text.trim();
            if !text.is_empty() {
                self.labels.entry(key).or_insert_with(|| text.to_string());
            }
        }
        self
    }
}

/// Control label for `key`, falling back to the track's default label
pub fn label_for(labels: &BTreeMap<TrackKey, String>, key: TrackKey) -> String {
    labels
        .get(&key)
        .cloned()
        .unwrap_or_else(|| key.default_label().to_string())
}

fn parse_labels(value: &Value) -> BTreeMap<TrackKey, String> {
    let Some(map) = value.as_object() else {
        return BTreeMap::new();
    };

    map.iter()
        .filter_map(|(key, label)| {
            let track = key.parse::<TrackKey>().ok()?;
            let label = label.as_str()?.trim();
            (!label.is_empty()).then(|| (track, label.to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_absent_payload_is_default() {
        let data = HostData::from_value(&Value::Null);
        assert_eq!(data.selected, ToggleState::default());
        assert!(data.lyrics.is_empty());
        assert_eq!(label_for(&data.labels, TrackKey::Original), "Original");
    }

    #[test]
    fn test_full_payload() {
        let data = HostData::from_value(&json!({
            "selected": { "punjabi": true, "romanization": false, "translation": true },
            "lyrics": [{ "no": 1, "original": "ਸਤ", "romanized": "sat", "translation": "truth" }],
            "labels": { "punjabi": "ਪੰਜਾਬੀ", "translation": "  ", "bogus": "x" }
        }));
        assert_eq!(data.selected, ToggleState::new(true, false, true).unwrap());
        assert_eq!(data.lyrics.verses.len(), 1);
        assert_eq!(label_for(&data.labels, TrackKey::Original), "ਪੰਜਾਬੀ");
        assert_eq!(label_for(&data.labels, TrackKey::Translation), "Translation");
        assert_eq!(data.labels.len(), 1);
    }

    #[test]
    fn test_template_labels_fill_gaps_only() {
        let data = HostData::from_value(&json!({ "labels": { "translation": "English" } }))
            .with_template_labels([
                (TrackKey::Original, "  Punjabi ".to_string()),
                (TrackKey::Original, "Gurmukhi".to_string()),
                (TrackKey::Romanization, "   ".to_string()),
                (TrackKey::Translation, "Translation".to_string()),
            ]);
        assert_eq!(label_for(&data.labels, TrackKey::Original), "Punjabi");
        assert_eq!(label_for(&data.labels, TrackKey::Romanization), "Romanization");
        assert_eq!(label_for(&data.labels, TrackKey::Translation), "English");
    }

    #[test]
    fn test_missing_selected_uses_default() {
        let data = HostData::from_value(&json!({ "lyrics": "not a list" }));
        assert_eq!(data.selected, ToggleState::default());
        assert!(data.lyrics.is_empty());
    }
}
