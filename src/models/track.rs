//! Lyric tracks
//!
//! A song line carries up to three parallel renderings of the same text.
//! Each one can be shown or hidden independently on the song page.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One of the three parallel text representations of a lyric
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum TrackKey {
    /// Original script (Gurmukhi on the song pages)
    #[serde(alias = "punjabi")]
    Original,

    /// Latin transliteration of the original
    #[serde(alias = "romanized")]
    Romanization,

    /// English translation
    #[serde(alias = "translation_en")]
    Translation,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrackError {
    #[error("unknown track key: '{0}'")]
    UnknownTrack(String),
}

impl TrackKey {
    /// Every track, in control-bar order
    pub const ALL: [TrackKey; 3] = [
        TrackKey::Original,
        TrackKey::Romanization,
        TrackKey::Translation,
    ];

    /// Canonical key, as written back to JavaScript
    pub fn as_str(self) -> &'static str {
        match self {
            TrackKey::Original => "original",
            TrackKey::Romanization => "romanization",
            TrackKey::Translation => "translation",
        }
    }

    /// Label shown on the toggle control unless the host overrides it
    pub fn default_label(self) -> &'static str {
        match self {
            TrackKey::Original => "Original",
            TrackKey::Romanization => "Romanization",
            TrackKey::Translation => "Translation",
        }
    }
}

impl FromStr for TrackKey {
    type Err = TrackError;

    /// Accepts every spelling the song pages have used for a track
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "original" | "punjabi" => Ok(TrackKey::Original),
            "romanization" | "romanized" => Ok(TrackKey::Romanization),
            "translation" | "translation_en" => Ok(TrackKey::Translation),
            _ => Err(TrackError::UnknownTrack(s.to_string())),
        }
    }
}

impl fmt::Display for TrackKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_host_spellings() {
        assert_eq!("punjabi".parse::<TrackKey>(), Ok(TrackKey::Original));
        assert_eq!("original".parse::<TrackKey>(), Ok(TrackKey::Original));
        assert_eq!("romanized".parse::<TrackKey>(), Ok(TrackKey::Romanization));
        assert_eq!(" Translation ".parse::<TrackKey>(), Ok(TrackKey::Translation));
    }

    #[test]
    fn test_parse_unknown_key() {
        let err = "gurmukhi".parse::<TrackKey>().unwrap_err();
        assert_eq!(err, TrackError::UnknownTrack("gurmukhi".to_string()));
    }

    #[test]
    fn test_serde_aliases() {
        let key: TrackKey = serde_json::from_str("\"punjabi\"").unwrap();
        assert_eq!(key, TrackKey::Original);
        assert_eq!(serde_json::to_string(&key).unwrap(), "\"original\"");
    }
}
