//! Track visibility state
//!
//! `ToggleState` is the only mutable state on a song page. It records which
//! tracks are visible and guarantees that at least one of them always is.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::track::TrackKey;

/// Result of a toggle request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The track was flipped; `active` is its new visibility
    Flipped { active: bool },

    /// The track is the last visible one and stays on
    Rejected,
}

/// Which tracks are currently visible
///
/// Invariant: `active_count() >= 1`.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToggleState {
    original: bool,
    romanization: bool,
    translation: bool,
}

impl Default for ToggleState {
    fn default() -> Self {
        Self {
            original: true,
            romanization: true,
            translation: false,
        }
    }
}

impl ToggleState {
    /// Build a state from explicit flags
    ///
    /// Returns `None` when every flag is off.
    pub fn new(original: bool, romanization: bool, translation: bool) -> Option<Self> {
        let state = Self {
            original,
            romanization,
            translation,
        };
        (state.active_count() > 0).then_some(state)
    }

    /// Build a state from the host page's `selected` object
    ///
    /// Keys go through `TrackKey` parsing, values through JS truthiness.
    /// A key missing from the map is off. Anything that is not an object, or
    /// a map that would leave no track visible, yields the default state.
    pub fn from_host_value(value: &Value) -> Self {
        let Some(map) = value.as_object() else {
            if !value.is_null() {
                log::warn!("selected tracks is not an object, using defaults");
            }
            return Self::default();
        };

        let mut state = Self {
            original: false,
            romanization: false,
            translation: false,
        };

        for (key, flag) in map {
            match key.parse::<TrackKey>() {
                Ok(track) => {
                    if is_truthy(flag) {
                        *state.slot(track) = true;
                    }
                }
                Err(e) => log::warn!("ignoring selected entry: {}", e),
            }
        }

        if state.active_count() == 0 {
            log::warn!("selected tracks has no visible track, using defaults");
            return Self::default();
        }
        state
    }

    pub fn is_active(&self, key: TrackKey) -> bool {
        match key {
            TrackKey::Original => self.original,
            TrackKey::Romanization => self.romanization,
            TrackKey::Translation => self.translation,
        }
    }

    pub fn active_count(&self) -> usize {
        TrackKey::ALL
            .iter()
            .filter(|key| self.is_active(**key))
            .count()
    }

    /// Whether `key` is the sole visible track and therefore cannot be hidden
    pub fn is_locked(&self, key: TrackKey) -> bool {
        self.active_count() == 1 && self.is_active(key)
    }

    /// Flip the visibility of `key` unless it is locked
    pub fn toggle(&mut self, key: TrackKey) -> ToggleOutcome {
        if self.is_locked(key) {
            return ToggleOutcome::Rejected;
        }
        let slot = self.slot(key);
        *slot = !*slot;
        ToggleOutcome::Flipped { active: *slot }
    }

    /// Visible tracks in `TrackKey::ALL` order
    #[cfg(test)]
    pub(crate) fn active_tracks(&self) -> Vec<TrackKey> {
        TrackKey::ALL
            .into_iter()
            .filter(|key| self.is_active(*key))
            .collect()
    }

    fn slot(&mut self, key: TrackKey) -> &mut bool {
        match key {
            TrackKey::Original => &mut self.original,
            TrackKey::Romanization => &mut self.romanization,
            TrackKey::Translation => &mut self.translation,
        }
    }
}

impl<'de> Deserialize<'de> for ToggleState {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_host_value(&value))
    }
}

/// JavaScript truthiness of a JSON value
pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(false),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
