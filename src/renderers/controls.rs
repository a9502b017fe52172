//! Toggle control rendering

use crate::models::{ToggleState, TrackKey};

use super::display_list::ControlView;

/// Visual state for each control, in the order of `keys`
///
/// A control is disabled when its track is locked (the last visible one).
pub fn render_controls<F>(state: &ToggleState, keys: &[TrackKey], label: F) -> Vec<ControlView>
where
    F: Fn(TrackKey) -> String,
{
    keys.iter()
        .map(|&key| ControlView {
            key,
            label: label(key),
            active: state.is_active(key),
            disabled: state.is_locked(key),
        })
        .collect()
}
