//! CSS classes of the song page template
//!
//! The stylesheet itself lives with the template; these are the utility
//! classes it expects on generated lyric elements.

use crate::models::{SourceShape, TrackKey};

pub const PLACEHOLDER: &str = "text-white/60 text-center py-8";

pub const BLOCK_LABEL: &str = "text-white/40 text-xs font-mono mb-2";

pub fn block(shape: SourceShape) -> &'static str {
    match shape {
        SourceShape::Lines => "space-y-2 pb-4 border-b border-white/10 last:border-0",
        // verses carry several lines per track, so they get wider separation
        SourceShape::Verses => "space-y-3 pb-6 mb-6 border-b border-white/10 last:border-0 last:mb-0",
    }
}

pub fn track_group(shape: SourceShape) -> &'static str {
    match shape {
        SourceShape::Lines => "contents",
        SourceShape::Verses => "space-y-1",
    }
}

pub fn track_line(track: TrackKey) -> &'static str {
    match track {
        TrackKey::Original => "text-white font-medium text-base sm:text-lg leading-relaxed",
        TrackKey::Romanization => "text-white/80 italic text-sm sm:text-base leading-relaxed",
        TrackKey::Translation => "text-emerald-400 text-sm sm:text-base leading-relaxed",
    }
}

/// Inline `(cursor, opacity)` for a control
pub fn control_affordance(disabled: bool) -> (&'static str, &'static str) {
    if disabled {
        ("not-allowed", "0.7")
    } else {
        ("pointer", "1")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_track_is_styled_distinctly() {
        let classes: Vec<_> = TrackKey::ALL.iter().map(|t| track_line(*t)).collect();
        assert_ne!(classes[0], classes[1]);
        assert_ne!(classes[1], classes[2]);
        assert_ne!(classes[0], classes[2]);
    }

    #[test]
    fn test_disabled_control_affordance() {
        assert_eq!(control_affordance(true), ("not-allowed", "0.7"));
        assert_eq!(control_affordance(false), ("pointer", "1"));
    }
}
