//! Built-in preset scores for common UI sounds.

use core::fmt;
use core::str::FromStr;

use crate::durations::{EIGHTH, HALF, QUARTER, SIXTEENTH};
use crate::notes::{C5, C6, D5, E5, G4, G5, GS5};
use crate::score::{ScoreNote, ScoreView};

/// Identifier of a built-in preset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PresetId {
    Success,
    Error,
    Notification,
    Warning,
    Startup,
    Shutdown,
    ButtonClick,
}

impl PresetId {
    pub const ALL: [PresetId; 7] = [
        PresetId::Success,
        PresetId::Error,
        PresetId::Notification,
        PresetId::Warning,
        PresetId::Startup,
        PresetId::Shutdown,
        PresetId::ButtonClick,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            PresetId::Success => "success",
            PresetId::Error => "error",
            PresetId::Notification => "notification",
            PresetId::Warning => "warning",
            PresetId::Startup => "startup",
            PresetId::Shutdown => "shutdown",
            PresetId::ButtonClick => "button-click",
        }
    }

    /// Preset for a raw index into [`PresetId::ALL`].
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }
}

impl fmt::Display for PresetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned by [`PresetId::from_str`] for names that match no preset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnknownPreset;

impl fmt::Display for UnknownPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unknown preset")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for UnknownPreset {}

impl FromStr for PresetId {
    type Err = UnknownPreset;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("click") {
            return Ok(PresetId::ButtonClick);
        }
        Self::ALL
            .iter()
            .copied()
            .find(|p| p.name().eq_ignore_ascii_case(s))
            .ok_or(UnknownPreset)
    }
}

static TONE_SUCCESS: [ScoreNote; 4] = [
    ScoreNote::new(C5, EIGHTH),
    ScoreNote::new(E5, EIGHTH),
    ScoreNote::new(G5, QUARTER),
    ScoreNote::new(C6, HALF),
];

static TONE_ERROR: [ScoreNote; 4] = [
    ScoreNote::new(C6, EIGHTH),
    ScoreNote::new(GS5, EIGHTH),
    ScoreNote::new(E5, QUARTER),
    ScoreNote::new(C5, HALF),
];

static TONE_NOTIFICATION: [ScoreNote; 4] = [
    ScoreNote::new(E5, SIXTEENTH),
    ScoreNote::new(G5, SIXTEENTH),
    ScoreNote::new(C6, EIGHTH),
    ScoreNote::new(G5, EIGHTH),
];

static TONE_WARNING: [ScoreNote; 5] = [
    ScoreNote::new(C5, EIGHTH),
    ScoreNote::new(D5, EIGHTH),
    ScoreNote::new(E5, EIGHTH),
    ScoreNote::new(D5, EIGHTH),
    ScoreNote::new(C5, QUARTER),
];

static TONE_STARTUP: [ScoreNote; 5] = [
    ScoreNote::new(G4, EIGHTH),
    ScoreNote::new(C5, EIGHTH),
    ScoreNote::new(E5, EIGHTH),
    ScoreNote::new(G5, EIGHTH),
    ScoreNote::new(C6, QUARTER),
];

static TONE_SHUTDOWN: [ScoreNote; 5] = [
    ScoreNote::new(C6, QUARTER),
    ScoreNote::new(G5, EIGHTH),
    ScoreNote::new(E5, EIGHTH),
    ScoreNote::new(C5, EIGHTH),
    ScoreNote::new(G4, EIGHTH),
];

static TONE_BUTTON_CLICK: [ScoreNote; 2] = [
    ScoreNote::new(E5, SIXTEENTH),
    ScoreNote::new(G5, SIXTEENTH),
];

/// Score for a preset.
pub fn preset_by_id(id: PresetId) -> ScoreView<'static> {
    let notes: &'static [ScoreNote] = match id {
        PresetId::Success => &TONE_SUCCESS,
        PresetId::Error => &TONE_ERROR,
        PresetId::Notification => &TONE_NOTIFICATION,
        PresetId::Warning => &TONE_WARNING,
        PresetId::Startup => &TONE_STARTUP,
        PresetId::Shutdown => &TONE_SHUTDOWN,
        PresetId::ButtonClick => &TONE_BUTTON_CLICK,
    };
    ScoreView::new(notes)
}

/// Score for a raw preset index; unknown indices yield an empty view.
pub fn preset_by_index(index: u8) -> ScoreView<'static> {
    PresetId::from_index(index)
        .map(preset_by_id)
        .unwrap_or_else(ScoreView::empty)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_preset_has_notes() {
        for id in PresetId::ALL {
            let view = preset_by_id(id);
            assert!(!view.is_empty(), "{} is empty", id);
            assert!(view.notes().iter().all(|n| n.denom > 0));
        }
    }

    #[test]
    fn success_content() {
        let view = preset_by_id(PresetId::Success);
        assert_eq!(
            view.notes(),
            &[
                ScoreNote::new(523, 8),
                ScoreNote::new(659, 8),
                ScoreNote::new(784, 4),
                ScoreNote::new(1047, 2),
            ]
        );
    }

    #[test]
    fn unknown_index_is_empty() {
        assert!(preset_by_index(7).is_empty());
        assert!(preset_by_index(u8::MAX).is_empty());
        assert_eq!(preset_by_index(4), preset_by_id(PresetId::Startup));
    }

    #[test]
    fn names_round_trip() {
        for id in PresetId::ALL {
            assert_eq!(id.name().parse::<PresetId>(), Ok(id));
        }
        assert_eq!("STARTUP".parse::<PresetId>(), Ok(PresetId::Startup));
        assert_eq!("click".parse::<PresetId>(), Ok(PresetId::ButtonClick));
        assert_eq!("fanfare".parse::<PresetId>(), Err(UnknownPreset));
    }
}
