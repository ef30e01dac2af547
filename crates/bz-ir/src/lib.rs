//! Core melody types for the buzzer player.
//!
//! This crate defines the data that flows between the melody builder
//! and the playback scheduler: time-domain steps, notation-domain score
//! notes, the preset tables, and a small text notation parser.
//!
//! Designed to be `no_std` compatible; nothing here allocates.

#![cfg_attr(not(feature = "std"), no_std)]

mod context;
pub mod durations;
mod notation;
pub mod notes;
mod presets;
mod score;
mod step;

pub use context::{denom_to_ms, MelodyContext};
pub use notation::{parse_score, NotationError, ScoreBuffer, MAX_SCORE_NOTES};
pub use notes::NoteName;
pub use presets::{preset_by_id, preset_by_index, PresetId, UnknownPreset};
pub use score::{ScoreNote, ScoreView};
pub use step::{Melody, Step};
