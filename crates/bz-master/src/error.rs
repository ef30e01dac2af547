//! Controller error type.

use bz_audio::AudioError;
use bz_ir::NotationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MasterError {
    #[error(transparent)]
    Audio(#[from] AudioError),
    #[error("config: {0}")]
    Config(#[from] toml::de::Error),
    #[error("score: {0}")]
    Notation(#[from] NotationError),
    #[error("melody failed to compile ({steps} of {capacity} steps written)")]
    InvalidMelody { steps: usize, capacity: usize },
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("wav: {0}")]
    Wav(#[from] hound::Error),
    #[error("playback thread exited during startup")]
    PlaybackThread,
}
