//! Host audio backends for the buzzer player.
//!
//! Provides the pieces that stand in for buzzer hardware on a desktop:
//! a square-wave [`ToneOutput`](bz_engine::ToneOutput) over cpal, the
//! oscillator it runs, and a monotonic clock.

mod clock;
mod cpal_tone;
mod error;
mod square;

pub use clock::InstantClock;
pub use cpal_tone::{CpalTone, ToneCommand};
pub use error::AudioError;
pub use square::SquareOscillator;
