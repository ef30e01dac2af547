//! Melody compiler and playback scheduler for the buzzer player.
//!
//! [`MelodyBuilder`] compiles notation into a caller-owned step buffer;
//! [`Player`] walks the resulting [`Melody`](bz_ir::Melody) one step at a
//! time, driven by a non-blocking [`Player::update`] poll.

#![cfg_attr(not(feature = "std"), no_std)]

mod builder;
mod clock;
mod gate;
mod player;
mod state;
mod tone;

pub use builder::MelodyBuilder;
pub use clock::{Clock, SimClock};
pub use gate::ElapsedGate;
pub use player::Player;
pub use state::PlayerState;
pub use tone::ToneOutput;
