//! Player state machine states.

/// Where the player is in its step cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PlayerState {
    /// Not playing
    #[default]
    Idle,
    /// About to begin the step at the current index
    StartStep,
    /// Waiting for the current step's interval to elapse
    PlayingStep,
    /// Moving to the next index (or looping / finishing)
    AdvanceStep,
}

impl PlayerState {
    pub const fn is_idle(self) -> bool {
        matches!(self, PlayerState::Idle)
    }
}
