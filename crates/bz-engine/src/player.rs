//! Non-blocking melody playback state machine.

use bz_ir::{Melody, Step};
use log::{info, trace};

use crate::clock::Clock;
use crate::gate::ElapsedGate;
use crate::state::PlayerState;
use crate::tone::ToneOutput;

/// Plays a [`Melody`] on a [`ToneOutput`], one step at a time.
///
/// Nothing here blocks: [`update`](Self::update) does a bounded amount of
/// work (one state check, at most one output call, one gate check) and
/// must be called from the host's main loop. A player is built once and
/// reused for any number of melodies.
///
/// Whenever the state is not [`PlayerState::Idle`], a non-empty melody is
/// bound and the current index is in bounds.
pub struct Player<'m, T: ToneOutput, C: Clock> {
    output: T,
    clock: C,
    melody: Option<Melody<'m>>,
    index: usize,
    looping: bool,
    gate: ElapsedGate,
    state: PlayerState,
}

impl<'m, T: ToneOutput, C: Clock> Player<'m, T, C> {
    pub fn new(output: T, clock: C) -> Self {
        Self {
            output,
            clock,
            melody: None,
            index: 0,
            looping: false,
            gate: ElapsedGate::new(),
            state: PlayerState::Idle,
        }
    }

    /// Bind `melody` and start from its first step on the next update.
    ///
    /// Anything already playing is stopped first. An empty melody goes
    /// straight back to idle without ever starting the output.
    pub fn play(&mut self, melody: Melody<'m>, looping: bool) {
        info!("play steps={} loop={}", melody.len(), looping);
        if self.is_playing() {
            self.stop();
        }
        if melody.is_empty() {
            self.stop();
            return;
        }
        self.melody = Some(melody);
        self.looping = looping;
        self.index = 0;
        self.state = PlayerState::StartStep;
    }

    /// Silence the output and return to idle. Safe to call at any time.
    pub fn stop(&mut self) {
        self.output.stop();
        self.melody = None;
        self.looping = false;
        self.index = 0;
        self.state = PlayerState::Idle;
        self.gate.disarm();
    }

    pub fn is_playing(&self) -> bool {
        !self.state.is_idle()
    }

    /// Advance the state machine by at most one transition.
    pub fn update(&mut self) {
        match self.state {
            PlayerState::Idle => {}
            PlayerState::StartStep => self.start_step(),
            PlayerState::PlayingStep => {
                if self.gate.is_elapsed(&self.clock) {
                    self.state = PlayerState::AdvanceStep;
                }
            }
            PlayerState::AdvanceStep => self.advance_step(),
        }
    }

    pub fn state(&self) -> PlayerState {
        self.state
    }

    pub fn current_index(&self) -> usize {
        self.index
    }

    /// The step at the current index, when playing.
    pub fn current_step(&self) -> Option<&'m Step> {
        self.melody.and_then(|m| m.get(self.index))
    }

    pub fn is_looping(&self) -> bool {
        self.looping
    }

    pub fn melody(&self) -> Option<Melody<'m>> {
        self.melody
    }

    pub fn output(&self) -> &T {
        &self.output
    }

    pub fn output_mut(&mut self) -> &mut T {
        &mut self.output
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn into_parts(self) -> (T, C) {
        (self.output, self.clock)
    }

    fn start_step(&mut self) {
        let Some(step) = self.current_step() else {
            self.stop();
            return;
        };
        if step.is_rest() {
            self.output.stop();
        } else {
            self.output.start(step.freq_hz);
        }
        self.gate.arm(&self.clock, step.duration_us());
        trace!("step {} hz={} ms={}", self.index, step.freq_hz, step.duration_ms);
        self.state = PlayerState::PlayingStep;
    }

    fn advance_step(&mut self) {
        let len = self.melody.map_or(0, |m| m.len());
        self.index += 1;
        if self.index < len {
            self.state = PlayerState::StartStep;
        } else if self.looping && len > 0 {
            self.index = 0;
            self.state = PlayerState::StartStep;
        } else {
            info!("melody finished");
            self.stop();
        }
    }
}
