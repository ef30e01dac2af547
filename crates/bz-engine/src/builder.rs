//! Notation-to-step melody compiler.
//!
//! The builder writes into a buffer the caller owns and never allocates.
//! Every error (bad tempo or gap, zero-length note, missing input,
//! capacity overflow) clears a single validity flag; compilation carries
//! on as a no-op and the caller checks [`MelodyBuilder::is_valid`] at the
//! end.

use bz_ir::{denom_to_ms, Melody, MelodyContext, ScoreNote, ScoreView, Step};
use log::{debug, warn};

/// Fluent compiler from score notation (or raw tones) into [`Step`]s.
///
/// ```
/// use bz_engine::MelodyBuilder;
/// use bz_ir::{durations, notes, Step};
///
/// let mut buffer = [Step::default(); 16];
/// let mut builder = MelodyBuilder::new(&mut buffer);
/// builder
///     .set_tempo(120)
///     .set_gap(20)
///     .add_note(notes::A4, durations::QUARTER)
///     .add_rest(durations::EIGHTH);
///
/// assert!(builder.is_valid());
/// assert_eq!(
///     builder.build().steps(),
///     &[Step::tone(440, 480), Step::rest(20), Step::rest(250)]
/// );
/// ```
#[derive(Debug)]
pub struct MelodyBuilder<'a> {
    buffer: &'a mut [Step],
    len: usize,
    ctx: MelodyContext,
    ok: bool,
}

impl<'a> MelodyBuilder<'a> {
    /// Compile into `buffer`; its length is the step capacity.
    pub fn new(buffer: &'a mut [Step]) -> Self {
        let ok = !buffer.is_empty();
        Self {
            buffer,
            len: 0,
            ctx: MelodyContext::new(),
            ok,
        }
    }

    /// Start a new melody. Clears the steps and the validity flag; with
    /// `to_defaults` the tempo and gap go back to 120 bpm / 0 ms as well.
    pub fn reset(&mut self, to_defaults: bool) -> &mut Self {
        self.len = 0;
        if to_defaults {
            self.ctx = MelodyContext::new();
        }
        self.ok = !self.buffer.is_empty();
        self
    }

    /// Tempo in quarter-note beats per minute (1..=300).
    pub fn set_tempo(&mut self, bpm: u16) -> &mut Self {
        if !self.ok {
            return self;
        }
        if MelodyContext::is_valid_bpm(bpm) {
            self.ctx.bpm = bpm;
        } else {
            warn!("rejected tempo {} bpm", bpm);
            self.ok = false;
        }
        self
    }

    /// Articulation gap after each sounding note (0..=1000 ms).
    pub fn set_gap(&mut self, gap_ms: u16) -> &mut Self {
        if !self.ok {
            return self;
        }
        if MelodyContext::is_valid_gap(gap_ms) {
            self.ctx.gap_ms = gap_ms;
        } else {
            warn!("rejected gap {} ms", gap_ms);
            self.ok = false;
        }
        self
    }

    /// Add a note (or a rest when `hz` is 0) in musical notation.
    ///
    /// A sounding note whose slot is longer than `MIN_PLAY_MS` is split
    /// into a tone and a trailing rest of the configured gap, clamped so
    /// the tone keeps at least `MIN_PLAY_MS`.
    pub fn add_note(&mut self, hz: u16, denom: u8) -> &mut Self {
        if !self.ok {
            return self;
        }
        let Some(slot_ms) = self.slot_ms(denom) else {
            return self;
        };
        if hz == 0 {
            self.push_step(Step::rest(slot_ms));
            return self;
        }

        let (play_ms, rest_ms) = split_gap(slot_ms, self.ctx.gap_ms as u32);
        debug!(
            "note hz={} denom={} slot={} play={} rest={}",
            hz, denom, slot_ms, play_ms, rest_ms
        );
        self.push_step(Step::tone(hz, play_ms));
        if rest_ms > 0 {
            self.push_step(Step::rest(rest_ms));
        }
        self
    }

    /// Add a rest in musical notation; no gap splitting.
    pub fn add_rest(&mut self, denom: u8) -> &mut Self {
        if !self.ok {
            return self;
        }
        if let Some(slot_ms) = self.slot_ms(denom) {
            self.push_step(Step::rest(slot_ms));
        }
        self
    }

    /// Add a tone verbatim, bypassing tempo and gap.
    pub fn add_tone_ms(&mut self, hz: u16, duration_ms: u32) -> &mut Self {
        self.push_raw(Step::tone(hz, duration_ms))
    }

    /// Add a rest verbatim, bypassing tempo.
    pub fn add_rest_ms(&mut self, duration_ms: u32) -> &mut Self {
        self.push_raw(Step::rest(duration_ms))
    }

    /// Append the first `count` notes of `notes`.
    ///
    /// `None` with a non-zero count, or a count past the end of the
    /// slice, invalidates the builder. Stops at the first failure.
    pub fn append_score_array(&mut self, notes: Option<&[ScoreNote]>, count: usize) -> &mut Self {
        if !self.ok {
            return self;
        }
        let notes = match notes {
            Some(notes) if count <= notes.len() => &notes[..count],
            None if count == 0 => return self,
            _ => {
                warn!("score of {} notes has no backing data", count);
                self.ok = false;
                return self;
            }
        };
        for note in notes {
            if !self.ok {
                break;
            }
            self.add_note(note.hz, note.denom);
        }
        self
    }

    /// Append every note of a score slice.
    pub fn append_score(&mut self, notes: &[ScoreNote]) -> &mut Self {
        self.append_score_array(Some(notes), notes.len())
    }

    /// Append a borrowed score view (e.g. a preset).
    pub fn append_view(&mut self, view: ScoreView<'_>) -> &mut Self {
        self.append_score(view.notes())
    }

    /// Append `count` notes pulled one at a time from `reader(index)`.
    ///
    /// For sources that cannot hand out a contiguous slice.
    pub fn append_with<F>(&mut self, mut reader: F, count: usize) -> &mut Self
    where
        F: FnMut(usize) -> ScoreNote,
    {
        for index in 0..count {
            if !self.ok {
                break;
            }
            let note = reader(index);
            self.add_note(note.hz, note.denom);
        }
        self
    }

    /// Run arbitrary composition code against this builder.
    pub fn compose<F>(&mut self, f: F) -> &mut Self
    where
        F: FnOnce(&mut Self),
    {
        f(self);
        self
    }

    /// View of the steps compiled so far. Always available; check
    /// [`is_valid`](Self::is_valid) before trusting it.
    pub fn build(&self) -> Melody<'_> {
        Melody::new(&self.buffer[..self.len])
    }

    /// Consume the builder, keeping the compiled steps for the buffer's
    /// whole lifetime.
    pub fn into_melody(self) -> Melody<'a> {
        let steps: &'a [Step] = self.buffer;
        Melody::new(&steps[..self.len])
    }

    pub fn is_valid(&self) -> bool {
        self.ok
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    pub fn context(&self) -> MelodyContext {
        self.ctx
    }

    fn slot_ms(&mut self, denom: u8) -> Option<u32> {
        let slot = denom_to_ms(denom, self.ctx.bpm);
        if slot.is_none() {
            warn!("zero-length note: denom={} bpm={}", denom, self.ctx.bpm);
            self.ok = false;
        }
        slot
    }

    fn push_raw(&mut self, step: Step) -> &mut Self {
        if !self.ok {
            return self;
        }
        if step.duration_ms == 0 {
            warn!("rejected zero-duration step hz={}", step.freq_hz);
            self.ok = false;
            return self;
        }
        self.push_step(step);
        self
    }

    fn push_step(&mut self, step: Step) {
        if !self.ok {
            return;
        }
        match self.buffer.get_mut(self.len) {
            Some(slot) => {
                debug!("push step {} hz={} ms={}", self.len, step.freq_hz, step.duration_ms);
                *slot = step;
                self.len += 1;
            }
            None => {
                warn!("melody overflow at {} steps", self.len);
                self.ok = false;
            }
        }
    }
}

/// Split a sounding slot into (play, rest) around the articulation gap.
fn split_gap(slot_ms: u32, gap_ms: u32) -> (u32, u32) {
    if slot_ms <= MelodyContext::MIN_PLAY_MS {
        return (slot_ms, 0);
    }
    let rest_ms = gap_ms.min(slot_ms - MelodyContext::MIN_PLAY_MS);
    (slot_ms - rest_ms, rest_ms)
}
