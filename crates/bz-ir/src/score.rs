//! Notation-domain score types.

/// A note in a musical score, before tempo-based time conversion.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ScoreNote {
    /// Frequency in Hz (`notes::REST` for silence)
    pub hz: u16,
    /// Note value: 1 = whole, 2 = half, 4 = quarter ... 32 = thirty-second
    pub denom: u8,
}

impl ScoreNote {
    pub const fn new(hz: u16, denom: u8) -> Self {
        Self { hz, denom }
    }

    pub const fn rest(denom: u8) -> Self {
        Self { hz: 0, denom }
    }

    pub const fn is_rest(&self) -> bool {
        self.hz == 0
    }
}

/// A borrowed, non-owning view of a score (used for the preset tables).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScoreView<'a> {
    notes: &'a [ScoreNote],
}

impl<'a> ScoreView<'a> {
    pub const fn new(notes: &'a [ScoreNote]) -> Self {
        Self { notes }
    }

    pub const fn empty() -> Self {
        Self { notes: &[] }
    }

    pub const fn notes(&self) -> &'a [ScoreNote] {
        self.notes
    }

    pub const fn len(&self) -> usize {
        self.notes.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}

impl<'a> From<&'a [ScoreNote]> for ScoreView<'a> {
    fn from(notes: &'a [ScoreNote]) -> Self {
        Self::new(notes)
    }
}
