//! Compact text notation for scores.
//!
//! A score is a whitespace- or comma-separated list of `pitch:value`
//! tokens, e.g. `"G5:4 D5:8 FS5:16 R:8"`:
//!
//! - pitch: a letter `A`-`G`, an optional accidental (`#`/`s` sharp,
//!   `b` flat) and an octave `0`-`8`; or `R`/`REST` for silence
//! - value: the note denomination (1 = whole ... 32 = thirty-second)

use core::fmt;

use heapless::Vec;

use crate::notes::{note_hz, NoteName, MAX_OCTAVE};
use crate::score::ScoreNote;

/// Maximum number of notes a parsed score can hold.
pub const MAX_SCORE_NOTES: usize = 128;

/// Fixed-capacity storage for a parsed score.
pub type ScoreBuffer = Vec<ScoreNote, MAX_SCORE_NOTES>;

/// Why a score failed to parse. `token` is the zero-based token index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotationError {
    /// Token is not of the form `pitch:value`
    Malformed { token: usize },
    /// Pitch letter or accidental is not a note
    UnknownNote { token: usize },
    /// Octave is missing or above 8
    BadOctave { token: usize },
    /// Value is not a number in 1..=255
    BadDenomination { token: usize },
    /// More than `MAX_SCORE_NOTES` tokens
    TooManyNotes,
}

impl fmt::Display for NotationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotationError::Malformed { token } => write!(f, "token {}: expected pitch:value", token),
            NotationError::UnknownNote { token } => write!(f, "token {}: unknown note", token),
            NotationError::BadOctave { token } => write!(f, "token {}: octave must be 0-{}", token, MAX_OCTAVE),
            NotationError::BadDenomination { token } => write!(f, "token {}: note value must be 1-255", token),
            NotationError::TooManyNotes => write!(f, "score longer than {} notes", MAX_SCORE_NOTES),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for NotationError {}

/// Parse a text score into notes.
pub fn parse_score(text: &str) -> Result<ScoreBuffer, NotationError> {
    let mut notes = ScoreBuffer::new();
    let tokens = text
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty());

    for (token, raw) in tokens.enumerate() {
        let note = parse_token(raw, token)?;
        notes.push(note).map_err(|_| NotationError::TooManyNotes)?;
    }
    Ok(notes)
}

fn parse_token(raw: &str, token: usize) -> Result<ScoreNote, NotationError> {
    let (pitch, value) = raw
        .split_once(':')
        .ok_or(NotationError::Malformed { token })?;

    let denom = match value.parse::<u8>() {
        Ok(d) if d > 0 => d,
        _ => return Err(NotationError::BadDenomination { token }),
    };

    if pitch.eq_ignore_ascii_case("r") || pitch.eq_ignore_ascii_case("rest") {
        return Ok(ScoreNote::rest(denom));
    }

    let hz = parse_pitch(pitch, token)?;
    Ok(ScoreNote::new(hz, denom))
}

fn parse_pitch(pitch: &str, token: usize) -> Result<u16, NotationError> {
    let mut chars = pitch.chars();
    let letter = chars.next().ok_or(NotationError::Malformed { token })?;
    let rest = chars.as_str();

    let (accidental, octave) = match rest.as_bytes().first() {
        Some(b'#' | b's' | b'S') => (1, &rest[1..]),
        Some(b'b') => (-1, &rest[1..]),
        _ => (0, rest),
    };

    let name = NoteName::from_letter(letter, accidental).ok_or(NotationError::UnknownNote { token })?;
    let octave = octave
        .parse::<u8>()
        .map_err(|_| NotationError::BadOctave { token })?;
    note_hz(name, octave).ok_or(NotationError::BadOctave { token })
}
