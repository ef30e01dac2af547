//! Note values in musical notation.
//!
//! These are relative; the tempo turns them into milliseconds
//! (see [`denom_to_ms`](crate::denom_to_ms)). At 120 bpm a quarter note
//! lasts 500 ms.

pub const WHOLE: u8 = 1;
pub const HALF: u8 = 2;
pub const QUARTER: u8 = 4;
pub const EIGHTH: u8 = 8;
pub const SIXTEENTH: u8 = 16;
pub const THIRTY_SECOND: u8 = 32;

/// Every standard note value, longest first.
pub const ALL: [u8; 6] = [WHOLE, HALF, QUARTER, EIGHTH, SIXTEENTH, THIRTY_SECOND];
