//! Two-phrase demo melody.

use bz_engine::MelodyBuilder;
use bz_ir::durations::{EIGHTH, HALF, QUARTER};
use bz_ir::notes::{A5, B5, C5, D5, E5, FS5, G5, REST};

pub const DEMO_TEMPO: u16 = 76;
pub const DEMO_GAP_MS: u16 = 15;

/// Append the demo phrases to `builder` at its current tempo and gap.
pub fn demo_melody(builder: &mut MelodyBuilder<'_>) {
    // Phrase A
    builder
        .add_note(G5, QUARTER)
        .add_note(D5, QUARTER)
        .add_note(B5, QUARTER)
        .add_note(G5, EIGHTH)
        .add_note(D5, EIGHTH)
        .add_note(C5, EIGHTH)
        .add_note(B5, EIGHTH)
        .add_note(A5, EIGHTH)
        .add_note(G5, EIGHTH)
        .add_note(G5, EIGHTH)
        .add_note(FS5, EIGHTH)
        .add_note(E5, EIGHTH)
        .add_note(D5, EIGHTH)
        // phrase pause, longer than the gap
        .add_note(REST, EIGHTH);

    // Phrase B
    builder
        .add_note(G5, QUARTER)
        .add_note(A5, QUARTER)
        .add_note(B5, QUARTER)
        .add_note(REST, EIGHTH)
        .add_note(D5, EIGHTH)
        .add_note(C5, EIGHTH)
        .add_note(B5, EIGHTH)
        .add_note(A5, EIGHTH)
        .add_note(G5, EIGHTH)
        .add_note(D5, HALF);
}
