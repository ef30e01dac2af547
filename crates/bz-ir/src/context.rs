//! Compilation parameters and the notation-to-milliseconds conversion.

/// Musical parameters applied while compiling a score into steps.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MelodyContext {
    /// Tempo in quarter-note beats per minute
    pub bpm: u16,
    /// Articulation gap inserted after each sounding note, in ms
    pub gap_ms: u16,
}

impl MelodyContext {
    pub const DEFAULT_BPM: u16 = 120;
    pub const MIN_BPM: u16 = 1;
    pub const MAX_BPM: u16 = 300;
    pub const MAX_GAP_MS: u16 = 1000;

    /// Shortest audible portion a sounding note keeps after the gap is taken.
    pub const MIN_PLAY_MS: u32 = 10;

    pub const fn new() -> Self {
        Self {
            bpm: Self::DEFAULT_BPM,
            gap_ms: 0,
        }
    }

    pub const fn is_valid_bpm(bpm: u16) -> bool {
        bpm >= Self::MIN_BPM && bpm <= Self::MAX_BPM
    }

    pub const fn is_valid_gap(gap_ms: u16) -> bool {
        gap_ms <= Self::MAX_GAP_MS
    }
}

impl Default for MelodyContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert a note value at a tempo into its slot duration in milliseconds.
///
/// `ms = 240000 / (bpm * denom)`, rounded down and floored at 1 ms.
/// Returns `None` when `denom` or `bpm` is zero.
pub const fn denom_to_ms(denom: u8, bpm: u16) -> Option<u32> {
    if denom == 0 || bpm == 0 {
        return None;
    }
    // 60000 ms per minute * 4 quarters per whole note
    let ms = 240_000 / (bpm as u32 * denom as u32);
    Some(if ms == 0 { 1 } else { ms })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let ctx = MelodyContext::default();
        assert_eq!(ctx.bpm, 120);
        assert_eq!(ctx.gap_ms, 0);
    }

    #[test]
    fn known_durations() {
        assert_eq!(denom_to_ms(4, 120), Some(500));
        assert_eq!(denom_to_ms(2, 120), Some(1000));
        assert_eq!(denom_to_ms(1, 120), Some(2000));
        assert_eq!(denom_to_ms(4, 76), Some(789));
        assert_eq!(denom_to_ms(8, 76), Some(394));
    }

    #[test]
    fn floors_at_one_ms() {
        // 240000 / (300 * 255) = 3, still above the floor
        assert_eq!(denom_to_ms(255, 300), Some(3));
        assert_eq!(denom_to_ms(255, u16::MAX), Some(1));
    }

    #[test]
    fn zero_inputs_are_rejected() {
        assert_eq!(denom_to_ms(0, 120), None);
        assert_eq!(denom_to_ms(4, 0), None);
    }

    #[test]
    fn tempo_and_gap_ranges() {
        assert!(!MelodyContext::is_valid_bpm(0));
        assert!(MelodyContext::is_valid_bpm(1));
        assert!(MelodyContext::is_valid_bpm(300));
        assert!(!MelodyContext::is_valid_bpm(301));
        assert!(MelodyContext::is_valid_gap(0));
        assert!(MelodyContext::is_valid_gap(1000));
        assert!(!MelodyContext::is_valid_gap(1001));
    }
}
