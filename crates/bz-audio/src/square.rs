//! 50% duty square-wave oscillator.

use bz_engine::ToneOutput;

/// Phase-accumulator square wave, the software equivalent of a buzzer
/// driven by a PWM pin.
///
/// Phase is a 32-bit fraction of a cycle; the output is high for the
/// first half of each cycle.
#[derive(Clone, Debug)]
pub struct SquareOscillator {
    sample_rate: u32,
    amplitude: i16,
    phase: u32,
    increment: u32,
    freq_hz: u16,
}

impl SquareOscillator {
    pub fn new(sample_rate: u32, amplitude: i16) -> Self {
        Self {
            sample_rate,
            amplitude: amplitude.max(0),
            phase: 0,
            increment: 0,
            freq_hz: 0,
        }
    }

    /// Retune; 0 Hz silences. Frequencies at or above Nyquist also silence.
    pub fn set_frequency(&mut self, freq_hz: u16) {
        self.freq_hz = freq_hz;
        self.increment = phase_increment(freq_hz, self.sample_rate);
        if self.increment == 0 {
            self.phase = 0;
        }
    }

    pub fn silence(&mut self) {
        self.set_frequency(0);
    }

    pub fn frequency(&self) -> u16 {
        self.freq_hz
    }

    pub fn is_sounding(&self) -> bool {
        self.increment != 0
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn next_sample(&mut self) -> i16 {
        if self.increment == 0 {
            return 0;
        }
        let out = if self.phase < 1 << 31 {
            self.amplitude
        } else {
            -self.amplitude
        };
        self.phase = self.phase.wrapping_add(self.increment);
        out
    }

    pub fn fill(&mut self, out: &mut [i16]) {
        for sample in out {
            *sample = self.next_sample();
        }
    }
}

impl ToneOutput for SquareOscillator {
    fn start(&mut self, freq_hz: u16) {
        self.set_frequency(freq_hz);
    }

    fn stop(&mut self) {
        self.silence();
    }
}

/// `freq / sample_rate` as a 0.32 fixed-point cycle fraction.
fn phase_increment(freq_hz: u16, sample_rate: u32) -> u32 {
    if freq_hz == 0 || sample_rate == 0 || freq_hz as u32 * 2 >= sample_rate {
        return 0;
    }
    (((freq_hz as u64) << 32) / sample_rate as u64) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn silent_until_started() {
        let mut osc = SquareOscillator::new(8000, 1000);
        let mut buf = [1i16; 16];
        osc.fill(&mut buf);
        assert!(buf.iter().all(|s| *s == 0));
    }

    #[test]
    fn period_matches_frequency() {
        // 1000 Hz at 8000 Hz sample rate: 4 high, 4 low
        let mut osc = SquareOscillator::new(8000, 1000);
        osc.start(1000);
        let mut buf = [0i16; 16];
        osc.fill(&mut buf);
        assert_eq!(&buf[..8], &[1000, 1000, 1000, 1000, -1000, -1000, -1000, -1000]);
        assert_eq!(&buf[8..], &buf[..8]);
    }

    #[test]
    fn stop_silences() {
        let mut osc = SquareOscillator::new(44100, 500);
        osc.start(440);
        assert!(osc.is_sounding());
        osc.stop();
        assert!(!osc.is_sounding());
        assert_eq!(osc.next_sample(), 0);
    }

    #[test]
    fn above_nyquist_is_silent() {
        let mut osc = SquareOscillator::new(8000, 1000);
        osc.start(4000);
        assert!(!osc.is_sounding());
        assert_eq!(osc.frequency(), 4000);
    }

    #[test]
    fn sign_changes_track_frequency() {
        let sample_rate = 44100;
        let mut osc = SquareOscillator::new(sample_rate, 1000);
        osc.start(441);
        let mut buf = vec![0i16; sample_rate as usize];
        osc.fill(&mut buf);
        let rising = buf.windows(2).filter(|w| w[0] < 0 && w[1] > 0).count();
        assert!((440..=441).contains(&rising), "rising edges: {}", rising);
    }
}
