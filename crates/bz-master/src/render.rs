//! Offline rendering: the real-time player driven by a simulated clock.

use std::io::Cursor;
use std::path::Path;

use bz_audio::SquareOscillator;
use bz_engine::{Player, SimClock};
use bz_ir::Melody;
use hound::{SampleFormat, WavSpec, WavWriter};

use crate::error::MasterError;

/// A step boundary takes three polls (elapsed, advance, start), so polling
/// this often per sample keeps boundaries sample-accurate.
const UPDATES_PER_FRAME: usize = 3;

/// Render `melody` to mono 16-bit samples, stopping after `max_frames`.
///
/// The clock advances by exactly one sample period per frame, so the
/// output timing matches what the player would do against a real clock.
pub fn render_melody(
    melody: Melody<'_>,
    looping: bool,
    sample_rate: u32,
    amplitude: i16,
    max_frames: usize,
) -> Vec<i16> {
    let clock = SimClock::new();
    let oscillator = SquareOscillator::new(sample_rate, amplitude);
    let mut player = Player::new(oscillator, &clock);
    player.play(melody, looping);

    let expected = (melody.total_duration_ms() * sample_rate as u64 / 1000) as usize;
    let mut samples = Vec::with_capacity(expected.min(max_frames));
    let mut frame: u64 = 0;

    while player.is_playing() && samples.len() < max_frames {
        clock.set(frame * 1_000_000 / sample_rate as u64);
        for _ in 0..UPDATES_PER_FRAME {
            player.update();
        }
        samples.push(player.output_mut().next_sample());
        frame += 1;
    }
    samples
}

fn wav_spec(sample_rate: u32) -> WavSpec {
    WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    }
}

/// Write mono 16-bit PCM to a WAV file.
pub fn write_wav(path: &Path, samples: &[i16], sample_rate: u32) -> Result<(), MasterError> {
    let mut writer = WavWriter::create(path, wav_spec(sample_rate))?;
    for &s in samples {
        writer.write_sample(s)?;
    }
    writer.finalize()?;
    Ok(())
}

/// Encode mono 16-bit PCM as an in-memory WAV file.
pub fn samples_to_wav(samples: &[i16], sample_rate: u32) -> Result<Vec<u8>, MasterError> {
    let mut buf = Vec::new();
    let mut writer = WavWriter::new(Cursor::new(&mut buf), wav_spec(sample_rate))?;
    for &s in samples {
        writer.write_sample(s)?;
    }
    writer.finalize()?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bz_ir::Step;

    #[test]
    fn renders_tone_then_rest() {
        let steps = [Step::tone(1000, 10), Step::rest(5)];
        let samples = render_melody(Melody::new(&steps), false, 8000, 1000, usize::MAX);

        // 15 ms at 8 kHz, give or take the boundary samples
        assert!((119..=122).contains(&samples.len()), "{}", samples.len());
        assert!(samples[..80].iter().all(|s| s.abs() == 1000));
        assert!(samples[82..].iter().all(|s| *s == 0));
    }

    #[test]
    fn looping_render_is_capped() {
        let steps = [Step::tone(500, 10)];
        let samples = render_melody(Melody::new(&steps), true, 8000, 1000, 2000);
        assert_eq!(samples.len(), 2000);
    }

    #[test]
    fn empty_melody_renders_nothing() {
        let samples = render_melody(Melody::empty(), false, 8000, 1000, 1000);
        assert!(samples.is_empty());
    }

    #[test]
    fn wav_bytes_have_riff_header() {
        let wav = samples_to_wav(&[0, 100, -100, 0], 8000).unwrap();
        assert_eq!(&wav[..4], b"RIFF");
        assert_eq!(&wav[8..12], b"WAVE");
        // 44-byte header + 4 samples * 2 bytes
        assert_eq!(wav.len(), 52);
    }
}
