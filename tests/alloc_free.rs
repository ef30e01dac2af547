//! Allocation-free playback path tests.
//!
//! `Player::update()` runs from the host's main loop and `MelodyBuilder`
//! compiles into a caller-owned buffer; neither may touch the heap.
//!
//! Just run `cargo test`; no feature flags needed.

use assert_no_alloc::{assert_no_alloc, AllocDisabler};

#[cfg(debug_assertions)]
#[global_allocator]
static A: AllocDisabler = AllocDisabler;

use bz_engine::{MelodyBuilder, Player, SimClock, ToneOutput};
use bz_ir::{preset_by_id, PresetId, ScoreNote, Step};

struct CountingTone {
    starts: usize,
    stops: usize,
}

impl ToneOutput for CountingTone {
    fn start(&mut self, _freq_hz: u16) {
        self.starts += 1;
    }

    fn stop(&mut self) {
        self.stops += 1;
    }
}

#[test]
fn builder_compiles_presets_alloc_free() {
    let mut buffer = [Step::default(); 128];
    let len = assert_no_alloc(|| {
        let mut builder = MelodyBuilder::new(&mut buffer);
        builder.set_tempo(150).set_gap(20);
        for id in PresetId::ALL {
            builder.append_view(preset_by_id(id));
        }
        builder.add_rest(4).add_tone_ms(880, 50);
        builder.append_with(|i| ScoreNote::new(440 + i as u16, 8), 4);
        assert!(builder.is_valid());
        builder.len()
    });
    assert!(len > 0);
}

#[test]
fn looping_update_loop_alloc_free() {
    let mut buffer = [Step::default(); 64];
    let mut builder = MelodyBuilder::new(&mut buffer);
    builder.set_gap(15).append_view(preset_by_id(PresetId::Warning));
    let melody = builder.into_melody();

    let clock = SimClock::new();
    let mut player = Player::new(CountingTone { starts: 0, stops: 0 }, &clock);

    assert_no_alloc(|| {
        player.play(melody, true);
        // 30 simulated seconds at a 250 us poll
        for _ in 0..120_000 {
            clock.advance_us(250);
            player.update();
        }
        player.stop();
    });

    let tone = player.output();
    assert!(tone.starts > 10);
    assert!(tone.stops > 10);
}
