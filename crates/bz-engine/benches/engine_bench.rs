use bz_engine::{MelodyBuilder, Player, SimClock, ToneOutput};
use bz_ir::{preset_by_id, PresetId, Step};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

struct NullTone;

impl ToneOutput for NullTone {
    fn start(&mut self, freq_hz: u16) {
        black_box(freq_hz);
    }

    fn stop(&mut self) {}
}

fn compile_presets(c: &mut Criterion) {
    let mut buffer = [Step::default(); 64];
    c.bench_function("compile all presets", |b| {
        b.iter(|| {
            let mut builder = MelodyBuilder::new(&mut buffer);
            for id in PresetId::ALL {
                builder
                    .reset(true)
                    .set_tempo(black_box(140))
                    .set_gap(20)
                    .append_view(preset_by_id(id));
            }
            black_box(builder.len())
        })
    });
}

fn update_loop(c: &mut Criterion) {
    let mut buffer = [Step::default(); 64];
    let mut builder = MelodyBuilder::new(&mut buffer);
    builder.set_gap(15).append_view(preset_by_id(PresetId::Warning));
    let melody = builder.into_melody();

    c.bench_function("update 10k polls (looping)", |b| {
        let clock = SimClock::new();
        let mut player = Player::new(NullTone, &clock);
        player.play(melody, true);
        b.iter(|| {
            for _ in 0..10_000 {
                clock.advance_us(250);
                player.update();
            }
            black_box(player.current_index())
        })
    });
}

criterion_group!(benches, compile_presets, update_loop);
criterion_main!(benches);
