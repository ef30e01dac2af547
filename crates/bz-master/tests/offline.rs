//! Compile-and-render tests through the controller, no audio device needed.

use std::io::Write;

use bz_master::{CompileOptions, Config, Controller, PresetId, Source};

fn small_config() -> Config {
    Config {
        sample_rate: 8_000,
        amplitude: 1_000,
        max_seconds: 5,
        ..Config::default()
    }
}

fn sounding(samples: &[i16]) -> usize {
    samples.iter().filter(|s| **s != 0).count()
}

#[test]
fn every_preset_compiles_and_renders() {
    let mut ctl = Controller::new(small_config());
    for id in PresetId::ALL {
        let steps = ctl.compile(&Source::Preset(id), CompileOptions::default()).unwrap();
        assert!(steps > 0, "{} compiled to nothing", id);

        let samples = ctl.render_samples(false);
        let expected = ctl.melody().total_duration_ms() as usize * 8;
        assert!(
            samples.len().abs_diff(expected) <= 2,
            "{}: {} samples, expected about {}",
            id,
            samples.len(),
            expected
        );
    }
}

#[test]
fn gap_silences_part_of_each_note() {
    let mut ctl = Controller::new(small_config());
    let score = Source::Notation("A4:4 A4:4".into());

    ctl.compile(&score, CompileOptions::default()).unwrap();
    let legato = ctl.render_samples(false);

    ctl.compile(&score, CompileOptions { tempo: None, gap_ms: Some(100) }).unwrap();
    let detached = ctl.render_samples(false);

    // Same total length, 2 x 100 ms less tone
    assert!(legato.len().abs_diff(detached.len()) <= 2);
    let lost = sounding(&legato) - sounding(&detached);
    assert!((1590..=1610).contains(&lost), "lost {} samples", lost);
}

#[test]
fn tempo_override_scales_duration() {
    let mut ctl = Controller::new(small_config());
    let score = Source::Notation("C5:4 D5:4 E5:4 F5:4".into());

    ctl.compile(&score, CompileOptions { tempo: Some(120), gap_ms: None }).unwrap();
    assert_eq!(ctl.melody().total_duration_ms(), 2000);

    ctl.compile(&score, CompileOptions { tempo: Some(240), gap_ms: None }).unwrap();
    assert_eq!(ctl.melody().total_duration_ms(), 1000);
}

#[test]
fn looping_render_stops_at_cap() {
    let mut ctl = Controller::new(Config {
        max_seconds: 1,
        ..small_config()
    });
    ctl.compile(&Source::Preset(PresetId::ButtonClick), CompileOptions::default())
        .unwrap();
    assert_eq!(ctl.render_samples(true).len(), 8_000);
}

#[test]
fn config_file_drives_controller() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "[melody]\nmax_steps = 4\ngap_ms = 20\n\n[render]\nsample_rate = 16000"
    )
    .unwrap();

    let config = Config::load(Some(file.path()));
    assert_eq!(config.max_steps, 4);
    assert_eq!(config.sample_rate, 16_000);

    let mut ctl = Controller::new(config);
    // Two notes split into four steps fill the buffer exactly
    assert_eq!(
        ctl.compile(&Source::Notation("C5:4 C5:4".into()), CompileOptions::default())
            .unwrap(),
        4
    );
    assert!(ctl
        .compile(&Source::Notation("C5:4 C5:4 C5:4".into()), CompileOptions::default())
        .is_err());
}

#[test]
fn wav_file_round_trips_through_hound() {
    let mut ctl = Controller::new(small_config());
    ctl.compile(&Source::Preset(PresetId::Success), CompileOptions::default())
        .unwrap();
    let samples = ctl.render_samples(false);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("success.wav");
    bz_master::write_wav(&path, &samples, 8_000).unwrap();

    let mut reader = hound::WavReader::open(&path).unwrap();
    assert_eq!(reader.spec().sample_rate, 8_000);
    assert_eq!(reader.spec().channels, 1);
    let read: Vec<i16> = reader.samples::<i16>().map(Result::unwrap).collect();
    assert_eq!(read, samples);
}
