//! Headless controller for the buzzer player.
//!
//! Owns the step buffer, compiles presets, text scores and the demo into
//! it, and runs playback either in real time on a background thread or
//! offline into PCM. Both the CLI and the tests drive the player through
//! this API.

mod config;
mod demo;
mod error;
mod render;

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::mpsc::{sync_channel, SyncSender};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;

use bz_audio::{AudioError, CpalTone, InstantClock};
use bz_engine::{MelodyBuilder, Player};
use log::{debug, info, warn};

pub use bz_ir::{parse_score, Melody, NotationError, PresetId, Step};
pub use config::{Config, MAX_STEPS_LIMIT};
pub use demo::{demo_melody, DEMO_GAP_MS, DEMO_TEMPO};
pub use error::MasterError;
pub use render::{render_melody, samples_to_wav, write_wav};

/// Polls per wakeup of the playback thread; enough for one full
/// elapsed/advance/start cycle.
const UPDATES_PER_POLL: usize = 3;

/// Where a melody comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Source {
    Preset(PresetId),
    /// Text score, e.g. `"C5:4 E5:4 G5:2 R:8"`
    Notation(String),
    Demo,
}

/// Per-compile overrides of the configured tempo and gap.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CompileOptions {
    pub tempo: Option<u16>,
    pub gap_ms: Option<u16>,
}

/// Headless player controller: owns a compiled melody and manages
/// playback.
pub struct Controller {
    config: Config,
    buffer: Box<[Step]>,
    len: usize,
    playback: Option<PlaybackHandle>,
}

struct PlaybackHandle {
    stop_signal: Arc<AtomicBool>,
    current_step: Arc<AtomicUsize>,
    finished: Arc<AtomicBool>,
    thread: Option<JoinHandle<()>>,
}

impl Controller {
    pub fn new(config: Config) -> Self {
        let buffer = vec![Step::default(); config.max_steps].into_boxed_slice();
        Self {
            config,
            buffer,
            len: 0,
            playback: None,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    // --- Melody management ---

    /// The most recently compiled melody; empty before the first compile
    /// and after a failed one.
    pub fn melody(&self) -> Melody<'_> {
        Melody::new(&self.buffer[..self.len])
    }

    /// Compile `source` into the step buffer, replacing the current
    /// melody. Stops playback first. Returns the step count.
    pub fn compile(&mut self, source: &Source, options: CompileOptions) -> Result<usize, MasterError> {
        self.stop();
        self.len = 0;

        let (tempo, gap_ms) = match source {
            Source::Demo => (
                options.tempo.unwrap_or(DEMO_TEMPO),
                options.gap_ms.unwrap_or(DEMO_GAP_MS),
            ),
            _ => (
                options.tempo.unwrap_or(self.config.tempo),
                options.gap_ms.unwrap_or(self.config.gap_ms),
            ),
        };

        let capacity = self.buffer.len();
        let mut builder = MelodyBuilder::new(&mut self.buffer);
        builder.set_tempo(tempo).set_gap(gap_ms);

        match source {
            Source::Preset(id) => {
                builder.append_view(bz_ir::preset_by_id(*id));
            }
            Source::Notation(text) => {
                let notes = parse_score(text)?;
                builder.append_score(&notes);
            }
            Source::Demo => {
                builder.compose(demo_melody);
            }
        }

        if !builder.is_valid() {
            return Err(MasterError::InvalidMelody {
                steps: builder.len(),
                capacity,
            });
        }
        self.len = builder.len();
        debug!("compiled {:?}: {} steps at {} bpm, gap {} ms", source, self.len, tempo, gap_ms);
        Ok(self.len)
    }

    // --- Real-time playback ---

    /// Start playing the compiled melody on the default audio device.
    ///
    /// Returns once the device is open; audio runs on a background thread.
    /// An empty melody starts nothing.
    pub fn play(&mut self, looping: bool) -> Result<(), MasterError> {
        self.stop();
        if self.len == 0 {
            info!("nothing to play");
            return Ok(());
        }

        let steps = self.buffer[..self.len].to_vec();
        let stop_signal = Arc::new(AtomicBool::new(false));
        let current_step = Arc::new(AtomicUsize::new(0));
        let finished = Arc::new(AtomicBool::new(false));
        let (ready_tx, ready_rx) = sync_channel(1);

        let job = PlaybackJob {
            steps,
            looping,
            amplitude: self.config.amplitude,
            poll_interval: self.config.poll_interval,
            stop_signal: stop_signal.clone(),
            current_step: current_step.clone(),
            finished: finished.clone(),
        };
        let mut thread = Some(std::thread::spawn(move || job.run(ready_tx)));

        let startup = ready_rx.recv();
        if !matches!(startup, Ok(Ok(()))) {
            if let Some(handle) = thread.take() {
                let _ = handle.join();
            }
        }
        match startup {
            Ok(Ok(())) => {}
            Ok(Err(e)) => return Err(e.into()),
            Err(_) => return Err(MasterError::PlaybackThread),
        }

        self.playback = Some(PlaybackHandle {
            stop_signal,
            current_step,
            finished,
            thread,
        });
        Ok(())
    }

    pub fn stop(&mut self) {
        if let Some(mut pb) = self.playback.take() {
            pb.stop_signal.store(true, Ordering::Relaxed);
            if let Some(handle) = pb.thread.take() {
                if handle.join().is_err() {
                    warn!("playback thread panicked");
                }
            }
        }
    }

    pub fn is_playing(&self) -> bool {
        self.playback
            .as_ref()
            .is_some_and(|p| !p.finished.load(Ordering::Relaxed))
    }

    pub fn is_finished(&self) -> bool {
        self.playback
            .as_ref()
            .is_some_and(|p| p.finished.load(Ordering::Relaxed))
    }

    /// Index of the step currently sounding, while playing.
    pub fn current_step(&self) -> Option<usize> {
        let pb = self.playback.as_ref()?;
        if pb.finished.load(Ordering::Relaxed) {
            return None;
        }
        Some(pb.current_step.load(Ordering::Relaxed))
    }

    // --- Offline rendering ---

    /// Render the compiled melody to mono PCM at the configured rate,
    /// capped at `max_seconds`.
    pub fn render_samples(&self, looping: bool) -> Vec<i16> {
        let max_frames = self.config.sample_rate as usize * self.config.max_seconds as usize;
        render_melody(
            self.melody(),
            looping,
            self.config.sample_rate,
            self.config.amplitude,
            max_frames,
        )
    }

    pub fn render_to_wav(&self, looping: bool) -> Result<Vec<u8>, MasterError> {
        samples_to_wav(&self.render_samples(looping), self.config.sample_rate)
    }
}

impl Default for Controller {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl Drop for Controller {
    fn drop(&mut self) {
        self.stop();
    }
}

struct PlaybackJob {
    steps: Vec<Step>,
    looping: bool,
    amplitude: i16,
    poll_interval: Duration,
    stop_signal: Arc<AtomicBool>,
    current_step: Arc<AtomicUsize>,
    finished: Arc<AtomicBool>,
}

impl PlaybackJob {
    fn run(self, ready: SyncSender<Result<(), AudioError>>) {
        let output = match CpalTone::new(self.amplitude) {
            Ok(output) => output,
            Err(e) => {
                self.finished.store(true, Ordering::Relaxed);
                let _ = ready.send(Err(e));
                return;
            }
        };
        info!("audio device open at {} Hz", output.sample_rate());
        let _ = ready.send(Ok(()));

        let mut player = Player::new(output, InstantClock::new());
        player.play(Melody::new(&self.steps), self.looping);

        while player.is_playing() && !self.stop_signal.load(Ordering::Relaxed) {
            for _ in 0..UPDATES_PER_POLL {
                player.update();
            }
            self.current_step.store(player.current_index(), Ordering::Relaxed);
            std::thread::sleep(self.poll_interval);
        }
        player.stop();

        self.finished.store(true, Ordering::Relaxed);
    }
}
