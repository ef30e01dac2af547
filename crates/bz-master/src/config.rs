//! Player configuration, loaded from TOML.
//!
//! Every key is optional; missing keys keep their defaults.
//!
//! ```toml
//! [melody]
//! max_steps = 64
//! tempo = 120
//! gap_ms = 0
//!
//! [playback]
//! looping = false
//! poll_interval_us = 500
//!
//! [render]
//! sample_rate = 44100
//! amplitude = 8000
//! max_seconds = 60
//!
//! [log]
//! level = "info"
//! ```

use std::path::Path;
use std::time::Duration;

use bz_ir::MelodyContext;
use log::LevelFilter;
use serde::Deserialize;

use crate::error::MasterError;

/// Largest step buffer the controller will allocate.
pub const MAX_STEPS_LIMIT: usize = 4096;

#[derive(Deserialize, Default)]
struct ConfigFile {
    #[serde(default)]
    melody: MelodySection,
    #[serde(default)]
    playback: PlaybackSection,
    #[serde(default)]
    render: RenderSection,
    #[serde(default)]
    log: LogSection,
}

#[derive(Deserialize, Default)]
struct MelodySection {
    max_steps: Option<usize>,
    tempo: Option<u16>,
    gap_ms: Option<u16>,
}

#[derive(Deserialize, Default)]
struct PlaybackSection {
    looping: Option<bool>,
    poll_interval_us: Option<u64>,
}

#[derive(Deserialize, Default)]
struct RenderSection {
    sample_rate: Option<u32>,
    amplitude: Option<i16>,
    max_seconds: Option<u32>,
}

#[derive(Deserialize, Default)]
struct LogSection {
    level: Option<String>,
}

/// Resolved configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Capacity of the step buffer (1..=4096)
    pub max_steps: usize,
    /// Default tempo for scores that don't set one
    pub tempo: u16,
    /// Default articulation gap
    pub gap_ms: u16,
    pub looping: bool,
    /// Sleep between `update()` polls in the real-time loop
    pub poll_interval: Duration,
    pub sample_rate: u32,
    pub amplitude: i16,
    /// Offline renders stop after this long, even when looping
    pub max_seconds: u32,
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_steps: 64,
            tempo: MelodyContext::DEFAULT_BPM,
            gap_ms: 0,
            looping: false,
            poll_interval: Duration::from_micros(500),
            sample_rate: 44_100,
            amplitude: 8_000,
            max_seconds: 60,
            log_level: LevelFilter::Info,
        }
    }
}

impl Config {
    /// Parse a TOML document on top of the defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, MasterError> {
        let file: ConfigFile = toml::from_str(text)?;
        Ok(Self::default().merged(file))
    }

    pub fn from_path(path: &Path) -> Result<Self, MasterError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Load `path` if given, falling back to defaults on any problem.
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };
        match Self::from_path(path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!(target: "config", "ignoring config {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    fn merged(mut self, file: ConfigFile) -> Self {
        if let Some(n) = file.melody.max_steps {
            self.max_steps = n.clamp(1, MAX_STEPS_LIMIT);
        }
        if let Some(bpm) = file.melody.tempo {
            self.tempo = bpm.clamp(MelodyContext::MIN_BPM, MelodyContext::MAX_BPM);
        }
        if let Some(gap) = file.melody.gap_ms {
            self.gap_ms = gap.min(MelodyContext::MAX_GAP_MS);
        }
        if let Some(looping) = file.playback.looping {
            self.looping = looping;
        }
        if let Some(us) = file.playback.poll_interval_us {
            self.poll_interval = Duration::from_micros(us.min(100_000));
        }
        if let Some(rate) = file.render.sample_rate {
            self.sample_rate = rate.clamp(8_000, 192_000);
        }
        if let Some(amp) = file.render.amplitude {
            self.amplitude = amp.max(0);
        }
        if let Some(secs) = file.render.max_seconds {
            self.max_seconds = secs.clamp(1, 3_600);
        }
        if let Some(level) = file.log.level {
            match level.parse() {
                Ok(filter) => self.log_level = filter,
                Err(_) => log::warn!(target: "config", "unknown log level {:?}", level),
            }
        }
        self
    }
}
