//! buzzer CLI: list, inspect, play and render melodies.
//!
//! Usage:
//!   cargo run --bin bz-cli -- list
//!   cargo run --bin bz-cli -- play --preset warning --loop
//!   cargo run --bin bz-cli -- dump --score "C5:4 E5:4 G5:2" --gap 20
//!   cargo run --bin bz-cli -- render --demo -o demo.wav

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use log::LevelFilter;

use bz_ir::{preset_by_id, PresetId};
use bz_master::{CompileOptions, Config, Controller, Source};

#[derive(Parser)]
#[command(name = "bz-cli")]
#[command(about = "Non-blocking monophonic melody player")]
struct Cli {
    /// TOML config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// More logging (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the built-in presets
    List,
    /// Print the compiled step list
    Dump(MelodyArgs),
    /// Play on the default audio device
    Play {
        #[command(flatten)]
        melody: MelodyArgs,
        /// Repeat until interrupted
        #[arg(long = "loop")]
        looping: bool,
    },
    /// Render to a WAV file
    Render {
        #[command(flatten)]
        melody: MelodyArgs,
        /// Output WAV path
        #[arg(short, long)]
        output: PathBuf,
        /// Loop until the configured render cap
        #[arg(long = "loop")]
        looping: bool,
    },
}

#[derive(Args)]
#[group(required = true, multiple = false)]
struct SourceArgs {
    /// Built-in preset name
    #[arg(short, long)]
    preset: Option<PresetId>,

    /// Text score, e.g. "C5:4 E5:8 R:8 G5:2"
    #[arg(short, long)]
    score: Option<String>,

    /// The two-phrase demo melody
    #[arg(long)]
    demo: bool,
}

#[derive(Args)]
struct MelodyArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Tempo in quarter notes per minute
    #[arg(short, long)]
    tempo: Option<u16>,

    /// Articulation gap between notes, in ms
    #[arg(short, long)]
    gap: Option<u16>,
}

impl MelodyArgs {
    fn source(&self) -> Source {
        if let Some(id) = self.source.preset {
            Source::Preset(id)
        } else if let Some(text) = &self.source.score {
            Source::Notation(text.clone())
        } else {
            Source::Demo
        }
    }

    fn options(&self) -> CompileOptions {
        CompileOptions {
            tempo: self.tempo,
            gap_ms: self.gap,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::from_path(path)
            .with_context(|| format!("failed to load {}", path.display()))?,
        None => Config::default(),
    };
    init_logging(config.log_level, cli.verbose);

    match cli.command {
        Command::List => list_presets(),
        Command::Dump(melody) => {
            let ctrl = compile(config, &melody)?;
            dump(&ctrl);
            Ok(())
        }
        Command::Play { melody, looping } => {
            let looping = looping || config.looping;
            let mut ctrl = compile(config, &melody)?;
            play(&mut ctrl, looping)
        }
        Command::Render {
            melody,
            output,
            looping,
        } => {
            let ctrl = compile(config, &melody)?;
            render(&ctrl, &output, looping)
        }
    }
}

fn init_logging(configured: LevelFilter, verbose: u8) {
    let level = match verbose {
        0 => configured,
        1 => configured.max(LevelFilter::Debug),
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn compile(config: Config, args: &MelodyArgs) -> Result<Controller> {
    let mut ctrl = Controller::new(config);
    let source = args.source();
    let steps = ctrl
        .compile(&source, args.options())
        .with_context(|| format!("failed to compile {:?}", source))?;
    log::info!("{} steps, {} ms", steps, ctrl.melody().total_duration_ms());
    Ok(ctrl)
}

fn list_presets() -> Result<()> {
    for (index, id) in PresetId::ALL.iter().enumerate() {
        let notes = preset_by_id(*id).len();
        println!("{:2}  {:<14} {:2} notes", index, id.name(), notes);
    }
    Ok(())
}

fn dump(ctrl: &Controller) {
    let melody = ctrl.melody();
    println!("{:>4}  {:>6}  {:>6}", "#", "Hz", "ms");
    for (i, step) in melody.iter().enumerate() {
        if step.is_rest() {
            println!("{:>4}  {:>6}  {:>6}", i, "-", step.duration_ms);
        } else {
            println!("{:>4}  {:>6}  {:>6}", i, step.freq_hz, step.duration_ms);
        }
    }
    println!("{} steps, {} ms total", melody.len(), melody.total_duration_ms());
}

fn play(ctrl: &mut Controller, looping: bool) -> Result<()> {
    if ctrl.melody().is_empty() {
        bail!("melody is empty");
    }
    ctrl.play(looping).context("failed to start playback")?;
    println!("Playing{}...", if looping { " (Ctrl-C to quit)" } else { "" });

    let total = ctrl.melody().len();
    while ctrl.is_playing() {
        if let Some(step) = ctrl.current_step() {
            print!("\rStep {:3}/{}", step + 1, total);
            let _ = std::io::stdout().flush();
        }
        std::thread::sleep(Duration::from_millis(10));
    }

    println!("\rDone.          ");
    Ok(())
}

fn render(ctrl: &Controller, path: &Path, looping: bool) -> Result<()> {
    let sample_rate = ctrl.config().sample_rate;
    println!("Rendering to {} at {} Hz...", path.display(), sample_rate);

    let wav = ctrl.render_to_wav(looping)?;
    println!("Rendered {} bytes", wav.len());

    fs::write(path, &wav).with_context(|| format!("failed to write {}", path.display()))?;
    println!("Done.");
    Ok(())
}
