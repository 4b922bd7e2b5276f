// Pbevents Replay CLI
// Feeds a recorded raw event script through the pump and prints the
// normalized stream, one line per event

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use pbevents_core::event::{EventBatch, EventPump};
use pbevents_core::input::ScriptedQueue;
use pbevents_core::output::OutputEvent;
use pbevents_core::settings::Settings;

/// Replay a raw screen event script through the decoder
#[derive(Parser, Debug)]
#[command(name = "pbevents-replay")]
#[command(version)]
#[command(about = "Replay raw screen events and print the normalized stream", long_about = None)]
struct Args {
    /// TOML event script ([[event]] tables)
    #[arg(value_name = "SCRIPT")]
    script: PathBuf,

    /// Settings file (default: ~/.config/pbevents/settings.toml)
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Number of pump calls; default runs until the script is drained plus
    /// one trailing call
    #[arg(short, long, value_name = "N")]
    frames: Option<usize>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn load_settings(args: &Args) -> anyhow::Result<Settings> {
    match &args.config {
        Some(path) => Settings::from_file(path)
            .with_context(|| format!("failed to load settings from {}", path.display())),
        None => Settings::load_default().context("failed to load default settings"),
    }
}

/// Pump one frame at a time, handing each frame's events to `emit`.
/// Returns the number of frames pumped.
fn replay<F>(
    pump: &mut EventPump<ScriptedQueue>,
    frames: Option<usize>,
    mut emit: F,
) -> usize
where
    F: FnMut(usize, &OutputEvent),
{
    let mut batch: EventBatch<OutputEvent> = EventBatch::new();
    let mut frame = 0;
    let mut pump_frame = |pump: &mut EventPump<ScriptedQueue>, frame: usize| {
        let stats = pump.pump_events(&mut batch);
        log::debug!(
            "frame {}: {} record(s), motion flushed: {}",
            frame,
            stats.processed,
            stats.flushed_motion
        );
        batch.drain().for_each(|event| emit(frame, &event));
    };

    match frames {
        Some(limit) => {
            while frame < limit {
                pump_frame(&mut *pump, frame);
                frame += 1;
            }
        }
        None => {
            while !pump.queue().is_empty() {
                pump_frame(&mut *pump, frame);
                frame += 1;
            }
            // one trailing call after the script drains
            pump_frame(&mut *pump, frame);
            frame += 1;
        }
    }
    frame
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let settings = load_settings(&args)?;
    let queue = ScriptedQueue::from_file(&args.script)
        .with_context(|| format!("failed to load script {}", args.script.display()))?;
    log::info!("loaded {} record(s) from {}", queue.len(), args.script.display());

    let mut pump = EventPump::new(queue).with_config(settings.pump_config());
    let mut quit = false;
    let frames = replay(&mut pump, args.frames, |frame, event| {
        quit |= matches!(event, OutputEvent::Quit);
        println!("frame {}: {}", frame, event);
    });

    log::info!("replayed {} frame(s)", frames);
    if quit {
        log::info!("script requested quit");
    }
    Ok(())
}
