//! pulsectl - PulseKit feedback demo
//!
//! A single-screen terminal surface: one label, one actionable control.
//! On startup the feedback engine is prepared once; each activation plays
//! the fixed confirmation pattern. Errors never reach this surface; they
//! stay in the developer log.

#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![deny(clippy::unwrap_used)]

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use pulsekit_engine::{AudioLibrary, FeedbackTrigger, VirtualEnginePort};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pulsectl")]
#[command(about = "PulseKit feedback demo - play a haptic+audio confirmation pattern")]
#[command(version)]
#[command(long_about = "
pulsectl renders a single actionable control in the terminal. Activating it
plays a fixed half-second haptic+audio confirmation pattern through the
feedback engine. Engine diagnostics go to the developer log only; raise
verbosity with -v/-vv or RUST_LOG.
")]
struct Cli {
    /// Logical name of the audio clip the pattern references
    #[arg(long)]
    clip: Option<String>,

    /// Directory of additional .wav clips to merge into the bundled library
    #[arg(long, value_name = "DIR")]
    sound_dir: Option<PathBuf>,

    /// Activate the control once and exit (non-interactive)
    #[arg(long)]
    once: bool,

    /// Verbose logging
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut library = AudioLibrary::bundled();
    if let Some(dir) = &cli.sound_dir {
        let added = library
            .merge_dir(dir)
            .with_context(|| format!("loading clips from {}", dir.display()))?;
        info!(added, dir = %dir.display(), "merged sound directory");
    }

    let port = VirtualEnginePort::new();
    let mut trigger = FeedbackTrigger::new(port, library);
    if let Some(clip) = cli.clip {
        trigger.set_clip_name(clip);
    }

    // One-time engine preparation, on first appearance of the surface.
    trigger.prepare();

    if cli.once {
        trigger.trigger();
        trigger.pump_events();
        trigger.shutdown();
        return Ok(());
    }

    render_surface()?;
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("reading input")?;
        trigger.pump_events();
        match line.trim() {
            "" | "p" | "play" => trigger.trigger(),
            "q" | "quit" | "exit" => break,
            other => println!("unrecognized input `{other}` (Enter plays, q quits)"),
        }
    }
    trigger.shutdown();
    Ok(())
}

fn render_surface() -> Result<()> {
    let mut stdout = io::stdout();
    writeln!(stdout, "PulseKit feedback demo")?;
    writeln!(stdout)?;
    writeln!(stdout, "  [ Play feedback ]")?;
    writeln!(stdout)?;
    writeln!(stdout, "Press Enter (or `p`) to activate, `q` to quit.")?;
    stdout.flush()?;
    Ok(())
}

fn init_tracing(verbose: u8) {
    let default_directive = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
