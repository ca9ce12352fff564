//! Serial Pong runner (default binary).
//!
//! Draws the game as VT100 sequences on stdout, or on the serial device named
//! by `PONG_TTY`. The four buttons are read from the local keyboard.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::terminal;

use serial_pong::engine::{launch, PongConfig, ThreadScheduler};
use serial_pong::input::{KeyOutcome, KeyboardSampler};
use serial_pong::term::{RenderLock, TerminalRenderer, WriterTransport};

type Line = WriterTransport<Box<dyn Write + Send>>;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = PongConfig::from_env();
    log::info!("config: {:?}", config);

    let screen = Arc::new(RenderLock::new(TerminalRenderer::new(open_line(&config)?)));

    terminal::enable_raw_mode().context("enable raw mode")?;
    let result = run(&config, &screen);

    // Always try to restore terminal state.
    {
        let mut guard = screen.acquire();
        guard.clear();
        guard.set_cursor_visible(true);
    }
    let _ = terminal::disable_raw_mode();
    result
}

fn open_line(config: &PongConfig) -> Result<Line> {
    let sink: Box<dyn Write + Send> = match &config.tty {
        Some(path) => Box::new(
            OpenOptions::new()
                .write(true)
                .open(path)
                .with_context(|| format!("open serial device {}", path.display()))?,
        ),
        None => Box::new(io::stdout()),
    };
    Ok(WriterTransport::new(sink))
}

fn run(config: &PongConfig, screen: &Arc<RenderLock<Line>>) -> Result<()> {
    let keyboard = Arc::new(KeyboardSampler::new(config.key_hold));

    let launched = launch(
        config,
        Arc::clone(screen),
        Arc::clone(&keyboard),
        &ThreadScheduler::new(),
    );
    if !launched.is_running() {
        anyhow::bail!("no simulation task could be started");
    }

    loop {
        if keyboard.pump(Duration::from_millis(20))? == KeyOutcome::Quit {
            return Ok(());
        }
        if let Some(dead) = launched.tasks.iter().find(|t| t.is_finished()) {
            anyhow::bail!("task `{}` stopped", dead.name());
        }
    }
}
