//! Resume tour terminal runner (default binary).
//!
//! Shows the Game Center menu; picking `1` mounts the puzzle in the
//! `game-container` panel. Logs go to `TOUR_BLOCKS_LOG_PATH` when set, since
//! stderr would scribble over the alternate screen.

use std::fs::File;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use env_logger::{Builder, Env, Target};
use log::info;

use tour_blocks::term::{FrameBuffer, TerminalRenderer};
use tour_blocks::types::TICK_MS;
use tour_blocks::{KeyOutcome, TourConfig, TourShell};

fn main() -> Result<()> {
    let config = TourConfig::from_env();
    init_logging(&config)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Without a log path no logger is installed and `log` macros are no-ops.
fn init_logging(config: &TourConfig) -> Result<()> {
    let Some(path) = &config.log_path else {
        return Ok(());
    };
    let file = File::create(path).with_context(|| format!("opening log file {}", path))?;
    Builder::from_env(Env::default().default_filter_or(config.log_filter.as_str()))
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, config: &TourConfig) -> Result<()> {
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 30));
    let mut shell = TourShell::new(config, w, h);
    let mut fb = FrameBuffer::new(w, h);
    info!(
        "tour started ({}x{}, drop interval {} ms)",
        w, h, config.engine.drop_interval_ms
    );

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        shell.render_into(&mut fb);
        term.draw(&fb)?;

        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if shell.handle_key(key) == KeyOutcome::Quit {
                        info!("tour closed");
                        return Ok(());
                    }
                }
                Event::Resize(w, h) => {
                    shell.resize(w, h);
                    term.invalidate();
                }
                _ => {}
            }
        }

        let elapsed = last_tick.elapsed();
        if elapsed >= tick_duration {
            last_tick = Instant::now();
            shell.tick(elapsed.as_millis().min(u32::MAX as u128) as u32);
        }
    }
}
