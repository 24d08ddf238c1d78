//! Terminal runner (default binary).
//!
//! Owns the single game loop and serializes its two event sources: key
//! presses and elapsed time. Each handler runs to completion before the next
//! event is read.

use std::fs::File;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use tracing_subscriber::EnvFilter;

use tetris_grid::config::Config;
use tetris_grid::core::{GameLoop, GameSnapshot, RandomPieces};
use tetris_grid::input::{handle_key_event, is_start_key, should_quit};
use tetris_grid::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    let config = Config::parse();
    init_logging(&config)?;

    let mut game = GameLoop::with_source(RandomPieces::new(config.resolved_seed()), config.tick_ms);
    tracing::info!(
        seed = game.source().seed(),
        tick_ms = game.tick_ms(),
        "launching"
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut game);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn init_logging(config: &Config) -> Result<()> {
    let Some(path) = &config.log_file else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, game: &mut GameLoop<RandomPieces>) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();
    let mut last = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        game.snapshot_into(&mut snap);
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        // Wait for input at most until the next tick is due.
        let timeout = Duration::from_millis(game.ms_until_tick() as u64);
        let has_event = event::poll(timeout)?;

        // Tick. Elapsed time is consumed before the pending key is handled.
        let ms = last.elapsed().as_millis().min(u32::MAX as u128) as u32;
        last += Duration::from_millis(ms as u64);
        game.advance(ms);

        if !has_event {
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    game.stop();
                    return Ok(());
                }
                if is_start_key(key) {
                    game.start();
                } else if let Some(action) = handle_key_event(key) {
                    game.apply_action(action);
                }
            }
            Event::Resize(_, _) => term.invalidate(),
            _ => {}
        }
    }
}
