//! Terminal blockfall runner (default binary).
//!
//! The frame loop owns timing, input polling, and drawing; the engine only
//! sees discrete intents and elapsed milliseconds. Per frame the order is
//! fixed: drain input, advance the clock, then render the resulting
//! snapshot - the renderer never observes a partially updated state.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_blockfall::core::{GameSnapshot, GameState};
use tui_blockfall::input::{handle_key_event, should_quit};
use tui_blockfall::term::{GameView, TerminalRenderer, Viewport};
use tui_blockfall::types::TICK_MS;

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(1)
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut game_state = GameState::new(clock_seed());
    game_state.start();

    let view = GameView::default();
    let mut snapshot = GameSnapshot::default();

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Input with timeout until the next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        game_state.apply_action(action);
                    }
                }
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            game_state.tick(TICK_MS);
        }

        // Render after all mutations for this frame.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        game_state.snapshot_into(&mut snapshot);
        let fb = view.render(&snapshot, Viewport::new(w, h));
        term.draw(&fb)?;
    }
}
