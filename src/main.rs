//! Equatio terminal runner (default binary).
//!
//! Loads and validates the equation set before touching the terminal, so a
//! broken set file fails with a plain `Error: ...` message and exit code 1.
//! Then plays in raw mode with mouse capture until the player quits.

use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};

use equatio::config::LaunchConfig;
use equatio::core::{EquationSet, Game, GameEvent, PointerInput, Session};
use equatio::input::{handle_key_event, map_mouse_event, should_quit, PointerTracker};
use equatio::logging::init_logger;
use equatio::term::{BoardLayout, BoardView, FrameBuffer, TerminalRenderer, Viewport};
use equatio::types::{GameAction, PointerEvent, TICK_MS};

fn main() -> Result<()> {
    let config = LaunchConfig::from_env().with_args(std::env::args().skip(1));
    init_logger(&config)?;

    let set = EquationSet::load(&config.set_path).with_context(|| {
        format!(
            "failed to load equation set from {}",
            config.set_path.display()
        )
    })?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, set, config.seed);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, set: EquationSet, seed: u32) -> Result<()> {
    let view = BoardView::new(&set);
    let mut game = Game::new(Session::new(set, seed));
    let mut tracker = PointerTracker::new();

    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut layout = layout_for(&game, w, h);
    let mut fb = FrameBuffer::new(w, h);
    let tick = Duration::from_millis(TICK_MS as u64);
    let mut dirty = true;

    while game.is_running() {
        if dirty {
            view.render_into(&game, &layout, &mut fb);
            let stats = term.present(&mut fb)?;
            log::trace!("redrew {} rows, {} cells", stats.rows, stats.cells);
            dirty = false;
        }

        if !event::poll(tick)? {
            continue;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                let action = if should_quit(key) {
                    Some(GameAction::Quit)
                } else {
                    handle_key_event(key)
                };
                if let Some(action) = action {
                    log_event(game.apply_action(action));
                    dirty = true;
                }
            }
            Event::Mouse(mouse) => {
                if let Some(pointer) = map_mouse_event(mouse) {
                    for pointer in tracker.feed(pointer) {
                        log_event(dispatch(&mut game, &layout, pointer));
                    }
                    dirty = true;
                }
            }
            Event::FocusLost => {
                if let Some(up) = tracker.release() {
                    log_event(dispatch(&mut game, &layout, up));
                    dirty = true;
                }
            }
            Event::Resize(w, h) => {
                layout = layout_for(&game, w, h);
                term.invalidate();
                dirty = true;
            }
            _ => {}
        }
    }

    let session = game.session();
    let (solved, total) = session.progress();
    log::info!(
        "session ended with {}/{} equations solved: {:?}",
        solved,
        total,
        session.solved()
    );
    Ok(())
}

fn layout_for(game: &Game, width: u16, height: u16) -> BoardLayout {
    let pool = game.session().pool();
    BoardLayout::compute(Viewport::new(width, height), pool.cols(), pool.rows())
}

fn dispatch(game: &mut Game, layout: &BoardLayout, pointer: PointerEvent) -> Option<GameEvent> {
    let target = layout.hit_test(pointer.x, pointer.y);
    game.handle_pointer(PointerInput::new(pointer, target))
}

fn log_event(event: Option<GameEvent>) {
    if let Some(event) = event {
        log::debug!("{:?}", event);
    }
}
