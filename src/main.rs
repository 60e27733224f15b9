//! Terminal grid walk runner (default binary).
//!
//! Wires crossterm key events and the tick clock into a single dispatch loop,
//! and paints the grid through the framebuffer renderer.

use std::time::Instant;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};

use grid_walk::core::Settings;
use grid_walk::engine::{EventLog, LoopEvent, Session};
use grid_walk::input::{direction_for_key, should_quit};
use grid_walk::term::{FrameBuffer, GridView, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    // Fail before touching the terminal.
    let log = EventLog::from_env()?;
    let session = Session::start(Settings::from_env(), Instant::now(), log)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, session);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, mut session: Session) -> Result<()> {
    let view = GridView::default();
    let mut fb = FrameBuffer::new(0, 0);

    let mut dirty = true;
    loop {
        if dirty {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            view.render_into(session.game().grid(), Viewport::new(w, h), &mut fb);
            term.draw_swap(&mut fb)?;
            dirty = false;
        }

        // Wait for input until the next tick is due.
        let timeout = session.timeout(Instant::now());
        if event::poll(timeout).context("failed to poll terminal events")? {
            match event::read().context("failed to read terminal event")? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    dirty |= session.dispatch(LoopEvent::Input(direction_for_key(key)));
                }
                Event::Resize(_, _) => {
                    term.invalidate();
                    dirty = true;
                }
                _ => {}
            }
        }

        dirty |= session.poll_tick(Instant::now());
    }
}
