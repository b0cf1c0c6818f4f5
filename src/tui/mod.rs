//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard and mouse events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop only redraws after an event (including
//! resize). Between events it sleeps in `poll` for up to 250ms.
//!
//! ## Selecting Cards
//!
//! `select` is only reachable through `GridEvent::Activate(index)`, and the
//! index is turned into an id via `Catalog::id_at`. There is no path that
//! sends the core an id from outside the catalog.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info};
use std::io::stdout;
use std::time::Duration;

use crossterm::cursor::{Hide, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::DefaultTerminal;

use crate::core::action::{Action, Effect, update};
use crate::core::catalog::Catalog;
use crate::core::config::ResolvedConfig;
use crate::core::state::{App, SelectionSummary};
use crate::tui::component::EventHandler;
use crate::tui::components::{CardGridState, GridEvent};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

const IDLE_POLL: Duration = Duration::from_millis(250);

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub grid: CardGridState,
    /// Fixed column count from config. None = fit to width.
    pub columns: Option<u16>,
}

impl TuiState {
    pub fn new(item_count: usize, columns: Option<u16>) -> Self {
        Self {
            grid: CardGridState::new(item_count),
            columns,
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture, Hide)?;
        info!("Terminal modes enabled (mouse capture, hidden cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, Show);
    }
}

/// Route one terminal event. Returns the core action it maps to, if any.
fn handle_event(app: &App, tui: &mut TuiState, event: &TuiEvent) -> Option<Action> {
    match event {
        TuiEvent::Quit => Some(Action::Quit),
        TuiEvent::Reset => Some(Action::Reset),
        // Resize just needs a redraw
        TuiEvent::Resize => None,
        _ => match tui.grid.handle_event(event)? {
            GridEvent::Activate(index) => app.catalog.id_at(index).map(Action::Select),
        },
    }
}

/// Run the selection screen until the user quits. Returns the final selection.
pub fn run(config: ResolvedConfig, catalog: Catalog) -> std::io::Result<SelectionSummary> {
    let mut app = App::from_config(catalog, &config);
    let mut tui = TuiState::new(app.catalog.len(), config.columns);

    let mut terminal = ratatui::init();
    let result = TerminalModeGuard::new()
        .and_then(|_guard| event_loop(&mut terminal, &mut app, &mut tui));
    ratatui::restore();

    result?;
    Ok(app.summary())
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    app: &mut App,
    tui: &mut TuiState,
) -> std::io::Result<()> {
    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, app, tui))?;
            needs_redraw = false;
        }

        let mut next = poll_event_timeout(IDLE_POLL)?;
        if next.is_some() {
            needs_redraw = true;
        }

        // Process the first event and drain everything pending before the next draw
        while let Some(event) = next {
            if let Some(action) = handle_event(app, tui, &event) {
                debug!("Event loop dispatching: {:?}", action);
                if update(app, action) == Effect::Quit {
                    info!("Quit requested, phase={}", app.phase());
                    return Ok(());
                }
            }
            next = poll_event_immediate()?;
        }
    }
}
