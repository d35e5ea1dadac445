//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI, and
//! wires the on-screen `load` button and `output` pane to the
//! [`InteractionHandler`].
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Data Flow
//!
//! ```text
//!  LoadButton ──Activated──▶ handler.trigger()
//!                               │ (spawned on tokio)
//!                               ▼
//!                          ChannelSink ──mpsc──▶ event loop ──▶ App::apply
//!                                                              │
//!                                                  OutputPane ◀┘ (next draw)
//! ```
//!
//! The loop only redraws after input or a display change; otherwise it
//! sleeps in `poll` for up to 250ms.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::Duration;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;

use crate::core::config::ResolvedConfig;
use crate::core::state::{App, DisplayState};
use crate::fetch::{HttpSource, JsonSource};
use crate::interaction::{DisplaySink, InteractionHandler};
use crate::tui::component::EventHandler;
use crate::tui::components::{ButtonEvent, LoadButton, OutputPaneState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

const IDLE_POLL: Duration = Duration::from_millis(250);

/// TUI-specific presentation state (not part of core state)
pub struct TuiState {
    pub output: OutputPaneState,
    pub load_button: LoadButton,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            output: OutputPaneState::new(),
            load_button: LoadButton::new(),
        }
    }
}

/// Forwards display transitions from request tasks to the event loop.
pub struct ChannelSink {
    tx: mpsc::Sender<DisplayState>,
}

impl ChannelSink {
    pub fn new(tx: mpsc::Sender<DisplayState>) -> Self {
        Self { tx }
    }
}

impl DisplaySink for ChannelSink {
    fn show(&self, state: DisplayState) {
        if self.tx.send(state).is_err() {
            // Event loop already exited; nothing left to render to
            debug!("Display update dropped: receiver gone");
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture)?;
        info!("Terminal mouse capture enabled");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let source = Arc::new(HttpSource::new(&config.base_url));
    let (tx, rx) = mpsc::channel();
    let handler = InteractionHandler::new(source.clone(), Arc::new(ChannelSink::new(tx)))
        .with_policy(config.stale_responses);

    let mut app = App::new(source.endpoint().to_string());
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = match TerminalModeGuard::new() {
        Ok(guard) => Some(guard),
        Err(e) => {
            warn!("Mouse capture unavailable, keyboard only: {}", e);
            None
        }
    };
    info!(
        "Event loop started: endpoint={}, policy={:?}",
        app.endpoint,
        handler.policy()
    );

    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(IDLE_POLL);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if !handle_input(event, &mut app, &mut tui, &handler) {
                should_quit = true;
                break;
            }
        }

        if should_quit {
            break;
        }

        if drain_display(&rx, &mut app, &mut tui) {
            needs_redraw = true;
        }
    }

    info!("Exiting after {} request(s)", app.trigger_count);
    ratatui::restore();
    Ok(())
}

/// Routes one input event. Returns `false` when the loop should exit.
fn handle_input(
    event: TuiEvent,
    app: &mut App,
    tui: &mut TuiState,
    handler: &InteractionHandler,
) -> bool {
    match event {
        TuiEvent::Quit => return false,
        TuiEvent::Resize => {}
        TuiEvent::ScrollUp
        | TuiEvent::ScrollDown
        | TuiEvent::ScrollPageUp
        | TuiEvent::ScrollPageDown => {
            tui.output.handle_event(&event);
        }
        TuiEvent::Activate | TuiEvent::MouseClick(..) => {
            if let Some(ButtonEvent::Activated) = tui.load_button.handle_event(&event) {
                app.trigger_count += 1;
                // Detached: no cancellation of earlier requests
                drop(handler.trigger());
            }
        }
    }
    true
}

/// Applies display transitions from request tasks (last write wins).
/// Returns whether anything changed.
fn drain_display(rx: &mpsc::Receiver<DisplayState>, app: &mut App, tui: &mut TuiState) -> bool {
    let mut changed = false;
    while let Ok(state) = rx.try_recv() {
        debug!("Display -> {}", state.label());
        app.apply(state);
        tui.output.reset();
        changed = true;
    }
    changed
}
