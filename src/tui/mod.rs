//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! translates terminal events into `core::Action` values and executes the
//! commands `update()` hands back.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Loop
//!
//! ```text
//!  terminal events ──┐
//!                    ├──► update(&mut app, action) ──► commands ──► tokio::spawn
//!  command results ──┘            │                                     │
//!        ▲                        ▼                                     │
//!        │                   draw_ui(&app)                              │
//!        └───────────── mpsc::Sender<Action> ◄──────────────────────────┘
//! ```
//!
//! Only the loop touches `App`. Command tasks run concurrently but send
//! their single result back over the channel, so actions are applied one at
//! a time in whatever order they arrive.
//!
//! ## Redraw Strategy
//!
//! A frame is drawn only after at least one action was applied. The loop
//! waits up to `POLL_TIMEOUT` for terminal input, then drains all queued
//! terminal events and command results before drawing again.

mod component;
mod components;
mod event;
pub mod styles;
pub mod ui;

use log::{debug, info, warn};
use std::io;
use std::sync::mpsc;
use std::time::Duration;

use ratatui::DefaultTerminal;

use crate::core::action::{Action, update};
use crate::core::command::{Command, startup_commands};
use crate::core::config::Config;
use crate::core::state::App;
use crate::tui::event::{poll_event_immediate, poll_event_timeout};
use crate::tui::styles::Styles;

/// Upper bound on how long a command result waits before it is applied.
const POLL_TIMEOUT: Duration = Duration::from_millis(50);

/// Set up the terminal, run until the user quits, restore the terminal.
///
/// Must be called from within a tokio runtime; commands are spawned onto it.
pub fn run(config: &Config) -> io::Result<()> {
    let mut app = App::from_config(config);
    let styles = Styles::from_theme(&config.theme);

    let mut terminal = ratatui::try_init()?;
    info!("Terminal initialized (alternate screen, raw mode)");

    let result = event_loop(&mut terminal, &mut app, &styles);

    ratatui::restore();
    info!("Terminal restored");
    result
}

fn event_loop(terminal: &mut DefaultTerminal, app: &mut App, styles: &Styles) -> io::Result<()> {
    // Channel for actions from command tasks
    let (tx, rx) = mpsc::channel();

    // crossterm only reports later resizes, so seed the current size
    let size = terminal.size()?;
    dispatch(app, Action::Resize(size.width, size.height), &tx);
    for command in startup_commands(app.show_clock) {
        spawn_command(command, tx.clone());
    }

    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, app, styles))?;
            needs_redraw = false;
        }

        // Process first event + drain ALL pending events before next draw
        let mut next = poll_event_timeout(POLL_TIMEOUT)?;
        while let Some(action) = next {
            needs_redraw = true;
            if dispatch(app, action, &tx) {
                return Ok(());
            }
            next = poll_event_immediate()?;
        }

        // Handle command results
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            if dispatch(app, action, &tx) {
                return Ok(());
            }
        }
    }
}

/// Apply one action and start the commands it produced.
///
/// Returns `true` once a `Quit` command comes back.
fn dispatch(app: &mut App, action: Action, tx: &mpsc::Sender<Action>) -> bool {
    debug!("Event loop received: {:?}", action);
    let mut quit = false;
    for command in update(app, action) {
        match command {
            Command::Quit => {
                info!("Quit requested");
                quit = true;
            }
            command => spawn_command(command, tx.clone()),
        }
    }
    quit
}

/// Run `command` on its own task and send its result back to the loop.
fn spawn_command(command: Command, tx: mpsc::Sender<Action>) {
    info!("Spawning command: {:?}", command);
    tokio::spawn(async move {
        if let Some(action) = command.perform().await
            && tx.send(action).is_err()
        {
            // The loop has exited; nothing left to deliver to
            warn!("Failed to deliver command result: receiver dropped");
        }
    });
}
