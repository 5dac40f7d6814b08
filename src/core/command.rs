//! # Commands
//!
//! Deferred work requested by `update()`. A `Command` is plain data; the TUI
//! runtime spawns `perform()` on its own task and feeds the resulting
//! `Action` back through `update()`.
//!
//! Each command yields at most one action. Nothing is cancelled once started
//! and completions may arrive in any order.

use std::time::Duration;

use chrono::Local;
use log::debug;

use crate::core::action::Action;

/// Simulated startup work.
pub const INITIAL_LOAD_DELAY: Duration = Duration::from_millis(500);
pub const REFRESH_DELAY: Duration = Duration::from_millis(200);
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

const CLOCK_FORMAT: &str = "%H:%M:%S";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    InitialLoad,
    Refresh,
    ProcessInput(String),
    Tick,
    /// Stop the event loop. Handled by the runtime, never spawned.
    Quit,
}

impl Command {
    /// Run the command to completion and return the action it resolves to.
    pub async fn perform(self) -> Option<Action> {
        debug!("Performing command: {:?}", self);
        match self {
            Command::InitialLoad => {
                tokio::time::sleep(INITIAL_LOAD_DELAY).await;
                Some(Action::InitialLoadComplete)
            }
            Command::Refresh => {
                tokio::time::sleep(REFRESH_DELAY).await;
                let now = Local::now().format(CLOCK_FORMAT);
                Some(Action::RefreshComplete(format!("Refreshed at {now}")))
            }
            Command::ProcessInput(value) => Some(Action::InputProcessed(value)),
            Command::Tick => {
                tokio::time::sleep(TICK_INTERVAL).await;
                Some(Action::Tick(Local::now().format(CLOCK_FORMAT).to_string()))
            }
            Command::Quit => None,
        }
    }
}

/// Commands issued once at startup, after the terminal is set up.
pub fn startup_commands(show_clock: bool) -> Vec<Command> {
    let mut commands = vec![Command::InitialLoad];
    if show_clock {
        commands.push(Command::Tick);
    }
    commands
}
