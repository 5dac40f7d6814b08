//! # Actions
//!
//! Everything that can happen in the app becomes an `Action`.
//! User presses `r`? That's `Action::Key(Key::Char('r'))`.
//! A refresh finishes? That's `Action::RefreshComplete(text)`.
//!
//! The `update()` function takes the current state and an action, mutates the
//! state in place and returns the commands the runtime should run next.
//! No side effects here. I/O happens elsewhere.
//!
//! ```text
//! State + Action  →  update()  →  New State + Vec<Command>
//! ```
//!
//! This makes everything testable: apply actions, assert on the state.
//! And debuggable: log every action, replay the exact session.

use crate::core::command::Command;
use crate::core::key::Key;
use crate::core::state::{App, Screen};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Key(Key),
    Resize(u16, u16),
    InitialLoadComplete,
    RefreshComplete(String),
    InputProcessed(String),
    /// Wall-clock time from a `Tick` command, formatted HH:MM:SS
    Tick(String),
    Error(String),
}

/// Apply one action to the state. Returns follow-up commands, possibly none.
pub fn update(app: &mut App, action: Action) -> Vec<Command> {
    match action {
        Action::Resize(width, height) => {
            app.width = width;
            app.height = height;
            app.size_known = true;
            refresh_ready(app);
            Vec::new()
        }
        Action::InitialLoadComplete => {
            app.load_complete = true;
            refresh_ready(app);
            Vec::new()
        }
        Action::RefreshComplete(data) => {
            app.last_refresh = Some(data);
            Vec::new()
        }
        Action::InputProcessed(value) => {
            app.last_submitted = Some(value);
            Vec::new()
        }
        Action::Tick(time) => {
            app.clock = Some(time);
            vec![Command::Tick]
        }
        Action::Error(err) => {
            app.last_error = Some(err);
            Vec::new()
        }
        Action::Key(key) => match app.screen {
            Screen::Main => handle_main_key(app, &key),
            Screen::Help => handle_help_key(app, &key),
            Screen::Input => handle_input_key(app, &key),
        },
    }
}

/// Ready once both the terminal size and the initial load are in. Sticky.
fn refresh_ready(app: &mut App) {
    if app.size_known && app.load_complete {
        app.ready = true;
    }
}

fn handle_main_key(app: &mut App, key: &Key) -> Vec<Command> {
    let bindings = &app.keybindings;
    if key.matches(&bindings.quit) {
        vec![Command::Quit]
    } else if key.matches(&bindings.help) {
        app.screen = Screen::Help;
        Vec::new()
    } else if key.matches(&bindings.input) {
        app.screen = Screen::Input;
        app.input.move_end();
        Vec::new()
    } else if key.matches(&bindings.refresh) {
        vec![Command::Refresh]
    } else {
        Vec::new()
    }
}

fn handle_help_key(app: &mut App, key: &Key) -> Vec<Command> {
    if *key == Key::Esc || key.matches(&app.keybindings.quit) {
        app.screen = Screen::Main;
    }
    Vec::new()
}

fn handle_input_key(app: &mut App, key: &Key) -> Vec<Command> {
    match key {
        Key::Esc | Key::Ctrl('c') => {
            app.screen = Screen::Main;
        }
        Key::Enter => {
            app.screen = Screen::Main;
            let value = app.input.take();
            return vec![Command::ProcessInput(value)];
        }
        Key::Backspace => {
            app.input.backspace();
        }
        Key::Left => {
            app.input.move_left();
        }
        Key::Right => {
            app.input.move_right();
        }
        Key::Home => app.input.move_home(),
        Key::End => app.input.move_end(),
        other => {
            if let Some(c) = other.printable() {
                app.input.insert(c);
            }
        }
    }
    Vec::new()
}
