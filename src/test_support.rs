//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use ratatui::Terminal;
use ratatui::backend::TestBackend;

use crate::core::action::{Action, update};
use crate::core::input::InputLine;
use crate::core::state::{App, Screen};
use crate::tui::styles::Styles;
use crate::tui::ui::draw_ui;

/// An app that has seen a resize and finished its initial load.
pub fn ready_app(width: u16, height: u16) -> App {
    let mut app = App::new();
    update(&mut app, Action::Resize(width, height));
    update(&mut app, Action::InitialLoadComplete);
    app
}

/// A ready app on the Input screen holding `text` with the cursor at `cursor`.
pub fn input_app(text: &str, cursor: usize) -> App {
    let mut app = ready_app(80, 24);
    app.screen = Screen::Input;
    app.input = InputLine::from(text);
    app.input.move_home();
    for _ in 0..cursor {
        app.input.move_right();
    }
    app
}

/// Draw `app` into a `width`x`height` test terminal and return the rows.
pub fn render_lines(app: &App, width: u16, height: u16) -> Vec<String> {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    let styles = Styles::default();
    terminal.draw(|f| draw_ui(f, app, &styles)).unwrap();

    let buffer = terminal.backend().buffer();
    (0..buffer.area.height)
        .map(|y| {
            (0..buffer.area.width)
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
        })
        .collect()
}
