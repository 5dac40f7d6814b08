//! # TUI Components
//!
//! All UI pieces of the terminal interface. Each is a transient,
//! props-based struct: created fresh each frame from borrowed state, rendered
//! once, dropped.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file, plus shared layout helpers)
//! ├── loading.rs       (centered "Loading..." before the app is ready)
//! ├── header.rs        (title + subtitle band on the main screen)
//! ├── welcome.rs       (main screen body)
//! ├── status_bar.rs    (bottom bar: Ready badge, status text, size badge)
//! ├── help_panel.rs    (boxed keybinding reference)
//! └── input_panel.rs   (boxed text prompt with a highlighted cursor)
//! ```
//!
//! Components receive external data as props, not by reaching into global
//! state:
//!
//! ```rust,ignore
//! // Good: dependencies are explicit
//! StatusBar::new(app, styles).render(frame, footer_area);
//!
//! // Bad: hidden dependency
//! StatusBar.render(frame, area); // reads from some global App
//! ```

pub mod header;
pub mod help_panel;
pub mod input_panel;
pub mod loading;
pub mod status_bar;
pub mod welcome;

pub use header::{HEADER_HEIGHT, Header};
pub use help_panel::HelpPanel;
pub use input_panel::InputPanel;
pub use loading::LoadingScreen;
pub use status_bar::StatusBar;
pub use welcome::Welcome;

use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::text::Line;
use unicode_width::UnicodeWidthChar;

/// A `width`x`height` rect centered in `area`, shrunk to fit when `area` is
/// smaller.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [rect] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    rect
}

/// Widest line, in terminal cells. Saturates at `u16::MAX`.
pub(crate) fn max_line_width(lines: &[Line<'_>]) -> u16 {
    let widest = lines.iter().map(Line::width).max().unwrap_or(0);
    u16::try_from(widest).unwrap_or(u16::MAX)
}

/// Longest prefix of `text` at most `max` cells wide.
pub(crate) fn truncate_to_width(text: &str, max: usize) -> String {
    let mut used = 0;
    text.chars()
        .take_while(|c| {
            used += c.width().unwrap_or(0);
            used <= max
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 80, 24);
        assert_eq!(centered_rect(area, 20, 10), Rect::new(30, 7, 20, 10));
    }

    #[test]
    fn test_centered_rect_clamps_to_area() {
        let area = Rect::new(0, 0, 10, 4);
        assert_eq!(centered_rect(area, 50, 20), area);
        assert_eq!(centered_rect(Rect::default(), 5, 5).area(), 0);
    }

    #[test]
    fn test_max_line_width_saturates() {
        let lines = vec![Line::raw("abc"), Line::raw("日本")];
        assert_eq!(max_line_width(&lines), 4);
        assert_eq!(max_line_width(&[]), 0);

        let huge = "x".repeat(usize::from(u16::MAX) + 10);
        assert_eq!(max_line_width(&[Line::raw(huge)]), u16::MAX);
    }

    #[test]
    fn test_truncate_to_width_counts_cells() {
        assert_eq!(truncate_to_width("abcdef", 3), "abc");
        assert_eq!(truncate_to_width("ab", 10), "ab");
        assert_eq!(truncate_to_width("日本語", 5), "日本");
        assert_eq!(truncate_to_width("abc", 0), "");
    }
}
