//! # StatusBar Component
//!
//! Bottom row of the main screen:
//!
//! ```text
//!  Ready  Refreshed at 12:00:00  09:41:07                    80x24
//! └badge┘└status text (optional)┘└clock┘└──── space fill ───┘└badge┘
//! ```
//!
//! The row always fills the exact terminal width. When space is short the
//! status text is cut first; the badges are never split.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::core::state::App;
use crate::tui::component::Component;
use crate::tui::components::truncate_to_width;
use crate::tui::styles::Styles;

pub struct StatusBar<'a> {
    width: u16,
    height: u16,
    status: Option<&'a str>,
    clock: Option<&'a str>,
    styles: &'a Styles,
}

impl<'a> StatusBar<'a> {
    pub fn new(app: &'a App, styles: &'a Styles) -> Self {
        Self {
            width: app.width,
            height: app.height,
            status: app.last_refresh.as_deref(),
            clock: if app.show_clock { app.clock.as_deref() } else { None },
            styles,
        }
    }

    /// The full row for a bar `width` cells wide.
    pub fn line(&self, width: u16) -> Line<'a> {
        let styles = self.styles;
        let left = " Ready ".to_string();
        let right = format!(" {}x{} ", self.width, self.height);

        let available =
            (width as usize).saturating_sub(left.width() + right.width());

        let mut middle = String::new();
        if let Some(status) = self.status {
            middle.push(' ');
            middle.push_str(status);
        }
        if let Some(clock) = self.clock {
            middle.push_str("  ");
            middle.push_str(clock);
        }
        let middle = truncate_to_width(&middle, available);
        let gap = available.saturating_sub(middle.width());

        Line::from(vec![
            Span::styled(left, styles.status_left),
            Span::styled(middle, styles.info),
            Span::raw(" ".repeat(gap)),
            Span::styled(right, styles.status_right),
        ])
        .style(styles.status_bar)
    }
}

impl Component for StatusBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Paragraph::new(self.line(area.width)), area);
    }
}
