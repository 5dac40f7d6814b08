//! # Welcome Component
//!
//! Body of the main screen: an introduction, the feature list, the last
//! processed input (if any) and a pointer to the help screen.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph, Wrap};

use crate::core::state::App;
use crate::tui::component::Component;
use crate::tui::styles::Styles;

/// Columns trimmed from the terminal width (two on each side).
pub const BODY_MARGIN: u16 = 4;
/// Rows reserved for header, footer and spacing.
pub const BODY_ALLOWANCE: u16 = 8;

const FEATURES: &[&str] = &[
    "Pure state machine, separate from the terminal layer",
    "Styled components built on ratatui",
    "Commands as data, run on tokio tasks",
    "JSON or TOML configuration",
    "Input handling",
    "Help system",
];

/// Body size for a `width`x`height` terminal. Height never drops below 1.
pub fn body_size(width: u16, height: u16) -> (u16, u16) {
    (
        width.saturating_sub(BODY_MARGIN),
        height.saturating_sub(BODY_ALLOWANCE).max(1),
    )
}

pub struct Welcome<'a> {
    app: &'a App,
    styles: &'a Styles,
}

impl<'a> Welcome<'a> {
    pub fn new(app: &'a App, styles: &'a Styles) -> Self {
        Self { app, styles }
    }

    fn lines(&self) -> Vec<Line<'a>> {
        let styles = self.styles;
        let mut lines = vec![
            Line::styled("Welcome!", styles.section),
            Line::default(),
            Line::raw(
                "This is a skeleton ratatui application that you can use as a \
                 starting point for your projects.",
            ),
            Line::default(),
            Line::raw("Features:"),
        ];
        let bullet = if self.app.use_emoji { "  ✨ " } else { "  • " };
        lines.extend(FEATURES.iter().map(|feature| {
            Line::from(vec![
                Span::styled(bullet, styles.selected),
                Span::styled(*feature, styles.unselected),
            ])
        }));
        lines.push(Line::default());

        if let Some(submitted) = &self.app.last_submitted {
            lines.push(Line::from(vec![
                Span::styled("Last input: ", styles.success),
                Span::raw(submitted.as_str()),
            ]));
            lines.push(Line::default());
        }

        let help_key = self
            .app
            .keybindings
            .help
            .first()
            .map(String::as_str)
            .unwrap_or("?");
        lines.push(Line::styled(
            format!("Press '{help_key}' for help"),
            styles.subtle,
        ));
        lines
    }
}

impl Component for Welcome<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let body = Paragraph::new(self.lines())
            .block(Block::new().padding(Padding::vertical(1)))
            .wrap(Wrap { trim: false });
        frame.render_widget(body, area);
    }
}
