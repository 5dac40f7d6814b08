//! # HelpPanel Component
//!
//! Boxed keybinding reference, centered on screen. Keys are read from the
//! configured bindings so the panel always matches what `update()` does.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph};

use crate::core::config::KeybindingConfig;
use crate::tui::component::Component;
use crate::tui::components::{centered_rect, max_line_width};
use crate::tui::styles::Styles;

/// Border (1 per side) plus horizontal padding (2 per side).
const HORIZONTAL_OVERHEAD: u16 = 2 + 4;
/// Border (1 per side) plus vertical padding (1 per side).
const VERTICAL_OVERHEAD: u16 = 2 + 2;

pub struct HelpPanel<'a> {
    keybindings: &'a KeybindingConfig,
    styles: &'a Styles,
}

impl<'a> HelpPanel<'a> {
    pub fn new(keybindings: &'a KeybindingConfig, styles: &'a Styles) -> Self {
        Self {
            keybindings,
            styles,
        }
    }

    fn binding(&self, keys: &[String], effect: &'static str) -> Line<'a> {
        Line::from(vec![
            Span::raw("  "),
            Span::styled(keys.join(", "), self.styles.key),
            Span::raw(" - "),
            Span::raw(effect),
        ])
    }

    pub fn lines(&self) -> Vec<Line<'a>> {
        let bindings = self.keybindings;
        vec![
            Line::styled("Help", self.styles.title),
            Line::default(),
            Line::styled("Keyboard Shortcuts:", self.styles.help),
            Line::default(),
            self.binding(&bindings.help, "Show this help"),
            self.binding(&bindings.input, "Enter input mode"),
            self.binding(&bindings.refresh, "Refresh"),
            self.binding(&bindings.quit, "Quit"),
            self.binding(&["esc".to_string()], "Return to main view"),
            Line::default(),
            Line::styled("Press any key to return", self.styles.subtle),
        ]
    }
}

impl Component for HelpPanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let lines = self.lines();
        let width = max_line_width(&lines).saturating_add(HORIZONTAL_OVERHEAD);
        let height = u16::try_from(lines.len())
            .unwrap_or(u16::MAX)
            .saturating_add(VERTICAL_OVERHEAD);

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(self.styles.panel_border)
            .padding(Padding::new(2, 2, 1, 1));

        frame.render_widget(
            Paragraph::new(lines).block(block),
            centered_rect(area, width, height),
        );
    }
}
