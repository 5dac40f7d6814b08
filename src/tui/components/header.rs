//! # Header Component
//!
//! Title and subtitle band across the top of the main screen, separated from
//! the body by a bottom border.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Padding, Paragraph};

use crate::core::state::App;
use crate::tui::component::Component;
use crate::tui::styles::Styles;

/// Rows the header occupies: padding, title, subtitle, padding, border.
pub const HEADER_HEIGHT: u16 = 5;

const SUBTITLE: &str = "A reusable template for ratatui applications";

pub struct Header<'a> {
    pub title: String,
    pub subtitle: String,
    styles: &'a Styles,
}

impl<'a> Header<'a> {
    pub fn new(app: &App, styles: &'a Styles) -> Self {
        let title = if app.use_emoji {
            format!("✨ {}", app.app_name)
        } else {
            app.app_name.clone()
        };
        Self {
            title,
            subtitle: format!("{SUBTITLE} · v{}", app.version),
            styles,
        }
    }
}

impl Component for Header<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::new()
            .borders(Borders::BOTTOM)
            .border_style(self.styles.header_border)
            .padding(Padding::vertical(1));

        let lines = vec![
            Line::styled(self.title.as_str(), self.styles.title),
            Line::styled(self.subtitle.as_str(), self.styles.subtitle),
        ];
        let header = Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center);
        frame.render_widget(header, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::ready_app;

    #[test]
    fn test_title_with_and_without_emoji() {
        let styles = Styles::default();
        let mut app = ready_app(80, 24);
        app.app_name = "Demo".to_string();

        app.use_emoji = true;
        assert_eq!(Header::new(&app, &styles).title, "✨ Demo");

        app.use_emoji = false;
        assert_eq!(Header::new(&app, &styles).title, "Demo");
    }

    #[test]
    fn test_subtitle_includes_version() {
        let styles = Styles::default();
        let mut app = ready_app(80, 24);
        app.version = "1.2.3".to_string();
        assert!(Header::new(&app, &styles).subtitle.ends_with("v1.2.3"));
    }
}
