//! # Loading Screen
//!
//! Shown until the app is ready. Ignores everything in the state except the
//! frame size.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;
use crate::tui::styles::Styles;

pub struct LoadingScreen<'a> {
    styles: &'a Styles,
}

impl<'a> LoadingScreen<'a> {
    pub fn new(styles: &'a Styles) -> Self {
        Self { styles }
    }
}

impl Component for LoadingScreen<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [row] = Layout::vertical([Constraint::Length(1)])
            .flex(Flex::Center)
            .areas(area);

        let text = Paragraph::new(Line::styled("Loading...", self.styles.title))
            .alignment(Alignment::Center);
        frame.render_widget(text, row);
    }
}
