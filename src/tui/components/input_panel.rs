//! # InputPanel Component
//!
//! Boxed single-line prompt for the Input screen. The character under the
//! cursor is drawn in the cursor style; at end of buffer a highlighted blank
//! stands in for it.
//!
//! A buffer wider than the box scrolls horizontally: text before the cursor
//! is dropped from the left until the cursor cell fits, then the text after
//! it is cut at the right edge.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::core::input::InputLine;
use crate::tui::component::Component;
use crate::tui::components::{centered_rect, max_line_width, truncate_to_width};
use crate::tui::styles::Styles;

const PROMPT: &str = "Enter value: ";
const HINT: &str = "Press Enter to submit, Esc to cancel";

/// Border (1 per side) plus horizontal padding (2 per side).
const HORIZONTAL_OVERHEAD: u16 = 2 + 4;
/// Border (1 per side) plus vertical padding (1 per side).
const VERTICAL_OVERHEAD: u16 = 2 + 2;
/// Keeps the box from jumping in size as the first characters are typed.
const MIN_CONTENT_WIDTH: u16 = 40;

pub struct InputPanel<'a> {
    input: &'a InputLine,
    styles: &'a Styles,
}

impl<'a> InputPanel<'a> {
    pub fn new(input: &'a InputLine, styles: &'a Styles) -> Self {
        Self { input, styles }
    }

    /// Prompt followed by the buffer, with the cursor cell highlighted.
    ///
    /// The line is at most `max_width` cells wide (as long as the prompt and
    /// cursor cell fit at all) and always includes the cursor cell.
    pub fn input_line(&self, max_width: usize) -> Line<'a> {
        let (before, under, after) = self.input.split_at_cursor();
        let under = under.map(String::from).unwrap_or_else(|| " ".to_string());
        let room = max_width.saturating_sub(PROMPT.width());
        let cursor_width = under.width();

        let mut start = 0;
        let mut before_width = before.width();
        for (i, c) in before.char_indices() {
            if before_width + cursor_width <= room {
                break;
            }
            before_width -= c.width().unwrap_or(0);
            start = i + c.len_utf8();
        }
        let before = &before[start..];
        let after = truncate_to_width(
            after,
            room.saturating_sub(before_width + cursor_width),
        );

        Line::from(vec![
            Span::styled(PROMPT, self.styles.prompt),
            Span::raw(before),
            Span::styled(under, self.styles.cursor),
            Span::raw(after),
        ])
    }

    fn lines(&self, max_width: usize) -> Vec<Line<'a>> {
        vec![
            Line::styled("Input Mode", self.styles.title),
            Line::default(),
            self.input_line(max_width),
            Line::default(),
            Line::styled(HINT, self.styles.subtle),
        ]
    }
}

impl Component for InputPanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let inner = area.width.saturating_sub(HORIZONTAL_OVERHEAD);
        let lines = self.lines(usize::from(inner));
        let width = max_line_width(&lines)
            .max(MIN_CONTENT_WIDTH)
            .saturating_add(HORIZONTAL_OVERHEAD);
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
