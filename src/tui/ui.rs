use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::state::{App, Screen};
use crate::tui::component::Component;
use crate::tui::components::welcome::{BODY_MARGIN, body_size};
use crate::tui::components::{
    HEADER_HEIGHT, Header, HelpPanel, InputPanel, LoadingScreen, StatusBar, Welcome,
};
use crate::tui::styles::Styles;

/// Draw one full frame. Reads `app`, never changes it.
pub fn draw_ui(frame: &mut Frame, app: &App, styles: &Styles) {
    let area = frame.area();

    if !app.ready {
        LoadingScreen::new(styles).render(frame, area);
        return;
    }

    match app.screen {
        Screen::Main => draw_main(frame, area, app, styles),
        Screen::Help => HelpPanel::new(&app.keybindings, styles).render(frame, area),
        Screen::Input => InputPanel::new(&app.input, styles).render(frame, area),
    }
}

fn draw_main(frame: &mut Frame, area: Rect, app: &App, styles: &Styles) {
    use Constraint::{Length, Min};

    let banner_height = u16::from(app.last_error.is_some());
    let layout = Layout::vertical([Length(HEADER_HEIGHT), Length(banner_height), Min(0), Length(1)]);
    let [header_area, banner_area, body_area, footer_area] = layout.areas(area);

    Header::new(app, styles).render(frame, header_area);

    if let Some(error) = &app.last_error {
        draw_error_banner(frame, banner_area, error, styles);
    }

    let (body_width, body_height) = body_size(app.width, app.height);
    let body = Rect::new(
        body_area.x + BODY_MARGIN / 2,
        body_area.y,
        body_width,
        body_height,
    )
    .intersection(body_area);
    Welcome::new(app, styles).render(frame, body);

    StatusBar::new(app, styles).render(frame, footer_area);
}

fn draw_error_banner(frame: &mut Frame, area: Rect, error: &str, styles: &Styles) {
    let banner = Line::from(vec![
        Span::styled(" Error: ", styles.error),
        Span::styled(error, styles.warning),
    ]);
    frame.render_widget(Paragraph::new(banner), area);
}
