//! # Style Registry
//!
//! Named `Style` values shared by every component. Built once at startup from
//! the theme's color scheme and passed to `draw_ui` by reference.

use log::warn;
use ratatui::style::{Color, Modifier, Style};

use crate::core::config::ThemeConfig;

/// The palette a scheme is built from.
struct Palette {
    primary: Color,
    secondary: Color,
    accent: Color,
    subtle: Color,
    success: Color,
    warning: Color,
    error: Color,
    info: Color,
    bar: Color,
}

const DEFAULT_PALETTE: Palette = Palette {
    primary: Color::Rgb(0x7D, 0x56, 0xF4),
    secondary: Color::Rgb(0xF2, 0x5D, 0x94),
    accent: Color::Rgb(0xFA, 0xFA, 0xFA),
    subtle: Color::Rgb(0x62, 0x62, 0x62),
    success: Color::Rgb(0x04, 0xB5, 0x75),
    warning: Color::Rgb(0xFF, 0xAA, 0x00),
    error: Color::Rgb(0xFF, 0x55, 0x55),
    info: Color::Rgb(0x00, 0xB4, 0xD8),
    bar: Color::Rgb(0x3C, 0x3C, 0x3C),
};

#[derive(Debug, Clone, PartialEq)]
pub struct Styles {
    pub title: Style,
    pub subtitle: Style,
    pub section: Style,
    pub header_border: Style,
    pub status_bar: Style,
    pub status_left: Style,
    pub status_right: Style,
    pub help: Style,
    pub key: Style,
    pub subtle: Style,
    pub error: Style,
    pub success: Style,
    pub warning: Style,
    pub info: Style,
    pub panel_border: Style,
    pub prompt: Style,
    pub cursor: Style,
    pub selected: Style,
    pub unselected: Style,
}

impl Styles {
    /// Styles for the theme's `color_scheme`. Unknown names fall back to the
    /// default scheme.
    pub fn from_theme(theme: &ThemeConfig) -> Self {
        match theme.color_scheme.as_str() {
            "default" => Self::colored(&DEFAULT_PALETTE),
            "monochrome" | "mono" => Self::monochrome(),
            other => {
                warn!("Unknown color scheme '{other}', using default");
                Self::colored(&DEFAULT_PALETTE)
            }
        }
    }

    fn colored(p: &Palette) -> Self {
        let bold = Modifier::BOLD;
        Self {
            title: Style::default().fg(p.primary).add_modifier(bold),
            subtitle: Style::default().fg(p.secondary).add_modifier(Modifier::ITALIC),
            section: Style::default()
                .fg(p.primary)
                .add_modifier(bold | Modifier::UNDERLINED),
            header_border: Style::default().fg(p.subtle),
            status_bar: Style::default().fg(Color::White).bg(p.bar),
            status_left: Style::default().fg(p.accent).bg(p.primary),
            status_right: Style::default().fg(p.accent).bg(p.secondary),
            help: Style::default().fg(p.subtle),
            key: Style::default().fg(p.primary).add_modifier(bold),
            subtle: Style::default().fg(p.subtle),
            error: Style::default().fg(p.error).add_modifier(bold),
            success: Style::default().fg(p.success).add_modifier(bold),
            warning: Style::default().fg(p.warning).add_modifier(bold),
            info: Style::default().fg(p.info),
            panel_border: Style::default().fg(p.primary),
            prompt: Style::default().fg(p.primary).add_modifier(bold),
            cursor: Style::default().fg(p.accent).bg(p.primary),
            selected: Style::default().fg(p.primary).add_modifier(bold),
            unselected: Style::default().fg(p.subtle),
        }
    }

    /// No colors at all; emphasis through modifiers only.
    fn monochrome() -> Self {
        let plain = Style::default();
        let bold = plain.add_modifier(Modifier::BOLD);
        let dim = plain.add_modifier(Modifier::DIM);
        Self {
            title: bold,
            subtitle: plain.add_modifier(Modifier::ITALIC),
            section: bold.add_modifier(Modifier::UNDERLINED),
            header_border: dim,
            status_bar: plain.add_modifier(Modifier::REVERSED),
            status_left: bold.add_modifier(Modifier::REVERSED),
            status_right: bold.add_modifier(Modifier::REVERSED),
            help: dim,
            key: bold,
            subtle: dim,
            error: bold.add_modifier(Modifier::UNDERLINED),
            success: bold,
            warning: bold,
            info: plain,
            panel_border: plain,
            prompt: bold,
            cursor: plain.add_modifier(Modifier::REVERSED),
            selected: bold,
            unselected: dim,
        }
    }
}

impl Default for Styles {
    fn default() -> Self {
        Self::colored(&DEFAULT_PALETTE)
    }
}
