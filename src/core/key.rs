//! # Keys
//!
//! A UI-agnostic key press. The TUI adapter translates terminal events into
//! `Key` values so the core never sees crossterm types.
//!
//! Every key has a canonical name (`"q"`, `"ctrl+c"`, `"enter"`, ...). The
//! names are what users write in the `keybindings` section of the config file.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    /// A plain character, possibly shifted (`'a'`, `'A'`, `'?'`, `' '`).
    Char(char),
    Ctrl(char),
    Alt(char),
    Enter,
    Esc,
    Backspace,
    Delete,
    Tab,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
}

impl Key {
    /// Canonical name used for keybinding lookups.
    pub fn name(&self) -> String {
        match self {
            Key::Char(c) => c.to_string(),
            Key::Ctrl(c) => format!("ctrl+{}", c.to_ascii_lowercase()),
            Key::Alt(c) => format!("alt+{c}"),
            Key::Enter => "enter".to_string(),
            Key::Esc => "esc".to_string(),
            Key::Backspace => "backspace".to_string(),
            Key::Delete => "delete".to_string(),
            Key::Tab => "tab".to_string(),
            Key::Left => "left".to_string(),
            Key::Right => "right".to_string(),
            Key::Up => "up".to_string(),
            Key::Down => "down".to_string(),
            Key::Home => "home".to_string(),
            Key::End => "end".to_string(),
        }
    }

    /// The character to insert into the input line, if this key types one.
    ///
    /// Only unmodified, non-control characters qualify. Named keys such as
    /// `enter` or `tab` never insert.
    pub fn printable(&self) -> Option<char> {
        match self {
            Key::Char(c) if !c.is_control() => Some(*c),
            _ => None,
        }
    }

    /// True if this key's name appears in `aliases`.
    ///
    /// Surrounding whitespace in an alias is ignored, except that an alias
    /// made only of whitespace (`" "`) names the space key itself.
    pub fn matches(&self, aliases: &[String]) -> bool {
        let name = self.name();
        aliases.iter().any(|alias| {
            let trimmed = alias.trim();
            if trimmed.is_empty() {
                alias.as_str() == name
            } else {
                trimmed == name
            }
        })
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}
