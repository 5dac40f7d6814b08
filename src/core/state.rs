//! # Application State
//!
//! Everything the app knows, in one struct. No TUI types live here;
//! presentation reads it, `update()` in action.rs is the only writer.
//!
//! ```text
//! App
//! ├── screen: Screen              // Main | Help | Input
//! ├── width, height: u16          // last known terminal size
//! ├── size_known: bool            // a Resize has arrived
//! ├── load_complete: bool         // InitialLoad has resolved
//! ├── ready: bool                 // size_known && load_complete
//! ├── input: InputLine            // buffer + cursor for the Input screen
//! ├── last_error: Option<String>  // latest Error event
//! ├── last_refresh: Option<String>
//! ├── last_submitted: Option<String>
//! ├── clock: Option<String>       // latest Tick, HH:MM:SS
//! └── keybindings, app_name, version, use_emoji, show_clock  // from Config
//! ```

use crate::core::config::{Config, KeybindingConfig};
use crate::core::input::InputLine;

/// The mutually exclusive top-level views.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Screen {
    #[default]
    Main,
    Help,
    Input,
}

#[derive(Debug, Clone, PartialEq)]
pub struct App {
    pub screen: Screen,
    pub width: u16,
    pub height: u16,
    pub size_known: bool,
    pub load_complete: bool,
    /// Loading screen is shown until this flips. It never flips back.
    pub ready: bool,
    pub input: InputLine,
    /// Never cleared by the core; the main screen shows it as a banner.
    pub last_error: Option<String>,
    /// Payload of the most recent `RefreshComplete`.
    pub last_refresh: Option<String>,
    /// Text of the most recently processed input.
    pub last_submitted: Option<String>,
    pub clock: Option<String>,
    pub keybindings: KeybindingConfig,
    pub app_name: String,
    pub version: String,
    pub use_emoji: bool,
    pub show_clock: bool,
}

impl App {
    pub fn new() -> Self {
        Self::from_config(&Config::default())
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            screen: Screen::Main,
            width: 0,
            height: 0,
            size_known: false,
            load_complete: false,
            ready: false,
            input: InputLine::new(),
            last_error: None,
            last_refresh: None,
            last_submitted: None,
            clock: None,
            keybindings: config.keybindings.clone(),
            app_name: config.app_name.clone(),
            version: config.version.clone(),
            use_emoji: config.theme.use_emoji,
            show_clock: config.theme.show_clock,
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_new_defaults() {
        let app = App::new();
        assert_eq!(app.screen, Screen::Main);
        assert_eq!((app.width, app.height), (0, 0));
        assert!(!app.ready);
        assert!(app.input.is_empty());
        assert_eq!(app.input.cursor(), 0);
        assert!(app.last_error.is_none());
    }

    #[test]
    fn test_from_config_copies_settings() {
        let mut config = Config::default();
        config.app_name = "Custom".to_string();
        config.theme.use_emoji = false;
        config.theme.show_clock = true;
        config.keybindings.quit = vec!["x".to_string()];

        let app = App::from_config(&config);
        assert_eq!(app.app_name, "Custom");
        assert!(!app.use_emoji);
        assert!(app.show_clock);
        assert_eq!(app.keybindings.quit, vec!["x"]);
    }
}
