use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::core::action::Action;
use crate::core::key::Key;

/// Poll for an event, blocking up to `timeout`.
///
/// Returns `Ok(None)` on timeout or for terminal events the core does not
/// care about (mouse, focus, key releases).
pub fn poll_event_timeout(timeout: Duration) -> io::Result<Option<Action>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }
    Ok(translate(event::read()?))
}

/// Poll without blocking. Used to drain everything already queued.
pub fn poll_event_immediate() -> io::Result<Option<Action>> {
    poll_event_timeout(Duration::ZERO)
}

/// Map a crossterm event onto a core action.
pub fn translate(event: Event) -> Option<Action> {
    match event {
        Event::Key(key_event) => {
            log::debug!(
                "Key event: {:?} with modifiers {:?}",
                key_event.code,
                key_event.modifiers
            );
            translate_key(key_event).map(Action::Key)
        }
        Event::Resize(width, height) => Some(Action::Resize(width, height)),
        _ => None,
    }
}

fn translate_key(key_event: KeyEvent) -> Option<Key> {
    // Windows and kitty-protocol terminals also report releases
    if key_event.kind == KeyEventKind::Release {
        return None;
    }

    let modifiers = key_event.modifiers;
    let key = match key_event.code {
        KeyCode::Char(c) if modifiers.contains(KeyModifiers::CONTROL) => Key::Ctrl(c),
        KeyCode::Char(c) if modifiers.contains(KeyModifiers::ALT) => Key::Alt(c),
        KeyCode::Char(c) => Key::Char(c),
        KeyCode::Enter => Key::Enter,
        KeyCode::Esc => Key::Esc,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Delete => Key::Delete,
        KeyCode::Tab => Key::Tab,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Home => Key::Home,
        KeyCode::End => Key::End,
        _ => return None,
    };
    Some(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn test_plain_and_shifted_chars() {
        assert_eq!(
            translate(key(KeyCode::Char('q'), KeyModifiers::NONE)),
            Some(Action::Key(Key::Char('q')))
        );
        assert_eq!(
            translate(key(KeyCode::Char('?'), KeyModifiers::SHIFT)),
            Some(Action::Key(Key::Char('?')))
        );
    }

    #[test]
    fn test_modified_chars() {
        assert_eq!(
            translate(key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Action::Key(Key::Ctrl('c')))
        );
        assert_eq!(
            translate(key(KeyCode::Char('x'), KeyModifiers::ALT)),
            Some(Action::Key(Key::Alt('x')))
        );
    }

    #[test]
    fn test_named_keys() {
        assert_eq!(
            translate(key(KeyCode::Backspace, KeyModifiers::NONE)),
            Some(Action::Key(Key::Backspace))
        );
        assert_eq!(
            translate(key(KeyCode::Esc, KeyModifiers::NONE)),
            Some(Action::Key(Key::Esc))
        );
        assert_eq!(translate(key(KeyCode::F(1), KeyModifiers::NONE)), None);
    }

    #[test]
    fn test_release_is_ignored() {
        let release = KeyEvent::new_with_kind(
            KeyCode::Char('q'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
        );
        assert_eq!(translate(Event::Key(release)), None);
    }

    #[test]
    fn test_resize() {
        assert_eq!(translate(Event::Resize(120, 40)), Some(Action::Resize(120, 40)));
        assert_eq!(translate(Event::FocusGained), None);
    }
}
