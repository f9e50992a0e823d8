use std::ops::Deref;

use crossterm::event::{KeyCode, KeyEvent as CrosstermKeyEvent, KeyModifiers};

/// Human readable name of a key, used in help messages, e.g. `ctrl-z`
pub fn key_event_to_string(key_event: &CrosstermKeyEvent) -> String {
    let code = match key_event.code {
        KeyCode::Char(' ') => "space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::F(n) => format!("f({n})"),
        KeyCode::Backspace => "backspace".into(),
        KeyCode::Enter => "enter".into(),
        KeyCode::Left => "left".into(),
        KeyCode::Right => "right".into(),
        KeyCode::Up => "up".into(),
        KeyCode::Down => "down".into(),
        KeyCode::Home => "home".into(),
        KeyCode::End => "end".into(),
        KeyCode::PageUp => "pageup".into(),
        KeyCode::PageDown => "pagedown".into(),
        KeyCode::Tab => "tab".into(),
        KeyCode::BackTab => "backtab".into(),
        KeyCode::Delete => "delete".into(),
        KeyCode::Insert => "insert".into(),
        KeyCode::Esc => "esc".into(),
        _ => String::new(),
    };

    let modifiers = [
        (KeyModifiers::CONTROL, "ctrl"),
        (KeyModifiers::SHIFT, "shift"),
        (KeyModifiers::ALT, "alt"),
    ];
    let mut parts: Vec<String> = modifiers
        .iter()
        .filter(|(m, _)| key_event.modifiers.intersects(*m))
        .map(|(_, name)| name.to_string())
        .collect();
    parts.push(code);
    parts.join("-")
}

/// Wrapper around crossterm's key event so keys can be built from a
/// [`KeyCode`] or a `char` and printed in help messages
#[derive(Clone, Debug, PartialEq)]
pub struct KeyEvent(pub CrosstermKeyEvent);

impl From<CrosstermKeyEvent> for KeyEvent {
    fn from(key_event: CrosstermKeyEvent) -> Self {
        Self(key_event)
    }
}
impl From<KeyCode> for KeyEvent {
    fn from(key_code: KeyCode) -> Self {
        Self(CrosstermKeyEvent::new(key_code, KeyModifiers::NONE))
    }
}
impl From<char> for KeyEvent {
    fn from(c: char) -> Self {
        KeyCode::Char(c).into()
    }
}
impl From<KeyEvent> for CrosstermKeyEvent {
    fn from(val: KeyEvent) -> Self {
        val.0
    }
}
impl Deref for KeyEvent {
    type Target = CrosstermKeyEvent;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
impl std::fmt::Display for KeyEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", key_event_to_string(self))
    }
}
