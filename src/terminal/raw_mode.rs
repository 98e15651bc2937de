//! Raw mode RAII guard and key reading.

use std::io;
use std::time::Duration;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, poll, read};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};

/// Raw mode for as long as this lives.
pub struct RawModeGuard;

impl RawModeGuard {
    pub fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        Ok(RawModeGuard)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
    }
}

/// Line-editing keys, with control chords already decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    Delete,
    Left,
    Right,
    Home,
    End,
    /// Esc or Ctrl+Q
    Cancel,
    /// Ctrl+U
    ClearLine,
    /// Ctrl+C
    Interrupt,
}

/// Block for the next key press. `None` for events we don't handle.
pub fn read_key() -> io::Result<Option<Key>> {
    match read()? {
        Event::Key(event) if event.kind != KeyEventKind::Release => Ok(decode(event)),
        _ => Ok(None),
    }
}

/// Wait up to `timeout` for input without consuming it. True when something
/// is waiting to be read, or when raw mode is unavailable.
pub fn key_pending(timeout: Duration) -> bool {
    let Ok(_guard) = RawModeGuard::new() else {
        return true;
    };
    poll(timeout).unwrap_or(true)
}

fn decode(event: KeyEvent) -> Option<Key> {
    let ctrl = event.modifiers.contains(KeyModifiers::CONTROL);
    let key = match event.code {
        KeyCode::Char('c') if ctrl => Key::Interrupt,
        KeyCode::Char('q') if ctrl => Key::Cancel,
        KeyCode::Char('u') if ctrl => Key::ClearLine,
        KeyCode::Char(_) if ctrl => return None,
        KeyCode::Char(c) => Key::Char(c),
        KeyCode::Esc => Key::Cancel,
        KeyCode::Enter => Key::Enter,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Delete => Key::Delete,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Home => Key::Home,
        KeyCode::End => Key::End,
        _ => return None,
    };
    Some(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_control_chords() {
        let ev = |code, modifiers| KeyEvent::new(code, modifiers);
        assert_eq!(
            decode(ev(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Key::Interrupt)
        );
        assert_eq!(
            decode(ev(KeyCode::Char('q'), KeyModifiers::CONTROL)),
            Some(Key::Cancel)
        );
        assert_eq!(
            decode(ev(KeyCode::Char('x'), KeyModifiers::CONTROL)),
            None
        );
        assert_eq!(
            decode(ev(KeyCode::Char('x'), KeyModifiers::NONE)),
            Some(Key::Char('x'))
        );
        assert_eq!(decode(ev(KeyCode::Esc, KeyModifiers::NONE)), Some(Key::Cancel));
    }
}
