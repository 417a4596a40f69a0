//! Key mapping from terminal events to key transitions.

use crate::types::KeyId;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// A change to the set of held keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyTransition {
    Down(KeyId),
    Up(KeyId),
}

/// Browser-style name for a terminal key code.
pub fn key_id(code: KeyCode) -> Option<KeyId> {
    let name = match code {
        KeyCode::Char(ch) => return Some(KeyId::from(ch)),
        KeyCode::Left => "ArrowLeft",
        KeyCode::Right => "ArrowRight",
        KeyCode::Up => "ArrowUp",
        KeyCode::Down => "ArrowDown",
        KeyCode::Enter => "Enter",
        KeyCode::Esc => "Escape",
        KeyCode::Backspace => "Backspace",
        KeyCode::Tab | KeyCode::BackTab => "Tab",
        KeyCode::Delete => "Delete",
        KeyCode::Insert => "Insert",
        KeyCode::Home => "Home",
        KeyCode::End => "End",
        KeyCode::PageUp => "PageUp",
        KeyCode::PageDown => "PageDown",
        KeyCode::F(n) => return Some(KeyId::new(format!("F{n}"))),
        _ => return None,
    };
    Some(KeyId::from(name))
}

/// Map a terminal key event to a transition.
///
/// Auto-repeat is reported as another key-down, which the key set ignores.
pub fn translate(event: KeyEvent) -> Option<KeyTransition> {
    let id = key_id(event.code)?;
    match event.kind {
        KeyEventKind::Press | KeyEventKind::Repeat => Some(KeyTransition::Down(id)),
        KeyEventKind::Release => Some(KeyTransition::Up(id)),
    }
}

/// Check if key should quit the program.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
