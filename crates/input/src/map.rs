//! Key mapping from terminal events to logical buttons.

use crate::types::Button;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, ModifierKeyCode};

/// Map a key to the button it drives, ignoring the event kind.
pub fn button_for(key: &KeyEvent) -> Option<Button> {
    match key.code {
        // Movement
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(Button::Forward),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(Button::Backward),
        KeyCode::Char('a') | KeyCode::Char('A') => Some(Button::StrafeLeft),
        KeyCode::Char('d') | KeyCode::Char('D') => Some(Button::StrafeRight),

        // Turning without a pointer
        KeyCode::Left => Some(Button::TurnLeft),
        KeyCode::Right => Some(Button::TurnRight),

        KeyCode::Modifier(ModifierKeyCode::LeftShift | ModifierKeyCode::RightShift) => {
            Some(Button::Sprint)
        }

        // Actions
        KeyCode::Enter => Some(Button::Confirm),
        KeyCode::Char(' ') => Some(Button::Fire),
        KeyCode::Backspace => Some(Button::Back),
        KeyCode::Esc => Some(Button::Escape),

        _ => None,
    }
}

/// Whether the event carries Shift. Legacy terminals never report Shift on its
/// own, only as a modifier or an uppercase letter.
pub fn sprint_held(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::SHIFT)
        || matches!(key.code, KeyCode::Char(c) if c.is_ascii_uppercase())
}
