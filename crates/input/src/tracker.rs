//! Held-button tracker for terminal environments.
//!
//! Supports terminals that do not emit key release events by using a timeout:
//! until the first release event arrives, a button counts as released once no
//! press or repeat for it has been seen for the timeout window.

use std::time::{Duration, Instant};

use crossterm::event::{Event, KeyEvent, KeyEventKind, MouseEvent, MouseEventKind};

use crate::map::{button_for, sprint_held};
use crate::types::{Button, Buttons, InputFrame};

const SLOTS: usize = Button::COUNT;

pub const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u64 = 150;

#[derive(Debug, Clone)]
pub struct InputTracker {
    held: Buttons,
    last_seen: [Option<Instant>; SLOTS],
    release_events_seen: bool,
    key_release_timeout: Duration,
    last_column: Option<u16>,
    pointer_dx: f32,
}

impl InputTracker {
    pub fn new() -> Self {
        Self {
            held: Buttons::empty(),
            last_seen: [None; SLOTS],
            release_events_seen: false,
            key_release_timeout: Duration::from_millis(DEFAULT_KEY_RELEASE_TIMEOUT_MS),
            last_column: None,
            pointer_dx: 0.0,
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.key_release_timeout = Duration::from_millis(timeout_ms);
        self
    }

    pub fn key_release_timeout_ms(&self) -> u64 {
        self.key_release_timeout.as_millis() as u64
    }

    /// True once the terminal has delivered a key release, which disables the
    /// timeout fallback.
    pub fn release_events_seen(&self) -> bool {
        self.release_events_seen
    }

    pub fn handle_event(&mut self, event: &Event, now: Instant) {
        match event {
            Event::Key(key) => self.handle_key(key, now),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::FocusLost => self.reset(),
            _ => {}
        }
    }

    fn handle_key(&mut self, key: &KeyEvent, now: Instant) {
        match key.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => {
                if let Some(button) = button_for(key) {
                    self.press(button, now);
                }
                if sprint_held(key) {
                    self.press(Button::Sprint, now);
                }
            }
            KeyEventKind::Release => {
                self.release_events_seen = true;
                if let Some(button) = button_for(key) {
                    self.release(button);
                }
                if sprint_held(key) {
                    self.release(Button::Sprint);
                }
            }
        }
    }

    fn handle_mouse(&mut self, mouse: &MouseEvent) {
        if let MouseEventKind::Moved | MouseEventKind::Drag(_) = mouse.kind {
            if let Some(prev) = self.last_column {
                self.pointer_dx += f32::from(mouse.column) - f32::from(prev);
            }
            self.last_column = Some(mouse.column);
        }
    }

    fn press(&mut self, button: Button, now: Instant) {
        self.held.insert(button);
        self.last_seen[button as usize] = Some(now);
    }

    fn release(&mut self, button: Button) {
        self.held.remove(button);
        self.last_seen[button as usize] = None;
    }

    /// Snapshot for one tick. Expires stale presses when the terminal has not
    /// shown it reports releases.
    pub fn frame(&mut self, now: Instant) -> InputFrame {
        if !self.release_events_seen {
            for button in Button::ALL {
                if let Some(seen) = self.last_seen[button as usize] {
                    if now.saturating_duration_since(seen) > self.key_release_timeout {
                        self.release(button);
                    }
                }
            }
        }
        InputFrame::new(self.held, self.pointer_dx)
    }

    /// Treat the current pointer position as the new reference.
    pub fn recenter_pointer(&mut self) {
        self.pointer_dx = 0.0;
    }

    pub fn reset(&mut self) {
        self.held = Buttons::empty();
        self.last_seen = [None; SLOTS];
        self.pointer_dx = 0.0;
        self.last_column = None;
    }
}

impl Default for InputTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers, MouseEvent};

    fn key(code: KeyCode, kind: KeyEventKind) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        })
    }

    fn moved(column: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Moved,
            column,
            row: 0,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_press_and_release_events() {
        let mut t = InputTracker::new();
        let now = Instant::now();
        t.handle_event(&key(KeyCode::Char('w'), KeyEventKind::Press), now);
        assert!(t.frame(now).held.contains(Button::Forward));

        t.handle_event(&key(KeyCode::Char('w'), KeyEventKind::Release), now);
        assert!(t.release_events_seen());
        assert!(!t.frame(now).held.contains(Button::Forward));
    }

    #[test]
    fn test_auto_release_triggers_after_timeout_without_key_release_events() {
        let mut t = InputTracker::new().with_key_release_timeout_ms(50);
        let start = Instant::now();
        t.handle_event(&key(KeyCode::Char(' '), KeyEventKind::Press), start);
        assert!(t.frame(start + Duration::from_millis(40)).held.contains(Button::Fire));
        assert!(t.frame(start + Duration::from_millis(51)).held.is_empty());
    }

    #[test]
    fn test_repeat_extends_hold() {
        let mut t = InputTracker::new().with_key_release_timeout_ms(50);
        let start = Instant::now();
        t.handle_event(&key(KeyCode::Up, KeyEventKind::Press), start);
        let later = start + Duration::from_millis(40);
        t.handle_event(&key(KeyCode::Up, KeyEventKind::Repeat), later);
        assert!(t.frame(start + Duration::from_millis(80)).held.contains(Button::Forward));
    }

    #[test]
    fn test_release_events_disable_timeout() {
        let mut t = InputTracker::new().with_key_release_timeout_ms(50);
        let start = Instant::now();
        t.handle_event(&key(KeyCode::Char('x'), KeyEventKind::Release), start);
        t.handle_event(&key(KeyCode::Char('d'), KeyEventKind::Press), start);
        let frame = t.frame(start + Duration::from_secs(5));
        assert!(frame.held.contains(Button::StrafeRight));
    }

    #[test]
    fn test_shifted_letter_holds_sprint() {
        let mut t = InputTracker::new();
        let now = Instant::now();
        t.handle_event(
            &Event::Key(KeyEvent::new(KeyCode::Char('W'), KeyModifiers::SHIFT)),
            now,
        );
        let frame = t.frame(now);
        assert!(frame.held.contains(Button::Forward));
        assert!(frame.held.contains(Button::Sprint));
    }

    #[test]
    fn test_shifted_letter_release_drops_sprint() {
        let mut t = InputTracker::new();
        let now = Instant::now();
        t.handle_event(&key(KeyCode::Char('W'), KeyEventKind::Press), now);
        assert!(t.frame(now).held.contains(Button::Sprint));

        t.handle_event(&key(KeyCode::Char('W'), KeyEventKind::Release), now);
        let frame = t.frame(now);
        assert!(!frame.held.contains(Button::Sprint));
        assert!(!frame.held.contains(Button::Forward));
    }

    #[test]
    fn test_pointer_delta_accumulates_until_recentered() {
        let mut t = InputTracker::new();
        let now = Instant::now();
        t.handle_event(&moved(10), now);
        t.handle_event(&moved(14), now);
        t.handle_event(&moved(13), now);
        assert_eq!(t.frame(now).pointer_dx, 3.0);
        t.recenter_pointer();
        assert_eq!(t.frame(now).pointer_dx, 0.0);
        t.handle_event(&moved(11), now);
        assert_eq!(t.frame(now).pointer_dx, -2.0);
    }

    #[test]
    fn test_focus_lost_clears_everything() {
        let mut t = InputTracker::new();
        let now = Instant::now();
        t.handle_event(&key(KeyCode::Char('w'), KeyEventKind::Press), now);
        t.handle_event(&Event::FocusLost, now);
        assert!(t.frame(now).held.is_empty());
    }

    #[test]
    fn test_default_key_release_timeout_is_non_zero() {
        assert!(InputTracker::new().key_release_timeout_ms() > 0);
    }
}
