//! Keyboard-backed buttons for terminal play.
//!
//! Terminals rarely report key releases, so a press keeps its button asserted
//! for a hold window (refreshed by auto-repeat). Terminals that do report
//! releases end the hold immediately.

use std::io;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

use crate::map::{logical_input, should_quit};
use crate::sampler::InputSampler;
use crate::types::LogicalInput;

/// How long a single key press keeps its button asserted.
pub const DEFAULT_KEY_HOLD_MS: u64 = 150;

/// What the event pump saw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Quit,
    Input(LogicalInput),
    Ignored,
}

#[derive(Debug)]
pub struct KeyboardSampler {
    origin: Instant,
    hold: Duration,
    // Milliseconds since `origin` plus one; zero means released.
    pressed_at: [AtomicU64; 4],
}

impl KeyboardSampler {
    pub fn new(hold: Duration) -> Self {
        Self {
            origin: Instant::now(),
            hold,
            pressed_at: Default::default(),
        }
    }

    pub fn hold(&self) -> Duration {
        self.hold
    }

    /// Wait up to `timeout` for one terminal event and apply it.
    pub fn pump(&self, timeout: Duration) -> io::Result<KeyOutcome> {
        if !event::poll(timeout)? {
            return Ok(KeyOutcome::Ignored);
        }
        match event::read()? {
            Event::Key(key) => Ok(self.handle_key(key)),
            _ => Ok(KeyOutcome::Ignored),
        }
    }

    pub fn handle_key(&self, key: KeyEvent) -> KeyOutcome {
        self.handle_key_at(key, Instant::now())
    }

    fn handle_key_at(&self, key: KeyEvent, now: Instant) -> KeyOutcome {
        if key.kind == KeyEventKind::Press && should_quit(key) {
            return KeyOutcome::Quit;
        }
        let Some(input) = logical_input(key) else {
            return KeyOutcome::Ignored;
        };
        match key.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => {
                let stamp = now.saturating_duration_since(self.origin).as_millis() as u64 + 1;
                self.pressed_at[input.index()].store(stamp, Ordering::Relaxed);
            }
            KeyEventKind::Release => {
                self.pressed_at[input.index()].store(0, Ordering::Relaxed);
            }
        }
        KeyOutcome::Input(input)
    }

    fn is_pressed_at(&self, input: LogicalInput, now: Instant) -> bool {
        let stamp = self.pressed_at[input.index()].load(Ordering::Relaxed);
        if stamp == 0 {
            return false;
        }
        let now_ms = now.saturating_duration_since(self.origin).as_millis() as u64 + 1;
        now_ms.saturating_sub(stamp) < self.hold.as_millis() as u64
    }
}

impl Default for KeyboardSampler {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_KEY_HOLD_MS))
    }
}

impl InputSampler for KeyboardSampler {
    fn is_pressed(&self, input: LogicalInput) -> bool {
        self.is_pressed_at(input, Instant::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers};

    fn key(code: KeyCode, kind: KeyEventKind) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn press_holds_for_window() {
        let kb = KeyboardSampler::new(Duration::from_millis(150));
        let t0 = kb.origin + Duration::from_millis(1000);

        let out = kb.handle_key_at(key(KeyCode::Up, KeyEventKind::Press), t0);
        assert_eq!(out, KeyOutcome::Input(LogicalInput::RightUp));

        assert!(kb.is_pressed_at(LogicalInput::RightUp, t0));
        assert!(kb.is_pressed_at(LogicalInput::RightUp, t0 + Duration::from_millis(149)));
        assert!(!kb.is_pressed_at(LogicalInput::RightUp, t0 + Duration::from_millis(150)));
        assert!(!kb.is_pressed_at(LogicalInput::LeftUp, t0));
    }

    #[test]
    fn repeat_refreshes_and_release_clears() {
        let kb = KeyboardSampler::new(Duration::from_millis(100));
        let t0 = kb.origin + Duration::from_millis(10);

        kb.handle_key_at(key(KeyCode::Char('w'), KeyEventKind::Press), t0);
        let t1 = t0 + Duration::from_millis(90);
        kb.handle_key_at(key(KeyCode::Char('w'), KeyEventKind::Repeat), t1);
        assert!(kb.is_pressed_at(LogicalInput::LeftUp, t1 + Duration::from_millis(50)));

        kb.handle_key_at(key(KeyCode::Char('w'), KeyEventKind::Release), t1);
        assert!(!kb.is_pressed_at(LogicalInput::LeftUp, t1));
    }

    #[test]
    fn quit_and_unmapped_keys() {
        let kb = KeyboardSampler::default();
        assert_eq!(
            kb.handle_key(key(KeyCode::Char('q'), KeyEventKind::Press)),
            KeyOutcome::Quit
        );
        assert_eq!(
            kb.handle_key(key(KeyCode::Char('x'), KeyEventKind::Press)),
            KeyOutcome::Ignored
        );
        assert!(kb.sample().is_empty());
    }
}
