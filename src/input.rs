//! Keyboard handling.
//!
//! Instead of acting on each key event individually, [`KeyTracker`] records
//! the frame of the last press/repeat event for every key. Each frame the
//! keys that are still "fresh" become the frame's [`Controls`], so Space and
//! an arrow can be held together.
//!
//! Works on two classes of terminal:
//! * **Keyboard-enhancement capable** (kitty protocol): proper `Press` /
//!   `Repeat` / `Release` events, keys are dropped on release.
//! * **Classic terminals**: only `Press` events (OS key-repeat shows up as
//!   repeated presses). Keys expire after the hold window, which is shorter
//!   than the OS repeat interval, so a key stays live while it repeats.

use std::collections::HashMap;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::entities::Controls;

/// How long a key counts as held after its last press or repeat. The OS
/// key-repeat rate is at least 15 Hz, so this always gets refreshed in time.
pub const HOLD_WINDOW_MS: u64 = 133;

/// One-shot actions triggered by a key press.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    Quit,
    Restart,
}

/// `HOLD_WINDOW_MS` expressed in frames at `fps`, rounded up.
pub fn hold_window_frames(fps: u32) -> u64 {
    (fps as u64 * HOLD_WINDOW_MS + 999) / 1000
}

#[derive(Debug)]
pub struct KeyTracker {
    /// Each held key → the frame it was last seen (press or repeat).
    last_seen: HashMap<KeyCode, u64>,
    hold_window: u64,
}

impl KeyTracker {
    pub fn new(hold_window: u64) -> Self {
        KeyTracker {
            last_seen: HashMap::new(),
            hold_window,
        }
    }

    /// Record one terminal event seen during `frame`.
    pub fn handle(&mut self, event: Event, frame: u64) -> Option<Command> {
        let Event::Key(KeyEvent {
            code,
            modifiers,
            kind,
            ..
        }) = event
        else {
            return None;
        };

        match kind {
            KeyEventKind::Press => {
                self.last_seen.insert(code, frame);
                match code {
                    KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Command::Quit),
                    KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                        Some(Command::Quit)
                    }
                    KeyCode::Char('r') | KeyCode::Char('R') => Some(Command::Restart),
                    _ => None,
                }
            }
            KeyEventKind::Repeat => {
                self.last_seen.insert(code, frame);
                None
            }
            KeyEventKind::Release => {
                self.last_seen.remove(&code);
                None
            }
        }
    }

    /// True if `key` was seen within the hold window ending at `frame`.
    pub fn is_held(&self, key: KeyCode, frame: u64) -> bool {
        self.last_seen
            .get(&key)
            .map(|&last| frame.saturating_sub(last) <= self.hold_window)
            .unwrap_or(false)
    }

    fn any_held(&self, keys: &[KeyCode], frame: u64) -> bool {
        keys.iter().any(|&k| self.is_held(k, frame))
    }

    pub fn controls(&self, frame: u64) -> Controls {
        Controls {
            left: self.any_held(
                &[KeyCode::Left, KeyCode::Char('a'), KeyCode::Char('A')],
                frame,
            ),
            right: self.any_held(
                &[KeyCode::Right, KeyCode::Char('d'), KeyCode::Char('D')],
                frame,
            ),
            jump: self.any_held(
                &[
                    KeyCode::Char(' '),
                    KeyCode::Up,
                    KeyCode::Char('w'),
                    KeyCode::Char('W'),
                ],
                frame,
            ),
        }
    }
}
