/// Held-key tracking for terminals.
///
/// Terminals report key presses, and sometimes repeats and releases, but not
/// key state.  `KeyTracker` records the frame each key was last seen and
/// treats it as held while that is recent enough.
///
/// Works on two classes of terminal:
/// * **Keyboard-enhancement capable** (Ghostty, kitty, etc.): proper
///   `Press` / `Repeat` / `Release` events, so keys drop on release.
/// * **Classic terminals**: only `Press` events (OS key-repeat shows as
///   repeated `Press`).  Keys expire after `HOLD_WINDOW` frames of silence,
///   which is shorter than the OS repeat interval.

use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEventKind, KeyModifiers};

use crate::entities::{CursorKeys, SessionState};

/// A key is "held" if its last press/repeat arrived within this many frames.
pub const HOLD_WINDOW: u64 = 4;

#[derive(Debug, Default)]
pub struct KeyTracker {
    last_seen: HashMap<KeyCode, u64>,
}

impl KeyTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, code: KeyCode, kind: KeyEventKind, frame: u64) {
        match kind {
            KeyEventKind::Press | KeyEventKind::Repeat => {
                self.last_seen.insert(code, frame);
            }
            KeyEventKind::Release => {
                self.last_seen.remove(&code);
            }
        }
    }

    pub fn is_held(&self, code: KeyCode, frame: u64) -> bool {
        self.last_seen
            .get(&code)
            .map(|&last| frame.saturating_sub(last) <= HOLD_WINDOW)
            .unwrap_or(false)
    }

    fn any_held(&self, codes: &[KeyCode], frame: u64) -> bool {
        codes.iter().any(|&c| self.is_held(c, frame))
    }

    /// Arrow keys, with WASD as aliases.
    pub fn cursor_keys(&self, frame: u64) -> CursorKeys {
        use KeyCode::{Char, Down, Left, Right, Up};
        CursorKeys {
            left: self.any_held(&[Left, Char('a'), Char('A')], frame),
            right: self.any_held(&[Right, Char('d'), Char('D')], frame),
            up: self.any_held(&[Up, Char('w'), Char('W'), Char(' ')], frame),
            down: self.any_held(&[Down, Char('s'), Char('S')], frame),
        }
    }
}

/// Run-loop requests a key press can make, besides movement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    Quit,
    Restart,
}

/// `Q`, `Esc` and `Ctrl-C` quit at any time.  `R` restarts only while the
/// restart control is showing.
pub fn control_for(code: KeyCode, modifiers: KeyModifiers, state: &SessionState) -> Option<Control> {
    match code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Control::Quit),
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => Some(Control::Quit),
        KeyCode::Char('r') | KeyCode::Char('R') if state.hud.restart_visible => {
            Some(Control::Restart)
        }
        _ => None,
    }
}
