use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::game::PlayerInput;

/// A key counts as held if a press or repeat arrived within this many frames.
/// Terminals without release events only send OS key-repeat presses, which
/// arrive well inside this window while the key is down.
pub const HOLD_WINDOW: u64 = 6;

/// Tracks which keys are held down, frame by frame.
#[derive(Debug, Default)]
pub struct HeldKeys {
    last_seen: HashMap<KeyCode, u64>,
    frame: u64,
}

impl HeldKeys {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, key: &KeyEvent) {
        let code = normalize(key.code);
        match key.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => {
                self.last_seen.insert(code, self.frame);
            }
            KeyEventKind::Release => {
                self.last_seen.remove(&code);
            }
        }
    }

    pub fn next_frame(&mut self) {
        self.frame += 1;
        let frame = self.frame;
        self.last_seen
            .retain(|_, &mut last| frame.saturating_sub(last) <= HOLD_WINDOW);
    }

    pub fn clear(&mut self) {
        self.last_seen.clear();
    }

    fn is_held(&self, code: KeyCode) -> bool {
        self.last_seen.contains_key(&code)
    }

    pub fn snapshot(&self) -> PlayerInput {
        PlayerInput {
            left: self.is_held(KeyCode::Left) || self.is_held(KeyCode::Char('a')),
            right: self.is_held(KeyCode::Right) || self.is_held(KeyCode::Char('d')),
            fire: self.is_held(KeyCode::Char(' ')),
        }
    }
}

fn normalize(code: KeyCode) -> KeyCode {
    match code {
        KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
        other => other,
    }
}
