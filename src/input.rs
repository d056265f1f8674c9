//! Discrete input events and their translation from terminal events.

use std::collections::HashMap;

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// Logical keys the game reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Fire,
    Quit,
    /// Keyboard equivalent of clicking Play.
    Play,
    Easy,
    Normal,
    Hard,
    /// Developer key: force the enemy speed.
    DevEnemySpeed,
    /// Developer key: force a very wide projectile.
    DevBulletWidth,
}

impl Key {
    /// Keys tracked from press to release. Auto-repeat never re-triggers
    /// them, so holding Space fires once, like a held arrow steers once.
    pub fn is_held_key(&self) -> bool {
        matches!(self, Key::Left | Key::Right | Key::Fire)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    KeyDown(Key),
    KeyUp(Key),
    /// Click position in logical pixels.
    MouseClick { x: i32, y: i32 },
    Quit,
}

/// Map a terminal key code to a game key.
pub fn map_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Key::Left),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Key::Right),
        KeyCode::Char(' ') => Some(Key::Fire),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Key::Quit),
        KeyCode::Enter => Some(Key::Play),
        KeyCode::Char('1') => Some(Key::Easy),
        KeyCode::Char('2') => Some(Key::Normal),
        KeyCode::Char('3') => Some(Key::Hard),
        KeyCode::Char('p') => Some(Key::DevEnemySpeed),
        KeyCode::Char('o') => Some(Key::DevBulletWidth),
        _ => None,
    }
}

/// A held key counts as released if no press/repeat refreshed it within
/// this many frames. Only used when the terminal never reports releases;
/// OS key-repeat runs at 15 Hz or more, which refreshes well inside 4 frames.
pub const HOLD_WINDOW: u64 = 4;

/// Turns raw terminal events into `InputEvent`s, one frame at a time.
///
/// Terminals with keyboard enhancement send proper `Release` events. Classic
/// terminals only send repeated `Press` events while a key is down, so for
/// those the tracker synthesises a `KeyUp` once a held key goes stale.
#[derive(Debug)]
pub struct KeyTracker {
    cell_width: i32,
    cell_height: i32,
    reports_release: bool,
    frame: u64,
    // Held key -> frame it was last pressed or repeated
    held: HashMap<Key, u64>,
}

impl KeyTracker {
    pub fn new(cell_width: u16, cell_height: u16, reports_release: bool) -> Self {
        KeyTracker {
            cell_width: cell_width.max(1) as i32,
            cell_height: cell_height.max(1) as i32,
            reports_release,
            frame: 0,
            held: HashMap::new(),
        }
    }

    /// Start a new frame. Returns `KeyUp` events for held keys that expired.
    pub fn begin_frame(&mut self) -> Vec<InputEvent> {
        self.frame += 1;
        if self.reports_release {
            return Vec::new();
        }
        let frame = self.frame;
        let mut expired: Vec<Key> = self
            .held
            .iter()
            .filter(|(_, last)| frame.saturating_sub(**last) > HOLD_WINDOW)
            .map(|(&key, _)| key)
            .collect();
        expired.sort_by_key(|k| *k as u8);
        for key in &expired {
            self.held.remove(key);
        }
        expired.into_iter().map(InputEvent::KeyUp).collect()
    }

    /// Translate one terminal event.
    pub fn translate(&mut self, event: Event) -> Option<InputEvent> {
        match event {
            Event::Key(KeyEvent {
                code, kind, modifiers, ..
            }) => {
                if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
                    return Some(InputEvent::Quit);
                }
                let key = map_key(code)?;
                match kind {
                    KeyEventKind::Press => {
                        if key.is_held_key() {
                            // OS key-repeat on classic terminals arrives as Press
                            let already_held = self.held.insert(key, self.frame).is_some();
                            if already_held {
                                return None;
                            }
                        }
                        Some(InputEvent::KeyDown(key))
                    }
                    KeyEventKind::Repeat => {
                        if key.is_held_key() {
                            self.held.insert(key, self.frame);
                        }
                        None
                    }
                    KeyEventKind::Release => {
                        if key.is_held_key() {
                            self.held.remove(&key);
                            Some(InputEvent::KeyUp(key))
                        } else {
                            None
                        }
                    }
                }
            }
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                ..
            }) => Some(InputEvent::MouseClick {
                x: column as i32 * self.cell_width + self.cell_width / 2,
                y: row as i32 * self.cell_height + self.cell_height / 2,
            }),
            _ => None,
        }
    }
}
