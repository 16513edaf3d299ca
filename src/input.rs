/// Terminal input → game `Input` translation.
///
/// Two classes of terminal are supported:
/// * **Keyboard-enhancement capable** (kitty protocol, Ghostty, …): real
///   `Press` / `Repeat` / `Release` events, so key-ups arrive as they happen.
/// * **Classic terminals**: only `Press` events, with OS key-repeat showing
///   up as repeated presses.  `KeyTracker` synthesises the missing key-up once
///   a movement key goes quiet: `INITIAL_HOLD` frames after a lone press
///   (covering the OS delay before auto-repeat starts), `HOLD_WINDOW`
///   frames once repeats are flowing.

use std::collections::HashMap;
use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::entities::{Input, Key};

/// Once a key is auto-repeating it stays held while repeats arrive within
/// this many frames.  8 frames @ 60 FPS ≈ 133 ms, longer than any OS
/// repeat interval.
pub const HOLD_WINDOW: u64 = 8;

/// A single press stays held this long waiting for its first repeat.
/// 40 frames @ 60 FPS ≈ 667 ms, longer than typical initial repeat delays.
pub const INITIAL_HOLD: u64 = 40;

fn map_key(code: KeyCode) -> Key {
    match code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Key::Left,
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Key::Right,
        KeyCode::Char(' ') => Key::Space,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Key::Quit,
        _ => Key::Other,
    }
}

/// Translate one terminal event.  Non-key events yield `None`.
pub fn translate(ev: &Event) -> Option<Input> {
    let Event::Key(KeyEvent {
        code,
        modifiers,
        kind,
        ..
    }) = ev
    else {
        return None;
    };

    if *kind != KeyEventKind::Release
        && modifiers.contains(KeyModifiers::CONTROL)
        && matches!(code, KeyCode::Char('c') | KeyCode::Char('C'))
    {
        return Some(Input::Close);
    }

    let key = map_key(*code);
    match kind {
        KeyEventKind::Press => Some(Input::KeyDown(key)),
        // Repeats only keep movement alive; they never re-fire or re-quit.
        KeyEventKind::Repeat => match key {
            Key::Left | Key::Right => Some(Input::KeyDown(key)),
            _ => None,
        },
        KeyEventKind::Release => Some(Input::KeyUp(key)),
    }
}

/// Read every pending terminal event without blocking.
pub fn drain_events() -> io::Result<Vec<Event>> {
    let mut events = Vec::new();
    while event::poll(Duration::ZERO)? {
        events.push(event::read()?);
    }
    Ok(events)
}

#[derive(Clone, Copy, Debug)]
struct Held {
    last_seen: u64,
    /// A second press arrived, so OS auto-repeat is running.
    repeating: bool,
}

/// Tracks when each movement key was last seen so key-ups can be
/// synthesised on terminals that never report releases.
#[derive(Debug, Default)]
pub struct KeyTracker {
    held: HashMap<Key, Held>,
    /// The terminal delivers genuine releases; synthesis is off.
    releases_reported: bool,
}

impl KeyTracker {
    /// Tracker for a classic terminal: key-ups are synthesised.
    pub fn new() -> Self {
        Self::default()
    }

    /// `reports_releases` should come from
    /// `crossterm::terminal::supports_keyboard_enhancement()`.
    pub fn for_terminal(reports_releases: bool) -> Self {
        Self {
            held: HashMap::new(),
            releases_reported: reports_releases,
        }
    }

    pub fn observe(&mut self, input: Input, frame: u64) {
        match input {
            Input::KeyDown(key @ (Key::Left | Key::Right)) => {
                let repeating = self.held.contains_key(&key);
                self.held.insert(
                    key,
                    Held {
                        last_seen: frame,
                        repeating,
                    },
                );
            }
            Input::KeyUp(key) => {
                self.releases_reported = true;
                self.held.remove(&key);
            }
            _ => {}
        }
    }

    /// Key-ups for movement keys that have gone quiet, Left before Right.
    pub fn expired(&mut self, frame: u64) -> Vec<Input> {
        if self.releases_reported {
            return Vec::new();
        }
        let mut released = Vec::new();
        for key in [Key::Left, Key::Right] {
            if let Some(held) = self.held.get(&key) {
                let window = if held.repeating { HOLD_WINDOW } else { INITIAL_HOLD };
                if frame.saturating_sub(held.last_seen) > window {
                    self.held.remove(&key);
                    released.push(Input::KeyUp(key));
                }
            }
        }
        released
    }

    pub fn releases_reported(&self) -> bool {
        self.releases_reported
    }
}
