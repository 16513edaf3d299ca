use std::collections::VecDeque;
use std::io;

use alien_invasion::compute::init_state;
use alien_invasion::entities::{GameState, RunState};
use alien_invasion::game::game_loop;
use alien_invasion::input::KeyTracker;
use alien_invasion::settings::Settings;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

fn press(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

/// Run the loop over scripted per-frame event batches.  Once the script runs
/// out every frame sends `q`, so the loop always terminates.
fn run_script(batches: Vec<Vec<Event>>) -> (GameState, String) {
    let mut script: VecDeque<Vec<Event>> = batches.into();
    let mut out: Vec<u8> = Vec::new();
    let state = game_loop(
        &mut out,
        init_state(Settings::new(40, 20)),
        KeyTracker::new(),
        move || -> io::Result<Vec<Event>> {
            Ok(script
                .pop_front()
                .unwrap_or_else(|| vec![press(KeyCode::Char('q'))]))
        },
    )
    .unwrap();
    (state, String::from_utf8(out).unwrap())
}

#[test]
fn quit_in_first_batch_draws_nothing() {
    let (state, out) = run_script(vec![vec![press(KeyCode::Right), press(KeyCode::Char('q'))]]);
    assert_eq!(state.run_state, RunState::Quitting);
    assert_eq!(state.frame, 0);
    assert!(out.is_empty());
    // Right was applied before the quit, but no physics ran
    assert!(state.ship.moving_right);
    assert_eq!(state.ship.x, 18.5);
}

#[test]
fn frames_before_quit_are_updated_and_drawn() {
    let (state, out) = run_script(vec![vec![press(KeyCode::Right)], vec![]]);
    assert_eq!(state.frame, 2);
    assert_eq!(out.matches("\x1b[2J").count(), 2);
    assert_eq!(state.ship.x, 18.5 + 2.0 * state.settings.ship_speed);
}

#[test]
fn ctrl_c_closes_the_loop() {
    let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    let (state, out) = run_script(vec![vec![], vec![ctrl_c, press(KeyCode::Char(' '))]]);
    assert_eq!(state.frame, 1);
    assert_eq!(out.matches("\x1b[2J").count(), 1);
    assert!(state.bullets.is_empty());
}

#[test]
fn fire_in_loop_respects_cap() {
    let space = press(KeyCode::Char(' '));
    let (state, _) = run_script(vec![vec![space; 5]]);
    assert_eq!(state.frame, 1);
    assert_eq!(state.bullets.len(), state.settings.bullets_allowed);
}

#[test]
fn event_source_error_propagates() {
    let mut out: Vec<u8> = Vec::new();
    let result = game_loop(
        &mut out,
        init_state(Settings::new(40, 20)),
        KeyTracker::new(),
        || Err(io::Error::new(io::ErrorKind::Other, "tty gone")),
    );
    assert!(result.is_err());
    assert!(out.is_empty());
}
