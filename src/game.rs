/// The frame loop, independent of where events come from.

use std::io::{self, Write};

use crossterm::event::Event;

use crate::clock::Clock;
use crate::compute::{handle_inputs, tick};
use crate::display;
use crate::entities::{GameState, Input, RunState};
use crate::input::{translate, KeyTracker};

/// One iteration per tick: poll input → update ship → update bullets →
/// redraw → wait.  Returns as soon as a quit is seen, before any further
/// physics or drawing.
///
/// `next_events` is called once per frame and must not block; in the binary
/// it is `input::drain_events`.
pub fn game_loop<W, F>(
    out: &mut W,
    mut state: GameState,
    mut tracker: KeyTracker,
    mut next_events: F,
) -> io::Result<GameState>
where
    W: Write,
    F: FnMut() -> io::Result<Vec<Event>>,
{
    let mut clock = Clock::new();

    while state.run_state == RunState::Running {
        let mut inputs: Vec<Input> = next_events()?.iter().filter_map(translate).collect();
        for input in &inputs {
            tracker.observe(*input, state.frame);
        }
        inputs.extend(tracker.expired(state.frame));

        state = handle_inputs(&state, &inputs);
        if state.run_state == RunState::Quitting {
            break;
        }

        state = tick(&state);
        display::render(out, &state)?;
        clock.tick(state.settings.fps);
    }
    Ok(state)
}
