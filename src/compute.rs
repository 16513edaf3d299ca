/// Pure game-logic functions.
///
/// Every public function takes an immutable reference to the current
/// `GameState` and returns a brand-new `GameState`.  Nothing here touches
/// the terminal.

use crate::entities::{Bullet, GameState, Input, Key, RunState, Ship, Sprite};
use crate::fleet::create_fleet;
use crate::settings::Settings;

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build the initial game state: ship at the bottom centre, full fleet,
/// no bullets.
pub fn init_state(settings: Settings) -> GameState {
    let ship = Ship::new(&settings);
    let aliens = create_fleet(&settings);
    tracing::info!(
        width = settings.screen_width,
        height = settings.screen_height,
        aliens = aliens.len(),
        "game initialised"
    );
    GameState {
        settings,
        ship,
        bullets: Vec::new(),
        aliens,
        run_state: RunState::Running,
        frame: 0,
    }
}

// ── Input-driven state transitions (pure) ───────────────────────────────────

/// Apply one input event.  Ignored once the game is quitting.
pub fn handle_input(state: &GameState, input: Input) -> GameState {
    if state.run_state == RunState::Quitting {
        return state.clone();
    }
    match input {
        Input::KeyDown(Key::Right) => set_moving(state, Key::Right, true),
        Input::KeyDown(Key::Left) => set_moving(state, Key::Left, true),
        Input::KeyUp(Key::Right) => set_moving(state, Key::Right, false),
        Input::KeyUp(Key::Left) => set_moving(state, Key::Left, false),
        Input::KeyDown(Key::Space) => fire_bullet(state),
        Input::KeyDown(Key::Quit) | Input::Close => {
            tracing::info!(frame = state.frame, "quit requested");
            GameState {
                run_state: RunState::Quitting,
                ..state.clone()
            }
        }
        Input::KeyDown(_) | Input::KeyUp(_) => state.clone(),
    }
}

/// Apply a frame's worth of input in arrival order.
pub fn handle_inputs(state: &GameState, inputs: &[Input]) -> GameState {
    inputs
        .iter()
        .fold(state.clone(), |acc, input| handle_input(&acc, *input))
}

fn set_moving(state: &GameState, key: Key, flag: bool) -> GameState {
    let mut ship = state.ship.clone();
    match key {
        Key::Right => ship.moving_right = flag,
        Key::Left => ship.moving_left = flag,
        _ => {}
    }
    GameState {
        ship,
        ..state.clone()
    }
}

/// Fire a bullet from the ship — a silent no-op at `bullets_allowed`.
pub fn fire_bullet(state: &GameState) -> GameState {
    if state.bullets.len() >= state.settings.bullets_allowed {
        tracing::debug!(live = state.bullets.len(), "bullet cap reached");
        return state.clone();
    }
    let mut bullets = state.bullets.clone();
    bullets.push(Bullet::from_ship(&state.ship, &state.settings));
    tracing::debug!(live = bullets.len(), "bullet fired");
    GameState {
        bullets,
        ..state.clone()
    }
}

// ── Per-frame updates ────────────────────────────────────────────────────────

/// Move the ship by `ship_speed` according to its flags, keeping it fully
/// on screen.  Holding both directions cancels out.
pub fn update_ship(state: &GameState) -> GameState {
    let speed = state.settings.ship_speed;
    let max_x = (state.settings.screen_width as f32 - state.ship.width as f32).max(0.0);
    let mut ship = state.ship.clone();

    if ship.moving_right && ship.rect().right() < state.settings.screen_width as f32 {
        ship.x = (ship.x + speed).min(max_x);
    }
    if ship.moving_left && ship.rect().left() > 0.0 {
        ship.x = (ship.x - speed).max(0.0);
    }

    GameState {
        ship,
        ..state.clone()
    }
}

/// Move every bullet up by `bullet_speed`, then drop the ones whose bottom
/// edge has reached the top of the screen.
pub fn update_bullets(state: &GameState) -> GameState {
    let speed = state.settings.bullet_speed;
    let before = state.bullets.len();
    let bullets: Vec<Bullet> = state
        .bullets
        .iter()
        .map(|b| Bullet {
            y: b.y - speed,
            ..b.clone()
        })
        .filter(|b| b.rect().bottom() > 0.0)
        .collect();

    let pruned = before - bullets.len();
    if pruned > 0 {
        tracing::trace!(pruned, live = bullets.len(), "bullets left the screen");
    }

    GameState {
        bullets,
        ..state.clone()
    }
}

/// Advance the simulation by one frame.  Does nothing once quitting.
pub fn tick(state: &GameState) -> GameState {
    if state.run_state == RunState::Quitting {
        return state.clone();
    }
    let state = update_ship(state);
    let state = update_bullets(&state);
    GameState {
        frame: state.frame + 1,
        ..state
    }
}
