/// All game entity types — pure data, no logic.

use crate::settings::Settings;

pub const SHIP_WIDTH: u16 = 3;
pub const SHIP_HEIGHT: u16 = 2;
pub const ALIEN_WIDTH: u16 = 3;
pub const ALIEN_HEIGHT: u16 = 2;

// ── Geometry ──────────────────────────────────────────────────────────────────

/// Axis-aligned box in terminal cells.  `y` grows downward.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }
}

/// Anything the render pass can place on screen.
pub trait Sprite {
    fn rect(&self) -> Rect;
}

// ── Ship ──────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Ship {
    pub x: f32,
    pub y: f32,
    pub width: u16,
    pub height: u16,
    pub moving_left: bool,
    pub moving_right: bool,
}

impl Ship {
    /// A stationary ship parked at the bottom centre of the screen.
    pub fn new(settings: &Settings) -> Self {
        Ship {
            x: settings.screen_width.saturating_sub(SHIP_WIDTH) as f32 / 2.0,
            y: settings.screen_height.saturating_sub(SHIP_HEIGHT) as f32,
            width: SHIP_WIDTH,
            height: SHIP_HEIGHT,
            moving_left: false,
            moving_right: false,
        }
    }
}

impl Sprite for Ship {
    fn rect(&self) -> Rect {
        Rect {
            x: self.x,
            y: self.y,
            width: self.width as f32,
            height: self.height as f32,
        }
    }
}

// ── Projectiles ───────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Bullet {
    pub x: f32,
    pub y: f32,
    pub width: u16,
    pub height: u16,
}

impl Bullet {
    /// A bullet whose midtop sits on the ship's midtop.
    pub fn from_ship(ship: &Ship, settings: &Settings) -> Self {
        let ship_rect = ship.rect();
        Bullet {
            x: ship_rect.center_x() - settings.bullet_width as f32 / 2.0,
            y: ship_rect.top(),
            width: settings.bullet_width,
            height: settings.bullet_height,
        }
    }
}

impl Sprite for Bullet {
    fn rect(&self) -> Rect {
        Rect {
            x: self.x,
            y: self.y,
            width: self.width as f32,
            height: self.height as f32,
        }
    }
}

// ── Aliens ────────────────────────────────────────────────────────────────────

/// One member of the fleet.  Never moves and is never destroyed.
#[derive(Clone, Debug, PartialEq)]
pub struct Alien {
    pub x: f32,
    pub y: f32,
    pub width: u16,
    pub height: u16,
}

impl Sprite for Alien {
    fn rect(&self) -> Rect {
        Rect {
            x: self.x,
            y: self.y,
            width: self.width as f32,
            height: self.height as f32,
        }
    }
}

// ── Input ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Space,
    Quit,
    Other,
}

/// Platform-neutral input event, processed in arrival order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Input {
    KeyDown(Key),
    KeyUp(Key),
    /// The window (or terminal session) asked to close.
    Close,
}

// ── Master game state ─────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunState {
    Running,
    Quitting,
}

/// The entire game state.  Cloneable so pure update functions can
/// return a new copy without mutating the original.
#[derive(Clone, Debug)]
pub struct GameState {
    pub settings: Settings,
    pub ship: Ship,
    /// Live bullets, unordered.
    pub bullets: Vec<Bullet>,
    pub aliens: Vec<Alien>,
    pub run_state: RunState,
    pub frame: u64,
}
