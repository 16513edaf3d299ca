/// Static game configuration — built once at startup, read-only afterwards.

use std::env;
use std::str::FromStr;

use crossterm::style::Color;

// ── Defaults ──────────────────────────────────────────────────────────────────

pub const DEFAULT_BG_COLOR: Color = Color::Rgb { r: 230, g: 230, b: 230 };
pub const DEFAULT_SHIP_SPEED: f32 = 0.75;
pub const DEFAULT_BULLET_SPEED: f32 = 0.5;
pub const DEFAULT_BULLET_WIDTH: u16 = 1;
pub const DEFAULT_BULLET_HEIGHT: u16 = 2;
pub const DEFAULT_BULLET_COLOR: Color = Color::Rgb { r: 60, g: 60, b: 60 };
pub const DEFAULT_BULLETS_ALLOWED: usize = 3;
pub const DEFAULT_FPS: u32 = 60;

#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    /// Terminal columns detected at startup.
    pub screen_width: u16,
    /// Terminal rows detected at startup.
    pub screen_height: u16,
    pub bg_color: Color,
    /// Cells per frame.
    pub ship_speed: f32,
    /// Rows per frame.
    pub bullet_speed: f32,
    pub bullet_width: u16,
    pub bullet_height: u16,
    pub bullet_color: Color,
    /// Maximum number of bullets alive at the same time.
    pub bullets_allowed: usize,
    pub fps: u32,
}

impl Settings {
    pub fn new(screen_width: u16, screen_height: u16) -> Self {
        Self {
            screen_width,
            screen_height,
            bg_color: DEFAULT_BG_COLOR,
            ship_speed: DEFAULT_SHIP_SPEED,
            bullet_speed: DEFAULT_BULLET_SPEED,
            bullet_width: DEFAULT_BULLET_WIDTH,
            bullet_height: DEFAULT_BULLET_HEIGHT,
            bullet_color: DEFAULT_BULLET_COLOR,
            bullets_allowed: DEFAULT_BULLETS_ALLOWED,
            fps: DEFAULT_FPS,
        }
    }

    /// Defaults plus any `ALIEN_INVASION_*` overrides found in the environment.
    ///
    /// Unparseable or non-positive values are logged and ignored.
    pub fn from_env(screen_width: u16, screen_height: u16) -> Self {
        let mut settings = Self::new(screen_width, screen_height);
        settings.bullets_allowed =
            read_env_positive("ALIEN_INVASION_BULLETS_ALLOWED", settings.bullets_allowed);
        settings.ship_speed = read_env_positive("ALIEN_INVASION_SHIP_SPEED", settings.ship_speed);
        settings.bullet_speed =
            read_env_positive("ALIEN_INVASION_BULLET_SPEED", settings.bullet_speed);
        settings.fps = read_env_positive("ALIEN_INVASION_FPS", settings.fps);
        settings
    }
}

fn read_env_positive<T>(name: &str, default: T) -> T
where
    T: FromStr + PartialOrd + Default + Copy + std::fmt::Display,
{
    let Ok(raw) = env::var(name) else {
        return default;
    };
    match raw.trim().parse::<T>() {
        Ok(value) if value > T::default() => value,
        _ => {
            tracing::warn!("{} has invalid value {:?}; using default {}", name, raw, default);
            default
        }
    }
}
