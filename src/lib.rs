pub mod clock;
pub mod compute;
pub mod display;
pub mod entities;
pub mod fleet;
pub mod game;
pub mod input;
pub mod logging;
pub mod settings;
