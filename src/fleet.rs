/// Fleet layout: a fixed grid of aliens with one alien of spacing between
/// neighbours, leaving a margin on the right and along the bottom for the ship.

use crate::entities::{Alien, ALIEN_HEIGHT, ALIEN_WIDTH};
use crate::settings::Settings;

/// Top-left corners of every alien in the fleet, row by row.
///
/// Starts at `(alien_width, alien_height)` and steps by twice the alien size
/// in each direction, stopping `2 * alien_width` short of the right edge and
/// `3 * alien_height` short of the bottom.
pub fn fleet_positions(
    screen_width: u32,
    screen_height: u32,
    alien_width: u32,
    alien_height: u32,
) -> Vec<(u32, u32)> {
    let mut positions = Vec::new();
    if alien_width == 0 || alien_height == 0 {
        return positions;
    }

    let x_step = alien_width.saturating_mul(2);
    let y_step = alien_height.saturating_mul(2);
    let x_limit = screen_width.saturating_sub(x_step);
    let y_limit = screen_height.saturating_sub(alien_height.saturating_mul(3));

    let mut y = alien_height;
    while y < y_limit {
        let mut x = alien_width;
        while x < x_limit {
            positions.push((x, y));
            x = x.saturating_add(x_step);
        }
        y = y.saturating_add(y_step);
    }
    positions
}

/// Build the fleet for the current screen.
pub fn create_fleet(settings: &Settings) -> Vec<Alien> {
    fleet_positions(
        settings.screen_width as u32,
        settings.screen_height as u32,
        ALIEN_WIDTH as u32,
        ALIEN_HEIGHT as u32,
    )
    .into_iter()
    .map(|(x, y)| Alien {
        x: x as f32,
        y: y as f32,
        width: ALIEN_WIDTH,
        height: ALIEN_HEIGHT,
    })
    .collect()
}
