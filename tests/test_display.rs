use alien_invasion::compute::{fire_bullet, init_state};
use alien_invasion::display::*;
use alien_invasion::entities::{Bullet, GameState, Rect};
use alien_invasion::settings::Settings;

fn render_to_string(state: &GameState) -> String {
    let mut buf: Vec<u8> = Vec::new();
    render(&mut buf, state).unwrap();
    String::from_utf8(buf).unwrap()
}

#[test]
fn frame_fills_background_and_clears() {
    let out = render_to_string(&init_state(Settings::new(40, 20)));
    assert!(out.contains("\x1b[48;2;230;230;230m"));
    assert!(out.contains("\x1b[2J"));
    // Background fill precedes any sprite
    assert!(out.find("\x1b[2J").unwrap() < out.find('▲').unwrap());
}

#[test]
fn draws_ship_at_its_cell() {
    let out = render_to_string(&init_state(Settings::new(40, 20)));
    // Ship at (18.5, 18) → column 18, row 18 → 1-based "19;19"
    assert!(out.contains("\x1b[19;19H ▲ "));
    assert!(out.contains("/█\\"));
}

#[test]
fn draws_every_alien() {
    let state = init_state(Settings::new(40, 20));
    let out = render_to_string(&state);
    assert_eq!(out.matches("«▼»").count(), state.aliens.len());
    assert_eq!(out.matches("╚═╝").count(), state.aliens.len());
}

#[test]
fn bullets_drawn_before_ship() {
    let state = fire_bullet(&init_state(Settings::new(40, 20)));
    let out = render_to_string(&state);
    let bullet_color = "\x1b[38;2;60;60;60m";
    assert!(out.contains(bullet_color));
    assert!(out.find(bullet_color).unwrap() < out.find('▲').unwrap());
}

#[test]
fn sprites_are_clipped_to_screen() {
    let mut state = init_state(Settings::new(40, 20));
    state.aliens.clear();
    state.bullets.push(Bullet { x: 5.0, y: -1.0, width: 1, height: 2 });
    let out = render_to_string(&state);
    // One ship row plus the bottom half of the bullet
    assert_eq!(out.matches('█').count(), 2);
    assert!(out.contains("\x1b[1;6H█"));
}

#[test]
fn ship_partly_off_left_edge_is_clipped() {
    let mut state = init_state(Settings::new(40, 20));
    state.aliens.clear();
    state.ship.x = -1.0;
    let out = render_to_string(&state);
    assert!(out.contains("\x1b[19;1H▲ "));
    assert!(out.contains("\x1b[20;1H█\\"));
}

#[test]
fn cell_origin_truncates_toward_negative_infinity() {
    let r = Rect { x: 2.9, y: -0.5, width: 1.0, height: 1.0 };
    assert_eq!(cell_origin(&r), (2, -1));
}

#[test]
fn title_is_set() {
    let mut buf: Vec<u8> = Vec::new();
    set_title(&mut buf).unwrap();
    let out = String::from_utf8(buf).unwrap();
    assert!(out.contains(TITLE));
}
