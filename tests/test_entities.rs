use alien_invasion::entities::*;
use alien_invasion::settings::Settings;

#[test]
fn rect_edges() {
    let r = Rect { x: 2.5, y: 4.0, width: 3.0, height: 2.0 };
    assert_eq!(r.left(), 2.5);
    assert_eq!(r.right(), 5.5);
    assert_eq!(r.top(), 4.0);
    assert_eq!(r.bottom(), 6.0);
    assert_eq!(r.center_x(), 4.0);
}

#[test]
fn ship_starts_mid_bottom_and_idle() {
    let ship = Ship::new(&Settings::new(40, 20));
    assert_eq!(ship.x, 18.5); // (40 - 3) / 2
    assert_eq!(ship.y, 18.0); // 20 - 2
    assert_eq!(ship.rect().bottom(), 20.0);
    assert!(!ship.moving_left);
    assert!(!ship.moving_right);
}

#[test]
fn ship_on_screen_narrower_than_sprite() {
    let ship = Ship::new(&Settings::new(2, 1));
    assert_eq!(ship.x, 0.0);
    assert_eq!(ship.y, 0.0);
}

#[test]
fn bullet_midtop_matches_ship_midtop() {
    let settings = Settings::new(40, 20);
    let ship = Ship::new(&settings);
    let bullet = Bullet::from_ship(&ship, &settings);

    assert_eq!(bullet.rect().center_x(), ship.rect().center_x());
    assert_eq!(bullet.rect().top(), ship.rect().top());
    assert_eq!(bullet.width, settings.bullet_width);
    assert_eq!(bullet.height, settings.bullet_height);
}

#[test]
fn enums_compare() {
    assert_eq!(RunState::Running, RunState::Running);
    assert_ne!(RunState::Running, RunState::Quitting);
    assert_ne!(Input::KeyDown(Key::Left), Input::KeyUp(Key::Left));
    assert_ne!(Input::KeyDown(Key::Left), Input::KeyDown(Key::Right));
}
