use alien_invasion::config::SettingsConfig;
use alien_invasion::entities::*;
use alien_invasion::settings::Settings;

fn settings() -> Settings {
    Settings::new(SettingsConfig::default(), 960, 640)
}

// ── Rect ──────────────────────────────────────────────────────────────────────

#[test]
fn rect_edges() {
    let r = Rect::new(10, 20, 30, 40);
    assert_eq!((r.left(), r.right(), r.top(), r.bottom()), (10, 40, 20, 60));
    assert_eq!(r.center_x(), 25);
}

#[test]
fn rect_point_containment_is_half_open() {
    let r = Rect::new(0, 0, 10, 10);
    assert!(r.contains_point(0, 0));
    assert!(r.contains_point(9, 9));
    assert!(!r.contains_point(10, 5));
    assert!(!r.contains_point(5, 10));
}

// ── Ship ──────────────────────────────────────────────────────────────────────

#[test]
fn ship_starts_centred_on_bottom() {
    let ship = Ship::new(&settings());
    assert_eq!(ship.rect(), Rect::new(468, 608, 24, 32));
    assert!(!ship.moving_left && !ship.moving_right);
}

#[test]
fn ship_moves_by_ship_speed() {
    let s = settings();
    let mut ship = Ship::new(&s);
    ship.moving_right = true;
    ship.update(&s);
    assert_eq!(ship.rect().x, 474);

    ship.moving_right = false;
    ship.moving_left = true;
    ship.update(&s);
    ship.update(&s);
    assert_eq!(ship.rect().x, 462);
}

#[test]
fn ship_both_intents_cancel_in_the_middle() {
    let s = settings();
    let mut ship = Ship::new(&s);
    ship.moving_left = true;
    ship.moving_right = true;
    ship.update(&s);
    assert_eq!(ship.rect().x, 468);
}

#[test]
fn ship_stays_on_screen() {
    let s = settings();
    let mut ship = Ship::new(&s);

    ship.moving_right = true;
    for _ in 0..500 {
        ship.update(&s);
    }
    assert_eq!(ship.rect().right(), s.screen_width);

    ship.moving_right = false;
    ship.moving_left = true;
    for _ in 0..500 {
        ship.update(&s);
    }
    assert_eq!(ship.rect().left(), 0);
}

#[test]
fn ship_at_left_edge_still_moves_right_with_both_held() {
    let s = settings();
    let mut ship = Ship::new(&s);
    ship.moving_left = true;
    for _ in 0..500 {
        ship.update(&s);
    }
    ship.moving_right = true;
    ship.update(&s);
    // Right is legal, left is blocked at x = 0
    assert_eq!(ship.rect().x, 6);
}

#[test]
fn center_ship_repositions() {
    let s = settings();
    let mut ship = Ship::new(&s);
    ship.moving_left = true;
    for _ in 0..10 {
        ship.update(&s);
    }
    ship.center_ship(&s);
    assert_eq!(ship.rect(), Rect::new(468, 608, 24, 32));
}

// ── Projectile ────────────────────────────────────────────────────────────────

#[test]
fn projectile_spawns_at_ship_nose() {
    let s = settings();
    let ship = Ship::new(&s);
    let p = Projectile::new(&s, &ship.rect());
    assert_eq!(p.rect(), Rect::new(479, 608, 3, 15));
    assert_eq!(p.color, s.bullet_color);
}

#[test]
fn projectile_moves_up() {
    let s = settings();
    let mut p = Projectile::at(Rect::new(100, 300, 3, 15), s.bullet_color);
    p.update(&s);
    assert_eq!(p.rect().y, 292);
    assert_eq!(p.y(), 292.0);
}

#[test]
fn slow_projectile_accumulates_sub_pixel_motion() {
    let cfg = SettingsConfig {
        bullet_speed: 0.25,
        ..SettingsConfig::default()
    };
    let s = Settings::new(cfg, 960, 640);
    let mut p = Projectile::at(Rect::new(100, 300, 3, 15), s.bullet_color);
    for _ in 0..4 {
        p.update(&s);
    }
    assert_eq!(p.rect().y, 299);
    for _ in 0..40 {
        p.update(&s);
    }
    assert_eq!(p.rect().y, 289);
}

#[test]
fn projectile_off_screen_once_bottom_leaves_top() {
    let s = settings();
    let mut p = Projectile::at(Rect::new(100, 0, 3, 15), s.bullet_color);
    assert!(!p.is_off_screen());
    p.update(&s); // y = -8, bottom 7
    assert!(!p.is_off_screen());
    p.update(&s); // y = -16, bottom -1
    assert!(p.is_off_screen());
}

// ── Enemy ─────────────────────────────────────────────────────────────────────

#[test]
fn enemy_edge_checks() {
    assert!(Enemy::new(0.0, 0.0, 24, 32).check_edges(960));
    assert!(Enemy::new(936.0, 0.0, 24, 32).check_edges(960));
    assert!(!Enemy::new(1.0, 0.0, 24, 32).check_edges(960));
    assert!(!Enemy::new(935.0, 0.0, 24, 32).check_edges(960));
}
