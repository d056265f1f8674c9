use alien_invasion::config::SettingsConfig;
use alien_invasion::entities::Enemy;
use alien_invasion::fleet::*;
use alien_invasion::settings::{FleetDirection, Settings};

fn settings(width: i32, height: i32) -> Settings {
    Settings::new(SettingsConfig::default(), width, height)
}

// ── Layout ───────────────────────────────────────────────────────────────────

#[test]
fn layout_for_full_hd_screen() {
    let layout = FleetLayout::compute(1920, 1080, 40, 32, 48);
    // floor((1920 - 80) / 60) = 30
    assert_eq!(layout.columns, 30);
    // floor((1080 - 96 - 48) / 64) - 1 = 14 - 1
    assert_eq!(layout.rows, 13);
    assert_eq!(layout.len(), 390);
}

#[test]
fn create_fleet_places_grid_with_spacing() {
    let cfg = SettingsConfig {
        enemy_width: 40,
        enemy_height: 32,
        ship_height: 48,
        ..SettingsConfig::default()
    };
    let s = Settings::new(cfg, 1920, 1080);
    let mut fleet = Fleet::new();
    let layout = fleet.create_fleet(&s);

    assert_eq!(fleet.len(), layout.len());
    let first = fleet.enemies[0].rect();
    assert_eq!((first.x, first.y), (40, 32));
    let second = fleet.enemies[1].rect();
    assert_eq!((second.x, second.y), (100, 32));
    let next_row = fleet.enemies[layout.columns].rect();
    assert_eq!((next_row.x, next_row.y), (40, 80));
}

#[test]
fn default_terminal_screen_layout() {
    let s = settings(960, 640);
    let mut fleet = Fleet::new();
    let layout = fleet.create_fleet(&s);
    assert_eq!(layout, FleetLayout { columns: 25, rows: 7 });
    assert_eq!(fleet.len(), 175);
    assert!(!fleet.spawned_empty());
}

#[test]
fn too_small_screen_yields_empty_fleet() {
    let s = settings(100, 100);
    let mut fleet = Fleet::new();
    let layout = fleet.create_fleet(&s);
    assert!(layout.is_empty());
    assert!(fleet.is_empty());
    assert!(fleet.spawned_empty());
    // An empty-at-birth fleet was not cleared by play
    assert!(!fleet.is_cleared());
}

#[test]
fn recreating_replaces_previous_fleet() {
    let s = settings(960, 640);
    let mut fleet = Fleet::new();
    fleet.create_fleet(&s);
    fleet.enemies.truncate(3);
    fleet.create_fleet(&s);
    assert_eq!(fleet.len(), 175);
}

// ── Edges and direction ──────────────────────────────────────────────────────

#[test]
fn single_enemy_at_left_edge_reverses_and_drops() {
    let mut s = settings(960, 640);
    let mut fleet = Fleet::new();
    fleet.enemies.push(Enemy::new(0.0, 100.0, 24, 32));

    assert!(fleet.check_fleet_edges(s.screen_width));
    fleet.change_fleet_direction(&mut s);

    assert_eq!(s.fleet_direction, FleetDirection::Left);
    assert_eq!(fleet.enemies[0].y(), 100.0 + s.fleet_drop_speed);
}

#[test]
fn drop_applies_to_every_enemy() {
    let mut s = settings(960, 640);
    let mut fleet = Fleet::new();
    fleet.create_fleet(&s);
    let before: Vec<f32> = fleet.enemies.iter().map(|e| e.y()).collect();

    fleet.change_fleet_direction(&mut s);

    for (enemy, y) in fleet.enemies.iter().zip(before) {
        assert_eq!(enemy.y(), y + s.fleet_drop_speed);
    }
}

#[test]
fn no_edge_means_plain_horizontal_move() {
    let mut s = settings(960, 640);
    let mut fleet = Fleet::new();
    fleet.enemies.push(Enemy::new(100.0, 100.0, 24, 32));

    fleet.update(&mut s);

    assert_eq!(fleet.enemies[0].x(), 101.0);
    assert_eq!(fleet.enemies[0].y(), 100.0);
    assert_eq!(s.fleet_direction, FleetDirection::Right);
}

#[test]
fn update_reverses_before_moving() {
    let mut s = settings(960, 640);
    let mut fleet = Fleet::new();
    // Right edge touches the screen edge
    fleet.enemies.push(Enemy::new(936.0, 100.0, 24, 32));

    fleet.update(&mut s);

    assert_eq!(s.fleet_direction, FleetDirection::Left);
    assert_eq!(fleet.enemies[0].x(), 935.0);
    assert_eq!(fleet.enemies[0].y(), 116.0);
}

#[test]
fn sub_pixel_speed_accumulates() {
    let cfg = SettingsConfig {
        enemy_speed: 0.25,
        ..SettingsConfig::default()
    };
    let mut s = Settings::new(cfg, 960, 640);
    let mut fleet = Fleet::new();
    fleet.enemies.push(Enemy::new(100.0, 100.0, 24, 32));

    for _ in 0..4 {
        fleet.update(&mut s);
    }
    assert_eq!(fleet.enemies[0].rect().x, 101);
}

#[test]
fn fleet_reaching_edge_drops_once() {
    let mut s = settings(960, 640);
    let mut fleet = Fleet::new();
    fleet.create_fleet(&s);
    let start_y = fleet.enemies[0].y();

    // Drift right until the first drop
    let mut frames = 0;
    while s.fleet_direction == FleetDirection::Right {
        fleet.update(&mut s);
        frames += 1;
        assert!(frames < 1000, "fleet never reached the edge");
    }
    assert_eq!(fleet.enemies[0].y(), start_y + s.fleet_drop_speed);

    // The very next frame moves away from the edge without another drop
    fleet.update(&mut s);
    assert_eq!(fleet.enemies[0].y(), start_y + s.fleet_drop_speed);
    assert_eq!(s.fleet_direction, FleetDirection::Left);
}
