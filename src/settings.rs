//! Runtime settings: static screen/entity dimensions plus the speed and
//! scoring values that change as waves are cleared.

use std::fmt;

use crate::config::SettingsConfig;
use crate::entities::Rgb;

/// Lowest speed any entity may be given. Keeps speeds strictly positive when a
/// difficulty offset would otherwise zero them out.
pub const MIN_SPEED: f32 = 0.05;

/// Enemy speed forced by the `p` developer key.
pub const DEV_ENEMY_SPEED: f32 = 10.0;
/// Projectile width forced by the `o` developer key.
pub const DEV_BULLET_WIDTH: i32 = 400;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Normal,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard];

    /// Additive adjustment applied to the base enemy speed.
    pub fn enemy_speed_offset(&self) -> f32 {
        match self {
            Difficulty::Easy => -0.25,
            Difficulty::Normal => 0.0,
            Difficulty::Hard => 0.25,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Normal => "Normal",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Horizontal travel direction shared by the whole fleet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FleetDirection {
    Right,
    Left,
}

impl FleetDirection {
    /// `+1.0` for right, `-1.0` for left.
    pub fn sign(&self) -> f32 {
        match self {
            FleetDirection::Right => 1.0,
            FleetDirection::Left => -1.0,
        }
    }

    pub fn reversed(&self) -> Self {
        match self {
            FleetDirection::Right => FleetDirection::Left,
            FleetDirection::Left => FleetDirection::Right,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Settings {
    base: SettingsConfig,

    // Static for the lifetime of the process
    pub screen_width: i32,
    pub screen_height: i32,
    pub ship_width: i32,
    pub ship_height: i32,
    pub ship_limit: u32,
    pub bullet_width: i32,
    pub bullet_height: i32,
    pub bullet_color: Rgb,
    pub bullets_allowed: usize,
    pub enemy_width: i32,
    pub enemy_height: i32,
    pub fleet_drop_speed: f32,
    pub speedup_scale: f32,
    pub score_scale: f32,

    // Reset by `initialize_dynamic_settings`
    pub ship_speed: f32,
    pub bullet_speed: f32,
    pub enemy_speed: f32,
    pub enemy_points: u32,
    pub fleet_direction: FleetDirection,
}

impl Settings {
    pub fn new(base: SettingsConfig, screen_width: i32, screen_height: i32) -> Self {
        let mut settings = Settings {
            screen_width,
            screen_height,
            ship_width: base.ship_width,
            ship_height: base.ship_height,
            ship_limit: base.ship_limit,
            bullet_width: base.bullet_width,
            bullet_height: base.bullet_height,
            bullet_color: base.bullet_color,
            bullets_allowed: base.bullets_allowed,
            enemy_width: base.enemy_width,
            enemy_height: base.enemy_height,
            fleet_drop_speed: base.fleet_drop_speed,
            speedup_scale: base.speedup_scale,
            score_scale: base.score_scale,
            ship_speed: 0.0,
            bullet_speed: 0.0,
            enemy_speed: 0.0,
            enemy_points: 0,
            fleet_direction: FleetDirection::Right,
            base,
        };
        settings.initialize_dynamic_settings();
        settings
    }

    /// Reset speeds, bounty and fleet direction to their base values.
    pub fn initialize_dynamic_settings(&mut self) {
        self.ship_speed = self.base.ship_speed.max(MIN_SPEED);
        self.bullet_speed = self.base.bullet_speed.max(MIN_SPEED);
        self.enemy_speed = self.base.enemy_speed.max(MIN_SPEED);
        self.enemy_points = self.base.enemy_points;
        self.fleet_direction = FleetDirection::Right;
    }

    /// Reset dynamic values, then apply the difficulty's enemy speed offset.
    pub fn apply_difficulty(&mut self, difficulty: Difficulty) {
        self.initialize_dynamic_settings();
        self.enemy_speed = (self.enemy_speed + difficulty.enemy_speed_offset()).max(MIN_SPEED);
    }

    /// Scale up speeds and the per-enemy bounty after a cleared wave.
    pub fn increase_speed(&mut self) {
        self.ship_speed *= self.speedup_scale;
        self.bullet_speed *= self.speedup_scale;
        self.enemy_speed *= self.speedup_scale;
        self.enemy_points = (self.enemy_points as f32 * self.score_scale).round() as u32;
    }
}
