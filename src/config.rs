//! Tunable configuration, loaded from an optional TOML file.
//!
//! Every section carries `#[serde(default)]`, so a file only needs the keys
//! it wants to override.

use std::{fs, path::Path, path::PathBuf};

use serde::Deserialize;

use crate::entities::Rgb;
use crate::error::{GameError, Result};
use crate::settings::Difficulty;

/// Base values for `Settings`. Dynamic fields are reset to these on every
/// new game and difficulty change.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SettingsConfig {
    pub ship_limit: u32,
    pub ship_speed: f32,
    pub ship_width: i32,
    pub ship_height: i32,
    pub bullet_speed: f32,
    pub bullet_width: i32,
    pub bullet_height: i32,
    pub bullet_color: Rgb,
    pub bullets_allowed: usize,
    pub enemy_speed: f32,
    pub enemy_width: i32,
    pub enemy_height: i32,
    pub fleet_drop_speed: f32,
    pub speedup_scale: f32,
    pub score_scale: f32,
    pub enemy_points: u32,
}

impl Default for SettingsConfig {
    fn default() -> Self {
        Self {
            ship_limit: 3,
            ship_speed: 6.0,
            ship_width: 24,
            ship_height: 32,
            bullet_speed: 8.0,
            bullet_width: 3,
            bullet_height: 15,
            bullet_color: Rgb(250, 220, 60),
            bullets_allowed: 3,
            enemy_speed: 1.0,
            enemy_width: 24,
            enemy_height: 32,
            fleet_drop_speed: 16.0,
            speedup_scale: 1.1,
            score_scale: 1.5,
            enemy_points: 50,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct DisplayConfig {
    /// Logical pixels covered by one terminal column.
    pub cell_width: u16,
    /// Logical pixels covered by one terminal row.
    pub cell_height: u16,
    pub frame_ms: u64,
    /// Length of the freeze after losing a ship.
    pub hit_pause_ms: u64,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            cell_width: 8,
            cell_height: 16,
            frame_ms: 33,
            hit_pause_ms: 1000,
        }
    }
}

impl DisplayConfig {
    /// Number of frames the post-hit pause lasts, rounded up.
    pub fn hit_pause_frames(&self) -> u32 {
        let frame = self.frame_ms.max(1);
        self.hit_pause_ms.div_ceil(frame) as u32
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct GameConfig {
    pub settings: SettingsConfig,
    pub display: DisplayConfig,
    pub high_score_path: PathBuf,
    /// Enables the `p` / `o` developer keys.
    pub dev_controls: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            settings: SettingsConfig::default(),
            display: DisplayConfig::default(),
            high_score_path: PathBuf::from("all_time_high_score.txt"),
            dev_controls: false,
        }
    }
}

impl GameConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = fs::read_to_string(path).map_err(|source| GameError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&data).map_err(|source| GameError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load_or_default(path: impl AsRef<Path>) -> (Self, Option<GameError>) {
        match Self::load_from_file(path) {
            Ok(cfg) => (cfg, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// Collect human-readable warnings for suspicious values. Never fails:
    /// the game clamps what it must and runs with the rest.
    pub fn validate(&self) -> Vec<String> {
        let mut w = Vec::new();
        let s = &self.settings;
        if s.ship_speed <= 0.0 {
            w.push(format!("settings.ship_speed must be > 0 (got {})", s.ship_speed));
        }
        if s.bullet_speed <= 0.0 {
            w.push(format!("settings.bullet_speed must be > 0 (got {})", s.bullet_speed));
        }
        if s.enemy_speed <= 0.0 {
            w.push(format!("settings.enemy_speed must be > 0 (got {})", s.enemy_speed));
        } else if s.enemy_speed + Difficulty::Easy.enemy_speed_offset() <= 0.0 {
            w.push(format!(
                "settings.enemy_speed {} leaves no positive speed on Easy; it will be clamped",
                s.enemy_speed
            ));
        }
        if s.bullets_allowed == 0 {
            w.push("settings.bullets_allowed is 0; firing is disabled".to_string());
        }
        if s.ship_limit == 0 {
            w.push("settings.ship_limit is 0; every hit ends the game".to_string());
        }
        if s.speedup_scale < 1.0 {
            w.push(format!(
                "settings.speedup_scale {} slows the game down each wave",
                s.speedup_scale
            ));
        }
        if s.enemy_width <= 0 || s.enemy_height <= 0 {
            w.push("settings.enemy_width/enemy_height must be > 0".to_string());
        }
        if s.ship_width <= 0 || s.ship_height <= 0 {
            w.push("settings.ship_width/ship_height must be > 0".to_string());
        }
        if self.display.cell_width == 0 || self.display.cell_height == 0 {
            w.push("display.cell_width/cell_height must be > 0".to_string());
        }
        if self.display.frame_ms == 0 {
            w.push("display.frame_ms is 0; the loop will spin".to_string());
        }
        w
    }
}
