//! The enemy fleet: grid construction and collective edge/drop movement.

use crate::entities::Enemy;
use crate::settings::Settings;

/// Rows and columns of a fleet that fits the given screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FleetLayout {
    pub columns: usize,
    pub rows: usize,
}

impl FleetLayout {
    /// Column count is `floor((W - 2w) / 1.5w)`; row count is
    /// `floor((H - 3h - ship_h) / 2h) - 1`. Negative results collapse to zero.
    pub fn compute(
        screen_width: i32,
        screen_height: i32,
        enemy_width: i32,
        enemy_height: i32,
        ship_height: i32,
    ) -> Self {
        if enemy_width <= 0 || enemy_height <= 0 {
            return FleetLayout { columns: 0, rows: 0 };
        }
        let available_x = (screen_width - 2 * enemy_width) as f32;
        let columns = (available_x / (1.5 * enemy_width as f32)).floor();

        let available_y = screen_height - 3 * enemy_height - ship_height;
        let rows = available_y.div_euclid(2 * enemy_height) - 1;

        FleetLayout {
            columns: columns.max(0.0) as usize,
            rows: rows.max(0) as usize,
        }
    }

    pub fn len(&self) -> usize {
        self.columns * self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// All live enemies, moved as one rigid body.
#[derive(Clone, Debug, Default)]
pub struct Fleet {
    pub enemies: Vec<Enemy>,
    spawned_empty: bool,
}

impl Fleet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current fleet with a fresh grid. Returns the layout used.
    pub fn create_fleet(&mut self, settings: &Settings) -> FleetLayout {
        let w = settings.enemy_width;
        let h = settings.enemy_height;
        let layout = FleetLayout::compute(
            settings.screen_width,
            settings.screen_height,
            w,
            h,
            settings.ship_height,
        );

        self.enemies.clear();
        self.enemies.reserve(layout.len());
        for row in 0..layout.rows {
            for col in 0..layout.columns {
                let x = w as f32 + 1.5 * w as f32 * col as f32;
                let y = h as f32 + 1.5 * h as f32 * row as f32;
                self.enemies.push(Enemy::new(x, y, w, h));
            }
        }

        self.spawned_empty = self.enemies.is_empty();
        if self.spawned_empty {
            tracing::warn!(
                "screen {}x{} fits no enemies of size {}x{}; fleet is empty",
                settings.screen_width,
                settings.screen_height,
                w,
                h
            );
        }
        layout
    }

    /// True when the last `create_fleet` produced no enemies at all. An empty
    /// fleet in this state was never cleared by play and is not a new wave.
    pub fn spawned_empty(&self) -> bool {
        self.spawned_empty
    }

    /// True when play has destroyed every enemy of a non-empty fleet.
    pub fn is_cleared(&self) -> bool {
        self.enemies.is_empty() && !self.spawned_empty
    }

    pub fn clear(&mut self) {
        self.enemies.clear();
        self.spawned_empty = false;
    }

    pub fn len(&self) -> usize {
        self.enemies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.enemies.is_empty()
    }

    /// True if any enemy touches either side of the screen.
    pub fn check_fleet_edges(&self, screen_width: i32) -> bool {
        self.enemies.iter().any(|e| e.check_edges(screen_width))
    }

    /// Drop every enemy by `fleet_drop_speed` and reverse the fleet direction.
    pub fn change_fleet_direction(&mut self, settings: &mut Settings) {
        for enemy in &mut self.enemies {
            enemy.drop_by(settings.fleet_drop_speed);
        }
        settings.fleet_direction = settings.fleet_direction.reversed();
    }

    /// One frame of fleet movement: edge check, optional drop and reverse,
    /// then horizontal movement in the (possibly new) direction.
    pub fn update(&mut self, settings: &mut Settings) {
        if self.check_fleet_edges(settings.screen_width) {
            self.change_fleet_direction(settings);
        }
        let speed = settings.enemy_speed;
        let direction = settings.fleet_direction.sign();
        for enemy in &mut self.enemies {
            enemy.advance(speed, direction);
        }
    }
}
