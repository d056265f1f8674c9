//! Game state: entities, statistics, menu and the phase machine.
//!
//! `Game` owns every collection. Each component is handed only the pieces it
//! needs (`&Settings`, `&mut Vec<Projectile>`, `&mut Fleet`, ...) rather than
//! a reference back to the whole game.

use crate::collision::{
    apply_projectile_hits, detect_projectile_hits, enemy_reached_bottom, score_for_hits,
    ship_collides,
};
use crate::config::SettingsConfig;
use crate::entities::{Projectile, Ship};
use crate::fleet::Fleet;
use crate::input::{InputEvent, Key};
use crate::menu::{Control, GamePhase, MenuControls};
use crate::settings::{Difficulty, Settings, DEV_BULLET_WIDTH, DEV_ENEMY_SPEED};
use crate::stats::GameStats;

/// What the loop should do after an event was handled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Result of `Game::ship_hit`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShipHit {
    /// A ship was lost; play resumes after the hit pause.
    LifeLost,
    /// That was the last ship; back to the menu.
    GameOver,
}

/// Summary of one frame's projectile step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ProjectileReport {
    pub pruned: usize,
    pub enemies_destroyed: usize,
    pub points: u32,
    pub wave_cleared: bool,
}

#[derive(Debug)]
pub struct Game {
    pub settings: Settings,
    pub stats: GameStats,
    pub ship: Ship,
    pub projectiles: Vec<Projectile>,
    pub fleet: Fleet,
    pub menu: MenuControls,
    phase: GamePhase,
    cursor_visible: bool,
    dev_controls: bool,
}

impl Game {
    pub fn new(base: SettingsConfig, screen_width: i32, screen_height: i32, high_score: u32) -> Self {
        let settings = Settings::new(base, screen_width, screen_height);
        let stats = GameStats::new(settings.ship_limit, high_score);
        let ship = Ship::new(&settings);
        let mut fleet = Fleet::new();
        fleet.create_fleet(&settings);

        Game {
            menu: MenuControls::new(screen_width, screen_height),
            settings,
            stats,
            ship,
            projectiles: Vec::new(),
            fleet,
            phase: GamePhase::Menu,
            cursor_visible: true,
            dev_controls: false,
        }
    }

    pub fn with_dev_controls(mut self, enabled: bool) -> Self {
        self.dev_controls = enabled;
        self
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_active(&self) -> bool {
        self.phase.game_active()
    }

    pub fn cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    // ── Input ────────────────────────────────────────────────────────────────

    pub fn handle_event(&mut self, event: InputEvent) -> Flow {
        match event {
            InputEvent::Quit => return Flow::Quit,
            InputEvent::KeyDown(key) => return self.key_down(key),
            InputEvent::KeyUp(key) => self.key_up(key),
            InputEvent::MouseClick { x, y } => {
                if let Some(control) = self.menu.hit_test(x, y) {
                    self.click(control);
                }
            }
        }
        Flow::Continue
    }

    fn key_down(&mut self, key: Key) -> Flow {
        match key {
            Key::Quit => return Flow::Quit,
            Key::Right => self.ship.moving_right = true,
            Key::Left => self.ship.moving_left = true,
            Key::Fire => {
                if self.is_active() {
                    self.fire_projectile();
                }
            }
            Key::Play => self.click(Control::Play),
            Key::Easy => self.click(Control::Difficulty(Difficulty::Easy)),
            Key::Normal => self.click(Control::Difficulty(Difficulty::Normal)),
            Key::Hard => self.click(Control::Difficulty(Difficulty::Hard)),
            Key::DevEnemySpeed if self.dev_controls => {
                tracing::debug!("dev key: enemy speed forced to {DEV_ENEMY_SPEED}");
                self.settings.enemy_speed = DEV_ENEMY_SPEED;
            }
            Key::DevBulletWidth if self.dev_controls => {
                tracing::debug!("dev key: projectile width forced to {DEV_BULLET_WIDTH}");
                self.settings.bullet_width = DEV_BULLET_WIDTH;
            }
            Key::DevEnemySpeed | Key::DevBulletWidth => {}
        }
        Flow::Continue
    }

    /// Releasing a key only ever clears a movement intent.
    pub fn key_up(&mut self, key: Key) {
        match key {
            Key::Right => self.ship.moving_right = false,
            Key::Left => self.ship.moving_left = false,
            _ => {}
        }
    }

    // ── Phase machine ────────────────────────────────────────────────────────

    /// React to a menu control. Controls do nothing while a game is running.
    pub fn click(&mut self, control: Control) {
        match (self.phase, control) {
            (GamePhase::Active, _) => {}
            (_, Control::Difficulty(d)) => self.choose_difficulty(d),
            (GamePhase::Menu, Control::Play) => self.choose_difficulty(Difficulty::Normal),
            (GamePhase::DifficultySelected(_), Control::Play) => self.start_game(),
        }
    }

    /// Reset dynamic settings, apply the difficulty offset and highlight its
    /// control.
    pub fn choose_difficulty(&mut self, difficulty: Difficulty) {
        if self.is_active() {
            return;
        }
        self.settings.apply_difficulty(difficulty);
        self.menu.select(difficulty);
        self.phase = GamePhase::DifficultySelected(difficulty);
        tracing::info!(
            "difficulty {difficulty} selected: enemy speed {:.2}",
            self.settings.enemy_speed
        );
    }

    /// Begin a new game with the already chosen difficulty.
    pub fn start_game(&mut self) {
        let difficulty = match self.phase {
            GamePhase::DifficultySelected(d) => d,
            _ => return,
        };
        self.stats.reset_stats(self.settings.ship_limit);
        self.phase = GamePhase::Active;

        self.fleet.clear();
        self.projectiles.clear();
        self.fleet.create_fleet(&self.settings);
        self.ship.center_ship(&self.settings);

        self.cursor_visible = false;
        self.menu.clear_selection();
        tracing::info!(
            "game started on {difficulty} with {} ships and {} enemies",
            self.stats.ships_left,
            self.fleet.len()
        );
    }

    // ── Projectiles ──────────────────────────────────────────────────────────

    /// Fire from the ship's nose if fewer than `bullets_allowed` are alive.
    /// Returns true when a projectile was created.
    pub fn fire_projectile(&mut self) -> bool {
        if self.projectiles.len() >= self.settings.bullets_allowed {
            return false;
        }
        let projectile = Projectile::new(&self.settings, &self.ship.rect());
        self.projectiles.push(projectile);
        true
    }

    /// Move projectiles, drop the ones past the top, then resolve hits.
    pub fn update_projectiles(&mut self) -> ProjectileReport {
        for projectile in &mut self.projectiles {
            projectile.update(&self.settings);
        }
        let before = self.projectiles.len();
        self.projectiles.retain(|p| !p.is_off_screen());
        let pruned = before - self.projectiles.len();

        ProjectileReport {
            pruned,
            ..self.check_projectile_enemy_collisions()
        }
    }

    /// Remove colliding projectiles and enemies, score them, and start a new
    /// wave if the fleet is gone.
    pub fn check_projectile_enemy_collisions(&mut self) -> ProjectileReport {
        let hits = detect_projectile_hits(&self.projectiles, &self.fleet.enemies);
        let points = score_for_hits(&hits, self.settings.enemy_points);
        let enemies_destroyed =
            apply_projectile_hits(&hits, &mut self.projectiles, &mut self.fleet.enemies);

        if !hits.is_empty() {
            self.stats.add_score(points);
            if self.stats.check_high_score() {
                tracing::trace!("new high score {}", self.stats.high_score);
            }
        }

        let wave_cleared = self.check_wave_cleared();
        ProjectileReport {
            pruned: 0,
            enemies_destroyed,
            points,
            wave_cleared,
        }
    }

    /// Rebuild the fleet and speed up if play emptied it. A fleet that was
    /// created empty does not count, so tiny screens do not rebuild forever.
    pub fn check_wave_cleared(&mut self) -> bool {
        if !self.fleet.is_cleared() {
            return false;
        }
        self.projectiles.clear();
        self.fleet.create_fleet(&self.settings);
        self.settings.increase_speed();
        self.stats.level += 1;
        tracing::info!(
            "wave cleared; level {} enemy speed {:.2} bounty {}",
            self.stats.level,
            self.settings.enemy_speed,
            self.settings.enemy_points
        );
        true
    }

    // ── Enemies and the ship ─────────────────────────────────────────────────

    pub fn update_ship(&mut self) {
        self.ship.update(&self.settings);
    }

    pub fn update_fleet(&mut self) {
        self.fleet.update(&mut self.settings);
    }

    /// Check the ship against the fleet, then the fleet against the bottom
    /// edge. At most one ship is lost per call.
    pub fn check_ship_collisions(&mut self) -> Option<ShipHit> {
        if ship_collides(&self.ship.rect(), &self.fleet.enemies) {
            return Some(self.ship_hit());
        }
        if enemy_reached_bottom(&self.fleet.enemies, self.settings.screen_height) {
            return Some(self.ship_hit());
        }
        None
    }

    /// Lose a ship. With ships to spare the board is reset; otherwise the game
    /// ends and the menu comes back.
    pub fn ship_hit(&mut self) -> ShipHit {
        if self.stats.ships_left > 1 {
            self.stats.ships_left -= 1;

            self.fleet.clear();
            self.projectiles.clear();
            self.fleet.create_fleet(&self.settings);
            self.ship.center_ship(&self.settings);

            tracing::info!("ship lost; {} left", self.stats.ships_left);
            ShipHit::LifeLost
        } else {
            self.phase = GamePhase::Menu;
            self.cursor_visible = true;
            tracing::info!(
                "game over: score {} high score {}",
                self.stats.score,
                self.stats.high_score
            );
            ShipHit::GameOver
        }
    }
}
