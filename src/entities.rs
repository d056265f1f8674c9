//! Game entities and their per-frame kinematics.
//!
//! Each entity keeps a precise `f32` position and derives an integer `Rect`
//! from it, so speeds below one pixel per frame still accumulate.

use serde::Deserialize;

use crate::settings::Settings;

// ── Geometry ──────────────────────────────────────────────────────────────────

/// An RGB colour triple.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Axis-aligned rectangle in logical pixels. `x`/`y` are the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    pub fn center_x(&self) -> i32 {
        self.x + self.w / 2
    }

    /// Strict overlap: rectangles that only share an edge do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    /// Half-open containment (left/top inclusive, right/bottom exclusive).
    pub fn contains_point(&self, x: i32, y: i32) -> bool {
        x >= self.left() && x < self.right() && y >= self.top() && y < self.bottom()
    }
}

/// Which sprite the presentation layer should draw for a rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sprite {
    Ship,
    Enemy,
}

// ── Ship ──────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Ship {
    x: f32,
    rect: Rect,
    pub moving_left: bool,
    pub moving_right: bool,
}

impl Ship {
    /// Create a ship centred at the bottom of the screen.
    pub fn new(settings: &Settings) -> Self {
        let mut ship = Ship {
            x: 0.0,
            rect: Rect::new(0, 0, settings.ship_width, settings.ship_height),
            moving_left: false,
            moving_right: false,
        };
        ship.center_ship(settings);
        ship
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    /// Apply the held movement intents. Each direction is checked on its own,
    /// so holding both only cancels out when both moves are legal.
    pub fn update(&mut self, settings: &Settings) {
        if self.moving_right && self.rect.right() < settings.screen_width {
            self.x += settings.ship_speed;
        }
        if self.moving_left && self.rect.left() > 0 {
            self.x -= settings.ship_speed;
        }
        let max_x = (settings.screen_width - self.rect.w).max(0) as f32;
        self.x = self.x.clamp(0.0, max_x);
        self.rect.x = self.x as i32;
    }

    /// Move the ship back to the horizontal centre, resting on the bottom edge.
    pub fn center_ship(&mut self, settings: &Settings) {
        self.rect.x = settings.screen_width / 2 - self.rect.w / 2;
        self.rect.y = settings.screen_height - self.rect.h;
        self.x = self.rect.x as f32;
    }
}

// ── Projectile ────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Projectile {
    y: f32,
    rect: Rect,
    pub color: Rgb,
}

impl Projectile {
    /// Spawn a projectile at the ship's top-centre.
    pub fn new(settings: &Settings, ship: &Rect) -> Self {
        let w = settings.bullet_width;
        let h = settings.bullet_height;
        let rect = Rect::new(ship.center_x() - w / 2, ship.top(), w, h);
        Projectile {
            y: rect.y as f32,
            rect,
            color: settings.bullet_color,
        }
    }

    /// Place a projectile directly; mostly useful for tests and replays.
    pub fn at(rect: Rect, color: Rgb) -> Self {
        Projectile {
            y: rect.y as f32,
            rect,
            color,
        }
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    /// Move up by `bullet_speed`, then sync the drawn rect from the accumulator.
    pub fn update(&mut self, settings: &Settings) {
        self.y -= settings.bullet_speed;
        self.rect.y = self.y.floor() as i32;
    }

    /// True once the bottom edge has left the top of the screen.
    pub fn is_off_screen(&self) -> bool {
        self.rect.bottom() <= 0
    }
}

// ── Enemy ─────────────────────────────────────────────────────────────────────

/// A single fleet member. It has no velocity of its own: the fleet moves it.
#[derive(Clone, Debug)]
pub struct Enemy {
    x: f32,
    y: f32,
    rect: Rect,
}

impl Enemy {
    pub fn new(x: f32, y: f32, w: i32, h: i32) -> Self {
        Enemy {
            x,
            y,
            rect: Rect::new(x.floor() as i32, y.floor() as i32, w, h),
        }
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    /// True when touching or past the left or right screen edge.
    pub fn check_edges(&self, screen_width: i32) -> bool {
        self.rect.right() >= screen_width || self.rect.left() <= 0
    }

    /// Shift horizontally by `speed` in the fleet's direction.
    pub fn advance(&mut self, speed: f32, direction: f32) {
        self.x += speed * direction;
        self.rect.x = self.x.floor() as i32;
    }

    pub fn drop_by(&mut self, distance: f32) {
        self.y += distance;
        self.rect.y = self.y.floor() as i32;
    }
}
