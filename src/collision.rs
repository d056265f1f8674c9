//! Collision detection and its consequences.
//!
//! Detection is pure and works on a snapshot of both collections. Applying a
//! detection result is a separate step, so each half can be tested alone.

use crate::entities::{Enemy, Projectile, Rect};

/// One projectile and every enemy it destroyed this frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectileHit {
    pub projectile: usize,
    pub enemies: Vec<usize>,
}

/// Find projectile/enemy overlaps.
///
/// Projectiles are visited in collection order and each enemy is claimed by
/// the first projectile that overlaps it. A projectile whose overlaps were all
/// claimed already is not reported and survives the frame.
pub fn detect_projectile_hits(projectiles: &[Projectile], enemies: &[Enemy]) -> Vec<ProjectileHit> {
    let mut claimed = vec![false; enemies.len()];
    let mut hits = Vec::new();

    for (pi, projectile) in projectiles.iter().enumerate() {
        let rect = projectile.rect();
        let mut struck = Vec::new();
        for (ei, enemy) in enemies.iter().enumerate() {
            if !claimed[ei] && rect.intersects(&enemy.rect()) {
                claimed[ei] = true;
                struck.push(ei);
            }
        }
        if !struck.is_empty() {
            hits.push(ProjectileHit {
                projectile: pi,
                enemies: struck,
            });
        }
    }
    hits
}

/// Remove every projectile and enemy named in `hits`. Returns the number of
/// enemies destroyed.
pub fn apply_projectile_hits(
    hits: &[ProjectileHit],
    projectiles: &mut Vec<Projectile>,
    enemies: &mut Vec<Enemy>,
) -> usize {
    if hits.is_empty() {
        return 0;
    }

    let mut dead_projectiles = vec![false; projectiles.len()];
    let mut dead_enemies = vec![false; enemies.len()];
    for hit in hits {
        dead_projectiles[hit.projectile] = true;
        for &ei in &hit.enemies {
            dead_enemies[ei] = true;
        }
    }

    let mut i = 0;
    projectiles.retain(|_| {
        let keep = !dead_projectiles[i];
        i += 1;
        keep
    });

    let mut i = 0;
    enemies.retain(|_| {
        let keep = !dead_enemies[i];
        i += 1;
        keep
    });

    dead_enemies.iter().filter(|&&d| d).count()
}

/// Points awarded for a set of hits at the current bounty.
pub fn score_for_hits(hits: &[ProjectileHit], enemy_points: u32) -> u32 {
    hits.iter()
        .map(|hit| enemy_points.saturating_mul(hit.enemies.len() as u32))
        .fold(0u32, |acc, pts| acc.saturating_add(pts))
}

/// True if any enemy overlaps the ship.
pub fn ship_collides(ship: &Rect, enemies: &[Enemy]) -> bool {
    enemies.iter().any(|e| e.rect().intersects(ship))
}

/// True if any enemy's bottom edge has reached the bottom of the screen.
pub fn enemy_reached_bottom(enemies: &[Enemy], screen_height: i32) -> bool {
    enemies.iter().any(|e| e.rect().bottom() >= screen_height)
}
