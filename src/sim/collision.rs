//! Per-frame collision resolution
//!
//! Runs after entity updates in gameplay phases. Player contacts are
//! resolved before projectile hits, so an enemy destroyed by touching the
//! player can't also absorb shots that frame.

use glam::Vec2;

use super::enemy::Pursuer;
use super::entity::{Entity, Projectile, sweep_dead};
use super::rect::Rect;
use super::state::{GamePhase, GameState};
use crate::consts::CONTACT_DAMAGE;

/// What happened during one collision pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollisionReport {
    /// Enemies destroyed by touching the player
    pub contacts: u32,
    /// Projectiles that struck an enemy
    pub hits: u32,
}

impl std::ops::AddAssign for CollisionReport {
    fn add_assign(&mut self, other: Self) {
        self.contacts += other.contacts;
        self.hits += other.hits;
    }
}

/// Destroy every live enemy overlapping `player`; returns how many
pub fn destroy_touching(player: &Rect, enemies: &mut [Pursuer]) -> u32 {
    let mut destroyed = 0;
    for enemy in enemies.iter_mut().filter(|e| e.alive) {
        if enemy.bounds().intersects(player) {
            enemy.kill();
            destroyed += 1;
        }
    }
    destroyed
}

/// Apply projectile hits: each overlapping projectile is consumed and
/// costs the enemy one health. A projectile is spent on the first enemy
/// it hits.
pub fn apply_projectile_hits(enemies: &mut [Pursuer], projectiles: &mut [Projectile]) -> u32 {
    let mut hits = 0;
    for enemy in enemies.iter_mut().filter(|e| e.alive) {
        let bounds = enemy.bounds();
        for shot in projectiles.iter_mut().filter(|p| p.alive) {
            if shot.bounds().intersects(&bounds) {
                shot.kill();
                enemy.health -= 1;
                hits += 1;
            }
        }
    }
    hits
}

/// Resolve all collisions for this frame
///
/// On player contact the shooter is rolled back to `previous_pos` and the
/// flash is raised; health only drops during the initial wave.
pub fn resolve(state: &mut GameState, previous_pos: Vec2) -> CollisionReport {
    let player_bounds = state.player.bounds();
    let contacts = destroy_touching(&player_bounds, &mut state.enemies);
    if contacts > 0 {
        state.player.pos = previous_pos;
        state.flash = true;
        if state.phase == GamePhase::InitialWave {
            state.health = (state.health - CONTACT_DAMAGE).max(0);
        }
        log::debug!("player touched {} enemies, health {}", contacts, state.health);
    }

    let hits = apply_projectile_hits(&mut state.enemies, &mut state.projectiles);

    sweep_dead(&mut state.enemies);
    sweep_dead(&mut state.projectiles);

    CollisionReport { contacts, hits }
}
