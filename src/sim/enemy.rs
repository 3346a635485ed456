//! Pursuer enemies: text labels that seek the shooter and keep apart
//!
//! Each frame a pursuer steps straight at the shooter, then steps away
//! from crowded neighbours. Peers are updated in order, so later
//! pursuers see the already-moved positions of earlier ones.

use glam::Vec2;

use super::entity::Entity;
use crate::consts::*;
use crate::label_size;

/// Words an enemy label can show
pub const WORD_LIST: [&str; 10] = [
    "depression",
    "stress",
    "quit",
    "fear",
    "reject",
    "anxiety",
    "doubt",
    "failure",
    "loneliness",
    "guilt",
];

/// A seek-and-separate enemy
#[derive(Debug, Clone)]
pub struct Pursuer {
    pub id: u32,
    pub pos: Vec2,
    /// Label text
    pub word: &'static str,
    pub health: i32,
    pub speed: f32,
    pub alive: bool,
}

impl Pursuer {
    pub fn new(id: u32, pos: Vec2, word: &'static str) -> Self {
        Self {
            id,
            pos,
            word,
            health: ENEMY_HEALTH,
            speed: ENEMY_SPEED,
            alive: true,
        }
    }

    /// Average inverse-distance push away from peers inside the separation radius
    ///
    /// Peers at exactly our position are ignored.
    pub fn separation<'a>(&self, peers: impl IntoIterator<Item = &'a Pursuer>) -> Vec2 {
        let mut force = Vec2::ZERO;
        let mut neighbors = 0u32;
        for other in peers {
            if other.id == self.id {
                continue;
            }
            let offset = self.pos - other.pos;
            let distance = offset.length();
            if distance > 0.0 && distance < DESIRED_SEPARATION {
                force += offset.normalize() / distance;
                neighbors += 1;
            }
        }
        if neighbors == 0 {
            return Vec2::ZERO;
        }
        force / neighbors as f32
    }

    /// Seek `target`, separate from `peers`, then die if out of health
    pub fn update<'a>(&mut self, target: Vec2, peers: impl IntoIterator<Item = &'a Pursuer>) {
        let to_target = target - self.pos;
        if to_target.length() > 0.0 {
            self.pos += to_target.normalize() * self.speed;
        }

        let push = self.separation(peers);
        if push.length() > 0.0 {
            self.pos += push.normalize() * self.speed * SEPARATION_STRENGTH;
        }

        if self.health <= 0 {
            self.alive = false;
        }
    }
}

impl Entity for Pursuer {
    fn id(&self) -> u32 {
        self.id
    }
    fn position(&self) -> Vec2 {
        self.pos
    }
    fn size(&self) -> Vec2 {
        label_size(self.word)
    }
    fn is_alive(&self) -> bool {
        self.alive
    }
    fn kill(&mut self) {
        self.alive = false;
    }
}

/// Update every live pursuer in order against the live peers around it
pub fn update_pursuers(enemies: &mut [Pursuer], target: Vec2) {
    for i in 0..enemies.len() {
        let (before, rest) = enemies.split_at_mut(i);
        let Some((enemy, after)) = rest.split_first_mut() else {
            break;
        };
        if !enemy.alive {
            continue;
        }
        let peers = before.iter().chain(after.iter()).filter(|e| e.alive);
        enemy.update(target, peers);
    }
}
