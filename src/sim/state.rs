//! Game state and core simulation types
//!
//! Everything the per-frame driver mutates lives in `GameState`; there
//! are no module-level globals.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::CollisionReport;
use super::enemy::{Pursuer, WORD_LIST};
use super::entity::{Companion, Entity, Projectile, Shooter};
use super::rect::Rect;
use crate::consts::*;

/// Current phase of the game, strictly one-directional
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Enemies trickle in from the border on a timer
    InitialWave,
    /// Health ran out; timed defeat messages
    Defeated,
    /// Waiting for the player to pick a helper
    HelperSelect,
    /// Companions join and a full wave attacks at once
    SecondWave,
    /// Terminal summary screen
    Victory,
}

impl GamePhase {
    /// Phases where entities move and collide
    pub fn is_gameplay(&self) -> bool {
        matches!(self, GamePhase::InitialWave | GamePhase::SecondWave)
    }
}

/// Who the player reaches out to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HelperChoice {
    Family,
    #[default]
    Friends,
    Pets,
}

impl HelperChoice {
    pub fn as_str(&self) -> &'static str {
        match self {
            HelperChoice::Family => "Family",
            HelperChoice::Friends => "Friends",
            HelperChoice::Pets => "Pets",
        }
    }

    /// Companions spawned for this choice, left then right
    pub fn companions(&self) -> [CompanionKind; 2] {
        match self {
            HelperChoice::Family => [CompanionKind::Mom, CompanionKind::Dad],
            HelperChoice::Friends => [CompanionKind::FriendGirl, CompanionKind::FriendBoy],
            HelperChoice::Pets => [CompanionKind::Dog, CompanionKind::Cat],
        }
    }
}

/// Companion visuals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompanionKind {
    Mom,
    Dad,
    FriendGirl,
    FriendBoy,
    Dog,
    Cat,
}

/// Messages shown in order after the player is overwhelmed
pub const CUTSCENE_MESSAGES: [&str; 3] = [
    "You have been overwhelmed...",
    "You were surrounded with negativity...",
    "But don't forget, you can always reach out for help!",
];

/// Repeating interval timer driven by the simulation clock
#[derive(Debug, Clone)]
pub struct SpawnTimer {
    pub interval_ms: u64,
    /// Next firing time; `None` when stopped
    next_fire_ms: Option<u64>,
}

impl SpawnTimer {
    /// Start a timer whose first firing is one interval after `now_ms`
    pub fn started(interval_ms: u64, now_ms: u64) -> Self {
        Self {
            interval_ms,
            next_fire_ms: Some(now_ms + interval_ms),
        }
    }

    pub fn stop(&mut self) {
        self.next_fire_ms = None;
    }

    pub fn is_running(&self) -> bool {
        self.next_fire_ms.is_some()
    }

    /// Number of firings due at `now_ms` (each elapsed interval counts once)
    pub fn poll(&mut self, now_ms: u64) -> u32 {
        let mut fired = 0;
        while let Some(next) = self.next_fire_ms {
            if next > now_ms {
                break;
            }
            fired += 1;
            self.next_fire_ms = Some(next + self.interval_ms.max(1));
        }
        fired
    }
}

/// Progress through the defeat messages
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cutscene {
    /// Index into `CUTSCENE_MESSAGES`
    pub index: usize,
    pub started_ms: u64,
}

impl Cutscene {
    pub fn message(&self) -> Option<&'static str> {
        CUTSCENE_MESSAGES.get(self.index).copied()
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    rng: Pcg32,
    /// Display size
    pub screen_size: Vec2,
    /// Simulation clock (ms since start)
    pub time_ms: u64,
    /// Frames simulated
    pub frame: u64,
    pub phase: GamePhase,
    pub player: Shooter,
    pub health: i32,
    pub max_health: i32,
    /// Set on player contact; shows a full health bar for one frame
    pub flash: bool,
    pub enemies: Vec<Pursuer>,
    pub projectiles: Vec<Projectile>,
    pub companions: Vec<Companion>,
    /// Initial-wave enemies actually placed
    pub spawned_initial: u32,
    pub spawn_timer: SpawnTimer,
    pub cutscene: Cutscene,
    pub helper: Option<HelperChoice>,
    /// Running collision totals for this run
    pub totals: CollisionReport,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a new game on the default screen
    pub fn new(seed: u64) -> Self {
        Self::with_screen(seed, SCREEN_WIDTH, SCREEN_HEIGHT)
    }

    pub fn with_screen(seed: u64, width: f32, height: f32) -> Self {
        let screen_size = Vec2::new(width, height);
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            screen_size,
            time_ms: 0,
            frame: 0,
            phase: GamePhase::InitialWave,
            player: Shooter::new(0, screen_size / 2.0),
            health: MAX_PLAYER_HEALTH,
            max_health: MAX_PLAYER_HEALTH,
            flash: false,
            enemies: Vec::new(),
            projectiles: Vec::new(),
            companions: Vec::new(),
            spawned_initial: 0,
            spawn_timer: SpawnTimer::started(SPAWN_INTERVAL_MS, 0),
            cutscene: Cutscene::default(),
            helper: None,
            totals: CollisionReport::default(),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn rng(&mut self) -> &mut Pcg32 {
        &mut self.rng
    }

    pub fn screen_rect(&self) -> Rect {
        Rect::screen(self.screen_size.x, self.screen_size.y)
    }

    pub fn health_fraction(&self) -> f32 {
        if self.max_health <= 0 {
            return 0.0;
        }
        (self.health as f32 / self.max_health as f32).clamp(0.0, 1.0)
    }

    /// Build an enemy at `pos` with a random label (not yet added to the world)
    pub fn make_pursuer(&mut self, pos: Vec2) -> Pursuer {
        let word = WORD_LIST[self.rng.random_range(0..WORD_LIST.len())];
        let id = self.next_entity_id();
        Pursuer::new(id, pos, word)
    }

    /// Place an initial-wave enemy unless it would overlap a live one
    ///
    /// Returns whether the enemy was placed. Discarded spawns are not
    /// retried and do not count toward the wave quota.
    pub fn try_spawn_initial_enemy(&mut self, pos: Vec2) -> bool {
        let candidate = self.make_pursuer(pos);
        let bounds = candidate.bounds();
        let blocked = self
            .enemies
            .iter()
            .any(|e| e.alive && e.bounds().intersects(&bounds));
        if blocked {
            log::debug!("spawn at ({:.0}, {:.0}) discarded: overlaps an enemy", pos.x, pos.y);
            return false;
        }
        log::debug!("spawned '{}' at ({:.0}, {:.0})", candidate.word, pos.x, pos.y);
        self.enemies.push(candidate);
        self.spawned_initial += 1;
        true
    }

    /// Fire one projectile from the shooter and one from every companion
    pub fn fire_volley(&mut self, target: Vec2) {
        let id = self.next_entity_id();
        let shot = self.player.shoot(id, target);
        self.projectiles.push(shot);

        for i in 0..self.companions.len() {
            let id = self.next_entity_id();
            let shot = self.companions[i].shoot(id, target);
            self.projectiles.push(shot);
        }
    }

    /// Live entity count across all collections (the shooter included)
    pub fn entity_count(&self) -> usize {
        1 + self.enemies.len() + self.projectiles.len() + self.companions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() {
        let state = GameState::new(7);
        assert_eq!(state.phase, GamePhase::InitialWave);
        assert_eq!(state.player.pos, Vec2::new(600.0, 400.0));
        assert_eq!(state.health, MAX_PLAYER_HEALTH);
        assert!(state.spawn_timer.is_running());
        assert_eq!(state.entity_count(), 1);
    }

    #[test]
    fn test_timer_fires_once_per_interval() {
        let mut timer = SpawnTimer::started(1000, 0);
        assert_eq!(timer.poll(999), 0);
        assert_eq!(timer.poll(1000), 1);
        assert_eq!(timer.poll(1500), 0);
        assert_eq!(timer.poll(4000), 3);
        timer.stop();
        assert_eq!(timer.poll(10_000), 0);
        assert!(!timer.is_running());
    }

    #[test]
    fn test_helper_companions() {
        assert_eq!(
            HelperChoice::Family.companions(),
            [CompanionKind::Mom, CompanionKind::Dad]
        );
        assert_eq!(
            HelperChoice::Friends.companions(),
            [CompanionKind::FriendGirl, CompanionKind::FriendBoy]
        );
        assert_eq!(
            HelperChoice::Pets.companions(),
            [CompanionKind::Dog, CompanionKind::Cat]
        );
    }

    #[test]
    fn test_spawn_discarded_on_overlap() {
        let mut state = GameState::new(1);
        assert!(state.try_spawn_initial_enemy(Vec2::new(0.0, 300.0)));
        assert!(!state.try_spawn_initial_enemy(Vec2::new(0.0, 305.0)));
        assert_eq!(state.enemies.len(), 1);
        assert_eq!(state.spawned_initial, 1);
    }

    #[test]
    fn test_hundred_spawns_without_collision() {
        let mut state = GameState::with_screen(3, 4000.0, 4000.0);
        for i in 0..INITIAL_WAVE_ENEMIES {
            let pos = Vec2::new((i % 10) as f32 * 400.0, (i / 10) as f32 * 400.0);
            assert!(state.try_spawn_initial_enemy(pos));
        }
        assert_eq!(state.enemies.len(), 100);
        assert_eq!(state.spawned_initial, INITIAL_WAVE_ENEMIES);
    }

    #[test]
    fn test_fire_volley_from_everyone() {
        let mut state = GameState::new(1);
        let anchor = state.player.pos;
        for (offset, kind) in COMPANION_OFFSETS.iter().zip(HelperChoice::Pets.companions()) {
            let id = state.next_entity_id();
            state.companions.push(Companion::new(id, kind, *offset, anchor));
        }
        state.fire_volley(Vec2::new(600.0, 0.0));
        assert_eq!(state.projectiles.len(), 3);
        let origins: Vec<Vec2> = state.projectiles.iter().map(|p| p.pos).collect();
        assert_eq!(origins[0], anchor);
        assert_eq!(origins[1], anchor + COMPANION_OFFSETS[0]);
        assert_eq!(origins[2], anchor + COMPANION_OFFSETS[1]);
        for p in &state.projectiles {
            assert!((p.velocity().length() - PROJECTILE_SPEED).abs() < 1e-4);
        }
    }

    #[test]
    fn test_same_seed_same_words() {
        let mut a = GameState::new(99);
        let mut b = GameState::new(99);
        for _ in 0..20 {
            assert_eq!(a.make_pursuer(Vec2::ZERO).word, b.make_pursuer(Vec2::ZERO).word);
        }
    }
}
