//! Stress Eliminator - a top-down arcade shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, phase machine)
//! - `renderer`: CPU-side draw list for a rendering backend
//! - `platform`: Input/time/presentation abstraction and the headless front-end
//! - `game`: Frame loop tying simulation, rendering and platform together
//! - `settings`: Persisted preferences

pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game::Game;
pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Default window size in pixels
    pub const SCREEN_WIDTH: f32 = 1200.0;
    pub const SCREEN_HEIGHT: f32 = 800.0;
    /// Nominal frame rate (motion is per-frame, not per-second)
    pub const TARGET_FPS: u32 = 60;

    /// Player defaults
    pub const PLAYER_SPEED: f32 = 3.0;
    pub const PLAYER_SIZE: Vec2 = Vec2::new(50.0, 50.0);
    pub const MAX_PLAYER_HEALTH: i32 = 100;
    /// Health lost per enemy contact during the first wave
    pub const CONTACT_DAMAGE: i32 = 10;

    /// Projectile defaults
    pub const PROJECTILE_SPEED: f32 = 10.0;
    pub const PROJECTILE_SIZE: Vec2 = Vec2::new(4.0, 4.0);

    /// Companion defaults
    pub const COMPANION_SIZE: Vec2 = Vec2::new(40.0, 40.0);
    pub const COMPANION_OFFSETS: [Vec2; 2] = [Vec2::new(-60.0, 60.0), Vec2::new(60.0, 60.0)];

    /// Enemy defaults
    pub const ENEMY_SPEED: f32 = 1.0;
    pub const ENEMY_HEALTH: i32 = 10;
    pub const DESIRED_SEPARATION: f32 = 40.0;
    pub const SEPARATION_STRENGTH: f32 = 1.0;

    /// Enemy label metrics (outlined text at font size 46)
    pub const LABEL_GLYPH_WIDTH: f32 = 18.0;
    pub const LABEL_LINE_HEIGHT: f32 = 32.0;
    /// 2px outline on every side
    pub const LABEL_OUTLINE_PAD: f32 = 4.0;

    /// Waves
    pub const INITIAL_WAVE_ENEMIES: u32 = 100;
    pub const SECOND_WAVE_ENEMIES: u32 = 30;
    pub const SPAWN_INTERVAL_MS: u64 = 1000;

    /// Each defeat message stays up this long
    pub const CUTSCENE_MESSAGE_MS: u64 = 3000;
}

/// Width/height of an outlined enemy label for `word`
#[inline]
pub fn label_size(word: &str) -> Vec2 {
    use consts::*;
    Vec2::new(
        word.chars().count() as f32 * LABEL_GLYPH_WIDTH + LABEL_OUTLINE_PAD,
        LABEL_LINE_HEIGHT + LABEL_OUTLINE_PAD,
    )
}

/// Unit vector from `from` toward `to`, or zero when they coincide
#[inline]
pub fn aim(from: Vec2, to: Vec2) -> Vec2 {
    (to - from).normalize_or_zero()
}
