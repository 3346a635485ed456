//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Per-frame motion, simulation clock only for timers
//! - Seeded RNG only
//! - Stable iteration order (insertion / entity ID)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod enemy;
pub mod entity;
pub mod rect;
pub mod spawn;
pub mod state;
pub mod tick;

pub use autopilot::Autopilot;
pub use collision::{CollisionReport, resolve};
pub use enemy::{Pursuer, WORD_LIST, update_pursuers};
pub use entity::{Companion, Entity, MoveKeys, Projectile, Shooter};
pub use rect::Rect;
pub use spawn::{border_point, spawn_wave};
pub use state::{
    CUTSCENE_MESSAGES, CompanionKind, Cutscene, GamePhase, GameState, HelperChoice, SpawnTimer,
};
pub use tick::{FrameInput, InputEvent, Key, LoopControl, MouseButton, choose_helper, tick};
