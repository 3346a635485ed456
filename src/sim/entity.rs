//! Player-side entities: the shooter, its projectiles and its companions
//!
//! Every entity owns its position and only its own update mutates it.
//! Removal is by tombstone: `kill()` clears `alive` and the owning
//! collection sweeps dead entries at the end of the pass.

use glam::Vec2;

use super::rect::Rect;
use super::state::CompanionKind;
use crate::aim;
use crate::consts::*;

/// Common surface shared by everything that lives in the world
pub trait Entity {
    fn id(&self) -> u32;
    /// Centre of the sprite in screen space
    fn position(&self) -> Vec2;
    /// Sprite size used for the bounding rectangle
    fn size(&self) -> Vec2;
    fn is_alive(&self) -> bool;
    fn kill(&mut self);

    fn bounds(&self) -> Rect {
        Rect::from_center(self.position(), self.size())
    }
}

/// Drop tombstoned entities, preserving order
pub fn sweep_dead<T: Entity>(entities: &mut Vec<T>) {
    entities.retain(|e| e.is_alive());
}

/// A straight-flying shot
#[derive(Debug, Clone)]
pub struct Projectile {
    pub id: u32,
    pub pos: Vec2,
    /// Fixed at creation
    vel: Vec2,
    pub alive: bool,
}

impl Projectile {
    pub fn new(id: u32, start: Vec2, direction: Vec2, speed: f32) -> Self {
        Self {
            id,
            pos: start,
            vel: direction * speed,
            alive: true,
        }
    }

    /// Projectile at `origin` heading for `target` at default speed
    ///
    /// A target equal to the origin yields a stationary shot.
    pub fn aimed(id: u32, origin: Vec2, target: Vec2) -> Self {
        Self::new(id, origin, aim(origin, target), PROJECTILE_SPEED)
    }

    pub fn velocity(&self) -> Vec2 {
        self.vel
    }

    /// Advance one frame; dies once its centre leaves `screen`
    pub fn update(&mut self, screen: &Rect) {
        self.pos += self.vel;
        if !screen.contains_point(self.pos) {
            self.alive = false;
        }
    }
}

impl Entity for Projectile {
    fn id(&self) -> u32 {
        self.id
    }
    fn position(&self) -> Vec2 {
        self.pos
    }
    fn size(&self) -> Vec2 {
        PROJECTILE_SIZE
    }
    fn is_alive(&self) -> bool {
        self.alive
    }
    fn kill(&mut self) {
        self.alive = false;
    }
}

/// Movement keys held down this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveKeys {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl MoveKeys {
    /// Raw (unnormalized) input direction, +y down
    pub fn direction(&self) -> Vec2 {
        let axis = |neg: bool, pos: bool| pos as i32 as f32 - neg as i32 as f32;
        Vec2::new(axis(self.left, self.right), axis(self.up, self.down))
    }
}

/// The player-controlled shooter
#[derive(Debug, Clone)]
pub struct Shooter {
    pub id: u32,
    pub pos: Vec2,
    pub speed: f32,
}

impl Shooter {
    pub fn new(id: u32, start: Vec2) -> Self {
        Self {
            id,
            pos: start,
            speed: PLAYER_SPEED,
        }
    }

    /// Move by held keys at constant speed, then clamp to `[0, w] x [0, h]`
    ///
    /// The clamp ignores the sprite's half-extents, so up to half the
    /// sprite may hang off screen. Nothing happens without input.
    pub fn update(&mut self, keys: &MoveKeys, screen_size: Vec2) {
        let movement = keys.direction();
        if movement.length_squared() > 0.0 {
            self.pos += movement.normalize() * self.speed;
            self.pos = self.pos.clamp(Vec2::ZERO, screen_size);
        }
    }

    /// Fire a projectile from the current position toward `target`
    pub fn shoot(&self, id: u32, target: Vec2) -> Projectile {
        Projectile::aimed(id, self.pos, target)
    }
}

impl Entity for Shooter {
    fn id(&self) -> u32 {
        self.id
    }
    fn position(&self) -> Vec2 {
        self.pos
    }
    fn size(&self) -> Vec2 {
        PLAYER_SIZE
    }
    fn is_alive(&self) -> bool {
        true
    }
    fn kill(&mut self) {}
}

/// A helper that rides along at a fixed offset from the shooter
#[derive(Debug, Clone)]
pub struct Companion {
    pub id: u32,
    pub kind: CompanionKind,
    pub offset: Vec2,
    /// Display position, recomputed from the shooter every update
    pub pos: Vec2,
    pub alive: bool,
}

impl Companion {
    pub fn new(id: u32, kind: CompanionKind, offset: Vec2, anchor: Vec2) -> Self {
        Self {
            id,
            kind,
            offset,
            pos: anchor + offset,
            alive: true,
        }
    }

    pub fn update(&mut self, anchor: Vec2) {
        self.pos = anchor + self.offset;
    }

    /// Fire from the display position toward `target`
    pub fn shoot(&self, id: u32, target: Vec2) -> Projectile {
        Projectile::aimed(id, self.pos, target)
    }
}

impl Entity for Companion {
    fn id(&self) -> u32 {
        self.id
    }
    fn position(&self) -> Vec2 {
        self.pos
    }
    fn size(&self) -> Vec2 {
        COMPANION_SIZE
    }
    fn is_alive(&self) -> bool {
        self.alive
    }
    fn kill(&mut self) {
        self.alive = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn screen() -> Rect {
        Rect::screen(SCREEN_WIDTH, SCREEN_HEIGHT)
    }

    #[test]
    fn test_projectile_leaves_screen() {
        let mut p = Projectile::new(1, Vec2::new(5.0, 400.0), Vec2::new(-1.0, 0.0), 10.0);
        p.update(&screen());
        assert_eq!(p.pos, Vec2::new(-5.0, 400.0));
        assert!(!p.is_alive());
    }

    #[test]
    fn test_projectile_right_edge_is_outside() {
        let mut p = Projectile::new(1, Vec2::new(1190.0, 400.0), Vec2::X, 10.0);
        p.update(&screen());
        assert!(!p.is_alive());
    }

    #[test]
    fn test_degenerate_shot_is_stationary() {
        let shooter = Shooter::new(1, Vec2::new(600.0, 400.0));
        let mut shot = shooter.shoot(2, shooter.pos);
        assert_eq!(shot.velocity(), Vec2::ZERO);
        shot.update(&screen());
        assert_eq!(shot.pos, shooter.pos);
        assert!(shot.is_alive());
    }

    #[test]
    fn test_shot_direction_is_normalized() {
        let shooter = Shooter::new(1, Vec2::new(600.0, 400.0));
        let shot = shooter.shoot(2, Vec2::new(600.0, 0.0));
        assert!((shot.velocity() - Vec2::new(0.0, -PROJECTILE_SPEED)).length() < 1e-5);
    }

    #[test]
    fn test_diagonal_movement_is_normalized() {
        let mut shooter = Shooter::new(1, Vec2::new(600.0, 400.0));
        let keys = MoveKeys {
            down: true,
            right: true,
            ..Default::default()
        };
        shooter.update(&keys, Vec2::new(SCREEN_WIDTH, SCREEN_HEIGHT));
        let moved = shooter.pos - Vec2::new(600.0, 400.0);
        assert!((moved.length() - PLAYER_SPEED).abs() < 1e-5);
        assert!(moved.x > 0.0 && moved.y > 0.0);
    }

    #[test]
    fn test_opposing_keys_cancel() {
        let mut shooter = Shooter::new(1, Vec2::new(600.0, 400.0));
        let keys = MoveKeys {
            left: true,
            right: true,
            ..Default::default()
        };
        shooter.update(&keys, Vec2::new(SCREEN_WIDTH, SCREEN_HEIGHT));
        assert_eq!(shooter.pos, Vec2::new(600.0, 400.0));
    }

    #[test]
    fn test_clamp_uses_full_screen_size() {
        let mut shooter = Shooter::new(1, Vec2::new(SCREEN_WIDTH - 1.0, 1.0));
        let keys = MoveKeys {
            up: true,
            right: true,
            ..Default::default()
        };
        for _ in 0..10 {
            shooter.update(&keys, Vec2::new(SCREEN_WIDTH, SCREEN_HEIGHT));
        }
        assert_eq!(shooter.pos, Vec2::new(SCREEN_WIDTH, 0.0));
    }

    #[test]
    fn test_companion_follows_anchor() {
        let mut c = Companion::new(3, CompanionKind::Dog, Vec2::new(-60.0, 60.0), Vec2::ZERO);
        assert_eq!(c.pos, Vec2::new(-60.0, 60.0));
        c.update(Vec2::new(100.0, 100.0));
        assert_eq!(c.pos, Vec2::new(40.0, 160.0));
        let shot = c.shoot(4, Vec2::new(40.0, 0.0));
        assert_eq!(shot.pos, c.pos);
        assert!((shot.velocity().y + PROJECTILE_SPEED).abs() < 1e-5);
    }

    #[test]
    fn test_sweep_dead_keeps_order() {
        let mut shots: Vec<Projectile> = (1..=4)
            .map(|id| Projectile::new(id, Vec2::ZERO, Vec2::ZERO, 0.0))
            .collect();
        shots[1].kill();
        sweep_dead(&mut shots);
        let ids: Vec<u32> = shots.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 3, 4]);
    }

    proptest! {
        #[test]
        fn prop_projectile_linear_until_exit(
            x in 0.0f32..1200.0,
            y in 0.0f32..800.0,
            angle in 0.0f32..std::f32::consts::TAU,
            steps in 1usize..200,
        ) {
            let start = Vec2::new(x, y);
            let dir = Vec2::new(angle.cos(), angle.sin());
            let mut p = Projectile::new(1, start, dir, PROJECTILE_SPEED);
            let screen = screen();
            for n in 1..=steps {
                p.update(&screen);
                let expected = start + p.velocity() * n as f32;
                prop_assert!((p.pos - expected).length() < 0.05);
                prop_assert_eq!(p.is_alive(), screen.contains_point(p.pos));
                if !p.is_alive() {
                    break;
                }
            }
        }

        #[test]
        fn prop_shooter_stays_clamped(
            x in 0.0f32..=1200.0,
            y in 0.0f32..=800.0,
            moves in proptest::collection::vec((any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>()), 1..300),
        ) {
            let size = Vec2::new(SCREEN_WIDTH, SCREEN_HEIGHT);
            let mut shooter = Shooter::new(1, Vec2::new(x, y));
            for (up, down, left, right) in moves {
                shooter.update(&MoveKeys { up, down, left, right }, size);
                prop_assert!(shooter.pos.x >= 0.0 && shooter.pos.x <= size.x);
                prop_assert!(shooter.pos.y >= 0.0 && shooter.pos.y <= size.y);
            }
        }

        #[test]
        fn prop_no_input_no_motion(x in -50.0f32..1250.0, y in -50.0f32..850.0) {
            let mut shooter = Shooter::new(1, Vec2::new(x, y));
            shooter.update(&MoveKeys::default(), Vec2::new(SCREEN_WIDTH, SCREEN_HEIGHT));
            prop_assert_eq!(shooter.pos, Vec2::new(x, y));
        }
    }
}
