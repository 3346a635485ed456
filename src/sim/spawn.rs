//! Wave spawning on the screen border

use glam::Vec2;
use rand::Rng;

use super::state::GameState;

/// Random point on the screen border
///
/// A coin flip picks whether the point lies on a vertical edge (x pinned
/// to 0 or width, y uniform) or a horizontal edge (y pinned, x uniform).
/// Coordinates are whole pixels, bounds inclusive.
pub fn border_point<R: Rng>(rng: &mut R, screen_size: Vec2) -> Vec2 {
    let width = screen_size.x.max(0.0) as u32;
    let height = screen_size.y.max(0.0) as u32;
    let (x, y) = if rng.random_bool(0.5) {
        let x = pick_edge(rng, width);
        (x, rng.random_range(0..=height))
    } else {
        let x = rng.random_range(0..=width);
        (x, pick_edge(rng, height))
    };
    Vec2::new(x as f32, y as f32)
}

/// Either end of `[0, extent]`, evenly
fn pick_edge<R: Rng>(rng: &mut R, extent: u32) -> u32 {
    if rng.random_bool(0.5) { 0 } else { extent }
}

/// Handle one spawn-timer firing during the initial wave
///
/// Places one enemy while the quota lasts (discarding overlapping
/// placements); once the quota is filled the timer is stopped.
pub fn on_spawn_timer(state: &mut GameState, quota: u32) {
    if state.spawned_initial >= quota {
        state.spawn_timer.stop();
        log::info!("initial wave complete ({} enemies), spawn timer stopped", quota);
        return;
    }
    let size = state.screen_size;
    let pos = border_point(state.rng(), size);
    state.try_spawn_initial_enemy(pos);
}

/// Spawn `count` enemies at once, without any overlap check
pub fn spawn_wave(state: &mut GameState, count: u32) {
    let size = state.screen_size;
    for _ in 0..count {
        let pos = border_point(state.rng(), size);
        let enemy = state.make_pursuer(pos);
        state.enemies.push(enemy);
    }
    log::info!("wave of {} enemies spawned", count);
}
