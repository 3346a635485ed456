//! Demo-mode player
//!
//! Produces `FrameInput` from the current state so the game can play
//! itself: it holds still and shoots through the first wave (which is
//! meant to be lost), picks a helper, then shoots and sidesteps through
//! the second wave.

use glam::Vec2;

use super::entity::MoveKeys;
use super::state::{GameState, HelperChoice};
use super::tick::{FrameInput, InputEvent, Key, MouseButton};
use super::GamePhase;

/// Frames between shots in the first wave
pub const INITIAL_FIRE_INTERVAL: u64 = 8;
/// Frames between shots in the second wave
pub const SECOND_FIRE_INTERVAL: u64 = 4;
/// Enemies closer than this make the autopilot step away
pub const DODGE_RADIUS: f32 = 120.0;
/// Frames to linger on the victory screen before quitting
pub const VICTORY_LINGER_FRAMES: u64 = 180;

#[derive(Debug, Clone)]
pub struct Autopilot {
    pub helper: HelperChoice,
    frames: u64,
    victory_frames: u64,
}

impl Autopilot {
    pub fn new(helper: HelperChoice) -> Self {
        Self {
            helper,
            frames: 0,
            victory_frames: 0,
        }
    }

    /// Decide this frame's input
    pub fn next_input(&mut self, state: &GameState) -> FrameInput {
        self.frames += 1;
        match state.phase {
            GamePhase::InitialWave => self.shoot_every(state, INITIAL_FIRE_INTERVAL),
            GamePhase::Defeated => FrameInput::default(),
            GamePhase::HelperSelect => FrameInput::key(helper_key(self.helper)),
            GamePhase::SecondWave => {
                let mut input = self.shoot_every(state, SECOND_FIRE_INTERVAL);
                input.keys = dodge(state);
                input
            }
            GamePhase::Victory => {
                self.victory_frames += 1;
                if self.victory_frames >= VICTORY_LINGER_FRAMES {
                    FrameInput::with_events(vec![InputEvent::Quit])
                } else {
                    FrameInput::default()
                }
            }
        }
    }

    fn shoot_every(&self, state: &GameState, interval: u64) -> FrameInput {
        let Some(target) = nearest_enemy(state) else {
            return FrameInput::default();
        };
        if self.frames % interval != 0 {
            return FrameInput {
                pointer: target,
                ..Default::default()
            };
        }
        FrameInput {
            pointer: target,
            events: vec![InputEvent::MouseDown {
                button: MouseButton::Left,
                pos: target,
            }],
            ..Default::default()
        }
    }
}

fn helper_key(choice: HelperChoice) -> Key {
    match choice {
        HelperChoice::Family => Key::Num1,
        HelperChoice::Friends => Key::Num2,
        HelperChoice::Pets => Key::Num3,
    }
}

/// Position of the live enemy closest to the shooter
pub fn nearest_enemy(state: &GameState) -> Option<Vec2> {
    let origin = state.player.pos;
    state
        .enemies
        .iter()
        .filter(|e| e.alive)
        .map(|e| e.pos)
        .min_by(|a, b| {
            a.distance_squared(origin)
                .partial_cmp(&b.distance_squared(origin))
                .unwrap_or(std::cmp::Ordering::Equal)
        })
}

/// Keys that move the shooter away from the nearest enemy when it is close
fn dodge(state: &GameState) -> MoveKeys {
    let origin = state.player.pos;
    let Some(threat) = nearest_enemy(state) else {
        return MoveKeys::default();
    };
    let away = origin - threat;
    if away.length() >= DODGE_RADIUS {
        return MoveKeys::default();
    }
    // Pushed into a wall: slide toward the centre instead
    let center = state.screen_size / 2.0;
    let away = if away.length_squared() == 0.0 { center - origin } else { away };
    MoveKeys {
        up: away.y < 0.0,
        down: away.y > 0.0,
        left: away.x < 0.0,
        right: away.x > 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::tick::{LoopControl, tick};

    #[test]
    fn test_initial_wave_fires_at_nearest() {
        let mut state = GameState::new(1);
        let near = state.make_pursuer(Vec2::new(600.0, 300.0));
        let far = state.make_pursuer(Vec2::new(0.0, 0.0));
        state.enemies.push(far);
        state.enemies.push(near);

        let mut pilot = Autopilot::new(HelperChoice::Pets);
        let mut shots = Vec::new();
        for _ in 0..INITIAL_FIRE_INTERVAL {
            let input = pilot.next_input(&state);
            assert_eq!(input.keys, MoveKeys::default());
            shots.extend(input.events);
        }
        assert_eq!(
            shots,
            vec![InputEvent::MouseDown {
                button: MouseButton::Left,
                pos: Vec2::new(600.0, 300.0),
            }]
        );
    }

    #[test]
    fn test_no_enemies_no_shots() {
        let state = GameState::new(1);
        let mut pilot = Autopilot::new(HelperChoice::Pets);
        for _ in 0..20 {
            assert!(pilot.next_input(&state).events.is_empty());
        }
    }

    #[test]
    fn test_picks_configured_helper() {
        let mut state = GameState::new(1);
        state.phase = GamePhase::HelperSelect;
        let mut pilot = Autopilot::new(HelperChoice::Family);
        let input = pilot.next_input(&state);
        assert_eq!(input.events, vec![InputEvent::KeyDown(Key::Num1)]);
    }

    #[test]
    fn test_dodges_close_enemy_in_second_wave() {
        let mut state = GameState::new(1);
        state.phase = GamePhase::SecondWave;
        let close = state.make_pursuer(state.player.pos + Vec2::new(50.0, 0.0));
        state.enemies.push(close);
        let mut pilot = Autopilot::new(HelperChoice::Friends);
        let input = pilot.next_input(&state);
        assert!(input.keys.left);
        assert!(!input.keys.right);
    }

    #[test]
    fn test_quits_after_victory() {
        let mut state = GameState::new(1);
        state.phase = GamePhase::Victory;
        let mut pilot = Autopilot::new(HelperChoice::Friends);
        let mut control = LoopControl::Continue;
        let mut frames = 0;
        while control == LoopControl::Continue {
            let input = pilot.next_input(&state);
            control = tick(&mut state, &input, 16);
            frames += 1;
            assert!(frames <= VICTORY_LINGER_FRAMES);
        }
        assert_eq!(frames, VICTORY_LINGER_FRAMES);
    }
}
