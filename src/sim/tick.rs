//! Per-frame simulation step
//!
//! Fixed order every frame: input events, phase transitions, entity
//! updates, collisions. Motion is per frame; elapsed time only drives
//! the spawn timer and the defeat cutscene.

use glam::Vec2;

use super::collision;
use super::enemy::update_pursuers;
use super::entity::{Companion, MoveKeys, sweep_dead};
use super::spawn::{on_spawn_timer, spawn_wave};
use super::state::{CUTSCENE_MESSAGES, Cutscene, GamePhase, GameState, HelperChoice};
use crate::consts::*;

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    W,
    A,
    S,
    D,
    Num1,
    Num2,
    Num3,
    Other,
}

impl Key {
    /// Helper choice bound to this key during helper selection
    pub fn helper_choice(&self) -> Option<HelperChoice> {
        match self {
            Key::Num1 => Some(HelperChoice::Family),
            Key::Num2 => Some(HelperChoice::Friends),
            Key::Num3 => Some(HelperChoice::Pets),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
}

/// Discrete events queued since the previous frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Quit,
    KeyDown(Key),
    MouseDown { button: MouseButton, pos: Vec2 },
}

/// Input for a single frame
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    /// Movement keys currently held
    pub keys: MoveKeys,
    /// Pointer position in screen space
    pub pointer: Vec2,
    pub events: Vec<InputEvent>,
}

impl FrameInput {
    pub fn with_events(events: Vec<InputEvent>) -> Self {
        Self {
            events,
            ..Default::default()
        }
    }

    /// Left click at `pos`
    pub fn click(pos: Vec2) -> Self {
        Self {
            pointer: pos,
            events: vec![InputEvent::MouseDown {
                button: MouseButton::Left,
                pos,
            }],
            ..Default::default()
        }
    }

    pub fn key(key: Key) -> Self {
        Self::with_events(vec![InputEvent::KeyDown(key)])
    }
}

/// Whether the frame loop should keep going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

/// Advance the game by one frame, `elapsed_ms` after the previous one
pub fn tick(state: &mut GameState, input: &FrameInput, elapsed_ms: u32) -> LoopControl {
    state.time_ms += u64::from(elapsed_ms);
    state.frame += 1;

    let mut control = LoopControl::Continue;

    // Timer firings are dispatched before input, like queued events
    let firings = state.spawn_timer.poll(state.time_ms);
    if state.phase == GamePhase::InitialWave {
        for _ in 0..firings {
            on_spawn_timer(state, INITIAL_WAVE_ENEMIES);
        }
    }

    for event in &input.events {
        match *event {
            InputEvent::Quit => control = LoopControl::Exit,
            InputEvent::MouseDown {
                button: MouseButton::Left,
                pos,
            } if state.phase.is_gameplay() => {
                state.fire_volley(pos);
            }
            InputEvent::KeyDown(key) if state.phase == GamePhase::HelperSelect => {
                if let Some(choice) = key.helper_choice() {
                    choose_helper(state, choice);
                }
            }
            _ => {}
        }
    }

    advance_phase(state);

    if state.phase.is_gameplay() {
        update_world(state, &input.keys);
    }

    if state.phase == GamePhase::SecondWave && state.enemies.is_empty() {
        enter_phase(state, GamePhase::Victory);
    }

    control
}

/// Timed and health-driven transitions checked once per frame
fn advance_phase(state: &mut GameState) {
    if state.phase == GamePhase::InitialWave && state.health <= 0 {
        state.cutscene = Cutscene {
            index: 0,
            started_ms: state.time_ms,
        };
        state.spawn_timer.stop();
        state.enemies.clear();
        enter_phase(state, GamePhase::Defeated);
    }

    if state.phase == GamePhase::Defeated {
        let elapsed = state.time_ms - state.cutscene.started_ms;
        let shown_until = CUTSCENE_MESSAGE_MS * (state.cutscene.index as u64 + 1);
        if elapsed > shown_until {
            state.cutscene.index += 1;
            if state.cutscene.index >= CUTSCENE_MESSAGES.len() {
                enter_phase(state, GamePhase::HelperSelect);
            }
        }
    }
}

/// Apply a helper choice: heal, add companions, launch the second wave
pub fn choose_helper(state: &mut GameState, choice: HelperChoice) {
    log::info!("player reached out to {}", choice.as_str());
    state.health = state.max_health;
    state.flash = false;
    state.helper = Some(choice);

    let anchor = state.player.pos;
    for (offset, kind) in COMPANION_OFFSETS.iter().zip(choice.companions()) {
        let id = state.next_entity_id();
        state.companions.push(Companion::new(id, kind, *offset, anchor));
    }

    spawn_wave(state, SECOND_WAVE_ENEMIES);
    enter_phase(state, GamePhase::SecondWave);
}

/// Move everything, then resolve collisions
fn update_world(state: &mut GameState, keys: &MoveKeys) {
    state.flash = false;
    let previous_pos = state.player.pos;

    state.player.update(keys, state.screen_size);
    let anchor = state.player.pos;

    update_pursuers(&mut state.enemies, anchor);
    sweep_dead(&mut state.enemies);

    let screen = state.screen_rect();
    for shot in &mut state.projectiles {
        shot.update(&screen);
    }
    sweep_dead(&mut state.projectiles);

    for companion in &mut state.companions {
        companion.update(anchor);
    }

    let report = collision::resolve(state, previous_pos);
    if report.hits > 0 {
        log::trace!("frame {}: {} hits", state.frame, report.hits);
    }
    state.totals += report;
}

fn enter_phase(state: &mut GameState, phase: GamePhase) {
    log::info!("phase {:?} -> {:?} at {} ms", state.phase, phase, state.time_ms);
    state.phase = phase;
}
