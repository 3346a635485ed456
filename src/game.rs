//! Frame loop
//!
//! One pass per frame: platform time and input, simulation tick (events,
//! phase transitions, updates, collisions), then render and present.

use crate::platform::Platform;
use crate::renderer::build_frame;
use crate::settings::Settings;
use crate::sim::{GamePhase, GameState, LoopControl, tick};

/// Frames averaged for the FPS counter
const FPS_WINDOW: usize = 60;

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub frames: u64,
    pub final_phase: GamePhase,
    pub elapsed_ms: u64,
    /// True when the loop hit `max_frames` instead of a quit event
    pub truncated: bool,
}

/// Game instance holding all state
pub struct Game<P: Platform> {
    pub state: GameState,
    pub settings: Settings,
    platform: P,
    // FPS tracking on the simulation clock
    frame_times: [u64; FPS_WINDOW],
    frame_index: usize,
    fps: u32,
    last_phase: GamePhase,
}

impl<P: Platform> Game<P> {
    pub fn new(settings: Settings, seed: u64, platform: P) -> Self {
        let state = GameState::with_screen(
            seed,
            settings.window_width as f32,
            settings.window_height as f32,
        );
        let last_phase = state.phase;
        Self {
            state,
            settings,
            platform,
            frame_times: [0; FPS_WINDOW],
            frame_index: 0,
            fps: 0,
            last_phase,
        }
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }

    /// Run one frame
    pub fn frame(&mut self) -> LoopControl {
        let elapsed = self.platform.elapsed_ms();
        let input = self.platform.poll_input(&self.state);
        let control = tick(&mut self.state, &input, elapsed);

        self.track_fps();

        if self.state.phase != self.last_phase {
            log::info!(
                "entered {:?} after {} frames ({} entities, {} enemies, health {})",
                self.state.phase,
                self.state.frame,
                self.state.entity_count(),
                self.state.enemies.len(),
                self.state.health
            );
            self.last_phase = self.state.phase;
        }

        let frame = build_frame(&self.state, &self.settings, Some(self.fps));
        self.platform.present(&frame);
        control
    }

    /// Run until quit or the frame cap
    pub fn run(&mut self) -> RunSummary {
        let mut truncated = false;
        loop {
            if self.state.frame >= self.settings.max_frames {
                log::warn!("stopping after {} frames without a quit", self.state.frame);
                truncated = true;
                break;
            }
            if self.frame() == LoopControl::Exit {
                break;
            }
        }
        RunSummary {
            frames: self.state.frame,
            final_phase: self.state.phase,
            elapsed_ms: self.state.time_ms,
            truncated,
        }
    }

    fn track_fps(&mut self) {
        let now = self.state.time_ms;
        self.frame_times[self.frame_index] = now;
        self.frame_index = (self.frame_index + 1) % FPS_WINDOW;

        // Oldest sample is the one we'll overwrite next
        let oldest = self.frame_times[self.frame_index];
        if oldest > 0 && now > oldest {
            self.fps = ((FPS_WINDOW as u64 - 1) * 1000 / (now - oldest)) as u32;
        }
    }
}
