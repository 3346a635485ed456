//! Windowless platform driven by the autopilot
//!
//! Time is virtual: every frame advances exactly one nominal frame
//! duration, so a full demo run finishes as fast as the CPU allows.

use super::Platform;
use crate::renderer::Frame;
use crate::sim::{Autopilot, FrameInput, GameState, HelperChoice};

/// Frames between presentation log lines
const LOG_EVERY_FRAMES: u64 = 600;

pub struct HeadlessPlatform {
    pilot: Autopilot,
    frame_ms: u32,
    presented: u64,
    /// Size of the most recent frame (sprites, vertices, texts)
    pub last_frame: (usize, usize, usize),
}

impl HeadlessPlatform {
    pub fn new(helper: HelperChoice, frame_ms: u32) -> Self {
        Self {
            pilot: Autopilot::new(helper),
            frame_ms,
            presented: 0,
            last_frame: (0, 0, 0),
        }
    }

    pub fn presented(&self) -> u64 {
        self.presented
    }
}

impl Platform for HeadlessPlatform {
    fn elapsed_ms(&mut self) -> u32 {
        self.frame_ms
    }

    fn poll_input(&mut self, state: &GameState) -> FrameInput {
        self.pilot.next_input(state)
    }

    fn present(&mut self, frame: &Frame) {
        self.presented += 1;
        self.last_frame = (frame.sprites.len(), frame.vertices.len(), frame.texts.len());
        if self.presented % LOG_EVERY_FRAMES == 0 {
            log::debug!(
                "frame {}: {} sprites, {} vertices, {} texts",
                self.presented,
                frame.sprites.len(),
                frame.vertices.len(),
                frame.texts.len()
            );
        }
    }
}
