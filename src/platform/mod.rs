//! Platform abstraction layer
//!
//! A platform supplies the three things the frame loop needs from the
//! outside world: elapsed time, input, and somewhere to present a frame.
//! Window, asset and font handling stay on the far side of this trait.

pub mod headless;

pub use headless::HeadlessPlatform;

use crate::renderer::Frame;
use crate::sim::{FrameInput, GameState};

pub trait Platform {
    /// Milliseconds since the previous frame
    fn elapsed_ms(&mut self) -> u32;
    /// Held keys, pointer and queued events for this frame
    fn poll_input(&mut self, state: &GameState) -> FrameInput;
    /// Display the finished frame
    fn present(&mut self, frame: &Frame);
}
