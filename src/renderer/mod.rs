//! Rendering module
//!
//! Builds a backend-agnostic draw list each frame: sprite placements for
//! image assets, colored triangles for primitives, and text items.

pub mod frame;
pub mod shapes;
pub mod vertex;

pub use frame::{FontSize, Frame, SpriteDraw, SpriteKind, TextDraw, VICTORY_LINES, build_frame};
pub use vertex::Vertex;
