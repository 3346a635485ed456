//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }
}

/// Opaque color from 8-bit channels
pub const fn rgb(r: u8, g: u8, b: u8) -> [f32; 4] {
    [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0]
}

/// Colors for game elements
pub mod colors {
    use super::rgb;

    pub const PROJECTILE: [f32; 4] = rgb(0, 0, 0);
    pub const HEALTH_FRAME: [f32; 4] = rgb(50, 50, 50);
    pub const HEALTH_FILL: [f32; 4] = rgb(30, 200, 30);
    pub const MESSAGE: [f32; 4] = rgb(30, 30, 30);
    pub const VICTORY_TITLE: [f32; 4] = rgb(0, 200, 0);
}
