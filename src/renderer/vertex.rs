//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// RGBA, each channel 0-1
pub type Color = [f32; 4];

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: Color,
}

impl Vertex {
    /// Bytes per vertex in an uploaded buffer
    pub const STRIDE: usize = std::mem::size_of::<Vertex>();

    pub const fn new(x: f32, y: f32, color: Color) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }
}

/// Colors for game elements
pub mod colors {
    use super::Color;

    pub const WHITE: Color = [1.0, 1.0, 1.0, 1.0];
    pub const GREEN: Color = [0.0, 0.89, 0.19, 1.0];
    pub const YELLOW: Color = [0.99, 0.98, 0.0, 1.0];
    pub const RED: Color = [0.9, 0.16, 0.22, 1.0];

    pub const TERRAIN: Color = WHITE;
    pub const PAD: Color = GREEN;
    pub const CRAFT: Color = WHITE;
    pub const TITLE: Color = YELLOW;
}
