//! Rendering module
//!
//! The simulation never draws. [`render`] reads a session and issues draw
//! requests against a [`Canvas`], the host's drawing service. [`DrawList`]
//! is a ready-made canvas that tessellates into vertices for a GPU upload.

pub mod draw_list;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use draw_list::{DrawList, TextRun};
pub use scene::render;
pub use vertex::{Color, Vertex, colors};

use glam::Vec2;

/// Drawing service provided by the host window
pub trait Canvas {
    /// Current drawable size in pixels
    fn screen_size(&self) -> Vec2;
    fn draw_line(&mut self, from: Vec2, to: Vec2, color: Color);
    /// Filled rectangle from its top-left corner
    fn draw_rect(&mut self, origin: Vec2, size: Vec2, color: Color);
    /// Filled circle as `segments` triangles; the caller picks the detail
    fn draw_circle(&mut self, center: Vec2, radius: f32, segments: u32, color: Color);
    fn draw_triangle(&mut self, a: Vec2, b: Vec2, c: Vec2, color: Color);
    /// Text with its top-left corner at `pos`
    fn draw_text(&mut self, text: &str, pos: Vec2, size: f32, color: Color);
    fn measure_text(&self, text: &str, size: f32) -> f32;
}
