//! Batches draw requests into a triangle list for a GPU host

use glam::Vec2;

use super::Canvas;
use super::shapes;
use super::vertex::{Color, Vertex};

/// Estimated glyph advance as a fraction of font size
const GLYPH_ADVANCE: f32 = 0.6;
/// Terrain and other outlines
const LINE_WIDTH: f32 = 1.0;

/// Text queued for the host's font renderer
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub text: String,
    /// Top-left corner
    pub pos: Vec2,
    pub size: f32,
    pub color: Color,
}

/// A [`Canvas`] that records one frame as vertices plus text runs
#[derive(Debug, Clone)]
pub struct DrawList {
    screen: Vec2,
    vertices: Vec<Vertex>,
    text: Vec<TextRun>,
}

impl DrawList {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            screen: Vec2::new(width, height),
            vertices: Vec::new(),
            text: Vec::new(),
        }
    }

    /// Start a new frame
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.text.clear();
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn text_runs(&self) -> &[TextRun] {
        &self.text
    }

    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }

    /// Vertex data ready for a buffer upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }
}

impl Canvas for DrawList {
    fn screen_size(&self) -> Vec2 {
        self.screen
    }

    fn draw_line(&mut self, from: Vec2, to: Vec2, color: Color) {
        self.vertices.extend(shapes::line(from, to, LINE_WIDTH, color));
    }

    fn draw_rect(&mut self, origin: Vec2, size: Vec2, color: Color) {
        self.vertices.extend(shapes::rect(origin, size, color));
    }

    fn draw_circle(&mut self, center: Vec2, radius: f32, segments: u32, color: Color) {
        self.vertices.extend(shapes::circle(center, radius, color, segments));
    }

    fn draw_triangle(&mut self, a: Vec2, b: Vec2, c: Vec2, color: Color) {
        self.vertices.extend(shapes::triangle(a, b, c, color));
    }

    fn draw_text(&mut self, text: &str, pos: Vec2, size: f32, color: Color) {
        self.text.push(TextRun {
            text: text.to_string(),
            pos,
            size,
            color,
        });
    }

    fn measure_text(&self, text: &str, size: f32) -> f32 {
        text.chars().count() as f32 * size * GLYPH_ADVANCE
    }
}
