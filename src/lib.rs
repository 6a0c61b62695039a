//! Lunar Lander - a 2D descent-and-land arcade game
//!
//! Core modules:
//! - `sim`: Frame-driven simulation (terrain, physics, collisions, session state)
//! - `renderer`: Read-only render layer and vertex batching
//! - `platform`: Input adapter (held keys to per-frame commands)
//! - `settings`: Presentation preferences
//! - `tuning`: Data-driven game balance

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use settings::{QualityPreset, Settings};
pub use tuning::{Tuning, TuningError};

use glam::Vec2;

/// Game configuration constants (defaults for [`Tuning`])
pub mod consts {
    /// Reference window size
    pub const SCREEN_WIDTH: f32 = 1200.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    /// Craft defaults
    pub const HULL_RADIUS: f32 = 20.0;
    /// Added to vertical velocity every frame
    pub const GRAVITY: f32 = 0.02;
    /// Acceleration per thrusting frame
    pub const THRUST: f32 = 0.05;
    /// Degrees per frame while a rotate key is held
    pub const ROTATION_SPEED: f32 = 2.0;
    /// Fuel units burnt per second of thrust
    pub const FUEL_RATE: f32 = 0.5;
    pub const INITIAL_FUEL: f32 = 100.0;
    /// Spawn height from the top of the screen
    pub const SPAWN_Y: f32 = 50.0;

    /// Terrain defaults
    pub const TERRAIN_POINTS: usize = 129; // 2^n + 1
    /// Upper bound on ground points per screen
    pub const MAX_TERRAIN_POINTS: usize = 65_537;
    pub const GROUND_JITTER: f32 = 20.0;
    pub const GROUND_START: f32 = 0.7;
    pub const GROUND_MIN: f32 = 0.3;
    pub const GROUND_MAX: f32 = 0.9;

    /// Landing pad defaults
    pub const PAD_WIDTH_MIN: f32 = 30.0;
    pub const PAD_WIDTH_MAX: f32 = 100.0;
    pub const PAD_HEIGHT: f32 = 5.0;
    pub const PAD_COUNT: usize = 7;

    /// Landing limits (absolute values)
    pub const MAX_LANDING_VX: f32 = 0.5;
    pub const MAX_LANDING_VY: f32 = 0.5;
    pub const MAX_LANDING_TILT: f32 = 15.0;

    /// Pilot assist
    pub const ASSIST_DISTANCE: f32 = 100.0;
    pub const ASSIST_ROTATION_DECAY: f32 = 0.95;
    pub const ASSIST_VELOCITY_DECAY: f32 = 0.98;
    pub const ASSIST_DESCENT_THRESHOLD: f32 = 0.2;
    pub const ASSIST_CENTERING: f32 = 0.02;

    /// Exhaust particles
    pub const EXHAUST_SPEED_MIN: f32 = 1.0;
    pub const EXHAUST_SPEED_MAX: f32 = 2.0;
    pub const EXHAUST_SIZE_MIN: f32 = 2.0;
    pub const EXHAUST_SIZE_MAX: f32 = 4.0;
    pub const EXHAUST_FADE: f32 = 0.02;
    pub const MAX_PARTICLES: usize = 2000;

    /// Score formula
    pub const SCORE_BASE: f32 = 1000.0;
    pub const SCORE_PER_SECOND: f32 = 10.0;
    pub const SCORE_PER_FUEL: f32 = 10.0;
}

/// Unit direction for a rotation in degrees.
///
/// Rotation 0 points straight up (screen y grows downward), positive
/// rotation turns clockwise.
#[inline]
pub fn heading(rotation_deg: f32) -> Vec2 {
    let (sin, cos) = rotation_deg.to_radians().sin_cos();
    Vec2::new(sin, -cos)
}

/// Point at `radius` from `origin` along [`heading`]
#[inline]
pub fn offset_along(origin: Vec2, rotation_deg: f32, radius: f32) -> Vec2 {
    origin + heading(rotation_deg) * radius
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_zero_is_up() {
        let h = heading(0.0);
        assert!(h.x.abs() < 1e-6);
        assert!((h.y + 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_heading_quarter_turn() {
        let h = heading(90.0);
        assert!((h.x - 1.0).abs() < 1e-6);
        assert!(h.y.abs() < 1e-6);
    }

    #[test]
    fn test_offset_along() {
        let p = offset_along(Vec2::new(10.0, 10.0), 180.0, 5.0);
        assert!((p.x - 10.0).abs() < 1e-5);
        assert!((p.y - 15.0).abs() < 1e-5);
    }
}
