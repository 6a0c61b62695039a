//! Simulation module
//!
//! All gameplay logic lives here. This module must stay free of rendering
//! and platform dependencies:
//! - One tick per rendered frame, strictly ordered
//! - Randomness only through the session's injected RNG
//! - Render code reads state, never mutates it

pub mod collision;
pub mod particles;
pub mod rng;
pub mod state;
pub mod terrain;
pub mod tick;

pub use collision::{evaluate, hull_hits_terrain, pad_under_hull, segment_intersection};
pub use particles::{Decay, Particle, ParticleSystem};
pub use rng::random_number;
pub use state::{Craft, GamePhase, Session, Verdict, Viewport, landing_score};
pub use terrain::{LandingPad, Terrain, generate_terrain};
pub use tick::{TickInput, apply_assist, nearest_pad, spawn_exhaust, tick};
