//! Short-lived visual particles (engine exhaust and effects)
//!
//! Two fade models share one collection: frame-tied particles move by their
//! velocity and lose a fixed amount of transparency per advance, lifetime
//! particles integrate by `dt` and fade by the fraction of life consumed.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::MAX_PARTICLES;

/// How a particle fades out
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Decay {
    /// Fixed transparency loss per advance; position moves by `vel` per advance
    PerFrame { rate: f32 },
    /// Seconds left to live; position moves by `vel * dt`
    Lifetime { remaining: f32 },
}

/// A particle for visual effects
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// 1 = opaque, 0 = invisible
    pub alpha: f32,
    /// Circle radius
    pub size: f32,
    /// Base RGBA
    pub color: [f32; 4],
    pub decay: Decay,
}

impl Particle {
    /// Dead particles are removed by the next prune
    pub fn is_dead(&self) -> bool {
        self.alpha <= 0.0 || matches!(self.decay, Decay::Lifetime { remaining } if remaining <= 0.0)
    }

    /// Base colour with transparency applied to alpha
    pub fn display_color(&self) -> [f32; 4] {
        let [r, g, b, a] = self.color;
        [r, g, b, a * self.alpha]
    }

    fn advance(&mut self, dt: f32) {
        match &mut self.decay {
            Decay::PerFrame { rate } => {
                self.pos += self.vel;
                self.alpha -= *rate;
            }
            Decay::Lifetime { remaining } => {
                self.pos += self.vel * dt;
                *remaining -= dt;
                if *remaining > 0.0 {
                    self.alpha -= dt / *remaining;
                } else {
                    self.alpha = 0.0;
                }
            }
        }
        self.alpha = self.alpha.max(0.0);
    }
}

/// Owns every live particle, in spawn order
#[derive(Debug, Clone)]
pub struct ParticleSystem {
    particles: Vec<Particle>,
    max_particles: usize,
}

impl Default for ParticleSystem {
    fn default() -> Self {
        Self::new(MAX_PARTICLES)
    }
}

impl ParticleSystem {
    pub fn new(max_particles: usize) -> Self {
        Self {
            particles: Vec::new(),
            max_particles: max_particles.max(1),
        }
    }

    /// Add a particle, evicting the oldest when full
    pub fn spawn(&mut self, particle: Particle) {
        if self.particles.len() >= self.max_particles {
            self.particles.remove(0);
        }
        self.particles.push(particle);
    }

    /// Age every particle by one frame of `dt` seconds, then prune
    pub fn advance(&mut self, dt: f32) {
        for particle in self.particles.iter_mut() {
            particle.advance(dt);
        }
        self.prune();
    }

    /// Drop faded or expired particles
    pub fn prune(&mut self) {
        self.particles.retain(|p| !p.is_dead());
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }
}
