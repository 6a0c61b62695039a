//! Session state and core simulation types
//!
//! A [`Session`] owns everything one run of the game mutates: the craft,
//! ground, pads, particles, lifecycle phase and score. Randomness comes
//! from an injected RNG so tests can seed it.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::particles::ParticleSystem;
use super::terrain::{LandingPad, Terrain, generate_terrain};
use crate::offset_along;
use crate::tuning::Tuning;

/// Lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, waiting for start input
    Splash,
    /// Active flight
    Playing,
    /// Run ended, waiting for retry input
    GameOver,
}

/// Outcome of one collision/landing evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Verdict {
    /// Still flying
    #[default]
    NoVerdict,
    /// Hull crossed the ground outside any pad
    TerrainCollision,
    /// Touched a pad slowly and upright
    PadSuccess,
    /// Touched a pad too fast or tilted
    PadFailure,
}

impl Verdict {
    /// True for every verdict that ends the run
    pub fn is_terminal(&self) -> bool {
        *self != Verdict::NoVerdict
    }
}

/// Screen size the session generates terrain for
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(crate::consts::SCREEN_WIDTH, crate::consts::SCREEN_HEIGHT)
    }
}

/// The player's lander
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Craft {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Degrees, 0 = upright, positive = clockwise. Never wrapped.
    pub rotation: f32,
    pub fuel: f32,
}

impl Craft {
    /// Craft at its spawn point: centred horizontally near the top, at rest
    pub fn spawn(viewport: Viewport, tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(viewport.width / 2.0, tuning.spawn_y),
            vel: Vec2::ZERO,
            rotation: 0.0,
            fuel: tuning.initial_fuel,
        }
    }

    /// Triangle silhouette: `[rear_left, rear_right, nose]`
    pub fn hull(&self, radius: f32) -> [Vec2; 3] {
        [
            offset_along(self.pos, self.rotation - 150.0, radius),
            offset_along(self.pos, self.rotation + 150.0, radius),
            offset_along(self.pos, self.rotation, radius * 1.5),
        ]
    }

    /// Endpoints of the edge exhaust is emitted from
    pub fn tail_edge(&self, radius: f32) -> (Vec2, Vec2) {
        (
            offset_along(self.pos, self.rotation + 135.0, radius),
            offset_along(self.pos, self.rotation + 225.0, radius),
        )
    }

    pub fn speed(&self) -> f32 {
        self.vel.length()
    }

    /// Absolute deviation from upright, in degrees
    pub fn tilt(&self) -> f32 {
        self.rotation.abs()
    }

    /// Slow and upright enough to touch down
    pub fn within_landing_limits(&self, tuning: &Tuning) -> bool {
        self.vel.x.abs() < tuning.max_landing_vx
            && self.vel.y.abs() < tuning.max_landing_vy
            && self.tilt() < tuning.max_landing_tilt
    }
}

/// Score for a successful landing: faster and thriftier is better, never negative
pub fn landing_score(elapsed: f32, fuel: f32, tuning: &Tuning) -> u64 {
    let raw = (tuning.score_base - elapsed * tuning.score_per_second
        + fuel * tuning.score_per_fuel)
        .round();
    if raw > 0.0 { raw as u64 } else { 0 }
}

/// One player's game: owned state for every simulation component
#[derive(Debug, Clone)]
pub struct Session<R = Pcg32> {
    pub tuning: Tuning,
    pub viewport: Viewport,
    pub craft: Craft,
    pub terrain: Terrain,
    pub pads: Vec<LandingPad>,
    pub particles: ParticleSystem,
    pub phase: GamePhase,
    /// Seconds of play since the last reset
    pub elapsed: f32,
    /// Meaningful only in GameOver
    pub score: u64,
    /// Pilot assist toggle (survives resets)
    pub assist: bool,
    /// Last verdict (meaningful only in GameOver)
    pub verdict: Verdict,
    pub(crate) rng: R,
}

impl Session<Pcg32> {
    /// Session seeded from the thread RNG
    pub fn new(tuning: Tuning, viewport: Viewport) -> Self {
        Self::with_rng(tuning, viewport, Pcg32::from_rng(&mut rand::rng()))
    }

    /// Reproducible session
    pub fn from_seed(tuning: Tuning, viewport: Viewport, seed: u64) -> Self {
        Self::with_rng(tuning, viewport, Pcg32::seed_from_u64(seed))
    }
}

impl<R: Rng> Session<R> {
    /// Session on the splash screen with a freshly generated world
    pub fn with_rng(tuning: Tuning, viewport: Viewport, rng: R) -> Self {
        let particles = ParticleSystem::new(tuning.max_particles);
        let craft = Craft::spawn(viewport, &tuning);
        let mut session = Self {
            tuning,
            viewport,
            craft,
            terrain: Terrain::default(),
            pads: Vec::new(),
            particles,
            phase: GamePhase::Splash,
            elapsed: 0.0,
            score: 0,
            assist: false,
            verdict: Verdict::NoVerdict,
            rng,
        };
        session.reset();
        session
    }

    /// Session initialisation: respawn the craft, regenerate the world and
    /// clear score, clock and verdict. Assist and particles carry over.
    pub fn reset(&mut self) {
        self.craft = Craft::spawn(self.viewport, &self.tuning);
        let (terrain, pads) = generate_terrain(
            &mut self.rng,
            self.viewport.width,
            self.viewport.height,
            &self.tuning,
        );
        self.terrain = terrain;
        self.pads = pads;
        self.score = 0;
        self.elapsed = 0.0;
        self.verdict = Verdict::NoVerdict;
        log::info!(
            "New session: {} terrain points, {} pads",
            self.terrain.len(),
            self.pads.len()
        );
    }

    /// Reset and enter Playing (start or retry)
    pub fn start(&mut self) {
        self.reset();
        self.phase = GamePhase::Playing;
    }

    /// Apply the evaluator's verdict: terminal verdicts end the run and set the score
    pub fn conclude(&mut self, verdict: Verdict) {
        if !verdict.is_terminal() {
            return;
        }
        self.score = match verdict {
            Verdict::PadSuccess => landing_score(self.elapsed, self.craft.fuel, &self.tuning),
            _ => 0,
        };
        self.verdict = verdict;
        self.phase = GamePhase::GameOver;
        log::info!(
            "Run over: {:?} after {:.1}s, score {}",
            verdict,
            self.elapsed,
            self.score
        );
    }

    /// Change the screen size. Terrain follows on the next reset.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session::from_seed(Tuning::default(), Viewport::default(), 12345)
    }

    #[test]
    fn test_new_session_on_splash() {
        let s = session();
        assert_eq!(s.phase, GamePhase::Splash);
        assert_eq!(s.craft.pos, Vec2::new(600.0, 50.0));
        assert_eq!(s.craft.fuel, 100.0);
        assert_eq!(s.pads.len(), 7);
        assert!(!s.terrain.is_empty());
    }

    #[test]
    fn test_hull_upright() {
        let craft = Craft {
            pos: Vec2::new(100.0, 100.0),
            vel: Vec2::ZERO,
            rotation: 0.0,
            fuel: 0.0,
        };
        let [left, right, nose] = craft.hull(20.0);
        // Nose straight up at 1.5 radius
        assert!((nose - Vec2::new(100.0, 70.0)).length() < 1e-4);
        // Rear corners below and symmetric
        assert!(left.y > 100.0 && right.y > 100.0);
        assert!((left.y - right.y).abs() < 1e-4);
        assert!((left.x + right.x - 200.0).abs() < 1e-4);
        assert!((left.y - (100.0 + 20.0 * 150f32.to_radians().cos().abs())).abs() < 1e-3);
    }

    #[test]
    fn test_tail_edge_behind_craft() {
        let craft = Craft::spawn(Viewport::default(), &Tuning::default());
        let (a, b) = craft.tail_edge(20.0);
        assert!(a.y > craft.pos.y && b.y > craft.pos.y);
    }

    #[test]
    fn test_landing_score_examples() {
        let tuning = Tuning::default();
        assert_eq!(landing_score(50.0, 20.0, &tuning), 700);
        assert_eq!(landing_score(0.0, 100.0, &tuning), 2000);
        assert_eq!(landing_score(500.0, 0.0, &tuning), 0);
        assert_eq!(landing_score(10.04, 0.0, &tuning), 900);
    }

    #[test]
    fn test_conclude_success_and_failure() {
        let mut s = session();
        s.start();
        s.elapsed = 50.0;
        s.craft.fuel = 20.0;
        s.conclude(Verdict::PadSuccess);
        assert_eq!(s.phase, GamePhase::GameOver);
        assert_eq!(s.score, 700);

        s.start();
        s.conclude(Verdict::PadFailure);
        assert_eq!(s.score, 0);
        assert_eq!(s.verdict, Verdict::PadFailure);
    }

    #[test]
    fn test_conclude_ignores_no_verdict() {
        let mut s = session();
        s.start();
        s.conclude(Verdict::NoVerdict);
        assert_eq!(s.phase, GamePhase::Playing);
    }

    #[test]
    fn test_reset_keeps_assist_and_particles() {
        use crate::sim::particles::{Decay, Particle};

        let mut s = session();
        s.start();
        s.assist = true;
        s.particles.spawn(Particle {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            alpha: 1.0,
            size: 2.0,
            color: [1.0; 4],
            decay: Decay::PerFrame { rate: 0.02 },
        });
        s.elapsed = 12.0;
        s.conclude(Verdict::TerrainCollision);

        s.start();
        assert!(s.assist);
        assert_eq!(s.particles.len(), 1);
        assert_eq!(s.elapsed, 0.0);
        assert_eq!(s.score, 0);
        assert_eq!(s.verdict, Verdict::NoVerdict);
    }

    #[test]
    fn test_unvalidated_setup_does_not_panic() {
        let s = Session::from_seed(Tuning::default(), Viewport::new(1200.0, -600.0), 1);
        assert!(s.terrain.is_empty());
        assert!(s.pads.is_empty());

        let tuning = Tuning {
            pad_count: usize::MAX,
            ground_min: 0.9,
            ground_max: 0.3,
            ..Default::default()
        };
        let s = Session::from_seed(tuning, Viewport::default(), 1);
        assert!(!s.pads.is_empty());
    }

    #[test]
    fn test_viewport_applies_on_reset() {
        let mut s = session();
        s.set_viewport(Viewport::new(800.0, 400.0));
        s.reset();
        assert_eq!(*s.terrain.points.last().unwrap(), Vec2::new(800.0, 400.0));
        assert_eq!(s.craft.pos.x, 400.0);
    }
}
