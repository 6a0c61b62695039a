//! Per-frame simulation tick
//!
//! One call per rendered frame: integrate input and gravity, age particles,
//! evaluate contact, then drive the Splash/Playing/GameOver lifecycle.
//! Craft quantities change per frame; only fuel burn, play time and
//! lifetime particles are scaled by `dt`.

use glam::Vec2;
use rand::Rng;

use super::collision::evaluate;
use super::particles::{Decay, Particle, ParticleSystem};
use super::rng::random_number;
use super::state::{Craft, GamePhase, Session, Verdict};
use super::terrain::LandingPad;
use crate::heading;
use crate::tuning::Tuning;

/// Exhaust colour (white; transparency fades it)
pub const EXHAUST_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

/// Input commands for a single frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Held
    pub rotate_left: bool,
    /// Held
    pub rotate_right: bool,
    /// Held
    pub thrust: bool,
    /// Pressed this frame
    pub toggle_assist: bool,
    /// Pressed this frame (start / retry)
    pub confirm: bool,
    /// Seconds since the previous frame
    pub dt: f32,
}

/// Advance the session by one frame. Returns the verdict reached this frame.
pub fn tick<R: Rng>(session: &mut Session<R>, input: &TickInput) -> Verdict {
    match session.phase {
        GamePhase::Splash | GamePhase::GameOver => {
            if input.confirm {
                log::info!("{:?} -> Playing", session.phase);
                session.start();
            }
            Verdict::NoVerdict
        }
        GamePhase::Playing => {
            integrate(session, input);
            let verdict = evaluate(
                &session.craft,
                &session.terrain,
                &session.pads,
                &session.tuning,
            );
            session.conclude(verdict);
            verdict
        }
    }
}

/// Input, thrust, gravity, assist, particles and screen wrap for one frame
fn integrate<R: Rng>(session: &mut Session<R>, input: &TickInput) {
    let tuning = &session.tuning;
    let craft = &mut session.craft;

    session.elapsed += input.dt;

    if input.toggle_assist {
        session.assist = !session.assist;
        log::debug!("Assist {}", if session.assist { "on" } else { "off" });
    }

    if input.rotate_left {
        craft.rotation -= tuning.rotation_speed;
    }
    if input.rotate_right {
        craft.rotation += tuning.rotation_speed;
    }

    if input.thrust && craft.fuel > 0.0 {
        craft.vel += heading(craft.rotation) * tuning.thrust;
        craft.fuel = (craft.fuel - tuning.fuel_rate * input.dt).max(0.0);
        spawn_exhaust(craft, tuning, &mut session.rng, &mut session.particles);
    }

    craft.vel.y += tuning.gravity;
    craft.pos += craft.vel;

    if session.assist {
        apply_assist(craft, &session.pads, tuning);
    }

    session.particles.advance(input.dt);

    let width = session.viewport.width;
    if craft.pos.x > width {
        craft.pos.x = 0.0;
    } else if craft.pos.x < 0.0 {
        craft.pos.x = width;
    }
}

/// Emit one exhaust particle from a random point on the tail edge, moving
/// against the thrust direction
pub fn spawn_exhaust<R: Rng>(
    craft: &Craft,
    tuning: &Tuning,
    rng: &mut R,
    particles: &mut ParticleSystem,
) {
    let (a, b) = craft.tail_edge(tuning.hull_radius);
    let t = random_number(rng, 0.0, 1.0, 2, false);
    let speed = random_number(
        rng,
        tuning.exhaust_speed_min as f64,
        tuning.exhaust_speed_max as f64,
        2,
        false,
    );
    let size = random_number(
        rng,
        tuning.exhaust_size_min as f64,
        tuning.exhaust_size_max as f64,
        1,
        false,
    );

    particles.spawn(Particle {
        pos: a.lerp(b, t),
        vel: -heading(craft.rotation) * speed,
        alpha: 1.0,
        size,
        color: EXHAUST_COLOR,
        decay: Decay::PerFrame {
            rate: tuning.exhaust_fade,
        },
    });
}

/// Nearest pad by distance from the craft to the pad's landing surface centre
pub fn nearest_pad(pos: Vec2, pads: &[LandingPad]) -> Option<(&LandingPad, f32)> {
    pads.iter()
        .map(|pad| (pad, pos.distance(pad.top_center())))
        .min_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
}

/// Pilot assist: near a pad, decay rotation and velocity and ease toward
/// the pad centre. Returns whether it engaged.
pub fn apply_assist(craft: &mut Craft, pads: &[LandingPad], tuning: &Tuning) -> bool {
    let Some((pad, distance)) = nearest_pad(craft.pos, pads) else {
        return false;
    };
    if distance >= tuning.assist_distance {
        return false;
    }

    craft.rotation *= tuning.assist_rotation_decay;
    craft.vel.x *= tuning.assist_velocity_decay;
    // Only damp a fast descent
    if craft.vel.y > tuning.assist_descent_threshold {
        craft.vel.y *= tuning.assist_velocity_decay;
    }
    craft.pos.x += (pad.center_x() - craft.pos.x) * tuning.assist_centering;
    true
}
