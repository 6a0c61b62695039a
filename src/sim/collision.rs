//! Collision and landing evaluation
//!
//! The craft is approximated by its three hull vertices. Terrain contact is
//! an edge-vs-segment intersection test; pad contact is a vertex-in-rectangle
//! test. The verdict is a pure function of craft, ground and pads.

use glam::Vec2;

use super::state::{Craft, Verdict};
use super::terrain::{LandingPad, Terrain};
use crate::tuning::Tuning;

/// Intersection point of two segments, if they cross or touch.
///
/// Parallel (including collinear) segments never intersect.
pub fn segment_intersection(a1: Vec2, a2: Vec2, b1: Vec2, b2: Vec2) -> Option<Vec2> {
    let r = a2 - a1;
    let s = b2 - b1;
    let denom = r.perp_dot(s);
    if denom.abs() < f32::EPSILON {
        return None;
    }

    let qp = b1 - a1;
    let t = qp.perp_dot(s) / denom;
    let u = qp.perp_dot(r) / denom;
    if (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u) {
        Some(a1 + r * t)
    } else {
        None
    }
}

/// True if any edge of the triangle crosses any ground segment
pub fn hull_hits_terrain(hull: &[Vec2; 3], terrain: &Terrain) -> bool {
    let edges = [(hull[0], hull[1]), (hull[1], hull[2]), (hull[2], hull[0])];
    terrain.segments().any(|(g1, g2)| {
        edges
            .iter()
            .any(|&(e1, e2)| segment_intersection(e1, e2, g1, g2).is_some())
    })
}

/// First pad containing any hull vertex
pub fn pad_under_hull<'a>(hull: &[Vec2; 3], pads: &'a [LandingPad]) -> Option<&'a LandingPad> {
    pads.iter().find(|pad| hull.iter().any(|&v| pad.contains(v)))
}

/// Classify the craft's current pose.
///
/// Precedence: a gentle pad touch wins over any simultaneous terrain hit,
/// then a rough pad touch, then terrain contact.
pub fn evaluate(craft: &Craft, terrain: &Terrain, pads: &[LandingPad], tuning: &Tuning) -> Verdict {
    let hull = craft.hull(tuning.hull_radius);

    if pad_under_hull(&hull, pads).is_some() {
        return if craft.within_landing_limits(tuning) {
            Verdict::PadSuccess
        } else {
            Verdict::PadFailure
        };
    }

    if hull_hits_terrain(&hull, terrain) {
        Verdict::TerrainCollision
    } else {
        Verdict::NoVerdict
    }
}
