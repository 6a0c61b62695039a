//! Procedural ground profile with flush landing pads
//!
//! The ground is a polyline from the left screen edge to the right one. It
//! random-walks between grid points inside a height band, and at evenly
//! spaced slots a flat run is emitted and recorded as a landing pad.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::rng::random_number;
use crate::consts::MAX_TERRAIN_POINTS;
use crate::tuning::Tuning;

/// Ground polyline (screen coordinates, y grows downward)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Terrain {
    pub points: Vec<Vec2>,
}

impl Terrain {
    /// Consecutive point pairs
    pub fn segments(&self) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
        self.points.windows(2).map(|w| (w[0], w[1]))
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// A flat, fixed-height landing target embedded in the ground
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LandingPad {
    /// Left edge
    pub x: f32,
    /// Top edge (ground height under the pad)
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl LandingPad {
    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    /// Centre of the landing surface
    pub fn top_center(&self) -> Vec2 {
        Vec2::new(self.center_x(), self.y)
    }

    /// Half-open rectangle test (left/top inclusive)
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.x && p.x < self.x + self.width && p.y >= self.y && p.y < self.y + self.height
    }
}

/// Generate a ground profile and its landing pads for a screen.
///
/// Pad slots sit half an interval into each of `pad_count` equal spans so
/// the last pad has room before the right edge. A pad is clamped to end at
/// the right edge at the latest; if that leaves less than the minimum pad
/// width the pad is dropped. Point counts above [`MAX_TERRAIN_POINTS`] are
/// capped, and a screen with no area gets no terrain.
pub fn generate_terrain<R: Rng>(
    rng: &mut R,
    width: f32,
    height: f32,
    tuning: &Tuning,
) -> (Terrain, Vec<LandingPad>) {
    if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
        log::warn!("No terrain for a {width}x{height} screen");
        return (Terrain::default(), Vec::new());
    }

    let steps = tuning.terrain_points.clamp(3, MAX_TERRAIN_POINTS) - 1;
    let step_x = width / steps as f32;
    let (ground_min, ground_max) = ground_band(height, tuning);
    let jitter = tuning.ground_jitter as f64;

    let pad_count = tuning.pad_count;
    let interval = (steps / pad_count.max(1)).max(1);
    let mut next_slot = interval / 2;

    // Every pad covers at least one grid step
    let max_pads = pad_count.min(steps);
    let mut points = Vec::with_capacity(steps + 2 + max_pads);
    let mut pads = Vec::with_capacity(max_pads);

    // Left wall
    points.push(Vec2::new(0.0, height));

    let mut y = height * tuning.ground_start;
    let mut i = 1;
    while i <= steps {
        let x = i as f32 * step_x;
        y = (y + random_number(rng, -jitter, jitter, 0, false)).clamp(ground_min, ground_max);

        if pads.len() < pad_count && i >= next_slot {
            next_slot += interval;

            let sampled = random_number(
                rng,
                tuning.pad_width_min as f64,
                tuning.pad_width_max as f64,
                0,
                true,
            );
            let pad_width = sampled.min(width - x);
            if pad_width < tuning.pad_width_min {
                log::warn!(
                    "No room for pad {} at x={:.1} ({:.1} left)",
                    pads.len() + 1,
                    x,
                    width - x
                );
                // Room only shrinks from here
                next_slot = usize::MAX;
            } else {
                if pad_width < sampled {
                    log::debug!("Pad at x={x:.1} clamped from {sampled} to {pad_width:.1}");
                }
                pads.push(LandingPad {
                    x,
                    y,
                    width: pad_width,
                    height: tuning.pad_height,
                });

                // Flat run under the pad
                points.push(Vec2::new(x, y));
                points.push(Vec2::new(x + pad_width, y));

                // Resume at the first grid point right of the pad
                i += (pad_width / step_x).floor() as usize + 1;
                continue;
            }
        }

        points.push(Vec2::new(x, y));
        i += 1;
    }

    // Right wall
    points.push(Vec2::new(width, height));

    (Terrain { points }, pads)
}

/// Ground band in screen units, ordered. A band that is not a number
/// falls back to the whole screen height.
fn ground_band(height: f32, tuning: &Tuning) -> (f32, f32) {
    let a = height * tuning.ground_min;
    let b = height * tuning.ground_max;
    let (lo, hi) = (a.min(b), a.max(b));
    if lo.is_nan() || hi.is_nan() {
        (0.0, height)
    } else {
        (lo, hi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    const EPS: f32 = 1e-3;

    fn check_well_formed(terrain: &Terrain, pads: &[LandingPad], w: f32, h: f32, tuning: &Tuning) {
        let points = &terrain.points;
        assert!(points.len() >= 3);

        // Walls
        assert_eq!(points[0], Vec2::new(0.0, h));
        assert_eq!(*points.last().unwrap(), Vec2::new(w, h));

        // x never goes backwards and never leaves the screen
        for (a, b) in terrain.segments() {
            assert!(b.x >= a.x - EPS, "x went backwards: {a} -> {b}");
            assert!(b.x <= w + EPS);
        }

        // Ground stays inside the band
        let (lo, hi) = (h * tuning.ground_min, h * tuning.ground_max);
        for p in &points[1..points.len() - 1] {
            assert!(p.y >= lo - EPS && p.y <= hi + EPS, "ground point {p} outside band");
        }

        // Height moves at most one jitter step between neighbours, pads are flat
        let ground = &points[1..points.len() - 1];
        for pair in ground.windows(2) {
            let dy = (pair[1].y - pair[0].y).abs();
            assert!(
                dy <= tuning.ground_jitter + EPS,
                "height jumped by {dy}: {} -> {}",
                pair[0],
                pair[1]
            );
        }

        // Each pad is a flat run of two consecutive points
        for pad in pads {
            assert!(pad.width >= tuning.pad_width_min - EPS);
            assert!(pad.width <= tuning.pad_width_max + EPS);
            assert!((pad.height - tuning.pad_height).abs() < EPS);
            let flush = terrain.segments().any(|(a, b)| {
                (a.x - pad.x).abs() < EPS
                    && (b.x - (pad.x + pad.width)).abs() < EPS
                    && a.y == pad.y
                    && b.y == pad.y
            });
            assert!(flush, "pad {pad:?} not flush with terrain");
        }

        // Pads never overlap
        for pair in pads.windows(2) {
            assert!(pair[0].x + pair[0].width <= pair[1].x + EPS);
        }
    }

    #[test]
    fn test_reference_screen_places_every_pad() {
        let tuning = Tuning::default();
        for seed in 0..50 {
            let mut rng = Pcg32::seed_from_u64(seed);
            let (terrain, pads) = generate_terrain(&mut rng, 1200.0, 600.0, &tuning);
            assert_eq!(pads.len(), tuning.pad_count);
            check_well_formed(&terrain, &pads, 1200.0, 600.0, &tuning);

            // Integer start and band keep every height a whole number
            for p in &terrain.points {
                assert!((p.y - p.y.round()).abs() < EPS, "height {} not whole", p.y);
            }
        }
    }

    #[test]
    fn test_huge_counts_are_capped() {
        let tuning = Tuning {
            pad_count: usize::MAX,
            ..Default::default()
        };
        let mut rng = Pcg32::seed_from_u64(2);
        let (terrain, pads) = generate_terrain(&mut rng, 1200.0, 600.0, &tuning);
        assert!(!pads.is_empty());
        check_well_formed(&terrain, &pads, 1200.0, 600.0, &tuning);

        let tuning = Tuning {
            terrain_points: usize::MAX,
            pad_count: 0,
            ..Default::default()
        };
        let (terrain, pads) = generate_terrain(&mut rng, 1200.0, 600.0, &tuning);
        assert_eq!(terrain.len(), MAX_TERRAIN_POINTS + 1);
        check_well_formed(&terrain, &pads, 1200.0, 600.0, &tuning);
    }

    #[test]
    fn test_inverted_band_is_reordered() {
        let tuning = Tuning {
            ground_min: 0.9,
            ground_max: 0.3,
            ..Default::default()
        };
        let mut rng = Pcg32::seed_from_u64(6);
        let (terrain, pads) = generate_terrain(&mut rng, 1200.0, 600.0, &tuning);
        let ordered = Tuning {
            ground_min: 0.3,
            ground_max: 0.9,
            ..tuning
        };
        check_well_formed(&terrain, &pads, 1200.0, 600.0, &ordered);
    }

    #[test]
    fn test_screen_without_area_has_no_terrain() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(8);
        for (w, h) in [(1200.0, -600.0), (0.0, 600.0), (f32::NAN, 600.0)] {
            let (terrain, pads) = generate_terrain(&mut rng, w, h, &tuning);
            assert!(terrain.is_empty());
            assert!(pads.is_empty());
        }
    }

    #[test]
    fn test_same_seed_same_terrain() {
        let tuning = Tuning::default();
        let (a, pads_a) = generate_terrain(&mut Pcg32::seed_from_u64(77), 1200.0, 600.0, &tuning);
        let (b, pads_b) = generate_terrain(&mut Pcg32::seed_from_u64(77), 1200.0, 600.0, &tuning);
        assert_eq!(a.points, b.points);
        assert_eq!(pads_a, pads_b);
    }

    #[test]
    fn test_no_pads_requested() {
        let tuning = Tuning {
            pad_count: 0,
            ..Default::default()
        };
        let mut rng = Pcg32::seed_from_u64(1);
        let (terrain, pads) = generate_terrain(&mut rng, 1200.0, 600.0, &tuning);
        assert!(pads.is_empty());
        // Walls plus one point per grid step
        assert_eq!(terrain.len(), tuning.terrain_points + 1);
    }

    #[test]
    fn test_narrow_screen_drops_pads_instead_of_overrunning() {
        let tuning = Tuning {
            pad_width_min: 90.0,
            pad_width_max: 100.0,
            ..Default::default()
        };
        let mut rng = Pcg32::seed_from_u64(4);
        let (terrain, pads) = generate_terrain(&mut rng, 300.0, 600.0, &tuning);
        assert!(pads.len() < tuning.pad_count);
        check_well_formed(&terrain, &pads, 300.0, 600.0, &tuning);
    }

    #[test]
    fn test_pad_contains_is_half_open() {
        let pad = LandingPad {
            x: 10.0,
            y: 100.0,
            width: 50.0,
            height: 5.0,
        };
        assert!(pad.contains(Vec2::new(10.0, 100.0)));
        assert!(pad.contains(Vec2::new(59.9, 104.9)));
        assert!(!pad.contains(Vec2::new(60.0, 102.0)));
        assert!(!pad.contains(Vec2::new(30.0, 105.0)));
        assert!(!pad.contains(Vec2::new(30.0, 99.9)));
        assert_eq!(pad.top_center(), Vec2::new(35.0, 100.0));
    }

    proptest! {
        #[test]
        fn prop_wide_screens_get_every_pad(
            seed in any::<u64>(),
            w in 1200.0f32..3000.0,
            h in 300.0f32..1200.0,
        ) {
            let tuning = Tuning::default();
            let mut rng = Pcg32::seed_from_u64(seed);
            let (terrain, pads) = generate_terrain(&mut rng, w, h, &tuning);
            prop_assert_eq!(pads.len(), tuning.pad_count);
            check_well_formed(&terrain, &pads, w, h, &tuning);
        }

        #[test]
        fn prop_any_screen_is_well_formed(
            seed in any::<u64>(),
            w in 200.0f32..1200.0,
            h in 200.0f32..1200.0,
        ) {
            let tuning = Tuning::default();
            let mut rng = Pcg32::seed_from_u64(seed);
            let (terrain, pads) = generate_terrain(&mut rng, w, h, &tuning);
            prop_assert!(pads.len() <= tuning.pad_count);
            check_well_formed(&terrain, &pads, w, h, &tuning);
        }
    }
}
