//! Data-driven game balance
//!
//! Every constant the simulation reads lives here so a host can load
//! alternate balance from JSON. Defaults come from [`crate::consts`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Why a tuning file was rejected
#[derive(Debug)]
pub enum TuningError {
    /// JSON could not be parsed into [`Tuning`]
    Parse(serde_json::Error),
    /// Parsed, but a value is out of range
    Invalid(&'static str),
}

impl fmt::Display for TuningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TuningError::Parse(e) => write!(f, "failed to parse tuning: {e}"),
            TuningError::Invalid(reason) => write!(f, "invalid tuning: {reason}"),
        }
    }
}

impl std::error::Error for TuningError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TuningError::Parse(e) => Some(e),
            TuningError::Invalid(_) => None,
        }
    }
}

impl From<serde_json::Error> for TuningError {
    fn from(e: serde_json::Error) -> Self {
        TuningError::Parse(e)
    }
}

/// Simulation constants
///
/// Craft quantities are per frame (not dt-scaled); fuel burn and particle
/// lifetimes are per second.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Craft ===
    pub hull_radius: f32,
    pub gravity: f32,
    pub thrust: f32,
    /// Degrees per frame
    pub rotation_speed: f32,
    /// Fuel per second of thrust
    pub fuel_rate: f32,
    pub initial_fuel: f32,
    pub spawn_y: f32,

    // === Terrain ===
    /// Ground points across the screen (2^n + 1)
    pub terrain_points: usize,
    /// Max height change between ground points
    pub ground_jitter: f32,
    /// Starting height as a fraction of screen height
    pub ground_start: f32,
    /// Allowed ground band as fractions of screen height
    pub ground_min: f32,
    pub ground_max: f32,

    // === Landing pads ===
    pub pad_count: usize,
    pub pad_width_min: f32,
    pub pad_width_max: f32,
    pub pad_height: f32,

    // === Landing limits ===
    pub max_landing_vx: f32,
    pub max_landing_vy: f32,
    /// Degrees
    pub max_landing_tilt: f32,

    // === Pilot assist ===
    pub assist_distance: f32,
    pub assist_rotation_decay: f32,
    pub assist_velocity_decay: f32,
    /// Vertical speed above which descent is damped
    pub assist_descent_threshold: f32,
    /// Fraction of the distance to the pad centre covered each frame
    pub assist_centering: f32,

    // === Exhaust ===
    pub exhaust_speed_min: f32,
    pub exhaust_speed_max: f32,
    pub exhaust_size_min: f32,
    pub exhaust_size_max: f32,
    /// Transparency lost per frame
    pub exhaust_fade: f32,
    pub max_particles: usize,

    // === Score ===
    pub score_base: f32,
    pub score_per_second: f32,
    pub score_per_fuel: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            hull_radius: HULL_RADIUS,
            gravity: GRAVITY,
            thrust: THRUST,
            rotation_speed: ROTATION_SPEED,
            fuel_rate: FUEL_RATE,
            initial_fuel: INITIAL_FUEL,
            spawn_y: SPAWN_Y,

            terrain_points: TERRAIN_POINTS,
            ground_jitter: GROUND_JITTER,
            ground_start: GROUND_START,
            ground_min: GROUND_MIN,
            ground_max: GROUND_MAX,

            pad_count: PAD_COUNT,
            pad_width_min: PAD_WIDTH_MIN,
            pad_width_max: PAD_WIDTH_MAX,
            pad_height: PAD_HEIGHT,

            max_landing_vx: MAX_LANDING_VX,
            max_landing_vy: MAX_LANDING_VY,
            max_landing_tilt: MAX_LANDING_TILT,

            assist_distance: ASSIST_DISTANCE,
            assist_rotation_decay: ASSIST_ROTATION_DECAY,
            assist_velocity_decay: ASSIST_VELOCITY_DECAY,
            assist_descent_threshold: ASSIST_DESCENT_THRESHOLD,
            assist_centering: ASSIST_CENTERING,

            exhaust_speed_min: EXHAUST_SPEED_MIN,
            exhaust_speed_max: EXHAUST_SPEED_MAX,
            exhaust_size_min: EXHAUST_SIZE_MIN,
            exhaust_size_max: EXHAUST_SIZE_MAX,
            exhaust_fade: EXHAUST_FADE,
            max_particles: MAX_PARTICLES,

            score_base: SCORE_BASE,
            score_per_second: SCORE_PER_SECOND,
            score_per_fuel: SCORE_PER_FUEL,
        }
    }
}

impl Tuning {
    /// Parse and validate tuning from JSON (missing fields take defaults)
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)
            .map_err(TuningError::from)
            .and_then(|tuning: Tuning| tuning.validate().map(|()| tuning))
            .inspect_err(|e| log::warn!("Rejected tuning: {e}"))?;
        log::info!(
            "Loaded tuning: {} terrain points, {} pads",
            tuning.terrain_points,
            tuning.pad_count
        );
        Ok(tuning)
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String, TuningError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values the generator or integrator cannot honour
    pub fn validate(&self) -> Result<(), TuningError> {
        let finite = [
            self.hull_radius,
            self.gravity,
            self.thrust,
            self.rotation_speed,
            self.fuel_rate,
            self.initial_fuel,
            self.spawn_y,
            self.ground_jitter,
            self.ground_start,
            self.ground_min,
            self.ground_max,
            self.pad_width_min,
            self.pad_width_max,
            self.pad_height,
            self.max_landing_vx,
            self.max_landing_vy,
            self.max_landing_tilt,
            self.assist_distance,
            self.assist_rotation_decay,
            self.assist_velocity_decay,
            self.assist_descent_threshold,
            self.assist_centering,
            self.exhaust_speed_min,
            self.exhaust_speed_max,
            self.exhaust_size_min,
            self.exhaust_size_max,
            self.exhaust_fade,
            self.score_base,
            self.score_per_second,
            self.score_per_fuel,
        ];
        if finite.iter().any(|v| !v.is_finite()) {
            return Err(TuningError::Invalid("values must be finite"));
        }
        if !(3..=MAX_TERRAIN_POINTS).contains(&self.terrain_points) {
            return Err(TuningError::Invalid("terrain_points must be between 3 and 65537"));
        }
        if self.pad_count > self.terrain_points - 1 {
            return Err(TuningError::Invalid("pad_count must not exceed terrain_points - 1"));
        }
        if self.hull_radius <= 0.0 {
            return Err(TuningError::Invalid("hull_radius must be positive"));
        }
        if self.fuel_rate < 0.0 || self.initial_fuel < 0.0 {
            return Err(TuningError::Invalid("fuel values must not be negative"));
        }
        if self.ground_jitter < 0.0 {
            return Err(TuningError::Invalid("ground_jitter must not be negative"));
        }
        if !(0.0..=1.0).contains(&self.ground_min)
            || !(0.0..=1.0).contains(&self.ground_max)
            || self.ground_min > self.ground_max
        {
            return Err(TuningError::Invalid("ground band must satisfy 0 <= min <= max <= 1"));
        }
        if self.pad_width_min <= 0.0 || self.pad_width_min > self.pad_width_max {
            return Err(TuningError::Invalid("pad widths must satisfy 0 < min <= max"));
        }
        if self.pad_height <= 0.0 {
            return Err(TuningError::Invalid("pad_height must be positive"));
        }
        if self.exhaust_speed_min > self.exhaust_speed_max
            || self.exhaust_size_min > self.exhaust_size_max
        {
            return Err(TuningError::Invalid("exhaust ranges must satisfy min <= max"));
        }
        if self.exhaust_fade <= 0.0 {
            return Err(TuningError::Invalid("exhaust_fade must be positive"));
        }
        if self.max_particles == 0 {
            return Err(TuningError::Invalid("max_particles must be at least 1"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(Tuning::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let tuning = Tuning::from_json(r#"{ "gravity": 0.05, "pad_count": 3 }"#).unwrap();
        assert_eq!(tuning.pad_count, 3);
        assert!((tuning.gravity - 0.05).abs() < f32::EPSILON);
        assert_eq!(tuning.terrain_points, TERRAIN_POINTS);
    }

    #[test]
    fn test_rejects_inverted_pad_widths() {
        let err = Tuning::from_json(r#"{ "pad_width_min": 120, "pad_width_max": 40 }"#)
            .unwrap_err();
        assert!(matches!(err, TuningError::Invalid(_)));
    }

    #[test]
    fn test_rejects_counts_the_generator_cannot_honour() {
        for json in [
            r#"{ "pad_count": 18446744073709551615 }"#,
            r#"{ "terrain_points": 18446744073709551615 }"#,
            r#"{ "terrain_points": 2 }"#,
            r#"{ "terrain_points": 9, "pad_count": 9 }"#,
        ] {
            let err = Tuning::from_json(json).unwrap_err();
            assert!(matches!(err, TuningError::Invalid(_)), "{json} accepted");
        }
        assert!(Tuning::from_json(r#"{ "terrain_points": 9, "pad_count": 8 }"#).is_ok());
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = Tuning::from_json("{ not json").unwrap_err();
        assert!(matches!(err, TuningError::Parse(_)));
        assert!(err.to_string().starts_with("failed to parse tuning"));
    }

    #[test]
    fn test_json_roundtrip_preserves_values() {
        let mut tuning = Tuning::default();
        tuning.thrust = 0.08;
        let json = tuning.to_json().unwrap();
        assert_eq!(Tuning::from_json(&json).unwrap(), tuning);
    }
}
