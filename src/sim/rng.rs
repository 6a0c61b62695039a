//! Bounded random numbers with decimal rounding

use rand::Rng;

/// Uniform sample in `[low, high]` rounded to `decimals` places.
///
/// With `prevent_zero`, samples that round to zero are redrawn. When no
/// non-zero value is reachable after rounding the result is 0.
pub fn random_number<R: Rng>(
    rng: &mut R,
    low: f64,
    high: f64,
    decimals: u32,
    prevent_zero: bool,
) -> f32 {
    let (low, high) = if low <= high { (low, high) } else { (high, low) };
    let scale = 10f64.powi(decimals as i32);
    let round = |v: f64| (v * scale).round() / scale;

    if prevent_zero && round(low) == 0.0 && round(high) == 0.0 {
        log::warn!("random_number: [{low}, {high}] has no non-zero value at {decimals} decimals");
        return 0.0;
    }

    loop {
        let value = round(rng.random_range(low..=high));
        if !(prevent_zero && value == 0.0) {
            return value as f32;
        }
    }
}
