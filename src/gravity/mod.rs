//! Surface gravity of a uniform sphere
//!
//! The upstream API reports a body's mass as a mantissa and a base-10
//! exponent, and its mean radius in kilometers. This module turns those
//! three numbers into a surface gravitational acceleration in m/s^2.

use crate::constants::{G, M_PER_KM};

/// Compute the surface gravity of a body in m/s^2
///
/// Applies Newton's law of gravitation for a uniform sphere,
/// `g = G * M / r^2`, where `M = mass_value * 10^mass_exponent` kg and
/// `r = mean_radius_km * 1000` m.
///
/// Returns exactly `0.0` when any input is not strictly positive (NaN
/// included) or when the arithmetic leaves the finite range. This
/// function never fails.
///
/// # Arguments
/// * `mass_value` - Mass mantissa
/// * `mass_exponent` - Base-10 exponent of the mass in kilograms
/// * `mean_radius_km` - Mean radius in kilometers
pub fn surface_gravity(mass_value: f64, mass_exponent: f64, mean_radius_km: f64) -> f64 {
    if !(mass_value > 0.0 && mass_exponent > 0.0 && mean_radius_km > 0.0) {
        return 0.0;
    }

    let radius_m = mean_radius_km * M_PER_KM;
    let mass_kg = mass_value * 10f64.powf(mass_exponent);
    let gravity = G * mass_kg / radius_m.powi(2);

    if gravity.is_finite() {
        gravity
    } else {
        0.0
    }
}
