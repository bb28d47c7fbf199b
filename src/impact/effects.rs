//! Closed-form impact effect estimates.
//!
//! Each function is a simplified parametric stand-in for a much richer
//! physical model and is only meaningful as an order-of-magnitude figure:
//! - Sphere mass and kinetic energy
//! - TNT equivalent and moment-magnitude proxy
//! - Gravity-regime crater scaling (vertical impact)
//! - Tsunami height proxy (no wave propagation)

use std::f64::consts::PI;

use crate::types::{DEFAULT_SHELF_SLOPE, DEFAULT_TARGET_DENSITY, G_EARTH, TNT_J_PER_TON};

/// Crater scaling coefficient for the gravity regime.
const CRATER_K: f64 = 1.3;

/// Mass of a uniform sphere.
///
/// # Arguments
/// * `diameter_m` - Sphere diameter in meters
/// * `density` - Bulk density in kg/m³
///
/// # Returns
/// Mass in kg: (4/3)·π·(d/2)³·ρ
#[inline]
pub fn sphere_mass(diameter_m: f64, density: f64) -> f64 {
    let radius = diameter_m / 2.0;
    (4.0 / 3.0) * PI * radius.powi(3) * density
}

/// Kinetic energy (J) of a body of `mass_kg` moving at `velocity_mps`.
#[inline]
pub fn kinetic_energy(mass_kg: f64, velocity_mps: f64) -> f64 {
    0.5 * mass_kg * velocity_mps * velocity_mps
}

/// Energy expressed in tons of TNT.
#[inline]
pub fn tnt_equivalent(energy_j: f64) -> f64 {
    energy_j / TNT_J_PER_TON
}

/// Moment magnitude (Mw) proxy from impact energy.
///
/// Energy is clamped to at least 1 J before taking the logarithm, so zero
/// or negative energy yields a finite floor of -3.2 instead of NaN.
#[inline]
pub fn seismic_magnitude(energy_j: f64) -> f64 {
    (energy_j.max(1.0).log10() - 4.8) / 1.5
}

/// Transient crater diameter from gravity-regime power-law scaling.
///
/// k · g^-0.22 · v^0.44 · (ρi/ρt)^(1/3) · d^0.78
///
/// Vertical impact only; no target strength term and no impact angle.
///
/// # Arguments
/// * `diameter_m` - Impactor diameter (m)
/// * `velocity_mps` - Impact velocity (m/s)
/// * `impactor_density` - Impactor density (kg/m³)
/// * `target_density` - Target surface density (kg/m³)
///
/// # Returns
/// Crater diameter in meters
pub fn crater_diameter(
    diameter_m: f64,
    velocity_mps: f64,
    impactor_density: f64,
    target_density: f64,
) -> f64 {
    CRATER_K
        * G_EARTH.powf(-0.22)
        * velocity_mps.powf(0.44)
        * (impactor_density / target_density).powf(1.0 / 3.0)
        * diameter_m.powf(0.78)
}

/// Crater diameter against the default 2000 kg/m³ target surface.
#[inline]
pub fn crater_diameter_default_target(
    diameter_m: f64,
    velocity_mps: f64,
    impactor_density: f64,
) -> f64 {
    crater_diameter(diameter_m, velocity_mps, impactor_density, DEFAULT_TARGET_DENSITY)
}

/// Tsunami height proxy (m): E^(1/3) · 1e-6 · (1 + 50·slope).
///
/// A toy scaling with no wave-propagation physics behind it.
#[inline]
pub fn tsunami_height(energy_j: f64, shelf_slope: f64) -> f64 {
    energy_j.powf(1.0 / 3.0) * 1e-6 * (1.0 + shelf_slope * 50.0)
}

/// Tsunami height proxy using the default 0.005 shelf slope.
#[inline]
pub fn tsunami_height_default_slope(energy_j: f64) -> f64 {
    tsunami_height(energy_j, DEFAULT_SHELF_SLOPE)
}
