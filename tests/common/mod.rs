//! Common test utilities for integration tests.

#![allow(dead_code)]

use std::f64::consts::PI;

use impactor::impact::ImpactInput;
use impactor::types::{G, SECONDS_PER_DAY};

/// The reference scenario: 120 m stony body at 18 km/s.
pub fn reference_input() -> ImpactInput {
    ImpactInput {
        diameter_m: 120.0,
        speed_kms: 18.0,
        density: 3000.0,
        ..ImpactInput::default()
    }
}

/// Mass of a uniform sphere, written out independently of the library.
pub fn expected_sphere_mass(diameter_m: f64, density: f64) -> f64 {
    4.0 / 3.0 * PI * (diameter_m / 2.0).powi(3) * density
}

/// Gravity tractor delta-v, written out independently of the library.
pub fn expected_tractor_delta_v(tractor_mass_kg: f64, standoff_m: f64, tug_days: f64) -> f64 {
    (G * tractor_mass_kg / (standoff_m * standoff_m)) * (tug_days * SECONDS_PER_DAY)
}
