//! Deflection strategies and delta-v estimates.
//!
//! Implements first-order physics for:
//! - Kinetic impactor (DART-style): momentum transfer with ejecta amplification
//! - Gravity tractor: station-keeping spacecraft pulling the target over time
//!
//! Degenerate geometry (non-positive target mass, non-positive standoff)
//! yields zero delta-v instead of an error.

use crate::types::{G, SECONDS_PER_DAY};

/// Kinetic impactor delta-v.
///
/// Δv = β × (m_imp × v_imp) / M_target
///
/// # Arguments
/// * `target_mass_kg` - Mass of the asteroid (kg)
/// * `impactor_mass_kg` - Spacecraft mass at impact (kg)
/// * `impactor_velocity_mps` - Relative impact velocity (m/s)
/// * `beta` - Momentum enhancement factor from ejecta (1.0 = none)
///
/// # Returns
/// Delta-v in m/s, or 0 when the target mass is not positive
#[inline]
pub fn delta_v_kinetic(
    target_mass_kg: f64,
    impactor_mass_kg: f64,
    impactor_velocity_mps: f64,
    beta: f64,
) -> f64 {
    if target_mass_kg <= 0.0 {
        return 0.0;
    }
    beta * impactor_mass_kg * impactor_velocity_mps / target_mass_kg
}

/// Gravity tractor acceleration imparted to the target.
///
/// a = G × M_spacecraft / r²
///
/// # Reference
/// Lu, E. & Love, S. (2005) "Gravitational tractor for towing asteroids"
#[inline]
pub fn gravity_tractor_acceleration(tractor_mass_kg: f64, standoff_m: f64) -> f64 {
    if standoff_m <= 0.0 {
        return 0.0;
    }
    G * tractor_mass_kg / (standoff_m * standoff_m)
}

/// Gravity tractor delta-v under constant acceleration.
///
/// Δv = (G × M_spacecraft / r²) × t
///
/// The acceleration felt by the target does not depend on its own mass, so
/// `_target_mass_kg` only keeps the call shape uniform with the kinetic case.
///
/// # Returns
/// Delta-v in m/s, or 0 when the standoff distance is not positive
#[inline]
pub fn delta_v_gravity_tractor(
    _target_mass_kg: f64,
    tractor_mass_kg: f64,
    standoff_m: f64,
    tug_duration_s: f64,
) -> f64 {
    gravity_tractor_acceleration(tractor_mass_kg, standoff_m) * tug_duration_s
}

/// Deflection method configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DeflectionMethod {
    /// Kinetic impactor - transfers momentum through collision.
    Kinetic {
        /// Impactor mass (kg).
        mass_kg: f64,
        /// Relative impact velocity (m/s).
        velocity_mps: f64,
        /// Momentum enhancement factor (dimensionless).
        /// DART measured β ≈ 3.6 for Dimorphos.
        beta: f64,
    },

    /// Gravity tractor - spacecraft mass gravitationally pulls the target.
    GravityTractor {
        /// Spacecraft mass (kg).
        spacecraft_mass_kg: f64,
        /// Hover distance from the target's center of mass (m).
        standoff_m: f64,
        /// Tug duration (s). Operation is passive.
        duration_s: f64,
    },
}

impl DeflectionMethod {
    /// Kinetic impactor of `mass_kg` arriving at `velocity_mps`.
    pub fn kinetic(mass_kg: f64, velocity_mps: f64, beta: f64) -> Self {
        Self::Kinetic {
            mass_kg,
            velocity_mps,
            beta,
        }
    }

    /// Gravity tractor holding station at `standoff_m` for `duration_s`.
    pub fn gravity_tractor(spacecraft_mass_kg: f64, standoff_m: f64, duration_s: f64) -> Self {
        Self::GravityTractor {
            spacecraft_mass_kg,
            standoff_m,
            duration_s,
        }
    }

    /// Delta-v (m/s) this method imparts to a target of `target_mass_kg`.
    pub fn delta_v(&self, target_mass_kg: f64) -> f64 {
        match *self {
            DeflectionMethod::Kinetic {
                mass_kg,
                velocity_mps,
                beta,
            } => delta_v_kinetic(target_mass_kg, mass_kg, velocity_mps, beta),
            DeflectionMethod::GravityTractor {
                spacecraft_mass_kg,
                standoff_m,
                duration_s,
            } => delta_v_gravity_tractor(target_mass_kg, spacecraft_mass_kg, standoff_m, duration_s),
        }
    }

    /// Human-readable description including the key parameters.
    pub fn description(&self) -> String {
        match self {
            DeflectionMethod::Kinetic {
                mass_kg,
                velocity_mps,
                beta,
            } => format!(
                "Kinetic Impactor ({:.0} kg at {:.1} km/s, β={:.1})",
                mass_kg,
                velocity_mps / 1000.0,
                beta
            ),
            DeflectionMethod::GravityTractor {
                spacecraft_mass_kg,
                standoff_m,
                duration_s,
            } => format!(
                "Gravity Tractor ({:.0} kg at {:.0} m for {:.0} days)",
                spacecraft_mass_kg,
                standoff_m,
                duration_s / SECONDS_PER_DAY
            ),
        }
    }
}
