//! Impact scenario estimation.
//!
//! Maps a handful of impactor parameters to first-order physical
//! consequences and to the delta-v two deflection strategies could deliver.
//! Everything here is pure arithmetic: no I/O and no shared state, so an
//! estimate can be computed from any thread without coordination.

pub mod effects;

#[cfg(test)]
mod proptest_impact;

use serde::{Deserialize, Serialize};

use crate::deflection::DeflectionMethod;
use crate::types::{days_to_seconds, kms_to_mps, DEFAULT_BETA, DEFAULT_IMPACTOR_DENSITY};

pub use effects::{
    crater_diameter, kinetic_energy, seismic_magnitude, sphere_mass, tnt_equivalent,
    tsunami_height,
};

/// An input field could not be turned into a finite number, or the inputs
/// drive a derived quantity out of the finite range.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid input for `{field}`: {reason}")]
pub struct InvalidInput {
    /// Name of the offending field as it appears on the wire.
    pub field: String,
    /// What was wrong with it.
    pub reason: String,
}

impl InvalidInput {
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Client-error status for transports that speak HTTP.
    pub fn status(&self) -> u16 {
        400
    }
}

/// Parameters of an impact scenario and of the two deflection options.
///
/// No cross-field invariants are enforced; callers decide what is plausible.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImpactInput {
    /// Impactor diameter (m).
    pub diameter_m: f64,
    /// Impactor speed (km/s).
    pub speed_kms: f64,
    /// Impactor bulk density (kg/m³).
    pub density: f64,
    /// Kinetic deflector mass (kg).
    pub impactor_mass_kg: f64,
    /// Kinetic deflector speed relative to the target (km/s).
    pub impactor_speed_kms: f64,
    /// Momentum enhancement factor.
    pub beta: f64,
    /// Gravity tractor spacecraft mass (kg).
    pub tractor_mass_kg: f64,
    /// Gravity tractor hover distance from the target center (m).
    pub standoff_m: f64,
    /// Gravity tractor tug duration (days).
    pub tug_days: f64,
}

impl Default for ImpactInput {
    fn default() -> Self {
        Self {
            diameter_m: 120.0,
            speed_kms: 18.0,
            density: DEFAULT_IMPACTOR_DENSITY,
            impactor_mass_kg: 1000.0,
            impactor_speed_kms: 10.0,
            beta: DEFAULT_BETA,
            tractor_mass_kg: 2000.0,
            standoff_m: 500.0,
            tug_days: 180.0,
        }
    }
}

impl ImpactInput {
    fn fields(&self) -> [(&'static str, f64); 9] {
        [
            ("diameter_m", self.diameter_m),
            ("speed_kms", self.speed_kms),
            ("density", self.density),
            ("impactor_mass_kg", self.impactor_mass_kg),
            ("impactor_speed_kms", self.impactor_speed_kms),
            ("beta", self.beta),
            ("tractor_mass_kg", self.tractor_mass_kg),
            ("standoff_m", self.standoff_m),
            ("tug_days", self.tug_days),
        ]
    }

    /// Check that every field is a finite number.
    pub fn validate(&self) -> Result<(), InvalidInput> {
        match self.fields().into_iter().find(|(_, value)| !value.is_finite()) {
            Some((field, value)) => Err(InvalidInput::new(
                field,
                format!("expected a finite number, got {value}"),
            )),
            None => Ok(()),
        }
    }

    /// The kinetic impactor described by this input.
    pub fn kinetic_deflector(&self) -> DeflectionMethod {
        DeflectionMethod::kinetic(
            self.impactor_mass_kg,
            kms_to_mps(self.impactor_speed_kms),
            self.beta,
        )
    }

    /// The gravity tractor described by this input.
    pub fn gravity_tractor(&self) -> DeflectionMethod {
        DeflectionMethod::gravity_tractor(
            self.tractor_mass_kg,
            self.standoff_m,
            days_to_seconds(self.tug_days),
        )
    }
}

/// Derived quantities for one impact scenario.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImpactResult {
    /// Impactor mass (kg).
    pub mass_kg: f64,
    /// Impact velocity (m/s).
    pub velocity_mps: f64,
    /// Kinetic energy at impact (J).
    pub energy_j: f64,
    /// Energy in tons of TNT.
    pub tnt_tons: f64,
    /// Transient crater diameter (m).
    pub crater_diameter_m: f64,
    /// Moment magnitude proxy.
    #[serde(rename = "seismic_Mw")]
    pub seismic_mw: f64,
    /// Tsunami height proxy (m).
    pub tsunami_height_m: f64,
    /// Kinetic impactor delta-v (m/s).
    pub delta_v_kinetic_mps: f64,
    /// Gravity tractor delta-v (m/s).
    pub delta_v_tractor_mps: f64,
}

impl ImpactResult {
    fn fields(&self) -> [(&'static str, f64); 9] {
        [
            ("mass_kg", self.mass_kg),
            ("velocity_mps", self.velocity_mps),
            ("energy_j", self.energy_j),
            ("tnt_tons", self.tnt_tons),
            ("crater_diameter_m", self.crater_diameter_m),
            ("seismic_Mw", self.seismic_mw),
            ("tsunami_height_m", self.tsunami_height_m),
            ("delta_v_kinetic_mps", self.delta_v_kinetic_mps),
            ("delta_v_tractor_mps", self.delta_v_tractor_mps),
        ]
    }

    /// Check that every derived quantity is finite.
    ///
    /// Finite inputs can still overflow, e.g. a 1e120 m diameter gives an
    /// infinite mass. The offending result field is reported.
    pub fn validate(&self) -> Result<(), InvalidInput> {
        match self.fields().into_iter().find(|(_, value)| !value.is_finite()) {
            Some((field, value)) => Err(InvalidInput::new(
                field,
                format!("inputs overflow the estimate (got {value})"),
            )),
            None => Ok(()),
        }
    }
}

/// Estimate impact effects and deflection delta-v for `input`.
///
/// Never panics; degenerate deflection geometry gives zero delta-v. Extreme
/// inputs may overflow, use [`try_estimate`] to reject those. Target surface
/// density and shelf slope use their defaults.
pub fn estimate(input: &ImpactInput) -> ImpactResult {
    let mass_kg = sphere_mass(input.diameter_m, input.density);
    let velocity_mps = kms_to_mps(input.speed_kms);
    let energy_j = kinetic_energy(mass_kg, velocity_mps);

    ImpactResult {
        mass_kg,
        velocity_mps,
        energy_j,
        tnt_tons: tnt_equivalent(energy_j),
        crater_diameter_m: effects::crater_diameter_default_target(
            input.diameter_m,
            velocity_mps,
            input.density,
        ),
        seismic_mw: seismic_magnitude(energy_j),
        tsunami_height_m: effects::tsunami_height_default_slope(energy_j),
        delta_v_kinetic_mps: input.kinetic_deflector().delta_v(mass_kg),
        delta_v_tractor_mps: input.gravity_tractor().delta_v(mass_kg),
    }
}

/// Validate `input`, estimate it, and reject results that overflowed.
pub fn try_estimate(input: &ImpactInput) -> Result<ImpactResult, InvalidInput> {
    input.validate()?;
    let result = estimate(input);
    result.validate()?;
    Ok(result)
}
