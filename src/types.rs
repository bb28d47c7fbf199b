//! Physical constants shared by the estimators (SI units).

/// Gravitational constant (m³·kg⁻¹·s⁻²)
pub const G: f64 = 6.67430e-11;

/// Earth surface gravity (m/s²) used by crater scaling
pub const G_EARTH: f64 = 9.81;

/// Joules per ton of TNT
pub const TNT_J_PER_TON: f64 = 4.184e9;

/// Default bulk density of a rocky impactor (kg/m³)
pub const DEFAULT_IMPACTOR_DENSITY: f64 = 3000.0;

/// Default density of the target surface (kg/m³)
pub const DEFAULT_TARGET_DENSITY: f64 = 2000.0;

/// Default continental shelf slope for the tsunami proxy (dimensionless)
pub const DEFAULT_SHELF_SLOPE: f64 = 0.005;

/// Default momentum enhancement factor for kinetic impactors
pub const DEFAULT_BETA: f64 = 1.5;

/// Seconds per day
pub const SECONDS_PER_DAY: f64 = 86400.0;

/// Meters per second in one kilometer per second
pub const KMS_TO_MPS: f64 = 1000.0;

/// Convert a speed in km/s to m/s.
#[inline]
pub fn kms_to_mps(speed_kms: f64) -> f64 {
    speed_kms * KMS_TO_MPS
}

/// Convert a duration in days to seconds.
#[inline]
pub fn days_to_seconds(days: f64) -> f64 {
    days * SECONDS_PER_DAY
}
