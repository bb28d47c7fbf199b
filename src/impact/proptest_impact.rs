//! Property-based tests for the impact estimator using proptest.
//!
//! These tests verify that the closed-form estimates keep their expected
//! shape across a wide range of impactor parameters.

use proptest::prelude::*;
use std::f64::consts::PI;

use super::{estimate, ImpactInput};
use super::effects::{kinetic_energy, seismic_magnitude, sphere_mass};
use crate::deflection::{delta_v_gravity_tractor, delta_v_kinetic};

fn arb_input() -> impl Strategy<Value = ImpactInput> {
    (
        (1.0f64..10_000.0, 1.0f64..72.0, 500.0f64..8000.0),
        (1.0f64..1e6, 0.1f64..30.0, 1.0f64..5.0),
        (1.0f64..1e5, 1.0f64..5000.0, 0.0f64..3650.0),
    )
        .prop_map(
            |(
                (diameter_m, speed_kms, density),
                (impactor_mass_kg, impactor_speed_kms, beta),
                (tractor_mass_kg, standoff_m, tug_days),
            )| ImpactInput {
                diameter_m,
                speed_kms,
                density,
                impactor_mass_kg,
                impactor_speed_kms,
                beta,
                tractor_mass_kg,
                standoff_m,
                tug_days,
            },
        )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Sphere mass follows (4/3)π(d/2)³ρ.
    #[test]
    fn prop_sphere_mass_formula(
        diameter in 0.1f64..10_000.0,
        density in 100.0f64..10_000.0,
    ) {
        let expected = 4.0 / 3.0 * PI * (diameter / 2.0).powi(3) * density;
        let mass = sphere_mass(diameter, density);
        prop_assert!(((mass - expected) / expected).abs() < 1e-12);
    }

    /// Growing either diameter or density grows the mass.
    #[test]
    fn prop_sphere_mass_monotonic(
        diameter in 0.1f64..10_000.0,
        density in 100.0f64..10_000.0,
        grow in 1.001f64..10.0,
    ) {
        let base = sphere_mass(diameter, density);
        prop_assert!(sphere_mass(diameter * grow, density) > base);
        prop_assert!(sphere_mass(diameter, density * grow) > base);
    }

    /// Kinetic energy does not depend on the sign of velocity.
    #[test]
    fn prop_kinetic_energy_even_in_velocity(
        mass in 0.0f64..1e15,
        velocity in 0.0f64..1e5,
    ) {
        prop_assert_eq!(kinetic_energy(mass, velocity), kinetic_energy(mass, -velocity));
    }

    /// Seismic magnitude never decreases with energy above the clamp.
    #[test]
    fn prop_seismic_magnitude_non_decreasing(
        energy in 1.0f64..1e25,
        factor in 1.0f64..1e3,
    ) {
        prop_assert!(seismic_magnitude(energy * factor) >= seismic_magnitude(energy));
    }

    /// Clamped energies all map to the same finite floor.
    #[test]
    fn prop_seismic_magnitude_floor(energy in -1e12f64..1.0) {
        let mw = seismic_magnitude(energy);
        prop_assert!(mw.is_finite());
        prop_assert_eq!(mw, seismic_magnitude(0.0));
    }

    /// Non-positive target mass gives exactly zero kinetic delta-v.
    #[test]
    fn prop_kinetic_zero_for_non_positive_target(
        target in -1e12f64..=0.0,
        impactor_mass in -1e6f64..1e6,
        velocity in -1e5f64..1e5,
        beta in -10.0f64..10.0,
    ) {
        prop_assert_eq!(delta_v_kinetic(target, impactor_mass, velocity, beta), 0.0);
    }

    /// Non-positive standoff gives exactly zero tractor delta-v.
    #[test]
    fn prop_tractor_zero_for_non_positive_standoff(
        target in -1e12f64..1e12,
        tractor_mass in -1e6f64..1e6,
        standoff in -1e4f64..=0.0,
        duration in -1e9f64..1e9,
    ) {
        prop_assert_eq!(delta_v_gravity_tractor(target, tractor_mass, standoff, duration), 0.0);
    }

    /// Repeated estimates are bit-identical.
    #[test]
    fn prop_estimate_idempotent(input in arb_input()) {
        let first = estimate(&input);
        let second = estimate(&input);
        prop_assert_eq!(first.mass_kg.to_bits(), second.mass_kg.to_bits());
        prop_assert_eq!(first.energy_j.to_bits(), second.energy_j.to_bits());
        prop_assert_eq!(first.crater_diameter_m.to_bits(), second.crater_diameter_m.to_bits());
        prop_assert_eq!(first.tsunami_height_m.to_bits(), second.tsunami_height_m.to_bits());
        prop_assert_eq!(first.delta_v_kinetic_mps.to_bits(), second.delta_v_kinetic_mps.to_bits());
        prop_assert_eq!(first.delta_v_tractor_mps.to_bits(), second.delta_v_tractor_mps.to_bits());
    }

    /// Plausible scenarios produce finite, non-negative outputs.
    #[test]
    fn prop_estimate_finite_and_non_negative(input in arb_input()) {
        let result = estimate(&input);
        for value in [
            result.mass_kg,
            result.energy_j,
            result.tnt_tons,
            result.crater_diameter_m,
            result.tsunami_height_m,
            result.delta_v_kinetic_mps,
            result.delta_v_tractor_mps,
        ] {
            prop_assert!(value.is_finite() && value >= 0.0, "bad value {}", value);
        }
        prop_assert!(result.seismic_mw.is_finite());
    }
}
