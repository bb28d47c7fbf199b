//! Demo impactor fixture.
//!
//! A fictional object with static toy heliocentric elements, used to seed
//! visualizations. Nothing here is propagated or computed.

use serde::{Deserialize, Serialize};

/// Diameter range (m).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DiameterRange {
    pub min: f64,
    pub max: f64,
}

/// Heliocentric orbital elements, angles in degrees.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DemoElements {
    /// Semi-major axis (AU)
    #[serde(rename = "a_AU")]
    pub a_au: f64,
    /// Eccentricity
    pub e: f64,
    /// Inclination
    pub i_deg: f64,
    /// Longitude of the ascending node
    #[serde(rename = "Omega_deg")]
    pub longitude_ascending_node_deg: f64,
    /// Argument of perihelion
    #[serde(rename = "omega_deg")]
    pub argument_of_perihelion_deg: f64,
    /// Mean anomaly at epoch
    #[serde(rename = "M_deg")]
    pub mean_anomaly_deg: f64,
    /// Epoch (Julian date)
    pub epoch_jd: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Encounter {
    pub days_until: u32,
}

/// Demo object record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DemoObject {
    pub id: String,
    pub name: String,
    pub diameter_m: DiameterRange,
    pub albedo: f64,
    pub elements: DemoElements,
    pub encounter: Encounter,
}

/// The "Impactor-2025" demo object.
pub fn impactor_2025() -> DemoObject {
    DemoObject {
        id: "IMP-2025".to_string(),
        name: "Impactor-2025 (demo)".to_string(),
        diameter_m: DiameterRange {
            min: 120.0,
            max: 220.0,
        },
        albedo: 0.25,
        elements: DemoElements {
            a_au: 1.15,
            e: 0.21,
            i_deg: 6.5,
            longitude_ascending_node_deg: 44.0,
            argument_of_perihelion_deg: 210.0,
            mean_anomaly_deg: 123.0,
            epoch_jd: 2460600.5,
        },
        encounter: Encounter { days_until: 365 },
    }
}
