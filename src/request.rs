//! Estimate request decoding and response envelope.
//!
//! Turns a loosely-typed JSON body into an [`ImpactInput`]: every field is
//! optional and falls back to a default, and numeric strings are accepted
//! alongside JSON numbers. Anything that cannot become a finite number is
//! rejected with [`InvalidInput`].

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use crate::impact::{try_estimate, ImpactInput, ImpactResult, InvalidInput};

/// Disclaimer attached to every estimate response.
pub const DISCLAIMER: &str = "Educational first-order estimates only.";

/// Decoded estimate request with defaults applied.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EstimateRequest {
    /// Impactor diameter (m).
    pub diameter_m: f64,
    /// Impactor speed (km/s).
    pub speed_kms: f64,
    /// Impactor bulk density (kg/m³).
    pub density: f64,
    /// Impact angle from horizontal (degrees). Accepted but not yet used.
    pub angle_deg: f64,
    /// Kinetic deflector mass (kg).
    pub imp_mass_kg: f64,
    /// Kinetic deflector speed (km/s).
    pub imp_vel_kms: f64,
    /// Momentum enhancement factor.
    pub beta: f64,
    /// Gravity tractor spacecraft mass (kg).
    pub tractor_mass_kg: f64,
    /// Gravity tractor standoff distance (m).
    pub stand_off_m: f64,
    /// Gravity tractor tug duration (days).
    pub tug_days: f64,
}

impl Default for EstimateRequest {
    fn default() -> Self {
        Self {
            diameter_m: 120.0,
            speed_kms: 18.0,
            density: 3000.0,
            angle_deg: 45.0,
            imp_mass_kg: 1000.0,
            imp_vel_kms: 10.0,
            beta: 1.5,
            tractor_mass_kg: 2000.0,
            stand_off_m: 500.0,
            tug_days: 180.0,
        }
    }
}

impl EstimateRequest {
    /// Decode a raw request body.
    ///
    /// An empty body or `null` means "all defaults".
    pub fn from_body(body: &str) -> Result<Self, InvalidInput> {
        if body.trim().is_empty() {
            return Ok(Self::default());
        }
        let value: Value = serde_json::from_str(body)
            .map_err(|e| InvalidInput::new("body", format!("malformed JSON: {e}")))?;
        Self::from_value(&value)
    }

    /// Decode an already-parsed JSON value.
    pub fn from_value(value: &Value) -> Result<Self, InvalidInput> {
        match value {
            Value::Null => Ok(Self::default()),
            Value::Object(map) => Self::from_map(map),
            other => Err(InvalidInput::new(
                "body",
                format!("expected a JSON object, got {}", json_kind(other)),
            )),
        }
    }

    fn from_map(map: &Map<String, Value>) -> Result<Self, InvalidInput> {
        let defaults = Self::default();
        let field = |name: &str, default: f64| -> Result<f64, InvalidInput> {
            match map.get(name) {
                None => Ok(default),
                Some(value) => coerce_number(name, value, default),
            }
        };

        Ok(Self {
            diameter_m: field("diameter_m", defaults.diameter_m)?,
            speed_kms: field("speed_kms", defaults.speed_kms)?,
            density: field("density", defaults.density)?,
            angle_deg: field("angle_deg", defaults.angle_deg)?,
            imp_mass_kg: field("imp_mass_kg", defaults.imp_mass_kg)?,
            imp_vel_kms: field("imp_vel_kms", defaults.imp_vel_kms)?,
            beta: field("beta", defaults.beta)?,
            tractor_mass_kg: field("tractor_mass_kg", defaults.tractor_mass_kg)?,
            stand_off_m: field("stand_off_m", defaults.stand_off_m)?,
            tug_days: field("tug_days", defaults.tug_days)?,
        })
    }

    /// Estimator input for this request.
    pub fn impact_input(&self) -> ImpactInput {
        ImpactInput {
            diameter_m: self.diameter_m,
            speed_kms: self.speed_kms,
            density: self.density,
            impactor_mass_kg: self.imp_mass_kg,
            impactor_speed_kms: self.imp_vel_kms,
            beta: self.beta,
            tractor_mass_kg: self.tractor_mass_kg,
            standoff_m: self.stand_off_m,
            tug_days: self.tug_days,
        }
    }
}

/// Coerce a JSON value to a finite `f64`.
///
/// Numbers pass through, strings are parsed after trimming, `null` falls back
/// to `default`. Everything else is rejected.
fn coerce_number(field: &str, value: &Value, default: f64) -> Result<f64, InvalidInput> {
    let number = match value {
        Value::Null => return Ok(default),
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| InvalidInput::new(field, format!("number {n} out of range")))?,
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| InvalidInput::new(field, format!("could not parse {s:?} as a number")))?,
        other => {
            return Err(InvalidInput::new(
                field,
                format!("expected a number, got {}", json_kind(other)),
            ));
        }
    };

    if number.is_finite() {
        Ok(number)
    } else {
        Err(InvalidInput::new(
            field,
            format!("expected a finite number, got {number}"),
        ))
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Successful estimate response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EstimateResponse {
    pub derived: ImpactResult,
    pub disclaimer: String,
}

/// Error response body.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl From<&InvalidInput> for ErrorResponse {
    fn from(err: &InvalidInput) -> Self {
        Self {
            error: err.to_string(),
        }
    }
}

/// Run the estimator for a decoded request.
///
/// Inputs whose derived quantities overflow are rejected, so every number in
/// a successful response is finite.
pub fn respond(request: &EstimateRequest) -> Result<EstimateResponse, InvalidInput> {
    let derived = try_estimate(&request.impact_input())?;
    debug!(
        energy_j = derived.energy_j,
        tnt_tons = derived.tnt_tons,
        "estimated impact"
    );
    Ok(EstimateResponse {
        derived,
        disclaimer: DISCLAIMER.to_string(),
    })
}

/// Decode a raw body and run the estimator.
pub fn handle_estimate(body: &str) -> Result<EstimateResponse, InvalidInput> {
    let request = EstimateRequest::from_body(body)?;
    respond(&request)
}

/// Decode a raw body and produce a status code plus JSON response body.
///
/// Status is 200 on success and 400 on [`InvalidInput`].
pub fn handle_estimate_json(body: &str) -> (u16, Value) {
    let (status, value) = match handle_estimate(body) {
        Ok(response) => (200, serde_json::to_value(response)),
        Err(err) => (err.status(), serde_json::to_value(ErrorResponse::from(&err))),
    };
    (status, value.unwrap_or(Value::Null))
}
