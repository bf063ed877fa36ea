use serde::{Deserialize, Deserializer, Serialize};
use serde_json::json;

use crate::error::{ClientResult, PredictionError};

// ========================
// Request Types
// ========================

/// Body of `POST /predict`. Wire names are fixed by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionRequest {
    pub load: f64,      // Applied load (N), negative = downward
    #[serde(rename = "A")]
    pub area: f64,      // Cross-sectional area (m²)
    pub use_model: bool,
}

impl PredictionRequest {
    pub fn new(load: f64, area: f64) -> Self {
        Self {
            load,
            area,
            use_model: true,
        }
    }

    /// Both scalars must be finite before anything goes on the wire
    pub fn validate(&self) -> ClientResult<()> {
        for (name, value) in [("load", self.load), ("area", self.area)] {
            if !value.is_finite() {
                return Err(PredictionError::InvalidInput(format!(
                    "{name} must be a finite number, got {value}"
                )));
            }
        }
        Ok(())
    }
}

// ========================
// Response Types
// ========================

/// Outer JSON object returned by `/predict`.
///
/// Only `result` matters for rendering; the rest is kept for the debug view
/// and for better error messages when the backend answers with something else.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PredictionEnvelope {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub result: Option<serde_json::Value>,
    #[serde(default)]
    pub prediction: Option<f64>,
}

/// Decoded analysis results.
///
/// `displacements[i]` belongs to node `i + 1`; the element arrays to element `i + 1`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    #[serde(rename = "u", default, deserialize_with = "null_as_empty")]
    pub displacements: Vec<f64>,
    #[serde(rename = "elem_forces", default, deserialize_with = "null_as_empty")]
    pub element_forces: Vec<f64>,
    #[serde(rename = "elem_stresses", default, deserialize_with = "null_as_empty")]
    pub element_stresses: Vec<f64>,
    #[serde(rename = "max_disp", default, skip_serializing_if = "Option::is_none")]
    pub max_displacement: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_stress: Option<f64>,
    /// "fea" or "ml_model", copied from the envelope
    #[serde(skip_deserializing, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<f64>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Outcome of one prediction attempt. Never both populated.
#[derive(Debug, Clone, PartialEq)]
pub enum PredictionOutcome {
    Success(PredictionResult),
    Failure(PredictionError),
}

impl PredictionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, PredictionOutcome::Success(_))
    }

    pub fn result(&self) -> Option<&PredictionResult> {
        match self {
            PredictionOutcome::Success(result) => Some(result),
            PredictionOutcome::Failure(_) => None,
        }
    }

    pub fn error(&self) -> Option<&PredictionError> {
        match self {
            PredictionOutcome::Success(_) => None,
            PredictionOutcome::Failure(err) => Some(err),
        }
    }

    /// Pretty-printed JSON shown in the "Raw JSON Result" card
    pub fn to_debug_json(&self) -> String {
        let value = match self {
            PredictionOutcome::Success(result) => {
                serde_json::to_value(result).unwrap_or_else(|e| json!({ "error": e.to_string() }))
            }
            PredictionOutcome::Failure(err) => json!({
                "error": err.to_string(),
                "kind": err.kind(),
            }),
        };
        serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string())
    }
}

impl From<ClientResult<PredictionResult>> for PredictionOutcome {
    fn from(result: ClientResult<PredictionResult>) -> Self {
        match result {
            Ok(result) => PredictionOutcome::Success(result),
            Err(err) => PredictionOutcome::Failure(err),
        }
    }
}

/// Response of `GET /health`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub ok: bool,
    #[serde(default)]
    pub model_exists: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_uses_wire_names() {
        let body = serde_json::to_value(PredictionRequest::new(-1000.0, 0.0001)).unwrap();
        assert_eq!(body, json!({ "load": -1000.0, "A": 0.0001, "use_model": true }));
    }

    #[test]
    fn non_finite_request_is_rejected() {
        let err = PredictionRequest::new(f64::NAN, 0.0001).validate().unwrap_err();
        assert!(matches!(err, PredictionError::InvalidInput(ref m) if m.starts_with("load")));
        assert!(PredictionRequest::new(-5.0, f64::INFINITY).validate().is_err());
        assert!(PredictionRequest::new(-5.0, 1e-4).validate().is_ok());
    }

    #[test]
    fn result_maps_wire_fields() {
        let result: PredictionResult = serde_json::from_value(json!({
            "u": [0.0, -0.002],
            "elem_forces": [150.0],
            "elem_stresses": [2000000.0],
            "max_disp": -0.002,
            "max_stress": 2000000.0
        }))
        .unwrap();
        assert_eq!(result.displacements, vec![0.0, -0.002]);
        assert_eq!(result.element_forces, vec![150.0]);
        assert_eq!(result.element_stresses, vec![2000000.0]);
        assert_eq!(result.max_displacement, Some(-0.002));
        assert_eq!(result.max_stress, Some(2000000.0));
        assert_eq!(result.source, None);
    }

    #[test]
    fn absent_or_null_arrays_are_empty() {
        let result: PredictionResult =
            serde_json::from_value(json!({ "u": null, "max_stress": 10.0 })).unwrap();
        assert!(result.displacements.is_empty());
        assert!(result.element_forces.is_empty());
        assert!(result.element_stresses.is_empty());
        assert_eq!(result.max_displacement, None);
    }

    #[test]
    fn wrong_element_type_fails_decoding() {
        let decoded = serde_json::from_value::<PredictionResult>(json!({ "u": ["a"] }));
        assert!(decoded.is_err());
    }

    #[test]
    fn failure_dump_carries_error_and_kind() {
        let outcome = PredictionOutcome::Failure(PredictionError::Transport("connection refused".into()));
        let dumped: serde_json::Value = serde_json::from_str(&outcome.to_debug_json()).unwrap();
        assert_eq!(dumped["error"], "request failed: connection refused");
        assert_eq!(dumped["kind"], "transport");
    }

    #[test]
    fn success_dump_uses_wire_names() {
        let outcome = PredictionOutcome::Success(PredictionResult {
            displacements: vec![0.0, -0.002],
            max_displacement: Some(-0.002),
            source: Some("fea".to_string()),
            ..Default::default()
        });
        let dumped: serde_json::Value = serde_json::from_str(&outcome.to_debug_json()).unwrap();
        assert_eq!(dumped["u"], json!([0.0, -0.002]));
        assert_eq!(dumped["max_disp"], json!(-0.002));
        assert_eq!(dumped["source"], "fea");
        assert!(dumped.get("max_stress").is_none());
    }
}
