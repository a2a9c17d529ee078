//! JSON API for the serving layer.
//!
//! `advise_json` is the strict form (errors as `Err`); `advise_json_response`
//! always returns a JSON envelope with either `data` or a coded `error`.

use schemars::{schema::RootSchema, schema_for, JsonSchema};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::advisory::{AdvisoryResult, ShotAdvisor};
use crate::context::geometry::{infer_shot_type, infer_zone};
use crate::context::{CourtZone, Position, ShotContext, ShotType};
use crate::error::{AdvisoryError, Result};
use crate::SCHEMA_VERSION;

/// Shot description as sent by clients. Shot type and zone are inferred
/// from the court location when omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AdvisoryRequest {
    pub shot_distance: f64,
    pub loc_x: f64,
    pub loc_y: f64,
    #[serde(default)]
    pub shot_type: Option<ShotType>,
    #[serde(default)]
    pub zone: Option<CourtZone>,
    pub quarter: u8,
    pub mins_left: u8,
    pub secs_left: u8,
    #[serde(default)]
    pub position: Position,
    #[serde(default)]
    pub defender_distance: Option<f64>,
}

impl AdvisoryRequest {
    pub fn into_context(self) -> ShotContext {
        let shot_type = self
            .shot_type
            .unwrap_or_else(|| infer_shot_type(self.shot_distance, self.loc_x, self.loc_y));
        let zone =
            self.zone.unwrap_or_else(|| infer_zone(self.shot_distance, self.loc_x, self.loc_y));
        ShotContext {
            shot_distance: self.shot_distance,
            loc_x: self.loc_x,
            loc_y: self.loc_y,
            shot_type,
            zone,
            quarter: self.quarter,
            mins_left: self.mins_left,
            secs_left: self.secs_left,
            position: self.position,
            defender_distance: self.defender_distance,
        }
    }
}

/// Parse a request, run the advisor and serialize the result.
pub fn advise_json(advisor: &ShotAdvisor, request_json: &str) -> Result<String> {
    let request: AdvisoryRequest = serde_json::from_str(request_json)?;
    let result = advisor.advise(&request.into_context())?;
    Ok(serde_json::to_string(&result)?)
}

/// Standard API response wrapper
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<ApiError>,
    pub schema_version: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

impl From<&AdvisoryError> for ApiError {
    fn from(err: &AdvisoryError) -> Self {
        Self { code: err.code().to_string(), message: err.to_string() }
    }
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self { success: true, data: Some(data), error: None, schema_version: SCHEMA_VERSION }
    }

    pub fn error(error: ApiError) -> Self {
        Self { success: false, data: None, error: Some(error), schema_version: SCHEMA_VERSION }
    }
}

/// Envelope form of [`advise_json`]; never fails.
pub fn advise_json_response(advisor: &ShotAdvisor, request_json: &str) -> String {
    debug!("Processing advisory request");

    let outcome = serde_json::from_str::<AdvisoryRequest>(request_json)
        .map_err(AdvisoryError::from)
        .and_then(|request| advisor.advise(&request.into_context()));

    let response: ApiResponse<AdvisoryResult> = match outcome {
        Ok(result) => {
            debug!("Advisory decision: {}", result.summary());
            ApiResponse::success(result)
        }
        Err(err) => {
            warn!("Advisory request failed: {}", err);
            ApiResponse::error(ApiError::from(&err))
        }
    };
    serde_json::to_string(&response).unwrap_or_else(|_| "{}".to_string())
}

pub fn request_schema() -> RootSchema {
    schema_for!(AdvisoryRequest)
}

pub fn result_schema() -> RootSchema {
    schema_for!(AdvisoryResult)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FixedProbabilityModel;
    use std::sync::Arc;

    fn advisor(p: f64) -> ShotAdvisor {
        ShotAdvisor::new(Arc::new(FixedProbabilityModel::new(p)))
    }

    const TIGHT_MID_RANGE: &str = r#"{
        "shot_distance": 18.0, "loc_x": 12.0, "loc_y": 13.4,
        "shot_type": "2PT Field Goal", "zone": "Mid-Range",
        "quarter": 2, "mins_left": 8, "secs_left": 0,
        "position": "SG", "defender_distance": 2.0
    }"#;

    #[test]
    fn test_advise_json_round_trip() {
        let out = advise_json(&advisor(0.42), TIGHT_MID_RANGE).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["decision"], "PASS");
        assert_eq!(value["contest_level"], "TIGHT");
        assert_eq!(value["recommended_action"], "Swing the ball");
        assert!(value["defender_impact_details"]["impact_factor"].as_f64().unwrap() < 1.0);
        assert!(value["shot_quality_breakdown"]["defensive_pressure"].as_f64().unwrap() < 0.0);
    }

    #[test]
    fn test_missing_type_and_zone_are_inferred() {
        let request: AdvisoryRequest = serde_json::from_str(
            r#"{"shot_distance": 23.2, "loc_x": -22.5, "loc_y": 5.0, "quarter": 1, "mins_left": 10, "secs_left": 0}"#,
        )
        .unwrap();
        let ctx = request.into_context();
        assert_eq!(ctx.shot_type, ShotType::ThreePoint);
        assert_eq!(ctx.zone, CourtZone::CornerThreeLeft);
        assert_eq!(ctx.position, Position::PointGuard);
        assert_eq!(ctx.defender_distance, None);
    }

    #[test]
    fn test_bad_json_is_serialization_error() {
        let err = advise_json(&advisor(0.4), "{\"shot_distance\": }").unwrap_err();
        assert_eq!(err.code(), "SERIALIZATION");
    }

    #[test]
    fn test_envelope_carries_error_code() {
        let bad = TIGHT_MID_RANGE.replace("\"quarter\": 2", "\"quarter\": 0");
        let out = advise_json_response(&advisor(0.4), &bad);
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["success"], false);
        assert_eq!(value["error"]["code"], "INVALID_CONTEXT");
        assert!(value["data"].is_null());
        assert_eq!(value["schema_version"], 1);
    }

    #[test]
    fn test_envelope_success() {
        let out = advise_json_response(&advisor(0.42), TIGHT_MID_RANGE);
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["success"], true);
        assert_eq!(value["data"]["decision"], "PASS");
    }

    #[test]
    fn test_result_matches_its_schema() {
        let schema = serde_json::to_value(result_schema()).unwrap();
        let compiled = jsonschema::JSONSchema::compile(&schema).unwrap();
        for p in [0.42, 0.9] {
            let out = advise_json(&advisor(p), TIGHT_MID_RANGE).unwrap();
            let instance: serde_json::Value = serde_json::from_str(&out).unwrap();
            assert!(compiled.is_valid(&instance), "result for p={} violates schema", p);
        }
    }

    #[test]
    fn test_request_matches_its_schema() {
        let schema = serde_json::to_value(request_schema()).unwrap();
        let compiled = jsonschema::JSONSchema::compile(&schema).unwrap();
        let canonical = serde_json::json!({
            "shot_distance": 24.0, "loc_x": 0.0, "loc_y": 24.0,
            "shot_type": "THREE_POINT", "zone": "ABOVE_BREAK_THREE",
            "quarter": 4, "mins_left": 0, "secs_left": 18, "position": "PG"
        });
        assert!(compiled.is_valid(&canonical));
        let missing_quarter = serde_json::json!({"shot_distance": 24.0, "loc_x": 0.0, "loc_y": 24.0});
        assert!(!compiled.is_valid(&missing_quarter));
    }
}
