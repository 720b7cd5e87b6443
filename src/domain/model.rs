use serde::de::{Error as _, Unexpected};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

pub const DEFAULT_X: f64 = 50.0;
pub const DEFAULT_Y: f64 = 0.0;
pub const DEFAULT_VX: f64 = 0.0;
pub const DEFAULT_VY: f64 = 0.0;
pub const DEFAULT_GRAVITY: f64 = 0.15;

/// Launch parameters as sent by the client. Absent and `null` fields both
/// fall back to their defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryRequest {
    #[serde(default, deserialize_with = "lenient_number")]
    pub x: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub y: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub vx: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub vy: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub gravity: Option<f64>,
}

/// Reads the number from its source text, so magnitudes beyond f64 become
/// ±inf instead of an error. Booleans count as 1.0 / 0.0.
fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Bool(flag)) => Ok(Some(if flag { 1.0 } else { 0.0 })),
        Some(Value::Number(number)) => {
            let text = number.to_string();
            text.parse::<f64>()
                .map(Some)
                .map_err(|_| D::Error::invalid_value(Unexpected::Str(&text), &"a number"))
        }
        Some(Value::String(text)) => Err(D::Error::invalid_type(
            Unexpected::Str(&text),
            &"a number",
        )),
        Some(Value::Array(_)) => Err(D::Error::invalid_type(Unexpected::Seq, &"a number")),
        Some(Value::Object(_)) => Err(D::Error::invalid_type(Unexpected::Map, &"a number")),
    }
}

impl TrajectoryRequest {
    pub fn x(&self) -> f64 {
        self.x.unwrap_or(DEFAULT_X)
    }

    pub fn y(&self) -> f64 {
        self.y.unwrap_or(DEFAULT_Y)
    }

    pub fn vx(&self) -> f64 {
        self.vx.unwrap_or(DEFAULT_VX)
    }

    pub fn vy(&self) -> f64 {
        self.vy.unwrap_or(DEFAULT_VY)
    }

    pub fn gravity(&self) -> f64 {
        self.gravity.unwrap_or(DEFAULT_GRAVITY)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PredictionStatus {
    Success,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrajectoryResult {
    pub predicted_x: f64,
    pub predicted_y: f64,
    pub status: PredictionStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResult {
    pub error: String,
}

/// Position and velocity after a simulated step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectileState {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
}

impl From<&TrajectoryRequest> for ProjectileState {
    fn from(request: &TrajectoryRequest) -> Self {
        Self {
            x: request.x(),
            y: request.y(),
            vx: request.vx(),
            vy: request.vy(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_null_and_missing_fields_use_defaults() {
        let request: TrajectoryRequest =
            serde_json::from_value(json!({"x": null, "gravity": null, "extra": "ignored"}))
                .unwrap();

        assert_eq!(request.x(), DEFAULT_X);
        assert_eq!(request.y(), DEFAULT_Y);
        assert_eq!(request.vx(), DEFAULT_VX);
        assert_eq!(request.vy(), DEFAULT_VY);
        assert_eq!(request.gravity(), DEFAULT_GRAVITY);
    }

    #[test]
    fn test_out_of_range_numbers_become_infinite() {
        let request: TrajectoryRequest =
            serde_json::from_str(r#"{"x": 1e400, "vy": -1e400, "gravity": 0.1}"#).unwrap();

        assert_eq!(request.x(), f64::INFINITY);
        assert_eq!(request.vy(), f64::NEG_INFINITY);
        assert_eq!(request.gravity(), 0.1);
    }

    #[test]
    fn test_booleans_count_as_one_and_zero() {
        let request: TrajectoryRequest =
            serde_json::from_value(json!({"vx": true, "gravity": false})).unwrap();

        assert_eq!(request.vx, Some(1.0));
        assert_eq!(request.gravity, Some(0.0));
    }

    #[test]
    fn test_strings_and_containers_are_rejected() {
        for body in [json!({"x": "fifty"}), json!({"y": [1]}), json!({"vx": {"v": 1}})] {
            let err = serde_json::from_value::<TrajectoryRequest>(body).unwrap_err();
            assert!(err.to_string().contains("expected a number"));
        }
    }

    #[test]
    fn test_result_serializes_camel_case() {
        let result = TrajectoryResult {
            predicted_x: 25.0,
            predicted_y: 5525.0,
            status: PredictionStatus::Success,
        };

        let value = serde_json::to_value(result).unwrap();
        assert_eq!(
            value,
            json!({"predictedX": 25.0, "predictedY": 5525.0, "status": "success"})
        );
    }
}
