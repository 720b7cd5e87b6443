use crate::core::predictor::TrajectoryPredictor;
use crate::domain::model::{ErrorResult, TrajectoryResult};
use crate::domain::ports::{InboundRequest, OutboundResponse};
use crate::utils::error::{PredictorError, Result};
use serde::Serialize;

pub const ALLOW_ORIGIN: &str = "*";
pub const ALLOW_METHODS: &str = "POST, OPTIONS";
pub const ALLOW_HEADERS: &str = "Content-Type";

/// Maps any inbound request onto a preflight, success or error response.
/// The request path is never consulted.
pub async fn handle<R: InboundRequest>(mut request: R) -> OutboundResponse {
    if request.method().eq_ignore_ascii_case("OPTIONS") {
        return preflight_response();
    }

    match process(&mut request).await {
        Ok(result) => json_response(200, &result),
        Err(e) => error_response(&e),
    }
}

/// 500 with the error's message verbatim in `error`.
pub fn error_response(error: &PredictorError) -> OutboundResponse {
    tracing::debug!("request rejected: {}", error);
    json_response(
        500,
        &ErrorResult {
            error: error.to_string(),
        },
    )
}

async fn process<R: InboundRequest>(request: &mut R) -> Result<TrajectoryResult> {
    let params = request.json_body().await?;
    Ok(TrajectoryPredictor::new().predict(&params))
}

pub fn preflight_response() -> OutboundResponse {
    OutboundResponse {
        status: 204,
        headers: vec![
            header("Access-Control-Allow-Origin", ALLOW_ORIGIN),
            header("Access-Control-Allow-Methods", ALLOW_METHODS),
            header("Access-Control-Allow-Headers", ALLOW_HEADERS),
        ],
        body: None,
    }
}

fn json_response<T: Serialize>(status: u16, payload: &T) -> OutboundResponse {
    let (status, body) = match serde_json::to_string(payload) {
        Ok(body) => (status, body),
        Err(e) => (500, serde_json::json!({ "error": e.to_string() }).to_string()),
    };

    OutboundResponse {
        status,
        headers: vec![
            header("Content-Type", "application/json"),
            header("Access-Control-Allow-Origin", ALLOW_ORIGIN),
        ],
        body: Some(body),
    }
}

fn header(name: &str, value: &str) -> (String, String) {
    (name.to_string(), value.to_string())
}
