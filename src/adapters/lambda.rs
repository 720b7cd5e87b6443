//! Lambda function URL / API Gateway proxy events.
//!
//! Payload v2 carries the method under `requestContext.http.method`, v1 under
//! `httpMethod`. Both are accepted.

use crate::core::handler::{error_response, handle};
use crate::domain::ports::{InboundRequest, OutboundResponse};
use crate::utils::error::{PredictorError, Result};
use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionUrlEvent {
    pub http_method: Option<String>,
    pub request_context: Option<RequestContext>,
    pub body: Option<String>,
    #[serde(default, deserialize_with = "null_as_false")]
    pub is_base64_encoded: bool,
}

fn null_as_false<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestContext {
    pub http: Option<HttpDescription>,
    pub http_method: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HttpDescription {
    pub method: Option<String>,
}

impl FunctionUrlEvent {
    pub fn method(&self) -> &str {
        let context = self.request_context.as_ref();

        context
            .and_then(|ctx| ctx.http.as_ref())
            .and_then(|http| http.method.as_deref())
            .or(self.http_method.as_deref())
            .or_else(|| context.and_then(|ctx| ctx.http_method.as_deref()))
            .unwrap_or("POST")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionUrlResponse {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    pub is_base64_encoded: bool,
}

impl From<OutboundResponse> for FunctionUrlResponse {
    fn from(response: OutboundResponse) -> Self {
        Self {
            status_code: response.status,
            headers: response.headers.into_iter().collect(),
            body: response.body,
            is_base64_encoded: false,
        }
    }
}

pub struct LambdaRequest {
    method: String,
    body: Option<String>,
    is_base64_encoded: bool,
}

impl From<FunctionUrlEvent> for LambdaRequest {
    fn from(event: FunctionUrlEvent) -> Self {
        Self {
            method: event.method().to_string(),
            body: event.body,
            is_base64_encoded: event.is_base64_encoded,
        }
    }
}

#[async_trait]
impl InboundRequest for LambdaRequest {
    fn method(&self) -> &str {
        &self.method
    }

    async fn read_body(&mut self) -> Result<Vec<u8>> {
        let Some(body) = self.body.take() else {
            return Ok(Vec::new());
        };

        if !self.is_base64_encoded {
            return Ok(body.into_bytes());
        }

        STANDARD
            .decode(body.as_bytes())
            .map_err(|e| PredictorError::BodyEncoding {
                message: format!("invalid base64 body: {}", e),
            })
    }
}

pub async fn handle_event(event: FunctionUrlEvent) -> FunctionUrlResponse {
    handle(LambdaRequest::from(event)).await.into()
}

/// Entry point for untyped invocation payloads. An event that does not fit
/// `FunctionUrlEvent` still gets the regular JSON error response.
pub async fn handle_raw_event(event: Value) -> FunctionUrlResponse {
    match serde_json::from_value::<FunctionUrlEvent>(event) {
        Ok(event) => handle_event(event).await,
        Err(e) => error_response(&PredictorError::MalformedBody(e)).into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn event(value: serde_json::Value) -> FunctionUrlEvent {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_method_lookup_order() {
        let v2 = event(json!({"requestContext": {"http": {"method": "OPTIONS"}}}));
        assert_eq!(v2.method(), "OPTIONS");

        let v1 = event(json!({"httpMethod": "GET", "requestContext": {}}));
        assert_eq!(v1.method(), "GET");

        let nested_v1 = event(json!({"requestContext": {"httpMethod": "PUT"}}));
        assert_eq!(nested_v1.method(), "PUT");

        assert_eq!(event(json!({})).method(), "POST");
    }

    #[tokio::test]
    async fn test_v2_post_event() {
        let response = handle_event(event(json!({
            "requestContext": {"http": {"method": "POST"}},
            "body": "{\"x\":0,\"y\":0,\"vx\":1,\"vy\":0,\"gravity\":1}",
            "isBase64Encoded": false
        })))
        .await;

        assert_eq!(response.status_code, 200);
        assert_eq!(response.headers["Access-Control-Allow-Origin"], "*");
        let body: serde_json::Value = serde_json::from_str(response.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["predictedY"].as_f64(), Some(5525.0));
    }

    #[tokio::test]
    async fn test_base64_body_is_decoded() {
        let encoded = STANDARD.encode(r#"{"vx": 2, "gravity": 0}"#);
        let response = handle_event(event(json!({
            "httpMethod": "POST",
            "body": encoded,
            "isBase64Encoded": true
        })))
        .await;

        assert_eq!(response.status_code, 200);
        let body: serde_json::Value = serde_json::from_str(response.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["predictedX"].as_f64(), Some(100.0));
        assert_eq!(body["predictedY"].as_f64(), Some(0.0));
    }

    #[tokio::test]
    async fn test_invalid_base64_is_error_result() {
        let response = handle_event(event(json!({
            "httpMethod": "POST",
            "body": "***",
            "isBase64Encoded": true
        })))
        .await;

        assert_eq!(response.status_code, 500);
        let body: serde_json::Value = serde_json::from_str(response.body.as_deref().unwrap()).unwrap();
        assert!(body["error"].as_str().unwrap().starts_with("invalid base64 body"));
    }

    #[tokio::test]
    async fn test_null_base64_flag_means_plain_body() {
        let response = handle_raw_event(json!({
            "httpMethod": "POST",
            "body": "{}",
            "isBase64Encoded": null
        }))
        .await;

        assert_eq!(response.status_code, 200);
        let body: serde_json::Value = serde_json::from_str(response.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["predictedX"].as_f64(), Some(50.0));
    }

    #[tokio::test]
    async fn test_malformed_event_is_error_result() {
        let response = handle_raw_event(json!({
            "requestContext": {"http": {"method": "POST"}},
            "body": 5
        }))
        .await;

        assert_eq!(response.status_code, 500);
        assert_eq!(response.headers["Access-Control-Allow-Origin"], "*");
        assert_eq!(response.headers["Content-Type"], "application/json");
        let body: serde_json::Value = serde_json::from_str(response.body.as_deref().unwrap()).unwrap();
        assert!(body["error"].as_str().unwrap().contains("invalid type"));
        assert!(body.get("predictedX").is_none());
    }

    #[tokio::test]
    async fn test_options_event_has_no_body() {
        let response = handle_event(event(json!({
            "requestContext": {"http": {"method": "OPTIONS"}}
        })))
        .await;

        assert_eq!(response.status_code, 204);
        assert_eq!(response.body, None);
        assert_eq!(response.headers["Access-Control-Allow-Methods"], "POST, OPTIONS");

        let wire = serde_json::to_value(&response).unwrap();
        assert_eq!(wire["statusCode"], 204);
        assert!(wire.get("body").is_none());
    }
}
