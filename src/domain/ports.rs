use crate::domain::model::TrajectoryRequest;
use crate::utils::error::Result;
use async_trait::async_trait;
use serde_json::{Map, Value};

/// A request as seen by the handler, independent of the hosting runtime.
#[async_trait]
pub trait InboundRequest: Send {
    fn method(&self) -> &str;

    /// Consumes the body. A second call returns an empty body.
    async fn read_body(&mut self) -> Result<Vec<u8>>;

    async fn json_body(&mut self) -> Result<TrajectoryRequest> {
        let bytes = self.read_body().await?;
        parse_trajectory_request(&bytes)
    }
}

/// Only JSON objects are accepted; arrays and scalars are rejected here
/// rather than being mapped positionally onto the struct.
pub fn parse_trajectory_request(bytes: &[u8]) -> Result<TrajectoryRequest> {
    let object: Map<String, Value> = serde_json::from_slice(bytes)?;
    Ok(serde_json::from_value(Value::Object(object))?)
}

#[derive(Debug, Clone, PartialEq)]
pub struct OutboundResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl OutboundResponse {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

pub trait ConfigProvider: Send + Sync {
    fn host(&self) -> &str;
    fn port(&self) -> u16;
    fn max_body_bytes(&self) -> usize;
}
