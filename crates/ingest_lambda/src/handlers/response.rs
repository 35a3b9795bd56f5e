use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiGatewayResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub headers: Value,
    pub body: String,
}

/// Wraps a human-readable message in the `{"message": ...}` body every
/// endpoint of this pipeline responds with.
pub fn message_response(status_code: u16, message: impl Into<String>) -> ApiGatewayResponse {
    custom_response(status_code, json!({ "message": message.into() }), None)
}

pub fn custom_response(
    status_code: u16,
    payload: Value,
    headers: Option<Value>,
) -> ApiGatewayResponse {
    ApiGatewayResponse {
        status_code,
        headers: headers.unwrap_or_else(|| json!({"Content-Type": "application/json"})),
        body: payload.to_string(),
    }
}
