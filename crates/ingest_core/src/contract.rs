use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// Wire format for messages placed on the work queue.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QueuedEnvelope {
    pub correlation_id: String,
    pub message: Value,
}

/// Wire format for messages placed on the failure queue. `message` carries
/// the raw, unparsed request body so failed ingestions can be replayed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FailureEnvelope {
    pub correlation_id: String,
    pub error: String,
    pub message: Option<String>,
}

pub fn new_correlation_id() -> String {
    Uuid::new_v4().to_string()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Validates the inbound request body. Anything that parses as JSON is
/// accepted; no payload schema is enforced beyond well-formedness.
pub fn parse_message_body(body: Option<&str>) -> Result<Value, ValidationError> {
    let Some(raw) = body else {
        return Err(ValidationError::new("Missing message body"));
    };

    serde_json::from_str(raw)
        .map_err(|error| ValidationError::new(format!("Malformed JSON body: {error}")))
}
