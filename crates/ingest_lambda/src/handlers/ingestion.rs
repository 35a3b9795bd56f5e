use ingest_core::contract::{
    new_correlation_id, parse_message_body, FailureEnvelope, QueuedEnvelope,
};
use lambda_runtime::tracing;
use serde_json::Value;

use crate::adapters::queue::MessageQueue;
use crate::handlers::response::{message_response, ApiGatewayResponse};

pub const API_KEY_HEADER: &str = "x-api-key";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestionConfig {
    pub work_queue_url: String,
    pub failure_queue_url: String,
    pub api_key: String,
}

/// Raised only when the failure queue itself cannot be written; everything
/// else maps to a structured response for the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestionError {
    pub message: String,
}

/// Authenticates the request, validates the body, and enqueues the wrapped
/// payload on the work queue. Any failure past validation lands a
/// `FailureEnvelope` on the failure queue instead; exactly one of the two
/// queues is written per accepted request.
pub fn handle_ingestion_event(
    event: Value,
    config: &IngestionConfig,
    queue: &dyn MessageQueue,
) -> Result<ApiGatewayResponse, IngestionError> {
    let correlation_id = new_correlation_id();
    tracing::info!(%correlation_id, "ingestion started");

    let response = ingest(&event, &correlation_id, config, queue);
    match &response {
        Ok(response) => {
            tracing::info!(%correlation_id, status_code = response.status_code, "ingestion finished")
        }
        Err(error) => {
            tracing::error!(%correlation_id, error = %error.message, "ingestion finished with unrecoverable error")
        }
    }
    response
}

fn ingest(
    event: &Value,
    correlation_id: &str,
    config: &IngestionConfig,
    queue: &dyn MessageQueue,
) -> Result<ApiGatewayResponse, IngestionError> {
    if header_value(event, API_KEY_HEADER) != Some(config.api_key.as_str()) {
        return Ok(message_response(
            401,
            format!("Unauthorized. CorrelationId: {correlation_id}."),
        ));
    }

    let raw_body = event.get("body").and_then(Value::as_str);
    let message = match parse_message_body(raw_body) {
        Ok(value) => value,
        Err(error) => {
            return Ok(message_response(
                400,
                format!("Invalid request. {error}. CorrelationId: {correlation_id}."),
            ));
        }
    };

    match enqueue_message(correlation_id, message, config, queue) {
        Ok(()) => Ok(message_response(
            200,
            format!("Message ingested. CorrelationId: {correlation_id}."),
        )),
        Err(error) => {
            tracing::error!(%correlation_id, %error, "failed to ingest message");
            record_failure(correlation_id, &error, raw_body, config, queue)?;
            Ok(message_response(
                500,
                format!(
                    "Internal server error. CorrelationId: {correlation_id}. Error message: {error}."
                ),
            ))
        }
    }
}

fn enqueue_message(
    correlation_id: &str,
    message: Value,
    config: &IngestionConfig,
    queue: &dyn MessageQueue,
) -> Result<(), String> {
    let envelope = QueuedEnvelope {
        correlation_id: correlation_id.to_string(),
        message,
    };
    let body = serde_json::to_string(&envelope)
        .map_err(|error| format!("failed to serialize queued envelope: {error}"))?;

    queue.send(&config.work_queue_url, &body)
}

fn record_failure(
    correlation_id: &str,
    error: &str,
    raw_body: Option<&str>,
    config: &IngestionConfig,
    queue: &dyn MessageQueue,
) -> Result<(), IngestionError> {
    let envelope = FailureEnvelope {
        correlation_id: correlation_id.to_string(),
        error: error.to_string(),
        message: raw_body.map(str::to_string),
    };
    let body = serde_json::to_string(&envelope).map_err(|error| IngestionError {
        message: format!("failed to serialize failure envelope: {error}"),
    })?;

    queue
        .send(&config.failure_queue_url, &body)
        .map_err(|error| IngestionError {
            message: format!("failed to record ingestion failure: {error}"),
        })
}

fn header_value<'a>(event: &'a Value, name: &str) -> Option<&'a str> {
    event
        .get("headers")
        .and_then(|headers| headers.get(name))
        .and_then(Value::as_str)
}
