use aws_lambda_events::event::sqs::{BatchItemFailure, SqsBatchResponse, SqsEvent, SqsMessage};
use ingest_core::contract::{new_correlation_id, QueuedEnvelope};
use lambda_runtime::tracing;

use crate::adapters::queue::MessageQueue;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsumptionConfig {
    pub work_queue_url: String,
}

/// Business-logic seam for consumed envelopes. The pipeline itself only
/// moves messages; what happens to them is plugged in here.
pub trait MessageProcessor {
    fn process(&self, envelope: &QueuedEnvelope) -> Result<(), String>;
}

/// Placeholder processor until the actual data processing lands.
pub struct NoopProcessor;

impl MessageProcessor for NoopProcessor {
    fn process(&self, _envelope: &QueuedEnvelope) -> Result<(), String> {
        Ok(())
    }
}

/// Processes a delivered batch in order, deleting each message from the work
/// queue after it is handled. Failed items are reported back to the platform
/// so only they are redelivered; items already deleted are never retried.
pub fn handle_consumption_event(
    event: SqsEvent,
    config: &ConsumptionConfig,
    queue: &dyn MessageQueue,
    processor: &dyn MessageProcessor,
) -> SqsBatchResponse {
    let correlation_id = new_correlation_id();
    tracing::info!(%correlation_id, records = event.records.len(), "consumption started");

    let mut batch_item_failures = Vec::new();
    for record in &event.records {
        if let Err(error) = consume_record(record, config, queue, processor) {
            tracing::error!(
                %correlation_id,
                message_id = record.message_id.as_deref().unwrap_or("<unknown>"),
                %error,
                "failed to consume record"
            );
            if let Some(message_id) = record.message_id.clone() {
                batch_item_failures.push(BatchItemFailure {
                    item_identifier: message_id,
                });
            }
        }
    }

    tracing::info!(
        %correlation_id,
        failed = batch_item_failures.len(),
        "consumption finished"
    );
    SqsBatchResponse {
        batch_item_failures,
    }
}

fn consume_record(
    record: &SqsMessage,
    config: &ConsumptionConfig,
    queue: &dyn MessageQueue,
    processor: &dyn MessageProcessor,
) -> Result<(), String> {
    let body = record
        .body
        .as_deref()
        .ok_or_else(|| "SQS record body must be a string".to_string())?;
    let envelope: QueuedEnvelope = serde_json::from_str(body)
        .map_err(|error| format!("invalid queued envelope: {error}"))?;

    processor.process(&envelope)?;

    let receipt_handle = record
        .receipt_handle
        .as_deref()
        .ok_or_else(|| "SQS record is missing a receipt handle".to_string())?;
    queue.delete(&config.work_queue_url, receipt_handle)
}
