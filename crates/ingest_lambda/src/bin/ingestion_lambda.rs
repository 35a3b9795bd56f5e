use std::sync::Arc;

use ingest_lambda::adapters::queue::SqsMessageQueue;
use ingest_lambda::handlers::ingestion::{handle_ingestion_event, IngestionConfig};
use ingest_lambda::handlers::response::ApiGatewayResponse;
use lambda_runtime::{run, service_fn, tracing, Error, LambdaEvent};
use serde_json::Value;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing::init_default_subscriber();

    let config = Arc::new(IngestionConfig {
        work_queue_url: std::env::var("DATA_INGESTION_QUEUE_URL")
            .map_err(|_| Error::from("DATA_INGESTION_QUEUE_URL must be configured"))?,
        failure_queue_url: std::env::var("DATA_INGESTION_FAILURE_QUEUE_URL")
            .map_err(|_| Error::from("DATA_INGESTION_FAILURE_QUEUE_URL must be configured"))?,
        api_key: std::env::var("DATA_INGESTION_API_KEY")
            .map_err(|_| Error::from("DATA_INGESTION_API_KEY must be configured"))?,
    });

    let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let queue = Arc::new(SqsMessageQueue::new(aws_sdk_sqs::Client::new(&aws_config)));

    run(service_fn(move |event: LambdaEvent<Value>| {
        let config = config.clone();
        let queue = queue.clone();

        async move {
            let response: ApiGatewayResponse =
                handle_ingestion_event(event.payload, &config, queue.as_ref())
                    .map_err(|error| Error::from(error.message))?;
            Ok::<_, Error>(response)
        }
    }))
    .await
}
