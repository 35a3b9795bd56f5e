use std::sync::Arc;

use aws_lambda_events::event::sqs::{SqsBatchResponse, SqsEvent};
use ingest_lambda::adapters::queue::SqsMessageQueue;
use ingest_lambda::handlers::consumption::{
    handle_consumption_event, ConsumptionConfig, NoopProcessor,
};
use lambda_runtime::{run, service_fn, tracing, Error, LambdaEvent};

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing::init_default_subscriber();

    let config = Arc::new(ConsumptionConfig {
        work_queue_url: std::env::var("DATA_INGESTION_QUEUE_URL")
            .map_err(|_| Error::from("DATA_INGESTION_QUEUE_URL must be configured"))?,
    });

    let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let queue = Arc::new(SqsMessageQueue::new(aws_sdk_sqs::Client::new(&aws_config)));
    let processor = Arc::new(NoopProcessor);

    run(service_fn(move |event: LambdaEvent<SqsEvent>| {
        let config = config.clone();
        let queue = queue.clone();
        let processor = processor.clone();

        async move {
            let response: SqsBatchResponse = handle_consumption_event(
                event.payload,
                &config,
                queue.as_ref(),
                processor.as_ref(),
            );
            Ok::<_, Error>(response)
        }
    }))
    .await
}
