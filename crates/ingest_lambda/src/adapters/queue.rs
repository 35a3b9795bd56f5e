/// Message queue operations the handlers depend on. One implementation per
/// external queue service; tests inject capturing fakes.
pub trait MessageQueue {
    fn send(&self, queue_url: &str, body: &str) -> Result<(), String>;
    fn delete(&self, queue_url: &str, receipt_handle: &str) -> Result<(), String>;
}

#[derive(Clone)]
pub struct SqsMessageQueue {
    client: aws_sdk_sqs::Client,
}

impl SqsMessageQueue {
    pub fn new(client: aws_sdk_sqs::Client) -> Self {
        Self { client }
    }
}

impl MessageQueue for SqsMessageQueue {
    fn send(&self, queue_url: &str, body: &str) -> Result<(), String> {
        let client = self.client.clone();
        let queue_url = queue_url.to_string();
        let body = body.to_string();

        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async move {
                client
                    .send_message()
                    .queue_url(queue_url)
                    .message_body(body)
                    .send()
                    .await
                    .map(|_| ())
                    .map_err(|error| format!("failed to send message to sqs: {error}"))
            })
        })
    }

    fn delete(&self, queue_url: &str, receipt_handle: &str) -> Result<(), String> {
        let client = self.client.clone();
        let queue_url = queue_url.to_string();
        let receipt_handle = receipt_handle.to_string();

        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async move {
                client
                    .delete_message()
                    .queue_url(queue_url)
                    .receipt_handle(receipt_handle)
                    .send()
                    .await
                    .map(|_| ())
                    .map_err(|error| format!("failed to delete message from sqs: {error}"))
            })
        })
    }
}
