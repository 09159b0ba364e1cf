//! Queue client
//!
//! Submits producer messages to the work queue.

use crate::error::{AppError, AppResult, QueueError};
use async_trait::async_trait;
use aws_sdk_sqs::error::DisplayErrorContext;
use tracing::debug;

/// Destination for serialized work items.
#[async_trait]
pub trait MessageQueue: Send + Sync {
    /// Address of the queue, for logs.
    fn destination(&self) -> &str;

    /// Submit one message; returns the id the queue assigned to it.
    async fn send_message(&self, body: &str) -> AppResult<String>;
}

/// SQS-backed [`MessageQueue`].
pub struct SqsQueue {
    client: aws_sdk_sqs::Client,
    queue_url: String,
}

impl SqsQueue {
    /// Credentials and region come from the standard AWS environment chain.
    pub async fn from_env(queue_url: impl Into<String>) -> Self {
        let sdk_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        Self {
            client: aws_sdk_sqs::Client::new(&sdk_config),
            queue_url: queue_url.into(),
        }
    }
}

#[async_trait]
impl MessageQueue for SqsQueue {
    fn destination(&self) -> &str {
        &self.queue_url
    }

    async fn send_message(&self, body: &str) -> AppResult<String> {
        debug!("SendMessage {} ({} bytes)", self.queue_url, body.len());

        let output = self
            .client
            .send_message()
            .queue_url(&self.queue_url)
            .message_body(body)
            .send()
            .await
            .map_err(|e| {
                AppError::queue_send_failed(&self.queue_url, DisplayErrorContext(&e).to_string())
            })?;

        output.message_id().map(str::to_string).ok_or_else(|| {
            QueueError::MissingMessageId {
                queue_url: self.queue_url.clone(),
            }
            .into()
        })
    }
}
