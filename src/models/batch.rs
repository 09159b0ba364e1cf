use crate::models::article::BlogArticle;
use crate::models::work_item::WorkItem;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;

// ========== Inbound ==========

/// One delivered queue message.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QueueRecord {
    #[serde(rename = "messageId", default, skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,
    /// Raw message body as delivered. Only a string holding a
    /// JSON-encoded [`WorkItem`] is usable; anything else is skipped later.
    #[serde(default = "empty_object")]
    pub body: JsonValue,
}

fn empty_object() -> JsonValue {
    JsonValue::String("{}".to_string())
}

impl QueueRecord {
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            message_id: None,
            body: JsonValue::String(body.into()),
        }
    }

    /// Decode one entry of `Records`.
    ///
    /// Never fails: an entry that is not a record object keeps its raw
    /// value as the body so the item flow can skip it on its own.
    pub fn from_value(value: JsonValue) -> Self {
        if !value.is_object() {
            return Self {
                message_id: None,
                body: value,
            };
        }
        match serde_json::from_value::<QueueRecord>(value.clone()) {
            Ok(record) => record,
            Err(_) => Self {
                message_id: None,
                body: value,
            },
        }
    }

    /// The body text, when the queue delivered a string.
    pub fn body_text(&self) -> Option<&str> {
        self.body.as_str()
    }
}

/// A batch of queue messages delivered to one extractor invocation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QueueEvent {
    #[serde(rename = "Records", default)]
    pub records: Vec<QueueRecord>,
}

impl QueueEvent {
    /// Record-by-record decoding of an invocation event.
    ///
    /// `None` only when `Records` is missing or not an array; a bad entry
    /// costs that entry alone.
    pub fn from_value(event: &JsonValue) -> Option<Self> {
        let records = event.get("Records")?.as_array()?;
        Some(Self {
            records: records.iter().cloned().map(QueueRecord::from_value).collect(),
        })
    }
}

// ========== Outbound ==========

/// One successfully extracted pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedContent {
    pub original_article_content: String,
    pub translated_article_content: String,
    pub source_info: WorkItem,
}

/// Items extracted from one invocation. Failed items are never present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExtractionBatch {
    pub results: Vec<ExtractedContent>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    /// Items included in the batch
    pub processed: usize,
    /// Messages received
    pub attempted: usize,
}

/// Result of processing one queue event.
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    pub batch: ExtractionBatch,
    pub summary: BatchSummary,
}

impl BatchReport {
    pub fn message(&self) -> String {
        format!(
            "Successfully extracted {} items from {} messages.",
            self.summary.processed, self.summary.attempted
        )
    }
}

/// `{message, extracted_contents}` payload.
#[derive(Debug, Clone, Serialize)]
pub struct ContentsPayload {
    pub message: String,
    pub extracted_contents: Vec<ExtractedContent>,
}

/// `{message, prompts}` payload of the review-prompt output mode.
#[derive(Debug, Clone, Serialize)]
pub struct PromptsPayload {
    pub message: String,
    pub prompts: Vec<serde_json::Value>,
}

/// A source URL together with whatever was extracted from it.
#[derive(Debug, Clone, Serialize)]
pub struct SourcedContent<T> {
    pub source_url: String,
    pub content: T,
}

/// Payload of a direct single-pair request.
#[derive(Debug, Clone, Serialize)]
pub struct DirectPayload {
    pub aws_blog_content: SourcedContent<BlogArticle>,
    pub google_doc_translation: SourcedContent<String>,
}

/// Envelope returned to the invocation environment.
#[derive(Debug, Clone, Serialize)]
pub struct HandlerResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

impl HandlerResponse {
    /// Wrap `payload` as a pretty-printed JSON body.
    pub fn json<T: Serialize>(status_code: u16, payload: &T) -> serde_json::Result<Self> {
        let mut headers = BTreeMap::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        Ok(Self {
            status_code,
            headers,
            body: serde_json::to_string_pretty(payload)?,
        })
    }

    pub fn bad_request(error: &str) -> serde_json::Result<Self> {
        Self::json(400, &serde_json::json!({ "error": error }))
    }
}
