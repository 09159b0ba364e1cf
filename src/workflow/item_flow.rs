//! Item processing flow - workflow layer
//!
//! Defines the full handling of one queue message:
//! 1. parse body -> work item
//! 2. blog body extraction + document extraction
//! 3. include, or skip with a logged reason

use std::fmt;
use tracing::{info, warn};

use crate::error::ExtractError;
use crate::models::{ExtractedContent, QueueRecord, RawWorkItem, WorkItem, CONTENT_NOT_FOUND};
use crate::services::{BlogExtractor, DocExtractor};
use crate::workflow::item_ctx::{BodyPreview, ItemCtx};
use serde_json::Value as JsonValue;

/// Why a message did not produce an item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    InvalidJson(String),
    MissingFields,
    BlogFailed(ExtractError),
    BodyNotFound,
    EmptyBody,
    DocumentFailed(ExtractError),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::InvalidJson(e) => write!(f, "message body is not valid JSON: {}", e),
            SkipReason::MissingFields => {
                write!(f, "message is missing aws_blog_url or google_doc_url")
            }
            SkipReason::BlogFailed(e) => write!(f, "blog extraction failed ({}): {}", e.kind(), e),
            SkipReason::BodyNotFound => write!(f, "blog page has no content region"),
            SkipReason::EmptyBody => write!(f, "blog body is empty"),
            SkipReason::DocumentFailed(e) => {
                write!(f, "document extraction failed ({}): {}", e.kind(), e)
            }
        }
    }
}

/// Outcome of one message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemOutcome {
    Extracted(ExtractedContent),
    Skipped(SkipReason),
}

/// Item processing flow
///
/// - owns the two extractors
/// - decides include or skip for a single message
/// - never fails; every problem becomes a [`SkipReason`]
pub struct ItemFlow {
    blog: BlogExtractor,
    docs: DocExtractor,
}

impl ItemFlow {
    pub fn new(blog: BlogExtractor, docs: DocExtractor) -> Self {
        Self { blog, docs }
    }

    pub fn blog(&self) -> &BlogExtractor {
        &self.blog
    }

    pub fn docs(&self) -> &DocExtractor {
        &self.docs
    }

    pub async fn run(&self, record: &QueueRecord, ctx: &ItemCtx) -> ItemOutcome {
        let Some(body) = record.body_text() else {
            let raw = record.body.to_string();
            info!("{} 📨 body: {}", ctx, BodyPreview::new(&raw));
            let reason = format!("body is {}, not a string", json_kind(&record.body));
            return self.skip(ctx, SkipReason::InvalidJson(reason));
        };
        info!("{} 📨 body: {}", ctx, BodyPreview::new(body));

        let item = match parse_work_item(body) {
            Ok(item) => item,
            Err(reason) => return self.skip(ctx, reason),
        };

        match self.extract_pair(&item, ctx).await {
            Ok(content) => {
                info!(
                    "{} ✓ extracted {} / {} chars",
                    ctx,
                    content.original_article_content.chars().count(),
                    content.translated_article_content.chars().count()
                );
                ItemOutcome::Extracted(content)
            }
            Err(reason) => self.skip(ctx, reason),
        }
    }

    async fn extract_pair(
        &self,
        item: &WorkItem,
        ctx: &ItemCtx,
    ) -> Result<ExtractedContent, SkipReason> {
        info!("{} 🔍 blog: {}", ctx, item.aws_blog_url);
        let original = self.blog.extract_body_only(&item.aws_blog_url).await;

        info!("{} 🔍 document: {}", ctx, item.google_doc_url);
        let translated = self.docs.extract(&item.google_doc_url).await;

        let original = original.map_err(SkipReason::BlogFailed)?;
        if original == CONTENT_NOT_FOUND {
            return Err(SkipReason::BodyNotFound);
        }
        if original.is_empty() {
            return Err(SkipReason::EmptyBody);
        }
        let translated = translated.map_err(SkipReason::DocumentFailed)?;

        Ok(ExtractedContent {
            original_article_content: original,
            translated_article_content: translated,
            source_info: item.clone(),
        })
    }

    fn skip(&self, ctx: &ItemCtx, reason: SkipReason) -> ItemOutcome {
        warn!("{} ⚠️ skipped: {}", ctx, reason);
        ItemOutcome::Skipped(reason)
    }
}

/// Decode a message body into a complete work item.
///
/// The body must be a JSON object; arrays and scalars are `InvalidJson`
/// even when they happen to line up with the two fields.
pub fn parse_work_item(body: &str) -> Result<WorkItem, SkipReason> {
    let value: JsonValue =
        serde_json::from_str(body).map_err(|e| SkipReason::InvalidJson(e.to_string()))?;
    if !value.is_object() {
        return Err(SkipReason::InvalidJson(format!(
            "expected a JSON object, found {}",
            json_kind(&value)
        )));
    }
    let raw: RawWorkItem =
        serde_json::from_value(value).map_err(|e| SkipReason::InvalidJson(e.to_string()))?;
    raw.into_work_item().ok_or(SkipReason::MissingFields)
}

fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "an array",
        JsonValue::Object(_) => "an object",
    }
}
