use crate::error::ExtractError;
use serde::{Deserialize, Serialize};

/// Body sentinel used when the page has no content region.
pub const CONTENT_NOT_FOUND: &str = "content not found";

/// Metadata and body text of one blog post.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BlogArticle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authors: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_date: Option<String>,
    #[serde(default)]
    pub categories: Vec<String>,
    pub content: String,
}

impl BlogArticle {
    /// Legacy rendering of a failed fetch: empty metadata, sentinel body.
    pub fn failed(err: &ExtractError) -> Self {
        Self {
            content: err.to_sentinel(),
            ..Default::default()
        }
    }

    pub fn has_content(&self) -> bool {
        !self.content.is_empty() && self.content != CONTENT_NOT_FOUND
    }
}
