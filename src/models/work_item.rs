use serde::{Deserialize, Serialize};

/// One public-blog / reference-document URL pair.
///
/// This is also the queue message body and the `source_info` of every
/// extracted item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkItem {
    pub aws_blog_url: String,
    pub google_doc_url: String,
}

/// A queue message body before field validation.
///
/// Both fields are optional so a partial message still parses and can be
/// reported as "missing field" instead of "invalid JSON".
#[derive(Debug, Default, Deserialize)]
pub struct RawWorkItem {
    #[serde(default)]
    pub aws_blog_url: Option<String>,
    #[serde(default)]
    pub google_doc_url: Option<String>,
}

impl WorkItem {
    pub fn new(aws_blog_url: impl Into<String>, google_doc_url: impl Into<String>) -> Self {
        Self {
            aws_blog_url: aws_blog_url.into(),
            google_doc_url: google_doc_url.into(),
        }
    }

    /// Build from two optional cells; `None` if either is missing or blank.
    pub fn from_parts(aws_blog_url: Option<&str>, google_doc_url: Option<&str>) -> Option<Self> {
        let aws = aws_blog_url.map(str::trim).filter(|s| !s.is_empty())?;
        let gdoc = google_doc_url.map(str::trim).filter(|s| !s.is_empty())?;
        Some(Self::new(aws, gdoc))
    }

    /// The JSON string submitted as one queue message.
    pub fn to_message_body(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl RawWorkItem {
    pub fn into_work_item(self) -> Option<WorkItem> {
        WorkItem::from_parts(self.aws_blog_url.as_deref(), self.google_doc_url.as_deref())
    }
}
