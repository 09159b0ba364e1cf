//! Item processing context
//!
//! Wraps "which message of this batch am I on", plus a bounded view of
//! the message body for log lines.

use std::fmt::{self, Display};

/// Characters of a message body shown in a log line.
const PREVIEW_CHARS: usize = 200;

#[derive(Debug, Clone)]
pub struct ItemCtx {
    /// 1-based position in the batch (log display only)
    pub index: usize,
    /// Size of the batch
    pub total: usize,
    /// Queue-assigned id, when the event carries one
    pub message_id: Option<String>,
}

impl ItemCtx {
    pub fn new(index: usize, total: usize, message_id: Option<String>) -> Self {
        Self {
            index,
            total,
            message_id,
        }
    }
}

impl Display for ItemCtx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message_id {
            Some(id) => write!(f, "[message {}/{} #{}]", self.index, self.total, id),
            None => write!(f, "[message {}/{}]", self.index, self.total),
        }
    }
}

/// Message body cut at [`PREVIEW_CHARS`] characters when displayed.
pub struct BodyPreview<'a>(&'a str);

impl<'a> BodyPreview<'a> {
    pub fn new(body: &'a str) -> Self {
        Self(body)
    }
}

impl Display for BodyPreview<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.char_indices().nth(PREVIEW_CHARS) {
            Some((cut, _)) => write!(f, "{}...", &self.0[..cut]),
            None => f.write_str(self.0),
        }
    }
}
