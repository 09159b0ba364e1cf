//! Queue feeder - orchestration layer
//!
//! Reads a table of URL pairs and submits one message per complete row.
//! Table problems abort before the first send; a failed send only costs
//! its own row.

use crate::clients::MessageQueue;
use crate::error::AppResult;
use crate::models::{load_table, WorkItem};
use serde::Serialize;
use std::path::Path;
use std::sync::Arc;
use tracing::{error, info, warn};

/// Row counts of one producer run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ProduceStats {
    /// Data rows in the table
    pub attempted: usize,
    /// Rows the queue accepted
    pub success: usize,
    /// Rows with a missing URL
    pub skipped: usize,
    /// Rows the queue rejected
    pub failed: usize,
}

pub struct Producer {
    queue: Arc<dyn MessageQueue>,
}

impl Producer {
    pub fn new(queue: Arc<dyn MessageQueue>) -> Self {
        Self { queue }
    }

    pub async fn process_file(&self, path: &Path) -> AppResult<ProduceStats> {
        info!("📁 processing file: {}", path.display());

        let rows = load_table(path)?;
        let total = rows.len();
        let mut stats = ProduceStats {
            attempted: total,
            ..Default::default()
        };

        info!(
            "✓ found {} rows, sending to {}",
            total,
            self.queue.destination()
        );

        for row in rows {
            let Some(item) =
                WorkItem::from_parts(row.aws_blog_url.as_deref(), row.google_doc_url.as_deref())
            else {
                warn!("⚠️ row {} skipped: missing URL", row.row_number);
                stats.skipped += 1;
                continue;
            };

            match self.send(&item).await {
                Ok(message_id) => {
                    info!(
                        "✓ row {}/{} sent, message id: {}",
                        row.row_number, total, message_id
                    );
                    stats.success += 1;
                }
                Err(e) => {
                    error!("❌ row {} failed: {}", row.row_number, e);
                    stats.failed += 1;
                }
            }
        }

        Ok(stats)
    }

    async fn send(&self, item: &WorkItem) -> AppResult<String> {
        let body = item.to_message_body()?;
        self.queue.send_message(&body).await
    }
}
