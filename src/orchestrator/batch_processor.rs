//! Batch message processor - orchestration layer
//!
//! Walks every record of one queue event through [`ItemFlow`], strictly in
//! order, and collects the items that made it. A bad record never stops
//! its siblings.

use crate::models::{BatchReport, BatchSummary, ExtractionBatch, QueueRecord};
use crate::workflow::{ItemCtx, ItemFlow, ItemOutcome};
use tracing::info;

pub struct BatchProcessor {
    flow: ItemFlow,
}

impl BatchProcessor {
    pub fn new(flow: ItemFlow) -> Self {
        Self { flow }
    }

    pub fn flow(&self) -> &ItemFlow {
        &self.flow
    }

    pub async fn process(&self, records: &[QueueRecord]) -> BatchReport {
        let total = records.len();
        log_batch_start(total);

        let mut batch = ExtractionBatch::default();
        for (idx, record) in records.iter().enumerate() {
            let ctx = ItemCtx::new(idx + 1, total, record.message_id.clone());
            match self.flow.run(record, &ctx).await {
                ItemOutcome::Extracted(content) => batch.results.push(content),
                ItemOutcome::Skipped(_) => {}
            }
        }

        let summary = BatchSummary {
            processed: batch.results.len(),
            attempted: total,
        };
        log_batch_complete(&summary);

        BatchReport { batch, summary }
    }
}

// ========== Logging helpers ==========

fn log_batch_start(total: usize) {
    info!("{}", "=".repeat(60));
    info!("📦 processing batch of {} messages", total);
    info!("{}", "=".repeat(60));
}

fn log_batch_complete(summary: &BatchSummary) {
    info!("{}", "─".repeat(60));
    info!(
        "✓ batch complete: extracted {}/{}",
        summary.processed, summary.attempted
    );
    info!("{}", "─".repeat(60));
}
