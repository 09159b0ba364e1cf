//! Orchestration layer
//!
//! Batch iteration and process wiring. No extraction logic lives here.
//!
//! ```text
//! app (one invocation event)
//!     ↓
//! batch_processor (Vec<QueueRecord>)
//!     ↓
//! workflow::ItemFlow (one record)
//!     ↓
//! services (blog / document / prompt)
//!     ↓
//! clients (HTTP, Docs API, credentials, queue)
//! ```
//!
//! `producer` sits beside this chain: table file -> queue.

pub mod app;
pub mod batch_processor;
pub mod producer;

pub use app::App;
pub use batch_processor::BatchProcessor;
pub use producer::{ProduceStats, Producer};
