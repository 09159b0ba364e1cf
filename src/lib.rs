//! # Review Feed
//!
//! Pulls an English blog post and its translated reference document,
//! extracts plain text from both, and packages the pair for a downstream
//! translation review.
//!
//! ## Layers
//!
//! ### ① Clients
//! - `clients/` - the only code that talks to the network
//! - `PageFetcher` / `DocumentSource` / `DocumentCredentialProvider` /
//!   `MessageQueue` traits, one production implementation each
//!
//! ### ② Services
//! - `services/` - "what can I extract", one URL at a time
//! - `BlogExtractor` - metadata + body, or body only
//! - `DocExtractor` - document id parsing and paragraph flattening
//! - `PromptBuilder` - fills the bundled review prompt
//!
//! ### ③ Workflow
//! - `workflow/` - one queue message from body to include/skip
//!
//! ### ④ Orchestration
//! - `orchestrator/batch_processor` - every message of one event, in order
//! - `orchestrator/producer` - table file to queue
//! - `orchestrator/app` - wiring and event dispatch

pub mod clients;
pub mod config;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

pub use config::{Config, OutputMode};
pub use error::{is_sentinel, AppError, AppResult, ExtractError};
pub use models::{ExtractionBatch, WorkItem};
pub use orchestrator::{App, BatchProcessor, ProduceStats, Producer};
pub use workflow::{ItemFlow, ItemOutcome, SkipReason};
