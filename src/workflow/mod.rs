pub mod item_ctx;
pub mod item_flow;

pub use item_ctx::{BodyPreview, ItemCtx};
pub use item_flow::{ItemFlow, ItemOutcome, SkipReason};
