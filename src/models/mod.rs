pub mod article;
pub mod batch;
pub mod document;
pub mod loaders;
pub mod work_item;

pub use article::{BlogArticle, CONTENT_NOT_FOUND};
pub use batch::{
    BatchReport, BatchSummary, ContentsPayload, DirectPayload, ExtractedContent, ExtractionBatch,
    HandlerResponse, PromptsPayload, QueueEvent, QueueRecord, SourcedContent,
};
pub use document::Document;
pub use loaders::{load_table, TableRow};
pub use work_item::{RawWorkItem, WorkItem};
