pub mod blog_extractor;
pub mod doc_extractor;
pub mod prompt_builder;

pub use blog_extractor::BlogExtractor;
pub use doc_extractor::DocExtractor;
pub use prompt_builder::PromptBuilder;
