//! Review prompt assembly - service layer
//!
//! Fills the bundled translation-review prompt with one extracted pair.

use crate::error::{AppError, AppResult};
use crate::models::ExtractedContent;
use serde_json::{json, Value as JsonValue};

const TEMPLATE: &str = include_str!("../../assets/review_prompt.json");

/// Builds review prompts from a parsed copy of the bundled template.
pub struct PromptBuilder {
    template: JsonValue,
}

impl PromptBuilder {
    pub fn new() -> AppResult<Self> {
        Self::from_template(TEMPLATE)
    }

    /// Template must be a JSON object with a `context` object.
    pub fn from_template(raw: &str) -> AppResult<Self> {
        let template: JsonValue = serde_json::from_str(raw)?;
        if !template.get("context").is_some_and(JsonValue::is_object) {
            return Err(AppError::Other(
                "review prompt template has no `context` object".to_string(),
            ));
        }
        Ok(Self { template })
    }

    /// A fresh prompt with both articles and the source URLs filled in.
    pub fn build(&self, item: &ExtractedContent) -> JsonValue {
        let mut prompt = self.template.clone();
        prompt["context"]["original_article"] = json!(item.original_article_content);
        prompt["context"]["translated_article"] = json!(item.translated_article_content);
        prompt["source_info"] = json!({
            "aws_blog_url": item.source_info.aws_blog_url,
            "google_doc_url": item.source_info.google_doc_url,
        });
        prompt
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WorkItem;

    fn item() -> ExtractedContent {
        ExtractedContent {
            original_article_content: "Amazon S3 is an object store.".to_string(),
            translated_article_content: "Amazon S3 là dịch vụ lưu trữ đối tượng.".to_string(),
            source_info: WorkItem::new(
                "https://aws.amazon.com/blogs/storage/s3/",
                "https://docs.google.com/document/d/S3VN/edit",
            ),
        }
    }

    #[test]
    fn test_build_fills_context() {
        let builder = PromptBuilder::new().unwrap();
        let prompt = builder.build(&item());

        assert_eq!(
            prompt["context"]["original_article"],
            "Amazon S3 is an object store."
        );
        assert_eq!(
            prompt["context"]["translated_article"],
            "Amazon S3 là dịch vụ lưu trữ đối tượng."
        );
        assert_eq!(
            prompt["source_info"]["google_doc_url"],
            "https://docs.google.com/document/d/S3VN/edit"
        );
        assert!(prompt["objectives"].as_array().is_some_and(|o| !o.is_empty()));
    }

    #[test]
    fn test_template_is_not_mutated() {
        let builder = PromptBuilder::new().unwrap();
        let _ = builder.build(&item());
        let second = builder.build(&ExtractedContent {
            original_article_content: "B".to_string(),
            ..item()
        });
        assert_eq!(second["context"]["original_article"], "B");
        assert_eq!(builder.template["context"]["original_article"], "");
    }

    #[test]
    fn test_template_without_context() {
        assert!(PromptBuilder::from_template(r#"{"role": "reviewer"}"#).is_err());
        assert!(PromptBuilder::from_template("not json").is_err());
    }
}
