//! Subset of the Docs API `documents.get` response that carries text.
//!
//! Only paragraphs and their text runs are modelled; every other structural
//! element (tables, section breaks, tables of contents) deserializes into a
//! `StructuralElement` with `paragraph: None` and is ignored.

use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    #[serde(default)]
    pub document_id: Option<String>,
    #[serde(default)]
    pub body: Option<Body>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Body {
    #[serde(default)]
    pub content: Vec<StructuralElement>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StructuralElement {
    #[serde(default)]
    pub paragraph: Option<Paragraph>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Paragraph {
    #[serde(default)]
    pub elements: Vec<ParagraphElement>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParagraphElement {
    #[serde(default)]
    pub text_run: Option<TextRun>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TextRun {
    #[serde(default)]
    pub content: Option<String>,
}

impl Body {
    /// Concatenate every text run of every paragraph, in order, then trim.
    pub fn plain_text(&self) -> String {
        let text: String = self
            .content
            .iter()
            .filter_map(|block| block.paragraph.as_ref())
            .flat_map(|paragraph| paragraph.elements.iter())
            .filter_map(|element| element.text_run.as_ref())
            .filter_map(|run| run.content.as_deref())
            .collect();
        text.trim().to_string()
    }
}
