//! Reference document extraction - service layer
//!
//! Turns a hosted-document URL into plain text: validate the URL, check
//! credentials, pull the document id out of the path, fetch, flatten.

use crate::clients::{DocumentCredentialProvider, DocumentSource};
use crate::error::ExtractError;
use std::sync::Arc;
use tracing::debug;

/// Substring every accepted document URL contains.
pub const DOCUMENT_URL_MARKER: &str = "docs.google.com/document/d/";
const ID_MARKER: &str = "/d/";

/// Document extraction service
pub struct DocExtractor {
    credentials: Option<Arc<dyn DocumentCredentialProvider>>,
    source: Arc<dyn DocumentSource>,
}

impl DocExtractor {
    /// `credentials` is `None` when the process has no usable credentials;
    /// every call then fails with [`ExtractError::NotConfigured`].
    pub fn new(
        credentials: Option<Arc<dyn DocumentCredentialProvider>>,
        source: Arc<dyn DocumentSource>,
    ) -> Self {
        Self {
            credentials,
            source,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.credentials.is_some()
    }

    /// Plain text of the document at `url`, trimmed.
    pub async fn extract(&self, url: &str) -> Result<String, ExtractError> {
        if url.is_empty() || !url.contains(DOCUMENT_URL_MARKER) {
            return Err(ExtractError::invalid_input(format!(
                "invalid document URL: '{}'",
                url
            )));
        }

        let credentials = self
            .credentials
            .as_ref()
            .ok_or(ExtractError::NotConfigured)?;

        let document_id = extract_document_id(url)?;
        debug!("document id: {}", document_id);

        let token = credentials.bearer_token().await?;
        let document = self.source.get_document(document_id, &token).await?;

        let body = document
            .body
            .ok_or_else(|| ExtractError::upstream_parse("document has no body"))?;
        Ok(body.plain_text())
    }
}

/// The path segment right after `/d/`, up to the next `/`.
pub fn extract_document_id(url: &str) -> Result<&str, ExtractError> {
    let malformed = || ExtractError::MalformedUrl {
        url: url.to_string(),
    };

    let (_, rest) = url.split_once(ID_MARKER).ok_or_else(malformed)?;
    let id = rest.split('/').next().unwrap_or_default();
    if id.is_empty() {
        return Err(malformed());
    }
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Document;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    struct StaticToken;

    #[async_trait]
    impl DocumentCredentialProvider for StaticToken {
        async fn bearer_token(&self) -> Result<String, ExtractError> {
            Ok("token".to_string())
        }
    }

    struct FakeDocs {
        calls: AtomicUsize,
        requested: Mutex<Vec<String>>,
        json: &'static str,
    }

    impl FakeDocs {
        fn new(json: &'static str) -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                requested: Mutex::new(Vec::new()),
                json,
            })
        }
    }

    #[async_trait]
    impl DocumentSource for FakeDocs {
        async fn get_document(
            &self,
            document_id: &str,
            _bearer_token: &str,
        ) -> Result<Document, ExtractError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.requested.lock().unwrap().push(document_id.to_string());
            serde_json::from_str(self.json).map_err(ExtractError::upstream_parse)
        }
    }

    const DOC: &str = r#"{"body": {"content": [
        {"paragraph": {"elements": [{"textRun": {"content": "\nTiêu đề\n"}}]}},
        {"table": {}},
        {"paragraph": {"elements": [{"textRun": {"content": "Nội dung.\n"}}]}}
    ]}}"#;

    #[test]
    fn test_extract_document_id() {
        assert_eq!(
            extract_document_id("https://docs.google.com/document/d/1AbC_dEf-123/edit").unwrap(),
            "1AbC_dEf-123"
        );
        assert_eq!(
            extract_document_id("https://docs.google.com/document/d/XYZ").unwrap(),
            "XYZ"
        );
        assert_eq!(
            extract_document_id("https://docs.google.com/document/d/XYZ/edit?usp=sharing#h").unwrap(),
            "XYZ"
        );
    }

    #[test]
    fn test_extract_document_id_malformed() {
        assert!(matches!(
            extract_document_id("https://docs.google.com/document/u/0/"),
            Err(ExtractError::MalformedUrl { .. })
        ));
        assert!(matches!(
            extract_document_id("https://docs.google.com/document/d/"),
            Err(ExtractError::MalformedUrl { .. })
        ));
    }

    #[tokio::test]
    async fn test_extract_flattens_paragraphs() {
        let docs = FakeDocs::new(DOC);
        let extractor = DocExtractor::new(Some(Arc::new(StaticToken)), docs.clone());

        let text = extractor
            .extract("https://docs.google.com/document/d/DOC42/edit")
            .await
            .unwrap();
        assert_eq!(text, "Tiêu đề\nNội dung.");
        assert_eq!(*docs.requested.lock().unwrap(), vec!["DOC42".to_string()]);
    }

    #[tokio::test]
    async fn test_invalid_url_makes_no_request() {
        let docs = FakeDocs::new(DOC);
        let extractor = DocExtractor::new(Some(Arc::new(StaticToken)), docs.clone());

        for url in ["", "https://example.com/d/abc", "https://docs.google.com/spreadsheets/d/abc"] {
            let err = extractor.extract(url).await.unwrap_err();
            assert_eq!(err.kind(), "invalid_input");
            assert!(err.to_sentinel().contains(url));
        }
        assert_eq!(docs.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_missing_credentials() {
        let docs = FakeDocs::new(DOC);
        let extractor = DocExtractor::new(None, docs.clone());

        let err = extractor
            .extract("https://docs.google.com/document/d/DOC42/edit")
            .await
            .unwrap_err();
        assert_eq!(err, ExtractError::NotConfigured);
        assert_eq!(err.to_sentinel(), "Error: credentials not configured");
        assert_eq!(docs.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_response_without_body() {
        let docs = FakeDocs::new(r#"{"documentId": "DOC42"}"#);
        let extractor = DocExtractor::new(Some(Arc::new(StaticToken)), docs);

        let err = extractor
            .extract("https://docs.google.com/document/d/DOC42/edit")
            .await
            .unwrap_err();
        assert_eq!(err.kind(), "upstream_parse_failure");
    }
}
