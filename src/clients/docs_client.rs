//! Document service client
//!
//! Wraps the `documents.get` call of the Docs API.

use crate::config::Config;
use crate::error::ExtractError;
use crate::models::Document;
use async_trait::async_trait;
use tracing::debug;

/// Retrieves a structured document by id.
#[async_trait]
pub trait DocumentSource: Send + Sync {
    async fn get_document(
        &self,
        document_id: &str,
        bearer_token: &str,
    ) -> Result<Document, ExtractError>;
}

pub struct DocsClient {
    base_url: String,
    client: reqwest::Client,
}

impl DocsClient {
    pub fn new(config: &Config, client: reqwest::Client) -> Self {
        Self {
            base_url: config.docs_api_base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    fn document_url(&self, document_id: &str) -> String {
        format!("{}/documents/{}", self.base_url, document_id)
    }
}

#[async_trait]
impl DocumentSource for DocsClient {
    async fn get_document(
        &self,
        document_id: &str,
        bearer_token: &str,
    ) -> Result<Document, ExtractError> {
        let url = self.document_url(document_id);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .bearer_auth(bearer_token)
            .send()
            .await
            .map_err(|e| ExtractError::transport(&url, e))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(ExtractError::transport(
                &url,
                format!("HTTP {}: {}", status, detail),
            ));
        }

        response
            .json::<Document>()
            .await
            .map_err(ExtractError::upstream_parse)
    }
}
