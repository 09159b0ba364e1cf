#![allow(dead_code)]

use async_trait::async_trait;
use review_feed::clients::{DocumentCredentialProvider, DocumentSource, MessageQueue, PageFetcher};
use review_feed::error::{AppError, AppResult};
use review_feed::models::Document;
use review_feed::services::{BlogExtractor, DocExtractor};
use review_feed::{ExtractError, ItemFlow};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

pub const BLOG_URL: &str = "https://aws.amazon.com/blogs/database/aurora-migration/";
pub const DOC_URL: &str = "https://docs.google.com/document/d/DOC-1/edit";

pub fn blog_html(body: &str) -> String {
    format!(
        r#"<html><body><article>
             <h1 class="blog-post-title">Aurora migration</h1>
             <footer class="blog-post-meta">
               <span>by Jane Doe</span> <time>02 MAY 2024</time>
               <a>Amazon Aurora</a><a>Permalink</a><a>Share on LinkedIn</a><a>Comments</a>
             </footer>
             <div class="blog-post-content"><p>{}</p></div>
           </article></body></html>"#,
        body
    )
}

pub fn doc_json(text: &str) -> String {
    serde_json::json!({
        "documentId": "DOC-1",
        "body": {"content": [
            {"paragraph": {"elements": [{"textRun": {"content": text}}]}}
        ]}
    })
    .to_string()
}

pub fn message(aws: &str, gdoc: &str) -> String {
    serde_json::json!({"aws_blog_url": aws, "google_doc_url": gdoc}).to_string()
}

// ========== Fake page fetcher ==========

#[derive(Default)]
pub struct FakeFetcher {
    pages: HashMap<String, Result<String, ExtractError>>,
    pub calls: AtomicUsize,
}

impl FakeFetcher {
    pub fn with_page(mut self, url: &str, html: impl Into<String>) -> Self {
        self.pages.insert(url.to_string(), Ok(html.into()));
        self
    }

    pub fn with_error(mut self, url: &str, message: &str) -> Self {
        self.pages
            .insert(url.to_string(), Err(ExtractError::transport(url, message)));
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PageFetcher for FakeFetcher {
    async fn fetch_html(&self, url: &str) -> Result<String, ExtractError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.pages
            .get(url)
            .cloned()
            .unwrap_or_else(|| Err(ExtractError::transport(url, "HTTP 404 Not Found")))
    }
}

// ========== Fake document service ==========

#[derive(Default)]
pub struct FakeDocs {
    documents: HashMap<String, String>,
    pub calls: AtomicUsize,
}

impl FakeDocs {
    pub fn with_document(mut self, id: &str, json: impl Into<String>) -> Self {
        self.documents.insert(id.to_string(), json.into());
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
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
        let raw = self.documents.get(document_id).ok_or_else(|| {
            ExtractError::transport(document_id, "HTTP 404 Requested entity was not found.")
        })?;
        serde_json::from_str(raw).map_err(ExtractError::upstream_parse)
    }
}

pub struct StaticToken;

#[async_trait]
impl DocumentCredentialProvider for StaticToken {
    async fn bearer_token(&self) -> Result<String, ExtractError> {
        Ok("test-token".to_string())
    }
}

pub fn flow(fetcher: Arc<FakeFetcher>, docs: Arc<FakeDocs>, credentials: bool) -> ItemFlow {
    let credentials: Option<Arc<dyn DocumentCredentialProvider>> = if credentials {
        Some(Arc::new(StaticToken))
    } else {
        None
    };
    ItemFlow::new(
        BlogExtractor::new(fetcher),
        DocExtractor::new(credentials, docs),
    )
}

// ========== Fake queue ==========

#[derive(Default)]
pub struct FakeQueue {
    pub sent: Mutex<Vec<String>>,
    /// Bodies containing this substring are rejected
    pub reject_containing: Option<String>,
}

impl FakeQueue {
    pub fn sent_bodies(&self) -> Vec<String> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl MessageQueue for FakeQueue {
    fn destination(&self) -> &str {
        "memory://queue"
    }

    async fn send_message(&self, body: &str) -> AppResult<String> {
        if let Some(needle) = &self.reject_containing {
            if body.contains(needle.as_str()) {
                return Err(AppError::queue_send_failed(
                    "memory://queue",
                    "AccessDenied",
                ));
            }
        }
        let mut sent = self.sent.lock().unwrap();
        sent.push(body.to_string());
        Ok(format!("msg-{}", sent.len()))
    }
}
