//! Extractor application - orchestration layer
//!
//! Owns the wired-up clients and turns one invocation event into one
//! [`HandlerResponse`]:
//! - `{"Records": [...]}` -> batch extraction ([`BatchProcessor`])
//! - `{aws_blog_url, google_doc_url}` -> direct single-pair extraction

use crate::clients::{load_credentials, DocsClient, HttpFetcher};
use crate::config::{Config, OutputMode};
use crate::error::{AppError, AppResult};
use crate::models::{
    BlogArticle, ContentsPayload, DirectPayload, HandlerResponse, PromptsPayload, QueueEvent,
    RawWorkItem, SourcedContent,
};
use crate::orchestrator::batch_processor::BatchProcessor;
use crate::services::{BlogExtractor, DocExtractor, PromptBuilder};
use crate::utils::logging::log_startup;
use crate::workflow::ItemFlow;
use serde_json::Value as JsonValue;
use std::sync::Arc;
use tracing::warn;

const MISSING_URLS: &str = "Both aws_blog_url and google_doc_url are required.";

/// Main application struct
pub struct App {
    config: Config,
    processor: BatchProcessor,
    prompts: PromptBuilder,
}

impl App {
    /// Build the production clients from `config`.
    ///
    /// Credentials are read here, once; a bad descriptor only disables
    /// document extraction.
    pub fn initialize(config: Config) -> AppResult<Self> {
        let fetcher = HttpFetcher::new(&config)
            .map_err(|e| AppError::Other(format!("failed to build HTTP client: {}", e)))?;
        let api_client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| AppError::Other(format!("failed to build API client: {}", e)))?;

        let credentials = load_credentials(&config, api_client.clone());
        let docs = DocsClient::new(&config, api_client);

        let flow = ItemFlow::new(
            BlogExtractor::new(Arc::new(fetcher)),
            DocExtractor::new(credentials, Arc::new(docs)),
        );

        log_startup(
            "extractor",
            &format!(
                "output mode: {:?}, document credentials: {}",
                config.output_mode,
                if flow.docs().is_configured() {
                    "loaded"
                } else {
                    "missing"
                }
            ),
        );

        Self::with_flow(config, flow)
    }

    /// Assemble around an existing flow (custom clients).
    pub fn with_flow(config: Config, flow: ItemFlow) -> AppResult<Self> {
        Ok(Self {
            config,
            processor: BatchProcessor::new(flow),
            prompts: PromptBuilder::new()?,
        })
    }

    /// Dispatch on the event shape.
    pub async fn handle(&self, event: JsonValue) -> AppResult<HandlerResponse> {
        if event.get("Records").is_some() {
            match QueueEvent::from_value(&event) {
                Some(event) => self.handle_batch(&event).await,
                None => {
                    warn!("⚠️ malformed queue event: Records is not an array");
                    Ok(HandlerResponse::bad_request(
                        "malformed queue event: Records is not an array",
                    )?)
                }
            }
        } else {
            let request = serde_json::from_value::<RawWorkItem>(event).unwrap_or_default();
            self.handle_direct(request).await
        }
    }

    pub async fn handle_batch(&self, event: &QueueEvent) -> AppResult<HandlerResponse> {
        let report = self.processor.process(&event.records).await;
        let message = report.message();

        let response = match self.config.output_mode {
            OutputMode::Contents => HandlerResponse::json(
                200,
                &ContentsPayload {
                    message,
                    extracted_contents: report.batch.results,
                },
            )?,
            OutputMode::Prompts => HandlerResponse::json(
                200,
                &PromptsPayload {
                    message,
                    prompts: report
                        .batch
                        .results
                        .iter()
                        .map(|item| self.prompts.build(item))
                        .collect(),
                },
            )?,
        };
        Ok(response)
    }

    /// One pair, metadata included; failures are flattened to sentinels.
    pub async fn handle_direct(&self, request: RawWorkItem) -> AppResult<HandlerResponse> {
        let Some(item) = request.into_work_item() else {
            warn!("⚠️ direct request rejected: {}", MISSING_URLS);
            return Ok(HandlerResponse::bad_request(MISSING_URLS)?);
        };

        let flow = self.processor.flow();

        let article = match flow.blog().extract_metadata_and_body(&item.aws_blog_url).await {
            Ok(article) => article,
            Err(e) => {
                warn!("⚠️ blog extraction failed ({}): {}", e.kind(), e);
                BlogArticle::failed(&e)
            }
        };

        let translation = match flow.docs().extract(&item.google_doc_url).await {
            Ok(text) => text,
            Err(e) => {
                warn!("⚠️ document extraction failed ({}): {}", e.kind(), e);
                e.to_sentinel()
            }
        };

        let payload = DirectPayload {
            aws_blog_content: SourcedContent {
                source_url: item.aws_blog_url,
                content: article,
            },
            google_doc_translation: SourcedContent {
                source_url: item.google_doc_url,
                content: translation,
            },
        };
        Ok(HandlerResponse::json(200, &payload)?)
    }
}
