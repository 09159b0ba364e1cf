//! Public blog extraction - service layer
//!
//! Knows how to read one blog post page. Does not know about queues or
//! batches.
//!
//! Two operations share one fetch path:
//! - [`BlogExtractor::extract_metadata_and_body`]: title, authors, date,
//!   categories and body text
//! - [`BlogExtractor::extract_body_only`]: body text only

use crate::clients::PageFetcher;
use crate::error::ExtractError;
use crate::models::{BlogArticle, CONTENT_NOT_FOUND};
use scraper::{ElementRef, Html, Selector};
use std::sync::{Arc, LazyLock};
use tracing::debug;

static TITLE: LazyLock<Selector> = LazyLock::new(|| css("h1.blog-post-title"));
static META: LazyLock<Selector> = LazyLock::new(|| css("footer.blog-post-meta"));
static SPAN: LazyLock<Selector> = LazyLock::new(|| css("span"));
static TIME: LazyLock<Selector> = LazyLock::new(|| css("time"));
static LINK: LazyLock<Selector> = LazyLock::new(|| css("a"));
static BODY: LazyLock<Selector> = LazyLock::new(|| css("article .blog-post-content"));

const AUTHOR_PREFIX: &str = "by ";
/// Footer links with exactly these texts are navigation, not categories.
const EXCLUDED_LINK_TEXTS: [&str; 2] = ["Permalink", "Comments"];
/// Footer links whose text contains this are share buttons.
const SHARE_MARKER: &str = "Share";

fn css(selector: &'static str) -> Selector {
    Selector::parse(selector).expect("static selector is valid CSS")
}

/// Blog extraction service
pub struct BlogExtractor {
    fetcher: Arc<dyn PageFetcher>,
}

impl BlogExtractor {
    pub fn new(fetcher: Arc<dyn PageFetcher>) -> Self {
        Self { fetcher }
    }

    /// Fetch `url` and return metadata plus body text.
    pub async fn extract_metadata_and_body(&self, url: &str) -> Result<BlogArticle, ExtractError> {
        let html = self.fetch(url).await?;
        Ok(parse_article(&html))
    }

    /// Fetch `url` and return the body text only.
    ///
    /// A page without a content region yields [`CONTENT_NOT_FOUND`], not an
    /// error.
    pub async fn extract_body_only(&self, url: &str) -> Result<String, ExtractError> {
        let html = self.fetch(url).await?;
        Ok(parse_body(&Html::parse_document(&html)))
    }

    async fn fetch(&self, url: &str) -> Result<String, ExtractError> {
        validate_blog_url(url)?;
        self.fetcher.fetch_html(url).await
    }
}

/// Non-empty and `http`/`https`; checked before any network call.
pub fn validate_blog_url(url: &str) -> Result<(), ExtractError> {
    let invalid = || ExtractError::invalid_input(format!("invalid blog URL: '{}'", url));

    if url.trim().is_empty() {
        return Err(invalid());
    }
    let parsed = url::Url::parse(url).map_err(|_| invalid())?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        _ => Err(invalid()),
    }
}

/// Parse a full blog post page.
pub fn parse_article(html: &str) -> BlogArticle {
    let document = Html::parse_document(html);

    let title = document.select(&TITLE).next().map(inline_text);

    let mut article = BlogArticle {
        title,
        content: parse_body(&document),
        ..Default::default()
    };

    if let Some(meta) = document.select(&META).next() {
        article.authors = meta
            .select(&SPAN)
            .next()
            .map(inline_text)
            .and_then(|text| text.strip_prefix(AUTHOR_PREFIX).map(str::to_string));
        article.post_date = meta.select(&TIME).next().map(inline_text);
        article.categories = extract_categories(meta);
    } else {
        debug!("no metadata footer found");
    }

    article
}

/// Link texts of the metadata footer, minus navigation and share links.
pub fn extract_categories(meta: ElementRef<'_>) -> Vec<String> {
    meta.select(&LINK)
        .map(inline_text)
        .filter(|text| !EXCLUDED_LINK_TEXTS.contains(&text.as_str()))
        .filter(|text| !text.contains(SHARE_MARKER))
        .collect()
}

fn parse_body(document: &Html) -> String {
    match document.select(&BODY).next() {
        Some(body) => block_text(body),
        None => CONTENT_NOT_FOUND.to_string(),
    }
}

/// Text of a single-line element with whitespace runs collapsed.
///
/// Node texts are joined, not stripped one by one: stripping each node
/// would glue `by <span>A</span>` into `byA` and lose the author prefix.
fn inline_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Every text node trimmed, blanks dropped, one per line.
fn block_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
