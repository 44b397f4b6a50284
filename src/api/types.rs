/// Request and response types exchanged with the scraping API.
///
/// Requests mirror the parameters each logical operation accepts. Field names
/// are Rust-side; the HTTP client decides their wire spelling.
use serde::{Serialize, Serializer};
use serde_json::Value;

/// Content format requested from `scrape`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ScrapeFormat {
    /// Clean Markdown rendering of the page.
    #[default]
    Markdown,
    /// Raw HTML of the page.
    Html,
}

impl ScrapeFormat {
    /// Wire name of the format.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Markdown => "markdown",
            Self::Html => "html",
        }
    }
}

/// Parameters for a web search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: String,
    pub limit: u32,
}

/// Parameters for discovering the URLs of a site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapRequest {
    pub url: String,
    pub limit: u32,
    /// Only keep URLs related to this keyword.
    pub search: Option<String>,
}

/// Parameters for scraping a single page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrapeRequest {
    pub url: String,
    pub format: ScrapeFormat,
    /// Strip headers, footers and navigation.
    pub only_main: bool,
}

/// Parameters for crawling a site.
///
/// Crawled pages are always scraped as main-content Markdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlRequest {
    pub url: String,
    pub limit: u32,
    pub max_depth: u32,
    pub mode: CrawlMode,
}

/// Whether a crawl waits for its pages or only submits the job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CrawlMode {
    /// Block until the crawl job completes and return its pages.
    #[default]
    Wait,
    /// Submit the job and return its identifier immediately.
    Submit,
}

/// Parameters for LLM extraction over known pages.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractRequest {
    pub urls: Vec<String>,
    pub prompt: String,
    pub schema: Option<Value>,
    /// Let the extractor search beyond the given URLs.
    pub enable_web_search: bool,
}

/// Parameters for the autonomous agent.
#[derive(Debug, Clone, PartialEq)]
pub struct AgentRequest {
    pub prompt: String,
    pub urls: Option<Vec<String>>,
    pub schema: Option<Value>,
}

impl AgentRequest {
    /// The extraction the agent degrades to when the API has no agent.
    ///
    /// Returns `None` when there are no URLs to extract from.
    #[must_use]
    pub fn as_web_search_extract(&self) -> Option<ExtractRequest> {
        let urls = self.urls.clone()?;
        Some(ExtractRequest {
            urls,
            prompt: self.prompt.clone(),
            schema: self.schema.clone(),
            enable_web_search: true,
        })
    }
}

/// Declared support for an optional API operation.
#[derive(Debug, Clone, Copy)]
pub enum Capability<T> {
    Supported(T),
    Unsupported,
}

/// A response body as returned by the API.
///
/// Bodies that are not JSON are kept verbatim as text.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Json(Value),
    Text(String),
}

impl Payload {
    /// Interpret a raw response body.
    #[must_use]
    pub fn from_body(body: &str) -> Self {
        match serde_json::from_str(body) {
            Ok(value) => Self::Json(value),
            Err(_) => Self::Text(body.to_owned()),
        }
    }

    /// The JSON value, if the body was JSON.
    #[must_use]
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Self::Json(value) => Some(value),
            Self::Text(_) => None,
        }
    }
}

impl From<Value> for Payload {
    fn from(value: Value) -> Self {
        Self::Json(value)
    }
}

impl Serialize for Payload {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Json(value) => value.serialize(serializer),
            Self::Text(text) => serializer.serialize_str(text),
        }
    }
}
