/// Scraping API boundary: the operations commands delegate to.
pub mod errors;
#[cfg(feature = "http")]
pub mod firecrawl;
pub mod types;

#[cfg(test)]
pub mod test_mocks;

pub use errors::ApiError;
pub use types::{
    AgentRequest, Capability, CrawlMode, CrawlRequest, ExtractRequest, MapRequest, Payload,
    ScrapeFormat, ScrapeRequest, SearchRequest,
};

use crate::errors::CliError;
use crate::invocation::Credential;

/// Default Firecrawl endpoint.
pub const DEFAULT_API_URL: &str = "https://api.firecrawl.dev";

/// The logical operations of the scraping API.
///
/// Each method is one blocking call. Implementations own transport concerns;
/// callers never retry.
pub trait ScrapeApi {
    /// Search the web.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` when the call fails.
    fn search(&self, req: &SearchRequest) -> Result<Payload, ApiError>;

    /// List the URLs of a site.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` when the call fails.
    fn map(&self, req: &MapRequest) -> Result<Payload, ApiError>;

    /// Scrape one page.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` when the call fails.
    fn scrape(&self, req: &ScrapeRequest) -> Result<Payload, ApiError>;

    /// Crawl a site and wait for the crawled pages.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` when the call fails or the job does not complete.
    fn crawl(&self, req: &CrawlRequest) -> Result<Payload, ApiError>;

    /// Submit a crawl job and return without waiting for it.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` when the submission fails.
    fn start_crawl(&self, req: &CrawlRequest) -> Result<Payload, ApiError>;

    /// Extract structured data from pages with an LLM.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` when the call fails.
    fn extract(&self, req: &ExtractRequest) -> Result<Payload, ApiError>;

    /// Whether this API offers the autonomous agent, and how to reach it.
    fn agent(&self) -> Capability<&dyn AgentApi>;
}

/// The optional autonomous-agent operation.
pub trait AgentApi {
    /// Run the agent to completion.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` when the call fails.
    fn run_agent(&self, req: &AgentRequest) -> Result<Payload, ApiError>;
}

/// Connection settings shared by every API command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    /// Base URL, without trailing slash.
    pub base_url: String,
    /// Whether the agent operation is offered.
    pub agent_enabled: bool,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_owned(),
            agent_enabled: true,
        }
    }
}

/// Build the API client for a resolved credential.
///
/// # Errors
///
/// Returns `CliError::MissingDependency` when the crate was built without
/// an HTTP client, or `CliError::External` if the client cannot be set up.
#[cfg(feature = "http")]
pub fn connect(
    settings: &ClientSettings,
    credential: Credential,
) -> Result<Box<dyn ScrapeApi>, CliError> {
    let client = firecrawl::FirecrawlClient::new(settings, credential)?;
    Ok(Box::new(client))
}

/// Build the API client for a resolved credential.
///
/// # Errors
///
/// Always returns `CliError::MissingDependency`: this build has no HTTP client.
#[cfg(not(feature = "http"))]
pub fn connect(
    _settings: &ClientSettings,
    _credential: Credential,
) -> Result<Box<dyn ScrapeApi>, CliError> {
    Err(CliError::MissingDependency)
}
