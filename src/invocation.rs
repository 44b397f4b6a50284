/// Validated command-line requests and the credential that authorises them.
use std::fmt;

use serde_json::Value;

use crate::api::{
    AgentRequest, CrawlMode, CrawlRequest, ExtractRequest, MapRequest, ScrapeRequest,
    SearchRequest,
};
use crate::cli::args::{
    AgentArgs, Command, CrawlArgs, ExtractArgs, MapArgs, ScrapeArgs, SearchArgs,
};
use crate::errors::CliError;

/// Environment variable holding the API key.
pub const API_KEY_VAR: &str = "FIRECRAWL_API_KEY";

/// An API key. Never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Resolve the credential from the value looked up for `var`.
    ///
    /// An empty value counts as unset.
    ///
    /// # Errors
    ///
    /// Returns `CliError::MissingCredential` naming `var` when there is no key.
    pub fn resolve(var: &'static str, value: Option<String>) -> Result<Self, CliError> {
        match value {
            Some(key) if !key.is_empty() => Ok(Self(key)),
            _ => Err(CliError::MissingCredential { var }),
        }
    }

    /// The raw key, for the authorisation header.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

/// One validated API request, built once per process run.
#[derive(Debug, Clone, PartialEq)]
pub enum Invocation {
    Search(SearchRequest),
    Map(MapRequest),
    Scrape(ScrapeRequest),
    Crawl(CrawlRequest),
    Extract(ExtractRequest),
    Agent(AgentRequest),
}

impl Invocation {
    /// Command name, for logs.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Search(_) => "search",
            Self::Map(_) => "map",
            Self::Scrape(_) => "scrape",
            Self::Crawl(_) => "crawl",
            Self::Extract(_) => "extract",
            Self::Agent(_) => "agent",
        }
    }
}

impl TryFrom<&Command> for Invocation {
    type Error = CliError;

    fn try_from(command: &Command) -> Result<Self, Self::Error> {
        Ok(match command {
            Command::Search(args) => Self::Search(args.into()),
            Command::Map(args) => Self::Map(args.into()),
            Command::Scrape(args) => Self::Scrape(args.into()),
            Command::Crawl(args) => Self::Crawl(args.into()),
            Command::Extract(args) => Self::Extract(args.try_into()?),
            Command::Agent(args) => Self::Agent(args.try_into()?),
            Command::PromoteKeep(_) | Command::InitWorkspace(_) => {
                return Err(CliError::Usage(format!(
                    "{} is a local command and does not call the API",
                    command.name()
                )));
            }
        })
    }
}

impl From<&SearchArgs> for SearchRequest {
    fn from(args: &SearchArgs) -> Self {
        Self {
            query: args.query.clone(),
            limit: args.limit,
        }
    }
}

impl From<&MapArgs> for MapRequest {
    fn from(args: &MapArgs) -> Self {
        Self {
            url: args.url.clone(),
            limit: args.limit,
            search: args.search.clone(),
        }
    }
}

impl From<&ScrapeArgs> for ScrapeRequest {
    fn from(args: &ScrapeArgs) -> Self {
        Self {
            url: args.url.clone(),
            format: args.format,
            only_main: args.only_main,
        }
    }
}

impl From<&CrawlArgs> for CrawlRequest {
    fn from(args: &CrawlArgs) -> Self {
        Self {
            url: args.url.clone(),
            limit: args.limit,
            max_depth: args.depth,
            mode: if args.async_mode {
                CrawlMode::Submit
            } else {
                CrawlMode::Wait
            },
        }
    }
}

impl TryFrom<&ExtractArgs> for ExtractRequest {
    type Error = CliError;

    fn try_from(args: &ExtractArgs) -> Result<Self, Self::Error> {
        Ok(Self {
            urls: args.urls.clone(),
            prompt: args.prompt.clone(),
            schema: parse_schema(args.schema.as_deref())?,
            enable_web_search: false,
        })
    }
}

impl TryFrom<&AgentArgs> for AgentRequest {
    type Error = CliError;

    fn try_from(args: &AgentArgs) -> Result<Self, Self::Error> {
        Ok(Self {
            prompt: args.prompt.clone(),
            urls: args
                .urls
                .as_deref()
                .filter(|raw| !raw.is_empty())
                .map(split_urls),
            schema: parse_schema(args.schema.as_deref())?,
        })
    }
}

/// Parse an optional `--schema` argument. An empty value counts as absent.
///
/// # Errors
///
/// Returns `CliError::Schema` with the parser diagnostic if `raw` is not JSON.
pub fn parse_schema(raw: Option<&str>) -> Result<Option<Value>, CliError> {
    raw.filter(|text| !text.is_empty())
        .map(|text| serde_json::from_str(text).map_err(CliError::Schema))
        .transpose()
}

/// Split a comma-separated URL list, trimming each element.
///
/// Empty elements are kept and nothing is validated.
#[must_use]
pub fn split_urls(raw: &str) -> Vec<String> {
    raw.split(',').map(str::trim).map(str::to_owned).collect()
}
