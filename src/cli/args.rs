/// CLI argument definitions via clap derive.
use std::path::PathBuf;

use clap::builder::FalseyValueParser;
use clap::{ArgAction, Args, Parser, Subcommand};

use crate::api::{ClientSettings, DEFAULT_API_URL, ScrapeFormat};
use crate::invocation::API_KEY_VAR;

/// firecrawl — search, map, scrape, crawl and extract the web as JSON.
#[derive(Debug, Parser)]
#[command(
    name = "firecrawl",
    about = "Search, map, scrape, crawl and extract the web through the Firecrawl API",
    version,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by every command and every standalone binary.
#[derive(Debug, Clone, Args)]
pub struct GlobalArgs {
    /// Firecrawl API key.
    #[arg(long, global = true, env = API_KEY_VAR, hide_env_values = true, value_name = "KEY")]
    pub api_key: Option<String>,

    /// Base URL of the Firecrawl API.
    #[arg(
        long,
        global = true,
        env = "FIRECRAWL_API_URL",
        default_value = DEFAULT_API_URL,
        value_name = "URL"
    )]
    pub api_url: String,

    /// Treat the agent operation as unavailable (agent falls back to extract).
    ///
    /// From the environment, `0`, `false`, `no`, `off` and empty mean unset;
    /// any other value sets it.
    #[arg(
        long,
        global = true,
        env = "FIRECRAWL_NO_AGENT",
        action = ArgAction::SetTrue,
        value_parser = FalseyValueParser::new()
    )]
    pub no_agent: bool,

    /// Log to stderr: -d info, -dd debug, -ddd trace.
    #[arg(short = 'd', long, global = true, action = ArgAction::Count)]
    pub debug: u8,
}

impl From<&GlobalArgs> for ClientSettings {
    fn from(args: &GlobalArgs) -> Self {
        Self {
            base_url: args.api_url.clone(),
            agent_enabled: !args.no_agent,
        }
    }
}

/// All subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Search the web.
    Search(SearchArgs),
    /// Discover all URLs on a website.
    Map(MapArgs),
    /// Scrape content from a single URL.
    Scrape(ScrapeArgs),
    /// Crawl multiple pages from a website.
    Crawl(CrawlArgs),
    /// Extract structured data from web pages with an LLM.
    Extract(ExtractArgs),
    /// Gather web data autonomously from a natural-language description.
    Agent(AgentArgs),
    /// Promote KEEP lines from a daily memory log into MEMORY.md.
    PromoteKeep(PromoteKeepArgs),
    /// Seed a workspace with bootstrap files and an optional daily log.
    InitWorkspace(InitWorkspaceArgs),
}

impl Command {
    /// Subcommand name as typed on the command line.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Search(_) => "search",
            Self::Map(_) => "map",
            Self::Scrape(_) => "scrape",
            Self::Crawl(_) => "crawl",
            Self::Extract(_) => "extract",
            Self::Agent(_) => "agent",
            Self::PromoteKeep(_) => "promote-keep",
            Self::InitWorkspace(_) => "init-workspace",
        }
    }
}

/// Arguments for `search`.
#[derive(Debug, Clone, Args)]
#[command(after_help = "Examples:\n  search \"latest AI news\"\n  search \"Python web scraping tutorials\" --limit 5")]
pub struct SearchArgs {
    /// Search query.
    pub query: String,

    /// Maximum number of results.
    #[arg(long, value_name = "N", default_value_t = 10)]
    pub limit: u32,
}

/// Arguments for `map`.
#[derive(Debug, Clone, Args)]
#[command(after_help = "Examples:\n  map \"https://docs.example.com\"\n  map \"https://docs.example.com\" --search \"authentication\"")]
pub struct MapArgs {
    /// Base URL to map.
    pub url: String,

    /// Maximum number of URLs to return.
    #[arg(long, value_name = "N", default_value_t = 100)]
    pub limit: u32,

    /// Only keep URLs containing this keyword.
    #[arg(long, value_name = "KEYWORD")]
    pub search: Option<String>,
}

/// Arguments for `scrape`.
#[derive(Debug, Clone, Args)]
#[command(after_help = "Examples:\n  scrape \"https://example.com\"\n  scrape \"https://example.com\" --format html --only-main")]
pub struct ScrapeArgs {
    /// URL to scrape.
    pub url: String,

    /// Content format.
    #[arg(long, value_enum, default_value_t = ScrapeFormat::Markdown)]
    pub format: ScrapeFormat,

    /// Extract only the main content (drops headers, footers, navigation).
    #[arg(long)]
    pub only_main: bool,
}

/// Arguments for `crawl`.
#[derive(Debug, Clone, Args)]
#[command(after_help = "Examples:\n  crawl \"https://docs.example.com\" --limit 10 --depth 2\n  crawl \"https://docs.example.com\" --async\n\nCrawling large sites is slow; map + scrape gives finer control.")]
pub struct CrawlArgs {
    /// Base URL to crawl.
    pub url: String,

    /// Maximum number of pages to crawl.
    #[arg(long, value_name = "N", default_value_t = 10)]
    pub limit: u32,

    /// Maximum crawl depth.
    #[arg(long, value_name = "N", default_value_t = 2)]
    pub depth: u32,

    /// Start the crawl and return its job ID without waiting.
    #[arg(long = "async")]
    pub async_mode: bool,
}

/// Arguments for `extract`.
#[derive(Debug, Clone, Args)]
#[command(after_help = "Examples:\n  extract \"https://example.com/pricing\" --prompt \"Extract all pricing tiers\"\n  extract \"https://example.com/team\" --prompt \"Extract team members\" \\\n    --schema '{\"type\":\"object\",\"properties\":{\"members\":{\"type\":\"array\"}}}'")]
pub struct ExtractArgs {
    /// URL(s) to extract data from.
    #[arg(required = true, value_name = "URL")]
    pub urls: Vec<String>,

    /// What data to extract.
    #[arg(long)]
    pub prompt: String,

    /// JSON schema for structured output.
    #[arg(long, value_name = "JSON")]
    pub schema: Option<String>,
}

/// Arguments for `agent`.
#[derive(Debug, Clone, Args)]
#[command(after_help = "Examples:\n  agent --prompt \"Find the founders of Firecrawl\"\n  agent --prompt \"Compare features and pricing\" --urls \"https://a.com,https://b.com\"")]
pub struct AgentArgs {
    /// Natural-language description of the data wanted.
    #[arg(long)]
    pub prompt: String,

    /// Comma-separated URLs to focus the agent on.
    #[arg(long, value_name = "URL,URL")]
    pub urls: Option<String>,

    /// JSON schema for structured output.
    #[arg(long, value_name = "JSON")]
    pub schema: Option<String>,
}

/// Arguments for `promote-keep`.
#[derive(Debug, Clone, Args)]
#[command(after_help = "Examples:\n  promote-keep --daily ./memory/2026-02-19.md --memory ./MEMORY.md")]
pub struct PromoteKeepArgs {
    /// Path to the daily log (memory/YYYY-MM-DD.md).
    #[arg(long, value_name = "PATH")]
    pub daily: PathBuf,

    /// Path to MEMORY.md.
    #[arg(long, value_name = "PATH")]
    pub memory: PathBuf,
}

/// Arguments for `init-workspace`.
#[derive(Debug, Clone, Args)]
#[command(after_help = "Examples:\n  init-workspace --workspace ~/.openclaw/workspace-demo --with-memory --create-today-log\n  init-workspace --workspace ./workspace --overwrite")]
pub struct InitWorkspaceArgs {
    /// Workspace directory to create or seed.
    #[arg(long, value_name = "PATH")]
    pub workspace: PathBuf,

    /// Agent name for IDENTITY.md.
    #[arg(long, default_value = "Claw")]
    pub agent_name: String,

    /// Agent vibe for IDENTITY.md.
    #[arg(long, default_value = "sharp, concise, helpful")]
    pub agent_vibe: String,

    /// Agent emoji for IDENTITY.md.
    #[arg(long, default_value = ":lobster:")]
    pub agent_emoji: String,

    /// User name for USER.md.
    #[arg(long, default_value = "")]
    pub user_name: String,

    /// User language for USER.md.
    #[arg(long, default_value = "")]
    pub user_language: String,

    /// Create MEMORY.md if missing.
    #[arg(long)]
    pub with_memory: bool,

    /// Do not create .gitignore.
    #[arg(long)]
    pub no_gitignore: bool,

    /// Create memory/YYYY-MM-DD.md for today if missing.
    #[arg(long)]
    pub create_today_log: bool,

    /// Overwrite existing files.
    #[arg(long)]
    pub overwrite: bool,
}
