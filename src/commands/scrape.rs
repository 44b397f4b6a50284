/// `scrape` command: fetch one page.
use tracing::info;

use crate::api::{ScrapeApi, ScrapeRequest};
use crate::errors::CliError;
use crate::types::Envelope;

/// Run `firecrawl scrape`.
///
/// # Errors
///
/// Returns `CliError::External` if the scrape call fails.
pub fn run(req: &ScrapeRequest, api: &dyn ScrapeApi) -> Result<Envelope, CliError> {
    info!(url = %req.url, format = req.format.as_str(), only_main = req.only_main, "scrape");
    let payload = api.scrape(req)?;
    Ok(Envelope::success(&payload))
}
