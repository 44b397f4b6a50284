/// `search` command: search the web.
use tracing::info;

use crate::api::{ScrapeApi, SearchRequest};
use crate::errors::CliError;
use crate::types::Envelope;

/// Run `firecrawl search`.
///
/// # Errors
///
/// Returns `CliError::External` if the search call fails.
pub fn run(req: &SearchRequest, api: &dyn ScrapeApi) -> Result<Envelope, CliError> {
    info!(query = %req.query, limit = req.limit, "search");
    let payload = api.search(req)?;
    Ok(Envelope::success(&payload))
}
