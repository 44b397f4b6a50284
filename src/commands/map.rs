/// `map` command: discover the URLs of a site.
use tracing::info;

use crate::api::{MapRequest, ScrapeApi};
use crate::errors::CliError;
use crate::types::Envelope;

/// Run `firecrawl map`.
///
/// # Errors
///
/// Returns `CliError::External` if the map call fails.
pub fn run(req: &MapRequest, api: &dyn ScrapeApi) -> Result<Envelope, CliError> {
    info!(url = %req.url, limit = req.limit, search = ?req.search, "map");
    let payload = api.map(req)?;
    Ok(Envelope::success(&payload))
}
