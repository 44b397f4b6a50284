/// `extract` command: LLM extraction over known pages.
use tracing::info;

use crate::api::{ExtractRequest, ScrapeApi};
use crate::errors::CliError;
use crate::types::Envelope;

/// Run `firecrawl extract`.
///
/// # Errors
///
/// Returns `CliError::External` if the extract call fails.
pub fn run(req: &ExtractRequest, api: &dyn ScrapeApi) -> Result<Envelope, CliError> {
    info!(urls = req.urls.len(), has_schema = req.schema.is_some(), "extract");
    let payload = api.extract(req)?;
    Ok(Envelope::success(&payload))
}
