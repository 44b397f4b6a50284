/// `agent` command: autonomous web data gathering.
///
/// When the API declares no agent operation, a request that names URLs is
/// served by a web-search-enabled extraction over those URLs instead. Without
/// URLs there is nothing to fall back to.
use tracing::{info, warn};

use crate::api::{AgentRequest, Capability, ScrapeApi};
use crate::errors::CliError;
use crate::types::Envelope;

/// Run `firecrawl agent`.
///
/// # Errors
///
/// Returns `CliError::UnsupportedOperation` when neither the agent nor URLs
/// are available, or `CliError::External` if the API call fails.
pub fn run(req: &AgentRequest, api: &dyn ScrapeApi) -> Result<Envelope, CliError> {
    let payload = match api.agent() {
        Capability::Supported(agent) => {
            info!(urls = ?req.urls, has_schema = req.schema.is_some(), "agent");
            agent.run_agent(req)?
        }
        Capability::Unsupported => {
            let extract = req
                .as_web_search_extract()
                .ok_or(CliError::UnsupportedOperation)?;
            warn!(urls = extract.urls.len(), "agent unavailable; extracting with web search");
            api.extract(&extract)?
        }
    };
    Ok(Envelope::success(&payload))
}
