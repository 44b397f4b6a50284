/// Command dispatch: routes an `Invocation` to the one API call it maps to.
pub mod agent;
pub mod crawl;
pub mod extract;
pub mod init_workspace;
pub mod map;
pub mod promote_keep;
pub mod scrape;
pub mod search;

use crate::api::ScrapeApi;
use crate::errors::CliError;
use crate::invocation::Invocation;
use crate::types::Envelope;

/// Dispatch a validated `Invocation` to its handler.
///
/// # Errors
///
/// Returns `CliError` when the API call fails or the operation is unsupported.
pub fn dispatch(invocation: &Invocation, api: &dyn ScrapeApi) -> Result<Envelope, CliError> {
    match invocation {
        Invocation::Search(req) => search::run(req, api),
        Invocation::Map(req) => map::run(req, api),
        Invocation::Scrape(req) => scrape::run(req, api),
        Invocation::Crawl(req) => crawl::run(req, api),
        Invocation::Extract(req) => extract::run(req, api),
        Invocation::Agent(req) => agent::run(req, api),
    }
}
