/// `crawl` command: crawl a site, waiting for the pages or only submitting the job.
use tracing::info;

use crate::api::{CrawlMode, CrawlRequest, ScrapeApi};
use crate::errors::CliError;
use crate::types::Envelope;

/// Run `firecrawl crawl`.
///
/// With `--async` the job is submitted and its identifier returned at once;
/// the job is never polled.
///
/// # Errors
///
/// Returns `CliError::External` if the crawl call fails.
pub fn run(req: &CrawlRequest, api: &dyn ScrapeApi) -> Result<Envelope, CliError> {
    info!(url = %req.url, limit = req.limit, max_depth = req.max_depth, mode = ?req.mode, "crawl");
    match req.mode {
        CrawlMode::Wait => {
            let payload = api.crawl(req)?;
            Ok(Envelope::success(&payload))
        }
        CrawlMode::Submit => {
            let payload = api.start_crawl(req)?;
            Ok(Envelope::started(&payload))
        }
    }
}
