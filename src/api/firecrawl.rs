/// Blocking HTTP client for the Firecrawl REST API.
///
/// Long-running operations (crawl, extract, agent) are jobs: the client
/// submits them and, for the waiting variants, polls the job until it reaches
/// a terminal status. There is no request timeout and no retry.
use std::thread;
use std::time::Duration;

use reqwest::blocking::{Client, Response};
use serde_json::{Value, json};
use tracing::{debug, info};

use super::errors::ApiError;
use super::types::{
    AgentRequest, Capability, CrawlRequest, ExtractRequest, MapRequest, Payload, ScrapeFormat,
    ScrapeRequest, SearchRequest,
};
use super::{AgentApi, ClientSettings, ScrapeApi};
use crate::invocation::Credential;

/// Delay between two status checks of a running job.
const POLL_INTERVAL: Duration = Duration::from_secs(2);

const SEARCH_PATH: &str = "/v1/search";
const MAP_PATH: &str = "/v1/map";
const SCRAPE_PATH: &str = "/v1/scrape";
const CRAWL_PATH: &str = "/v1/crawl";
const EXTRACT_PATH: &str = "/v1/extract";
const AGENT_PATH: &str = "/v2/agent";

/// Firecrawl API client.
pub struct FirecrawlClient {
    http: Client,
    base_url: String,
    credential: Credential,
    agent_enabled: bool,
    poll_interval: Duration,
}

impl FirecrawlClient {
    /// Build a client. Performs no network I/O.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Transport` if the TLS backend cannot be initialised.
    pub fn new(settings: &ClientSettings, credential: Credential) -> Result<Self, ApiError> {
        let http = Client::builder().timeout(None::<Duration>).build()?;
        Ok(Self {
            http,
            base_url: settings.base_url.trim_end_matches('/').to_owned(),
            credential,
            agent_enabled: settings.agent_enabled,
            poll_interval: POLL_INTERVAL,
        })
    }

    #[cfg(test)]
    fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn post(&self, path: &str, body: &Value) -> Result<Payload, ApiError> {
        debug!(path, "POST");
        let resp = self
            .http
            .post(self.endpoint(path))
            .bearer_auth(self.credential.expose())
            .json(body)
            .send()?;
        read_response(resp)
    }

    fn get(&self, path: &str) -> Result<Payload, ApiError> {
        debug!(path, "GET");
        let resp = self
            .http
            .get(self.endpoint(path))
            .bearer_auth(self.credential.expose())
            .send()?;
        read_response(resp)
    }

    /// Poll a submitted job until it completes.
    fn wait_for_job(&self, base_path: &str, submitted: Payload) -> Result<Payload, ApiError> {
        if let Some(JobState::Completed) = submitted.as_json().map(job_state) {
            return Ok(submitted);
        }
        let id = job_id(&submitted)?;
        info!(job = %id, "waiting for job");
        let status_path = format!("{base_path}/{id}");
        loop {
            let status = self.get(&status_path)?;
            match status.as_json().map_or(JobState::Pending, job_state) {
                JobState::Completed => return Ok(status),
                JobState::Failed(status) => return Err(ApiError::JobFailed { id, status }),
                JobState::Pending => thread::sleep(self.poll_interval),
            }
        }
    }
}

impl ScrapeApi for FirecrawlClient {
    fn search(&self, req: &SearchRequest) -> Result<Payload, ApiError> {
        self.post(SEARCH_PATH, &search_body(req))
    }

    fn map(&self, req: &MapRequest) -> Result<Payload, ApiError> {
        self.post(MAP_PATH, &map_body(req))
    }

    fn scrape(&self, req: &ScrapeRequest) -> Result<Payload, ApiError> {
        self.post(SCRAPE_PATH, &scrape_body(req))
    }

    // TODO: follow the `next` cursor of completed crawls larger than one status page.
    fn crawl(&self, req: &CrawlRequest) -> Result<Payload, ApiError> {
        let submitted = self.start_crawl(req)?;
        self.wait_for_job(CRAWL_PATH, submitted)
    }

    fn start_crawl(&self, req: &CrawlRequest) -> Result<Payload, ApiError> {
        self.post(CRAWL_PATH, &crawl_body(req))
    }

    fn extract(&self, req: &ExtractRequest) -> Result<Payload, ApiError> {
        let submitted = self.post(EXTRACT_PATH, &extract_body(req))?;
        self.wait_for_job(EXTRACT_PATH, submitted)
    }

    fn agent(&self) -> Capability<&dyn AgentApi> {
        if self.agent_enabled {
            Capability::Supported(self)
        } else {
            Capability::Unsupported
        }
    }
}

impl AgentApi for FirecrawlClient {
    fn run_agent(&self, req: &AgentRequest) -> Result<Payload, ApiError> {
        let submitted = self.post(AGENT_PATH, &agent_body(req))?;
        self.wait_for_job(AGENT_PATH, submitted)
    }
}

// --- Response interpretation ---

/// Status of an asynchronous job as reported by the API.
#[derive(Debug, Clone, PartialEq, Eq)]
enum JobState {
    Pending,
    Completed,
    Failed(String),
}

fn job_state(body: &Value) -> JobState {
    match body.get("status").and_then(Value::as_str) {
        Some("completed") => JobState::Completed,
        Some(status @ ("failed" | "cancelled")) => JobState::Failed(status.to_owned()),
        _ => JobState::Pending,
    }
}

fn job_id(submitted: &Payload) -> Result<String, ApiError> {
    submitted
        .as_json()
        .and_then(|body| body.get("id"))
        .and_then(Value::as_str)
        .map(str::to_owned)
        .ok_or_else(|| ApiError::Malformed("job submission did not return an id".to_owned()))
}

fn read_response(resp: Response) -> Result<Payload, ApiError> {
    let status = resp.status();
    let body = resp.text()?;
    interpret(status.as_u16(), status.canonical_reason(), &body)
}

fn error_text(body: &Value) -> Option<String> {
    body.get("error")
        .and_then(Value::as_str)
        .map(str::to_owned)
}

/// Map a raw HTTP response onto a payload or an `ApiError`.
fn interpret(status: u16, reason: Option<&str>, body: &str) -> Result<Payload, ApiError> {
    let payload = Payload::from_body(body);

    if !(200..300).contains(&status) {
        let message = match &payload {
            Payload::Json(value) => error_text(value),
            Payload::Text(text) if !text.trim().is_empty() => Some(text.trim().to_owned()),
            Payload::Text(_) => None,
        }
        .or_else(|| reason.map(str::to_owned))
        .unwrap_or_else(|| "Unknown error".to_owned());
        return Err(ApiError::Status { status, message });
    }

    if let Some(value) = payload.as_json() {
        if value.get("success") == Some(&Value::Bool(false)) {
            let message =
                error_text(value).unwrap_or_else(|| "Request was not successful".to_owned());
            return Err(ApiError::Rejected(message));
        }
    }

    Ok(payload)
}

// --- Request bodies ---

fn search_body(req: &SearchRequest) -> Value {
    json!({
        "query": req.query,
        "limit": req.limit,
    })
}

fn map_body(req: &MapRequest) -> Value {
    let mut body = json!({
        "url": req.url,
        "limit": req.limit,
    });
    if let Some(search) = &req.search {
        body["search"] = json!(search);
    }
    body
}

fn scrape_body(req: &ScrapeRequest) -> Value {
    json!({
        "url": req.url,
        "formats": [req.format.as_str()],
        "onlyMainContent": req.only_main,
    })
}

fn crawl_body(req: &CrawlRequest) -> Value {
    json!({
        "url": req.url,
        "limit": req.limit,
        "maxDepth": req.max_depth,
        "scrapeOptions": {
            "formats": [ScrapeFormat::Markdown.as_str()],
            "onlyMainContent": true,
        },
    })
}

fn extract_body(req: &ExtractRequest) -> Value {
    let mut body = json!({
        "urls": req.urls,
        "prompt": req.prompt,
    });
    if let Some(schema) = &req.schema {
        body["schema"] = schema.clone();
    }
    if req.enable_web_search {
        body["enableWebSearch"] = json!(true);
    }
    body
}

fn agent_body(req: &AgentRequest) -> Value {
    let mut body = json!({ "prompt": req.prompt });
    if let Some(urls) = &req.urls {
        body["urls"] = json!(urls);
    }
    if let Some(schema) = &req.schema {
        body["schema"] = schema.clone();
    }
    body
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use crate::api::CrawlMode;
    use mockito::{Matcher, Request, Server, ServerGuard};

    #[test]
    fn test_scrape_body_carries_format_and_main_flag() {
        let body = scrape_body(&ScrapeRequest {
            url: "https://example.com".to_owned(),
            format: ScrapeFormat::Html,
            only_main: true,
        });
        assert_eq!(
            body,
            json!({"url": "https://example.com", "formats": ["html"], "onlyMainContent": true})
        );
    }

    #[test]
    fn test_map_body_omits_absent_search() {
        let body = map_body(&MapRequest {
            url: "https://docs.example.com".to_owned(),
            limit: 100,
            search: None,
        });
        assert!(body.get("search").is_none());
        assert_eq!(body["limit"], 100);
    }

    #[test]
    fn test_crawl_body_forces_markdown_main_content() {
        let body = crawl_body(&CrawlRequest {
            url: "https://docs.example.com".to_owned(),
            limit: 20,
            max_depth: 3,
            mode: CrawlMode::Submit,
        });
        assert_eq!(body["maxDepth"], 3);
        assert_eq!(
            body["scrapeOptions"],
            json!({"formats": ["markdown"], "onlyMainContent": true})
        );
    }

    #[test]
    fn test_extract_body_web_search_only_when_enabled() {
        let mut req = ExtractRequest {
            urls: vec!["https://example.com/pricing".to_owned()],
            prompt: "Extract pricing tiers".to_owned(),
            schema: None,
            enable_web_search: false,
        };
        assert!(extract_body(&req).get("enableWebSearch").is_none());

        req.enable_web_search = true;
        assert_eq!(extract_body(&req)["enableWebSearch"], true);
    }

    #[test]
    fn test_interpret_status_error_uses_body_message() {
        let err = interpret(401, Some("Unauthorized"), r#"{"success":false,"error":"Invalid token"}"#)
            .unwrap_err();
        assert_eq!(err.to_string(), "Status code 401. Invalid token");
    }

    #[test]
    fn test_interpret_status_error_falls_back_to_reason() {
        let err = interpret(502, Some("Bad Gateway"), "").unwrap_err();
        assert!(matches!(err, ApiError::Status { status: 502, ref message } if message == "Bad Gateway"));
    }

    #[test]
    fn test_interpret_rejected_body() {
        let err = interpret(200, Some("OK"), r#"{"success":false,"error":"URL is blocked"}"#)
            .unwrap_err();
        assert!(matches!(err, ApiError::Rejected(ref m) if m == "URL is blocked"));
    }

    #[test]
    fn test_interpret_success_passes_body_through() {
        let payload = interpret(200, Some("OK"), r##"{"success":true,"data":{"markdown":"# Hi"}}"##)
            .unwrap();
        assert_eq!(payload.as_json().unwrap()["data"]["markdown"], "# Hi");
    }

    #[test]
    fn test_job_state() {
        assert_eq!(job_state(&json!({"status": "scraping"})), JobState::Pending);
        assert_eq!(job_state(&json!({"status": "completed"})), JobState::Completed);
        assert_eq!(
            job_state(&json!({"status": "cancelled"})),
            JobState::Failed("cancelled".to_owned())
        );
        assert_eq!(job_state(&json!({"success": true, "id": "abc"})), JobState::Pending);
    }

    #[test]
    fn test_job_id_missing() {
        let err = job_id(&Payload::Json(json!({"success": true}))).unwrap_err();
        assert!(matches!(err, ApiError::Malformed(_)));
    }

    #[test]
    fn test_agent_capability_follows_settings() {
        let settings = ClientSettings {
            agent_enabled: false,
            ..ClientSettings::default()
        };
        let client = FirecrawlClient::new(&settings, Credential::new("fc-test")).unwrap();
        assert!(matches!(client.agent(), Capability::Unsupported));
    }

    // --- Against a mock server ---

    const AUTH: &str = "Bearer fc-test";

    fn client(server: &ServerGuard) -> FirecrawlClient {
        let settings = ClientSettings {
            base_url: server.url(),
            agent_enabled: true,
        };
        FirecrawlClient::new(&settings, Credential::new("fc-test"))
            .unwrap()
            .with_poll_interval(Duration::from_millis(1))
    }

    fn crawl_request(mode: CrawlMode) -> CrawlRequest {
        CrawlRequest {
            url: "https://docs.example.com".to_owned(),
            limit: 5,
            max_depth: 1,
            mode,
        }
    }

    /// Body that reports `pending` for the first `pending_polls` requests, then `done`.
    fn sequence(
        pending_polls: usize,
        done: &'static str,
    ) -> impl Fn(&Request) -> Vec<u8> + Send + Sync + 'static {
        let hits = AtomicUsize::new(0);
        move |_: &Request| {
            if hits.fetch_add(1, Ordering::SeqCst) < pending_polls {
                br#"{"success":true,"status":"scraping","completed":0}"#.to_vec()
            } else {
                done.as_bytes().to_vec()
            }
        }
    }

    #[test]
    fn test_search_sends_bearer_and_body() {
        let mut server = Server::new();
        let mock = server
            .mock("POST", SEARCH_PATH)
            .match_header("authorization", AUTH)
            .match_body(Matcher::Json(json!({"query": "latest AI news", "limit": 5})))
            .with_header("content-type", "application/json")
            .with_body(r#"{"success":true,"data":[{"url":"https://news.example"}]}"#)
            .create();

        let payload = client(&server)
            .search(&SearchRequest {
                query: "latest AI news".to_owned(),
                limit: 5,
            })
            .unwrap();

        mock.assert();
        assert_eq!(payload.as_json().unwrap()["data"][0]["url"], "https://news.example");
    }

    #[test]
    fn test_status_error_from_server() {
        let mut server = Server::new();
        server
            .mock("POST", MAP_PATH)
            .with_status(402)
            .with_body(r#"{"success":false,"error":"Insufficient credits"}"#)
            .create();

        let err = client(&server)
            .map(&MapRequest {
                url: "https://docs.example.com".to_owned(),
                limit: 100,
                search: None,
            })
            .unwrap_err();

        assert_eq!(err.to_string(), "Status code 402. Insufficient credits");
    }

    #[test]
    fn test_crawl_polls_until_completed() {
        let mut server = Server::new();
        let submit = server
            .mock("POST", CRAWL_PATH)
            .match_header("authorization", AUTH)
            .match_body(Matcher::PartialJson(json!({"url": "https://docs.example.com", "maxDepth": 1})))
            .with_body(r#"{"success":true,"id":"job-1"}"#)
            .create();
        let poll = server
            .mock("GET", "/v1/crawl/job-1")
            .match_header("authorization", AUTH)
            .with_body_from_request(sequence(
                2,
                r##"{"success":true,"status":"completed","data":[{"markdown":"# Docs"}]}"##,
            ))
            .expect(3)
            .create();

        let payload = client(&server).crawl(&crawl_request(CrawlMode::Wait)).unwrap();

        submit.assert();
        poll.assert();
        let body = payload.as_json().unwrap();
        assert_eq!(body["status"], "completed");
        assert_eq!(body["data"][0]["markdown"], "# Docs");
    }

    #[test]
    fn test_failed_crawl_is_job_failed() {
        let mut server = Server::new();
        server
            .mock("POST", CRAWL_PATH)
            .with_body(r#"{"success":true,"id":"job-2"}"#)
            .create();
        server
            .mock("GET", "/v1/crawl/job-2")
            .with_body_from_request(sequence(1, r#"{"success":true,"status":"failed"}"#))
            .create();

        let err = client(&server).crawl(&crawl_request(CrawlMode::Wait)).unwrap_err();

        assert!(
            matches!(err, ApiError::JobFailed { ref id, ref status } if id == "job-2" && status == "failed")
        );
    }

    #[test]
    fn test_cancelled_crawl_is_job_failed() {
        let mut server = Server::new();
        server
            .mock("POST", CRAWL_PATH)
            .with_body(r#"{"success":true,"id":"job-3"}"#)
            .create();
        server
            .mock("GET", "/v1/crawl/job-3")
            .with_body(r#"{"success":true,"status":"cancelled"}"#)
            .create();

        let err = client(&server).crawl(&crawl_request(CrawlMode::Wait)).unwrap_err();

        assert!(matches!(err, ApiError::JobFailed { ref status, .. } if status == "cancelled"));
    }

    #[test]
    fn test_async_crawl_never_polls() {
        let mut server = Server::new();
        let submit = server
            .mock("POST", CRAWL_PATH)
            .with_body(r#"{"success":true,"id":"job-4","url":"https://api.example/v1/crawl/job-4"}"#)
            .create();
        let poll = server
            .mock("GET", Matcher::Regex(r"^/v1/crawl/".to_owned()))
            .expect(0)
            .create();

        let env = crate::commands::crawl::run(&crawl_request(CrawlMode::Submit), &client(&server))
            .unwrap();

        submit.assert();
        poll.assert();
        assert!(env.is_async());
        assert_eq!(env.data().unwrap()["id"], "job-4");
    }

    #[test]
    fn test_extract_polls_its_job() {
        let mut server = Server::new();
        let submit = server
            .mock("POST", EXTRACT_PATH)
            .match_header("authorization", AUTH)
            .match_body(Matcher::Json(json!({
                "urls": ["https://example.com/pricing"],
                "prompt": "Extract pricing tiers",
                "schema": {"type": "object"},
            })))
            .with_body(r#"{"success":true,"id":"ext-1"}"#)
            .create();
        let poll = server
            .mock("GET", "/v1/extract/ext-1")
            .with_body_from_request(sequence(
                1,
                r#"{"success":true,"status":"completed","data":{"tiers":["Free","Pro"]}}"#,
            ))
            .expect(2)
            .create();

        let payload = client(&server)
            .extract(&ExtractRequest {
                urls: vec!["https://example.com/pricing".to_owned()],
                prompt: "Extract pricing tiers".to_owned(),
                schema: Some(json!({"type": "object"})),
                enable_web_search: false,
            })
            .unwrap();

        submit.assert();
        poll.assert();
        assert_eq!(payload.as_json().unwrap()["data"]["tiers"], json!(["Free", "Pro"]));
    }

    #[test]
    fn test_agent_polls_its_job() {
        let mut server = Server::new();
        let submit = server
            .mock("POST", AGENT_PATH)
            .match_header("authorization", AUTH)
            .match_body(Matcher::Json(json!({"prompt": "Find the founders of Firecrawl"})))
            .with_body(r#"{"success":true,"id":"agent-1"}"#)
            .create();
        let poll = server
            .mock("GET", "/v2/agent/agent-1")
            .match_header("authorization", AUTH)
            .with_body_from_request(sequence(
                1,
                r#"{"success":true,"status":"completed","data":{"founders":["A","B"]}}"#,
            ))
            .expect(2)
            .create();

        let api = client(&server);
        let Capability::Supported(agent) = api.agent() else {
            panic!("agent should be offered");
        };
        let payload = agent
            .run_agent(&AgentRequest {
                prompt: "Find the founders of Firecrawl".to_owned(),
                urls: None,
                schema: None,
            })
            .unwrap();

        submit.assert();
        poll.assert();
        assert_eq!(payload.as_json().unwrap()["data"]["founders"], json!(["A", "B"]));
    }

    #[test]
    fn test_job_completed_on_submission_skips_polling() {
        let mut server = Server::new();
        server
            .mock("POST", EXTRACT_PATH)
            .with_body(r#"{"success":true,"status":"completed","data":{"ok":true}}"#)
            .create();
        let poll = server
            .mock("GET", Matcher::Any)
            .expect(0)
            .create();

        let payload = client(&server)
            .extract(&ExtractRequest {
                urls: vec!["https://example.com".to_owned()],
                prompt: "x".to_owned(),
                schema: None,
                enable_web_search: true,
            })
            .unwrap();

        poll.assert();
        assert_eq!(payload.as_json().unwrap()["data"]["ok"], true);
    }
}
