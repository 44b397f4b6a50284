/// Recording stub of the scraping API for unit tests.
use std::cell::RefCell;

use serde_json::Value;

use super::{
    AgentApi, AgentRequest, ApiError, Capability, CrawlRequest, ExtractRequest, MapRequest,
    Payload, ScrapeApi, ScrapeRequest, SearchRequest,
};

/// One call received by the stub.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Search(SearchRequest),
    Map(MapRequest),
    Scrape(ScrapeRequest),
    Crawl(CrawlRequest),
    StartCrawl(CrawlRequest),
    Extract(ExtractRequest),
    Agent(AgentRequest),
}

/// Answers every call with the same response and records what it was asked.
pub struct StubApi {
    pub calls: RefCell<Vec<Call>>,
    response: Value,
    failure: Option<String>,
    agent_enabled: bool,
}

impl StubApi {
    pub fn returning(response: Value) -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            response,
            failure: None,
            agent_enabled: true,
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_owned()),
            ..Self::returning(Value::Null)
        }
    }

    pub fn without_agent(mut self) -> Self {
        self.agent_enabled = false;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn answer(&self, call: Call) -> Result<Payload, ApiError> {
        self.calls.borrow_mut().push(call);
        match &self.failure {
            Some(message) => Err(ApiError::Rejected(message.clone())),
            None => Ok(Payload::Json(self.response.clone())),
        }
    }
}

impl ScrapeApi for StubApi {
    fn search(&self, req: &SearchRequest) -> Result<Payload, ApiError> {
        self.answer(Call::Search(req.clone()))
    }

    fn map(&self, req: &MapRequest) -> Result<Payload, ApiError> {
        self.answer(Call::Map(req.clone()))
    }

    fn scrape(&self, req: &ScrapeRequest) -> Result<Payload, ApiError> {
        self.answer(Call::Scrape(req.clone()))
    }

    fn crawl(&self, req: &CrawlRequest) -> Result<Payload, ApiError> {
        self.answer(Call::Crawl(req.clone()))
    }

    fn start_crawl(&self, req: &CrawlRequest) -> Result<Payload, ApiError> {
        self.answer(Call::StartCrawl(req.clone()))
    }

    fn extract(&self, req: &ExtractRequest) -> Result<Payload, ApiError> {
        self.answer(Call::Extract(req.clone()))
    }

    fn agent(&self) -> Capability<&dyn AgentApi> {
        if self.agent_enabled {
            Capability::Supported(self)
        } else {
            Capability::Unsupported
        }
    }
}

impl AgentApi for StubApi {
    fn run_agent(&self, req: &AgentRequest) -> Result<Payload, ApiError> {
        self.answer(Call::Agent(req.clone()))
    }
}
