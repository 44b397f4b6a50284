/// Errors from the scraping API layer.
use thiserror::Error;

/// Typed failures of a single API call.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, TLS, connection reset).
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with a non-success HTTP status.
    #[error("Status code {status}. {message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Error text from the response body, or the canonical reason.
        message: String,
    },

    /// The API answered 2xx but flagged the request as unsuccessful.
    #[error("{0}")]
    Rejected(String),

    /// An asynchronous job ended without completing.
    #[error("Job {id} ended with status '{status}'")]
    JobFailed {
        /// Job identifier returned on submission.
        id: String,
        /// Terminal status reported by the API.
        status: String,
    },

    /// The API answered with a body this client cannot interpret.
    #[error("Unexpected response: {0}")]
    Malformed(String),
}
