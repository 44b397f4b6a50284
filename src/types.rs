/// Shared serializable output types for all commands.
///
/// `Envelope` is the only thing ever written to stdout.
use std::fmt::Debug;

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::errors::CliError;
use crate::exitcode;

/// Notice attached to crawls that were submitted but not awaited.
pub const CRAWL_STARTED_MESSAGE: &str = "Crawl started. Use the job ID to check status.";

/// The success-or-failure result of one run.
///
/// Exactly one of `data` and `error` is set; the constructors are the only
/// way to build one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Envelope {
    success: bool,
    #[serde(rename = "async", skip_serializing_if = "std::ops::Not::not")]
    is_async: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

impl Envelope {
    /// A successful result carrying `data`.
    #[must_use]
    pub fn success<T: Serialize + Debug + ?Sized>(data: &T) -> Self {
        Self {
            success: true,
            is_async: false,
            data: Some(encode_data(data)),
            error: None,
            message: None,
        }
    }

    /// A successful submission of a job that keeps running remotely.
    #[must_use]
    pub fn started<T: Serialize + Debug + ?Sized>(data: &T) -> Self {
        Self {
            is_async: true,
            message: Some(CRAWL_STARTED_MESSAGE.to_owned()),
            ..Self::success(data)
        }
    }

    /// A failed result carrying the error's message.
    #[must_use]
    pub fn failure(err: &CliError) -> Self {
        Self {
            success: false,
            is_async: false,
            data: None,
            error: Some(err.to_string()),
            message: None,
        }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        self.success
    }

    #[must_use]
    pub fn is_async(&self) -> bool {
        self.is_async
    }

    #[must_use]
    pub fn data(&self) -> Option<&Value> {
        self.data.as_ref()
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Process exit code for this result.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        if self.success {
            exitcode::SUCCESS
        } else {
            exitcode::FAILURE
        }
    }
}

/// Encode any value for the `data` field.
///
/// Values with a JSON representation are kept as-is. Anything serde_json
/// refuses (non-string map keys, failing `Serialize` impls) is rendered as
/// its `Debug` text, so encoding never fails.
#[must_use]
pub fn encode_data<T: Serialize + Debug + ?Sized>(value: &T) -> Value {
    serde_json::to_value(value).unwrap_or_else(|e| {
        debug!("data has no JSON form ({e}); falling back to text");
        Value::String(format!("{value:?}"))
    })
}

/// Result of promoting KEEP lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PromoteOutput {
    /// Number of lines appended to the memory file.
    pub promoted: usize,
    /// Absolute path of the memory file, when it was written.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory: Option<String>,
    /// Absolute path of the daily log, when lines were promoted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily: Option<String>,
}

/// Result of seeding a workspace. Paths are absolute.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InitOutput {
    pub workspace: String,
    pub created_dirs: Vec<String>,
    pub created_files: Vec<String>,
    pub overwritten_files: Vec<String>,
    pub skipped_files: Vec<String>,
}
