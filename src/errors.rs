/// Top-level errors: every failure a command can report.
use thiserror::Error;

use crate::api::ApiError;
use crate::exitcode;
use crate::promote::PromoteError;
use crate::workspace::WorkspaceError;

/// Errors that end a run. Each becomes one failure envelope.
#[derive(Debug, Error)]
pub enum CliError {
    /// A command was invoked in a way its arguments do not allow.
    #[error("{0}")]
    Usage(String),

    /// The API key is not configured.
    #[error("{var} environment variable not set")]
    MissingCredential {
        /// Name of the environment variable that was looked up.
        var: &'static str,
    },

    /// `--schema` is not valid JSON.
    #[error("Invalid JSON schema: {0}")]
    Schema(#[source] serde_json::Error),

    /// The agent was asked for without URLs on an API that has no agent.
    #[error(
        "Agent functionality requires URLs or the agent operation. \
         Try using search or map first to discover relevant URLs, then pass them with --urls."
    )]
    UnsupportedOperation,

    /// This build has no HTTP client for the API.
    #[error(
        "Firecrawl HTTP client not available in this build. \
         Run: cargo install firecrawl-cli --features http"
    )]
    MissingDependency,

    /// The API call failed.
    #[error(transparent)]
    External(#[from] ApiError),

    /// Promoting KEEP lines failed.
    #[error(transparent)]
    Promote(#[from] PromoteError),

    /// Seeding a workspace failed.
    #[error(transparent)]
    Workspace(#[from] WorkspaceError),
}

impl CliError {
    /// Machine-readable error kind (snake_case), used in logs.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Usage(_) => "usage",
            Self::MissingCredential { .. } => "missing_credential",
            Self::Schema(_) => "invalid_schema",
            Self::UnsupportedOperation => "unsupported_operation",
            Self::MissingDependency => "missing_dependency",
            Self::External(_) => "external_call",
            Self::Promote(_) => "promote_failed",
            Self::Workspace(_) => "workspace_failed",
        }
    }

    /// Return the CLI exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        exitcode::FAILURE
    }
}
