// Error types for each concern of the CLI. Components that must never fail
// their caller still use these internally and collapse them to a message at
// the edge (see `news::fetch_or_report` and `llm::Answer`).

use std::io;
use std::time::Duration;
use thiserror::Error;

/// Failure while talking to the terminal.
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// Standard input reached end-of-file while a menu was waiting.
    #[error("input aborted")]
    Aborted,
    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// Failure of the headline request.
#[derive(Debug, Error)]
pub enum NewsError {
    #[error("request timed out after {0:?}")]
    Timeout(Duration),
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
    #[error("{status} - {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Failure of the chat-completion request.
#[derive(Debug, Error)]
pub enum ModelError {
    /// HTTP 429, or an error body tagged as a rate-limit or quota problem.
    #[error("Error code: {status} - {message}")]
    RateLimited { status: u16, message: String },
    #[error("Error code: {status} - {message}")]
    Api { status: u16, message: String },
    #[error("Connection error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("response contained no choices")]
    EmptyChoice,
}

/// Failure appending to the interaction log.
#[derive(Debug, Error)]
pub enum HistoryError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
}
