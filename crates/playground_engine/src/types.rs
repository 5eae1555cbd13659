use std::fmt;

use serde::Serialize;

pub type RunId = u64;

/// JSON body POSTed to the execution service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExecutionRequest {
    pub code: String,
    /// Engine code: `cs`, `java` or `py`.
    pub language: String,
    pub input: String,
}

/// A response the service actually produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionReply {
    /// 2xx status. `output` is absent when the service sent none.
    Completed { output: Option<String> },
    /// Non-2xx status with the service's `error` field, if any.
    Rejected { status: u16, error: Option<String> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    RunCompleted {
        run_id: RunId,
        result: Result<ExecutionReply, ExecutionError>,
    },
}

/// The request did not yield a usable response.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ExecutionError {
    pub kind: FailureKind,
    pub message: String,
}

impl ExecutionError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    InvalidEndpoint,
    Encoding,
    Network,
    Timeout,
    InvalidResponse,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidEndpoint => write!(f, "invalid endpoint"),
            FailureKind::Encoding => write!(f, "request encoding failed"),
            FailureKind::Network => write!(f, "network error"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::InvalidResponse => write!(f, "invalid response body"),
        }
    }
}

/// Failures setting up the engine itself.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("failed to build http client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("failed to start async runtime: {0}")]
    Runtime(#[source] std::io::Error),
    #[error("failed to spawn engine thread: {0}")]
    Thread(#[source] std::io::Error),
}
