use crate::{Language, RunId};

/// Side effects requested by [`crate::update`]; executed by the front end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Send one execution request to the remote service.
    SubmitRun { run_id: RunId, request: RunRequest },
}

/// Everything the execution service needs for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunRequest {
    pub code: String,
    pub language: Language,
    pub input: String,
}
