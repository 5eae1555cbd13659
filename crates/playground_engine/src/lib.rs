//! Playground engine: talks to the remote execution service.
mod engine;
mod executor;
mod types;

pub use engine::EngineHandle;
pub use executor::{ExecutionSettings, Executor, ReqwestExecutor, DEFAULT_ENDPOINT};
pub use types::{
    EngineError, EngineEvent, ExecutionError, ExecutionReply, ExecutionRequest, FailureKind,
    RunId,
};
