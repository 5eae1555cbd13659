use playground_core::{Effect, Msg, RunOutcome, RunRequest};
use playground_engine::{
    EngineError, EngineEvent, EngineHandle, ExecutionError, ExecutionReply, ExecutionRequest,
    ExecutionSettings,
};
use playground_logging::{pg_info, pg_warn};

/// Executes core effects on the engine and turns engine events back into messages.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(settings: ExecutionSettings) -> Result<Self, EngineError> {
        Ok(Self::with_engine(EngineHandle::new(settings)?))
    }

    pub fn with_engine(engine: EngineHandle) -> Self {
        Self { engine }
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::SubmitRun { run_id, request } => {
                    pg_info!(
                        "SubmitRun run_id={} language={} code_len={} input_len={}",
                        run_id,
                        request.language,
                        request.code.len(),
                        request.input.len()
                    );
                    self.engine.execute(run_id, to_engine_request(request));
                }
            }
        }
    }

    /// Collects every completion that arrived since the last call.
    pub fn drain(&self) -> Vec<Msg> {
        let mut inbox = Vec::new();
        while let Some(event) = self.engine.try_recv() {
            match event {
                EngineEvent::RunCompleted { run_id, result } => {
                    let outcome = map_outcome(result);
                    pg_info!("RunFinished run_id={} outcome={}", run_id, outcome.kind_label());
                    inbox.push(Msg::RunFinished { run_id, outcome });
                }
            }
        }
        inbox
    }
}

fn to_engine_request(request: RunRequest) -> ExecutionRequest {
    ExecutionRequest {
        code: request.code,
        language: request.language.engine_code().to_string(),
        input: request.input,
    }
}

fn map_outcome(result: Result<ExecutionReply, ExecutionError>) -> RunOutcome {
    match result {
        Ok(ExecutionReply::Completed { output }) => RunOutcome::Completed { output },
        Ok(ExecutionReply::Rejected { status, error }) => {
            pg_warn!("execution service answered {}: {:?}", status, error);
            RunOutcome::Rejected { error }
        }
        Err(err) => RunOutcome::TransportFailed {
            message: err.message,
        },
    }
}
