use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use playground_logging::{pg_info, pg_warn};

use crate::executor::{ExecutionSettings, Executor, ReqwestExecutor};
use crate::{EngineError, EngineEvent, ExecutionRequest, RunId};

enum EngineCommand {
    Execute {
        run_id: RunId,
        request: ExecutionRequest,
    },
}

/// Front-end side of the engine: send runs in, poll completions out.
///
/// Requests run on a tokio runtime owned by a dedicated thread. The thread
/// exits once the handle is dropped.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: ExecutionSettings) -> Result<Self, EngineError> {
        pg_info!("execution endpoint: {}", settings.endpoint);
        let executor = ReqwestExecutor::new(settings)?;
        Self::with_executor(Arc::new(executor))
    }

    pub fn with_executor(executor: Arc<dyn Executor>) -> Result<Self, EngineError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
            .map_err(EngineError::Runtime)?;

        thread::Builder::new()
            .name("playground-engine".to_string())
            .spawn(move || {
                while let Ok(command) = cmd_rx.recv() {
                    let executor = executor.clone();
                    let event_tx = event_tx.clone();
                    runtime.spawn(async move {
                        handle_command(executor.as_ref(), command, event_tx).await;
                    });
                }
            })
            .map_err(EngineError::Thread)?;

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn execute(&self, run_id: RunId, request: ExecutionRequest) {
        if self
            .cmd_tx
            .send(EngineCommand::Execute { run_id, request })
            .is_err()
        {
            pg_warn!("engine thread is gone; run #{} dropped", run_id);
        }
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

async fn handle_command(
    executor: &dyn Executor,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Execute { run_id, request } => {
            let result = executor.execute(&request).await;
            if let Err(err) = &result {
                pg_warn!("run #{} failed ({}): {}", run_id, err.kind, err.message);
            }
            let _ = event_tx.send(EngineEvent::RunCompleted { run_id, result });
        }
    }
}
