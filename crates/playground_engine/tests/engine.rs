use std::sync::{Arc, Mutex};
use std::time::Duration;

use playground_engine::{
    EngineEvent, EngineHandle, ExecutionError, ExecutionReply, ExecutionRequest, Executor,
};

#[derive(Default)]
struct RecordingExecutor {
    seen: Mutex<Vec<ExecutionRequest>>,
}

#[async_trait::async_trait]
impl Executor for RecordingExecutor {
    async fn execute(&self, request: &ExecutionRequest) -> Result<ExecutionReply, ExecutionError> {
        self.seen.lock().unwrap().push(request.clone());
        Ok(ExecutionReply::Completed {
            output: Some(request.input.clone()),
        })
    }
}

fn request(input: &str) -> ExecutionRequest {
    ExecutionRequest {
        code: "print(input())".to_string(),
        language: "py".to_string(),
        input: input.to_string(),
    }
}

#[test]
fn engine_reports_completion_with_run_id() {
    playground_logging::initialize_for_tests();
    let executor = Arc::new(RecordingExecutor::default());
    let engine = EngineHandle::with_executor(executor.clone()).expect("engine starts");

    engine.execute(7, request("seven"));

    let event = engine
        .recv_timeout(Duration::from_secs(5))
        .expect("completion event");
    assert_eq!(
        event,
        EngineEvent::RunCompleted {
            run_id: 7,
            result: Ok(ExecutionReply::Completed {
                output: Some("seven".to_string())
            }),
        }
    );
    assert_eq!(executor.seen.lock().unwrap().len(), 1);
    assert!(engine.try_recv().is_none());
}

#[test]
fn engine_runs_each_command_once() {
    let executor = Arc::new(RecordingExecutor::default());
    let engine = EngineHandle::with_executor(executor.clone()).expect("engine starts");

    engine.execute(1, request("a"));
    engine.execute(2, request("b"));

    let mut ids = Vec::new();
    for _ in 0..2 {
        match engine.recv_timeout(Duration::from_secs(5)) {
            Some(EngineEvent::RunCompleted { run_id, .. }) => ids.push(run_id),
            None => panic!("missing completion"),
        }
    }
    ids.sort_unstable();
    assert_eq!(ids, vec![1, 2]);
    assert_eq!(executor.seen.lock().unwrap().len(), 2);
}
