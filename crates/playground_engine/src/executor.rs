use std::time::Duration;

use playground_logging::{pg_debug, pg_warn};
use reqwest::header::CONTENT_TYPE;
use serde_json::Value;

use crate::{EngineError, ExecutionError, ExecutionReply, ExecutionRequest, FailureKind};

pub const DEFAULT_ENDPOINT: &str = "https://api.codex.jaagrav.in";

#[derive(Debug, Clone)]
pub struct ExecutionSettings {
    pub endpoint: String,
    /// `None` leaves connecting unbounded.
    pub connect_timeout: Option<Duration>,
    /// `None` lets a hung request stay pending until the transport gives up.
    pub request_timeout: Option<Duration>,
}

impl Default for ExecutionSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            connect_timeout: None,
            request_timeout: None,
        }
    }
}

#[async_trait::async_trait]
pub trait Executor: Send + Sync {
    async fn execute(&self, request: &ExecutionRequest) -> Result<ExecutionReply, ExecutionError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestExecutor {
    settings: ExecutionSettings,
    client: reqwest::Client,
}

impl ReqwestExecutor {
    pub fn new(settings: ExecutionSettings) -> Result<Self, EngineError> {
        let client = build_client(&settings)?;
        Ok(Self { settings, client })
    }
}

fn build_client(settings: &ExecutionSettings) -> Result<reqwest::Client, EngineError> {
    let mut builder = reqwest::Client::builder();
    if let Some(timeout) = settings.connect_timeout {
        builder = builder.connect_timeout(timeout);
    }
    if let Some(timeout) = settings.request_timeout {
        builder = builder.timeout(timeout);
    }
    builder.build().map_err(EngineError::Client)
}

#[async_trait::async_trait]
impl Executor for ReqwestExecutor {
    async fn execute(&self, request: &ExecutionRequest) -> Result<ExecutionReply, ExecutionError> {
        let url = reqwest::Url::parse(&self.settings.endpoint)
            .map_err(|err| ExecutionError::new(FailureKind::InvalidEndpoint, err.to_string()))?;
        let body = serde_json::to_vec(request)
            .map_err(|err| ExecutionError::new(FailureKind::Encoding, err.to_string()))?;

        pg_debug!(
            "POST {} language={} code_len={} input_len={}",
            url,
            request.language,
            request.code.len(),
            request.input.len()
        );

        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        let text = response.text().await.map_err(map_reqwest_error)?;
        let payload: Value = serde_json::from_str(&text).map_err(|err| {
            pg_warn!("execution service sent non-JSON body (status {})", status);
            ExecutionError::new(FailureKind::InvalidResponse, err.to_string())
        })?;

        if status.is_success() {
            Ok(ExecutionReply::Completed {
                output: text_field(&payload, "output"),
            })
        } else {
            Ok(ExecutionReply::Rejected {
                status: status.as_u16(),
                error: text_field(&payload, "error"),
            })
        }
    }
}

/// Reads `key` from a JSON object. Non-string values are rendered as JSON text.
fn text_field(payload: &Value, key: &str) -> Option<String> {
    match payload.get(key)? {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}

fn map_reqwest_error(err: reqwest::Error) -> ExecutionError {
    if err.is_timeout() {
        return ExecutionError::new(FailureKind::Timeout, err.to_string());
    }
    ExecutionError::new(FailureKind::Network, err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn text_field_handles_shapes() {
        let payload = json!({ "output": "hi\n", "error": null, "code": 3 });
        assert_eq!(text_field(&payload, "output").as_deref(), Some("hi\n"));
        assert_eq!(text_field(&payload, "error"), None);
        assert_eq!(text_field(&payload, "missing"), None);
        assert_eq!(text_field(&payload, "code").as_deref(), Some("3"));
        assert_eq!(text_field(&json!([1, 2]), "output"), None);
    }

    #[test]
    fn request_serializes_to_wire_shape() {
        let request = ExecutionRequest {
            code: "print(\"hi\")".to_string(),
            language: "py".to_string(),
            input: String::new(),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({ "code": "print(\"hi\")", "language": "py", "input": "" })
        );
    }

    #[test]
    fn default_settings_have_no_timeouts() {
        let settings = ExecutionSettings::default();
        assert_eq!(settings.endpoint, DEFAULT_ENDPOINT);
        assert!(settings.connect_timeout.is_none());
        assert!(settings.request_timeout.is_none());
    }
}
