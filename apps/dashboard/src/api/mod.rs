use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::config::AppConfig;
use crate::fixtures::incidents::sample_incident_payload;
use crate::models::Incident;

pub type ClientResult<T> = Result<T, ClientError>;

/// Stand-in for the incident API. Answers from fixtures after the configured delay.
#[derive(Clone)]
pub struct IncidentClient {
    config: Arc<AppConfig>,
}

impl IncidentClient {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    pub async fn list_incidents(&self) -> ClientResult<Vec<Incident>> {
        simulate_latency(self.config.load_delay_ms()).await;
        let envelope = decode_envelope::<Vec<Incident>>(sample_incident_payload())?;
        tracing::debug!(trace_id = ?envelope.trace_id, "incident listing answered");
        envelope.into_data()
    }
}

#[cfg(target_arch = "wasm32")]
async fn simulate_latency(millis: u32) {
    gloo_timers::future::TimeoutFuture::new(millis).await;
}

// Timers need a browser event loop; native builds answer immediately.
#[cfg(not(target_arch = "wasm32"))]
async fn simulate_latency(_millis: u32) {}

fn decode_envelope<T>(payload: Value) -> ClientResult<ApiEnvelope<T>>
where
    T: DeserializeOwned,
{
    serde_json::from_value(payload).map_err(ClientError::from)
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    pub data: Option<T>,
    #[serde(default)]
    pub error: Option<ApiErrorBody>,
    #[serde(default)]
    pub trace_id: Option<String>,
}

impl<T> ApiEnvelope<T> {
    pub fn into_data(self) -> ClientResult<T> {
        if !self.success {
            return Err(match self.error {
                Some(body) => ClientError::Api(body),
                None => ClientError::Api(ApiErrorBody {
                    code: "unknown".into(),
                    message: "request reported failure without details".into(),
                }),
            });
        }

        self.data.ok_or(ClientError::EmptyResponse)
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ApiErrorBody {
    pub code: String,
    pub message: String,
}

impl fmt::Display for ApiErrorBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("api error {0}")]
    Api(ApiErrorBody),
    #[error("empty response body")]
    EmptyResponse,
}
