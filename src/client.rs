//! Client for the truss prediction service

use std::time::Duration;

use crate::config::ClientConfig;
use crate::error::{ClientResult, PredictionError};
use crate::types::*;

/// Status and body of an HTTP exchange, before any interpretation
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Moves bytes to and from the backend.
///
/// Implementations report connection problems as `Transport`/`Timeout`
/// errors and hand back any HTTP response untouched, whatever its status.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn post_json(&self, url: &str, body: &serde_json::Value) -> ClientResult<RawResponse>;

    async fn get(&self, url: &str) -> ClientResult<RawResponse>;
}

/// `reqwest` transport with a per-request timeout
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    timeout: Duration,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            timeout,
        }
    }

    async fn read(&self, response: reqwest::Response) -> ClientResult<RawResponse> {
        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| self.classify(e))?;
        Ok(RawResponse { status, body })
    }

    fn classify(&self, err: reqwest::Error) -> PredictionError {
        if err.is_timeout() {
            PredictionError::Timeout(self.timeout)
        } else {
            PredictionError::Transport(err.to_string())
        }
    }
}

impl Transport for HttpTransport {
    async fn post_json(&self, url: &str, body: &serde_json::Value) -> ClientResult<RawResponse> {
        let response = self
            .client
            .post(url)
            .json(body)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| self.classify(e))?;
        self.read(response).await
    }

    async fn get(&self, url: &str) -> ClientResult<RawResponse> {
        let response = self
            .client
            .get(url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| self.classify(e))?;
        self.read(response).await
    }
}

/// Client for the prediction backend (`POST /predict`, `GET /health`)
#[derive(Debug, Clone)]
pub struct PredictionClient<T = HttpTransport> {
    base_url: String,
    transport: T,
}

impl PredictionClient<HttpTransport> {
    pub fn new(config: &ClientConfig) -> Self {
        Self::with_transport(config.base_url.clone(), HttpTransport::new(config.timeout))
    }
}

impl<T: Transport> PredictionClient<T> {
    pub fn with_transport(base_url: impl Into<String>, transport: T) -> Self {
        Self {
            base_url: base_url.into(),
            transport,
        }
    }

    /// Get the base URL for the client
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Run one prediction. Exactly one network attempt, no retries;
    /// every failure comes back as `PredictionOutcome::Failure`.
    pub async fn predict(&self, request: &PredictionRequest) -> PredictionOutcome {
        let outcome = PredictionOutcome::from(self.try_predict(request).await);
        match &outcome {
            PredictionOutcome::Success(result) => tracing::info!(
                nodes = result.displacements.len(),
                elements = result.element_forces.len(),
                source = result.source.as_deref().unwrap_or("unknown"),
                "prediction succeeded"
            ),
            PredictionOutcome::Failure(err) => {
                tracing::warn!(kind = err.kind(), "prediction failed: {err}")
            }
        }
        outcome
    }

    async fn try_predict(&self, request: &PredictionRequest) -> ClientResult<PredictionResult> {
        request.validate()?;
        let body = serde_json::to_value(request)
            .map_err(|e| PredictionError::InvalidInput(e.to_string()))?;
        let url = format!("{}/predict", self.base_url);
        tracing::debug!(%url, load = request.load, area = request.area, "sending prediction request");

        let response = self.transport.post_json(&url, &body).await?;
        decode_prediction(&response)
    }

    /// Check if the service is up and whether it has a trained model
    pub async fn health(&self) -> ClientResult<HealthResponse> {
        let url = format!("{}/health", self.base_url);
        let response = self.transport.get(&url).await?;
        check_status(&response)?;
        serde_json::from_str(&response.body).map_err(|e| PredictionError::Parse(e.to_string()))
    }
}

/// Validate a `/predict` response and pull out `result`.
///
/// Fails closed: a missing or mistyped `result` is a `Contract` error rather
/// than an empty success.
pub fn decode_prediction(response: &RawResponse) -> ClientResult<PredictionResult> {
    check_status(response)?;

    let value: serde_json::Value = serde_json::from_str(&response.body)
        .map_err(|e| PredictionError::Parse(e.to_string()))?;
    if !value.is_object() {
        return Err(PredictionError::Contract(format!(
            "expected a JSON object, got {}",
            json_type_name(&value)
        )));
    }

    let envelope: PredictionEnvelope = serde_json::from_value(value)
        .map_err(|e| PredictionError::Contract(e.to_string()))?;

    let raw_result = match envelope.result {
        Some(raw) if !raw.is_null() => raw,
        _ => {
            let detail = match (envelope.source.as_deref(), envelope.prediction) {
                (Some(source), Some(prediction)) => {
                    format!("missing result ({source} returned only a scalar prediction {prediction})")
                }
                _ => "missing result".to_string(),
            };
            return Err(PredictionError::Contract(detail));
        }
    };

    if !raw_result.is_object() {
        return Err(PredictionError::Contract(format!(
            "result must be an object, got {}",
            json_type_name(&raw_result)
        )));
    }

    let mut result: PredictionResult = serde_json::from_value(raw_result)
        .map_err(|e| PredictionError::Contract(format!("bad result field: {e}")))?;
    result.source = envelope.source;
    Ok(result)
}

fn check_status(response: &RawResponse) -> ClientResult<()> {
    if response.is_success() {
        return Ok(());
    }
    Err(PredictionError::Status {
        status: response.status,
        message: error_detail(&response.body),
    })
}

/// FastAPI puts its error text under `detail`; fall back to the raw body.
fn error_detail(body: &str) -> String {
    const MAX_LEN: usize = 200;

    let detail = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| match v.get("detail") {
            Some(serde_json::Value::String(s)) => Some(s.clone()),
            Some(other) => Some(other.to_string()),
            None => None,
        })
        .unwrap_or_else(|| body.trim().to_string());

    if detail.is_empty() {
        "empty response body".to_string()
    } else if detail.chars().count() > MAX_LEN {
        let mut cut: String = detail.chars().take(MAX_LEN).collect();
        cut.push_str("...");
        cut
    } else {
        detail
    }
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
