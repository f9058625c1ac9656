//! Form Relay Endpoint
//!
//! Implementation of `SubmissionEndpoint` for a hosted form relay.

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use serde::{Deserialize, Serialize};

use waitlist_core::{
    error::{Result, WaitlistError},
    endpoint::SubmissionEndpoint,
    submission::SubmissionPayload,
};

/// Relay configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RelayConfig {
    /// Form URL signups are posted to
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Request timeout in milliseconds. Unset means wait for as long as the
    /// relay takes. Only honoured on native targets.
    #[serde(default)]
    pub timeout_ms: Option<u64>,
}

fn default_endpoint() -> String {
    "https://formspree.io/f/xldwvvyk".into()
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_ms: None,
        }
    }
}

impl RelayConfig {
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Default::default()
        }
    }
}

/// Posts signups as JSON to a form relay
pub struct FormRelayEndpoint {
    client: reqwest::Client,
    config: RelayConfig,
}

impl FormRelayEndpoint {
    /// Create from configuration
    pub fn new(config: RelayConfig) -> Result<Self> {
        let client = build_client(&config)?;
        Ok(Self { client, config })
    }

    /// Create with the default relay URL
    pub fn hosted() -> Result<Self> {
        Self::new(RelayConfig::default())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn build_client(config: &RelayConfig) -> Result<reqwest::Client> {
    let mut builder = reqwest::Client::builder();
    if let Some(ms) = config.timeout_ms {
        builder = builder.timeout(std::time::Duration::from_millis(ms));
    }
    builder
        .build()
        .map_err(|e| WaitlistError::Config(format!("HTTP client: {e}")))
}

#[cfg(target_arch = "wasm32")]
fn build_client(config: &RelayConfig) -> Result<reqwest::Client> {
    if config.timeout_ms.is_some() {
        tracing::warn!("Relay timeout is not supported in the browser, ignoring");
    }
    reqwest::Client::builder()
        .build()
        .map_err(|e| WaitlistError::Config(format!("HTTP client: {e}")))
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl SubmissionEndpoint for FormRelayEndpoint {
    async fn submit(&self, payload: &SubmissionPayload) -> Result<()> {
        let response = self
            .client
            .post(&self.config.endpoint)
            .header(ACCEPT, "application/json")
            .json(payload)
            .send()
            .await
            .map_err(|e| WaitlistError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            tracing::debug!(%status, "Relay accepted signup");
            Ok(())
        } else {
            Err(WaitlistError::SubmissionRejected(status.as_u16()))
        }
    }

    fn name(&self) -> &str {
        "FormRelay"
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    use axum::{
        extract::State,
        http::{HeaderMap, StatusCode, header::CONTENT_TYPE},
        routing::post,
        Json, Router,
    };
    use serde_json::Value;

    use super::*;

    #[derive(Clone)]
    struct RelayState {
        status: StatusCode,
        delay: Duration,
        seen: Arc<Mutex<Vec<(String, Value)>>>,
    }

    async fn receive(
        State(state): State<RelayState>,
        headers: HeaderMap,
        Json(body): Json<Value>,
    ) -> StatusCode {
        let content_type = headers
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        state.seen.lock().unwrap().push((content_type, body));
        tokio::time::sleep(state.delay).await;
        state.status
    }

    async fn spawn_relay(status: StatusCode, delay: Duration) -> (String, RelayState) {
        let state = RelayState {
            status,
            delay,
            seen: Arc::default(),
        };
        let app = Router::new()
            .route("/f/test", post(receive))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        (format!("http://{addr}/f/test"), state)
    }

    fn payload(email: &str) -> SubmissionPayload {
        SubmissionPayload {
            email: email.into(),
            timestamp: "2026-10-19T08:30:00.000Z".into(),
            source: "Compound Waitlist Landing Page".into(),
            message: "New waitlist signup from Compound landing page".into(),
        }
    }

    #[test]
    fn test_config_defaults() {
        let config = RelayConfig::default();
        assert_eq!(config.endpoint, "https://formspree.io/f/xldwvvyk");
        assert_eq!(config.timeout_ms, None);
    }

    #[test]
    fn test_config_from_json() {
        let config: RelayConfig = serde_json::from_str(r#"{ "timeout_ms": 8000 }"#).unwrap();
        assert_eq!(config.endpoint, default_endpoint());
        assert_eq!(config.timeout_ms, Some(8_000));
    }

    #[tokio::test]
    async fn test_posts_json_payload() {
        let (url, relay) = spawn_relay(StatusCode::OK, Duration::ZERO).await;
        let endpoint = FormRelayEndpoint::new(RelayConfig::with_endpoint(url)).unwrap();

        endpoint.submit(&payload("alice@example.com")).await.unwrap();

        let seen = relay.seen.lock().unwrap().clone();
        assert_eq!(seen.len(), 1);
        let (content_type, body) = &seen[0];
        assert_eq!(content_type, "application/json");
        assert_eq!(body["email"], "alice@example.com");
        assert_eq!(body["timestamp"], "2026-10-19T08:30:00.000Z");
        assert_eq!(body["source"], "Compound Waitlist Landing Page");
        assert_eq!(body["message"], "New waitlist signup from Compound landing page");
    }

    #[tokio::test]
    async fn test_any_2xx_is_success() {
        let (url, _relay) = spawn_relay(StatusCode::ACCEPTED, Duration::ZERO).await;
        let endpoint = FormRelayEndpoint::new(RelayConfig::with_endpoint(url)).unwrap();

        assert!(endpoint.submit(&payload("bob@test.com")).await.is_ok());
    }

    #[tokio::test]
    async fn test_server_error_is_rejection() {
        let (url, _relay) = spawn_relay(StatusCode::INTERNAL_SERVER_ERROR, Duration::ZERO).await;
        let endpoint = FormRelayEndpoint::new(RelayConfig::with_endpoint(url)).unwrap();

        let err = endpoint.submit(&payload("bob@test.com")).await.unwrap_err();
        assert!(matches!(err, WaitlistError::SubmissionRejected(500)));
    }

    #[tokio::test]
    async fn test_unreachable_relay_is_transport_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let endpoint =
            FormRelayEndpoint::new(RelayConfig::with_endpoint(format!("http://{addr}/f/test")))
                .unwrap();

        let err = endpoint.submit(&payload("carol@example.org")).await.unwrap_err();
        assert!(matches!(err, WaitlistError::Transport(_)));
    }

    #[tokio::test]
    async fn test_timeout_is_transport_error() {
        let (url, _relay) = spawn_relay(StatusCode::OK, Duration::from_secs(2)).await;
        let endpoint = FormRelayEndpoint::new(RelayConfig {
            endpoint: url,
            timeout_ms: Some(100),
        })
        .unwrap();

        let err = endpoint.submit(&payload("dave@example.net")).await.unwrap_err();
        assert!(matches!(err, WaitlistError::Transport(_)));
    }
}
