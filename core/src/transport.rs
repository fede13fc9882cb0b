use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use crate::config::TriageConfig;
use crate::errors::RecommendResult;

/// Status and raw body of an HTTP response
#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one JSON POST and returns whatever came back
///
/// Implementations only fail for transport-level problems; HTTP error
/// statuses are returned as a normal [`TransportResponse`].
#[async_trait]
pub trait Transport: Send + Sync {
    async fn post_json(&self, url: &str, body: &Value) -> RecommendResult<TransportResponse>;
}

/// [`Transport`] backed by a reqwest client
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http_client: Client,
}

impl ReqwestTransport {
    /// Builds the HTTP client with the configured timeouts
    pub fn new(config: &TriageConfig) -> RecommendResult<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout())
            .connect_timeout(config.connect_timeout())
            .build()?;

        Ok(Self { http_client })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn post_json(&self, url: &str, body: &Value) -> RecommendResult<TransportResponse> {
        let response = self.http_client.post(url).json(body).send().await?;

        let status = response.status().as_u16();
        let body = response.text().await?;
        debug!(status, body_len = body.len(), "Received response");

        Ok(TransportResponse { status, body })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::net::TcpListener;

    /// A localhost port with nothing listening on it
    pub(crate) fn unused_local_port() -> u16 {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    }

    #[test]
    fn test_success_range() {
        let ok = TransportResponse {
            status: 204,
            body: String::new(),
        };
        assert!(ok.is_success());

        let redirect = TransportResponse {
            status: 302,
            body: String::new(),
        };
        assert!(!redirect.is_success());

        let server_error = TransportResponse {
            status: 500,
            body: String::new(),
        };
        assert!(!server_error.is_success());
    }

    #[tokio::test]
    async fn test_unreachable_host_is_transport_error() {
        let config = TriageConfig {
            connect_timeout_secs: 1,
            timeout_secs: 2,
            ..TriageConfig::default()
        };
        let transport = ReqwestTransport::new(&config).unwrap();

        let url = format!(
            "http://127.0.0.1:{}/v1beta/models/x:generateContent?key=hidden",
            unused_local_port()
        );
        let result = transport.post_json(&url, &Value::Null).await;
        match result {
            Err(e) => {
                assert!(e.is_transport());
                assert!(!e.to_string().contains("hidden"));
            }
            Ok(response) => panic!("expected a transport error, got {}", response.status),
        }
    }
}
