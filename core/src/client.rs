use reqwest::Url;
use tracing::{debug, error, info, warn};

use crate::config::TriageConfig;
use crate::errors::{RecommendError, RecommendResult};
use crate::prompt::build_prompt;
use crate::transport::{ReqwestTransport, Transport};
use crate::types::{GenerateContentRequest, GenerateContentResponse};

/// Client that turns a symptom description into a department recommendation
///
/// Stateless across calls: every call sends only the instruction template
/// and the latest description.
#[derive(Debug, Clone)]
pub struct RecommendationClient<T = ReqwestTransport> {
    transport: T,
    config: TriageConfig,
}

impl RecommendationClient<ReqwestTransport> {
    /// Create a client that talks to the configured endpoint over HTTP
    pub fn new(config: TriageConfig) -> RecommendResult<Self> {
        let transport = ReqwestTransport::new(&config)?;
        Ok(Self::with_transport(config, transport))
    }
}

impl<T: Transport> RecommendationClient<T> {
    pub fn with_transport(config: TriageConfig, transport: T) -> Self {
        Self { transport, config }
    }

    pub fn config(&self) -> &TriageConfig {
        &self.config
    }

    /// Get the generateContent URL, key included
    fn endpoint_url(&self, api_key: &str) -> RecommendResult<Url> {
        let mut url = Url::parse(&self.config.api_base_url).map_err(|e| {
            RecommendError::Transport(format!(
                "Invalid API base URL {}: {}",
                self.config.api_base_url, e
            ))
        })?;

        let method = format!("{}:generateContent", self.config.model_name);
        url.path_segments_mut()
            .map_err(|_| {
                RecommendError::Transport(format!(
                    "API base URL cannot carry a path: {}",
                    self.config.api_base_url
                ))
            })?
            .pop_if_empty()
            .extend(["v1beta", "models", method.as_str()]);
        url.query_pairs_mut().append_pair("key", api_key);

        Ok(url)
    }

    /// Recommends a department, substituting a fixed fallback on any failure.
    ///
    /// Never fails: diagnostics for failures go to the log, the returned
    /// string goes to the transcript.
    pub async fn recommend(&self, symptoms: &str) -> String {
        match self.try_recommend(symptoms).await {
            Ok(reply) => reply,
            Err(e) => {
                match &e {
                    RecommendError::Configuration(_) => {
                        error!(error = %e, "Recommendation skipped")
                    }
                    RecommendError::Transport(_) | RecommendError::Http { .. } => {
                        error!(error = %e, "Error communicating with Gemini API")
                    }
                    RecommendError::Format(_) => {
                        error!(error = %e, "Error decoding API response")
                    }
                    RecommendError::Schema(_) => {
                        error!(error = %e, "Unexpected API response structure")
                    }
                }
                e.fallback_message().to_string()
            }
        }
    }

    /// Same call as [`recommend`](Self::recommend) with the failure kind kept.
    pub async fn try_recommend(&self, symptoms: &str) -> RecommendResult<String> {
        let api_key = self.config.api_key().ok_or_else(|| {
            RecommendError::Configuration(format!(
                "{} is not set; no request was sent",
                crate::config::API_KEY_ENV
            ))
        })?;

        let request = GenerateContentRequest::user_text(build_prompt(symptoms));
        let body = serde_json::to_value(&request)?;
        let url = self.endpoint_url(api_key)?;

        let mut logged_url = url.clone();
        logged_url.set_query(None);
        debug!(
            endpoint = %logged_url,
            symptoms_len = symptoms.len(),
            "Sending recommendation request"
        );

        let response = self.transport.post_json(url.as_str(), &body).await?;

        if !response.is_success() {
            return Err(RecommendError::Http {
                status_code: response.status,
                message: format!("API request failed: {}", response.body),
            });
        }

        let parsed = GenerateContentResponse::parse(&response.body)?;
        if let Some(reason) = parsed
            .candidates
            .first()
            .and_then(|c| c.finish_reason.as_deref())
        {
            if reason != "STOP" {
                warn!("Gemini generation finish reason: {}", reason);
            }
        }

        let reply = parsed.reply_text().map_err(|e| match e {
            RecommendError::Schema(msg) => {
                RecommendError::Schema(format!("{} (body: {})", msg, response.body))
            }
            other => other,
        })?;

        info!(reply_len = reply.len(), "Received recommendation");
        Ok(reply)
    }
}
