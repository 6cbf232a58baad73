//! Gemini generateContent client.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{AdvisoryError, Result};

/// Reply substituted whenever the upstream call fails for any reason.
pub const FALLBACK_REPLY: &str =
    "I am currently calibrating my sensors. Please try again in a moment.";

const SYSTEM_INSTRUCTION: &str = "You are GearGuard AI, a futuristic maintenance assistant. \
You provide high-priority maintenance advice. \
Be concise, professional, and technical. \
Always suggest preventive actions based on current health data (e.g., CNC-3 85% risk).";

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_MODEL: &str = "gemini-3-pro-preview";

#[derive(Clone, Debug)]
pub struct AdvisoryConfig {
    pub base_url: String,
    pub model: String,
    pub api_key: String,
    pub temperature: f32,
    /// Upper bound on a single call; keeps callers from blocking
    /// indefinitely on a stuck upstream.
    pub timeout: Duration,
}

impl AdvisoryConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            model: DEFAULT_MODEL.into(),
            api_key: api_key.into(),
            temperature: 0.7,
            timeout: Duration::from_secs(30),
        }
    }

    /// Read the API key from `GEMINI_API_KEY`.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("GEMINI_API_KEY").map_err(|_| AdvisoryError::MissingApiKey)?;
        Ok(Self::new(api_key))
    }
}

/// Connector for the Gemini `generateContent` endpoint.
pub struct AdvisoryClient {
    client: Client,
    config: AdvisoryConfig,
}

impl AdvisoryClient {
    pub fn new(config: AdvisoryConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .unwrap_or_else(|_| Client::new());
        Self { client, config }
    }

    /// Ask the advisory service. Never fails: any transport, status, or
    /// shape problem degrades to [`FALLBACK_REPLY`].
    pub async fn ask(&self, prompt: &str) -> String {
        match self.generate(prompt).await {
            Ok(text) => text,
            Err(e) => {
                warn!(error = %e, "advisory call failed, serving fallback");
                FALLBACK_REPLY.to_string()
            }
        }
    }

    /// The fallible path, separated so tests can observe the error taxonomy.
    pub async fn generate(&self, prompt: &str) -> Result<String> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url, self.config.model
        );
        debug!(model = %self.config.model, "sending advisory prompt");

        let request = GenerateContentRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart {
                    text: prompt.to_string(),
                }],
            }],
            system_instruction: RequestContent {
                parts: vec![RequestPart {
                    text: SYSTEM_INSTRUCTION.to_string(),
                }],
            },
            generation_config: GenerationConfig {
                temperature: self.config.temperature,
            },
        };

        let response: GenerateContentResponse = self
            .client
            .post(&url)
            .query(&[("key", self.config.api_key.as_str())])
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        response
            .candidates
            .unwrap_or_default()
            .into_iter()
            .filter_map(|c| c.content)
            .flat_map(|c| c.parts.unwrap_or_default())
            .filter_map(|p| p.text)
            .find(|t| !t.is_empty())
            .ok_or(AdvisoryError::EmptyResponse)
    }
}

// Gemini API types

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<RequestContent>,
    system_instruction: RequestContent,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct RequestContent {
    parts: Vec<RequestPart>,
}

#[derive(Debug, Serialize)]
struct RequestPart {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<ResponseContent>,
}

#[derive(Debug, Deserialize)]
struct ResponseContent {
    parts: Option<Vec<ResponsePart>>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AdvisoryError;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(server: &MockServer) -> AdvisoryClient {
        let mut config = AdvisoryConfig::new("test-key");
        config.base_url = server.uri();
        AdvisoryClient::new(config)
    }

    #[tokio::test]
    async fn ask_returns_first_candidate_text() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1beta/models/gemini-3-pro-preview:generateContent"))
            .and(query_param("key", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "candidates": [{
                    "content": {
                        "parts": [{ "text": "Lubricate the spindle immediately." }],
                        "role": "model"
                    }
                }]
            })))
            .mount(&server)
            .await;

        let reply = test_client(&server).ask("CNC-3 vibration advice?").await;
        assert_eq!(reply, "Lubricate the spindle immediately.");
    }

    #[tokio::test]
    async fn server_error_degrades_to_fallback() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let reply = test_client(&server).ask("anything").await;
        assert_eq!(reply, FALLBACK_REPLY);
    }

    #[tokio::test]
    async fn candidate_free_body_degrades_to_fallback() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let err = client.generate("anything").await.unwrap_err();
        assert!(matches!(err, AdvisoryError::EmptyResponse));
        assert_eq!(client.ask("anything").await, FALLBACK_REPLY);
    }
}
