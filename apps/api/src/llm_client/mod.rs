/// LLM Client — the single point of entry for generative text API calls in PostGen.
///
/// ARCHITECTURAL RULE: No other module may call the generation API directly.
/// All LLM interactions MUST go through this module.
///
/// One POST per call. No retries, no timeout, no cancellation.
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("No response from API")]
    NoCandidates,

    #[error("LLM returned empty content")]
    EmptyContent,
}

/// Anything that can turn a prompt into generated text.
///
/// Carried in `AppState` as `Arc<dyn TextGenerator>` so handlers can be
/// exercised without a network.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError>;
}

// Request envelope: {"contents":[{"parts":[{"text": ...}]}]}

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

impl<'a> GenerateContentRequest<'a> {
    fn from_prompt(prompt: &'a str) -> Self {
        Self {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: prompt }],
            }],
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: CandidateContent,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ContentPart>,
}

#[derive(Debug, Deserialize)]
pub struct ContentPart {
    pub text: Option<String>,
}

impl GenerateContentResponse {
    /// Reads `candidates[0].content.parts[0].text`. Nothing else is inspected.
    pub fn into_text(self) -> Result<String, LlmError> {
        let candidate = self
            .candidates
            .into_iter()
            .next()
            .ok_or(LlmError::NoCandidates)?;
        candidate
            .content
            .parts
            .into_iter()
            .next()
            .and_then(|p| p.text)
            .ok_or(LlmError::EmptyContent)
    }
}

/// HTTP client for the configured generation endpoint.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_url: String,
}

impl LlmClient {
    pub fn new(api_url: String) -> Self {
        Self {
            client: Client::new(),
            api_url,
        }
    }

    /// Makes a raw call to the generation API, returning the decoded response.
    pub async fn call(&self, prompt: &str) -> Result<GenerateContentResponse, LlmError> {
        let request_body = GenerateContentRequest::from_prompt(prompt);

        let response = self
            .client
            .post(&self.api_url)
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(LlmError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let decoded: GenerateContentResponse = serde_json::from_str(&body)?;
        debug!(
            "Generation call succeeded: candidates={}",
            decoded.candidates.len()
        );
        Ok(decoded)
    }
}

#[async_trait]
impl TextGenerator for LlmClient {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        self.call(prompt).await?.into_text()
    }
}
