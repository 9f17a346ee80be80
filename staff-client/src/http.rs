//! HTTP client for the generateContent API

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::{ClientError, ClientResult, NarrativeConfig, NarrativeGenerator, NarrativeRequest};

const API_KEY_HEADER: &str = "x-goog-api-key";

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl GenerateResponse {
    /// Concatenated text of the first candidate
    fn into_text(self) -> Option<String> {
        let content = self.candidates.into_iter().next()?.content?;
        let text: String = content.parts.into_iter().filter_map(|p| p.text).collect();
        let text = text.trim();
        if text.is_empty() {
            None
        } else {
            Some(text.to_string())
        }
    }
}

/// HTTP client for the text-generation service
#[derive(Debug, Clone)]
pub struct HttpNarrativeClient {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
}

impl HttpNarrativeClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &NarrativeConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint(),
            api_key: config.api_key.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Send one prompt and return the generated text
    pub async fn generate_text(&self, prompt: &str) -> ClientResult<String> {
        let api_key = self.api_key.as_deref().ok_or(ClientError::MissingApiKey)?;

        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };

        let response = self
            .client
            .post(&self.endpoint)
            .header(API_KEY_HEADER, api_key)
            .json(&body)
            .send()
            .await?;

        Self::handle_response(response).await
    }

    /// Handle the HTTP response
    async fn handle_response(response: reqwest::Response) -> ClientResult<String> {
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await?;
            return Err(ClientError::Service {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        let parsed: GenerateResponse = serde_json::from_slice(&bytes)?;
        parsed
            .into_text()
            .ok_or_else(|| ClientError::InvalidResponse("No text in response".to_string()))
    }
}

#[async_trait]
impl NarrativeGenerator for HttpNarrativeClient {
    async fn generate(&self, request: &NarrativeRequest) -> ClientResult<String> {
        tracing::debug!(kind = ?request.kind(), endpoint = %self.endpoint, "Requesting narrative");
        self.generate_text(&request.prompt()).await
    }
}
