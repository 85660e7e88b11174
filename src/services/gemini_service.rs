use super::{ProviderError, TextProvider};
use crate::config::GeminiSettings;
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::{Deserialize, Serialize};

const API_KEY_HEADER: &str = "x-goog-api-key";

pub struct GeminiService {
    client: Client,
    url: String,
    model: String,
    api_key: String,
}

impl GeminiService {
    pub fn new(settings: GeminiSettings) -> Result<Self, ProviderError> {
        let mut builder = Client::builder();
        if let Some(timeout) = settings.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| ProviderError::Client(e.to_string()))?;

        Ok(Self {
            client,
            url: settings.url.trim_end_matches('/').to_string(),
            model: settings.model,
            api_key: settings.api_key,
        })
    }

    fn generate_url(&self) -> String {
        format!("{}/models/{}:generateContent", self.url, self.model)
    }
}

#[async_trait]
impl TextProvider for GeminiService {
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError> {
        let request_body = GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: Some(prompt.to_string()),
                }],
            }],
        };

        debug!(
            "sending prompt to gemini: model={} prompt_len={}",
            self.model,
            prompt.len()
        );

        let response = self
            .client
            .post(self.generate_url())
            .header(API_KEY_HEADER, self.api_key.as_str())
            .json(&request_body)
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.without_url().to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let gemini_response: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Decode(e.without_url().to_string()))?;

        gemini_response.into_text()
    }

    fn model(&self) -> &str {
        &self.model
    }
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    #[serde(default)]
    block_reason: Option<String>,
}

impl GenerateContentResponse {
    /// Joins every text part of the first candidate, the way the Python SDK's
    /// `response.text` accessor does.
    fn into_text(self) -> Result<String, ProviderError> {
        let block_reason = self.prompt_feedback.and_then(|f| f.block_reason);

        let candidate = match self.candidates.into_iter().next() {
            Some(candidate) => candidate,
            None => {
                return Err(ProviderError::EmptyResponse(match block_reason {
                    Some(reason) => format!("prompt blocked ({})", reason),
                    None => "no candidates".to_string(),
                }))
            }
        };

        let texts: Vec<String> = candidate
            .content
            .map(|content| content.parts)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|part| part.text)
            .collect();

        if texts.is_empty() {
            let reason = candidate
                .finish_reason
                .unwrap_or_else(|| "unknown".to_string());
            return Err(ProviderError::EmptyResponse(format!(
                "candidate has no text parts (finish reason {})",
                reason
            )));
        }

        Ok(texts.concat())
    }
}
