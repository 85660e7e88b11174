pub mod gemini_service;

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("failed to build http client: {0}")]
    Client(String),

    #[error("failed to send request: {0}")]
    Network(String),

    #[error("provider returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error("failed to decode provider response: {0}")]
    Decode(String),

    #[error("provider returned no text: {0}")]
    EmptyResponse(String),
}

/// Something that turns a prompt into generated text.
///
/// The server holds exactly one implementation for its whole lifetime and
/// shares it read-only between workers.
#[async_trait]
pub trait TextProvider: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError>;

    fn model(&self) -> &str;
}
