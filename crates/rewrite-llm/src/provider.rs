use async_trait::async_trait;
use serde::Serialize;

pub use crate::error::LLMError;

pub type Result<T> = std::result::Result<T, LLMError>;

/// Sampling parameters for a single completion call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CompletionParams {
    pub temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub presence_penalty: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency_penalty: Option<f32>,
    #[serde(rename = "max_tokens")]
    pub max_output_tokens: u32,
}

impl CompletionParams {
    pub const fn new(temperature: f32, max_output_tokens: u32) -> Self {
        Self {
            temperature,
            presence_penalty: None,
            frequency_penalty: None,
            max_output_tokens,
        }
    }

    pub const fn with_penalties(self, presence: f32, frequency: f32) -> Self {
        Self {
            presence_penalty: Some(presence),
            frequency_penalty: Some(frequency),
            ..self
        }
    }
}

#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Generate text for a single user prompt.
    ///
    /// Returns the trimmed content of the first choice, or an empty string
    /// when the service answered without any content.
    async fn complete(&self, prompt: &str, params: &CompletionParams) -> Result<String>;
}
