pub mod error;
pub mod openai;
pub mod provider;

pub use error::LLMError;
pub use openai::OpenAIClient;
pub use provider::{CompletionClient, CompletionParams, Result};
