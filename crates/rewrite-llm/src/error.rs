use thiserror::Error;

#[derive(Error, Debug)]
pub enum LLMError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("API error: {0}")]
    Api(String),
}

impl LLMError {
    /// True when the request was abandoned because it ran past its deadline.
    pub fn is_timeout(&self) -> bool {
        matches!(self, LLMError::Http(e) if e.is_timeout())
    }
}
