//! Parsing of the model's follow-up suggestions.

use serde_json::Value;
use thiserror::Error;

pub const SUGGESTION_COUNT: usize = 5;

pub type Suggestions = [String; SUGGESTION_COUNT];

/// Returned when the model's suggestions cannot be used.
pub const FALLBACK_SUGGESTIONS: [&str; SUGGESTION_COUNT] = [
    "Add a personal opinion on one key point.",
    "Insert a real-life example from your experience.",
    "Vary sentence starters for better flow.",
    "Include a question or rhetorical aside.",
    "Check and adjust any awkward phrasing manually.",
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SuggestionParseError {
    #[error("suggestion response is empty")]
    Empty,

    #[error("suggestion response is not valid JSON: {0}")]
    InvalidJson(String),

    #[error("suggestion response is not a JSON array")]
    NotAnArray,

    #[error("expected 5 suggestions, got {0}")]
    WrongLength(usize),

    #[error("suggestion {0} is not a string")]
    NotAString(usize),
}

pub fn fallback_suggestions() -> Suggestions {
    FALLBACK_SUGGESTIONS.map(String::from)
}

/// Parse a JSON array of exactly [`SUGGESTION_COUNT`] strings.
///
/// A surrounding Markdown code fence (```` ```json ... ``` ````) is tolerated.
pub fn parse_suggestions(raw: &str) -> Result<Suggestions, SuggestionParseError> {
    let body = strip_code_fence(raw.trim());
    if body.is_empty() {
        return Err(SuggestionParseError::Empty);
    }

    let value: Value = serde_json::from_str(body)
        .map_err(|e| SuggestionParseError::InvalidJson(e.to_string()))?;
    let Value::Array(items) = value else {
        return Err(SuggestionParseError::NotAnArray);
    };
    if items.len() != SUGGESTION_COUNT {
        return Err(SuggestionParseError::WrongLength(items.len()));
    }

    let mut parsed = fallback_suggestions();
    for (idx, item) in items.into_iter().enumerate() {
        match item {
            Value::String(s) => parsed[idx] = s,
            _ => return Err(SuggestionParseError::NotAString(idx)),
        }
    }
    Ok(parsed)
}

/// [`parse_suggestions`], falling back to [`FALLBACK_SUGGESTIONS`] on any error.
pub fn suggestions_or_fallback(raw: &str) -> Suggestions {
    parse_suggestions(raw).unwrap_or_else(|e| {
        log::warn!("Using fallback suggestions: {}", e);
        fallback_suggestions()
    })
}

fn strip_code_fence(raw: &str) -> &str {
    let Some(rest) = raw.strip_prefix("```") else {
        return raw;
    };
    // Drop an optional language tag on the opening fence line.
    let rest = match rest.find('\n') {
        Some(newline) => &rest[newline + 1..],
        None => rest,
    };
    rest.trim_end().strip_suffix("```").unwrap_or(rest).trim()
}
