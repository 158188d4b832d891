use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::sanitize::sanitize_value;

pub const DEFAULT_TONE_HINT: &str = "friendly, conversational";

/// Raw request body as posted by the client.
///
/// Fields are kept as untyped JSON so a number or `null` reads as an empty
/// field during validation instead of failing deserialization.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RewriteRequest {
    #[serde(default)]
    pub text: Option<Value>,
    #[serde(default)]
    pub anecdote1: Option<Value>,
    #[serde(default)]
    pub anecdote2: Option<Value>,
    #[serde(default)]
    pub tone_hint: Option<Value>,
    #[serde(default)]
    pub extra_detail: Option<Value>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Text and two personal details are required for better humanization")]
    MissingFields,
}

/// Sanitized, validated input for one rewrite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteInput {
    pub text: String,
    pub anecdote1: String,
    pub anecdote2: String,
    pub tone_hint: String,
    pub extra_detail: Option<String>,
}

impl RewriteInput {
    pub fn from_request(request: &RewriteRequest) -> Result<Self, ValidationError> {
        let text = sanitize_value(request.text.as_ref());
        let anecdote1 = sanitize_value(request.anecdote1.as_ref());
        let anecdote2 = sanitize_value(request.anecdote2.as_ref());

        if text.is_empty() || anecdote1.is_empty() || anecdote2.is_empty() {
            return Err(ValidationError::MissingFields);
        }

        let tone_hint = Some(sanitize_value(request.tone_hint.as_ref()))
            .filter(|hint| !hint.is_empty())
            .unwrap_or_else(|| DEFAULT_TONE_HINT.to_string());
        let extra_detail =
            Some(sanitize_value(request.extra_detail.as_ref())).filter(|detail| !detail.is_empty());

        Ok(Self {
            text,
            anecdote1,
            anecdote2,
            tone_hint,
            extra_detail,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(json: &str) -> RewriteRequest {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn accepts_complete_request() {
        let input = RewriteInput::from_request(&request(
            r#"{
                "text": " Some essay. ",
                "anecdote1": "I grew up near the sea",
                "anecdote2": "My first job was at a bakery",
                "toneHint": "warm",
                "extraDetail": "Applying for a marine biology course"
            }"#,
        ))
        .unwrap();

        assert_eq!(input.text, "Some essay.");
        assert_eq!(input.tone_hint, "warm");
        assert_eq!(
            input.extra_detail.as_deref(),
            Some("Applying for a marine biology course")
        );
    }

    #[test]
    fn defaults_tone_and_drops_empty_detail() {
        let input = RewriteInput::from_request(&request(
            r#"{"text": "t", "anecdote1": "a", "anecdote2": "b", "toneHint": "  ", "extraDetail": "<>"}"#,
        ))
        .unwrap();

        assert_eq!(input.tone_hint, DEFAULT_TONE_HINT);
        assert_eq!(input.extra_detail, None);
    }

    #[test]
    fn rejects_missing_or_blank_required_fields() {
        let cases = [
            r#"{}"#,
            r#"{"anecdote1": "a", "anecdote2": "b"}"#,
            r#"{"text": "t", "anecdote2": "b"}"#,
            r#"{"text": "t", "anecdote1": "a"}"#,
            r#"{"text": "   ", "anecdote1": "a", "anecdote2": "b"}"#,
            r#"{"text": "t", "anecdote1": "<>", "anecdote2": "b"}"#,
            r#"{"text": "t", "anecdote1": "a", "anecdote2": null}"#,
        ];
        for case in cases {
            assert_eq!(
                RewriteInput::from_request(&request(case)),
                Err(ValidationError::MissingFields),
                "case: {case}"
            );
        }
    }

    #[test]
    fn non_string_required_fields_are_missing() {
        let cases = [
            r#"{"text": "t", "anecdote1": "a", "anecdote2": false}"#,
            r#"{"text": 0, "anecdote1": "a", "anecdote2": "b"}"#,
            r#"{"text": "t", "anecdote1": 2024, "anecdote2": "b"}"#,
            r#"{"text": "t", "anecdote1": ["a"], "anecdote2": "b"}"#,
        ];
        for case in cases {
            assert_eq!(
                RewriteInput::from_request(&request(case)),
                Err(ValidationError::MissingFields),
                "case: {case}"
            );
        }
    }

    #[test]
    fn non_string_optional_fields_fall_back() {
        let input = RewriteInput::from_request(&request(
            r#"{"text": "t", "anecdote1": "a", "anecdote2": "b", "toneHint": true, "extraDetail": 7}"#,
        ))
        .unwrap();
        assert_eq!(input.tone_hint, DEFAULT_TONE_HINT);
        assert_eq!(input.extra_detail, None);
    }
}
