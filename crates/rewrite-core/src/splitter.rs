//! Breaks up overlong sentences.

use lazy_static::lazy_static;
use regex::Regex;

/// Sentences longer than this (in characters) are split or truncated.
pub const MAX_SENTENCE_CHARS: usize = 120;
/// Only commas at or before this character index are split points.
pub const COMMA_SEARCH_LIMIT: usize = 80;
/// A comma must sit past this index to be used as a split point.
pub const MIN_SPLIT_INDEX: usize = 20;
/// Length kept when a sentence is truncated instead of split.
pub const TRUNCATE_AT: usize = 90;

const ELLIPSIS: &str = "...";

lazy_static! {
    static ref SENTENCE_BOUNDARY: Regex =
        Regex::new(r"\.\s+").expect("Failed to compile sentence boundary pattern");
}

/// Split `text` into sentences, shorten the long ones and rejoin with single spaces.
///
/// A long sentence is cut at its last comma within the first
/// [`COMMA_SEARCH_LIMIT`] characters. Without a usable comma it is truncated to
/// [`TRUNCATE_AT`] characters plus an ellipsis, dropping the rest.
pub fn split_long_sentences(text: &str) -> String {
    sentences(text)
        .into_iter()
        .map(shorten)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Sentences end at a period followed by whitespace; the period stays with its sentence.
fn sentences(text: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    for boundary in SENTENCE_BOUNDARY.find_iter(text) {
        // `boundary.start()` is the period, which is a single byte.
        parts.push(&text[start..boundary.start() + 1]);
        start = boundary.end();
    }
    parts.push(&text[start..]);
    parts
}

fn shorten(sentence: &str) -> String {
    let chars: Vec<char> = sentence.chars().collect();
    if chars.len() <= MAX_SENTENCE_CHARS {
        return sentence.to_string();
    }

    let search_end = chars.len().min(COMMA_SEARCH_LIMIT + 1);
    let comma = chars[..search_end].iter().rposition(|c| *c == ',');

    match comma {
        Some(idx) if idx > MIN_SPLIT_INDEX => {
            let head: String = chars[..idx].iter().collect();
            let tail: String = chars[idx + 1..].iter().collect();
            format!("{}. {}", head, tail.trim())
        }
        _ => {
            let mut truncated: String = chars[..TRUNCATE_AT].iter().collect();
            truncated.push_str(ELLIPSIS);
            truncated
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_rejoined_with_single_spaces() {
        assert_eq!(
            split_long_sentences("One.  Two.\nThree."),
            "One. Two. Three."
        );
    }

    #[test]
    fn periods_without_whitespace_do_not_split() {
        assert_eq!(split_long_sentences("Version 1.2 is out."), "Version 1.2 is out.");
    }

    #[test]
    fn long_sentence_splits_at_last_comma_before_limit() {
        let head = format!("{},", "a".repeat(30));
        let middle = format!(" {},", "b".repeat(40));
        let tail = format!(" {}.", "c".repeat(60));
        let sentence = format!("{head}{middle}{tail}");
        assert!(sentence.chars().count() > MAX_SENTENCE_CHARS);

        let out = split_long_sentences(&sentence);

        // Second comma sits at index 72, inside the search window.
        let expected = format!("{} {}. {}.", "a".repeat(30) + ",", "b".repeat(40), "c".repeat(60));
        assert_eq!(out, expected);
    }

    #[test]
    fn early_comma_falls_back_to_truncation() {
        let sentence = format!("Short, {}.", "x".repeat(150));
        let out = split_long_sentences(&sentence);

        assert_eq!(out.chars().count(), TRUNCATE_AT + ELLIPSIS.len());
        assert!(out.ends_with("..."));
        assert!(out.starts_with("Short, xxx"));
    }

    #[test]
    fn comma_past_search_limit_is_ignored() {
        let sentence = format!("{}, {}.", "y".repeat(100), "z".repeat(40));
        let out = split_long_sentences(&sentence);
        assert_eq!(out, format!("{}...", "y".repeat(TRUNCATE_AT)));
    }

    #[test]
    fn truncated_fragments_never_exceed_93_chars() {
        let sentences = [
            "w".repeat(500),
            format!("{}.", "q ".repeat(200)),
            format!("Hi, {}", "é".repeat(300)),
            format!("{}, {}", "r".repeat(95), "s".repeat(95)),
        ];

        for sentence in &sentences {
            let out = shorten(sentence);
            assert!(out.ends_with("..."));
            assert!(out.chars().count() <= 93, "{} chars", out.chars().count());
        }
    }

    #[test]
    fn exactly_threshold_length_is_kept() {
        let sentence = format!("{}.", "k".repeat(MAX_SENTENCE_CHARS - 1));
        assert_eq!(split_long_sentences(&sentence), sentence);
    }

    #[test]
    fn empty_text_stays_empty() {
        assert_eq!(split_long_sentences(""), "");
    }
}
