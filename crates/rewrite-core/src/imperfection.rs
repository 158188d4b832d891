//! Occasional common-word typos.

use lazy_static::lazy_static;
use rand::Rng;
use regex::{NoExpand, Regex};

use crate::settings::TransformSettings;
use crate::texture::chance;

const TYPOS: &[(&str, &str)] = &[("the", "teh"), ("and", "adn"), ("to", "too"), ("it's", "its")];

lazy_static! {
    static ref TYPO_PATTERNS: Vec<(Regex, &'static str)> = TYPOS
        .iter()
        .map(|(from, to)| {
            let pattern = format!(r"\b{}\b", regex::escape(from));
            (
                Regex::new(&pattern).expect("Failed to compile typo pattern"),
                *to,
            )
        })
        .collect();
}

/// Maybe swap a few common words for their usual misspellings.
///
/// The whole pass is skipped unless `imperfection_pass_probability` hits.
/// Each table entry is then applied with `typo_probability`, replacing every
/// whole-word, case-sensitive occurrence.
pub fn add_imperfections<R: Rng + ?Sized>(
    text: &str,
    settings: &TransformSettings,
    rng: &mut R,
) -> String {
    if !chance(rng, settings.imperfection_pass_probability) {
        return text.to_string();
    }

    let mut result = text.to_string();
    for (pattern, typo) in TYPO_PATTERNS.iter() {
        if chance(rng, settings.typo_probability) {
            result = pattern.replace_all(&result, NoExpand(typo)).into_owned();
        }
    }
    result
}
