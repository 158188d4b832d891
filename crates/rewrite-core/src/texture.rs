//! Word swaps, contractions and filler phrases that loosen up model output.

use lazy_static::lazy_static;
use rand::seq::SliceRandom;
use rand::Rng;
use regex::{Captures, NoExpand, Regex};

use crate::settings::TransformSettings;

const FILLERS: &[&str] = &["you know,", "like,", "honestly,", "by the way,"];

/// Which rule set [`add_texture`] applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureProfile {
    /// Every swap rule, contractions and the filler pass.
    Full,
    /// Only the connective swaps; no contractions, no fillers.
    Light,
}

struct SwapRule {
    pattern: Regex,
    candidates: &'static [&'static str],
}

impl SwapRule {
    fn new(pattern: &str, candidates: &'static [&'static str]) -> Self {
        Self {
            pattern: Regex::new(pattern).expect("Failed to compile texture pattern"),
            candidates,
        }
    }

    fn apply<R: Rng + ?Sized>(&self, text: &str, rng: &mut R) -> String {
        self.pattern
            .replace_all(text, |_: &Captures| {
                self.candidates.choose(&mut *rng).copied().unwrap_or_default()
            })
            .into_owned()
    }
}

lazy_static! {
    static ref CONNECTIVE_RULES: Vec<SwapRule> = vec![
        SwapRule::new(
            r"\bHowever\b",
            &["That said", "But", "On the flip side", "Though"]
        ),
        SwapRule::new(
            r"\bMoreover\b",
            &["Also", "Plus", "And yeah", "What's more"]
        ),
        SwapRule::new(r"\bin order to\b", &["to", "so I can", "just to"]),
        SwapRule::new(
            r"\b[Ii]t is important to\b",
            &["You should", "It's key to", "I'd say it's worth"]
        ),
    ];
    static ref CASUAL_RULES: Vec<SwapRule> = vec![
        SwapRule::new(r"\butilize\b", &["use", "tap into", "go with", "make use of"]),
        SwapRule::new(r"\bthe\b", &["that", "the", "a"]),
    ];
    static ref CONTRACTIONS: Vec<(Regex, &'static str)> = [
        (r"\bdo not\b", "don't"),
        (r"\bis not\b", "isn't"),
        (r"\bI am\b", "I'm"),
    ]
    .into_iter()
    .map(|(pattern, replacement)| {
        (
            Regex::new(pattern).expect("Failed to compile contraction pattern"),
            replacement,
        )
    })
    .collect();
}

/// Returns true with probability `p`. Out-of-range values saturate.
pub(crate) fn chance<R: Rng + ?Sized>(rng: &mut R, p: f64) -> bool {
    if p.is_nan() || p <= 0.0 {
        false
    } else if p >= 1.0 {
        true
    } else {
        rng.gen_bool(p)
    }
}

/// Apply the texture rules of `profile` to `text`.
///
/// Every match of a swap rule is replaced by a candidate drawn uniformly from
/// `rng`. Text without matches passes through unchanged apart from fillers.
pub fn add_texture<R: Rng + ?Sized>(
    text: &str,
    profile: TextureProfile,
    settings: &TransformSettings,
    rng: &mut R,
) -> String {
    let mut result = text.to_string();

    for rule in CONNECTIVE_RULES.iter() {
        result = rule.apply(&result, rng);
    }

    if profile == TextureProfile::Light {
        return result;
    }

    for rule in CASUAL_RULES.iter() {
        result = rule.apply(&result, rng);
    }

    for (pattern, replacement) in CONTRACTIONS.iter() {
        result = pattern.replace_all(&result, NoExpand(replacement)).into_owned();
    }

    if chance(rng, settings.filler_pass_probability) {
        result = insert_fillers(&result, settings.filler_sentence_probability, rng);
    }

    result
}

fn insert_fillers<R: Rng + ?Sized>(text: &str, per_sentence: f64, rng: &mut R) -> String {
    text.split(". ")
        .map(|sentence| {
            if chance(&mut *rng, per_sentence) {
                let filler = FILLERS.choose(&mut *rng).copied().unwrap_or_default();
                format!("{} {}", filler, sentence)
            } else {
                sentence.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(". ")
}
