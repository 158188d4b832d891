//! Prompt text for each completion pass.

use crate::input::RewriteInput;

/// Full disclosure returned with every multi-pass rewrite.
pub const DISCLOSURE: &str = "This text was refined with an automated assistant to add voice and clarity. For integrity, manually review and add your own edits before use; detectors like Turnitin value authentic input over perfection.";

/// Short disclosure returned by the single-pass rewrite.
pub const SHORT_DISCLOSURE: &str = "This text was refined with an automated assistant. Manually review and add your own edits for authenticity.";

fn fenced(text: &str) -> String {
    format!("Text:\n-----\n{}\n-----\n", text)
}

/// Pass 1: grammar and clarity cleanup of the raw input.
pub fn grammar_prompt(text: &str) -> String {
    format!(
        "You are a meticulous editor. Refine the text for grammar, clarity, and flow:\n\
         - Preserve all facts and named entities exactly.\n\
         - Make minimal changes; do not add new information.\n\
         - Output only the cleaned text.\n\n{}",
        fenced(text)
    )
}

fn personal_details(input: &RewriteInput) -> String {
    let mut details = format!(
        "Personal details to weave in naturally (use both subtly):\n1. \"{}\"\n2. \"{}\"\n",
        input.anecdote1, input.anecdote2
    );
    if let Some(extra) = &input.extra_detail {
        details.push_str(&format!("Additional context: \"{}\"\n", extra));
    }
    details.push_str("Do not invent anything else.\n");
    details
}

/// Pass 2: rewrite in a personal voice, folding in the anecdotes.
pub fn voice_prompt(input: &RewriteInput, text: &str) -> String {
    format!(
        "You are a creative writer mimicking human style. Rewrite the text to:\n\
         - Sound like a real person: vary sentence lengths, use contractions, add natural asides (e.g., \"honestly,\" \"you know\").\n\
         - Include subtle imperfections like informal phrasing or slight tangents.\n\
         - Preserve all facts and named entities.\n\
         - Incorporate the provided personal details naturally.\n\
         - Match the tone: {}.\n\
         - Output only the rewritten text.\n\n{}\n{}",
        input.tone_hint,
        personal_details(input),
        fenced(text)
    )
}

/// Pass 3: a final stylistic pass.
pub fn style_prompt(tone_hint: &str, text: &str) -> String {
    format!(
        "You are a human editor adding authentic flair. Refine the text to:\n\
         - Introduce mild human quirks: occasional informal words, varied pacing, or subtle opinion injections (without changing facts).\n\
         - Make it feel lived-in, like a draft from someone thinking aloud.\n\
         - Preserve all facts and named entities.\n\
         - Enhance the tone: {}.\n\
         - Output only the rewritten text.\n\n{}",
        tone_hint,
        fenced(text)
    )
}

/// Ask for five follow-up edits as a JSON array of strings.
pub fn suggestions_prompt(text: &str) -> String {
    format!(
        "You are an ethical editor. Suggest 5 concise ways the author can manually add authentic details or tweaks to this text (e.g., add opinions, fix typos).\n\
         Return a JSON array of 5 strings.\n{}",
        fenced(text)
    )
}

/// The combined prompt used by the single-pass rewrite.
pub fn single_pass_prompt(input: &RewriteInput) -> String {
    format!(
        "You are a human editor. Rewrite the text below to:\n\
         - Sound natural and human.\n\
         - Include these personal details subtly: \"{}\", \"{}\".\n\
         - Match the tone: {}.\n\
         - Include additional context if provided: \"{}\".\n\
         - Output only the rewritten text.\n\n{}",
        input.anecdote1,
        input.anecdote2,
        input.tone_hint,
        input.extra_detail.as_deref().unwrap_or_default(),
        fenced(&input.text)
    )
}
