pub mod imperfection;
pub mod input;
pub mod prompts;
pub mod sanitize;
pub mod settings;
pub mod splitter;
pub mod suggestions;
pub mod texture;

pub use imperfection::add_imperfections;
pub use input::{RewriteInput, RewriteRequest, ValidationError, DEFAULT_TONE_HINT};
pub use sanitize::{sanitize, sanitize_value, MAX_INPUT_CHARS};
pub use settings::TransformSettings;
pub use splitter::split_long_sentences;
pub use suggestions::{
    fallback_suggestions, parse_suggestions, suggestions_or_fallback, SuggestionParseError,
    Suggestions, FALLBACK_SUGGESTIONS, SUGGESTION_COUNT,
};
pub use texture::{add_texture, TextureProfile};
