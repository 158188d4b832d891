//! The rewrite state machine:
//! validate → grammar pass → texture → voice pass → style pass → post-process → suggest.
//!
//! Validation happens before a pipeline is built (see [`RewriteInput::from_request`]),
//! so everything here starts from clean input.

use std::fmt;
use std::time::Duration;

use rand::Rng;
use rewrite_core::prompts::{self, DISCLOSURE, SHORT_DISCLOSURE};
use rewrite_core::{
    add_imperfections, add_texture, fallback_suggestions, split_long_sentences,
    suggestions_or_fallback, RewriteInput, Suggestions, TextureProfile, TransformSettings,
};
use rewrite_llm::{CompletionClient, CompletionParams, LLMError};
use serde::Serialize;
use thiserror::Error;

pub const GRAMMAR_PARAMS: CompletionParams = CompletionParams::new(0.4, 2000);
pub const VOICE_PARAMS: CompletionParams =
    CompletionParams::new(1.0, 2000).with_penalties(0.8, 0.6);
pub const STYLE_PARAMS: CompletionParams =
    CompletionParams::new(1.1, 2000).with_penalties(0.9, 0.7);
pub const SUGGESTION_PARAMS: CompletionParams = CompletionParams::new(0.9, 300);
pub const SINGLE_PASS_PARAMS: CompletionParams = CompletionParams::new(1.0, 2000);

pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStage {
    GrammarPass,
    Texture,
    VoicePass,
    StylePass,
    PostProcess,
    Suggest,
    SinglePass,
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PipelineStage::GrammarPass => "grammar pass",
            PipelineStage::Texture => "texture",
            PipelineStage::VoicePass => "voice pass",
            PipelineStage::StylePass => "style pass",
            PipelineStage::PostProcess => "post-processing",
            PipelineStage::Suggest => "suggestions",
            PipelineStage::SinglePass => "single pass",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("{stage} failed: {source}")]
    Upstream {
        stage: PipelineStage,
        #[source]
        source: LLMError,
    },

    #[error("{stage} timed out after {timeout:?}")]
    Timeout {
        stage: PipelineStage,
        timeout: Duration,
    },

    #[error("{stage} returned no content")]
    EmptyCompletion { stage: PipelineStage },
}

impl PipelineError {
    pub fn stage(&self) -> PipelineStage {
        match self {
            PipelineError::Upstream { stage, .. }
            | PipelineError::Timeout { stage, .. }
            | PipelineError::EmptyCompletion { stage } => *stage,
        }
    }
}

/// Knobs shared by every request.
#[derive(Debug, Clone, PartialEq)]
pub struct RewriteSettings {
    pub transforms: TransformSettings,
    /// Upper bound for each completion call.
    pub request_timeout: Duration,
    /// Fixed seed for the per-request RNG; entropy when `None`.
    pub rng_seed: Option<u64>,
}

impl Default for RewriteSettings {
    fn default() -> Self {
        Self {
            transforms: TransformSettings::default(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            rng_seed: None,
        }
    }
}

/// Successful response body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RewriteOutput {
    pub rewritten: String,
    pub suggestions: Vec<String>,
    pub disclosure: String,
}

pub struct RewritePipeline<'a> {
    client: &'a dyn CompletionClient,
    settings: &'a RewriteSettings,
}

impl<'a> RewritePipeline<'a> {
    pub fn new(client: &'a dyn CompletionClient, settings: &'a RewriteSettings) -> Self {
        Self { client, settings }
    }

    /// Run the three-pass rewrite followed by the best-effort suggestions call.
    pub async fn run<R: Rng + ?Sized>(
        &self,
        input: &RewriteInput,
        rng: &mut R,
    ) -> Result<RewriteOutput, PipelineError> {
        let transforms = &self.settings.transforms;

        let cleaned = self
            .critical(
                PipelineStage::GrammarPass,
                &prompts::grammar_prompt(&input.text),
                &GRAMMAR_PARAMS,
            )
            .await?;

        log::debug!("Entering {}", PipelineStage::Texture);
        let textured = add_texture(&cleaned, TextureProfile::Full, transforms, rng);

        let voiced = self
            .critical(
                PipelineStage::VoicePass,
                &prompts::voice_prompt(input, &textured),
                &VOICE_PARAMS,
            )
            .await?;

        let styled = self
            .critical(
                PipelineStage::StylePass,
                &prompts::style_prompt(&input.tone_hint, &voiced),
                &STYLE_PARAMS,
            )
            .await?;

        log::debug!("Entering {}", PipelineStage::PostProcess);
        let rewritten = post_process(&styled, transforms, rng);

        let suggestions = self.suggest(&rewritten).await;

        Ok(RewriteOutput {
            rewritten,
            suggestions: suggestions.into_iter().collect(),
            disclosure: DISCLOSURE.to_string(),
        })
    }

    /// One combined completion call with light texture and the static suggestions.
    pub async fn run_single_pass<R: Rng + ?Sized>(
        &self,
        input: &RewriteInput,
        rng: &mut R,
    ) -> Result<RewriteOutput, PipelineError> {
        let draft = self
            .critical(
                PipelineStage::SinglePass,
                &prompts::single_pass_prompt(input),
                &SINGLE_PASS_PARAMS,
            )
            .await?;

        let rewritten = add_texture(
            &draft,
            TextureProfile::Light,
            &self.settings.transforms,
            rng,
        );

        Ok(RewriteOutput {
            rewritten,
            suggestions: fallback_suggestions().into_iter().collect(),
            disclosure: SHORT_DISCLOSURE.to_string(),
        })
    }

    async fn call(
        &self,
        stage: PipelineStage,
        prompt: &str,
        params: &CompletionParams,
    ) -> Result<String, PipelineError> {
        log::debug!("Entering {}", stage);
        let timeout = self.settings.request_timeout;

        match tokio::time::timeout(timeout, self.client.complete(prompt, params)).await {
            Ok(Ok(text)) => Ok(text),
            Ok(Err(source)) if source.is_timeout() => Err(PipelineError::Timeout { stage, timeout }),
            Ok(Err(source)) => Err(PipelineError::Upstream { stage, source }),
            Err(_) => Err(PipelineError::Timeout { stage, timeout }),
        }
    }

    /// A pass the rewrite cannot do without: failures and empty output abort the request.
    async fn critical(
        &self,
        stage: PipelineStage,
        prompt: &str,
        params: &CompletionParams,
    ) -> Result<String, PipelineError> {
        let text = self.call(stage, prompt, params).await?;
        if text.trim().is_empty() {
            return Err(PipelineError::EmptyCompletion { stage });
        }
        Ok(text)
    }

    async fn suggest(&self, text: &str) -> Suggestions {
        match self
            .call(
                PipelineStage::Suggest,
                &prompts::suggestions_prompt(text),
                &SUGGESTION_PARAMS,
            )
            .await
        {
            Ok(raw) => suggestions_or_fallback(&raw),
            Err(e) => {
                log::warn!("Using fallback suggestions: {}", e);
                fallback_suggestions()
            }
        }
    }
}

/// Texture, then sentence splitting, then typos.
pub fn post_process<R: Rng + ?Sized>(
    text: &str,
    transforms: &TransformSettings,
    rng: &mut R,
) -> String {
    let textured = add_texture(text, TextureProfile::Full, transforms, rng);
    let split = split_long_sentences(&textured);
    add_imperfections(&split, transforms, rng)
}
