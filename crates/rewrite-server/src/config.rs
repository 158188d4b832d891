//! Command-line and environment configuration.
//!
//! Every flag can also be set through the environment variable named next to it.
//! A `.env` file in the working directory is loaded before parsing.

use std::time::Duration;

use clap::Parser;
use rewrite_core::settings::{
    FILLER_PASS_PROBABILITY, FILLER_SENTENCE_PROBABILITY, IMPERFECTION_PASS_PROBABILITY,
    TYPO_PROBABILITY,
};
use rewrite_core::TransformSettings;

use crate::pipeline::RewriteSettings;

#[derive(Parser, Debug, Clone)]
#[command(name = "rewrite-server")]
#[command(about = "Multi-pass text rewrite HTTP service")]
#[command(version)]
pub struct ServerConfig {
    /// Enable debug logging
    #[arg(long, env = "DEBUG", default_value = "false")]
    pub debug: bool,

    /// Log filter (overrides the debug flag)
    #[arg(long, env = "RUST_LOG")]
    pub log_level: Option<String>,

    /// Address to bind
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Server port
    #[arg(long, env = "PORT", default_value = "8080")]
    pub port: u16,

    /// Credential for the completion service
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub api_key: String,

    /// Completion service base URL
    #[arg(long, env = "LLM_BASE_URL", default_value = rewrite_llm::openai::DEFAULT_BASE_URL)]
    pub llm_base_url: String,

    /// Completion model name
    #[arg(long, env = "LLM_MODEL", default_value = rewrite_llm::openai::DEFAULT_MODEL)]
    pub model: String,

    /// Upper bound, in seconds, for each completion call
    #[arg(long, env = "LLM_TIMEOUT_SECS", default_value = "60", value_parser = clap::value_parser!(u64).range(1..))]
    pub request_timeout_secs: u64,

    /// Seed for the transform RNG; random per request when unset
    #[arg(long, env = "REWRITE_RNG_SEED")]
    pub rng_seed: Option<u64>,

    /// Chance that filler phrases are considered at all
    #[arg(long, env = "REWRITE_FILLER_PASS_PROBABILITY", default_value_t = FILLER_PASS_PROBABILITY, value_parser = parse_probability)]
    pub filler_pass_probability: f64,

    /// Chance, per sentence, of a filler phrase
    #[arg(long, env = "REWRITE_FILLER_SENTENCE_PROBABILITY", default_value_t = FILLER_SENTENCE_PROBABILITY, value_parser = parse_probability)]
    pub filler_sentence_probability: f64,

    /// Chance that typos are considered at all
    #[arg(long, env = "REWRITE_IMPERFECTION_PASS_PROBABILITY", default_value_t = IMPERFECTION_PASS_PROBABILITY, value_parser = parse_probability)]
    pub imperfection_pass_probability: f64,

    /// Chance, per typo table entry, of applying it
    #[arg(long, env = "REWRITE_TYPO_PROBABILITY", default_value_t = TYPO_PROBABILITY, value_parser = parse_probability)]
    pub typo_probability: f64,
}

fn parse_probability(raw: &str) -> Result<f64, String> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|e| format!("`{}` is not a number: {}", raw, e))?;
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(format!("`{}` is not between 0 and 1", raw))
    }
}

impl ServerConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn transform_settings(&self) -> TransformSettings {
        TransformSettings {
            filler_pass_probability: self.filler_pass_probability,
            filler_sentence_probability: self.filler_sentence_probability,
            imperfection_pass_probability: self.imperfection_pass_probability,
            typo_probability: self.typo_probability,
        }
    }

    pub fn rewrite_settings(&self) -> RewriteSettings {
        RewriteSettings {
            transforms: self.transform_settings(),
            request_timeout: self.request_timeout(),
            rng_seed: self.rng_seed,
        }
    }
}
