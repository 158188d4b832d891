use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;
use rewrite_llm::{CompletionClient, OpenAIClient};

use crate::config::ServerConfig;
use crate::pipeline::{RewritePipeline, RewriteSettings};

pub struct AppState {
    pub llm: Arc<dyn CompletionClient>,
    pub settings: RewriteSettings,
}

impl AppState {
    pub fn new(llm: Arc<dyn CompletionClient>, settings: RewriteSettings) -> Self {
        Self { llm, settings }
    }

    pub fn from_config(config: &ServerConfig) -> Self {
        log::info!(
            "Creating completion client with base URL: {} and model: {}",
            config.llm_base_url,
            config.model
        );
        let client = OpenAIClient::new(config.api_key.clone())
            .with_base_url(config.llm_base_url.clone())
            .with_model(config.model.clone())
            .with_timeout(config.request_timeout());

        Self::new(Arc::new(client), config.rewrite_settings())
    }

    pub fn pipeline(&self) -> RewritePipeline<'_> {
        RewritePipeline::new(self.llm.as_ref(), &self.settings)
    }

    /// A fresh RNG for one request; reproducible when a seed is configured.
    pub fn request_rng(&self) -> StdRng {
        match self.settings.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}
