use anyhow::Context;
use clap::Parser;

use rewrite_server::logging::init_logging;
use rewrite_server::{run_server, ServerConfig};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = ServerConfig::parse();

    if config.log_level.is_some() {
        // RUST_LOG is set, let env_logger read it directly
        env_logger::init();
    } else {
        init_logging(config.debug);
    }

    if let Some(field) = config.transform_settings().invalid_field() {
        anyhow::bail!("{} must be between 0 and 1", field);
    }

    log::info!("LLM Configuration:");
    log::info!("  Base URL: {}", config.llm_base_url);
    log::info!("  Model: {}", config.model);
    log::info!("  Timeout: {}s", config.request_timeout_secs);

    if config.debug {
        log::debug!("Transform settings: {:?}", config.transform_settings());
        log::debug!("RNG seed: {:?}", config.rng_seed);
    }

    run_server(config).await.context("rewrite server exited with error")
}
