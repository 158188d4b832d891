pub mod config;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod pipeline;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::AppError;
pub use pipeline::{PipelineError, PipelineStage, RewriteOutput, RewritePipeline, RewriteSettings};
pub use server::{app_config, cors, run_server};
pub use state::AppState;
