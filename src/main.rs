mod article;
mod client;
mod config;
mod constant;
mod error;
mod feed;
mod filter;
mod llm;
mod pipeline;
mod publish;
mod summarizer;
#[cfg(test)]
mod test_utils;

use anyhow::Result;

use crate::config::Config;
use crate::pipeline::PipelineBuilder;

#[tokio::main]
async fn main() -> Result<()> {
    setup_env_and_tracing();

    // Missing credentials end the run before any request is made.
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("ERROR: {}", e);
            return Ok(());
        }
    };

    let pipeline = PipelineBuilder::from_config(&config).build()?;
    let summary = pipeline.run_once().await;
    tracing::debug!(
        "Run summary: {}/{} sources ok, {} fetched, {} relevant, generated: {} ({:?}), published: {}",
        summary.sources - summary.failed_sources,
        summary.sources,
        summary.fetched,
        summary.relevant,
        summary.generated,
        summary.summary_error,
        summary.published
    );

    Ok(())
}

pub fn setup_env_and_tracing() {
    dotenv::dotenv().ok();
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
