//! Adcraft CLI binary.
//!
//! - Generate ad copy from a prompt
//! - Synthesize matching media
//! - Publish to the configured platform account

use adcraft::{AdcraftConfig, ObservabilityConfig, init_observability};
use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, handle_command};

    let cli = Cli::parse();

    let mut observability = ObservabilityConfig::new().with_json_logs(cli.json_logs);
    if cli.verbose {
        observability = observability.with_log_level("debug");
    }
    init_observability(observability)?;

    let config = AdcraftConfig::load(cli.config.as_deref())?;
    tracing::debug!(
        llm_model = %config.llm.model,
        media_provider = %config.media.provider,
        "Configuration loaded"
    );

    handle_command(cli.command, config).await
}
