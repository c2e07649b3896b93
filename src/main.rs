// compliance-docgen/src/main.rs

use anyhow::Context;
use compliance_docgen::config::Config;
use compliance_docgen::pipeline::DocumentPipeline;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Print to stderr BEFORE logging initialization to catch early failures
    eprintln!("Starting compliance-docgen...");

    // Load configuration
    let config = match Config::load() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("FATAL: Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.service.log_level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().json())
        .init();

    info!(
        service = %config.service.name,
        version = env!("CARGO_PKG_VERSION"),
        "Starting compliance document generator"
    );

    let Some(request_path) = std::env::args().nth(1) else {
        eprintln!("Usage: compliance-docgen <request.json>");
        std::process::exit(2);
    };

    let raw = tokio::fs::read(&request_path)
        .await
        .with_context(|| format!("Failed to read request file {}", request_path))?;

    let pipeline = DocumentPipeline::new(&config);
    let response = pipeline.process_raw(&raw).await;

    println!("{}", serde_json::to_string_pretty(&response)?);

    if response.status != "success" {
        std::process::exit(1);
    }
    Ok(())
}
