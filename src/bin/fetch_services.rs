use clap::Parser;
use service_portal::utils::{logger, validation::Validate};
use service_portal::{FetchConfig, LocalStorage, RenderEngine, ServicesPipeline};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = FetchConfig::parse();

    logger::init_cli_logger(config.verbose);

    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let storage = LocalStorage::new(config.output_path.clone());
    let pipeline = ServicesPipeline::new(storage, config)?;
    let engine = RenderEngine::new(pipeline);

    match engine.run().await {
        Ok(location) => {
            println!("✅ Service list rendered");
            println!("📁 Container updated: {}", location);
        }
        Err(e) => {
            tracing::error!(
                "❌ Fetch failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());

            std::process::exit(e.exit_code());
        }
    }

    Ok(())
}
